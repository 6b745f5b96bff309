pub mod arena;
pub mod battle;
pub mod battle_logger;
pub mod error;
pub mod model;
pub mod session;
pub mod simulate;
pub mod trainer;
pub mod types;

use crate::arena::{Arena, ResetPolicy};
use crate::model::{default_lineup, Pokemon, RostersFile};
use crate::trainer::Trainer;
use anyhow::Context;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct CliOptions {
    pub seed: Option<u64>,
    pub rosters_path: Option<PathBuf>,
    pub reset_policy: ResetPolicy,
    pub log_json: Option<PathBuf>,
    pub simulate: Option<u64>,
    pub output_path: Option<PathBuf>,
    pub verbose: bool,
    pub help: bool,
}

/// Parses command-line arguments (without the program name).
pub fn parse_args<I>(args: I) -> anyhow::Result<CliOptions>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = CliOptions::default();

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                let val = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--seed requires a number"))?;
                opts.seed = Some(val.parse()?);
            }
            "--rosters" => {
                opts.rosters_path = Some(args.next().map(PathBuf::from).ok_or_else(|| {
                    anyhow::anyhow!("--rosters requires a path (e.g. --rosters rosters.json)")
                })?);
            }
            "--keep-scoreboard" => opts.reset_policy = ResetPolicy::Keep,
            "--log-json" => {
                opts.log_json = Some(args.next().map(PathBuf::from).ok_or_else(|| {
                    anyhow::anyhow!("--log-json requires a path (e.g. --log-json log.json)")
                })?);
            }
            "--simulate" => {
                let val = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--simulate requires a number of rounds"))?;
                opts.simulate = Some(val.parse()?);
            }
            "--output" => {
                opts.output_path = Some(args.next().map(PathBuf::from).ok_or_else(|| {
                    anyhow::anyhow!("--output requires a path (e.g. --output tally.json)")
                })?);
            }
            "--verbose" | "-v" => opts.verbose = true,
            "--help" | "-h" => opts.help = true,
            other => return Err(anyhow::anyhow!("Unknown argument {other}")),
        }
    }
    Ok(opts)
}

pub fn load_rosters(path: &Path) -> anyhow::Result<(Vec<Pokemon>, Vec<Pokemon>)> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read rosters file at {}", path.display()))?;
    let parsed: RostersFile = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse JSON from {}", path.display()))?;
    let lineup = |entries: Vec<model::PokemonEntry>| -> Vec<Pokemon> {
        entries.into_iter().map(|e| e.into_pokemon()).collect()
    };
    let (a, b) = (lineup(parsed.trainer_a), lineup(parsed.trainer_b));
    log::info!(
        "loaded rosters from {}: {} and {} Pokemon",
        path.display(),
        a.len(),
        b.len()
    );
    Ok((a, b))
}

fn lineups(opts: &CliOptions) -> anyhow::Result<(Vec<Pokemon>, Vec<Pokemon>)> {
    match &opts.rosters_path {
        Some(path) => load_rosters(path),
        None => Ok((default_lineup(), default_lineup())),
    }
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    }
}

pub fn run(opts: CliOptions) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with_io(opts, &mut stdin.lock(), &mut stdout.lock())
}

/// Same as [`run`], with the console replaced by the given reader and writer.
pub fn run_with_io<R, W>(opts: CliOptions, input: &mut R, out: &mut W) -> anyhow::Result<()>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    let (lineup_a, lineup_b) = lineups(&opts)?;
    if let Some(rounds) = opts.simulate {
        return run_simulation(&opts, rounds, lineup_a, lineup_b, out);
    }

    let mut rng = make_rng(opts.seed);
    let mut arena = Arena::new(opts.reset_policy);
    session::run_session(input, out, &mut rng, &mut arena, lineup_a, lineup_b)?;

    if let Some(path) = &opts.log_json {
        write_log_json(&arena, path)?;
    }
    Ok(())
}

pub fn write_log_json(arena: &Arena, path: &Path) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&arena.logger().to_json())?;
    std::fs::write(path, json + "\n").with_context(|| format!("failed to write {}", path.display()))
}

/// Headless mode: the JSON summary goes to `--output` when given, else to `out`.
pub fn run_simulation<W: Write + ?Sized>(
    opts: &CliOptions,
    rounds: u64,
    lineup_a: Vec<Pokemon>,
    lineup_b: Vec<Pokemon>,
    out: &mut W,
) -> anyhow::Result<()> {
    if rounds == 0 {
        anyhow::bail!("--simulate must be > 0");
    }
    let seed = opts.seed.unwrap_or(0);
    let trainer_a = Trainer::with_lineup("Trainer 1", lineup_a)?;
    let trainer_b = Trainer::with_lineup("Trainer 2", lineup_b)?;
    let tally = simulate::simulate_rounds(&trainer_a, &trainer_b, rounds, seed)?;
    let report = simulate::report(&trainer_a, &trainer_b, seed, tally);
    let json = serde_json::to_string_pretty(&report)? + "\n";
    match &opts.output_path {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            writeln!(out, "Wrote {} simulated rounds to {}", rounds, path.display())?;
        }
        None => out.write_all(json.as_bytes())?,
    }
    Ok(())
}
