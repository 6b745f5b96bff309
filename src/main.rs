use pokeball_arena::{parse_args, run};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use std::env;

fn usage() -> ! {
    eprintln!(
        "Usage: cargo run --release -- [--seed SEED] [--rosters rosters.json] [--keep-scoreboard] \
[--log-json log.json] [--simulate N] [--output tally.json] [--verbose]"
    );
    std::process::exit(1);
}

fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let config = ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto)?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let opts = parse_args(env::args().skip(1))?;
    if opts.help {
        usage();
    }
    init_logging(opts.verbose)?;
    run(opts)
}
