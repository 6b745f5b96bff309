use crate::arena::Arena;
use crate::error::ArenaError;
use crate::model::Pokemon;
use crate::trainer::Trainer;
use rand::Rng;
use std::io::{BufRead, Write};

/// Reads one line, without its line terminator. `None` on end of input.
fn read_line<R: BufRead + ?Sized>(input: &mut R) -> Result<Option<String>, ArenaError> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    let trimmed = buf.trim_end_matches(['\n', '\r']).len();
    buf.truncate(trimmed);
    Ok(Some(buf))
}

fn prompt<R, W>(input: &mut R, out: &mut W, text: &str) -> Result<Option<String>, ArenaError>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    write!(out, "{text}")?;
    out.flush()?;
    read_line(input)
}

/// Prompts once, then skips blank lines until one carries a token.
/// `None` on end of input.
fn prompt_token<R, W>(input: &mut R, out: &mut W, text: &str) -> Result<Option<String>, ArenaError>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    let mut line = prompt(input, out, text)?;
    while let Some(current) = &line {
        if let Some(token) = current.split_whitespace().next() {
            return Ok(Some(token.to_string()));
        }
        line = read_line(input)?;
    }
    Ok(None)
}

pub fn wants_restart(answer: &str) -> bool {
    let token = answer.split_whitespace().next().unwrap_or("");
    token == "y" || token == "Y" || token.eq_ignore_ascii_case("yes")
}

/// Runs the interactive console session: asks for both trainer names, hands
/// each the given lineup and keeps playing rounds until the operator declines
/// to restart. Returns the trainers so callers can inspect them afterwards.
pub fn run_session<R, W, G>(
    input: &mut R,
    out: &mut W,
    rng: &mut G,
    arena: &mut Arena,
    lineup_a: Vec<Pokemon>,
    lineup_b: Vec<Pokemon>,
) -> Result<(Trainer, Trainer), ArenaError>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
    G: Rng + ?Sized,
{
    let name_a = prompt(input, out, "Enter the name of Trainer 1: ")?.unwrap_or_default();
    let name_b = prompt(input, out, "Enter the name of Trainer 2: ")?.unwrap_or_default();
    writeln!(out)?;

    let challenger = Trainer::with_lineup(name_a, lineup_a)?;
    let opponent = Trainer::with_lineup(name_b, lineup_b)?;
    log::info!(
        "session started: {} ({} Pokemon) vs {} ({} Pokemon)",
        challenger.name(),
        challenger.num_pokeballs(),
        opponent.name(),
        opponent.num_pokeballs()
    );

    loop {
        arena.start_battle(&challenger, &opponent, rng, out)?;
        write!(out, "\n\n")?;
        arena.display_scoreboard(out)?;

        let answer = prompt_token(input, out, "Do you want to restart? (y/n): ")?;
        match answer {
            Some(answer) if wants_restart(&answer) => arena.reset_scoreboard(),
            _ => break,
        }
    }
    log::info!("session ended after {} rounds", arena.rounds_played());
    Ok((challenger, opponent))
}
