//! Console front end: play the counter-pair game against the solver.

use std::io::{self, BufRead, Write};

use pounter::{Challenge, ChallengeConfig, Error, GameEnd, PounterMove, Result, Side};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let mut challenge = Challenge::solve(ChallengeConfig::default());
    let stats = challenge.solver().stats();
    info!(
        nodes = stats.node_count,
        wins = stats.wins,
        losses = stats.losses,
        ties = stats.ties,
        proven_draws = stats.proven_draws,
        "solver ready"
    );

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        game_loop(&mut challenge, &mut input)?;

        let answer = prompt(&mut input, "Another game? [y/n]: ")?;
        if !answer.trim().eq_ignore_ascii_case("y") {
            break;
        }
    }

    Ok(())
}

fn game_loop(challenge: &mut Challenge, input: &mut impl BufRead) -> Result<()> {
    let ai_first = loop {
        let line = prompt(input, "Decide who goes first (0 for player, 1 for AI): ")?;
        match line.trim() {
            "0" => break false,
            "1" => break true,
            _ => println!("Please enter 0 or 1."),
        }
    };
    challenge.reset(!ai_first);

    let end = loop {
        if let Some(end) = challenge.is_over()? {
            break end;
        }

        let status = *challenge.status();
        println!(
            "AI\t[0]: {}\t[1]: {}\t{}",
            status.ai.smaller(),
            status.ai.larger(),
            challenge.current_outcome()?
        );
        println!("Player\t[0]: {}\t[1]: {}", status.player.smaller(), status.player.larger());

        match status.turn {
            Side::Player => {
                let line = prompt(input, "Your turn: ")?;
                let accepted = match parse_move(&line) {
                    Ok(mv) => challenge.make_player_move(mv)?,
                    Err(_) => false,
                };
                if !accepted {
                    println!("Invalid move. Try again.");
                }
            }
            Side::Ai => match challenge.make_ai_move()? {
                Some(mv) => println!("AI Move: {mv}"),
                None => println!("AI has no legal move."),
            },
        }
        println!("-----------------------------");
    };

    match end {
        GameEnd::Winner(Side::Player) => println!("Congratulations, you win!"),
        GameEnd::Winner(Side::Ai) => println!("AI wins! Better luck next time."),
        GameEnd::Deadlock => println!("AI thinks we are in a deadlock."),
    }
    Ok(())
}

/// Parse two selectors, e.g. `0 1`.
fn parse_move(line: &str) -> Result<PounterMove> {
    let invalid = |reason: &str| Error::InvalidInput {
        input: line.trim().to_string(),
        reason: reason.to_string(),
    };
    let selectors: Vec<u8> = line
        .split_whitespace()
        .map(|token| token.parse::<u8>())
        .collect::<std::result::Result<_, _>>()
        .map_err(|_| invalid("selectors must be 0 or 1"))?;
    match selectors.as_slice() {
        [target, source] => {
            PounterMove::from_indices(*target, *source).ok_or_else(|| invalid("selectors must be 0 or 1"))
        }
        _ => Err(invalid("expected two selectors")),
    }
}

fn prompt(input: &mut impl BufRead, message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush().map_err(|source| Error::Io {
        operation: "flush stdout".to_string(),
        source,
    })?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(|source| Error::Io {
        operation: "read stdin".to_string(),
        source,
    })?;
    if read == 0 {
        return Err(Error::Io {
            operation: "read stdin".to_string(),
            source: io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"),
        });
    }
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pounter::Slot;

    #[test]
    fn test_parse_move() {
        assert_eq!(
            parse_move("1 0\n").unwrap(),
            PounterMove::new(Slot::Larger, Slot::Smaller)
        );
        assert!(parse_move("1").is_err());
        assert!(parse_move("0 2").is_err());
        assert!(parse_move("a b").is_err());
    }
}
