//! Main entry point for the terminal game.
//!
//! Loads the high score, builds a world from an optional seed and drives the
//! state machine from stdin: one line of input per tick.

use std::env;
use std::io::{self, BufRead, Write};

use log::{debug, info, warn};
use rand::Rng;

use desert_quest::config::persistence::{HIGH_SCORE_FILE, HIGH_SCORE_FILE_ENV, SEED_ENV};
use desert_quest::game::systems::print_screen;
use desert_quest::game::{Command, GameError, GameEvent, GameState, HeldKeys, Phase};
use desert_quest::persistence::{FileHighScoreStore, HighScoreStore};

/// Decode one input line: a line made only of w/s/a/d keys holds those
/// directions, `x` exits, `q` quits and any other text is a plain key press.
fn parse_command(line: &str) -> Command {
    let line = line.trim().to_lowercase();
    match line.as_str() {
        "q" | "quit" => Command::Quit,
        "x" | "esc" | "exit" => Command::Exit,
        _ if line.chars().all(|c| "wasd".contains(c)) => Command::Steer(HeldKeys {
            up: line.contains('w'),
            down: line.contains('s'),
            left: line.contains('a'),
            right: line.contains('d'),
        }),
        _ => Command::Begin,
    }
}

fn seed_from_env() -> u64 {
    match env::var(SEED_ENV).map(|raw| raw.parse::<u64>()) {
        Ok(Ok(seed)) => seed,
        Ok(Err(err)) => {
            warn!("Ignoring invalid {}: {}", SEED_ENV, err);
            rand::rng().random()
        }
        Err(_) => rand::rng().random(),
    }
}

fn main() -> Result<(), GameError> {
    // Initialize logger from environment variable.
    env_logger::init();

    let path = env::var(HIGH_SCORE_FILE_ENV).unwrap_or_else(|_| HIGH_SCORE_FILE.to_string());
    let store = FileHighScoreStore::new(path);
    let seed = seed_from_env();
    info!("Starting game with seed={} high_score_file={}", seed, store.path().display());

    let mut game = GameState::new(seed, store.load())?;
    print_screen(&game.snapshot());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    while game.phase != Phase::Exited {
        if game.phase == Phase::Playing {
            print!("Move (w/a/s/d, Enter to wait, q to quit): ");
        } else {
            print!("> ");
        }
        io::stdout().flush()?;

        // End of input behaves like closing the window.
        let command = match lines.next() {
            Some(line) => parse_command(&line?),
            None => Command::Quit,
        };

        match game.update(command) {
            Some(GameEvent::Finished { outcome, score, high_score }) => {
                info!("Game finished: {:?} score={} high_score={}", outcome, score, high_score);
                store.save(high_score)?;
            }
            Some(event) => debug!("Event: {:?}", event),
            None => {}
        }

        if log::log_enabled!(log::Level::Debug) {
            if let Ok(json) = serde_json::to_string(&game.snapshot()) {
                debug!("Snapshot: {}", json);
            }
        }
        print_screen(&game.snapshot());
    }

    Ok(())
}
