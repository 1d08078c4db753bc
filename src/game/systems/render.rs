//! Game rendering system (terminal).
//!
//! Text rendering of a `Snapshot` for the terminal driver: the board, the HUD
//! and the intro / ending screens.

use crate::config::game::TICKS_PER_SECOND;
use crate::game::state::Snapshot;
use crate::game::types::{Cell, Phase, Position};

const INTRO_LINES: [&str; 5] = [
    "As a Turkmen warrior, seek the ancient artifact hidden in Karakum.",
    "Collect water jugs to survive and activate the artifact.",
    "Beware of guardian scorpions!",
    "",
    "Use WASD to move. Press any key to begin.",
];

/// Build the board as text, one line per grid row.
pub fn render_board(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    for (y, row) in snapshot.cells.iter().enumerate() {
        for (x, cell) in row.iter().enumerate() {
            let pos = Position::new(x as i32, y as i32);

            // Player first, then scorpions, artifact and water jugs.
            let symbol = if snapshot.player.pos == pos {
                if snapshot.player.invulnerable { "p" } else { "P" }
            } else if snapshot.hazards.contains(&pos) {
                "S"
            } else if snapshot.goal.active && snapshot.goal.pos == pos {
                "A"
            } else if snapshot.pickups.iter().any(|j| !j.consumed && j.pos == pos) {
                "w"
            } else {
                match cell {
                    Cell::Open => ".",
                    Cell::Blocked => "#",
                }
            };
            out.push_str(symbol);
        }
        out.push('\n');
    }
    out
}

/// HUD lines shown above the board.
pub fn render_hud(snapshot: &Snapshot) -> String {
    let mut out = format!(
        "Spirit: {}  Score: {}  High Score: {}  Jugs left: {}  Time: {}s",
        snapshot.player.vitality,
        snapshot.player.score,
        snapshot.high_score,
        snapshot.jugs_left,
        snapshot.tick / TICKS_PER_SECOND
    );
    if snapshot.goal.active {
        out.push_str("\nArtifact Active! Find the Purple Artifact!");
    }
    out
}

/// Full screen for the current phase.
pub fn render_screen(snapshot: &Snapshot) -> String {
    match snapshot.phase {
        Phase::Intro => INTRO_LINES.join("\n"),
        Phase::Playing => format!("{}\n{}", render_hud(snapshot), render_board(snapshot)),
        Phase::GameOver => ending(snapshot, "Your journey ends in the shifting sands..."),
        Phase::Victory => ending(snapshot, "You claimed the ancient artifact! Glory to Turkmen!"),
        Phase::Exited => String::new(),
    }
}

fn ending(snapshot: &Snapshot, message: &str) -> String {
    format!(
        "{}\nFinal Score: {}\nPress X to Exit",
        message, snapshot.player.score
    )
}

/// Print the current screen to the terminal.
pub fn print_screen(snapshot: &Snapshot) {
    println!("{}", render_screen(snapshot));
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::grid::WorldGrid;
    use crate::game::state::GameState;
    use crate::game::types::{Hazard, Pickup, Player};

    fn tiny_state() -> GameState {
        let mut cells = vec![vec![Cell::Blocked; 5]; 3];
        for cell in cells[1].iter_mut().take(4).skip(1) {
            *cell = Cell::Open;
        }
        GameState::from_parts(
            WorldGrid::from_cells(cells),
            Player::new(Position::new(1, 1)),
            vec![Hazard { pos: Position::new(3, 1) }],
            vec![Pickup::new(Position::new(2, 1))],
            0,
            70,
        )
    }

    #[test]
    fn test_board_symbols() {
        let state = tiny_state();
        assert_eq!(render_board(&state.snapshot()), "#####\n#PwS#\n#####\n");
    }

    #[test]
    fn test_hud_and_screens() {
        let mut state = tiny_state();
        assert!(render_screen(&state.snapshot()).contains("Press any key to begin"));

        state.phase = Phase::Playing;
        let screen = render_screen(&state.snapshot());
        assert!(screen.starts_with("Spirit: 10  Score: 0  High Score: 70  Jugs left: 1"));
        assert!(!screen.contains("Artifact Active"));

        state.goal.active = true;
        assert!(render_hud(&state.snapshot()).contains("Artifact Active"));

        state.phase = Phase::GameOver;
        assert!(render_screen(&state.snapshot()).contains("Final Score: 0"));
    }
}
