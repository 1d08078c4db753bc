//! Game state machine.
//!
//! `GameState` owns the world and every entity for the lifetime of one game and
//! advances the simulation one tick per `update` while playing. All randomness
//! comes from a single seeded generator so a seed plus a command sequence
//! always replays the same game.

use log::{info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::config::game::{
    GRID_COL, GRID_ROW, HAZARD_COUNT, MAX_GENERATION_ATTEMPTS, PICKUP_COUNT, PLAYER_START,
};
use crate::game::entities::{spawn_hazards, spawn_pickups};
use crate::game::error::GameError;
use crate::game::grid::WorldGrid;
use crate::game::systems::{
    apply_hazard_contact, collect_pickups, goal_reached, move_hazards, move_player,
    try_activate_goal,
};
use crate::game::types::{
    Cell, Command, Direction, GameEvent, Goal, Hazard, Phase, Pickup, Player, Position,
};

pub struct GameState {
    pub grid: WorldGrid,
    pub player: Player,
    pub hazards: Vec<Hazard>,
    pub pickups: Vec<Pickup>,
    pub goal: Goal,
    pub phase: Phase,
    pub high_score: u32,
    pub tick: u64,
    rng: ChaCha8Rng,
}

/// Read-only view handed to the renderer every tick.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a> {
    pub phase: Phase,
    pub tick: u64,
    pub width: usize,
    pub height: usize,
    pub cells: &'a [Vec<Cell>],
    pub player: PlayerView,
    pub hazards: Vec<Position>,
    pub pickups: &'a [Pickup],
    pub goal: &'a Goal,
    pub jugs_left: usize,
    pub high_score: u32,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PlayerView {
    pub pos: Position,
    pub vitality: i32,
    pub score: u32,
    pub invulnerable: bool,
}

type World = (WorldGrid, Vec<Hazard>, Vec<Pickup>);

fn populate(
    width: usize,
    height: usize,
    start: Position,
    rng: &mut ChaCha8Rng,
) -> Result<World, GameError> {
    let grid = WorldGrid::generate(width, height, start, rng)?;
    let hazards = spawn_hazards(&grid, start, HAZARD_COUNT, rng)?;
    let pickups = spawn_pickups(&grid, start, PICKUP_COUNT, rng)?;
    Ok((grid, hazards, pickups))
}

impl GameState {
    /// Create a new game from `seed`, starting on the intro screen.
    ///
    /// A world with no room for the scorpions or jugs is thrown away and
    /// regenerated, up to `MAX_GENERATION_ATTEMPTS` times.
    pub fn new(seed: u64, high_score: u32) -> Result<Self, GameError> {
        Self::with_layout(GRID_COL, GRID_ROW, MAX_GENERATION_ATTEMPTS, seed, high_score)
    }

    fn with_layout(
        width: usize,
        height: usize,
        attempts: u32,
        seed: u64,
        high_score: u32,
    ) -> Result<Self, GameError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let start = Position::new(PLAYER_START.0, PLAYER_START.1);

        for attempt in 1..=attempts {
            match populate(width, height, start, &mut rng) {
                Ok((grid, hazards, pickups)) => {
                    info!(
                        "[GameState] World ready: seed={} attempt={} size={}x{}",
                        seed,
                        attempt,
                        grid.width(),
                        grid.height()
                    );
                    return Ok(Self::assemble(grid, Player::new(start), hazards, pickups, rng, high_score));
                }
                Err(GameError::NoWalkableCells) => {
                    warn!("[GameState] Degenerate world on attempt {}, regenerating", attempt);
                }
                Err(err) => return Err(err),
            }
        }

        Err(GameError::GenerationFailed { attempts })
    }

    /// Assemble a game from pre-placed entities, starting on the intro screen.
    pub fn from_parts(
        grid: WorldGrid,
        player: Player,
        hazards: Vec<Hazard>,
        pickups: Vec<Pickup>,
        seed: u64,
        high_score: u32,
    ) -> Self {
        Self::assemble(grid, player, hazards, pickups, ChaCha8Rng::seed_from_u64(seed), high_score)
    }

    fn assemble(
        grid: WorldGrid,
        player: Player,
        hazards: Vec<Hazard>,
        pickups: Vec<Pickup>,
        rng: ChaCha8Rng,
        high_score: u32,
    ) -> Self {
        GameState {
            grid,
            player,
            hazards,
            pickups,
            goal: Goal::default(),
            phase: Phase::Intro,
            high_score,
            tick: 0,
            rng,
        }
    }

    /// Feed one input command. While playing, every call is one tick.
    pub fn update(&mut self, command: Command) -> Option<GameEvent> {
        match (self.phase, command) {
            (Phase::Exited, _) => None,
            (_, Command::Quit) => self.exit(),
            (Phase::Intro, Command::Steer(keys)) if !keys.any() => None,
            (Phase::Intro, _) => {
                self.phase = Phase::Playing;
                info!("[GameState] Journey begins");
                Some(GameEvent::Started)
            }
            (Phase::Playing, Command::Steer(keys)) => self.step(keys.resolve()),
            (Phase::Playing, _) => self.step(None),
            (Phase::Victory | Phase::GameOver, Command::Exit) => self.exit(),
            (Phase::Victory | Phase::GameOver, _) => None,
        }
    }

    fn step(&mut self, direction: Option<Direction>) -> Option<GameEvent> {
        self.tick += 1;
        self.player.update_timers();

        if let Some(direction) = direction {
            move_player(&mut self.player, direction, &self.grid);
        }

        move_hazards(&mut self.hazards, self.player.pos, &self.grid, &mut self.rng);
        apply_hazard_contact(&mut self.player, &self.hazards);

        collect_pickups(&mut self.player, &mut self.pickups);
        try_activate_goal(&mut self.goal, &self.pickups, &self.player, &self.grid, &mut self.rng);
        let won = goal_reached(&self.goal, &self.player);

        if !self.player.is_alive() {
            Some(self.finish(Phase::GameOver))
        } else if won {
            Some(self.finish(Phase::Victory))
        } else {
            None
        }
    }

    fn finish(&mut self, outcome: Phase) -> GameEvent {
        self.phase = outcome;
        self.high_score = self.high_score.max(self.player.score);
        info!(
            "[GameState] {:?} at tick={} score={} high_score={}",
            outcome, self.tick, self.player.score, self.high_score
        );
        GameEvent::Finished {
            outcome,
            score: self.player.score,
            high_score: self.high_score,
        }
    }

    fn exit(&mut self) -> Option<GameEvent> {
        self.phase = Phase::Exited;
        info!("[GameState] Exited");
        Some(GameEvent::Exited)
    }

    pub fn jugs_left(&self) -> usize {
        self.pickups.iter().filter(|p| !p.consumed).count()
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            phase: self.phase,
            tick: self.tick,
            width: self.grid.width(),
            height: self.grid.height(),
            cells: self.grid.cells(),
            player: PlayerView {
                pos: self.player.pos,
                vitality: self.player.vitality,
                score: self.player.score,
                invulnerable: self.player.is_invulnerable(),
            },
            hazards: self.hazards.iter().map(|h| h.pos).collect(),
            pickups: &self.pickups,
            goal: &self.goal,
            jugs_left: self.jugs_left(),
            high_score: self.high_score,
        }
    }
}
