//! Player entity logic.
//!
//! Vitality bookkeeping: invulnerability after a hit and periodic dehydration.

use log::debug;

use crate::config::game::{DEHYDRATION_TICKS, INVULNERABILITY_TICKS, PICKUP_SCORE};
use crate::game::types::Player;

impl Player {
    /// Advance the per-tick countdowns.
    pub fn update_timers(&mut self) {
        if self.invulnerable_ticks > 0 {
            self.invulnerable_ticks -= 1;
        }

        self.dehydration_ticks += 1;
        if self.dehydration_ticks >= DEHYDRATION_TICKS {
            self.dehydration_ticks = 0;
            self.vitality -= 1;
            debug!("[Player] Dehydrated, vitality={}", self.vitality);
        }
    }

    /// Apply a hazard hit. Returns false when the hit was absorbed by invulnerability.
    pub fn take_damage(&mut self) -> bool {
        if self.invulnerable_ticks > 0 {
            return false;
        }
        self.vitality -= 1;
        self.invulnerable_ticks = INVULNERABILITY_TICKS;
        debug!("[Player] Stung at ({}, {}), vitality={}", self.pos.x, self.pos.y, self.vitality);
        true
    }

    /// Drink a water jug.
    pub fn hydrate(&mut self) {
        self.dehydration_ticks = 0;
        self.vitality += 1;
        self.score += PICKUP_SCORE;
    }

    pub fn is_alive(&self) -> bool {
        self.vitality > 0
    }
}
