//! Session state and events
//!
//! A session is the complete mutable state of one playthrough. It is built by
//! the world factory, advanced by the tick, and replaced wholesale on reset.

use serde::{Deserialize, Serialize};

use super::body::{Body, Player};
use super::collision::CollidedWith;
use super::obstacles::ObstacleSlot;

/// Loop state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GamePhase {
    /// Bodies advance every tick
    #[default]
    Running,
    /// Terminal until reset; nothing moves
    Over,
}

/// Events emitted by one tick, in emission order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum GameEvent {
    /// The player hit something; at most one per session
    GameOver { collided_with: CollidedWith },
    /// The player cleared the slot at this index
    Score { slot: usize },
}

/// Complete game state for one playthrough (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub player: Player,
    /// Floor and ceiling
    pub boundaries: Vec<Body>,
    /// Obstacle slots, indexed numerically
    pub slots: Vec<ObstacleSlot>,
    pub phase: GamePhase,
    /// Only ever changed by [`Session::apply_event`]
    pub score: u32,
    /// Ticks advanced while running
    pub time_ticks: u64,
}

impl Session {
    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Apply one emitted event. The only mutator of `score` and `phase`.
    pub fn apply_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::Score { slot } => {
                self.score += 1;
                log::debug!("passed slot {} (score {})", slot, self.score);
            }
            GameEvent::GameOver { collided_with } => {
                self.phase = GamePhase::Over;
                log::info!(
                    "game over after {} ticks with score {} ({:?})",
                    self.time_ticks,
                    self.score,
                    collided_with
                );
            }
        }
    }

    /// Every body, player first, for a renderer to draw
    pub fn bodies(&self) -> impl Iterator<Item = &Body> {
        std::iter::once(&self.player.body)
            .chain(self.boundaries.iter())
            .chain(self.slots.iter().flat_map(|s| [&s.top, &s.bottom]))
    }

    /// Mutable counterpart of [`Session::bodies`]
    pub fn bodies_mut(&mut self) -> impl Iterator<Item = &mut Body> {
        std::iter::once(&mut self.player.body)
            .chain(self.boundaries.iter_mut())
            .chain(self.slots.iter_mut().flat_map(|s| [&mut s.top, &mut s.bottom]))
    }
}
