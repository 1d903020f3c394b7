//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied time delta only
//! - Seeded RNG only, passed in explicitly
//! - Stable iteration order (slot index, then body id)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod body;
pub mod collision;
pub mod obstacles;
pub mod physics;
pub mod scoring;
pub mod state;
pub mod tick;
pub mod world;

pub use body::{Aabb, Body, Player, Pose};
pub use collision::{CollidedWith, PipePart, detect};
pub use obstacles::{GapHeights, ObstacleSlot, SlotState, recycle};
pub use state::{GameEvent, GamePhase, Session};
pub use tick::{InputEvent, TickInput, tick};
pub use world::build_session;
