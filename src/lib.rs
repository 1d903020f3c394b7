//! Flappy Sim - deterministic core of a side-scrolling pipe game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bodies, physics, obstacles, collisions, scoring)
//! - `game`: Loop/state machine driving the simulation (tick, reset, events)
//! - `config`: Startup configuration with validation
//! - `error`: Configuration and misuse errors
//!
//! Rendering is left to the caller: after each tick the full [`sim::Session`]
//! is available read-only through [`Game::session`].

pub mod config;
pub mod error;
pub mod game;
pub mod sim;

pub use config::{GameConfig, ScoreLine};
pub use error::{ConfigError, SimError};
pub use game::Game;

/// Default tuning values used by [`GameConfig::default`]
pub mod consts {
    /// Play-field dimensions (pixels)
    pub const SCREEN_WIDTH: u32 = 400;
    pub const SCREEN_HEIGHT: u32 = 800;

    /// Horizontal distance between consecutive obstacle slots
    pub const COURSE_WIDTH: u32 = SCREEN_WIDTH;
    /// Number of recycled obstacle pairs
    pub const NUM_SLOTS: usize = 2;
    /// Upper bound on `num_slots`; keeps body ids within `u32`
    pub const MAX_SLOTS: usize = 1 << 16;

    /// Obstacle defaults
    pub const PIPE_WIDTH: u32 = 100;
    pub const GAP_SIZE: u32 = 200;
    /// Smallest height a pipe segment may be drawn with
    pub const MIN_GAP: u32 = 100;

    /// Floor/ceiling thickness
    pub const BOUNDARY_THICKNESS: u32 = 50;

    /// Player defaults
    pub const PLAYER_SIZE: u32 = 50;

    /// Downward acceleration (pixels per tick², y grows downward)
    pub const GRAVITY: f32 = 0.4;
    /// Upward velocity added per flap (pixels per tick)
    pub const IMPULSE: f32 = 8.0;
    /// Obstacle scroll distance per tick (pixels)
    pub const SCROLL_SPEED: f32 = 1.0;

    /// Default seed for the headless driver
    pub const DEFAULT_SEED: u64 = 0x5EED;
}
