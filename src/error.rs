//! Error types
//!
//! Gameplay failure (hitting a pipe) is game state, not an error. These types
//! cover rejected configuration and driver misuse only.

use thiserror::Error;

/// Configuration rejected at construction time
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be greater than zero")]
    NonPositive { field: &'static str },

    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f32 },

    #[error("gap size {gap_size} exceeds half the screen height {screen_height}")]
    GapTooLarge { gap_size: u32, screen_height: u32 },

    #[error("minimum segment {min_gap} leaves no room to draw gaps in a screen of height {screen_height}")]
    MinGapTooLarge { min_gap: u32, screen_height: u32 },

    #[error("player height {player_size} does not fit through gap {gap_size}")]
    PlayerTooLarge { player_size: u32, gap_size: u32 },

    #[error("player cannot start between the boundaries (screen height {screen_height}, boundary {boundary_thickness})")]
    FieldTooSmall {
        screen_height: u32,
        boundary_thickness: u32,
    },

    #[error("{num_slots} slots exceeds the limit of {max}")]
    TooManySlots { num_slots: usize, max: usize },

    #[error("course width {course_width} is narrower than pipe width {pipe_width}")]
    CourseTooNarrow { course_width: u32, pipe_width: u32 },

    #[error("first slot at course width {course_width} overlaps the player start")]
    SlotOverlapsStart { course_width: u32 },

    #[error("{num_slots} slots of width {course_width} respawn on screen (screen width {screen_width})")]
    CourseTooShort {
        course_width: u32,
        num_slots: usize,
        screen_width: u32,
    },

    #[error("invalid config document: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

/// Driver misuse, reported instead of silently ignored
#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    #[error("impulse applied to static body {body_id}")]
    ImpulseOnStatic { body_id: u32 },

    #[error("session is over; call reset before ticking again")]
    SessionOver,

    #[error("tick delta must be finite and non-negative, got {dt}")]
    InvalidTimestep { dt: f32 },
}
