//! Game configuration
//!
//! Supplied once at startup and immutable thereafter. Partial JSON documents
//! overlay the defaults from [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Which horizontal line of an obstacle slot the player must cross to score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ScoreLine {
    /// Left edge of the pipes
    LeadingEdge,
    /// Pipe center
    #[default]
    Center,
    /// Right edge of the pipes (player fully clear)
    TrailingEdge,
}

impl ScoreLine {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreLine::LeadingEdge => "leading_edge",
            ScoreLine::Center => "center",
            ScoreLine::TrailingEdge => "trailing_edge",
        }
    }

    /// Offset from the slot center, given the pipe width
    pub fn offset(&self, pipe_width: f32) -> f32 {
        match self {
            ScoreLine::LeadingEdge => -pipe_width / 2.0,
            ScoreLine::Center => 0.0,
            ScoreLine::TrailingEdge => pipe_width / 2.0,
        }
    }
}

/// All tunable constants of a game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Play-field ===
    pub screen_width: u32,
    pub screen_height: u32,
    /// Floor/ceiling thickness
    pub boundary_thickness: u32,

    // === Obstacles ===
    /// Horizontal spacing between slots
    pub course_width: u32,
    pub num_slots: usize,
    pub pipe_width: u32,
    /// Vertical opening between the top and bottom pipe
    pub gap_size: u32,
    /// Minimum height of a drawn pipe segment
    pub min_gap: u32,
    /// Leftward scroll per tick
    pub scroll_speed: f32,
    pub score_line: ScoreLine,

    // === Player ===
    pub player_size: u32,
    /// Downward acceleration (y grows downward; zero is a valid free-flight setup)
    pub gravity: f32,
    /// Upward velocity added by one activation
    pub impulse: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            boundary_thickness: BOUNDARY_THICKNESS,

            course_width: COURSE_WIDTH,
            num_slots: NUM_SLOTS,
            pipe_width: PIPE_WIDTH,
            gap_size: GAP_SIZE,
            min_gap: MIN_GAP,
            scroll_speed: SCROLL_SPEED,
            score_line: ScoreLine::Center,

            player_size: PLAYER_SIZE,
            gravity: GRAVITY,
            impulse: IMPULSE,
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON document and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Largest top-segment height a gap draw may produce
    #[inline]
    pub fn max_segment(&self) -> u32 {
        self.screen_height / 2 - self.min_gap
    }

    /// Reject configurations that would yield degenerate geometry
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("boundary_thickness", self.boundary_thickness),
            ("course_width", self.course_width),
            ("pipe_width", self.pipe_width),
            ("gap_size", self.gap_size),
            ("min_gap", self.min_gap),
            ("player_size", self.player_size),
        ];
        for (field, value) in positive {
            if value == 0 {
                return Err(ConfigError::NonPositive { field });
            }
        }
        if self.num_slots == 0 {
            return Err(ConfigError::NonPositive { field: "num_slots" });
        }

        for (field, value) in [
            ("gravity", self.gravity),
            ("impulse", self.impulse),
            ("scroll_speed", self.scroll_speed),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }
        if self.scroll_speed <= 0.0 {
            return Err(ConfigError::NonPositive {
                field: "scroll_speed",
            });
        }

        // Both segments of every draw must stay >= min_gap:
        // top <= H/2 - min_gap, bottom = H - top - gap >= min_gap  <=>  gap <= H/2
        if self.gap_size > self.screen_height / 2 {
            return Err(ConfigError::GapTooLarge {
                gap_size: self.gap_size,
                screen_height: self.screen_height,
            });
        }
        if self.min_gap.saturating_mul(2) > self.screen_height / 2 {
            return Err(ConfigError::MinGapTooLarge {
                min_gap: self.min_gap,
                screen_height: self.screen_height,
            });
        }

        if self.player_size >= self.gap_size {
            return Err(ConfigError::PlayerTooLarge {
                player_size: self.player_size,
                gap_size: self.gap_size,
            });
        }
        if self
            .boundary_thickness
            .saturating_mul(2)
            .saturating_add(self.player_size)
            >= self.screen_height
        {
            return Err(ConfigError::FieldTooSmall {
                screen_height: self.screen_height,
                boundary_thickness: self.boundary_thickness,
            });
        }

        self.validate_course()
    }

    /// Slots must start ahead of the player and respawn fully off-screen
    fn validate_course(&self) -> Result<(), ConfigError> {
        if self.num_slots > MAX_SLOTS {
            return Err(ConfigError::TooManySlots {
                num_slots: self.num_slots,
                max: MAX_SLOTS,
            });
        }
        if self.course_width < self.pipe_width {
            return Err(ConfigError::CourseTooNarrow {
                course_width: self.course_width,
                pipe_width: self.pipe_width,
            });
        }

        // Slot 0 spans [cw - pw, cw]; the player's right edge is W/4 + size/2
        let first_left = 4 * u64::from(self.course_width - self.pipe_width);
        let player_right = u64::from(self.screen_width) + 2 * u64::from(self.player_size);
        if first_left <= player_right {
            return Err(ConfigError::SlotOverlapsStart {
                course_width: self.course_width,
            });
        }

        // Respawn center cw * n - pw/2 must leave the whole pipe right of the screen
        let course = u64::from(self.course_width) * self.num_slots as u64;
        if course < u64::from(self.screen_width) + u64::from(self.pipe_width) {
            return Err(ConfigError::CourseTooShort {
                course_width: self.course_width,
                num_slots: self.num_slots,
                screen_width: self.screen_width,
            });
        }

        Ok(())
    }
}
