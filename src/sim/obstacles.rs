//! Obstacle slots and the recycler
//!
//! A fixed number of top/bottom pipe pairs scroll left. Once a pair is fully
//! off-screen it teleports behind the last slot with freshly drawn gap
//! heights, so a bounded set of bodies produces an endless course.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::body::Body;
use crate::config::GameConfig;

/// Heights of the two pipe segments of a slot
///
/// `top + bottom + gap_size == screen_height` for every drawn pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapHeights {
    pub top: u32,
    pub bottom: u32,
}

impl GapHeights {
    /// Build a pair from an already drawn segment height.
    ///
    /// `swap` moves the drawn height to the bottom pipe.
    pub fn from_draw(drawn: u32, swap: bool, config: &GameConfig) -> Self {
        let other = config.screen_height - drawn - config.gap_size;
        if swap {
            Self {
                top: other,
                bottom: drawn,
            }
        } else {
            Self {
                top: drawn,
                bottom: other,
            }
        }
    }

    /// Draw `top` uniformly in `[min_gap, screen_height/2 - min_gap]`, then
    /// swap sides with probability 1/2. Config must be validated.
    pub fn draw<R: Rng>(config: &GameConfig, rng: &mut R) -> Self {
        let drawn = rng.random_range(config.min_gap..=config.max_segment());
        let swap = rng.random_bool(0.5);
        Self::from_draw(drawn, swap, config)
    }
}

/// Lifecycle of a slot within the current tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotState {
    /// On (or approaching) the screen, scrolling left
    Active,
    /// Crossed the threshold this tick; transient, respawn follows immediately
    Offscreen,
    /// Teleported behind the last slot this tick; behaves as `Active`
    Respawned,
}

/// A top/bottom pipe pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleSlot {
    pub top: Body,
    pub bottom: Body,
    pub gap: GapHeights,
    /// Player already scored this pass
    pub passed: bool,
    pub state: SlotState,
}

impl ObstacleSlot {
    /// Pipe pair centered horizontally at `x`
    pub fn new(
        top_id: u32,
        bottom_id: u32,
        x: f32,
        pipe_width: f32,
        screen_height: f32,
        gap: GapHeights,
    ) -> Self {
        let mut slot = Self {
            top: Body::new(top_id, Vec2::ZERO, Vec2::ZERO, true),
            bottom: Body::new(bottom_id, Vec2::ZERO, Vec2::ZERO, true),
            gap,
            passed: false,
            state: SlotState::Active,
        };
        slot.place(x, pipe_width, screen_height, gap);
        slot
    }

    /// Horizontal center shared by both pipes
    #[inline]
    pub fn x(&self) -> f32 {
        self.top.pos.x
    }

    /// Position and size both pipes; top hangs from y=0, bottom stands on the floor
    fn place(&mut self, x: f32, pipe_width: f32, screen_height: f32, gap: GapHeights) {
        let (top_h, bottom_h) = (gap.top as f32, gap.bottom as f32);
        self.top.size = Vec2::new(pipe_width, top_h);
        self.top.set_position(Vec2::new(x, top_h / 2.0));
        self.bottom.size = Vec2::new(pipe_width, bottom_h);
        self.bottom
            .set_position(Vec2::new(x, screen_height - bottom_h / 2.0));
        self.gap = gap;
    }

    /// Scroll both pipes left
    pub fn scroll(&mut self, distance: f32) {
        let delta = Vec2::new(-distance, 0.0);
        self.top.translate(delta);
        self.bottom.translate(delta);
    }

    /// Move behind the last slot with new gap geometry and re-arm scoring
    pub fn respawn(&mut self, x: f32, config: &GameConfig, gap: GapHeights) {
        self.place(
            x,
            config.pipe_width as f32,
            config.screen_height as f32,
            gap,
        );
        self.passed = false;
        self.state = SlotState::Respawned;
    }
}

/// Slot center x at which a slot is fully off the left edge
#[inline]
pub fn offscreen_threshold(config: &GameConfig) -> f32 {
    -(config.pipe_width as f32) / 2.0
}

/// Respawn center x, behind the last slot. Depends on constants only.
#[inline]
pub fn respawn_x(config: &GameConfig) -> f32 {
    config.course_width as f32 * config.num_slots as f32 - config.pipe_width as f32 / 2.0
}

/// Initial center x of slot `index` (0-based), staggered by `course_width`
#[inline]
pub fn initial_x(config: &GameConfig, index: usize) -> f32 {
    config.course_width as f32 * (index + 1) as f32 - config.pipe_width as f32 / 2.0
}

/// Scroll every slot and respawn those that left the screen.
///
/// Returns the indices of slots respawned this tick, in slot order.
pub fn recycle<R: Rng>(
    slots: &mut [ObstacleSlot],
    config: &GameConfig,
    rng: &mut R,
) -> Vec<usize> {
    let threshold = offscreen_threshold(config);
    let mut respawned = Vec::new();

    for (idx, slot) in slots.iter_mut().enumerate() {
        slot.scroll(config.scroll_speed);

        if slot.x() <= threshold {
            slot.state = SlotState::Offscreen;
            let gap = GapHeights::draw(config, rng);
            slot.respawn(respawn_x(config), config, gap);
            log::debug!(
                "slot {} respawned at x={} (top={}, bottom={})",
                idx,
                slot.x(),
                gap.top,
                gap.bottom
            );
            respawned.push(idx);
        } else {
            slot.state = SlotState::Active;
        }
    }

    respawned
}
