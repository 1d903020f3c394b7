//! World factory: builds a fresh session from configuration
//!
//! Pure function of the config and the random source. Reset always goes
//! through here; an old session is never patched back to its start state.

use glam::Vec2;
use rand::Rng;

use super::body::{Body, Player};
use super::obstacles::{GapHeights, ObstacleSlot, initial_x};
use super::state::{GamePhase, Session};
use crate::config::GameConfig;
use crate::error::ConfigError;

pub const PLAYER_ID: u32 = 1;
pub const FLOOR_ID: u32 = 2;
pub const CEILING_ID: u32 = 3;
/// Slot `i` owns ids `FIRST_SLOT_ID + 2i` (top) and `FIRST_SLOT_ID + 2i + 1` (bottom)
pub const FIRST_SLOT_ID: u32 = 4;

/// Validate `config` and build a new session
pub fn build_session<R: Rng>(
    config: &GameConfig,
    rng: &mut R,
) -> Result<Session, ConfigError> {
    config.validate()?;
    Ok(spawn_session(config, rng))
}

/// Build a session from an already validated config
pub(crate) fn spawn_session<R: Rng>(config: &GameConfig, rng: &mut R) -> Session {
    let width = config.screen_width as f32;
    let height = config.screen_height as f32;
    let thickness = config.boundary_thickness as f32;

    let player = Player::new(Body::new(
        PLAYER_ID,
        Vec2::new(width / 4.0, height / 2.0),
        Vec2::splat(config.player_size as f32),
        false,
    ));

    let floor = Body::new(
        FLOOR_ID,
        Vec2::new(width / 2.0, height - thickness / 2.0),
        Vec2::new(width, thickness),
        true,
    );
    let ceiling = Body::new(
        CEILING_ID,
        Vec2::new(width / 2.0, thickness / 2.0),
        Vec2::new(width, thickness),
        true,
    );

    let slots = (0..config.num_slots)
        .map(|i| {
            let top_id = FIRST_SLOT_ID + 2 * i as u32;
            ObstacleSlot::new(
                top_id,
                top_id + 1,
                initial_x(config, i),
                config.pipe_width as f32,
                height,
                GapHeights::draw(config, rng),
            )
        })
        .collect::<Vec<_>>();

    log::info!(
        "built session: {} slots, player at ({}, {})",
        slots.len(),
        player.body.pos.x,
        player.body.pos.y
    );

    Session {
        player,
        boundaries: vec![floor, ceiling],
        slots,
        phase: GamePhase::Running,
        score: 0,
        time_ticks: 0,
    }
}
