//! Demo input source
//!
//! Steers toward the gap of the nearest slot still ahead of the player. Sits
//! outside the tick: it only reads the session and says whether to flap.

use super::state::Session;
use crate::config::GameConfig;

/// Upward speed above which another flap would overshoot
const RISING_LIMIT: f32 = -2.0;

/// Vertical center of the gap the player should aim for
pub fn target_y(session: &Session, config: &GameConfig) -> f32 {
    let player_x = session.player.body.pos.x;
    let half_pipe = config.pipe_width as f32 / 2.0;
    session
        .slots
        .iter()
        .filter(|slot| slot.x() + half_pipe >= player_x - config.player_size as f32)
        .min_by(|a, b| a.x().total_cmp(&b.x()))
        .map(|slot| slot.gap.top as f32 + config.gap_size as f32 / 2.0)
        .unwrap_or(config.screen_height as f32 / 2.0)
}

/// Whether to request a flap this tick
pub fn wants_flap(session: &Session, config: &GameConfig) -> bool {
    if !session.is_running() {
        return false;
    }
    let body = &session.player.body;
    // Aim slightly below center: a flap lifts further than gravity drops per tick
    let aim = target_y(session, config) + config.player_size as f32 / 4.0;
    body.pos.y > aim && body.vel.y > RISING_LIMIT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::world::build_session;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_flaps_when_below_target() {
        let config = GameConfig::default();
        let mut session = build_session(&config, &mut Pcg32::seed_from_u64(3)).unwrap();
        let target = target_y(&session, &config);

        session.player.body.pos.y = target + 100.0;
        session.player.body.vel.y = 0.0;
        assert!(wants_flap(&session, &config));

        session.player.body.pos.y = target - 100.0;
        assert!(!wants_flap(&session, &config));
    }

    #[test]
    fn test_no_flap_while_rising_fast() {
        let config = GameConfig::default();
        let mut session = build_session(&config, &mut Pcg32::seed_from_u64(3)).unwrap();
        session.player.body.pos.y = target_y(&session, &config) + 100.0;
        session.player.body.vel.y = -6.0;
        assert!(!wants_flap(&session, &config));
    }

    #[test]
    fn test_targets_nearest_slot() {
        let config = GameConfig::default();
        let session = build_session(&config, &mut Pcg32::seed_from_u64(3)).unwrap();
        let nearest = &session.slots[0];
        assert_eq!(
            target_y(&session, &config),
            nearest.gap.top as f32 + config.gap_size as f32 / 2.0
        );
    }
}
