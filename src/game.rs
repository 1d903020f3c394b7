//! Game loop / state machine
//!
//! Owns the configuration, the seeded RNG and the current session. The driver
//! calls [`Game::tick`] at its own rate and [`Game::reset`] after a game over;
//! there is no shared global instance.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::config::GameConfig;
use crate::error::{ConfigError, SimError};
use crate::sim::world::spawn_session;
use crate::sim::{GameEvent, GamePhase, Session, TickInput, tick};

pub struct Game {
    config: GameConfig,
    seed: u64,
    rng: Pcg32,
    session: Session,
    resets: u32,
}

impl Game {
    /// Validate `config` and build the first session from `seed`
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = Pcg32::seed_from_u64(seed);
        let session = spawn_session(&config, &mut rng);
        log::info!("game created (seed {:#x})", seed);
        Ok(Self {
            config,
            seed,
            rng,
            session,
            resets: 0,
        })
    }

    /// Advance one tick and apply the emitted events to the session.
    ///
    /// Returns the events in emission order. Once a `GameOver` has been
    /// applied every further call fails with [`SimError::SessionOver`] and
    /// leaves the session untouched until [`Game::reset`].
    pub fn tick(&mut self, input: &TickInput) -> Result<Vec<GameEvent>, SimError> {
        let events = tick(&mut self.session, input, &self.config, &mut self.rng)?;
        for event in &events {
            self.session.apply_event(event);
        }
        Ok(events)
    }

    /// Replace the session with a freshly built one and resume running
    pub fn reset(&mut self) {
        let final_score = self.session.score;
        self.session = spawn_session(&self.config, &mut self.rng);
        self.resets += 1;
        log::info!("reset #{} (previous score {})", self.resets, final_score);
    }

    /// Read-only view for rendering
    #[inline]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    pub fn phase(&self) -> GamePhase {
        self.session.phase
    }

    #[inline]
    pub fn score(&self) -> u32 {
        self.session.score
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of resets since creation
    #[inline]
    pub fn resets(&self) -> u32 {
        self.resets
    }
}
