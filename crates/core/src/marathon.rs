//! Marathon session - one playfield, one player
//!
//! The session forwards ticks to the player and keeps the displayed tallies
//! in sync by consuming the events each tick produces, the way a front end
//! would.

use std::time::Duration;

use crate::config::GameConfig;
use crate::player::{Player, TickEvents};
use crate::playfield::Playfield;
use crate::rng::Randomizer;
use crate::snapshot::GameSnapshot;
use crate::types::{GameEvent, TickInput, MIN_LEVEL};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Playing,
    GameOver,
}

/// A single-player marathon game
#[derive(Debug, Clone)]
pub struct Marathon {
    config: GameConfig,
    playfield: Playfield,
    player: Player,
    state: SessionState,
    level: u32,
    lines: u32,
    score: u32,
}

impl Marathon {
    pub fn new(config: GameConfig) -> Self {
        let playfield = Playfield::new();
        let player = Player::new(Randomizer::from_seed(config.seed), &playfield);
        let state = if player.is_game_over() {
            SessionState::GameOver
        } else {
            SessionState::Playing
        };

        Self {
            config,
            playfield,
            player,
            state,
            level: MIN_LEVEL,
            lines: 0,
            score: 0,
        }
    }

    /// Start over with a fresh playfield and player
    ///
    /// A seeded session replays the same piece sequence.
    pub fn restart(&mut self) {
        *self = Self::new(self.config);
    }

    /// Advance one tick and apply its events to the displayed tallies
    pub fn update(&mut self, elapsed: Duration, input: &TickInput) -> TickEvents {
        let events = self
            .player
            .update(&mut self.playfield, elapsed, input);

        for event in &events {
            self.apply(event);
        }

        events
    }

    fn apply(&mut self, event: &GameEvent) {
        match *event {
            GameEvent::LinesCleared { count } => self.lines += count,
            GameEvent::LevelUp { level } => self.level = level,
            GameEvent::ScoreAwarded { total, .. } => self.score = total,
            GameEvent::GameOver {
                level,
                score,
                lines,
            } => {
                self.level = level;
                self.score = score;
                self.lines = lines;
                self.state = SessionState::GameOver;
            }
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.state == SessionState::GameOver
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn playfield(&self) -> &Playfield {
        &self.playfield
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Capture into a caller buffer
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.capture(&self.playfield, &self.player);
    }
}

impl Default for Marathon {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
