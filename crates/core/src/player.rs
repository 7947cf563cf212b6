//! Player module - the piece under control and the marathon rules
//!
//! The player owns the active piece, its position and ghost, gravity and lock
//! delay, and the score/lines/level tallies. It never writes grid cells
//! itself: locking goes through [`Playfield::lock_in_place`], and the player
//! waits for the playfield's clear notification before taking control again.
//!
//! # Tick order
//!
//! While playing, one [`Player::update`] call:
//!
//! 1. runs down the gravity timer
//! 2. resolves horizontal moves, then rotations (reverting a blocked rotation)
//! 3. recomputes the ghost from the post-move position
//! 4. applies soft drop (extra gravity, 1 point per gravity step while held)
//! 5. applies hard drop, or otherwise resolves gravity and lock delay
//!
//! Events are returned in the order they happened.

use std::time::Duration;

use arrayvec::ArrayVec;

use crate::pieces::Piece;
use crate::playfield::Playfield;
use crate::rng::Randomizer;
use crate::scoring::{drop_interval, hard_drop_score, level_for_lines, line_clear_score};
use crate::types::{
    GameEvent, TickInput, LOCK_DELAY_TIME, LOCK_RESETS, MIN_LEVEL, SOFT_DROP_FACTOR,
    SPAWN_COLUMN, SPAWN_ROW,
};

/// Events produced by one tick, oldest first
pub type TickEvents = ArrayVec<GameEvent, 8>;

/// Gravity sub-state of a piece under control
///
/// `lock_moves` counts moves/rotations made while grounded; it belongs to the
/// piece and survives a piece sliding off a ledge and landing again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LockPhase {
    /// Falling one row per gravity step
    Falling { lock_moves: u8 },
    /// Resting on something, counting down the lock delay
    Grounded { timer: f64, lock_moves: u8 },
}

impl LockPhase {
    pub fn lock_moves(&self) -> u8 {
        match *self {
            LockPhase::Falling { lock_moves } | LockPhase::Grounded { lock_moves, .. } => {
                lock_moves
            }
        }
    }

    pub fn is_grounded(&self) -> bool {
        matches!(self, LockPhase::Grounded { .. })
    }

    /// Register a successful move; only counts while grounded
    fn register_move(&mut self) {
        if let LockPhase::Grounded { timer, lock_moves } = self {
            *timer = LOCK_DELAY_TIME;
            *lock_moves = lock_moves.saturating_add(1);
        }
    }
}

/// Player state machine
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerState {
    /// The player controls the piece
    Playing(LockPhase),
    /// Rows are being cleared; no input or gravity until the playfield is done
    WaitingForClearComplete,
    /// Top-out; terminal
    GameOver,
}

/// The player of a marathon game
#[derive(Debug, Clone)]
pub struct Player {
    randomizer: Randomizer,
    piece: Piece,
    x: i32,
    y: i32,
    ghost_x: i32,
    ghost_y: i32,
    level: u32,
    lines: u32,
    score: u32,
    /// Seconds per row at the current level
    drop_interval: f64,
    /// Seconds until the next gravity step
    drop_timer: f64,
    state: PlayerState,
    /// Events not yet handed to the caller
    events: TickEvents,
}

impl Player {
    /// Create a player and spawn its first piece on `playfield`
    pub fn new(mut randomizer: Randomizer, playfield: &Playfield) -> Self {
        let piece = randomizer.next();
        let interval = drop_interval(MIN_LEVEL);

        let mut player = Self {
            randomizer,
            piece,
            x: SPAWN_COLUMN,
            y: SPAWN_ROW,
            ghost_x: SPAWN_COLUMN,
            ghost_y: SPAWN_ROW,
            level: MIN_LEVEL,
            lines: 0,
            score: 0,
            drop_interval: interval,
            drop_timer: interval,
            state: PlayerState::Playing(LockPhase::Falling { lock_moves: 0 }),
            events: TickEvents::new(),
        };
        player.spawn(piece, playfield);
        player
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

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.state == PlayerState::GameOver
    }

    /// Whether the player currently controls the piece
    pub fn is_playing(&self) -> bool {
        matches!(self.state, PlayerState::Playing(_))
    }

    /// Whether the piece is in lock delay
    pub fn is_grounded(&self) -> bool {
        matches!(self.state, PlayerState::Playing(phase) if phase.is_grounded())
    }

    /// Moves/rotations spent in lock delay by the current piece
    pub fn lock_moves(&self) -> u8 {
        match self.state {
            PlayerState::Playing(phase) => phase.lock_moves(),
            _ => 0,
        }
    }

    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    /// Mask origin of the current piece
    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Mask origin where the current piece would land
    pub fn ghost_position(&self) -> (i32, i32) {
        (self.ghost_x, self.ghost_y)
    }

    pub fn drop_interval(&self) -> f64 {
        self.drop_interval
    }

    pub fn drop_timer(&self) -> f64 {
        self.drop_timer
    }

    pub fn randomizer(&self) -> &Randomizer {
        &self.randomizer
    }

    /// Place `piece` at the spawn position
    ///
    /// Resets the lock-delay move counter. Returns false, and ends the game,
    /// if the piece does not fit there. Outside of `Playing` this does nothing
    /// and returns false: control only comes back through the clear notification.
    pub fn spawn(&mut self, piece: Piece, playfield: &Playfield) -> bool {
        if !self.is_playing() {
            return false;
        }

        self.piece = piece;
        self.x = SPAWN_COLUMN;
        self.y = SPAWN_ROW;
        self.state = PlayerState::Playing(LockPhase::Falling { lock_moves: 0 });

        if !playfield.does_shape_fit_here(&self.piece, self.x, self.y) {
            self.game_over();
            return false;
        }

        self.update_ghost(playfield);
        true
    }

    /// Advance the simulation by one tick
    ///
    /// Also advances the playfield's clear animation, so the caller only
    /// drives the player. Returns the events of this tick, oldest first.
    pub fn update(
        &mut self,
        playfield: &mut Playfield,
        elapsed: Duration,
        input: &TickInput,
    ) -> TickEvents {
        if self.state == PlayerState::GameOver {
            return std::mem::take(&mut self.events);
        }

        let dt = elapsed.as_secs_f64();

        if let Some(cleared) = playfield.update(dt) {
            self.on_lines_cleared(cleared.count);
        }

        if let PlayerState::Playing(phase) = self.state {
            self.play(playfield, dt, input, phase);
        }

        std::mem::take(&mut self.events)
    }

    fn play(
        &mut self,
        playfield: &mut Playfield,
        dt: f64,
        input: &TickInput,
        mut phase: LockPhase,
    ) {
        self.drop_timer -= dt;

        if input.move_left {
            self.try_shift(playfield, -1, &mut phase);
        }
        if input.move_right {
            self.try_shift(playfield, 1, &mut phase);
        }

        if input.rotate_cw {
            self.try_rotate(playfield, true, &mut phase);
        }
        if input.rotate_ccw {
            self.try_rotate(playfield, false, &mut phase);
        }

        self.state = PlayerState::Playing(phase);
        self.update_ghost(playfield);

        if input.soft_drop {
            self.drop_timer -= SOFT_DROP_FACTOR * self.drop_interval * dt;
            if expired(self.drop_timer) {
                self.award_score(1);
            }
        }

        if input.hard_drop {
            self.hard_drop(playfield);
            return;
        }

        match phase {
            LockPhase::Falling { lock_moves } => {
                if !expired(self.drop_timer) {
                    return;
                }
                self.drop_timer += self.drop_interval;

                if playfield.does_shape_fit_here(&self.piece, self.x, self.y + 1) {
                    self.y += 1;
                } else if lock_moves >= LOCK_RESETS {
                    self.soft_lock(playfield);
                } else {
                    self.state = PlayerState::Playing(LockPhase::Grounded {
                        timer: LOCK_DELAY_TIME,
                        lock_moves,
                    });
                }
            }
            LockPhase::Grounded { timer, lock_moves } => {
                let timer = timer - dt;

                if expired(timer) || lock_moves >= LOCK_RESETS || expired(self.drop_timer) {
                    if playfield.does_shape_fit_here(&self.piece, self.x, self.y + 1) {
                        self.state = PlayerState::Playing(LockPhase::Falling { lock_moves });
                        self.drop_timer = self.drop_interval;
                    } else {
                        self.soft_lock(playfield);
                    }
                } else {
                    self.state = PlayerState::Playing(LockPhase::Grounded { timer, lock_moves });
                }
            }
        }
    }

    fn try_shift(&mut self, playfield: &Playfield, dx: i32, phase: &mut LockPhase) -> bool {
        if !playfield.does_shape_fit_here(&self.piece, self.x + dx, self.y) {
            return false;
        }
        self.x += dx;
        phase.register_move();
        true
    }

    /// Rotate in place; a blocked rotation is undone immediately
    fn try_rotate(
        &mut self,
        playfield: &Playfield,
        clockwise: bool,
        phase: &mut LockPhase,
    ) -> bool {
        if clockwise {
            self.piece.rotate_left();
        } else {
            self.piece.rotate_right();
        }

        if !playfield.does_shape_fit_here(&self.piece, self.x, self.y) {
            if clockwise {
                self.piece.rotate_right();
            } else {
                self.piece.rotate_left();
            }
            return false;
        }

        phase.register_move();
        true
    }

    /// Project the piece straight down to its resting row
    fn update_ghost(&mut self, playfield: &Playfield) {
        self.ghost_x = self.x;
        self.ghost_y = self.y;
        while playfield.does_shape_fit_here(&self.piece, self.ghost_x, self.ghost_y + 1) {
            self.ghost_y += 1;
        }
    }

    fn hard_drop(&mut self, playfield: &mut Playfield) {
        if !playfield.lock_in_place(&self.piece, self.ghost_x, self.ghost_y) {
            self.game_over();
            return;
        }

        self.award_score(hard_drop_score(self.ghost_y - self.y));
        self.after_lock(playfield);
    }

    fn soft_lock(&mut self, playfield: &mut Playfield) {
        if !playfield.lock_in_place(&self.piece, self.x, self.y) {
            self.game_over();
            return;
        }

        self.after_lock(playfield);
    }

    fn after_lock(&mut self, playfield: &mut Playfield) {
        let completed = playfield.validate_field() > 0;

        let next = self.randomizer.next();
        if self.spawn(next, playfield) && completed {
            self.state = PlayerState::WaitingForClearComplete;
        }
    }

    /// Apply the playfield's clear notification
    pub(crate) fn on_lines_cleared(&mut self, count: u32) {
        if self.state == PlayerState::WaitingForClearComplete {
            self.state = PlayerState::Playing(LockPhase::Falling { lock_moves: 0 });
        }

        self.emit(GameEvent::LinesCleared { count });

        // Scored at the level the clear was made on.
        self.award_score(line_clear_score(count, self.level));

        self.lines += count;
        self.check_level();
    }

    fn award_score(&mut self, value: u32) {
        if value == 0 {
            return;
        }

        self.score = self.score.saturating_add(value);
        self.emit(GameEvent::ScoreAwarded {
            total: self.score,
            delta: value,
        });
    }

    fn check_level(&mut self) {
        let level = level_for_lines(self.lines);
        if level <= self.level {
            return;
        }

        self.level = level;
        self.drop_interval = drop_interval(level);
        self.drop_timer = self.drop_interval;
        self.emit(GameEvent::LevelUp { level });
    }

    fn game_over(&mut self) {
        if self.state == PlayerState::GameOver {
            return;
        }

        self.state = PlayerState::GameOver;
        self.emit(GameEvent::GameOver {
            level: self.level,
            score: self.score,
            lines: self.lines,
        });
    }

    fn emit(&mut self, event: GameEvent) {
        let pushed = self.events.try_push(event);
        debug_assert!(pushed.is_ok(), "tick event buffer overflow");
    }
}

#[inline]
fn expired(timer: f64) -> bool {
    timer <= 0.0
}
