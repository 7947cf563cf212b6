//! Terminal marathon runner (default binary).
//!
//! Fixed-timestep loop: poll crossterm events into the control state, advance
//! the session once per tick, redraw the snapshot.

use std::env;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use marathon::core::{GameConfig, GameSnapshot, Marathon};
use marathon::input::{
    apply_key_event, should_quit, should_restart, ControlScheme, ControlState,
    DEFAULT_KEY_RELEASE_TIMEOUT_MS,
};
use marathon::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use marathon::types::GameEvent;

/// Loop timing, from `MARATHON_TICK_MS` and `MARATHON_KEY_RELEASE_MS`.
#[derive(Debug, Clone, Copy)]
struct RunnerConfig {
    tick_ms: u32,
    key_release_timeout_ms: u32,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            tick_ms: 16,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }
}

impl RunnerConfig {
    fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            tick_ms: env_u32("MARATHON_TICK_MS")
                .filter(|&ms| ms > 0)
                .unwrap_or(defaults.tick_ms),
            key_release_timeout_ms: env_u32("MARATHON_KEY_RELEASE_MS")
                .unwrap_or(defaults.key_release_timeout_ms),
        }
    }
}

fn env_u32(name: &str) -> Option<u32> {
    env::var(name).ok()?.trim().parse().ok()
}

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    let runner = RunnerConfig::from_env();

    match config.seed {
        Some(seed) => println!("[Marathon] Seed: {}", seed),
        None => println!("[Marathon] Seed: random"),
    }
    println!(
        "[Marathon] Tick: {}ms, key release timeout: {}ms",
        runner.tick_ms, runner.key_release_timeout_ms
    );

    let mut game = Marathon::new(config);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game, runner);

    // Always try to restore terminal state.
    let _ = term.exit();

    match &result {
        Ok(()) => println!(
            "[Marathon] Final: level {}, lines {}, score {}",
            game.level(),
            game.lines(),
            game.score()
        ),
        Err(e) => eprintln!("[Marathon] Error: {:#}", e),
    }
    result
}

fn run(term: &mut TerminalRenderer, game: &mut Marathon, runner: RunnerConfig) -> Result<()> {
    let scheme = ControlScheme::default();
    let mut controls =
        ControlState::new().with_key_release_timeout_ms(runner.key_release_timeout_ms);

    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick = Duration::from_millis(runner.tick_ms as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if game.is_game_over() {
                        if should_restart(key) {
                            game.restart();
                            controls.reset();
                        }
                    } else {
                        apply_key_event(&scheme, &mut controls, key);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick {
            last_tick = Instant::now();

            let input = controls.tick_input();
            for event in game.update(tick, &input) {
                if let GameEvent::GameOver { .. } = event {
                    controls.reset();
                }
            }
            controls.end_frame(runner.tick_ms);
        }
    }
}
