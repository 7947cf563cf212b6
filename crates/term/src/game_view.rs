//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O) and unit-tested against the framebuffer.

use crate::core::GameSnapshot;
use crate::fb::{FrameBuffer, Glyph, Rgb, Style};
use crate::types::{Cell, COLUMNS, LINES};

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Layout of the well and side panel.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Terminal columns per grid cell; 2 roughly squares the cells.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Render into a reused framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Style::new(Rgb::new(220, 220, 220), SCREEN_BG).glyph(' '));

        let frame_w = COLUMNS as u16 * self.cell_w + 2;
        let frame_h = LINES as u16 + 2;
        let left = viewport.width.saturating_sub(frame_w) / 2;
        let top = viewport.height.saturating_sub(frame_h) / 2;

        draw_frame(fb, left, top, frame_w, frame_h);

        for (y, row) in snap.grid.iter().enumerate() {
            let flash = snap
                .clearing
                .contains(&y)
                .then_some(snap.highlight_fraction);
            for (x, cell) in row.iter().enumerate() {
                self.put_cell(fb, left, top, x as i32, y as i32, grid_glyph(cell, flash));
            }
        }

        if let Some(active) = snap.active {
            let ghost = Style::new(Rgb::from(active.color), WELL_BG).dim().glyph('░');
            for (x, y) in active.ghost_cells() {
                self.put_cell(fb, left, top, x, y, ghost);
            }

            let block = Style::new(Rgb::from(active.color), WELL_BG).bold().glyph('█');
            for (x, y) in active.cells() {
                self.put_cell(fb, left, top, x, y, block);
            }
        }

        self.draw_panel(fb, snap, viewport, left + frame_w + 2, top);

        if snap.game_over {
            let mid = top + frame_h / 2;
            center_text(fb, left, frame_w, mid, "GAME OVER");
            center_text(fb, left, frame_w, mid + 1, "r restart");
        }
    }

    /// Allocating variant of [`GameView::render_into`].
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Grid cells above the well are skipped.
    fn put_cell(&self, fb: &mut FrameBuffer, left: u16, top: u16, x: i32, y: i32, glyph: Glyph) {
        if x < 0 || y < 0 || x >= COLUMNS as i32 || y >= LINES as i32 {
            return;
        }
        let px = left + 1 + x as u16 * self.cell_w;
        let py = top + 1 + y as u16;
        fb.fill_rect(px, py, self.cell_w, 1, glyph);
    }

    fn draw_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        x: u16,
        top: u16,
    ) {
        if x.saturating_add(10) > viewport.width {
            return;
        }

        let label = Style::new(Rgb::new(220, 220, 220), SCREEN_BG).bold();
        let value = Style::new(Rgb::new(200, 200, 200), SCREEN_BG);

        let mut y = top;
        for (name, v) in [("SCORE", snap.score), ("LEVEL", snap.level), ("LINES", snap.lines)] {
            fb.put_str(x, y, name, label);
            fb.put_u32(x, y + 1, v, value);
            y += 3;
        }

        let hint = value.dim();
        for line in ["←/→ move", "↓ soft drop", "↑ hard drop", "x/z rotate", "q quit"] {
            fb.put_str(x, y, line, hint);
            y += 1;
        }
    }
}

/// Glyph for a grid cell; `flash` is the remaining highlight of a clearing row.
fn grid_glyph(cell: &Cell, flash: Option<f32>) -> Glyph {
    if !cell.occupied {
        return Style::new(Rgb::new(90, 90, 100), WELL_BG).dim().glyph('·');
    }

    let color = Rgb::from(cell.color);
    match flash {
        Some(t) => Style::new(color.lerp(Rgb::WHITE, t), WELL_BG).bold().glyph('█'),
        None => Style::new(color, WELL_BG).glyph('█'),
    }
}

fn draw_frame(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    let style = Style::new(Rgb::new(200, 200, 200), SCREEN_BG);
    let right = x + w - 1;
    let bottom = y + h - 1;

    fb.fill_rect(x + 1, y + 1, w - 2, h - 2, Style::new(WELL_BG, WELL_BG).glyph(' '));
    fb.fill_rect(x + 1, y, w - 2, 1, style.glyph('─'));
    fb.fill_rect(x + 1, bottom, w - 2, 1, style.glyph('─'));
    fb.fill_rect(x, y + 1, 1, h - 2, style.glyph('│'));
    fb.fill_rect(right, y + 1, 1, h - 2, style.glyph('│'));
    fb.set(x, y, style.glyph('┌'));
    fb.set(right, y, style.glyph('┐'));
    fb.set(x, bottom, style.glyph('└'));
    fb.set(right, bottom, style.glyph('┘'));
}

fn center_text(fb: &mut FrameBuffer, left: u16, width: u16, y: u16, text: &str) {
    let len = text.chars().count() as u16;
    let x = left + width.saturating_sub(len) / 2;
    fb.put_str(x, y, text, Style::new(Rgb::WHITE, SCREEN_BG).bold());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, Marathon};
    use crate::types::Rgba;

    fn screen() -> Viewport {
        Viewport::new(80, 24)
    }

    fn find(fb: &FrameBuffer, text: &str) -> bool {
        (0..fb.height()).any(|y| fb.row_text(y).contains(text))
    }

    #[test]
    fn renders_panel_and_active_piece() {
        let game = Marathon::new(GameConfig::with_seed(1));
        let fb = GameView::default().render(&game.snapshot(), screen());

        assert!(find(&fb, "SCORE"));
        assert!(find(&fb, "LEVEL"));
        assert!(!find(&fb, "GAME OVER"));

        // The ghost sits on the floor of an empty well.
        let ghosts = (0..fb.height())
            .flat_map(|y| (0..fb.width()).map(move |x| (x, y)))
            .filter(|&(x, y)| fb.get(x, y).map(|g| g.ch) == Some('░'))
            .count();
        assert_eq!(ghosts, 4 * 2);
    }

    #[test]
    fn clearing_rows_flash_white() {
        let mut snap = GameSnapshot::default();
        snap.grid[LINES - 1] = [Cell::filled(Rgba::RED); COLUMNS];
        snap.clearing.push(LINES - 1);
        snap.highlight_fraction = 1.0;

        let fb = GameView::default().render(&snap, screen());
        let left = (80 - (COLUMNS as u16 * 2 + 2)) / 2;
        let top = (24 - (LINES as u16 + 2)) / 2;
        let glyph = fb.get(left + 1, top + LINES as u16);

        assert_eq!(glyph.map(|g| g.style.fg), Some(Rgb::WHITE));
    }

    #[test]
    fn shows_game_over() {
        let snap = GameSnapshot {
            game_over: true,
            ..GameSnapshot::default()
        };
        let fb = GameView::default().render(&snap, screen());
        assert!(find(&fb, "GAME OVER"));
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let snap = GameSnapshot::default();
        let fb = GameView::default().render(&snap, Viewport::new(3, 2));
        assert_eq!(fb.width(), 3);
    }
}
