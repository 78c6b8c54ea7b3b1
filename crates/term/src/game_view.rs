//! GameView: draws a `GameState` into a framebuffer.
//!
//! Pure, no I/O. The board is drawn with each arena cell two terminal columns
//! wide to make up for the glyph aspect ratio.

use crate::core::{create_piece, GameState};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Cell, PieceKind};

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

const BG: Rgb = Rgb::new(0, 0, 0);
const FRAME: Rgb = Rgb::new(140, 140, 140);
const GRID: Rgb = Rgb::new(55, 55, 55);
const LABEL: Rgb = Rgb::new(170, 170, 170);
const VALUE: Rgb = Rgb::new(240, 240, 240);
const ALERT: Rgb = Rgb::new(255, 80, 80);

const PANEL_GAP: u16 = 2;
const PANEL_WIDTH: u16 = 10;

/// Display color for a piece kind
pub fn kind_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::T => Rgb::hex(0xFF0D72),
        PieceKind::O => Rgb::hex(0x0DC2FF),
        PieceKind::L => Rgb::hex(0x0DFF72),
        PieceKind::J => Rgb::hex(0xF538FF),
        PieceKind::I => Rgb::hex(0xFF8E0D),
        PieceKind::S => Rgb::hex(0xFFE138),
        PieceKind::Z => Rgb::hex(0x3877FF),
    }
}

/// Display color for an arena cell value, `None` for empty or unknown values
pub fn piece_color(cell: Cell) -> Option<Rgb> {
    PieceKind::from_color_index(cell).map(kind_color)
}

#[derive(Debug, Clone, Copy)]
pub struct GameView {
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

    /// Size of the bordered board in terminal cells.
    pub fn board_size(&self, arena_w: usize, arena_h: usize) -> (u16, u16) {
        (
            (arena_w as u16).saturating_mul(self.cell_w).saturating_add(2),
            (arena_h as u16).saturating_add(2),
        )
    }

    /// Top-left corner of the board border, centering board and panel.
    pub fn board_origin(&self, arena_w: usize, arena_h: usize, viewport: Viewport) -> (u16, u16) {
        let (bw, bh) = self.board_size(arena_w, arena_h);
        let total_w = bw + PANEL_GAP + PANEL_WIDTH;
        (
            viewport.width.saturating_sub(total_w) / 2,
            viewport.height.saturating_sub(bh) / 2,
        )
    }

    /// Render the game into `fb`, resizing it to the viewport.
    pub fn render_into(&self, state: &GameState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.reset(viewport.width, viewport.height);

        let arena = state.arena();
        let (ox, oy) = self.board_origin(arena.width(), arena.height(), viewport);
        let (bw, bh) = self.board_size(arena.width(), arena.height());

        self.draw_frame(fb, ox, oy, bw, bh);

        for y in 0..arena.height() {
            for (x, &v) in arena.row(y).iter().enumerate() {
                self.draw_cell(fb, ox, oy, x as i32, y as i32, v);
            }
        }

        if !state.game_over() {
            let pos = state.position();
            for (x, y, v) in state.active_shape().occupied() {
                let (ax, ay) = (pos.x + x, pos.y + y);
                if ax >= 0 && ay >= 0 && (ax as usize) < arena.width() && (ay as usize) < arena.height() {
                    self.draw_cell(fb, ox, oy, ax, ay, v);
                }
            }
        }

        self.draw_panel(state, fb, ox + bw + PANEL_GAP, oy);

        if state.game_over() {
            self.draw_game_over(fb, ox, oy, bw, bh);
        }
    }

    fn draw_frame(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = CellStyle::new(FRAME, BG);
        let (right, bottom) = (x + w - 1, y + h - 1);
        for cx in x + 1..right {
            fb.put_char(cx, y, '─', style);
            fb.put_char(cx, bottom, '─', style);
        }
        for cy in y + 1..bottom {
            fb.put_char(x, cy, '│', style);
            fb.put_char(right, cy, '│', style);
        }
        fb.put_char(x, y, '┌', style);
        fb.put_char(right, y, '┐', style);
        fb.put_char(x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);
    }

    fn draw_cell(&self, fb: &mut FrameBuffer, ox: u16, oy: u16, x: i32, y: i32, v: Cell) {
        let cx = ox + 1 + x as u16 * self.cell_w;
        let cy = oy + 1 + y as u16;
        match piece_color(v) {
            Some(color) => {
                let style = CellStyle::new(color, BG);
                for dx in 0..self.cell_w {
                    fb.put_char(cx + dx, cy, '█', style);
                }
            }
            None => {
                let style = CellStyle::new(GRID, BG);
                for dx in 0..self.cell_w {
                    let ch = if dx + 1 == self.cell_w { '·' } else { ' ' };
                    fb.put_char(cx + dx, cy, ch, style);
                }
            }
        }
    }

    fn draw_panel(&self, state: &GameState, fb: &mut FrameBuffer, x: u16, y: u16) {
        let label = CellStyle::new(LABEL, BG);
        let value = CellStyle::new(VALUE, BG).bold();

        let stats = [("SCORE", state.score()), ("LINES", state.lines()), ("LEVEL", state.level())];
        let mut row = y + 1;
        for (name, n) in stats {
            fb.put_str(x, row, name, label);
            fb.put_u32(x, row + 1, n, value);
            row += 3;
        }

        fb.put_str(x, row, "NEXT", label);
        if let Some(kind) = state.next_piece() {
            let shape = create_piece(kind);
            let style = CellStyle::new(kind_color(kind), BG);
            // Skip blank rows so every preview starts right under the label.
            let mut py = row + 1;
            for r in shape.rows().filter(|r| r.iter().any(|&c| c != 0)) {
                for (i, &c) in r.iter().enumerate() {
                    if c != 0 {
                        let px = x + i as u16 * self.cell_w;
                        for dx in 0..self.cell_w {
                            fb.put_char(px + dx, py, '█', style);
                        }
                    }
                }
                py += 1;
            }
        }
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, ox: u16, oy: u16, bw: u16, bh: u16) {
        let title = "GAME OVER";
        let hint = "r: restart";
        let mid = oy + bh / 2;
        let center = |s: &str| ox + bw.saturating_sub(s.chars().count() as u16) / 2;
        fb.put_str(center(title), mid - 1, title, CellStyle::new(ALERT, BG).bold());
        fb.put_str(center(hint), mid, hint, CellStyle::new(VALUE, BG));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(state: &GameState) -> (FrameBuffer, (u16, u16)) {
        let view = GameView::default();
        let viewport = Viewport::new(80, 24);
        let mut fb = FrameBuffer::new(0, 0);
        view.render_into(state, viewport, &mut fb);
        let arena = state.arena();
        (fb, view.board_origin(arena.width(), arena.height(), viewport))
    }

    fn any_row_contains(fb: &FrameBuffer, needle: &str) -> bool {
        (0..fb.height()).any(|y| fb.row_text(y).contains(needle))
    }

    fn board_has_blocks(fb: &FrameBuffer, origin: (u16, u16), state: &GameState) -> bool {
        let (bw, bh) = GameView::default().board_size(state.arena().width(), state.arena().height());
        (origin.1..origin.1 + bh).any(|y| {
            (origin.0..origin.0 + bw).any(|x| fb.get(x, y).map(|c| c.ch) == Some('█'))
        })
    }

    #[test]
    fn test_palette_covers_every_kind() {
        for kind in PieceKind::ALL {
            assert_eq!(piece_color(kind.color_index()), Some(kind_color(kind)));
        }
        assert_eq!(piece_color(0), None);
        assert_eq!(piece_color(8), None);
        assert_eq!(kind_color(PieceKind::T), Rgb::new(0xFF, 0x0D, 0x72));
    }

    #[test]
    fn test_renders_panel_and_active_piece() {
        let state = GameState::new(42);
        let (fb, origin) = render(&state);
        assert_eq!(fb.width(), 80);
        assert!(any_row_contains(&fb, "SCORE"));
        assert!(any_row_contains(&fb, "LINES"));
        assert!(any_row_contains(&fb, "LEVEL"));
        assert!(any_row_contains(&fb, "NEXT"));
        assert!(board_has_blocks(&fb, origin, &state));
        assert!(!any_row_contains(&fb, "GAME OVER"));
        assert_eq!(fb.get(origin.0, origin.1).map(|c| c.ch), Some('┌'));
    }

    #[test]
    fn test_game_over_hides_active_piece() {
        let mut state = GameState::new(42);
        state.arena_mut().fill(1);
        state.spawn_next();
        assert!(state.game_over());
        state.arena_mut().fill(0);

        let (fb, origin) = render(&state);
        assert!(any_row_contains(&fb, "GAME OVER"));
        assert!(any_row_contains(&fb, "r: restart"));
        assert!(!board_has_blocks(&fb, origin, &state));
    }

    #[test]
    fn test_tiny_viewport_does_not_panic() {
        let state = GameState::new(7);
        let view = GameView::default();
        let mut fb = FrameBuffer::new(0, 0);
        view.render_into(&state, Viewport::new(5, 3), &mut fb);
        assert_eq!(fb.height(), 3);
    }
}
