//! GameView: maps `core::RoundState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). Drawing and mouse hit-testing share one layout
//! computation so a click always lands on the cell that was drawn there.

use crate::core::RoundState;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Cell, Position, RoundPhase};

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

/// Runner-owned state drawn next to the round (not part of the core).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hud {
    pub cursor: Option<Position>,
    pub remaining_secs: u32,
    pub timed_out: bool,
}

const PLAIN: Rgb = Rgb::new(0xc1, 0x85, 0x00);
const CORRECT: Rgb = Rgb::new(0x54, 0xb5, 0x4a);
const PRESSED: Rgb = Rgb::new(0xf0, 0xb7, 0x3c);
const HIGHLIGHTED: Rgb = Rgb::new(0x43, 0x72, 0xd7);
const WHITE: Rgb = Rgb::new(255, 255, 255);
const BLACK: Rgb = Rgb::new(0, 0, 0);
const FOUND_WORD: Rgb = Rgb::new(0x3c, 0xc8, 0x3c);

/// Where the grid sits inside the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    /// Top-left corner of the border
    x: u16,
    y: u16,
    frame_w: u16,
    frame_h: u16,
}

/// Terminal renderer for a word-search round.
pub struct GameView {
    /// Letter cell width in terminal columns.
    cell_w: u16,
    /// Letter cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 3x1 keeps letters roughly square and leaves room for padding.
        Self {
            cell_w: 3,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    fn layout(&self, rows: u8, cols: u8, viewport: Viewport) -> Layout {
        let frame_w = cols as u16 * self.cell_w + 2;
        let frame_h = rows as u16 * self.cell_h + 2;
        Layout {
            x: viewport.width.saturating_sub(frame_w + PANEL_W) / 2,
            y: viewport.height.saturating_sub(frame_h) / 2,
            frame_w,
            frame_h,
        }
    }

    /// Grid position under terminal coordinates `(x, y)`, if any.
    pub fn cell_at(
        &self,
        round: &RoundState,
        viewport: Viewport,
        x: u16,
        y: u16,
    ) -> Option<Position> {
        let board = round.board();
        let layout = self.layout(board.rows(), board.cols(), viewport);
        let inner_x = x.checked_sub(layout.x + 1)?;
        let inner_y = y.checked_sub(layout.y + 1)?;
        let col = inner_x / self.cell_w;
        let row = inner_y / self.cell_h;
        if row >= board.rows() as u16 || col >= board.cols() as u16 {
            return None;
        }
        Some(Position::new(row as u8, col as u8))
    }

    /// Render the current round into a new framebuffer.
    pub fn render(&self, round: &RoundState, hud: &Hud, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(round, hud, viewport, &mut fb);
        fb
    }

    /// Render into a framebuffer kept across frames, resizing it to the viewport.
    pub fn render_into(
        &self,
        round: &RoundState,
        hud: &Hud,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let board = round.board();
        let layout = self.layout(board.rows(), board.cols(), viewport);

        let border = CellStyle::new(Rgb::new(200, 200, 200), BLACK);
        self.draw_border(fb, layout, border);

        for pos in board.positions() {
            if let Some(cell) = board.get(pos) {
                let under_cursor = hud.cursor == Some(pos) && round.phase() == RoundPhase::Playing;
                self.draw_letter(fb, layout, pos, cell, under_cursor);
            }
        }

        self.draw_side_panel(fb, round, hud, viewport, layout);

        let overlay = match round.phase() {
            RoundPhase::Ready => Some("PRESS ENTER TO START"),
            RoundPhase::Won => Some("YOU WIN!"),
            RoundPhase::Ended if hud.timed_out => Some("TIME UP"),
            RoundPhase::Ended => Some("ROUND OVER"),
            RoundPhase::Playing => None,
        };
        if let Some(text) = overlay {
            self.draw_overlay_text(fb, layout, text);
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, layout: Layout, style: CellStyle) {
        let Layout {
            x,
            y,
            frame_w: w,
            frame_h: h,
        } = layout;

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_letter(
        &self,
        fb: &mut FrameBuffer,
        layout: Layout,
        pos: Position,
        cell: &Cell,
        under_cursor: bool,
    ) {
        // Correct wins over pressed, pressed over highlighted.
        let bg = if cell.correct {
            CORRECT
        } else if cell.pressed {
            PRESSED
        } else if cell.highlighted {
            HIGHLIGHTED
        } else {
            PLAIN
        };
        let mut style = CellStyle::new(WHITE, bg).bold();
        style.underline = under_cursor;

        let px = layout.x + 1 + pos.col as u16 * self.cell_w;
        let py = layout.y + 1 + pos.row as u16 * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
        fb.put_char(px + self.cell_w / 2, py + self.cell_h / 2, cell.letter, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        round: &RoundState,
        hud: &Hud,
        viewport: Viewport,
        layout: Layout,
    ) {
        let panel_x = layout.x.saturating_add(layout.frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), BLACK).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), BLACK);
        let found = CellStyle::new(FOUND_WORD, BLACK).bold();

        let bank = round.bank();
        let mut y = layout.y;
        fb.put_str(panel_x, y, "TIME", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{}", hud.remaining_secs), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "FOUND", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{}/{}", bank.found_count(), bank.len()), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "WORDS", label);
        y = y.saturating_add(1);
        for entry in bank.entries() {
            if y >= viewport.height {
                break;
            }
            let style = if entry.found { found } else { value };
            fb.put_str(panel_x, y, &entry.word, style);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, layout: Layout, text: &str) {
        let mid_y = layout.y.saturating_add(layout.frame_h / 2);
        let style = CellStyle::new(WHITE, BLACK).bold();
        fb.put_str_centered(layout.x, layout.frame_w, mid_y, text, style);
        fb.put_str_centered(
            layout.x,
            layout.frame_w,
            mid_y.saturating_add(1),
            "r: new board  q: quit",
            CellStyle::new(Rgb::new(160, 160, 160), BLACK),
        );
    }
}

/// Columns reserved to the right of the grid for the side panel
const PANEL_W: u16 = 14;
