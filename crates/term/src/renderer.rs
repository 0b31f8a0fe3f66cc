//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Every frame is painted as a list of horizontal runs. The first frame, and any
//! frame after a resize or `invalidate`, paints every row; later frames only the
//! runs whose cells changed since the previous frame. The previous frame is kept
//! by swapping buffers with the caller.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// A horizontal span of cells on one row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Run {
    x: u16,
    y: u16,
    len: u16,
}

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
        }
    }

    /// Raw mode, alternate screen, mouse reporting on, cursor hidden.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout
            .queue(terminal::EnterAlternateScreen)?
            .queue(EnableMouseCapture)?
            .queue(cursor::Hide)?
            .queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    /// Undo [`enter`](Self::enter). Safe to call after a failed frame.
    pub fn exit(&mut self) -> Result<()> {
        self.stdout
            .queue(ResetColor)?
            .queue(SetAttribute(Attribute::Reset))?
            .queue(terminal::EnableLineWrap)?
            .queue(cursor::Show)?
            .queue(DisableMouseCapture)?
            .queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to repaint everything (terminal resize).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw `fb`, then swap it into the renderer as the previous frame.
    ///
    /// On return `fb` holds the frame before it, sized like the new one, so the
    /// caller keeps rendering into one buffer without cloning.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        let runs = match &self.last {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                changed_runs(prev, fb)
            }
            _ => {
                self.stdout
                    .queue(terminal::Clear(terminal::ClearType::All))?;
                full_runs(fb)
            }
        };

        self.paint(fb, &runs)?;
        retain_frame(&mut self.last, fb);
        Ok(())
    }

    fn paint(&mut self, fb: &FrameBuffer, runs: &[Run]) -> Result<()> {
        let mut current: Option<CellStyle> = None;
        for run in runs {
            self.stdout.queue(cursor::MoveTo(run.x, run.y))?;
            for dx in 0..run.len {
                let cell = fb.get(run.x + dx, run.y).unwrap_or_default();
                if current != Some(cell.style) {
                    self.apply_style(cell.style)?;
                    current = Some(cell.style);
                }
                self.stdout.queue(Print(cell.ch))?;
            }
        }

        self.stdout
            .queue(ResetColor)?
            .queue(SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;
        Ok(())
    }

    fn apply_style(&mut self, style: CellStyle) -> Result<()> {
        self.stdout
            .queue(SetAttribute(Attribute::Reset))?
            .queue(SetForegroundColor(rgb_to_color(style.fg)))?
            .queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
        if style.bold {
            self.stdout.queue(SetAttribute(Attribute::Bold))?;
        }
        if style.underline {
            self.stdout.queue(SetAttribute(Attribute::Underlined))?;
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Keep `fb` as the last frame and hand the previous storage back through it.
fn retain_frame(last: &mut Option<FrameBuffer>, fb: &mut FrameBuffer) {
    let mut prev = last
        .take()
        .unwrap_or_else(|| FrameBuffer::new(fb.width(), fb.height()));
    prev.resize(fb.width(), fb.height());
    std::mem::swap(&mut prev, fb);
    *last = Some(prev);
}

fn full_runs(fb: &FrameBuffer) -> Vec<Run> {
    (0..fb.height())
        .map(|y| Run {
            x: 0,
            y,
            len: fb.width(),
        })
        .collect()
}

/// Maximal runs of cells that differ between two same-sized frames.
fn changed_runs(prev: &FrameBuffer, next: &FrameBuffer) -> Vec<Run> {
    let mut runs = Vec::new();
    for y in 0..next.height() {
        let mut start: Option<u16> = None;
        for x in 0..next.width() {
            let dirty = prev.get(x, y) != next.get(x, y);
            match (dirty, start) {
                (true, None) => start = Some(x),
                (false, Some(s)) => {
                    runs.push(Run { x: s, y, len: x - s });
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            runs.push(Run {
                x: s,
                y,
                len: next.width() - s,
            });
        }
    }
    runs
}
