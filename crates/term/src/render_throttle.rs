//! Frame pacing for the terminal runner.
//!
//! A word-search screen only changes on a press, a commit, a countdown second or a
//! cursor move, so frames are keyed on a fingerprint of those inputs and redrawn
//! when it changes. A slow heartbeat still repaints an unchanged screen so a
//! terminal that lost its contents recovers.

use crate::game_view::{Hud, Viewport};
use crate::types::Position;

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    heartbeat_ms: u64,
    last_render_ms: u64,
    last_fingerprint: u64,
    has_rendered: bool,
}

impl RenderThrottle {
    pub fn new(heartbeat_ms: u64) -> Self {
        Self {
            heartbeat_ms,
            last_render_ms: 0,
            last_fingerprint: 0,
            has_rendered: false,
        }
    }

    /// Decide whether to draw a frame at `now_ms`.
    ///
    /// The first call always renders. After that a frame is drawn when `fingerprint`
    /// differs from the last drawn one, or once `heartbeat_ms` has passed.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64) -> bool {
        let due = !self.has_rendered
            || fingerprint != self.last_fingerprint
            || now_ms.saturating_sub(self.last_render_ms) >= self.heartbeat_ms;
        if due {
            self.has_rendered = true;
            self.last_render_ms = now_ms;
            self.last_fingerprint = fingerprint;
        }
        due
    }

    /// Forget the last frame so the next call renders (terminal resize).
    pub fn reset(&mut self) {
        self.has_rendered = false;
    }
}

/// Cheap FNV-1a mix of everything the screen depends on.
pub fn frame_fingerprint(revision: u64, hud: &Hud, viewport: Viewport) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    let cursor = hud
        .cursor
        .map(|Position { row, col }| ((row as u64) << 8) | col as u64 | 1 << 16)
        .unwrap_or(0);
    let parts = [
        revision,
        hud.remaining_secs as u64,
        hud.timed_out as u64,
        cursor,
        ((viewport.width as u64) << 16) | viewport.height as u64,
    ];

    parts.iter().fold(OFFSET, |hash, part| {
        part.to_le_bytes()
            .iter()
            .fold(hash, |h, b| (h ^ *b as u64).wrapping_mul(PRIME))
    })
}
