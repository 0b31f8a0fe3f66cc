//! Terminal word-search runner (default binary).
//!
//! Owns everything outside the puzzle rules: configuration, logging, the round
//! countdown, the keyboard cursor and the crossterm event loop. Rendering goes through
//! the framebuffer-based `GameView`.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use tui_wordsearch::core::{RoundConfig, RoundState};
use tui_wordsearch::input::{handle_key_event, mouse_press, should_quit, GridCursor};
use tui_wordsearch::term::{
    frame_fingerprint, FrameBuffer, GameView, Hud, RenderThrottle, TerminalRenderer, Viewport,
};
use tui_wordsearch::types::{PlayerAction, RoundEvent, RoundPhase, TICK_MS};
use tui_wordsearch::{load_settings, Countdown, Settings};

/// Repaint an unchanged screen at least this often.
const HEARTBEAT_MS: u64 = 1000;

#[derive(Debug, Parser)]
#[command(name = "tui-wordsearch", version, about = "Find the hidden words before time runs out")]
struct Args {
    /// TOML config file (defaults to ./wordsearch.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fixed board seed
    #[arg(long)]
    seed: Option<u64>,

    /// Round length in seconds
    #[arg(long, value_name = "SECS")]
    time: Option<u32>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut settings = load_settings(args.config.as_deref())?;
    if args.seed.is_some() {
        settings.seed = args.seed;
    }
    if let Some(secs) = args.time {
        settings.round_secs = secs;
    }

    init_tracing(&settings)?;

    // Generate before touching the terminal so config errors print normally.
    let mut session = Session::new(&settings)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_tracing(settings: &Settings) -> Result<()> {
    let file = File::create(&settings.log_file)
        .with_context(|| format!("failed to open log file '{}'", settings.log_file.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// One play session: the current round plus the runner-owned state around it.
struct Session {
    config: RoundConfig,
    restarts: u64,
    round: RoundState,
    cursor: GridCursor,
    countdown: Countdown,
}

impl Session {
    fn new(settings: &Settings) -> Result<Self> {
        let config = settings.to_round_config();
        let round = RoundState::new(&config).context("failed to generate board")?;
        Ok(Self {
            cursor: GridCursor::new(config.rows, config.cols),
            countdown: Countdown::new(settings.round_duration_ms()),
            restarts: 0,
            config,
            round,
        })
    }

    /// Replace the round with a fresh board. A fixed seed advances per restart so
    /// the sequence of boards stays reproducible.
    fn restart(&mut self) {
        let mut config = self.config.clone();
        config.seed = config.seed.map(|s| s.wrapping_add(self.restarts + 1));

        match RoundState::new(&config) {
            Ok(round) => {
                self.restarts += 1;
                self.round = round;
                self.cursor = GridCursor::new(config.rows, config.cols);
                self.countdown.reset();
                info!(seed = self.round.seed(), "round restarted");
            }
            Err(err) => error!(%err, "failed to generate a new board"),
        }
    }

    fn start(&mut self) {
        if self.round.phase() == RoundPhase::Ready {
            self.round.start();
            self.countdown.start();
            info!(seed = self.round.seed(), "round started");
        }
    }

    fn press_cursor(&mut self) {
        let pos = self.cursor.position();
        let events = self.round.press(pos);
        self.observe(&events);
    }

    fn apply(&mut self, action: PlayerAction) {
        debug!(
            action = action.as_str(),
            phase = self.round.phase().as_str(),
            "action"
        );
        if self.cursor.apply(action) {
            return;
        }
        match action {
            PlayerAction::Start if self.round.phase() == RoundPhase::Ready => self.start(),
            PlayerAction::Start | PlayerAction::Select => self.press_cursor(),
            PlayerAction::Restart => self.restart(),
            _ => {}
        }
    }

    fn tick(&mut self, elapsed_ms: u32) {
        let events = self.round.tick(elapsed_ms);
        self.observe(&events);

        if self.countdown.tick(elapsed_ms) {
            info!(
                found = self.round.found_count(),
                total = self.round.bank().len(),
                "time up"
            );
            self.round.end();
        }
    }

    fn observe(&mut self, events: &[RoundEvent]) {
        for event in events {
            match event {
                RoundEvent::WordFound { word } => info!(word = word.as_str(), "found"),
                RoundEvent::RoundWon => {
                    self.countdown.stop();
                    info!(
                        remaining_secs = self.countdown.remaining_secs(),
                        "all words found"
                    );
                }
            }
        }
    }

    fn hud(&self) -> Hud {
        Hud {
            cursor: Some(self.cursor.position()),
            remaining_secs: self.countdown.remaining_secs(),
            timed_out: self.countdown.expired(),
        }
    }
}

fn run(term: &mut TerminalRenderer, session: &mut Session) -> Result<()> {
    let view = GameView::default();
    let mut throttle = RenderThrottle::new(HEARTBEAT_MS);
    let mut fb = FrameBuffer::new(0, 0);

    let started = Instant::now();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let hud = session.hud();
        let now_ms = started.elapsed().as_millis() as u64;
        let fingerprint = frame_fingerprint(session.round.revision(), &hud, viewport);
        if throttle.should_render(now_ms, fingerprint) {
            view.render_into(&session.round, &hud, viewport, &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!("quit");
                        session.round.end();
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        session.apply(action);
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some((x, y)) = mouse_press(mouse) {
                        if let Some(pos) = view.cell_at(&session.round, viewport, x, y) {
                            session.cursor.set(pos);
                            session.press_cursor();
                        }
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    throttle.reset();
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            session.tick(TICK_MS);
        }
    }
}
