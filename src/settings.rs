//! Runner configuration: defaults, then an optional TOML file, then environment.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;

use crate::core::RoundConfig;
use crate::types::{DEFAULT_ROUND_SECS, DEFAULT_WORDS, GRID_COLS, GRID_ROWS, IDLE_COMMIT_MS};

/// Config file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "wordsearch.toml";

/// Log file used when neither the config nor `WORDSEARCH_LOG` names one.
pub const DEFAULT_LOG_FILE: &str = "tui-wordsearch.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub rows: u8,
    pub cols: u8,
    pub words: Vec<String>,
    pub round_secs: u32,
    pub idle_commit_ms: u32,
    pub seed: Option<u64>,
    pub log_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rows: GRID_ROWS,
            cols: GRID_COLS,
            words: DEFAULT_WORDS.iter().map(|w| w.to_string()).collect(),
            round_secs: DEFAULT_ROUND_SECS,
            idle_commit_ms: IDLE_COMMIT_MS,
            seed: None,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl Settings {
    pub fn to_round_config(&self) -> RoundConfig {
        RoundConfig {
            rows: self.rows,
            cols: self.cols,
            words: self.words.clone(),
            idle_commit_ms: self.idle_commit_ms,
            seed: self.seed,
            ..RoundConfig::default()
        }
    }

    pub fn round_duration_ms(&self) -> u32 {
        self.round_secs.saturating_mul(1000)
    }
}

/// On-disk shape; every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    rows: Option<u8>,
    cols: Option<u8>,
    words: Option<Vec<String>>,
    round_secs: Option<u32>,
    idle_ms: Option<u32>,
    seed: Option<u64>,
    log_file: Option<PathBuf>,
}

/// Load settings from `path` (or [`DEFAULT_CONFIG_FILE`] if present) and the process env.
///
/// An explicit path that cannot be read is an error; a missing default file is not.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    load_settings_with(path, |key| std::env::var(key).ok())
}

/// [`load_settings`] with an injectable environment lookup.
pub fn load_settings_with<F>(path: Option<&Path>, env: F) -> anyhow::Result<Settings>
where
    F: Fn(&str) -> Option<String>,
{
    let mut settings = Settings::default();

    let raw = match path {
        Some(path) => Some(
            fs::read_to_string(path)
                .with_context(|| format!("failed to read config file '{}'", path.display()))?,
        ),
        None => fs::read_to_string(DEFAULT_CONFIG_FILE).ok(),
    };
    if let Some(raw) = raw {
        let origin = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
        let file_cfg: FileSettings = toml::from_str(&raw)
            .with_context(|| format!("invalid config file '{}'", origin.display()))?;
        apply_file(&mut settings, file_cfg);
    }

    apply_env(&mut settings, env);
    Ok(settings)
}

fn apply_file(settings: &mut Settings, file_cfg: FileSettings) {
    if let Some(v) = file_cfg.rows {
        settings.rows = v;
    }
    if let Some(v) = file_cfg.cols {
        settings.cols = v;
    }
    if let Some(v) = file_cfg.words {
        settings.words = normalize_words(v);
    }
    if let Some(v) = file_cfg.round_secs {
        settings.round_secs = v;
    }
    if let Some(v) = file_cfg.idle_ms {
        settings.idle_commit_ms = v;
    }
    if file_cfg.seed.is_some() {
        settings.seed = file_cfg.seed;
    }
    if let Some(v) = file_cfg.log_file {
        settings.log_file = v;
    }
}

fn apply_env<F>(settings: &mut Settings, env: F)
where
    F: Fn(&str) -> Option<String>,
{
    // Unparseable values are skipped so a stray export cannot block start-up.
    let parsed = |key: &str| env(key).and_then(|v| v.trim().parse::<u64>().ok());

    if let Some(v) = parsed("WORDSEARCH_ROWS").and_then(|v| u8::try_from(v).ok()) {
        settings.rows = v;
    }
    if let Some(v) = parsed("WORDSEARCH_COLS").and_then(|v| u8::try_from(v).ok()) {
        settings.cols = v;
    }
    if let Some(v) = env("WORDSEARCH_WORDS") {
        let words = normalize_words(v.split(','));
        if !words.is_empty() {
            settings.words = words;
        }
    }
    if let Some(v) = parsed("WORDSEARCH_ROUND_SECS").and_then(|v| u32::try_from(v).ok()) {
        settings.round_secs = v;
    }
    if let Some(v) = parsed("WORDSEARCH_IDLE_MS").and_then(|v| u32::try_from(v).ok()) {
        settings.idle_commit_ms = v;
    }
    if let Some(v) = parsed("WORDSEARCH_SEED") {
        settings.seed = Some(v);
    }
    if let Some(v) = env("WORDSEARCH_LOG").filter(|v| !v.trim().is_empty()) {
        settings.log_file = PathBuf::from(v.trim());
    }
}

/// Trim and upper-case word entries, dropping blanks.
pub fn normalize_words<I, S>(words: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .map(|w| w.as_ref().trim().to_ascii_uppercase())
        .filter(|w| !w.is_empty())
        .collect()
}
