//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.mousemaze/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;

use crate::UiMode;
use crate::core::maze::{DEFAULT_PLAYER_MARKER, Position};
use crate::core::walker::DEFAULT_START;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MazeConfig {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub demos: DemoConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GameConfig {
    pub ui: Option<UiMode>,
    pub maze_file: Option<String>,
    pub start_x: Option<usize>,
    pub start_y: Option<usize>,
    pub player_marker: Option<char>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DemoConfig {
    pub workers: Option<Vec<String>>,
    pub base_delay_ms: Option<u64>,
    pub timeout_ms: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_WORKERS: &[&str] = &["alpha", "beta", "gamma"];
pub const DEFAULT_BASE_DELAY_MS: u64 = 200;
pub const DEFAULT_TIMEOUT_MS: u64 = 1000;

const CONFIG_DIR: &str = ".mousemaze";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub ui: UiMode,
    /// `None` = built-in layout.
    pub maze_file: Option<PathBuf>,
    pub start: Position,
    pub player_marker: char,
    pub workers: Vec<String>,
    pub base_delay_ms: u64,
    pub timeout_ms: u64,
}

/// Settings given on the command line. `None` = not specified.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub ui: Option<UiMode>,
    pub maze_file: Option<PathBuf>,
    pub start: Option<Position>,
    pub workers: Option<Vec<String>>,
    pub timeout_ms: Option<u64>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.mousemaze`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(CONFIG_DIR))
}

/// Returns the path to `~/.mousemaze/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.mousemaze/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `MazeConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<MazeConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(MazeConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<MazeConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(MazeConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: MazeConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# mousemaze configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [game]
# ui = "console"                 # "console" or "tui" (env: MOUSEMAZE_UI)
# maze_file = "mazes/big.txt"    # Relative to ~/.mousemaze/ (env: MOUSEMAZE_MAZE_FILE)
# start_x = 1
# start_y = 1
# player_marker = "M"            # (env: MOUSEMAZE_PLAYER_MARKER)

# [demos]
# workers = ["alpha", "beta", "gamma"]
# base_delay_ms = 200
# timeout_ms = 1000
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &MazeConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// `resolve` with an injectable environment lookup.
pub fn resolve_with_env<F>(config: &MazeConfig, cli: &CliOverrides, env: F) -> ResolvedConfig
where
    F: Fn(&str) -> Option<String>,
{
    // UI: CLI → env → config → default
    let ui = cli
        .ui
        .or_else(|| env("MOUSEMAZE_UI").and_then(|s| parse_ui(&s)))
        .or(config.game.ui)
        .unwrap_or_default();

    // Maze file: CLI (as given) → env (as given) → config (relative to ~/.mousemaze/)
    let maze_file = cli
        .maze_file
        .clone()
        .or_else(|| env("MOUSEMAZE_MAZE_FILE").map(PathBuf::from))
        .or_else(|| config.game.maze_file.as_deref().map(config_relative));

    // Start: CLI → config (per axis) → default
    let start = cli.start.unwrap_or_else(|| {
        Position::new(
            config.game.start_x.unwrap_or(DEFAULT_START.x),
            config.game.start_y.unwrap_or(DEFAULT_START.y),
        )
    });

    // Marker: env → config → default
    let player_marker = env("MOUSEMAZE_PLAYER_MARKER")
        .and_then(|s| single_char(&s))
        .or(config.game.player_marker)
        .unwrap_or(DEFAULT_PLAYER_MARKER);

    let workers = cli
        .workers
        .clone()
        .or_else(|| config.demos.workers.clone())
        .unwrap_or_else(|| DEFAULT_WORKERS.iter().map(|s| s.to_string()).collect());

    ResolvedConfig {
        ui,
        maze_file,
        start,
        player_marker,
        workers,
        base_delay_ms: config.demos.base_delay_ms.unwrap_or(DEFAULT_BASE_DELAY_MS),
        timeout_ms: cli
            .timeout_ms
            .or(config.demos.timeout_ms)
            .unwrap_or(DEFAULT_TIMEOUT_MS),
    }
}

fn parse_ui(value: &str) -> Option<UiMode> {
    match UiMode::from_str(value, true) {
        Ok(ui) => Some(ui),
        Err(_) => {
            warn!("Ignoring MOUSEMAZE_UI={value:?}: expected \"console\" or \"tui\"");
            None
        }
    }
}

fn single_char(value: &str) -> Option<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => {
            warn!("Ignoring MOUSEMAZE_PLAYER_MARKER={value:?}: expected a single character");
            None
        }
    }
}

/// Config-file paths are relative to `~/.mousemaze/` unless absolute.
fn config_relative(file: &str) -> PathBuf {
    let path = PathBuf::from(file);
    if path.is_absolute() {
        return path;
    }
    match config_dir() {
        Some(dir) => dir.join(path),
        None => path,
    }
}
