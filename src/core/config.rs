//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.folio/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::content::{PortfolioContent, Project, SkillCategory, Stat};
use crate::core::counter::{COUNTER_DURATION, FRAME_INTERVAL};
use crate::core::scroll::ScrollThresholds;
use crate::core::theme::Theme;
use crate::core::typewriter::{INITIAL_DELAY, TypewriterTimings};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FolioConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub typewriter: TypewriterConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub counters: CountersConfig,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub theme: Option<Theme>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ProfileConfig {
    pub name: Option<String>,
    pub greeting: Option<String>,
    pub about: Option<Vec<String>>,
    pub contact: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TypewriterConfig {
    pub phrases: Option<Vec<String>>,
    pub initial_delay_ms: Option<u64>,
    pub type_delay_ms: Option<u64>,
    pub delete_delay_ms: Option<u64>,
    pub end_pause_ms: Option<u64>,
    pub next_pause_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ScrollConfig {
    pub scrolled_after: Option<f64>,
    pub hide_after: Option<f64>,
    pub section_offset: Option<f64>,
    pub reveal_margin: Option<f64>,
    pub stats_margin: Option<f64>,
    pub parallax_rate: Option<f64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CountersConfig {
    pub duration_ms: Option<u64>,
    pub frame_ms: Option<u64>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Explicit theme from CLI/env/config. `None` defers to the saved preference.
    pub theme: Option<Theme>,
    pub content: PortfolioContent,
    pub initial_delay: Duration,
    pub timings: TypewriterTimings,
    pub thresholds: ScrollThresholds,
    pub counter_duration: Duration,
    pub counter_frame: Duration,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.folio/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".folio").join("config.toml"))
}

/// Load config from `explicit` if given, else from `~/.folio/config.toml`.
///
/// A missing default file is generated (commented out) and treated as empty.
/// A missing explicit file is an error.
pub fn load_config(explicit: Option<&Path>) -> Result<FolioConfig, ConfigError> {
    if let Some(path) = explicit {
        return read_config(path);
    }

    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(FolioConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(FolioConfig::default());
    }

    read_config(&path)
}

fn read_config(path: &Path) -> Result<FolioConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: FolioConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Folio Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# theme = "dark"                     # "dark" or "light"; or set FOLIO_THEME

# [profile]
# name = "Alex Morgan"
# greeting = "Hi, I'm"
# about = ["First paragraph.", "Second paragraph."]
# contact = ["alex@example.dev"]

# [typewriter]
# phrases = ["Full-Stack Developer", "Problem Solver"]   # or FOLIO_PHRASES="a|b"
# initial_delay_ms = 1000
# type_delay_ms = 100
# delete_delay_ms = 50
# end_pause_ms = 2000
# next_pause_ms = 500

# [scroll]                            # CSS pixels; one terminal row is 16px
# scrolled_after = 50
# hide_after = 200
# section_offset = 100
# reveal_margin = 150
# stats_margin = 100
# parallax_rate = 0.3

# [counters]
# duration_ms = 2000
# frame_ms = 16

# [[stats]]
# label = "Projects shipped"
# count = 42

# [[projects]]
# title = "Trailhead"
# category = "web"
# description = "Route planner with offline maps."

# [[skills]]
# name = "Backend"
# items = ["Rust", "PostgreSQL"]
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
///
/// `cli_theme` comes from the `--theme` flag (None = not specified).
pub fn resolve(config: &FolioConfig, cli_theme: Option<Theme>) -> Result<ResolvedConfig, ConfigError> {
    // Theme: CLI → env → config → saved preference (decided later)
    let theme = cli_theme
        .or_else(|| {
            std::env::var("FOLIO_THEME").ok().and_then(|v| {
                let parsed = Theme::parse(&v);
                if parsed.is_none() {
                    warn!("Ignoring unknown FOLIO_THEME value: {}", v);
                }
                parsed
            })
        })
        .or(config.general.theme);

    // Phrases: env → config → default
    let phrases = std::env::var("FOLIO_PHRASES")
        .ok()
        .map(|v| {
            v.split('|')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .or_else(|| config.typewriter.phrases.clone());

    let content = resolve_content(config, phrases)?;

    let tw = &config.typewriter;
    let defaults = TypewriterTimings::default();
    let timings = TypewriterTimings {
        type_delay: millis_or(tw.type_delay_ms, defaults.type_delay),
        delete_delay: millis_or(tw.delete_delay_ms, defaults.delete_delay),
        end_pause: millis_or(tw.end_pause_ms, defaults.end_pause),
        next_pause: millis_or(tw.next_pause_ms, defaults.next_pause),
    };

    let sc = &config.scroll;
    let base = ScrollThresholds::default();
    let thresholds = ScrollThresholds {
        scrolled_after: sc.scrolled_after.unwrap_or(base.scrolled_after),
        hide_after: sc.hide_after.unwrap_or(base.hide_after),
        section_offset: sc.section_offset.unwrap_or(base.section_offset),
        reveal_margin: sc.reveal_margin.unwrap_or(base.reveal_margin),
        stats_margin: sc.stats_margin.unwrap_or(base.stats_margin),
        parallax_rate: sc.parallax_rate.unwrap_or(base.parallax_rate),
    };

    let counter_frame = millis_or(config.counters.frame_ms, FRAME_INTERVAL);
    if counter_frame.is_zero() {
        return Err(ConfigError::Invalid("counters.frame_ms must be positive".to_string()));
    }

    Ok(ResolvedConfig {
        theme,
        content,
        initial_delay: millis_or(tw.initial_delay_ms, INITIAL_DELAY),
        timings,
        thresholds,
        counter_duration: millis_or(config.counters.duration_ms, COUNTER_DURATION),
        counter_frame,
    })
}

/// Layers profile, phrases and list sections over the built-in content.
fn resolve_content(
    config: &FolioConfig,
    phrases: Option<Vec<String>>,
) -> Result<PortfolioContent, ConfigError> {
    let mut content = PortfolioContent::default();
    let profile = &config.profile;

    if let Some(ref name) = profile.name {
        content.name = name.clone();
    }
    if let Some(ref greeting) = profile.greeting {
        content.greeting = greeting.clone();
    }
    if let Some(ref about) = profile.about {
        content.about = about.clone();
    }
    if let Some(ref contact) = profile.contact {
        content.contact = contact.clone();
    }
    if let Some(phrases) = phrases {
        if phrases.is_empty() {
            return Err(ConfigError::Invalid(
                "typewriter.phrases must contain at least one phrase".to_string(),
            ));
        }
        content.phrases = phrases;
    }
    if !config.stats.is_empty() {
        content.stats = config.stats.clone();
    }
    if !config.projects.is_empty() {
        content.projects = config.projects.clone();
    }
    if !config.skills.is_empty() {
        content.skills = config.skills.clone();
    }
    Ok(content)
}

fn millis_or(value: Option<u64>, default: Duration) -> Duration {
    value.map(Duration::from_millis).unwrap_or(default)
}
