use super::error::ConfigError;
use super::transport::{RawTransportConfig, TransportConfig};
use crate::constants::{
    DEFAULT_COMPACT_WIDTH, DEFAULT_LOADER_DISMISS_MS, DEFAULT_REPLY_PACING_MS,
    DEFAULT_REVEAL_CADENCE_MS,
};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Application configuration loaded from chat.toml
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub transport: TransportConfig,
    pub timing: TimingConfig,
    pub ui: UiConfig,
}

impl AppConfig {
    /// Load configuration from a file path (or default path if None)
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        super::loader::load_config(path)
    }
}

/// How the loader placeholder decides when to disappear
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoaderMode {
    /// Removed after `loader_dismiss`, whether or not the reply arrived
    #[default]
    Timed,
    /// Removed as soon as the reply settles
    UntilReply,
}

/// Pacing of the dispatch cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingConfig {
    pub reveal_cadence: Duration,
    pub loader_dismiss: Duration,
    pub reply_pacing: Duration,
    pub loader_mode: LoaderMode,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            reveal_cadence: Duration::from_millis(DEFAULT_REVEAL_CADENCE_MS),
            loader_dismiss: Duration::from_millis(DEFAULT_LOADER_DISMISS_MS),
            reply_pacing: Duration::from_millis(DEFAULT_REPLY_PACING_MS),
            loader_mode: LoaderMode::Timed,
        }
    }
}

/// Terminal presentation settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiConfig {
    /// Below this width the chat is a full-screen overlay opened from a launcher
    pub compact_width: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            compact_width: DEFAULT_COMPACT_WIDTH,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub(super) struct RawTimingConfig {
    pub(super) reveal_cadence_ms: Option<u64>,
    pub(super) loader_dismiss_ms: Option<u64>,
    pub(super) reply_pacing_ms: Option<u64>,
    pub(super) loader_mode: Option<LoaderMode>,
}

#[derive(Debug, Deserialize, Default)]
pub(super) struct RawUiConfig {
    pub(super) compact_width: Option<u16>,
}

/// Raw configuration structure for deserialization from TOML
#[derive(Debug, Deserialize, Default)]
pub(super) struct RawConfig {
    #[serde(default)]
    pub(super) transport: RawTransportConfig,
    #[serde(default)]
    pub(super) timing: RawTimingConfig,
    #[serde(default)]
    pub(super) ui: RawUiConfig,
}

impl From<RawTimingConfig> for TimingConfig {
    fn from(raw: RawTimingConfig) -> Self {
        let defaults = TimingConfig::default();
        Self {
            reveal_cadence: raw
                .reveal_cadence_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.reveal_cadence),
            loader_dismiss: raw
                .loader_dismiss_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.loader_dismiss),
            reply_pacing: raw
                .reply_pacing_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.reply_pacing),
            loader_mode: raw.loader_mode.unwrap_or(defaults.loader_mode),
        }
    }
}

impl TryFrom<RawUiConfig> for UiConfig {
    type Error = ConfigError;

    fn try_from(raw: RawUiConfig) -> Result<Self, Self::Error> {
        match raw.compact_width {
            Some(0) => Err(ConfigError::invalid_value(
                "ui.compact_width",
                "must be at least one column",
            )),
            Some(compact_width) => Ok(Self { compact_width }),
            None => Ok(Self::default()),
        }
    }
}
