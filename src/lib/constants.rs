//! Application constants
//!
//! Single source of truth for paths, endpoints and timings.

/// Default configuration file path
pub const CONFIG_PATH: &str = "config/chat.toml";

/// Default environment file path
pub const ENV_PATH: &str = "config/.env";

/// Default Gemini endpoint (scheme + host)
pub const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Default Gemini API path (fallback when not specified in config)
pub const DEFAULT_GEMINI_API_PATH: &str = "v1beta/models";

/// Default model used for `generateContent`
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash-latest";

/// Name of the environment variable holding the API key
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Reply shown whenever the transport fails for any reason
pub const FALLBACK_REPLY: &str = "Sorry, I'm having trouble responding right now.";

/// Delay between two revealed characters of an assistant reply
pub const DEFAULT_REVEAL_CADENCE_MS: u64 = 30;

/// Lifetime of the loader placeholder
pub const DEFAULT_LOADER_DISMISS_MS: u64 = 1500;

/// Pause between reply arrival and the start of the reveal
pub const DEFAULT_REPLY_PACING_MS: u64 = 1000;

/// Terminals narrower than this many columns use the compact layout
pub const DEFAULT_COMPACT_WIDTH: u16 = 60;
