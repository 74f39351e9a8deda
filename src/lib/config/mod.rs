pub mod app;
pub mod error;
pub mod loader;
pub mod transport;

pub use app::{AppConfig, LoaderMode, TimingConfig, UiConfig};
pub use error::ConfigError;
pub use loader::{ensure_env_loaded, load_config, parse_config};
pub use transport::TransportConfig;
