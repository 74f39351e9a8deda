//! Configuration loading tests

use gemini_chat::config::{AppConfig, ConfigError, LoaderMode, load_config};
use gemini_chat::model::GeminiClient;
use gemini_chat::model::credentials::resolve_api_key;
use serial_test::serial;
use std::io::Write;
use std::path::Path;
use std::time::Duration;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn loads_explicit_file() {
    let file = write_config(
        r#"
        [transport]
        endpoint = "http://localhost:8089"
        model = "gemini-2.0-flash"
        api_key_env = "MY_GEMINI_KEY"

        [timing]
        reply_pacing_ms = 250
        loader_dismiss_ms = 800
        "#,
    );

    let config = load_config(Some(file.path())).unwrap();

    assert_eq!(config.transport.endpoint, "http://localhost:8089");
    assert_eq!(config.transport.model, "gemini-2.0-flash");
    assert_eq!(config.transport.api_key_env, "MY_GEMINI_KEY");
    assert_eq!(config.transport.request_timeout, None);
    assert_eq!(config.timing.reply_pacing, Duration::from_millis(250));
    assert_eq!(config.timing.loader_dismiss, Duration::from_millis(800));
    assert_eq!(config.timing.reveal_cadence, Duration::from_millis(30));
    assert_eq!(config.timing.loader_mode, LoaderMode::Timed);
}

#[test]
fn missing_explicit_file_is_an_error() {
    let err = AppConfig::load(Some(Path::new("does/not/exist/chat.toml"))).unwrap_err();

    assert!(matches!(err, ConfigError::NotFound { .. }));
}

#[test]
fn defaults_match_widget_timings() {
    let config = AppConfig::default();

    assert_eq!(config.timing.reveal_cadence, Duration::from_millis(30));
    assert_eq!(config.timing.loader_dismiss, Duration::from_millis(1500));
    assert_eq!(config.timing.reply_pacing, Duration::from_millis(1000));
    assert_eq!(config.ui.compact_width, 60);
    assert_eq!(config.transport.api_key_env, "GEMINI_API_KEY");
}

#[test]
fn zero_compact_width_is_rejected() {
    let file = write_config("[ui]\ncompact_width = 0\n");

    let err = load_config(Some(file.path())).unwrap_err();

    assert!(matches!(
        err,
        ConfigError::InvalidValue {
            field: "ui.compact_width",
            ..
        }
    ));
}

#[test]
fn unknown_loader_mode_is_a_parse_error() {
    let file = write_config("[timing]\nloader_mode = \"forever\"\n");

    let err = load_config(Some(file.path())).unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
#[serial]
fn api_key_is_read_from_named_variable() {
    let file = write_config("[transport]\napi_key_env = \"GEMINI_CHAT_TEST_KEY\"\n");
    let config = load_config(Some(file.path())).unwrap();

    unsafe { std::env::set_var("GEMINI_CHAT_TEST_KEY", "secret") };
    let client = GeminiClient::from_config(&config.transport);
    assert!(client.has_api_key());
    assert_eq!(resolve_api_key("GEMINI_CHAT_TEST_KEY").as_deref(), Some("secret"));

    unsafe { std::env::set_var("GEMINI_CHAT_TEST_KEY", "   ") };
    assert_eq!(resolve_api_key("GEMINI_CHAT_TEST_KEY"), None);

    unsafe { std::env::remove_var("GEMINI_CHAT_TEST_KEY") };
    assert!(!GeminiClient::from_config(&config.transport).has_api_key());
}
