//! API key resolution

use std::env;
use tracing::warn;

/// Read the API key from the named environment variable.
///
/// Returns `None` (and logs) when the variable is unset or blank.
pub fn resolve_api_key(env_var: &str) -> Option<String> {
    let name = env_var.trim();
    if name.is_empty() {
        return None;
    }
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Some(value.trim().to_string()),
        Ok(_) => {
            warn!(env_var = name, "API key environment variable is empty");
            None
        }
        Err(err) => {
            warn!(env_var = name, %err, "API key environment variable is not set");
            None
        }
    }
}
