//! # Build-time Configuration
//!
//! Values are captured with `option_env!` when the crate is compiled
//! (e.g. `GAME_URL=https://... trunk build`). Use [`web_config()`] after
//! [`init_config()`] has run in `main`.

use std::sync::OnceLock;

use lib_invite::{ConfigError, FriendConfig};

/// Global configuration instance (initialized once at startup).
static CONFIG: OnceLock<FriendConfig> = OnceLock::new();

/// Value of a build-time variable, if it was set during compilation.
pub fn build_env(name: &str) -> Option<String> {
    let value = match name {
        "GAME_NAME" => option_env!("GAME_NAME"),
        "GAME_DESC" => option_env!("GAME_DESC"),
        "GAME_URL" => option_env!("GAME_URL"),
        "IOS_LINK" => option_env!("IOS_LINK"),
        "ANDROID_LINK" => option_env!("ANDROID_LINK"),
        "LINK_STRATEGY" => option_env!("LINK_STRATEGY"),
        "PAYLOAD_CHARSET" => option_env!("PAYLOAD_CHARSET"),
        _ => None,
    };
    value.map(str::to_string)
}

/// Load and validate the build-time configuration.
///
/// Calling it again after a successful load is a no-op.
pub fn init_config() -> Result<(), ConfigError> {
    if CONFIG.get().is_some() {
        return Ok(());
    }

    let config = load_config(build_env)?;
    // A concurrent initializer would have loaded the same values.
    let _ = CONFIG.set(config);
    Ok(())
}

/// Load and validate configuration from `lookup`.
///
/// Only missing or unparsable values fail. Links without a scheme are logged
/// and kept.
pub fn load_config<F>(lookup: F) -> Result<FriendConfig, ConfigError>
where
    F: Fn(&'static str) -> Option<String>,
{
    let config = FriendConfig::from_lookup(lookup)?;
    config.validate()?;

    for warning in config.schemeless_links() {
        log::warn!("{}; using it relative to the page", warning);
    }

    log::debug!(
        "Loaded config: strategy={:?}, charset={:?}",
        config.link_strategy,
        config.payload_charset
    );
    Ok(config)
}

/// Get the global configuration.
///
/// # Panics
///
/// Panics if [`init_config()`] has not succeeded.
pub fn web_config() -> &'static FriendConfig {
    CONFIG
        .get()
        .expect("config not initialized - call init_config() first")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_variable_is_unset() {
        assert_eq!(build_env("DATABASE_URL"), None);
        assert_eq!(build_env(""), None);
    }

    #[test]
    fn test_relative_game_url_still_loads() {
        let lookup = |name: &'static str| {
            let value = match name {
                "GAME_URL" => "/play",
                "IOS_LINK" => "itms-apps://itunes.apple.com/app/id123",
                "ANDROID_LINK" => "https://game.example/android",
                _ => return None,
            };
            Some(value.to_string())
        };

        let config = load_config(lookup).unwrap();
        assert_eq!(config.links.game_url, "/play");
    }

    #[test]
    fn test_missing_link_fails_to_load() {
        let lookup = |name: &'static str| (name == "GAME_URL").then(|| "/play".to_string());
        assert_eq!(load_config(lookup), Err(ConfigError::MissingVar("IOS_LINK")));
    }
}
