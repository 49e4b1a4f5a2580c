//! # Page Configuration
//!
//! Texts and links are fixed when the page is built. [`FriendConfig::from_lookup`]
//! takes any name -> value source so the same loading rules apply to
//! `option_env!` values in the browser build and to maps in tests.
//!
//! | Variable | Required | Meaning |
//! |----------|----------|---------|
//! | `GAME_NAME` | no | Card title |
//! | `GAME_DESC` | no | Card subtitle |
//! | `GAME_URL` | yes | Desktop fallback and QR code target |
//! | `IOS_LINK` | yes | App Store / iOS deep link |
//! | `ANDROID_LINK` | yes | Android app link |
//! | `LINK_STRATEGY` | no | `merge` (default) or `raw` |
//! | `PAYLOAD_CHARSET` | no | `utf8` (default) or `latin1` |

use crate::error::ConfigError;
use crate::link::{LinkStrategy, RedirectLinks};
use crate::payload::PayloadCharset;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FriendConfig {
    pub game_name: String,
    pub game_desc: String,
    pub links: RedirectLinks,
    pub link_strategy: LinkStrategy,
    pub payload_charset: PayloadCharset,
}

impl FriendConfig {
    /// Load configuration from a variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::MissingVar(name))
        };

        let links = RedirectLinks {
            ios_link: required("IOS_LINK")?,
            android_link: required("ANDROID_LINK")?,
            game_url: required("GAME_URL")?,
        };

        let link_strategy = match lookup("LINK_STRATEGY") {
            Some(value) => value.parse()?,
            None => LinkStrategy::default(),
        };
        let payload_charset = match lookup("PAYLOAD_CHARSET") {
            Some(value) => value.parse()?,
            None => PayloadCharset::default(),
        };

        Ok(Self {
            game_name: lookup("GAME_NAME").unwrap_or_default(),
            game_desc: lookup("GAME_DESC").unwrap_or_default(),
            links,
            link_strategy,
            payload_charset,
        })
    }

    /// Check that every required link is set.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in self.named_links() {
            if value.trim().is_empty() {
                return Err(ConfigError::MissingVar(name));
            }
        }
        Ok(())
    }

    /// Links without a scheme (`https:`, `itms-apps:`, ...).
    ///
    /// These still work as `location.href` targets relative to the page, so
    /// they are reported, not rejected.
    pub fn schemeless_links(&self) -> Vec<ConfigError> {
        self.named_links()
            .into_iter()
            .filter(|(_, value)| !has_scheme(value))
            .map(|(name, value)| ConfigError::InvalidLink {
                name,
                value: value.to_string(),
            })
            .collect()
    }

    fn named_links(&self) -> [(&'static str, &str); 3] {
        [
            ("IOS_LINK", self.links.ios_link.as_str()),
            ("ANDROID_LINK", self.links.android_link.as_str()),
            ("GAME_URL", self.links.game_url.as_str()),
        ]
    }
}

fn has_scheme(link: &str) -> bool {
    let Some((scheme, _)) = link.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&'static str, &str)]) -> HashMap<&'static str, String> {
        pairs.iter().map(|(k, v)| (*k, v.to_string())).collect()
    }

    fn base_vars() -> HashMap<&'static str, String> {
        vars(&[
            ("GAME_NAME", "Star Sea"),
            ("GAME_DESC", "Sail together"),
            ("GAME_URL", "https://game.example/"),
            ("IOS_LINK", "itms-apps://itunes.apple.com/app/id123"),
            ("ANDROID_LINK", "https://game.example/android"),
        ])
    }

    #[test]
    fn test_from_lookup_defaults() {
        let env = base_vars();
        let config = FriendConfig::from_lookup(|name| env.get(name).cloned()).unwrap();
        assert_eq!(config.game_name, "Star Sea");
        assert_eq!(config.links.game_url, "https://game.example/");
        assert_eq!(config.link_strategy, LinkStrategy::MergeQuery);
        assert_eq!(config.payload_charset, PayloadCharset::Utf8);
        assert_eq!(config.validate(), Ok(()));
        assert!(config.schemeless_links().is_empty());
    }

    #[test]
    fn test_optional_texts_may_be_missing() {
        let mut env = base_vars();
        env.remove("GAME_NAME");
        env.remove("GAME_DESC");
        let config = FriendConfig::from_lookup(|name| env.get(name).cloned()).unwrap();
        assert_eq!(config.game_name, "");
        assert_eq!(config.game_desc, "");
    }

    #[test]
    fn test_missing_link() {
        let mut env = base_vars();
        env.insert("ANDROID_LINK", "  ".to_string());
        assert_eq!(
            FriendConfig::from_lookup(|name| env.get(name).cloned()),
            Err(ConfigError::MissingVar("ANDROID_LINK"))
        );
    }

    #[test]
    fn test_strategy_and_charset_overrides() {
        let mut env = base_vars();
        env.insert("LINK_STRATEGY", "raw".to_string());
        env.insert("PAYLOAD_CHARSET", "latin1".to_string());
        let config = FriendConfig::from_lookup(|name| env.get(name).cloned()).unwrap();
        assert_eq!(config.link_strategy, LinkStrategy::RawSuffix);
        assert_eq!(config.payload_charset, PayloadCharset::Latin1);

        env.insert("LINK_STRATEGY", "sometimes".to_string());
        assert!(matches!(
            FriendConfig::from_lookup(|name| env.get(name).cloned()),
            Err(ConfigError::InvalidValue { name: "LINK_STRATEGY", .. })
        ));
    }

    #[test]
    fn test_relative_link_is_valid_but_reported() {
        let mut env = base_vars();
        env.insert("GAME_URL", "/play".to_string());
        let config = FriendConfig::from_lookup(|name| env.get(name).cloned()).unwrap();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(
            config.schemeless_links(),
            vec![ConfigError::InvalidLink {
                name: "GAME_URL",
                value: "/play".to_string()
            }]
        );
    }

    #[test]
    fn test_validate_rejects_blank_link() {
        let env = base_vars();
        let mut config = FriendConfig::from_lookup(|name| env.get(name).cloned()).unwrap();
        config.links.ios_link = String::new();
        assert_eq!(config.validate(), Err(ConfigError::MissingVar("IOS_LINK")));
    }
}
