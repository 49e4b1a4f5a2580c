//! # Redirect Links
//!
//! Chooses where the invite button sends the visitor and forwards the
//! payload's `ext` token into that link.
//!
//! Base link priority is iOS > Android > game URL. The game URL is the
//! desktop fallback and is always used unmodified.

use std::str::FromStr;

use crate::error::ConfigError;
use crate::platform::PlatformInfo;

/// Query key used by [`LinkStrategy::MergeQuery`].
pub const EXT_PARAM: &str = "ext";

/// How `ext` is attached to a store / deep link.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LinkStrategy {
    /// Set `ext=<ext>` in the link's query, keeping its other parameters.
    /// The link is computed ahead of the click.
    #[default]
    MergeQuery,
    /// Append `?p=<ext>` verbatim when the button is clicked.
    ///
    /// No escaping and no merging: a base link that already has a query
    /// string ends up with two `?`.
    RawSuffix,
}

impl LinkStrategy {
    /// Whether the link may be computed before the click.
    pub fn is_precomputed(self) -> bool {
        matches!(self, LinkStrategy::MergeQuery)
    }
}

impl FromStr for LinkStrategy {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "merge" | "query" => Ok(LinkStrategy::MergeQuery),
            "raw" | "suffix" => Ok(LinkStrategy::RawSuffix),
            _ => Err(ConfigError::InvalidValue {
                name: "LINK_STRATEGY",
                value: value.to_string(),
            }),
        }
    }
}

/// The three outbound destinations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RedirectLinks {
    pub ios_link: String,
    pub android_link: String,
    pub game_url: String,
}

impl RedirectLinks {
    /// Base link for a platform, before `ext` is applied.
    pub fn base_link(&self, platform: &PlatformInfo) -> &str {
        if platform.is_ios {
            &self.ios_link
        } else if platform.is_android {
            &self.android_link
        } else {
            &self.game_url
        }
    }

    /// Final link for a platform and `ext` token.
    ///
    /// ```rust
    /// use lib_invite::{LinkStrategy, PlatformInfo, RedirectLinks};
    ///
    /// let links = RedirectLinks {
    ///     ios_link: "https://apps.apple.com/app/id1?mt=8".to_string(),
    ///     android_link: "https://play.example/app".to_string(),
    ///     game_url: "https://game.example/".to_string(),
    /// };
    /// let iphone = PlatformInfo { is_ios: true, ..Default::default() };
    ///
    /// assert_eq!(
    ///     links.resolve(&iphone, "abc", LinkStrategy::MergeQuery),
    ///     "https://apps.apple.com/app/id1?mt=8&ext=abc"
    /// );
    /// ```
    pub fn resolve(&self, platform: &PlatformInfo, ext: &str, strategy: LinkStrategy) -> String {
        let base = self.base_link(platform);
        if !(platform.is_ios || platform.is_android) || ext.is_empty() {
            return base.to_string();
        }

        match strategy {
            LinkStrategy::MergeQuery => lib_utils::append_search_params(base, [(EXT_PARAM, ext)]),
            LinkStrategy::RawSuffix => format!("{base}?p={ext}"),
        }
    }
}
