//! # Platform Detection
//!
//! Classifies the visitor from the browser's user agent. The WeChat flag is
//! independent of the OS flags: the WeChat in-app browser runs on both iOS and
//! Android and gets the "open in browser" overlay instead of a redirect.

/// Source of platform flags.
///
/// The page implements this over `window.navigator`; tests use fixed user
/// agents.
pub trait DetectPlatform {
    fn detect(&self) -> PlatformInfo;
}

/// The three flags the redirect logic consumes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlatformInfo {
    pub is_ios: bool,
    pub is_android: bool,
    pub is_wechat: bool,
}

/// Single-category view of [`PlatformInfo`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    Ios,
    Android,
    WeChatBrowser,
    Other,
}

impl PlatformInfo {
    /// Classify a user agent string.
    ///
    /// ```rust
    /// use lib_invite::PlatformInfo;
    ///
    /// let info = PlatformInfo::from_user_agent(
    ///     "Mozilla/5.0 (Linux; Android 13; Pixel 7) AppleWebKit/537.36 Chrome/120.0 Mobile Safari/537.36",
    /// );
    /// assert!(info.is_android && !info.is_ios && !info.is_wechat);
    /// ```
    pub fn from_user_agent(user_agent: &str) -> Self {
        let lower = user_agent.to_ascii_lowercase();
        Self {
            is_ios: ["iphone", "ipad", "ipod"].iter().any(|device| lower.contains(*device)),
            is_android: lower.contains("android"),
            is_wechat: lower.contains("micromessenger"),
        }
    }

    /// Like [`from_user_agent`](Self::from_user_agent), but also treats a
    /// touch-capable "Macintosh" as iOS. iPadOS requests desktop pages with a
    /// macOS user agent.
    pub fn from_user_agent_with_touch(user_agent: &str, max_touch_points: i32) -> Self {
        let mut info = Self::from_user_agent(user_agent);
        if !info.is_ios && max_touch_points > 1 && user_agent.contains("Macintosh") {
            info.is_ios = true;
        }
        info
    }

    /// Collapse the flags into one category: WeChat > iOS > Android > Other.
    pub fn platform(&self) -> Platform {
        if self.is_wechat {
            Platform::WeChatBrowser
        } else if self.is_ios {
            Platform::Ios
        } else if self.is_android {
            Platform::Android
        } else {
            Platform::Other
        }
    }
}

impl DetectPlatform for PlatformInfo {
    fn detect(&self) -> PlatformInfo {
        *self
    }
}

/// A plain user agent string as a platform source.
#[derive(Clone, Debug)]
pub struct UserAgent(pub String);

impl DetectPlatform for UserAgent {
    fn detect(&self) -> PlatformInfo {
        PlatformInfo::from_user_agent(&self.0)
    }
}
