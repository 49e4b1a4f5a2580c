//! Invitation state shared by the friend page

use leptos::prelude::*;
use lib_invite::{DetectPlatform, FriendConfig, InvitationPayload, LinkStrategy, PlatformInfo};

use crate::config::web_config;
use crate::services::BrowserPlatform;
use crate::utils::url::current_search;

/// Decoded invitation plus everything needed to build the redirect link.
#[derive(Clone, Copy)]
pub struct InviteContext {
    pub payload: RwSignal<InvitationPayload>,
    pub platform: PlatformInfo,
    config: &'static FriendConfig,
}

impl InviteContext {
    /// Detect the platform and decode `search` right away, so the first
    /// render already shows the inviter's name.
    pub fn new(config: &'static FriendConfig, detector: &impl DetectPlatform, search: &str) -> Self {
        let payload = InvitationPayload::from_query(search, config.payload_charset);
        Self {
            payload: RwSignal::new(payload),
            platform: detector.detect(),
            config,
        }
    }

    pub fn config(&self) -> &'static FriendConfig {
        self.config
    }

    pub fn link_strategy(&self) -> LinkStrategy {
        self.config.link_strategy
    }

    pub fn role_name(&self) -> String {
        self.payload.with(|payload| payload.role_name.clone())
    }

    /// Where the invite button should send this visitor.
    pub fn redirect_link(&self) -> String {
        self.payload.with(|payload| {
            self.config
                .links
                .resolve(&self.platform, &payload.ext, self.config.link_strategy)
        })
    }
}

impl InviteContext {
    /// Context for the running page: global config, `navigator` and
    /// `location.search`.
    pub fn from_browser() -> Self {
        Self::new(web_config(), &BrowserPlatform, &current_search())
    }
}

pub fn provide_invite_context(context: InviteContext) -> InviteContext {
    provide_context(context);
    context
}

pub fn use_invite_context() -> InviteContext {
    expect_context::<InviteContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib_invite::{PayloadCharset, RedirectLinks, UserAgent};

    fn config(link_strategy: LinkStrategy) -> &'static FriendConfig {
        Box::leak(Box::new(FriendConfig {
            game_name: "Star Sea".to_string(),
            game_desc: String::new(),
            links: RedirectLinks {
                ios_link: "https://apps.apple.com/app/id1?mt=8".to_string(),
                android_link: "https://game.example/android".to_string(),
                game_url: "https://game.example/".to_string(),
            },
            link_strategy,
            payload_charset: PayloadCharset::Utf8,
        }))
    }

    const IPHONE: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_1 like Mac OS X) Mobile/15E148";

    #[test]
    fn test_context_decodes_and_resolves() {
        let payload = InvitationPayload {
            role_name: "张三".to_string(),
            ext: "x1".to_string(),
        };
        let search = format!("?p={}", payload.encode());
        let ctx = InviteContext::new(config(LinkStrategy::MergeQuery), &UserAgent(IPHONE.to_string()), &search);

        assert_eq!(ctx.role_name(), "张三");
        assert!(ctx.platform.is_ios);
        assert_eq!(ctx.redirect_link(), "https://apps.apple.com/app/id1?mt=8&ext=x1");
    }

    #[test]
    fn test_context_raw_suffix_and_defaults() {
        let ctx = InviteContext::new(config(LinkStrategy::RawSuffix), &UserAgent(IPHONE.to_string()), "?p=%%%");
        assert_eq!(ctx.role_name(), "unknown");
        assert_eq!(ctx.redirect_link(), "https://apps.apple.com/app/id1?mt=8");

        let desktop = PlatformInfo::default();
        let ctx = InviteContext::new(config(LinkStrategy::RawSuffix), &desktop, "");
        assert_eq!(ctx.redirect_link(), "https://game.example/");
    }
}
