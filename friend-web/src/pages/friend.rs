//! Friend Invite Page
//!
//! Shows who sent the invitation and sends the visitor on to the app on
//! click. Nothing navigates without that click.

use leptos::prelude::*;
use lib_invite::PlatformInfo;

use crate::components::{Button, OpenInBrowserHint, QrCode};
use crate::services::navigate_to;
use crate::state::invite::{provide_invite_context, use_invite_context, InviteContext};

pub const GAME_ICON: &str = "/assets/game_icon.svg";

/// WeChat cannot open store links, so it gets the overlay over the button.
pub fn shows_browser_hint(platform: &PlatformInfo) -> bool {
    platform.is_wechat
}

#[component]
pub fn FriendPage() -> impl IntoView {
    let invite = InviteContext::from_browser();
    view! { <FriendView invite=invite/> }
}

/// The page body for an already decoded invitation.
#[component]
pub fn FriendView(invite: InviteContext) -> impl IntoView {
    let invite = provide_invite_context(invite);
    let show_hint = shows_browser_hint(&invite.platform);

    view! {
        <div class="friend-page">
            <InviteCard/>
            {show_hint.then(|| view! { <OpenInBrowserHint/> })}
        </div>
    }
}

#[component]
fn InviteCard() -> impl IntoView {
    let invite = use_invite_context();
    let config = invite.config();

    // Only read when the strategy allows building the link before the click.
    let precomputed = Memo::new(move |_| invite.redirect_link());

    let on_click = Callback::new(move |_: ()| {
        let link = if invite.link_strategy().is_precomputed() {
            precomputed.get_untracked()
        } else {
            invite.redirect_link()
        };
        if let Err(e) = navigate_to(&link) {
            log::error!("Navigation to {} failed: {:?}", link, e);
        }
    });

    view! {
        <div class="card invite-card">
            <div class="game-info">
                <img class="game-icon" src=GAME_ICON width="80" height="80" alt=""/>
                <h1 class="game-name">{config.game_name.clone()}</h1>
                <p class="game-desc">{config.game_desc.clone()}</p>
            </div>

            <div class="invite-pop">
                <div class="invite-text">
                    <div class="role-name">{move || format!("”{}“", invite.role_name())}</div>
                    <div class="invite-title">"邀请你成为游戏好友"</div>
                </div>
            </div>

            <Button class="invite-button" on_click=on_click>
                "发送好友申请"
            </Button>

            <div class="qrcode-panel">
                <QrCode value=config.links.game_url.clone() size=100/>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browser_hint_only_for_wechat() {
        let wechat_ios = PlatformInfo { is_ios: true, is_wechat: true, ..Default::default() };
        let wechat_android = PlatformInfo { is_android: true, is_wechat: true, ..Default::default() };
        let safari = PlatformInfo { is_ios: true, ..Default::default() };

        assert!(shows_browser_hint(&wechat_ios));
        assert!(shows_browser_hint(&wechat_android));
        assert!(!shows_browser_hint(&safari));
        assert!(!shows_browser_hint(&PlatformInfo::default()));
    }
}
