//! Platform detection over `window.navigator`

use lib_invite::{DetectPlatform, PlatformInfo};

/// Reads the user agent and touch support of the running browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserPlatform;

impl DetectPlatform for BrowserPlatform {
    fn detect(&self) -> PlatformInfo {
        let Some(window) = web_sys::window() else {
            return PlatformInfo::default();
        };
        let navigator = window.navigator();
        let user_agent = navigator.user_agent().unwrap_or_default();

        let info = PlatformInfo::from_user_agent_with_touch(&user_agent, navigator.max_touch_points());
        log::debug!("Detected {:?} from user agent {:?}", info, user_agent);
        info
    }
}
