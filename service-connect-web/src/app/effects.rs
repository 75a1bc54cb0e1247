use crate::timer::Timeout;
use service_connect_core::{Millis, Notice};
use yew::prelude::*;

/// Clear the visible notice `ttl` ms after it was shown. A newer notice
/// restarts the countdown.
#[hook]
pub fn use_notice_expiry(notice: &UseStateHandle<Option<Notice>>, ttl: Millis) {
    let handle = notice.clone();
    use_effect_with((**notice).clone(), move |current| {
        let timeout = current
            .is_some()
            .then(|| Timeout::start(ttl, move || handle.set(None)))
            .flatten();
        move || {
            if let Some(timeout) = timeout {
                timeout.cancel();
            }
        }
    });
}
