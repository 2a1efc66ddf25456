//! Clipboard access through the Web Clipboard API

use crate::shared::notifications::NotificationService;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Copy text to clipboard with a callback on success
pub fn copy_to_clipboard_with_callback<F>(text: &str, on_success: F)
where
    F: FnOnce() + 'static,
{
    let text = text.to_owned();
    spawn_local(async move {
        if let Some(window) = web_sys::window() {
            let clipboard = window.navigator().clipboard();
            match wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text)).await {
                Ok(_) => on_success(),
                Err(err) => log::warn!("Clipboard write failed: {err:?}"),
            }
        }
    });
}

/// Clipboard writer bound to the current component's notifications
pub fn use_clipboard() -> impl Fn(&str) + Copy + Send + Sync + 'static {
    let notifications = use_context::<NotificationService>();
    move |text: &str| {
        copy_to_clipboard_with_callback(text, move || {
            if let Some(notifications) = notifications {
                notifications.show_info("Copied to clipboard.");
            }
        });
    }
}
