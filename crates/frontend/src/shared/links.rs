use web_sys::window;

/// Open `url` in a new browser tab (`mailto:` links hand over to the mail client)
pub fn open_link(url: &str) {
    let Some(window) = window() else {
        return;
    };
    if let Err(err) = window.open_with_url_and_target(url, "_blank") {
        log::warn!("Could not open {url}: {err:?}");
    }
}
