/// Open a URL with the desktop's default handler without blocking the UI.
pub(crate) fn open_external(url: &str) {
    log::info!("opening external link: {url}");
    if let Err(err) = open::that_detached(url) {
        log::warn!("failed to open {url}: {err}");
    }
}
