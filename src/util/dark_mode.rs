//! Dark mode initialization and toggle.
//!
//! Reads the initial preference from the `prefers-color-scheme` media query
//! and applies a `data-theme` attribute to the `<html>` element. Nothing is
//! persisted; the theme resets each session like the rest of the state.
//! Requires a browser environment — native builds safely no-op.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

/// Read the dark mode preference from the system media query.
pub fn read_preference() -> bool {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "csr")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", if enabled { "dark" } else { "light" });
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = enabled;
    }
}

/// Toggle dark mode and apply the new theme.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    next
}
