//! Anchor scrolling adapter backed by `Element.scrollIntoView`.

use platform_host::{ScrollBehavior, ScrollOutcome, ScrollService};

#[derive(Debug, Clone, Copy, Default)]
/// Browser scroll adapter.
pub struct WebScrollService;

impl ScrollService for WebScrollService {
    fn scroll_to_anchor(&self, anchor: &str, behavior: ScrollBehavior) -> ScrollOutcome {
        scroll_to_anchor(anchor, behavior)
    }
}

#[cfg(target_arch = "wasm32")]
fn scroll_to_anchor(anchor: &str, behavior: ScrollBehavior) -> ScrollOutcome {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return ScrollOutcome::Unavailable;
    };
    let Some(element) = document.get_element_by_id(anchor) else {
        return ScrollOutcome::AnchorMissing;
    };

    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(match behavior {
        ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
        ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
    });
    options.set_block(web_sys::ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    ScrollOutcome::Scrolled
}

#[cfg(not(target_arch = "wasm32"))]
fn scroll_to_anchor(_anchor: &str, _behavior: ScrollBehavior) -> ScrollOutcome {
    ScrollOutcome::Unavailable
}
