//! Host-side runtime helpers for executing reducer effects and owning the reveal watcher.
//!
//! Effect execution and viewport observation sit behind [`PageHostContext`] so the reducer
//! stays pure and tests can inject the in-memory host adapters.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use leptos::{logging, on_cleanup};
use platform_host::{HostServices, ObserveError, ScrollBehavior, ScrollOutcome};

use crate::{
    reducer::PageEffect,
    reveal::{RevealConfig, RevealStartError, RevealWatcher},
};

#[derive(Clone)]
/// Host service bundle for page side effects.
pub struct PageHostContext {
    services: HostServices,
}

impl PageHostContext {
    pub fn new(services: HostServices) -> Self {
        Self { services }
    }

    pub fn host_strategy_name(&self) -> &'static str {
        self.services.host_strategy.as_str()
    }

    /// Scroll behavior for navigation: smooth when the host supports it, instant otherwise.
    pub fn scroll_behavior(&self) -> ScrollBehavior {
        if self.services.capabilities.smooth_scroll.is_available() {
            ScrollBehavior::Smooth
        } else {
            ScrollBehavior::Instant
        }
    }

    /// Executes one reducer-emitted effect. Missing anchors are skipped without error.
    pub fn run_page_effect(&self, effect: PageEffect) -> ScrollOutcome {
        match effect {
            PageEffect::ScrollToAnchor(section) => {
                let outcome = self
                    .services
                    .scroll
                    .scroll_to_anchor(section.anchor(), self.scroll_behavior());
                match outcome {
                    ScrollOutcome::Scrolled => {}
                    ScrollOutcome::AnchorMissing => {
                        logging::debug_warn!("scroll skipped: no `#{}` anchor", section.anchor());
                    }
                    ScrollOutcome::Unavailable => {
                        logging::debug_warn!(
                            "scroll skipped: {} host cannot scroll",
                            self.host_strategy_name()
                        );
                    }
                }
                outcome
            }
        }
    }

    /// Starts the shared reveal watcher over every currently marked element.
    ///
    /// # Errors
    ///
    /// Returns [`RevealStartError`] when the config is invalid or the host lacks viewport
    /// observation.
    pub fn start_reveal(&self, config: &RevealConfig) -> Result<RevealWatcher, RevealStartError> {
        if !self.services.capabilities.viewport_observer.is_available() {
            let err = ObserveError::Unsupported(format!(
                "{} host has no viewport observer",
                self.host_strategy_name()
            ));
            return Err(err.into());
        }
        RevealWatcher::start(self.services.viewport_observer.as_ref(), config)
    }
}

/// Page-scoped slot for the reveal watcher. Once released it never starts again.
#[derive(Default)]
struct RevealScope {
    watcher: RefCell<Option<RevealWatcher>>,
    released: Cell<bool>,
}

impl RevealScope {
    fn start(&self, host: &PageHostContext, config: &RevealConfig) {
        if self.released.get() {
            return;
        }
        match host.start_reveal(config) {
            Ok(watcher) => {
                logging::log!(
                    "reveal-on-view watching {} elements",
                    watcher.target_count()
                );
                *self.watcher.borrow_mut() = Some(watcher);
            }
            Err(err) => logging::warn!("reveal-on-view disabled: {err}"),
        }
    }

    fn release(&self) {
        self.released.set(true);
        if let Some(mut watcher) = self.watcher.borrow_mut().take() {
            watcher.stop();
        }
    }
}

/// Starts reveal-on-view once the page is mounted and releases it when the owning scope is
/// cleaned up.
///
/// In the browser the watcher starts on the next animation frame so marked elements are attached
/// to the document. If cleanup runs first, the watcher never starts.
pub fn install_reveal_on_view(host: PageHostContext, config: RevealConfig) {
    let scope = Rc::new(RevealScope::default());

    let start = {
        let scope = scope.clone();
        move || scope.start(&host, &config)
    };

    #[cfg(target_arch = "wasm32")]
    leptos::request_animation_frame(start);
    #[cfg(not(target_arch = "wasm32"))]
    start();

    on_cleanup(move || scope.release());
}

#[cfg(test)]
mod tests {
    use leptos::{as_child_of_current_owner, create_runtime};
    use platform_host::{
        CapabilityStatus, IntersectionSample, MemoryScrollService, MemoryViewportObserver,
        RevealTargetId,
    };
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::SectionId;

    fn memory_host(
        anchors: &[&str],
        targets: usize,
    ) -> (PageHostContext, MemoryScrollService, MemoryViewportObserver) {
        let scroll = MemoryScrollService::with_anchors(anchors.iter().copied());
        let observer = MemoryViewportObserver::with_targets(targets);
        let host = PageHostContext::new(HostServices::memory(scroll.clone(), observer.clone()));
        (host, scroll, observer)
    }

    fn visible(index: usize) -> IntersectionSample {
        IntersectionSample {
            target: RevealTargetId(index),
            is_intersecting: true,
            ratio: 0.5,
        }
    }

    #[test]
    fn scroll_effect_targets_section_anchor_smoothly() {
        let (host, scroll, _) = memory_host(&["home", "live"], 0);
        assert_eq!(
            host.run_page_effect(PageEffect::ScrollToAnchor(SectionId::Live)),
            ScrollOutcome::Scrolled
        );
        assert_eq!(
            scroll.history(),
            vec![("live".to_string(), ScrollBehavior::Smooth)]
        );
    }

    #[test]
    fn hosts_without_smooth_scroll_jump_instantly() {
        let scroll = MemoryScrollService::with_anchors(["about"]);
        let mut services =
            HostServices::memory(scroll.clone(), MemoryViewportObserver::with_targets(0));
        services.capabilities.smooth_scroll = CapabilityStatus::Unavailable;
        let host = PageHostContext::new(services);

        host.run_page_effect(PageEffect::ScrollToAnchor(SectionId::About));
        assert_eq!(
            scroll.history(),
            vec![("about".to_string(), ScrollBehavior::Instant)]
        );
    }

    #[test]
    fn missing_anchor_is_skipped_silently() {
        let (host, scroll, _) = memory_host(&["home"], 0);
        assert_eq!(
            host.run_page_effect(PageEffect::ScrollToAnchor(SectionId::Ads)),
            ScrollOutcome::AnchorMissing
        );
        assert_eq!(scroll.last_scrolled(), None);
    }

    #[test]
    fn headless_host_refuses_reveal_without_panicking() {
        let host = PageHostContext::new(HostServices::headless());
        assert!(matches!(
            host.start_reveal(&RevealConfig::default()),
            Err(RevealStartError::Observe(ObserveError::Unsupported(_)))
        ));
        assert_eq!(
            host.run_page_effect(PageEffect::ScrollToAnchor(SectionId::Home)),
            ScrollOutcome::Unavailable
        );
    }

    #[test]
    fn started_reveal_feeds_memory_observer() {
        let (host, _, observer) = memory_host(&[], 2);
        let watcher = host
            .start_reveal(&RevealConfig::default())
            .expect("start reveal");
        observer.emit(&[visible(0)]);
        assert_eq!(watcher.revealed_count(), 1);
        assert!(observer.has_class(RevealTargetId(0), "animate-fade-in"));
    }

    #[test]
    fn unmounting_the_page_scope_disconnects_the_watcher() {
        let reactive = create_runtime();
        let (host, _, observer) = memory_host(&[], 2);

        let mount = as_child_of_current_owner(move |()| {
            install_reveal_on_view(host.clone(), RevealConfig::default())
        });
        let ((), disposer) = mount(());
        assert!(observer.is_connected());
        assert_eq!(observer.emit(&[visible(0)]), 1);

        drop(disposer);
        assert!(!observer.is_connected());
        assert_eq!(observer.emit(&[visible(1)]), 0);
        assert!(!observer.has_class(RevealTargetId(1), "animate-fade-in"));

        reactive.dispose();
    }

    #[test]
    fn released_scope_never_starts_a_watcher() {
        let (host, _, observer) = memory_host(&[], 1);
        let scope = RevealScope::default();

        scope.release();
        scope.start(&host, &RevealConfig::default());

        assert_eq!(observer.observe_calls(), 0);
        assert!(!observer.is_connected());
        assert!(scope.watcher.borrow().is_none());
    }

    #[test]
    fn release_after_start_stops_the_watcher_once() {
        let (host, _, observer) = memory_host(&[], 1);
        let scope = RevealScope::default();

        scope.start(&host, &RevealConfig::default());
        assert!(observer.is_connected());
        scope.release();
        scope.release();
        assert!(!observer.is_connected());
        assert_eq!(observer.observe_calls(), 1);
    }
}
