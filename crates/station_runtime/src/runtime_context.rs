//! Runtime provider and context wiring for the station page.
//!
//! This module owns the navigation reducer container, the page effect queue, and host bootstrap
//! wiring. UI composition stays in [`crate::components`].
#![allow(clippy::clone_on_copy)]

use leptos::*;
use platform_host::HostServices;

use crate::{
    config::{station_config, StationConfig},
    effect_executor,
    host::PageHostContext,
    model::{NavState, SectionId},
    reducer::{reduce_nav, NavAction, PageEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading navigation state and dispatching [`NavAction`] values.
pub struct PageRuntimeContext {
    /// Host service bundle for executing page side effects.
    pub host: StoredValue<PageHostContext>,
    /// Reactive navigation state signal.
    pub nav: RwSignal<NavState>,
    /// Queue of page effects emitted by the reducer.
    pub effects: RwSignal<Vec<PageEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<NavAction>,
    /// Station content and player settings compiled into the build.
    pub config: &'static StationConfig,
}

impl PageRuntimeContext {
    /// Creates the reducer container in the current reactive owner without installing the
    /// effect executor.
    pub fn new(host_services: HostServices) -> Self {
        let host = store_value(PageHostContext::new(host_services));
        let nav = create_rw_signal(NavState::default());
        let effects = create_rw_signal(Vec::<PageEffect>::new());

        let dispatch = Callback::new(move |action: NavAction| {
            let mut state = nav.get_untracked();
            let previous = state;
            let new_effects = reduce_nav(&mut state, action);
            if state != previous {
                nav.set(state);
            }
            if !new_effects.is_empty() {
                let mut queue = effects.get_untracked();
                queue.extend(new_effects);
                effects.set(queue);
            }
        });

        Self {
            host,
            nav,
            effects,
            dispatch,
            config: station_config(),
        }
    }

    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: NavAction) {
        self.dispatch.call(action);
    }

    pub fn activate(&self, section: SectionId) {
        self.dispatch_action(NavAction::Activate(section));
    }

    pub fn toggle_menu(&self) {
        self.dispatch_action(NavAction::ToggleMenu);
    }
}

#[component]
/// Provides [`PageRuntimeContext`] to descendant components and installs the effect executor.
pub fn PageProvider(
    /// Injected browser or headless host bundle assembled by the entry layer.
    host_services: HostServices,
    children: Children,
) -> impl IntoView {
    let runtime = PageRuntimeContext::new(host_services);
    provide_context(runtime.clone());
    effect_executor::install(runtime);

    children().into_view()
}

/// Returns the current [`PageRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`PageProvider`].
pub fn use_page_runtime() -> PageRuntimeContext {
    use_context::<PageRuntimeContext>().expect("PageRuntimeContext not provided")
}

#[cfg(test)]
mod tests {
    use platform_host::{MemoryScrollService, MemoryViewportObserver, ScrollOutcome};
    use pretty_assertions::assert_eq;

    use super::*;

    fn with_page_runtime(
        anchors: &[&str],
        test: impl FnOnce(PageRuntimeContext, MemoryScrollService),
    ) {
        let reactive = create_runtime();
        let scroll = MemoryScrollService::with_anchors(anchors.iter().copied());
        let services =
            HostServices::memory(scroll.clone(), MemoryViewportObserver::with_targets(0));
        test(PageRuntimeContext::new(services), scroll);
        reactive.dispose();
    }

    const ALL_ANCHORS: [&str; 5] = ["home", "live", "about", "ads", "contacts"];

    #[test]
    fn activating_live_highlights_it_and_scrolls_to_its_anchor() {
        with_page_runtime(&ALL_ANCHORS, |runtime, scroll| {
            runtime.activate(SectionId::Live);

            let nav = runtime.nav.get_untracked();
            assert_eq!(nav.active_section, SectionId::Live);
            assert!(!nav.mobile_menu_open);
            assert_eq!(
                effect_executor::drain_pending(runtime),
                vec![ScrollOutcome::Scrolled]
            );
            assert_eq!(scroll.last_scrolled().as_deref(), Some("live"));
            assert!(runtime.effects.get_untracked().is_empty());
        });
    }

    #[test]
    fn mobile_menu_selection_closes_menu_then_scrolls() {
        with_page_runtime(&ALL_ANCHORS, |runtime, scroll| {
            runtime.toggle_menu();
            assert!(runtime.nav.get_untracked().mobile_menu_open);
            assert!(runtime.effects.get_untracked().is_empty());

            runtime.activate(SectionId::About);
            let nav = runtime.nav.get_untracked();
            assert!(!nav.mobile_menu_open);
            assert!(nav.is_active(SectionId::About));

            effect_executor::drain_pending(runtime);
            assert_eq!(scroll.last_scrolled().as_deref(), Some("about"));
        });
    }

    #[test]
    fn missing_anchor_still_updates_navigation_state() {
        with_page_runtime(&["home"], |runtime, scroll| {
            runtime.toggle_menu();
            runtime.activate(SectionId::Contacts);

            assert_eq!(
                effect_executor::drain_pending(runtime),
                vec![ScrollOutcome::AnchorMissing]
            );
            assert_eq!(scroll.last_scrolled(), None);
            assert_eq!(
                runtime.nav.get_untracked(),
                NavState {
                    active_section: SectionId::Contacts,
                    mobile_menu_open: false,
                }
            );
        });
    }

    #[test]
    fn effects_queue_in_dispatch_order() {
        with_page_runtime(&ALL_ANCHORS, |runtime, scroll| {
            runtime.activate(SectionId::Ads);
            runtime.activate(SectionId::Home);
            assert_eq!(
                runtime.effects.get_untracked(),
                vec![
                    PageEffect::ScrollToAnchor(SectionId::Ads),
                    PageEffect::ScrollToAnchor(SectionId::Home),
                ]
            );
            effect_executor::drain_pending(runtime);
            assert_eq!(scrolled_anchors(&scroll), vec!["ads", "home"]);
        });
    }

    fn scrolled_anchors(scroll: &MemoryScrollService) -> Vec<String> {
        scroll
            .history()
            .into_iter()
            .map(|(anchor, _)| anchor)
            .collect()
    }

    #[test]
    fn installed_executor_scrolls_on_each_dispatch() {
        with_page_runtime(&ALL_ANCHORS, |runtime, scroll| {
            effect_executor::install(runtime);

            runtime.activate(SectionId::Live);
            assert_eq!(scroll.last_scrolled().as_deref(), Some("live"));
            assert!(runtime.effects.get_untracked().is_empty());

            runtime.toggle_menu();
            runtime.activate(SectionId::Contacts);
            assert!(!runtime.nav.get_untracked().mobile_menu_open);
            assert_eq!(scrolled_anchors(&scroll), vec!["live", "contacts"]);
            assert!(runtime.effects.get_untracked().is_empty());
        });
    }

    #[test]
    fn runtime_carries_compiled_station_config() {
        with_page_runtime(&[], |runtime, _| {
            assert_eq!(runtime.config.station.name, "POPFM");
        });
    }
}
