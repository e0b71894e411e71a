use std::rc::Rc;

use platform_host::{CapabilityStatus, HostCapabilities, HostServices, HostStrategy};

use crate::{WebScrollService, WebViewportObserverService};

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(target_arch = "wasm32")]
    {
        HostStrategy::Browser
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        HostStrategy::Headless
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Probes the running host for the capabilities the page uses.
pub fn host_capabilities() -> HostCapabilities {
    match selected_host_strategy() {
        HostStrategy::Browser => HostCapabilities {
            smooth_scroll: CapabilityStatus::Available,
            viewport_observer: if WebViewportObserverService::is_supported() {
                CapabilityStatus::Available
            } else {
                CapabilityStatus::Unavailable
            },
        },
        HostStrategy::Headless | HostStrategy::Memory => HostCapabilities::headless(),
    }
}

/// Builds the host service bundle for the active compile-time strategy.
pub fn build_host_services() -> HostServices {
    match selected_host_strategy() {
        HostStrategy::Browser => HostServices {
            scroll: Rc::new(WebScrollService),
            viewport_observer: Rc::new(WebViewportObserverService),
            capabilities: host_capabilities(),
            host_strategy: HostStrategy::Browser,
        },
        HostStrategy::Headless | HostStrategy::Memory => HostServices::headless(),
    }
}

#[cfg(test)]
mod tests {
    use platform_host::{ScrollBehavior, ScrollOutcome};

    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn native_build_selects_headless_bundle() {
        assert_eq!(host_strategy_name(), "headless");
        let services = build_host_services();
        assert_eq!(services.host_strategy, HostStrategy::Headless);
        assert_eq!(services.capabilities, HostCapabilities::headless());
        assert_eq!(
            services
                .scroll
                .scroll_to_anchor("live", ScrollBehavior::Smooth),
            ScrollOutcome::Unavailable
        );
    }
}
