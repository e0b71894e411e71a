//! Shared host-bundle and capability models for browser and native runtime composition.

use std::rc::Rc;

use crate::{
    MemoryScrollService, MemoryViewportObserver, NoopScrollService, NoopViewportObserverService,
    ScrollService, ViewportObserverService,
};

/// Stable host strategy selected for the current build/runtime composition path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed runtime composition.
    Browser,
    /// Native build with no-op adapters (prerender checks, tooling).
    Headless,
    /// In-memory adapters driven by tests.
    Memory,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics and runtime inspection.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Headless => "headless",
            Self::Memory => "memory",
        }
    }
}

/// Host availability state for one optional capability domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityStatus {
    /// Capability is available.
    Available,
    /// Capability is not implemented or not supported on the active host.
    Unavailable,
}

impl CapabilityStatus {
    /// Returns whether the capability can be used immediately.
    pub const fn is_available(self) -> bool {
        matches!(self, Self::Available)
    }
}

/// Host capability snapshot exposed to runtime wiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostCapabilities {
    /// Smooth anchor scrolling availability.
    pub smooth_scroll: CapabilityStatus,
    /// Viewport-intersection observation availability.
    pub viewport_observer: CapabilityStatus,
}

impl HostCapabilities {
    /// Browser-default capability posture.
    pub const fn browser() -> Self {
        Self {
            smooth_scroll: CapabilityStatus::Available,
            viewport_observer: CapabilityStatus::Available,
        }
    }

    /// Capability posture for hosts without a DOM.
    pub const fn headless() -> Self {
        Self {
            smooth_scroll: CapabilityStatus::Unavailable,
            viewport_observer: CapabilityStatus::Unavailable,
        }
    }
}

/// Runtime-selected host service bundle injected into the station page runtime.
///
/// All environment-specific service selection happens before this bundle crosses into
/// `station_runtime`, which keeps the page decoupled from `web-sys` details.
#[derive(Clone)]
pub struct HostServices {
    /// Anchor scrolling service.
    pub scroll: Rc<dyn ScrollService>,
    /// Viewport-intersection watcher factory.
    pub viewport_observer: Rc<dyn ViewportObserverService>,
    /// Host availability snapshot.
    pub capabilities: HostCapabilities,
    /// Stable strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Builds a bundle of no-op adapters for hosts without a DOM.
    pub fn headless() -> Self {
        Self {
            scroll: Rc::new(NoopScrollService),
            viewport_observer: Rc::new(NoopViewportObserverService),
            capabilities: HostCapabilities::headless(),
            host_strategy: HostStrategy::Headless,
        }
    }

    /// Builds a bundle backed by the supplied in-memory adapters.
    pub fn memory(scroll: MemoryScrollService, viewport_observer: MemoryViewportObserver) -> Self {
        Self {
            scroll: Rc::new(scroll),
            viewport_observer: Rc::new(viewport_observer),
            capabilities: HostCapabilities::browser(),
            host_strategy: HostStrategy::Memory,
        }
    }
}

impl std::fmt::Debug for HostServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostServices")
            .field("capabilities", &self.capabilities)
            .field("host_strategy", &self.host_strategy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headless_bundle_reports_unavailable_capabilities() {
        let services = HostServices::headless();
        assert_eq!(services.host_strategy.as_str(), "headless");
        assert!(!services.capabilities.smooth_scroll.is_available());
        assert!(!services.capabilities.viewport_observer.is_available());
        assert_eq!(
            services
                .scroll
                .scroll_to_anchor("home", crate::ScrollBehavior::Smooth),
            crate::ScrollOutcome::Unavailable
        );
    }
}
