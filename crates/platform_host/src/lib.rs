//! Typed host-domain contracts shared by the station page runtime and browser adapters.
//!
//! This crate is the API-first boundary for the two browser capabilities the page depends on:
//! smooth anchor scrolling and viewport-intersection observation. Concrete browser adapters live
//! in `platform_host_web`; the in-memory implementations here back native builds and tests.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod host;
pub mod scroll;
pub mod viewport;

pub use host::{CapabilityStatus, HostCapabilities, HostServices, HostStrategy};
pub use scroll::{
    MemoryScrollService, NoopScrollService, ScrollBehavior, ScrollOutcome, ScrollService,
};
pub use viewport::{
    IntersectionSample, MemoryViewportObserver, NoopViewportObserverService, ObservationHandle,
    ObserveError, ObserveRequest, RevealCallback, RevealTargetId, ViewportObserverService,
};
