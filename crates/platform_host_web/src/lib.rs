//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate is the concrete browser-side host wiring layer for smooth anchor scrolling and
//! `IntersectionObserver`-backed reveal watching. Native builds compile the same public API but
//! every adapter degrades to the headless behavior.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and the host bundle factory for runtime wiring.
pub mod adapters;
pub mod scroll;
pub mod viewport;

pub use adapters::{build_host_services, host_capabilities, host_strategy_name};
pub use scroll::WebScrollService;
pub use viewport::{WebViewportObserverService, REVEAL_TARGET_ATTR};
