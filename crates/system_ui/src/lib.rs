//! Shared UI primitive library for the station landing page.
//!
//! The crate owns reusable Leptos primitives, a centralized icon API, and the
//! stable `data-ui-*` DOM contract consumed by the page stylesheet. Page sections
//! compose these primitives instead of emitting ad hoc control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    Button, ButtonShape, ButtonSize, ButtonVariant, Card, CardTone, IconButton, LayoutPadding,
};
