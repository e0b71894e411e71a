//! Station page runtime: navigation state, reducer effects, reveal-on-view, and the page UI.

pub mod components;
pub mod config;
pub mod effect_executor;
pub mod host;
pub mod model;
pub mod reducer;
pub mod reveal;
pub mod runtime_context;

pub use components::StationPage;
pub use config::{
    station_config, station_manifest_json, PlayerWidgetConfig, StationConfig, StationConfigError,
};
pub use host::{install_reveal_on_view, PageHostContext};
pub use model::{NavState, SectionId};
pub use reducer::{reduce_nav, NavAction, PageEffect};
pub use reveal::{
    RevealConfig, RevealConfigError, RevealEngine, RevealPhase, RevealStartError, RevealWatcher,
};
pub use runtime_context::{use_page_runtime, PageProvider, PageRuntimeContext};
