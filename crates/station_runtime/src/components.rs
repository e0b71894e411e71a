//! Station page UI composition.
//!
//! Every section reads content from [`crate::runtime_context::PageRuntimeContext::config`] and
//! routes navigation through the runtime dispatch callback. Elements eligible for reveal-on-view
//! carry the configured marker class.

mod about;
mod ads;
mod contacts;
mod hero;
mod live;
mod nav;

use leptos::*;

use self::{
    about::AboutSection,
    ads::AdsSection,
    contacts::{ContactsSection, StationFooter},
    hero::HeroSection,
    live::LiveSection,
    nav::StationNav,
};
use crate::{
    config::StationConfig, host::install_reveal_on_view, runtime_context::use_page_runtime,
};

/// Appends the configured reveal marker class to a base class list.
pub(crate) fn reveal_marked(config: &StationConfig, base: &str) -> String {
    let marker = config.reveal.marker_class.as_str();
    if base.is_empty() {
        marker.to_string()
    } else {
        format!("{base} {marker}")
    }
}

/// Inline `animation-delay` for staggered entries, expressed in tenths of a second.
pub(crate) fn stagger_style(tenths: usize) -> String {
    format!("animation-delay: {}.{}s", tenths / 10, tenths % 10)
}

#[component]
/// Full single-page layout: fixed navigation, five anchored sections, and the footer.
///
/// Mounting the page starts the shared reveal watcher; unmounting releases it.
pub fn StationPage() -> impl IntoView {
    let runtime = use_page_runtime();

    let page = view! {
        <div class="station-page" data-ui-kind="station-page">
            <StationNav />
            <main class="station-main">
                <HeroSection />
                <LiveSection />
                <AboutSection />
                <AdsSection />
                <ContactsSection />
            </main>
            <StationFooter />
        </div>
    };

    install_reveal_on_view(runtime.host.get_value(), runtime.config.reveal.clone());

    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::station_config;

    #[test]
    fn marker_class_is_appended_to_base_classes() {
        let config = station_config();
        assert_eq!(
            reveal_marked(config, "station-heading"),
            "station-heading fade-on-scroll"
        );
        assert_eq!(reveal_marked(config, ""), "fade-on-scroll");
    }

    #[test]
    fn stagger_delays_render_in_seconds() {
        assert_eq!(stagger_style(6), "animation-delay: 0.6s");
        assert_eq!(stagger_style(8), "animation-delay: 0.8s");
        assert_eq!(stagger_style(0), "animation-delay: 0.0s");
        assert_eq!(stagger_style(13), "animation-delay: 1.3s");
    }
}
