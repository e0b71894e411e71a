use leptos::*;
use system_ui::{Button, ButtonSize, ButtonVariant, Icon, IconButton, IconName, IconSize};

use crate::{model::SectionId, runtime_context::use_page_runtime};

const MOBILE_MENU_ID: &str = "station-mobile-menu";

#[component]
/// Fixed header with brand, section links, the listen shortcut, and the collapsible mobile menu.
pub(super) fn StationNav() -> impl IntoView {
    let runtime = use_page_runtime();
    let station = &runtime.config.station;
    let menu_open = Signal::derive(move || runtime.nav.get().mobile_menu_open);
    let toggle_icon = Signal::derive(move || {
        if menu_open.get() {
            IconName::Dismiss
        } else {
            IconName::Menu
        }
    });
    let toggle_label = Signal::derive(move || {
        if menu_open.get() {
            "Закрыть меню".to_string()
        } else {
            "Открыть меню".to_string()
        }
    });

    view! {
        <nav class="station-nav" data-ui-kind="station-nav" aria-label="Навигация">
            <div class="station-nav-bar">
                <div class="station-brand">
                    <span class="station-logo animate-glow">
                        <Icon icon=IconName::Radio size=IconSize::Lg />
                    </span>
                    <div>
                        <h1 class="station-brand-title gradient-text">{station.name.clone()}</h1>
                        <p class="station-brand-city">{station.city.clone()}</p>
                    </div>
                </div>

                <div class="station-nav-links" data-ui-slot="desktop-links">
                    {SectionId::ALL
                        .into_iter()
                        .map(|section| view! { <SectionLink section layout_class="station-nav-link" /> })
                        .collect_view()}
                </div>

                <div class="station-nav-actions">
                    <Button
                        layout_class="station-listen"
                        leading_icon=IconName::Play
                        on_click=Callback::new(move |_| runtime.activate(SectionId::Live))
                    >
                        "Слушать"
                    </Button>
                    <IconButton
                        icon=toggle_icon
                        icon_size=IconSize::Lg
                        layout_class="station-menu-toggle"
                        aria_label=toggle_label
                        aria_controls=MOBILE_MENU_ID
                        aria_expanded=menu_open
                        on_click=Callback::new(move |_| runtime.toggle_menu())
                    />
                </div>
            </div>

            <Show when=move || menu_open.get()>
                <div id=MOBILE_MENU_ID class="station-mobile-menu animate-fade-in" data-ui-slot="mobile-menu">
                    {SectionId::ALL
                        .into_iter()
                        .map(|section| view! { <SectionLink section layout_class="station-mobile-link" /> })
                        .collect_view()}
                    <Button
                        size=ButtonSize::Lg
                        layout_class="station-mobile-listen"
                        leading_icon=IconName::Play
                        on_click=Callback::new(move |_| runtime.activate(SectionId::Live))
                    >
                        "Слушать радио"
                    </Button>
                </div>
            </Show>
        </nav>
    }
}

#[component]
fn SectionLink(section: SectionId, layout_class: &'static str) -> impl IntoView {
    let runtime = use_page_runtime();
    view! {
        <Button
            variant=ButtonVariant::Ghost
            layout_class
            selected=Signal::derive(move || runtime.nav.get().is_active(section))
            on_click=Callback::new(move |_| runtime.activate(section))
        >
            {section.nav_label()}
        </Button>
    }
}
