use leptos::*;
use system_ui::{Card, CardTone, LayoutPadding};

use super::reveal_marked;
use crate::{model::SectionId, runtime_context::use_page_runtime};

#[component]
/// Live broadcast section hosting the third-party player widget.
///
/// The widget markup is injected verbatim into the container; the external player script
/// upgrades it.
pub(super) fn LiveSection() -> impl IntoView {
    let runtime = use_page_runtime();
    let player = &runtime.config.player;
    let markup = player.to_markup();

    view! {
        <section id=SectionId::Live.anchor() class="station-section station-live">
            <h3 class=reveal_marked(runtime.config, "station-heading")>
                <span class="gradient-text">{SectionId::Live.nav_label()}</span>
            </h3>
            <Card
                tone=CardTone::GradientBorder
                padding=LayoutPadding::Lg
                layout_class="station-live-card"
                marker_class=reveal_marked(runtime.config, "")
            >
                <div class="station-player-frame">
                    <div
                        id=player.container_id.clone()
                        class="station-player"
                        inner_html=markup
                    ></div>
                </div>
            </Card>
        </section>
    }
}
