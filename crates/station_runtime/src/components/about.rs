use leptos::*;
use system_ui::{Card, Icon, IconSize, LayoutPadding};

use super::{reveal_marked, stagger_style};
use crate::{model::SectionId, runtime_context::use_page_runtime};

#[component]
pub(super) fn AboutSection() -> impl IntoView {
    let runtime = use_page_runtime();
    let features = &runtime.config.content.features;

    view! {
        <section id=SectionId::About.anchor() class="station-section station-about" data-ui-tone="muted">
            <h3 class=reveal_marked(runtime.config, "station-heading")>
                <span class="gradient-text">{SectionId::About.nav_label()}</span>
            </h3>
            <div class="station-feature-grid">
                {features
                    .iter()
                    .enumerate()
                    .map(|(idx, feature)| {
                        view! {
                            <Card
                                padding=LayoutPadding::Lg
                                layout_class="station-feature"
                                marker_class=reveal_marked(runtime.config, "")
                                style=stagger_style(idx)
                            >
                                <div class="station-feature-icon">
                                    <Icon icon=feature.icon_name() size=IconSize::Xl />
                                </div>
                                <h4 class="station-feature-title">{feature.title.clone()}</h4>
                                <p class="station-feature-text">{feature.description.clone()}</p>
                            </Card>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
