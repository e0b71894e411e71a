use leptos::*;
use system_ui::{Button, ButtonSize, Card, CardTone, Icon, IconName, IconSize, LayoutPadding};

use super::reveal_marked;
use crate::{model::SectionId, runtime_context::use_page_runtime};

#[component]
/// Advertising pitch with audience stats and a shortcut to the contacts section.
pub(super) fn AdsSection() -> impl IntoView {
    let runtime = use_page_runtime();
    let ads = &runtime.config.content.ads;

    view! {
        <section id=SectionId::Ads.anchor() class="station-section station-ads">
            <h3 class=reveal_marked(runtime.config, "station-heading")>
                <span class="gradient-text">{ads.heading.clone()}</span>
            </h3>
            <p class=reveal_marked(runtime.config, "station-lead")>{ads.lead.clone()}</p>
            <Card
                tone=CardTone::GradientBorder
                padding=LayoutPadding::Lg
                layout_class="station-ads-card"
                marker_class=reveal_marked(runtime.config, "")
            >
                <div class="station-ads-stats">
                    {ads
                        .stats
                        .iter()
                        .map(|stat| {
                            view! {
                                <div class="station-ads-stat">
                                    <Icon icon=stat.icon_name() size=IconSize::Xxl layout_class="station-stat-icon" />
                                    <div class="station-stat-value">{stat.value.clone()}</div>
                                    <div class="station-stat-label">{stat.label.clone()}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <Button
                    size=ButtonSize::Lg
                    leading_icon=IconName::Phone
                    icon_size=IconSize::Md
                    on_click=Callback::new(move |_| runtime.activate(SectionId::Contacts))
                >
                    {ads.cta.clone()}
                </Button>
            </Card>
        </section>
    }
}
