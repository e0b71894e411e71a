use leptos::*;
use system_ui::{Button, ButtonSize, ButtonVariant, Icon, IconName, IconSize};

use super::{reveal_marked, stagger_style};
use crate::{model::SectionId, runtime_context::use_page_runtime};

// Hero stats start after the headline cascade (0.2s, 0.4s) at 0.6s.
const HERO_STAT_DELAY_TENTHS: usize = 6;

#[component]
pub(super) fn HeroSection() -> impl IntoView {
    let runtime = use_page_runtime();
    let station = &runtime.config.station;
    let stats = &runtime.config.content.hero_stats;

    view! {
        <section id=SectionId::Home.anchor() class="station-section station-hero">
            <div class="station-hero-glow" aria-hidden="true"></div>
            <div class=reveal_marked(runtime.config, "station-hero-inner")>
                <div class="station-badge animate-scale-in">
                    <span>{station.on_air_badge.clone()}</span>
                </div>
                <h2 class="station-hero-title gradient-text animate-slide-up">{station.name.clone()}</h2>
                <p class="station-hero-tagline animate-fade-in" style=stagger_style(2)>
                    {station.tagline.clone()}
                </p>
                <div class="station-hero-actions animate-fade-in" style=stagger_style(4)>
                    <Button
                        size=ButtonSize::Lg
                        leading_icon=IconName::Play
                        icon_size=IconSize::Md
                        on_click=Callback::new(move |_| runtime.activate(SectionId::Live))
                    >
                        "Включить радио"
                    </Button>
                    <Button
                        size=ButtonSize::Lg
                        variant=ButtonVariant::Outline
                        on_click=Callback::new(move |_| runtime.activate(SectionId::About))
                    >
                        "Узнать больше"
                    </Button>
                </div>

                <div class="station-hero-stats">
                    {stats
                        .iter()
                        .enumerate()
                        .map(|(idx, stat)| {
                            view! {
                                <div
                                    class=reveal_marked(runtime.config, "station-stat")
                                    style=stagger_style(HERO_STAT_DELAY_TENTHS + idx)
                                >
                                    <Icon icon=stat.icon_name() size=IconSize::Xl layout_class="station-stat-icon" />
                                    <div class="station-stat-value">{stat.value.clone()}</div>
                                    <div class="station-stat-label">{stat.label.clone()}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
