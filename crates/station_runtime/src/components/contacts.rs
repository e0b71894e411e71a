use leptos::*;
use system_ui::{ButtonVariant, Card, Icon, IconButton, IconSize, LayoutPadding};

use super::reveal_marked;
use crate::{model::SectionId, runtime_context::use_page_runtime};

#[component]
pub(super) fn ContactsSection() -> impl IntoView {
    let runtime = use_page_runtime();
    let content = &runtime.config.content;

    view! {
        <section id=SectionId::Contacts.anchor() class="station-section station-contacts" data-ui-tone="muted">
            <h3 class=reveal_marked(runtime.config, "station-heading")>
                <span class="gradient-text">{SectionId::Contacts.nav_label()}</span>
            </h3>
            <Card
                padding=LayoutPadding::Lg
                layout_class="station-contacts-card"
                marker_class=reveal_marked(runtime.config, "")
            >
                <ul class="station-contact-list">
                    {content
                        .contacts
                        .iter()
                        .map(|contact| {
                            view! {
                                <li class="station-contact-row">
                                    <span class="station-contact-icon">
                                        <Icon icon=contact.icon_name() size=IconSize::Md />
                                    </span>
                                    <div class="station-contact-text">
                                        <div class="station-contact-label">{contact.label.clone()}</div>
                                        <div class="station-contact-value">{contact.value.clone()}</div>
                                    </div>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                // Social buttons carry no destinations yet.
                <div class="station-socials">
                    {content
                        .socials
                        .iter()
                        .map(|social| {
                            view! {
                                <IconButton
                                    icon=social.icon_name()
                                    variant=ButtonVariant::Outline
                                    layout_class="station-social"
                                    aria_label=social.label.clone()
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </Card>
        </section>
    }
}

#[component]
pub(super) fn StationFooter() -> impl IntoView {
    let runtime = use_page_runtime();
    view! {
        <footer class="station-footer">
            <p>{runtime.config.station.copyright.clone()}</p>
        </footer>
    }
}
