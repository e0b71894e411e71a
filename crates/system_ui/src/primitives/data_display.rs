use super::*;

#[component]
/// Content card surface.
pub fn Card(
    #[prop(default = CardTone::Standard)] tone: CardTone,
    #[prop(default = LayoutPadding::Md)] padding: LayoutPadding,
    #[prop(optional)] layout_class: Option<&'static str>,
    /// Runtime class hook appended after the layout class, e.g. a reveal-on-view marker.
    #[prop(optional, into)]
    marker_class: Option<String>,
    #[prop(optional, into)] style: Option<String>,
    children: Children,
) -> impl IntoView {
    let mut class = merge_layout_class("ui-card", layout_class);
    if let Some(marker_class) = marker_class.filter(|marker| !marker.is_empty()) {
        class.push(' ');
        class.push_str(&marker_class);
    }
    view! {
        <article
            class=class
            style=style
            data-ui-primitive="true"
            data-ui-kind="card"
            data-ui-tone=tone.token()
            data-ui-padding=padding.token()
        >
            {children()}
        </article>
    }
}
