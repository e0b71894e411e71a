use super::*;

#[component]
/// Shared button primitive with standardized states, an optional leading icon, and semantic
/// shape tokens.
pub fn Button(
    #[prop(default = ButtonVariant::Primary)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    #[prop(default = ButtonShape::Standard)] shape: ButtonShape,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional)] leading_icon: Option<IconName>,
    #[prop(default = IconSize::Sm)] icon_size: IconSize,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let class = merge_layout_class("ui-button", layout_class);
    view! {
        <button
            type="button"
            class=class
            aria-label=move || {
                let label = aria_label.get();
                (!label.is_empty()).then_some(label)
            }
            aria-current=move || selected.get().then_some("true")
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-shape=shape.token()
            data-ui-state=move || if selected.get() { "selected" } else { "idle" }
            data-ui-selected=move || bool_token(selected.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {leading_icon.map(|icon| view! { <Icon icon size=icon_size layout_class="ui-button-icon" /> })}
            {children()}
        </button>
    }
}

#[component]
/// Shared icon-only button used for the menu toggle and social links.
pub fn IconButton(
    #[prop(into)] icon: MaybeSignal<IconName>,
    #[prop(default = ButtonVariant::Ghost)] variant: ButtonVariant,
    #[prop(default = ButtonShape::Circle)] shape: ButtonShape,
    #[prop(default = IconSize::Md)] icon_size: IconSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] aria_controls: Option<String>,
    #[prop(optional, into)] aria_expanded: Option<MaybeSignal<bool>>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-icon-button", layout_class)
            aria-label=move || aria_label.get()
            aria-controls=aria_controls
            aria-expanded=move || aria_expanded.as_ref().map(|expanded| bool_token(expanded.get()))
            data-ui-primitive="true"
            data-ui-kind="icon-button"
            data-ui-variant=variant.token()
            data-ui-shape=shape.token()
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {move || view! { <Icon icon=icon.get() size=icon_size /> }}
        </button>
    }
}
