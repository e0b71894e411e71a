//! Shared control and surface primitives.

use leptos::ev::MouseEvent;
use leptos::*;

use crate::{Icon, IconName, IconSize};

mod controls;
mod data_display;

pub use controls::{Button, IconButton};
pub use data_display::Card;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared button variants.
pub enum ButtonVariant {
    /// Gradient call-to-action button.
    #[default]
    Primary,
    /// Bordered transparent button.
    Outline,
    /// Borderless button for icon toggles.
    Ghost,
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Outline => "outline",
            Self::Ghost => "ghost",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared button sizing tokens.
pub enum ButtonSize {
    /// Dense button.
    Sm,
    /// Default button.
    #[default]
    Md,
    /// Large hero button.
    Lg,
}

impl ButtonSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared button silhouettes.
pub enum ButtonShape {
    /// Rounded rectangle.
    #[default]
    Standard,
    /// Circle, for icon-only buttons.
    Circle,
}

impl ButtonShape {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Circle => "circle",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Card surface tones.
pub enum CardTone {
    /// Translucent card surface.
    #[default]
    Standard,
    /// Card framed by the brand gradient border.
    GradientBorder,
}

impl CardTone {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::GradientBorder => "gradient-border",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared padding tokens.
pub enum LayoutPadding {
    /// Compact padding.
    Sm,
    /// Default padding.
    #[default]
    Md,
    /// Spacious padding.
    Lg,
}

impl LayoutPadding {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_class_merges_only_when_present() {
        assert_eq!(merge_layout_class("ui-button", None), "ui-button");
        assert_eq!(merge_layout_class("ui-button", Some("")), "ui-button");
        assert_eq!(
            merge_layout_class("ui-button", Some("nav-cta")),
            "ui-button nav-cta"
        );
    }

    #[test]
    fn default_tokens_match_dom_contract() {
        assert_eq!(ButtonVariant::default().token(), "primary");
        assert_eq!(ButtonSize::default().token(), "md");
        assert_eq!(ButtonShape::default().token(), "standard");
        assert_eq!(CardTone::GradientBorder.token(), "gradient-border");
        assert_eq!(LayoutPadding::Lg.token(), "lg");
        assert_eq!(bool_token(true), "true");
    }
}
