//! Centralized icon abstraction for the landing page.
//!
//! Semantic icon identifiers map to stroke-based 24px SVG bodies so page sections never embed
//! raw icon strings. Content configuration refers to icons by [`IconName::token`].

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Semantic icon identifiers used by page sections.
pub enum IconName {
    /// Station logo.
    Radio,
    /// Start playback.
    Play,
    /// Collapsed navigation menu.
    Menu,
    /// Close/dismiss.
    Dismiss,
    /// Music note.
    Music,
    /// Listener audience.
    Users,
    /// Hosts/DJs.
    Mic,
    /// Highlight sparkle.
    Sparkles,
    /// Clock / around the clock.
    Clock,
    /// Heart.
    Heart,
    /// Lightning bolt.
    Zap,
    /// Target audience.
    Target,
    /// Growth chart.
    TrendingUp,
    /// Award ribbon.
    Award,
    /// Telephone.
    Phone,
    /// Envelope.
    Mail,
    /// Map pin.
    MapPin,
    /// Instagram logo.
    Instagram,
    /// Facebook logo.
    Facebook,
    /// YouTube logo.
    Youtube,
}

impl IconName {
    /// Every icon in catalog order.
    pub const ALL: [Self; 20] = [
        Self::Radio,
        Self::Play,
        Self::Menu,
        Self::Dismiss,
        Self::Music,
        Self::Users,
        Self::Mic,
        Self::Sparkles,
        Self::Clock,
        Self::Heart,
        Self::Zap,
        Self::Target,
        Self::TrendingUp,
        Self::Award,
        Self::Phone,
        Self::Mail,
        Self::MapPin,
        Self::Instagram,
        Self::Facebook,
        Self::Youtube,
    ];

    /// Stable token used for CSS hooks and content configuration.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Radio => "radio",
            Self::Play => "play",
            Self::Menu => "menu",
            Self::Dismiss => "dismiss",
            Self::Music => "music",
            Self::Users => "users",
            Self::Mic => "mic",
            Self::Sparkles => "sparkles",
            Self::Clock => "clock",
            Self::Heart => "heart",
            Self::Zap => "zap",
            Self::Target => "target",
            Self::TrendingUp => "trending-up",
            Self::Award => "award",
            Self::Phone => "phone",
            Self::Mail => "mail",
            Self::MapPin => "map-pin",
            Self::Instagram => "instagram",
            Self::Facebook => "facebook",
            Self::Youtube => "youtube",
        }
    }

    /// Parses a stable token back into an icon.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|icon| icon.token() == token)
    }

    /// Raw SVG body markup for the icon.
    fn svg_body(self) -> &'static str {
        match self {
            Self::Radio => {
                r#"<path d="M4.9 19.1C1 15.2 1 8.8 4.9 4.9"/><path d="M7.8 16.2c-2.3-2.3-2.3-6.1 0-8.5"/><circle cx="12" cy="12" r="2"/><path d="M16.2 7.8c2.3 2.3 2.3 6.1 0 8.5"/><path d="M19.1 4.9C23 8.8 23 15.1 19.1 19"/>"#
            }
            Self::Play => r#"<polygon points="6 3 20 12 6 21 6 3"/>"#,
            Self::Menu => {
                r#"<line x1="4" x2="20" y1="12" y2="12"/><line x1="4" x2="20" y1="6" y2="6"/><line x1="4" x2="20" y1="18" y2="18"/>"#
            }
            Self::Dismiss => r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#,
            Self::Music => {
                r#"<path d="M9 18V5l12-2v13"/><circle cx="6" cy="18" r="3"/><circle cx="18" cy="16" r="3"/>"#
            }
            Self::Users => {
                r#"<path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/><circle cx="9" cy="7" r="4"/><path d="M22 21v-2a4 4 0 0 0-3-3.87"/><path d="M16 3.13a4 4 0 0 1 0 7.75"/>"#
            }
            Self::Mic => {
                r#"<path d="M12 2a3 3 0 0 0-3 3v7a3 3 0 0 0 6 0V5a3 3 0 0 0-3-3Z"/><path d="M19 10v2a7 7 0 0 1-14 0v-2"/><line x1="12" x2="12" y1="19" y2="22"/>"#
            }
            Self::Sparkles => {
                r#"<path d="m12 3-1.9 5.8a2 2 0 0 1-1.3 1.3L3 12l5.8 1.9a2 2 0 0 1 1.3 1.3L12 21l1.9-5.8a2 2 0 0 1 1.3-1.3L21 12l-5.8-1.9a2 2 0 0 1-1.3-1.3Z"/><path d="M5 3v4"/><path d="M19 17v4"/><path d="M3 5h4"/><path d="M17 19h4"/>"#
            }
            Self::Clock => {
                r#"<circle cx="12" cy="12" r="10"/><polyline points="12 6 12 12 16 14"/>"#
            }
            Self::Heart => {
                r#"<path d="M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z"/>"#
            }
            Self::Zap => r#"<polygon points="13 2 3 14 12 14 11 22 21 10 12 10 13 2"/>"#,
            Self::Target => {
                r#"<circle cx="12" cy="12" r="10"/><circle cx="12" cy="12" r="6"/><circle cx="12" cy="12" r="2"/>"#
            }
            Self::TrendingUp => {
                r#"<polyline points="22 7 13.5 15.5 8.5 10.5 2 17"/><polyline points="16 7 22 7 22 13"/>"#
            }
            Self::Award => {
                r#"<circle cx="12" cy="8" r="6"/><path d="M15.48 12.89 17 22l-5-3-5 3 1.52-9.11"/>"#
            }
            Self::Phone => {
                r#"<path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92Z"/>"#
            }
            Self::Mail => {
                r#"<rect width="20" height="16" x="2" y="4" rx="2"/><path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#
            }
            Self::MapPin => {
                r#"<path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"/><circle cx="12" cy="10" r="3"/>"#
            }
            Self::Instagram => {
                r#"<rect width="20" height="20" x="2" y="2" rx="5" ry="5"/><path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37Z"/><line x1="17.5" x2="17.51" y1="6.5" y2="6.5"/>"#
            }
            Self::Facebook => {
                r#"<path d="M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3Z"/>"#
            }
            Self::Youtube => {
                r#"<path d="M2.5 17a24.12 24.12 0 0 1 0-10 2 2 0 0 1 1.4-1.4 49.56 49.56 0 0 1 16.2 0A2 2 0 0 1 21.5 7a24.12 24.12 0 0 1 0 10 2 2 0 0 1-1.4 1.4 49.55 49.55 0 0 1-16.2 0A2 2 0 0 1 2.5 17"/><path d="m10 15 5-3-5-3Z"/>"#
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Standardized icon sizes.
pub enum IconSize {
    /// 16px inline icon (buttons).
    #[default]
    Sm,
    /// 20px icon (contact rows, large buttons).
    Md,
    /// 24px icon (header controls).
    Lg,
    /// 32px icon (stats, feature tiles).
    Xl,
    /// 40px icon (advertising stats).
    Xxl,
}

impl IconSize {
    /// Pixel size for the icon.
    pub const fn px(self) -> u16 {
        match self {
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 24,
            Self::Xl => 32,
            Self::Xxl => 40,
        }
    }

    /// Stable size token used for CSS hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xxl => "xxl",
        }
    }
}

#[component]
/// Renders an icon SVG from the centralized catalog.
pub fn Icon(
    /// Semantic icon identifier.
    icon: IconName,
    /// Standardized icon size token.
    #[prop(default = IconSize::Sm)]
    size: IconSize,
    /// Extra classes for placement.
    #[prop(optional)]
    layout_class: Option<&'static str>,
) -> impl IntoView {
    let size_px = size.px().to_string();
    let class = match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("ui-icon {layout_class}"),
        _ => "ui-icon".to_string(),
    };

    view! {
        <svg
            class=class
            data-icon=icon.token()
            data-size=size.token()
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            width=size_px.clone()
            height=size_px
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            focusable="false"
            aria-hidden="true"
            inner_html=icon.svg_body()
        />
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn tokens_are_unique_and_parse_back() {
        let tokens = IconName::ALL
            .iter()
            .map(|icon| icon.token())
            .collect::<HashSet<_>>();
        assert_eq!(tokens.len(), IconName::ALL.len());

        for icon in IconName::ALL {
            assert_eq!(IconName::from_token(icon.token()), Some(icon));
        }
        assert_eq!(IconName::from_token("spaceship"), None);
    }

    #[test]
    fn every_icon_has_svg_markup() {
        for icon in IconName::ALL {
            let body = icon.svg_body();
            assert!(body.starts_with('<'), "{} body", icon.token());
            assert!(!body.contains("<svg"), "{} must not nest svg", icon.token());
        }
    }
}
