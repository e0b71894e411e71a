use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Navigable page section. Each variant is backed by an element whose DOM id is [`Self::anchor`].
pub enum SectionId {
    #[default]
    Home,
    Live,
    About,
    Ads,
    Contacts,
}

impl SectionId {
    /// Sections in navigation order.
    pub const ALL: [Self; 5] = [
        Self::Home,
        Self::Live,
        Self::About,
        Self::Ads,
        Self::Contacts,
    ];

    pub const fn anchor(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Live => "live",
            Self::About => "about",
            Self::Ads => "ads",
            Self::Contacts => "contacts",
        }
    }

    pub const fn nav_label(self) -> &'static str {
        match self {
            Self::Home => "Главная",
            Self::Live => "Прямой эфир",
            Self::About => "О станции",
            Self::Ads => "Реклама",
            Self::Contacts => "Контакты",
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|section| section.anchor() == anchor)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Navigation state owned by the page for the lifetime of one mount.
pub struct NavState {
    pub active_section: SectionId,
    pub mobile_menu_open: bool,
}

impl NavState {
    pub fn is_active(&self, section: SectionId) -> bool {
        self.active_section == section
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_home_with_menu_closed() {
        let state = NavState::default();
        assert_eq!(state.active_section, SectionId::Home);
        assert!(!state.mobile_menu_open);
        assert!(state.is_active(SectionId::Home));
    }

    #[test]
    fn anchors_round_trip_and_reject_unknown_ids() {
        for section in SectionId::ALL {
            assert_eq!(SectionId::from_anchor(section.anchor()), Some(section));
        }
        assert_eq!(SectionId::from_anchor("schedule"), None);
        assert_eq!(SectionId::from_anchor(""), None);
    }

    #[test]
    fn live_section_carries_russian_label() {
        assert_eq!(SectionId::Live.nav_label(), "Прямой эфир");
        assert_eq!(
            serde_json::to_string(&SectionId::Contacts).expect("serialize"),
            "\"contacts\""
        );
    }
}
