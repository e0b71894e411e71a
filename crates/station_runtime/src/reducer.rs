//! Navigation actions, side-effect intents, and transition logic for the station page.

use crate::model::{NavState, SectionId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Actions accepted by [`reduce_nav`] to mutate [`NavState`].
pub enum NavAction {
    /// Highlight a section, close the mobile menu, and scroll to the section anchor.
    Activate(SectionId),
    /// Flip the mobile menu open/closed.
    ToggleMenu,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_nav`] for the page host to execute.
pub enum PageEffect {
    /// Smooth-scroll the viewport to the anchor of a section.
    ScrollToAnchor(SectionId),
}

/// Applies a [`NavAction`] to the navigation state and collects resulting side effects.
pub fn reduce_nav(state: &mut NavState, action: NavAction) -> Vec<PageEffect> {
    let mut effects = Vec::new();
    match action {
        NavAction::Activate(section) => {
            state.active_section = section;
            state.mobile_menu_open = false;
            effects.push(PageEffect::ScrollToAnchor(section));
        }
        NavAction::ToggleMenu => {
            state.mobile_menu_open = !state.mobile_menu_open;
        }
    }
    effects
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn all_states() -> Vec<NavState> {
        SectionId::ALL
            .into_iter()
            .flat_map(|active_section| {
                [false, true].map(|mobile_menu_open| NavState {
                    active_section,
                    mobile_menu_open,
                })
            })
            .collect()
    }

    #[test]
    fn activate_sets_section_and_closes_menu_from_any_state() {
        for prior in all_states() {
            for section in SectionId::ALL {
                let mut state = prior;
                let effects = reduce_nav(&mut state, NavAction::Activate(section));

                assert_eq!(
                    state,
                    NavState {
                        active_section: section,
                        mobile_menu_open: false,
                    }
                );
                assert_eq!(effects, vec![PageEffect::ScrollToAnchor(section)]);
            }
        }
    }

    #[test]
    fn toggle_menu_is_an_involution() {
        for prior in all_states() {
            let mut state = prior;
            reduce_nav(&mut state, NavAction::ToggleMenu);
            assert_eq!(state.mobile_menu_open, !prior.mobile_menu_open);
            reduce_nav(&mut state, NavAction::ToggleMenu);
            assert_eq!(state, prior);
        }
    }

    #[test]
    fn toggle_never_touches_active_section_or_emits_effects() {
        let mut state = NavState {
            active_section: SectionId::Ads,
            mobile_menu_open: false,
        };
        assert!(reduce_nav(&mut state, NavAction::ToggleMenu).is_empty());
        assert!(state.mobile_menu_open);
        assert!(reduce_nav(&mut state, NavAction::ToggleMenu).is_empty());
        assert!(!state.mobile_menu_open);
        assert_eq!(state.active_section, SectionId::Ads);
    }
}
