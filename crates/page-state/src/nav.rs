//! Mobile navigation menu toggle

use serde::Serialize;
use tracing::debug;

/// Whether the collapsed mobile menu is expanded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuState {
    /// Only the menu button shows
    #[default]
    Closed,
    /// The link list is expanded
    Open,
}

impl MenuState {
    /// The opposite state
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }
}

/// Menu state for narrow layouts
///
/// Following any link closes the menu, whatever state it was in.
#[derive(Debug, Clone, Default)]
pub struct MobileNavToggle {
    state: MenuState,
}

impl MobileNavToggle {
    /// Create a closed menu
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state
    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Whether the link list is expanded
    pub fn is_open(&self) -> bool {
        self.state == MenuState::Open
    }

    /// Flip the menu
    pub fn toggle(&mut self) -> MenuState {
        self.state = self.state.toggled();
        debug!(state = ?self.state, "mobile menu toggled");
        self.state
    }

    /// Close the menu after a link is followed; returns the link target
    pub fn follow_link<'a>(&mut self, href: &'a str) -> &'a str {
        debug!(href, "mobile menu link followed");
        self.close();
        href
    }

    /// Force the menu closed
    pub fn close(&mut self) {
        self.state = MenuState::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        assert_eq!(MobileNavToggle::new().state(), MenuState::Closed);
    }

    #[test]
    fn test_toggle_alternates() {
        let mut nav = MobileNavToggle::new();
        assert_eq!(nav.toggle(), MenuState::Open);
        assert_eq!(nav.toggle(), MenuState::Closed);
    }

    #[test]
    fn test_follow_link_closes_open_menu() {
        let mut nav = MobileNavToggle::new();
        nav.toggle();
        assert!(nav.is_open());

        assert_eq!(nav.follow_link("#services"), "#services");
        assert!(!nav.is_open());
    }

    #[test]
    fn test_follow_link_keeps_closed_menu_closed() {
        let mut nav = MobileNavToggle::new();
        nav.follow_link("#contact");
        assert_eq!(nav.state(), MenuState::Closed);
    }
}
