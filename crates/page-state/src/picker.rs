//! Theme picker state machine
//!
//! Two independent axes: whether the floating list is showing, and which
//! theme is active. Selecting a theme always closes the list in the same
//! transition; there is no preview state.

use page_theme::{all, ThemeId};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::active_theme::{ActiveTheme, ThemeObserver};
use crate::error::{Result, StateError};

/// Visibility of the picker list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PickerVisibility {
    /// Only the floating button shows
    #[default]
    Closed,
    /// The theme list shows above the button
    Open,
}

impl PickerVisibility {
    /// The opposite visibility
    pub fn toggled(self) -> Self {
        match self {
            PickerVisibility::Closed => PickerVisibility::Open,
            PickerVisibility::Open => PickerVisibility::Closed,
        }
    }
}

/// One row of the picker list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PickerEntry {
    /// Theme the row selects
    pub id: ThemeId,
    /// Row label
    pub display_name: &'static str,
    /// Whether this is the active theme
    pub selected: bool,
}

/// Floating theme picker; sole writer of the active theme
#[derive(Debug, Default)]
pub struct ThemePicker {
    visibility: PickerVisibility,
    active: ActiveTheme,
}

impl ThemePicker {
    /// Create a closed picker with `initial` active
    pub fn new(initial: ThemeId) -> Self {
        Self {
            visibility: PickerVisibility::Closed,
            active: ActiveTheme::new(initial),
        }
    }

    /// Current list visibility
    pub fn visibility(&self) -> PickerVisibility {
        self.visibility
    }

    /// Whether the list is showing
    pub fn is_open(&self) -> bool {
        self.visibility == PickerVisibility::Open
    }

    /// Active theme
    pub fn active(&self) -> ThemeId {
        self.active.current()
    }

    /// Read handle on the active theme for sections
    pub fn observe(&self) -> ThemeObserver {
        self.active.observe()
    }

    /// Open a closed list or close an open one
    pub fn toggle(&mut self) -> PickerVisibility {
        self.visibility = self.visibility.toggled();
        debug!(visibility = ?self.visibility, "theme picker toggled");
        self.visibility
    }

    /// Activate `theme` and close the list
    ///
    /// Only valid while the list is open; otherwise nothing changes.
    pub fn select(&mut self, theme: ThemeId) -> Result<ThemeId> {
        if !self.is_open() {
            warn!(theme = %theme, "theme selected while picker closed");
            return Err(StateError::PickerClosed { requested: theme });
        }

        let previous = self.active.set(theme);
        self.visibility = PickerVisibility::Closed;
        info!(theme = %theme, previous = %previous, "theme selected");
        Ok(theme)
    }

    /// Every catalog entry, marking the active one
    pub fn entries(&self) -> Vec<PickerEntry> {
        let active = self.active();
        all()
            .map(|(id, bundle)| PickerEntry {
                id,
                display_name: bundle.display_name,
                selected: id == active,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // Transition Tests
    // ==========================================================================

    #[test]
    fn test_initial_state() {
        let picker = ThemePicker::default();
        assert_eq!(picker.visibility(), PickerVisibility::Closed);
        assert_eq!(picker.active(), ThemeId::ModernKyoto);
    }

    #[test]
    fn test_toggle_alternates() {
        let mut picker = ThemePicker::default();
        assert_eq!(picker.toggle(), PickerVisibility::Open);
        assert_eq!(picker.toggle(), PickerVisibility::Closed);
        assert_eq!(picker.toggle(), PickerVisibility::Open);
        assert_eq!(picker.active(), ThemeId::ModernKyoto);
    }

    #[test]
    fn test_select_closes_and_activates() {
        for from in ThemeId::ALL {
            for to in ThemeId::ALL {
                let mut picker = ThemePicker::new(from);
                picker.toggle();
                assert_eq!(picker.select(to), Ok(to));
                assert!(!picker.is_open());
                assert_eq!(picker.active(), to);
            }
        }
    }

    #[test]
    fn test_select_while_closed_is_rejected() {
        let mut picker = ThemePicker::default();
        assert_eq!(
            picker.select(ThemeId::Brutalist),
            Err(StateError::PickerClosed {
                requested: ThemeId::Brutalist
            })
        );
        assert_eq!(picker.active(), ThemeId::ModernKyoto);
        assert!(!picker.is_open());
    }

    #[test]
    fn test_reselecting_active_theme_still_closes() {
        let mut picker = ThemePicker::default();
        picker.toggle();
        picker.select(ThemeId::ModernKyoto).unwrap();
        assert!(!picker.is_open());
    }

    #[test]
    fn test_observer_follows_selection() {
        let mut picker = ThemePicker::default();
        let observer = picker.observe();
        picker.toggle();
        picker.select(ThemeId::Editorial).unwrap();
        assert_eq!(observer.current(), ThemeId::Editorial);
        assert!(observer.has_changed());
    }

    // ==========================================================================
    // Entry Tests
    // ==========================================================================

    #[test]
    fn test_entries_list_catalog_and_mark_active() {
        let mut picker = ThemePicker::default();
        picker.toggle();
        picker.select(ThemeId::WarmOrganic).unwrap();

        let entries = picker.entries();
        assert_eq!(entries.len(), 10);
        assert_eq!(entries[0].display_name, "モダン京都");
        let selected: Vec<ThemeId> = entries.iter().filter(|e| e.selected).map(|e| e.id).collect();
        assert_eq!(selected, vec![ThemeId::WarmOrganic]);
    }
}
