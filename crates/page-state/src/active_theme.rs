//! Active theme register
//!
//! The selected [`ThemeId`] lives in a single `watch` slot. Only the theme
//! picker holds the writing half; every section reads through a
//! [`ThemeObserver`] and resolves the token bundle on each render.

use page_theme::{lookup, ThemeId, TokenBundle};
use tokio::sync::watch;

/// Single-slot register holding the selected theme
#[derive(Debug)]
pub struct ActiveTheme {
    tx: watch::Sender<ThemeId>,
}

impl ActiveTheme {
    /// Create the register holding `initial`
    pub fn new(initial: ThemeId) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Currently selected theme
    pub fn current(&self) -> ThemeId {
        *self.tx.borrow()
    }

    /// Create a read handle
    pub fn observe(&self) -> ThemeObserver {
        ThemeObserver {
            rx: self.tx.subscribe(),
        }
    }

    /// Replace the selected theme, returning the previous one
    pub(crate) fn set(&self, theme: ThemeId) -> ThemeId {
        self.tx.send_replace(theme)
    }
}

impl Default for ActiveTheme {
    fn default() -> Self {
        Self::new(ThemeId::default())
    }
}

/// Read handle on the active theme
#[derive(Debug, Clone)]
pub struct ThemeObserver {
    rx: watch::Receiver<ThemeId>,
}

impl ThemeObserver {
    /// Currently selected theme
    pub fn current(&self) -> ThemeId {
        *self.rx.borrow()
    }

    /// Token bundle of the currently selected theme
    ///
    /// Resolved on every call; callers should not hold the result past one
    /// render pass.
    pub fn bundle(&self) -> &'static TokenBundle {
        lookup(self.current())
    }

    /// Whether the theme changed since this handle last marked it seen
    pub fn has_changed(&self) -> bool {
        self.rx.has_changed().unwrap_or(false)
    }

    /// Mark the current value as seen and return it
    pub fn mark_seen(&mut self) -> ThemeId {
        *self.rx.borrow_and_update()
    }

    /// Wait for the next selection
    ///
    /// Returns `None` once the picker owning the register is gone.
    pub async fn changed(&mut self) -> Option<ThemeId> {
        self.rx.changed().await.ok()?;
        Some(*self.rx.borrow_and_update())
    }
}
