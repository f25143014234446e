//! Interactive state for the iroha Seed landing page
//!
//! Everything a visitor can change lives here: the active theme and its
//! picker, the scroll classification read by the navigation bar, the
//! one-shot reveal gates on each content block, and the mobile menu.
//!
//! Scroll and intersection events arrive through a [`Viewport`]; the state
//! machines subscribe to it while mounted and unsubscribe when dropped.
//!
//! # Modules
//!
//! - [`active_theme`] - Single-slot theme register and its observers
//! - [`picker`] - Theme picker visibility and selection
//! - [`scroll`] - Scroll position classifier
//! - [`reveal`] - One-shot reveal gates
//! - [`nav`] - Mobile navigation toggle
//! - [`viewport`] - Scroll and intersection event bus
//! - [`config`] - Tunables
//!
//! # Example
//!
//! ```rust
//! use page_state::{ScrollClassifier, ScrollConfig, Viewport};
//!
//! let viewport = Viewport::new();
//! let mut classifier = ScrollClassifier::new(&ScrollConfig::default());
//! classifier.mount(&viewport);
//!
//! viewport.scroll_to(51.0);
//! assert!(classifier.is_scrolled());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod active_theme;
pub mod config;
pub mod error;
pub mod nav;
pub mod picker;
pub mod reveal;
pub mod scroll;
pub mod viewport;

// Re-export commonly used types
pub use active_theme::{ActiveTheme, ThemeObserver};
pub use config::{RevealConfig, ScrollConfig, DEFAULT_SCROLL_THRESHOLD};
pub use error::{Result, StateError};
pub use nav::{MenuState, MobileNavToggle};
pub use picker::{PickerEntry, PickerVisibility, ThemePicker};
pub use reveal::{RevealGate, RevealRegistry, RevealState};
pub use scroll::{ScrollClassifier, ScrollPosition};
pub use viewport::{ElementKey, ListenerControl, Subscription, Viewport};
