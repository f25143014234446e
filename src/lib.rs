//! iroha Seed landing page
//!
//! Entry point tying the theme catalog, the interactive state and the page
//! renderer together. [`mount`] audits the catalog once and mounts a page
//! with the default configuration.
//!
//! ```rust
//! use iroha_seed::{mount, ThemeId, Viewport};
//!
//! let viewport = Viewport::new();
//! let page = mount(&viewport);
//! assert_eq!(page.active_theme(), ThemeId::ModernKyoto);
//!
//! viewport.scroll_to(120.0);
//! assert!(page.is_scrolled());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

use tracing::info;

pub use page_state;
pub use page_theme;
pub use page_ui;

pub use page_state::{StateError, Viewport};
pub use page_theme::{lookup, ThemeId, TokenBundle};
pub use page_ui::{Page, PageConfig, SiteContent};

/// Mount the landing page against `viewport`
pub fn mount(viewport: &Viewport) -> Page {
    let violations = page_theme::audit();
    info!(
        themes = ThemeId::ALL.len(),
        violations = violations.len(),
        "theme catalog loaded"
    );
    Page::mount(viewport)
}
