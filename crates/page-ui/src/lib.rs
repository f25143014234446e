//! Page rendering for the iroha Seed landing page
//!
//! This crate turns the active theme and the interactive state into a
//! serializable view tree. Sections are pure functions of a render context;
//! the [`Page`] owns the state and re-renders from it on demand.
//!
//! # Modules
//!
//! - [`view`] - View tree nodes and queries
//! - [`motion`] - Entrance animation presets
//! - [`content`] - Page copy
//! - [`sections`] - Navigation bar and content sections
//! - [`picker`] - Floating theme picker
//! - [`page`] - Mounted page and its handlers
//!
//! # Example
//!
//! ```rust
//! use page_state::Viewport;
//! use page_theme::ThemeId;
//! use page_ui::Page;
//!
//! let viewport = Viewport::new();
//! let mut page = Page::mount(&viewport);
//!
//! page.toggle_picker();
//! page.select_theme(ThemeId::Brutalist).unwrap();
//!
//! let root = page.render();
//! assert_eq!(root.attr("data-theme"), Some("brutalist"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod content;
pub mod motion;
pub mod page;
pub mod picker;
pub mod sections;
pub mod view;

// Re-export commonly used types
pub use content::SiteContent;

pub use motion::{Entrance, IdleMotion, Pose, Trigger, DEFAULT_STAGGER_MS};

pub use page::{Page, PageConfig, DOCUMENT_TITLE};

pub use sections::{render_sections, Navbar, RenderContext};

pub use view::{Icon, Node, RevealBinding, Tag};
