//! Theme catalog for the iroha Seed landing page
//!
//! This crate provides the design-token layer: the closed set of theme
//! identifiers, the token bundle every component reads, and the class
//! composer that turns bundle fields and conditional overrides into one
//! conflict-free style.
//!
//! # Modules
//!
//! - [`theme`] - Theme identifiers and token bundles
//! - [`registry`] - The static catalog and its accent audit
//! - [`tokens`] - Color, surface, shape and typography tokens
//! - [`style`] - Fragments, descriptors and the class composer
//!
//! # Example
//!
//! ```rust
//! use page_theme::{lookup, ClassComposer, ThemeId, TokenSlot};
//!
//! let theme = lookup(ThemeId::Editorial);
//! let card = ClassComposer::new()
//!     .tokens(theme, &[TokenSlot::CardSurface, TokenSlot::Border, TokenSlot::Elevation])
//!     .compose();
//! assert_eq!(card.class_string(), "bg-white border border-black/5 shadow-xl");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod registry;
pub mod style;
pub mod theme;
pub mod tokens;

// Re-export commonly used types
pub use registry::{all, audit, lookup, PairingViolation};

pub use style::{compose, ClassComposer, Declaration, Fragment, Paint, StyleDescriptor, StyleProp};

pub use theme::{Result, ThemeError, ThemeId, TokenBundle, TokenSlot};

pub use tokens::{
    Blur, BorderStyle, BorderWidth, ColorToken, CornerRadius, Elevation, FontFamily, FontWeight,
    Hue, Shadow, Surface, Typography,
};
