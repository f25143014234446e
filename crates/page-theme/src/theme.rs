//! Theme identifiers and token bundles
//!
//! A [`ThemeId`] names one of the ten design patterns the landing page can
//! wear. Each identifier resolves to exactly one [`TokenBundle`] through
//! [`crate::registry::lookup`]; every field of a bundle is required, so a
//! partially defined theme does not compile.
//!
//! # Usage
//!
//! ```rust
//! use page_theme::{lookup, ThemeId, TokenSlot};
//!
//! let theme = lookup(ThemeId::DarkPro);
//! assert_eq!(theme.display_name, "ダーク・プロ");
//! let accent = theme.fragment(TokenSlot::AccentFill);
//! assert!(!accent.is_empty());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::style::Fragment;
use crate::tokens::{
    BorderStyle, ColorToken, CornerRadius, Elevation, Surface, Typography,
};

/// Theme errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    /// The string does not name a theme in the catalog
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;

// =============================================================================
// Theme Identifier
// =============================================================================

/// The closed catalog of design patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeId {
    /// Muted paper tones with indigo ink, serif
    #[default]
    ModernKyoto,
    /// White, black accent, square corners
    MinimalClean,
    /// Navy night with emerald accent
    DarkPro,
    /// Magazine layout with gold accent, serif
    Editorial,
    /// Cool grays with indigo, monospace
    Technical,
    /// Cream and brown, very round corners
    WarmOrganic,
    /// Heavy borders, orange accent, hard shadows
    Brutalist,
    /// Black and champagne gold, serif
    Luxury,
    /// Plain product UI with blue accent
    Utility,
    /// Black with frosted glass surfaces
    Immersive,
}

impl ThemeId {
    /// Every theme in catalog order
    pub const ALL: [ThemeId; 10] = [
        ThemeId::ModernKyoto,
        ThemeId::MinimalClean,
        ThemeId::DarkPro,
        ThemeId::Editorial,
        ThemeId::Technical,
        ThemeId::WarmOrganic,
        ThemeId::Brutalist,
        ThemeId::Luxury,
        ThemeId::Utility,
        ThemeId::Immersive,
    ];

    /// Stable kebab-case identifier
    pub fn slug(&self) -> &'static str {
        match self {
            ThemeId::ModernKyoto => "modern-kyoto",
            ThemeId::MinimalClean => "minimal-clean",
            ThemeId::DarkPro => "dark-pro",
            ThemeId::Editorial => "editorial",
            ThemeId::Technical => "technical",
            ThemeId::WarmOrganic => "warm-organic",
            ThemeId::Brutalist => "brutalist",
            ThemeId::Luxury => "luxury",
            ThemeId::Utility => "utility",
            ThemeId::Immersive => "immersive",
        }
    }
}

impl std::fmt::Display for ThemeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

impl std::str::FromStr for ThemeId {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        ThemeId::ALL
            .into_iter()
            .find(|id| id.slug() == wanted)
            .ok_or_else(|| ThemeError::UnknownTheme(s.to_string()))
    }
}

// =============================================================================
// Token Bundle
// =============================================================================

/// Complete set of design tokens for one theme
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TokenBundle {
    /// Label shown in the theme picker
    pub display_name: &'static str,
    /// Page background
    pub background: ColorToken,
    /// Primary text
    pub foreground_text: ColorToken,
    /// Muted body text
    pub secondary_text: ColorToken,
    /// Filled accent surfaces (calls to action, badges)
    pub accent_fill: ColorToken,
    /// Accent-colored text; same hue family as `accent_fill`
    pub accent_text: ColorToken,
    /// Card and divider stroke
    pub border_style: BorderStyle,
    /// Raised cards
    pub card_surface: Surface,
    /// Footer and dark feature panels
    pub footer_surface: Surface,
    /// Display typography
    pub typography_family: Typography,
    /// Corner shape
    pub corner_radius: CornerRadius,
    /// Depth of raised surfaces
    pub elevation: Elevation,
}

/// Addressable fields of a [`TokenBundle`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenSlot {
    /// `background`
    Background,
    /// `foreground_text`
    ForegroundText,
    /// `secondary_text`
    SecondaryText,
    /// `accent_fill`
    AccentFill,
    /// `accent_text`
    AccentText,
    /// `border_style`
    Border,
    /// `card_surface`
    CardSurface,
    /// `footer_surface`
    FooterSurface,
    /// `typography_family`
    Typography,
    /// `corner_radius`
    CornerRadius,
    /// `elevation`
    Elevation,
}

impl TokenSlot {
    /// Every slot in declaration order
    pub const ALL: [TokenSlot; 11] = [
        TokenSlot::Background,
        TokenSlot::ForegroundText,
        TokenSlot::SecondaryText,
        TokenSlot::AccentFill,
        TokenSlot::AccentText,
        TokenSlot::Border,
        TokenSlot::CardSurface,
        TokenSlot::FooterSurface,
        TokenSlot::Typography,
        TokenSlot::CornerRadius,
        TokenSlot::Elevation,
    ];
}

impl TokenBundle {
    /// Style fragment for one field of the bundle
    pub fn fragment(&self, slot: TokenSlot) -> Fragment {
        match slot {
            TokenSlot::Background => Fragment::new().background(self.background),
            TokenSlot::ForegroundText => Fragment::new().text(self.foreground_text),
            TokenSlot::SecondaryText => Fragment::new().text(self.secondary_text),
            TokenSlot::AccentFill => Fragment::new().background(self.accent_fill),
            TokenSlot::AccentText => Fragment::new().text(self.accent_text),
            TokenSlot::Border => Fragment::new()
                .border(self.border_style.width)
                .border_color(self.border_style.color),
            TokenSlot::CardSurface => Fragment::surface(&self.card_surface),
            TokenSlot::FooterSurface => Fragment::surface(&self.footer_surface),
            TokenSlot::Typography => {
                let fragment = Fragment::new().font(self.typography_family.family());
                match self.typography_family.weight() {
                    Some(weight) => fragment.weight(weight),
                    None => fragment,
                }
            }
            TokenSlot::CornerRadius => Fragment::new().radius(self.corner_radius),
            TokenSlot::Elevation => {
                let mut fragment = Fragment::new().shadow(self.elevation.shadow);
                if let Some(tint) = self.elevation.tint {
                    fragment = fragment.shadow_color(tint);
                }
                if self.elevation.outlined {
                    fragment = fragment.border(crate::tokens::BorderWidth::Hairline);
                }
                fragment
            }
        }
    }

    /// Whether the accent fill and accent text share a hue family
    pub fn accent_pairing_holds(&self) -> bool {
        self.accent_fill.same_family(&self.accent_text)
    }

    /// Surface for sections that alternate with the page background
    ///
    /// Plain white when the card surface is plain white, otherwise the page
    /// background.
    pub fn alternate_surface(&self) -> ColorToken {
        if self.card_surface.is_plain_white() {
            ColorToken::WHITE
        } else {
            self.background
        }
    }
}
