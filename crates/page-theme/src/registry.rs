//! The theme catalog
//!
//! Every bundle is a `static` item and [`lookup`] is an exhaustive `match`,
//! so the registry needs no initialization and cannot be mutated.

use serde::Serialize;

use crate::theme::{ThemeId, TokenBundle};
use crate::tokens::{
    Blur, BorderStyle, ColorToken, CornerRadius, Elevation, Hue, Shadow, Surface, Typography,
};

// =============================================================================
// Bundles
// =============================================================================

static MODERN_KYOTO: TokenBundle = TokenBundle {
    display_name: "モダン京都",
    background: ColorToken::rgb(0xF5F5F0),
    foreground_text: ColorToken::rgb(0x1A1A1A),
    secondary_text: ColorToken::rgb(0x1A1A1A).alpha(70),
    accent_fill: ColorToken::rgb(0x2B4C7E),
    accent_text: ColorToken::rgb(0x2B4C7E),
    border_style: BorderStyle::hairline(ColorToken::rgb(0x2B4C7E).alpha(10)),
    card_surface: Surface::solid(ColorToken::WHITE),
    footer_surface: Surface::solid(ColorToken::rgb(0x1A1A1A)),
    typography_family: Typography::Serif,
    corner_radius: CornerRadius::Sm,
    elevation: Elevation::of(Shadow::Sm),
};

static MINIMAL_CLEAN: TokenBundle = TokenBundle {
    display_name: "ミニマル・クリーン",
    background: ColorToken::WHITE,
    foreground_text: ColorToken::palette(Hue::Slate, 900),
    secondary_text: ColorToken::palette(Hue::Slate, 500),
    accent_fill: ColorToken::BLACK,
    accent_text: ColorToken::BLACK,
    border_style: BorderStyle::hairline(ColorToken::palette(Hue::Slate, 100)),
    card_surface: Surface::solid(ColorToken::WHITE),
    footer_surface: Surface::solid(ColorToken::palette(Hue::Slate, 50)),
    typography_family: Typography::Sans,
    corner_radius: CornerRadius::None,
    elevation: Elevation::of(Shadow::None),
};

static DARK_PRO: TokenBundle = TokenBundle {
    display_name: "ダーク・プロ",
    background: ColorToken::rgb(0x0F172A),
    foreground_text: ColorToken::palette(Hue::Slate, 100),
    secondary_text: ColorToken::palette(Hue::Slate, 400),
    accent_fill: ColorToken::palette(Hue::Emerald, 500),
    accent_text: ColorToken::palette(Hue::Emerald, 400),
    border_style: BorderStyle::hairline(ColorToken::palette(Hue::Slate, 800)),
    card_surface: Surface::solid(ColorToken::palette(Hue::Slate, 900)),
    footer_surface: Surface::solid(ColorToken::BLACK),
    typography_family: Typography::Sans,
    corner_radius: CornerRadius::Xl2,
    elevation: Elevation::of(Shadow::Xl2).tinted(ColorToken::palette(Hue::Emerald, 500).alpha(10)),
};

static EDITORIAL: TokenBundle = TokenBundle {
    display_name: "エディトリアル",
    background: ColorToken::rgb(0xFAFAFA),
    foreground_text: ColorToken::BLACK,
    secondary_text: ColorToken::BLACK.alpha(60),
    accent_fill: ColorToken::rgb(0xD4AF37),
    accent_text: ColorToken::rgb(0xD4AF37),
    border_style: BorderStyle::hairline(ColorToken::BLACK.alpha(5)),
    card_surface: Surface::solid(ColorToken::WHITE),
    footer_surface: Surface::solid(ColorToken::BLACK),
    typography_family: Typography::Serif,
    corner_radius: CornerRadius::None,
    elevation: Elevation::of(Shadow::Xl),
};

static TECHNICAL: TokenBundle = TokenBundle {
    display_name: "テクニカル",
    background: ColorToken::rgb(0xF1F5F9),
    foreground_text: ColorToken::palette(Hue::Slate, 900),
    secondary_text: ColorToken::palette(Hue::Slate, 500),
    accent_fill: ColorToken::palette(Hue::Indigo, 600),
    accent_text: ColorToken::palette(Hue::Indigo, 600),
    border_style: BorderStyle::hairline(ColorToken::palette(Hue::Slate, 200)),
    card_surface: Surface::solid(ColorToken::WHITE),
    footer_surface: Surface::solid(ColorToken::palette(Hue::Slate, 900)),
    typography_family: Typography::Monospace,
    corner_radius: CornerRadius::Md,
    elevation: Elevation::of(Shadow::Md),
};

static WARM_ORGANIC: TokenBundle = TokenBundle {
    display_name: "ウォーム・オーガニック",
    background: ColorToken::rgb(0xFDF8F3),
    foreground_text: ColorToken::rgb(0x4A3728),
    secondary_text: ColorToken::rgb(0x4A3728).alpha(70),
    accent_fill: ColorToken::rgb(0x8B5E3C),
    accent_text: ColorToken::rgb(0x8B5E3C),
    border_style: BorderStyle::hairline(ColorToken::rgb(0x8B5E3C).alpha(10)),
    card_surface: Surface::solid(ColorToken::WHITE),
    footer_surface: Surface::solid(ColorToken::rgb(0x2D1E12)),
    typography_family: Typography::Sans,
    corner_radius: CornerRadius::Rem(2),
    elevation: Elevation::of(Shadow::Lg).tinted(ColorToken::rgb(0x8B5E3C).alpha(5)),
};

static BRUTALIST: TokenBundle = TokenBundle {
    display_name: "ブルータリスト",
    background: ColorToken::WHITE,
    foreground_text: ColorToken::BLACK,
    secondary_text: ColorToken::BLACK.alpha(80),
    accent_fill: ColorToken::rgb(0xFF3E00),
    accent_text: ColorToken::rgb(0xFF3E00),
    border_style: BorderStyle::heavy(ColorToken::BLACK),
    card_surface: Surface::solid(ColorToken::WHITE),
    footer_surface: Surface::solid(ColorToken::BLACK),
    typography_family: Typography::DisplayWeight,
    corner_radius: CornerRadius::None,
    elevation: Elevation::of(Shadow::HardOffset),
};

static LUXURY: TokenBundle = TokenBundle {
    display_name: "ラグジュアリー",
    background: ColorToken::rgb(0x0A0A0A),
    foreground_text: ColorToken::rgb(0xE5E5E5),
    secondary_text: ColorToken::rgb(0xE5E5E5).alpha(60),
    accent_fill: ColorToken::rgb(0xC5A059),
    accent_text: ColorToken::rgb(0xC5A059),
    border_style: BorderStyle::hairline(ColorToken::rgb(0xC5A059).alpha(20)),
    card_surface: Surface::solid(ColorToken::rgb(0x141414)),
    footer_surface: Surface::solid(ColorToken::BLACK),
    typography_family: Typography::Serif,
    corner_radius: CornerRadius::Sm,
    elevation: Elevation::of(Shadow::Xl2),
};

static UTILITY: TokenBundle = TokenBundle {
    display_name: "ユーティリティ",
    background: ColorToken::palette(Hue::Slate, 50),
    foreground_text: ColorToken::palette(Hue::Slate, 900),
    secondary_text: ColorToken::palette(Hue::Slate, 600),
    accent_fill: ColorToken::palette(Hue::Blue, 600),
    accent_text: ColorToken::palette(Hue::Blue, 600),
    border_style: BorderStyle::hairline(ColorToken::palette(Hue::Slate, 200)),
    card_surface: Surface::solid(ColorToken::WHITE),
    footer_surface: Surface::solid(ColorToken::WHITE),
    typography_family: Typography::Sans,
    corner_radius: CornerRadius::Lg,
    elevation: Elevation::of(Shadow::Sm).outlined(),
};

static IMMERSIVE: TokenBundle = TokenBundle {
    display_name: "イマーシブ",
    background: ColorToken::BLACK,
    foreground_text: ColorToken::WHITE,
    secondary_text: ColorToken::WHITE.alpha(60),
    accent_fill: ColorToken::WHITE.alpha(20),
    accent_text: ColorToken::WHITE,
    border_style: BorderStyle::hairline(ColorToken::WHITE.alpha(10)),
    card_surface: Surface::frosted(ColorToken::WHITE.alpha(5), Blur::Xl),
    footer_surface: Surface::solid(ColorToken::BLACK),
    typography_family: Typography::Sans,
    corner_radius: CornerRadius::Xl3,
    elevation: Elevation::of(Shadow::Xl2),
};

// =============================================================================
// Lookup
// =============================================================================

/// Token bundle for a theme
pub fn lookup(id: ThemeId) -> &'static TokenBundle {
    match id {
        ThemeId::ModernKyoto => &MODERN_KYOTO,
        ThemeId::MinimalClean => &MINIMAL_CLEAN,
        ThemeId::DarkPro => &DARK_PRO,
        ThemeId::Editorial => &EDITORIAL,
        ThemeId::Technical => &TECHNICAL,
        ThemeId::WarmOrganic => &WARM_ORGANIC,
        ThemeId::Brutalist => &BRUTALIST,
        ThemeId::Luxury => &LUXURY,
        ThemeId::Utility => &UTILITY,
        ThemeId::Immersive => &IMMERSIVE,
    }
}

/// Every theme with its bundle, in catalog order
pub fn all() -> impl Iterator<Item = (ThemeId, &'static TokenBundle)> {
    ThemeId::ALL.into_iter().map(|id| (id, lookup(id)))
}

/// An accent pair drawn from two different hue families
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PairingViolation {
    /// Offending theme
    pub theme: ThemeId,
    /// Its accent fill
    pub accent_fill: ColorToken,
    /// Its accent text
    pub accent_text: ColorToken,
}

/// Check every bundle's accent pairing, logging each violation
pub fn audit() -> Vec<PairingViolation> {
    let violations: Vec<PairingViolation> = all()
        .filter(|(_, bundle)| !bundle.accent_pairing_holds())
        .map(|(theme, bundle)| PairingViolation {
            theme,
            accent_fill: bundle.accent_fill,
            accent_text: bundle.accent_text,
        })
        .collect();

    for violation in &violations {
        tracing::warn!(
            theme = %violation.theme,
            fill = ?violation.accent_fill.hue,
            text = ?violation.accent_text.hue,
            "accent fill and accent text use different hue families"
        );
    }

    violations
}
