//! Design tokens for the iroha Seed page
//!
//! Tokens are semantic values (a hue family with an optional shade and
//! alpha, a corner radius step, a shadow depth) rather than raw class
//! strings. The rendering layer turns them into utility classes through
//! [`ColorToken::utility`] and the `class` methods on each token.

use serde::Serialize;

// =============================================================================
// Color Tokens
// =============================================================================

/// A hue family
///
/// Palette families carry a shade (`slate-900`); `Rgb` is an exact brand
/// color and `Black`/`White` are absolute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Hue {
    /// Exact brand color as `0xRRGGBB`
    Rgb(u32),
    /// Cool neutral gray
    Slate,
    /// Green
    Emerald,
    /// Blue-violet
    Indigo,
    /// Blue
    Blue,
    /// Red
    Red,
    /// Pure black
    Black,
    /// Pure white
    White,
}

impl Hue {
    fn stem(&self) -> String {
        match self {
            Hue::Rgb(hex) => format!("[#{:06X}]", hex & 0x00FF_FFFF),
            Hue::Slate => "slate".to_string(),
            Hue::Emerald => "emerald".to_string(),
            Hue::Indigo => "indigo".to_string(),
            Hue::Blue => "blue".to_string(),
            Hue::Red => "red".to_string(),
            Hue::Black => "black".to_string(),
            Hue::White => "white".to_string(),
        }
    }
}

/// A color drawn from a hue family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ColorToken {
    /// Hue family
    pub hue: Hue,
    /// Palette stop (50-950), palette hues only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shade: Option<u16>,
    /// Opacity percentage (0-100)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alpha: Option<u8>,
}

impl ColorToken {
    /// Pure white
    pub const WHITE: ColorToken = ColorToken::new(Hue::White);
    /// Pure black
    pub const BLACK: ColorToken = ColorToken::new(Hue::Black);

    /// Create a token for a hue with no shade or alpha
    pub const fn new(hue: Hue) -> Self {
        Self {
            hue,
            shade: None,
            alpha: None,
        }
    }

    /// Create a token for an exact `0xRRGGBB` brand color
    pub const fn rgb(hex: u32) -> Self {
        Self::new(Hue::Rgb(hex))
    }

    /// Create a palette token (`Hue::Slate`, 900)
    pub const fn palette(hue: Hue, shade: u16) -> Self {
        Self {
            hue,
            shade: Some(shade),
            alpha: None,
        }
    }

    /// Same color at the given opacity percentage
    pub const fn alpha(mut self, percent: u8) -> Self {
        self.alpha = Some(percent);
        self
    }

    /// Whether both tokens belong to the same hue family
    pub fn same_family(&self, other: &ColorToken) -> bool {
        self.hue == other.hue
    }

    /// Utility class for this color under a prefix (`bg`, `text`, `border`, `shadow`)
    pub fn utility(&self, prefix: &str) -> String {
        let mut class = format!("{}-{}", prefix, self.hue.stem());
        if let Some(shade) = self.shade {
            class.push_str(&format!("-{}", shade));
        }
        if let Some(alpha) = self.alpha {
            class.push_str(&format!("/{}", alpha));
        }
        class
    }
}

// =============================================================================
// Surface & Border Tokens
// =============================================================================

/// Backdrop blur strength
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Blur {
    /// Medium blur (navigation bar)
    Md,
    /// Extra large blur (frosted cards)
    Xl,
}

impl Blur {
    /// Utility class
    pub fn class(&self) -> &'static str {
        match self {
            Blur::Md => "backdrop-blur-md",
            Blur::Xl => "backdrop-blur-xl",
        }
    }
}

/// A filled surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Surface {
    /// Fill color
    pub color: ColorToken,
    /// Backdrop blur behind a translucent fill
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blur: Option<Blur>,
}

impl Surface {
    /// Opaque or translucent fill without blur
    pub const fn solid(color: ColorToken) -> Self {
        Self { color, blur: None }
    }

    /// Translucent fill over a blurred backdrop
    pub const fn frosted(color: ColorToken, blur: Blur) -> Self {
        Self {
            color,
            blur: Some(blur),
        }
    }

    /// Plain white, no blur
    pub fn is_plain_white(&self) -> bool {
        self.color == ColorToken::WHITE && self.blur.is_none()
    }
}

/// Border width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderWidth {
    /// 1px
    Hairline,
    /// 2px (decorative frames)
    Double,
    /// 4px (brutalist)
    Heavy,
}

impl BorderWidth {
    /// Utility class
    pub fn class(&self) -> &'static str {
        match self {
            BorderWidth::Hairline => "border",
            BorderWidth::Double => "border-2",
            BorderWidth::Heavy => "border-4",
        }
    }
}

/// Border stroke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BorderStyle {
    /// Stroke width
    pub width: BorderWidth,
    /// Stroke color
    pub color: ColorToken,
}

impl BorderStyle {
    /// Hairline stroke in the given color
    pub const fn hairline(color: ColorToken) -> Self {
        Self {
            width: BorderWidth::Hairline,
            color,
        }
    }

    /// Heavy stroke in the given color
    pub const fn heavy(color: ColorToken) -> Self {
        Self {
            width: BorderWidth::Heavy,
            color,
        }
    }
}

// =============================================================================
// Typography Tokens
// =============================================================================

/// Font family classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    /// Serif
    Serif,
    /// Sans-serif
    Sans,
    /// Monospace
    Mono,
}

impl FontFamily {
    /// Utility class
    pub fn class(&self) -> &'static str {
        match self {
            FontFamily::Serif => "font-serif",
            FontFamily::Sans => "font-sans",
            FontFamily::Mono => "font-mono",
        }
    }
}

/// Font weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    /// 500
    Medium,
    /// 700
    Bold,
    /// 900
    Black,
}

impl FontWeight {
    /// Utility class
    pub fn class(&self) -> &'static str {
        match self {
            FontWeight::Medium => "font-medium",
            FontWeight::Bold => "font-bold",
            FontWeight::Black => "font-black",
        }
    }
}

/// Display typography classification of a theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Typography {
    /// Serif faces
    Serif,
    /// Sans-serif faces
    Sans,
    /// Monospace faces
    Monospace,
    /// Sans-serif forced to the heaviest weight
    DisplayWeight,
}

impl Typography {
    /// Font family for this classification
    pub fn family(&self) -> FontFamily {
        match self {
            Typography::Serif => FontFamily::Serif,
            Typography::Sans | Typography::DisplayWeight => FontFamily::Sans,
            Typography::Monospace => FontFamily::Mono,
        }
    }

    /// Weight override, if the classification forces one
    pub fn weight(&self) -> Option<FontWeight> {
        match self {
            Typography::DisplayWeight => Some(FontWeight::Black),
            _ => None,
        }
    }
}

// =============================================================================
// Shape & Depth Tokens
// =============================================================================

/// Corner radius step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CornerRadius {
    /// Square corners
    None,
    /// 2px
    Sm,
    /// 6px
    Md,
    /// 8px
    Lg,
    /// 12px
    Xl,
    /// 16px
    Xl2,
    /// 24px
    Xl3,
    /// Arbitrary radius in whole rem
    Rem(u8),
    /// Pill / circle
    Full,
}

impl CornerRadius {
    /// Utility class
    pub fn class(&self) -> String {
        match self {
            CornerRadius::None => "rounded-none".to_string(),
            CornerRadius::Sm => "rounded-sm".to_string(),
            CornerRadius::Md => "rounded-md".to_string(),
            CornerRadius::Lg => "rounded-lg".to_string(),
            CornerRadius::Xl => "rounded-xl".to_string(),
            CornerRadius::Xl2 => "rounded-2xl".to_string(),
            CornerRadius::Xl3 => "rounded-3xl".to_string(),
            CornerRadius::Rem(rem) => format!("rounded-[{}rem]", rem),
            CornerRadius::Full => "rounded-full".to_string(),
        }
    }
}

/// Shadow depth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Shadow {
    /// Flat
    None,
    /// Small
    Sm,
    /// Medium
    Md,
    /// Large
    Lg,
    /// Extra large
    Xl,
    /// Double extra large
    Xl2,
    /// Hard offset block shadow (8px, no blur)
    HardOffset,
}

impl Shadow {
    /// Utility class
    pub fn class(&self) -> &'static str {
        match self {
            Shadow::None => "shadow-none",
            Shadow::Sm => "shadow-sm",
            Shadow::Md => "shadow-md",
            Shadow::Lg => "shadow-lg",
            Shadow::Xl => "shadow-xl",
            Shadow::Xl2 => "shadow-2xl",
            Shadow::HardOffset => "shadow-[8px_8px_0px_0px_rgba(0,0,0,1)]",
        }
    }
}

/// Elevation of raised surfaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Elevation {
    /// Shadow depth
    pub shadow: Shadow,
    /// Colored shadow tint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tint: Option<ColorToken>,
    /// Raised surfaces also get a hairline outline
    pub outlined: bool,
}

impl Elevation {
    /// Untinted shadow without outline
    pub const fn of(shadow: Shadow) -> Self {
        Self {
            shadow,
            tint: None,
            outlined: false,
        }
    }

    /// Same depth with a colored tint
    pub const fn tinted(mut self, tint: ColorToken) -> Self {
        self.tint = Some(tint);
        self
    }

    /// Same depth with a hairline outline
    pub const fn outlined(mut self) -> Self {
        self.outlined = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // Color Utility Tests
    // ==========================================================================

    #[test]
    fn test_rgb_utility() {
        assert_eq!(ColorToken::rgb(0x2B4C7E).utility("bg"), "bg-[#2B4C7E]");
        assert_eq!(
            ColorToken::rgb(0x2B4C7E).alpha(10).utility("border"),
            "border-[#2B4C7E]/10"
        );
    }

    #[test]
    fn test_palette_utility() {
        assert_eq!(
            ColorToken::palette(Hue::Slate, 900).utility("text"),
            "text-slate-900"
        );
        assert_eq!(
            ColorToken::palette(Hue::Emerald, 500).alpha(10).utility("shadow"),
            "shadow-emerald-500/10"
        );
        assert_eq!(ColorToken::WHITE.alpha(60).utility("text"), "text-white/60");
    }

    #[test]
    fn test_same_family_ignores_shade_and_alpha() {
        let fill = ColorToken::palette(Hue::Emerald, 500);
        let text = ColorToken::palette(Hue::Emerald, 400);
        assert!(fill.same_family(&text));
        assert!(ColorToken::WHITE.alpha(20).same_family(&ColorToken::WHITE));
        assert!(!fill.same_family(&ColorToken::palette(Hue::Blue, 500)));
        assert!(!ColorToken::rgb(0xC5A059).same_family(&ColorToken::rgb(0xD4AF37)));
    }

    // ==========================================================================
    // Shape & Typography Tests
    // ==========================================================================

    #[test]
    fn test_corner_radius_classes() {
        assert_eq!(CornerRadius::None.class(), "rounded-none");
        assert_eq!(CornerRadius::Xl2.class(), "rounded-2xl");
        assert_eq!(CornerRadius::Rem(2).class(), "rounded-[2rem]");
    }

    #[test]
    fn test_display_weight_typography() {
        assert_eq!(Typography::DisplayWeight.family(), FontFamily::Sans);
        assert_eq!(Typography::DisplayWeight.weight(), Some(FontWeight::Black));
        assert_eq!(Typography::Monospace.family(), FontFamily::Mono);
        assert_eq!(Typography::Serif.weight(), None);
    }

    #[test]
    fn test_plain_white_surface() {
        assert!(Surface::solid(ColorToken::WHITE).is_plain_white());
        assert!(!Surface::frosted(ColorToken::WHITE.alpha(5), Blur::Xl).is_plain_white());
        assert!(!Surface::solid(ColorToken::rgb(0x141414)).is_plain_white());
    }

    #[test]
    fn test_color_token_serialization() {
        let json = serde_json::to_string(&ColorToken::palette(Hue::Slate, 900)).unwrap();
        assert_eq!(json, r#"{"hue":"slate","shade":900}"#);
    }
}
