//! Class composer
//!
//! Components describe their appearance as an ordered list of style
//! [`Fragment`]s, each present or absent depending on some condition. The
//! composer folds the list into a single [`StyleDescriptor`], keeping one
//! declaration per [`StyleProp`]. When two fragments set the same property
//! the later one wins, so an override must be listed after the value it
//! overrides.
//!
//! ```rust
//! use page_theme::{lookup, ClassComposer, ColorToken, Fragment, ThemeId, TokenSlot};
//!
//! let theme = lookup(ThemeId::DarkPro);
//! let scrolled = true;
//! let style = ClassComposer::new()
//!     .token(theme, TokenSlot::ForegroundText)
//!     .when(scrolled, Fragment::new().text(ColorToken::BLACK))
//!     .compose();
//! assert_eq!(style.class_string(), "text-black");
//! ```

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

use crate::theme::{TokenBundle, TokenSlot};
use crate::tokens::{
    Blur, BorderWidth, ColorToken, CornerRadius, FontFamily, FontWeight, Shadow, Surface,
};

// =============================================================================
// Declarations
// =============================================================================

/// A style property; the declaration order is the canonical output order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleProp {
    /// Background fill
    Background,
    /// Backdrop blur
    Backdrop,
    /// Text color
    TextColor,
    /// Font family
    FontFamily,
    /// Font weight
    FontWeight,
    /// Border width
    BorderWidth,
    /// Border color
    BorderColor,
    /// Corner radius
    CornerRadius,
    /// Shadow depth
    Shadow,
    /// Shadow tint
    ShadowColor,
    /// Element opacity
    Opacity,
}

/// Background paint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Paint {
    /// Filled with a color
    Solid(ColorToken),
    /// No fill
    Transparent,
}

/// One property set to one value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Declaration {
    /// Background fill
    Background(Paint),
    /// Backdrop blur
    Backdrop(Blur),
    /// Text color
    Text(ColorToken),
    /// Font family
    Font(FontFamily),
    /// Font weight
    Weight(FontWeight),
    /// Border width
    BorderWidth(BorderWidth),
    /// Border color
    BorderColor(ColorToken),
    /// Corner radius
    Radius(CornerRadius),
    /// Shadow depth
    Shadow(Shadow),
    /// Shadow tint
    ShadowColor(ColorToken),
    /// Opacity percentage
    Opacity(u8),
}

impl Declaration {
    /// The property this declaration sets
    pub fn property(&self) -> StyleProp {
        match self {
            Declaration::Background(_) => StyleProp::Background,
            Declaration::Backdrop(_) => StyleProp::Backdrop,
            Declaration::Text(_) => StyleProp::TextColor,
            Declaration::Font(_) => StyleProp::FontFamily,
            Declaration::Weight(_) => StyleProp::FontWeight,
            Declaration::BorderWidth(_) => StyleProp::BorderWidth,
            Declaration::BorderColor(_) => StyleProp::BorderColor,
            Declaration::Radius(_) => StyleProp::CornerRadius,
            Declaration::Shadow(_) => StyleProp::Shadow,
            Declaration::ShadowColor(_) => StyleProp::ShadowColor,
            Declaration::Opacity(_) => StyleProp::Opacity,
        }
    }

    /// Utility class for the rendering layer
    pub fn class(&self) -> String {
        match self {
            Declaration::Background(Paint::Solid(color)) => color.utility("bg"),
            Declaration::Background(Paint::Transparent) => "bg-transparent".to_string(),
            Declaration::Backdrop(blur) => blur.class().to_string(),
            Declaration::Text(color) => color.utility("text"),
            Declaration::Font(family) => family.class().to_string(),
            Declaration::Weight(weight) => weight.class().to_string(),
            Declaration::BorderWidth(width) => width.class().to_string(),
            Declaration::BorderColor(color) => color.utility("border"),
            Declaration::Radius(radius) => radius.class(),
            Declaration::Shadow(shadow) => shadow.class().to_string(),
            Declaration::ShadowColor(color) => color.utility("shadow"),
            Declaration::Opacity(percent) => format!("opacity-{}", percent),
        }
    }
}

// =============================================================================
// Fragments
// =============================================================================

/// An ordered group of declarations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Fragment {
    declarations: Vec<Declaration>,
}

impl Fragment {
    /// Create an empty fragment
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill and blur of a surface token
    pub fn surface(surface: &Surface) -> Self {
        let fragment = Self::new().background(surface.color);
        match surface.blur {
            Some(blur) => fragment.backdrop(blur),
            None => fragment,
        }
    }

    /// Append a raw declaration
    pub fn with(mut self, declaration: Declaration) -> Self {
        self.declarations.push(declaration);
        self
    }

    /// Solid background
    pub fn background(self, color: ColorToken) -> Self {
        self.with(Declaration::Background(Paint::Solid(color)))
    }

    /// No background
    pub fn transparent(self) -> Self {
        self.with(Declaration::Background(Paint::Transparent))
    }

    /// Backdrop blur
    pub fn backdrop(self, blur: Blur) -> Self {
        self.with(Declaration::Backdrop(blur))
    }

    /// Text color
    pub fn text(self, color: ColorToken) -> Self {
        self.with(Declaration::Text(color))
    }

    /// Font family
    pub fn font(self, family: FontFamily) -> Self {
        self.with(Declaration::Font(family))
    }

    /// Font weight
    pub fn weight(self, weight: FontWeight) -> Self {
        self.with(Declaration::Weight(weight))
    }

    /// Border width
    pub fn border(self, width: BorderWidth) -> Self {
        self.with(Declaration::BorderWidth(width))
    }

    /// Border color
    pub fn border_color(self, color: ColorToken) -> Self {
        self.with(Declaration::BorderColor(color))
    }

    /// Corner radius
    pub fn radius(self, radius: CornerRadius) -> Self {
        self.with(Declaration::Radius(radius))
    }

    /// Shadow depth
    pub fn shadow(self, shadow: Shadow) -> Self {
        self.with(Declaration::Shadow(shadow))
    }

    /// Shadow tint
    pub fn shadow_color(self, color: ColorToken) -> Self {
        self.with(Declaration::ShadowColor(color))
    }

    /// Opacity percentage, clamped to 100
    pub fn opacity(self, percent: u8) -> Self {
        self.with(Declaration::Opacity(percent.min(100)))
    }

    /// Declarations in insertion order
    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    /// Whether the fragment declares nothing
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Utility classes in insertion order
    pub fn classes(&self) -> Vec<String> {
        self.declarations.iter().map(Declaration::class).collect()
    }
}

impl From<Declaration> for Fragment {
    fn from(declaration: Declaration) -> Self {
        Fragment::new().with(declaration)
    }
}

// =============================================================================
// Style Descriptor
// =============================================================================

/// Conflict-free style: at most one declaration per property
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleDescriptor {
    properties: BTreeMap<StyleProp, Declaration>,
}

impl StyleDescriptor {
    /// Declaration for a property, if set
    pub fn get(&self, property: StyleProp) -> Option<&Declaration> {
        self.properties.get(&property)
    }

    /// Resolved text color, if set
    pub fn text_color(&self) -> Option<ColorToken> {
        match self.get(StyleProp::TextColor) {
            Some(Declaration::Text(color)) => Some(*color),
            _ => None,
        }
    }

    /// Resolved background, if set
    pub fn background(&self) -> Option<Paint> {
        match self.get(StyleProp::Background) {
            Some(Declaration::Background(paint)) => Some(*paint),
            _ => None,
        }
    }

    /// Declarations in canonical property order
    pub fn declarations(&self) -> impl Iterator<Item = &Declaration> {
        self.properties.values()
    }

    /// Number of properties set
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether no property is set
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Utility classes in canonical property order
    pub fn classes(&self) -> Vec<String> {
        self.declarations().map(Declaration::class).collect()
    }

    /// Utility classes joined by spaces
    pub fn class_string(&self) -> String {
        self.classes().join(" ")
    }

    fn apply(&mut self, fragment: &Fragment) {
        for declaration in fragment.declarations() {
            self.properties.insert(declaration.property(), *declaration);
        }
    }
}

impl std::fmt::Display for StyleDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.class_string())
    }
}

impl Serialize for StyleDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.classes())
    }
}

/// Merge fragments in order; absent fragments are skipped, later
/// declarations replace earlier ones for the same property
pub fn compose<I>(fragments: I) -> StyleDescriptor
where
    I: IntoIterator<Item = Option<Fragment>>,
{
    let mut descriptor = StyleDescriptor::default();
    for fragment in fragments.into_iter().flatten() {
        descriptor.apply(&fragment);
    }
    descriptor
}

// =============================================================================
// Composer Builder
// =============================================================================

/// Builder over [`compose`] for conditional fragment lists
#[derive(Debug, Clone, Default)]
pub struct ClassComposer {
    fragments: Vec<Option<Fragment>>,
}

impl ClassComposer {
    /// Create an empty composer
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field of the active token bundle
    pub fn token(self, theme: &TokenBundle, slot: TokenSlot) -> Self {
        self.fragment(theme.fragment(slot))
    }

    /// Append several bundle fields in order
    pub fn tokens(self, theme: &TokenBundle, slots: &[TokenSlot]) -> Self {
        slots
            .iter()
            .fold(self, |composer, slot| composer.token(theme, *slot))
    }

    /// Append an unconditional fragment
    pub fn fragment(mut self, fragment: impl Into<Fragment>) -> Self {
        self.fragments.push(Some(fragment.into()));
        self
    }

    /// Append a fragment that only applies when `condition` holds
    pub fn when(mut self, condition: bool, fragment: impl Into<Fragment>) -> Self {
        self.fragments.push(condition.then(|| fragment.into()));
        self
    }

    /// Append one of two fragments depending on `condition`
    pub fn when_else(
        self,
        condition: bool,
        then: impl Into<Fragment>,
        otherwise: impl Into<Fragment>,
    ) -> Self {
        if condition {
            self.fragment(then)
        } else {
            self.fragment(otherwise)
        }
    }

    /// Fold the fragments into one descriptor
    pub fn compose(self) -> StyleDescriptor {
        compose(self.fragments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::lookup;
    use crate::theme::ThemeId;
    use crate::tokens::Hue;

    // ==========================================================================
    // Merge Tests
    // ==========================================================================

    #[test]
    fn test_absent_fragments_are_skipped() {
        let style = compose(vec![
            Some(Fragment::new().text(ColorToken::BLACK)),
            None,
            Some(Fragment::new().radius(CornerRadius::Sm)),
        ]);
        assert_eq!(style.len(), 2);
        assert_eq!(style.class_string(), "text-black rounded-sm");
    }

    #[test]
    fn test_last_fragment_wins() {
        let first = Fragment::new().text(ColorToken::WHITE);
        let second = Fragment::new().text(ColorToken::BLACK);

        let forward = compose(vec![Some(first.clone()), Some(second.clone())]);
        let reversed = compose(vec![Some(second), Some(first)]);

        assert_eq!(forward.text_color(), Some(ColorToken::BLACK));
        assert_eq!(reversed.text_color(), Some(ColorToken::WHITE));
        assert_ne!(forward, reversed);
    }

    #[test]
    fn test_reordering_disjoint_fragments_is_harmless() {
        let a = Fragment::new().text(ColorToken::BLACK);
        let b = Fragment::new().shadow(Shadow::Md);
        assert_eq!(
            compose(vec![Some(a.clone()), Some(b.clone())]),
            compose(vec![Some(b), Some(a)])
        );
    }

    #[test]
    fn test_composition_is_deterministic() {
        let theme = lookup(ThemeId::WarmOrganic);
        let build = || {
            ClassComposer::new()
                .tokens(
                    theme,
                    &[TokenSlot::CardSurface, TokenSlot::Border, TokenSlot::CornerRadius, TokenSlot::Elevation],
                )
                .when(true, Fragment::new().opacity(80))
                .compose()
        };
        assert_eq!(build(), build());
        assert_eq!(build().class_string(), build().class_string());
    }

    #[test]
    fn test_canonical_order_ignores_insertion_order() {
        let style = ClassComposer::new()
            .fragment(Fragment::new().shadow(Shadow::Lg))
            .fragment(Fragment::new().background(ColorToken::WHITE))
            .compose();
        assert_eq!(style.classes(), vec!["bg-white", "shadow-lg"]);
    }

    #[test]
    fn test_override_within_single_fragment() {
        let style = compose(vec![Some(
            Fragment::new()
                .border(BorderWidth::Heavy)
                .border(BorderWidth::Hairline),
        )]);
        assert_eq!(
            style.get(StyleProp::BorderWidth),
            Some(&Declaration::BorderWidth(BorderWidth::Hairline))
        );
    }

    // ==========================================================================
    // Composer Builder Tests
    // ==========================================================================

    #[test]
    fn test_scrolled_override_wins_when_listed_last() {
        let theme = lookup(ThemeId::Luxury);
        let override_text = Fragment::new().text(ColorToken::BLACK);

        let scrolled = ClassComposer::new()
            .token(theme, TokenSlot::ForegroundText)
            .when(true, override_text.clone())
            .compose();
        assert_eq!(scrolled.text_color(), Some(ColorToken::BLACK));

        let at_top = ClassComposer::new()
            .token(theme, TokenSlot::ForegroundText)
            .when(false, override_text)
            .compose();
        assert_eq!(at_top.text_color(), Some(theme.foreground_text));
    }

    #[test]
    fn test_when_else() {
        let style = ClassComposer::new()
            .when_else(
                false,
                Fragment::new().background(ColorToken::WHITE),
                Fragment::new().transparent(),
            )
            .compose();
        assert_eq!(style.background(), Some(Paint::Transparent));
    }

    #[test]
    fn test_frosted_surface_fragment() {
        let theme = lookup(ThemeId::Immersive);
        let style = ClassComposer::new()
            .token(theme, TokenSlot::CardSurface)
            .compose();
        assert_eq!(style.class_string(), "bg-white/5 backdrop-blur-xl");
    }

    #[test]
    fn test_opacity_is_clamped() {
        let fragment = Fragment::new().opacity(150);
        assert_eq!(fragment.declarations(), &[Declaration::Opacity(100)]);
    }

    #[test]
    fn test_descriptor_serializes_as_class_list() {
        let style = ClassComposer::new()
            .fragment(Fragment::new().text(ColorToken::palette(Hue::Emerald, 400)))
            .compose();
        let json = serde_json::to_string(&style).unwrap();
        assert_eq!(json, r#"["text-emerald-400"]"#);
    }
}
