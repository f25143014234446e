//! Presentational sections
//!
//! Every section is a pure function of a [`RenderContext`]: the active token
//! bundle, the page copy and the reveal gates. Sections never hold theme
//! state and never talk to each other.

pub mod achievements;
pub mod company;
pub mod contact;
pub mod footer;
pub mod header;
pub mod hero;
pub mod navbar;
pub mod problem;
pub mod representative;
pub mod services;
pub mod solution;
pub mod strengths;

use page_state::RevealRegistry;
use page_theme::{ClassComposer, StyleDescriptor, TokenBundle, TokenSlot};

use crate::content::SiteContent;
use crate::motion::Entrance;
use crate::view::Node;

pub use navbar::Navbar;

/// Shared inputs for one render pass
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Bundle of the active theme, resolved for this pass only
    pub theme: &'static TokenBundle,
    /// Page copy
    pub content: &'a SiteContent,
    /// Delay between staggered siblings
    pub stagger_ms: u64,
    reveals: &'a RevealRegistry,
}

impl<'a> RenderContext<'a> {
    /// Create a context
    pub fn new(
        theme: &'static TokenBundle,
        content: &'a SiteContent,
        reveals: &'a RevealRegistry,
        stagger_ms: u64,
    ) -> Self {
        Self {
            theme,
            content,
            stagger_ms,
            reveals,
        }
    }

    /// Style made only of bundle fields
    pub fn tokens(&self, slots: &[TokenSlot]) -> StyleDescriptor {
        self.composer(slots).compose()
    }

    /// Composer seeded with bundle fields
    pub fn composer(&self, slots: &[TokenSlot]) -> ClassComposer {
        ClassComposer::new().tokens(self.theme, slots)
    }

    /// Attach a reveal-gated entrance to `node`
    pub fn reveal(&self, node: Node, key: impl Into<String>, entrance: Entrance) -> Node {
        let key = key.into();
        let visible = self.reveals.is_revealed(&key);
        node.with_entrance(entrance).with_reveal(key, visible)
    }
}

/// Card slots shared by problem, service and achievement cards
pub(crate) const CARD: [TokenSlot; 4] = [
    TokenSlot::CardSurface,
    TokenSlot::Border,
    TokenSlot::CornerRadius,
    TokenSlot::Elevation,
];

/// Every section below the navbar, in page order
pub fn render_sections(ctx: &RenderContext<'_>) -> Vec<Node> {
    vec![
        hero::render(ctx),
        problem::render(ctx),
        solution::render(ctx),
        services::render(ctx),
        strengths::render(ctx),
        achievements::render(ctx),
        representative::render(ctx),
        company::render(ctx),
        contact::render(ctx),
        footer::render(ctx),
    ]
}

/// Render `lines` as spans separated by line breaks
pub(crate) fn broken_lines(lines: &[String]) -> Vec<Node> {
    use crate::view::Tag;

    let mut nodes = Vec::with_capacity(lines.len() * 2);
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            nodes.push(Node::new(Tag::Br).with_layout("hidden sm:block"));
        }
        nodes.push(Node::text(Tag::Span, line.clone()));
    }
    nodes
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use page_theme::{lookup, ThemeId};
    use std::sync::OnceLock;

    pub fn content() -> &'static SiteContent {
        static CONTENT: OnceLock<SiteContent> = OnceLock::new();
        CONTENT.get_or_init(SiteContent::default)
    }

    pub fn reveals() -> &'static RevealRegistry {
        static REVEALS: OnceLock<RevealRegistry> = OnceLock::new();
        REVEALS.get_or_init(RevealRegistry::default)
    }

    pub fn context(theme: ThemeId) -> RenderContext<'static> {
        RenderContext::new(lookup(theme), content(), reveals(), 100)
    }
}
