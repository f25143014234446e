//! Eyebrow and title shown above most sections

use page_theme::{ColorToken, Fragment, TokenSlot};

use super::RenderContext;
use crate::content::Heading;
use crate::motion::Entrance;
use crate::view::{Node, Tag};

/// Section heading; `light` switches to white text for dark surfaces
pub fn render(ctx: &RenderContext<'_>, heading: &Heading, key: &str, light: bool) -> Node {
    let theme = ctx.theme;

    let subtitle = Node::text(Tag::H2, heading.subtitle.clone())
        .with_layout("text-xs md:text-sm font-bold uppercase tracking-[0.3em] md:tracking-[0.5em] mb-3 md:mb-4")
        .with_style(
            ctx.composer(&[])
                .when_else(
                    light,
                    Fragment::new().text(ColorToken::WHITE.alpha(50)),
                    Fragment::new().opacity(50),
                )
                .token(theme, TokenSlot::AccentText)
                .compose(),
        );

    let title = Node::text(Tag::P, heading.title.clone())
        .with_layout("text-2xl md:text-5xl font-bold leading-tight text-balance")
        .with_style(
            ctx.composer(&[])
                .when_else(
                    light,
                    Fragment::new().text(ColorToken::WHITE),
                    theme.fragment(TokenSlot::ForegroundText),
                )
                .compose(),
        );

    let body = ctx.reveal(
        Node::new(Tag::Div).with_child(subtitle).with_child(title),
        key,
        Entrance::fade_up(20.0),
    );

    Node::new(Tag::Div)
        .with_layout("mb-12 md:mb-20")
        .with_child(body)
}
