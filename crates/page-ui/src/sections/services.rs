//! Services section

use page_theme::{ColorToken, Fragment, TokenSlot};

use super::{header, RenderContext, CARD};
use crate::motion::Entrance;
use crate::view::{Node, Tag};

/// Render the service cards
pub fn render(ctx: &RenderContext<'_>) -> Node {
    let services = &ctx.content.services;

    let cards = services.services.iter().enumerate().map(|(i, service)| {
        let card = Node::new(Tag::Div)
            .with_layout("p-6 sm:p-10 transition-all hover:-translate-y-2 group")
            .with_style(ctx.tokens(&CARD))
            .with_child(
                Node::new(Tag::Div)
                    .with_layout("w-12 h-12 mb-8 flex items-center justify-center")
                    .with_style(
                        ctx.composer(&[TokenSlot::AccentFill, TokenSlot::CornerRadius])
                            .fragment(Fragment::new().text(ColorToken::WHITE))
                            .compose(),
                    )
                    .with_child(
                        Node::text(Tag::Span, (i + 1).to_string()).with_layout("text-lg font-bold"),
                    ),
            )
            .with_child(
                Node::text(Tag::H3, service.title.clone())
                    .with_layout("text-2xl font-bold mb-6 leading-tight")
                    .with_style(ctx.tokens(&[TokenSlot::ForegroundText])),
            )
            .with_child(
                Node::text(Tag::P, service.description.clone())
                    .with_layout("leading-relaxed")
                    .with_style(ctx.tokens(&[TokenSlot::SecondaryText])),
            );
        ctx.reveal(
            card,
            format!("services.card.{}", i),
            Entrance::fade_up(20.0).staggered(i, ctx.stagger_ms),
        )
    });

    Node::new(Tag::Section)
        .with_id("services")
        .with_layout("py-32 px-6 md:px-12")
        .with_style(ctx.tokens(&[TokenSlot::Background]))
        .with_child(
            Node::new(Tag::Div)
                .with_layout("max-w-7xl mx-auto")
                .with_child(header::render(ctx, &services.heading, "services.header", false))
                .with_child(
                    Node::new(Tag::Div)
                        .with_layout("grid md:grid-cols-2 lg:grid-cols-3 gap-8")
                        .with_children(cards),
                ),
        )
}
