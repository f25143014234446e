//! Case study section

use page_theme::TokenSlot;

use super::{header, RenderContext, CARD};
use crate::motion::Entrance;
use crate::view::{Node, Tag};

/// Render the case studies
pub fn render(ctx: &RenderContext<'_>) -> Node {
    let achievements = &ctx.content.achievements;

    let cards = achievements.cases.iter().enumerate().map(|(i, case)| {
        let card = Node::new(Tag::Div)
            .with_layout("p-6 sm:p-12 transition-all")
            .with_style(ctx.tokens(&CARD))
            .with_child(
                Node::text(Tag::Div, format!("{} {}", achievements.case_label, i + 1))
                    .with_layout("text-xs font-bold uppercase tracking-widest mb-4")
                    .with_style(ctx.tokens(&[TokenSlot::AccentText])),
            )
            .with_child(
                Node::text(Tag::H3, case.title.clone())
                    .with_layout("text-2xl font-bold mb-4")
                    .with_style(ctx.tokens(&[TokenSlot::ForegroundText])),
            )
            .with_child(
                Node::text(Tag::Div, case.result.clone())
                    .with_layout("text-3xl font-black mb-6")
                    .with_style(ctx.tokens(&[TokenSlot::AccentText])),
            )
            .with_child(
                Node::text(Tag::P, case.description.clone())
                    .with_layout("leading-relaxed")
                    .with_style(ctx.tokens(&[TokenSlot::SecondaryText])),
            );
        // Case studies stagger at twice the list pace.
        ctx.reveal(
            card,
            format!("achievements.card.{}", i),
            Entrance::fade_up(20.0).staggered(i, ctx.stagger_ms.saturating_mul(2)),
        )
    });

    Node::new(Tag::Section)
        .with_id("achievements")
        .with_layout("py-32 px-6 md:px-12")
        .with_style(ctx.tokens(&[TokenSlot::Background]))
        .with_child(
            Node::new(Tag::Div)
                .with_layout("max-w-7xl mx-auto")
                .with_child(header::render(
                    ctx,
                    &achievements.heading,
                    "achievements.header",
                    false,
                ))
                .with_child(
                    Node::new(Tag::Div)
                        .with_layout("grid md:grid-cols-3 gap-12")
                        .with_children(cards),
                ),
        )
}
