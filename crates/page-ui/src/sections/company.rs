//! Company facts section

use page_theme::{Fragment, TokenSlot};

use super::{header, RenderContext};
use crate::view::{Node, Tag};

/// Render the company facts table
pub fn render(ctx: &RenderContext<'_>) -> Node {
    let company = &ctx.content.company;

    let rows = company.facts.iter().map(|fact| {
        Node::new(Tag::Div)
            .with_layout("flex flex-col sm:flex-row border-b pb-6")
            .with_style(ctx.tokens(&[TokenSlot::Border]))
            .with_child(
                Node::text(Tag::Div, fact.label.clone())
                    .with_layout("w-full sm:w-48 shrink-0 font-bold text-xs uppercase tracking-widest mb-2 sm:mb-0")
                    .with_style(
                        ctx.composer(&[])
                            .fragment(Fragment::new().opacity(50))
                            .token(ctx.theme, TokenSlot::ForegroundText)
                            .compose(),
                    ),
            )
            .with_child(
                Node::text(Tag::Div, fact.value.clone())
                    .with_layout("font-bold text-base md:text-lg")
                    .with_style(ctx.tokens(&[TokenSlot::ForegroundText])),
            )
    });

    Node::new(Tag::Section)
        .with_id("company")
        .with_layout("py-20 md:py-32 px-6 md:px-12")
        .with_style(ctx.tokens(&[TokenSlot::Background]))
        .with_child(
            Node::new(Tag::Div)
                .with_layout("max-w-7xl mx-auto")
                .with_child(header::render(ctx, &company.heading, "company.header", false))
                .with_child(
                    Node::new(Tag::Div).with_layout("max-w-3xl mx-auto").with_child(
                        Node::new(Tag::Div)
                            .with_layout("space-y-6")
                            .with_children(rows),
                    ),
                ),
        )
}
