//! Problem statement section

use page_theme::{ColorToken, Fragment, Hue, TokenSlot};

use super::{header, RenderContext, CARD};
use crate::motion::Entrance;
use crate::view::{Icon, Node, Tag};

/// Render the problem statement
pub fn render(ctx: &RenderContext<'_>) -> Node {
    let problem = &ctx.content.problem;

    let intro = Node::new(Tag::Div)
        .with_child(header::render(ctx, &problem.heading, "problem.header", false))
        .with_child(
            Node::text(Tag::P, problem.body.clone())
                .with_layout("text-base md:text-lg mb-12 leading-relaxed text-balance")
                .with_style(ctx.tokens(&[TokenSlot::SecondaryText])),
        );

    let items = problem.problems.iter().enumerate().map(|(i, text)| {
        let card = Node::new(Tag::Div)
            .with_layout("flex items-start gap-4 p-4 sm:p-6")
            .with_style(ctx.tokens(&CARD))
            .with_child(
                Node::icon(Icon::X)
                    .with_layout("w-6 h-6 shrink-0 mt-1")
                    .with_style(
                        ctx.composer(&[])
                            .fragment(Fragment::new().text(ColorToken::palette(Hue::Red, 500)))
                            .compose(),
                    ),
            )
            .with_child(
                Node::text(Tag::Span, text.clone())
                    .with_layout("font-bold text-lg")
                    .with_style(ctx.tokens(&[TokenSlot::ForegroundText])),
            );
        ctx.reveal(
            card,
            format!("problem.item.{}", i),
            Entrance::slide_in(20.0).staggered(i, ctx.stagger_ms),
        )
    });

    Node::new(Tag::Section)
        .with_layout("py-20 md:py-32 px-6 md:px-12")
        .with_style(
            ctx.composer(&[])
                .fragment(Fragment::new().background(ctx.theme.alternate_surface()))
                .compose(),
        )
        .with_child(
            Node::new(Tag::Div).with_layout("max-w-7xl mx-auto").with_child(
                Node::new(Tag::Div)
                    .with_layout("grid lg:grid-cols-2 gap-12 md:gap-20 items-center")
                    .with_child(intro)
                    .with_child(
                        Node::new(Tag::Div)
                            .with_layout("space-y-6")
                            .with_children(items),
                    ),
            ),
        )
}
