//! Strengths section with the method panel

use page_theme::{ColorToken, Fragment, TokenSlot};

use super::{header, RenderContext};
use crate::motion::Entrance;
use crate::view::{Icon, Node, Tag};

/// Render the strengths list and method panel
pub fn render(ctx: &RenderContext<'_>) -> Node {
    let strengths = &ctx.content.strengths;

    let rows = strengths.strengths.iter().enumerate().map(|(i, strength)| {
        let row = Node::new(Tag::Div)
            .with_layout("flex items-start gap-6")
            .with_child(
                Node::new(Tag::Div)
                    .with_layout("w-8 h-8 rounded-full flex items-center justify-center shrink-0 mt-1")
                    .with_style(
                        ctx.composer(&[TokenSlot::AccentFill])
                            .fragment(Fragment::new().text(ColorToken::WHITE))
                            .compose(),
                    )
                    .with_child(Node::icon(Icon::CheckCircle).with_layout("w-5 h-5")),
            )
            .with_child(
                Node::text(Tag::P, strength.clone())
                    .with_layout("text-xl font-bold leading-relaxed")
                    .with_style(ctx.tokens(&[TokenSlot::ForegroundText])),
            );
        ctx.reveal(
            row,
            format!("strengths.item.{}", i),
            Entrance::slide_in(-20.0).staggered(i, ctx.stagger_ms),
        )
    });

    let methods = strengths.methods.iter().map(|method| {
        Node::new(Tag::Div)
            .with_layout("flex items-center gap-3")
            .with_child(
                Node::icon(Icon::Sparkles)
                    .with_layout("w-5 h-5")
                    .with_style(ctx.tokens(&[TokenSlot::AccentText])),
            )
            .with_child(
                Node::text(Tag::Span, method.clone())
                    .with_layout("font-bold")
                    .with_style(
                        ctx.composer(&[])
                            .fragment(Fragment::new().text(ColorToken::WHITE).opacity(80))
                            .compose(),
                    ),
            )
    });

    let panel = Node::new(Tag::Div)
        .with_layout("p-6 md:p-12 flex flex-col justify-center")
        .with_style(ctx.tokens(&[
            TokenSlot::FooterSurface,
            TokenSlot::CornerRadius,
            TokenSlot::Elevation,
        ]))
        .with_child(
            Node::text(Tag::H3, strengths.method_title.clone())
                .with_layout("text-xl md:text-2xl font-bold mb-8 md:mb-10 border-b pb-6 uppercase tracking-widest")
                .with_style(
                    ctx.composer(&[])
                        .fragment(
                            Fragment::new()
                                .text(ColorToken::WHITE)
                                .border_color(ColorToken::WHITE.alpha(20)),
                        )
                        .compose(),
                ),
        )
        .with_child(
            Node::new(Tag::Div)
                .with_layout("grid grid-cols-1 sm:grid-cols-2 gap-6 md:gap-8")
                .with_children(methods),
        );

    Node::new(Tag::Section)
        .with_id("strengths")
        .with_layout("py-32 px-6 md:px-12")
        .with_style(
            ctx.composer(&[])
                .fragment(Fragment::new().background(ctx.theme.alternate_surface()))
                .compose(),
        )
        .with_child(
            Node::new(Tag::Div).with_layout("max-w-7xl mx-auto").with_child(
                Node::new(Tag::Div)
                    .with_layout("grid lg:grid-cols-2 gap-20")
                    .with_child(
                        Node::new(Tag::Div)
                            .with_child(header::render(
                                ctx,
                                &strengths.heading,
                                "strengths.header",
                                false,
                            ))
                            .with_child(
                                Node::new(Tag::Div)
                                    .with_layout("space-y-8")
                                    .with_children(rows),
                            ),
                    )
                    .with_child(panel),
            ),
        )
}
