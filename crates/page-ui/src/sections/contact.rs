//! Contact section: white copy on the theme accent

use page_theme::{ColorToken, Fragment, Shadow, TokenSlot};

use super::solution::frosted_panel;
use super::{broken_lines, RenderContext};
use crate::motion::Entrance;
use crate::view::{Icon, Node, Tag};

fn channel(ctx: &RenderContext<'_>, icon: Icon, label: &str, value: &str) -> Node {
    Node::new(Tag::Div)
        .with_layout("p-8 md:p-10 flex flex-col items-center")
        .with_style(
            ctx.composer(&[])
                .fragment(frosted_panel())
                .token(ctx.theme, TokenSlot::CornerRadius)
                .compose(),
        )
        .with_child(Node::icon(icon).with_layout("w-6 h-6 md:w-8 md:h-8 mb-4"))
        .with_child(
            Node::text(Tag::Div, label)
                .with_layout("text-xs md:text-sm mb-1 md:mb-2")
                .with_style(ctx.composer(&[]).fragment(Fragment::new().opacity(60)).compose()),
        )
        .with_child(Node::text(Tag::Div, value).with_layout("text-lg md:text-xl font-bold"))
}

/// Render the contact block
pub fn render(ctx: &RenderContext<'_>) -> Node {
    let contact = &ctx.content.contact;

    let body = Node::new(Tag::Div)
        .with_child(
            Node::new(Tag::H2)
                .with_layout("text-2xl md:text-6xl font-black mb-10 md:mb-12 leading-tight text-balance")
                .with_children(broken_lines(&contact.headline)),
        )
        .with_child(
            Node::text(Tag::P, contact.body.clone())
                .with_layout("text-base md:text-2xl mb-12 md:mb-16 leading-relaxed px-4 text-balance")
                .with_style(ctx.composer(&[]).fragment(Fragment::new().opacity(80)).compose()),
        )
        .with_child(
            Node::new(Tag::Div)
                .with_layout("grid md:grid-cols-2 gap-6 md:gap-8 mb-12 md:mb-16")
                .with_child(channel(ctx, Icon::Mail, &contact.email_label, &contact.email))
                .with_child(channel(ctx, Icon::Phone, &contact.phone_label, &contact.phone)),
        )
        .with_child(
            Node::text(Tag::Button, contact.button.clone())
                .with_layout("px-8 md:px-12 py-5 md:py-6 font-black text-xl md:text-2xl transition-all hover:scale-105 active:scale-95")
                .with_style(
                    ctx.composer(&[])
                        .fragment(
                            Fragment::new()
                                .background(ColorToken::WHITE)
                                .text(ColorToken::BLACK)
                                .shadow(Shadow::Xl2),
                        )
                        .token(ctx.theme, TokenSlot::CornerRadius)
                        .compose(),
                ),
        );

    Node::new(Tag::Section)
        .with_id("contact")
        .with_layout("py-20 md:py-32 px-6 md:px-12")
        .with_style(
            ctx.composer(&[])
                .fragment(Fragment::new().text(ColorToken::WHITE))
                .token(ctx.theme, TokenSlot::AccentFill)
                .compose(),
        )
        .with_child(
            Node::new(Tag::Div)
                .with_layout("max-w-4xl mx-auto text-center")
                .with_child(ctx.reveal(body, "contact.body", Entrance::fade_up(30.0))),
        )
}
