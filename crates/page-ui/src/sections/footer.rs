//! Page footer

use page_theme::{ColorToken, Fragment, StyleDescriptor, TokenSlot};

use super::RenderContext;
use crate::view::{Icon, Node, Tag};

fn faded(ctx: &RenderContext<'_>, percent: u8) -> StyleDescriptor {
    ctx.composer(&[])
        .fragment(Fragment::new().opacity(percent))
        .compose()
}

fn contact_row(icon: Icon, text: &str) -> Node {
    Node::new(Tag::Li)
        .with_layout("flex items-center gap-2 text-sm sm:text-base")
        .with_child(Node::icon(icon).with_layout("w-4 h-4 shrink-0"))
        .with_child(Node::text(Tag::Span, text))
}

/// Render the footer
pub fn render(ctx: &RenderContext<'_>) -> Node {
    let content = ctx.content;
    let brand = &content.brand;
    let footer = &content.footer;

    let about = Node::new(Tag::Div)
        .with_layout("col-span-2")
        .with_child(
            Node::new(Tag::Div)
                .with_layout("flex items-center gap-3 mb-8")
                .with_child(
                    Node::image(brand.logo_url.clone(), brand.logo_alt.clone())
                        .with_layout("w-12 h-12 object-contain"),
                )
                .with_child(
                    Node::new(Tag::Div)
                        .with_layout("flex flex-col")
                        .with_child(
                            Node::text(Tag::Span, brand.name.clone())
                                .with_layout("text-2xl font-black tracking-tighter leading-none")
                                .with_style(ctx.tokens(&[TokenSlot::AccentText])),
                        )
                        .with_child(
                            Node::text(Tag::Span, brand.byline.clone())
                                .with_layout("text-[10px] font-bold tracking-widest")
                                .with_style(faded(ctx, 40)),
                        ),
                ),
        )
        .with_child(
            Node::text(Tag::P, footer.tagline.clone())
                .with_layout("max-w-sm leading-relaxed font-medium text-balance")
                .with_style(faded(ctx, 60)),
        );

    let navigation = Node::new(Tag::Div)
        .with_child(
            Node::text(Tag::H4, footer.navigation_title.clone())
                .with_layout("font-bold mb-8 uppercase tracking-widest text-sm")
                .with_style(faded(ctx, 40)),
        )
        .with_child(
            Node::new(Tag::Ul)
                .with_layout("space-y-4 font-bold")
                .with_children(content.nav_links.iter().map(|link| {
                    Node::new(Tag::Li).with_child(
                        Node::link(link.href.clone(), link.label.clone())
                            .with_layout("hover:opacity-50 transition-colors"),
                    )
                })),
        );

    let contact = Node::new(Tag::Div)
        .with_child(
            Node::text(Tag::H4, footer.contact_title.clone())
                .with_layout("font-bold mb-8 uppercase tracking-widest text-sm")
                .with_style(faded(ctx, 40)),
        )
        .with_child(
            Node::new(Tag::Ul)
                .with_layout("space-y-4 font-bold")
                .with_style(faded(ctx, 80))
                .with_child(contact_row(Icon::Mail, &content.contact.email))
                .with_child(contact_row(Icon::Phone, &content.contact.phone))
                .with_child(contact_row(Icon::MapPin, &footer.address)),
        );

    let legal = Node::new(Tag::Div)
        .with_layout("max-w-7xl mx-auto mt-20 pt-8 border-t flex flex-col md:flex-row justify-between items-center gap-6 text-xs font-bold tracking-widest")
        .with_style(
            ctx.composer(&[])
                .fragment(
                    Fragment::new()
                        .border_color(ColorToken::WHITE.alpha(5))
                        .opacity(40),
                )
                .compose(),
        )
        .with_child(Node::text(Tag::P, content.copyright()))
        .with_child(
            Node::new(Tag::Div)
                .with_layout("flex gap-8")
                .with_children(footer.legal.iter().map(|link| {
                    Node::link(link.href.clone(), link.label.clone())
                        .with_layout("hover:text-white transition-colors")
                })),
        );

    Node::new(Tag::Footer)
        .with_layout("py-20 px-6 md:px-12")
        .with_style(
            ctx.composer(&[])
                .fragment(Fragment::new().text(ColorToken::WHITE))
                .token(ctx.theme, TokenSlot::FooterSurface)
                .compose(),
        )
        .with_child(
            Node::new(Tag::Div)
                .with_layout("max-w-7xl mx-auto grid md:grid-cols-4 gap-16")
                .with_child(about)
                .with_child(navigation)
                .with_child(contact),
        )
        .with_child(legal)
}
