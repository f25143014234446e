//! Representative profile section

use page_theme::{BorderWidth, ColorToken, Fragment, TokenSlot};

use super::RenderContext;
use crate::motion::Entrance;
use crate::view::{Node, Tag};

/// Render the representative profile
pub fn render(ctx: &RenderContext<'_>) -> Node {
    let theme = ctx.theme;
    let brand = &ctx.content.brand;
    let profile = &ctx.content.representative;

    let watermark = Node::text(Tag::Div, profile.name_latin.clone())
        .with_layout("absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 text-[20vw] font-black pointer-events-none select-none whitespace-nowrap")
        .with_style(ctx.composer(&[]).fragment(Fragment::new().opacity(2)).compose());

    let name_card = ctx.reveal(
        Node::new(Tag::Div)
            .with_layout("absolute -bottom-4 -right-2 md:-bottom-6 md:-right-6 p-4 md:p-10 z-20")
            .with_style(
                ctx.composer(&[])
                    .fragment(Fragment::new().text(ColorToken::WHITE))
                    .tokens(
                        theme,
                        &[
                            TokenSlot::AccentFill,
                            TokenSlot::CornerRadius,
                            TokenSlot::Elevation,
                        ],
                    )
                    .compose(),
            )
            .with_child(
                Node::text(Tag::Div, profile.role.clone())
                    .with_layout("text-[8px] md:text-xs font-bold opacity-60 mb-1 md:mb-2 uppercase tracking-widest"),
            )
            .with_child(
                Node::text(Tag::Div, profile.name.clone())
                    .with_layout("text-base md:text-3xl font-black tracking-tighter whitespace-nowrap"),
            )
            .with_child(
                Node::text(Tag::Div, profile.name_latin.clone())
                    .with_layout("text-[6px] md:text-xs font-bold tracking-[0.3em] mt-1 md:mt-4 opacity-40 uppercase"),
            ),
        "representative.name-card",
        Entrance::slide_in(20.0).with_delay(300),
    );

    let portrait = ctx.reveal(
        Node::new(Tag::Div)
            .with_layout("relative w-full max-w-[240px] xs:max-w-[280px] md:max-w-sm mx-auto lg:ml-0 lg:mr-auto")
            .with_child(
                Node::new(Tag::Div)
                    .with_layout("aspect-[3/4] overflow-hidden relative z-10")
                    .with_style(ctx.tokens(&[TokenSlot::CornerRadius, TokenSlot::Elevation]))
                    .with_child(
                        Node::image(profile.portrait_url.clone(), profile.portrait_alt.clone())
                            .with_layout("w-full h-full object-cover object-[center_10%] transition-all duration-700"),
                    )
                    .with_child(
                        Node::new(Tag::Div).with_layout(
                            "absolute inset-0 bg-gradient-to-t from-black/40 to-transparent opacity-30",
                        ),
                    ),
            )
            .with_child(
                // The theme border's width replaces the doubled frame width.
                Node::new(Tag::Div)
                    .with_layout("absolute -top-3 -left-3 md:-top-4 md:-left-4 w-full h-full pointer-events-none")
                    .with_style(
                        ctx.composer(&[])
                            .fragment(Fragment::new().border(BorderWidth::Double).opacity(20))
                            .tokens(theme, &[TokenSlot::Border, TokenSlot::CornerRadius])
                            .compose(),
                    ),
            )
            .with_child(name_card),
        "representative.portrait",
        Entrance::scale_in(0.95),
    );

    let quote = Node::new(Tag::P)
        .with_layout("text-xl md:text-5xl font-bold mb-10 md:mb-16 leading-[1.3] md:leading-[1.1] text-balance")
        .with_style(ctx.tokens(&[TokenSlot::ForegroundText]))
        .with_child(Node::text(Tag::Span, profile.quote_lead.clone()))
        .with_child(
            Node::text(Tag::Span, profile.quote_accent.clone())
                .with_layout("italic")
                .with_style(ctx.tokens(&[TokenSlot::AccentText])),
        )
        .with_child(Node::text(Tag::Span, profile.quote_tail.clone()));

    let signature = Node::new(Tag::Div)
        .with_layout("mt-16 md:mt-24 flex items-center gap-6")
        .with_child(
            Node::new(Tag::Div)
                .with_layout("w-16 h-16 rounded-full flex items-center justify-center overflow-hidden")
                .with_style(ctx.tokens(&[TokenSlot::Border]))
                .with_child(
                    Node::image(brand.logo_url.clone(), brand.logo_alt.clone())
                        .with_layout("w-10 h-10 object-contain"),
                ),
        )
        .with_child(
            Node::new(Tag::Div)
                .with_child(
                    Node::text(Tag::Div, profile.signature_caption.clone())
                        .with_layout("text-sm font-bold opacity-40 tracking-widest"),
                )
                .with_child(
                    Node::text(Tag::Div, profile.signature_name.clone())
                        .with_layout("text-xl font-black tracking-tighter")
                        .with_style(ctx.tokens(&[TokenSlot::ForegroundText])),
                ),
        );

    let message = ctx.reveal(
        Node::new(Tag::Div)
            .with_child(
                Node::new(Tag::H2)
                    .with_layout("text-xs md:text-sm font-bold uppercase tracking-[0.5em] mb-8 md:mb-12 flex items-center justify-center lg:justify-start gap-4")
                    .with_style(
                        ctx.composer(&[TokenSlot::AccentText])
                            .fragment(Fragment::new().opacity(50))
                            .compose(),
                    )
                    .with_child(
                        Node::new(Tag::Span)
                            .with_layout("w-8 md:w-12 h-[1px]")
                            .with_style(ctx.tokens(&[TokenSlot::AccentFill])),
                    )
                    .with_child(Node::text(Tag::Span, profile.eyebrow.clone())),
            )
            .with_child(quote)
            .with_child(
                Node::new(Tag::Div)
                    .with_layout("space-y-8 md:space-y-10 text-base md:text-xl leading-relaxed text-balance font-medium")
                    .with_style(ctx.tokens(&[TokenSlot::SecondaryText]))
                    .with_children(
                        profile
                            .message
                            .iter()
                            .map(|paragraph| Node::text(Tag::P, paragraph.clone())),
                    ),
            )
            .with_child(signature),
        "representative.message",
        Entrance::fade_up(20.0),
    );

    Node::new(Tag::Section)
        .with_layout("py-20 md:py-40 px-6 md:px-12 relative overflow-hidden")
        .with_style(
            ctx.composer(&[])
                .fragment(Fragment::new().background(theme.alternate_surface()))
                .compose(),
        )
        .with_child(watermark)
        .with_child(
            Node::new(Tag::Div)
                .with_layout("max-w-7xl mx-auto relative z-10")
                .with_child(
                    Node::new(Tag::Div)
                        .with_layout("grid lg:grid-cols-12 gap-12 md:gap-24 items-center")
                        .with_child(
                            Node::new(Tag::Div)
                                .with_layout("lg:col-span-4 lg:col-start-2 relative")
                                .with_child(portrait),
                        )
                        .with_child(
                            Node::new(Tag::Div)
                                .with_layout("lg:col-span-6 lg:col-start-7 text-center lg:text-left")
                                .with_child(message),
                        ),
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::testing;
    use page_theme::{lookup, StyleProp, ThemeId};

    #[test]
    fn test_gates() {
        let node = render(&testing::context(ThemeId::ModernKyoto));
        assert_eq!(
            node.reveal_keys(),
            vec![
                "representative.portrait",
                "representative.name-card",
                "representative.message",
            ]
        );
    }

    #[test]
    fn test_frame_takes_theme_border_width() {
        for theme in ThemeId::ALL {
            let node = render(&testing::context(theme));
            let frame = node
                .find(|n| n.layout.contains("pointer-events-none") && n.text.is_none())
                .unwrap();
            let width = frame.style.get(StyleProp::BorderWidth).copied();
            assert_eq!(
                width,
                Some(page_theme::Declaration::BorderWidth(lookup(theme).border_style.width))
            );
        }
    }
}
