//! Hero section
//!
//! The hero animates in on mount rather than on intersection: it is the
//! first thing on screen, so there is nothing to wait for.

use page_theme::{BorderWidth, ColorToken, Fragment, TokenSlot};

use super::RenderContext;
use crate::motion::{Entrance, IdleMotion};
use crate::view::{Icon, Node, Tag};

/// Render the hero
pub fn render(ctx: &RenderContext<'_>) -> Node {
    let theme = ctx.theme;
    let hero = &ctx.content.hero;

    let backdrop = Node::new(Tag::Div)
        .with_layout("absolute top-0 right-0 w-1/2 h-full -z-10 hidden lg:block")
        .with_style(
            ctx.composer(&[TokenSlot::AccentFill])
                .fragment(Fragment::new().opacity(10))
                .compose(),
        );

    let badge = Node::text(Tag::Div, hero.badge.clone())
        .with_layout("inline-block px-4 py-1 mb-6 md:mb-8 text-[10px] md:text-xs font-bold uppercase tracking-[0.2em] md:tracking-[0.3em]")
        .with_style(ctx.tokens(&[TokenSlot::AccentText, TokenSlot::Border]));

    let headline = Node::new(Tag::H1)
        .with_layout("text-3xl sm:text-5xl md:text-8xl font-black leading-[1.2] md:leading-[1.1] mb-8 md:mb-10 tracking-tighter text-balance")
        .with_style(ctx.tokens(&[TokenSlot::ForegroundText]))
        .with_child(Node::text(Tag::Span, hero.headline_lead.clone()))
        .with_child(Node::new(Tag::Br).with_layout("hidden sm:block"))
        .with_child(
            Node::text(Tag::Span, hero.headline_accent.clone())
                .with_layout("underline underline-offset-8 decoration-2")
                .with_style(ctx.tokens(&[TokenSlot::AccentText])),
        )
        .with_child(Node::text(Tag::Span, hero.headline_tail.clone()));

    let body = Node::text(Tag::P, hero.body.clone())
        .with_layout("text-base md:text-2xl mb-10 md:mb-12 max-w-xl leading-relaxed font-medium text-balance")
        .with_style(ctx.tokens(&[TokenSlot::SecondaryText]));

    let actions = Node::new(Tag::Div)
        .with_layout("flex flex-wrap gap-6")
        .with_child(
            Node::link(hero.primary_cta.href.clone(), hero.primary_cta.label.clone())
                .with_layout("px-10 py-5 font-bold text-lg transition-all hover:-translate-y-1 active:scale-95")
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
                ),
        )
        .with_child(
            Node::link(hero.secondary_cta.href.clone(), hero.secondary_cta.label.clone())
                .with_layout("px-10 py-5 font-bold text-lg transition-all hover:bg-black/5")
                .with_style(ctx.tokens(&[
                    TokenSlot::Border,
                    TokenSlot::ForegroundText,
                    TokenSlot::CornerRadius,
                ])),
        );

    let copy = Node::new(Tag::Div)
        .with_entrance(Entrance::slide_in(-50.0).with_duration(1000).on_mount())
        .with_child(badge)
        .with_child(headline)
        .with_child(body)
        .with_child(actions);

    let stat_card = Node::new(Tag::Div)
        .with_layout("absolute bottom-4 left-4 md:-bottom-10 md:-left-10 p-5 md:p-8 z-10")
        .with_idle(IdleMotion::float(15.0, 4000))
        .with_style(
            ctx.composer(&[])
                .fragment(
                    Fragment::new()
                        .border(BorderWidth::Hairline)
                        .background(ColorToken::WHITE)
                        .text(ColorToken::BLACK),
                )
                .tokens(theme, &[TokenSlot::CornerRadius, TokenSlot::Elevation])
                .compose(),
        )
        .with_child(
            Node::new(Tag::Div)
                .with_layout("flex items-center gap-3 md:gap-4")
                .with_child(
                    Node::new(Tag::Div)
                        .with_layout("w-10 h-10 md:w-12 md:h-12 rounded-full flex items-center justify-center")
                        .with_style(
                            ctx.composer(&[TokenSlot::AccentFill])
                                .fragment(Fragment::new().text(ColorToken::WHITE))
                                .compose(),
                        )
                        .with_child(Node::icon(Icon::TrendingUp)),
                )
                .with_child(
                    Node::new(Tag::Div)
                        .with_child(
                            Node::text(Tag::Div, hero.stat_label.clone())
                                .with_layout("text-[8px] md:text-[10px] font-bold uppercase tracking-widest opacity-50"),
                        )
                        .with_child(
                            Node::text(Tag::Div, hero.stat_value.clone())
                                .with_layout("text-xl md:text-2xl font-black"),
                        ),
                ),
        );

    let visual = Node::new(Tag::Div)
        .with_layout("relative mt-12 lg:mt-0")
        .with_entrance(
            Entrance::scale_in(0.9)
                .with_duration(1200)
                .with_delay(200)
                .on_mount(),
        )
        .with_child(
            Node::new(Tag::Div)
                .with_layout("aspect-[4/5] overflow-hidden")
                .with_style(ctx.tokens(&[TokenSlot::CornerRadius, TokenSlot::Elevation]))
                .with_child(
                    Node::image(hero.image_url.clone(), hero.image_alt.clone())
                        .with_layout("w-full h-full object-cover grayscale-[0.3] hover:grayscale-0 transition-all duration-1000"),
                ),
        )
        .with_child(stat_card);

    let scroll_hint = Node::new(Tag::Div)
        .with_layout("absolute bottom-10 left-1/2 -translate-x-1/2 animate-bounce")
        .with_style(
            ctx.composer(&[TokenSlot::ForegroundText])
                .fragment(Fragment::new().opacity(30))
                .compose(),
        )
        .with_child(Node::icon(Icon::ChevronDown));

    Node::new(Tag::Section)
        .with_layout("relative min-h-screen flex items-center px-6 md:px-12 pt-20 overflow-hidden")
        .with_child(backdrop)
        .with_child(
            Node::new(Tag::Div)
                .with_layout("max-w-7xl mx-auto w-full grid lg:grid-cols-2 gap-12 md:gap-20 items-center")
                .with_child(copy)
                .with_child(visual),
        )
        .with_child(scroll_hint)
}
