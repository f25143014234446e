//! Solution section: white copy on the theme accent

use page_theme::{Blur, BorderWidth, ColorToken, Fragment, Hue, TokenSlot};

use super::{broken_lines, RenderContext};
use crate::motion::Entrance;
use crate::view::{Icon, Node, Tag};

/// Frosted panel used on accent backgrounds
pub(crate) fn frosted_panel() -> Fragment {
    Fragment::new()
        .background(ColorToken::WHITE.alpha(10))
        .backdrop(Blur::Md)
        .border(BorderWidth::Hairline)
        .border_color(ColorToken::WHITE.alpha(10))
}

/// Render the solution block
pub fn render(ctx: &RenderContext<'_>) -> Node {
    let solution = &ctx.content.solution;

    let pillars = solution.pillars.iter().map(|pillar| {
        Node::new(Tag::Div)
            .with_layout("p-8")
            .with_style(
                ctx.composer(&[])
                    .fragment(frosted_panel())
                    .token(ctx.theme, TokenSlot::CornerRadius)
                    .compose(),
            )
            .with_child(
                Node::new(Tag::H3)
                    .with_layout("text-xl font-bold mb-4 flex items-center gap-2")
                    .with_child(
                        Node::icon(Icon::CheckCircle)
                            .with_layout("w-5 h-5")
                            .with_style(
                                ctx.composer(&[])
                                    .fragment(
                                        Fragment::new().text(ColorToken::palette(Hue::Emerald, 400)),
                                    )
                                    .compose(),
                            ),
                    )
                    .with_child(Node::text(Tag::Span, pillar.title.clone())),
            )
            .with_child(
                Node::text(Tag::P, pillar.description.clone())
                    .with_layout("text-sm leading-relaxed")
                    .with_style(ctx.composer(&[]).fragment(Fragment::new().opacity(70)).compose()),
            )
    });

    let body = Node::new(Tag::Div)
        .with_child(
            Node::text(Tag::H2, solution.eyebrow.clone())
                .with_layout("text-xs md:text-sm font-bold uppercase tracking-[0.3em] md:tracking-[0.5em] mb-6 md:mb-8")
                .with_style(ctx.composer(&[]).fragment(Fragment::new().opacity(60)).compose()),
        )
        .with_child(
            Node::new(Tag::P)
                .with_layout("text-2xl md:text-6xl font-black mb-10 md:mb-12 leading-tight text-balance")
                .with_children(broken_lines(&solution.headline)),
        )
        .with_child(
            Node::text(Tag::Div, solution.watermark.clone())
                .with_layout("text-4xl md:text-8xl font-black mb-10 md:mb-12 tracking-tighter")
                .with_style(ctx.composer(&[]).fragment(Fragment::new().opacity(20)).compose()),
        )
        .with_child(
            Node::text(Tag::P, solution.body.clone())
                .with_layout("text-base md:text-2xl mb-12 md:mb-16 leading-relaxed max-w-3xl mx-auto text-balance")
                .with_style(ctx.composer(&[]).fragment(Fragment::new().opacity(80)).compose()),
        )
        .with_child(
            Node::new(Tag::Div)
                .with_layout("grid md:grid-cols-3 gap-8 text-left")
                .with_children(pillars),
        );

    Node::new(Tag::Section)
        .with_layout("py-20 md:py-32 px-6 md:px-12")
        .with_style(
            ctx.composer(&[])
                .fragment(Fragment::new().text(ColorToken::WHITE))
                .token(ctx.theme, TokenSlot::AccentFill)
                .compose(),
        )
        .with_child(
            Node::new(Tag::Div)
                .with_layout("max-w-5xl mx-auto text-center")
                .with_child(ctx.reveal(body, "solution.body", Entrance::scale_in(0.9))),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::testing;
    use page_theme::{lookup, Paint, ThemeId};

    #[test]
    fn test_section_sits_on_accent() {
        for theme in ThemeId::ALL {
            let node = render(&testing::context(theme));
            assert_eq!(node.style.text_color(), Some(ColorToken::WHITE));
            assert_eq!(
                node.style.background(),
                Some(Paint::Solid(lookup(theme).accent_fill))
            );
        }
    }

    #[test]
    fn test_single_gate_and_three_pillars() {
        let node = render(&testing::context(ThemeId::Luxury));
        assert_eq!(node.reveal_keys(), vec!["solution.body"]);
        assert_eq!(node.descendants().filter(|n| n.tag == Tag::H3).count(), 3);
    }
}
