//! Floating theme picker
//!
//! The picker keeps the same neutral styling under every theme so it stays
//! recognizable while themes change underneath it.

use page_state::ThemePicker;
use page_theme::{compose, BorderWidth, ColorToken, CornerRadius, FontWeight, Fragment, Hue, Shadow};

use crate::motion::{Entrance, Pose};
use crate::view::{Icon, Node, Tag};

fn slate(shade: u16) -> ColorToken {
    ColorToken::palette(Hue::Slate, shade)
}

/// Render the picker button and, while open, its theme list
pub fn render(picker: &ThemePicker) -> Node {
    let mut root = Node::new(Tag::Div).with_layout("fixed bottom-8 right-8 z-[100]");

    if picker.is_open() {
        let entries = picker.entries().into_iter().map(|entry| {
            let style = compose([
                Some(
                    Fragment::new()
                        .radius(CornerRadius::Xl)
                        .weight(FontWeight::Bold),
                ),
                Some(if entry.selected {
                    Fragment::new().background(slate(900)).text(ColorToken::WHITE)
                } else {
                    Fragment::new().text(slate(600))
                }),
            ]);

            let mut button = Node::text(Tag::Button, entry.display_name)
                .with_layout("flex items-center justify-between px-4 py-3 text-sm transition-all")
                .with_attr("data-theme", entry.id.slug())
                .with_attr("aria-pressed", entry.selected.to_string())
                .with_style(style);
            if entry.selected {
                button = button.with_child(Node::icon(Icon::CheckCircle).with_layout("w-4 h-4"));
            }
            button
        });

        let panel = Node::new(Tag::Div)
            .with_layout("absolute bottom-16 right-0 p-4 w-64 overflow-hidden")
            .with_style(compose([Some(
                Fragment::new()
                    .background(ColorToken::WHITE)
                    .border(BorderWidth::Hairline)
                    .border_color(slate(200))
                    .radius(CornerRadius::Xl2)
                    .shadow(Shadow::Xl2),
            )]))
            .with_entrance(
                Entrance {
                    y: 20.0,
                    ..Entrance::scale_in(0.9)
                }
                .on_mount()
                .with_exit(Pose {
                    y: 20.0,
                    scale: 0.9,
                    ..Pose::default()
                }),
            )
            .with_child(
                Node::new(Tag::Div)
                    .with_layout("text-xs uppercase tracking-widest mb-4 px-2 flex items-center gap-2")
                    .with_style(compose([Some(
                        Fragment::new().text(slate(400)).weight(FontWeight::Bold),
                    )]))
                    .with_child(Node::icon(Icon::Palette).with_layout("w-3 h-3"))
                    .with_child(Node::text(Tag::Span, "デザインパターン選択")),
            )
            .with_child(
                Node::new(Tag::Div)
                    .with_layout("grid grid-cols-1 gap-1 max-h-[60vh] overflow-y-auto pr-2")
                    .with_children(entries),
            );
        root = root.with_child(panel);
    }

    root.with_child(
        Node::new(Tag::Button)
            .with_layout("w-14 h-14 flex items-center justify-center hover:scale-110 transition-transform active:scale-95")
            .with_attr("aria-expanded", picker.is_open().to_string())
            .with_style(compose([Some(
                Fragment::new()
                    .background(slate(900))
                    .text(ColorToken::WHITE)
                    .radius(CornerRadius::Full)
                    .shadow(Shadow::Xl2),
            )]))
            .with_child(Node::icon(if picker.is_open() {
                Icon::X
            } else {
                Icon::Layers
            })),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use page_theme::{Paint, ThemeId};

    fn toggle_icon(node: &Node) -> Option<Icon> {
        node.children.last().and_then(|button| button.children.first()).and_then(|n| n.icon)
    }

    #[test]
    fn test_closed_picker_shows_only_button() {
        let picker = ThemePicker::default();
        let node = render(&picker);
        assert_eq!(node.children.len(), 1);
        assert_eq!(toggle_icon(&node), Some(Icon::Layers));
    }

    #[test]
    fn test_open_picker_lists_every_theme() {
        let mut picker = ThemePicker::default();
        picker.toggle();
        let node = render(&picker);

        assert_eq!(toggle_icon(&node), Some(Icon::X));
        let rows: Vec<&Node> = node
            .descendants()
            .filter(|n| n.attr("data-theme").is_some())
            .collect();
        assert_eq!(rows.len(), ThemeId::ALL.len());

        let panel = node.find(|n| n.entrance.is_some()).unwrap();
        let exit = panel.entrance.and_then(|e| e.exit).unwrap();
        assert_eq!((exit.y, exit.scale, exit.opacity), (20.0, 0.9, 0.0));
    }

    #[test]
    fn test_selected_row_is_highlighted() {
        let mut picker = ThemePicker::new(ThemeId::Luxury);
        picker.toggle();
        let node = render(&picker);

        let row = |slug: &str| {
            node.find(|n| n.attr("data-theme") == Some(slug))
                .unwrap()
                .clone()
        };
        let selected = row("luxury");
        assert_eq!(selected.style.background(), Some(Paint::Solid(slate(900))));
        assert_eq!(selected.children.len(), 1);

        let other = row("dark-pro");
        assert_eq!(other.style.background(), None);
        assert_eq!(other.style.text_color(), Some(slate(600)));
    }
}
