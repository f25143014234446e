//! Fixed navigation bar
//!
//! The only section with local state: it owns the scroll classifier and the
//! mobile menu toggle. While scrolled it switches to an opaque light bar
//! with black text whatever the theme; at the top it is transparent and
//! follows the theme's foreground color.

use page_state::{MenuState, MobileNavToggle, ScrollClassifier, ScrollConfig, Viewport};
use page_theme::{
    Blur, BorderWidth, ClassComposer, ColorToken, Fragment, Hue, Shadow, StyleDescriptor, TokenSlot,
};

use super::RenderContext;
use crate::motion::{Entrance, Pose};
use crate::view::{Icon, Node, Tag};

/// Scrolled bar surface
fn scrolled_surface() -> Fragment {
    Fragment::new()
        .background(ColorToken::WHITE.alpha(90))
        .backdrop(Blur::Md)
        .shadow(Shadow::Sm)
        .border(BorderWidth::Hairline)
        .border_color(ColorToken::palette(Hue::Slate, 200))
}

/// White text on the theme accent
fn accent_button(ctx: &RenderContext<'_>) -> ClassComposer {
    ctx.composer(&[])
        .fragment(Fragment::new().text(ColorToken::WHITE))
        .tokens(ctx.theme, &[TokenSlot::AccentFill, TokenSlot::CornerRadius])
}

/// Navigation bar state
#[derive(Debug)]
pub struct Navbar {
    scroll: ScrollClassifier,
    menu: MobileNavToggle,
}

impl Navbar {
    /// Create an unmounted bar
    pub fn new(config: &ScrollConfig) -> Self {
        Self {
            scroll: ScrollClassifier::new(config),
            menu: MobileNavToggle::new(),
        }
    }

    /// Start following the viewport's scroll offset
    pub fn mount(&mut self, viewport: &Viewport) {
        self.scroll.mount(viewport);
    }

    /// Stop following the viewport
    pub fn unmount(&mut self) {
        self.scroll.unmount();
    }

    /// Whether the page is past the scroll threshold
    pub fn is_scrolled(&self) -> bool {
        self.scroll.is_scrolled()
    }

    /// Whether the mobile menu is expanded
    pub fn is_menu_open(&self) -> bool {
        self.menu.is_open()
    }

    /// Menu button handler
    pub fn toggle_menu(&mut self) -> MenuState {
        self.menu.toggle()
    }

    /// Link or CTA handler; closes the mobile menu
    pub fn follow_link<'a>(&mut self, href: &'a str) -> &'a str {
        self.menu.follow_link(href)
    }

    /// Text style that follows the scroll override
    fn text_style(&self, ctx: &RenderContext<'_>) -> StyleDescriptor {
        ctx.composer(&[TokenSlot::ForegroundText])
            .when(self.is_scrolled(), Fragment::new().text(ColorToken::BLACK))
            .compose()
    }

    /// Render the bar
    pub fn render(&self, ctx: &RenderContext<'_>) -> Node {
        let content = ctx.content;
        let scrolled = self.is_scrolled();

        let brand = Node::new(Tag::Div)
            .with_layout("flex items-center gap-3")
            .with_child(
                Node::image(content.brand.logo_url.clone(), content.brand.logo_alt.clone())
                    .with_layout("w-10 h-10 object-contain"),
            )
            .with_child(
                Node::new(Tag::Div)
                    .with_layout("flex flex-col")
                    .with_child(
                        Node::text(Tag::Span, content.brand.name.clone())
                            .with_layout("text-xl font-black tracking-tighter leading-none")
                            .with_style(self.text_style(ctx)),
                    )
                    .with_child(
                        Node::text(Tag::Span, content.brand.byline.clone())
                            .with_layout("text-[10px] font-bold opacity-50 tracking-widest")
                            .with_style(self.text_style(ctx)),
                    ),
            );

        let links = Node::new(Tag::Div)
            .with_layout("hidden md:flex items-center gap-10 text-sm font-bold uppercase tracking-widest")
            .with_style(self.text_style(ctx))
            .with_children(content.nav_links.iter().map(|link| {
                Node::link(link.href.clone(), link.label.clone())
                    .with_layout("hover:opacity-50 transition-opacity")
            }))
            .with_child(
                Node::link(content.nav_cta.href.clone(), content.nav_cta.label.clone())
                    .with_layout("px-8 py-3 transition-transform hover:scale-105")
                    .with_style(
                        accent_button(ctx)
                            .fragment(Fragment::new().shadow(Shadow::Lg))
                            .compose(),
                    ),
            );

        let menu_button = Node::new(Tag::Button)
            .with_layout("md:hidden p-2")
            .with_style(self.text_style(ctx))
            .with_attr("aria-expanded", self.is_menu_open().to_string())
            .with_child(Node::icon(if self.is_menu_open() {
                Icon::X
            } else {
                Icon::Menu
            }));

        let mut nav = Node::new(Tag::Nav)
            .with_layout("fixed top-0 left-0 right-0 z-50 transition-all duration-500 px-6 md:px-12 py-4 md:py-6 flex justify-between items-center")
            .with_style(
                ctx.composer(&[])
                    .when_else(scrolled, scrolled_surface(), Fragment::new().transparent())
                    .compose(),
            )
            .with_child(brand)
            .with_child(links)
            .with_child(menu_button);

        if self.is_menu_open() {
            let menu = Node::new(Tag::Div)
                .with_layout("absolute top-full left-0 right-0 p-6 flex flex-col gap-6 md:hidden")
                .with_style(
                    ctx.composer(&[])
                        .fragment(
                            Fragment::new()
                                .background(ColorToken::WHITE)
                                .border(BorderWidth::Hairline)
                                .border_color(ColorToken::palette(Hue::Slate, 200))
                                .shadow(Shadow::Xl),
                        )
                        .compose(),
                )
                .with_entrance(
                    Entrance::fade_up(-20.0)
                        .on_mount()
                        .with_exit(Pose {
                            y: -20.0,
                            ..Pose::default()
                        }),
                )
                .with_children(content.nav_links.iter().map(|link| {
                    Node::link(link.href.clone(), link.label.clone())
                        .with_layout("text-lg font-bold")
                        .with_style(
                            ctx.composer(&[])
                                .fragment(Fragment::new().text(ColorToken::BLACK))
                                .compose(),
                        )
                }))
                .with_child(
                    Node::link(content.nav_cta.href.clone(), content.nav_cta.label.clone())
                        .with_layout("px-8 py-4 text-center font-bold")
                        .with_style(accent_button(ctx).compose()),
                );
            nav = nav.with_child(menu);
        }

        nav
    }
}
