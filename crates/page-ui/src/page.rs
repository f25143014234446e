//! The mounted landing page
//!
//! A [`Page`] owns every piece of interactive state and exposes one handler
//! per user interaction. [`Page::render`] re-derives the whole view from the
//! active theme on each call; nothing theme-dependent is cached between
//! renders.

use page_state::{
    MenuState, PickerVisibility, RevealConfig, RevealRegistry, ScrollConfig, ThemeObserver,
    ThemePicker, Viewport,
};
use page_theme::{ThemeId, TokenSlot};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::content::SiteContent;
use crate::motion::DEFAULT_STAGGER_MS;
use crate::picker;
use crate::sections::{render_sections, Navbar, RenderContext};
use crate::view::{Node, Tag};

/// Browser tab title
pub const DOCUMENT_TITLE: &str = "iroha Seed";

/// Page configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Theme active at mount
    pub default_theme: ThemeId,
    /// Navbar scroll classifier
    pub scroll: ScrollConfig,
    /// Reveal gates
    pub reveal: RevealConfig,
    /// Delay between staggered siblings
    pub stagger_ms: u64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            default_theme: ThemeId::default(),
            scroll: ScrollConfig::default(),
            reveal: RevealConfig::default(),
            stagger_ms: DEFAULT_STAGGER_MS,
        }
    }
}

/// Mounted landing page
#[derive(Debug)]
pub struct Page {
    config: PageConfig,
    content: SiteContent,
    picker: ThemePicker,
    theme: ThemeObserver,
    navbar: Navbar,
    reveals: RevealRegistry,
}

impl Page {
    /// Mount with the default configuration and copy
    pub fn mount(viewport: &Viewport) -> Self {
        Self::mount_with(viewport, PageConfig::default(), SiteContent::default())
    }

    /// Mount with explicit configuration and copy
    ///
    /// Subscribes the navbar to scroll events and creates one reveal gate
    /// per gated element, each observing `viewport`.
    pub fn mount_with(viewport: &Viewport, config: PageConfig, content: SiteContent) -> Self {
        let picker = ThemePicker::new(config.default_theme);
        let theme = picker.observe();

        let mut navbar = Navbar::new(&config.scroll);
        navbar.mount(viewport);

        let mut page = Self {
            config,
            content,
            picker,
            theme,
            navbar,
            reveals: RevealRegistry::new(config.reveal),
        };

        let keys: Vec<String> = page
            .render()
            .reveal_keys()
            .into_iter()
            .map(str::to_string)
            .collect();
        for key in &keys {
            page.reveals.ensure(key);
        }
        page.reveals.observe_all(viewport);

        info!(
            theme = %page.active_theme(),
            gates = keys.len(),
            "page mounted"
        );
        page
    }

    /// Configuration the page was mounted with
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// Page copy
    pub fn content(&self) -> &SiteContent {
        &self.content
    }

    /// Browser tab title
    pub fn title(&self) -> &'static str {
        DOCUMENT_TITLE
    }

    /// Active theme
    pub fn active_theme(&self) -> ThemeId {
        self.theme.current()
    }

    /// Read handle on the active theme
    pub fn observe_theme(&self) -> ThemeObserver {
        self.picker.observe()
    }

    /// Theme picker state
    pub fn picker(&self) -> &ThemePicker {
        &self.picker
    }

    /// Whether the navbar is in its scrolled style
    pub fn is_scrolled(&self) -> bool {
        self.navbar.is_scrolled()
    }

    /// Whether the mobile menu is expanded
    pub fn is_menu_open(&self) -> bool {
        self.navbar.is_menu_open()
    }

    /// Whether the element with `key` has been revealed
    pub fn is_revealed(&self, key: &str) -> bool {
        self.reveals.is_revealed(key)
    }

    /// Reveal gates on the page
    pub fn reveals(&self) -> &RevealRegistry {
        &self.reveals
    }

    // =========================================================================
    // Handlers
    // =========================================================================

    /// Picker button
    pub fn toggle_picker(&mut self) -> PickerVisibility {
        self.picker.toggle()
    }

    /// Picker entry
    pub fn select_theme(&mut self, theme: ThemeId) -> page_state::Result<ThemeId> {
        self.picker.select(theme)
    }

    /// Mobile menu button
    pub fn toggle_menu(&mut self) -> MenuState {
        self.navbar.toggle_menu()
    }

    /// Navigation link or CTA
    pub fn follow_nav_link<'a>(&mut self, href: &'a str) -> &'a str {
        self.navbar.follow_link(href)
    }

    /// Release every viewport subscription
    pub fn unmount(&mut self) {
        self.navbar.unmount();
        self.reveals.release_all();
        debug!("page unmounted");
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Render the full page for the current state
    pub fn render(&self) -> Node {
        let id = self.theme.current();
        let theme = page_theme::lookup(id);
        let ctx = RenderContext::new(theme, &self.content, &self.reveals, self.config.stagger_ms);

        Node::new(Tag::Page)
            .with_attr("title", DOCUMENT_TITLE)
            .with_attr("data-theme", id.slug())
            .with_layout("min-h-screen selection:bg-slate-900 selection:text-white")
            .with_style(ctx.tokens(&[
                TokenSlot::Background,
                TokenSlot::ForegroundText,
                TokenSlot::Typography,
            ]))
            .with_child(self.navbar.render(&ctx))
            .with_children(render_sections(&ctx))
            .with_child(picker::render(&self.picker))
    }
}
