//! Page Integration Tests
//!
//! End-to-end checks of the theme catalog, the interactive state machines and
//! the rendered page.

use iroha_seed::page_state::{
    MenuState, PickerVisibility, RevealConfig, RevealGate, RevealState, ScrollClassifier,
    ScrollConfig, ThemePicker, Viewport,
};
use iroha_seed::page_theme::{
    all, audit, compose, lookup, ClassComposer, ColorToken, Fragment, Paint, ThemeId, TokenSlot,
};
use iroha_seed::page_ui::{Node, Tag};
use iroha_seed::{mount, StateError};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn nav(root: &Node) -> &Node {
    root.find(|n| n.tag == Tag::Nav).unwrap()
}

// =============================================================================
// Catalog
// =============================================================================

/// Every identifier resolves to a fully populated bundle
#[test]
fn test_lookup_is_total() {
    init_tracing();

    for id in ThemeId::ALL {
        let bundle = lookup(id);
        assert!(!bundle.display_name.is_empty(), "{id} has no display name");
        for slot in TokenSlot::ALL {
            assert!(
                !bundle.fragment(slot).is_empty(),
                "{id} leaves {slot:?} empty"
            );
        }
    }
    assert_eq!(all().count(), 10);
}

/// Accent fill and accent text share a hue family in every bundle
#[test]
fn test_accent_pairing_holds() {
    init_tracing();

    for (id, bundle) in all() {
        assert!(
            bundle.accent_fill.same_family(&bundle.accent_text),
            "{id}: {:?} vs {:?}",
            bundle.accent_fill.hue,
            bundle.accent_text.hue
        );
    }
    assert!(audit().is_empty());
}

#[test]
fn test_slugs_round_trip_through_from_str() {
    for id in ThemeId::ALL {
        assert_eq!(id.slug().parse::<ThemeId>(), Ok(id));
    }
    assert!("sepia".parse::<ThemeId>().is_err());
}

// =============================================================================
// Composer
// =============================================================================

#[test]
fn test_composer_is_deterministic() {
    for (_, bundle) in all() {
        let build = || {
            ClassComposer::new()
                .tokens(bundle, &[TokenSlot::CardSurface, TokenSlot::Border])
                .when(true, Fragment::new().text(ColorToken::BLACK))
                .token(bundle, TokenSlot::CornerRadius)
                .compose()
        };
        assert_eq!(build(), build());
        assert_eq!(build().class_string(), build().class_string());
    }
}

#[test]
fn test_composer_reorder_changes_winner() {
    let theme = lookup(ThemeId::DarkPro);
    let default_text = theme.fragment(TokenSlot::ForegroundText);
    let override_text = Fragment::new().text(ColorToken::BLACK);

    let forward = compose([Some(default_text.clone()), Some(override_text.clone())]);
    let reversed = compose([Some(override_text), Some(default_text)]);

    assert_eq!(forward.text_color(), Some(ColorToken::BLACK));
    assert_eq!(reversed.text_color(), Some(theme.foreground_text));
}

/// Scenario D: the scrolled override listed after the theme default wins
#[test]
fn test_scenario_d_scrolled_override_wins() {
    for (_, bundle) in all() {
        let scrolled = true;
        let style = ClassComposer::new()
            .token(bundle, TokenSlot::ForegroundText)
            .when(scrolled, Fragment::new().text(ColorToken::BLACK))
            .compose();
        assert_eq!(style.text_color(), Some(ColorToken::BLACK));

        let at_top = ClassComposer::new()
            .token(bundle, TokenSlot::ForegroundText)
            .when(!scrolled, Fragment::new().text(ColorToken::BLACK))
            .compose();
        assert_eq!(at_top.text_color(), Some(bundle.foreground_text));
    }
}

// =============================================================================
// Theme Picker
// =============================================================================

/// Scenario A: open the picker and pick a non-default theme
#[test]
fn test_scenario_a_select_theme() {
    init_tracing();
    let viewport = Viewport::new();
    let mut page = mount(&viewport);

    assert_eq!(page.active_theme(), ThemeId::ModernKyoto);
    assert!(!page.picker().is_open());

    assert_eq!(page.toggle_picker(), PickerVisibility::Open);
    assert_eq!(page.select_theme(ThemeId::Luxury), Ok(ThemeId::Luxury));

    assert_eq!(page.active_theme(), ThemeId::Luxury);
    assert!(!page.picker().is_open());
}

/// Picking any theme from any starting theme always closes the picker
#[test]
fn test_picker_exclusivity() {
    for from in ThemeId::ALL {
        for to in ThemeId::ALL {
            let mut picker = ThemePicker::new(from);
            picker.toggle();
            picker.select(to).unwrap();
            assert_eq!(picker.visibility(), PickerVisibility::Closed);
            assert_eq!(picker.active(), to);
        }
    }
}

#[test]
fn test_select_while_closed_changes_nothing() {
    let mut picker = ThemePicker::new(ThemeId::Utility);
    assert_eq!(
        picker.select(ThemeId::Immersive),
        Err(StateError::PickerClosed {
            requested: ThemeId::Immersive
        })
    );
    assert_eq!(picker.active(), ThemeId::Utility);
    assert!(!picker.is_open());
}

#[tokio::test]
async fn test_observer_is_notified_of_selection() {
    let mut picker = ThemePicker::default();
    let mut observer = picker.observe();

    picker.toggle();
    picker.select(ThemeId::Editorial).unwrap();

    assert_eq!(observer.changed().await, Some(ThemeId::Editorial));
    assert_eq!(observer.bundle(), lookup(ThemeId::Editorial));

    drop(picker);
    assert_eq!(observer.changed().await, None);
}

#[test]
fn test_every_section_follows_the_active_theme() {
    let viewport = Viewport::new();
    let mut page = mount(&viewport);

    for id in ThemeId::ALL {
        page.toggle_picker();
        page.select_theme(id).unwrap();

        let root = page.render();
        let bundle = lookup(id);
        assert_eq!(root.attr("data-theme"), Some(id.slug()));
        assert_eq!(root.style.background(), Some(Paint::Solid(bundle.background)));

        let footer = root.find(|n| n.tag == Tag::Footer).unwrap();
        assert_eq!(
            footer.style.background(),
            Some(Paint::Solid(bundle.footer_surface.color))
        );
        let contact = root.find_by_id("contact").unwrap();
        assert_eq!(
            contact.style.background(),
            Some(Paint::Solid(bundle.accent_fill))
        );
    }
}

// =============================================================================
// Scroll Classifier
// =============================================================================

/// Scenario B: classification is re-evaluated on every scroll event
#[test]
fn test_scenario_b_scroll_is_not_sticky() {
    init_tracing();
    let viewport = Viewport::new();
    let page = mount(&viewport);

    viewport.scroll_to(0.0);
    assert!(!page.is_scrolled());
    viewport.scroll_to(80.0);
    assert!(page.is_scrolled());
    viewport.scroll_to(10.0);
    assert!(!page.is_scrolled());
}

#[test]
fn test_threshold_is_strict() {
    let viewport = Viewport::new();
    let mut classifier = ScrollClassifier::new(&ScrollConfig::default());
    classifier.mount(&viewport);

    viewport.scroll_to(50.0);
    assert!(!classifier.is_scrolled());
    viewport.scroll_to(50.5);
    assert!(classifier.is_scrolled());
}

#[test]
fn test_navbar_switches_to_fixed_contrast() {
    let viewport = Viewport::new();
    let mut page = mount(&viewport);
    page.toggle_picker();
    page.select_theme(ThemeId::Immersive).unwrap();

    let top = page.render();
    assert_eq!(nav(&top).style.background(), Some(Paint::Transparent));

    viewport.scroll_to(200.0);
    let scrolled = page.render();
    assert_eq!(
        nav(&scrolled).style.background(),
        Some(Paint::Solid(ColorToken::WHITE.alpha(90)))
    );
}

// =============================================================================
// Reveal Gates
// =============================================================================

#[test]
fn test_reveal_is_monotonic() {
    let viewport = Viewport::new();
    let mut gate = RevealGate::new("block", RevealConfig::default());
    gate.observe(&viewport);

    for ratio in [0.0, 0.4, 0.0, 1.0, 0.0] {
        viewport.intersect("block", ratio);
        if ratio > 0.0 {
            break;
        }
    }
    assert_eq!(gate.state(), RevealState::Revealed);

    for ratio in [0.0, 0.0, 0.7, 0.0] {
        gate.report(ratio);
        viewport.intersect("block", ratio);
        assert_eq!(gate.state(), RevealState::Revealed);
    }
}

#[test]
fn test_page_reveals_each_block_once() {
    let viewport = Viewport::new();
    let page = mount(&viewport);
    let gates = page.reveals().len();
    assert!(gates > 0);

    viewport.intersect("services.header", 0.2);
    viewport.intersect("services.header", 0.0);
    assert!(page.is_revealed("services.header"));
    assert!(!page.is_revealed("strengths.header"));
    assert_eq!(page.reveals().revealed_count(), 1);
    assert_eq!(viewport.intersection_listener_count(), gates - 1);
}

// =============================================================================
// Mobile Navigation
// =============================================================================

/// Scenario C: open the menu, then follow a link
#[test]
fn test_scenario_c_link_closes_menu() {
    init_tracing();
    let viewport = Viewport::new();
    let mut page = mount(&viewport);

    assert!(!page.is_menu_open());
    assert_eq!(page.toggle_menu(), MenuState::Open);
    assert!(page.is_menu_open());

    assert_eq!(page.follow_nav_link("#services"), "#services");
    assert!(!page.is_menu_open());
}

// =============================================================================
// Lifecycle
// =============================================================================

#[test]
fn test_unmount_leaves_no_listeners() {
    let viewport = Viewport::new();
    let mut page = mount(&viewport);
    assert_eq!(viewport.scroll_listener_count(), 1);

    page.unmount();
    assert_eq!(viewport.scroll_listener_count(), 0);
    assert_eq!(viewport.intersection_listener_count(), 0);

    viewport.scroll_to(400.0);
    assert!(!page.is_scrolled());
}

#[test]
fn test_render_serializes() {
    let viewport = Viewport::new();
    let page = mount(&viewport);

    let json = serde_json::to_value(page.render()).unwrap();
    assert_eq!(json["tag"], "page");
    assert_eq!(json["attrs"]["title"], "iroha Seed");
    assert_eq!(json["attrs"]["data-theme"], "modern-kyoto");
    assert!(json["children"].as_array().unwrap().len() >= 12);
}
