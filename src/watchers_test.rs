use super::*;
use crate::fake_surface::FakeSurface;
use crate::surface::Rect;

fn mount(surface: &FakeSurface) -> Watchers<usize> {
    Watchers::mount(surface, &PageConfig::default())
}

// =============================================================
// Navbar
// =============================================================

#[test]
fn navbar_scrolled_only_past_threshold() {
    let surface = FakeSurface::new();
    let navbar = surface.add_with_id("navbar");
    let watchers = mount(&surface);

    watchers.scroll(&surface, 100.0);
    assert!(!surface.has_class(&navbar, "scrolled"));
    watchers.scroll(&surface, 100.5);
    assert!(surface.has_class(&navbar, "scrolled"));
    watchers.scroll(&surface, 0.0);
    assert!(!surface.has_class(&navbar, "scrolled"));
}

#[test]
fn scroll_without_navbar_is_noop() {
    let surface = FakeSurface::new();
    let watchers = mount(&surface);
    watchers.scroll(&surface, 500.0);
}

// =============================================================
// Anchors
// =============================================================

#[test]
fn follow_anchor_scrolls_to_existing_target() {
    let surface = FakeSurface::new();
    let about = surface.add_with_id("about");
    let watchers = mount(&surface);
    watchers.follow_anchor(&surface, "#about");
    assert_eq!(surface.scrolled_to(), vec![about]);
}

#[test]
fn follow_anchor_ignores_missing_target() {
    let surface = FakeSurface::new();
    let watchers = mount(&surface);
    watchers.follow_anchor(&surface, "#nowhere");
    watchers.follow_anchor(&surface, "#");
    assert!(surface.scrolled_to().is_empty());
}

// =============================================================
// Reveal
// =============================================================

#[test]
fn reveal_marks_element_visible() {
    let surface = FakeSurface::new();
    let section = surface.add_with_class("fade-in");
    let watchers = mount(&surface);
    watchers.reveal(&surface, &section);
    assert!(surface.has_class(&section, "visible"));
}

#[test]
fn load_marks_root_and_reveals_on_screen_elements_only() {
    let surface = FakeSurface::new();
    surface.set_viewport_height(800.0);
    let body = surface.add("body");
    let on_screen = surface.add_with_class("fade-in");
    surface.set_rect(on_screen, 100.0, 400.0);
    let below = surface.add_with_class("fade-in");
    surface.set_rect(below, 800.0, 1200.0);
    let above = surface.add_with_class("fade-in");
    surface.set_rect(above, -300.0, 0.0);
    let straddling = surface.add_with_class("fade-in");
    surface.set_rect(straddling, -50.0, 20.0);

    mount(&surface).load(&surface);

    assert!(surface.has_class(&body, "loaded"));
    assert!(surface.has_class(&on_screen, "visible"));
    assert!(!surface.has_class(&below, "visible"));
    assert!(!surface.has_class(&above, "visible"));
    assert!(surface.has_class(&straddling, "visible"));
}

// =============================================================
// Cards, mobile menu, transitions
// =============================================================

#[test]
fn card_hover_lifts_and_rests() {
    let surface = FakeSurface::new();
    let card = surface.add_with_class("project-card");
    let watchers = mount(&surface);

    watchers.card_hover(&surface, &card, true);
    assert_eq!(surface.style(card, "transform").as_deref(), Some("translateY(-10px) scale(1.02)"));
    watchers.card_hover(&surface, &card, false);
    assert_eq!(surface.style(card, "transform").as_deref(), Some("translateY(-10px) scale(1)"));
}

#[test]
fn mobile_menu_toggles_menu_and_links_together() {
    let surface = FakeSurface::new();
    let menu = surface.add_with_class("mobile-menu");
    let links = surface.add_with_class("nav-links");
    let watchers = mount(&surface);

    watchers.toggle_mobile_menu(&surface);
    assert!(surface.has_class(&menu, "active"));
    assert!(surface.has_class(&links, "active"));
    watchers.toggle_mobile_menu(&surface);
    assert!(!surface.has_class(&menu, "active"));
    assert!(!surface.has_class(&links, "active"));
}

#[test]
fn mobile_menu_without_links_still_toggles_menu() {
    let surface = FakeSurface::new();
    let menu = surface.add_with_class("mobile-menu");
    let watchers = mount(&surface);
    watchers.toggle_mobile_menu(&surface);
    assert_eq!(surface.classes(menu), ["active", "mobile-menu"]);
}

#[test]
fn theme_transition_is_background_fade() {
    let surface = FakeSurface::new();
    let watchers = mount(&surface);
    assert!(watchers.is_theme_transition("background-color"));
    assert!(!watchers.is_theme_transition("opacity"));
}

#[test]
fn rect_viewport_intersection_is_strict() {
    assert!(Rect { top: 0.0, bottom: 1.0 }.intersects_viewport(10.0));
    assert!(!Rect { top: 10.0, bottom: 20.0 }.intersects_viewport(10.0));
    assert!(!Rect { top: -5.0, bottom: 0.0 }.intersects_viewport(10.0));
}
