//! Thin scroll, intersection, hover and menu reactions.
//!
//! None of these carry state beyond the elements resolved at mount; each
//! maps one signal to one class or style change.

#[cfg(test)]
#[path = "watchers_test.rs"]
mod watchers_test;

use crate::config::PageConfig;
use crate::surface::Surface;

/// Transition property whose completion marks the end of a theme fade.
pub const THEME_TRANSITION_PROPERTY: &str = "background-color";

pub struct Watchers<E> {
    root: Option<E>,
    navbar: Option<E>,
    mobile_menu: Option<E>,
    nav_links: Option<E>,
    reveal_selector: String,
    visible_class: String,
    loaded_class: String,
    scrolled_class: String,
    navbar_threshold_px: f64,
    hover_transform: String,
    rest_transform: String,
    menu_active_class: String,
}

impl<E: Clone + PartialEq> Watchers<E> {
    pub fn mount<S>(surface: &S, config: &PageConfig) -> Self
    where
        S: Surface<Element = E>,
    {
        let navbar = surface.find(&config.navbar.selector);
        if navbar.is_none() {
            log::debug!("watchers: no navbar at {}", config.navbar.selector);
        }
        Self {
            root: surface.find(&config.root_selector),
            navbar,
            mobile_menu: surface.find(&config.mobile_menu.toggle_selector),
            nav_links: surface.find(&config.mobile_menu.links_selector),
            reveal_selector: config.reveal.selector.clone(),
            visible_class: config.reveal.visible_class.clone(),
            loaded_class: config.reveal.loaded_class.clone(),
            scrolled_class: config.navbar.scrolled_class.clone(),
            navbar_threshold_px: config.navbar.threshold_px,
            hover_transform: config.cards.hover_transform.clone(),
            rest_transform: config.cards.rest_transform.clone(),
            menu_active_class: config.mobile_menu.active_class.clone(),
        }
    }

    /// Mark the navbar scrolled once the page moves past the threshold.
    pub fn scroll<S>(&self, surface: &S, scroll_y: f64)
    where
        S: Surface<Element = E>,
    {
        let Some(navbar) = &self.navbar else {
            return;
        };
        if scroll_y > self.navbar_threshold_px {
            surface.add_class(navbar, &self.scrolled_class);
        } else {
            surface.remove_class(navbar, &self.scrolled_class);
        }
    }

    /// Smooth-scroll to the in-page target named by `href`, if it exists.
    pub fn follow_anchor<S>(&self, surface: &S, href: &str)
    where
        S: Surface<Element = E>,
    {
        match surface.find(href) {
            Some(target) => surface.scroll_into_view(&target),
            None => log::debug!("watchers: anchor target {href} not found"),
        }
    }

    /// An observed element entered the viewport.
    pub fn reveal<S>(&self, surface: &S, element: &E)
    where
        S: Surface<Element = E>,
    {
        surface.add_class(element, &self.visible_class);
    }

    /// Mark the page loaded and reveal elements already on screen.
    pub fn load<S>(&self, surface: &S)
    where
        S: Surface<Element = E>,
    {
        if let Some(root) = &self.root {
            surface.add_class(root, &self.loaded_class);
        }
        let viewport_height = surface.viewport_height();
        for element in surface.find_all(&self.reveal_selector) {
            if surface.bounding_rect(&element).intersects_viewport(viewport_height) {
                surface.add_class(&element, &self.visible_class);
            }
        }
    }

    pub fn card_hover<S>(&self, surface: &S, card: &E, entered: bool)
    where
        S: Surface<Element = E>,
    {
        let transform = if entered { &self.hover_transform } else { &self.rest_transform };
        surface.set_style(card, "transform", transform);
    }

    /// Open or close the collapsed navigation on small screens.
    pub fn toggle_mobile_menu<S>(&self, surface: &S)
    where
        S: Surface<Element = E>,
    {
        let Some(menu) = &self.mobile_menu else {
            return;
        };
        if let Some(links) = &self.nav_links {
            surface.toggle_class(links, &self.menu_active_class);
        }
        surface.toggle_class(menu, &self.menu_active_class);
    }

    /// Whether a finished root transition is the theme colour fade.
    #[must_use]
    pub fn is_theme_transition(&self, property: &str) -> bool {
        property == THEME_TRANSITION_PROPERTY
    }
}
