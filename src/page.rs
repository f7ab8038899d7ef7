//! Page aggregate: owns the surface and every coordinator, routes events.
//!
//! ARCHITECTURE
//! ============
//! The browser binding turns DOM events into [`PageEvent`]s and timer
//! expiries into [`Task`]s; this module is the only place either is routed.
//! Coordinators never call each other. Everything here is independent of
//! `web-sys` so the full event flow runs in host tests against a fake surface.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use crate::config::PageConfig;
use crate::dropdown::DropdownGroup;
use crate::image_cycler::ImageStyleCycler;
use crate::surface::{Surface, Task};
use crate::theme::{Theme, ThemeCoordinator};
use crate::typewriter::Typewriter;
use crate::watchers::Watchers;

/// A user or browser signal delivered by the binding layer.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent<E> {
    /// The window scrolled; `y` is the vertical scroll offset.
    Scroll { y: f64 },
    /// An in-page anchor link was clicked.
    AnchorClick { href: String },
    /// An observed fade-in element started intersecting the viewport.
    Reveal(E),
    CardHover { card: E, entered: bool },
    ThemeToggleClick,
    ImageClick,
    /// A dropdown toggle button was clicked.
    DropdownClick(E),
    MobileMenuClick,
    /// A CSS transition on the root finished.
    TransitionEnd { property: String },
    KeyDown { key: String },
    /// The window `load` event fired.
    Load,
}

/// What the binding layer should do with the originating DOM event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Response {
    #[default]
    Default,
    /// Call `preventDefault()` on the event.
    PreventDefault,
}

pub struct Page<S: Surface> {
    surface: S,
    config: PageConfig,
    theme: ThemeCoordinator<S::Element>,
    image: ImageStyleCycler<S::Element>,
    dropdowns: DropdownGroup<S::Element>,
    watchers: Watchers<S::Element>,
    typewriter: Typewriter<S::Element>,
}

impl<S: Surface> Page<S> {
    /// Resolve every element the coordinators need. Missing elements disable
    /// their feature; mounting itself cannot fail.
    pub fn mount(surface: S, config: PageConfig) -> Self {
        let theme = ThemeCoordinator::mount(&surface, &config.root_selector, &config.theme);
        let image = ImageStyleCycler::mount(&surface, &config.image);
        let dropdowns = DropdownGroup::mount(&surface, &config.dropdown);
        let watchers = Watchers::mount(&surface, &config);
        let typewriter = Typewriter::mount(&surface, &config.typewriter);
        Self { surface, config, theme, image, dropdowns, watchers, typewriter }
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[must_use]
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme.theme()
    }

    #[must_use]
    pub fn image(&self) -> &ImageStyleCycler<S::Element> {
        &self.image
    }

    #[must_use]
    pub fn dropdowns(&self) -> &DropdownGroup<S::Element> {
        &self.dropdowns
    }

    /// Route one event to the coordinator that handles it.
    pub fn handle(&mut self, event: PageEvent<S::Element>) -> Response {
        match event {
            PageEvent::Scroll { y } => self.watchers.scroll(&self.surface, y),
            PageEvent::AnchorClick { href } => {
                self.watchers.follow_anchor(&self.surface, &href);
                return Response::PreventDefault;
            }
            PageEvent::Reveal(element) => self.watchers.reveal(&self.surface, &element),
            PageEvent::CardHover { card, entered } => self.watchers.card_hover(&self.surface, &card, entered),
            PageEvent::ThemeToggleClick => {
                self.theme.toggle(&self.surface);
            }
            PageEvent::ImageClick => self.image.activate(&self.surface),
            PageEvent::DropdownClick(button) => {
                if let Some(panel_id) = self.dropdowns.target_of(&self.surface, &button) {
                    self.dropdowns.toggle(&self.surface, &panel_id);
                }
            }
            PageEvent::MobileMenuClick => self.watchers.toggle_mobile_menu(&self.surface),
            PageEvent::TransitionEnd { property } => {
                if self.watchers.is_theme_transition(&property) {
                    log::info!("theme transition completed");
                }
            }
            PageEvent::KeyDown { key } => return self.key_down(&key),
            PageEvent::Load => {
                self.watchers.load(&self.surface);
                self.typewriter.start(&self.surface);
            }
        }
        Response::Default
    }

    /// Run a task whose delay has elapsed.
    pub fn run_task(&mut self, task: Task) {
        match task {
            Task::AdvanceImageStyle => self.image.advance(&self.surface),
            Task::ReleaseImageStyle => self.image.release(&self.surface),
            Task::TypeNextChar => self.typewriter.type_next(&self.surface),
        }
    }

    fn key_down(&mut self, key: &str) -> Response {
        match key {
            "Escape" => {
                if self.dropdowns.any_open() {
                    self.dropdowns.close_all(&self.surface);
                }
                Response::Default
            }
            " " if self.theme.toggle_focused(&self.surface) => {
                self.theme.toggle(&self.surface);
                Response::PreventDefault
            }
            _ => Response::Default,
        }
    }
}
