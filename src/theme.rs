//! Light/dark theme toggle.
//!
//! The theme always starts light and is never persisted: every reload
//! resets it. The toggle control shows the glyph of the theme a click
//! switches *to* ("☀️" while dark, "🌙" while light).

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;

use crate::config::ThemeConfig;
use crate::surface::Surface;

pub const SUN_GLYPH: &str = "☀️";
pub const MOON_GLYPH: &str = "🌙";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Glyph shown on the toggle control while this theme is active.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Light => MOON_GLYPH,
            Self::Dark => SUN_GLYPH,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => f.write_str("light"),
            Self::Dark => f.write_str("dark"),
        }
    }
}

/// Owns the theme flag and keeps the root class and toggle glyph in sync.
pub struct ThemeCoordinator<E> {
    theme: Theme,
    root: Option<E>,
    toggle: Option<E>,
    dark_class: String,
}

impl<E: Clone + PartialEq> ThemeCoordinator<E> {
    /// Bind to the root container and toggle control found on `surface`.
    pub fn mount<S>(surface: &S, root_selector: &str, config: &ThemeConfig) -> Self
    where
        S: Surface<Element = E>,
    {
        let root = surface.find(root_selector);
        let toggle = surface.find(&config.toggle_selector);
        if toggle.is_none() {
            log::debug!("theme: no toggle control at {}", config.toggle_selector);
        }
        Self { theme: Theme::Light, root, toggle, dark_class: config.dark_class.clone() }
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Whether the bound toggle control currently has keyboard focus.
    pub fn toggle_focused<S>(&self, surface: &S) -> bool
    where
        S: Surface<Element = E>,
    {
        self.toggle.as_ref().is_some_and(|toggle| surface.is_focused(toggle))
    }

    /// Flip the theme and update the root class and toggle glyph.
    pub fn toggle<S>(&mut self, surface: &S) -> Theme
    where
        S: Surface<Element = E>,
    {
        self.theme = self.theme.toggled();
        if let Some(root) = &self.root {
            match self.theme {
                Theme::Dark => surface.add_class(root, &self.dark_class),
                Theme::Light => surface.remove_class(root, &self.dark_class),
            }
        }
        if let Some(toggle) = &self.toggle {
            surface.set_text(toggle, self.theme.glyph());
        }
        log::debug!("theme: switched to {}", self.theme);
        self.theme
    }
}
