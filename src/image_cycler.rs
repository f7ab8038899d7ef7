//! Profile image style cycler.
//!
//! DESIGN
//! ======
//! Each activation is a two-phase task: the transient active class goes on
//! immediately, the next preset is applied after the advance delay, and the
//! class comes off after a further release delay. The phases run as
//! scheduled [`Task`]s so the entry and exit CSS animations get time to play.
//!
//! TRADE-OFFS
//! ==========
//! Activations are not serialized. Clicking again while a swap is in flight
//! schedules another pair of tasks that interleave with the first; each
//! advance still moves the index by one and the last style write wins. An
//! early release task may drop the active class while a later swap is still
//! pending. Pending tasks are never cancelled.

#[cfg(test)]
#[path = "image_cycler_test.rs"]
mod image_cycler_test;

use serde::Deserialize;

use crate::config::ImageConfig;
use crate::surface::{Surface, Task};

/// A named filter/transform pair applied to the image together.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StylePreset {
    pub name: String,
    pub filter: String,
    pub transform: String,
}

impl StylePreset {
    fn new(name: &str, filter: &str, transform: &str) -> Self {
        Self { name: name.into(), filter: filter.into(), transform: transform.into() }
    }
}

/// The six stock presets, starting with the unfiltered original.
#[must_use]
pub fn default_presets() -> Vec<StylePreset> {
    vec![
        StylePreset::new("original", "brightness(1)", "scale(1) rotate(0deg)"),
        StylePreset::new("sepia", "sepia(100%) hue-rotate(45deg) saturate(200%)", "scale(1.05) rotate(5deg)"),
        StylePreset::new("grayscale", "grayscale(100%) contrast(120%)", "scale(1.1) rotate(-5deg)"),
        StylePreset::new("color-shift", "hue-rotate(180deg) saturate(150%)", "scale(1.05) rotate(10deg)"),
        StylePreset::new("dreamy", "blur(2px) brightness(1.2)", "scale(1.1) rotate(-10deg)"),
        StylePreset::new("high-contrast", "contrast(150%) brightness(1.1)", "scale(1.05) rotate(3deg)"),
    ]
}

pub struct ImageStyleCycler<E> {
    target: Option<E>,
    presets: Vec<StylePreset>,
    index: usize,
    active_class: String,
    advance_delay_ms: u32,
    release_delay_ms: u32,
}

impl<E: Clone + PartialEq> ImageStyleCycler<E> {
    pub fn mount<S>(surface: &S, config: &ImageConfig) -> Self
    where
        S: Surface<Element = E>,
    {
        let target = surface.find(&config.selector);
        if target.is_none() {
            log::debug!("image cycler: no target at {}", config.selector);
        }
        Self {
            target,
            presets: config.presets.clone(),
            index: 0,
            active_class: config.active_class.clone(),
            advance_delay_ms: config.advance_delay_ms,
            release_delay_ms: config.release_delay_ms,
        }
    }

    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.target.is_some()
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The preset the index currently points at.
    #[must_use]
    pub fn current(&self) -> Option<&StylePreset> {
        self.presets.get(self.index)
    }

    /// Start a swap: mark the image active and schedule the advance phase.
    pub fn activate<S>(&self, surface: &S)
    where
        S: Surface<Element = E>,
    {
        let Some(target) = &self.target else {
            return;
        };
        surface.add_class(target, &self.active_class);
        surface.schedule(self.advance_delay_ms, Task::AdvanceImageStyle);
    }

    /// Phase 1: move to the next preset, apply it, schedule the release phase.
    pub fn advance<S>(&mut self, surface: &S)
    where
        S: Surface<Element = E>,
    {
        let Some(target) = &self.target else {
            return;
        };
        if self.presets.is_empty() {
            return;
        }
        self.index = (self.index + 1) % self.presets.len();
        let preset = &self.presets[self.index];
        surface.set_style(target, "filter", &preset.filter);
        surface.set_style(target, "transform", &preset.transform);
        log::debug!("image cycler: applied preset {} ({})", self.index, preset.name);
        surface.schedule(self.release_delay_ms, Task::ReleaseImageStyle);
    }

    /// Phase 2: drop the transient active class.
    pub fn release<S>(&self, surface: &S)
    where
        S: Surface<Element = E>,
    {
        if let Some(target) = &self.target {
            surface.remove_class(target, &self.active_class);
        }
    }
}
