//! Optional typing effect for the hero heading.
//!
//! Off unless `typewriter.enabled` is set in the page config. When started
//! it clears the heading and types the original text back one character
//! per tick.

#[cfg(test)]
#[path = "typewriter_test.rs"]
mod typewriter_test;

use crate::config::TypewriterConfig;
use crate::surface::{Surface, Task};

pub struct Typewriter<E> {
    target: Option<E>,
    chars: Vec<char>,
    typed: usize,
    speed_ms: u32,
}

impl<E: Clone + PartialEq> Typewriter<E> {
    /// Bind to the heading. A disabled config binds nothing.
    pub fn mount<S>(surface: &S, config: &TypewriterConfig) -> Self
    where
        S: Surface<Element = E>,
    {
        let target = if config.enabled { surface.find(&config.selector) } else { None };
        Self { target, chars: Vec::new(), typed: 0, speed_ms: config.speed_ms }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.target.is_some()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.typed >= self.chars.len()
    }

    /// Capture the heading text, clear it and type the first character.
    pub fn start<S>(&mut self, surface: &S)
    where
        S: Surface<Element = E>,
    {
        let Some(target) = &self.target else {
            return;
        };
        self.chars = surface.text(target).chars().collect();
        self.typed = 0;
        surface.set_text(target, "");
        self.type_next(surface);
    }

    /// Append one character and schedule the next tick while text remains.
    pub fn type_next<S>(&mut self, surface: &S)
    where
        S: Surface<Element = E>,
    {
        let Some(target) = &self.target else {
            return;
        };
        if self.is_finished() {
            return;
        }
        self.typed += 1;
        let shown = self.chars[..self.typed].iter().collect::<String>();
        surface.set_text(target, &shown);
        if !self.is_finished() {
            surface.schedule(self.speed_ms, Task::TypeNextChar);
        }
    }
}
