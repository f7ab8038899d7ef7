//! # folio
//!
//! Interaction layer for a single-page portfolio site, compiled to
//! WebAssembly. The page markup and CSS are static; this crate wires the
//! scroll effects, smooth anchor navigation, fade-in reveal, theme toggle,
//! profile image style cycler, project dropdowns and keyboard shortcuts.
//!
//! All behavior is written against the [`surface::Surface`] trait so it can
//! be exercised on the host. The `browser` feature adds the `web-sys`
//! implementation and the `wasm-bindgen` start entry.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`page`] | Aggregate that owns the coordinators and routes events and tasks |
//! | [`surface`] | Platform surface trait, geometry and scheduled task types |
//! | [`theme`] | Light/dark theme coordinator |
//! | [`image_cycler`] | Two-phase profile image style cycler |
//! | [`dropdown`] | Single-open project detail panels |
//! | [`watchers`] | Navbar, anchor, reveal, card hover and mobile menu reactions |
//! | [`typewriter`] | Optional hero heading typing effect |
//! | [`config`] | Selectors, class names, delays and presets |
//! | [`error`] | Mount and configuration errors |

pub mod config;
pub mod dropdown;
pub mod error;
pub mod image_cycler;
pub mod page;
pub mod surface;
pub mod theme;
pub mod typewriter;
pub mod watchers;

#[cfg(feature = "browser")]
pub mod web;

#[cfg(test)]
mod fake_surface;
