//! Single-open accordion over the project detail panels.
//!
//! Opening one panel closes every sibling; toggling the open panel closes
//! the whole group. Each panel's toggle button rotates to point up while
//! its panel is open.

#[cfg(test)]
#[path = "dropdown_test.rs"]
mod dropdown_test;

use crate::config::DropdownConfig;
use crate::surface::Surface;

pub const ROTATION_OPEN: &str = "rotate(180deg)";
pub const ROTATION_CLOSED: &str = "rotate(0deg)";

/// One collapsible project detail region.
#[derive(Debug, Clone)]
pub struct Panel<E> {
    pub id: String,
    pub is_open: bool,
    details: E,
    button: Option<E>,
}

pub struct DropdownGroup<E> {
    panels: Vec<Panel<E>>,
    open_class: String,
    target_attribute: String,
}

impl<E: Clone + PartialEq> DropdownGroup<E> {
    /// Discover every panel with an id and the first button that targets it.
    ///
    /// All panels start closed.
    pub fn mount<S>(surface: &S, config: &DropdownConfig) -> Self
    where
        S: Surface<Element = E>,
    {
        let panels = surface
            .find_all(&config.panel_selector)
            .into_iter()
            .filter_map(|details| {
                let id = surface.attribute(&details, "id").filter(|id| !id.is_empty())?;
                let button = surface.find(&format!(r#"[{}="{id}"]"#, config.target_attribute));
                Some(Panel { id, is_open: false, details, button })
            })
            .collect::<Vec<_>>();
        log::debug!("dropdown: mounted {} panels", panels.len());
        Self { panels, open_class: config.open_class.clone(), target_attribute: config.target_attribute.clone() }
    }

    #[must_use]
    pub fn panels(&self) -> &[Panel<E>] {
        &self.panels
    }

    #[must_use]
    pub fn is_open(&self, panel_id: &str) -> bool {
        self.panels.iter().any(|panel| panel.id == panel_id && panel.is_open)
    }

    #[must_use]
    pub fn any_open(&self) -> bool {
        self.panels.iter().any(|panel| panel.is_open)
    }

    /// Id of the panel a toggle button controls, read from its target attribute.
    pub fn target_of<S>(&self, surface: &S, button: &E) -> Option<String>
    where
        S: Surface<Element = E>,
    {
        surface.attribute(button, &self.target_attribute)
    }

    /// Close every sibling of `panel_id`, then flip `panel_id`.
    ///
    /// An unknown id leaves the group untouched. Returns the new open state
    /// of the target, or `None` when there is no such panel.
    pub fn toggle<S>(&mut self, surface: &S, panel_id: &str) -> Option<bool>
    where
        S: Surface<Element = E>,
    {
        if !self.panels.iter().any(|panel| panel.id == panel_id) {
            log::debug!("dropdown: no panel {panel_id}");
            return None;
        }

        let mut now_open = None;
        for panel in &mut self.panels {
            if panel.id == panel_id {
                panel.is_open = !panel.is_open;
                now_open = Some(panel.is_open);
            } else {
                panel.is_open = false;
            }
            render_panel(surface, panel, &self.open_class);
        }
        now_open
    }

    /// Force every panel closed and every button back to rest.
    pub fn close_all<S>(&mut self, surface: &S)
    where
        S: Surface<Element = E>,
    {
        for panel in &mut self.panels {
            panel.is_open = false;
            render_panel(surface, panel, &self.open_class);
        }
    }
}

fn render_panel<S: Surface>(surface: &S, panel: &Panel<S::Element>, open_class: &str) {
    if panel.is_open {
        surface.add_class(&panel.details, open_class);
    } else {
        surface.remove_class(&panel.details, open_class);
    }
    if let Some(button) = &panel.button {
        let rotation = if panel.is_open { ROTATION_OPEN } else { ROTATION_CLOSED };
        surface.set_style(button, "transform", rotation);
    }
}
