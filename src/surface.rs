//! Platform surface: the DOM-like capabilities the coordinators consume.
//!
//! SYSTEM CONTEXT
//! ==============
//! Coordinators never touch `web-sys` directly. They issue presentation
//! commands through [`Surface`], which the browser binding implements over
//! the real document and tests implement with a recording fake. Event
//! subscription is not part of the trait: the binding layer owns listeners
//! and forwards them as [`crate::page::PageEvent`]s.

/// Vertical extent of an element relative to the viewport, in CSS px.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub bottom: f64,
}

impl Rect {
    /// Whether any part of the element lies inside a viewport of `viewport_height`.
    #[must_use]
    pub fn intersects_viewport(self, viewport_height: f64) -> bool {
        self.top < viewport_height && self.bottom > 0.0
    }
}

/// Deferred work handed to [`Surface::schedule`].
///
/// The surface calls back into [`crate::page::Page::run_task`] once the
/// delay elapses. Pending tasks cannot be cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// Image cycler phase 1: advance the preset index and apply it.
    AdvanceImageStyle,
    /// Image cycler phase 2: drop the transient active class.
    ReleaseImageStyle,
    /// Typewriter: append the next character of the heading.
    TypeNextChar,
}

pub trait Surface {
    /// Handle to a document element.
    type Element: Clone + PartialEq;

    /// First element matching `selector`. Invalid selectors match nothing.
    fn find(&self, selector: &str) -> Option<Self::Element>;

    /// Every element matching `selector`, in document order.
    fn find_all(&self, selector: &str) -> Vec<Self::Element>;

    fn add_class(&self, element: &Self::Element, class: &str);

    fn remove_class(&self, element: &Self::Element, class: &str);

    /// Flip `class` on `element` and return whether it is now present.
    fn toggle_class(&self, element: &Self::Element, class: &str) -> bool;

    fn has_class(&self, element: &Self::Element, class: &str) -> bool;

    /// Set an inline style property (`filter`, `transform`, ...).
    fn set_style(&self, element: &Self::Element, property: &str, value: &str);

    fn text(&self, element: &Self::Element) -> String;

    fn set_text(&self, element: &Self::Element, text: &str);

    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

    /// Whether `element` currently holds keyboard focus.
    fn is_focused(&self, element: &Self::Element) -> bool;

    /// Smoothly scroll so the element's top aligns with the viewport top.
    fn scroll_into_view(&self, element: &Self::Element);

    fn bounding_rect(&self, element: &Self::Element) -> Rect;

    fn viewport_height(&self) -> f64;

    /// Run `task` after `delay_ms` milliseconds on the same event loop.
    fn schedule(&self, delay_ms: u32, task: Task);
}
