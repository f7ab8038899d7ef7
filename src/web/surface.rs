//! `web-sys` implementation of [`Surface`] over the live document.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window};

use crate::surface::{Rect, Surface, Task};

/// Receiver for tasks whose delay has elapsed. Installed once the page exists.
pub type TaskSink = Rc<RefCell<Option<Box<dyn Fn(Task)>>>>;

pub struct WebSurface {
    window: Window,
    document: Document,
    sink: TaskSink,
}

impl WebSurface {
    pub fn new(window: Window, document: Document, sink: TaskSink) -> Self {
        Self { window, document, sink }
    }
}

impl Surface for WebSurface {
    type Element = Element;

    fn find(&self, selector: &str) -> Option<Element> {
        match self.document.query_selector(selector) {
            Ok(found) => found,
            Err(err) => {
                log::debug!("surface: invalid selector {selector}: {err:?}");
                None
            }
        }
    }

    fn find_all(&self, selector: &str) -> Vec<Element> {
        let list = match self.document.query_selector_all(selector) {
            Ok(list) => list,
            Err(err) => {
                log::debug!("surface: invalid selector {selector}: {err:?}");
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| match node.dyn_into::<Element>() {
                Ok(element) => Some(element),
                Err(_) => None,
            })
            .collect()
    }

    fn add_class(&self, element: &Element, class: &str) {
        if let Err(err) = element.class_list().add_1(class) {
            log::debug!("surface: add class {class} failed: {err:?}");
        }
    }

    fn remove_class(&self, element: &Element, class: &str) {
        if let Err(err) = element.class_list().remove_1(class) {
            log::debug!("surface: remove class {class} failed: {err:?}");
        }
    }

    fn toggle_class(&self, element: &Element, class: &str) -> bool {
        match element.class_list().toggle(class) {
            Ok(present) => present,
            Err(err) => {
                log::debug!("surface: toggle class {class} failed: {err:?}");
                element.class_list().contains(class)
            }
        }
    }

    fn has_class(&self, element: &Element, class: &str) -> bool {
        element.class_list().contains(class)
    }

    fn set_style(&self, element: &Element, property: &str, value: &str) {
        let Some(html) = element.dyn_ref::<HtmlElement>() else {
            return;
        };
        if let Err(err) = html.style().set_property(property, value) {
            log::debug!("surface: set style {property} failed: {err:?}");
        }
    }

    fn text(&self, element: &Element) -> String {
        element.text_content().unwrap_or_default()
    }

    fn set_text(&self, element: &Element, text: &str) {
        element.set_text_content(Some(text));
    }

    fn attribute(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn is_focused(&self, element: &Element) -> bool {
        self.document.active_element().as_ref() == Some(element)
    }

    fn scroll_into_view(&self, element: &Element) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn bounding_rect(&self, element: &Element) -> Rect {
        let rect = element.get_bounding_client_rect();
        Rect { top: rect.top(), bottom: rect.bottom() }
    }

    fn viewport_height(&self) -> f64 {
        match self.window.inner_height() {
            Ok(height) => height.as_f64().unwrap_or_default(),
            Err(err) => {
                log::debug!("surface: innerHeight unavailable: {err:?}");
                0.0
            }
        }
    }

    fn schedule(&self, delay_ms: u32, task: Task) {
        let sink = Rc::clone(&self.sink);
        Timeout::new(delay_ms, move || {
            if let Some(run) = sink.borrow().as_ref() {
                run(task);
            }
        })
        .forget();
    }
}
