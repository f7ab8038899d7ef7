//! Browser binding: DOM listeners, intersection observer and wasm entry.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything browser-specific lives here. Listeners translate DOM events
//! into [`PageEvent`]s, apply the returned [`Response`], and timers feed
//! [`crate::surface::Task`]s back through the [`TaskSink`]. Closures are
//! leaked with `forget()`: listeners live as long as the page.

mod surface;

pub use surface::{TaskSink, WebSurface};

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent, TransitionEvent, Window,
};

use crate::config::PageConfig;
use crate::error::FolioError;
use crate::page::{Page, PageEvent, Response};
use crate::surface::Surface;

type SharedPage = Rc<RefCell<Page<WebSurface>>>;

impl From<FolioError> for JsValue {
    fn from(err: FolioError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// WASM entry point: install logging and mount the page.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    console_log::init_with_level(level).map_err(|err| FolioError::Logger(err.to_string()))?;
    mount()?;
    Ok(())
}

/// Build the page from the live document and attach every listener.
///
/// Features whose elements are missing are skipped. An invalid embedded
/// configuration falls back to the defaults.
pub fn mount() -> Result<(), FolioError> {
    let window = web_sys::window().ok_or(FolioError::NoWindow)?;
    let document = window.document().ok_or(FolioError::NoDocument)?;

    let sink: TaskSink = Rc::new(RefCell::new(None));
    let surface = WebSurface::new(window.clone(), document.clone(), Rc::clone(&sink));
    let config = match PageConfig::load(&surface) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("config: {err}; using defaults");
            PageConfig::default()
        }
    };
    let page: SharedPage = Rc::new(RefCell::new(Page::mount(surface, config.clone())));

    let weak = Rc::downgrade(&page);
    *sink.borrow_mut() = Some(Box::new(move |task| {
        let Some(page) = weak.upgrade() else {
            return;
        };
        match page.try_borrow_mut() {
            Ok(mut page) => page.run_task(task),
            Err(_) => log::warn!("page busy, dropped task {task:?}"),
        }
    }));

    wire_window(&window, &document, &page)?;
    wire_keyboard(&document, &page)?;
    wire_clicks(&page, &config)?;
    wire_cards(&page, &config)?;
    wire_root(&page, &config)?;
    observe_reveals(&page, &config)?;
    log::info!("folio mounted");
    Ok(())
}

fn js_error(err: JsValue) -> FolioError {
    FolioError::Js(format!("{err:?}"))
}

fn listen<F>(target: &EventTarget, name: &str, handler: F) -> Result<(), FolioError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
        .map_err(js_error)?;
    closure.forget();
    Ok(())
}

fn dispatch(page: &SharedPage, event: PageEvent<Element>) -> Response {
    match page.try_borrow_mut() {
        Ok(mut page) => page.handle(event),
        Err(_) => {
            log::warn!("page busy, dropped event {event:?}");
            Response::Default
        }
    }
}

fn respond(response: Response, event: &Event) {
    if response == Response::PreventDefault {
        event.prevent_default();
    }
}

fn find(page: &SharedPage, selector: &str) -> Option<Element> {
    page.borrow().surface().find(selector)
}

fn find_all(page: &SharedPage, selector: &str) -> Vec<Element> {
    page.borrow().surface().find_all(selector)
}

fn wire_window(window: &Window, document: &Document, page: &SharedPage) -> Result<(), FolioError> {
    let scroll_window = window.clone();
    let scroll_page = Rc::clone(page);
    listen(window, "scroll", move |_| {
        if let Ok(y) = scroll_window.scroll_y() {
            dispatch(&scroll_page, PageEvent::Scroll { y });
        }
    })?;

    if document.ready_state() == "complete" {
        dispatch(page, PageEvent::Load);
        return Ok(());
    }
    let load_page = Rc::clone(page);
    listen(window, "load", move |_| {
        dispatch(&load_page, PageEvent::Load);
    })
}

fn wire_keyboard(document: &Document, page: &SharedPage) -> Result<(), FolioError> {
    let key_page = Rc::clone(page);
    listen(document, "keydown", move |event| {
        let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let response = dispatch(&key_page, PageEvent::KeyDown { key: key_event.key() });
        respond(response, &event);
    })
}

/// Attach a click listener that forwards a fixed event.
fn on_click<F>(page: &SharedPage, element: &Element, make: F) -> Result<(), FolioError>
where
    F: Fn() -> PageEvent<Element> + 'static,
{
    let click_page = Rc::clone(page);
    listen(element, "click", move |event| {
        let response = dispatch(&click_page, make());
        respond(response, &event);
    })
}

fn wire_clicks(page: &SharedPage, config: &PageConfig) -> Result<(), FolioError> {
    for anchor in find_all(page, &config.anchors.selector) {
        let href_source = anchor.clone();
        on_click(page, &anchor, move || PageEvent::AnchorClick {
            href: href_source.get_attribute("href").unwrap_or_default(),
        })?;
    }
    if let Some(toggle) = find(page, &config.theme.toggle_selector) {
        on_click(page, &toggle, || PageEvent::ThemeToggleClick)?;
    }
    if let Some(image) = find(page, &config.image.selector) {
        on_click(page, &image, || PageEvent::ImageClick)?;
    }
    for button in find_all(page, &config.dropdown.button_selector) {
        let target = button.clone();
        on_click(page, &button, move || PageEvent::DropdownClick(target.clone()))?;
    }
    if let Some(menu) = find(page, &config.mobile_menu.toggle_selector) {
        on_click(page, &menu, || PageEvent::MobileMenuClick)?;
    }
    Ok(())
}

fn wire_cards(page: &SharedPage, config: &PageConfig) -> Result<(), FolioError> {
    for card in find_all(page, &config.cards.selector) {
        for (name, entered) in [("mouseenter", true), ("mouseleave", false)] {
            let hover_page = Rc::clone(page);
            let hovered = card.clone();
            listen(&card, name, move |_| {
                dispatch(&hover_page, PageEvent::CardHover { card: hovered.clone(), entered });
            })?;
        }
    }
    Ok(())
}

fn wire_root(page: &SharedPage, config: &PageConfig) -> Result<(), FolioError> {
    let Some(root) = find(page, &config.root_selector) else {
        return Ok(());
    };
    let transition_page = Rc::clone(page);
    listen(&root, "transitionend", move |event| {
        if let Some(transition) = event.dyn_ref::<TransitionEvent>() {
            dispatch(&transition_page, PageEvent::TransitionEnd { property: transition.property_name() });
        }
    })
}

fn observe_reveals(page: &SharedPage, config: &PageConfig) -> Result<(), FolioError> {
    let targets = find_all(page, &config.reveal.selector);
    if targets.is_empty() {
        return Ok(());
    }

    let reveal_page = Rc::clone(page);
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry = entry.unchecked_into::<IntersectionObserverEntry>();
                if entry.is_intersecting() {
                    dispatch(&reveal_page, PageEvent::Reveal(entry.target()));
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.reveal.threshold));
    options.set_root_margin(&config.reveal.root_margin);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).map_err(js_error)?;
    for target in &targets {
        observer.observe(target);
    }
    callback.forget();
    Ok(())
}
