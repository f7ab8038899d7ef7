//! Recording in-memory surface with a virtual clock for host tests.
//!
//! Elements are `usize` handles. Selector support covers what the page
//! uses: `#id`, `.class`, `[attr="value"]`, plus any literal alias given
//! when the element is added (`body`, `.hero h1`, `a[href^="#"]`).

use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap};

use crate::surface::{Rect, Surface, Task};

#[derive(Default)]
struct Node {
    aliases: Vec<String>,
    classes: BTreeSet<String>,
    styles: HashMap<String, String>,
    attrs: HashMap<String, String>,
    text: String,
    rect: Rect,
}

impl Node {
    fn matches(&self, selector: &str) -> bool {
        if self.aliases.iter().any(|alias| alias == selector) {
            return true;
        }
        if let Some(id) = selector.strip_prefix('#') {
            return self.attrs.get("id").is_some_and(|own| own == id);
        }
        if let Some(class) = selector.strip_prefix('.') {
            return !class.contains([' ', '[', '.']) && self.classes.contains(class);
        }
        if let Some(inner) = selector.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) {
            if let Some((name, value)) = inner.split_once('=') {
                let value = value.trim_matches('"');
                return self.attrs.get(name).is_some_and(|own| own == value);
            }
        }
        false
    }
}

struct Pending {
    due_ms: u64,
    seq: u64,
    task: Task,
}

pub struct FakeSurface {
    nodes: RefCell<Vec<Node>>,
    focused: Cell<Option<usize>>,
    viewport_height: Cell<f64>,
    now_ms: Cell<u64>,
    next_seq: Cell<u64>,
    pending: RefCell<Vec<Pending>>,
    scrolled_to: RefCell<Vec<usize>>,
}

impl Default for FakeSurface {
    fn default() -> Self {
        Self {
            nodes: RefCell::new(Vec::new()),
            focused: Cell::new(None),
            viewport_height: Cell::new(800.0),
            now_ms: Cell::new(0),
            next_seq: Cell::new(0),
            pending: RefCell::new(Vec::new()),
            scrolled_to: RefCell::new(Vec::new()),
        }
    }
}

impl FakeSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element reachable through the literal selector `alias`.
    pub fn add(&self, alias: &str) -> usize {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(Node { aliases: vec![alias.to_owned()], ..Node::default() });
        nodes.len() - 1
    }

    /// Add an element carrying an `id` attribute.
    pub fn add_with_id(&self, id: &str) -> usize {
        let handle = self.add(&format!("#{id}"));
        self.set_attr(handle, "id", id);
        handle
    }

    /// Add an element carrying one class.
    pub fn add_with_class(&self, class: &str) -> usize {
        let handle = self.add(&format!(".{class}"));
        self.add_class(&handle, class);
        handle
    }

    pub fn set_attr(&self, element: usize, name: &str, value: &str) {
        if let Some(node) = self.nodes.borrow_mut().get_mut(element) {
            node.attrs.insert(name.to_owned(), value.to_owned());
        }
    }

    pub fn set_rect(&self, element: usize, top: f64, bottom: f64) {
        if let Some(node) = self.nodes.borrow_mut().get_mut(element) {
            node.rect = Rect { top, bottom };
        }
    }

    pub fn set_viewport_height(&self, height: f64) {
        self.viewport_height.set(height);
    }

    pub fn focus(&self, element: Option<usize>) {
        self.focused.set(element);
    }

    pub fn style(&self, element: usize, property: &str) -> Option<String> {
        self.nodes.borrow().get(element).and_then(|node| node.styles.get(property).cloned())
    }

    pub fn classes(&self, element: usize) -> Vec<String> {
        self.nodes
            .borrow()
            .get(element)
            .map_or_else(Vec::new, |node| node.classes.iter().cloned().collect())
    }

    /// Elements passed to `scroll_into_view`, in call order.
    pub fn scrolled_to(&self) -> Vec<usize> {
        self.scrolled_to.borrow().clone()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms.get()
    }

    pub fn pending(&self) -> Vec<Task> {
        let mut pending = self.pending.borrow().iter().map(|p| (p.due_ms, p.seq, p.task)).collect::<Vec<_>>();
        pending.sort_unstable_by_key(|(due_ms, seq, _)| (*due_ms, *seq));
        pending.into_iter().map(|(_, _, task)| task).collect()
    }

    /// Pop the earliest task due at or before `deadline_ms`, moving the clock
    /// to its due time.
    pub fn pop_due(&self, deadline_ms: u64) -> Option<Task> {
        let mut pending = self.pending.borrow_mut();
        let position = pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due_ms <= deadline_ms)
            .min_by_key(|(_, p)| (p.due_ms, p.seq))
            .map(|(position, _)| position)?;
        let next = pending.remove(position);
        self.now_ms.set(next.due_ms);
        Some(next.task)
    }

    /// Move the clock forward by `ms`, running every task that falls due,
    /// including tasks scheduled by earlier ones.
    pub fn advance(&self, ms: u64, mut run: impl FnMut(Task)) {
        let deadline = self.now_ms.get() + ms;
        while let Some(task) = self.pop_due(deadline) {
            run(task);
        }
        self.now_ms.set(deadline);
    }

    /// Move the clock to `deadline_ms` after the caller drained due tasks.
    pub fn settle(&self, deadline_ms: u64) {
        self.now_ms.set(deadline_ms);
    }
}

impl Surface for FakeSurface {
    type Element = usize;

    fn find(&self, selector: &str) -> Option<usize> {
        self.nodes.borrow().iter().position(|node| node.matches(selector))
    }

    fn find_all(&self, selector: &str) -> Vec<usize> {
        self.nodes
            .borrow()
            .iter()
            .enumerate()
            .filter(|(_, node)| node.matches(selector))
            .map(|(handle, _)| handle)
            .collect()
    }

    fn add_class(&self, element: &usize, class: &str) {
        if let Some(node) = self.nodes.borrow_mut().get_mut(*element) {
            node.classes.insert(class.to_owned());
        }
    }

    fn remove_class(&self, element: &usize, class: &str) {
        if let Some(node) = self.nodes.borrow_mut().get_mut(*element) {
            node.classes.remove(class);
        }
    }

    fn toggle_class(&self, element: &usize, class: &str) -> bool {
        let mut nodes = self.nodes.borrow_mut();
        let Some(node) = nodes.get_mut(*element) else {
            return false;
        };
        if node.classes.remove(class) {
            false
        } else {
            node.classes.insert(class.to_owned());
            true
        }
    }

    fn has_class(&self, element: &usize, class: &str) -> bool {
        self.nodes.borrow().get(*element).is_some_and(|node| node.classes.contains(class))
    }

    fn set_style(&self, element: &usize, property: &str, value: &str) {
        if let Some(node) = self.nodes.borrow_mut().get_mut(*element) {
            node.styles.insert(property.to_owned(), value.to_owned());
        }
    }

    fn text(&self, element: &usize) -> String {
        self.nodes.borrow().get(*element).map(|node| node.text.clone()).unwrap_or_default()
    }

    fn set_text(&self, element: &usize, text: &str) {
        if let Some(node) = self.nodes.borrow_mut().get_mut(*element) {
            node.text = text.to_owned();
        }
    }

    fn attribute(&self, element: &usize, name: &str) -> Option<String> {
        self.nodes.borrow().get(*element).and_then(|node| node.attrs.get(name).cloned())
    }

    fn is_focused(&self, element: &usize) -> bool {
        self.focused.get() == Some(*element)
    }

    fn scroll_into_view(&self, element: &usize) {
        self.scrolled_to.borrow_mut().push(*element);
    }

    fn bounding_rect(&self, element: &usize) -> Rect {
        self.nodes.borrow().get(*element).map(|node| node.rect).unwrap_or_default()
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height.get()
    }

    fn schedule(&self, delay_ms: u32, task: Task) {
        let seq = self.next_seq.get();
        self.next_seq.set(seq + 1);
        self.pending.borrow_mut().push(Pending { due_ms: self.now_ms.get() + u64::from(delay_ms), seq, task });
    }
}
