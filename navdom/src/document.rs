//! The document: an element tree plus the active element.
//!
//! Mutations go through element IDs. Moving focus queues the
//! `FocusOut`/`FocusIn` events a browser would fire; the owner drains them
//! with [`Document::take_pending_events`] and routes them to listeners.

use std::collections::VecDeque;

use crossterm::event::Event as CrosstermEvent;

use crate::element::{self, Element};
use crate::event::DomEvent;
use crate::focus::FocusState;
use crate::selector::Selector;
use crate::types::Display;

#[derive(Debug)]
pub struct Document {
    root: Element,
    focus: FocusState,
    pending: VecDeque<DomEvent>,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self {
            root,
            focus: FocusState::new(),
            pending: VecDeque::new(),
        }
    }

    /// The document element (`<html>`).
    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_id(&self) -> &str {
        &self.root.id
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        element::find_element(&self.root, id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        element::find_element_mut(&mut self.root, id)
    }

    pub fn parent_of(&self, id: &str) -> Option<&Element> {
        element::find_parent(&self.root, id)
    }

    /// Whether `id` is `ancestor` or a descendant of it. False if either is
    /// missing.
    pub fn contains(&self, ancestor: &str, id: &str) -> bool {
        self.get(ancestor)
            .is_some_and(|el| element::contains(el, id))
    }

    /// Bubbling path for an event targeted at `id`, target first. Empty if
    /// the target is not in the document.
    pub fn event_path(&self, id: &str) -> Vec<String> {
        element::ancestor_path(&self.root, id).unwrap_or_default()
    }

    /// Matching descendants of `scope` in document order. Empty if `scope`
    /// is missing.
    pub fn query_all(&self, scope: &str, selector: &Selector) -> Vec<String> {
        self.get(scope)
            .map(|el| element::query_all(el, selector))
            .unwrap_or_default()
    }

    pub fn query_first(&self, scope: &str, selector: &Selector) -> Option<String> {
        self.get(scope)
            .and_then(|el| element::query_first(el, selector))
    }

    /// Matching elements anywhere in the document, the root included.
    pub fn query_selector_all(&self, selector: &Selector) -> Vec<String> {
        let mut result = Vec::new();
        if selector.matches(&self.root) {
            result.push(self.root.id.clone());
        }
        result.extend(element::query_all(&self.root, selector));
        result
    }

    pub fn get_attr(&self, id: &str, name: &str) -> Option<&str> {
        self.get(id).and_then(|el| el.get_attr(name))
    }

    /// Returns false if the element does not exist.
    pub fn set_attr(&mut self, id: &str, name: &str, value: &str) -> bool {
        match self.get_mut(id) {
            Some(el) => {
                el.set_attr(name, value);
                true
            }
            None => false,
        }
    }

    pub fn display(&self, id: &str) -> Option<Display> {
        self.get(id).map(|el| el.display)
    }

    /// Returns false if the element does not exist.
    pub fn set_display(&mut self, id: &str, display: Display) -> bool {
        match self.get_mut(id) {
            Some(el) => {
                el.set_display(display);
                true
            }
            None => false,
        }
    }

    pub fn add_class(&mut self, id: &str, class: &str) -> bool {
        match self.get_mut(id) {
            Some(el) => {
                el.add_class(class);
                true
            }
            None => false,
        }
    }

    pub fn is_rendered(&self, id: &str) -> bool {
        element::is_rendered(&self.root, id)
    }

    /// The focused element, if any (`document.activeElement`).
    pub fn active_element(&self) -> Option<&str> {
        self.focus.focused()
    }

    /// Move focus to `id`, queueing `FocusOut` on the previously focused
    /// element and `FocusIn` on the new one.
    ///
    /// Like `HTMLElement.focus()`, this is a silent no-op for elements that
    /// are missing, not focusable, disabled, or not rendered. Returns true
    /// if focus changed.
    pub fn focus(&mut self, id: &str) -> bool {
        let focusable = self
            .get(id)
            .is_some_and(|el| el.focusable && !el.disabled);
        if !focusable || !self.is_rendered(id) {
            log::debug!("[focus] refusing focus on {}", id);
            return false;
        }

        let old = self.focus.focused().map(str::to_string);
        if !self.focus.focus(id) {
            return false;
        }

        log::debug!("[focus] {:?} -> {}", old, id);
        if let Some(old) = old {
            self.pending.push_back(DomEvent::FocusOut {
                target: old,
                related_target: Some(id.to_string()),
            });
        }
        self.pending.push_back(DomEvent::FocusIn {
            target: id.to_string(),
        });
        true
    }

    /// Drop focus entirely, queueing `FocusOut` with no related target.
    pub fn blur(&mut self) -> bool {
        let Some(old) = self.focus.focused().map(str::to_string) else {
            return false;
        };
        self.focus.blur();
        self.pending.push_back(DomEvent::FocusOut {
            target: old,
            related_target: None,
        });
        true
    }

    /// Drain the focus events queued by [`Document::focus`] and
    /// [`Document::blur`], oldest first.
    pub fn take_pending_events(&mut self) -> Vec<DomEvent> {
        self.pending.drain(..).collect()
    }

    /// Translate raw terminal input into DOM events against this document.
    pub fn process_events(&mut self, raw: &[CrosstermEvent]) -> Vec<DomEvent> {
        self.focus.process_events(raw, &self.root)
    }
}
