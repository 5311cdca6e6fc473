use crossterm::event::{Event as CrosstermEvent, KeyEventKind};

use crate::element::{find_element, Element};
use crate::event::{DomEvent, Key, KeyboardEvent, Modifiers};

/// Tracks which element is currently focused (the document's active
/// element) and turns raw terminal input into DOM events.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<String>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused element ID.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Programmatically focus an element by ID.
    /// Returns true if focus changed.
    pub fn focus(&mut self, id: &str) -> bool {
        if self.focused.as_deref() == Some(id) {
            return false;
        }
        self.focused = Some(id.to_string());
        true
    }

    /// Clear focus.
    /// Returns true if there was something focused.
    pub fn blur(&mut self) -> bool {
        self.focused.take().is_some()
    }

    /// Focus the next focusable element (Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_next(&mut self, root: &Element) -> Option<String> {
        let focusable = collect_focusable(root);
        if focusable.is_empty() {
            return None;
        }

        let new_focus = match &self.focused {
            None => focusable[0].clone(),
            Some(current) => {
                let idx = focusable.iter().position(|id| id == current);
                match idx {
                    Some(i) => focusable[(i + 1) % focusable.len()].clone(),
                    None => focusable[0].clone(),
                }
            }
        };

        if self.focused.as_ref() != Some(&new_focus) {
            self.focused = Some(new_focus.clone());
            Some(new_focus)
        } else {
            None
        }
    }

    /// Focus the previous focusable element (Shift+Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_prev(&mut self, root: &Element) -> Option<String> {
        let focusable = collect_focusable(root);
        if focusable.is_empty() {
            return None;
        }

        let new_focus = match &self.focused {
            None => focusable[focusable.len() - 1].clone(),
            Some(current) => {
                let idx = focusable.iter().position(|id| id == current);
                match idx {
                    Some(0) | None => focusable[focusable.len() - 1].clone(),
                    Some(i) => focusable[i - 1].clone(),
                }
            }
        };

        if self.focused.as_ref() != Some(&new_focus) {
            self.focused = Some(new_focus.clone());
            Some(new_focus)
        } else {
            None
        }
    }

    /// Process raw crossterm events and produce DOM events.
    ///
    /// Tab/BackTab move focus through the rendered focusable elements and
    /// emit `FocusOut`/`FocusIn`. Every other key press becomes a `KeyDown`
    /// on the focused element (or on `root` when nothing is focused); Enter
    /// and Space on a button or link are followed by a `Click`, the way a
    /// browser activates them.
    pub fn process_events(&mut self, raw: &[CrosstermEvent], root: &Element) -> Vec<DomEvent> {
        let mut events = Vec::new();

        for raw_event in raw {
            let CrosstermEvent::Key(key_event) = raw_event else {
                continue;
            };

            // Only process key press events (not release/repeat on some terminals)
            if key_event.kind != KeyEventKind::Press {
                continue;
            }

            let key: Key = key_event.code.into();
            let modifiers: Modifiers = key_event.modifiers.into();

            if matches!(key, Key::Tab | Key::BackTab) {
                let old = self.focused.clone();
                let moved = if key == Key::Tab {
                    self.focus_next(root)
                } else {
                    self.focus_prev(root)
                };
                if let Some(new) = moved {
                    log::debug!("[focus] Tab moved focus from {:?} to {}", old, new);
                    if let Some(old) = old {
                        events.push(DomEvent::FocusOut {
                            target: old,
                            related_target: Some(new.clone()),
                        });
                    }
                    events.push(DomEvent::FocusIn { target: new });
                }
                continue;
            }

            let target = self.focused.clone().unwrap_or_else(|| root.id.clone());
            events.push(DomEvent::KeyDown(
                KeyboardEvent::new(target.clone(), key).with_modifiers(modifiers),
            ));

            if matches!(key, Key::Enter | Key::Char(' ')) && modifiers.none() {
                let activatable = self
                    .focused
                    .as_ref()
                    .and_then(|id| find_element(root, id))
                    .is_some_and(|el| el.is_activatable() && !el.disabled);
                if activatable {
                    events.push(DomEvent::Click { target });
                }
            }
        }

        events
    }
}

/// Collect all focusable element IDs in tree order.
///
/// Disabled elements are skipped, and so is every subtree whose root has
/// `display: none`.
pub fn collect_focusable(element: &Element) -> Vec<String> {
    let mut result = Vec::new();
    collect_focusable_recursive(element, &mut result);
    result
}

fn collect_focusable_recursive(element: &Element, result: &mut Vec<String>) {
    if element.is_hidden() {
        return;
    }
    if element.focusable && !element.disabled {
        result.push(element.id.clone());
    }
    for child in element.child_elements() {
        collect_focusable_recursive(child, result);
    }
}
