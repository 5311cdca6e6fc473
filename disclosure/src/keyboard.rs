use navdom::{Document, Key, KeyboardEvent};

/// Move focus within an ordered list of targets in response to a key.
///
/// `current` is the position of the focused element in `targets`, or
/// `None` when focus is elsewhere. Arrow keys step by one and clamp at
/// both ends but do nothing without a current position; Home and End jump
/// to the first and last target regardless. Every handled key cancels the
/// default action, even when focus cannot move. Other keys are ignored.
pub fn control_focus_by_key(
    doc: &mut Document,
    event: &mut KeyboardEvent,
    targets: &[String],
    current: Option<usize>,
) {
    match event.key {
        Key::Up | Key::Left => {
            event.prevent_default();
            if let Some(index) = current {
                focus_at(doc, targets, index.saturating_sub(1));
            }
        }
        Key::Down | Key::Right => {
            event.prevent_default();
            if let Some(index) = current {
                let last = targets.len().saturating_sub(1);
                focus_at(doc, targets, (index + 1).min(last));
            }
        }
        Key::Home => {
            event.prevent_default();
            focus_at(doc, targets, 0);
        }
        Key::End => {
            event.prevent_default();
            if let Some(last) = targets.len().checked_sub(1) {
                focus_at(doc, targets, last);
            }
        }
        _ => {}
    }
}

fn focus_at(doc: &mut Document, targets: &[String], index: usize) {
    if let Some(id) = targets.get(index) {
        doc.focus(id);
    }
}
