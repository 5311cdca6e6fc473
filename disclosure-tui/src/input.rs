//! Raw terminal input to page events.

use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEventKind, KeyModifiers};
use disclosure::DisclosurePage;

/// What the event loop should do after a batch of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Continue,
    Quit,
}

fn is_plain_press(event: &CrosstermEvent, code: KeyCode) -> bool {
    matches!(
        event,
        CrosstermEvent::Key(key)
            if key.kind == KeyEventKind::Press
                && key.code == code
                && key.modifiers == KeyModifiers::NONE
    )
}

fn is_quit(event: &CrosstermEvent) -> bool {
    let ctrl_c = matches!(
        event,
        CrosstermEvent::Key(key)
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
    );
    ctrl_c || is_plain_press(event, KeyCode::Char('q'))
}

/// Handle a batch of raw events in arrival order.
///
/// Each event is translated against the focus left by the previous one
/// and dispatched before the next is looked at, so key repeat and fast
/// typing reach the element that is focused at that moment. A plain `a`
/// toggles arrow-key navigation at its position in the batch.
pub fn handle_input(page: &mut DisclosurePage, raw: &[CrosstermEvent]) -> InputAction {
    for event in raw {
        if is_quit(event) {
            return InputAction::Quit;
        }
        if is_plain_press(event, KeyCode::Char('a')) {
            page.set_arrow_keys(!page.arrow_keys_enabled());
            continue;
        }

        let events = page
            .document_mut()
            .process_events(std::slice::from_ref(event));
        for outcome in page.dispatch_all(events) {
            log::trace!("[tui] {:?}", outcome);
        }
    }

    InputAction::Continue
}
