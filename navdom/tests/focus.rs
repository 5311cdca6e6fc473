use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};
use navdom::{collect_focusable, Display, Document, DomEvent, Element, FocusState, Key};

fn press(code: KeyCode) -> CrosstermEvent {
    CrosstermEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn page() -> Element {
    Element::html()
        .id("html")
        .child(Element::button("One").id("b1"))
        .child(
            Element::ul()
                .id("menu")
                .child(Element::li().child(Element::link("Link", "#").id("a1"))),
        )
        .child(Element::button("Two").id("b2"))
        .child(Element::button("Off").id("b3").disabled(true))
}

// ============================================================================
// Focus State
// ============================================================================

#[test]
fn test_focus_state_focus_blur() {
    let mut focus = FocusState::new();

    assert_eq!(focus.focused(), None);

    assert!(focus.focus("b1"));
    assert_eq!(focus.focused(), Some("b1"));

    // Focus same element - no change
    assert!(!focus.focus("b1"));

    assert!(focus.blur());
    assert_eq!(focus.focused(), None);
    assert!(!focus.blur());
}

#[test]
fn test_collect_focusable_skips_hidden_and_disabled() {
    let mut root = page();
    assert_eq!(collect_focusable(&root), vec!["b1", "a1", "b2"]);

    navdom::find_element_mut(&mut root, "menu")
        .unwrap()
        .set_display(Display::None);
    assert_eq!(collect_focusable(&root), vec!["b1", "b2"]);
}

#[test]
fn test_focus_next_wraps() {
    let root = page();
    let mut focus = FocusState::new();

    assert_eq!(focus.focus_next(&root), Some("b1".to_string()));
    assert_eq!(focus.focus_next(&root), Some("a1".to_string()));
    assert_eq!(focus.focus_next(&root), Some("b2".to_string()));
    assert_eq!(focus.focus_next(&root), Some("b1".to_string()));

    assert_eq!(focus.focus_prev(&root), Some("b2".to_string()));
}

// ============================================================================
// Document focus
// ============================================================================

#[test]
fn test_document_focus_queues_focus_events() {
    let mut doc = Document::new(page());

    assert!(doc.focus("b1"));
    assert!(doc.focus("b2"));
    assert_eq!(doc.active_element(), Some("b2"));

    assert_eq!(
        doc.take_pending_events(),
        vec![
            DomEvent::FocusIn { target: "b1".into() },
            DomEvent::focus_out("b1", Some("b2".into())),
            DomEvent::FocusIn { target: "b2".into() },
        ]
    );
    assert!(doc.take_pending_events().is_empty());

    assert!(doc.blur());
    assert_eq!(doc.take_pending_events(), vec![DomEvent::focus_out("b2", None)]);
}

#[test]
fn test_document_focus_refuses_unfocusable_targets() {
    let mut doc = Document::new(page());

    assert!(!doc.focus("menu"));
    assert!(!doc.focus("b3"));
    assert!(!doc.focus("missing"));

    doc.set_display("menu", Display::None);
    assert!(!doc.focus("a1"));

    assert_eq!(doc.active_element(), None);
    assert!(doc.take_pending_events().is_empty());
}

// ============================================================================
// Raw input
// ============================================================================

#[test]
fn test_process_events_tab_moves_focus() {
    let mut doc = Document::new(page());

    let events = doc.process_events(&[press(KeyCode::Tab)]);
    assert_eq!(events, vec![DomEvent::FocusIn { target: "b1".into() }]);

    let events = doc.process_events(&[press(KeyCode::Tab)]);
    assert_eq!(
        events,
        vec![
            DomEvent::focus_out("b1", Some("a1".into())),
            DomEvent::FocusIn { target: "a1".into() },
        ]
    );
}

#[test]
fn test_process_events_enter_on_button_clicks() {
    let mut doc = Document::new(page());
    doc.focus("b1");

    let events = doc.process_events(&[press(KeyCode::Enter)]);
    assert_eq!(
        events,
        vec![DomEvent::key_down("b1", Key::Enter), DomEvent::click("b1")]
    );

    let events = doc.process_events(&[press(KeyCode::Down)]);
    assert_eq!(events, vec![DomEvent::key_down("b1", Key::Down)]);
}

#[test]
fn test_process_events_without_focus_targets_root() {
    let mut doc = Document::new(page());
    let events = doc.process_events(&[press(KeyCode::Esc), press(KeyCode::Enter)]);
    assert_eq!(
        events,
        vec![
            DomEvent::key_down("html", Key::Escape),
            DomEvent::key_down("html", Key::Enter),
        ]
    );
}
