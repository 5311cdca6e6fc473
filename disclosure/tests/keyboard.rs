use disclosure::control_focus_by_key;
use navdom::{Document, Element, Key, KeyboardEvent};

fn targets() -> (Document, Vec<String>) {
    let doc = Document::new(
        Element::html()
            .id("html")
            .child(Element::button("A").id("a"))
            .child(Element::button("B").id("b"))
            .child(Element::button("C").id("c"))
            .child(Element::button("D").id("d")),
    );
    let ids = ["a", "b", "c", "d"].map(String::from).to_vec();
    (doc, ids)
}

/// Press `key` with focus at `current` and return (new focus, prevented).
fn press(key: Key, current: Option<usize>) -> (Option<String>, bool) {
    let (mut doc, ids) = targets();
    if let Some(i) = current {
        doc.focus(&ids[i]);
    }
    let mut event = KeyboardEvent::new("html", key);
    control_focus_by_key(&mut doc, &mut event, &ids, current);
    (doc.active_element().map(str::to_string), event.default_prevented())
}

#[test]
fn test_home_and_end() {
    assert_eq!(press(Key::Home, Some(2)), (Some("a".into()), true));
    assert_eq!(press(Key::End, Some(1)), (Some("d".into()), true));
}

#[test]
fn test_steps_clamp_at_ends() {
    assert_eq!(press(Key::Up, Some(0)), (Some("a".into()), true));
    assert_eq!(press(Key::Left, Some(2)), (Some("b".into()), true));
    assert_eq!(press(Key::Down, Some(3)), (Some("d".into()), true));
    assert_eq!(press(Key::Right, Some(1)), (Some("c".into()), true));
}

#[test]
fn test_unknown_position_blocks_arrows_only() {
    assert_eq!(press(Key::Up, None), (None, true));
    assert_eq!(press(Key::Down, None), (None, true));
    assert_eq!(press(Key::Home, None), (Some("a".into()), true));
    assert_eq!(press(Key::End, None), (Some("d".into()), true));
}

#[test]
fn test_other_keys_ignored() {
    assert_eq!(press(Key::Enter, Some(1)), (Some("b".into()), false));
    assert_eq!(press(Key::PageDown, Some(1)), (Some("b".into()), false));
    assert_eq!(press(Key::Char('j'), Some(1)), (Some("b".into()), false));
}

#[test]
fn test_empty_target_list() {
    let (mut doc, _) = targets();
    for key in [Key::Up, Key::Down, Key::Home, Key::End] {
        let mut event = KeyboardEvent::new("html", key);
        control_focus_by_key(&mut doc, &mut event, &[], Some(0));
        assert!(event.default_prevented());
        assert_eq!(doc.active_element(), None);
    }
}
