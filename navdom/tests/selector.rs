use navdom::{Element, Selector, SelectorError};

#[test]
fn test_parse_trigger_selector() {
    let selector = Selector::parse("button[aria-expanded][aria-controls]").unwrap();
    assert_eq!(
        selector,
        Selector::tag("button")
            .with_attr("aria-expanded")
            .with_attr("aria-controls")
    );

    let trigger = Element::button("About")
        .attr("aria-expanded", "false")
        .attr("aria-controls", "menu");
    assert!(selector.matches(&trigger));

    let missing_controls = Element::button("About").attr("aria-expanded", "false");
    assert!(!selector.matches(&missing_controls));

    let wrong_tag = Element::div()
        .attr("aria-expanded", "false")
        .attr("aria-controls", "menu");
    assert!(!selector.matches(&wrong_tag));
}

#[test]
fn test_parse_class_id_and_values() {
    let selector: Selector = ".disclosure-nav".parse().unwrap();
    assert!(selector.matches(&Element::nav().class("disclosure-nav")));
    assert!(selector.matches(&Element::div().class("x").class("disclosure-nav")));
    assert!(!selector.matches(&Element::nav()));

    let selector = Selector::parse("a[href=\"#mythical-page-content\"]").unwrap();
    assert!(selector.matches(&Element::link("Overview", "#mythical-page-content")));
    assert!(!selector.matches(&Element::link("Overview", "#elsewhere")));

    let selector = Selector::parse("*#arrow-behavior-switch").unwrap();
    assert!(selector.matches(&Element::new("input").id("arrow-behavior-switch")));

    let selector = Selector::parse("li[data-kind=menu]").unwrap();
    assert!(selector.matches(&Element::li().attr("data-kind", "menu")));
}

#[test]
fn test_tag_match_is_case_insensitive() {
    let selector = Selector::parse("UL").unwrap();
    assert!(selector.matches(&Element::ul()));
}

#[test]
fn test_parse_errors() {
    assert_eq!(Selector::parse("   "), Err(SelectorError::Empty));
    assert_eq!(
        Selector::parse("button[aria-expanded"),
        Err(SelectorError::UnterminatedAttribute { position: 6 })
    );
    assert_eq!(
        Selector::parse("ul > li"),
        Err(SelectorError::UnexpectedChar { ch: ' ', position: 2 })
    );
    assert_eq!(
        Selector::parse("div."),
        Err(SelectorError::MissingName { position: 4 })
    );
    assert_eq!(
        Selector::parse("a[href='#x]"),
        Err(SelectorError::UnterminatedValue { position: 7 })
    );
}

#[test]
fn test_display_round_trips_through_parse() {
    let selector = Selector::tag("button")
        .with_class("primary")
        .with_attr("aria-expanded");
    let text = selector.to_string();
    assert_eq!(text, "button.primary[aria-expanded]");
    assert_eq!(Selector::parse(&text).unwrap(), selector);

    assert_eq!(Selector::any().to_string(), "*");
}

#[test]
fn test_builder_id_and_attr_value() {
    let selector = Selector::tag("a")
        .with_id("current")
        .with_attr_value("aria-current", "page");
    assert_eq!(
        Selector::parse("a#current[aria-current=\"page\"]").unwrap(),
        selector
    );

    let current = Element::link("Facts", "#").id("current").attr("aria-current", "page");
    assert!(selector.matches(&current));

    let other_id = Element::link("Facts", "#").id("other").attr("aria-current", "page");
    assert!(!selector.matches(&other_id));

    let other_value = Element::link("Facts", "#").id("current").attr("aria-current", "step");
    assert!(!selector.matches(&other_value));
}
