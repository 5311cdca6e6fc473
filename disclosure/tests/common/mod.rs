#![allow(dead_code)]

use disclosure::{ARIA_EXPANDED, DisclosureNav};
use navdom::{Display, Document, DomEvent, Element, Key};

fn menu(trigger_id: &str, label: &str, menu_id: &str, links: &[(&str, &str)]) -> Element {
    Element::li()
        .child(
            Element::button(label)
                .id(trigger_id)
                .attr(ARIA_EXPANDED, "true")
                .attr("aria-controls", menu_id),
        )
        .child(Element::ul().id(menu_id).children(links.iter().map(|(id, text)| {
            Element::li().child(Element::link(*text, "#mythical-page-content").id(*id))
        })))
}

/// A navigation container with three menus and one trigger that has no
/// menu next to it.
pub fn nav(id: &str) -> Element {
    Element::nav().id(id).class("disclosure-nav").child(
        Element::ul()
            .child(menu(
                "btn-about",
                "About",
                "menu-about",
                &[
                    ("about-overview", "Overview"),
                    ("about-admin", "Administration"),
                    ("about-facts", "Facts"),
                ],
            ))
            .child(menu(
                "btn-admissions",
                "Admissions",
                "menu-admissions",
                &[("adm-apply", "Apply"), ("adm-tuition", "Tuition")],
            ))
            .child(
                Element::li().child(
                    Element::button("Orphan")
                        .id("btn-orphan")
                        .attr(ARIA_EXPANDED, "true")
                        .attr("aria-controls", "nowhere"),
                ),
            )
            .child(menu(
                "btn-academics",
                "Academics",
                "menu-academics",
                &[
                    ("acad-colleges", "Colleges & Schools"),
                    ("acad-programs", "Programs of Study"),
                    ("acad-honors", "Honors Programs"),
                ],
            )),
    )
}

pub fn document() -> Document {
    Document::new(
        Element::html().id("html").child(
            Element::new("body")
                .id("body")
                .child(Element::link("Skip", "#main").id("outside"))
                .child(nav("nav"))
                .child(Element::new("main").id("main")),
        ),
    )
}

pub fn setup() -> (Document, DisclosureNav) {
    let mut doc = document();
    let mut nav = DisclosureNav::new("nav");
    nav.init(&mut doc);
    doc.take_pending_events();
    (doc, nav)
}

/// Send a keydown to `target` and return whether default was prevented.
pub fn key(doc: &mut Document, nav: &mut DisclosureNav, target: &str, key: Key) -> bool {
    let mut event = DomEvent::key_down(target, key);
    nav.handle_event(doc, &mut event);
    event.default_prevented()
}

pub fn click(doc: &mut Document, nav: &mut DisclosureNav, target: &str) {
    nav.handle_event(doc, &mut DomEvent::click(target));
}

pub fn is_expanded(doc: &Document, trigger: &str) -> bool {
    doc.get_attr(trigger, ARIA_EXPANDED) == Some("true")
}

pub fn is_visible(doc: &Document, menu: &str) -> bool {
    doc.display(menu) == Some(Display::Block)
}

/// Check the open-state invariant and return the open pair, if any.
pub fn assert_single_open(doc: &Document, nav: &DisclosureNav) -> Option<usize> {
    let open: Vec<usize> = nav
        .pairs()
        .iter()
        .enumerate()
        .filter(|(_, pair)| is_visible(doc, &pair.menu))
        .map(|(i, _)| i)
        .collect();
    let expanded: Vec<usize> = nav
        .pairs()
        .iter()
        .enumerate()
        .filter(|(_, pair)| is_expanded(doc, &pair.trigger))
        .map(|(i, _)| i)
        .collect();

    assert!(open.len() <= 1, "more than one menu visible: {open:?}");
    assert_eq!(open, expanded);
    assert_eq!(open.first().copied(), nav.open_index());
    nav.open_index()
}
