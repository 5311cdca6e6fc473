//! The sample page: a university site header with three disclosure menus.

use disclosure::ARIA_EXPANDED;
use navdom::Element;

const PAGE_CONTENT: &str = "#mythical-page-content";

fn menu(id: &str, label: &str, links: &[&str]) -> Element {
    let menu_id = format!("id_{id}_menu");
    Element::li()
        .child(
            Element::button(label)
                .id(format!("id_{id}_button"))
                .attr(ARIA_EXPANDED, "true")
                .attr("aria-controls", menu_id.as_str()),
        )
        .child(
            Element::ul().id(menu_id).children(
                links
                    .iter()
                    .map(|text| Element::li().child(Element::link(*text, PAGE_CONTENT))),
            ),
        )
}

/// Build the sample document. Menus start expanded, as static markup
/// would, until the page bootstrap collapses them.
pub fn page() -> Element {
    Element::html().id("html").child(
        Element::new("body")
            .id("body")
            .child(Element::text("Mythical University").id("site-title"))
            .child(
                Element::nav()
                    .id("main-nav")
                    .class("disclosure-nav")
                    .attr("aria-label", "Mythical University")
                    .child(
                        Element::ul()
                            .child(menu(
                                "about",
                                "About",
                                &["Overview", "Administration", "Facts", "Campus Tours"],
                            ))
                            .child(menu(
                                "admissions",
                                "Admissions",
                                &[
                                    "Apply",
                                    "Tuition",
                                    "Sign Up",
                                    "Visit",
                                    "Photo Tour",
                                    "Connect",
                                ],
                            ))
                            .child(menu(
                                "academics",
                                "Academics",
                                &[
                                    "Colleges & Schools",
                                    "Programs of Study",
                                    "Honors Programs",
                                    "Online Courses",
                                    "Course Explorer",
                                    "Register for Class",
                                    "Academic Calendar",
                                    "Transcripts",
                                ],
                            )),
                    ),
            )
            .child(
                Element::new("main")
                    .id("mythical-page-content")
                    .child(Element::link("Skip to top", "#html").id("skip-top")),
            ),
    )
}
