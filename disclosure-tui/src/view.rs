//! Text rendering of a document: one line per visible heading, trigger or
//! link.

use disclosure::ARIA_EXPANDED;
use navdom::{Content, Document, Element};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub focused: bool,
}

/// Visible lines of the document in tree order. Hidden subtrees are
/// skipped; nested lists indent their items.
pub fn render_lines(doc: &Document) -> Vec<Line> {
    let mut lines = Vec::new();
    render_recursive(doc.root(), doc.active_element(), 0, &mut lines);
    lines
}

fn render_recursive(element: &Element, focused: Option<&str>, depth: usize, lines: &mut Vec<Line>) {
    if element.is_hidden() {
        return;
    }

    let indent = "  ".repeat(depth);
    let text = match (element.tag.as_str(), &element.content) {
        ("button", _) => {
            let marker = match element.get_attr(ARIA_EXPANDED) {
                Some("true") => "▾",
                Some(_) => "▸",
                None => " ",
            };
            Some(format!("{indent}{marker} {}", element.text_content()))
        }
        ("a", _) => Some(format!("{indent}  {}", element.text_content())),
        (_, Content::Text(text)) => Some(format!("{indent}{text}")),
        _ => None,
    };

    if let Some(text) = text {
        lines.push(Line {
            text,
            focused: focused == Some(element.id.as_str()),
        });
        return;
    }

    let depth = if element.tag == "ul" { depth + 1 } else { depth };
    for child in element.child_elements() {
        render_recursive(child, focused, depth, lines);
    }
}

/// Pad `text` with spaces to `width` display columns.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let current = text.width();
    if current >= width {
        return text.to_string();
    }
    format!("{text}{}", " ".repeat(width - current))
}

#[cfg(test)]
mod tests {
    use disclosure::{DisclosureConfig, DisclosurePage};
    use navdom::DomEvent;

    use super::*;
    use crate::sample;

    fn page() -> DisclosurePage {
        let mut page = DisclosurePage::new(Document::new(sample::page()), DisclosureConfig::default());
        page.init();
        page
    }

    #[test]
    fn collapsed_page_shows_only_triggers() {
        let page = page();
        let texts: Vec<_> = render_lines(page.document())
            .into_iter()
            .map(|line| line.text)
            .collect();
        assert_eq!(
            texts,
            vec![
                "Mythical University",
                "  ▸ About",
                "  ▸ Admissions",
                "  ▸ Academics",
                "  Skip to top",
            ]
        );
    }

    #[test]
    fn open_menu_lists_links_and_marks_focus() {
        let mut page = page();
        page.dispatch(DomEvent::click("id_about_button"));
        page.document_mut().focus("id_about_button");

        let lines = render_lines(page.document());
        assert_eq!(lines[1].text, "  ▾ About");
        assert!(lines[1].focused);
        assert_eq!(lines[2].text, "      Overview");
        assert_eq!(lines.len(), 5 + 4);
    }

    #[test]
    fn pad_counts_display_columns() {
        assert_eq!(pad_to_width("ab", 4), "ab  ");
        assert_eq!(pad_to_width("▾ a", 4), "▾ a ");
        assert_eq!(pad_to_width("abcdef", 4), "abcdef");
    }
}
