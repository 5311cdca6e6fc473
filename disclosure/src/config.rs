//! Controller and page configuration.

use navdom::Selector;

use crate::error::Error;

/// Class added to the document root once the page script has loaded, so
/// stylesheets can tell a scripted page from a static one.
pub const SCRIPT_ENABLED_CLASS: &str = "js-enabled";

/// Structural queries and initial settings for disclosure controllers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisclosureConfig {
    /// Containers that get their own controller (`.disclosure-nav`).
    pub container: Selector,

    /// Trigger buttons inside a container
    /// (`button[aria-expanded][aria-controls]`).
    pub trigger: Selector,

    /// The menu controlled by a trigger: the first match among the
    /// descendants of the trigger's parent (`ul`).
    pub menu: Selector,

    /// Focusable links inside a menu (`a`).
    pub link: Selector,

    /// Marker class for the document root.
    pub script_class: String,

    /// Whether arrow keys, Home and End move focus.
    pub use_arrow_keys: bool,
}

impl Default for DisclosureConfig {
    fn default() -> Self {
        Self {
            container: Selector::any().with_class("disclosure-nav"),
            trigger: Selector::tag("button")
                .with_attr("aria-expanded")
                .with_attr("aria-controls"),
            menu: Selector::tag("ul"),
            link: Selector::tag("a"),
            script_class: SCRIPT_ENABLED_CLASS.to_string(),
            use_arrow_keys: true,
        }
    }
}

impl DisclosureConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn container_selector(mut self, input: &str) -> Result<Self, Error> {
        self.container = parse("container", input)?;
        Ok(self)
    }

    pub fn trigger_selector(mut self, input: &str) -> Result<Self, Error> {
        self.trigger = parse("trigger", input)?;
        Ok(self)
    }

    pub fn menu_selector(mut self, input: &str) -> Result<Self, Error> {
        self.menu = parse("menu", input)?;
        Ok(self)
    }

    pub fn link_selector(mut self, input: &str) -> Result<Self, Error> {
        self.link = parse("link", input)?;
        Ok(self)
    }

    pub fn script_class(mut self, class: impl Into<String>) -> Self {
        self.script_class = class.into();
        self
    }

    /// Set whether arrow-key navigation starts enabled.
    pub fn use_arrow_keys(mut self, enabled: bool) -> Self {
        self.use_arrow_keys = enabled;
        self
    }
}

fn parse(role: &'static str, input: &str) -> Result<Selector, Error> {
    Selector::parse(input).map_err(|source| Error::InvalidSelector {
        role,
        input: input.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use navdom::SelectorError;

    use super::*;

    #[test]
    fn defaults_match_parsed_selectors() {
        let config = DisclosureConfig::default();
        assert_eq!(config.container, Selector::parse(".disclosure-nav").unwrap());
        assert_eq!(
            config.trigger,
            Selector::parse("button[aria-expanded][aria-controls]").unwrap()
        );
        assert_eq!(config.menu, Selector::parse("ul").unwrap());
        assert_eq!(config.link, Selector::parse("a").unwrap());
        assert!(config.use_arrow_keys);
    }

    #[test]
    fn invalid_selector_names_its_role() {
        let err = DisclosureConfig::new().menu_selector("ul >").unwrap_err();
        assert_eq!(
            err,
            Error::InvalidSelector {
                role: "menu",
                input: "ul >".to_string(),
                source: SelectorError::UnexpectedChar { ch: ' ', position: 2 },
            }
        );
        assert!(err.to_string().starts_with("invalid menu selector"));
    }
}
