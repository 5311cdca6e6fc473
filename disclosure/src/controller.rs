//! The per-container disclosure controller.

use navdom::{Display, Document, DomEvent, Key, KeyboardEvent, Selector};

use crate::ARIA_EXPANDED;
use crate::config::DisclosureConfig;
use crate::keyboard::control_focus_by_key;
use crate::listener::{ListenerKind, ListenerRegistry};

/// A trigger button and the menu it shows and hides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisclosurePair {
    pub trigger: String,
    pub menu: String,
}

/// Controller for one disclosure navigation container.
///
/// Pairs are discovered once by [`DisclosureNav::init`] and addressed by
/// their discovery index afterwards. At most one pair is open at a time:
/// its menu is the only visible one and its trigger the only one with
/// `aria-expanded="true"`.
#[derive(Debug)]
pub struct DisclosureNav {
    root: String,
    pairs: Vec<DisclosurePair>,
    open_index: Option<usize>,
    use_arrow_keys: bool,
    listeners: ListenerRegistry,
    trigger_selector: Selector,
    menu_selector: Selector,
    link_selector: Selector,
}

impl DisclosureNav {
    /// Create a controller for the container `root` with default
    /// selectors. Nothing is touched until [`DisclosureNav::init`].
    pub fn new(root: impl Into<String>) -> Self {
        Self::with_config(root, &DisclosureConfig::default())
    }

    pub fn with_config(root: impl Into<String>, config: &DisclosureConfig) -> Self {
        Self {
            root: root.into(),
            pairs: Vec::new(),
            open_index: None,
            use_arrow_keys: config.use_arrow_keys,
            listeners: ListenerRegistry::new(),
            trigger_selector: config.trigger.clone(),
            menu_selector: config.menu.clone(),
            link_selector: config.link.clone(),
        }
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn pairs(&self) -> &[DisclosurePair] {
        &self.pairs
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open_index
    }

    pub fn use_arrow_keys(&self) -> bool {
        self.use_arrow_keys
    }

    pub fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }

    /// Discover trigger/menu pairs, collapse them, and attach listeners.
    ///
    /// A trigger whose parent holds no menu is skipped. Calling this twice
    /// registers every pair and listener twice.
    pub fn init(&mut self, doc: &mut Document) {
        if doc.get(&self.root).is_none() {
            log::warn!("[disclosure] root {} not found, nothing to initialize", self.root);
            return;
        }

        for trigger in doc.query_all(&self.root, &self.trigger_selector) {
            let menu = doc
                .parent_of(&trigger)
                .map(|parent| parent.id.clone())
                .and_then(|parent| doc.query_first(&parent, &self.menu_selector));
            let Some(menu) = menu else {
                log::debug!("[disclosure] trigger {} has no menu, skipping", trigger);
                continue;
            };

            doc.set_attr(&trigger, ARIA_EXPANDED, "false");
            self.toggle_menu(doc, Some(&menu), false);

            self.listeners.add(menu.as_str(), ListenerKind::MenuKeyDown);
            self.listeners.add(trigger.as_str(), ListenerKind::TriggerClick);
            self.listeners.add(trigger.as_str(), ListenerKind::TriggerKeyDown);
            self.pairs.push(DisclosurePair { trigger, menu });
        }

        self.listeners.add(self.root.as_str(), ListenerKind::FocusOut);
        log::debug!(
            "[disclosure] {} initialized with {} menus",
            self.root,
            self.pairs.len()
        );
    }

    /// Show or hide a menu. No-op for `None` or a missing element.
    pub fn toggle_menu(&self, doc: &mut Document, menu: Option<&str>, show: bool) {
        if let Some(menu) = menu {
            let display = if show { Display::Block } else { Display::None };
            doc.set_display(menu, display);
        }
    }

    /// Expand or collapse the pair at `index`.
    ///
    /// Any other open pair is collapsed first. An index that names no pair
    /// (including `None`) only performs that collapse.
    pub fn set_expansion(&mut self, doc: &mut Document, index: Option<usize>, expanded: bool) {
        if self.open_index != index {
            self.set_expansion(doc, self.open_index, false);
        }

        let Some(pair) = index.and_then(|i| self.pairs.get(i)).cloned() else {
            return;
        };

        self.open_index = if expanded { index } else { None };
        doc.set_attr(
            &pair.trigger,
            ARIA_EXPANDED,
            if expanded { "true" } else { "false" },
        );
        self.toggle_menu(doc, Some(&pair.menu), expanded);
        log::debug!(
            "[disclosure] {} {}",
            if expanded { "expanded" } else { "collapsed" },
            pair.trigger
        );
    }

    /// Enable or disable arrow/Home/End navigation for future key events.
    pub fn update_key_controls(&mut self, enabled: bool) {
        self.use_arrow_keys = enabled;
    }

    /// Run every listener this controller attached along the event's
    /// bubbling path.
    pub fn handle_event(&mut self, doc: &mut Document, event: &mut DomEvent) {
        let path = doc.event_path(event.target());
        for node in &path {
            let kinds: Vec<ListenerKind> = self.listeners.on(node).collect();
            for kind in kinds {
                match (kind, &mut *event) {
                    (ListenerKind::TriggerClick, DomEvent::Click { .. }) => {
                        self.handle_trigger_click(doc, node);
                    }
                    (ListenerKind::TriggerKeyDown, DomEvent::KeyDown(key_event)) => {
                        self.handle_trigger_key_down(doc, key_event);
                    }
                    (ListenerKind::MenuKeyDown, DomEvent::KeyDown(key_event)) => {
                        self.handle_menu_key_down(doc, key_event);
                    }
                    (ListenerKind::FocusOut, DomEvent::FocusOut { related_target, .. }) => {
                        let related = related_target.clone();
                        self.handle_focus_out(doc, related.as_deref());
                    }
                    _ => {}
                }
            }
        }
    }

    fn trigger_index(&self, id: &str) -> Option<usize> {
        self.pairs.iter().position(|pair| pair.trigger == id)
    }

    fn handle_trigger_click(&mut self, doc: &mut Document, trigger: &str) {
        let Some(index) = self.trigger_index(trigger) else {
            return;
        };
        let expanded = doc.get_attr(trigger, ARIA_EXPANDED) == Some("true");
        self.set_expansion(doc, Some(index), !expanded);
    }

    fn handle_trigger_key_down(&mut self, doc: &mut Document, event: &mut KeyboardEvent) {
        let target = doc
            .active_element()
            .and_then(|active| self.trigger_index(active));

        if event.key == Key::Escape {
            self.set_expansion(doc, self.open_index, false);
        } else if self.use_arrow_keys
            && self.open_index.is_some()
            && self.open_index == target
            && event.key == Key::Down
        {
            // Step from the open trigger into its menu.
            event.prevent_default();
            let first_link = self
                .open_index
                .and_then(|open| self.pairs.get(open))
                .and_then(|pair| doc.query_first(&pair.menu, &self.link_selector));
            if let Some(link) = first_link {
                doc.focus(&link);
            }
        } else if self.use_arrow_keys {
            let triggers: Vec<String> = self.pairs.iter().map(|p| p.trigger.clone()).collect();
            control_focus_by_key(doc, event, &triggers, target);
        }
    }

    fn handle_menu_key_down(&mut self, doc: &mut Document, event: &mut KeyboardEvent) {
        let Some(open) = self.open_index else {
            return;
        };
        let Some(pair) = self.pairs.get(open).cloned() else {
            return;
        };

        let links = doc.query_all(&pair.menu, &self.link_selector);
        let current = doc
            .active_element()
            .and_then(|active| links.iter().position(|link| link == active));

        if event.key == Key::Escape {
            doc.focus(&pair.trigger);
            self.set_expansion(doc, Some(open), false);
        } else if self.use_arrow_keys {
            control_focus_by_key(doc, event, &links, current);
        }
    }

    fn handle_focus_out(&mut self, doc: &mut Document, related_target: Option<&str>) {
        let focus_inside = related_target.is_some_and(|related| doc.contains(&self.root, related));
        if !focus_inside && self.open_index.is_some() {
            log::debug!("[disclosure] focus left {}, collapsing", self.root);
            self.set_expansion(doc, self.open_index, false);
        }
    }
}
