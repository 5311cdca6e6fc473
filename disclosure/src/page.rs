//! Page bootstrap: one controller per disclosure container.

use std::collections::VecDeque;

use navdom::{Document, DomEvent};

use crate::config::DisclosureConfig;
use crate::controller::DisclosureNav;

/// Upper bound on events handled by a single [`DisclosurePage::dispatch`],
/// counting the focus events handlers cause.
const MAX_DISPATCH: usize = 64;

/// Result of routing one event through the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// A listener cancelled the original event's default action.
    pub default_prevented: bool,
    /// Events delivered: the original plus queued focus changes.
    pub events_dispatched: usize,
}

/// A document together with the disclosure controllers wired into it.
#[derive(Debug)]
pub struct DisclosurePage {
    document: Document,
    controllers: Vec<DisclosureNav>,
    config: DisclosureConfig,
}

impl DisclosurePage {
    /// Take ownership of the document and mark its root with the
    /// script-enabled class. Controllers are created by
    /// [`DisclosurePage::init`].
    pub fn new(mut document: Document, config: DisclosureConfig) -> Self {
        let root = document.root_id().to_string();
        document.add_class(&root, &config.script_class);
        Self {
            document,
            controllers: Vec::new(),
            config,
        }
    }

    /// Create and initialize a controller for every container in the
    /// document. Returns how many controllers the page now has.
    pub fn init(&mut self) -> usize {
        for container in self.document.query_selector_all(&self.config.container) {
            let mut nav = DisclosureNav::with_config(container, &self.config);
            nav.init(&mut self.document);
            self.controllers.push(nav);
        }
        log::info!("[page] {} disclosure controllers", self.controllers.len());
        self.controllers.len()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn controllers(&self) -> &[DisclosureNav] {
        &self.controllers
    }

    pub fn arrow_keys_enabled(&self) -> bool {
        self.config.use_arrow_keys
    }

    /// Turn arrow-key navigation on or off for every controller.
    pub fn set_arrow_keys(&mut self, enabled: bool) {
        self.config.use_arrow_keys = enabled;
        for nav in &mut self.controllers {
            nav.update_key_controls(enabled);
        }
        log::debug!("[page] arrow keys {}", if enabled { "on" } else { "off" });
    }

    /// Route an event to every controller, then route the focus events the
    /// handlers queued until none remain.
    pub fn dispatch(&mut self, event: DomEvent) -> DispatchOutcome {
        let mut outcome = DispatchOutcome::default();
        let mut queue = VecDeque::from([event]);

        while let Some(mut event) = queue.pop_front() {
            if outcome.events_dispatched >= MAX_DISPATCH {
                log::warn!("[page] dispatch limit reached, dropping {:?}", event);
                break;
            }
            log::trace!("[page] dispatch {:?}", event);

            for nav in &mut self.controllers {
                nav.handle_event(&mut self.document, &mut event);
            }

            if outcome.events_dispatched == 0 {
                outcome.default_prevented = event.default_prevented();
            }
            outcome.events_dispatched += 1;
            queue.extend(self.document.take_pending_events());
        }

        outcome
    }

    /// Dispatch a batch of events in order.
    pub fn dispatch_all(&mut self, events: impl IntoIterator<Item = DomEvent>) -> Vec<DispatchOutcome> {
        events.into_iter().map(|event| self.dispatch(event)).collect()
    }
}
