//! Listener registration.
//!
//! Controllers record which element each handler is attached to instead of
//! capturing themselves in closures. Dispatch walks an event's bubbling
//! path and runs every listener registered on each node, in registration
//! order.

/// Which controller handler a listener invokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    /// `click` on a trigger button
    TriggerClick,
    /// `keydown` on a trigger button
    TriggerKeyDown,
    /// `keydown` on a menu list
    MenuKeyDown,
    /// `focusout` on the controller's root container
    FocusOut,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listener {
    /// Element the listener is attached to.
    pub node: String,
    pub kind: ListenerKind,
}

#[derive(Debug, Clone, Default)]
pub struct ListenerRegistry {
    listeners: Vec<Listener>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a listener. Attaching the same listener twice makes it run
    /// twice, as with `addEventListener` and distinct closures.
    pub fn add(&mut self, node: impl Into<String>, kind: ListenerKind) {
        self.listeners.push(Listener {
            node: node.into(),
            kind,
        });
    }

    /// Listeners attached to `node`, in registration order.
    pub fn on<'a>(&'a self, node: &'a str) -> impl Iterator<Item = ListenerKind> + 'a {
        self.listeners
            .iter()
            .filter(move |listener| listener.node == node)
            .map(|listener| listener.kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Listener> {
        self.listeners.iter()
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}
