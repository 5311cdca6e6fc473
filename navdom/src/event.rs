/// DOM-style events with element targeting.
///
/// Every event carries the ID of its target; listeners see it while it
/// bubbles from the target up to the document root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Pointer or keyboard activation of an element
    Click { target: String },
    /// Key press, targeted at the focused element
    KeyDown(KeyboardEvent),
    /// Element gained focus
    FocusIn { target: String },
    /// Element lost focus. `related_target` is the element receiving focus,
    /// if any.
    FocusOut {
        target: String,
        related_target: Option<String>,
    },
}

impl DomEvent {
    pub fn click(target: impl Into<String>) -> Self {
        DomEvent::Click {
            target: target.into(),
        }
    }

    pub fn key_down(target: impl Into<String>, key: Key) -> Self {
        DomEvent::KeyDown(KeyboardEvent::new(target, key))
    }

    pub fn focus_out(target: impl Into<String>, related_target: Option<String>) -> Self {
        DomEvent::FocusOut {
            target: target.into(),
            related_target,
        }
    }

    pub fn target(&self) -> &str {
        match self {
            DomEvent::Click { target }
            | DomEvent::FocusIn { target }
            | DomEvent::FocusOut { target, .. } => target,
            DomEvent::KeyDown(event) => &event.target,
        }
    }

    /// Whether a listener cancelled the event's default action.
    pub fn default_prevented(&self) -> bool {
        match self {
            DomEvent::KeyDown(event) => event.default_prevented(),
            _ => false,
        }
    }
}

/// A `keydown` event. Listeners call [`KeyboardEvent::prevent_default`] to
/// suppress the host's default action (page scrolling for arrow keys).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardEvent {
    pub target: String,
    pub key: Key,
    pub modifiers: Modifiers,
    default_prevented: bool,
}

impl KeyboardEvent {
    pub fn new(target: impl Into<String>, key: Key) -> Self {
        Self {
            target: target.into(),
            key,
            modifiers: Modifiers::default(),
            default_prevented: false,
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    F(u8),
    Unidentified,
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

// Conversion from crossterm types
impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::Insert => Key::Insert,
            KeyCode::F(n) => Key::F(n),
            _ => Key::Unidentified,
        }
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}
