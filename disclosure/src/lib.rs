//! Keyboard-navigable disclosure navigation menus.
//!
//! A disclosure menu is a button that shows or hides a list of links. A
//! [`DisclosureNav`] owns every button/list pair inside one container,
//! keeps at most one of them open, mirrors the open state onto
//! `aria-expanded` and the list's `display` style, and moves focus between
//! buttons and links in response to the arrow, Home, End and Escape keys.
//!
//! [`DisclosurePage`] wires one controller per container on a page and
//! routes [`navdom::DomEvent`]s to them.

pub mod config;
pub mod controller;
pub mod error;
pub mod keyboard;
pub mod listener;
pub mod page;

pub use config::DisclosureConfig;
pub use controller::{DisclosureNav, DisclosurePair};
pub use error::Error;
pub use keyboard::control_focus_by_key;
pub use listener::{Listener, ListenerKind, ListenerRegistry};
pub use page::{DisclosurePage, DispatchOutcome};

/// Attribute mirroring a trigger's expansion state.
pub const ARIA_EXPANDED: &str = "aria-expanded";
