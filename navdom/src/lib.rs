pub mod document;
pub mod element;
pub mod event;
pub mod focus;
pub mod selector;
pub mod types;

pub use document::Document;
pub use element::{
    ancestor_path, contains, find_element, find_element_mut, find_parent, is_rendered, query_all,
    query_first, Content, Element,
};
pub use event::{DomEvent, Key, KeyboardEvent, Modifiers};
pub use focus::{collect_focusable, FocusState};
pub use selector::{AttrMatcher, Selector, SelectorError};
pub use types::Display;
