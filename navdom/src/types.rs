/// The subset of the CSS `display` property the document tracks.
///
/// `Auto` means no inline style was set and the element renders with its
/// default box. Only `None` removes an element (and its subtree) from
/// rendering and from the focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    #[default]
    Auto,
    Block,
    None,
}

impl Display {
    pub fn is_hidden(&self) -> bool {
        matches!(self, Display::None)
    }
}
