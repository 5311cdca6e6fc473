use navdom::SelectorError;
use thiserror::Error;

/// Errors raised while building a [`crate::DisclosureConfig`].
///
/// Event handling itself never fails: missing elements and out-of-range
/// indices are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid {role} selector {input:?}: {source}")]
    InvalidSelector {
        /// Which selector was being set ("container", "trigger", ...).
        role: &'static str,
        input: String,
        #[source]
        source: SelectorError,
    },
}
