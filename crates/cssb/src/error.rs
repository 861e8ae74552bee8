//! Error types for selector construction.
//!
//! Every builder verb validates the fragment it is about to append. When the
//! fragment would break CSS ordering or uniqueness rules, no new expression is
//! produced and one of these errors is returned instead.

use thiserror::Error;

use crate::fragment::FragmentKind;

/// Errors that can occur while building a selector.
///
/// # Examples
///
/// ```rust
/// use cssb::{EMPTY_SELECTOR_BUILDER, SelectorError};
///
/// let result = EMPTY_SELECTOR_BUILDER
///     .id("main")
///     .and_then(|s| s.id("other"));
/// assert!(matches!(result, Err(SelectorError::DuplicateKind { .. })));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// A second element, id or pseudo-element was requested on a chain that
    /// already carries one.
    #[error(
        "Element, id and pseudo-element should not occur more then one time inside the selector (duplicate {kind})"
    )]
    DuplicateKind { kind: FragmentKind },

    /// A fragment was requested after a fragment that must come later.
    #[error(
        "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element ({kind} after {after})"
    )]
    OrderViolation {
        kind: FragmentKind,
        after: FragmentKind,
    },

    /// A combinator token other than ` `, `+`, `~` or `>`.
    #[error("Unknown combinator: {0:?}")]
    InvalidCombinator(String),
}
