//! Persistent selector expressions.
//!
//! A [`SelectorExpression`] is never mutated once built. Every verb returns a
//! new expression holding a copy of the receiver's fragments plus one more, so
//! a partially built selector can be reused as the prefix of several others:
//!
//! ```rust
//! use cssb::EMPTY_SELECTOR_BUILDER;
//!
//! # fn main() -> Result<(), cssb::SelectorError> {
//! let base = EMPTY_SELECTOR_BUILDER.element("a")?.css_class("x")?;
//! let first = base.css_class("p1")?;
//! let second = base.pseudo_class("hover")?;
//!
//! assert_eq!(base.stringify(), "a.x");
//! assert_eq!(first.stringify(), "a.x.p1");
//! assert_eq!(second.stringify(), "a.x:hover");
//! # Ok(())
//! # }
//! ```

use std::fmt;

use crate::combinator::Combinator;
use crate::error::SelectorError;
use crate::fragment::Fragment;
use crate::sequence::FragmentSequence;

/// The shared empty root from which every builder chain starts.
pub const EMPTY_SELECTOR_BUILDER: SelectorExpression = SelectorExpression::new();

/// An immutable, possibly combined, CSS selector.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SelectorExpression {
    sequence: FragmentSequence,
}

impl SelectorExpression {
    pub const fn new() -> Self {
        Self {
            sequence: FragmentSequence::new(),
        }
    }

    /// Appends a type selector (`div`).
    pub fn element(&self, name: &str) -> Result<Self, SelectorError> {
        self.push(Fragment::element(name))
    }

    /// Appends an id selector (`#main`).
    pub fn id(&self, name: &str) -> Result<Self, SelectorError> {
        self.push(Fragment::id(name))
    }

    /// Appends a class selector (`.container`). May repeat.
    pub fn css_class(&self, name: &str) -> Result<Self, SelectorError> {
        self.push(Fragment::class(name))
    }

    /// Appends an attribute selector. `condition` is written between brackets
    /// verbatim.
    pub fn attribute(&self, condition: &str) -> Result<Self, SelectorError> {
        self.push(Fragment::attribute(condition))
    }

    /// Appends a pseudo-class (`:focus`, `:nth-of-type(even)`).
    pub fn pseudo_class(&self, name: &str) -> Result<Self, SelectorError> {
        self.push(Fragment::pseudo_class(name))
    }

    /// Appends a pseudo-element (`::before`).
    pub fn pseudo_element(&self, name: &str) -> Result<Self, SelectorError> {
        self.push(Fragment::pseudo_element(name))
    }

    fn push(&self, fragment: Fragment) -> Result<Self, SelectorError> {
        Ok(Self {
            sequence: self.sequence.append(fragment)?,
        })
    }

    /// Serializes the selector.
    pub fn stringify(&self) -> String {
        self.sequence.serialize()
    }

    pub fn fragments(&self) -> &[Fragment] {
        self.sequence.fragments()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

impl fmt::Display for SelectorExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.sequence, f)
    }
}

/// Joins two built selectors with a combinator.
///
/// The result keeps `left`'s fragments and appends the padded combinator and
/// the serialized `right` as a single literal fragment.
pub fn combine(
    left: &SelectorExpression,
    combinator: Combinator,
    right: &SelectorExpression,
) -> SelectorExpression {
    let text = format!("{}{}", combinator.padded(), right.stringify());
    log::trace!("combining `{left}` with literal `{text}`");

    SelectorExpression {
        sequence: left.sequence.append_literal(text),
    }
}
