//! The selector builder facade.
//!
//! [`SelectorBuilder`] exposes every builder verb from one place without
//! holding any selector state itself: each verb starts a fresh chain from
//! [`EMPTY_SELECTOR_BUILDER`], and [`SelectorBuilder::combine`] accepts the
//! combinator as a plain token.
//!
//! ```rust
//! use cssb::CSS_SELECTOR_BUILDER as builder;
//!
//! # fn main() -> Result<(), cssb::SelectorError> {
//! let link = builder.element("a")?.attribute(r#"href$=".png""#)?.pseudo_class("focus")?;
//! assert_eq!(link.stringify(), r#"a[href$=".png"]:focus"#);
//!
//! let siblings = builder.combine(&builder.element("h1")?, "~", &builder.element("p")?)?;
//! assert_eq!(siblings.stringify(), "h1 ~ p");
//! # Ok(())
//! # }
//! ```

use crate::combinator::Combinator;
use crate::error::SelectorError;
use crate::expression::{EMPTY_SELECTOR_BUILDER, SelectorExpression, combine};

/// Shared facade instance.
pub const CSS_SELECTOR_BUILDER: SelectorBuilder = SelectorBuilder;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectorBuilder;

impl SelectorBuilder {
    pub fn element(&self, name: &str) -> Result<SelectorExpression, SelectorError> {
        EMPTY_SELECTOR_BUILDER.element(name)
    }

    pub fn id(&self, name: &str) -> Result<SelectorExpression, SelectorError> {
        EMPTY_SELECTOR_BUILDER.id(name)
    }

    pub fn css_class(&self, name: &str) -> Result<SelectorExpression, SelectorError> {
        EMPTY_SELECTOR_BUILDER.css_class(name)
    }

    pub fn attribute(&self, condition: &str) -> Result<SelectorExpression, SelectorError> {
        EMPTY_SELECTOR_BUILDER.attribute(condition)
    }

    pub fn pseudo_class(&self, name: &str) -> Result<SelectorExpression, SelectorError> {
        EMPTY_SELECTOR_BUILDER.pseudo_class(name)
    }

    pub fn pseudo_element(&self, name: &str) -> Result<SelectorExpression, SelectorError> {
        EMPTY_SELECTOR_BUILDER.pseudo_element(name)
    }

    /// Joins two selectors with one of ` `, `+`, `~` or `>`.
    ///
    /// Any other token fails with [`SelectorError::InvalidCombinator`].
    pub fn combine(
        &self,
        left: &SelectorExpression,
        combinator: &str,
        right: &SelectorExpression,
    ) -> Result<SelectorExpression, SelectorError> {
        let combinator: Combinator = combinator.parse()?;
        Ok(combine(left, combinator, right))
    }
}
