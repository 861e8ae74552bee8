//! # CSSB - CSS Selector Builder
//!
//! Builds CSS selector strings from typed fragments while enforcing the
//! canonical part order of a compound selector:
//!
//! ```text
//! element#id.class[attr]:pseudo-class::pseudo-element
//! ```
//!
//! Element, id and pseudo-element may each appear once; classes, attributes
//! and pseudo-classes may repeat. Selectors are joined with the combinators
//! ` `, `>`, `+` and `~`.
//!
//! ## Quick Start
//!
//! ```rust
//! use cssb::{CSS_SELECTOR_BUILDER as builder, SelectorError};
//!
//! # fn main() -> Result<(), SelectorError> {
//! let selector = builder.id("main")?.css_class("container")?.css_class("editable")?;
//! assert_eq!(selector.stringify(), "#main.container.editable");
//!
//! let joined = builder.combine(
//!     &builder.element("div")?.id("main")?,
//!     "+",
//!     &builder.element("p")?,
//! )?;
//! assert_eq!(joined.stringify(), "div#main + p");
//! # Ok(())
//! # }
//! ```
//!
//! ## Not Supported
//!
//! - Parsing selector strings
//! - Matching selectors against a document
//! - Specificity
//!
//! ## Modules
//!
//! - [`fragment`]: Typed fragments and their ranks
//! - [`sequence`]: Validated, append-only fragment lists
//! - [`combinator`]: Combinator tokens
//! - [`expression`]: Immutable selector expressions and `combine`
//! - [`builder`]: The builder facade
//! - [`error`]: Errors raised while building

pub mod builder;
pub mod combinator;
pub mod error;
pub mod expression;
pub mod fragment;
pub mod sequence;

pub use builder::{CSS_SELECTOR_BUILDER, SelectorBuilder};
pub use combinator::Combinator;
pub use error::SelectorError;
pub use expression::{EMPTY_SELECTOR_BUILDER, SelectorExpression, combine};
pub use fragment::{Fragment, FragmentKind};
pub use sequence::FragmentSequence;
