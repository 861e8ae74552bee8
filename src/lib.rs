//! CSS selector builder with small object helpers.
//!
//! The selector builder lives in [`cssb`]; the rectangle, JSON and animal
//! helpers in [`objects`]. This crate re-exports both and adds a file logger
//! for the demos.

pub mod error;
pub mod log_init;

pub use cssb;
pub use objects;

pub use cssb::{
    CSS_SELECTOR_BUILDER, Combinator, EMPTY_SELECTOR_BUILDER, SelectorBuilder, SelectorError,
    SelectorExpression, combine,
};
pub use error::{Error, Result};
pub use objects::{Animal, Cat, Dog, Rectangle, from_json, get_json};
