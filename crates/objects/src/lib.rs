//! Small object helpers that sit beside the selector builder.
//!
//! - [`rectangle`]: a width/height pair with an area
//! - [`json`]: serialize any value to compact JSON and read it back as a
//!   concrete type
//! - [`animals`]: a trait with shared behavior and two specialized types

pub mod animals;
pub mod error;
pub mod json;
pub mod rectangle;

pub use animals::{Animal, Cat, Dog};
pub use error::ObjectsError;
pub use json::{from_json, get_json};
pub use rectangle::Rectangle;
