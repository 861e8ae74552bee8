//! JSON round-trips.
//!
//! ```rust
//! use objects::{Rectangle, from_json, get_json};
//!
//! let json = get_json(&[1, 2, 3]).unwrap();
//! assert_eq!(json, "[1,2,3]");
//!
//! let r: Rectangle = from_json(r#"{"width":10, "height":20}"#).unwrap();
//! assert_eq!(r.area(), 200.0);
//! ```

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ObjectsError;

/// Compact JSON representation of `value`.
pub fn get_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ObjectsError> {
    Ok(serde_json::to_string(value)?)
}

/// Builds a `T` from its JSON representation.
///
/// Fields missing from `T` are ignored; fields `T` requires must be present.
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T, ObjectsError> {
    let value = serde_json::from_str(json).inspect_err(|e| {
        log::debug!("failed to read {}: {e}", std::any::type_name::<T>());
    })?;
    Ok(value)
}
