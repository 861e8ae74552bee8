use thiserror::Error;

#[derive(Error, Debug)]
pub enum ObjectsError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
