use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Selector error: {0}")]
    Selector(#[from] cssb::SelectorError),

    #[error("Object error: {0}")]
    Objects(#[from] objects::ObjectsError),

    #[error("Logger error: {0}")]
    Logger(#[from] log::SetLoggerError),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;
