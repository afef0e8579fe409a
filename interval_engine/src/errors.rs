#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An interval was built with its start after its end.
    #[error("invalid interval: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, Error>;
