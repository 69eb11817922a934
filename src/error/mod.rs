use crate::document::DocumentError;
use thiserror::Error;

pub type AppResult<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Document(#[from] DocumentError),
    #[error("invalid arguments: {0}")]
    Arguments(#[from] pico_args::Error),
    #[error("missing preview document path")]
    MissingDocumentPath,
    #[error("unexpected arguments: {}", .0.join(" "))]
    UnexpectedArguments(Vec<String>),
    #[error("failed to encode rendered preview")]
    Encode(#[source] serde_json::Error),
    #[error("window rendering requires the `gtk` feature")]
    WindowUnavailable,
}
