// errors.rs
use astra::Response;
use thiserror::Error;

/// Errors from the hosting layer: routing, request parsing, session locks.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Internal Server Error: {0}")]
    Internal(String),
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

/// Why a form workflow stopped. The message is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// Input rejected before any network call.
    #[error("{0}")]
    Validation(String),
    /// The backend answered but reported failure or returned nothing.
    #[error("{0}")]
    ServerReported(String),
    /// The backend could not be reached or its answer could not be read.
    #[error("{0}")]
    Transport(String),
}
