//! Defines the app level error type and its conversion to JSON responses.
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The request body is missing one or more required fields, or a field
    /// was given as an empty string.
    #[error("Please provide all the required parameters")]
    MissingParameters,

    /// The request body could not be read as a JSON object with the expected fields.
    ///
    /// The string is the reason given by the JSON extractor.
    #[error("Invalid request body: {0}")]
    InvalidRequestBody(String),

    /// The email used to register a user already belongs to another user.
    #[error("This email has already been registered")]
    DuplicateEmail,

    /// The supplied password does not match the stored password hash.
    #[error("Incorrect password")]
    InvalidCredentials,

    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the parameters
    /// (e.g., ID) are correct and that the resource has been created.
    #[error("the requested resource could not be found")]
    NotFound,

    /// No user has the ID given in the request path.
    #[error("No user with id {0}")]
    UserNotFound(String),

    /// No user has the email given in the log-in request.
    #[error("No user exists with the email provided")]
    EmailNotFound,

    /// An unexpected error occurred with the underlying hashing library.
    ///
    /// The error string should only be logged for debugging on the server.
    /// When communicating with the application client this error should be
    /// replaced with a general error type indicating an internal server error.
    #[error("hashing failed: {0}")]
    HashingError(String),

    /// Could not acquire the lock on the user store.
    #[error("could not acquire the user store lock")]
    StoreLockError,

    /// An error occurred while serializing or deserializing the user store as JSON.
    #[error("could not serialize as JSON: {0}")]
    JSONSerializationError(String),

    /// An error occurred while reading or writing the user store file.
    #[error("could not access the user store file: {0}")]
    IoError(String),
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::JSONSerializationError(value.to_string())
    }
}

impl From<JsonRejection> for Error {
    fn from(value: JsonRejection) -> Self {
        Error::InvalidRequestBody(value.body_text())
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Error::IoError(value.to_string())
    }
}

impl From<bcrypt::BcryptError> for Error {
    fn from(value: bcrypt::BcryptError) -> Self {
        Error::HashingError(value.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status_code = match &self {
            Error::MissingParameters
            | Error::InvalidRequestBody(_)
            | Error::DuplicateEmail
            | Error::InvalidCredentials => StatusCode::BAD_REQUEST,
            Error::NotFound | Error::UserNotFound(_) | Error::EmailNotFound => {
                StatusCode::NOT_FOUND
            }
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": "Internal server error, check the server logs for more details",
                    })),
                )
                    .into_response();
            }
        };

        (status_code, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
