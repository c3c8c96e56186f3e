//! Error type shared by every Notehub operation.

use thiserror::Error;

/// Error returned by [`Notehub`](crate::Notehub) calls.
///
/// Every failure mode surfaces synchronously as one of these variants;
/// nothing is retried or suppressed inside the client. The first two are
/// raised before any network traffic happens.
#[derive(Debug, Error)]
pub enum NotehubError {
    /// Caller input rejected before the request was built.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The PID/PSK pair is malformed.
    #[error("invalid credentials: {0}")]
    InvalidCredentials(String),

    /// The HTTP transport failed before a response was received.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success HTTP status code.
    #[error("server returned non-200 response code: {0}")]
    HttpStatus(u16),

    /// The server answered 200 but flagged the call as failed in the
    /// response envelope.
    #[error("api error (code {code}): {message}")]
    Api { code: i64, message: String },

    /// The server answered 200 but the body is not the expected structure.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}
