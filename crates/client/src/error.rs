use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

/// Failure raised by the client layer.
///
/// Transport implementations must preserve enough shape here for the
/// classifier: a connection failure and a client-side abort are different
/// variants, and HTTP failures keep their status code next to the
/// server-provided message.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection-level failure (DNS, refused, TLS, reset mid-body).
    #[error("Network request failed: {0}")]
    Transport(String),
    /// The request was aborted or timed out on the client side.
    #[error("Request aborted")]
    Aborted,
    /// Non-success HTTP status; `message` is the server's error body when
    /// one was readable.
    #[error("{message}")]
    Status { code: u16, message: String },
    /// The response arrived but could not be decoded.
    #[error("invalid response payload: {0}")]
    Payload(String),
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("{0}")]
    Other(String),
}
