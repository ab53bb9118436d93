use thiserror::Error;

/// Engine custom errors.
///
/// The derivation functions themselves never fail; only explicit user-input
/// parsing ([`crate::amount::parse_entered`]) reports errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}
