//! Pure financial derivations for the Gruzzolo client.
//!
//! Everything in this crate is synchronous and total: degenerate input
//! yields a defined sentinel (`None`, zero, `Severity::Same`) instead of an
//! error, so callers can recompute previews on every keystroke without
//! guarding.

pub use calibration::{CHANGE_TOLERANCE, CalibrationPreview, Severity, preview};
pub use conversion::{REFERENCE_CURRENCY, to_reference};
pub use defaults::pick_default_wallet;
pub use error::EngineError;

pub mod amount;
mod calibration;
mod conversion;
mod defaults;
mod error;

type ResultEngine<T> = Result<T, EngineError>;
