//! Calibration previews: what would change if the user's asserted real-world
//! balance were applied to a wallet.

use api_types::wallet::WalletView;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::amount;

/// Differences at or below this magnitude are treated as noise.
pub const CHANGE_TOLERANCE: f64 = 0.01;

const WARNING_PERCENT: f64 = 5.0;
const CRITICAL_PERCENT: f64 = 10.0;

/// How large a reconciliation delta is, relative to the reported balance.
///
/// Drives UI emphasis and batch-summary reporting. Thresholds are strict:
/// a delta of exactly 5% is still [`Severity::Same`]-tier emphasis and
/// exactly 10% is still [`Severity::Warning`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Same,
    Warning,
    Critical,
}

/// Pure projection of (wallet, user-entered actual balance).
///
/// Recomputed on every input change; never persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct CalibrationPreview {
    pub wallet_id: Uuid,
    pub reported_balance: f64,
    pub actual_balance: f64,
    /// Signed: negative means the real balance is lower than reported.
    pub difference: f64,
    /// Always non-negative; direction lives in `difference`.
    pub percent_change: f64,
    pub severity: Severity,
    /// Whether applying this preview should create a correcting transaction
    /// for an unaccounted spend.
    pub will_correct: bool,
    /// Whether the user supplied a value that actually differs.
    pub changed: bool,
}

/// Computes the preview for one wallet.
///
/// `entered` is the user-supplied actual balance, absent when the field was
/// left blank. A wallet whose stored balance fails to parse is previewed
/// against 0.0 so the projection stays total.
#[must_use]
pub fn preview(wallet: &WalletView, entered: Option<f64>) -> CalibrationPreview {
    let reported_balance = amount::parse(&wallet.balance).unwrap_or(0.0);
    let actual_balance = entered.unwrap_or(reported_balance);
    let difference = actual_balance - reported_balance;
    let changed = entered.is_some() && difference.abs() > CHANGE_TOLERANCE;

    // Guard the division; a wallet reported at zero has no meaningful ratio.
    let percent_change = if reported_balance == 0.0 {
        0.0
    } else {
        (difference.abs() / reported_balance.abs()) * 100.0
    };

    let severity = if changed && percent_change > CRITICAL_PERCENT {
        Severity::Critical
    } else if changed && percent_change > WARNING_PERCENT {
        Severity::Warning
    } else {
        Severity::Same
    };

    CalibrationPreview {
        wallet_id: wallet.id,
        reported_balance,
        actual_balance,
        difference,
        percent_change,
        severity,
        will_correct: difference < -CHANGE_TOLERANCE,
        changed,
    }
}
