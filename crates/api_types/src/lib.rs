use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// ISO-4217-like currency code, normalized to upper case.
///
/// The backend is not strict about the set of codes it stores (user-created
/// crypto wallets carry free-form tickers), so this is a newtype over the
/// normalized string rather than a closed enum.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn new(code: &str) -> Self {
        Self(code.trim().to_ascii_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CurrencyCode {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

pub mod wallet {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum WalletKind {
        Card,
        Cash,
        Crypto,
    }

    /// A wallet as the backend returns it.
    ///
    /// Balances travel as decimal strings; the JSON uses camelCase keys.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct WalletView {
        pub id: Uuid,
        pub owner_id: String,
        pub name: String,
        #[serde(rename = "type")]
        pub kind: WalletKind,
        /// Decimal string, e.g. `"1234.56"`.
        pub balance: String,
        pub currency: CurrencyCode,
        /// Balance converted into the reference currency, when the backend
        /// had a rate for it.
        pub balance_in_reference_currency: Option<String>,
        /// At most one wallet per owner should carry this flag; clients must
        /// tolerate zero.
        pub is_primary: bool,
    }
}

pub mod calibration {
    use super::*;

    /// Request body for calibrating a single wallet against a user-asserted
    /// real-world balance.
    #[derive(Clone, Copy, Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct CalibrationRequest {
        pub actual_balance: f64,
    }

    #[derive(Clone, Copy, Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct CalibrationResponse {
        pub calibration_applied: bool,
        /// `true` when the server wrote a correcting transaction for an
        /// unaccounted shortfall.
        pub correction_transaction_created: bool,
    }
}

pub mod reorder {
    use super::*;

    /// One dense 1-based rank assignment.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ReorderItem {
        pub id: Uuid,
        pub position: u32,
    }

    /// The new canonical order for a list.
    ///
    /// Positions are a permutation of `1..=N` with no gaps or repeats; the
    /// server treats its own persisted order as authoritative afterwards.
    #[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ReorderRequest {
        pub items: Vec<ReorderItem>,
    }
}

pub mod receipt {
    use super::*;

    /// Request body for the remote AI receipt scan.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ReceiptScanRequest {
        pub image_base64: String,
    }

    /// Fields the scanner managed to extract. All optional; a scan that
    /// recognizes nothing is still a success at the transport level.
    #[derive(Clone, Debug, Default, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ReceiptScan {
        pub merchant: Option<String>,
        /// Decimal string, same convention as wallet balances.
        pub total: Option<String>,
        pub currency: Option<CurrencyCode>,
        pub date: Option<NaiveDate>,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_code_normalizes() {
        assert_eq!(CurrencyCode::new(" idr ").as_str(), "IDR");
        assert_eq!(CurrencyCode::from("usd"), CurrencyCode::new("USD"));
    }

    #[test]
    fn wallet_view_uses_wire_names() {
        let json = r#"{
            "id": "7e3b4e0a-95a1-4a58-9c0e-3b1f5f9f1a11",
            "ownerId": "u-1",
            "name": "Checking",
            "type": "card",
            "balance": "100.00",
            "currency": "IDR",
            "balanceInReferenceCurrency": "6.35",
            "isPrimary": true
        }"#;
        let wallet: wallet::WalletView = serde_json::from_str(json).unwrap();
        assert_eq!(wallet.owner_id, "u-1");
        assert_eq!(wallet.kind, wallet::WalletKind::Card);
        assert_eq!(wallet.currency, CurrencyCode::new("IDR"));
        assert_eq!(wallet.balance_in_reference_currency.as_deref(), Some("6.35"));
        assert!(wallet.is_primary);
    }
}
