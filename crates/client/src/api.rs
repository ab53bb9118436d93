//! Typed endpoint wrappers over the transport.

use api_types::{
    calibration::{CalibrationRequest, CalibrationResponse},
    receipt::{ReceiptScan, ReceiptScanRequest},
    reorder::ReorderRequest,
    wallet::WalletView,
};
use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::{
    ClientError, Result,
    normalize::normalize_as,
    optimistic::ReorderApi,
    reconcile::CalibrationApi,
    transport::Transport,
};

#[derive(Debug, Clone)]
pub struct Api<T> {
    transport: T,
}

impl<T: Transport> Api<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Lists the user's wallets.
    ///
    /// The endpoint answers with a bare array or a paginated envelope
    /// depending on query parameters; both normalize to the same list.
    pub async fn list_wallets(&self) -> Result<Vec<WalletView>> {
        let value = self.transport.get("wallets").await?;
        Ok(normalize_as(value))
    }

    /// Calibrates one wallet against a user-asserted actual balance.
    pub async fn calibrate(
        &self,
        wallet_id: Uuid,
        actual_balance: f64,
    ) -> Result<CalibrationResponse> {
        let body = to_body(&CalibrationRequest { actual_balance })?;
        let value = self
            .transport
            .post(&format!("wallets/{wallet_id}/calibrate"), body)
            .await?;
        from_value(value)
    }

    /// Persists a new canonical wallet order.
    pub async fn reorder_wallets(&self, payload: &ReorderRequest) -> Result<()> {
        self.transport
            .patch("wallets/reorder", to_body(payload)?)
            .await?;
        Ok(())
    }

    /// Sends a receipt image to the remote AI scanner.
    ///
    /// Failures from this endpoint are the main source of the
    /// `INSUFFICIENT_CREDITS` classification.
    pub async fn scan_receipt(&self, image: &[u8]) -> Result<ReceiptScan> {
        let body = to_body(&ReceiptScanRequest {
            image_base64: STANDARD.encode(image),
        })?;
        let value = self.transport.post("receipts/scan", body).await?;
        from_value(value)
    }
}

fn to_body<S: Serialize>(payload: &S) -> Result<Value> {
    serde_json::to_value(payload).map_err(|err| ClientError::Payload(err.to_string()))
}

fn from_value<D: serde::de::DeserializeOwned>(value: Value) -> Result<D> {
    serde_json::from_value(value).map_err(|err| ClientError::Payload(err.to_string()))
}

#[async_trait]
impl<T: Transport> CalibrationApi for Api<T> {
    async fn submit(&self, wallet_id: Uuid, actual_balance: f64) -> Result<CalibrationResponse> {
        self.calibrate(wallet_id, actual_balance).await
    }
}

#[async_trait]
impl<T: Transport> ReorderApi for Api<T> {
    async fn reorder(&self, payload: &ReorderRequest) -> Result<()> {
        self.reorder_wallets(payload).await
    }
}
