//! Batch wallet calibration.
//!
//! Drives the engine's previews over a collection of wallets, submitting
//! one correction request per changed wallet. Items succeed or fail
//! independently; the caller gets one aggregate outcome.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use api_types::calibration::CalibrationResponse;
use async_trait::async_trait;
use engine::CalibrationPreview;
use uuid::Uuid;

use crate::{
    Result,
    cache::{Cache, keys},
    classify::{ErrorKind, classify},
};

#[async_trait]
pub trait CalibrationApi: Send + Sync {
    async fn submit(&self, wallet_id: Uuid, actual_balance: f64) -> Result<CalibrationResponse>;
}

/// Cooperative cancellation for an in-flight batch.
///
/// Checked between items only: the current submission always completes, so
/// the server never sees a write abandoned mid-request.
#[derive(Clone, Debug, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalibrationFailure {
    pub wallet_id: Uuid,
    pub message: String,
}

/// Aggregate result of one batch run, surfaced once and discarded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CalibrationOutcome {
    /// Count of changed previews, whether or not each was reached.
    pub attempted: usize,
    pub succeeded: usize,
    pub corrections_created: usize,
    pub failures: Vec<CalibrationFailure>,
}

impl CalibrationOutcome {
    /// `false` means "no changes applied", which is not an error when
    /// nothing needed applying.
    pub fn applied_any(&self) -> bool {
        self.succeeded > 0
    }
}

/// Batch executor. Built once per calibration screen, run per confirmation.
pub struct Reconciler<A> {
    api: A,
    on_complete: Option<Box<dyn Fn(&CalibrationOutcome) + Send + Sync>>,
}

impl<A: CalibrationApi> Reconciler<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            on_complete: None,
        }
    }

    /// Injected observer invoked with the final outcome (the reward toast
    /// and similar UI reactions live outside the core).
    pub fn on_complete(
        mut self,
        observer: impl Fn(&CalibrationOutcome) + Send + Sync + 'static,
    ) -> Self {
        self.on_complete = Some(Box::new(observer));
        self
    }

    /// Runs the batch.
    ///
    /// Submissions are strictly sequential: the server creates correcting
    /// transactions against per-owner balances, and those writes must not
    /// race. A failed item is recorded and the loop moves on; only a
    /// network-classified failure (transport down) abandons the remainder,
    /// and partial results already recorded are still returned.
    pub async fn run(
        &self,
        previews: &[CalibrationPreview],
        cancel: &CancelFlag,
    ) -> CalibrationOutcome {
        let changed: Vec<&CalibrationPreview> =
            previews.iter().filter(|preview| preview.changed).collect();
        let mut outcome = CalibrationOutcome {
            attempted: changed.len(),
            ..CalibrationOutcome::default()
        };

        for preview in changed {
            if cancel.is_cancelled() {
                tracing::info!(
                    "calibration batch cancelled after {} of {} wallets",
                    outcome.succeeded + outcome.failures.len(),
                    outcome.attempted
                );
                break;
            }

            match self
                .api
                .submit(preview.wallet_id, preview.actual_balance)
                .await
            {
                Ok(response) => {
                    outcome.succeeded += 1;
                    if response.correction_transaction_created {
                        outcome.corrections_created += 1;
                    }
                }
                Err(err) => {
                    let classified = classify(&err);
                    tracing::warn!(
                        "calibration failed for wallet {}: {err}",
                        preview.wallet_id
                    );
                    outcome.failures.push(CalibrationFailure {
                        wallet_id: preview.wallet_id,
                        message: err.to_string(),
                    });
                    if classified.kind == ErrorKind::Network {
                        tracing::warn!("transport down, abandoning remaining calibrations");
                        break;
                    }
                }
            }
        }

        if let Some(observer) = &self.on_complete {
            observer(&outcome);
        }
        outcome
    }
}

/// Caller policy after a batch: anything applied means the wallet and
/// transaction views are stale.
pub fn refresh_after<C: Cache>(outcome: &CalibrationOutcome, cache: &C) {
    if outcome.applied_any() {
        cache.invalidate(keys::WALLETS);
        cache.invalidate(keys::TRANSACTIONS);
    }
}
