//! Optimistic list mutation with snapshot/rollback.
//!
//! The concrete use is wallet reordering: the UI applies the new order
//! immediately, the server confirms later. A failure restores the exact
//! pre-mutation state; a success invalidates the cached list so the next
//! read reconciles with the server's authoritative order.

use api_types::reorder::{ReorderItem, ReorderRequest};
use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::{
    Result,
    classify::{ClassifiedError, classify},
};

/// Lifecycle of one speculative mutation.
///
/// A tagged state rather than boolean flags: "pending with no snapshot" is
/// unrepresentable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MutationState<S> {
    Idle,
    Pending { snapshot: S },
    Committed,
    RolledBack,
}

impl<S> MutationState<S> {
    pub fn is_pending(&self) -> bool {
        matches!(self, MutationState::Pending { .. })
    }
}

/// Anything with a stable identity that can be ranked.
pub trait Identified {
    fn ident(&self) -> Uuid;
}

impl Identified for Uuid {
    fn ident(&self) -> Uuid {
        *self
    }
}

impl Identified for api_types::wallet::WalletView {
    fn ident(&self) -> Uuid {
        self.id
    }
}

impl Identified for ReorderItem {
    fn ident(&self) -> Uuid {
        self.id
    }
}

/// Assigns dense 1-based positions in the list's current order.
///
/// Only identity and order matter; any prior `position` values on the items
/// are ignored.
#[must_use]
pub fn build_reorder_payload<T: Identified>(items: &[T]) -> ReorderRequest {
    let items = items
        .iter()
        .enumerate()
        .map(|(index, item)| ReorderItem {
            id: item.ident(),
            position: (index + 1) as u32,
        })
        .collect();
    ReorderRequest { items }
}

#[async_trait]
pub trait ReorderApi: Send + Sync {
    async fn reorder(&self, payload: &ReorderRequest) -> Result<()>;
}

/// The cached list the coordinator speculates on.
///
/// `invalidate` marks the backing query stale so the next read refetches the
/// server's order.
pub trait ListStore: Send {
    type Item: Clone + Identified + Send;

    fn read(&self) -> Vec<Self::Item>;
    fn write(&mut self, items: Vec<Self::Item>);
    fn invalidate(&mut self);
}

struct Inner<S: ListStore> {
    store: S,
    state: MutationState<Vec<S::Item>>,
}

/// Coordinator for optimistic reorders of one resource.
///
/// The store lives behind an async mutex that is held across the request:
/// that is both the single-writer discipline (nothing else mutates the list
/// while a mutation is pending) and the "a second submit waits for
/// resolution" rule. No snapshot stacking is possible.
pub struct OptimisticReorder<S: ListStore, A> {
    inner: Mutex<Inner<S>>,
    api: A,
}

impl<S: ListStore, A: ReorderApi> OptimisticReorder<S, A> {
    pub fn new(store: S, api: A) -> Self {
        Self {
            inner: Mutex::new(Inner {
                store,
                state: MutationState::Idle,
            }),
            api,
        }
    }

    /// Applies `desired` locally, then asks the server to persist it.
    ///
    /// On failure the snapshot is restored verbatim and the classified
    /// failure is surfaced exactly once.
    pub async fn submit(
        &self,
        desired: Vec<S::Item>,
    ) -> std::result::Result<(), ClassifiedError> {
        let mut inner = self.inner.lock().await;

        let snapshot = inner.store.read();
        inner.state = MutationState::Pending { snapshot };
        inner.store.write(desired.clone());

        let payload = build_reorder_payload(&desired);
        match self.api.reorder(&payload).await {
            Ok(()) => {
                inner.state = MutationState::Committed;
                inner.store.invalidate();
                Ok(())
            }
            Err(err) => {
                let prior = std::mem::replace(&mut inner.state, MutationState::RolledBack);
                if let MutationState::Pending { snapshot } = prior {
                    inner.store.write(snapshot);
                }
                tracing::warn!("reorder rolled back: {err}");
                Err(classify(&err))
            }
        }
    }

    /// Current list contents (waits while a mutation is pending).
    pub async fn items(&self) -> Vec<S::Item> {
        self.inner.lock().await.store.read()
    }

    /// Whether the last mutation has resolved.
    pub async fn is_settled(&self) -> bool {
        !self.inner.lock().await.state.is_pending()
    }
}
