//! Per-inventory sequence counters.

mod in_memory;
mod postgres;

pub use in_memory::InMemorySequenceStore;
pub use postgres::PostgresSequenceStore;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use stockmark_core::{InventoryId, TenantId};

/// Sequence counter storage error.
#[derive(Debug, Error)]
pub enum SequenceStoreError {
    /// Underlying storage failure (connection, transaction, lock).
    #[error("storage failure: {0}")]
    Storage(String),
}

/// Per-inventory monotonic counter.
///
/// `next` is the single serialization point of identifier generation: the
/// returned value is the counter's pre-increment value and is never reissued,
/// even to concurrent callers. Once returned, the value stays burned whether
/// or not the caller keeps it (gaps allowed, duplicates never). Counters for
/// different inventories are independent serialization domains.
#[async_trait]
pub trait SequenceStore: Send + Sync {
    /// Return the counter's current value and advance it by exactly 1,
    /// creating the counter at 1 if the inventory has none yet.
    async fn next(
        &self,
        tenant_id: TenantId,
        inventory_id: InventoryId,
    ) -> Result<i64, SequenceStoreError>;
}

#[async_trait]
impl<S> SequenceStore for Arc<S>
where
    S: SequenceStore + ?Sized,
{
    async fn next(
        &self,
        tenant_id: TenantId,
        inventory_id: InventoryId,
    ) -> Result<i64, SequenceStoreError> {
        (**self).next(tenant_id, inventory_id).await
    }
}
