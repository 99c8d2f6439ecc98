//! Per-inventory format part storage.

mod in_memory;
mod postgres;

pub use in_memory::InMemoryFormatStore;
pub use postgres::PostgresFormatStore;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use stockmark_core::{InventoryId, TenantId};
use stockmark_idformat::FormatPart;

/// Format part storage error.
#[derive(Debug, Error)]
pub enum FormatStoreError {
    /// A stored row could not be decoded into a [`FormatPart`].
    #[error("stored format part is corrupt: {0}")]
    Corrupt(String),

    /// Underlying storage failure (connection, transaction, constraint).
    #[error("storage failure: {0}")]
    Storage(String),
}

/// Per-inventory format part storage.
///
/// Formats are read-mostly. `replace` is the only mutation and must be
/// atomic (delete-all-then-insert in one transaction), so a generation that
/// reads concurrently with an edit sees either the fully-old or fully-new
/// part set, never a mix. Reads take no lock.
#[async_trait]
pub trait FormatStore: Send + Sync {
    /// All parts for an inventory, ordered by ascending position.
    ///
    /// An inventory without a configured format yields an empty vector.
    async fn ordered_parts(
        &self,
        tenant_id: TenantId,
        inventory_id: InventoryId,
    ) -> Result<Vec<FormatPart>, FormatStoreError>;

    /// Replace the inventory's whole format.
    ///
    /// Structural validity is the caller's responsibility (see
    /// `FormatService::replace_format`); the store only guarantees atomicity.
    async fn replace(
        &self,
        tenant_id: TenantId,
        inventory_id: InventoryId,
        parts: Vec<FormatPart>,
    ) -> Result<(), FormatStoreError>;
}

#[async_trait]
impl<S> FormatStore for Arc<S>
where
    S: FormatStore + ?Sized,
{
    async fn ordered_parts(
        &self,
        tenant_id: TenantId,
        inventory_id: InventoryId,
    ) -> Result<Vec<FormatPart>, FormatStoreError> {
        (**self).ordered_parts(tenant_id, inventory_id).await
    }

    async fn replace(
        &self,
        tenant_id: TenantId,
        inventory_id: InventoryId,
        parts: Vec<FormatPart>,
    ) -> Result<(), FormatStoreError> {
        (**self).replace(tenant_id, inventory_id, parts).await
    }
}
