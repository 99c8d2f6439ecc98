//! Postgres-backed sequence counter storage.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use tracing::instrument;

use stockmark_core::{InventoryId, TenantId};

use super::{SequenceStore, SequenceStoreError};

/// Postgres sequence counter store.
///
/// A single upsert-returning statement both creates a missing counter row
/// and advances an existing one under the same row lock. Two requests racing
/// to create the counter for a brand-new inventory are therefore serialized
/// exactly like two increments of an existing one; the lock is held for the
/// statement's transaction and released on commit or rollback.
#[derive(Debug, Clone)]
pub struct PostgresSequenceStore {
    pool: Arc<PgPool>,
}

impl PostgresSequenceStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }
}

#[async_trait]
impl SequenceStore for PostgresSequenceStore {
    #[instrument(
        skip(self),
        fields(tenant_id = %tenant_id, inventory_id = %inventory_id),
        err
    )]
    async fn next(
        &self,
        tenant_id: TenantId,
        inventory_id: InventoryId,
    ) -> Result<i64, SequenceStoreError> {
        // Fresh rows insert with next_value = 2 so the RETURNING clause
        // yields the issued value (1) in both branches.
        let row = sqlx::query(
            r#"
            INSERT INTO inventory_sequences (tenant_id, inventory_id, next_value)
            VALUES ($1, $2, 2)
            ON CONFLICT (tenant_id, inventory_id)
            DO UPDATE SET next_value = inventory_sequences.next_value + 1
            RETURNING next_value - 1 AS issued
            "#,
        )
        .bind(tenant_id.as_uuid())
        .bind(inventory_id.as_uuid())
        .fetch_one(&*self.pool)
        .await
        .map_err(|e| SequenceStoreError::Storage(format!("next: {e}")))?;

        row.try_get::<i64, _>("issued")
            .map_err(|e| SequenceStoreError::Storage(format!("next: {e}")))
    }
}
