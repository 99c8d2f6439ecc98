//! Postgres-backed format part storage.

use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use tracing::instrument;

use stockmark_core::{InventoryId, TenantId};
use stockmark_idformat::{FormatPart, PartType};

use super::{FormatStore, FormatStoreError};

/// Postgres format part store.
///
/// The unique index on `(tenant_id, inventory_id, position)` backs the
/// position-uniqueness invariant at the storage level. `replace` rewrites
/// the whole part set inside one transaction (delete-all-then-insert), so
/// the index never sees mid-edit collisions and concurrent readers observe
/// either the old or the new set.
#[derive(Debug, Clone)]
pub struct PostgresFormatStore {
    pool: Arc<PgPool>,
}

impl PostgresFormatStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }
}

fn map_sqlx(op: &str, e: sqlx::Error) -> FormatStoreError {
    FormatStoreError::Storage(format!("{op}: {e}"))
}

#[async_trait]
impl FormatStore for PostgresFormatStore {
    #[instrument(
        skip(self),
        fields(tenant_id = %tenant_id, inventory_id = %inventory_id),
        err
    )]
    async fn ordered_parts(
        &self,
        tenant_id: TenantId,
        inventory_id: InventoryId,
    ) -> Result<Vec<FormatPart>, FormatStoreError> {
        let rows = sqlx::query(
            r#"
            SELECT position, part_type, param1, param2
            FROM inventory_id_format_parts
            WHERE tenant_id = $1 AND inventory_id = $2
            ORDER BY position ASC
            "#,
        )
        .bind(tenant_id.as_uuid())
        .bind(inventory_id.as_uuid())
        .fetch_all(&*self.pool)
        .await
        .map_err(|e| map_sqlx("ordered_parts", e))?;

        let mut parts = Vec::with_capacity(rows.len());
        for row in rows {
            let position: i32 = row
                .try_get("position")
                .map_err(|e| FormatStoreError::Corrupt(e.to_string()))?;
            let position = u32::try_from(position)
                .map_err(|_| FormatStoreError::Corrupt(format!("negative position {position}")))?;

            let part_type: String = row
                .try_get("part_type")
                .map_err(|e| FormatStoreError::Corrupt(e.to_string()))?;
            let part_type = PartType::from_str(&part_type)
                .map_err(|e| FormatStoreError::Corrupt(e.to_string()))?;

            let param1: Option<String> = row
                .try_get("param1")
                .map_err(|e| FormatStoreError::Corrupt(e.to_string()))?;
            let param2: Option<String> = row
                .try_get("param2")
                .map_err(|e| FormatStoreError::Corrupt(e.to_string()))?;

            // Re-normalize on read: rows may have been written out-of-band.
            parts.push(FormatPart::new(
                position,
                part_type,
                param1.as_deref(),
                param2.as_deref(),
            ));
        }
        Ok(parts)
    }

    #[instrument(
        skip(self, parts),
        fields(tenant_id = %tenant_id, inventory_id = %inventory_id, part_count = parts.len()),
        err
    )]
    async fn replace(
        &self,
        tenant_id: TenantId,
        inventory_id: InventoryId,
        parts: Vec<FormatPart>,
    ) -> Result<(), FormatStoreError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_sqlx("begin_transaction", e))?;

        sqlx::query(
            r#"
            DELETE FROM inventory_id_format_parts
            WHERE tenant_id = $1 AND inventory_id = $2
            "#,
        )
        .bind(tenant_id.as_uuid())
        .bind(inventory_id.as_uuid())
        .execute(&mut *tx)
        .await
        .map_err(|e| map_sqlx("delete_parts", e))?;

        for part in &parts {
            let position = i32::try_from(part.position).map_err(|_| {
                FormatStoreError::Storage(format!("position {} out of range", part.position))
            })?;

            sqlx::query(
                r#"
                INSERT INTO inventory_id_format_parts
                    (tenant_id, inventory_id, position, part_type, param1, param2)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(tenant_id.as_uuid())
            .bind(inventory_id.as_uuid())
            .bind(position)
            .bind(part.part_type.as_str())
            .bind(part.param1.as_deref())
            .bind(part.param2.as_deref())
            .execute(&mut *tx)
            .await
            .map_err(|e| map_sqlx("insert_part", e))?;
        }

        tx.commit().await.map_err(|e| map_sqlx("commit", e))?;
        Ok(())
    }
}
