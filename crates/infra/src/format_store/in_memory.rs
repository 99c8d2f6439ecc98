use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use stockmark_core::{InventoryId, TenantId};
use stockmark_idformat::FormatPart;

use super::{FormatStore, FormatStoreError};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
struct FormatKey {
    tenant_id: TenantId,
    inventory_id: InventoryId,
}

/// In-memory format store.
///
/// Intended for tests/dev. `replace` swaps the whole part set under the
/// write lock, matching the transactional all-or-nothing visibility of the
/// Postgres implementation.
#[derive(Debug, Default)]
pub struct InMemoryFormatStore {
    formats: RwLock<HashMap<FormatKey, Vec<FormatPart>>>,
}

impl InMemoryFormatStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FormatStore for InMemoryFormatStore {
    async fn ordered_parts(
        &self,
        tenant_id: TenantId,
        inventory_id: InventoryId,
    ) -> Result<Vec<FormatPart>, FormatStoreError> {
        let key = FormatKey {
            tenant_id,
            inventory_id,
        };

        let formats = self
            .formats
            .read()
            .map_err(|_| FormatStoreError::Storage("lock poisoned".to_string()))?;

        let mut parts = formats.get(&key).cloned().unwrap_or_default();
        parts.sort_by_key(|p| p.position);
        Ok(parts)
    }

    async fn replace(
        &self,
        tenant_id: TenantId,
        inventory_id: InventoryId,
        parts: Vec<FormatPart>,
    ) -> Result<(), FormatStoreError> {
        let key = FormatKey {
            tenant_id,
            inventory_id,
        };

        let mut formats = self
            .formats
            .write()
            .map_err(|_| FormatStoreError::Storage("lock poisoned".to_string()))?;

        formats.insert(key, parts);
        Ok(())
    }
}
