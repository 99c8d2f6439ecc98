use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use stockmark_core::{InventoryId, TenantId};

use super::{SequenceStore, SequenceStoreError};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
struct SequenceKey {
    tenant_id: TenantId,
    inventory_id: InventoryId,
}

/// In-memory sequence counter store.
///
/// Intended for tests/dev. The mutex plays the role of the Postgres row
/// lock: read-and-increment is a single critical section.
#[derive(Debug, Default)]
pub struct InMemorySequenceStore {
    counters: Mutex<HashMap<SequenceKey, i64>>,
}

impl InMemorySequenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SequenceStore for InMemorySequenceStore {
    async fn next(
        &self,
        tenant_id: TenantId,
        inventory_id: InventoryId,
    ) -> Result<i64, SequenceStoreError> {
        let key = SequenceKey {
            tenant_id,
            inventory_id,
        };

        let mut counters = self
            .counters
            .lock()
            .map_err(|_| SequenceStoreError::Storage("lock poisoned".to_string()))?;

        let slot = counters.entry(key).or_insert(1);
        let value = *slot;
        *slot += 1;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn counter_starts_at_one_and_advances_by_one() {
        let store = InMemorySequenceStore::new();
        let (tenant, inventory) = (TenantId::new(), InventoryId::new());

        assert_eq!(store.next(tenant, inventory).await.unwrap(), 1);
        assert_eq!(store.next(tenant, inventory).await.unwrap(), 2);
        assert_eq!(store.next(tenant, inventory).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn counters_are_independent_per_inventory() {
        let store = InMemorySequenceStore::new();
        let tenant = TenantId::new();
        let (a, b) = (InventoryId::new(), InventoryId::new());

        assert_eq!(store.next(tenant, a).await.unwrap(), 1);
        assert_eq!(store.next(tenant, a).await.unwrap(), 2);
        assert_eq!(store.next(tenant, b).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn counters_are_independent_per_tenant() {
        let store = InMemorySequenceStore::new();
        let inventory = InventoryId::new();
        let (t1, t2) = (TenantId::new(), TenantId::new());

        assert_eq!(store.next(t1, inventory).await.unwrap(), 1);
        assert_eq!(store.next(t2, inventory).await.unwrap(), 1);
    }
}
