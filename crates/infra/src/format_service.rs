//! Format editing workflow.

use thiserror::Error;
use tracing::instrument;

use stockmark_core::{DomainError, InventoryId, TenantId};
use stockmark_idformat::{FormatPart, validate_format};

use crate::format_store::{FormatStore, FormatStoreError};

/// Format editing error.
#[derive(Debug, Error)]
pub enum FormatServiceError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("format store failure: {0}")]
    Store(#[from] FormatStoreError),
}

/// The only write path for identifier formats.
///
/// Edits are full replacements: validate, then swap the whole part set in
/// one transaction. Partial patches would race the position-uniqueness
/// index, so they don't exist.
pub struct FormatService<F> {
    store: F,
}

impl<F> FormatService<F>
where
    F: FormatStore,
{
    pub fn new(store: F) -> Self {
        Self { store }
    }

    /// Current parts in position order, for the editing workflow.
    pub async fn ordered_parts(
        &self,
        tenant_id: TenantId,
        inventory_id: InventoryId,
    ) -> Result<Vec<FormatPart>, FormatServiceError> {
        Ok(self.store.ordered_parts(tenant_id, inventory_id).await?)
    }

    /// Validate and atomically replace the inventory's whole format.
    ///
    /// Positions are reassigned densely from 0, so an edited list can be
    /// submitted in display order. An invalid format is never persisted.
    #[instrument(
        skip(self, parts),
        fields(tenant_id = %tenant_id, inventory_id = %inventory_id, part_count = parts.len()),
        err
    )]
    pub async fn replace_format(
        &self,
        tenant_id: TenantId,
        inventory_id: InventoryId,
        parts: Vec<FormatPart>,
    ) -> Result<(), FormatServiceError> {
        let parts: Vec<FormatPart> = parts
            .into_iter()
            .enumerate()
            .map(|(i, part)| {
                FormatPart::new(
                    i as u32,
                    part.part_type,
                    part.param1.as_deref(),
                    part.param2.as_deref(),
                )
            })
            .collect();

        validate_format(&parts)?;
        self.store.replace(tenant_id, inventory_id, parts).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use stockmark_idformat::PartType;

    use crate::format_store::InMemoryFormatStore;

    fn setup() -> (FormatService<Arc<InMemoryFormatStore>>, Arc<InMemoryFormatStore>) {
        let store = Arc::new(InMemoryFormatStore::new());
        (FormatService::new(store.clone()), store)
    }

    #[tokio::test]
    async fn replace_reassigns_positions_densely() {
        let (service, _) = setup();
        let (tenant, inventory) = (TenantId::new(), InventoryId::new());

        // Submitted in display order with arbitrary positions.
        service
            .replace_format(
                tenant,
                inventory,
                vec![FormatPart::fixed(17, "INV-"), FormatPart::seq(3, Some(3))],
            )
            .await
            .unwrap();

        let parts = service.ordered_parts(tenant, inventory).await.unwrap();
        assert_eq!(parts[0].position, 0);
        assert_eq!(parts[0].part_type, PartType::Fixed);
        assert_eq!(parts[1].position, 1);
        assert_eq!(parts[1].part_type, PartType::Seq);
    }

    #[tokio::test]
    async fn invalid_format_is_rejected_and_nothing_persists() {
        let (service, store) = setup();
        let (tenant, inventory) = (TenantId::new(), InventoryId::new());

        service
            .replace_format(tenant, inventory, vec![FormatPart::seq(0, None)])
            .await
            .unwrap();

        // Two SEQ parts: rejected, previous format untouched.
        let err = service
            .replace_format(
                tenant,
                inventory,
                vec![FormatPart::seq(0, None), FormatPart::seq(1, Some(3))],
            )
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            FormatServiceError::Domain(DomainError::Validation(_))
        ));

        let parts = store.ordered_parts(tenant, inventory).await.unwrap();
        assert_eq!(parts.len(), 1);
    }

    #[tokio::test]
    async fn empty_part_list_is_rejected() {
        let (service, _) = setup();
        let err = service
            .replace_format(TenantId::new(), InventoryId::new(), vec![])
            .await
            .unwrap_err();
        assert!(matches!(err, FormatServiceError::Domain(_)));
    }
}
