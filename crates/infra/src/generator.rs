//! Identifier generation orchestration.

use std::sync::Arc;

use thiserror::Error;
use tracing::instrument;

use stockmark_core::{DomainError, InventoryId, TenantId};
use stockmark_idformat::{Clock, PartType, RandomSource, render_part, validate_format};

use crate::format_store::{FormatStore, FormatStoreError};
use crate::sequence_store::{SequenceStore, SequenceStoreError};

/// Identifier generation error.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("format store failure: {0}")]
    Format(#[from] FormatStoreError),

    #[error("sequence store failure: {0}")]
    Sequence(#[from] SequenceStoreError),
}

/// Generates one identifier per call from the inventory's configured format.
///
/// Stateless per call; the only persistent state in the subsystem is the
/// sequence counter behind [`SequenceStore`]. Clock and random source are
/// injected capabilities so rendering is deterministic under test.
pub struct IdentifierGenerator<F, S> {
    formats: F,
    sequences: S,
    clock: Arc<dyn Clock>,
    random: Arc<dyn RandomSource>,
}

impl<F, S> IdentifierGenerator<F, S>
where
    F: FormatStore,
    S: SequenceStore,
{
    pub fn new(
        formats: F,
        sequences: S,
        clock: Arc<dyn Clock>,
        random: Arc<dyn RandomSource>,
    ) -> Self {
        Self {
            formats,
            sequences,
            clock,
            random,
        }
    }

    /// Generate the next identifier for an inventory.
    ///
    /// Non-SEQ parts are rendered before the counter is touched, so a
    /// misconfigured part aborts the call without consuming a sequence
    /// value. Once [`SequenceStore::next`] has returned, the value is burned
    /// whether or not the caller persists the identifier: gaps allowed,
    /// duplicates never. Fragments are concatenated in position order with
    /// no implicit separator.
    #[instrument(
        skip(self),
        fields(tenant_id = %tenant_id, inventory_id = %inventory_id),
        err
    )]
    pub async fn generate(
        &self,
        tenant_id: TenantId,
        inventory_id: InventoryId,
    ) -> Result<String, GenerateError> {
        let parts = self.formats.ordered_parts(tenant_id, inventory_id).await?;

        // Re-validate on every generation: stored formats may predate the
        // validator or have been edited out-of-band.
        validate_format(&parts)?;

        let mut fragments: Vec<(u32, String)> = Vec::with_capacity(parts.len());
        let mut seq_part = None;

        for part in &parts {
            if part.part_type == PartType::Seq {
                seq_part = Some(part);
                continue;
            }
            let fragment = render_part(part, None, self.clock.as_ref(), self.random.as_ref())?;
            fragments.push((part.position, fragment));
        }

        // validate_format guarantees exactly one SEQ part.
        let seq_part = seq_part
            .ok_or_else(|| DomainError::consistency("validated format has no SEQ part"))?;

        let sequence_value = self.sequences.next(tenant_id, inventory_id).await?;
        let fragment = render_part(
            seq_part,
            Some(sequence_value),
            self.clock.as_ref(),
            self.random.as_ref(),
        )?;
        fragments.push((seq_part.position, fragment));

        fragments.sort_by_key(|(position, _)| *position);
        Ok(fragments
            .into_iter()
            .map(|(_, fragment)| fragment)
            .collect())
    }
}
