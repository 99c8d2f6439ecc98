//! Structural validation of identifier formats.

use std::collections::HashSet;

use stockmark_core::{DomainError, DomainResult};

use crate::part::{FormatPart, PartType};

/// Check the format-level invariants.
///
/// - the format must not be empty
/// - it must contain exactly one [`PartType::Seq`] part
/// - positions must be pairwise distinct
///
/// Called by the format-editing workflow before a replace commits, and
/// re-run before every generation (stored formats may predate the validator
/// or have been edited out-of-band). A format that fails here is never
/// persisted and never used to generate an identifier.
pub fn validate_format(parts: &[FormatPart]) -> DomainResult<()> {
    if parts.is_empty() {
        return Err(DomainError::validation("identifier format is empty"));
    }

    let seq_count = parts
        .iter()
        .filter(|p| p.part_type == PartType::Seq)
        .count();
    if seq_count != 1 {
        return Err(DomainError::validation(format!(
            "identifier format must contain exactly one SEQ part, found {seq_count}"
        )));
    }

    let mut seen = HashSet::with_capacity(parts.len());
    for part in parts {
        if !seen.insert(part.position) {
            return Err(DomainError::validation(format!(
                "identifier format has duplicate position {}",
                part.position
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_format_is_rejected() {
        let err = validate_format(&[]).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn format_without_seq_part_is_rejected() {
        let parts = vec![FormatPart::fixed(0, "INV-")];
        assert!(validate_format(&parts).is_err());
    }

    #[test]
    fn format_with_two_seq_parts_is_rejected() {
        let parts = vec![FormatPart::seq(0, None), FormatPart::seq(1, Some(3))];
        assert!(validate_format(&parts).is_err());
    }

    #[test]
    fn duplicate_positions_are_rejected() {
        let parts = vec![FormatPart::fixed(1, "A"), FormatPart::seq(1, None)];
        let err = validate_format(&parts).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn sparse_positions_are_fine() {
        let parts = vec![FormatPart::fixed(0, "INV-"), FormatPart::seq(10, Some(3))];
        assert!(validate_format(&parts).is_ok());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: a format with distinct positions and exactly one
            /// SEQ part passes; repeating any of its positions makes it
            /// fail, no matter which position is repeated.
            #[test]
            fn repeating_any_position_is_rejected(
                positions in proptest::collection::hash_set(0u32..1000, 2..8),
                dup_choice in any::<prop::sample::Index>(),
            ) {
                let positions: Vec<u32> = positions.into_iter().collect();

                let mut parts = vec![FormatPart::seq(positions[0], None)];
                for &p in &positions[1..] {
                    parts.push(FormatPart::fixed(p, "X"));
                }
                prop_assert!(validate_format(&parts).is_ok());

                let dup = positions[dup_choice.index(positions.len())];
                parts.push(FormatPart::fixed(dup, "Y"));
                prop_assert!(matches!(
                    validate_format(&parts),
                    Err(DomainError::Validation(_))
                ));
            }
        }
    }
}
