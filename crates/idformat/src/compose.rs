//! Pure identifier composition from an ordered format.

use stockmark_core::DomainResult;

use crate::clock::Clock;
use crate::part::{FormatPart, PartType};
use crate::random::RandomSource;
use crate::render::render_part;
use crate::validate::validate_format;

/// Compose a full identifier from a format and an already-acquired sequence
/// value.
///
/// Validates the format, renders each part in ascending position order and
/// concatenates the fragments with no implicit separator — literal separators
/// such as `-` are expressed as FIXED parts. The sequence value is handed
/// only to the (exactly one) SEQ part. Any failing part aborts the whole
/// composition.
///
/// Acquiring the sequence value is the caller's job; see the infra crate's
/// `IdentifierGenerator` for the storage-backed pipeline.
pub fn compose_identifier(
    parts: &[FormatPart],
    sequence_value: Option<i64>,
    clock: &dyn Clock,
    random: &dyn RandomSource,
) -> DomainResult<String> {
    validate_format(parts)?;

    let mut ordered: Vec<&FormatPart> = parts.iter().collect();
    ordered.sort_by_key(|p| p.position);

    let mut out = String::new();
    for part in ordered {
        let value = match part.part_type {
            PartType::Seq => sequence_value,
            _ => None,
        };
        out.push_str(&render_part(part, value, clock, random)?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    use stockmark_core::DomainError;

    use crate::clock::FixedClock;
    use crate::random::SeededRandom;

    fn test_clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2026, 8, 15, 0, 0, 0).unwrap())
    }

    fn compose(parts: &[FormatPart], seq: Option<i64>) -> DomainResult<String> {
        compose_identifier(parts, seq, &test_clock(), &SeededRandom::new(1))
    }

    #[test]
    fn fixed_then_padded_seq() {
        let parts = vec![FormatPart::fixed(0, "INV-"), FormatPart::seq(1, Some(3))];
        assert_eq!(compose(&parts, Some(1)).unwrap(), "INV-001");
        assert_eq!(compose(&parts, Some(2)).unwrap(), "INV-002");
    }

    #[test]
    fn parts_render_in_position_order_not_slice_order() {
        let parts = vec![
            FormatPart::seq(2, Some(2)),
            FormatPart::fixed(0, "A"),
            FormatPart::datetime(1, Some("%Y")),
        ];
        assert_eq!(compose(&parts, Some(9)).unwrap(), "A202609");
    }

    #[test]
    fn no_implicit_separator_between_fragments() {
        let parts = vec![
            FormatPart::fixed(0, "X"),
            FormatPart::fixed(1, "Y"),
            FormatPart::seq(2, None),
        ];
        assert_eq!(compose(&parts, Some(3)).unwrap(), "XY3");
    }

    #[test]
    fn invalid_format_is_rejected_before_rendering() {
        let parts = vec![FormatPart::fixed(0, "INV-")];
        let err = compose(&parts, Some(1)).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn failing_part_aborts_the_whole_composition() {
        let parts = vec![
            FormatPart::fixed(0, "INV-"),
            FormatPart::new(1, PartType::Fixed, None, None),
            FormatPart::seq(2, Some(3)),
        ];
        let err = compose(&parts, Some(1)).unwrap_err();
        assert!(matches!(err, DomainError::Configuration(_)));
    }

    #[test]
    fn missing_sequence_value_surfaces_as_consistency_error() {
        let parts = vec![FormatPart::seq(0, Some(3))];
        let err = compose(&parts, None).unwrap_err();
        assert!(matches!(err, DomainError::Consistency(_)));
    }
}
