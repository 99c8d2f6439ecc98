//! Per-type rendering of format parts.
//!
//! One closed set of part kinds, matched exhaustively: there is no fallback
//! renderer and no "unclaimed part type" failure mode.

use chrono::format::{Item, StrftimeItems};

use stockmark_core::{DomainError, DomainResult};

use crate::clock::Clock;
use crate::part::{FormatPart, PartType};
use crate::random::RandomSource;

/// Default strftime pattern for DATETIME parts (compact date, e.g. `20260815`).
pub const DEFAULT_DATETIME_PATTERN: &str = "%Y%m%d";

/// Default RANDOM alphabet: excludes the visually confusable 0/O/1/I.
pub const DEFAULT_RANDOM_ALPHABET: &str = "ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Default RANDOM length when `param1` is absent.
pub const DEFAULT_RANDOM_LENGTH: usize = 6;

/// Upper bound on RANDOM length.
pub const MAX_RANDOM_LENGTH: usize = 64;

/// Render one part to its string fragment.
///
/// `sequence_value` is passed only for [`PartType::Seq`] parts; its absence
/// there is an internal bug ([`DomainError::Consistency`]), not a user error.
/// All other failures are [`DomainError::Configuration`] and abort the whole
/// generation — no partial identifiers.
pub fn render_part(
    part: &FormatPart,
    sequence_value: Option<i64>,
    clock: &dyn Clock,
    random: &dyn RandomSource,
) -> DomainResult<String> {
    match part.part_type {
        PartType::Fixed => render_fixed(part),
        PartType::Datetime => render_datetime(part, clock),
        PartType::Random => render_random(part, random),
        PartType::Seq => render_seq(part, sequence_value),
    }
}

fn render_fixed(part: &FormatPart) -> DomainResult<String> {
    // A fixed segment with no text is meaningless.
    part.param1.clone().ok_or_else(|| {
        DomainError::configuration("FIXED part requires param1 (non-empty text)")
    })
}

fn render_datetime(part: &FormatPart, clock: &dyn Clock) -> DomainResult<String> {
    let pattern = part.param1.as_deref().unwrap_or(DEFAULT_DATETIME_PATTERN);

    // chrono surfaces bad specifiers only at Display time; reject them up
    // front so rendering never panics.
    let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(DomainError::configuration(format!(
            "DATETIME part has an invalid pattern '{pattern}'"
        )));
    }

    Ok(clock.now().format_with_items(items.into_iter()).to_string())
}

fn render_random(part: &FormatPart, random: &dyn RandomSource) -> DomainResult<String> {
    let length = match part.param1.as_deref() {
        None => DEFAULT_RANDOM_LENGTH,
        Some(raw) => raw.parse::<usize>().map_err(|_| {
            DomainError::configuration(format!("RANDOM part length '{raw}' is not a number"))
        })?,
    };
    if length < 1 || length > MAX_RANDOM_LENGTH {
        return Err(DomainError::configuration(format!(
            "RANDOM part length must be between 1 and {MAX_RANDOM_LENGTH}, got {length}"
        )));
    }

    let alphabet = dedup_alphabet(part.param2.as_deref().unwrap_or(DEFAULT_RANDOM_ALPHABET));
    if alphabet.len() < 2 {
        return Err(DomainError::configuration(
            "RANDOM part alphabet (param2) must contain at least 2 distinct characters",
        ));
    }

    let mut out = String::with_capacity(length);
    for _ in 0..length {
        out.push(alphabet[random.next_index(alphabet.len())]);
    }
    Ok(out)
}

/// De-duplicate preserving first occurrence.
fn dedup_alphabet(raw: &str) -> Vec<char> {
    let mut chars: Vec<char> = Vec::with_capacity(raw.len());
    for ch in raw.chars() {
        if !chars.contains(&ch) {
            chars.push(ch);
        }
    }
    chars
}

fn render_seq(part: &FormatPart, sequence_value: Option<i64>) -> DomainResult<String> {
    let value = sequence_value.ok_or_else(|| {
        DomainError::consistency("SEQ part rendered without a sequence value")
    })?;

    let pad = match part.param1.as_deref() {
        None => 0,
        Some(raw) => raw.parse::<usize>().map_err(|_| {
            DomainError::configuration(format!("SEQ part pad width '{raw}' is not a number"))
        })?,
    };

    if pad > 0 {
        // Left-pad with '0'; values wider than the pad are never truncated.
        Ok(format!("{value:0pad$}"))
    } else {
        Ok(value.to_string())
    }
}
