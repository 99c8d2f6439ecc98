//! Format part model.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use stockmark_core::DomainError;

/// Kind of one segment in an inventory's identifier format.
///
/// The string tags double as the storage representation, so they stay
/// uppercase and stable.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartType {
    /// Literal text. `param1` = the text (e.g. `"INV-"`, `"SKU"`).
    #[serde(rename = "FIXED")]
    Fixed,

    /// Current date/time. `param1` = strftime pattern (default `%Y%m%d`).
    #[serde(rename = "DATETIME")]
    Datetime,

    /// Random string. `param1` = length, `param2` = alphabet (optional).
    #[serde(rename = "RANDOM")]
    Random,

    /// Per-inventory sequence number. `param1` = zero-pad width.
    #[serde(rename = "SEQ")]
    Seq,
}

impl PartType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PartType::Fixed => "FIXED",
            PartType::Datetime => "DATETIME",
            PartType::Random => "RANDOM",
            PartType::Seq => "SEQ",
        }
    }
}

impl fmt::Display for PartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PartType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FIXED" => Ok(PartType::Fixed),
            "DATETIME" => Ok(PartType::Datetime),
            "RANDOM" => Ok(PartType::Random),
            "SEQ" => Ok(PartType::Seq),
            other => Err(DomainError::validation(format!(
                "unknown part type '{other}'"
            ))),
        }
    }
}

/// One ordered segment of an identifier format.
///
/// `param1`/`param2` meanings depend on `part_type` (see [`PartType`]).
/// Trimmed-empty parameters are normalized to `None` at construction; parts
/// are immutable values thereafter and only ever replaced wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatPart {
    /// Position within the format. Must be unique per format; gaps are fine.
    pub position: u32,
    pub part_type: PartType,
    pub param1: Option<String>,
    pub param2: Option<String>,
}

impl FormatPart {
    pub fn new(
        position: u32,
        part_type: PartType,
        param1: Option<&str>,
        param2: Option<&str>,
    ) -> Self {
        Self {
            position,
            part_type,
            param1: normalize(param1),
            param2: normalize(param2),
        }
    }

    /// Literal-text part.
    pub fn fixed(position: u32, text: &str) -> Self {
        Self::new(position, PartType::Fixed, Some(text), None)
    }

    /// Date/time part with an optional strftime pattern.
    pub fn datetime(position: u32, pattern: Option<&str>) -> Self {
        Self::new(position, PartType::Datetime, pattern, None)
    }

    /// Random-string part with optional length and alphabet.
    pub fn random(position: u32, length: Option<u32>, alphabet: Option<&str>) -> Self {
        let length = length.map(|n| n.to_string());
        Self::new(position, PartType::Random, length.as_deref(), alphabet)
    }

    /// Sequence part with an optional zero-pad width.
    pub fn seq(position: u32, pad: Option<u32>) -> Self {
        let pad = pad.map(|n| n.to_string());
        Self::new(position, PartType::Seq, pad.as_deref(), None)
    }
}

fn normalize(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}
