//! Custom identifier formats for inventory items.
//!
//! This crate contains the identifier-generation domain, implemented purely as
//! deterministic logic over injected capabilities (no IO, no HTTP, no storage):
//! the part model, format validation, per-type part rendering, and identifier
//! composition. Sequence counters and format persistence live in the infra
//! crate.

pub mod clock;
pub mod compose;
pub mod part;
pub mod random;
pub mod render;
pub mod validate;

pub use clock::{Clock, FixedClock, SystemClock};
pub use compose::compose_identifier;
pub use part::{FormatPart, PartType};
pub use random::{RandomSource, SeededRandom, ThreadRandom};
pub use render::{
    DEFAULT_DATETIME_PATTERN, DEFAULT_RANDOM_ALPHABET, DEFAULT_RANDOM_LENGTH, MAX_RANDOM_LENGTH,
    render_part,
};
pub use validate::validate_format;
