//! Storage and orchestration for custom identifier generation.
//!
//! Store ports with Postgres (production) and in-memory (tests/dev)
//! implementations, plus the services tying format storage, sequence
//! counters, and the pure rendering pipeline together.

pub mod format_service;
pub mod format_store;
pub mod generator;
pub mod sequence_store;


pub use format_service::{FormatService, FormatServiceError};
pub use format_store::{FormatStore, FormatStoreError, InMemoryFormatStore, PostgresFormatStore};
pub use generator::{GenerateError, IdentifierGenerator};
pub use sequence_store::{
    InMemorySequenceStore, PostgresSequenceStore, SequenceStore, SequenceStoreError,
};
