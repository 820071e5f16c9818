//! Integration test modules for synergize
//!
//! - editing: blank voice through routing and scale codes to exported bytes
//! - canonical: compaction contract against injected codecs
//! - properties: randomized edits keep compaction idempotent

pub mod canonical;
pub mod editing;
pub mod properties;
