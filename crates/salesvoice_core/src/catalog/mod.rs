//! Product catalogs.
//!
//! # Responsibility
//! - Provide the read-only product collections queries run against.
//! - Isolate file/JSON loading from interpreter and engine logic.
//!
//! # Invariants
//! - Catalogs are immutable after construction.

pub mod sample;
pub mod source;
