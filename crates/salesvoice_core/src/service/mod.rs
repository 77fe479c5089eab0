//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate interpreter and query engine calls into use-case APIs.
//! - Keep CLI/FFI layers decoupled from catalog and parsing details.

pub mod command_service;
