//! UI-facing bindings for SalesVoice core.

pub mod api;
