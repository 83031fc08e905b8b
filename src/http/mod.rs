//! HTTP server module.
//!
//! This module exposes the conversion engine as a small axum REST API. The
//! frontend posts `{value, from, to}` to `/api/convert/{category}` and gets
//! back `{"success": true, "data": {"result": ..., "conversion": ...}}`, or
//! `{"success": false, "error": ...}` with a non-2xx status on failure.
//! That envelope is the contract the external UI depends on.
//!
//! Handlers call the engine inline: every conversion is a cheap pure
//! computation, so there is no blocking work to offload.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;

pub use router::create_router;
