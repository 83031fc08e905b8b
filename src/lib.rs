//! # Convertidor Universal Backend
//!
//! Unit-conversion backend for the Convertidor Universal frontend.
//!
//! The crate is a pure, synchronous conversion engine (time, weight,
//! temperature and currency) wrapped by a thin axum REST layer. The React
//! frontend posts `{value, from, to}` to a category-scoped endpoint and
//! receives the converted value plus a human-readable description.
//!
//! ## Architecture
//!
//! - [`units`]: static unit catalog (categories, unit keys, display labels)
//! - [`engine`]: the conversion engine: validation, ratio and formula
//!   based conversion, rounding, description strings
//! - [`http`]: axum-based HTTP server and request handlers (behind the
//!   `http-server` feature)
//!
//! The engine performs no I/O and holds no state, so it is safe to call
//! concurrently from any number of tasks without locking.

pub mod engine;
pub mod units;

#[cfg(feature = "http-server")]
pub mod http;
