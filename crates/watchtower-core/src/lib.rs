//! watchtower core: transport-agnostic error types and the Prometheus text
//! exposition renderer.
//!
//! This crate carries no runtime or HTTP dependencies so the renderer can be
//! reused by the API crate, by tests, and by any other scrape surface.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod exposition;

/// Shared result type.
pub use error::{Result, WatchtowerError};
