//! Top-level facade crate for watchtower metrics.
//!
//! Re-exports core types and the API library so users can depend on a single crate.

pub mod core {
    pub use watchtower_core::*;
}

pub mod api {
    pub use watchtower_api::*;
}
