//! Shared types and lookup data for the weather proxy
//!
//! This crate contains the types shared between the proxy backend and the
//! client widget (native or via WASM): the normalized reading, the upstream
//! wire format, the forecast query and the static city/condition tables.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
