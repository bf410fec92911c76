//! Ten-pin bowling scorer (workspace facade crate).
//!
//! Keeps a single `tenpin::{core,types}` public API while the implementation
//! lives in dedicated crates under `crates/`.

pub use tenpin_core as core;
pub use tenpin_types as types;
