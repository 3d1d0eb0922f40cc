//! TetroHash (workspace facade crate).
//!
//! Keeps the public `tetrohash::{core,types}` paths stable while the
//! implementation lives in dedicated crates under `crates/`.

pub use tetrohash_core as core;
pub use tetrohash_types as types;
