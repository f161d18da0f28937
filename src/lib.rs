//! QuadVec
//!
//! Re-exports the 4D vector types from `quadvec_math` and adds the
//! configuration layer used by the `quadvec` binary.

pub mod config;

pub use quadvec_math::*;
