//! # Voxfall Utils
//!
//! Leaf value types shared by every voxfall crate.

pub mod types;

pub use types::{ColumnKey, Coordinate};
