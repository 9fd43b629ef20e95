//! # Voxfall Registry
//!
//! The closed tables of block materials and hotbar items.

pub mod blocks;
pub mod items;

pub use blocks::{BlockKind, LiquidPair, Texture};
pub use items::{Item, Preview};
