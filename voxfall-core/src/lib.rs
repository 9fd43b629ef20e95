//! # Voxfall Core
//!
//! The sandbox model: the sparse block world, solid placement, liquid pours
//! and their staged reveal, levels and configuration.

pub mod block;
pub mod config;
pub mod error;
pub mod fluid;
pub mod level;
pub mod placement;
pub mod reveal;
pub mod sandbox;
pub mod world;

pub use block::Block;
pub use config::SandboxConfig;
pub use error::{ConfigError, SandboxError};
pub use level::Level;
pub use sandbox::{PlaceOutcome, Sandbox};
pub use world::{World, WorldStore};
