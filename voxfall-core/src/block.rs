//! A single placed block.

use serde::{Deserialize, Serialize};
use voxfall_registry::BlockKind;
use voxfall_utils::Coordinate;

/// A material occupying exactly one coordinate.
///
/// Blocks are identified by their coordinate: a world never holds two blocks
/// at the same coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Where the block sits.
    pub coordinate: Coordinate,
    /// What the block is made of.
    pub kind: BlockKind,
    /// Scales the drawn height of the block.
    ///
    /// Liquids use this to taper a column down to the height between the pour
    /// point and the surface they land on. Lasers use it to stretch past a cube.
    pub extrusion_multiplier: f32,
    /// Whether the block is shown and can be hit.
    ///
    /// Freshly poured liquid starts inactive and is switched on by the reveal
    /// scheduler.
    pub active: bool,
}

impl Block {
    /// Creates a full-height, active block.
    #[must_use]
    pub const fn new(coordinate: Coordinate, kind: BlockKind) -> Self {
        Self {
            coordinate,
            kind,
            extrusion_multiplier: 1.0,
            active: true,
        }
    }

    /// Creates a hidden liquid cell waiting to be revealed.
    #[must_use]
    pub const fn pending_liquid(
        coordinate: Coordinate,
        kind: BlockKind,
        extrusion_multiplier: f32,
    ) -> Self {
        Self {
            coordinate,
            kind,
            extrusion_multiplier,
            active: false,
        }
    }

    /// Shorthand for `self.kind.is_liquid()`.
    #[must_use]
    pub const fn is_liquid(&self) -> bool {
        self.kind.is_liquid()
    }

    /// Whether taps on this block should be routed to it.
    ///
    /// Liquids are never hit, so a tap on a pool lands on what is beneath it.
    #[must_use]
    pub const fn is_hit_testable(&self) -> bool {
        self.active && !self.kind.is_liquid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_block_defaults() {
        let block = Block::new(Coordinate::new(0, 0, 0), BlockKind::Dirt);
        assert!(block.active);
        assert!((block.extrusion_multiplier - 1.0).abs() < f32::EPSILON);
        assert!(block.is_hit_testable());
    }

    #[test]
    fn test_liquid_is_never_hit_testable() {
        let mut water = Block::pending_liquid(Coordinate::new(0, 0, 1), BlockKind::Water, 0.4);
        assert!(!water.is_hit_testable());

        water.active = true;
        assert!(water.is_liquid());
        assert!(!water.is_hit_testable());
    }
}
