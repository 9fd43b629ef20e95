//! Pure placement and removal.
//!
//! Each function takes a world by value and returns the edited world, so the
//! sandbox can run them on a detached snapshot and publish the result in one
//! step.

use voxfall_registry::{BlockKind, Item, LiquidPair};
use voxfall_utils::Coordinate;

use crate::block::Block;
use crate::fluid::{self, Poured, SpreadConfig};
use crate::world::World;

/// What selecting an item and tapping a cell does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Puts a solid block at the cell.
    Solid(BlockKind),
    /// Pours a liquid at the cell.
    Pour(LiquidPair),
    /// Nothing happens. Tools and food cannot be placed.
    Ignored,
}

impl Placement {
    /// Resolves what `item` does when placed.
    #[must_use]
    pub const fn for_item(item: Item) -> Self {
        if let Some(pair) = item.liquid_pair() {
            return Self::Pour(pair);
        }
        match item.associated_block_kind() {
            Some(kind) if !kind.is_liquid() => Self::Solid(kind),
            _ => Self::Ignored,
        }
    }
}

/// Places a solid block of `kind` at `coordinate`, replacing any occupant.
#[must_use]
pub fn place(mut world: World, coordinate: Coordinate, kind: BlockKind) -> World {
    debug_assert!(!kind.is_liquid(), "liquids are poured, not placed");
    world.place(Block::new(coordinate, kind));
    world
}

/// Removes the block at `coordinate`. Removing an empty cell is a no-op.
#[must_use]
pub fn remove(mut world: World, coordinate: &Coordinate) -> World {
    world.remove(coordinate);
    world
}

/// Drops every liquid block and leaves solids untouched.
#[must_use]
pub fn clear_liquids(mut world: World) -> World {
    world.clear_liquids();
    world
}

/// Pours `pair` at `coordinate`. See [`fluid::pour`].
#[must_use]
pub fn pour(world: &World, coordinate: Coordinate, pair: LiquidPair, config: SpreadConfig) -> Poured {
    fluid::pour(world, coordinate, pair, config)
}
