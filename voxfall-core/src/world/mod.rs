//! This module contains the `World` struct, the sparse set of placed blocks.
use std::mem;

use serde::{Deserialize, Serialize};
use voxfall_utils::Coordinate;

use crate::block::Block;

mod store;

pub use store::WorldStore;

/// A sparse voxel world.
///
/// Blocks are stored sorted ascending by coordinate with at most one block per
/// coordinate. Every mutating method keeps both properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct World {
    /// Planar width of the playable area, in columns.
    pub width: i32,
    /// Planar height of the playable area, in rows.
    pub height: i32,
    blocks: Vec<Block>,
}

impl World {
    /// Creates an empty world.
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            blocks: Vec::new(),
        }
    }

    /// Creates a world from unordered blocks.
    ///
    /// When several blocks share a coordinate the last one wins, as if they had
    /// been placed one after another.
    #[must_use]
    pub fn from_blocks(width: i32, height: i32, blocks: impl IntoIterator<Item = Block>) -> Self {
        let mut world = Self::new(width, height);
        world.blocks = blocks.into_iter().collect();
        world.normalize_keep_last();
        world
    }

    /// The blocks, sorted ascending by coordinate.
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Number of blocks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// True if no block is placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    fn index_of(&self, coordinate: &Coordinate) -> Result<usize, usize> {
        self.blocks
            .binary_search_by(|block| block.coordinate.cmp(coordinate))
    }

    /// The block at `coordinate`, if any.
    #[must_use]
    pub fn block_at(&self, coordinate: &Coordinate) -> Option<&Block> {
        self.index_of(coordinate).ok().map(|index| &self.blocks[index])
    }

    /// True if a block occupies `coordinate`.
    #[must_use]
    pub fn contains(&self, coordinate: &Coordinate) -> bool {
        self.index_of(coordinate).is_ok()
    }

    /// Places a block, replacing whatever occupied its coordinate.
    ///
    /// Returns the replaced block.
    pub fn place(&mut self, block: Block) -> Option<Block> {
        match self.index_of(&block.coordinate) {
            Ok(index) => Some(mem::replace(&mut self.blocks[index], block)),
            Err(index) => {
                self.blocks.insert(index, block);
                None
            }
        }
    }

    /// Removes the block at `coordinate`. Removing an empty cell is a no-op.
    pub fn remove(&mut self, coordinate: &Coordinate) -> Option<Block> {
        self.index_of(coordinate)
            .ok()
            .map(|index| self.blocks.remove(index))
    }

    /// Drops every liquid block, returning how many were removed.
    pub fn clear_liquids(&mut self) -> usize {
        let before = self.blocks.len();
        self.blocks.retain(|block| !block.is_liquid());
        before - self.blocks.len()
    }

    /// Marks the blocks at the given coordinates as active.
    ///
    /// Coordinates that no longer hold a block are skipped. Returns the number
    /// of blocks that changed.
    pub fn activate(&mut self, coordinates: &[Coordinate]) -> usize {
        let mut changed = 0;
        for coordinate in coordinates {
            if let Ok(index) = self.index_of(coordinate) {
                let block = &mut self.blocks[index];
                if !block.active {
                    block.active = true;
                    changed += 1;
                }
            }
        }
        changed
    }

    /// Number of liquid blocks.
    #[must_use]
    pub fn liquid_count(&self) -> usize {
        self.blocks.iter().filter(|block| block.is_liquid()).count()
    }

    /// Number of blocks still waiting to be revealed.
    #[must_use]
    pub fn inactive_count(&self) -> usize {
        self.blocks.iter().filter(|block| !block.active).count()
    }

    /// Replaces every block with the output of a liquid pour.
    ///
    /// The pour output is sorted and holds one block per coordinate already;
    /// this only re-establishes the invariant if a caller hands in raw data.
    pub(crate) fn set_blocks(&mut self, blocks: Vec<Block>) {
        self.blocks = blocks;
        if !self.is_normalized() {
            self.normalize_keep_first();
        }
    }

    fn is_normalized(&self) -> bool {
        self.blocks
            .windows(2)
            .all(|pair| pair[0].coordinate < pair[1].coordinate)
    }

    fn normalize_keep_first(&mut self) {
        self.blocks.sort_by_key(|block| block.coordinate);
        self.blocks.dedup_by_key(|block| block.coordinate);
    }

    fn normalize_keep_last(&mut self) {
        self.blocks.sort_by_key(|block| block.coordinate);
        // `dedup_by` hands us (later, kept); copy the later block over the kept one.
        self.blocks.dedup_by(|later, kept| {
            if later.coordinate == kept.coordinate {
                *kept = *later;
                true
            } else {
                false
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use voxfall_registry::BlockKind;

    use super::*;

    fn assert_invariants(world: &World) {
        assert!(
            world
                .blocks()
                .windows(2)
                .all(|pair| pair[0].coordinate < pair[1].coordinate),
            "blocks must be strictly ascending: {:?}",
            world.blocks()
        );
    }

    #[test]
    fn test_place_keeps_order_and_uniqueness() {
        let mut world = World::new(10, 10);
        let edits = [
            (Coordinate::new(3, 1, 0), BlockKind::Dirt),
            (Coordinate::new(0, 4, 2), BlockKind::Stone),
            (Coordinate::new(3, 1, 1), BlockKind::Grass),
            (Coordinate::new(0, 4, 0), BlockKind::Log),
            (Coordinate::new(3, 1, 0), BlockKind::Sand),
        ];

        for (coordinate, kind) in edits {
            world.place(Block::new(coordinate, kind));
            assert_invariants(&world);
        }

        assert_eq!(world.len(), 4);
        assert_eq!(
            world.block_at(&Coordinate::new(3, 1, 0)).map(|b| b.kind),
            Some(BlockKind::Sand)
        );
    }

    #[test]
    fn test_replace_returns_previous_occupant() {
        let mut world = World::new(4, 4);
        let coordinate = Coordinate::new(1, 1, 0);

        assert!(world.place(Block::new(coordinate, BlockKind::Dirt)).is_none());
        let replaced = world.place(Block::new(coordinate, BlockKind::Gold));

        assert_eq!(replaced.map(|b| b.kind), Some(BlockKind::Dirt));
        assert_eq!(world.len(), 1);
        assert_eq!(world.blocks()[0].kind, BlockKind::Gold);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut world = World::new(4, 4);
        world.place(Block::new(Coordinate::new(0, 0, 0), BlockKind::Dirt));

        assert!(world.remove(&Coordinate::new(2, 2, 2)).is_none());
        assert_eq!(world.len(), 1);
        assert!(world.remove(&Coordinate::new(0, 0, 0)).is_some());
        assert!(world.is_empty());
    }

    #[test]
    fn test_clear_liquids_leaves_solids_untouched() {
        let mut world = World::new(4, 4);
        let solid = Block::new(Coordinate::new(0, 0, 0), BlockKind::Stone);
        let mut laser = Block::new(Coordinate::new(0, 1, 0), BlockKind::Laser);
        laser.extrusion_multiplier = 4.0;
        world.place(solid);
        world.place(laser);
        world.place(Block::pending_liquid(
            Coordinate::new(0, 0, 1),
            BlockKind::WaterSource,
            0.8,
        ));
        world.place(Block::pending_liquid(
            Coordinate::new(1, 0, 1),
            BlockKind::Lava,
            0.2,
        ));

        assert_eq!(world.clear_liquids(), 2);
        assert_eq!(world.liquid_count(), 0);
        assert_eq!(world.blocks(), &[solid, laser]);
    }

    #[test]
    fn test_from_blocks_last_duplicate_wins() {
        let coordinate = Coordinate::new(2, 2, 0);
        let world = World::from_blocks(
            5,
            5,
            [
                Block::new(Coordinate::new(4, 0, 0), BlockKind::Dirt),
                Block::new(coordinate, BlockKind::Dirt),
                Block::new(Coordinate::new(0, 0, 0), BlockKind::Dirt),
                Block::new(coordinate, BlockKind::Grass),
            ],
        );

        assert_invariants(&world);
        assert_eq!(world.len(), 3);
        assert_eq!(
            world.block_at(&coordinate).map(|b| b.kind),
            Some(BlockKind::Grass)
        );
    }

    #[test]
    fn test_activate_counts_changes_and_skips_missing() {
        let mut world = World::new(4, 4);
        let a = Coordinate::new(0, 0, 1);
        let b = Coordinate::new(0, 1, 1);
        world.place(Block::pending_liquid(a, BlockKind::Water, 0.5));
        world.place(Block::pending_liquid(b, BlockKind::Water, 0.5));

        assert_eq!(world.inactive_count(), 2);
        assert_eq!(world.activate(&[a, Coordinate::new(9, 9, 9)]), 1);
        assert_eq!(world.activate(&[a, b]), 1);
        assert_eq!(world.inactive_count(), 0);
    }
}
