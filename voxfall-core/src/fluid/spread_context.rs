//! Accumulator for a single liquid pour.
//!
//! A pour starts from a snapshot of the world's blocks and only ever appends
//! new liquid cells. The recursive search asks two questions over and over:
//! "is this coordinate occupied?" and "what is the highest block below this
//! coordinate?". Both are answered from hash indexes kept next to the block
//! list instead of scanning it.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use voxfall_registry::BlockKind;
use voxfall_utils::{ColumnKey, Coordinate};

use crate::block::Block;

/// Blocks of a pour in progress, with lookup indexes.
pub struct SpreadContext {
    /// Snapshot blocks followed by the liquid cells added so far, in insertion order.
    blocks: Vec<Block>,
    /// Kind of every occupied coordinate.
    occupied: FxHashMap<Coordinate, BlockKind>,
    /// Levitations of every block in a planar column.
    columns: FxHashMap<ColumnKey, SmallVec<[i32; 8]>>,
    /// Number of snapshot blocks at the front of `blocks`.
    existing: usize,
}

impl SpreadContext {
    /// Creates a context from existing blocks.
    #[must_use]
    pub fn new(blocks: Vec<Block>) -> Self {
        let mut occupied =
            FxHashMap::with_capacity_and_hasher(blocks.len(), Default::default());
        let mut columns: FxHashMap<ColumnKey, SmallVec<[i32; 8]>> = FxHashMap::default();

        for block in &blocks {
            occupied.insert(block.coordinate, block.kind);
            columns
                .entry(block.coordinate.column_key())
                .or_default()
                .push(block.coordinate.levitation);
        }

        let existing = blocks.len();
        Self {
            blocks,
            occupied,
            columns,
            existing,
        }
    }

    /// True if any block occupies `coordinate`.
    #[must_use]
    pub fn contains(&self, coordinate: &Coordinate) -> bool {
        self.occupied.contains_key(coordinate)
    }

    /// Kind of the block at `coordinate`.
    #[must_use]
    pub fn kind_at(&self, coordinate: &Coordinate) -> Option<BlockKind> {
        self.occupied.get(coordinate).copied()
    }

    /// Levitation of the nearest block strictly below `coordinate` in its column.
    #[must_use]
    pub fn surface_below(&self, coordinate: &Coordinate) -> Option<i32> {
        self.columns
            .get(&coordinate.column_key())?
            .iter()
            .copied()
            .filter(|levitation| *levitation < coordinate.levitation)
            .max()
    }

    /// How many of the eight planar neighbours of `coordinate` are occupied.
    #[must_use]
    pub fn occupied_neighbours(&self, coordinate: &Coordinate) -> usize {
        coordinate
            .surrounding()
            .iter()
            .filter(|neighbour| self.contains(neighbour))
            .count()
    }

    /// Appends a new block. The caller guarantees its coordinate is free.
    pub fn push(&mut self, block: Block) {
        debug_assert!(
            !self.contains(&block.coordinate),
            "liquid settled onto occupied cell {}",
            block.coordinate
        );
        self.occupied.insert(block.coordinate, block.kind);
        self.columns
            .entry(block.coordinate.column_key())
            .or_default()
            .push(block.coordinate.levitation);
        self.blocks.push(block);
    }

    /// Number of blocks added since the context was created.
    #[must_use]
    pub fn added(&self) -> usize {
        self.blocks.len() - self.existing
    }

    /// Consumes the context, returning every block in insertion order.
    #[must_use]
    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }
}
