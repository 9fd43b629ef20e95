use voxfall_registry::{BlockKind, Item};
use voxfall_utils::Coordinate;

use super::Level;
use crate::block::Block;
use crate::world::World;

/// Collects blocks for a preset. Later blocks replace earlier ones at the same cell.
struct Terrain {
    width: i32,
    height: i32,
    blocks: Vec<Block>,
}

impl Terrain {
    fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            blocks: Vec::new(),
        }
    }

    fn set(&mut self, row: i32, column: i32, levitation: i32, kind: BlockKind) {
        self.blocks
            .push(Block::new(Coordinate::new(row, column, levitation), kind));
    }

    /// Fills every cell of a layer for which `kind_at` returns a kind.
    fn layer(&mut self, levitation: i32, kind_at: impl Fn(i32, i32) -> Option<BlockKind>) {
        for row in 0..self.height {
            for column in 0..self.width {
                if let Some(kind) = kind_at(row, column) {
                    self.set(row, column, levitation, kind);
                }
            }
        }
    }

    fn column(&mut self, row: i32, column: i32, levitations: impl IntoIterator<Item = i32>, kind: BlockKind) {
        for levitation in levitations {
            self.set(row, column, levitation, kind);
        }
    }

    fn into_world(self) -> World {
        World::from_blocks(self.width, self.height, self.blocks)
    }
}

/// Stepped dirt and grass hills with an oak tree.
#[must_use]
pub fn meadow() -> Level {
    const WIDTH: i32 = 15;
    const HEIGHT: i32 = 6;

    let mut terrain = Terrain::new(WIDTH, HEIGHT);

    // The hills rise towards the top-left corner.
    terrain.layer(0, |row, column| {
        Some(if column - (HEIGHT - row) < 3 {
            BlockKind::Dirt
        } else {
            BlockKind::Grass
        })
    });
    terrain.layer(1, |row, column| {
        (column < 10 && column - (HEIGHT - row) < 3).then_some(BlockKind::Dirt)
    });
    terrain.layer(2, |row, column| {
        (column < 10 && column - (HEIGHT - row) < 0).then_some(BlockKind::Grass)
    });
    for (row, column) in [(4, 2), (5, 1), (5, 2), (5, 3)] {
        terrain.set(row, column, 2, BlockKind::Grass);
    }

    let (trunk_row, trunk_column) = (2, 11);
    terrain.column(trunk_row, trunk_column, 1..=5, BlockKind::Log);
    for row_offset in [-1, 1] {
        for column_offset in -1..=1 {
            terrain.set(
                trunk_row + row_offset,
                trunk_column + column_offset,
                5,
                BlockKind::Leaf,
            );
        }
    }
    terrain.set(trunk_row, trunk_column - 1, 5, BlockKind::Leaf);
    terrain.set(trunk_row, trunk_column + 1, 5, BlockKind::Leaf);
    for (row_offset, column_offset) in [(-1, 0), (0, -1), (0, 0), (0, 1), (1, 0)] {
        terrain.set(
            trunk_row + row_offset,
            trunk_column + column_offset,
            6,
            BlockKind::Leaf,
        );
    }
    terrain.set(trunk_row, trunk_column, 7, BlockKind::Leaf);

    Level {
        name: "Meadow",
        items: vec![
            Item::Dirt,
            Item::Grass,
            Item::Log,
            Item::Stone,
            Item::Leaf,
            Item::Pick,
            Item::Sword,
            Item::Bucket,
            Item::Beef,
        ],
        world: terrain.into_world(),
        background: vec![0x007E_C8FF, 0x00E3_F4FF],
    }
}

/// Sand dunes around a frozen basin, with a clay terrace and a cactus.
#[must_use]
pub fn desert() -> Level {
    const WIDTH: i32 = 16;
    const HEIGHT: i32 = 7;

    let in_basin = |row: i32, column: i32| (2..=4).contains(&row) && (4..=7).contains(&column);
    let mut terrain = Terrain::new(WIDTH, HEIGHT);

    terrain.layer(0, |row, column| {
        Some(if in_basin(row, column) {
            BlockKind::Ice
        } else if row >= 5 {
            BlockKind::Clay
        } else {
            BlockKind::Sand
        })
    });
    terrain.layer(1, |row, column| {
        (!in_basin(row, column)).then_some(BlockKind::Sand)
    });
    terrain.layer(2, |_, column| (column >= 11).then_some(BlockKind::Clay));

    terrain.column(1, 13, 3..=5, BlockKind::Cactus);
    terrain.column(5, 1, 2..=3, BlockKind::AcaciaLog);
    terrain.set(5, 1, 4, BlockKind::AcaciaPlanks);
    terrain.set(0, 9, 2, BlockKind::Amethyst);

    Level {
        name: "Desert",
        items: vec![
            Item::Sand,
            Item::Clay,
            Item::Ice,
            Item::AcaciaLog,
            Item::AcaciaPlanks,
            Item::Cactus,
            Item::Concrete,
            Item::Amethyst,
            Item::Pick,
            Item::Bucket,
        ],
        world: terrain.into_world(),
        background: vec![0x00F6_D28B, 0x00FC_EFD2],
    }
}

/// A netherrack plateau with stems, a glowstone lamp and a gold deposit.
#[must_use]
pub fn nether() -> Level {
    const WIDTH: i32 = 14;
    const HEIGHT: i32 = 7;

    let mut terrain = Terrain::new(WIDTH, HEIGHT);

    terrain.layer(0, |row, column| {
        Some(if (row + column) % 4 == 0 {
            BlockKind::Blackstone
        } else {
            BlockKind::Netherrack
        })
    });
    terrain.layer(1, |_, column| (column < 10).then_some(BlockKind::Netherrack));
    terrain.layer(2, |row, column| {
        (row <= 1 && column <= 4).then_some(BlockKind::Nylium)
    });

    terrain.column(6, 0, 2..=3, BlockKind::NetherBricks);
    terrain.set(6, 0, 4, BlockKind::GildedBlackstone);
    terrain.column(5, 11, 1..=3, BlockKind::CrimsonStem);
    terrain.set(5, 11, 4, BlockKind::Glowstone);
    terrain.column(1, 12, 1..=2, BlockKind::WarpedStem);
    terrain.set(3, 12, 1, BlockKind::Gold);

    Level {
        name: "Nether",
        items: vec![
            Item::Netherrack,
            Item::Nylium,
            Item::CrimsonStem,
            Item::WarpedStem,
            Item::Blackstone,
            Item::GildedBlackstone,
            Item::Glowstone,
            Item::NetherBricks,
            Item::Gold,
            Item::LavaBucket,
            Item::Laser,
            Item::Sword,
        ],
        world: terrain.into_world(),
        background: vec![0x003A_0A0A, 0x008C_2A12],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind_at(world: &World, row: i32, column: i32, levitation: i32) -> Option<BlockKind> {
        world
            .block_at(&Coordinate::new(row, column, levitation))
            .map(|block| block.kind)
    }

    #[test]
    fn test_meadow_layout() {
        let world = meadow().world;

        assert_eq!((world.width, world.height), (15, 6));
        assert_eq!(world.len(), 173);
        assert_eq!(kind_at(&world, 0, 8, 0), Some(BlockKind::Dirt));
        assert_eq!(kind_at(&world, 0, 9, 0), Some(BlockKind::Grass));
        assert_eq!(kind_at(&world, 5, 3, 1), Some(BlockKind::Dirt));
        assert_eq!(kind_at(&world, 5, 4, 1), None);
        assert_eq!(kind_at(&world, 4, 2, 2), Some(BlockKind::Grass));
        assert_eq!(kind_at(&world, 2, 11, 5), Some(BlockKind::Log));
        assert_eq!(kind_at(&world, 2, 11, 6), Some(BlockKind::Leaf));
        assert_eq!(kind_at(&world, 2, 11, 7), Some(BlockKind::Leaf));
        assert_eq!(kind_at(&world, 1, 10, 6), None);
    }

    #[test]
    fn test_desert_basin_is_open() {
        let world = desert().world;

        assert_eq!(kind_at(&world, 3, 5, 0), Some(BlockKind::Ice));
        assert_eq!(kind_at(&world, 3, 5, 1), None);
        assert_eq!(kind_at(&world, 3, 3, 1), Some(BlockKind::Sand));
        assert_eq!(kind_at(&world, 1, 13, 5), Some(BlockKind::Cactus));
    }

    #[test]
    fn test_nether_landmarks() {
        let world = nether().world;

        assert_eq!(kind_at(&world, 5, 11, 4), Some(BlockKind::Glowstone));
        assert_eq!(kind_at(&world, 6, 0, 4), Some(BlockKind::GildedBlackstone));
        assert_eq!(kind_at(&world, 0, 0, 0), Some(BlockKind::Blackstone));
        assert_eq!(kind_at(&world, 3, 12, 1), Some(BlockKind::Gold));
    }
}
