//! Liquid pours.
//!
//! A pour drops liquid at a coordinate, lets it settle on the blocks below and
//! spreads it over the surrounding ground. The result is a new block set with
//! the added cells hidden; the reveal scheduler switches them on afterwards.

pub mod spread;
pub mod spread_context;

use voxfall_registry::LiquidPair;
use voxfall_utils::Coordinate;

pub use spread::Pour;
pub use spread_context::SpreadContext;

use crate::world::World;

/// Limits applied to every spread step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpreadConfig {
    /// Largest ring radius a settled cell spreads to.
    pub maximum_spread: u32,
    /// Occupied neighbours a resting block needs before full-radius spread applies.
    pub edge_threshold: usize,
}

impl Default for SpreadConfig {
    fn default() -> Self {
        Self {
            maximum_spread: 3,
            edge_threshold: 5,
        }
    }
}

/// The outcome of pouring liquid into a world.
#[derive(Debug, Clone)]
pub struct Poured {
    /// The world with the new liquid cells added, all inactive.
    pub world: World,
    /// How many liquid cells the pour added.
    pub added: usize,
}

/// Pours `pair` at `origin` into a copy of `world`.
///
/// The returned world is sorted and holds one block per coordinate. Existing
/// blocks keep their place and state; only hidden liquid cells are added.
/// Pouring over the void, or where nothing can settle, adds nothing.
#[must_use]
pub fn pour(world: &World, origin: Coordinate, pair: LiquidPair, config: SpreadConfig) -> Poured {
    let mut context = SpreadContext::new(world.blocks().to_vec());
    let settings = Pour { pair, config };

    spread::settle(&mut context, &settings, origin, 0, true);

    let added = context.added();
    log::trace!("pour at {origin} settled {added} cells");

    let mut blocks = context.into_blocks();
    // Stable sort; dedup keeps the first block at each coordinate.
    blocks.sort_by_key(|block| block.coordinate);
    blocks.dedup_by_key(|block| block.coordinate);

    let mut poured = World::new(world.width, world.height);
    poured.set_blocks(blocks);
    Poured {
        world: poured,
        added,
    }
}
