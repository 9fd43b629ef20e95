//! Playable levels.

mod presets;

use voxfall_registry::Item;

use crate::world::World;

pub use presets::{desert, meadow, nether};

/// A world together with the hotbar it is played with.
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    /// Display name.
    pub name: &'static str,
    /// Hotbar items, left to right.
    pub items: Vec<Item>,
    /// The world as currently edited.
    pub world: World,
    /// Background gradient, top to bottom, as `0xRRGGBB` colours.
    pub background: Vec<u32>,
}

/// The built-in levels, in menu order.
#[must_use]
pub fn presets() -> Vec<Level> {
    vec![meadow(), desert(), nether()]
}

#[cfg(test)]
mod tests {
    use voxfall_registry::LiquidPair;
    use voxfall_utils::Coordinate;

    use super::*;
    use crate::fluid::{SpreadConfig, pour};

    #[test]
    fn test_presets_are_well_formed() {
        for level in presets() {
            let blocks = level.world.blocks();
            assert!(!blocks.is_empty(), "{} is empty", level.name);
            assert!(
                blocks
                    .windows(2)
                    .all(|pair| pair[0].coordinate < pair[1].coordinate),
                "{} is not sorted",
                level.name
            );
            assert!(blocks.iter().all(|block| block.active && !block.is_liquid()));
            assert!(!level.items.is_empty());
        }
    }

    #[test]
    fn test_every_preset_has_a_bucket() {
        for level in presets() {
            assert!(
                level.items.iter().any(|item| item.liquid_pair().is_some()),
                "{} has no way to pour",
                level.name
            );
        }
    }

    #[test]
    fn test_pours_terminate_everywhere() {
        let config = SpreadConfig {
            maximum_spread: 5,
            ..SpreadConfig::default()
        };
        for level in presets() {
            let world = &level.world;
            for row in 0..world.height {
                for column in 0..world.width {
                    let origin = Coordinate::new(row, column, 9);
                    let poured = pour(world, origin, LiquidPair::WATER, config);

                    assert_eq!(poured.world.len(), world.len() + poured.added);
                    assert!(
                        poured
                            .world
                            .blocks()
                            .windows(2)
                            .all(|pair| pair[0].coordinate < pair[1].coordinate)
                    );
                }
            }
        }
    }
}
