//! Staged reveal of freshly poured liquid.
//!
//! A pour adds its liquid cells hidden. The reveal plan groups them into waves
//! by planar distance from the pour origin, and the scheduler switches each
//! wave on after a fixed delay so the pool appears to fill outward.

mod scheduler;

use voxfall_utils::Coordinate;

pub use scheduler::{RevealHandle, spawn_reveal};

use crate::block::Block;

/// Liquid cells that become visible together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealWave {
    /// Squared planar distance of every cell in the wave from the origin.
    pub distance_squared: i32,
    /// The cells to activate.
    pub coordinates: Vec<Coordinate>,
}

/// Waves in the order they fire. Wave `n` fires `n` step delays after the start.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealPlan {
    waves: Vec<RevealWave>,
}

impl RevealPlan {
    /// Plans the reveal of every liquid block in `blocks` around `origin`.
    ///
    /// Levitation is ignored when measuring distance. Cells at equal distance
    /// keep their relative order from `blocks`.
    #[must_use]
    pub fn for_pour(blocks: &[Block], origin: Coordinate) -> Self {
        let mut cells: Vec<(i32, Coordinate)> = blocks
            .iter()
            .filter(|block| block.is_liquid())
            .map(|block| {
                (
                    block.coordinate.planar_distance_squared(&origin),
                    block.coordinate,
                )
            })
            .collect();
        cells.sort_by_key(|(distance, _)| *distance);

        let waves = cells
            .chunk_by(|a, b| a.0 == b.0)
            .map(|group| RevealWave {
                distance_squared: group[0].0,
                coordinates: group.iter().map(|(_, coordinate)| *coordinate).collect(),
            })
            .collect();

        Self { waves }
    }

    /// The planned waves.
    #[must_use]
    pub fn waves(&self) -> &[RevealWave] {
        &self.waves
    }

    /// Number of waves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.waves.len()
    }

    /// True if there is nothing to reveal.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.waves.is_empty()
    }

    pub(crate) fn into_waves(self) -> Vec<RevealWave> {
        self.waves
    }
}

#[cfg(test)]
mod tests {
    use voxfall_registry::BlockKind;

    use super::*;

    #[test]
    fn test_equal_distances_share_a_wave() {
        let origin = Coordinate::new(2, 2, 1);
        let blocks = [
            Block::pending_liquid(Coordinate::new(2, 3, 1), BlockKind::Water, 0.4),
            Block::pending_liquid(origin, BlockKind::WaterSource, 0.8),
            Block::pending_liquid(Coordinate::new(1, 2, 1), BlockKind::Water, 0.4),
        ];

        let plan = RevealPlan::for_pour(&blocks, origin);

        assert_eq!(plan.len(), 2);
        assert_eq!(plan.waves()[0].distance_squared, 0);
        assert_eq!(plan.waves()[0].coordinates, vec![origin]);
        assert_eq!(plan.waves()[1].distance_squared, 1);
        assert_eq!(
            plan.waves()[1].coordinates,
            vec![Coordinate::new(2, 3, 1), Coordinate::new(1, 2, 1)]
        );
    }

    #[test]
    fn test_solids_are_not_planned() {
        let origin = Coordinate::new(0, 0, 1);
        let blocks = [
            Block::new(Coordinate::new(0, 0, 0), BlockKind::Dirt),
            Block::new(Coordinate::new(0, 1, 0), BlockKind::Laser),
        ];

        assert!(RevealPlan::for_pour(&blocks, origin).is_empty());
    }

    #[test]
    fn test_levitation_is_ignored_and_waves_ascend() {
        let origin = Coordinate::new(0, 0, 5);
        let blocks = [
            Block::pending_liquid(Coordinate::new(2, 0, 1), BlockKind::Lava, 0.0),
            Block::pending_liquid(Coordinate::new(0, 0, 1), BlockKind::LavaSource, 3.8),
            Block::pending_liquid(Coordinate::new(1, 1, 2), BlockKind::Lava, 0.4),
        ];

        let plan = RevealPlan::for_pour(&blocks, origin);
        let distances: Vec<i32> = plan.waves().iter().map(|w| w.distance_squared).collect();

        assert_eq!(distances, vec![0, 2, 4]);
    }
}
