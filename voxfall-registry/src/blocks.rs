//! Block materials and their texture descriptors.

use serde::{Deserialize, Serialize};

/// How a renderer should paint a block. Opaque to the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Texture {
    /// A separate image for the top face and for the four sides.
    DifferentSides {
        /// Asset name of the top face.
        top: &'static str,
        /// Asset name of the side faces.
        sides: &'static str,
    },
    /// One image on every face.
    Image(&'static str),
    /// Flowing water.
    Water,
    /// A water source.
    WaterSource,
    /// A laser beam.
    Laser,
    /// Flowing lava.
    Lava,
    /// A lava source.
    LavaSource,
}

/// Every material a block can be made of.
///
/// The set is closed: each kind has exactly one texture and one liquid
/// classification, and adding a kind means extending every match below.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BlockKind {
    Dirt,
    Grass,
    Log,
    Stone,
    Leaf,

    Ice,
    Concrete,
    Blackstone,
    Clay,
    Sand,
    AcaciaLog,
    AcaciaPlanks,
    Amethyst,
    Cactus,

    Water,
    WaterSource,

    CrimsonStem,
    WarpedStem,
    Nylium,
    GildedBlackstone,
    Glowstone,
    NetherBricks,
    Netherrack,
    Gold,
    Lava,
    LavaSource,
    Laser,
}

impl BlockKind {
    /// All block kinds, in declaration order.
    pub const ALL: [Self; 27] = [
        Self::Dirt,
        Self::Grass,
        Self::Log,
        Self::Stone,
        Self::Leaf,
        Self::Ice,
        Self::Concrete,
        Self::Blackstone,
        Self::Clay,
        Self::Sand,
        Self::AcaciaLog,
        Self::AcaciaPlanks,
        Self::Amethyst,
        Self::Cactus,
        Self::Water,
        Self::WaterSource,
        Self::CrimsonStem,
        Self::WarpedStem,
        Self::Nylium,
        Self::GildedBlackstone,
        Self::Glowstone,
        Self::NetherBricks,
        Self::Netherrack,
        Self::Gold,
        Self::Lava,
        Self::LavaSource,
        Self::Laser,
    ];

    /// The texture used to draw this kind.
    #[must_use]
    pub const fn texture(self) -> Texture {
        match self {
            Self::Dirt => Texture::Image("dirt"),
            Self::Grass => Texture::DifferentSides {
                top: "grass_block_top",
                sides: "grass_block_side",
            },
            Self::Log => Texture::DifferentSides {
                top: "oak_log_top",
                sides: "oak_log",
            },
            Self::Stone => Texture::Image("stone"),
            Self::Leaf => Texture::Image("oak_leaves"),
            Self::Ice => Texture::Image("blue_ice"),
            Self::Concrete => Texture::Image("cyan_concrete_powder"),
            Self::Blackstone => Texture::DifferentSides {
                top: "blackstone_top",
                sides: "blackstone",
            },
            Self::Clay => Texture::Image("clay"),
            Self::Sand => Texture::Image("sand"),
            Self::AcaciaLog => Texture::DifferentSides {
                top: "acacia_log_top",
                sides: "acacia_log",
            },
            Self::AcaciaPlanks => Texture::Image("acacia_planks"),
            Self::Amethyst => Texture::Image("amethyst_block"),
            Self::Cactus => Texture::DifferentSides {
                top: "cactus_top",
                sides: "cactus_side",
            },
            Self::Water => Texture::Water,
            Self::WaterSource => Texture::WaterSource,
            Self::CrimsonStem => Texture::DifferentSides {
                top: "crimson_stem_top",
                sides: "crimson_stem",
            },
            Self::WarpedStem => Texture::DifferentSides {
                top: "warped_stem_top",
                sides: "warped_stem",
            },
            Self::Nylium => Texture::DifferentSides {
                top: "warped_nylium",
                sides: "warped_nylium_side",
            },
            Self::GildedBlackstone => Texture::Image("gilded_blackstone"),
            Self::Glowstone => Texture::Image("glowstone"),
            Self::NetherBricks => Texture::Image("nether_bricks"),
            Self::Netherrack => Texture::Image("netherrack"),
            Self::Gold => Texture::Image("gold_block"),
            Self::Lava => Texture::Lava,
            Self::LavaSource => Texture::LavaSource,
            Self::Laser => Texture::Laser,
        }
    }

    /// True for water and lava, both source and flowing.
    #[must_use]
    pub const fn is_liquid(self) -> bool {
        matches!(
            self,
            Self::Water | Self::WaterSource | Self::Lava | Self::LavaSource
        )
    }

    /// True for the persistent pour points of a liquid.
    #[must_use]
    pub const fn is_liquid_source(self) -> bool {
        matches!(self, Self::WaterSource | Self::LavaSource)
    }
}

/// The pair of kinds a liquid pour produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LiquidPair {
    /// Kind of the cell the pour settles into first.
    pub source: BlockKind,
    /// Kind of every cell reached by spreading.
    pub flow: BlockKind,
}

impl LiquidPair {
    /// Water source with flowing water.
    pub const WATER: Self = Self {
        source: BlockKind::WaterSource,
        flow: BlockKind::Water,
    };

    /// Lava source with flowing lava.
    pub const LAVA: Self = Self {
        source: BlockKind::LavaSource,
        flow: BlockKind::Lava,
    };

    /// Picks the settled kind for a cell.
    #[must_use]
    pub const fn kind_for(&self, is_initial: bool) -> BlockKind {
        if is_initial { self.source } else { self.flow }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_liquid_kinds() {
        let liquids: Vec<BlockKind> = BlockKind::ALL
            .into_iter()
            .filter(|kind| kind.is_liquid())
            .collect();

        assert_eq!(
            liquids,
            vec![
                BlockKind::Water,
                BlockKind::WaterSource,
                BlockKind::Lava,
                BlockKind::LavaSource
            ]
        );
    }

    #[test]
    fn test_liquid_textures_are_not_images() {
        for kind in BlockKind::ALL.into_iter().filter(|kind| kind.is_liquid()) {
            assert!(!matches!(
                kind.texture(),
                Texture::Image(_) | Texture::DifferentSides { .. }
            ));
        }
    }

    #[test]
    fn test_pair_kind_selection() {
        assert_eq!(LiquidPair::WATER.kind_for(true), BlockKind::WaterSource);
        assert_eq!(LiquidPair::WATER.kind_for(false), BlockKind::Water);
        assert_eq!(LiquidPair::LAVA.kind_for(true), BlockKind::LavaSource);
        assert!(LiquidPair::LAVA.kind_for(false).is_liquid());
        assert!(!LiquidPair::LAVA.kind_for(false).is_liquid_source());
    }
}
