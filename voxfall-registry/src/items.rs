//! Hotbar items and what they place.

use serde::{Deserialize, Serialize};

use crate::blocks::{BlockKind, LiquidPair};

/// How an item is previewed in the hotbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preview {
    /// A flat icon.
    Image(&'static str),
    /// A miniature block of the given kind.
    Block(BlockKind),
}

/// An entry in the player's hotbar.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Item {
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

    CrimsonStem,
    WarpedStem,
    Nylium,
    GildedBlackstone,
    Glowstone,
    NetherBricks,
    Netherrack,
    Gold,
    LavaBucket,
    Laser,

    Pick,
    Sword,
    /// A water bucket.
    Bucket,
    Beef,
}

impl Item {
    /// All items, in declaration order.
    pub const ALL: [Self; 28] = [
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
        Self::CrimsonStem,
        Self::WarpedStem,
        Self::Nylium,
        Self::GildedBlackstone,
        Self::Glowstone,
        Self::NetherBricks,
        Self::Netherrack,
        Self::Gold,
        Self::LavaBucket,
        Self::Laser,
        Self::Pick,
        Self::Sword,
        Self::Bucket,
        Self::Beef,
    ];

    /// The block kind this item puts into the world, if any.
    ///
    /// Buckets map to their liquid's source kind. Tools and food place nothing.
    #[must_use]
    pub const fn associated_block_kind(self) -> Option<BlockKind> {
        Some(match self {
            Self::Dirt => BlockKind::Dirt,
            Self::Grass => BlockKind::Grass,
            Self::Log => BlockKind::Log,
            Self::Stone => BlockKind::Stone,
            Self::Leaf => BlockKind::Leaf,
            Self::Ice => BlockKind::Ice,
            Self::Concrete => BlockKind::Concrete,
            Self::Blackstone => BlockKind::Blackstone,
            Self::Clay => BlockKind::Clay,
            Self::Sand => BlockKind::Sand,
            Self::AcaciaLog => BlockKind::AcaciaLog,
            Self::AcaciaPlanks => BlockKind::AcaciaPlanks,
            Self::Amethyst => BlockKind::Amethyst,
            Self::Cactus => BlockKind::Cactus,
            Self::CrimsonStem => BlockKind::CrimsonStem,
            Self::WarpedStem => BlockKind::WarpedStem,
            Self::Nylium => BlockKind::Nylium,
            Self::GildedBlackstone => BlockKind::GildedBlackstone,
            Self::Glowstone => BlockKind::Glowstone,
            Self::NetherBricks => BlockKind::NetherBricks,
            Self::Netherrack => BlockKind::Netherrack,
            Self::Gold => BlockKind::Gold,
            Self::LavaBucket => BlockKind::LavaSource,
            Self::Laser => BlockKind::Laser,
            Self::Bucket => BlockKind::WaterSource,
            Self::Pick | Self::Sword | Self::Beef => return None,
        })
    }

    /// The liquid a bucket pours, if this item is a bucket.
    #[must_use]
    pub const fn liquid_pair(self) -> Option<LiquidPair> {
        match self {
            Self::Bucket => Some(LiquidPair::WATER),
            Self::LavaBucket => Some(LiquidPair::LAVA),
            _ => None,
        }
    }

    /// How the hotbar shows this item.
    #[must_use]
    pub const fn preview(self) -> Preview {
        match self {
            Self::Pick => Preview::Image("diamond_pickaxe"),
            Self::Sword => Preview::Image("diamond_sword"),
            Self::Bucket => Preview::Image("water_bucket"),
            Self::Beef => Preview::Image("cooked_beef"),
            Self::LavaBucket => Preview::Image("lava_bucket"),
            Self::Laser => Preview::Image("laser"),
            _ => match self.associated_block_kind() {
                Some(kind) => Preview::Block(kind),
                // Every non-icon item above places a block.
                None => unreachable!(),
            },
        }
    }
}
