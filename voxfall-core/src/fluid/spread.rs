//! The settle/spread recursion.
//!
//! A liquid cell first *settles*: it drops onto the nearest block below and
//! becomes a hidden liquid block resting on it. A freshly settled cell then
//! *spreads*: it tries to settle new cells on diamond-shaped rings around
//! itself. Cells reached by spreading settle (and spread again if they land on
//! solid ground) but never spread from their original target, because only
//! calls with `depth == 0` spread.
//!
//! The walk is depth-first. It runs off an explicit frame stack, since a pour
//! over open ground floods every connected cell and nests once per cell.

use std::iter;

use voxfall_registry::LiquidPair;
use voxfall_utils::Coordinate;

use super::SpreadConfig;
use super::spread_context::SpreadContext;
use crate::block::Block;

/// Gap left between a settled column and the height it was poured from.
pub const SETTLE_CLEARANCE: f32 = 0.2;
/// Extra height lost per unit of spread depth.
pub const DEPTH_TAPER: f32 = 0.2;

/// Parameters that stay fixed for a whole pour.
#[derive(Debug, Clone, Copy)]
pub struct Pour {
    /// Source and flow kinds of the poured liquid.
    pub pair: LiquidPair,
    /// Spread limits.
    pub config: SpreadConfig,
}

/// Drawn height of a liquid column that fell `drop` levels at the given spread depth.
#[must_use]
pub fn liquid_height(drop: i32, depth: u32) -> f32 {
    let height = drop as f32 - (SETTLE_CLEARANCE + depth as f32 * DEPTH_TAPER);
    height.max(0.0)
}

/// A unit of pending work.
///
/// Frames sit on an explicit stack instead of the call stack, so the depth of
/// a pour is bounded by memory rather than by the worker's stack size. Frames
/// are pushed in reverse so they pop in the order a depth-first walk visits
/// them.
#[derive(Debug, Clone, Copy)]
enum Frame {
    /// Settle liquid aimed at a coordinate.
    Settle {
        coordinate: Coordinate,
        depth: u32,
        is_initial: bool,
    },
    /// Spread from a depth-0 coordinate once everything settled before it is done.
    Spread { coordinate: Coordinate },
}

/// Settles liquid aimed at `coordinate`, then spreads from it.
///
/// If `coordinate` is free and some block lies below it, a hidden liquid block
/// is added right above that block and spread from with `depth` 0. If nothing
/// lies below, the liquid falls out of the world and nothing is added.
pub fn settle(
    context: &mut SpreadContext,
    pour: &Pour,
    coordinate: Coordinate,
    depth: u32,
    is_initial: bool,
) {
    run(
        context,
        pour,
        Frame::Settle {
            coordinate,
            depth,
            is_initial,
        },
    );
}

/// Spreads liquid outward from `coordinate` in diamond rings.
///
/// Only runs for `depth == 0` and only when a solid block sits directly
/// underneath. Every ring target is settled with a depth one greater than its
/// ring index, so targets never spread on their own.
pub fn spread_from(context: &mut SpreadContext, pour: &Pour, coordinate: Coordinate, depth: u32) {
    if depth == 0 {
        run(context, pour, Frame::Spread { coordinate });
    }
}

fn run(context: &mut SpreadContext, pour: &Pour, first: Frame) {
    let mut pending = vec![first];
    while let Some(frame) = pending.pop() {
        match frame {
            Frame::Settle {
                coordinate,
                depth,
                is_initial,
            } => settle_step(context, pour, coordinate, depth, is_initial, &mut pending),
            Frame::Spread { coordinate } => spread_step(context, pour, coordinate, &mut pending),
        }
    }
}

fn settle_step(
    context: &mut SpreadContext,
    pour: &Pour,
    coordinate: Coordinate,
    depth: u32,
    is_initial: bool,
    pending: &mut Vec<Frame>,
) {
    // The spread from `coordinate` runs after the settled cell's own walk.
    if depth == 0 {
        pending.push(Frame::Spread { coordinate });
    }

    if !context.contains(&coordinate)
        && let Some(surface) = context.surface_below(&coordinate)
    {
        let resting = coordinate.with_levitation(surface + 1);
        let height = liquid_height(coordinate.levitation - surface, depth);
        context.push(Block::pending_liquid(
            resting,
            pour.pair.kind_for(is_initial),
            height,
        ));
        pending.push(Frame::Settle {
            coordinate: resting,
            depth: 0,
            is_initial: false,
        });
    }
}

fn spread_step(
    context: &SpreadContext,
    pour: &Pour,
    coordinate: Coordinate,
    pending: &mut Vec<Frame>,
) {
    let underneath = coordinate.below();
    let on_solid = context
        .kind_at(&underneath)
        .is_some_and(|kind| !kind.is_liquid());
    if !on_solid {
        return;
    }

    let radius = spread_radius(context, &underneath, &pour.config);
    let first = pending.len();
    for ring in 0..=radius {
        for target in diamond_ring(coordinate, ring) {
            pending.push(Frame::Settle {
                coordinate: target,
                depth: ring + 1,
                is_initial: false,
            });
        }
    }
    pending[first..].reverse();
}

/// Spread radius for liquid resting on `underneath`.
///
/// A resting block with fewer than `edge_threshold` occupied neighbours sits on
/// an edge, and the liquid only spreads one ring so it does not run off a
/// narrow ledge.
#[must_use]
pub fn spread_radius(
    context: &SpreadContext,
    underneath: &Coordinate,
    config: &SpreadConfig,
) -> u32 {
    if context.occupied_neighbours(underneath) < config.edge_threshold {
        config.maximum_spread.min(1)
    } else {
        config.maximum_spread
    }
}

/// The planar cells at Manhattan distance `ring` from `center`, at the same levitation.
///
/// Walks the columns left to right, visiting the cell above the center row and
/// then its mirror below it. The two tips of the diamond have no mirror.
pub fn diamond_ring(center: Coordinate, ring: u32) -> impl Iterator<Item = Coordinate> {
    let ring = ring as i32;
    (-ring..=ring).flat_map(move |column| {
        let row_offset = ring - column.abs();
        let upper = center.offset(row_offset, column, 0);
        let mirrored = (column.abs() != ring).then(|| center.offset(-row_offset, column, 0));
        iter::once(upper).chain(mirrored)
    })
}
