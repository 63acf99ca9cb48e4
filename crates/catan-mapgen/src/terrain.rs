//! Terrain placement: no two touching land tiles share a resource.

use crate::board::TileType;
use crate::error::{GenerationError, Stage};
use crate::variant::BoardVariant;
use rand::Rng;
use tracing::debug;

/// Check that no tile touches a neighbour holding the same resource.
///
/// Deserts are compared like any other tile type.
pub fn is_balanced(variant: &BoardVariant, terrain: &[TileType]) -> bool {
    terrain.len() == variant.land_count()
        && terrain.iter().enumerate().all(|(i, tile)| {
            variant
                .land_neighbors(i)
                .iter()
                .all(|&n| terrain[n] != *tile)
        })
}

/// Fill land slots in index order, drawing tiles at random from the supply.
///
/// A drawn tile that matches an already placed neighbour of the next slot is
/// set aside for this slot only; every placement returns the set-aside tiles
/// to the pool. When every remaining tile has been set aside the attempt is
/// abandoned and started over from a full pool.
pub fn assign_terrain<R: Rng>(
    variant: &BoardVariant,
    rng: &mut R,
    restart_limit: usize,
) -> Result<Vec<TileType>, GenerationError> {
    let land = variant.land_count();

    for attempt in 1..=restart_limit {
        let mut placed: Vec<TileType> = Vec::with_capacity(land);
        let mut available = variant.terrain().to_vec();
        let mut tried: Vec<TileType> = Vec::new();

        while !available.is_empty() {
            let tile = available.swap_remove(rng.gen_range(0..available.len()));
            let slot = placed.len();
            let clashes = variant
                .land_neighbors(slot)
                .iter()
                .any(|&n| n < slot && placed[n] == tile);

            if clashes {
                tried.push(tile);
            } else {
                placed.push(tile);
                // Rejections are per slot: tried tiles rejoin the pool once it is filled
                available.append(&mut tried);
            }
        }

        if tried.is_empty() {
            debug!(attempt, variant = variant.name(), "terrain placed");
            return Ok(placed);
        }
    }

    Err(GenerationError::Exhausted {
        stage: Stage::Terrain,
        attempts: restart_limit,
    })
}
