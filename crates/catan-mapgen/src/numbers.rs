//! Laying a token partition onto the terrain.
//!
//! The partition fixes which numbers each resource gets; this stage decides
//! which tile of that resource gets which number, subject to every vertex
//! where three land tiles meet.

use crate::board::{Resource, TileType};
use crate::error::GenerationError;
use crate::probability::{self, ProbabilityGroups};
use crate::variant::BoardVariant;
use rand::Rng;
use tracing::debug;

/// Highest summed weight at a vertex touching a desert
pub const MAX_DESERT_VERTEX_WEIGHT: u32 = 8;

/// Highest summed weight at any other vertex
pub const MAX_VERTEX_WEIGHT: u32 = 11;

/// One vertex: three distinct numbers under the weight cap
pub fn vertex_fair(trio: [Option<u8>; 3]) -> bool {
    if trio[0] == trio[1] || trio[1] == trio[2] || trio[0] == trio[2] {
        return false;
    }
    let sum: u32 = trio.iter().map(|&n| probability::weight(n)).sum();
    let cap = if trio.contains(&None) {
        MAX_DESERT_VERTEX_WEIGHT
    } else {
        MAX_VERTEX_WEIGHT
    };
    sum <= cap
}

/// Check every intersection of the variant with [`vertex_fair`]
pub fn intersections_fair(variant: &BoardVariant, numbers: &[Option<u8>]) -> bool {
    numbers.len() == variant.land_count()
        && variant
            .intersections()
            .iter()
            .all(|&[a, b, c]| vertex_fair([numbers[a], numbers[b], numbers[c]]))
}

fn check_coverage(terrain: &[TileType], groups: &ProbabilityGroups) -> Result<(), GenerationError> {
    for resource in Resource::ALL {
        let tiles = terrain
            .iter()
            .filter(|t| t.resource() == Some(resource))
            .count();
        let tokens = groups.get(resource).len();
        if tiles != tokens {
            return Err(GenerationError::GroupMismatch {
                resource,
                tokens,
                tiles,
            });
        }
    }
    Ok(())
}

/// Assign each producing tile a token from its resource's group.
///
/// Every attempt works on a fresh copy of the groups. After `attempt_limit`
/// rejected layouts this returns [`GenerationError::UnsolvableMapping`]; the
/// caller should draw a new partition rather than retry with the same one.
pub fn map_numbers<R: Rng>(
    variant: &BoardVariant,
    terrain: &[TileType],
    groups: &ProbabilityGroups,
    rng: &mut R,
    attempt_limit: usize,
) -> Result<Vec<Option<u8>>, GenerationError> {
    if terrain.len() != variant.land_count() {
        return Err(GenerationError::LengthMismatch {
            expected: variant.land_count(),
            actual: terrain.len(),
        });
    }
    check_coverage(terrain, groups)?;

    for attempt in 1..=attempt_limit {
        let mut pools = groups.clone().into_pools();
        let numbers: Vec<Option<u8>> = terrain
            .iter()
            .map(|tile| {
                tile.resource().map(|r| {
                    let pool = &mut pools[r.index()];
                    let pick = rng.gen_range(0..pool.len());
                    pool.swap_remove(pick)
                })
            })
            .collect();

        if intersections_fair(variant, &numbers) {
            debug!(attempt, variant = variant.name(), "numbers mapped");
            return Ok(numbers);
        }
    }

    Err(GenerationError::UnsolvableMapping {
        attempts: attempt_limit,
    })
}
