//! Harbor placement around the water ring.
//!
//! Harbors sit on every other ring position, alternating with open water.
//! A 2:1 harbor may not point at a tile of its own resource that carries a
//! hot number; 3:1 harbors are unrestricted.

use crate::board::{HarborSlot, TileType};
use crate::error::{GenerationError, Stage};
use crate::probability;
use crate::variant::BoardVariant;
use rand::Rng;
use tracing::debug;

/// Check that no 2:1 harbor faces a hot tile of its own resource
pub fn harbors_fair(terrain: &[TileType], numbers: &[Option<u8>], slots: &[HarborSlot]) -> bool {
    slots.iter().all(|slot| match slot.harbor.and_then(|h| h.resource()) {
        Some(resource) => {
            let faces_own = terrain.get(slot.facing) == Some(&TileType::Resource(resource));
            let hot = probability::is_hot(numbers.get(slot.facing).copied().flatten());
            !(faces_own && hot)
        }
        None => true,
    })
}

/// Pick which bordering land tile a ring position points at, and the two
/// hexagon corners its arms reach
fn choose_facing<R: Rng>(variant: &BoardVariant, position: usize, rng: &mut R) -> (usize, [u8; 2]) {
    let neighbors = variant.water_neighbors(position);
    let which = if neighbors.len() > 1 {
        rng.gen_range(0..neighbors.len())
    } else {
        0
    };
    let corners = variant.harbor_corners(position);
    (neighbors[which], [corners[which], corners[which + 1]])
}

/// Lay out harbors by rejection sampling.
///
/// Each attempt refills the token pool, flips a coin for whether position 0
/// holds a harbor or open water, then walks the ring drawing a random token
/// for every harbor position and a random facing for every position.
pub fn place_harbors<R: Rng>(
    variant: &BoardVariant,
    terrain: &[TileType],
    numbers: &[Option<u8>],
    rng: &mut R,
    attempt_limit: usize,
) -> Result<Vec<HarborSlot>, GenerationError> {
    for actual in [terrain.len(), numbers.len()] {
        if actual != variant.land_count() {
            return Err(GenerationError::LengthMismatch {
                expected: variant.land_count(),
                actual,
            });
        }
    }

    for attempt in 1..=attempt_limit {
        let mut pool = variant.harbor_tokens().to_vec();
        let harbor_first = rng.gen_bool(0.5);

        let slots: Vec<HarborSlot> = (0..variant.ring_len())
            .map(|position| {
                let harbor = if (position % 2 == 0) == harbor_first {
                    let pick = rng.gen_range(0..pool.len());
                    Some(pool.swap_remove(pick))
                } else {
                    None
                };
                let (facing, corners) = choose_facing(variant, position, rng);
                HarborSlot {
                    position,
                    harbor,
                    facing,
                    corners,
                }
            })
            .collect();

        if harbors_fair(terrain, numbers, &slots) {
            debug!(attempt, harbor_first, variant = variant.name(), "harbors placed");
            return Ok(slots);
        }
    }

    Err(GenerationError::Exhausted {
        stage: Stage::Harbors,
        attempts: attempt_limit,
    })
}
