//! Dice weights and the per-resource partition of number tokens.
//!
//! A token's weight is the number of two-dice combinations that roll it.
//! The partitioner splits the variant's tokens into one group per resource
//! without looking at tile positions; [`crate::numbers`] lays the groups onto
//! the terrain afterwards.

use crate::board::Resource;
use crate::error::{GenerationError, Stage};
use crate::variant::BoardVariant;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Dice weight of each face value 0-12
pub const PROBABILITY_WEIGHTS: [u32; 13] = [0, 0, 1, 2, 3, 4, 5, 0, 5, 4, 3, 2, 1];

/// Order in which groups are dealt: abundant types first, then scarce
pub const PARTITION_ORDER: [Resource; 5] = [
    Resource::Sheep,
    Resource::Wood,
    Resource::Wheat,
    Resource::Rock,
    Resource::Clay,
];

/// Weight of a tile's number, 0 for the desert sentinel
pub fn weight(number: Option<u8>) -> u32 {
    number.map_or(0, token_weight)
}

/// Weight of a single token
pub fn token_weight(token: u8) -> u32 {
    PROBABILITY_WEIGHTS
        .get(token as usize)
        .copied()
        .unwrap_or(0)
}

/// 5, 6, 8 and 9: the numbers carrying the two highest weights
pub fn is_hot(number: Option<u8>) -> bool {
    matches!(number, Some(5 | 6 | 8 | 9))
}

/// Number tokens assigned to each resource type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbabilityGroups {
    /// Indexed by [`Resource::index`]
    groups: [Vec<u8>; 5],
}

impl ProbabilityGroups {
    /// Build from one token list per resource, indexed by [`Resource::index`]
    pub fn new(groups: [Vec<u8>; 5]) -> Self {
        Self { groups }
    }

    /// Tokens assigned to one resource
    pub fn get(&self, resource: Resource) -> &[u8] {
        &self.groups[resource.index()]
    }

    /// Summed weight of one resource's tokens
    pub fn weight(&self, resource: Resource) -> u32 {
        self.get(resource).iter().map(|&t| token_weight(t)).sum()
    }

    /// Total number of tokens across every group
    pub fn len(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn into_pools(self) -> [Vec<u8>; 5] {
        self.groups
    }

    /// Check the duplicate, weight-range and scarce-balance rules
    pub fn is_fair(&self, variant: &BoardVariant) -> bool {
        let min = 3 * variant.low_supply() as u32;
        let max = 4 * variant.high_supply() as u32;

        Resource::ALL.iter().all(|&resource| {
            let tokens = self.get(resource);
            let sum = self.weight(resource);
            within_duplicate_allowance(tokens, variant.duplicate_pairs())
                && (min..=max).contains(&sum)
                && (!resource.is_scarce() || is_locally_balanced(tokens))
        })
    }
}

/// Whether at most `pairs` values repeat, each at most twice.
///
/// Counts tokens whose value appears elsewhere in the group: a pair
/// contributes two, a triple three.
pub fn within_duplicate_allowance(tokens: &[u8], pairs: usize) -> bool {
    let repeated = tokens
        .iter()
        .filter(|&&t| tokens.iter().filter(|&&o| o == t).count() > 1)
        .count();
    repeated <= 2 * pairs
}

/// No token outweighs the rest of its group combined
pub fn is_locally_balanced(tokens: &[u8]) -> bool {
    let total: u32 = tokens.iter().map(|&t| token_weight(t)).sum();
    tokens.iter().all(|&t| {
        let w = token_weight(t);
        w <= total - w
    })
}

/// Deal shuffled tokens into groups sized by each resource's supply
fn deal(variant: &BoardVariant, tokens: &[u8]) -> ProbabilityGroups {
    let mut groups = ProbabilityGroups::default();
    let mut rest = tokens;
    for resource in PARTITION_ORDER {
        let take = variant.supply(resource).min(rest.len());
        let (head, tail) = rest.split_at(take);
        groups.groups[resource.index()] = head.to_vec();
        rest = tail;
    }
    groups
}

/// Partition the variant's number tokens by rejection sampling.
///
/// Each attempt shuffles the full token multiset, deals it out in
/// [`PARTITION_ORDER`], and keeps the first deal that passes
/// [`ProbabilityGroups::is_fair`].
pub fn partition_tokens<R: Rng>(
    variant: &BoardVariant,
    rng: &mut R,
    attempt_limit: usize,
) -> Result<ProbabilityGroups, GenerationError> {
    let mut tokens = variant.number_tokens().to_vec();

    for attempt in 1..=attempt_limit {
        tokens.shuffle(rng);
        let groups = deal(variant, &tokens);
        if groups.is_fair(variant) {
            debug!(attempt, variant = variant.name(), "token partition accepted");
            return Ok(groups);
        }
    }

    Err(GenerationError::Exhausted {
        stage: Stage::Partition,
        attempts: attempt_limit,
    })
}
