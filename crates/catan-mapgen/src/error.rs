//! Error types for configuration and generation.

use crate::board::Resource;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Generation stage, used to report which loop gave up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    Terrain,
    Partition,
    Mapping,
    Harbors,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Terrain => "terrain placement",
            Stage::Partition => "probability partition",
            Stage::Mapping => "number mapping",
            Stage::Harbors => "harbor placement",
        };
        f.write_str(name)
    }
}

/// Variant tables that cannot describe a playable board
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum ConfigError {
    #[error("{table} has {actual} entries, expected {expected}")]
    TableLength {
        table: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{table} entry {entry} references tile {tile}, which is out of range")]
    TileOutOfRange {
        table: &'static str,
        entry: usize,
        tile: usize,
    },

    #[error("land tile {tile} lists itself as a neighbour")]
    SelfNeighbour { tile: usize },

    #[error("land tiles {a} and {b} are not mutually adjacent")]
    AsymmetricAdjacency { a: usize, b: usize },

    #[error("water position {position} borders {count} land tiles, expected 1 or 2")]
    WaterNeighbourCount { position: usize, count: usize },

    #[error("harbor corners at position {position} list {actual} options, expected {expected}")]
    HarborCorners {
        position: usize,
        expected: usize,
        actual: usize,
    },

    #[error("harbor corner {corner} at position {position} is not a hexagon corner")]
    CornerOutOfRange { position: usize, corner: u8 },

    #[error("intersection {entry} repeats a land tile")]
    DegenerateIntersection { entry: usize },

    #[error("{resource:?} has {actual} tiles, expected {expected}")]
    Supply {
        resource: Resource,
        expected: usize,
        actual: usize,
    },

    #[error("number token {0} cannot be placed on a tile")]
    InvalidToken(u8),

    #[error("no 2:1 harbor for {0:?}")]
    MissingHarbor(Resource),

    #[error("supply counts must be non-zero with high >= low")]
    SupplyCounts,
}

/// Errors raised while generating a board
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum GenerationError {
    /// The token partition could not be laid onto the terrain.
    /// Recovered by drawing a new partition.
    #[error("number partition could not be mapped after {attempts} attempts")]
    UnsolvableMapping { attempts: usize },

    /// A rejection loop hit its cap; the tables are inconsistent with the
    /// constraints or the limits are set too low.
    #[error("{stage} gave up after {attempts} attempts")]
    Exhausted { stage: Stage, attempts: usize },

    #[error("no board has been generated for the selected variant")]
    NoBoard,

    #[error("sequence has {actual} land tiles, the variant has {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("token groups do not cover the terrain: {resource:?} has {tokens} tokens for {tiles} tiles")]
    GroupMismatch {
        resource: Resource,
        tokens: usize,
        tiles: usize,
    },
}

impl GenerationError {
    /// Whether the pipeline should retry from an earlier stage
    pub fn is_retryable(&self) -> bool {
        matches!(self, GenerationError::UnsolvableMapping { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_unsolvable_mapping_is_retryable() {
        assert!(GenerationError::UnsolvableMapping { attempts: 3 }.is_retryable());
        assert!(!GenerationError::NoBoard.is_retryable());
        assert!(!GenerationError::Exhausted {
            stage: Stage::Terrain,
            attempts: 1
        }
        .is_retryable());
    }

    #[test]
    fn test_exhausted_message_names_stage() {
        let err = GenerationError::Exhausted {
            stage: Stage::Harbors,
            attempts: 10,
        };
        assert_eq!(err.to_string(), "harbor placement gave up after 10 attempts");
    }
}
