//! Board output types shared by every generation stage.
//!
//! This module contains:
//! - Resource and tile types for the land sequence
//! - Harbor types and the per-ring-position harbor slot
//! - `GeneratedBoard`, the value handed to renderers once a board is ready

use crate::probability::{self, ProbabilityGroups};
use crate::variant::BoardSize;
use serde::{Deserialize, Serialize};

/// Producing resource types.
///
/// Sheep, Wheat and Wood are the abundant types; Rock and Clay are scarce and
/// appear on fewer tiles in every board size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Resource {
    Sheep,
    Wheat,
    Wood,
    Rock,
    Clay,
}

impl Resource {
    /// All resource types
    pub const ALL: [Resource; 5] = [
        Resource::Sheep,
        Resource::Wheat,
        Resource::Wood,
        Resource::Rock,
        Resource::Clay,
    ];

    /// Stable position of this resource in [`Resource::ALL`]
    pub fn index(self) -> usize {
        match self {
            Resource::Sheep => 0,
            Resource::Wheat => 1,
            Resource::Wood => 2,
            Resource::Rock => 3,
            Resource::Clay => 4,
        }
    }

    /// Single-letter label used in compact terrain strings
    pub fn symbol(self) -> char {
        match self {
            Resource::Sheep => 'S',
            Resource::Wheat => 'G',
            Resource::Wood => 'W',
            Resource::Rock => 'R',
            Resource::Clay => 'C',
        }
    }

    /// Whether this is one of the low-supply types
    pub fn is_scarce(self) -> bool {
        matches!(self, Resource::Rock | Resource::Clay)
    }
}

/// What a land tile holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileType {
    /// Produces a resource when its number is rolled
    Resource(Resource),
    /// No production and no number token
    Desert,
}

impl TileType {
    /// Get the resource this tile produces, if any
    pub fn resource(&self) -> Option<Resource> {
        match self {
            TileType::Resource(r) => Some(*r),
            TileType::Desert => None,
        }
    }

    pub fn is_desert(&self) -> bool {
        matches!(self, TileType::Desert)
    }

    /// Single-letter label, `D` for desert
    pub fn symbol(&self) -> char {
        match self {
            TileType::Resource(r) => r.symbol(),
            TileType::Desert => 'D',
        }
    }
}

/// Harbor types for maritime trading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Harbor {
    /// 3:1 trade any resource
    Generic,
    /// 2:1 trade for a specific resource
    Specific(Resource),
}

impl Harbor {
    /// The exchange rate for this harbor
    pub fn rate(&self) -> u32 {
        match self {
            Harbor::Generic => 3,
            Harbor::Specific(_) => 2,
        }
    }

    /// The resource a 2:1 harbor trades, `None` for 3:1
    pub fn resource(&self) -> Option<Resource> {
        match self {
            Harbor::Generic => None,
            Harbor::Specific(r) => Some(*r),
        }
    }
}

/// One water-ring position and what sits on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarborSlot {
    /// Ring position, clockwise from the top-left water tile
    pub position: usize,
    /// The harbor here, or `None` for open water
    pub harbor: Option<Harbor>,
    /// Land-tile index this slot points at
    pub facing: usize,
    /// Hexagon corners (0 = top-left, clockwise to 5) the harbor arms reach
    pub corners: [u8; 2],
}

/// A finished board: terrain, numbers and harbors.
///
/// `terrain` and `numbers` are index-aligned with the variant's land
/// adjacency table; `harbors` holds one slot per water-ring position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedBoard {
    /// Which built-in size this board was generated for, if any
    pub size: Option<BoardSize>,
    /// Terrain per land tile
    pub terrain: Vec<TileType>,
    /// Dice number per land tile, `None` on deserts
    pub numbers: Vec<Option<u8>>,
    /// The token partition the numbers were drawn from
    pub groups: ProbabilityGroups,
    /// One slot per water-ring position
    pub harbors: Vec<HarborSlot>,
}

impl GeneratedBoard {
    /// Number of land tiles holding the given tile type
    pub fn count(&self, tile: TileType) -> usize {
        self.terrain.iter().filter(|t| **t == tile).count()
    }

    /// Land-tile indices holding a desert
    pub fn desert_indices(&self) -> Vec<usize> {
        self.terrain
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_desert())
            .map(|(i, _)| i)
            .collect()
    }

    /// Terrain as one symbol per land tile, e.g. `SGWRCD...`
    pub fn terrain_symbols(&self) -> String {
        self.terrain.iter().map(TileType::symbol).collect()
    }

    /// Summed dice weight of every tile producing `resource`
    pub fn resource_weight(&self, resource: Resource) -> u32 {
        self.terrain
            .iter()
            .zip(&self.numbers)
            .filter(|(t, _)| t.resource() == Some(resource))
            .map(|(_, n)| probability::weight(*n))
            .sum()
    }

    /// Harbors actually placed (open-water slots skipped)
    pub fn placed_harbors(&self) -> impl Iterator<Item = (&HarborSlot, Harbor)> {
        self.harbors
            .iter()
            .filter_map(|slot| slot.harbor.map(|h| (slot, h)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_index_matches_all() {
        for (i, r) in Resource::ALL.iter().enumerate() {
            assert_eq!(r.index(), i);
        }
    }

    #[test]
    fn test_scarce_resources() {
        let scarce: Vec<_> = Resource::ALL.iter().filter(|r| r.is_scarce()).collect();
        assert_eq!(scarce, vec![&Resource::Rock, &Resource::Clay]);
    }

    #[test]
    fn test_harbor_rates() {
        assert_eq!(Harbor::Generic.rate(), 3);
        assert_eq!(Harbor::Specific(Resource::Wood).rate(), 2);
        assert_eq!(Harbor::Generic.resource(), None);
    }

    #[test]
    fn test_tile_symbols_are_distinct() {
        let mut symbols: Vec<char> = Resource::ALL
            .iter()
            .map(|&r| TileType::Resource(r).symbol())
            .chain(std::iter::once(TileType::Desert.symbol()))
            .collect();
        symbols.sort_unstable();
        symbols.dedup();
        assert_eq!(symbols.len(), 6);
    }

    #[test]
    fn test_resource_weight_skips_other_tiles() {
        let board = GeneratedBoard {
            size: None,
            terrain: vec![
                TileType::Resource(Resource::Rock),
                TileType::Desert,
                TileType::Resource(Resource::Rock),
                TileType::Resource(Resource::Clay),
            ],
            numbers: vec![Some(6), None, Some(12), Some(8)],
            groups: ProbabilityGroups::default(),
            harbors: Vec::new(),
        };

        assert_eq!(board.resource_weight(Resource::Rock), 6);
        assert_eq!(board.resource_weight(Resource::Clay), 5);
        assert_eq!(board.desert_indices(), vec![1]);
        assert_eq!(board.terrain_symbols(), "RDRC");
        assert_eq!(board.count(TileType::Resource(Resource::Rock)), 2);
    }
}
