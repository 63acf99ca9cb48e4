//! Board sizes and their topology tables.
//!
//! Land tiles are numbered from the top-left tile, left to right and top to
//! bottom. Water-ring positions are numbered clockwise from the top-left water
//! tile. Hexagon corners are numbered 0 (top-left) clockwise to 5
//! (bottom-left). All built-in data is compile-time `static` and is wrapped
//! in a process-wide [`BoardVariant`] on first use.

use crate::board::{Harbor, Resource, TileType};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, OnceLock};

/// The three supported board sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardSize {
    /// 19 land tiles, 3-4 players
    #[serde(rename = "standard")]
    Standard,
    /// 24 land tiles, 5 players
    #[serde(rename = "large")]
    Large,
    /// 30 land tiles, 6 players
    #[serde(rename = "xlarge")]
    ExtraLarge,
}

impl BoardSize {
    pub const ALL: [BoardSize; 3] = [BoardSize::Standard, BoardSize::Large, BoardSize::ExtraLarge];

    pub fn name(self) -> &'static str {
        match self {
            BoardSize::Standard => "standard",
            BoardSize::Large => "large",
            BoardSize::ExtraLarge => "xlarge",
        }
    }

    /// Raw tables for this size, suitable for editing before validation
    pub fn tables(self) -> VariantTables {
        match self {
            BoardSize::Standard => VariantTables::from_static(self, &STANDARD),
            BoardSize::Large => VariantTables::from_static(self, &LARGE),
            BoardSize::ExtraLarge => VariantTables::from_static(self, &XLARGE),
        }
    }

    /// The shared, read-only variant for this size
    pub fn variant(self) -> Arc<BoardVariant> {
        static STANDARD_VARIANT: OnceLock<Arc<BoardVariant>> = OnceLock::new();
        static LARGE_VARIANT: OnceLock<Arc<BoardVariant>> = OnceLock::new();
        static XLARGE_VARIANT: OnceLock<Arc<BoardVariant>> = OnceLock::new();

        let cell = match self {
            BoardSize::Standard => &STANDARD_VARIANT,
            BoardSize::Large => &LARGE_VARIANT,
            BoardSize::ExtraLarge => &XLARGE_VARIANT,
        };
        // Built-in tables are checked by `test_builtin_tables_validate`.
        Arc::clone(cell.get_or_init(|| Arc::new(BoardVariant::assemble(Some(self), self.tables()))))
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BoardSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "standard" | "19" => Ok(BoardSize::Standard),
            "large" | "24" => Ok(BoardSize::Large),
            "xlarge" | "extra-large" | "30" => Ok(BoardSize::ExtraLarge),
            other => Err(format!("unknown board size '{}'", other)),
        }
    }
}

/// Unvalidated variant description.
///
/// This is the shape custom variants are loaded from; turn it into a
/// [`BoardVariant`] with [`BoardVariant::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantTables {
    pub name: String,
    /// Tiles per scarce type (Rock, Clay)
    pub low_supply: usize,
    /// Tiles per abundant type (Sheep, Wheat, Wood)
    pub high_supply: usize,
    /// Every land tile to be placed, deserts included
    pub terrain: Vec<TileType>,
    /// Dice-number tokens, one per producing tile
    pub number_tokens: Vec<u8>,
    /// Harbor tokens, one per other ring position
    pub harbor_tokens: Vec<Harbor>,
    /// Land neighbours of each land tile
    pub land_neighbors: Vec<Vec<usize>>,
    /// Land tiles bordering each water-ring position
    pub water_neighbors: Vec<Vec<usize>>,
    /// Groups of three land tiles meeting at one vertex
    pub intersections: Vec<[usize; 3]>,
    /// Candidate corners per ring position for drawing harbor arms
    pub harbor_corners: Vec<Vec<u8>>,
    /// Repeated-token pairs tolerated within one resource's group
    #[serde(default)]
    pub duplicate_pairs: usize,
}

impl VariantTables {
    fn from_static(size: BoardSize, data: &StaticTables) -> Self {
        let mut terrain = Vec::new();
        for resource in Resource::ALL {
            let count = if resource.is_scarce() {
                data.low_supply
            } else {
                data.high_supply
            };
            terrain.extend(std::iter::repeat(TileType::Resource(resource)).take(count));
        }
        terrain.extend(std::iter::repeat(TileType::Desert).take(data.deserts));

        let mut harbor_tokens: Vec<Harbor> = data
            .specific_harbors
            .iter()
            .map(|r| Harbor::Specific(*r))
            .collect();
        harbor_tokens.extend(std::iter::repeat(Harbor::Generic).take(data.generic_harbors));

        Self {
            name: size.name().to_string(),
            low_supply: data.low_supply,
            high_supply: data.high_supply,
            terrain,
            number_tokens: data.number_tokens.to_vec(),
            harbor_tokens,
            land_neighbors: data.land_neighbors.iter().map(|n| n.to_vec()).collect(),
            water_neighbors: data.water_neighbors.iter().map(|n| n.to_vec()).collect(),
            intersections: data.intersections.to_vec(),
            harbor_corners: data.harbor_corners.iter().map(|c| c.to_vec()).collect(),
            duplicate_pairs: data.duplicate_pairs,
        }
    }
}

/// A validated, immutable board configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardVariant {
    size: Option<BoardSize>,
    tables: VariantTables,
}

impl BoardVariant {
    /// Validate custom tables
    pub fn new(tables: VariantTables) -> Result<Self, ConfigError> {
        validate(&tables)?;
        Ok(Self::assemble(None, tables))
    }

    fn assemble(size: Option<BoardSize>, tables: VariantTables) -> Self {
        Self { size, tables }
    }

    /// Built-in size this variant came from, `None` for custom tables
    pub fn size(&self) -> Option<BoardSize> {
        self.size
    }

    /// Variant name, e.g. `standard`
    pub fn name(&self) -> &str {
        &self.tables.name
    }

    /// Number of land tiles
    pub fn land_count(&self) -> usize {
        self.tables.land_neighbors.len()
    }

    /// Number of water-ring positions
    pub fn ring_len(&self) -> usize {
        self.tables.water_neighbors.len()
    }

    /// Tiles per scarce resource
    pub fn low_supply(&self) -> usize {
        self.tables.low_supply
    }

    /// Tiles per abundant resource
    pub fn high_supply(&self) -> usize {
        self.tables.high_supply
    }

    /// Number of tiles of the given resource
    pub fn supply(&self, resource: Resource) -> usize {
        if resource.is_scarce() {
            self.tables.low_supply
        } else {
            self.tables.high_supply
        }
    }

    /// Number of desert tiles
    pub fn desert_count(&self) -> usize {
        self.tables.terrain.iter().filter(|t| t.is_desert()).count()
    }

    /// The full tile multiset, deserts included
    pub fn terrain(&self) -> &[TileType] {
        &self.tables.terrain
    }

    /// Dice number tokens, one per producing tile
    pub fn number_tokens(&self) -> &[u8] {
        &self.tables.number_tokens
    }

    /// Harbor tokens, one per every other ring position
    pub fn harbor_tokens(&self) -> &[Harbor] {
        &self.tables.harbor_tokens
    }

    /// Land tiles touching `tile`
    pub fn land_neighbors(&self, tile: usize) -> &[usize] {
        &self.tables.land_neighbors[tile]
    }

    /// The one or two land tiles a ring position borders
    pub fn water_neighbors(&self, position: usize) -> &[usize] {
        &self.tables.water_neighbors[position]
    }

    /// Every vertex where three land tiles meet
    pub fn intersections(&self) -> &[[usize; 3]] {
        &self.tables.intersections
    }

    /// Corner options for drawing a harbor at `position`
    pub fn harbor_corners(&self, position: usize) -> &[u8] {
        &self.tables.harbor_corners[position]
    }

    /// Repeated-token pairs tolerated per resource group
    pub fn duplicate_pairs(&self) -> usize {
        self.tables.duplicate_pairs
    }
}

impl TryFrom<VariantTables> for BoardVariant {
    type Error = ConfigError;

    fn try_from(tables: VariantTables) -> Result<Self, Self::Error> {
        Self::new(tables)
    }
}

fn expect_len(table: &'static str, expected: usize, actual: usize) -> Result<(), ConfigError> {
    if expected != actual {
        return Err(ConfigError::TableLength {
            table,
            expected,
            actual,
        });
    }
    Ok(())
}

fn validate(t: &VariantTables) -> Result<(), ConfigError> {
    let land = t.land_neighbors.len();
    let ring = t.water_neighbors.len();

    if t.low_supply == 0 || t.high_supply < t.low_supply {
        return Err(ConfigError::SupplyCounts);
    }

    // Land adjacency: in range, irreflexive, symmetric
    for (tile, neighbors) in t.land_neighbors.iter().enumerate() {
        for &n in neighbors {
            if n >= land {
                return Err(ConfigError::TileOutOfRange {
                    table: "land_neighbors",
                    entry: tile,
                    tile: n,
                });
            }
            if n == tile {
                return Err(ConfigError::SelfNeighbour { tile });
            }
            if !t.land_neighbors[n].contains(&tile) {
                return Err(ConfigError::AsymmetricAdjacency { a: tile, b: n });
            }
        }
    }

    for (position, neighbors) in t.water_neighbors.iter().enumerate() {
        if neighbors.is_empty() || neighbors.len() > 2 {
            return Err(ConfigError::WaterNeighbourCount {
                position,
                count: neighbors.len(),
            });
        }
        if let Some(&n) = neighbors.iter().find(|&&n| n >= land) {
            return Err(ConfigError::TileOutOfRange {
                table: "water_neighbors",
                entry: position,
                tile: n,
            });
        }
    }

    expect_len("harbor_corners", ring, t.harbor_corners.len())?;
    for (position, corners) in t.harbor_corners.iter().enumerate() {
        let expected = t.water_neighbors[position].len() + 1;
        if corners.len() != expected {
            return Err(ConfigError::HarborCorners {
                position,
                expected,
                actual: corners.len(),
            });
        }
        if let Some(&corner) = corners.iter().find(|&&c| c > 5) {
            return Err(ConfigError::CornerOutOfRange { position, corner });
        }
    }

    for (entry, triplet) in t.intersections.iter().enumerate() {
        if let Some(&n) = triplet.iter().find(|&&n| n >= land) {
            return Err(ConfigError::TileOutOfRange {
                table: "intersections",
                entry,
                tile: n,
            });
        }
        if triplet[0] == triplet[1] || triplet[1] == triplet[2] || triplet[0] == triplet[2] {
            return Err(ConfigError::DegenerateIntersection { entry });
        }
    }

    expect_len("terrain", land, t.terrain.len())?;
    for resource in Resource::ALL {
        let expected = if resource.is_scarce() {
            t.low_supply
        } else {
            t.high_supply
        };
        let actual = t
            .terrain
            .iter()
            .filter(|tile| tile.resource() == Some(resource))
            .count();
        if actual != expected {
            return Err(ConfigError::Supply {
                resource,
                expected,
                actual,
            });
        }
    }

    let producing = t.terrain.iter().filter(|tile| !tile.is_desert()).count();
    expect_len("number_tokens", producing, t.number_tokens.len())?;
    if let Some(&token) = t
        .number_tokens
        .iter()
        .find(|&&n| !(2..=12).contains(&n) || n == 7)
    {
        return Err(ConfigError::InvalidToken(token));
    }

    // Harbors alternate with open water all the way round the ring
    expect_len("harbor_tokens", ring, t.harbor_tokens.len() * 2)?;
    for resource in Resource::ALL {
        if !t.harbor_tokens.contains(&Harbor::Specific(resource)) {
            return Err(ConfigError::MissingHarbor(resource));
        }
    }

    Ok(())
}

struct StaticTables {
    low_supply: usize,
    high_supply: usize,
    deserts: usize,
    number_tokens: &'static [u8],
    specific_harbors: &'static [Resource],
    generic_harbors: usize,
    land_neighbors: &'static [&'static [usize]],
    water_neighbors: &'static [&'static [usize]],
    intersections: &'static [[usize; 3]],
    harbor_corners: &'static [&'static [u8]],
    duplicate_pairs: usize,
}

const ONE_OF_EACH_HARBOR: &[Resource] = &[
    Resource::Sheep,
    Resource::Wheat,
    Resource::Wood,
    Resource::Rock,
    Resource::Clay,
];

static STANDARD: StaticTables = StaticTables {
    low_supply: 3,
    high_supply: 4,
    deserts: 1,
    number_tokens: &[2, 3, 3, 4, 4, 5, 5, 6, 6, 8, 8, 9, 9, 10, 10, 11, 11, 12],
    specific_harbors: ONE_OF_EACH_HARBOR,
    generic_harbors: 4,
    land_neighbors: &[
        &[1, 3, 4],
        &[0, 2, 4, 5],
        &[1, 5, 6],
        &[0, 4, 7, 8],
        &[0, 1, 3, 5, 8, 9],
        &[1, 2, 4, 6, 9, 10],
        &[2, 5, 10, 11],
        &[3, 8, 12],
        &[3, 4, 7, 9, 12, 13],
        &[4, 5, 8, 10, 13, 14],
        &[5, 6, 9, 11, 14, 15],
        &[6, 10, 15],
        &[7, 8, 13, 16],
        &[8, 9, 12, 14, 16, 17],
        &[9, 10, 13, 15, 17, 18],
        &[10, 11, 14, 18],
        &[12, 13, 17],
        &[13, 14, 16, 18],
        &[14, 15, 17],
    ],
    water_neighbors: &[
        &[0],
        &[1, 0],
        &[2, 1],
        &[2],
        &[6, 2],
        &[11, 6],
        &[11],
        &[15, 11],
        &[18, 15],
        &[18],
        &[17, 18],
        &[16, 17],
        &[16],
        &[12, 16],
        &[7, 12],
        &[7],
        &[3, 7],
        &[0, 3],
    ],
    intersections: &[
        [0, 1, 4],
        [1, 2, 5],
        [0, 3, 4],
        [1, 4, 5],
        [2, 5, 6],
        [3, 4, 8],
        [4, 5, 9],
        [5, 6, 10],
        [3, 7, 8],
        [4, 8, 9],
        [5, 9, 10],
        [6, 10, 11],
        [7, 8, 12],
        [8, 9, 13],
        [9, 10, 14],
        [10, 11, 15],
        [8, 12, 13],
        [9, 13, 14],
        [10, 14, 15],
        [12, 13, 16],
        [13, 14, 17],
        [14, 15, 18],
        [13, 16, 17],
        [14, 17, 18],
    ],
    harbor_corners: &[
        &[3, 4],
        &[3, 4, 5],
        &[3, 4, 5],
        &[4, 5],
        &[4, 5, 0],
        &[4, 5, 0],
        &[5, 0],
        &[5, 0, 1],
        &[5, 0, 1],
        &[0, 1],
        &[0, 1, 2],
        &[0, 1, 2],
        &[1, 2],
        &[1, 2, 3],
        &[1, 2, 3],
        &[2, 3],
        &[2, 3, 4],
        &[2, 3, 4],
    ],
    duplicate_pairs: 0,
};

static LARGE: StaticTables = StaticTables {
    low_supply: 4,
    high_supply: 5,
    deserts: 1,
    number_tokens: &[
        2, 3, 3, 4, 4, 5, 5, 6, 6, 8, 8, 8, 9, 9, 9, 10, 10, 10, 11, 11, 11, 12, 12,
    ],
    specific_harbors: ONE_OF_EACH_HARBOR,
    generic_harbors: 5,
    land_neighbors: &[
        &[1, 4, 5],
        &[0, 2, 5, 6],
        &[1, 3, 6, 7],
        &[2, 7, 8],
        &[0, 5, 9, 10],
        &[0, 1, 4, 6, 10, 11],
        &[1, 2, 5, 7, 11, 12],
        &[2, 3, 6, 8, 12, 13],
        &[3, 7, 13, 14],
        &[4, 10, 15],
        &[4, 5, 9, 11, 15, 16],
        &[5, 6, 10, 12, 16, 17],
        &[6, 7, 11, 13, 17, 18],
        &[7, 8, 12, 14, 18, 19],
        &[8, 13, 19],
        &[9, 10, 16, 20],
        &[10, 11, 15, 17, 20, 21],
        &[11, 12, 16, 18, 21, 22],
        &[12, 13, 17, 19, 22, 23],
        &[13, 14, 18, 23],
        &[15, 16, 21],
        &[16, 17, 20, 22],
        &[17, 18, 21, 23],
        &[18, 19, 22],
    ],
    water_neighbors: &[
        &[0],
        &[1, 0],
        &[2, 1],
        &[3, 2],
        &[3],
        &[8, 3],
        &[14, 8],
        &[14],
        &[19, 14],
        &[23, 19],
        &[23],
        &[22, 23],
        &[21, 22],
        &[20, 21],
        &[20],
        &[15, 20],
        &[9, 15],
        &[9],
        &[4, 9],
        &[0, 4],
    ],
    intersections: &[
        [0, 1, 5],
        [1, 2, 6],
        [2, 3, 7],
        [0, 4, 5],
        [1, 5, 6],
        [2, 6, 7],
        [3, 7, 8],
        [4, 5, 10],
        [5, 6, 11],
        [6, 7, 12],
        [7, 8, 13],
        [4, 9, 10],
        [5, 10, 11],
        [6, 11, 12],
        [7, 12, 13],
        [8, 13, 14],
        [9, 10, 15],
        [10, 11, 16],
        [11, 12, 17],
        [12, 13, 18],
        [13, 14, 19],
        [10, 15, 16],
        [11, 16, 17],
        [12, 17, 18],
        [13, 18, 19],
        [15, 16, 20],
        [16, 17, 21],
        [17, 18, 22],
        [18, 19, 23],
        [16, 20, 21],
        [17, 21, 22],
        [18, 22, 23],
    ],
    harbor_corners: &[
        &[3, 4],
        &[3, 4, 5],
        &[3, 4, 5],
        &[3, 4, 5],
        &[4, 5],
        &[4, 5, 0],
        &[4, 5, 0],
        &[5, 0],
        &[5, 0, 1],
        &[5, 0, 1],
        &[0, 1],
        &[0, 1, 2],
        &[0, 1, 2],
        &[0, 1, 2],
        &[1, 2],
        &[1, 2, 3],
        &[1, 2, 3],
        &[2, 3],
        &[2, 3, 4],
        &[2, 3, 4],
    ],
    duplicate_pairs: 0,
};

static XLARGE: StaticTables = StaticTables {
    low_supply: 5,
    high_supply: 6,
    deserts: 2,
    number_tokens: &[
        2, 2, 3, 3, 3, 4, 4, 4, 5, 5, 5, 6, 6, 6, 8, 8, 8, 9, 9, 9, 10, 10, 10, 11, 11, 11, 12, 12,
    ],
    specific_harbors: &[
        Resource::Sheep,
        Resource::Sheep,
        Resource::Wheat,
        Resource::Wood,
        Resource::Rock,
        Resource::Clay,
    ],
    generic_harbors: 5,
    land_neighbors: &[
        &[1, 3, 4],
        &[0, 2, 4, 5],
        &[1, 5, 6],
        &[0, 4, 7, 8],
        &[0, 1, 3, 5, 8, 9],
        &[1, 2, 4, 6, 9, 10],
        &[2, 5, 10, 11],
        &[3, 8, 12, 13],
        &[3, 4, 7, 9, 13, 14],
        &[4, 5, 8, 10, 14, 15],
        &[5, 6, 9, 11, 15, 16],
        &[6, 10, 16, 17],
        &[7, 13, 18],
        &[7, 8, 12, 14, 18, 19],
        &[8, 9, 13, 15, 19, 20],
        &[9, 10, 14, 16, 20, 21],
        &[10, 11, 15, 17, 21, 22],
        &[11, 16, 22],
        &[12, 13, 19, 23],
        &[13, 14, 18, 20, 23, 24],
        &[14, 15, 19, 21, 24, 25],
        &[15, 16, 20, 22, 25, 26],
        &[16, 17, 21, 26],
        &[18, 19, 24, 27],
        &[19, 20, 23, 25, 27, 28],
        &[20, 21, 24, 26, 28, 29],
        &[21, 22, 25, 29],
        &[23, 24, 28],
        &[24, 25, 27, 29],
        &[25, 26, 28],
    ],
    water_neighbors: &[
        &[0],
        &[1, 0],
        &[2, 1],
        &[2],
        &[6, 2],
        &[11, 6],
        &[17, 11],
        &[17],
        &[22, 17],
        &[26, 22],
        &[29, 26],
        &[29],
        &[28, 29],
        &[27, 28],
        &[27],
        &[23, 27],
        &[18, 23],
        &[12, 18],
        &[12],
        &[7, 12],
        &[3, 7],
        &[0, 3],
    ],
    intersections: &[
        [0, 1, 4],
        [1, 2, 5],
        [0, 3, 4],
        [1, 4, 5],
        [2, 5, 6],
        [3, 4, 8],
        [4, 5, 9],
        [5, 6, 10],
        [3, 7, 8],
        [4, 8, 9],
        [5, 9, 10],
        [6, 10, 11],
        [7, 8, 13],
        [8, 9, 14],
        [9, 10, 15],
        [10, 11, 16],
        [7, 12, 13],
        [8, 13, 14],
        [9, 14, 15],
        [10, 15, 16],
        [11, 16, 17],
        [12, 13, 18],
        [13, 14, 19],
        [14, 15, 20],
        [15, 16, 21],
        [16, 17, 22],
        [13, 18, 19],
        [14, 19, 20],
        [15, 20, 21],
        [16, 21, 22],
        [18, 19, 23],
        [19, 20, 24],
        [20, 21, 25],
        [21, 22, 26],
        [19, 23, 24],
        [20, 24, 25],
        [21, 25, 26],
        [23, 24, 27],
        [24, 25, 28],
        [25, 26, 29],
        [24, 27, 28],
        [25, 28, 29],
    ],
    harbor_corners: &[
        &[3, 4],
        &[3, 4, 5],
        &[3, 4, 5],
        &[4, 5],
        &[4, 5, 0],
        &[4, 5, 0],
        &[4, 5, 0],
        &[5, 0],
        &[5, 0, 1],
        &[5, 0, 1],
        &[5, 0, 1],
        &[0, 1],
        &[0, 1, 2],
        &[0, 1, 2],
        &[1, 2],
        &[1, 2, 3],
        &[1, 2, 3],
        &[1, 2, 3],
        &[2, 3],
        &[2, 3, 4],
        &[2, 3, 4],
        &[2, 3, 4],
    ],
    duplicate_pairs: 1,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_validate() {
        for size in BoardSize::ALL {
            let result = BoardVariant::new(size.tables());
            assert!(result.is_ok(), "{} tables invalid: {:?}", size, result.err());
        }
    }

    #[test]
    fn test_builtin_dimensions() {
        let expected = [
            (BoardSize::Standard, 19, 18, 1),
            (BoardSize::Large, 24, 20, 1),
            (BoardSize::ExtraLarge, 30, 22, 2),
        ];
        for (size, land, ring, deserts) in expected {
            let variant = size.variant();
            assert_eq!(variant.land_count(), land);
            assert_eq!(variant.ring_len(), ring);
            assert_eq!(variant.desert_count(), deserts);
            assert_eq!(variant.size(), Some(size));
        }
    }

    #[test]
    fn test_variant_is_shared() {
        let a = BoardSize::Large.variant();
        let b = BoardSize::Large.variant();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_intersections_are_mutually_adjacent() {
        for size in BoardSize::ALL {
            let variant = size.variant();
            for &[a, b, c] in variant.intersections() {
                assert!(variant.land_neighbors(a).contains(&b), "{size}: {a}-{b}");
                assert!(variant.land_neighbors(b).contains(&c), "{size}: {b}-{c}");
                assert!(variant.land_neighbors(a).contains(&c), "{size}: {a}-{c}");
            }
        }
    }

    #[test]
    fn test_standard_supply() {
        let variant = BoardSize::Standard.variant();
        assert_eq!(variant.supply(Resource::Sheep), 4);
        assert_eq!(variant.supply(Resource::Clay), 3);
        assert_eq!(variant.harbor_tokens().len(), 9);
        assert_eq!(
            variant
                .harbor_tokens()
                .iter()
                .filter(|h| **h == Harbor::Generic)
                .count(),
            4
        );
    }

    #[test]
    fn test_parse_board_size() {
        assert_eq!("standard".parse::<BoardSize>(), Ok(BoardSize::Standard));
        assert_eq!("XLarge".parse::<BoardSize>(), Ok(BoardSize::ExtraLarge));
        assert_eq!("24".parse::<BoardSize>(), Ok(BoardSize::Large));
        assert!("huge".parse::<BoardSize>().is_err());
    }

    #[test]
    fn test_rejects_short_adjacency_table() {
        let mut tables = BoardSize::Standard.tables();
        tables.land_neighbors.pop();
        // Tile 18 is now referenced but missing
        assert!(matches!(
            BoardVariant::new(tables),
            Err(ConfigError::TileOutOfRange { .. })
        ));
    }

    #[test]
    fn test_rejects_asymmetric_adjacency() {
        let mut tables = BoardSize::Standard.tables();
        tables.land_neighbors[0].retain(|&n| n != 1);
        assert_eq!(
            BoardVariant::new(tables),
            Err(ConfigError::AsymmetricAdjacency { a: 1, b: 0 })
        );
    }

    #[test]
    fn test_rejects_terrain_length_mismatch() {
        let mut tables = BoardSize::Standard.tables();
        tables.terrain.push(TileType::Desert);
        assert_eq!(
            BoardVariant::new(tables),
            Err(ConfigError::TableLength {
                table: "terrain",
                expected: 19,
                actual: 20
            })
        );
    }

    #[test]
    fn test_rejects_wrong_supply() {
        let mut tables = BoardSize::Standard.tables();
        let first_clay = tables
            .terrain
            .iter()
            .position(|t| *t == TileType::Resource(Resource::Clay))
            .unwrap();
        tables.terrain[first_clay] = TileType::Resource(Resource::Rock);
        assert!(matches!(
            BoardVariant::new(tables),
            Err(ConfigError::Supply {
                resource: Resource::Rock,
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_seven_token() {
        let mut tables = BoardSize::Standard.tables();
        tables.number_tokens[0] = 7;
        assert_eq!(BoardVariant::new(tables), Err(ConfigError::InvalidToken(7)));
    }

    #[test]
    fn test_rejects_odd_harbor_count() {
        let mut tables = BoardSize::Standard.tables();
        tables.harbor_tokens.push(Harbor::Generic);
        assert!(matches!(
            BoardVariant::new(tables),
            Err(ConfigError::TableLength {
                table: "harbor_tokens",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_bad_corner_options() {
        let mut tables = BoardSize::Large.tables();
        tables.harbor_corners[1] = vec![3, 4];
        assert_eq!(
            BoardVariant::new(tables),
            Err(ConfigError::HarborCorners {
                position: 1,
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn test_rejects_degenerate_intersection() {
        let mut tables = BoardSize::ExtraLarge.tables();
        tables.intersections[0] = [0, 0, 4];
        assert_eq!(
            BoardVariant::new(tables),
            Err(ConfigError::DegenerateIntersection { entry: 0 })
        );
    }

    #[test]
    fn test_rejects_self_neighbour() {
        let mut tables = BoardSize::Standard.tables();
        tables.land_neighbors[0].push(0);
        assert_eq!(BoardVariant::new(tables), Err(ConfigError::SelfNeighbour { tile: 0 }));
    }

    #[test]
    fn test_rejects_water_position_without_land() {
        let mut tables = BoardSize::Standard.tables();
        tables.water_neighbors[0].clear();
        assert_eq!(
            BoardVariant::new(tables),
            Err(ConfigError::WaterNeighbourCount { position: 0, count: 0 })
        );
    }

    #[test]
    fn test_rejects_water_position_with_three_tiles() {
        let mut tables = BoardSize::Standard.tables();
        tables.water_neighbors[3] = vec![2, 1, 6];
        assert_eq!(
            BoardVariant::new(tables),
            Err(ConfigError::WaterNeighbourCount { position: 3, count: 3 })
        );
    }

    #[test]
    fn test_rejects_water_neighbour_out_of_range() {
        let mut tables = BoardSize::Standard.tables();
        tables.water_neighbors[0] = vec![19];
        assert_eq!(
            BoardVariant::new(tables),
            Err(ConfigError::TileOutOfRange {
                table: "water_neighbors",
                entry: 0,
                tile: 19
            })
        );
    }

    #[test]
    fn test_rejects_corner_out_of_range() {
        let mut tables = BoardSize::Standard.tables();
        tables.harbor_corners[0] = vec![0, 6];
        assert_eq!(
            BoardVariant::new(tables),
            Err(ConfigError::CornerOutOfRange { position: 0, corner: 6 })
        );
    }

    #[test]
    fn test_rejects_intersection_out_of_range() {
        let mut tables = BoardSize::Standard.tables();
        tables.intersections[2] = [0, 3, 40];
        assert_eq!(
            BoardVariant::new(tables),
            Err(ConfigError::TileOutOfRange {
                table: "intersections",
                entry: 2,
                tile: 40
            })
        );
    }

    #[test]
    fn test_rejects_zero_low_supply() {
        let mut tables = BoardSize::Large.tables();
        tables.low_supply = 0;
        assert_eq!(BoardVariant::new(tables), Err(ConfigError::SupplyCounts));
    }

    #[test]
    fn test_rejects_high_supply_below_low() {
        let mut tables = BoardSize::Standard.tables();
        tables.high_supply = 2;
        assert_eq!(BoardVariant::new(tables), Err(ConfigError::SupplyCounts));
    }

    #[test]
    fn test_rejects_tokens_off_the_dice() {
        for token in [0, 1, 13] {
            let mut tables = BoardSize::Standard.tables();
            tables.number_tokens[0] = token;
            assert_eq!(BoardVariant::new(tables), Err(ConfigError::InvalidToken(token)));
        }
    }

    #[test]
    fn test_rejects_missing_specific_harbor() {
        let mut tables = BoardSize::Standard.tables();
        let clay = tables
            .harbor_tokens
            .iter()
            .position(|h| *h == Harbor::Specific(Resource::Clay))
            .unwrap();
        tables.harbor_tokens[clay] = Harbor::Generic;
        assert_eq!(
            BoardVariant::new(tables),
            Err(ConfigError::MissingHarbor(Resource::Clay))
        );
    }

    #[test]
    fn test_try_from_validates() {
        let mut tables = BoardSize::ExtraLarge.tables();
        assert!(BoardVariant::try_from(tables.clone()).is_ok());
        tables.harbor_tokens.pop();
        assert!(matches!(
            BoardVariant::try_from(tables),
            Err(ConfigError::TableLength {
                table: "harbor_tokens",
                ..
            })
        ));
    }

    #[test]
    fn test_tables_survive_json() {
        let tables = BoardSize::Standard.tables();
        let json = serde_json::to_string(&tables).unwrap();
        let parsed: VariantTables = serde_json::from_str(&json).unwrap();
        let variant = BoardVariant::new(parsed).unwrap();
        assert_eq!(variant.land_count(), 19);
        assert_eq!(variant.size(), None);
    }
}
