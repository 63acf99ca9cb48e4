//! The board generation pipeline.
//!
//! `BoardGenerator` runs the stages in order and owns everything they share:
//! the active variant, the random source and the last published board.
//!
//! ```text
//! Idle -> PlacingTerrain -> PartitioningProbabilities -> MappingProbabilities
//!                                 ^                             |
//!                                 +---- unsolvable partition ---+
//!                                                               v
//!                                         Ready <- PlacingHarbors
//! ```
//!
//! Candidates are built in locals and only replace the published board once
//! every stage has accepted them.

use crate::board::{GeneratedBoard, HarborSlot, TileType};
use crate::config::GeneratorConfig;
use crate::error::{GenerationError, Stage};
use crate::harbor::place_harbors;
use crate::numbers::map_numbers;
use crate::probability::{partition_tokens, ProbabilityGroups};
use crate::terrain::assign_terrain;
use crate::variant::{BoardSize, BoardVariant};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Where the pipeline currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenerationPhase {
    /// No board for the selected variant
    Idle,
    PlacingTerrain,
    PartitioningProbabilities,
    MappingProbabilities,
    PlacingHarbors,
    /// A board is published
    Ready,
}

/// Generates and reshuffles boards for one variant at a time
#[derive(Debug)]
pub struct BoardGenerator {
    variant: Arc<BoardVariant>,
    config: GeneratorConfig,
    rng: StdRng,
    phase: GenerationPhase,
    board: Option<GeneratedBoard>,
}

impl BoardGenerator {
    /// Create a generator with default limits, seeded from entropy
    pub fn new(variant: Arc<BoardVariant>) -> Self {
        Self::with_config(variant, GeneratorConfig::default())
    }

    /// Create a generator for a built-in size with a fixed seed
    pub fn seeded(size: BoardSize, seed: u64) -> Self {
        Self::with_config(size.variant(), GeneratorConfig::seeded(seed))
    }

    pub fn with_config(variant: Arc<BoardVariant>, config: GeneratorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            variant,
            config,
            rng,
            phase: GenerationPhase::Idle,
            board: None,
        }
    }

    pub fn variant(&self) -> &Arc<BoardVariant> {
        &self.variant
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn phase(&self) -> GenerationPhase {
        self.phase
    }

    /// The last published board, if any
    pub fn board(&self) -> Option<&GeneratedBoard> {
        self.board.as_ref()
    }

    /// Switch variants. The published board is dropped.
    pub fn select_variant(&mut self, variant: Arc<BoardVariant>) {
        debug!(from = self.variant.name(), to = variant.name(), "variant selected");
        self.variant = variant;
        self.board = None;
        self.set_phase(GenerationPhase::Idle);
    }

    /// Run every stage and publish a fresh board
    pub fn generate_board(&mut self) -> Result<GeneratedBoard, GenerationError> {
        let result = self.build_all();
        self.publish(result)
    }

    /// Draw new numbers (and harbors, which depend on them) for the current
    /// terrain
    pub fn reshuffle_numbers(&mut self) -> Result<GeneratedBoard, GenerationError> {
        let terrain = self
            .board
            .as_ref()
            .ok_or(GenerationError::NoBoard)?
            .terrain
            .clone();
        let result = self.build_from_numbers(terrain);
        self.publish(result)
    }

    /// Draw new harbors for the current terrain and numbers
    pub fn reshuffle_harbors(&mut self) -> Result<GeneratedBoard, GenerationError> {
        let current = self.board.as_ref().ok_or(GenerationError::NoBoard)?;
        let terrain = current.terrain.clone();
        let numbers = current.numbers.clone();
        let groups = current.groups.clone();
        let result = self
            .harbor_stage(&terrain, &numbers)
            .map(|harbors| self.assemble(terrain, numbers, groups, harbors));
        self.publish(result)
    }

    fn build_all(&mut self) -> Result<GeneratedBoard, GenerationError> {
        self.set_phase(GenerationPhase::PlacingTerrain);
        let terrain = assign_terrain(&self.variant, &mut self.rng, self.config.terrain_restart_limit)?;
        self.build_from_numbers(terrain)
    }

    fn build_from_numbers(&mut self, terrain: Vec<TileType>) -> Result<GeneratedBoard, GenerationError> {
        let (groups, numbers) = self.number_stage(&terrain)?;
        let harbors = self.harbor_stage(&terrain, &numbers)?;
        Ok(self.assemble(terrain, numbers, groups, harbors))
    }

    /// Partition then map, drawing a new partition whenever mapping gives up
    fn number_stage(
        &mut self,
        terrain: &[TileType],
    ) -> Result<(ProbabilityGroups, Vec<Option<u8>>), GenerationError> {
        let rounds = self.config.partition_round_limit;

        for round in 1..=rounds {
            self.set_phase(GenerationPhase::PartitioningProbabilities);
            let groups = partition_tokens(&self.variant, &mut self.rng, self.config.partition_attempt_limit)?;

            self.set_phase(GenerationPhase::MappingProbabilities);
            match map_numbers(
                &self.variant,
                terrain,
                &groups,
                &mut self.rng,
                self.config.mapping_attempt_limit,
            ) {
                Ok(numbers) => return Ok((groups, numbers)),
                Err(e) if e.is_retryable() => {
                    warn!(round, error = %e, "discarding token partition");
                }
                Err(e) => return Err(e),
            }
        }

        Err(GenerationError::Exhausted {
            stage: Stage::Mapping,
            attempts: rounds,
        })
    }

    fn harbor_stage(
        &mut self,
        terrain: &[TileType],
        numbers: &[Option<u8>],
    ) -> Result<Vec<HarborSlot>, GenerationError> {
        self.set_phase(GenerationPhase::PlacingHarbors);
        place_harbors(
            &self.variant,
            terrain,
            numbers,
            &mut self.rng,
            self.config.harbor_attempt_limit,
        )
    }

    fn assemble(
        &self,
        terrain: Vec<TileType>,
        numbers: Vec<Option<u8>>,
        groups: ProbabilityGroups,
        harbors: Vec<HarborSlot>,
    ) -> GeneratedBoard {
        GeneratedBoard {
            size: self.variant.size(),
            terrain,
            numbers,
            groups,
            harbors,
        }
    }

    /// Replace the published board on success; keep the old one on failure
    fn publish(
        &mut self,
        result: Result<GeneratedBoard, GenerationError>,
    ) -> Result<GeneratedBoard, GenerationError> {
        match result {
            Ok(board) => {
                self.board = Some(board.clone());
                self.set_phase(GenerationPhase::Ready);
                Ok(board)
            }
            Err(e) => {
                warn!(error = %e, variant = self.variant.name(), "board generation failed");
                let phase = if self.board.is_some() {
                    GenerationPhase::Ready
                } else {
                    GenerationPhase::Idle
                };
                self.set_phase(phase);
                Err(e)
            }
        }
    }

    fn set_phase(&mut self, phase: GenerationPhase) {
        trace!(from = ?self.phase, to = ?phase, "phase change");
        self.phase = phase;
    }
}
