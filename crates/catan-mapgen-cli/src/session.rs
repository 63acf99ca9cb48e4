//! A generator session: one variant, one generator, a sequence of steps.

use catan_mapgen::{BoardGenerator, BoardVariant, ConfigError, GeneratorConfig, VariantTables};
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

use crate::protocol::{ShellMessage, Step};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to read variant tables: {0}")]
    ReadTables(#[from] io::Error),

    #[error("failed to parse variant tables: {0}")]
    ParseTables(#[from] serde_json::Error),

    #[error("invalid variant tables: {0}")]
    InvalidTables(#[from] ConfigError),
}

/// Load and validate custom variant tables from a JSON file
pub fn load_tables(path: &Path) -> Result<Arc<BoardVariant>, SessionError> {
    let content = fs::read_to_string(path)?;
    let tables: VariantTables = serde_json::from_str(&content)?;
    let variant = BoardVariant::try_from(tables)?;
    info!(variant = variant.name(), land = variant.land_count(), "custom tables loaded");
    Ok(Arc::new(variant))
}

/// Drives a [`BoardGenerator`] and turns every step into a [`ShellMessage`].
pub struct Session {
    generator: BoardGenerator,
    failures: usize,
}

impl Session {
    pub fn new(variant: Arc<BoardVariant>, config: GeneratorConfig) -> Self {
        Self {
            generator: BoardGenerator::with_config(variant, config),
            failures: 0,
        }
    }

    /// Steps that have failed so far
    pub fn failures(&self) -> usize {
        self.failures
    }

    pub fn run(&mut self, step: Step) -> ShellMessage {
        let result = match step {
            Step::Generate => self.generator.generate_board(),
            Step::ReshuffleNumbers => self.generator.reshuffle_numbers(),
            Step::ReshuffleHarbors => self.generator.reshuffle_harbors(),
        };

        match result {
            Ok(board) => {
                info!(?step, terrain = %board.terrain_symbols(), "board published");
                ShellMessage::Board {
                    step,
                    variant: self.generator.variant().name().to_string(),
                    board,
                }
            }
            Err(e) => {
                warn!(?step, error = %e, "step failed");
                self.failures += 1;
                ShellMessage::Error {
                    step,
                    message: e.to_string(),
                    phase: self.generator.phase(),
                }
            }
        }
    }
}
