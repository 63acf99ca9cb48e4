//! Messages the shell prints, one JSON document per step.

use catan_mapgen::{GeneratedBoard, GenerationPhase};
use serde::{Deserialize, Serialize};

/// A step the shell asks the generator to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    Generate,
    ReshuffleNumbers,
    ReshuffleHarbors,
}

/// Messages written to stdout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum ShellMessage {
    /// A board was published
    Board {
        step: Step,
        variant: String,
        board: GeneratedBoard,
    },

    /// A step failed; the previous board (if any) is still current
    Error {
        step: Step,
        message: String,
        phase: GenerationPhase,
    },
}
