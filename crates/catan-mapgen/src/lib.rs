//! Catan Mapgen - balanced board generation for hex-tile settlement games
//!
//! This crate builds a complete starting board in four stages:
//! - Terrain: resources placed so no two touching tiles match
//! - Partition: number tokens split into fair per-resource groups
//! - Mapping: groups laid onto the terrain so no vertex is overloaded
//! - Harbors: placed around the water ring, alternating with open water
//!
//! # Architecture
//!
//! Every stage is a pure function of a [`BoardVariant`] and a random source,
//! returning a `Result`. [`BoardGenerator`] chains them, retries a token
//! partition that cannot be mapped, and keeps the last published board for
//! reshuffles. The crate can be compiled to:
//! - Native Rust for command-line and server use
//! - WebAssembly for an in-browser renderer
//!
//! # Modules
//!
//! - [`variant`]: Board sizes and topology tables
//! - [`board`]: Output types
//! - [`terrain`], [`probability`], [`numbers`], [`harbor`]: The stages
//! - [`generator`]: The pipeline state machine

pub mod board;
pub mod config;
pub mod error;
pub mod generator;
pub mod harbor;
pub mod numbers;
pub mod probability;
pub mod terrain;
pub mod variant;
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use board::{GeneratedBoard, Harbor, HarborSlot, Resource, TileType};
pub use config::{ConfigLoadError, GeneratorConfig};
pub use error::{ConfigError, GenerationError, Stage};
pub use generator::{BoardGenerator, GenerationPhase};
pub use probability::ProbabilityGroups;
pub use variant::{BoardSize, BoardVariant, VariantTables};
