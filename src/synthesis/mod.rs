//! Configured synthesis of complete pixel buffers

/// Synthesis parameters and validation
pub mod config;
/// Seeded end-to-end synthesis
pub mod synthesizer;

pub use config::SynthesisConfig;
pub use synthesizer::{Synthesis, Synthesizer, synthesize};
