//! Command-line interface for batch image synthesis

use crate::io::configuration::{
    DEFAULT_DEPTH_MAX_RANGE, DEFAULT_DEPTH_MIN_RANGE, DEFAULT_EPSILON, DEFAULT_HEIGHT,
    DEFAULT_IMAGE_COUNT, DEFAULT_NODE_BUDGET, DEFAULT_OUTPUT_DIR, DEFAULT_SEQUENTIAL_PREFIX,
    DEFAULT_WIDTH,
};
use crate::io::error::Result;
use crate::io::image::{OutputFormat, export_pixels};
use crate::io::naming::{NamingScheme, OutputLayout};
use crate::io::progress::ProgressManager;
use crate::math::arithmetic::DivisionGuard;
use crate::synthesis::{SynthesisConfig, Synthesizer};
use chrono::Local;
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "exprsynth")]
#[command(
    author,
    version,
    about = "Synthesize images from random expression trees"
)]
/// Command-line arguments for the synthesis tool
pub struct Cli {
    /// Directory generated images are written beneath
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Number of images to generate
    #[arg(short = 'n', long, default_value_t = DEFAULT_IMAGE_COUNT)]
    pub count: usize,

    /// Canvas width in pixels
    #[arg(short = 'w', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Canvas height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Seed of the first image; image i uses seed + i
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Range the minimum leaf depth is drawn from (LOW..=HIGH or N; built-in range if omitted)
    #[arg(long, value_parser = parse_depth_range)]
    pub depth_min: Option<RangeInclusive<usize>>,

    /// Range the maximum non-leaf depth is drawn from (LOW..=HIGH or N; built-in range if omitted)
    #[arg(long, value_parser = parse_depth_range)]
    pub depth_max: Option<RangeInclusive<usize>>,

    /// Denominator clamp for safe division
    #[arg(long, default_value_t = DEFAULT_EPSILON)]
    pub epsilon: f64,

    /// Maximum number of nodes in one expression tree
    #[arg(long, default_value_t = DEFAULT_NODE_BUDGET)]
    pub node_budget: usize,

    /// Abort an image whose evaluation takes longer than this many milliseconds
    #[arg(long)]
    pub time_budget_ms: Option<u64>,

    /// Clamp denominators from below only, so negative ones become +epsilon
    #[arg(long)]
    pub clamp_below: bool,

    /// Output encoding
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Jpeg)]
    pub format: OutputFormat,

    /// Write numbered files into the output directory instead of dated subdirectories
    #[arg(long)]
    pub sequential: bool,

    /// File name prefix for sequential naming
    #[arg(long, default_value = DEFAULT_SEQUENTIAL_PREFIX)]
    pub prefix: String,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Synthesis parameters selected on the command line
    pub fn synthesis_config(&self) -> SynthesisConfig {
        SynthesisConfig {
            time_budget: self.time_budget_ms.map(Duration::from_millis),
            epsilon: self.epsilon,
            node_budget: self.node_budget,
            division: if self.clamp_below {
                DivisionGuard::ClampBelow
            } else {
                DivisionGuard::Symmetric
            },
            ..SynthesisConfig::new(self.width, self.height)
        }
        .with_depth_ranges(
            self.depth_min.clone().unwrap_or(DEFAULT_DEPTH_MIN_RANGE),
            self.depth_max.clone().unwrap_or(DEFAULT_DEPTH_MAX_RANGE),
        )
    }

    /// Where and how images are written
    pub fn output_layout(&self) -> OutputLayout {
        let scheme = if self.sequential {
            NamingScheme::Sequential {
                prefix: self.prefix.clone(),
            }
        } else {
            NamingScheme::Dated
        };

        OutputLayout {
            root: self.output.clone(),
            format: self.format,
            scheme,
        }
    }

    /// Seed for the image at `index`, if a base seed was given
    pub fn seed_for(&self, index: usize) -> Option<u64> {
        self.seed.map(|seed| seed.wrapping_add(index as u64))
    }
}

/// Parse `LOW..=HIGH`, `LOW-HIGH` or a single depth `N`
///
/// # Errors
///
/// Returns a message if the text is not a well-formed non-empty range
pub fn parse_depth_range(text: &str) -> std::result::Result<RangeInclusive<usize>, String> {
    let parse = |part: &str| {
        part.trim()
            .parse::<usize>()
            .map_err(|e| format!("invalid depth '{}': {e}", part.trim()))
    };

    let (low, high) = match text.split_once("..=").or_else(|| text.split_once('-')) {
        Some((low, high)) => (parse(low)?, parse(high)?),
        None => {
            let depth = parse(text)?;
            (depth, depth)
        }
    };

    if low > high {
        return Err(format!("range {low}..={high} is empty"));
    }
    Ok(low..=high)
}

/// Orchestrates synthesis and export of a batch of images
pub struct BatchProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl BatchProcessor {
    /// Create a new batch processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Progress display, absent when running quietly
    pub const fn progress(&self) -> Option<&ProgressManager> {
        self.progress_manager.as_ref()
    }

    /// Generate every requested image and return the written paths
    ///
    /// # Errors
    ///
    /// Returns an error if configuration validation, synthesis or export of
    /// any image fails; images written before the failure are kept
    pub fn process(&mut self) -> Result<Vec<PathBuf>> {
        let synthesizer = Synthesizer::new(self.cli.synthesis_config()).inspect_err(|e| {
            warn!(error = %e, "rejected configuration");
        })?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(self.cli.count);
        }

        let mut written = Vec::with_capacity(self.cli.count);
        let outcome = self.write_images(&synthesizer, &mut written);

        // The bar is cleared on failure too
        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        outcome.map(|()| written)
    }

    fn write_images(&self, synthesizer: &Synthesizer, written: &mut Vec<PathBuf>) -> Result<()> {
        let layout = self.cli.output_layout();
        // OS-seeded, independent of --seed
        let mut naming_rng = StdRng::from_os_rng();

        for index in 0..self.cli.count {
            let start_time = Instant::now();
            let seed = self.cli.seed_for(index);

            if let Some(ref pm) = self.progress_manager {
                pm.start_image(index, seed);
            }

            let synthesis = synthesizer.synthesize(seed)?;
            let path = layout.path_for(index, Local::now().naive_local(), &mut naming_rng);
            export_pixels(&synthesis.pixels, &path, layout.format)?;

            info!(
                path = %path.display(),
                seed = synthesis.seed,
                nodes = synthesis.node_count,
                elapsed_ms = start_time.elapsed().as_millis() as u64,
                "wrote image"
            );

            if let Some(ref pm) = self.progress_manager {
                pm.complete_image(index, synthesis.node_count);
            }
            written.push(path);
        }

        Ok(())
    }
}
