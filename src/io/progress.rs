//! Batch progress display for image generation

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Images: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many images of a batch have been written
pub struct ProgressManager {
    bar: ProgressBar,
    image_count: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no bar drawn yet
    pub fn new() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            image_count: 0,
        }
    }

    /// Number of images the batch was initialized with
    pub const fn image_count(&self) -> usize {
        self.image_count
    }

    /// Current position of the bar
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Draw a bar for a batch of `image_count` images
    pub fn initialize(&mut self, image_count: usize) {
        self.image_count = image_count;
        let bar = ProgressBar::new(image_count as u64);
        bar.set_style(BATCH_STYLE.clone());
        self.bar = bar;
    }

    /// Show which image is being synthesized
    pub fn start_image(&self, index: usize, seed: Option<u64>) {
        let message = seed.map_or_else(
            || format!("image {}", index + 1),
            |seed| format!("image {} (seed {seed})", index + 1),
        );
        self.bar.set_message(message);
    }

    /// Advance past a written image
    pub fn complete_image(&self, index: usize, node_count: usize) {
        self.bar.inc(1);
        self.bar
            .set_message(format!("image {} done, {node_count} nodes", index + 1));
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    /// Whether the display has been cleaned up
    pub fn is_finished(&self) -> bool {
        self.bar.is_finished()
    }
}
