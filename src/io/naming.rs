//! Destination paths for generated images
//!
//! The dated scheme files each image under `root/YYYY-MM-DD/H/` with a random
//! alphanumeric name, so a long-running generator never needs to coordinate
//! names. The sequential scheme writes `prefix_01.jpg`, `prefix_02.jpg`, ...
//! straight into `root` for one-off batches.

use crate::io::configuration::FILENAME_LENGTH;
use crate::io::image::OutputFormat;
use chrono::{NaiveDateTime, Timelike};
use rand::Rng;
use rand::distr::Alphanumeric;
use std::path::{Path, PathBuf};

/// How output files are named
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NamingScheme {
    /// Random names under per-day and per-hour directories
    Dated,
    /// Numbered names directly under the root
    Sequential {
        /// Text placed before the image number
        prefix: String,
    },
}

/// Output directory, encoding and naming scheme for a batch
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputLayout {
    /// Directory all images are written beneath
    pub root: PathBuf,
    /// Encoding, which also fixes the extension
    pub format: OutputFormat,
    /// Naming scheme
    pub scheme: NamingScheme,
}

impl OutputLayout {
    /// Destination for the image at `index` (0-based) of the batch
    pub fn path_for<R: Rng + ?Sized>(
        &self,
        index: usize,
        timestamp: NaiveDateTime,
        rng: &mut R,
    ) -> PathBuf {
        let extension = self.format.extension();
        match &self.scheme {
            NamingScheme::Dated => dated_directory(&self.root, timestamp).join(format!(
                "{}.{extension}",
                random_file_stem(rng, FILENAME_LENGTH)
            )),
            NamingScheme::Sequential { prefix } => self
                .root
                .join(format!("{prefix}_{:02}.{extension}", index + 1)),
        }
    }
}

/// Directory for images generated at `timestamp`: `root/YYYY-MM-DD/H`
pub fn dated_directory(root: &Path, timestamp: NaiveDateTime) -> PathBuf {
    root.join(timestamp.format("%Y-%m-%d").to_string())
        .join(timestamp.hour().to_string())
}

/// Random file stem of `length` ASCII letters and digits
pub fn random_file_stem<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| char::from(rng.sample(Alphanumeric)))
        .collect()
}
