//! JPEG/PNG export of finalized pixel buffers
//!
//! Images are encoded into a hidden sibling file and renamed into place once
//! complete, so a failed export never leaves a partial image at the
//! destination path.

use crate::field::tiling::PixelBuffer;
use crate::io::configuration::JPEG_QUALITY;
use crate::io::error::{Result, SynthesisError};
use clap::ValueEnum;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Encoding used for written images
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Lossy JPEG at a fixed high quality
    #[default]
    Jpeg,
    /// Lossless PNG
    Png,
}

impl OutputFormat {
    /// File extension without the leading dot
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Jpeg => "jpg",
            Self::Png => "png",
        }
    }
}

/// Encode `buffer` and write it to `output_path`
///
/// # Errors
///
/// Returns an error if:
/// - The buffer's channel count cannot be encoded
/// - The parent directory cannot be created
/// - Encoding or writing the temporary file fails
/// - The temporary file cannot be renamed onto `output_path`
pub fn export_pixels(buffer: &PixelBuffer, output_path: &Path, format: OutputFormat) -> Result<()> {
    let image = buffer.to_dynamic_image()?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| SynthesisError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    let partial_path = partial_path_for(output_path);
    let file = File::create(&partial_path).map_err(|e| SynthesisError::FileSystem {
        path: partial_path.clone(),
        operation: "create file",
        source: e,
    })?;
    let mut writer = BufWriter::new(file);

    let encoded = match format {
        OutputFormat::Jpeg => {
            image.write_with_encoder(JpegEncoder::new_with_quality(&mut writer, JPEG_QUALITY))
        }
        OutputFormat::Png => image.write_with_encoder(PngEncoder::new(&mut writer)),
    };

    let finished = encoded
        .map_err(|e| SynthesisError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
        .and_then(|()| {
            writer.flush().map_err(|e| SynthesisError::FileSystem {
                path: partial_path.clone(),
                operation: "flush",
                source: e,
            })
        });

    if let Err(error) = finished {
        drop(writer);
        // Best effort: the encoding error is the one worth reporting
        let _ = std::fs::remove_file(&partial_path);
        return Err(error);
    }
    drop(writer);

    std::fs::rename(&partial_path, output_path).map_err(|e| {
        let _ = std::fs::remove_file(&partial_path);
        SynthesisError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "rename",
            source: e,
        }
    })
}

/// Hidden sibling path an export is written to before being renamed
pub fn partial_path_for(output_path: &Path) -> PathBuf {
    let name = output_path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy();
    output_path.with_file_name(format!(".{name}.part"))
}
