//! Tests for argument parsing and batch processing

#[cfg(test)]
mod tests {
    use clap::Parser;
    use exprsynth::io::cli::{BatchProcessor, Cli, parse_depth_range};
    use exprsynth::io::configuration::{DEFAULT_DEPTH_MAX_RANGE, DEFAULT_DEPTH_MIN_RANGE};
    use exprsynth::io::image::OutputFormat;
    use exprsynth::io::naming::NamingScheme;
    use exprsynth::io::progress::ProgressManager;
    use exprsynth::math::arithmetic::DivisionGuard;
    use std::time::Duration;
    use tempfile::TempDir;

    // Tests the three accepted range spellings
    #[test]
    fn test_parse_depth_range_forms() {
        assert_eq!(parse_depth_range("2..=10"), Ok(2..=10));
        assert_eq!(parse_depth_range("3-7"), Ok(3..=7));
        assert_eq!(parse_depth_range("4"), Ok(4..=4));
        assert_eq!(parse_depth_range(" 5 ..= 6 "), Ok(5..=6));
    }

    // Tests malformed and empty ranges are rejected
    #[test]
    fn test_parse_depth_range_errors() {
        assert!(parse_depth_range("abc").is_err());
        assert!(parse_depth_range("2..=").is_err());
        assert_eq!(
            parse_depth_range("9..=3"),
            Err("range 9..=3 is empty".to_string())
        );
    }

    // Tests defaults match the built-in configuration
    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["exprsynth"]);

        assert_eq!(cli.count, 1);
        assert_eq!(cli.width, 1080);
        assert_eq!(cli.height, 1080);
        assert_eq!(cli.format, OutputFormat::Jpeg);
        assert!(cli.should_show_progress());
        assert_eq!(cli.seed_for(0), None);

        let config = cli.synthesis_config();
        assert_eq!(config.depth_min_range, DEFAULT_DEPTH_MIN_RANGE);
        assert_eq!(config.depth_max_range, DEFAULT_DEPTH_MAX_RANGE);
        assert_eq!(config.division, DivisionGuard::Symmetric);
        assert!(config.validate().is_ok());
    }

    // Tests flags flow into the synthesis configuration
    #[test]
    fn test_synthesis_config_from_flags() {
        let cli = Cli::parse_from([
            "exprsynth",
            "-w",
            "64",
            "-H",
            "48",
            "--depth-min",
            "2-3",
            "--depth-max",
            "3..=6",
            "--epsilon",
            "0.01",
            "--node-budget",
            "500",
            "--time-budget-ms",
            "250",
            "--clamp-below",
        ]);

        let config = cli.synthesis_config();

        assert_eq!((config.width, config.height), (64, 48));
        assert_eq!(config.depth_min_range, 2..=3);
        assert_eq!(config.depth_max_range, 3..=6);
        assert!((config.epsilon - 0.01).abs() < f64::EPSILON);
        assert_eq!(config.node_budget, 500);
        assert_eq!(config.time_budget, Some(Duration::from_millis(250)));
        assert_eq!(config.division, DivisionGuard::ClampBelow);
    }

    // Tests per-image seeds count up from the base seed
    #[test]
    fn test_seed_for() {
        let cli = Cli::parse_from(["exprsynth", "--seed", "10"]);
        assert_eq!(cli.seed_for(0), Some(10));
        assert_eq!(cli.seed_for(3), Some(13));

        let max_seed = u64::MAX.to_string();
        let wrapping = Cli::parse_from(["exprsynth", "--seed", max_seed.as_str()]);
        assert_eq!(wrapping.seed_for(1), Some(0));
    }

    // Tests layout selection from naming flags
    #[test]
    fn test_output_layout() {
        let dated = Cli::parse_from(["exprsynth", "-o", "out", "-f", "png"]).output_layout();
        assert_eq!(dated.scheme, NamingScheme::Dated);
        assert_eq!(dated.format, OutputFormat::Png);
        assert_eq!(dated.root.to_str(), Some("out"));

        let sequential =
            Cli::parse_from(["exprsynth", "--sequential", "--prefix", "frame"]).output_layout();
        assert_eq!(
            sequential.scheme,
            NamingScheme::Sequential {
                prefix: "frame".to_string()
            }
        );
    }

    // Tests a sequential batch writes every image under the output directory
    #[test]
    fn test_batch_sequential() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().to_string_lossy().to_string();
        let cli = Cli::parse_from([
            "exprsynth",
            "-o",
            output.as_str(),
            "-n",
            "3",
            "-w",
            "24",
            "-H",
            "16",
            "--seed",
            "7",
            "--depth-min",
            "2",
            "--depth-max",
            "3..=4",
            "--sequential",
            "-f",
            "png",
            "--quiet",
        ]);

        let written = BatchProcessor::new(cli).process().unwrap();

        assert_eq!(written.len(), 3);
        assert_eq!(written.first(), Some(&dir.path().join("magnet_01.png")));
        assert_eq!(written.last(), Some(&dir.path().join("magnet_03.png")));
        for path in &written {
            let image = image::open(path).unwrap();
            assert_eq!((image.width(), image.height()), (24, 16));
        }
    }

    // Tests a dated batch nests images under date and hour directories
    #[test]
    fn test_batch_dated() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().to_string_lossy().to_string();
        let cli = Cli::parse_from([
            "exprsynth",
            "-o",
            output.as_str(),
            "-w",
            "8",
            "-H",
            "8",
            "--depth-min",
            "2",
            "--depth-max",
            "2..=3",
            "-q",
        ]);

        let written = BatchProcessor::new(cli).process().unwrap();

        assert_eq!(written.len(), 1);
        let path = written.first().unwrap();
        assert!(path.exists());
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("jpg"));
        let relative = path.strip_prefix(dir.path()).unwrap();
        assert_eq!(relative.components().count(), 3);
    }

    // Tests an invalid configuration fails before anything is written
    #[test]
    fn test_batch_rejects_invalid_config() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("never").to_string_lossy().to_string();
        let cli = Cli::parse_from(["exprsynth", "-o", output.as_str(), "-w", "0", "-q"]);

        assert!(BatchProcessor::new(cli).process().is_err());
        assert!(!dir.path().join("never").exists());
    }

    // Tests omitted depth flags fall back to the configured ranges
    #[test]
    fn test_depth_ranges_default_to_constants() {
        let cli = Cli::parse_from(["exprsynth"]);
        assert_eq!(cli.depth_min, None);
        assert_eq!(cli.depth_max, None);

        let only_min = Cli::parse_from(["exprsynth", "--depth-min", "3"]).synthesis_config();
        assert_eq!(only_min.depth_min_range, 3..=3);
        assert_eq!(only_min.depth_max_range, DEFAULT_DEPTH_MAX_RANGE);
    }

    // Tests reusing a seed in the same directory never replaces an earlier image
    #[test]
    fn test_batch_dated_same_seed_distinct_names() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().to_string_lossy().to_string();
        let run = |size: &str| {
            let cli = Cli::parse_from([
                "exprsynth",
                "-o",
                output.as_str(),
                "-w",
                size,
                "-H",
                size,
                "--seed",
                "7",
                "--depth-min",
                "2",
                "--depth-max",
                "2..=3",
                "-q",
            ]);
            BatchProcessor::new(cli).process().unwrap()
        };

        let first = run("8");
        let second = run("16");

        assert_eq!((first.len(), second.len()), (1, 1));
        assert_ne!(first.first(), second.first());
        let first_image = image::open(first.first().unwrap()).unwrap();
        let second_image = image::open(second.first().unwrap()).unwrap();
        assert_eq!(first_image.width(), 8);
        assert_eq!(second_image.width(), 16);
    }

    // Tests the progress display is cleared when a write fails
    #[test]
    fn test_batch_failure_finishes_progress() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"not a directory").unwrap();
        let output = blocker.to_string_lossy().to_string();
        let cli = Cli::parse_from([
            "exprsynth",
            "-o",
            output.as_str(),
            "-w",
            "8",
            "-H",
            "8",
            "--depth-min",
            "2",
            "--depth-max",
            "2..=3",
            "--sequential",
        ]);

        let mut processor = BatchProcessor::new(cli);

        assert!(processor.process().is_err());
        assert!(processor.progress().is_some_and(ProgressManager::is_finished));
    }
}
