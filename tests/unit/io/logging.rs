//! Tests for logging setup

#[cfg(test)]
mod tests {
    use exprsynth::io::logging::{default_directive, init_logging};

    // Tests quiet mode only lets warnings through
    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "exprsynth=info");
        assert_eq!(default_directive(true), "exprsynth=warn");
    }

    // Tests a second install leaves the first subscriber in place
    #[test]
    fn test_init_logging_once() {
        let _ = init_logging(true);
        assert!(!init_logging(true));
    }
}
