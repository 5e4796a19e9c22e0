//! Extraction of zypper's "N patches needed" summary line

use autopatch_errors::Error;
use regex::Regex;

const SUMMARY_PATTERN: &str = r"(?m)^\d+ patch(es)? needed \(\d+ security patch(es)?\)$";

/// Finds the patch-check summary line in captured output
#[derive(Debug, Clone)]
pub struct SummaryMatcher {
    pattern: Regex,
}

impl SummaryMatcher {
    /// # Errors
    ///
    /// Returns an error if the summary pattern fails to compile.
    pub fn new() -> Result<Self, Error> {
        Ok(Self {
            pattern: Regex::new(SUMMARY_PATTERN)?,
        })
    }

    /// First summary line in `output`, if any
    #[must_use]
    pub fn find(&self, output: &str) -> Option<String> {
        self.pattern
            .find(output)
            .map(|found| found.as_str().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_variants() {
        let matcher = SummaryMatcher::new().unwrap();
        let output = "Loading repository data...\n3 patches needed (1 security patch)\n";
        assert_eq!(
            matcher.find(output).as_deref(),
            Some("3 patches needed (1 security patch)")
        );
        assert_eq!(
            matcher.find("1 patch needed (0 security patches)").as_deref(),
            Some("1 patch needed (0 security patches)")
        );
    }

    #[test]
    fn test_summary_is_anchored() {
        let matcher = SummaryMatcher::new().unwrap();
        assert!(matcher.find("note: 3 patches needed (1 security patch)\n").is_none());
        assert!(matcher.find("3 Patches needed (1 security patch)\n").is_none());
        assert!(matcher.find("").is_none());
    }
}
