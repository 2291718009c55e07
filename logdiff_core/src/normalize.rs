use regex::Regex;

use crate::model::ConfigError;

/// Default volatile-field patterns, applied in order. Grounded in
/// `IGNORE_PATTERNS` from the source log comparator's `config.py`: timestamps
/// and device counters that should never register as a drift by themselves.
const DEFAULT_IGNORE_PATTERNS: &[&str] = &[
    r"last login\s*:.*",
    r"# Generated.*UTC",
    r"# Finished.*UTC",
    r"Up Time\s*:.*",
    r"Temperature\s*:.*",
    r"Memory Usage\s*:.*",
];

/// Erases volatile substrings from a line to produce a comparison key (C1).
///
/// Patterns are applied in declaration order, each over the output of the
/// previous; every non-overlapping match is replaced with the literal
/// sentinel `[[IGNORED]]`. The original line is never mutated — normalized
/// text is only ever used for equality tests.
#[derive(Debug, Clone)]
pub struct LineNormalizer {
    patterns: Vec<Regex>,
}

impl LineNormalizer {
    /// Compile a normalizer from explicit ignore patterns.
    ///
    /// Fails fast with [`ConfigError::InvalidPattern`] if any pattern does
    /// not compile; at runtime, normalization cannot fail.
    pub fn new(patterns: &[String]) -> Result<Self, ConfigError> {
        let compiled = patterns
            .iter()
            .map(|pattern| {
                Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern {
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { patterns: compiled })
    }

    /// The default ignore-pattern set described in the engine's contract.
    pub fn default_patterns() -> Vec<String> {
        DEFAULT_IGNORE_PATTERNS
            .iter()
            .map(|p| p.to_string())
            .collect()
    }

    /// Replace every match of every configured pattern with `[[IGNORED]]`.
    pub fn normalize(&self, line: &str) -> String {
        let mut out = std::borrow::Cow::Borrowed(line);
        for pattern in &self.patterns {
            if pattern.is_match(&out) {
                out = std::borrow::Cow::Owned(pattern.replace_all(&out, "[[IGNORED]]").into_owned());
            }
        }
        out.into_owned()
    }
}

impl Default for LineNormalizer {
    fn default() -> Self {
        Self::new(&Self::default_patterns()).expect("default ignore patterns are valid regex")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_default_timestamp_patterns() {
        let normalizer = LineNormalizer::default();
        assert_eq!(
            normalizer.normalize("last login : 2024-01-01 on tty1"),
            "[[IGNORED]]"
        );
        assert_eq!(
            normalizer.normalize("# Generated 2024-01-01 12:00:00 UTC"),
            "[[IGNORED]]"
        );
        assert_eq!(normalizer.normalize("Up Time  : 3 days, 4:21"), "[[IGNORED]]");
    }

    #[test]
    fn leaves_unrelated_text_untouched() {
        let normalizer = LineNormalizer::default();
        assert_eq!(normalizer.normalize("interface GigabitEthernet0/1"), "interface GigabitEthernet0/1");
    }

    #[test]
    fn applies_custom_patterns_in_order() {
        let normalizer =
            LineNormalizer::new(&["foo".to_string(), r"\[\[IGNORED\]\]bar".to_string()])
                .expect("valid patterns");
        assert_eq!(normalizer.normalize("foobar"), "[[IGNORED]]");
    }

    #[test]
    fn rejects_invalid_pattern_at_construction() {
        let err = LineNormalizer::new(&["(unclosed".to_string()]).unwrap_err();
        match err {
            ConfigError::InvalidPattern { pattern, .. } => assert_eq!(pattern, "(unclosed"),
        }
    }
}
