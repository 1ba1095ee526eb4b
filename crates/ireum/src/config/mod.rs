pub use error::ConfigError;
use error::Result;

use crate::search::{PhoneticHitPolicy, SearchConfig};

/// Builder for creating search configurations with ergonomic defaults.
///
/// Thresholds are validated by [`build`](Self::build) and never clamped: a
/// configuration whose ranking rationale differs from what the caller asked for
/// is worse than an error.
#[derive(Debug, Clone, Default)]
pub struct SearchConfigBuilder {
    config: SearchConfig,
}

impl SearchConfigBuilder {
    /// Create a new builder with the recommended defaults
    /// (`top_k = 5`, `phonetic_threshold = 0.9`, `phonetic_candidate_threshold = 0.7`).
    pub fn new() -> Self {
        Self {
            config: SearchConfig::default(),
        }
    }

    /// Create a builder that only accepts close phonetic matches and returns few candidates
    pub fn strict() -> Self {
        let mut builder = Self::new();
        builder.config.top_k = 3;
        builder.config.phonetic_threshold = 0.95;
        builder.config.phonetic_candidate_threshold = 0.8;
        builder
    }

    /// Create a builder that tolerates heavier misspellings and returns more candidates
    pub fn lenient() -> Self {
        let mut builder = Self::new();
        builder.config.top_k = 10;
        builder.config.phonetic_threshold = 0.85;
        builder.config.phonetic_candidate_threshold = 0.6;
        builder
    }

    /// Set the maximum number of phonetic candidates to return
    pub fn top_k(mut self, top_k: usize) -> Self {
        self.config.top_k = top_k;
        self
    }

    /// Set the score a single phonetic hit must strictly exceed
    pub fn phonetic_threshold(mut self, threshold: f64) -> Self {
        self.config.phonetic_threshold = threshold;
        self
    }

    /// Set the score a phonetic candidate must strictly exceed to be returned
    pub fn phonetic_candidate_threshold(mut self, threshold: f64) -> Self {
        self.config.phonetic_candidate_threshold = threshold;
        self
    }

    /// Choose between the first and the best entry above `phonetic_threshold`
    pub fn hit_policy(mut self, policy: PhoneticHitPolicy) -> Self {
        self.config.hit_policy = policy;
        self
    }

    /// Build the final configuration
    pub fn build(self) -> Result<SearchConfig> {
        validate(
            self.config.top_k,
            self.config.phonetic_threshold,
            self.config.phonetic_candidate_threshold,
        )?;
        Ok(self.config)
    }
}

fn check_unit_interval(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ThresholdOutOfRange { name, value })
    }
}

/// Check the caller contract `top_k >= 1` and `0 <= candidate < hit <= 1`.
pub(crate) fn validate(top_k: usize, hit: f64, candidate: f64) -> Result<()> {
    if top_k == 0 {
        return Err(ConfigError::ZeroTopK);
    }
    check_unit_interval("phonetic_threshold", hit)?;
    check_unit_interval("phonetic_candidate_threshold", candidate)?;
    if candidate >= hit {
        return Err(ConfigError::ThresholdOrder { candidate, hit });
    }
    Ok(())
}

mod error {
    use thiserror::Error;

    #[derive(Error, Debug, Clone, PartialEq)]
    pub enum ConfigError {
        #[error("top_k must be at least 1")]
        ZeroTopK,
        #[error("{name} must be within [0, 1], got {value}")]
        ThresholdOutOfRange { name: &'static str, value: f64 },
        #[error(
            "phonetic_candidate_threshold ({candidate}) must be strictly less than phonetic_threshold ({hit})"
        )]
        ThresholdOrder { candidate: f64, hit: f64 },
    }
    pub type Result<T> = std::result::Result<T, ConfigError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_builder() {
        let config = SearchConfigBuilder::new().build().unwrap();
        assert_eq!(config.top_k(), 5);
        assert_eq!(config.phonetic_threshold(), 0.9);
        assert_eq!(config.phonetic_candidate_threshold(), 0.7);
        assert_eq!(config.hit_policy(), PhoneticHitPolicy::FirstHit);
        assert_eq!(config, SearchConfig::default());
    }

    #[test]
    fn test_presets() {
        let strict = SearchConfigBuilder::strict().build().unwrap();
        assert_eq!(strict.top_k(), 3);
        assert_eq!(strict.phonetic_threshold(), 0.95);
        assert_eq!(strict.phonetic_candidate_threshold(), 0.8);

        let lenient = SearchConfigBuilder::lenient().build().unwrap();
        assert_eq!(lenient.top_k(), 10);
        assert_eq!(lenient.phonetic_threshold(), 0.85);
        assert_eq!(lenient.phonetic_candidate_threshold(), 0.6);
    }

    #[test]
    fn test_method_chaining() {
        let config = SearchConfig::builder()
            .top_k(8)
            .phonetic_threshold(0.93)
            .phonetic_candidate_threshold(0.65)
            .hit_policy(PhoneticHitPolicy::BestHit)
            .build()
            .unwrap();

        assert_eq!(config.top_k(), 8);
        assert_eq!(config.phonetic_threshold(), 0.93);
        assert_eq!(config.phonetic_candidate_threshold(), 0.65);
        assert_eq!(config.hit_policy(), PhoneticHitPolicy::BestHit);
    }

    #[test]
    fn test_override_presets() {
        let config = SearchConfigBuilder::strict().top_k(1).build().unwrap();
        assert_eq!(config.top_k(), 1);
        // Keeps the strict thresholds
        assert_eq!(config.phonetic_threshold(), 0.95);
    }

    #[test]
    fn test_rejects_zero_top_k() {
        let result = SearchConfigBuilder::new().top_k(0).build();
        assert_eq!(result, Err(ConfigError::ZeroTopK));
    }

    #[test]
    fn test_rejects_out_of_range_thresholds() {
        let result = SearchConfigBuilder::new().phonetic_threshold(1.2).build();
        assert!(matches!(
            result,
            Err(ConfigError::ThresholdOutOfRange {
                name: "phonetic_threshold",
                ..
            })
        ));

        let result = SearchConfigBuilder::new()
            .phonetic_candidate_threshold(-0.1)
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::ThresholdOutOfRange {
                name: "phonetic_candidate_threshold",
                ..
            })
        ));

        let result = SearchConfigBuilder::new()
            .phonetic_threshold(f64::NAN)
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_inverted_or_equal_thresholds() {
        let result = SearchConfigBuilder::new()
            .phonetic_threshold(0.7)
            .phonetic_candidate_threshold(0.7)
            .build();
        assert_eq!(
            result,
            Err(ConfigError::ThresholdOrder {
                candidate: 0.7,
                hit: 0.7
            })
        );

        let result = SearchConfigBuilder::new()
            .phonetic_threshold(0.6)
            .phonetic_candidate_threshold(0.8)
            .build();
        assert!(matches!(result, Err(ConfigError::ThresholdOrder { .. })));
    }

    #[test]
    fn test_edge_case_values() {
        // Full range is allowed as long as the order holds
        let config = SearchConfigBuilder::new()
            .top_k(1)
            .phonetic_threshold(1.0)
            .phonetic_candidate_threshold(0.0)
            .build()
            .unwrap();
        assert_eq!(config.top_k(), 1);
        assert_eq!(config.phonetic_threshold(), 1.0);
        assert_eq!(config.phonetic_candidate_threshold(), 0.0);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ConfigError::ZeroTopK.to_string(), "top_k must be at least 1");
        let message = ConfigError::ThresholdOrder {
            candidate: 0.9,
            hit: 0.8,
        }
        .to_string();
        assert!(message.contains("strictly less"));
    }
}
