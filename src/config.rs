//! Search configuration: similarity threshold, term length floor and the
//! field weight table.
//!
//! Every key is optional. Missing keys fall back to the defaults used by the
//! player archive:
//!
//! ```yaml
//! threshold: 0.7
//! min_term_chars: 2
//! max_results: 20
//! weights:
//!   name_arabic: 10
//!   name_english: 10
//!   alternative_names: 8
//!   team_name: 5
//!   keyword: 7
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::core::SearchField;
use crate::error::{Result, SearchEngineError};
use crate::ranking::DEFAULT_THRESHOLD;
use crate::text::MIN_TERM_CHARS;

/// Weight contributed by each searchable field when a term matches it.
///
/// Keywords share one tier: every matching keyword adds `keyword` again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldWeights {
    pub name_arabic: u32,
    pub name_english: u32,
    pub alternative_names: u32,
    pub team_name: u32,
    pub keyword: u32,
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            name_arabic: 10,
            name_english: 10,
            alternative_names: 8,
            team_name: 5,
            keyword: 7,
        }
    }
}

impl FieldWeights {
    /// Weight of a single field
    pub fn weight(&self, field: SearchField) -> u32 {
        match field {
            SearchField::NameArabic => self.name_arabic,
            SearchField::NameEnglish => self.name_english,
            SearchField::AlternativeNames => self.alternative_names,
            SearchField::TeamName => self.team_name,
            SearchField::Keyword => self.keyword,
        }
    }

    /// Rejects zero weights: a field that can never score should be removed, not zeroed.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            SearchField::NameArabic,
            SearchField::NameEnglish,
            SearchField::AlternativeNames,
            SearchField::TeamName,
            SearchField::Keyword,
        ];

        for field in fields {
            if self.weight(field) == 0 {
                return Err(SearchEngineError::InvalidConfig(format!(
                    "weight for '{}' must be positive",
                    field.as_str()
                )));
            }
        }

        Ok(())
    }
}

/// Search configuration with defaults tuned for player names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Minimum edit-distance similarity for a fuzzy word match (0.0 - 1.0)
    pub threshold: f64,

    /// Query tokens shorter than this (in characters) are dropped as noise
    pub min_term_chars: usize,

    /// Field weight table
    pub weights: FieldWeights,

    /// Truncate ranked results (None = return every match). A blank query
    /// always returns the whole roster.
    pub max_results: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            min_term_chars: MIN_TERM_CHARS,
            weights: FieldWeights::default(),
            max_results: None,
        }
    }
}

impl SearchConfig {
    /// Builds a config from a flat key/value map, falling back to defaults.
    ///
    /// Recognized keys: `threshold`, `min_term_chars`, `max_results`,
    /// `weight_name_arabic`, `weight_name_english`, `weight_alternative_names`,
    /// `weight_team_name`, `weight_keyword`.
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use player_search_engine::SearchConfig;
    ///
    /// let mut values = HashMap::new();
    /// values.insert("threshold".to_string(), 0.8);
    /// values.insert("weight_keyword".to_string(), 3.0);
    ///
    /// let config = SearchConfig::from_config(&values);
    /// assert_eq!(config.threshold, 0.8);
    /// assert_eq!(config.weights.keyword, 3);
    /// assert_eq!(config.weights.name_arabic, 10); // default
    /// ```
    pub fn from_config(config: &HashMap<String, f64>) -> Self {
        let defaults = Self::default();
        let weight = |key: &str, fallback: u32| {
            config
                .get(key)
                .map(|v| v.max(0.0).round() as u32)
                .unwrap_or(fallback)
        };

        Self {
            threshold: config.get("threshold").copied().unwrap_or(defaults.threshold),
            min_term_chars: config
                .get("min_term_chars")
                .map(|v| v.max(0.0).round() as usize)
                .unwrap_or(defaults.min_term_chars),
            weights: FieldWeights {
                name_arabic: weight("weight_name_arabic", defaults.weights.name_arabic),
                name_english: weight("weight_name_english", defaults.weights.name_english),
                alternative_names: weight(
                    "weight_alternative_names",
                    defaults.weights.alternative_names,
                ),
                team_name: weight("weight_team_name", defaults.weights.team_name),
                keyword: weight("weight_keyword", defaults.weights.keyword),
            },
            max_results: config
                .get("max_results")
                .map(|v| v.max(0.0).round() as usize),
        }
    }

    /// Parses and validates a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!("Loaded search config from {}", path.as_ref().display());
        Self::from_yaml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(SearchEngineError::InvalidConfig(format!(
                "threshold must be within [0, 1], got {}",
                self.threshold
            )));
        }
        if self.min_term_chars == 0 {
            return Err(SearchEngineError::InvalidConfig(
                "min_term_chars must be at least 1".to_string(),
            ));
        }
        self.weights.validate()
    }
}

impl std::fmt::Display for SearchConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let w = &self.weights;
        write!(
            f,
            "threshold={}, min_term_chars={}, weights=[ar={}, en={}, alt={}, team={}, kw={}]",
            self.threshold,
            self.min_term_chars,
            w.name_arabic,
            w.name_english,
            w.alternative_names,
            w.team_name,
            w.keyword
        )?;
        if let Some(max) = self.max_results {
            write!(f, ", max_results={}", max)?;
        }
        Ok(())
    }
}
