//! Regular-expression layer
//!
//! Expected string leaves are compiled as patterns by the pattern comparators
//! and by the ranker's string rule. A pattern that fails to compile never
//! aborts a comparison: the failure goes to a [`Diagnostics`] sink and the
//! pattern is treated as matching nothing.

use std::sync::Arc;

use regex::{Regex, RegexBuilder};
use thiserror::Error;

use crate::engine::EngineConfig;

/// Pattern compilation errors
#[derive(Debug, Clone, Error)]
pub enum PatternError {
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl PatternError {
    /// The pattern text that failed to compile
    pub fn pattern(&self) -> &str {
        match self {
            PatternError::InvalidPattern { pattern, .. } => pattern,
        }
    }
}

/// Receives non-fatal conditions raised during a comparison
pub trait Diagnostics: Send + Sync {
    fn invalid_pattern(&self, error: &PatternError);
}

/// Reports through `tracing` at WARN level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn invalid_pattern(&self, error: &PatternError) {
        match error {
            PatternError::InvalidPattern { pattern, source } => {
                tracing::warn!(pattern = %pattern, error = %source, "pattern does not compile, treating as no match");
            }
        }
    }
}

/// Discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentDiagnostics;

impl Diagnostics for SilentDiagnostics {
    fn invalid_pattern(&self, _error: &PatternError) {}
}

impl<D: Diagnostics + ?Sized> Diagnostics for Arc<D> {
    fn invalid_pattern(&self, error: &PatternError) {
        (**self).invalid_pattern(error)
    }
}

impl<D: Diagnostics + ?Sized> Diagnostics for &D {
    fn invalid_pattern(&self, error: &PatternError) {
        (**self).invalid_pattern(error)
    }
}

/// Compile `pattern` under the engine's size limits
pub(crate) fn compile(pattern: &str, config: &EngineConfig) -> Result<Regex, PatternError> {
    RegexBuilder::new(pattern)
        .size_limit(config.regex_size_limit)
        .dfa_size_limit(config.regex_dfa_size_limit)
        .case_insensitive(config.case_insensitive_patterns)
        .build()
        .map_err(|source| PatternError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
}

/// Share of `text` covered by the leftmost match of `re`, or `None` when
/// nothing matches. A match against empty text covers all of it.
pub(crate) fn matched_fraction(re: &Regex, text: &str) -> Option<f64> {
    let found = re.find(text)?;
    if text.is_empty() {
        return Some(1.0);
    }
    Some(found.as_str().len() as f64 / text.len() as f64)
}
