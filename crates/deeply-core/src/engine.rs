//! Engine - configuration and diagnostics shared by every comparator

use std::collections::HashMap;

use parking_lot::Mutex;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::pattern::{self, Diagnostics, TracingDiagnostics};

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Upper bound, in bytes, on a compiled pattern program
    pub regex_size_limit: usize,
    /// Upper bound, in bytes, on the lazy DFA cache of a pattern
    pub regex_dfa_size_limit: usize,
    /// Compile expected patterns case-insensitively
    pub case_insensitive_patterns: bool,
    /// Candidate count from which `rank_candidates` scores in parallel
    /// (only with the `parallel` feature)
    pub parallel_threshold: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            regex_size_limit: 10 * (1 << 20),
            regex_dfa_size_limit: 2 * (1 << 20),
            case_insensitive_patterns: false,
            parallel_threshold: 256,
        }
    }
}

/// Comparison engine.
///
/// Holds no per-comparison state: every operation is a pure function of its
/// inputs, so one engine can be shared across threads.
#[derive(Debug, Clone)]
pub struct Engine<D = TracingDiagnostics> {
    config: EngineConfig,
    diagnostics: D,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Create an engine with default configuration, reporting through `tracing`
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create with custom configuration
    pub fn with_config(config: EngineConfig) -> Self {
        Self::with_diagnostics(config, TracingDiagnostics)
    }
}

impl<D: Diagnostics> Engine<D> {
    /// Create with custom configuration and diagnostics sink
    pub fn with_diagnostics(config: EngineConfig, diagnostics: D) -> Self {
        Self {
            config,
            diagnostics,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn diagnostics(&self) -> &D {
        &self.diagnostics
    }

    /// Compile `pattern`, reporting failure to the diagnostics sink
    fn compile(&self, pattern: &str) -> Option<Regex> {
        match pattern::compile(pattern, &self.config) {
            Ok(re) => Some(re),
            Err(err) => {
                self.diagnostics.invalid_pattern(&err);
                None
            }
        }
    }
}

/// State of one top-level comparison or ranking call.
///
/// Each distinct pattern is compiled at most once per call, so a pattern that
/// does not compile is reported once no matter how many leaves it is tried
/// against.
pub(crate) struct Scope<'e, D> {
    engine: &'e Engine<D>,
    patterns: Mutex<HashMap<String, Option<Regex>>>,
}

impl<'e, D: Diagnostics> Scope<'e, D> {
    pub(crate) fn new(engine: &'e Engine<D>) -> Self {
        Self {
            engine,
            patterns: Mutex::new(HashMap::new()),
        }
    }

    /// Compiled form of `pattern`, or `None` when it does not compile
    pub(crate) fn pattern(&self, pattern: &str) -> Option<Regex> {
        let mut patterns = self.patterns.lock();
        if let Some(compiled) = patterns.get(pattern) {
            return compiled.clone();
        }
        let compiled = self.engine.compile(pattern);
        patterns.insert(pattern.to_string(), compiled.clone());
        compiled
    }
}
