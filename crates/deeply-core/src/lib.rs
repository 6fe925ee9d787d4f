//! deeply Core Engine
//!
//! Structural comparison and fuzzy ranking of dynamic values, used to decide
//! whether an expected value matches an actual one and to pick the closest
//! expectation among many candidates.
//!
//! # Operations
//!
//! - `equals` / `equals_ignore_order` - strict structural equality
//! - `contains` / `contains_ignore_order` - expected is a subset of actual
//! - `matches` / `matches_ignore_order` - containment with regex string leaves
//! - `rank_match` - continuous similarity score
//! - `rank_candidates` - stable best-first ordering of candidates
//!
//! The free functions use a default [`Engine`] that reports invalid patterns
//! through `tracing`. Build an engine with [`Engine::with_diagnostics`] to
//! route them elsewhere.
//!
//! # Features
//!
//! - `parallel` - score large candidate lists in parallel via rayon
//!
//! # Example
//!
//! ```rust
//! use deeply_core::{matches, rank_candidates, Value};
//! use serde_json::json;
//!
//! let expect = Value::from(json!({"name": "^grip.*$", "cities": ["Jakarta", ".*grad$"]}));
//! let actual = Value::from(json!({"name": "gripmock", "cities": ["Jakarta", "Stalingrad"], "id": 7}));
//! assert!(matches(&expect, &actual));
//!
//! let candidates = vec![Value::from("world"), Value::from("zzzzz"), Value::from("hello")];
//! let ranked = rank_candidates(&Value::from("hella"), &candidates);
//! assert_eq!(ranked[0].value, &Value::from("hello"));
//! ```

pub mod compare;
pub mod engine;
pub mod levenshtein;
pub mod matching;
pub mod pattern;
pub mod rank;
pub mod value;

// Re-export main types at crate root
pub use compare::{Operation, UnknownOperation};
pub use engine::{Engine, EngineConfig};
pub use pattern::{Diagnostics, PatternError, SilentDiagnostics, TracingDiagnostics};
pub use rank::Ranked;
pub use value::{Mapping, Number, Sequence, TypeTag, Value, ValueError, ValueResult};

/// Strict structural equality with positional sequences
pub fn equals(expect: &Value, actual: &Value) -> bool {
    Engine::new().equals(expect, actual)
}

/// Structural equality with order-insensitive sequences
pub fn equals_ignore_order(expect: &Value, actual: &Value) -> bool {
    Engine::new().equals_ignore_order(expect, actual)
}

/// Whether `expect` is contained in `actual`
pub fn contains(expect: &Value, actual: &Value) -> bool {
    Engine::new().contains(expect, actual)
}

/// Whether `expect` is contained in `actual`; sequences never depend on order
pub fn contains_ignore_order(expect: &Value, actual: &Value) -> bool {
    Engine::new().contains_ignore_order(expect, actual)
}

/// Containment with regex string leaves and positional sequences
pub fn matches(expect: &Value, actual: &Value) -> bool {
    Engine::new().matches(expect, actual)
}

/// Containment with regex string leaves and order-insensitive sequences
pub fn matches_ignore_order(expect: &Value, actual: &Value) -> bool {
    Engine::new().matches_ignore_order(expect, actual)
}

/// Similarity of `actual` to `expect`; higher is closer
pub fn rank_match(expect: &Value, actual: &Value) -> f64 {
    Engine::new().rank_match(expect, actual)
}

/// Candidates ordered best first, ties in input order
pub fn rank_candidates<'a>(expect: &Value, candidates: &'a [Value]) -> Vec<Ranked<'a>> {
    Engine::new().rank_candidates(expect, candidates)
}
