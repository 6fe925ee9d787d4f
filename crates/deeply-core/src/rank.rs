//! Fuzzy Ranker
//!
//! Continuous similarity between an expected and an actual value. The score
//! is the sum of three rules, each of which contributes only when its type
//! precondition holds, so at most one is non-zero for any pair:
//!
//! - scalar rule (neither side is a container)
//!   - expected string vs textual actual: 1.0 if identical, else the share of
//!     the actual text covered by the expected pattern's leftmost match, else
//!     normalized Levenshtein similarity
//!   - otherwise 1.0 if deeply equal, else 0.0
//! - mapping rule: sum of scores over shared keys / larger key count
//! - sequence rule: sum of greedy first-non-zero pair scores / longer length
//!
//! Empty containers of the same type score 1.0. Containers with different
//! type tags score 0.0.

use std::cmp::Ordering;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::engine::{Engine, Scope};
use crate::levenshtein;
use crate::matching;
use crate::pattern::{self, Diagnostics};
use crate::value::Value;

/// A scored candidate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ranked<'a> {
    /// Position in the candidate list
    pub index: usize,
    pub score: f64,
    pub value: &'a Value,
}

impl<D: Diagnostics> Engine<D> {
    /// Similarity of `actual` to `expect`; higher is closer
    pub fn rank_match(&self, expect: &Value, actual: &Value) -> f64 {
        Scope::new(self).rank(expect, actual)
    }

    /// Score every candidate against `expect`, best first.
    ///
    /// The sort is stable: equal scores keep their input order. Patterns in
    /// `expect` are compiled once for the whole candidate list.
    pub fn rank_candidates<'a>(&self, expect: &Value, candidates: &'a [Value]) -> Vec<Ranked<'a>> {
        let scope = Scope::new(self);
        let mut ranked = self.score_candidates(&scope, expect, candidates);

        ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        tracing::trace!(
            candidates = ranked.len(),
            best = ?ranked.first().map(|r| (r.index, r.score)),
            "ranked candidates"
        );
        ranked
    }

    /// Score candidates - parallel above the configured threshold
    #[cfg(feature = "parallel")]
    fn score_candidates<'a>(
        &self,
        scope: &Scope<'_, D>,
        expect: &Value,
        candidates: &'a [Value],
    ) -> Vec<Ranked<'a>> {
        if candidates.len() >= self.config().parallel_threshold {
            candidates
                .par_iter()
                .enumerate()
                .map(|(index, value)| Ranked {
                    index,
                    score: scope.rank(expect, value),
                    value,
                })
                .collect()
        } else {
            score_sequential(scope, expect, candidates)
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn score_candidates<'a>(
        &self,
        scope: &Scope<'_, D>,
        expect: &Value,
        candidates: &'a [Value],
    ) -> Vec<Ranked<'a>> {
        score_sequential(scope, expect, candidates)
    }
}

fn score_sequential<'a, D: Diagnostics>(
    scope: &Scope<'_, D>,
    expect: &Value,
    candidates: &'a [Value],
) -> Vec<Ranked<'a>> {
    candidates
        .iter()
        .enumerate()
        .map(|(index, value)| Ranked {
            index,
            score: scope.rank(expect, value),
            value,
        })
        .collect()
}

impl<D: Diagnostics> Scope<'_, D> {
    fn rank(&self, expect: &Value, actual: &Value) -> f64 {
        self.rank_scalar(expect, actual)
            + self.rank_sequence(expect, actual)
            + self.rank_mapping(expect, actual)
    }

    fn rank_scalar(&self, expect: &Value, actual: &Value) -> f64 {
        if expect.is_container() || actual.is_container() {
            return 0.0;
        }

        if let Value::String(pattern) = expect {
            if matches!(actual, Value::String(_) | Value::Number(_)) {
                if let Some(text) = actual.render_text() {
                    return self.rank_text(pattern, &text);
                }
            }
        }

        if expect == actual {
            1.0
        } else {
            0.0
        }
    }

    fn rank_text(&self, pattern: &str, text: &str) -> f64 {
        if pattern == text {
            return 1.0;
        }

        if let Some(fraction) = self
            .pattern(pattern)
            .and_then(|re| pattern::matched_fraction(&re, text))
        {
            return fraction;
        }

        levenshtein::similarity(pattern, text)
    }

    fn rank_mapping(&self, expect: &Value, actual: &Value) -> f64 {
        let (Value::Mapping(expect), Value::Mapping(actual)) = (expect, actual) else {
            return 0.0;
        };
        if expect.value_tag() != actual.value_tag() {
            return 0.0;
        }

        let total = expect.len().max(actual.len());
        if total == 0 {
            return 1.0;
        }

        let sum: f64 = expect
            .iter()
            .filter_map(|(key, e)| actual.get(key).map(|a| self.rank(e, a)))
            .sum();

        sum / total as f64
    }

    fn rank_sequence(&self, expect: &Value, actual: &Value) -> f64 {
        let (Value::Sequence(expect), Value::Sequence(actual)) = (expect, actual) else {
            return 0.0;
        };
        if expect.element_tag() != actual.element_tag() {
            return 0.0;
        }

        let total = expect.len().max(actual.len());
        if total == 0 {
            return 1.0;
        }

        let pairing =
            matching::greedy_pairing(expect.items(), actual.items(), |e, a| self.rank(e, a));

        pairing.weight / total as f64
    }
}
