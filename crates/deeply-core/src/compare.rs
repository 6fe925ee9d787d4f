//! Boolean comparators
//!
//! Six operations in three families share one traversal. Each level
//! dispatches on the kinds of the expected and actual values and applies the
//! first rule whose precondition holds:
//!
//! 1. both mappings: mapping rule
//! 2. both sequences: sequence rule
//! 3. pattern families only: expected string tested as a regex against the
//!    rendered actual scalar
//! 4. deep value equality
//!
//! | Operation               | Mapping size | Sequence rule              |
//! |-------------------------|--------------|----------------------------|
//! | `Equals`                | equal        | positional                 |
//! | `EqualsIgnoreOrder`     | equal        | greedy, equal length       |
//! | `Contains`              | subset       | greedy, subset             |
//! | `ContainsIgnoreOrder`   | subset       | greedy, subset             |
//! | `Matches`               | subset       | positional                 |
//! | `MatchesIgnoreOrder`    | subset       | greedy, subset             |
//!
//! Containers only compare when their declared type tags are equal.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::engine::{Engine, Scope};
use crate::matching;
use crate::pattern::Diagnostics;
use crate::value::{Mapping, Sequence, Value};

/// A boolean comparison operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Equals,
    EqualsIgnoreOrder,
    Contains,
    ContainsIgnoreOrder,
    Matches,
    MatchesIgnoreOrder,
}

impl Operation {
    pub const ALL: [Operation; 6] = [
        Operation::Equals,
        Operation::EqualsIgnoreOrder,
        Operation::Contains,
        Operation::ContainsIgnoreOrder,
        Operation::Matches,
        Operation::MatchesIgnoreOrder,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operation::Equals => "equals",
            Operation::EqualsIgnoreOrder => "equals_ignore_order",
            Operation::Contains => "contains",
            Operation::ContainsIgnoreOrder => "contains_ignore_order",
            Operation::Matches => "matches",
            Operation::MatchesIgnoreOrder => "matches_ignore_order",
        }
    }

    fn rules(self) -> Rules {
        match self {
            Operation::Equals => Rules {
                mapping: Size::Exact,
                sequence: SequenceRule::Positional,
                patterns: false,
            },
            Operation::EqualsIgnoreOrder => Rules {
                mapping: Size::Exact,
                sequence: SequenceRule::Unordered(Size::Exact),
                patterns: false,
            },
            Operation::Contains | Operation::ContainsIgnoreOrder => Rules {
                mapping: Size::Subset,
                sequence: SequenceRule::Unordered(Size::Subset),
                patterns: false,
            },
            Operation::Matches => Rules {
                mapping: Size::Subset,
                sequence: SequenceRule::Positional,
                patterns: true,
            },
            Operation::MatchesIgnoreOrder => Rules {
                mapping: Size::Subset,
                sequence: SequenceRule::Unordered(Size::Subset),
                patterns: true,
            },
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown operation name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown operation '{0}'")]
pub struct UnknownOperation(pub String);

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| UnknownOperation(s.to_string()))
    }
}

/// How container sizes must relate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Size {
    /// `len(expect) == len(actual)`
    Exact,
    /// `len(expect) <= len(actual)`
    Subset,
}

impl Size {
    fn admits(self, expect: usize, actual: usize) -> bool {
        match self {
            Size::Exact => expect == actual,
            Size::Subset => expect <= actual,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SequenceRule {
    /// Equal lengths, element i against element i
    Positional,
    /// Greedy one-to-one pairing, every expected element must find a partner
    Unordered(Size),
}

#[derive(Debug, Clone, Copy)]
struct Rules {
    mapping: Size,
    sequence: SequenceRule,
    patterns: bool,
}

impl<D: Diagnostics> Engine<D> {
    /// Run `op` on `expect` against `actual`
    pub fn compare(&self, op: Operation, expect: &Value, actual: &Value) -> bool {
        Scope::new(self).compare(op.rules(), expect, actual)
    }

    /// Strict structural equality, positional sequences
    pub fn equals(&self, expect: &Value, actual: &Value) -> bool {
        self.compare(Operation::Equals, expect, actual)
    }

    /// Structural equality with order-insensitive sequences
    pub fn equals_ignore_order(&self, expect: &Value, actual: &Value) -> bool {
        self.compare(Operation::EqualsIgnoreOrder, expect, actual)
    }

    /// Whether `expect` is contained in `actual`
    pub fn contains(&self, expect: &Value, actual: &Value) -> bool {
        self.compare(Operation::Contains, expect, actual)
    }

    /// Same verdict as [`Engine::contains`]; containment never depends on order
    pub fn contains_ignore_order(&self, expect: &Value, actual: &Value) -> bool {
        self.compare(Operation::ContainsIgnoreOrder, expect, actual)
    }

    /// Containment where expected strings are regular expressions and
    /// sequences are positional
    pub fn matches(&self, expect: &Value, actual: &Value) -> bool {
        self.compare(Operation::Matches, expect, actual)
    }

    /// Like [`Engine::matches`] with order-insensitive subset sequences
    pub fn matches_ignore_order(&self, expect: &Value, actual: &Value) -> bool {
        self.compare(Operation::MatchesIgnoreOrder, expect, actual)
    }
}

impl<D: Diagnostics> Scope<'_, D> {
    fn compare(&self, rules: Rules, expect: &Value, actual: &Value) -> bool {
        let recurse = |e: &Value, a: &Value| self.compare(rules, e, a);

        match (expect, actual) {
            (Value::Mapping(e), Value::Mapping(a)) => mapping_rule(rules.mapping, e, a, recurse),
            (Value::Sequence(e), Value::Sequence(a)) => {
                sequence_rule(rules.sequence, e, a, recurse)
            }
            _ => (rules.patterns && self.pattern_rule(expect, actual)) || expect == actual,
        }
    }

    /// Expected string as a regex against the rendered actual scalar.
    /// Booleans are never pattern-matched.
    fn pattern_rule(&self, expect: &Value, actual: &Value) -> bool {
        if matches!(actual, Value::Bool(_)) {
            return false;
        }
        let (Value::String(pattern), Some(text)) = (expect, actual.render_text()) else {
            return false;
        };
        self.pattern(pattern).is_some_and(|re| re.is_match(&text))
    }
}

fn mapping_rule<F>(size: Size, expect: &Mapping, actual: &Mapping, mut compare: F) -> bool
where
    F: FnMut(&Value, &Value) -> bool,
{
    expect.value_tag() == actual.value_tag()
        && size.admits(expect.len(), actual.len())
        && expect
            .iter()
            .all(|(key, e)| actual.get(key).is_some_and(|a| compare(e, a)))
}

fn sequence_rule<F>(rule: SequenceRule, expect: &Sequence, actual: &Sequence, mut compare: F) -> bool
where
    F: FnMut(&Value, &Value) -> bool,
{
    if expect.element_tag() != actual.element_tag() {
        return false;
    }

    match rule {
        SequenceRule::Positional => {
            expect.len() == actual.len()
                && expect.iter().zip(actual.iter()).all(|(e, a)| compare(e, a))
        }
        SequenceRule::Unordered(size) => {
            size.admits(expect.len(), actual.len())
                && matching::covers_all(expect.items(), actual.items(), compare)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::{Diagnostics, PatternError, SilentDiagnostics};
    use crate::value::TypeTag;
    use crate::EngineConfig;
    use parking_lot::Mutex;
    use serde_json::json;

    #[derive(Default)]
    struct Recording(Mutex<Vec<String>>);

    impl Diagnostics for Recording {
        fn invalid_pattern(&self, error: &PatternError) {
            self.0.lock().push(error.pattern().to_string());
        }
    }

    fn v(json: serde_json::Value) -> Value {
        Value::from(json)
    }

    #[test]
    fn test_operation_names_round_trip() {
        for op in Operation::ALL {
            assert_eq!(op.name().parse::<Operation>(), Ok(op));
        }
        assert_eq!(
            "nearly".parse::<Operation>(),
            Err(UnknownOperation("nearly".to_string()))
        );
    }

    #[test]
    fn test_mapping_never_matches_sequence() {
        let engine = Engine::new();
        let map = v(json!({"0": "a"}));
        let seq = v(json!(["a"]));
        for op in Operation::ALL {
            assert!(!engine.compare(op, &map, &seq), "{op}");
            assert!(!engine.compare(op, &seq, &map), "{op}");
        }
    }

    #[test]
    fn test_type_tags_must_agree() {
        let engine = Engine::new();
        let typed = Value::Sequence(
            Sequence::typed(TypeTag::Int, vec![1.into(), 2.into(), 3.into()]).unwrap(),
        );
        let untyped = v(json!([1, 2, 3]));
        for op in Operation::ALL {
            assert!(!engine.compare(op, &typed, &untyped), "{op}");
            assert!(engine.compare(op, &typed, &typed.clone()), "{op}");
        }
    }

    #[test]
    fn test_invalid_pattern_is_reported_and_falls_through() {
        let engine = Engine::with_diagnostics(EngineConfig::default(), Recording::default());

        assert!(!engine.matches(&v(json!("hello (")), &v(json!("hello world"))));
        // deep equality still applies after the pattern rule gives up
        assert!(engine.matches(&v(json!("hello (")), &v(json!("hello ("))));

        assert_eq!(
            *engine.diagnostics().0.lock(),
            vec!["hello (".to_string(), "hello (".to_string()]
        );
    }

    #[test]
    fn test_invalid_pattern_is_reported_once_per_call() {
        let engine = Engine::with_diagnostics(EngineConfig::default(), Recording::default());
        let expect = v(json!({"a": "hello (", "b": ["hello (", "hello ("]}));
        let actual = v(json!({"a": "hello (", "b": ["y", "z", "hello ("]}));

        assert!(!engine.matches_ignore_order(&expect, &actual));
        assert_eq!(*engine.diagnostics().0.lock(), vec!["hello (".to_string()]);
    }

    #[test]
    fn test_silent_diagnostics_still_falls_through() {
        let engine = Engine::with_diagnostics(EngineConfig::default(), SilentDiagnostics);
        assert!(!engine.matches(&v(json!("hello (")), &v(json!("hello world"))));
        assert!(engine.matches(&v(json!("hello (")), &v(json!("hello ("))));
        assert!(engine.matches(&v(json!("^hello")), &v(json!("hello world"))));
    }

    #[test]
    fn test_patterns_only_apply_to_pattern_family() {
        let engine = Engine::new();
        let expect = v(json!("^a.c$"));
        let actual = v(json!("abc"));
        assert!(engine.matches(&expect, &actual));
        assert!(engine.matches_ignore_order(&expect, &actual));
        assert!(!engine.equals(&expect, &actual));
        assert!(!engine.contains(&expect, &actual));
    }

    #[test]
    fn test_pattern_against_rendered_scalars() {
        let engine = Engine::new();
        assert!(engine.matches(&v(json!("^100[1-2]{2}\\d{0,3}$")), &v(json!(10012))));
        assert!(engine.matches(&v(json!("^5\\.5$")), &v(json!(5.5))));
        assert!(!engine.matches(&v(json!("true")), &v(json!(true))));
        assert!(!engine.matches(&v(json!(".*")), &v(json!(false))));
        // a pattern renders a null actual as empty text
        assert!(engine.matches(&v(json!("^$")), &Value::Null));
        assert!(!engine.matches(&Value::Null, &v(json!(""))));
    }
}
