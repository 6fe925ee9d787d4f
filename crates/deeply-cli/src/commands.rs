//! Subcommand execution

use std::io::Write;
use std::path::Path;

use deeply_core::{levenshtein, Engine, EngineConfig, Operation};
use serde::Serialize;

use crate::cli::Command;
use crate::error::Result;
use crate::input;

/// How a command finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Comparison held, or the command produced its output
    Success,
    /// Comparison did not hold
    Mismatch,
}

/// One entry of `rank` output
#[derive(Debug, Serialize)]
struct RankedEntry<'a> {
    index: usize,
    score: f64,
    value: &'a serde_json::Value,
}

#[derive(Debug, Serialize)]
struct DistanceReport {
    distance: usize,
    similarity: f64,
}

/// Execute `command`, writing results to `out`
pub fn run<W: Write>(command: &Command, config: EngineConfig, out: &mut W) -> Result<Outcome> {
    let engine = Engine::with_config(config);

    match command {
        Command::Compare {
            operation,
            expect,
            actual,
        } => compare(&engine, *operation, expect, actual, out),
        Command::Rank {
            expect,
            candidates,
            top,
        } => rank(&engine, expect, candidates, *top, out),
        Command::Distance { left, right } => {
            let report = DistanceReport {
                distance: levenshtein::distance(left, right),
                similarity: levenshtein::similarity(left, right),
            };
            serde_json::to_writer(&mut *out, &report)?;
            writeln!(out)?;
            Ok(Outcome::Success)
        }
    }
}

fn compare<W: Write>(
    engine: &Engine,
    operation: Operation,
    expect: &Path,
    actual: &Path,
    out: &mut W,
) -> Result<Outcome> {
    let expect = input::read_value(expect)?;
    let actual = input::read_value(actual)?;

    let verdict = engine.compare(operation, &expect, &actual);
    tracing::debug!(%operation, verdict, "compared");

    writeln!(out, "{verdict}")?;
    Ok(if verdict {
        Outcome::Success
    } else {
        Outcome::Mismatch
    })
}

fn rank<W: Write>(
    engine: &Engine,
    expect: &Path,
    candidates: &Path,
    top: Option<usize>,
    out: &mut W,
) -> Result<Outcome> {
    let expect = input::read_value(expect)?;
    let (documents, values) = input::read_candidates(candidates)?;

    let ranked = engine.rank_candidates(&expect, &values);
    let entries: Vec<RankedEntry<'_>> = ranked
        .iter()
        .take(top.unwrap_or(usize::MAX))
        .map(|r| RankedEntry {
            index: r.index,
            score: r.score,
            value: &documents[r.index],
        })
        .collect();

    serde_json::to_writer_pretty(&mut *out, &entries)?;
    writeln!(out)?;
    Ok(Outcome::Success)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, value: serde_json::Value) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, value.to_string()).unwrap();
        path
    }

    fn run_to_string(command: &Command) -> (Outcome, String) {
        let mut out = Vec::new();
        let outcome = run(command, EngineConfig::default(), &mut out).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_compare_outcomes() {
        let dir = TempDir::new().unwrap();
        let expect = write(&dir, "expect.json", json!({"name": "^grip.*$"}));
        let actual = write(&dir, "actual.json", json!({"name": "gripmock", "id": 7}));

        let command = Command::Compare {
            operation: Operation::Matches,
            expect: expect.clone(),
            actual: actual.clone(),
        };
        assert_eq!(run_to_string(&command), (Outcome::Success, "true\n".to_string()));

        let command = Command::Compare {
            operation: Operation::Equals,
            expect,
            actual,
        };
        assert_eq!(run_to_string(&command), (Outcome::Mismatch, "false\n".to_string()));
    }

    #[test]
    fn test_rank_echoes_candidates() {
        let dir = TempDir::new().unwrap();
        let expect = write(&dir, "expect.json", json!("hella"));
        let candidates = write(&dir, "candidates.json", json!(["world", "zzzzz", "hello"]));

        let command = Command::Rank {
            expect,
            candidates,
            top: Some(2),
        };
        let (outcome, text) = run_to_string(&command);
        assert_eq!(outcome, Outcome::Success);

        let output: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            output,
            json!([
                {"index": 2, "score": 0.8, "value": "hello"},
                {"index": 0, "score": 0.2, "value": "world"},
            ])
        );
    }

    #[test]
    fn test_distance_report() {
        let command = Command::Distance {
            left: "kitten".to_string(),
            right: "sitting".to_string(),
        };
        let (_, text) = run_to_string(&command);
        let report: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(report["distance"], json!(3));
    }

    #[test]
    fn test_missing_input_is_an_error() {
        let command = Command::Compare {
            operation: Operation::Equals,
            expect: PathBuf::from("/nonexistent/expect.json"),
            actual: PathBuf::from("/nonexistent/actual.json"),
        };
        let mut out = Vec::new();
        assert!(run(&command, EngineConfig::default(), &mut out).is_err());
        assert!(out.is_empty());
    }
}
