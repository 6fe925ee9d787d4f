//! Reading values and configuration from JSON files.

use std::fs;
use std::path::Path;

use deeply_core::{EngineConfig, Value};

use crate::error::{Error, Result};

/// Parse a JSON document from `path`
pub fn read_document(path: &Path) -> Result<serde_json::Value> {
    let text = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a single value
pub fn read_value(path: &Path) -> Result<Value> {
    read_document(path).map(Value::from)
}

/// Read a candidate list; the file must hold a JSON array.
///
/// Returns the raw documents alongside their converted values so results can
/// be echoed back unchanged.
pub fn read_candidates(path: &Path) -> Result<(Vec<serde_json::Value>, Vec<Value>)> {
    match read_document(path)? {
        serde_json::Value::Array(documents) => {
            let values = documents.iter().map(Value::from).collect();
            Ok((documents, values))
        }
        other => Err(Error::Config(format!(
            "{}: candidates must be a JSON array, found {}",
            path.display(),
            json_kind(&other)
        ))),
    }
}

/// Load engine configuration, or the defaults when no file is given
pub fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    let Some(path) = path else {
        return Ok(EngineConfig::default());
    };

    let config: EngineConfig =
        serde_json::from_value(read_document(path)?).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    if config.regex_size_limit == 0 || config.regex_dfa_size_limit == 0 {
        return Err(Error::Config(format!(
            "{}: regex size limits must be non-zero",
            path.display()
        )));
    }

    tracing::debug!(path = %path.display(), ?config, "loaded engine config");
    Ok(config)
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
