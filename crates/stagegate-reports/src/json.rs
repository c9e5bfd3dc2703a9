use std::path::Path;

use serde_json::{Map, Value};
use stagegate_core::{ScoreOrigin, Scored, SourceWarning};
use tracing::warn;

use crate::{ReportError, ShapeError};

/// Read and parse a report. `Ok(None)` when the file does not exist.
pub fn load_report(path: &Path) -> Result<Option<Value>, ReportError> {
    if !path.exists() {
        return Ok(None);
    }
    let bytes = std::fs::read(path).map_err(|source| ReportError::Io { path: path.to_path_buf(), source })?;
    let value = serde_json::from_slice(&bytes).map_err(|source| ReportError::Json { path: path.to_path_buf(), source })?;
    Ok(Some(value))
}

/// Defaults substituted for one report source.
#[derive(Clone, Copy, Debug)]
pub struct SourceDefaults<T> {
    pub missing: T,
    pub malformed: T,
}

/// Load `dir/file` and run `extract` over it. A missing or unusable report
/// yields the matching default and appends a warning; it never fails.
pub fn read_scored<T>(
    dir: &Path,
    file: &str,
    defaults: SourceDefaults<T>,
    warnings: &mut Vec<SourceWarning>,
    extract: impl FnOnce(&Value) -> Result<T, ShapeError>,
) -> Scored<T> {
    let path = dir.join(file);
    let loaded = load_report(&path).and_then(|report| match report {
        None => Ok(None),
        Some(v) => extract(&v)
            .map(Some)
            .map_err(|source| ReportError::Shape { path: path.clone(), source }),
    });
    match loaded {
        Ok(Some(value)) => Scored::from_report(value),
        Ok(None) => {
            warnings.push(source_warning(file, ScoreOrigin::MissingDefault, format!("{} not found", path.display())));
            Scored::missing(defaults.missing)
        }
        Err(e) => {
            warnings.push(source_warning(file, ScoreOrigin::MalformedDefault, e.to_string()));
            Scored::malformed(defaults.malformed)
        }
    }
}

pub fn source_warning(source: &str, origin: ScoreOrigin, detail: String) -> SourceWarning {
    warn!(source, ?origin, "{detail}");
    SourceWarning { source: source.to_string(), origin, detail }
}

pub fn object<'a>(v: &'a Value, what: &str) -> Result<&'a Map<String, Value>, ShapeError> {
    v.as_object().ok_or_else(|| ShapeError::new(format!("{what} is not an object")))
}

/// Array under `key`; an absent key reads as empty.
pub fn array_field<'a>(obj: &'a Map<String, Value>, key: &str) -> Result<&'a [Value], ShapeError> {
    match obj.get(key) {
        None => Ok(&[]),
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(ShapeError::new(format!("`{key}` is not an array"))),
    }
}

/// Number under `key`; an absent key reads as `default`, anything else non-numeric is an error.
pub fn number_or(obj: &Map<String, Value>, key: &str, default: f64) -> Result<f64, ShapeError> {
    match obj.get(key) {
        None => Ok(default),
        Some(v) => v.as_f64().ok_or_else(|| ShapeError::new(format!("`{key}` is not a number"))),
    }
}

/// String under `obj[outer][inner]`, if every level is present.
pub fn nested_str<'a>(obj: &'a Map<String, Value>, outer: &str, inner: &str) -> Result<Option<&'a str>, ShapeError> {
    match obj.get(outer) {
        None => Ok(None),
        Some(Value::Object(m)) => Ok(m.get(inner).and_then(Value::as_str)),
        Some(_) => Err(ShapeError::new(format!("`{outer}` is not an object"))),
    }
}
