//! Load boundary for the upstream applicant export.
//!
//! The export is a JSON document shaped as a bare array, an object with an `applicants`
//! array, or a single applicant object. Every entry is validated into an [`Applicant`];
//! entries that do not fit the schema are reported as [`RecordRejection`]s instead of being
//! coerced, and formatted numbers that carried no digits are reported as [`FieldWarning`]s.

mod record;
mod sample;

pub use record::RecordValidationError;
pub use sample::sample_applicants;

use std::collections::HashSet;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::domain::{Applicant, ApplicantId};
use crate::config::DataSourceConfig;
use record::ApplicantRecord;

/// Where the resident collection came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "path", rename_all = "snake_case")]
pub enum DataSource {
    File(PathBuf),
    Inline,
    Sample,
}

/// An entry of the export that was refused at the load boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordRejection {
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub reason: String,
}

/// A formatted numeric field that was present but had no digits, so it reads as 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldWarning {
    pub applicant_id: ApplicantId,
    pub field: &'static str,
    pub raw: String,
}

/// Result of loading one export.
#[derive(Debug, Clone, Serialize)]
pub struct LoadReport {
    pub source: DataSource,
    pub applicants: Vec<Applicant>,
    pub rejected: Vec<RecordRejection>,
    pub warnings: Vec<FieldWarning>,
}

impl LoadReport {
    fn sample() -> Self {
        Self {
            source: DataSource::Sample,
            applicants: sample_applicants(),
            rejected: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read applicant export {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("applicant export is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("applicant export must be an array or object, found {0}")]
    UnexpectedShape(&'static str),
}

pub struct ApplicantLoader;

impl ApplicantLoader {
    /// Probes the configured candidates in order and loads the first file that exists.
    /// When none exists the sample collection is returned instead.
    pub fn from_config(config: &DataSourceConfig) -> Result<LoadReport, LoadError> {
        for candidate in config.candidates() {
            match std::fs::File::open(&candidate) {
                Ok(file) => return Self::read(file, DataSource::File(candidate)),
                Err(err) if err.kind() == io::ErrorKind::NotFound => {
                    debug!(path = %candidate.display(), "applicant export not found");
                }
                Err(source) => {
                    return Err(LoadError::Io {
                        path: candidate,
                        source,
                    })
                }
            }
        }

        warn!("no applicant export found; serving the sample applicant");
        Ok(LoadReport::sample())
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<LoadReport, LoadError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::read(file, DataSource::File(path.to_path_buf()))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<LoadReport, LoadError> {
        Self::read(reader, DataSource::Inline)
    }

    fn read<R: Read>(reader: R, source: DataSource) -> Result<LoadReport, LoadError> {
        let document: Value = serde_json::from_reader(reader)?;
        let entries = flatten_document(document)?;

        let mut applicants = Vec::with_capacity(entries.len());
        let mut rejected = Vec::new();
        let mut seen: HashSet<ApplicantId> = HashSet::new();

        for (index, entry) in entries.into_iter().enumerate() {
            match validate_entry(entry) {
                Ok(applicant) if seen.contains(&applicant.id) => rejected.push(RecordRejection {
                    index,
                    id: Some(applicant.id.0.clone()),
                    reason: "duplicate id".to_string(),
                }),
                Ok(applicant) => {
                    seen.insert(applicant.id.clone());
                    applicants.push(applicant);
                }
                Err((id, reason)) => rejected.push(RecordRejection { index, id, reason }),
            }
        }

        let warnings = collect_warnings(&applicants);

        for rejection in &rejected {
            warn!(
                index = rejection.index,
                id = rejection.id.as_deref().unwrap_or("-"),
                reason = %rejection.reason,
                "applicant record rejected"
            );
        }
        for warning in &warnings {
            warn!(
                applicant = %warning.applicant_id,
                field = warning.field,
                raw = %warning.raw,
                "formatted field has no digits; reading it as 0"
            );
        }
        info!(
            accepted = applicants.len(),
            rejected = rejected.len(),
            warnings = warnings.len(),
            "applicant export loaded"
        );

        Ok(LoadReport {
            source,
            applicants,
            rejected,
            warnings,
        })
    }
}

fn flatten_document(document: Value) -> Result<Vec<Value>, LoadError> {
    match document {
        Value::Array(entries) => Ok(entries),
        Value::Object(mut object) => match object.remove("applicants") {
            Some(Value::Array(entries)) => Ok(entries),
            Some(_) => Err(LoadError::UnexpectedShape("non-array `applicants` field")),
            None => Ok(vec![Value::Object(object)]),
        },
        Value::Null => Err(LoadError::UnexpectedShape("null")),
        Value::Bool(_) => Err(LoadError::UnexpectedShape("boolean")),
        Value::Number(_) => Err(LoadError::UnexpectedShape("number")),
        Value::String(_) => Err(LoadError::UnexpectedShape("string")),
    }
}

fn validate_entry(entry: Value) -> Result<Applicant, (Option<String>, String)> {
    let hint = entry.get("id").map(|id| match id {
        Value::String(text) => text.trim().to_string(),
        other => other.to_string(),
    });

    let record: ApplicantRecord =
        serde_json::from_value(entry).map_err(|err| (hint, err.to_string()))?;
    let id = record.id_hint();
    record
        .into_applicant()
        .map_err(|err| (Some(id), err.to_string()))
}

fn collect_warnings(applicants: &[Applicant]) -> Vec<FieldWarning> {
    applicants
        .iter()
        .flat_map(|applicant| {
            applicant
                .formatted_fields()
                .into_iter()
                .filter(|(_, value)| value.is_coerced())
                .map(|(field, value)| FieldWarning {
                    applicant_id: applicant.id.clone(),
                    field,
                    raw: value.display().to_string(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn load(json: &str) -> LoadReport {
        ApplicantLoader::from_reader(Cursor::new(json.to_string())).expect("export loads")
    }

    #[test]
    fn accepts_bare_arrays() {
        let report = load(r#"[{"id": 1, "name": "A"}, {"id": 2, "name": "B"}]"#);
        assert_eq!(report.applicants.len(), 2);
        assert_eq!(report.source, DataSource::Inline);
    }

    #[test]
    fn accepts_wrapped_arrays() {
        let report = load(r#"{"applicants": [{"id": "x", "name": "A"}], "generated": "today"}"#);
        assert_eq!(report.applicants.len(), 1);
        assert_eq!(report.applicants[0].id.0, "x");
    }

    #[test]
    fn accepts_a_single_object() {
        let report = load(r#"{"id": "solo", "name": "Only One", "rating": 4.5}"#);
        assert_eq!(report.applicants.len(), 1);
        assert_eq!(report.applicants[0].rating, 4.5);
    }

    #[test]
    fn rejects_scalars_and_non_array_applicants() {
        let error = ApplicantLoader::from_reader(Cursor::new("42")).expect_err("scalar");
        assert!(matches!(error, LoadError::UnexpectedShape("number")));

        let error = ApplicantLoader::from_reader(Cursor::new(r#"{"applicants": {}}"#))
            .expect_err("object applicants");
        assert!(matches!(error, LoadError::UnexpectedShape(_)));
    }

    #[test]
    fn malformed_json_is_an_error_not_an_empty_list() {
        let error = ApplicantLoader::from_reader(Cursor::new("[{\"id\": ")).expect_err("truncated");
        assert!(matches!(error, LoadError::Json(_)));
    }

    #[test]
    fn invalid_records_are_rejected_individually() {
        let report = load(
            r#"[
                {"id": 1, "name": "Valid"},
                {"id": 2},
                {"id": 3, "name": "Too Good", "rating": 9},
                {"id": 4, "name": "Wrong Type", "skills": "React"},
                {"id": 1, "name": "Duplicate"}
            ]"#,
        );

        assert_eq!(report.applicants.len(), 1);
        let indexes: Vec<usize> = report.rejected.iter().map(|r| r.index).collect();
        assert_eq!(indexes, vec![1, 2, 3, 4]);
        assert_eq!(report.rejected[0].id.as_deref(), Some("2"));
        assert_eq!(report.rejected[3].reason, "duplicate id");
    }

    #[test]
    fn digitless_formatted_fields_are_reported() {
        let report = load(r#"[{"id": 1, "name": "A", "hourly_rate": "n/a", "job_success": ""}]"#);
        assert_eq!(report.applicants[0].hourly_rate.value(), 0.0);
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].field, "hourly_rate");
        assert_eq!(report.warnings[0].raw, "n/a");
    }

    #[test]
    fn missing_candidates_fall_back_to_the_sample() {
        let config = DataSourceConfig {
            explicit_path: Some(PathBuf::from("./does-not-exist/applicants.json")),
            fallback_paths: vec![PathBuf::from("./also-missing.json")],
        };

        let report = ApplicantLoader::from_config(&config).expect("fallback succeeds");
        assert_eq!(report.source, DataSource::Sample);
        assert_eq!(report.applicants.len(), 1);
        assert_eq!(report.applicants[0].name, "John Smith");
    }

    #[test]
    fn from_path_propagates_io_errors() {
        let error = ApplicantLoader::from_path("./does-not-exist.json").expect_err("io error");
        match error {
            LoadError::Io { path, .. } => assert_eq!(path, PathBuf::from("./does-not-exist.json")),
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
