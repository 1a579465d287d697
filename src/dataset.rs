//! Reference data store.
//!
//! Six CSV tables are read once at startup and held as immutable maps
//! for the lifetime of the process:
//!
//! - `Training.csv` — only the header row matters: every column except
//!   `prognosis` names a known symptom.
//! - `description.csv` — condition → description text.
//! - `medications.csv`, `diets.csv`, `workout_df.csv` — condition → list
//!   cell (see [`parse_list_literal`] for the cell encoding).
//! - `precautions_df.csv` — condition → up to four `Precaution_N` columns.
//!
//! A failure reading any of the files fails the whole load; the caller
//! aborts startup rather than serve partial data.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while loading the reference tables.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("{}: missing expected column `{column}`", path.display())]
    MissingColumn { path: PathBuf, column: String },
    #[error("{}: empty table, expected a header row", path.display())]
    EmptyTable { path: PathBuf },
}

/// Immutable advisory reference data, shared read-only across requests.
#[derive(Debug)]
pub struct Dataset {
    symptoms: Vec<String>,
    descriptions: HashMap<String, String>,
    medications: HashMap<String, Vec<String>>,
    diets: HashMap<String, Vec<String>>,
    precautions: HashMap<String, Vec<String>>,
    workouts: HashMap<String, Vec<String>>,
}

impl Dataset {
    /// Load every reference table from `dir`.
    pub fn load(dir: &Path) -> Result<Self, DatasetError> {
        let symptoms = load_symptoms(&dir.join("Training.csv"))?;
        let descriptions =
            load_text_column(&dir.join("description.csv"), "Disease", "Description")?;
        let medications =
            load_list_column(&dir.join("medications.csv"), "Disease", "Medication")?;
        let diets = load_list_column(&dir.join("diets.csv"), "Disease", "Diet")?;
        let precautions = load_precautions(&dir.join("precautions_df.csv"))?;
        // workout_df.csv uses lowercase headers, unlike its siblings
        let workouts = load_list_column(&dir.join("workout_df.csv"), "disease", "workout")?;

        tracing::info!(
            symptoms = symptoms.len(),
            conditions = descriptions.len(),
            "reference data loaded"
        );

        Ok(Self {
            symptoms,
            descriptions,
            medications,
            diets,
            precautions,
            workouts,
        })
    }

    /// Known symptom names in source-column order.
    pub fn symptoms(&self) -> &[String] {
        &self.symptoms
    }

    /// Known symptom names sorted ascending, the display order.
    pub fn sorted_symptoms(&self) -> Vec<String> {
        let mut names = self.symptoms.clone();
        names.sort();
        names
    }

    pub fn description(&self, condition: &str) -> Option<&str> {
        self.descriptions.get(condition).map(String::as_str)
    }

    pub fn medications(&self, condition: &str) -> Option<&[String]> {
        self.medications.get(condition).map(Vec::as_slice)
    }

    pub fn diet(&self, condition: &str) -> Option<&[String]> {
        self.diets.get(condition).map(Vec::as_slice)
    }

    pub fn precautions(&self, condition: &str) -> Option<&[String]> {
        self.precautions.get(condition).map(Vec::as_slice)
    }

    pub fn workouts(&self, condition: &str) -> Option<&[String]> {
        self.workouts.get(condition).map(Vec::as_slice)
    }

    /// In-memory dataset for tests (no file I/O).
    #[cfg(test)]
    pub(crate) fn fixture() -> Self {
        let list = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        Self {
            symptoms: list(&[
                "runny_nose",
                "sneezing",
                "cough",
                "sore_throat",
                "fever",
                "chills",
                "muscle_aches",
                "fatigue",
                "headache",
                "itching",
            ]),
            descriptions: HashMap::from([(
                "Common Cold".to_string(),
                "A viral infection of the upper respiratory tract.".to_string(),
            )]),
            medications: HashMap::from([(
                "Common Cold".to_string(),
                list(&["Decongestants", "Antihistamines"]),
            )]),
            diets: HashMap::from([(
                "Common Cold".to_string(),
                list(&["Warm fluids", "Vitamin C rich fruits"]),
            )]),
            precautions: HashMap::from([(
                "Common Cold".to_string(),
                list(&["drink vitamin c rich drinks", "take vapour"]),
            )]),
            workouts: HashMap::from([("Common Cold".to_string(), list(&["Rest"]))]),
        }
    }
}

/// Attempt to parse a cell holding a bracketed, quoted list literal such
/// as `['Paracetamol', 'Ibuprofen']` (single or double quotes).
///
/// Returns `None` when the cell is not in that form; callers then treat
/// the whole cell as a single entry. The shipped data files rely on this
/// leniency, so a malformed cell is downgraded, not rejected.
pub fn parse_list_literal(cell: &str) -> Option<Vec<String>> {
    let inner = cell.trim().strip_prefix('[')?.strip_suffix(']')?;
    let mut items = Vec::new();
    let mut rest = inner.trim_start();
    while !rest.is_empty() {
        let quote = rest.chars().next()?;
        if quote != '\'' && quote != '"' {
            return None;
        }
        let after_quote = &rest[1..];
        let end = after_quote.find(quote)?;
        items.push(after_quote[..end].to_string());
        rest = after_quote[end + 1..].trim_start();
        match rest.strip_prefix(',') {
            Some(r) => rest = r.trim_start(),
            None if rest.is_empty() => break,
            None => return None,
        }
    }
    Some(items)
}

fn open(path: &Path) -> Result<csv::Reader<std::fs::File>, DatasetError> {
    csv::Reader::from_path(path).map_err(|source| DatasetError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn find_column(
    headers: &csv::StringRecord,
    column: &str,
    path: &Path,
) -> Result<usize, DatasetError> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| DatasetError::MissingColumn {
            path: path.to_path_buf(),
            column: column.to_string(),
        })
}

/// Symptom universe: the training table's header minus the label column.
fn load_symptoms(path: &Path) -> Result<Vec<String>, DatasetError> {
    let mut reader = open(path)?;
    let headers = reader.headers().map_err(|source| DatasetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let symptoms: Vec<String> = headers
        .iter()
        .filter(|h| *h != "prognosis")
        .map(str::to_string)
        .collect();
    if symptoms.is_empty() {
        return Err(DatasetError::EmptyTable {
            path: path.to_path_buf(),
        });
    }
    Ok(symptoms)
}

fn load_text_column(
    path: &Path,
    key_column: &str,
    value_column: &str,
) -> Result<HashMap<String, String>, DatasetError> {
    let mut reader = open(path)?;
    let headers = reader.headers().map_err(|source| DatasetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let key_idx = find_column(headers, key_column, path)?;
    let value_idx = find_column(headers, value_column, path)?;

    let mut map = HashMap::new();
    for record in reader.records() {
        let record = record.map_err(|source| DatasetError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let key = record.get(key_idx).unwrap_or("").to_string();
        let value = record.get(value_idx).unwrap_or("").to_string();
        map.insert(key, value);
    }
    Ok(map)
}

fn load_list_column(
    path: &Path,
    key_column: &str,
    value_column: &str,
) -> Result<HashMap<String, Vec<String>>, DatasetError> {
    let mut reader = open(path)?;
    let headers = reader.headers().map_err(|source| DatasetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let key_idx = find_column(headers, key_column, path)?;
    let value_idx = find_column(headers, value_column, path)?;

    let mut map = HashMap::new();
    for record in reader.records() {
        let record = record.map_err(|source| DatasetError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let key = record.get(key_idx).unwrap_or("").to_string();
        let cell = record.get(value_idx).unwrap_or("");
        let values =
            parse_list_literal(cell).unwrap_or_else(|| vec![cell.to_string()]);
        map.insert(key, values);
    }
    Ok(map)
}

/// Precautions live in four fixed-name columns; blank cells are skipped
/// and column order becomes list order.
fn load_precautions(path: &Path) -> Result<HashMap<String, Vec<String>>, DatasetError> {
    let mut reader = open(path)?;
    let headers = reader.headers().map_err(|source| DatasetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let key_idx = find_column(headers, "Disease", path)?;
    let precaution_idx: Vec<Option<usize>> = (1..=4)
        .map(|i| {
            let column = format!("Precaution_{i}");
            headers.iter().position(|h| h == column)
        })
        .collect();

    let mut map = HashMap::new();
    for record in reader.records() {
        let record = record.map_err(|source| DatasetError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let key = record.get(key_idx).unwrap_or("").to_string();
        let precautions: Vec<String> = precaution_idx
            .iter()
            .filter_map(|idx| idx.and_then(|i| record.get(i)))
            .filter(|cell| !cell.is_empty())
            .map(str::to_string)
            .collect();
        map.insert(key, precautions);
    }
    Ok(map)
}
