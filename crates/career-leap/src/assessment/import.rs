use std::io::Read;

use serde::{Deserialize, Deserializer};

use super::domain::{ApplicantAge, ApplicantProfile};

/// Errors that abort a whole profile CSV import.
#[derive(Debug, thiserror::Error)]
pub enum ProfileImportError {
    #[error("unable to read profile csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("unable to open profile csv: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors confined to a single data row; the rest of the file still imports.
#[derive(Debug, thiserror::Error)]
pub enum ProfileRowError {
    #[error("malformed row: {0}")]
    Malformed(#[from] csv::Error),
    #[error("unrecognised has_children value `{0}`")]
    UnrecognisedChildrenFlag(String),
}

/// One data row of a profile CSV. `row` is 1-based and excludes the header.
#[derive(Debug)]
pub struct ImportedRow {
    pub row: usize,
    pub profile: Result<ApplicantProfile, ProfileRowError>,
}

/// Read profiles from a CSV with a header row.
///
/// An unreadable header fails the import; a bad data row is returned as that
/// row's error so callers can report it and carry on.
pub fn parse_profiles<R: Read>(reader: R) -> Result<Vec<ImportedRow>, ProfileImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    csv_reader.headers()?;

    let rows = csv_reader
        .deserialize::<ProfileRow>()
        .enumerate()
        .map(|(index, row)| ImportedRow {
            row: index + 1,
            profile: row
                .map_err(ProfileRowError::from)
                .and_then(ProfileRow::into_profile),
        })
        .collect();

    Ok(rows)
}

pub fn profiles_from_path<P: AsRef<std::path::Path>>(
    path: P,
) -> Result<Vec<ImportedRow>, ProfileImportError> {
    let file = std::fs::File::open(path)?;
    parse_profiles(file)
}

#[derive(Debug, Deserialize)]
struct ProfileRow {
    family_structure: String,
    family_count: u32,
    #[serde(default)]
    age: Option<u32>,
    savings: u64,
    monthly_income: u64,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    has_children: Option<String>,
}

impl ProfileRow {
    fn into_profile(self) -> Result<ApplicantProfile, ProfileRowError> {
        let age = self
            .age
            .map(ApplicantAge::from_raw)
            .unwrap_or(ApplicantAge::Unspecified);

        let has_children = match self.has_children.as_deref() {
            Some(raw) => parse_children_flag(raw)
                .ok_or_else(|| ProfileRowError::UnrecognisedChildrenFlag(raw.to_string()))?,
            None => false,
        };

        Ok(ApplicantProfile {
            family_structure: self.family_structure,
            family_count: self.family_count,
            age,
            savings: self.savings,
            monthly_income: self.monthly_income,
            has_children,
        })
    }
}

fn parse_children_flag(raw: &str) -> Option<bool> {
    match raw.to_lowercase().as_str() {
        "true" | "yes" | "y" | "1" | "はい" | "あり" | "有" => Some(true),
        "false" | "no" | "n" | "0" | "いいえ" | "なし" | "無" => Some(false),
        _ => None,
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
