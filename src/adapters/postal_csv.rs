use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::core::resolver::is_valid_zip_code;
use crate::domain::model::PostalCodeRecord;
use crate::domain::ports::PostalCodeSource;
use crate::utils::error::{Result, ServiceError};

#[derive(Debug, Deserialize)]
struct PostalCodeRow {
    zip_code: String,
    city: String,
    county: String,
    state: String,
    #[serde(default)]
    latitude: Option<f64>,
    #[serde(default)]
    longitude: Option<f64>,
    #[serde(default)]
    area_codes: String,
}

impl PostalCodeRow {
    fn into_record(self, line: u64) -> Result<PostalCodeRecord> {
        let zip_code = canonical_zip_code(&self.zip_code).ok_or_else(|| {
            ServiceError::DatasetError {
                message: format!("line {}: invalid zip code '{}'", line, self.zip_code),
            }
        })?;

        Ok(PostalCodeRecord {
            zip_code,
            city: self.city,
            county: self.county,
            state: self.state,
            latitude: self.latitude,
            longitude: self.longitude,
            area_codes: self
                .area_codes
                .split(|c: char| c == ';' || c.is_whitespace())
                .filter(|code| !code.is_empty())
                .map(str::to_string)
                .collect(),
            economic_region: None,
        })
    }
}

/// 試算表常把前導零吃掉，例如 00501 變成 501
fn canonical_zip_code(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() || raw.len() > 5 || !raw.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let padded = format!("{:0>5}", raw);
    is_valid_zip_code(&padded).then_some(padded)
}

/// In-memory postal code dataset, indexed by zip code.
///
/// Rows are kept exactly as loaded; duplicate codes are not merged so that the
/// resolver can report them.
#[derive(Debug, Default)]
pub struct PostalDataset {
    index: HashMap<String, Vec<PostalCodeRecord>>,
    total: usize,
}

impl PostalDataset {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("loading postal code dataset from {}", path.display());
        let file = std::fs::File::open(path).map_err(ServiceError::IoError)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let mut raw = csv::StringRecord::new();
        let mut records = Vec::new();
        while csv_reader.read_record(&mut raw)? {
            let line = raw.position().map(|p| p.line()).unwrap_or_default();
            let row: PostalCodeRow = raw.deserialize(Some(&headers))?;
            records.push(row.into_record(line)?);
        }

        let dataset = Self::from_records(records);
        let duplicated = dataset.duplicated_codes();
        if !duplicated.is_empty() {
            tracing::warn!(
                "postal code dataset has {} codes with more than one record; lookups for them will fail",
                duplicated.len()
            );
        }
        Ok(dataset)
    }

    pub fn from_records(records: Vec<PostalCodeRecord>) -> Self {
        let total = records.len();
        let mut index: HashMap<String, Vec<PostalCodeRecord>> = HashMap::new();
        for record in records {
            index.entry(record.zip_code.clone()).or_default().push(record);
        }
        Self { index, total }
    }

    /// Codes stored more than once, sorted.
    pub fn duplicated_codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self
            .index
            .iter()
            .filter(|(_, records)| records.len() > 1)
            .map(|(code, _)| code.as_str())
            .collect();
        codes.sort_unstable();
        codes
    }
}

impl PostalCodeSource for PostalDataset {
    fn find(&self, code: &str) -> &[PostalCodeRecord] {
        self.index.get(code).map(Vec::as_slice).unwrap_or(&[])
    }

    fn len(&self) -> usize {
        self.total
    }
}
