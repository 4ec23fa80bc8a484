use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationRequest {
    pub country_code: String,
    pub numbers: Vec<String>,
}

/// Partition of a batch; each list keeps the order the numbers were submitted in.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: Vec<String>,
    pub invalid: Vec<String>,
}

impl ValidationResult {
    pub fn len(&self) -> usize {
        self.valid.len() + self.invalid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Valid,
    Invalid,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PostalCodeRecord {
    pub zip_code: String,
    pub city: String,
    pub county: String,
    pub state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub area_codes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub economic_region: Option<String>,
}

/// Outcome of a successful postal code resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// The county mapped to an economic region.
    Enriched(PostalCodeRecord),
    /// No region is known for the county; the record is returned as stored.
    Base(PostalCodeRecord),
}

impl Resolution {
    pub fn is_enriched(&self) -> bool {
        matches!(self, Resolution::Enriched(_))
    }

    pub fn record(&self) -> &PostalCodeRecord {
        match self {
            Resolution::Enriched(record) | Resolution::Base(record) => record,
        }
    }

    pub fn into_record(self) -> PostalCodeRecord {
        match self {
            Resolution::Enriched(record) | Resolution::Base(record) => record,
        }
    }
}
