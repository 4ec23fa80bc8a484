use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::normalize::normalize_county;
use crate::domain::model::Resolution;
use crate::domain::ports::{PostalCodeSource, RegionLookup};
use crate::utils::error::LookupError;

// 目前只支援美國五碼郵遞區號
static ZIP_CODE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{5}$").expect("zip code pattern is valid"));

pub fn is_valid_zip_code(code: &str) -> bool {
    ZIP_CODE_PATTERN.is_match(code)
}

/// Resolves a postal code to its locality record and economic region.
#[derive(Clone)]
pub struct RegionResolver {
    dataset: Arc<dyn PostalCodeSource>,
    regions: Arc<dyn RegionLookup>,
}

impl RegionResolver {
    pub fn new(dataset: Arc<dyn PostalCodeSource>, regions: Arc<dyn RegionLookup>) -> Self {
        Self { dataset, regions }
    }

    pub fn dataset(&self) -> &dyn PostalCodeSource {
        self.dataset.as_ref()
    }

    pub fn regions(&self) -> &dyn RegionLookup {
        self.regions.as_ref()
    }

    pub fn resolve(&self, code: &str) -> Result<Resolution, LookupError> {
        if !is_valid_zip_code(code) {
            return Err(LookupError::InvalidFormat {
                code: code.to_string(),
            });
        }

        let mut record = match self.dataset.find(code) {
            [] => {
                return Err(LookupError::NotFound {
                    code: code.to_string(),
                })
            }
            [record] => record.clone(),
            matches => {
                tracing::warn!(
                    "zip code {} has {} records in the dataset",
                    code,
                    matches.len()
                );
                return Err(LookupError::AmbiguousRecord {
                    code: code.to_string(),
                    matches: matches.len(),
                });
            }
        };

        let county = normalize_county(&record.county);
        match self.regions.region_for(&county) {
            Some(region) => {
                record.economic_region = Some(region.to_string());
                Ok(Resolution::Enriched(record))
            }
            None => {
                tracing::debug!("no economic region mapped for county '{}'", county);
                record.economic_region = None;
                Ok(Resolution::Base(record))
            }
        }
    }
}
