use std::collections::{BTreeMap, HashMap};
use std::io::Read;
use std::path::Path;

use crate::core::normalize::normalize_county;
use crate::domain::ports::RegionLookup;
use crate::utils::error::{Result, ServiceError};

/// Immutable county -> economic region table, keyed by normalized county name.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CountyRegionMap {
    regions: HashMap<String, String>,
}

impl CountyRegionMap {
    /// Loads a flat `{ "<county>": "<region>" }` JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("loading county mappings from {}", path.display());
        let file = std::fs::File::open(path).map_err(ServiceError::IoError)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        // BTreeMap 讓衝突檢查的順序固定
        let raw: BTreeMap<String, String> = serde_json::from_reader(reader)?;
        Self::from_pairs(raw)
    }

    /// Builds the table from raw pairs, normalizing every county name.
    ///
    /// Two names that normalize to the same county are accepted only when they
    /// agree on the region.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut regions: HashMap<String, String> = HashMap::new();
        for (county, region) in pairs {
            let county = normalize_county(county.as_ref());
            let region = region.into();

            if county.is_empty() {
                return Err(ServiceError::DatasetError {
                    message: format!("empty county name mapped to region '{}'", region),
                });
            }

            match regions.get(&county) {
                Some(existing) if *existing != region => {
                    return Err(ServiceError::ConflictingCountyMapping {
                        county,
                        existing: existing.clone(),
                        conflicting: region,
                    });
                }
                Some(_) => {}
                None => {
                    regions.insert(county, region);
                }
            }
        }
        Ok(Self { regions })
    }

    /// Inverts a council document (`{ "<region>": ["<county>", ...] }`) into
    /// a county table. Region names are lower-cased.
    pub fn from_councils(councils: &BTreeMap<String, Vec<String>>) -> Result<Self> {
        Self::from_pairs(councils.iter().flat_map(|(region, counties)| {
            let region = region.trim().to_lowercase();
            counties
                .iter()
                .map(move |county| (county.as_str(), region.clone()))
        }))
    }

    /// Sorted view, used when writing the table back to disk.
    pub fn to_sorted(&self) -> BTreeMap<&str, &str> {
        self.regions
            .iter()
            .map(|(county, region)| (county.as_str(), region.as_str()))
            .collect()
    }
}

impl RegionLookup for CountyRegionMap {
    fn region_for(&self, county: &str) -> Option<&str> {
        self.regions.get(county).map(String::as_str)
    }

    fn len(&self) -> usize {
        self.regions.len()
    }
}
