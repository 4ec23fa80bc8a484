use std::sync::Arc;

use crate::adapters::county_map::CountyRegionMap;
use crate::adapters::postal_csv::PostalDataset;
use crate::config::Settings;
use crate::core::resolver::RegionResolver;
use crate::core::validator::NumberingPlanValidator;
use crate::domain::model::{Resolution, ValidationRequest, ValidationResult};
use crate::domain::ports::{PostalCodeSource, RegionLookup};
use crate::utils::error::{LookupError, RequestError, Result};

/// Entry point shared by every request: owns the validator, the resolver and
/// the request limits. Cheap to clone; all reference data sits behind `Arc`.
#[derive(Clone)]
pub struct LookupService {
    validator: NumberingPlanValidator,
    resolver: RegionResolver,
    max_batch_size: usize,
}

impl LookupService {
    pub fn new(resolver: RegionResolver, max_batch_size: usize) -> Self {
        Self {
            validator: NumberingPlanValidator::new(),
            resolver,
            max_batch_size,
        }
    }

    /// 啟動時載入參考資料，之後不再重新讀取
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let dataset = PostalDataset::from_path(&settings.postal_codes_file_path)?;
        let regions = CountyRegionMap::from_path(&settings.counties_file_path)?;

        tracing::info!(
            "loaded {} postal code records and {} county mappings",
            dataset.len(),
            regions.len()
        );

        let resolver = RegionResolver::new(Arc::new(dataset), Arc::new(regions));
        Ok(Self::new(resolver, settings.max_batch_size))
    }

    pub fn max_batch_size(&self) -> usize {
        self.max_batch_size
    }

    pub fn postal_code_count(&self) -> usize {
        self.resolver.dataset().len()
    }

    pub fn county_count(&self) -> usize {
        self.resolver.regions().len()
    }

    pub fn validate(
        &self,
        request: &ValidationRequest,
    ) -> std::result::Result<ValidationResult, RequestError> {
        if request.numbers.len() > self.max_batch_size {
            return Err(RequestError::bad_request(format!(
                "too many numbers: {} given, at most {} allowed",
                request.numbers.len(),
                self.max_batch_size
            )));
        }

        Ok(self
            .validator
            .validate_batch(&request.numbers, &request.country_code))
    }

    pub fn resolve(&self, code: &str) -> std::result::Result<Resolution, LookupError> {
        self.resolver.resolve(code)
    }
}
