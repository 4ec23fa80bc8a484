use crate::domain::model::PostalCodeRecord;

/// Read-only access to the postal code reference dataset.
pub trait PostalCodeSource: Send + Sync {
    /// Every record stored under `code`, in load order.
    fn find(&self, code: &str) -> &[PostalCodeRecord];

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Read-only county -> economic region table.
pub trait RegionLookup: Send + Sync {
    /// `county` must already be normalized.
    fn region_for(&self, county: &str) -> Option<&str>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
