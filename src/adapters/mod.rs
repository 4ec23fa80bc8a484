// Adapters layer: concrete implementations for the reference data stored on disk.

pub mod county_map;
pub mod postal_csv;
