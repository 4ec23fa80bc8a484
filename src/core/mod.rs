pub mod normalize;
pub mod resolver;
pub mod service;
pub mod validator;

pub use crate::domain::model::{Classification, PostalCodeRecord, Resolution, ValidationResult};
pub use crate::domain::ports::{PostalCodeSource, RegionLookup};
pub use crate::utils::error::Result;
