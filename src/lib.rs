pub mod adapters;
pub mod api;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::ServerArgs;

pub use crate::config::Settings;
pub use crate::core::{
    resolver::RegionResolver, service::LookupService, validator::NumberingPlanValidator,
};
pub use crate::utils::error::{LookupError, RequestError, Result, ServiceError};
