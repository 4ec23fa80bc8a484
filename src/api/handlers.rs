use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::api::response::{ApiError, Envelope};
use crate::api::SharedState;
use crate::domain::model::{PostalCodeRecord, ValidationRequest, ValidationResult};

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub postal_codes: usize,
    pub counties: usize,
}

pub async fn validate_numbers(
    State(service): State<SharedState>,
    payload: Result<Json<ValidationRequest>, JsonRejection>,
) -> Result<Json<Envelope<ValidationResult>>, ApiError> {
    tracing::debug!("received request to validate phone numbers");

    let Json(request) = payload.map_err(|rejection| {
        tracing::error!("unable to parse request body: {}", rejection.body_text());
        ApiError::bad_request("Invalid request body")
    })?;

    let result = service.validate(&request)?;
    tracing::info!(
        "validated {} numbers for '{}': {} valid, {} invalid",
        request.numbers.len(),
        request.country_code,
        result.valid.len(),
        result.invalid.len()
    );

    Ok(Envelope::ok(result))
}

pub async fn get_zip_code(
    State(service): State<SharedState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Envelope<PostalCodeRecord>>, ApiError> {
    let Path(code) = path.map_err(|rejection| {
        tracing::warn!("unable to decode zip code: {}", rejection.body_text());
        ApiError::bad_request("Invalid zip code")
    })?;
    tracing::info!("received request for zip code '{}'", code);

    let resolution = service.resolve(&code).map_err(|err| {
        tracing::warn!("zip code lookup failed: {}", err);
        ApiError::from(err)
    })?;

    if !resolution.is_enriched() {
        tracing::info!("zip code '{}' has no economic region mapping", code);
    }

    Ok(Envelope::ok(resolution.into_record()))
}

pub async fn health(State(service): State<SharedState>) -> Json<Envelope<HealthStatus>> {
    Envelope::ok(HealthStatus {
        status: "ok",
        postal_codes: service.postal_code_count(),
        counties: service.county_count(),
    })
}

pub async fn not_found() -> ApiError {
    ApiError::not_found("Not Found")
}
