//! # License Lookup API
//!
//! Read-only JSON access to the catalog, plus raw license text downloads.
//! Identifiers in paths are matched case-insensitively; the canonical case
//! is what appears in responses and download file names.

use std::collections::BTreeMap;

use axum::extract::{Path, State};
use axum::http::{header, HeaderValue};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use licenses_core::License;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;
use crate::state::AppState;

/// One license as served by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LicenseResponse {
    /// The full name of the license.
    pub title: String,
    /// The SPDX identifier, in canonical case.
    #[serde(rename = "spdx-id")]
    pub spdx_id: String,
    /// An alternative or shortened name.
    pub nickname: Option<String>,
    /// A brief description of the license.
    pub description: String,
    /// Guidelines on how to apply the license.
    pub how: String,
    /// Additional notes.
    pub note: Option<String>,
    /// Projects using the license, name to URL.
    pub using: BTreeMap<String, String>,
    pub permissions: Vec<String>,
    pub conditions: Vec<String>,
    pub limitations: Vec<String>,
    /// The full license text.
    pub content: String,
}

impl From<&License> for LicenseResponse {
    fn from(license: &License) -> Self {
        Self {
            title: license.title().to_string(),
            spdx_id: license.spdx_id().to_string(),
            nickname: license.nickname().map(str::to_string),
            description: license.description().to_string(),
            how: license.how().to_string(),
            note: license.note().map(str::to_string),
            using: license.using().clone(),
            permissions: license.permissions().to_vec(),
            conditions: license.conditions().to_vec(),
            limitations: license.limitations().to_vec(),
            content: license.content().to_string(),
        }
    }
}

/// Build the license router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/licenses", get(list_licenses))
        .route("/licenses/{id}", get(get_license))
        .route("/licenses/{id}/raw", get(get_license_raw))
}

/// GET /licenses: List all licenses.
#[utoipa::path(
    get,
    path = "/licenses",
    responses(
        (status = 200, description = "All licenses, ordered by SPDX identifier", body = [LicenseResponse]),
    ),
    tag = "licenses"
)]
async fn list_licenses(State(state): State<AppState>) -> Json<Vec<LicenseResponse>> {
    Json(
        state
            .catalog
            .sorted()
            .into_iter()
            .map(LicenseResponse::from)
            .collect(),
    )
}

/// GET /licenses/{id}: Get one license by SPDX identifier.
#[utoipa::path(
    get,
    path = "/licenses/{id}",
    params(("id" = String, Path, description = "SPDX identifier, case-insensitive")),
    responses(
        (status = 200, description = "License found", body = LicenseResponse),
        (status = 404, description = "Not found", body = crate::error::ErrorBody),
    ),
    tag = "licenses"
)]
async fn get_license(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<LicenseResponse>, AppError> {
    let license = state.catalog.lookup(&id)?;
    Ok(Json(LicenseResponse::from(license)))
}

/// GET /licenses/{id}/raw: Download the license text.
#[utoipa::path(
    get,
    path = "/licenses/{id}/raw",
    params(("id" = String, Path, description = "SPDX identifier, case-insensitive")),
    responses(
        (status = 200, description = "License text as an attachment named {SPDX-ID}.txt", body = String, content_type = "text/plain"),
        (status = 404, description = "Not found", body = crate::error::ErrorBody),
    ),
    tag = "licenses"
)]
async fn get_license_raw(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let license = state.catalog.lookup(&id)?;
    let disposition = attachment(license.spdx_id())?;

    Ok((
        [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static("text/plain; charset=utf-8"),
            ),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        license.content().to_string(),
    )
        .into_response())
}

/// `Content-Disposition` value for downloading `{spdx_id}.txt`.
fn attachment(spdx_id: &str) -> Result<HeaderValue, AppError> {
    HeaderValue::from_str(&format!("attachment; filename={spdx_id}.txt")).map_err(|e| {
        AppError::Internal(format!(
            "identifier {spdx_id:?} cannot be used as a file name: {e}"
        ))
    })
}
