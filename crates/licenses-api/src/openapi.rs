//! # OpenAPI Specification Assembly
//!
//! Assembles all utoipa-documented routes into a single OpenAPI 3.1 spec,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the license API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "License API",
        description = "An API for retrieving software license information, including SPDX ID, permissions, conditions, limitations, raw content and more.\n\nLicense identifiers in paths are case-insensitive.",
        license(name = "LGPL 3.0", url = "https://www.gnu.org/licenses/lgpl-3.0.en.html"),
        contact(name = "Nachtalb", email = "na@nachtalb.io", url = "https://github.com/Nachtalb/licenses_api/issues")
    ),
    paths(
        crate::routes::licenses::list_licenses,
        crate::routes::licenses::get_license,
        crate::routes::licenses::get_license_raw,
    ),
    components(
        schemas(
            crate::routes::licenses::LicenseResponse,
            crate::error::ErrorBody,
            crate::error::ErrorDetail,
        ),
    ),
    tags(
        (name = "licenses", description = "License catalog lookup and raw text download"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json: Return the generated OpenAPI specification.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
