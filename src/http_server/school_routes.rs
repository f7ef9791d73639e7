//! School HTTP Routes
//!
//! Endpoints for registering schools and listing them by distance.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::{ApiError, ApiResult};
use crate::geo::haversine_km;
use crate::observability::{Logger, Severity};
use crate::schools::{NewSchool, SchoolWithDistance};
use crate::store::SchoolStore;

// ==================
// Shared State
// ==================

/// School state shared across handlers
pub struct SchoolState {
    pub store: Arc<dyn SchoolStore>,
}

impl SchoolState {
    pub fn new(store: Arc<dyn SchoolStore>) -> Self {
        Self { store }
    }
}

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Serialize, Deserialize)]
pub struct AddSchoolResponse {
    pub message: String,
    pub id: u64,
}

/// Raw query parameters for the list endpoint.
///
/// Both arrive as strings; parsing and range checks happen in the
/// handler so that a missing, non-numeric, or out-of-range value takes
/// the same rejection path.
#[derive(Debug, Deserialize)]
pub struct ListSchoolsQuery {
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

// ==================
// School Routes
// ==================

/// Create school routes
pub fn school_routes(state: Arc<SchoolState>) -> Router {
    Router::new()
        .route("/addSchool", post(add_school_handler))
        .route("/listSchools", get(list_schools_handler))
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

fn parse_coordinate(raw: Option<&str>, min: f64, max: f64) -> Option<f64> {
    let value: f64 = raw?.parse().ok()?;
    // NaN fails both comparisons and is rejected here.
    (value >= min && value <= max).then_some(value)
}

// ==================
// Handlers
// ==================

/// POST /addSchool
///
/// Accepts an arbitrary JSON body, validates the four known fields,
/// inserts exactly one trimmed row, and returns the generated id.
/// Invalid input never reaches the store.
async fn add_school_handler(
    State(state): State<Arc<SchoolState>>,
    body: Option<Json<Value>>,
) -> ApiResult<Json<AddSchoolResponse>> {
    let Some(Json(body)) = body else {
        return Err(ApiError::InvalidInput);
    };

    let school = NewSchool::from_value(&body).ok_or(ApiError::InvalidInput)?;

    let id = state.store.insert(&school).await?;

    Logger::log(
        Severity::Info,
        "school_added",
        &[("id", &id.to_string()), ("name", &school.name)],
    );

    Ok(Json(AddSchoolResponse {
        message: "School added".to_string(),
        id,
    }))
}

/// GET /listSchools?latitude=..&longitude=..
///
/// Fetches every school, annotates each with its distance from the
/// query point, and returns the list sorted ascending. The sort is
/// stable, so equal distances keep their fetch order.
async fn list_schools_handler(
    State(state): State<Arc<SchoolState>>,
    Query(params): Query<ListSchoolsQuery>,
) -> ApiResult<Json<Vec<SchoolWithDistance>>> {
    let latitude = parse_coordinate(params.latitude.as_deref(), -90.0, 90.0)
        .ok_or(ApiError::InvalidCoordinates)?;
    let longitude = parse_coordinate(params.longitude.as_deref(), -180.0, 180.0)
        .ok_or(ApiError::InvalidCoordinates)?;

    let schools = state.store.fetch_all().await?;

    let mut annotated: Vec<SchoolWithDistance> = schools
        .into_iter()
        .map(|school| {
            let distance = haversine_km(latitude, longitude, school.latitude, school.longitude);
            SchoolWithDistance::new(school, distance)
        })
        .collect();
    annotated.sort_by(|a, b| a.distance.total_cmp(&b.distance));

    Ok(Json(annotated))
}
