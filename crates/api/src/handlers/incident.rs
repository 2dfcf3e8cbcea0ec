//! Handlers for incidents, yearly hours reports, and the OSHA
//! recordkeeping summary.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use nova_core::error::CoreError;
use nova_core::recordkeeping::{RecordkeepingRates, YearCounts};
use nova_core::types::DbId;
use nova_db::models::incident::{CreateIncident, UpdateIncident, UpsertHoursReport};
use nova_db::repositories::IncidentRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::handlers::log_activity;
use crate::middleware::rbac::{RequireAuth, RequireManager};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query parameters for the recordkeeping summary.
#[derive(Debug, Deserialize)]
pub struct RecordkeepingParams {
    pub year: i32,
}

/// OSHA 300A-style yearly summary: case counts, exposure hours, and the
/// computed incidence rates. Rates are `null` until an hours report is
/// filed for the year.
#[derive(Debug, Serialize)]
pub struct RecordkeepingSummary {
    pub year: i32,
    pub total_recordable_cases: i64,
    pub days_away_restricted_transfer_cases: i64,
    pub lost_time_cases: i64,
    pub total_hours_worked: Option<f64>,
    pub average_employees: Option<i32>,
    pub trir: Option<f64>,
    pub dart: Option<f64>,
    pub ltir: Option<f64>,
}

fn validate_incident_type(incident_type: &str) -> AppResult<()> {
    if !["injury", "illness", "near_miss", "property_damage"].contains(&incident_type) {
        return Err(AppError::BadRequest(format!(
            "Unknown incident_type: {incident_type}"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

/// GET /incidents
pub async fn list_incidents(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> AppResult<impl IntoResponse> {
    let items = IncidentRepo::list(&state.pool, user.tenant_id).await?;
    Ok(Json(DataResponse { data: items }))
}

/// POST /incidents
pub async fn create_incident(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    Json(input): Json<CreateIncident>,
) -> AppResult<impl IntoResponse> {
    if let Some(incident_type) = &input.incident_type {
        validate_incident_type(incident_type)?;
    }

    let incident = IncidentRepo::create(&state.pool, user.tenant_id, &input).await?;
    log_activity(&state, user.tenant_id, user.user_id, "incident.created", "incident", incident.id)
        .await;
    Ok((StatusCode::CREATED, Json(DataResponse { data: incident })))
}

/// GET /incidents/{id}
pub async fn get_incident(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let incident = IncidentRepo::find_by_id(&state.pool, user.tenant_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "incident",
            id,
        }))?;
    Ok(Json(DataResponse { data: incident }))
}

/// PUT /incidents/{id}
pub async fn update_incident(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateIncident>,
) -> AppResult<impl IntoResponse> {
    if let Some(incident_type) = &input.incident_type {
        validate_incident_type(incident_type)?;
    }

    let incident = IncidentRepo::update(&state.pool, user.tenant_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "incident",
            id,
        }))?;
    log_activity(&state, user.tenant_id, user.user_id, "incident.updated", "incident", id).await;
    Ok(Json(DataResponse { data: incident }))
}

/// DELETE /incidents/{id}
pub async fn delete_incident(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = IncidentRepo::delete(&state.pool, user.tenant_id, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "incident",
            id,
        }));
    }
    log_activity(&state, user.tenant_id, user.user_id, "incident.deleted", "incident", id).await;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Recordkeeping summary
// ---------------------------------------------------------------------------

/// GET /incidents/recordkeeping?year=YYYY
///
/// Aggregates the year's incident log and hours report into the OSHA
/// summary. Without an hours report (or with zero hours) the rates are
/// `null` -- undefined, not an error.
pub async fn recordkeeping_summary(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Query(params): Query<RecordkeepingParams>,
) -> AppResult<impl IntoResponse> {
    let counts = IncidentRepo::year_counts(&state.pool, user.tenant_id, params.year).await?;
    let hours = IncidentRepo::get_hours_report(&state.pool, user.tenant_id, params.year).await?;

    let year_counts = YearCounts {
        total_recordable_cases: counts.total_recordable_cases,
        days_away_restricted_transfer_cases: counts.days_away_restricted_transfer_cases,
        lost_time_cases: counts.lost_time_cases,
        total_hours_worked: hours.as_ref().map(|h| h.total_hours_worked).unwrap_or(0.0),
        average_employees: hours.as_ref().map(|h| h.average_employees as i64).unwrap_or(0),
    };
    let rates = RecordkeepingRates::compute(&year_counts)?;

    let summary = RecordkeepingSummary {
        year: params.year,
        total_recordable_cases: counts.total_recordable_cases,
        days_away_restricted_transfer_cases: counts.days_away_restricted_transfer_cases,
        lost_time_cases: counts.lost_time_cases,
        total_hours_worked: hours.as_ref().map(|h| h.total_hours_worked),
        average_employees: hours.as_ref().map(|h| h.average_employees),
        trir: rates.trir,
        dart: rates.dart,
        ltir: rates.ltir,
    };

    Ok(Json(DataResponse { data: summary }))
}

/// GET /incidents/hours/{year}
pub async fn get_hours_report(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(year): Path<i32>,
) -> AppResult<impl IntoResponse> {
    let report = IncidentRepo::get_hours_report(&state.pool, user.tenant_id, year)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "hours report",
            id: year as DbId,
        }))?;
    Ok(Json(DataResponse { data: report }))
}

/// PUT /incidents/hours/{year}
///
/// Upserts the hours-worked report for a year.
pub async fn upsert_hours_report(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    Path(year): Path<i32>,
    Json(input): Json<UpsertHoursReport>,
) -> AppResult<impl IntoResponse> {
    if input.total_hours_worked < 0.0 {
        return Err(AppError::BadRequest(
            "total_hours_worked must be non-negative".into(),
        ));
    }
    if input.average_employees < 0 {
        return Err(AppError::BadRequest(
            "average_employees must be non-negative".into(),
        ));
    }

    let report = IncidentRepo::upsert_hours_report(&state.pool, user.tenant_id, year, &input).await?;
    log_activity(
        &state,
        user.tenant_id,
        user.user_id,
        "hours_report.upserted",
        "hours_report",
        report.id,
    )
    .await;
    Ok(Json(DataResponse { data: report }))
}
