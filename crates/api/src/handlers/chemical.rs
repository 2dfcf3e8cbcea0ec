//! Handlers for the chemical inventory and the SDS email inbox.
//!
//! The SDS inbox receives already-parsed inbound emails (sender, subject,
//! attachment filenames) from the mail-ingestion edge and scores each PDF
//! attachment against the tenant's chemical records. High-confidence
//! matches update the chemical's SDS revision date immediately; mid
//! confidence becomes a suggestion for human review.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use nova_core::error::CoreError;
use nova_core::sds::{match_score, MatchDisposition, MatchTarget};
use nova_core::status::{SDS_AUTO_APPLIED, SDS_SUGGESTED};
use nova_core::types::DbId;
use nova_db::models::chemical::{Chemical, CreateChemical, UpdateChemical};
use nova_db::models::sds_suggestion::SdsSuggestion;
use nova_db::repositories::{ChemicalRepo, SdsSuggestionRepo};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::handlers::log_activity;
use crate::middleware::rbac::{RequireAuth, RequireManager};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// One attachment of an inbound email.
#[derive(Debug, Deserialize)]
pub struct SdsAttachment {
    pub filename: String,
}

/// Body for `POST /chemicals/sds-inbox`: a parsed inbound email.
#[derive(Debug, Deserialize)]
pub struct SdsInboundEmail {
    pub sender: String,
    #[serde(default)]
    pub subject: String,
    pub attachments: Vec<SdsAttachment>,
}

/// Result of processing one inbound email.
#[derive(Debug, Serialize)]
pub struct SdsInboxResult {
    /// Suggestions recorded (both auto-applied and awaiting review).
    pub suggestions: Vec<SdsSuggestion>,
    /// Attachments that matched nothing and were discarded.
    pub discarded: u32,
}

/// Query parameters for `GET /chemicals/sds-suggestions`.
#[derive(Debug, Deserialize)]
pub struct SuggestionParams {
    pub status: Option<String>,
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

/// GET /chemicals
pub async fn list_chemicals(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> AppResult<impl IntoResponse> {
    let items = ChemicalRepo::list(&state.pool, user.tenant_id).await?;
    Ok(Json(DataResponse { data: items }))
}

/// POST /chemicals
pub async fn create_chemical(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    Json(input): Json<CreateChemical>,
) -> AppResult<impl IntoResponse> {
    if let Some(cas) = &input.cas_number {
        if !nova_core::sds::is_cas_number(cas) {
            return Err(AppError::BadRequest(format!("Invalid CAS number: {cas}")));
        }
    }

    let chemical = ChemicalRepo::create(&state.pool, user.tenant_id, &input).await?;
    log_activity(&state, user.tenant_id, user.user_id, "chemical.created", "chemical", chemical.id)
        .await;
    Ok((StatusCode::CREATED, Json(DataResponse { data: chemical })))
}

/// GET /chemicals/{id}
pub async fn get_chemical(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let chemical = ChemicalRepo::find_by_id(&state.pool, user.tenant_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "chemical",
            id,
        }))?;
    Ok(Json(DataResponse { data: chemical }))
}

/// PUT /chemicals/{id}
pub async fn update_chemical(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateChemical>,
) -> AppResult<impl IntoResponse> {
    if let Some(cas) = &input.cas_number {
        if !nova_core::sds::is_cas_number(cas) {
            return Err(AppError::BadRequest(format!("Invalid CAS number: {cas}")));
        }
    }

    let chemical = ChemicalRepo::update(&state.pool, user.tenant_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "chemical",
            id,
        }))?;
    log_activity(&state, user.tenant_id, user.user_id, "chemical.updated", "chemical", id).await;
    Ok(Json(DataResponse { data: chemical }))
}

/// DELETE /chemicals/{id}
pub async fn delete_chemical(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = ChemicalRepo::delete(&state.pool, user.tenant_id, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "chemical",
            id,
        }));
    }
    log_activity(&state, user.tenant_id, user.user_id, "chemical.deleted", "chemical", id).await;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// SDS inbox
// ---------------------------------------------------------------------------

/// The best-scoring chemical for an attachment, if any.
fn best_match<'a>(
    filename: &str,
    sender: &str,
    subject: &str,
    inventory: &'a [Chemical],
) -> Option<(&'a Chemical, f64)> {
    let mut best: Option<(&Chemical, f64)> = None;
    for chemical in inventory {
        let target = MatchTarget {
            product_name: &chemical.product_name,
            cas_number: chemical.cas_number.as_deref(),
            supplier: chemical.supplier.as_deref(),
        };
        let score = match_score(filename, sender, subject, &target);
        if best.map(|(_, s)| score > s).unwrap_or(score > 0.0) {
            best = Some((chemical, score));
        }
    }
    best
}

/// POST /chemicals/sds-inbox
///
/// Scores each attachment against the tenant's inventory. Dispositions:
/// auto-apply stamps the chemical's SDS revision date and records an
/// `auto_applied` suggestion; suggest records a row for human review;
/// no-match is discarded.
pub async fn process_sds_inbox(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    Json(input): Json<SdsInboundEmail>,
) -> AppResult<impl IntoResponse> {
    let inventory = ChemicalRepo::list(&state.pool, user.tenant_id).await?;

    let mut suggestions = Vec::new();
    let mut discarded = 0u32;

    for attachment in &input.attachments {
        let matched = best_match(&attachment.filename, &input.sender, &input.subject, &inventory);

        let Some((chemical, score)) = matched else {
            discarded += 1;
            continue;
        };

        match MatchDisposition::classify(score) {
            MatchDisposition::AutoApply => {
                ChemicalRepo::set_sds_revision(
                    &state.pool,
                    user.tenant_id,
                    chemical.id,
                    Utc::now().date_naive(),
                )
                .await?;
                let suggestion = SdsSuggestionRepo::create(
                    &state.pool,
                    user.tenant_id,
                    chemical.id,
                    &attachment.filename,
                    &input.sender,
                    &input.subject,
                    score,
                    SDS_AUTO_APPLIED,
                )
                .await?;
                tracing::info!(
                    chemical_id = chemical.id,
                    filename = %attachment.filename,
                    score,
                    "SDS match auto-applied"
                );
                suggestions.push(suggestion);
            }
            MatchDisposition::Suggest => {
                let suggestion = SdsSuggestionRepo::create(
                    &state.pool,
                    user.tenant_id,
                    chemical.id,
                    &attachment.filename,
                    &input.sender,
                    &input.subject,
                    score,
                    SDS_SUGGESTED,
                )
                .await?;
                suggestions.push(suggestion);
            }
            MatchDisposition::NoMatch => {
                discarded += 1;
            }
        }
    }

    Ok(Json(DataResponse {
        data: SdsInboxResult {
            suggestions,
            discarded,
        },
    }))
}

/// GET /chemicals/sds-suggestions?status=suggested
pub async fn list_sds_suggestions(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Query(params): Query<SuggestionParams>,
) -> AppResult<impl IntoResponse> {
    let items =
        SdsSuggestionRepo::list(&state.pool, user.tenant_id, params.status.as_deref()).await?;
    Ok(Json(DataResponse { data: items }))
}

/// POST /chemicals/sds-suggestions/{id}/confirm
///
/// A human confirms the suggested match; the chemical's SDS revision date
/// is stamped with today.
pub async fn confirm_sds_suggestion(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let suggestion = SdsSuggestionRepo::confirm(&state.pool, user.tenant_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SDS suggestion",
            id,
        }))?;

    ChemicalRepo::set_sds_revision(
        &state.pool,
        user.tenant_id,
        suggestion.chemical_id,
        Utc::now().date_naive(),
    )
    .await?;

    log_activity(
        &state,
        user.tenant_id,
        user.user_id,
        "sds_suggestion.confirmed",
        "sds_suggestion",
        id,
    )
    .await;
    Ok(Json(DataResponse { data: suggestion }))
}

/// POST /chemicals/sds-suggestions/{id}/reject
pub async fn reject_sds_suggestion(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let suggestion = SdsSuggestionRepo::reject(&state.pool, user.tenant_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SDS suggestion",
            id,
        }))?;

    log_activity(
        &state,
        user.tenant_id,
        user.user_id,
        "sds_suggestion.rejected",
        "sds_suggestion",
        id,
    )
    .await;
    Ok(Json(DataResponse { data: suggestion }))
}
