//! Experience API Handlers
//!
//! HTTP endpoints for experience management.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use kuuni_core::domain::experience::Experience;
use kuuni_core::dto::experience::CreateExperience;
use serde::Deserialize;
use uuid::Uuid;

use crate::api::AppState;
use crate::api::error::{ApiError, ApiResult};
use crate::service::experience_service;

/// POST /api/experiences
/// Create a new experience
pub async fn create_experience(
    State(state): State<AppState>,
    Json(req): Json<CreateExperience>,
) -> ApiResult<Json<Experience>> {
    tracing::info!("Creating experience: {}", req.title);

    let experience = experience_service::create_experience(&state.pool, req)
        .await
        .map_err(|e| match e {
            experience_service::ExperienceError::ValidationError(msg) => ApiError::BadRequest(msg),
            experience_service::ExperienceError::DatabaseError(err) => ApiError::DatabaseError(err),
            experience_service::ExperienceError::NotFound(id) => {
                ApiError::NotFound(format!("Experience {} not found", id))
            }
        })?;

    Ok(Json(experience))
}

/// GET /api/experiences
/// List experiences, newest first
///
/// Query parameters:
/// - `featured` (optional): only return experiences with a matching flag
pub async fn list_experiences(
    State(state): State<AppState>,
    Query(params): Query<ExperiencesQuery>,
) -> ApiResult<Json<Vec<Experience>>> {
    tracing::debug!("Listing experiences");

    let experiences = experience_service::list_experiences(&state.pool, params.featured)
        .await
        .map_err(|e| match e {
            experience_service::ExperienceError::DatabaseError(err) => ApiError::DatabaseError(err),
            experience_service::ExperienceError::NotFound(id) => {
                ApiError::NotFound(format!("Experience {} not found", id))
            }
            experience_service::ExperienceError::ValidationError(msg) => ApiError::BadRequest(msg),
        })?;

    Ok(Json(experiences))
}

#[derive(Debug, Deserialize)]
pub struct ExperiencesQuery {
    pub featured: Option<bool>,
}

/// GET /api/experiences/{id}
/// Get experience by ID
pub async fn get_experience(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Experience>> {
    tracing::debug!("Getting experience: {}", id);

    let experience = experience_service::get_experience(&state.pool, id)
        .await
        .map_err(|e| match e {
            experience_service::ExperienceError::NotFound(id) => {
                ApiError::NotFound(format!("Experience {} not found", id))
            }
            experience_service::ExperienceError::DatabaseError(err) => ApiError::DatabaseError(err),
            experience_service::ExperienceError::ValidationError(msg) => ApiError::BadRequest(msg),
        })?;

    Ok(Json(experience))
}

/// PUT /api/experiences/{id}
/// Update an experience (full-record overwrite)
pub async fn update_experience(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<CreateExperience>,
) -> ApiResult<Json<Experience>> {
    tracing::info!("Updating experience: {}", id);

    let experience = experience_service::update_experience(&state.pool, id, req)
        .await
        .map_err(|e| match e {
            experience_service::ExperienceError::NotFound(id) => {
                ApiError::NotFound(format!("Experience {} not found", id))
            }
            experience_service::ExperienceError::ValidationError(msg) => ApiError::BadRequest(msg),
            experience_service::ExperienceError::DatabaseError(err) => ApiError::DatabaseError(err),
        })?;

    Ok(Json(experience))
}

/// DELETE /api/experiences/{id}
/// Delete an experience
pub async fn delete_experience(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    tracing::info!("Deleting experience: {}", id);

    experience_service::delete_experience(&state.pool, id)
        .await
        .map_err(|e| match e {
            experience_service::ExperienceError::NotFound(id) => {
                ApiError::NotFound(format!("Experience {} not found", id))
            }
            experience_service::ExperienceError::DatabaseError(err) => ApiError::DatabaseError(err),
            experience_service::ExperienceError::ValidationError(msg) => ApiError::BadRequest(msg),
        })?;

    Ok(StatusCode::NO_CONTENT)
}
