//! Handlers for the `/projects` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::project::{CreateProject, Project, ProjectStats, UpdateProject};

use crate::error::{AppError, AppResult};
use crate::extract::{EntityId, JsonBody};
use crate::handlers::health::ServiceHealth;
use crate::query::ProjectListParams;
use crate::response::Envelope;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Project",
        id,
    })
}

fn listing(projects: Vec<Project>) -> Envelope<Vec<Project>> {
    let count = projects.len();
    Envelope::data(projects).with_count(count)
}

/// GET /api/v1/projects
///
/// `?category=` filters by category; otherwise `?featured=true` keeps only
/// featured projects.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ProjectListParams>,
) -> Json<Envelope<Vec<Project>>> {
    let projects = if let Some(category) = params.category() {
        state.projects.list_by_category(category).await
    } else if params.featured_only() {
        state.projects.list_featured().await
    } else {
        state.projects.list().await
    };
    Json(listing(projects))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<Json<Envelope<Project>>> {
    let project = state.projects.find_by_id(id).await.ok_or_else(|| not_found(id))?;
    Ok(Json(Envelope::data(project)))
}

/// GET /api/v1/projects/category/{category}
///
/// An unknown or empty category is not an error: it yields an empty list.
pub async fn list_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Json<Envelope<Vec<Project>>> {
    let projects = state.projects.list_by_category(&category).await;
    if projects.is_empty() {
        return Json(
            listing(projects).with_message(format!("No hay proyectos en categoría: {category}")),
        );
    }
    Json(listing(projects).with_category(category))
}

/// GET /api/v1/projects/featured
pub async fn list_featured(State(state): State<AppState>) -> Json<Envelope<Vec<Project>>> {
    Json(listing(state.projects.list_featured().await))
}

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateProject>,
) -> AppResult<(StatusCode, Json<Envelope<Project>>)> {
    let project = state.projects.create(input).await?;

    tracing::info!(project_id = project.id, category = %project.category, "Project created");

    Ok((
        StatusCode::CREATED,
        Json(Envelope::data(project).with_message("Proyecto creado exitosamente")),
    ))
}

/// PUT /api/v1/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    JsonBody(input): JsonBody<UpdateProject>,
) -> AppResult<Json<Envelope<Project>>> {
    let project = state
        .projects
        .update(id, &input)
        .await
        .ok_or_else(|| not_found(id))?;

    tracing::info!(project_id = id, "Project updated");

    Ok(Json(
        Envelope::data(project).with_message("Proyecto actualizado exitosamente"),
    ))
}

/// DELETE /api/v1/projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<Json<Envelope>> {
    if !state.projects.delete(id).await {
        return Err(not_found(id));
    }

    tracing::info!(project_id = id, "Project deleted");

    Ok(Json(Envelope::message(format!(
        "Proyecto {id} eliminado exitosamente"
    ))))
}

/// GET /api/v1/projects/stats
pub async fn stats(State(state): State<AppState>) -> Json<Envelope<ProjectStats>> {
    Json(Envelope::stats(state.projects.stats().await))
}

/// GET /api/v1/projects/health
pub async fn health() -> Json<ServiceHealth> {
    Json(ServiceHealth::healthy("projects-api"))
}
