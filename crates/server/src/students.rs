use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use service::pagination::PageRequest;
use service::student::domain::{CreateStudent, StudentDetail, StudentSummary, UpdateStudent};

use crate::errors::ApiError;
use crate::state::ServerState;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub page_number: Option<i64>,
    pub page_size: Option<i64>,
}

impl ListQuery {
    fn page(&self) -> PageRequest {
        PageRequest::new(self.page_number.unwrap_or(1), self.page_size.unwrap_or(20))
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedOutput {
    pub id: Uuid,
}

pub async fn list(
    State(state): State<ServerState>,
    Query(q): Query<ListQuery>,
) -> Result<Json<Vec<StudentSummary>>, ApiError> {
    let page = state.students.get_all(q.page()).await?;
    Ok(Json(page))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<CreateStudent>,
) -> Result<(StatusCode, Json<CreatedOutput>), ApiError> {
    let id = state.students.create(input).await?;
    info!(student_id = %id, "created student");
    Ok((StatusCode::CREATED, Json(CreatedOutput { id })))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<StudentDetail>, ApiError> {
    Ok(Json(state.students.get_by_id(id).await?))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateStudent>,
) -> Result<StatusCode, ApiError> {
    state.students.update(id, input).await?;
    info!(student_id = %id, "updated student");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.students.delete(id).await?;
    info!(student_id = %id, "deleted student");
    Ok(StatusCode::NO_CONTENT)
}
