use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use service::group::domain::{CreateGroup, GroupDetail, GroupSummary, UpdateGroup};
use service::pagination::PageRequest;

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
) -> Result<Json<Vec<GroupSummary>>, ApiError> {
    let page = state.groups.get_all(q.page()).await?;
    Ok(Json(page))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<CreateGroup>,
) -> Result<(StatusCode, Json<CreatedOutput>), ApiError> {
    let id = state.groups.create(input).await?;
    info!(group_id = %id, "created group");
    Ok((StatusCode::CREATED, Json(CreatedOutput { id })))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<GroupDetail>, ApiError> {
    Ok(Json(state.groups.get_by_id(id).await?))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateGroup>,
) -> Result<StatusCode, ApiError> {
    state.groups.update(id, input).await?;
    info!(group_id = %id, "updated group");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.groups.delete(id).await?;
    info!(group_id = %id, "deleted group");
    Ok(StatusCode::NO_CONTENT)
}
