use serde::{Deserialize, Serialize};
use uuid::Uuid;

use models::group;

/// Creation input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGroup {
    pub name: String,
    pub limit: i32,
}

/// Update input; every mutable field is overwritten.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateGroup {
    pub name: String,
    pub limit: i32,
}

/// List-view projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupSummary {
    pub id: Uuid,
    pub name: String,
    pub limit: i32,
}

/// Single-entity projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupDetail {
    pub id: Uuid,
    pub name: String,
    pub limit: i32,
}

impl From<group::Model> for GroupSummary {
    fn from(m: group::Model) -> Self {
        Self { id: m.id, name: m.name, limit: m.limit }
    }
}

impl From<group::Model> for GroupDetail {
    fn from(m: group::Model) -> Self {
        Self { id: m.id, name: m.name, limit: m.limit }
    }
}
