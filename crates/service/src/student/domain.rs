use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use models::student;

/// Creation input; every entity field is caller-supplied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStudent {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub birth_date: NaiveDate,
    pub group_id: Option<Uuid>,
}

/// Update input; every mutable field is overwritten.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStudent {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub birth_date: NaiveDate,
    pub group_id: Option<Uuid>,
}

/// List-view projection: identity and group reference only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentSummary {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub group_id: Option<Uuid>,
}

/// Single-entity projection with the full field set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentDetail {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub birth_date: NaiveDate,
    pub group_id: Option<Uuid>,
}

impl From<student::Model> for StudentSummary {
    fn from(m: student::Model) -> Self {
        Self {
            id: m.id,
            first_name: m.first_name,
            last_name: m.last_name,
            email: m.email,
            group_id: m.group_id,
        }
    }
}

impl From<student::Model> for StudentDetail {
    fn from(m: student::Model) -> Self {
        Self {
            id: m.id,
            first_name: m.first_name,
            last_name: m.last_name,
            email: m.email,
            phone: m.phone,
            address: m.address,
            birth_date: m.birth_date,
            group_id: m.group_id,
        }
    }
}
