use chrono::Utc;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;
use crate::student;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "group")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub limit: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub is_deleted: bool,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Student,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Student => Entity::has_many(student::Entity).into() }
    }
}

impl Related<student::Entity> for Entity {
    fn to() -> RelationDef { Relation::Student.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    if name.trim().is_empty() { return Err(ModelError::Validation("name required".into())); }
    Ok(())
}

impl Model {
    /// Refresh `updated_at`; call on every mutation.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now().into();
    }

    /// Logical delete: the row stays, reads stop seeing it.
    pub fn soft_delete(&mut self) {
        self.is_deleted = true;
        self.touch();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_name_rejects_blank() {
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
        assert!(validate_name("PB_101").is_ok());
    }

    #[test]
    fn soft_delete_flags_and_touches() {
        let now = Utc::now().into();
        let mut g = Model {
            id: Uuid::new_v4(),
            name: "PB_101".into(),
            limit: 25,
            created_at: now,
            updated_at: now,
            is_deleted: false,
        };
        g.soft_delete();
        assert!(g.is_deleted);
        assert!(g.updated_at >= g.created_at);
    }
}
