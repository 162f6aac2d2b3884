use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use models::student;

use crate::errors::ServiceError;
use crate::student::repository::StudentRepository;

/// SeaORM-backed repository implementation.
pub struct SeaOrmStudentRepository {
    pub db: DatabaseConnection,
}

fn to_active(entity: student::Model) -> student::ActiveModel {
    student::ActiveModel {
        id: Set(entity.id),
        first_name: Set(entity.first_name),
        last_name: Set(entity.last_name),
        email: Set(entity.email),
        phone: Set(entity.phone),
        address: Set(entity.address),
        birth_date: Set(entity.birth_date),
        group_id: Set(entity.group_id),
        created_at: Set(entity.created_at),
        updated_at: Set(entity.updated_at),
        is_deleted: Set(entity.is_deleted),
    }
}

#[async_trait::async_trait]
impl StudentRepository for SeaOrmStudentRepository {
    async fn exists_by_email(&self, email: &str) -> Result<bool, ServiceError> {
        let found = student::Entity::find()
            .filter(student::Column::Email.eq(email))
            .filter(student::Column::IsDeleted.eq(false))
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(found.is_some())
    }

    async fn get(&self, id: Uuid) -> Result<Option<student::Model>, ServiceError> {
        student::Entity::find_by_id(id)
            .filter(student::Column::IsDeleted.eq(false))
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn get_page(&self, page_idx: u64, per_page: u64) -> Result<Vec<student::Model>, ServiceError> {
        student::Entity::find()
            .filter(student::Column::IsDeleted.eq(false))
            .order_by_asc(student::Column::CreatedAt)
            .paginate(&self.db, per_page)
            .fetch_page(page_idx)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn add(&self, entity: student::Model) -> Result<student::Model, ServiceError> {
        to_active(entity)
            .insert(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn save(&self, entity: student::Model) -> Result<student::Model, ServiceError> {
        to_active(entity)
            .update(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use chrono::NaiveDate;

    use crate::group::domain::CreateGroup;
    use crate::group::repo::seaorm::SeaOrmGroupRepository;
    use crate::group::GroupService;
    use crate::student::domain::{CreateStudent, UpdateStudent};
    use crate::student::StudentService;
    use crate::test_support::get_db;

    fn create_input(email: &str, group_id: Option<Uuid>) -> CreateStudent {
        CreateStudent {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: email.into(),
            phone: Some("+994501234567".into()),
            address: Some("12 Nizami St".into()),
            birth_date: NaiveDate::from_ymd_opt(2001, 7, 14).unwrap(),
            group_id,
        }
    }

    #[tokio::test]
    async fn student_crud_roundtrip_with_group_guard() -> Result<(), anyhow::Error> {
        let db = match get_db().await {
            Ok(db) => db,
            Err(e) => {
                eprintln!("skip: cannot connect to db: {}", e);
                return Ok(());
            }
        };
        let groups = GroupService::new(Arc::new(SeaOrmGroupRepository { db: db.clone() }));
        let students = StudentService::new(Arc::new(SeaOrmStudentRepository { db }));

        let group_name = format!("svc_group_{}", Uuid::new_v4());
        let group_id = groups.create(CreateGroup { name: group_name, limit: 30 }).await?;

        let email = format!("svc_{}@example.com", Uuid::new_v4());
        let id = students.create(create_input(&email, Some(group_id))).await?;

        let detail = students.get_by_id(id).await?;
        assert_eq!(detail.email, email);
        assert_eq!(detail.group_id, Some(group_id));

        let dup = students.create(create_input(&email, None)).await;
        assert!(dup.is_err());

        // the group cannot be deleted while the student is live
        assert!(groups.delete(group_id).await.is_err());

        let update = UpdateStudent {
            first_name: "Ada".into(),
            last_name: "Byron".into(),
            email: email.clone(),
            phone: None,
            address: None,
            birth_date: NaiveDate::from_ymd_opt(2001, 7, 14).unwrap(),
            group_id: None,
        };
        students.update(id, update).await?;
        let detail = students.get_by_id(id).await?;
        assert_eq!(detail.last_name, "Byron");
        assert_eq!(detail.group_id, None);

        // reassigned away, the group is deletable now
        groups.delete(group_id).await?;

        students.delete(id).await?;
        assert!(students.get_by_id(id).await.is_err());

        // the email is reusable once the original is soft-deleted
        let id2 = students.create(create_input(&email, None)).await?;
        students.delete(id2).await?;
        Ok(())
    }
}
