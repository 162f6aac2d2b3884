use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use models::{group, student};

use crate::errors::ServiceError;
use crate::group::repository::GroupRepository;

/// SeaORM-backed repository implementation.
pub struct SeaOrmGroupRepository {
    pub db: DatabaseConnection,
}

fn to_active(entity: group::Model) -> group::ActiveModel {
    group::ActiveModel {
        id: Set(entity.id),
        name: Set(entity.name),
        limit: Set(entity.limit),
        created_at: Set(entity.created_at),
        updated_at: Set(entity.updated_at),
        is_deleted: Set(entity.is_deleted),
    }
}

#[async_trait::async_trait]
impl GroupRepository for SeaOrmGroupRepository {
    async fn exists_by_name(&self, name: &str) -> Result<bool, ServiceError> {
        let found = group::Entity::find()
            .filter(group::Column::Name.eq(name))
            .filter(group::Column::IsDeleted.eq(false))
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(found.is_some())
    }

    async fn get(&self, id: Uuid) -> Result<Option<group::Model>, ServiceError> {
        group::Entity::find_by_id(id)
            .filter(group::Column::IsDeleted.eq(false))
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn get_page(&self, page_idx: u64, per_page: u64) -> Result<Vec<group::Model>, ServiceError> {
        group::Entity::find()
            .filter(group::Column::IsDeleted.eq(false))
            .order_by_asc(group::Column::CreatedAt)
            .paginate(&self.db, per_page)
            .fetch_page(page_idx)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn add(&self, entity: group::Model) -> Result<group::Model, ServiceError> {
        to_active(entity)
            .insert(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn save(&self, entity: group::Model) -> Result<group::Model, ServiceError> {
        to_active(entity)
            .update(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn live_student_count(&self, group_id: Uuid) -> Result<u64, ServiceError> {
        student::Entity::find()
            .filter(student::Column::GroupId.eq(group_id))
            .filter(student::Column::IsDeleted.eq(false))
            .count(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::group::domain::{CreateGroup, UpdateGroup};
    use crate::group::GroupService;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn group_crud_roundtrip() -> Result<(), anyhow::Error> {
        let db = match get_db().await {
            Ok(db) => db,
            Err(e) => {
                eprintln!("skip: cannot connect to db: {}", e);
                return Ok(());
            }
        };
        let svc = GroupService::new(Arc::new(SeaOrmGroupRepository { db }));

        let name = format!("svc_group_{}", Uuid::new_v4());
        let id = svc.create(CreateGroup { name: name.clone(), limit: 30 }).await?;

        let detail = svc.get_by_id(id).await?;
        assert_eq!(detail.name, name);
        assert_eq!(detail.limit, 30);

        let dup = svc.create(CreateGroup { name: name.clone(), limit: 5 }).await;
        assert!(dup.is_err());

        let renamed = format!("svc_group_{}", Uuid::new_v4());
        svc.update(id, UpdateGroup { name: renamed.clone(), limit: 25 }).await?;
        assert_eq!(svc.get_by_id(id).await?.limit, 25);

        svc.delete(id).await?;
        assert!(svc.get_by_id(id).await.is_err());

        // the name is reusable once the original is soft-deleted
        let id2 = svc.create(CreateGroup { name: renamed, limit: 10 }).await?;
        svc.delete(id2).await?;
        Ok(())
    }
}
