use std::sync::Arc;

use chrono::Utc;
use tracing::{info, instrument};
use uuid::Uuid;

use models::group;

use crate::errors::ServiceError;
use crate::group::domain::{CreateGroup, GroupDetail, GroupSummary, UpdateGroup};
use crate::group::repository::GroupRepository;
use crate::pagination::PageRequest;

/// Business service for group management.
///
/// Enforces name uniqueness among live groups, the capacity rule against the
/// live student count, and the has-students guard on delete.
pub struct GroupService<R: GroupRepository> {
    repo: Arc<R>,
}

impl<R: GroupRepository> GroupService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Create a group and return its generated id.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::group::{GroupService, domain::CreateGroup, repository::mock::MockGroupRepository};
    /// let svc = GroupService::new(Arc::new(MockGroupRepository::default()));
    /// let id = tokio_test::block_on(svc.create(CreateGroup { name: "PB_101".into(), limit: 25 })).unwrap();
    /// assert!(!id.is_nil());
    /// ```
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: CreateGroup) -> Result<Uuid, ServiceError> {
        group::validate_name(&input.name)?;
        if self.repo.exists_by_name(&input.name).await? {
            return Err(ServiceError::validation("Name", "duplicate name"));
        }

        let now = Utc::now().into();
        let entity = group::Model {
            id: Uuid::new_v4(),
            name: input.name,
            limit: input.limit,
            created_at: now,
            updated_at: now,
            is_deleted: false,
        };
        let created = self.repo.add(entity).await?;
        info!(group_id = %created.id, "group_created");
        Ok(created.id)
    }

    /// One page of live groups in repository order.
    pub async fn get_all(&self, page: PageRequest) -> Result<Vec<GroupSummary>, ServiceError> {
        let (page_idx, per_page) = page.to_offsets()?;
        let groups = self.repo.get_page(page_idx, per_page).await?;
        Ok(groups.into_iter().map(GroupSummary::from).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<GroupDetail, ServiceError> {
        let found = self
            .repo
            .get(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("group"))?;
        Ok(found.into())
    }

    /// Overwrite name and limit, re-validating uniqueness and capacity.
    /// Keeping the current name is always allowed.
    #[instrument(skip(self, input), fields(group_id = %id))]
    pub async fn update(&self, id: Uuid, input: UpdateGroup) -> Result<(), ServiceError> {
        let mut entity = self
            .repo
            .get(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("group"))?;

        group::validate_name(&input.name)?;
        if entity.name != input.name && self.repo.exists_by_name(&input.name).await? {
            return Err(ServiceError::validation("Name", "duplicate name"));
        }

        let students = self.repo.live_student_count(id).await?;
        if (input.limit as i64) < students as i64 {
            return Err(ServiceError::validation("Limit", "limit overflow"));
        }

        entity.name = input.name;
        entity.limit = input.limit;
        entity.touch();
        self.repo.save(entity).await?;
        info!(group_id = %id, "group_updated");
        Ok(())
    }

    /// Soft-delete; refused while any live student still references the group.
    #[instrument(skip(self), fields(group_id = %id))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        let mut entity = self
            .repo
            .get(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("group"))?;

        if self.repo.live_student_count(id).await? > 0 {
            return Err(ServiceError::validation("Group", "group has students"));
        }

        entity.soft_delete();
        self.repo.save(entity).await?;
        info!(group_id = %id, "group_deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::repository::mock::MockGroupRepository;

    fn service() -> (Arc<MockGroupRepository>, GroupService<MockGroupRepository>) {
        let repo = Arc::new(MockGroupRepository::default());
        (Arc::clone(&repo), GroupService::new(repo.clone()))
    }

    #[tokio::test]
    async fn create_rejects_duplicate_name_until_soft_deleted() {
        let (_repo, svc) = service();
        let first = svc.create(CreateGroup { name: "A".into(), limit: 10 }).await.unwrap();

        let err = svc.create(CreateGroup { name: "A".into(), limit: 10 }).await.unwrap_err();
        assert_eq!(err.field(), Some("Name"));

        // soft delete frees the name for reuse
        svc.delete(first).await.unwrap();
        svc.create(CreateGroup { name: "A".into(), limit: 10 }).await.unwrap();
    }

    #[tokio::test]
    async fn get_all_rejects_non_positive_paging() {
        let (_repo, svc) = service();
        assert!(svc.get_all(PageRequest::new(0, 10)).await.is_err());
        assert!(svc.get_all(PageRequest::new(1, 0)).await.is_err());
        assert!(svc.get_all(PageRequest::new(-3, -1)).await.is_err());
    }

    #[tokio::test]
    async fn get_all_pages_live_groups() {
        let (_repo, svc) = service();
        for i in 0..5 {
            svc.create(CreateGroup { name: format!("G{i}"), limit: 10 }).await.unwrap();
        }
        let page1 = svc.get_all(PageRequest::new(1, 2)).await.unwrap();
        assert_eq!(page1.len(), 2);
        let page3 = svc.get_all(PageRequest::new(3, 2)).await.unwrap();
        assert_eq!(page3.len(), 1);
    }

    #[tokio::test]
    async fn update_enforces_uniqueness_and_capacity() {
        let (repo, svc) = service();
        let a = svc.create(CreateGroup { name: "A".into(), limit: 10 }).await.unwrap();
        let b = svc.create(CreateGroup { name: "B".into(), limit: 10 }).await.unwrap();

        // renaming onto another live group's name is refused
        let err = svc.update(b, UpdateGroup { name: "A".into(), limit: 10 }).await.unwrap_err();
        assert_eq!(err.field(), Some("Name"));
        // keeping the current name passes the uniqueness check
        svc.update(a, UpdateGroup { name: "A".into(), limit: 8 }).await.unwrap();
        assert_eq!(svc.get_by_id(a).await.unwrap().limit, 8);

        repo.set_student_count(a, 3);
        let err = svc.update(a, UpdateGroup { name: "A".into(), limit: 2 }).await.unwrap_err();
        assert_eq!(err.field(), Some("Limit"));
        // limit equal to the live count is allowed
        svc.update(a, UpdateGroup { name: "A".into(), limit: 3 }).await.unwrap();
    }

    #[tokio::test]
    async fn delete_blocked_while_students_reference_group() {
        let (repo, svc) = service();
        let id = svc.create(CreateGroup { name: "A".into(), limit: 10 }).await.unwrap();

        repo.set_student_count(id, 1);
        let err = svc.delete(id).await.unwrap_err();
        assert_eq!(err.field(), Some("Group"));

        repo.set_student_count(id, 0);
        svc.delete(id).await.unwrap();
        assert!(matches!(svc.get_by_id(id).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn missing_ids_are_not_found() {
        let (_repo, svc) = service();
        let id = Uuid::new_v4();
        assert!(matches!(svc.get_by_id(id).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(
            svc.update(id, UpdateGroup { name: "X".into(), limit: 1 }).await,
            Err(ServiceError::NotFound(_))
        ));
        assert!(matches!(svc.delete(id).await, Err(ServiceError::NotFound(_))));
    }
}
