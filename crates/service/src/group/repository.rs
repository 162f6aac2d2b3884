use async_trait::async_trait;
use uuid::Uuid;

use models::group;

use crate::errors::ServiceError;

/// Repository abstraction for group persistence. Read methods only ever
/// surface live rows; soft-deleted groups are invisible through this trait.
#[async_trait]
pub trait GroupRepository: Send + Sync {
    async fn exists_by_name(&self, name: &str) -> Result<bool, ServiceError>;
    async fn get(&self, id: Uuid) -> Result<Option<group::Model>, ServiceError>;
    async fn get_page(&self, page_idx: u64, per_page: u64) -> Result<Vec<group::Model>, ServiceError>;
    async fn add(&self, entity: group::Model) -> Result<group::Model, ServiceError>;
    async fn save(&self, entity: group::Model) -> Result<group::Model, ServiceError>;
    /// Live students currently referencing the group.
    async fn live_student_count(&self, group_id: Uuid) -> Result<u64, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockGroupRepository {
        groups: Mutex<HashMap<Uuid, group::Model>>,
        student_counts: Mutex<HashMap<Uuid, u64>>, // key: group id
    }

    impl MockGroupRepository {
        /// Pretend `count` live students reference `group_id`.
        pub fn set_student_count(&self, group_id: Uuid, count: u64) {
            self.student_counts.lock().unwrap().insert(group_id, count);
        }
    }

    #[async_trait]
    impl GroupRepository for MockGroupRepository {
        async fn exists_by_name(&self, name: &str) -> Result<bool, ServiceError> {
            let groups = self.groups.lock().unwrap();
            Ok(groups.values().any(|g| !g.is_deleted && g.name == name))
        }

        async fn get(&self, id: Uuid) -> Result<Option<group::Model>, ServiceError> {
            let groups = self.groups.lock().unwrap();
            Ok(groups.get(&id).filter(|g| !g.is_deleted).cloned())
        }

        async fn get_page(&self, page_idx: u64, per_page: u64) -> Result<Vec<group::Model>, ServiceError> {
            let groups = self.groups.lock().unwrap();
            let mut live: Vec<_> = groups.values().filter(|g| !g.is_deleted).cloned().collect();
            live.sort_by_key(|g| g.created_at);
            Ok(live
                .into_iter()
                .skip((page_idx * per_page) as usize)
                .take(per_page as usize)
                .collect())
        }

        async fn add(&self, entity: group::Model) -> Result<group::Model, ServiceError> {
            let mut groups = self.groups.lock().unwrap();
            groups.insert(entity.id, entity.clone());
            Ok(entity)
        }

        async fn save(&self, entity: group::Model) -> Result<group::Model, ServiceError> {
            let mut groups = self.groups.lock().unwrap();
            groups.insert(entity.id, entity.clone());
            Ok(entity)
        }

        async fn live_student_count(&self, group_id: Uuid) -> Result<u64, ServiceError> {
            let counts = self.student_counts.lock().unwrap();
            Ok(counts.get(&group_id).copied().unwrap_or(0))
        }
    }
}
