use async_trait::async_trait;
use uuid::Uuid;

use models::student;

use crate::errors::ServiceError;

/// Repository abstraction for student persistence. Read methods only ever
/// surface live rows; soft-deleted students are invisible through this trait.
#[async_trait]
pub trait StudentRepository: Send + Sync {
    async fn exists_by_email(&self, email: &str) -> Result<bool, ServiceError>;
    async fn get(&self, id: Uuid) -> Result<Option<student::Model>, ServiceError>;
    async fn get_page(&self, page_idx: u64, per_page: u64) -> Result<Vec<student::Model>, ServiceError>;
    async fn add(&self, entity: student::Model) -> Result<student::Model, ServiceError>;
    async fn save(&self, entity: student::Model) -> Result<student::Model, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockStudentRepository {
        students: Mutex<HashMap<Uuid, student::Model>>,
    }

    #[async_trait]
    impl StudentRepository for MockStudentRepository {
        async fn exists_by_email(&self, email: &str) -> Result<bool, ServiceError> {
            let students = self.students.lock().unwrap();
            Ok(students.values().any(|s| !s.is_deleted && s.email == email))
        }

        async fn get(&self, id: Uuid) -> Result<Option<student::Model>, ServiceError> {
            let students = self.students.lock().unwrap();
            Ok(students.get(&id).filter(|s| !s.is_deleted).cloned())
        }

        async fn get_page(&self, page_idx: u64, per_page: u64) -> Result<Vec<student::Model>, ServiceError> {
            let students = self.students.lock().unwrap();
            let mut live: Vec<_> = students.values().filter(|s| !s.is_deleted).cloned().collect();
            live.sort_by_key(|s| s.created_at);
            Ok(live
                .into_iter()
                .skip((page_idx * per_page) as usize)
                .take(per_page as usize)
                .collect())
        }

        async fn add(&self, entity: student::Model) -> Result<student::Model, ServiceError> {
            let mut students = self.students.lock().unwrap();
            students.insert(entity.id, entity.clone());
            Ok(entity)
        }

        async fn save(&self, entity: student::Model) -> Result<student::Model, ServiceError> {
            let mut students = self.students.lock().unwrap();
            students.insert(entity.id, entity.clone());
            Ok(entity)
        }
    }
}
