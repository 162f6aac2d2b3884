use std::sync::Arc;

use chrono::Utc;
use tracing::{info, instrument};
use uuid::Uuid;

use models::student;

use crate::errors::ServiceError;
use crate::pagination::PageRequest;
use crate::student::domain::{CreateStudent, StudentDetail, StudentSummary, UpdateStudent};
use crate::student::repository::StudentRepository;

/// Business service for student management.
///
/// Enforces email uniqueness among live students; deletion is unconditional
/// (students hold no inbound references).
pub struct StudentService<R: StudentRepository> {
    repo: Arc<R>,
}

impl<R: StudentRepository> StudentService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Create a student and return the generated id.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::student::{StudentService, domain::CreateStudent, repository::mock::MockStudentRepository};
    /// let svc = StudentService::new(Arc::new(MockStudentRepository::default()));
    /// let input = CreateStudent {
    ///     first_name: "Ada".into(),
    ///     last_name: "Lovelace".into(),
    ///     email: "ada@example.com".into(),
    ///     phone: None,
    ///     address: None,
    ///     birth_date: chrono::NaiveDate::from_ymd_opt(2001, 7, 14).unwrap(),
    ///     group_id: None,
    /// };
    /// let id = tokio_test::block_on(svc.create(input)).unwrap();
    /// assert!(!id.is_nil());
    /// ```
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn create(&self, input: CreateStudent) -> Result<Uuid, ServiceError> {
        student::validate_name(&input.first_name)?;
        student::validate_name(&input.last_name)?;
        student::validate_email(&input.email)?;
        if self.repo.exists_by_email(&input.email).await? {
            return Err(ServiceError::validation("Email", "duplicate email"));
        }

        let now = Utc::now().into();
        let entity = student::Model {
            id: Uuid::new_v4(),
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            phone: input.phone,
            address: input.address,
            birth_date: input.birth_date,
            group_id: input.group_id,
            created_at: now,
            updated_at: now,
            is_deleted: false,
        };
        let created = self.repo.add(entity).await?;
        info!(student_id = %created.id, "student_created");
        Ok(created.id)
    }

    /// One page of live students in repository order.
    pub async fn get_all(&self, page: PageRequest) -> Result<Vec<StudentSummary>, ServiceError> {
        let (page_idx, per_page) = page.to_offsets()?;
        let students = self.repo.get_page(page_idx, per_page).await?;
        Ok(students.into_iter().map(StudentSummary::from).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<StudentDetail, ServiceError> {
        let found = self
            .repo
            .get(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("student"))?;
        Ok(found.into())
    }

    /// Overwrite all mutable fields, re-validating email uniqueness.
    /// Keeping the current email is always allowed.
    #[instrument(skip(self, input), fields(student_id = %id))]
    pub async fn update(&self, id: Uuid, input: UpdateStudent) -> Result<(), ServiceError> {
        let mut entity = self
            .repo
            .get(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("student"))?;

        student::validate_name(&input.first_name)?;
        student::validate_name(&input.last_name)?;
        student::validate_email(&input.email)?;
        if entity.email != input.email && self.repo.exists_by_email(&input.email).await? {
            return Err(ServiceError::validation("Email", "duplicate email"));
        }

        entity.first_name = input.first_name;
        entity.last_name = input.last_name;
        entity.email = input.email;
        entity.phone = input.phone;
        entity.address = input.address;
        entity.birth_date = input.birth_date;
        entity.group_id = input.group_id;
        entity.touch();
        self.repo.save(entity).await?;
        info!(student_id = %id, "student_updated");
        Ok(())
    }

    /// Soft-delete; no referential guard, unlike groups.
    #[instrument(skip(self), fields(student_id = %id))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        let mut entity = self
            .repo
            .get(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("student"))?;

        entity.soft_delete();
        self.repo.save(entity).await?;
        info!(student_id = %id, "student_deleted");
        Ok(())
    }
}
