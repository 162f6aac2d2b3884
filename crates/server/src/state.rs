use std::sync::Arc;

use service::group::repo::seaorm::SeaOrmGroupRepository;
use service::group::GroupService;
use service::student::repo::seaorm::SeaOrmStudentRepository;
use service::student::StudentService;

/// Shared handler state: the two business services over SeaORM repositories.
#[derive(Clone)]
pub struct ServerState {
    pub groups: Arc<GroupService<SeaOrmGroupRepository>>,
    pub students: Arc<StudentService<SeaOrmStudentRepository>>,
}
