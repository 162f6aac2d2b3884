//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates business rules from data access behind per-entity repositories.
//! - Reuses validation and entity definitions in the `models` crate.
//! - Provides clear error types and documented interfaces.

pub mod errors;
pub mod group;
pub mod pagination;
pub mod student;
#[cfg(test)]
pub mod test_support;
