//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates business logic from data access.
//! - Reuses validation and entity definitions in `models` crate.
//! - Provides clear error types and documented interfaces.

pub mod errors;
pub mod auth;
pub mod crud;
pub mod pagination;
pub mod resources;
#[cfg(test)]
pub mod test_support;

pub use crud::{CrudRepository, CrudService, Resource, SeaOrmCrudRepository};
