//! Generic CRUD plumbing shared by every rental entity.
//!
//! An entity plugs in by implementing [`Resource`]; the same repository,
//! service, controllers and route table are then instantiated for it.

pub mod resource;
pub mod repository;
pub mod service;

pub use repository::{CrudRepository, SeaOrmCrudRepository};
pub use resource::Resource;
pub use service::CrudService;
