//! Auth module: three-layer architecture (domain, repository, service).
//!
//! Customer login lives here; password hashing is shared with the customer resource.

pub mod domain;
pub mod errors;
pub mod password;
pub mod repository;
pub mod service;
pub mod repo;

pub use service::AuthService;
