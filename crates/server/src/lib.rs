pub mod errors;
pub mod routes;
pub mod startup;

pub use routes::auth::ServerState;
pub use startup::run;
