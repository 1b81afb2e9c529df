//! SeaORM entities for the rental schema plus connection helpers.

pub mod errors;
pub mod db;
pub mod customer;
pub mod location;
pub mod car;
pub mod booking;
pub mod reservation;
pub mod insurance;
pub mod maintenance;
pub mod payment;

#[cfg(test)]
mod tests;
