pub mod connection;
pub mod migrations;
pub mod plan_repo;
pub mod recipe_repo;
pub mod store;

pub use connection::*;
pub use store::*;
