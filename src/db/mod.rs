pub mod cities;
pub mod connection;
pub mod favorites;
pub mod neighborhoods;
pub mod properties;
pub mod reviews;
pub mod rows;
pub mod users;

pub use connection::{init_db, Database};
