pub mod schema;
pub mod surrealdb;
