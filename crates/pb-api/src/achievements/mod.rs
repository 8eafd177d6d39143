pub mod catalog;
pub mod evaluator;
pub mod routes;

pub use routes::routes;
