pub mod achievements;
pub mod config;
pub mod error;
pub mod leaderboard;
pub mod metrics;
pub mod middleware;
pub mod mocks;
pub mod practice;
pub mod router;
pub mod state;
pub mod tracing;
pub mod user;
pub mod validation;

pub use config::ApiConfig;
pub use error::ApiError;
pub use state::ApiState;
