pub mod achievement;
pub mod mock;
pub mod progress;
pub mod user;
