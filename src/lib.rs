pub mod batch;
pub mod cli;
pub mod dispatch;
pub mod error;
pub mod message;
pub mod training;
pub mod types;
pub mod utils;
