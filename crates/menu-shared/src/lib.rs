//! # Menu Shared
//! 
//! Shared configuration, constants, URL helpers, and telemetry for the menu builder.

pub mod constants;
pub mod types;
pub mod utils;
pub mod telemetry;
pub mod config;
pub mod error;

pub use types::*;
pub use error::AppError;
