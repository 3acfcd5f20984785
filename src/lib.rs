pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use crate::config::{CliConfig, ServerConfig};
pub use crate::core::{age::AgeCalculator, compatibility::CompatibilityCalculator};
pub use crate::server::{create_router, AppState};
pub use crate::utils::error::{AgeError, Result};
