pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::ServerConfig;

pub use adapters::FileSystemLoader;
pub use core::Catalog;
pub use domain::{DataLoader, Ingredient, Lunch, Recipe};
pub use utils::error::{LunchError, Result};
