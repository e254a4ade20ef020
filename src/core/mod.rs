pub mod catalog;
pub mod query;

pub use crate::domain::ports::DataLoader;
pub use crate::utils::error::Result;
pub use catalog::Catalog;
