use crate::domain::{Ingredient, Recipe};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Source of catalog records.
///
/// `source` is an opaque locator, a file name for the file-system loader.
/// Implementations report a missing source as `NotFoundError` and malformed
/// or mis-shaped data as `DataError`; per-record `ValidationError`s are
/// passed through untouched.
#[async_trait]
pub trait DataLoader: Send + Sync {
    async fn load_ingredients(&self, source: &str) -> Result<Vec<Ingredient>>;
    async fn load_recipes(&self, source: &str) -> Result<Vec<Recipe>>;
}
