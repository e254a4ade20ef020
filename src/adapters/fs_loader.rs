use crate::domain::{DataLoader, Ingredient, Recipe};
use crate::utils::error::{LunchError, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Reads catalog JSON documents from a directory.
#[derive(Debug, Clone)]
pub struct FileSystemLoader {
    base_path: PathBuf,
}

impl FileSystemLoader {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    pub async fn read_file(&self, source: &str) -> Result<String> {
        let full_path = self.base_path.join(source);
        tracing::debug!("Reading {}", full_path.display());

        match tokio::fs::read_to_string(&full_path).await {
            Ok(contents) => Ok(contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(LunchError::not_found(full_path.display().to_string()))
            }
            Err(e) => Err(LunchError::IoError(e)),
        }
    }

    pub async fn read_json(&self, source: &str) -> Result<Value> {
        let contents = self.read_file(source).await?;
        parse_json(source, &contents)
    }

    /// Returns the array stored under `key` in the document at `source`.
    async fn read_records(&self, source: &str, key: &str) -> Result<Vec<Value>> {
        let mut document = self.read_json(source).await?;

        match document.get_mut(key).map(Value::take) {
            None => Err(LunchError::data(format!("{} property missing", key))),
            Some(Value::Array(records)) => Ok(records),
            Some(_) => Err(LunchError::data(format!("{} property is not an array", key))),
        }
    }
}

pub fn parse_json(source: &str, contents: &str) -> Result<Value> {
    serde_json::from_str(contents)
        .map_err(|e| LunchError::data(format!("Malformed JSON in {}: {}", source, e)))
}

#[async_trait]
impl DataLoader for FileSystemLoader {
    async fn load_ingredients(&self, source: &str) -> Result<Vec<Ingredient>> {
        self.read_records(source, "ingredients")
            .await?
            .iter()
            .map(Ingredient::from_value)
            .collect()
    }

    async fn load_recipes(&self, source: &str) -> Result<Vec<Recipe>> {
        self.read_records(source, "recipes")
            .await?
            .iter()
            .map(Recipe::from_value)
            .collect()
    }
}
