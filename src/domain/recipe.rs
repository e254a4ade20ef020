use crate::utils::error::{LunchError, Result};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashSet;

/// A named list of required ingredient names. Quantities are not modelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub name: String,
    pub required_ingredient_names: Vec<String>,
}

impl Recipe {
    pub fn new<I, S>(name: impl Into<String>, required_ingredient_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            required_ingredient_names: required_ingredient_names
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }

    /// Builds a recipe from a catalog record shaped like
    /// `{"title": .., "ingredients": [..]}`.
    pub fn from_value(record: &Value) -> Result<Self> {
        let object = record
            .as_object()
            .ok_or_else(|| LunchError::validation("recipe record is not an object"))?;

        let title = object
            .get("title")
            .ok_or_else(|| LunchError::validation("title missing"))?
            .as_str()
            .ok_or_else(|| LunchError::validation("title not a string"))?;

        let ingredients = object
            .get("ingredients")
            .ok_or_else(|| LunchError::validation("ingredients missing"))?
            .as_array()
            .ok_or_else(|| LunchError::validation("ingredients not an array"))?;

        let names = ingredients
            .iter()
            .map(|name| {
                name.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| LunchError::validation("ingredients must contain only strings"))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(title, names))
    }

    /// True when every required name is in `available`. Extra available
    /// names are ignored and repeated required names count once.
    pub fn covered_by(&self, available: &HashSet<&str>) -> bool {
        self.required_ingredient_names
            .iter()
            .all(|name| available.contains(name.as_str()))
    }
}
