use crate::utils::error::{LunchError, Result};
use crate::utils::validation::validate_date;
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{Map, Value};

/// A perishable item with a freshness window.
///
/// Both dates are validated on construction. No ordering between them is
/// enforced: an ingredient may have a best-before later than its use-by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub name: String,
    pub best_before: NaiveDate,
    pub use_by: NaiveDate,
}

impl Ingredient {
    /// Builds an ingredient from `YYYY-MM-DD` date strings.
    pub fn new(name: impl Into<String>, best_before: &str, use_by: &str) -> Result<Self> {
        Ok(Self {
            name: name.into(),
            best_before: validate_date(best_before, "best_before")?,
            use_by: validate_date(use_by, "use_by")?,
        })
    }

    /// Builds an ingredient from a catalog record shaped like
    /// `{"title": .., "best-before": .., "use-by": ..}`.
    pub fn from_value(record: &Value) -> Result<Self> {
        let object = record
            .as_object()
            .ok_or_else(|| LunchError::validation("ingredient record is not an object"))?;

        let title = string_field(object, "title")?;
        let best_before = string_field(object, "best-before")?;
        let use_by = string_field(object, "use-by")?;

        Self::new(title, best_before, use_by)
    }

    /// True while `date` is on or before the use-by date.
    pub fn is_within_use_by_date(&self, date: NaiveDate) -> bool {
        date <= self.use_by
    }

    /// True while `date` is on or before the best-before date.
    pub fn is_within_best_before_date(&self, date: NaiveDate) -> bool {
        date <= self.best_before
    }
}

fn string_field<'a>(object: &'a Map<String, Value>, key: &str) -> Result<&'a str> {
    object
        .get(key)
        .ok_or_else(|| LunchError::validation(format!("{} missing", key)))?
        .as_str()
        .ok_or_else(|| LunchError::validation(format!("{} not a string", key)))
}
