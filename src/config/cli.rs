use crate::utils::error::Result;
use crate::utils::validation::{validate_date, validate_file_extensions, validate_path, Validate};
use chrono::NaiveDate;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "fresh-lunch")]
#[command(about = "List the lunches that can be cooked from ingredients still in date")]
pub struct CliConfig {
    #[arg(long, default_value = "data", help = "Directory holding the catalog files")]
    pub data_dir: String,

    #[arg(long, default_value = "ingredients.json")]
    pub ingredients: String,

    #[arg(long, default_value = "recipes.json")]
    pub recipes: String,

    #[arg(long, help = "Query date (YYYY-MM-DD), defaults to today")]
    pub date: Option<String>,

    #[arg(long, help = "Print lunches with their ingredients instead of recipes")]
    pub lunches: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn query_date(&self) -> Result<NaiveDate> {
        match &self.date {
            Some(date) => validate_date(date, "date"),
            None => Ok(chrono::Local::now().date_naive()),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("data_dir", &self.data_dir)?;
        validate_path("ingredients", &self.ingredients)?;
        validate_path("recipes", &self.recipes)?;
        validate_file_extensions(
            "catalog",
            &[self.ingredients.as_str(), self.recipes.as_str()],
            &["json"],
        )?;
        self.query_date()?;
        Ok(())
    }
}
