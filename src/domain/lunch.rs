use crate::domain::ingredient::Ingredient;
use crate::domain::recipe::Recipe;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;

/// A recipe paired with the catalog ingredients it names.
///
/// Recipe and ingredients are shared with the owning catalog, not copied.
/// `freshness_date` is the use-by date of the least fresh matched
/// ingredient, or `None` when nothing in the catalog matched.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lunch {
    pub recipe: Arc<Recipe>,
    pub ingredients: Vec<Arc<Ingredient>>,
    pub freshness_date: Option<NaiveDate>,
}

impl Lunch {
    pub fn new(recipe: Arc<Recipe>, ingredients: Vec<Arc<Ingredient>>) -> Self {
        let freshness_date = least_fresh(&ingredients).map(|ingredient| ingredient.use_by);

        Self {
            recipe,
            ingredients,
            freshness_date,
        }
    }

    /// Joins `recipe` to every catalog ingredient whose name it requires.
    /// Required names absent from the catalog are skipped. Catalog order is kept.
    pub fn assemble(recipe: Arc<Recipe>, catalog: &[Arc<Ingredient>]) -> Self {
        let required: HashSet<&str> = recipe
            .required_ingredient_names
            .iter()
            .map(String::as_str)
            .collect();

        let matched: Vec<Arc<Ingredient>> = catalog
            .iter()
            .filter(|ingredient| required.contains(ingredient.name.as_str()))
            .cloned()
            .collect();

        Self::new(recipe, matched)
    }

    /// Earliest best-before wins, use-by breaks ties, then catalog order.
    pub fn least_fresh_ingredient(&self) -> Option<&Arc<Ingredient>> {
        least_fresh(&self.ingredients)
    }

    pub fn ingredient_names(&self) -> HashSet<&str> {
        self.ingredients
            .iter()
            .map(|ingredient| ingredient.name.as_str())
            .collect()
    }

    /// True when every matched ingredient of this lunch is in `available`.
    pub fn covered_by(&self, available: &HashSet<&str>) -> bool {
        self.ingredients
            .iter()
            .all(|ingredient| available.contains(ingredient.name.as_str()))
    }
}

fn least_fresh(ingredients: &[Arc<Ingredient>]) -> Option<&Arc<Ingredient>> {
    ingredients
        .iter()
        .min_by_key(|ingredient| (ingredient.best_before, ingredient.use_by))
}
