use crate::core::query;
use crate::domain::{DataLoader, Ingredient, Lunch, Recipe};
use crate::utils::error::{LunchError, Result};
use chrono::NaiveDate;
use std::sync::Arc;

/// Owns the ingredient, recipe and lunch collections and answers freshness
/// queries over them.
///
/// A catalog is meant to be built for one query: load ingredients and
/// recipes, assemble lunches, then query. Each collection starts unset and
/// the operations that need one fail with a `ConfigurationError` until it is
/// populated. Query methods take an optional working set; `None` means the
/// catalog's own collection.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    ingredients: Option<Vec<Arc<Ingredient>>>,
    recipes: Option<Vec<Arc<Recipe>>>,
    lunches: Option<Vec<Lunch>>,
}

impl Catalog {
    pub fn new(ingredients: Vec<Ingredient>, recipes: Vec<Recipe>) -> Self {
        let mut catalog = Self::default();
        catalog.set_ingredients(ingredients).set_recipes(recipes);
        catalog
    }

    /// Replaces the ingredients. Previously assembled lunches are dropped
    /// since they point at the old set.
    pub fn set_ingredients(&mut self, ingredients: Vec<Ingredient>) -> &mut Self {
        self.ingredients = Some(ingredients.into_iter().map(Arc::new).collect());
        self.lunches = None;
        self
    }

    /// Replaces the recipes and drops previously assembled lunches.
    pub fn set_recipes(&mut self, recipes: Vec<Recipe>) -> &mut Self {
        self.recipes = Some(recipes.into_iter().map(Arc::new).collect());
        self.lunches = None;
        self
    }

    pub async fn load_ingredients(
        &mut self,
        loader: &dyn DataLoader,
        source: &str,
    ) -> Result<&mut Self> {
        let ingredients = loader.load_ingredients(source).await?;
        tracing::info!("Loaded {} ingredients from {}", ingredients.len(), source);
        Ok(self.set_ingredients(ingredients))
    }

    pub async fn load_recipes(&mut self, loader: &dyn DataLoader, source: &str) -> Result<&mut Self> {
        let recipes = loader.load_recipes(source).await?;
        tracing::info!("Loaded {} recipes from {}", recipes.len(), source);
        Ok(self.set_recipes(recipes))
    }

    pub fn ingredients(&self) -> Result<&[Arc<Ingredient>]> {
        self.ingredients
            .as_deref()
            .ok_or_else(|| LunchError::configuration("Ingredients have not been loaded"))
    }

    pub fn recipes(&self) -> Result<&[Arc<Recipe>]> {
        self.recipes
            .as_deref()
            .ok_or_else(|| LunchError::configuration("Recipes have not been loaded"))
    }

    pub fn lunches(&self) -> Result<&[Lunch]> {
        self.lunches
            .as_deref()
            .ok_or_else(|| LunchError::configuration("Lunches have not been assembled"))
    }

    /// Builds one lunch per recipe, in recipe order, from the catalog's own
    /// recipes and ingredients.
    pub fn assemble_lunches(&mut self) -> Result<&[Lunch]> {
        let recipes = self
            .recipes
            .as_deref()
            .ok_or_else(|| LunchError::configuration("Recipes required to assemble lunches"))?;
        let ingredients = self
            .ingredients
            .as_deref()
            .ok_or_else(|| LunchError::configuration("Ingredients required to assemble lunches"))?;

        let lunches = assemble(recipes, ingredients);
        Ok(self.lunches.insert(lunches).as_slice())
    }

    /// Like [`Catalog::assemble_lunches`] but joins explicitly supplied
    /// collections. The catalog's own ingredients and recipes are untouched.
    pub fn assemble_lunches_from(
        &mut self,
        recipes: &[Arc<Recipe>],
        ingredients: &[Arc<Ingredient>],
    ) -> &[Lunch] {
        let lunches = assemble(recipes, ingredients);
        self.lunches.insert(lunches).as_slice()
    }

    pub fn filter_ingredients_by_date(
        &self,
        date: NaiveDate,
        ingredients: Option<&[Arc<Ingredient>]>,
    ) -> Result<Vec<Arc<Ingredient>>> {
        let ingredients = self.or_own_ingredients(ingredients)?;
        let kept = query::filter_ingredients_by_date(ingredients, date);
        tracing::debug!(
            "{} of {} ingredients usable on {}",
            kept.len(),
            ingredients.len(),
            date
        );
        Ok(kept)
    }

    pub fn filter_recipes_by_ingredients(
        &self,
        ingredients: Option<&[Arc<Ingredient>]>,
    ) -> Result<Vec<Arc<Recipe>>> {
        let ingredients = self.or_own_ingredients(ingredients)?;
        Ok(query::filter_recipes_by_ingredients(self.recipes()?, ingredients))
    }

    pub fn filter_lunches_by_ingredients(
        &self,
        ingredients: Option<&[Arc<Ingredient>]>,
    ) -> Result<Vec<Lunch>> {
        let ingredients = self.or_own_ingredients(ingredients)?;
        let lunches = self.lunches()?;
        let kept = query::filter_lunches_by_ingredients(lunches, ingredients);
        tracing::debug!("{} of {} lunches can be made", kept.len(), lunches.len());
        Ok(kept)
    }

    pub fn sort_ingredients_by_freshness(
        &self,
        ingredients: Option<&[Arc<Ingredient>]>,
    ) -> Result<Vec<Arc<Ingredient>>> {
        let ingredients = self.or_own_ingredients(ingredients)?;
        Ok(query::sort_ingredients_by_freshness(ingredients))
    }

    pub fn sort_lunches_by_freshness(&self, lunches: Option<&[Lunch]>) -> Result<Vec<Lunch>> {
        let lunches = match lunches {
            Some(lunches) => lunches,
            None => self.lunches()?,
        };
        Ok(query::sort_lunches_by_freshness(lunches))
    }

    /// Lunches that can be made entirely from ingredients usable on `date`,
    /// freshest first.
    pub fn lunches_eligible_on(&self, date: NaiveDate) -> Result<Vec<Lunch>> {
        let fresh = self.filter_ingredients_by_date(date, None)?;
        let eligible = self.filter_lunches_by_ingredients(Some(fresh.as_slice()))?;
        self.sort_lunches_by_freshness(Some(eligible.as_slice()))
    }

    /// Recipes of [`Catalog::lunches_eligible_on`], in the same order.
    pub fn recipes_eligible_on(&self, date: NaiveDate) -> Result<Vec<Arc<Recipe>>> {
        let lunches = self.lunches_eligible_on(date)?;
        Ok(query::recipes_of(&lunches))
    }

    fn or_own_ingredients<'a>(
        &'a self,
        ingredients: Option<&'a [Arc<Ingredient>]>,
    ) -> Result<&'a [Arc<Ingredient>]> {
        match ingredients {
            Some(ingredients) => Ok(ingredients),
            None => self.ingredients(),
        }
    }
}

fn assemble(recipes: &[Arc<Recipe>], ingredients: &[Arc<Ingredient>]) -> Vec<Lunch> {
    let lunches: Vec<Lunch> = recipes
        .iter()
        .map(|recipe| {
            let lunch = Lunch::assemble(Arc::clone(recipe), ingredients);
            let missing: Vec<&str> = {
                let available = lunch.ingredient_names();
                recipe
                    .required_ingredient_names
                    .iter()
                    .map(String::as_str)
                    .filter(|name| !available.contains(name))
                    .collect()
            };
            if !missing.is_empty() {
                tracing::warn!(
                    "Recipe '{}' requires ingredients not in the catalog: {}",
                    recipe.name,
                    missing.join(", ")
                );
            }
            lunch
        })
        .collect();

    tracing::info!(
        "Assembled {} lunches from {} ingredients",
        lunches.len(),
        ingredients.len()
    );
    lunches
}
