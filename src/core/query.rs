//! Pure filter, sort and projection stages of the freshness query.
//!
//! Every stage takes a slice and returns a new `Vec`, so stages can be run
//! on their own or chained by the caller. Order is always preserved apart
//! from the explicit sorts, which are stable.

use crate::domain::{Ingredient, Lunch, Recipe};
use chrono::NaiveDate;
use std::collections::HashSet;
use std::sync::Arc;

/// Name lookup table used for the membership tests below.
pub fn ingredient_names(ingredients: &[Arc<Ingredient>]) -> HashSet<&str> {
    ingredients
        .iter()
        .map(|ingredient| ingredient.name.as_str())
        .collect()
}

/// Ingredients still usable on `date`.
pub fn filter_ingredients_by_date(
    ingredients: &[Arc<Ingredient>],
    date: NaiveDate,
) -> Vec<Arc<Ingredient>> {
    ingredients
        .iter()
        .filter(|ingredient| ingredient.is_within_use_by_date(date))
        .cloned()
        .collect()
}

/// Recipes whose full required list is present in `ingredients`.
pub fn filter_recipes_by_ingredients(
    recipes: &[Arc<Recipe>],
    ingredients: &[Arc<Ingredient>],
) -> Vec<Arc<Recipe>> {
    let available = ingredient_names(ingredients);

    recipes
        .iter()
        .filter(|recipe| recipe.covered_by(&available))
        .cloned()
        .collect()
}

/// Lunches whose own matched ingredients are all present in `ingredients`.
pub fn filter_lunches_by_ingredients(
    lunches: &[Lunch],
    ingredients: &[Arc<Ingredient>],
) -> Vec<Lunch> {
    let available = ingredient_names(ingredients);

    lunches
        .iter()
        .filter(|lunch| lunch.covered_by(&available))
        .cloned()
        .collect()
}

/// Latest `(best_before, use_by)` first. Equal keys keep their input order.
pub fn sort_ingredients_by_freshness(ingredients: &[Arc<Ingredient>]) -> Vec<Arc<Ingredient>> {
    let mut sorted = ingredients.to_vec();
    sorted.sort_by(|a, b| (b.best_before, b.use_by).cmp(&(a.best_before, a.use_by)));
    sorted
}

/// Latest freshness date first. Equal dates keep their input order and
/// lunches without a freshness date go last.
pub fn sort_lunches_by_freshness(lunches: &[Lunch]) -> Vec<Lunch> {
    let mut sorted = lunches.to_vec();
    sorted.sort_by(|a, b| b.freshness_date.cmp(&a.freshness_date));
    sorted
}

pub fn recipes_of(lunches: &[Lunch]) -> Vec<Arc<Recipe>> {
    lunches.iter().map(|lunch| Arc::clone(&lunch.recipe)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredient(name: &str, best_before: &str, use_by: &str) -> Arc<Ingredient> {
        Arc::new(Ingredient::new(name, best_before, use_by).unwrap())
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn names(ingredients: &[Arc<Ingredient>]) -> Vec<&str> {
        ingredients.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_filter_ingredients_keeps_use_by_day() {
        let ingredients = vec![
            ingredient("a", "2019-03-01", "2019-03-10"),
            ingredient("b", "2019-03-01", "2019-03-09"),
            ingredient("c", "2019-03-01", "2019-03-11"),
        ];

        let kept = filter_ingredients_by_date(&ingredients, date("2019-03-10"));
        assert_eq!(names(&kept), vec!["a", "c"]);
    }

    #[test]
    fn test_sort_ingredients_latest_first_and_stable() {
        let ingredients = vec![
            ingredient("old", "2019-03-06", "2019-03-07"),
            ingredient("fresh-1", "2019-03-25", "2019-03-27"),
            ingredient("mid", "2019-03-08", "2019-03-13"),
            ingredient("fresh-2", "2019-03-25", "2019-03-27"),
            ingredient("fresh-short", "2019-03-25", "2019-03-26"),
        ];

        let sorted = sort_ingredients_by_freshness(&ingredients);
        assert_eq!(
            names(&sorted),
            vec!["fresh-1", "fresh-2", "fresh-short", "mid", "old"]
        );
    }

    #[test]
    fn test_sort_lunches_stable_with_undated_last() {
        let bread = ingredient("Bread", "2019-03-25", "2019-03-27");
        let cheese = ingredient("Cheese", "2019-03-08", "2019-03-13");

        let lunches = vec![
            Lunch::new(Arc::new(Recipe::new("empty", ["Nothing"])), vec![]),
            Lunch::new(Arc::new(Recipe::new("first", ["Bread"])), vec![bread.clone()]),
            Lunch::new(Arc::new(Recipe::new("cheesy", ["Cheese"])), vec![cheese]),
            Lunch::new(Arc::new(Recipe::new("second", ["Bread"])), vec![bread]),
        ];

        let sorted: Vec<String> = sort_lunches_by_freshness(&lunches)
            .iter()
            .map(|lunch| lunch.recipe.name.clone())
            .collect();

        assert_eq!(sorted, vec!["first", "second", "cheesy", "empty"]);
    }

    #[test]
    fn test_filter_lunches_uses_matched_ingredients_only() {
        let bread = ingredient("Bread", "2019-03-25", "2019-03-27");
        // "Baked Beans" was never in the catalog, so it cannot disqualify the lunch.
        let lunch = Lunch::new(
            Arc::new(Recipe::new("Fry-up", ["Baked Beans", "Bread"])),
            vec![bread.clone()],
        );

        let kept = filter_lunches_by_ingredients(std::slice::from_ref(&lunch), &[bread]);
        assert_eq!(kept.len(), 1);

        let kept = filter_lunches_by_ingredients(&[lunch], &[]);
        assert!(kept.is_empty());
    }

    #[test]
    fn test_filter_recipes_uses_full_required_list() {
        let bread = ingredient("Bread", "2019-03-25", "2019-03-27");
        let recipes = vec![
            Arc::new(Recipe::new("Fry-up", ["Baked Beans", "Bread"])),
            Arc::new(Recipe::new("Toast", ["Bread"])),
        ];

        let kept = filter_recipes_by_ingredients(&recipes, &[bread]);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "Toast");
    }

    #[test]
    fn test_recipes_of_does_not_deduplicate() {
        let recipe = Arc::new(Recipe::new("Toast", ["Bread"]));
        let lunches = vec![
            Lunch::new(Arc::clone(&recipe), vec![]),
            Lunch::new(Arc::clone(&recipe), vec![]),
        ];

        assert_eq!(recipes_of(&lunches).len(), 2);
    }
}
