//! Recursive expansion of a recipe into raw ingredients and total cook time.
//!
//! Resolution walks the required-items tree depth first. Each sub-recipe is expanded once per
//! resolution into its per-unit cost, which is memoized and scaled by the quantity requested
//! wherever the sub-recipe appears, so shared sub-trees cost nothing extra. Sub-recipes are never
//! counted as units themselves; only raw ingredients reach the summary. Any dangling reference,
//! cycle, or overflow aborts the whole resolution.

use std::collections::HashMap;

use super::registry::EntryRegistry;
use super::types::{CookbookError, Entry, IngredientQuantity, Recipe, Summary};

/// Default bound on recipe nesting.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Resolves recipes against a borrowed registry.
pub struct RecipeResolver<'a> {
    registry: &'a EntryRegistry,
    max_depth: usize,
}

impl<'a> RecipeResolver<'a> {
    /// Build a resolver with the default depth bound.
    pub fn new(registry: &'a EntryRegistry) -> Self {
        Self::with_max_depth(registry, DEFAULT_MAX_DEPTH)
    }

    /// Build a resolver that rejects trees nested deeper than `max_depth` recipes.
    pub fn with_max_depth(registry: &'a EntryRegistry, max_depth: usize) -> Self {
        Self {
            registry,
            max_depth,
        }
    }

    /// Resolve `name` into a flattened [`Summary`].
    pub fn resolve(&self, name: &str) -> Result<Summary, CookbookError> {
        let Some(Entry::Recipe(root)) = self.registry.lookup(name) else {
            return Err(CookbookError::NotFound(name.to_string()));
        };

        let mut memo = HashMap::new();
        let mut path = Vec::new();
        let expansion = self.expand(root, &mut path, &mut memo)?;

        Ok(Summary {
            name: name.to_string(),
            cook_time: expansion.cook_time,
            ingredients: expansion.ingredients,
        })
    }

    /// Expand one unit of `recipe`. Finished sub-recipes land in `memo` and are reused.
    fn expand(
        &self,
        recipe: &'a Recipe,
        path: &mut Vec<&'a str>,
        memo: &mut HashMap<&'a str, Expansion>,
    ) -> Result<Expansion, CookbookError> {
        if path.contains(&recipe.name.as_str()) {
            let mut cycle: Vec<String> = path.iter().map(|name| name.to_string()).collect();
            cycle.push(recipe.name.clone());
            return Err(CookbookError::CyclicDependency { path: cycle });
        }
        if path.len() >= self.max_depth {
            return Err(self.too_deep(recipe));
        }
        path.push(&recipe.name);

        let mut expansion = Expansion {
            height: 1,
            ..Expansion::default()
        };
        for item in &recipe.required_items {
            let Some(child) = self.registry.lookup(&item.name) else {
                return Err(CookbookError::UnresolvedReference {
                    recipe: recipe.name.clone(),
                    item: item.name.clone(),
                });
            };

            match child {
                Entry::Ingredient(ingredient) => {
                    let time = ingredient
                        .cook_time
                        .checked_mul(item.quantity)
                        .ok_or_else(|| CookbookError::Overflow(ingredient.name.clone()))?;
                    expansion.add(&ingredient.name, item.quantity, time)?;
                }
                Entry::Recipe(sub) => {
                    let key = sub.name.as_str();
                    if let Some(height) = memo.get(key).map(|done| done.height) {
                        // reused sub-trees still count their full nesting from here
                        if path.len() + height > self.max_depth {
                            return Err(self.too_deep(sub));
                        }
                    } else {
                        let fresh = self.expand(sub, path, memo)?;
                        memo.insert(key, fresh);
                    }
                    if let Some(done) = memo.get(key) {
                        expansion.merge(key, done, item.quantity)?;
                    }
                }
            }
        }

        path.pop();
        Ok(expansion)
    }

    fn too_deep(&self, recipe: &Recipe) -> CookbookError {
        CookbookError::DepthLimitExceeded {
            recipe: recipe.name.clone(),
            max_depth: self.max_depth,
        }
    }
}

/// Per-unit cost of one recipe: ingredients in first-encounter order plus cook time.
#[derive(Default)]
struct Expansion {
    cook_time: u64,
    ingredients: Vec<IngredientQuantity>,
    slots: HashMap<String, usize>,
    /// Recipes on the longest chain from this one down, itself included.
    height: usize,
}

impl Expansion {
    fn add(&mut self, name: &str, quantity: u64, cook_time: u64) -> Result<(), CookbookError> {
        self.cook_time = self
            .cook_time
            .checked_add(cook_time)
            .ok_or_else(|| CookbookError::Overflow(name.to_string()))?;
        self.tally(name, quantity)
    }

    /// Fold `times` units of a sub-recipe's expansion into this one.
    fn merge(&mut self, sub: &str, other: &Expansion, times: u64) -> Result<(), CookbookError> {
        for item in &other.ingredients {
            let quantity = item
                .quantity
                .checked_mul(times)
                .ok_or_else(|| CookbookError::Overflow(item.name.clone()))?;
            self.tally(&item.name, quantity)?;
        }

        let cook_time = other
            .cook_time
            .checked_mul(times)
            .and_then(|time| self.cook_time.checked_add(time))
            .ok_or_else(|| CookbookError::Overflow(sub.to_string()))?;
        self.cook_time = cook_time;
        self.height = self.height.max(other.height + 1);
        Ok(())
    }

    fn tally(&mut self, name: &str, quantity: u64) -> Result<(), CookbookError> {
        if let Some(&slot) = self.slots.get(name) {
            let total = &mut self.ingredients[slot].quantity;
            *total = total
                .checked_add(quantity)
                .ok_or_else(|| CookbookError::Overflow(name.to_string()))?;
        } else {
            self.slots.insert(name.to_string(), self.ingredients.len());
            self.ingredients.push(IngredientQuantity {
                name: name.to_string(),
                quantity,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cookbook::types::{Ingredient, RequiredItem};

    fn ingredient(name: &str, cook_time: u64) -> Entry {
        Entry::Ingredient(Ingredient {
            name: name.into(),
            cook_time,
        })
    }

    fn recipe(name: &str, items: &[(&str, u64)]) -> Entry {
        Entry::Recipe(Recipe {
            name: name.into(),
            required_items: items
                .iter()
                .map(|&(name, quantity)| RequiredItem {
                    name: name.into(),
                    quantity,
                })
                .collect(),
        })
    }

    fn registry(entries: Vec<Entry>) -> EntryRegistry {
        let mut registry = EntryRegistry::new();
        for entry in entries {
            registry.insert(entry).expect("unique test entries");
        }
        registry
    }

    fn quantities(summary: &Summary) -> Vec<(&str, u64)> {
        summary
            .ingredients
            .iter()
            .map(|item| (item.name.as_str(), item.quantity))
            .collect()
    }

    #[test]
    fn flat_recipe_scales_cook_time_by_quantity() {
        let registry = registry(vec![
            ingredient("Egg", 1),
            ingredient("Flour", 0),
            recipe("Pancake", &[("Egg", 2), ("Flour", 1)]),
        ]);

        let summary = RecipeResolver::new(&registry).resolve("Pancake").unwrap();
        assert_eq!(summary.name, "Pancake");
        assert_eq!(summary.cook_time, 2);
        assert_eq!(quantities(&summary), vec![("Egg", 2), ("Flour", 1)]);
    }

    #[test]
    fn nested_recipes_multiply_through_each_level() {
        let registry = registry(vec![
            ingredient("Egg", 1),
            ingredient("Flour", 0),
            recipe("Batter", &[("Flour", 1)]),
            recipe("Pancake", &[("Batter", 2), ("Egg", 1)]),
        ]);

        let summary = RecipeResolver::new(&registry).resolve("Pancake").unwrap();
        assert_eq!(summary.cook_time, 1);
        assert_eq!(quantities(&summary), vec![("Flour", 2), ("Egg", 1)]);
    }

    #[test]
    fn shared_ingredients_aggregate_across_branches() {
        let registry = registry(vec![
            ingredient("Beef", 5),
            ingredient("Egg", 1),
            ingredient("Flour", 0),
            recipe("Meatball", &[("Beef", 2), ("Egg", 1)]),
            recipe("Pasta", &[("Flour", 3), ("Egg", 2)]),
            recipe("Spaghetti", &[("Meatball", 3), ("Pasta", 1)]),
        ]);

        let summary = RecipeResolver::new(&registry).resolve("Spaghetti").unwrap();
        // 3 * (2*5 + 1*1) + (3*0 + 2*1)
        assert_eq!(summary.cook_time, 35);
        assert_eq!(
            quantities(&summary),
            vec![("Beef", 6), ("Egg", 5), ("Flour", 3)]
        );
    }

    #[test]
    fn diamond_is_not_a_cycle() {
        let registry = registry(vec![
            ingredient("Salt", 1),
            recipe("Brine", &[("Salt", 1)]),
            recipe("Pickle", &[("Brine", 1)]),
            recipe("Olive", &[("Brine", 2)]),
            recipe("Platter", &[("Pickle", 1), ("Olive", 1)]),
        ]);

        let summary = RecipeResolver::new(&registry).resolve("Platter").unwrap();
        assert_eq!(quantities(&summary), vec![("Salt", 3)]);
        assert_eq!(summary.cook_time, 3);
    }

    #[test]
    fn empty_recipe_resolves_to_nothing() {
        let registry = registry(vec![recipe("Water", &[])]);
        let summary = RecipeResolver::new(&registry).resolve("Water").unwrap();
        assert_eq!(summary.cook_time, 0);
        assert!(summary.ingredients.is_empty());
    }

    #[test]
    fn unknown_or_ingredient_names_are_not_found() {
        let registry = registry(vec![ingredient("Egg", 1)]);
        let resolver = RecipeResolver::new(&registry);
        assert_eq!(
            resolver.resolve("Egg"),
            Err(CookbookError::NotFound("Egg".into()))
        );
        assert_eq!(
            resolver.resolve("Omelette"),
            Err(CookbookError::NotFound("Omelette".into()))
        );
    }

    #[test]
    fn dangling_reference_at_depth_fails_whole_resolution() {
        let registry = registry(vec![
            ingredient("Egg", 1),
            recipe("Custard", &[("Egg", 2), ("Milk", 1)]),
            recipe("Tart", &[("Custard", 1)]),
        ]);

        assert_eq!(
            RecipeResolver::new(&registry).resolve("Tart"),
            Err(CookbookError::UnresolvedReference {
                recipe: "Custard".into(),
                item: "Milk".into()
            })
        );
    }

    #[test]
    fn self_reference_is_a_cycle() {
        let registry = registry(vec![recipe("Sourdough", &[("Sourdough", 1)])]);
        assert_eq!(
            RecipeResolver::new(&registry).resolve("Sourdough"),
            Err(CookbookError::CyclicDependency {
                path: vec!["Sourdough".into(), "Sourdough".into()]
            })
        );
    }

    #[test]
    fn transitive_cycle_is_detected() {
        let registry = registry(vec![
            ingredient("Yeast", 0),
            recipe("Starter", &[("Yeast", 1), ("Levain", 1)]),
            recipe("Levain", &[("Starter", 1)]),
            recipe("Loaf", &[("Starter", 1)]),
        ]);

        assert_eq!(
            RecipeResolver::new(&registry).resolve("Loaf"),
            Err(CookbookError::CyclicDependency {
                path: vec![
                    "Loaf".into(),
                    "Starter".into(),
                    "Levain".into(),
                    "Starter".into()
                ]
            })
        );
    }

    #[test]
    fn depth_limit_bounds_long_chains() {
        let mut entries = vec![ingredient("Base", 1), recipe("Layer0", &[("Base", 1)])];
        for level in 1..10 {
            let below = format!("Layer{}", level - 1);
            entries.push(recipe(&format!("Layer{level}"), &[(below.as_str(), 1)]));
        }
        let registry = registry(entries);

        let err = RecipeResolver::with_max_depth(&registry, 5)
            .resolve("Layer9")
            .unwrap_err();
        assert_eq!(err.kind(), "depth_limit_exceeded");

        let summary = RecipeResolver::with_max_depth(&registry, 10)
            .resolve("Layer9")
            .unwrap();
        assert_eq!(quantities(&summary), vec![("Base", 1)]);
    }

    #[test]
    fn deep_diamonds_resolve_in_linear_time() {
        let mut entries = vec![ingredient("Base", 1), recipe("Mix0", &[("Base", 1)])];
        for level in 1..=30 {
            let below = format!("Mix{}", level - 1);
            let left = format!("Left{level}");
            let right = format!("Right{level}");
            entries.push(recipe(&left, &[(below.as_str(), 1)]));
            entries.push(recipe(&right, &[(below.as_str(), 1)]));
            entries.push(recipe(
                &format!("Mix{level}"),
                &[(left.as_str(), 1), (right.as_str(), 1)],
            ));
        }
        let registry = registry(entries);

        let summary = RecipeResolver::new(&registry).resolve("Mix30").unwrap();
        assert_eq!(quantities(&summary), vec![("Base", 1 << 30)]);
        assert_eq!(summary.cook_time, 1 << 30);
    }

    #[test]
    fn reused_sub_recipe_still_counts_toward_depth() {
        let registry = registry(vec![
            ingredient("Base", 1),
            recipe("Shared", &[("Base", 1)]),
            recipe("Mid", &[("Shared", 1)]),
            recipe("Deep", &[("Mid", 1)]),
            recipe("Root", &[("Shared", 1), ("Deep", 1)]),
        ]);

        let err = RecipeResolver::with_max_depth(&registry, 3)
            .resolve("Root")
            .unwrap_err();
        assert_eq!(err.kind(), "depth_limit_exceeded");

        let summary = RecipeResolver::with_max_depth(&registry, 4)
            .resolve("Root")
            .unwrap();
        assert_eq!(quantities(&summary), vec![("Base", 2)]);
        assert_eq!(summary.cook_time, 2);
    }

    #[test]
    fn overflowing_quantities_are_reported() {
        let registry = registry(vec![
            ingredient("Grain", 1),
            recipe("Sack", &[("Grain", u64::MAX)]),
            recipe("Silo", &[("Sack", 2)]),
        ]);

        assert_eq!(
            RecipeResolver::new(&registry).resolve("Silo"),
            Err(CookbookError::Overflow("Grain".into()))
        );
    }
}
