//! Core data types and error definitions for the cookbook.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while normalizing names, admitting entries, or resolving recipes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CookbookError {
    /// Normalization left nothing behind, or an entry name was blank.
    #[error("invalid name: '{0}' contains no letters")]
    InvalidName(String),
    /// Declared entry type was neither `ingredient` nor `recipe`.
    #[error("invalid entry type '{0}': expected 'ingredient' or 'recipe'")]
    InvalidEntryType(String),
    /// An entry with this name is already registered.
    #[error("an entry named '{0}' already exists")]
    DuplicateName(String),
    /// Ingredient cook time was negative or missing.
    #[error("ingredient '{name}' has invalid cook time {cook_time:?}")]
    InvalidCookTime {
        /// Ingredient being inserted.
        name: String,
        /// Cook time supplied by the caller, if any.
        cook_time: Option<i64>,
    },
    /// A recipe lists the same required item twice.
    #[error("recipe '{recipe}' lists required item '{item}' more than once")]
    DuplicateRequiredItem {
        /// Recipe being inserted.
        recipe: String,
        /// Repeated required-item name.
        item: String,
    },
    /// A required item asked for zero or fewer units.
    #[error("recipe '{recipe}' requires non-positive quantity {quantity} of '{item}'")]
    InvalidQuantity {
        /// Recipe being inserted.
        recipe: String,
        /// Offending required-item name.
        item: String,
        /// Quantity supplied by the caller.
        quantity: i64,
    },
    /// Queried name is absent or is not a recipe.
    #[error("no recipe named '{0}'")]
    NotFound(String),
    /// A recipe somewhere in the tree requires a name that is not registered.
    #[error("recipe '{recipe}' requires unknown item '{item}'")]
    UnresolvedReference {
        /// Recipe holding the dangling reference.
        recipe: String,
        /// Name that could not be found.
        item: String,
    },
    /// A recipe transitively requires itself.
    #[error("cyclic dependency: {}", path.join(" -> "))]
    CyclicDependency {
        /// Recipe names along the cycle, ending with the repeated name.
        path: Vec<String>,
    },
    /// Scaled quantity or cook time no longer fits in 64 bits.
    #[error("quantity overflow while accumulating '{0}'")]
    Overflow(String),
    /// Recipe nesting exceeded the configured depth.
    #[error("recipe nesting deeper than {max_depth} levels while expanding '{recipe}'")]
    DepthLimitExceeded {
        /// Recipe whose expansion crossed the limit.
        recipe: String,
        /// Configured maximum depth.
        max_depth: usize,
    },
}

impl CookbookError {
    /// Short machine-readable label for the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidName(_) => "invalid_name",
            Self::InvalidEntryType(_) => "invalid_entry_type",
            Self::DuplicateName(_) => "duplicate_name",
            Self::InvalidCookTime { .. } => "invalid_cook_time",
            Self::DuplicateRequiredItem { .. } => "duplicate_required_item",
            Self::InvalidQuantity { .. } => "invalid_quantity",
            Self::NotFound(_) => "not_found",
            Self::UnresolvedReference { .. } => "unresolved_reference",
            Self::CyclicDependency { .. } => "cyclic_dependency",
            Self::Overflow(_) => "overflow",
            Self::DepthLimitExceeded { .. } => "depth_limit_exceeded",
        }
    }
}

/// One `(name, quantity)` requirement inside a recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredItem {
    /// Name of the entry required.
    pub name: String,
    /// Units of that entry needed per unit of the containing recipe.
    pub quantity: u64,
}

/// Primitive entry with a fixed cook time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    /// Registered name.
    pub name: String,
    /// Time contributed per unit used.
    pub cook_time: u64,
}

/// Composite entry built from other entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    /// Registered name.
    pub name: String,
    /// Requirements in declaration order, names pairwise distinct.
    pub required_items: Vec<RequiredItem>,
}

/// A validated registry entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// Raw ingredient.
    Ingredient(Ingredient),
    /// Composite recipe.
    Recipe(Recipe),
}

impl Entry {
    /// Name the entry is registered under.
    pub fn name(&self) -> &str {
        match self {
            Self::Ingredient(ingredient) => &ingredient.name,
            Self::Recipe(recipe) => &recipe.name,
        }
    }

    /// Wire label for the entry variant.
    pub fn type_label(&self) -> &'static str {
        match self {
            Self::Ingredient(_) => INGREDIENT_TYPE,
            Self::Recipe(_) => RECIPE_TYPE,
        }
    }
}

pub(crate) const INGREDIENT_TYPE: &str = "ingredient";
pub(crate) const RECIPE_TYPE: &str = "recipe";

/// Required item as received on the wire, before quantity validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequiredItemPayload {
    /// Name of the entry required.
    pub name: String,
    /// Requested units; must be positive to be admitted.
    pub quantity: i64,
}

/// Untyped entry as received on the wire.
///
/// `type` stays a free string so unknown values are reported as
/// [`CookbookError::InvalidEntryType`] instead of failing to decode.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryPayload {
    /// Declared variant, `ingredient` or `recipe`.
    #[serde(rename = "type")]
    pub entry_type: String,
    /// Name the entry should be registered under; absent decodes as blank.
    #[serde(default)]
    pub name: String,
    /// Cook time for ingredients.
    #[serde(default)]
    pub cook_time: Option<i64>,
    /// Requirements for recipes; absent means none.
    #[serde(default)]
    pub required_items: Option<Vec<RequiredItemPayload>>,
}

impl EntryPayload {
    /// Wire label of the declared variant, or [`CookbookError::InvalidEntryType`].
    pub fn declared_type(&self) -> Result<&'static str, CookbookError> {
        match self.entry_type.as_str() {
            INGREDIENT_TYPE => Ok(INGREDIENT_TYPE),
            RECIPE_TYPE => Ok(RECIPE_TYPE),
            other => Err(CookbookError::InvalidEntryType(other.to_string())),
        }
    }

    /// Validate the payload shape and convert it into a typed [`Entry`].
    ///
    /// The type is checked before the name. Name uniqueness is checked against the registry in
    /// [`EntryRegistry::admit`](super::registry::EntryRegistry::admit).
    pub fn into_entry(self) -> Result<Entry, CookbookError> {
        let declared = self.declared_type()?;
        let EntryPayload {
            name,
            cook_time,
            required_items,
            ..
        } = self;

        if name.trim().is_empty() {
            return Err(CookbookError::InvalidName(name));
        }

        if declared == INGREDIENT_TYPE {
            let cook_time = cook_time
                .and_then(|value| u64::try_from(value).ok())
                .ok_or(CookbookError::InvalidCookTime {
                    name: name.clone(),
                    cook_time,
                })?;
            return Ok(Entry::Ingredient(Ingredient { name, cook_time }));
        }

        let mut items = Vec::new();
        for item in required_items.unwrap_or_default() {
            if items.iter().any(|seen: &RequiredItem| seen.name == item.name) {
                return Err(CookbookError::DuplicateRequiredItem {
                    recipe: name,
                    item: item.name,
                });
            }
            let quantity = u64::try_from(item.quantity)
                .ok()
                .filter(|&quantity| quantity > 0)
                .ok_or_else(|| CookbookError::InvalidQuantity {
                    recipe: name.clone(),
                    item: item.name.clone(),
                    quantity: item.quantity,
                })?;
            items.push(RequiredItem {
                name: item.name,
                quantity,
            });
        }
        Ok(Entry::Recipe(Recipe {
            name,
            required_items: items,
        }))
    }
}

/// Aggregated quantity of one raw ingredient within a summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientQuantity {
    /// Ingredient name.
    pub name: String,
    /// Total units needed for one unit of the resolved recipe.
    pub quantity: u64,
}

/// Flattened result of resolving a recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Recipe that was resolved.
    pub name: String,
    /// Total cook time across every raw ingredient, scaled by quantity.
    pub cook_time: u64,
    /// Distinct raw ingredients in first-encounter order.
    pub ingredients: Vec<IngredientQuantity>,
}

/// Name and variant of a registered entry, for listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryListing {
    /// Registered name.
    pub name: String,
    /// `ingredient` or `recipe`.
    #[serde(rename = "type")]
    pub entry_type: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: serde_json::Value) -> EntryPayload {
        serde_json::from_value(value).expect("payload decodes")
    }

    #[test]
    fn ingredient_payload_converts() {
        let entry = payload(json!({ "type": "ingredient", "name": "Egg", "cookTime": 3 }))
            .into_entry()
            .expect("valid ingredient");
        assert_eq!(
            entry,
            Entry::Ingredient(Ingredient {
                name: "Egg".into(),
                cook_time: 3
            })
        );
        assert_eq!(entry.type_label(), "ingredient");
    }

    #[test]
    fn negative_or_missing_cook_time_is_rejected() {
        let err = payload(json!({ "type": "ingredient", "name": "Egg", "cookTime": -1 }))
            .into_entry()
            .unwrap_err();
        assert_eq!(err.kind(), "invalid_cook_time");

        let err = payload(json!({ "type": "ingredient", "name": "Egg" }))
            .into_entry()
            .unwrap_err();
        assert_eq!(err.kind(), "invalid_cook_time");
    }

    #[test]
    fn unknown_type_is_rejected() {
        let err = payload(json!({ "type": "dessert", "name": "Cake" }))
            .into_entry()
            .unwrap_err();
        assert_eq!(err, CookbookError::InvalidEntryType("dessert".into()));
    }

    #[test]
    fn duplicate_required_items_are_rejected() {
        let err = payload(json!({
            "type": "recipe",
            "name": "Omelette",
            "requiredItems": [
                { "name": "Egg", "quantity": 1 },
                { "name": "Egg", "quantity": 2 }
            ]
        }))
        .into_entry()
        .unwrap_err();
        assert_eq!(
            err,
            CookbookError::DuplicateRequiredItem {
                recipe: "Omelette".into(),
                item: "Egg".into()
            }
        );
    }

    #[test]
    fn non_positive_quantity_is_rejected() {
        let err = payload(json!({
            "type": "recipe",
            "name": "Toast",
            "requiredItems": [{ "name": "Bread", "quantity": 0 }]
        }))
        .into_entry()
        .unwrap_err();
        assert_eq!(err.kind(), "invalid_quantity");
    }

    #[test]
    fn recipe_without_items_defaults_to_empty() {
        let entry = payload(json!({ "type": "recipe", "name": "Air" }))
            .into_entry()
            .expect("empty recipe");
        assert_eq!(
            entry,
            Entry::Recipe(Recipe {
                name: "Air".into(),
                required_items: vec![]
            })
        );
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = payload(json!({ "type": "ingredient", "name": "  ", "cookTime": 0 }))
            .into_entry()
            .unwrap_err();
        assert_eq!(err.kind(), "invalid_name");
    }

    #[test]
    fn type_is_checked_before_name() {
        let err = payload(json!({ "type": "dessert" })).into_entry().unwrap_err();
        assert_eq!(err, CookbookError::InvalidEntryType("dessert".into()));

        let err = payload(json!({ "type": "recipe" })).into_entry().unwrap_err();
        assert_eq!(err, CookbookError::InvalidName(String::new()));
    }

    #[test]
    fn cycle_error_renders_path() {
        let err = CookbookError::CyclicDependency {
            path: vec!["A".into(), "B".into(), "A".into()],
        };
        assert_eq!(err.to_string(), "cyclic dependency: A -> B -> A");
    }
}
