//! Cookbook core: name normalization, the entry registry, and recipe resolution.

pub mod normalize;
pub mod registry;
pub mod resolver;
mod service;
pub mod types;

pub use normalize::normalize_name;
pub use registry::EntryRegistry;
pub use resolver::{DEFAULT_MAX_DEPTH, RecipeResolver};
pub use service::{CookbookApi, CookbookService};
pub use types::{
    CookbookError, Entry, EntryListing, EntryPayload, Ingredient, IngredientQuantity, Recipe,
    RequiredItem, RequiredItemPayload, Summary,
};
