//! Cookbook service coordinating normalization, registration, and resolution.

use crate::{
    config::Config,
    cookbook::{
        normalize::normalize_name,
        registry::EntryRegistry,
        resolver::{DEFAULT_MAX_DEPTH, RecipeResolver},
        types::{CookbookError, EntryListing, EntryPayload, Summary},
    },
    metrics::{CookbookMetrics, MetricsSnapshot},
};
use parking_lot::RwLock;

/// Owns one entry registry and the counters describing its use.
///
/// Both the HTTP surface and the MCP tools share a single instance through an `Arc`. Reads
/// (lookups, summaries, listings) take the shared lock; insertions take the exclusive lock, so
/// every insert is atomic with respect to concurrent resolutions.
pub struct CookbookService {
    registry: RwLock<EntryRegistry>,
    metrics: CookbookMetrics,
    max_depth: usize,
}

/// Abstraction over the cookbook used by external surfaces (HTTP, MCP).
pub trait CookbookApi: Send + Sync {
    /// Canonicalize free-form text into a display name.
    fn normalize(&self, raw: &str) -> Result<String, CookbookError>;

    /// Validate and admit a new entry.
    fn insert_entry(&self, payload: EntryPayload) -> Result<(), CookbookError>;

    /// Resolve a recipe into raw ingredients and total cook time.
    fn summary(&self, name: &str) -> Result<Summary, CookbookError>;

    /// List every registered entry in insertion order.
    fn entries(&self) -> Vec<EntryListing>;

    /// Retrieve the current metrics snapshot for diagnostics.
    fn metrics_snapshot(&self) -> MetricsSnapshot;
}

impl Default for CookbookService {
    fn default() -> Self {
        Self::with_max_depth(DEFAULT_MAX_DEPTH)
    }
}

impl CookbookService {
    /// Build an empty cookbook using the configured limits.
    pub fn new(config: &Config) -> Self {
        tracing::debug!(max_depth = config.max_depth, "Initializing cookbook");
        Self::with_max_depth(config.max_depth)
    }

    /// Build an empty cookbook with an explicit recipe nesting bound.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            registry: RwLock::new(EntryRegistry::new()),
            metrics: CookbookMetrics::new(),
            max_depth,
        }
    }
}

impl CookbookApi for CookbookService {
    fn normalize(&self, raw: &str) -> Result<String, CookbookError> {
        normalize_name(raw)
    }

    fn insert_entry(&self, payload: EntryPayload) -> Result<(), CookbookError> {
        let outcome = self.registry.write().admit(payload);
        self.metrics.record_insert(outcome.is_ok());

        match outcome {
            Ok(listing) => {
                tracing::info!(
                    name = %listing.name,
                    entry_type = listing.entry_type,
                    "Entry registered"
                );
                Ok(())
            }
            Err(err) => {
                tracing::debug!(kind = err.kind(), error = %err, "Entry rejected");
                Err(err)
            }
        }
    }

    fn summary(&self, name: &str) -> Result<Summary, CookbookError> {
        let outcome = {
            let registry = self.registry.read();
            RecipeResolver::with_max_depth(&registry, self.max_depth).resolve(name)
        };
        self.metrics.record_summary(outcome.is_ok());

        match &outcome {
            Ok(summary) => tracing::debug!(
                name,
                cook_time = summary.cook_time,
                ingredients = summary.ingredients.len(),
                "Recipe resolved"
            ),
            Err(err) => tracing::debug!(name, kind = err.kind(), error = %err, "Resolution failed"),
        }
        outcome
    }

    fn entries(&self) -> Vec<EntryListing> {
        self.registry.read().listings()
    }

    fn metrics_snapshot(&self) -> MetricsSnapshot {
        let size = self.registry.read().len();
        self.metrics.snapshot(size)
    }
}
