//! Reference data caching for the inventory client.
//!
//! Purpose: keep field metadata and the inventory type list in memory so a
//! detail view does not refetch them for every project.
//! Responsibilities: store, expire and invalidate reference entries; report
//! hit/miss metrics.
//! Non-scope: caching project records, which change under the user's hands.
//!
//! # Invariants
//! - Entries expire after the configured TTL.
//! - Clones of a client share one cache.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::trace;

use crate::metrics::MetricsCollector;
use crate::models::{FieldMetadata, InventoryType};

const METADATA_CACHE: &str = "field_metadata";
const INVENTORY_TYPES_CACHE: &str = "inventory_types";

/// In-memory cache of reference data.
#[derive(Clone, Debug)]
pub struct ReferenceCache {
    metadata: MokaCache<(), Arc<FieldMetadata>>,
    inventory_types: MokaCache<(), Arc<Vec<InventoryType>>>,
    metrics: Option<MetricsCollector>,
    enabled: bool,
}

impl ReferenceCache {
    /// Create a cache whose entries live for `ttl`. A zero TTL disables caching.
    pub fn new(ttl: Duration, metrics: Option<MetricsCollector>) -> Self {
        let ttl_for_moka = ttl.max(Duration::from_millis(1));
        Self {
            metadata: MokaCache::builder()
                .max_capacity(1)
                .time_to_live(ttl_for_moka)
                .build(),
            inventory_types: MokaCache::builder()
                .max_capacity(1)
                .time_to_live(ttl_for_moka)
                .build(),
            metrics,
            enabled: !ttl.is_zero(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub async fn metadata(&self) -> Option<Arc<FieldMetadata>> {
        let hit = if self.enabled {
            self.metadata.get(&()).await
        } else {
            None
        };
        self.record(METADATA_CACHE, hit.is_some());
        hit
    }

    pub async fn store_metadata(&self, metadata: Arc<FieldMetadata>) {
        if self.enabled {
            self.metadata.insert((), metadata).await;
        }
    }

    pub async fn inventory_types(&self) -> Option<Arc<Vec<InventoryType>>> {
        let hit = if self.enabled {
            self.inventory_types.get(&()).await
        } else {
            None
        };
        self.record(INVENTORY_TYPES_CACHE, hit.is_some());
        hit
    }

    pub async fn store_inventory_types(&self, types: Arc<Vec<InventoryType>>) {
        if self.enabled {
            self.inventory_types.insert((), types).await;
        }
    }

    /// Drop every cached entry.
    pub fn invalidate_all(&self) {
        self.metadata.invalidate_all();
        self.inventory_types.invalidate_all();
    }

    fn record(&self, cache: &'static str, hit: bool) {
        trace!(cache, hit, "Reference cache lookup");
        if let Some(m) = &self.metrics {
            if hit {
                m.record_cache_hit(cache);
            } else {
                m.record_cache_miss(cache);
            }
        }
    }
}
