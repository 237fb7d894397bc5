use crate::error::StoreError;
use crate::model::{OverrideEntry, OverrideMap};
use crate::store::traits::OverrideStore;
use parking_lot::RwLock;

/// In-process override store, used for demos and tests.
///
/// Reads clone the current mapping, so callers never hold a reference into
/// shared state.
#[derive(Debug, Default)]
pub struct MemoryOverrideStore {
    overrides: RwLock<OverrideMap>,
}

impl MemoryOverrideStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_overrides(overrides: OverrideMap) -> Self {
        Self {
            overrides: RwLock::new(overrides),
        }
    }

    /// Set or replace a single product's entry.
    pub fn put(&self, product_id: impl Into<String>, entry: OverrideEntry) {
        self.overrides.write().insert(product_id.into(), entry);
    }
}

#[async_trait::async_trait]
impl OverrideStore for MemoryOverrideStore {
    async fn load_overrides(&self) -> Result<OverrideMap, StoreError> {
        Ok(self.overrides.read().clone())
    }

    async fn save_overrides(&self, overrides: &OverrideMap) -> Result<(), StoreError> {
        *self.overrides.write() = overrides.clone();
        Ok(())
    }
}
