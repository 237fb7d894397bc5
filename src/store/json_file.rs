use crate::error::StoreError;
use crate::model::{OverrideEntry, OverrideMap};
use crate::store::traits::OverrideStore;
use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Override store backed by a single JSON file on disk.
///
/// The file is read on every call. Writes overwrite the file in place, so a
/// reader racing a writer sees either the old or the new document.
#[derive(Debug, Clone)]
pub struct JsonFileOverrideStore {
    path: PathBuf,
}

impl JsonFileOverrideStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Parse an override document.
///
/// Only a JSON syntax error is fatal. Blank content or a root that is not an
/// object reads as an empty mapping, and entries that do not fit the override
/// shape are skipped with a warning.
pub fn parse_overrides(path: &Path, raw: &str) -> Result<OverrideMap, StoreError> {
    if raw.trim().is_empty() {
        return Ok(OverrideMap::new());
    }
    let document: Value = serde_json::from_str(raw).map_err(|e| StoreError::corrupt(path, e))?;

    let Value::Object(entries) = document else {
        log::warn!(
            "override file {} is not a JSON object, ignoring it",
            path.display()
        );
        return Ok(OverrideMap::new());
    };

    Ok(entries
        .into_iter()
        .filter_map(
            |(product_id, entry)| match serde_json::from_value::<OverrideEntry>(entry) {
                Ok(entry) => Some((product_id, entry)),
                Err(e) => {
                    log::warn!(
                        "override file {}: skipping entry '{}': {}",
                        path.display(),
                        product_id,
                        e
                    );
                    None
                }
            },
        )
        .collect())
}

#[async_trait::async_trait]
impl OverrideStore for JsonFileOverrideStore {
    async fn load_overrides(&self) -> Result<OverrideMap, StoreError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!(
                    "override file {} not found, using catalog defaults",
                    self.path.display()
                );
                return Ok(OverrideMap::new());
            }
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };
        parse_overrides(&self.path, &raw)
    }

    async fn save_overrides(&self, overrides: &OverrideMap) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::write(parent, e))?;
        }
        let body = serde_json::to_string_pretty(overrides)
            .map_err(|e| StoreError::corrupt(&self.path, e))?;
        tokio::fs::write(&self.path, body)
            .await
            .map_err(|e| StoreError::write(&self.path, e))?;
        log::info!(
            "saved {} override entries to {}",
            overrides.len(),
            self.path.display()
        );
        Ok(())
    }
}
