use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::domain::evm::{EvmData, EvmMetrics};
use crate::services::evm::calculate_evm_metrics;

/// Key under which the EVM inputs are persisted.
pub const EVM_DATA_KEY: &str = "evmData";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to access store file {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("failed to decode stored value for {key}: {source}")]
    Decode {
        key: String,
        source: serde_json::Error,
    },
    #[error("failed to encode value: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Durable string storage keyed by name.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Stores each key as `<key>.json` in a directory.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io { path, source }),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.dir).map_err(|source| StoreError::Io {
            path: self.dir.clone(),
            source,
        })?;
        let path = self.path_for(key);
        std::fs::write(&path, value).map_err(|source| StoreError::Io { path, source })
    }
}

/// Current EVM inputs bound to the store they persist to. Metrics are
/// recomputed on every read.
pub struct EvmState<S: KeyValueStore> {
    store: S,
    data: EvmData,
}

impl<S: KeyValueStore> EvmState<S> {
    /// Loads the stored inputs, falling back to [`EvmData::default`] when
    /// nothing has been saved yet.
    pub fn load(store: S) -> Result<Self, StoreError> {
        let data = match store.get(EVM_DATA_KEY)? {
            Some(raw) => serde_json::from_str(&raw).map_err(|source| StoreError::Decode {
                key: EVM_DATA_KEY.to_string(),
                source,
            })?,
            None => {
                warn!(key = EVM_DATA_KEY, "no stored EVM data, using defaults");
                EvmData::default()
            }
        };
        Ok(Self { store, data })
    }

    pub fn data(&self) -> EvmData {
        self.data
    }

    pub fn metrics(&self) -> EvmMetrics {
        calculate_evm_metrics(&self.data)
    }

    /// Persists `data` and makes it current.
    pub fn update(&mut self, data: EvmData) -> Result<EvmMetrics, StoreError> {
        let raw = serde_json::to_string(&data)?;
        self.store.set(EVM_DATA_KEY, &raw)?;
        info!(bac = data.bac, pv = data.pv, ev = data.ev, ac = data.ac, "saved EVM data");
        self.data = data;
        Ok(self.metrics())
    }
}
