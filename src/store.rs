// src/store.rs

use crate::error::{GolingError, Result};
use crate::kv::KeyValueStore;
use crate::models::{Coordinates, Log};

/// Key holding the JSON array of every log, in insertion order.
pub const LOGS_KEY: &str = "logs";

/// Key holding the layout version of the `logs` blob.
pub const SCHEMA_VERSION_KEY: &str = "logs.schema_version";

/// Version 0 is the unversioned array written by earlier builds; version 1
/// has the same layout with the version recorded.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Counters shown on the dashboard and profile views.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Summary {
    pub total: usize,
    pub with_location: usize,
    pub latest_timestamp: Option<String>,
}

/// Repository of logs over an injected key-value backend.
pub struct LogStore<S> {
    backend: S,
}

impl<S: KeyValueStore> LogStore<S> {
    /// Wraps `backend` and brings its schema up to date.
    pub fn open(backend: S) -> Result<Self> {
        let store = Self { backend };
        store.migrate()?;
        Ok(store)
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn schema_version(&self) -> Result<u32> {
        match self.backend.get(SCHEMA_VERSION_KEY)? {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .map_err(|_| GolingError::CorruptSchemaVersion(raw)),
            None => Ok(0),
        }
    }

    fn migrate(&self) -> Result<()> {
        let mut version = self.schema_version()?;
        if version > CURRENT_SCHEMA_VERSION {
            return Err(GolingError::UnsupportedSchema {
                found: version,
                supported: CURRENT_SCHEMA_VERSION,
            });
        }

        while version < CURRENT_SCHEMA_VERSION {
            let next = version + 1;
            tracing::info!(from = version, to = next, "migrating log storage");
            match next {
                // Same array layout; only the version marker is new.
                1 => {}
                _ => {
                    return Err(GolingError::UnsupportedSchema {
                        found: next,
                        supported: CURRENT_SCHEMA_VERSION,
                    })
                }
            }
            self.backend.set(SCHEMA_VERSION_KEY, &next.to_string())?;
            version = next;
        }
        Ok(())
    }

    /// All logs in insertion order. An absent blob is an empty journal; a
    /// blob that does not decode is an error.
    pub fn get_logs(&self) -> Result<Vec<Log>> {
        match self.backend.get(LOGS_KEY)? {
            Some(raw) => decode(&raw),
            None => Ok(Vec::new()),
        }
    }

    /// Like [`get_logs`](Self::get_logs) but any failure is logged and
    /// reported as an empty journal.
    pub fn get_logs_or_default(&self) -> Vec<Log> {
        self.get_logs().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to read logs, showing none");
            Vec::new()
        })
    }

    /// Appends `log` to the stored list in one atomic read-modify-write.
    ///
    /// No validation happens here; the composition flow is responsible for
    /// rejecting blank notes. A corrupt existing blob is never overwritten.
    pub fn add_log(&self, log: &Log) -> Result<()> {
        let result = self.backend.update(LOGS_KEY, |current| {
            let mut logs = match current {
                Some(raw) => decode(&raw)?,
                None => Vec::new(),
            };
            logs.push(log.clone());
            Ok(serde_json::to_string(&logs)?)
        });

        match &result {
            Ok(()) => tracing::debug!(id = %log.id, "log appended"),
            Err(e) => tracing::error!(id = %log.id, error = %e, "failed to append log"),
        }
        result
    }

    /// Newest first.
    pub fn feed(&self) -> Result<Vec<Log>> {
        let mut logs = self.get_logs()?;
        logs.reverse();
        Ok(logs)
    }

    pub fn find_log(&self, id: &str) -> Result<Option<Log>> {
        Ok(self.get_logs()?.into_iter().find(|log| log.id == id))
    }

    pub fn map_markers(&self) -> Result<Vec<(String, Coordinates)>> {
        Ok(self
            .get_logs()?
            .into_iter()
            .filter_map(|log| log.coordinates.map(|c| (log.id, c)))
            .collect())
    }

    pub fn summary(&self) -> Result<Summary> {
        let logs = self.get_logs()?;
        Ok(Summary {
            total: logs.len(),
            with_location: logs.iter().filter(|l| l.coordinates.is_some()).count(),
            latest_timestamp: logs.last().map(|l| l.timestamp.clone()),
        })
    }

    /// The stored blob exactly as persisted, or `"[]"` when nothing is stored.
    pub fn export_raw(&self) -> Result<String> {
        Ok(self.backend.get(LOGS_KEY)?.unwrap_or_else(|| "[]".to_string()))
    }
}

fn decode(raw: &str) -> Result<Vec<Log>> {
    serde_json::from_str(raw).map_err(|source| GolingError::CorruptBlob {
        key: LOGS_KEY.to_string(),
        source,
    })
}
