//! Local Key-Value Persistence Module
//!
//! Mirrors the browser local-storage layout of the original Sentinel
//! app: three keys (settings, history, marks), each one serialized JSON
//! document, fully overwritten on every write.
//!
//! Read path is fail-soft by contract: a missing file, unreadable file,
//! or malformed document never surfaces an error - the caller gets the
//! default/empty value and the incident is logged at debug level. Only
//! the write path propagates `AppError`.
//!
//! Single-threaded, synchronous. The store is exclusive to one session;
//! no locking or transactions exist or are required.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};

use crate::models::config::AppSettings;
use crate::models::errors::{AppError, AppResult, ErrorCode};
use crate::models::types::{HistoryItem, MarkRecord};
use crate::utils::constants::{HISTORY_CAP, KEY_HISTORY, KEY_MARKS, KEY_SETTINGS};

/// File-backed key-value store rooted at a directory
///
/// Each key maps to `<root>/<key>.json`.
#[derive(Debug, Clone)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    /// Open a store rooted at `root`
    ///
    /// The directory is created lazily on first write, so opening a
    /// store never fails.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        debug!("🗄️ Local store rooted at {}", root.display());
        Self { root }
    }

    /// Path of the file backing a key
    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    /// Read and parse a key, substituting `default` on any failure
    fn read_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let path = self.path_for(key);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) => {
                debug!("📭 {}: not readable ({}), using default", key, e.kind());
                return default;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                debug!("📭 {}: malformed persisted data ({}), using default", key, e);
                default
            }
        }
    }

    /// Serialize a value and overwrite the key's file
    fn write(&self, key: &str, value: &impl Serialize) -> AppResult<()> {
        fs::create_dir_all(&self.root)
            .map_err(|e| AppError::with_source(ErrorCode::StoreDirFailed, "cannot create store directory", e))?;

        let json = serde_json::to_string_pretty(value)?;
        let path = self.path_for(key);
        fs::write(&path, json)
            .map_err(|e| AppError::with_source(ErrorCode::StoreWriteFailed, format!("cannot write {}", key), e))?;

        debug!("💾 STORE WRITE: {}", key);
        Ok(())
    }

    // ============================================
    // Settings
    // ============================================

    /// Load settings, backfilling missing fields from defaults
    ///
    /// Never fails: absent or unparseable data resolves to the full
    /// default record.
    pub fn settings(&self) -> AppSettings {
        self.read_or(KEY_SETTINGS, AppSettings::default())
    }

    /// Persist the full settings record (merging happens at the caller)
    pub fn save_settings(&self, settings: &AppSettings) -> AppResult<()> {
        self.write(KEY_SETTINGS, settings)
    }

    // ============================================
    // History
    // ============================================

    /// Load the analysis history, most recent first
    pub fn history(&self) -> Vec<HistoryItem> {
        self.read_or(KEY_HISTORY, Vec::new())
    }

    /// Prepend an item and truncate to the most recent 50 before writing
    pub fn add_history(&self, item: HistoryItem) -> AppResult<()> {
        let mut items = self.history();
        items.insert(0, item);
        items.truncate(HISTORY_CAP);
        self.write(KEY_HISTORY, &items)?;
        info!("📜 History entry recorded ({} total)", items.len());
        Ok(())
    }

    // ============================================
    // Marks
    // ============================================

    /// Load the suspicious-address reports, most recent first
    pub fn marks(&self) -> Vec<MarkRecord> {
        self.read_or(KEY_MARKS, Vec::new())
    }

    /// Prepend a report with no truncation
    ///
    /// Unbounded growth is a known limitation of the original app, kept
    /// as-is rather than designed around.
    pub fn add_mark(&self, mark: MarkRecord) -> AppResult<()> {
        let mut marks = self.marks();
        marks.insert(0, mark);
        self.write(KEY_MARKS, &marks)?;
        info!("🚩 Mark recorded ({} total)", marks.len());
        Ok(())
    }

    /// Root directory backing this store
    pub fn root(&self) -> &Path {
        &self.root
    }
}
