//! Sentinel Guard Library
//!
//! Logic core of the Sentinel transaction-safety demo:
//! - Mock risk analysis with a fixed decision table and artificial delay
//! - Local persisted stores for settings, analysis history, and
//!   suspicious-address reports (fail-soft reads, capped history)
//! - A session-scoped application state container with typed
//!   translations and a simulated wallet flag

pub mod analyzer;
pub mod app;
pub mod i18n;
pub mod models;
pub mod storage;
pub mod utils;

pub use analyzer::{AnalyzerConfig, MockAnalyzer, TxRequest};
pub use app::AppState;
pub use i18n::{translate, TextKey};
pub use models::config::{
    AnimationIntensity, AppSettings, Language, RiskSensitivity, SettingsUpdate, Theme,
};
pub use models::errors::{AppError, AppResult, ErrorCode};
pub use models::types::{AnalysisResult, CheckKind, HistoryItem, MarkRecord, RiskLevel, TxType};
pub use storage::LocalStore;
