//! Application State Container
//!
//! Single source of truth for one page session: settings, the analysis
//! history, and the wallet-connected flag. Constructed once at startup
//! from an injected `LocalStore`, torn down with the session. Every
//! mutation updates memory first, then mirrors to the store, so the two
//! never drift.
//!
//! "Wallet connect" is an in-memory boolean toggle - the original app's
//! connect flow is a timed animation, not a handshake.

use tracing::info;

use crate::i18n::{translate, TextKey};
use crate::models::config::{AppSettings, SettingsUpdate};
use crate::models::errors::AppResult;
use crate::models::types::{HistoryItem, MarkRecord, RiskLevel};
use crate::storage::LocalStore;
use crate::utils::constants::HISTORY_CAP;

/// Session-scoped application state
pub struct AppState {
    store: LocalStore,
    settings: AppSettings,
    history: Vec<HistoryItem>,
    wallet_connected: bool,
}

impl AppState {
    /// Initialize from persisted stores
    ///
    /// Missing or malformed persisted data resolves to defaults inside
    /// the store, so initialization cannot fail.
    pub fn init(store: LocalStore) -> Self {
        let settings = store.settings();
        let history = store.history();
        info!(
            "🛡️ Session started: language={}, {} history entries restored",
            settings.language.as_str(),
            history.len()
        );

        Self {
            store,
            settings,
            history,
            wallet_connected: false,
        }
    }

    // ============================================
    // Wallet flag
    // ============================================

    /// Mark the fake wallet as connected
    pub fn connect_wallet(&mut self) {
        self.wallet_connected = true;
        info!("🔌 Wallet connected (simulated)");
    }

    /// Drop the fake wallet connection
    pub fn disconnect_wallet(&mut self) {
        self.wallet_connected = false;
        info!("🔌 Wallet disconnected");
    }

    pub fn is_wallet_connected(&self) -> bool {
        self.wallet_connected
    }

    // ============================================
    // Settings
    // ============================================

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    /// Shallow-merge a partial update, then persist the full record
    pub fn update_settings(&mut self, update: SettingsUpdate) -> AppResult<()> {
        self.settings.apply(update);
        self.store.save_settings(&self.settings)
    }

    // ============================================
    // History
    // ============================================

    /// Past analyses, most recent first
    pub fn history(&self) -> &[HistoryItem] {
        &self.history
    }

    /// Record a verdict: prepend, cap at 50, persist
    pub fn add_to_history(&mut self, item: HistoryItem) -> AppResult<()> {
        self.history.insert(0, item.clone());
        self.history.truncate(HISTORY_CAP);
        self.store.add_history(item)
    }

    // ============================================
    // Marks
    // ============================================

    /// Stored suspicious-address reports, most recent first
    pub fn marks(&self) -> Vec<MarkRecord> {
        self.store.marks()
    }

    /// Validate and persist a suspicious-address report
    ///
    /// An empty address blocks the submission locally; nothing is
    /// written in that case.
    pub fn submit_mark(
        &mut self,
        address: impl Into<String>,
        risk_level: RiskLevel,
        note: impl Into<String>,
    ) -> AppResult<MarkRecord> {
        let mark = MarkRecord::new(address, risk_level, note)?;
        self.store.add_mark(mark.clone())?;
        Ok(mark)
    }

    // ============================================
    // Translations
    // ============================================

    /// Localized string for the active language
    pub fn t(&self, key: TextKey) -> &'static str {
        translate(self.settings.language, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::config::Language;

    fn temp_state() -> (tempfile::TempDir, AppState) {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::init(LocalStore::new(dir.path()));
        (dir, state)
    }

    #[test]
    fn test_wallet_flag_toggle() {
        let (_dir, mut state) = temp_state();
        assert!(!state.is_wallet_connected());

        state.connect_wallet();
        assert!(state.is_wallet_connected());

        state.disconnect_wallet();
        assert!(!state.is_wallet_connected());
    }

    #[test]
    fn test_translation_follows_active_language() {
        let (_dir, mut state) = temp_state();
        assert_eq!(state.t(TextKey::Check), "Risk Check");

        state
            .update_settings(SettingsUpdate::language(Language::Zh))
            .unwrap();
        assert_eq!(state.t(TextKey::Check), "风险检测");
    }

    #[test]
    fn test_empty_mark_is_blocked_and_not_written() {
        let (_dir, mut state) = temp_state();
        assert!(state.submit_mark("", RiskLevel::Dangerous, "note").is_err());
        assert!(state.marks().is_empty());
    }
}
