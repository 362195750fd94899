//! Integration tests for Sentinel Guard
//!
//! Exercises the persistence contracts against real temp directories and
//! the full session flow (analyze -> history -> reload).

use std::fs;
use std::time::Duration;

use tempfile::TempDir;

use sentinel_guard::{
    AnalyzerConfig, AppState, HistoryItem, Language, LocalStore, MockAnalyzer, RiskLevel,
    RiskSensitivity, SettingsUpdate, Theme, TxRequest, TxType,
};

fn fast_analyzer() -> MockAnalyzer {
    MockAnalyzer::with_config(AnalyzerConfig {
        delay: Duration::ZERO,
        confidence: 0.92,
    })
}

async fn history_item(target: &str) -> HistoryItem {
    let result = fast_analyzer().analyze_address(target).await;
    HistoryItem::from_address(result, target)
}

#[test]
fn test_settings_round_trip() {
    let dir = TempDir::new().unwrap();
    let store = LocalStore::new(dir.path());

    let mut settings = store.settings();
    settings.language = Language::Zh;
    settings.theme = Theme::Light;
    store.save_settings(&settings).unwrap();

    // A fresh store over the same directory sees the last-written value
    let reloaded = LocalStore::new(dir.path()).settings();
    assert_eq!(reloaded, settings);
}

#[test]
fn test_settings_backfill_missing_fields() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("sentinel_settings.json"),
        r#"{"theme":"light"}"#,
    )
    .unwrap();

    let settings = LocalStore::new(dir.path()).settings();
    assert_eq!(settings.theme, Theme::Light);
    // Everything absent resolves to documented defaults
    assert_eq!(settings.language, Language::En);
    assert_eq!(settings.risk_sensitivity, RiskSensitivity::Standard);
}

#[test]
fn test_malformed_persisted_data_is_fail_soft() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("sentinel_settings.json"), "not json {{{").unwrap();
    fs::write(dir.path().join("sentinel_history.json"), "\"wrong shape\"").unwrap();
    fs::write(dir.path().join("sentinel_marks.json"), "42").unwrap();

    let store = LocalStore::new(dir.path());
    assert_eq!(store.settings(), Default::default());
    assert!(store.history().is_empty());
    assert!(store.marks().is_empty());
}

#[test]
fn test_missing_files_resolve_to_defaults() {
    let dir = TempDir::new().unwrap();
    let store = LocalStore::new(dir.path().join("never_written"));

    assert_eq!(store.settings(), Default::default());
    assert!(store.history().is_empty());
    assert!(store.marks().is_empty());
}

#[tokio::test]
async fn test_history_capped_at_50_most_recent_first() {
    let dir = TempDir::new().unwrap();
    let store = LocalStore::new(dir.path());

    for i in 0..60 {
        let item = history_item(&format!("0x{:040x}", i)).await;
        store.add_history(item).unwrap();

        // Invariant holds after every insertion, not just at the end
        assert!(store.history().len() <= 50);
    }

    let history = store.history();
    assert_eq!(history.len(), 50);
    // Newest kept at the front, oldest ten evicted
    assert_eq!(history[0].target, format!("0x{:040x}", 59));
    assert_eq!(history[49].target, format!("0x{:040x}", 10));
}

#[tokio::test]
async fn test_history_round_trip() {
    let dir = TempDir::new().unwrap();
    let store = LocalStore::new(dir.path());

    let item = history_item("0xabc").await;
    store.add_history(item.clone()).unwrap();

    let reloaded = LocalStore::new(dir.path()).history();
    assert_eq!(reloaded, vec![item]);
}

#[test]
fn test_marks_prepend_without_truncation() {
    let dir = TempDir::new().unwrap();
    let store = LocalStore::new(dir.path());

    for i in 0..55 {
        let mark = sentinel_guard::MarkRecord::new(
            format!("0xmark{}", i),
            RiskLevel::Caution,
            "reported in test",
        )
        .unwrap();
        store.add_mark(mark).unwrap();
    }

    let marks = store.marks();
    assert_eq!(marks.len(), 55);
    assert_eq!(marks[0].address, "0xmark54");
    assert_eq!(marks[54].address, "0xmark0");
}

#[tokio::test]
async fn test_full_session_flow() {
    let dir = TempDir::new().unwrap();
    let mut app = AppState::init(LocalStore::new(dir.path()));
    let analyzer = fast_analyzer();

    app.connect_wallet();

    // Simulated confirmation of a dangerous signature request
    let request = TxRequest {
        to: Some("0xdeadbeef".to_string()),
        tx_type: Some(TxType::Sign),
        chain_id: Some(1),
    };
    let result = analyzer
        .analyze_tx(&request, app.settings().risk_sensitivity)
        .await;
    assert_eq!(result.final_risk, RiskLevel::Dangerous);

    app.add_to_history(HistoryItem::from_tx(result, "0xdeadbeef", TxType::Sign))
        .unwrap();
    app.update_settings(SettingsUpdate::language(Language::Zh))
        .unwrap();
    app.submit_mark("0xdeadbeef", RiskLevel::Dangerous, "drainer")
        .unwrap();

    // A new session over the same store restores everything but the
    // wallet flag, which is in-memory only
    let restored = AppState::init(LocalStore::new(dir.path()));
    assert!(!restored.is_wallet_connected());
    assert_eq!(restored.settings().language, Language::Zh);
    assert_eq!(restored.history().len(), 1);
    assert_eq!(restored.history()[0].target, "0xdeadbeef");
    assert_eq!(restored.marks().len(), 1);
}

#[tokio::test]
async fn test_verdicts_are_idempotent_modulo_timestamp() {
    let analyzer = fast_analyzer();
    let request = TxRequest {
        to: Some("0x1234".to_string()),
        tx_type: Some(TxType::Approve),
        chain_id: None,
    };

    let a = analyzer.analyze_tx(&request, RiskSensitivity::Standard).await;
    let b = analyzer.analyze_tx(&request, RiskSensitivity::Standard).await;

    assert_eq!(a.final_risk, b.final_risk);
    assert_eq!(a.score, b.score);
    assert_eq!(a.reason, b.reason);
    assert_eq!(a.signals, b.signals);
    assert_eq!(a.confidence, b.confidence);
}
