//! Sentinel Guard - demo session driver
//!
//! Replays the flows of the original single-page app without the UI:
//! connect the fake wallet, run the three canned simulation scenarios
//! plus an address check through the mock analyzer, record everything in
//! the capped history, and file one suspicious-address report.

use eyre::Result;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use sentinel_guard::utils::constants::{
    APP_NAME, APP_VERSION, MOCK_ADDRESS_CAUTION, MOCK_ADDRESS_DANGER, MOCK_ADDRESS_SAFE,
};
use sentinel_guard::{
    AppState, HistoryItem, LocalStore, MockAnalyzer, RiskLevel, TextKey, TxRequest, TxType,
};

/// The canned scenarios from the simulation page
struct Scenario {
    label: &'static str,
    tx_type: TxType,
    address: &'static str,
}

const SCENARIOS: [Scenario; 3] = [
    Scenario {
        label: "Swap on a trusted protocol",
        tx_type: TxType::Swap,
        address: MOCK_ADDRESS_SAFE,
    },
    Scenario {
        label: "Unlimited approval to a new contract",
        tx_type: TxType::Approve,
        address: MOCK_ADDRESS_CAUTION,
    },
    Scenario {
        label: "Blind signature request",
        tx_type: TxType::Sign,
        address: MOCK_ADDRESS_DANGER,
    },
];

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();

    println!("🛡️  {} Guard v{} - transaction safety demo", APP_NAME, APP_VERSION);
    println!("    All analysis is mocked. No wallet, no network, no real risk engine.\n");

    let data_dir =
        std::env::var("SENTINEL_DATA_DIR").unwrap_or_else(|_| "./sentinel_data".to_string());
    let mut app = AppState::init(LocalStore::new(data_dir));
    let analyzer = MockAnalyzer::new();

    app.connect_wallet();

    // Simulation flow: each scenario goes through the wallet-confirm path
    println!("== {} ==", app.t(TextKey::Scenarios));
    for scenario in &SCENARIOS {
        println!("\n▶ {}", scenario.label);

        let request = TxRequest {
            to: Some(scenario.address.to_string()),
            tx_type: Some(scenario.tx_type),
            chain_id: Some(1),
        };
        let result = analyzer
            .analyze_tx(&request, app.settings().risk_sensitivity)
            .await;
        println!("{}", result.summary());

        app.add_to_history(HistoryItem::from_tx(
            result,
            scenario.address,
            scenario.tx_type,
        ))?;
    }

    // Address-check flow
    println!("== {} ==", app.t(TextKey::Check));
    let result = analyzer.analyze_address(MOCK_ADDRESS_SAFE).await;
    println!("{}", result.summary());
    app.add_to_history(HistoryItem::from_address(result, MOCK_ADDRESS_SAFE))?;

    // Mark flow: report the drainer address
    let mark = app.submit_mark(
        MOCK_ADDRESS_DANGER,
        RiskLevel::Dangerous,
        "Drained a wallet in the simulation demo",
    )?;
    println!("== {} ==", app.t(TextKey::Mark));
    println!("🚩 {} -> {}\n", mark.address, mark.risk_level.as_str());

    app.disconnect_wallet();

    println!("📜 {}: {} entries persisted", app.t(TextKey::History), app.history().len());
    Ok(())
}
