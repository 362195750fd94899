//! Mock Analysis Service
//!
//! The "risk engine" of the demo: a fixed decision table keyed on the
//! interaction type and a known-bad address marker, behind an artificial
//! delay that stands in for network latency. No payload or bytecode
//! inspection happens, there is no randomness, and the service never
//! fails - every call resolves to a verdict.
//!
//! Idempotent for identical inputs modulo the `analyzed_at` timestamp.

use std::time::Duration;

use chrono::Utc;
use tracing::{debug, info};

use crate::models::config::RiskSensitivity;
use crate::models::types::{AnalysisResult, RiskLevel, TxType};
use crate::utils::constants::{
    ANALYSIS_CONFIDENCE, ANALYSIS_DELAY_MS, BAD_ADDRESS_MARKER, REASON_CAUTION, REASON_DANGEROUS,
    REASON_SAFE, SCORE_CAUTION, SCORE_DANGEROUS, SCORE_SAFE, SIGNALS_CAUTION, SIGNALS_DANGEROUS,
    SIGNALS_SAFE,
};

/// Target descriptor for a mock analysis
#[derive(Debug, Clone, Default)]
pub struct TxRequest {
    /// Target address or contract
    pub to: Option<String>,
    /// Interaction type, when known
    pub tx_type: Option<TxType>,
    /// Chain the interaction would run on (accepted, not consulted)
    pub chain_id: Option<u64>,
}

impl TxRequest {
    /// Descriptor for a plain transfer to an address
    pub fn transfer_to(address: impl Into<String>) -> Self {
        Self {
            to: Some(address.into()),
            tx_type: Some(TxType::Transfer),
            chain_id: None,
        }
    }
}

/// Tunables for the mock service
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Artificial latency before the verdict resolves
    pub delay: Duration,
    /// Constant confidence attached to every verdict
    pub confidence: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(ANALYSIS_DELAY_MS),
            confidence: ANALYSIS_CONFIDENCE,
        }
    }
}

/// The mock risk analyzer
pub struct MockAnalyzer {
    config: AnalyzerConfig,
}

impl Default for MockAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAnalyzer {
    /// Create an analyzer with the standard 500ms delay
    pub fn new() -> Self {
        Self {
            config: AnalyzerConfig::default(),
        }
    }

    /// Create an analyzer with custom tunables (tests use a zero delay)
    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Analyze a transaction descriptor
    ///
    /// Sensitivity is part of the contract but does not alter the fixed
    /// decision table; it is logged for visibility only.
    pub async fn analyze_tx(
        &self,
        request: &TxRequest,
        sensitivity: RiskSensitivity,
    ) -> AnalysisResult {
        debug!(
            "🔍 Analyzing target={:?} tx_type={:?} sensitivity={}",
            request.to,
            request.tx_type,
            sensitivity.as_str()
        );

        // Simulated network fetch
        tokio::time::sleep(self.config.delay).await;

        let target = request.to.clone().unwrap_or_default();
        let (final_risk, score, signals, reason) = Self::decide(request.tx_type, &target);

        info!(
            "{} Verdict for {}: {} (score {})",
            final_risk.emoji(),
            if target.is_empty() { "<no target>" } else { &target },
            final_risk.as_str(),
            score
        );

        AnalysisResult {
            final_risk,
            score,
            reason: reason.to_string(),
            signals: signals.iter().map(|s| s.to_string()).collect(),
            confidence: self.config.confidence,
            analyzed_at: Utc::now(),
            target: request.to.clone(),
        }
    }

    /// Analyze a standalone address (address-check flow)
    pub async fn analyze_address(&self, address: &str) -> AnalysisResult {
        self.analyze_tx(&TxRequest::transfer_to(address), RiskSensitivity::Standard)
            .await
    }

    /// The fixed decision table
    fn decide(tx_type: Option<TxType>, target: &str) -> (RiskLevel, u8, &'static [&'static str], &'static str) {
        if tx_type == Some(TxType::Sign) || target.contains(BAD_ADDRESS_MARKER) {
            (RiskLevel::Dangerous, SCORE_DANGEROUS, &SIGNALS_DANGEROUS, REASON_DANGEROUS)
        } else if tx_type == Some(TxType::Approve) {
            (RiskLevel::Caution, SCORE_CAUTION, &SIGNALS_CAUTION, REASON_CAUTION)
        } else {
            (RiskLevel::Safe, SCORE_SAFE, &SIGNALS_SAFE, REASON_SAFE)
        }
    }
}
