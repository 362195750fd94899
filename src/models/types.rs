//! Type definitions for Sentinel Guard
//! All core data structures for mock risk analysis and local persistence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::errors::{AppError, AppResult};

/// Risk level classification for analyzed targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Interaction appears safe
    Safe,
    /// Proceed with caution - unverified or freshly deployed target
    Caution,
    /// High probability of fund loss (drainer, honeypot)
    Dangerous,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "safe",
            RiskLevel::Caution => "caution",
            RiskLevel::Dangerous => "dangerous",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "✅",
            RiskLevel::Caution => "🟠",
            RiskLevel::Dangerous => "💀",
        }
    }

    /// Get color code for UI badges
    pub fn color_code(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "#10b981",      // Emerald
            RiskLevel::Caution => "#f59e0b",   // Amber
            RiskLevel::Dangerous => "#ef4444", // Red
        }
    }

    /// Severity rank for display ordering (higher = worse)
    pub fn severity(&self) -> u8 {
        *self as u8
    }
}

/// Transaction interaction types the mock service understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxType {
    Approve,
    Swap,
    Transfer,
    Sign,
}

impl TxType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxType::Approve => "approve",
            TxType::Swap => "swap",
            TxType::Transfer => "transfer",
            TxType::Sign => "sign",
        }
    }
}

/// Verdict produced by the mock analysis service
///
/// Immutable once created - only `MockAnalyzer` constructs these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Overall risk verdict
    pub final_risk: RiskLevel,
    /// Granular score (0-100, higher = safer)
    pub score: u8,
    /// Human-readable explanation of the verdict
    pub reason: String,
    /// Short justification strings backing the verdict
    pub signals: Vec<String>,
    /// Confidence fraction (0.0-1.0)
    pub confidence: f64,
    /// Timestamp of analysis
    pub analyzed_at: DateTime<Utc>,
    /// Target address, when one was supplied
    pub target: Option<String>,
}

impl AnalysisResult {
    /// Pretty print the verdict for console output
    pub fn summary(&self) -> String {
        let mut output = format!(
            "\n{} Risk: {} | Score: {}/100 | Confidence: {:.0}%\n",
            self.final_risk.emoji(),
            self.final_risk.as_str().to_uppercase(),
            self.score,
            self.confidence * 100.0
        );
        if let Some(target) = &self.target {
            output.push_str(&format!("   Target: {}\n", target));
        }
        output.push_str(&format!("   Reason: {}\n", self.reason));
        if !self.signals.is_empty() {
            output.push_str("   Signals:\n");
            for signal in &self.signals {
                output.push_str(&format!("     - {}\n", signal));
            }
        }
        output
    }
}

/// Which flow produced a history entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckKind {
    /// Simulated transaction confirmation
    Tx,
    /// Standalone address check
    Address,
}

/// A past analysis kept in the capped history log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryItem {
    /// Generated identifier
    pub id: String,
    /// Flow that produced this entry
    pub kind: CheckKind,
    /// Address or contract that was checked
    pub target: String,
    /// Interaction type, when the entry came from a transaction flow
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_type: Option<TxType>,
    /// The verdict itself
    pub result: AnalysisResult,
}

impl HistoryItem {
    /// Record a transaction-flow verdict
    pub fn from_tx(result: AnalysisResult, target: impl Into<String>, tx_type: TxType) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind: CheckKind::Tx,
            target: target.into(),
            tx_type: Some(tx_type),
            result,
        }
    }

    /// Record an address-check verdict
    pub fn from_address(result: AnalysisResult, target: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind: CheckKind::Address,
            target: target.into(),
            tx_type: None,
            result,
        }
    }
}

/// User-submitted "suspicious address" report
///
/// Append-only: never mutated or evicted once stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkRecord {
    pub id: String,
    pub address: String,
    pub risk_level: RiskLevel,
    pub note: String,
    pub timestamp: DateTime<Utc>,
}

impl MarkRecord {
    /// Build a report from form input
    ///
    /// Rejects an empty address locally, mirroring the required-field
    /// guard on the submission form.
    pub fn new(
        address: impl Into<String>,
        risk_level: RiskLevel,
        note: impl Into<String>,
    ) -> AppResult<Self> {
        let address = address.into();
        if address.trim().is_empty() {
            return Err(AppError::invalid_input("Suspicious address is required"));
        }

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            address,
            risk_level,
            note: note.into(),
            timestamp: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_level_severity_ordering() {
        assert!(RiskLevel::Safe.severity() < RiskLevel::Caution.severity());
        assert!(RiskLevel::Caution.severity() < RiskLevel::Dangerous.severity());
    }

    #[test]
    fn test_risk_level_serializes_lowercase() {
        let json = serde_json::to_string(&RiskLevel::Dangerous).unwrap();
        assert_eq!(json, "\"dangerous\"");
    }

    #[test]
    fn test_mark_record_rejects_empty_address() {
        let err = MarkRecord::new("   ", RiskLevel::Dangerous, "drainer").unwrap_err();
        assert_eq!(err.code_str(), "INVALID_INPUT");
    }

    #[test]
    fn test_history_item_serialized_shape() {
        let result = AnalysisResult {
            final_risk: RiskLevel::Safe,
            score: 95,
            reason: "ok".to_string(),
            signals: vec![],
            confidence: 0.92,
            analyzed_at: Utc::now(),
            target: None,
        };
        let item = HistoryItem::from_address(result, "0xabc");
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["kind"], "address");
        assert_eq!(json["result"]["score"], 95);
        // Address checks carry no interaction type
        assert!(json.get("tx_type").is_none());
    }
}
