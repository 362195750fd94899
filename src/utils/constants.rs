//! Constants Module - Single Source of Truth
//!
//! Every fixed value the mock pipeline relies on lives here: storage
//! keys, the canned decision table (scores, reasons, signal sets), and
//! the demo addresses. No hardcoded values in other modules.

// ============================================
// APPLICATION CONSTANTS
// ============================================

/// Application name
pub const APP_NAME: &str = "Sentinel";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================
// STORAGE KEYS
// ============================================

/// Persisted settings record
pub const KEY_SETTINGS: &str = "sentinel_settings";
/// Persisted analysis history log
pub const KEY_HISTORY: &str = "sentinel_history";
/// Persisted suspicious-address reports
pub const KEY_MARKS: &str = "sentinel_marks";

/// History keeps at most this many entries (oldest dropped first)
pub const HISTORY_CAP: usize = 50;

// ============================================
// MOCK ANALYSIS CONSTANTS
// ============================================

/// Artificial delay simulating a network fetch (milliseconds)
pub const ANALYSIS_DELAY_MS: u64 = 500;

/// Fixed confidence attached to every verdict
pub const ANALYSIS_CONFIDENCE: f64 = 0.92;

/// Substring marking a known-bad demo address
pub const BAD_ADDRESS_MARKER: &str = "dead";

/// Scores per verdict (higher = safer)
pub const SCORE_SAFE: u8 = 95;
pub const SCORE_CAUTION: u8 = 65;
pub const SCORE_DANGEROUS: u8 = 10;

/// Reason strings per verdict
pub const REASON_SAFE: &str = "This interaction appears safe.";
pub const REASON_CAUTION: &str = "Interacting with a new contract. Verify legitimacy.";
pub const REASON_DANGEROUS: &str = "High probability of wallet drainer detected.";

/// Signal set backing a safe verdict
pub const SIGNALS_SAFE: [&str; 4] = [
    "Contract verified on Etherscan",
    "High liquidity detected (> $5M)",
    "Trusted protocol (Uniswap V3)",
    "No malicious functions found",
];

/// Signal set backing a caution verdict
pub const SIGNALS_CAUTION: [&str; 4] = [
    "Contract deployed < 24h ago",
    "Low liquidity pool",
    "Unverified source code",
    "Proxy pattern detected",
];

/// Signal set backing a dangerous verdict
pub const SIGNALS_DANGEROUS: [&str; 4] = [
    "Known phishing drainer wallet",
    "Malicious 'setApprovalForAll' detected",
    "Funds flow to mixer",
    "Honeypot logic identified",
];

// ============================================
// DEMO ADDRESSES
// ============================================

/// Uniswap token contract - resolves safe
pub const MOCK_ADDRESS_SAFE: &str = "0x1f9840a85d5af5bf1d1762f925bdaddc4201f984";
/// WETH contract - used by the unknown-approval scenario
pub const MOCK_ADDRESS_CAUTION: &str = "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2";
/// Fabricated drainer address, matches the known-bad marker
pub const MOCK_ADDRESS_DANGER: &str = "0xdead000000000000000042069scam00000000000";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_danger_address_matches_marker() {
        assert!(MOCK_ADDRESS_DANGER.contains(BAD_ADDRESS_MARKER));
        assert!(!MOCK_ADDRESS_SAFE.contains(BAD_ADDRESS_MARKER));
        assert!(!MOCK_ADDRESS_CAUTION.contains(BAD_ADDRESS_MARKER));
    }
}
