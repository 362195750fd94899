//! Typed translation lookup
//!
//! The original app resolved translations through dynamic string keys.
//! Here the keys are an enum, so a typo is a compile error instead of a
//! silently missing label. Fallback rule: a locale miss resolves to the
//! English string, and an English miss resolves to the raw key name -
//! lookup never panics.
//!
//! Only the strings the demo flows consume are carried; the full page
//! dictionaries of the original are presentation content and stay out.

use crate::models::config::Language;

/// Enumerated UI text keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKey {
    Dashboard,
    Check,
    CheckDesc,
    Analyze,
    EnterAddress,
    LooksSafe,
    RiskFound,
    Mark,
    MarkDesc,
    MarkSubmitted,
    Scenarios,
    SimulationGuide,
    Settings,
    ConnectWallet,
    DisconnectWallet,
    History,
    Confidence,
    Signals,
}

impl TextKey {
    /// Raw key name, used as the last-resort fallback
    pub fn as_str(&self) -> &'static str {
        match self {
            TextKey::Dashboard => "dashboard",
            TextKey::Check => "check",
            TextKey::CheckDesc => "check_desc",
            TextKey::Analyze => "analyze",
            TextKey::EnterAddress => "enter_address",
            TextKey::LooksSafe => "looks_safe",
            TextKey::RiskFound => "risk_found",
            TextKey::Mark => "mark",
            TextKey::MarkDesc => "mark_desc",
            TextKey::MarkSubmitted => "mark_submitted",
            TextKey::Scenarios => "scenarios",
            TextKey::SimulationGuide => "simulation_guide",
            TextKey::Settings => "settings",
            TextKey::ConnectWallet => "connect_wallet",
            TextKey::DisconnectWallet => "disconnect_wallet",
            TextKey::History => "history",
            TextKey::Confidence => "confidence",
            TextKey::Signals => "signals",
        }
    }
}

/// English table - the complete reference locale
fn lookup_en(key: TextKey) -> Option<&'static str> {
    let text = match key {
        TextKey::Dashboard => "Dashboard",
        TextKey::Check => "Risk Check",
        TextKey::CheckDesc => "Paste any address to scan it against known threats.",
        TextKey::Analyze => "Analyze",
        TextKey::EnterAddress => "Enter address (0x...)",
        TextKey::LooksSafe => "Looks Safe",
        TextKey::RiskFound => "Risk Found",
        TextKey::Mark => "Mark Suspicious",
        TextKey::MarkDesc => "Report an address you believe is malicious.",
        TextKey::MarkSubmitted => "Report Submitted",
        TextKey::Scenarios => "Simulation Scenarios",
        TextKey::SimulationGuide => "Pick a scenario and confirm it in the fake wallet.",
        TextKey::Settings => "Settings",
        TextKey::ConnectWallet => "Connect Wallet",
        TextKey::DisconnectWallet => "Disconnect",
        TextKey::History => "History",
        TextKey::Confidence => "Confidence",
        TextKey::Signals => "Signals",
    };
    Some(text)
}

/// Chinese table - intentionally partial, exercising the fallback rule
fn lookup_zh(key: TextKey) -> Option<&'static str> {
    match key {
        TextKey::Dashboard => Some("仪表盘"),
        TextKey::Check => Some("风险检测"),
        TextKey::Analyze => Some("分析"),
        TextKey::EnterAddress => Some("输入地址 (0x...)"),
        TextKey::LooksSafe => Some("看起来安全"),
        TextKey::RiskFound => Some("发现风险"),
        TextKey::Mark => Some("标记可疑"),
        TextKey::Scenarios => Some("模拟场景"),
        TextKey::Settings => Some("设置"),
        TextKey::ConnectWallet => Some("连接钱包"),
        TextKey::DisconnectWallet => Some("断开连接"),
        TextKey::History => Some("历史记录"),
        _ => None,
    }
}

/// Resolve a key for a locale, applying the fallback chain
pub fn translate(language: Language, key: TextKey) -> &'static str {
    let localized = match language {
        Language::En => lookup_en(key),
        Language::Zh => lookup_zh(key),
    };

    localized
        .or_else(|| lookup_en(key))
        .unwrap_or_else(|| key.as_str())
}
