//! Wallet descriptions supplied by the host application.
//!
//! The core never produces these values; it only partitions and routes
//! them. Serde support exists so hosts can keep wallet lists in JSON files.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque wallet identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WalletName(String);

impl WalletName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WalletName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WalletName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for WalletName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Readiness classification reported by the host for each wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadyState {
    /// Ready to connect immediately.
    Installed,
    /// Available but not yet active (e.g. installable on demand).
    Loadable,
    /// Neither installed nor confirmed loadable.
    NotDetected,
    /// Cannot run in this environment; never offered by the picker.
    Unsupported,
}

impl ReadyState {
    /// Short lowercase label for list rows and CLI output.
    pub fn label(self) -> &'static str {
        match self {
            ReadyState::Installed => "installed",
            ReadyState::Loadable => "loadable",
            ReadyState::NotDetected => "not detected",
            ReadyState::Unsupported => "unsupported",
        }
    }
}

/// One selectable connection candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    pub name: WalletName,
    pub ready_state: ReadyState,
    /// Opaque renderable payload, handed untouched to the item renderer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Wallet {
    pub fn new(name: impl Into<WalletName>, ready_state: ReadyState) -> Self {
        Self {
            name: name.into(),
            ready_state,
            icon: None,
        }
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}
