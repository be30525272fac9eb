//! Wallet list input for the demo host.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use solpick_core::{ReadyState, Wallet};

/// Loads a wallet list from a JSON file, or the built-in sample set.
pub fn load(path: Option<&Path>) -> Result<Vec<Wallet>> {
    let Some(path) = path else {
        return Ok(sample_wallets());
    };

    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read wallet list {}", path.display()))?;
    let wallets: Vec<Wallet> = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid wallet list {}", path.display()))?;
    Ok(wallets)
}

/// Built-in sample roughly matching a stock wallet-adapter setup.
pub fn sample_wallets() -> Vec<Wallet> {
    vec![
        Wallet::new("Phantom", ReadyState::Installed).with_icon("👻"),
        Wallet::new("Solflare", ReadyState::Loadable).with_icon("🔆"),
        Wallet::new("Torus", ReadyState::Loadable).with_icon("🌀"),
        Wallet::new("Ledger", ReadyState::NotDetected).with_icon("🔑"),
        Wallet::new("Sollet", ReadyState::NotDetected),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_covers_every_offered_readiness_class() {
        let wallets = sample_wallets();
        for state in [
            ReadyState::Installed,
            ReadyState::Loadable,
            ReadyState::NotDetected,
        ] {
            assert!(wallets.iter().any(|w| w.ready_state == state));
        }
    }
}
