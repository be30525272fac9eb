//! Pure partition and recommendation policy over a wallet list.
//!
//! Everything here is a plain function of the input sequence: no hidden
//! state, no recomputation on interaction. The overlay computes its
//! partition once at construction and reads it for the rest of its life.

use crate::wallet::{ReadyState, Wallet};

/// Derived grouping of a wallet list.
///
/// `installed` and `other` together cover exactly the Installed, Loadable
/// and NotDetected wallets of the input; any other readiness class is
/// excluded from both. Relative input order is preserved within each class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletPartition {
    /// Wallets ready to connect immediately, in input order.
    pub installed: Vec<Wallet>,
    /// Loadable wallets followed by not-detected wallets, each in input order.
    pub other: Vec<Wallet>,
    /// Wallet proposed by the call-to-action when nothing is installed.
    /// `None` only for an input with no eligible candidates.
    pub recommended: Option<Wallet>,
}

impl WalletPartition {
    pub fn new(wallets: &[Wallet]) -> Self {
        let by_state = |state: ReadyState| {
            wallets
                .iter()
                .filter(move |wallet| wallet.ready_state == state)
                .cloned()
        };

        let installed: Vec<Wallet> = by_state(ReadyState::Installed).collect();
        let other: Vec<Wallet> = by_state(ReadyState::Loadable)
            .chain(by_state(ReadyState::NotDetected))
            .collect();
        let recommended = recommended_default(wallets, &installed, &other);

        Self {
            installed,
            other,
            recommended,
        }
    }

    pub fn has_installed(&self) -> bool {
        !self.installed.is_empty()
    }
}

/// First installed wallet wins. Otherwise a fixed onboarding preference
/// order: the wallet named "Phantom", then "Torus", then the first loadable
/// wallet, then the first remaining candidate.
fn recommended_default(
    wallets: &[Wallet],
    installed: &[Wallet],
    other: &[Wallet],
) -> Option<Wallet> {
    if let Some(first) = installed.first() {
        return Some(first.clone());
    }

    wallets
        .iter()
        .find(|wallet| wallet.name.as_str() == "Phantom")
        .or_else(|| wallets.iter().find(|wallet| wallet.name.as_str() == "Torus"))
        .or_else(|| {
            wallets
                .iter()
                .find(|wallet| wallet.ready_state == ReadyState::Loadable)
        })
        .cloned()
        .or_else(|| other.first().cloned())
}
