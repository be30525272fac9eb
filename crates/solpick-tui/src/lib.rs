//! Ratatui front end for the wallet picker.
//!
//! This crate supplies the two collaborators `solpick-core` leaves
//! abstract: a [`dialog::TuiDialogService`] that presents the overlay
//! inside the host's event loop, and the per-wallet row renderer in
//! [`overlays::wallet_row`]. It also ships a small demo host screen so the
//! picker can be exercised end to end from the CLI.

pub mod dialog;
pub mod effects;
pub mod events;
pub mod overlays;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stdout};

use anyhow::Result;
pub use runtime::TuiRuntime;
use solpick_core::{Wallet, WalletName};

/// Runs the demo host until the user quits.
///
/// Returns the last wallet the trigger emitted, if any.
pub fn run_picker(wallets: Vec<Wallet>, panel_class: Vec<String>) -> Result<Option<WalletName>> {
    if !stdout().is_terminal() {
        anyhow::bail!(
            "The wallet picker requires a terminal.\n\
             Use `solpick list` for non-interactive output."
        );
    }

    let mut runtime = TuiRuntime::new(wallets, panel_class)?;
    runtime.run()
}
