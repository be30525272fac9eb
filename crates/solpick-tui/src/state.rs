//! Application state for the demo host.
//!
//! State is split between `TuiState` (host screen) and the modal overlay
//! slot, so overlay handlers can take `&mut` on both sides without borrow
//! conflicts.

use solpick_core::{Wallet, WalletName};

use crate::overlays::WalletPickerState;

/// Combined state: host screen plus the overlay slot.
pub struct AppState {
    pub tui: TuiState,
    pub overlay: Option<WalletPickerState>,
}

impl AppState {
    pub fn new(wallets: Vec<Wallet>) -> Self {
        Self {
            tui: TuiState {
                should_quit: false,
                wallets,
                connected: None,
                picker_open: false,
            },
            overlay: None,
        }
    }
}

/// Host screen state (non-overlay).
pub struct TuiState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// Wallet list the host offers on each open request.
    pub wallets: Vec<Wallet>,
    /// Last selection the trigger forwarded to the host channel.
    pub connected: Option<WalletName>,
    /// Mirror of the trigger's `is_open` flag, for the status line.
    pub picker_open: bool,
}
