//! Dialog service boundary.
//!
//! The overlay/windowing primitive is injected: the trigger only knows how
//! to ask for an overlay and how to observe its single close notification.
//! The notification is a one-shot channel, fired at most once per handle
//! and never before the overlay's close event; a dropped sender reads as a
//! dismissal.

use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;

use crate::wallet::{Wallet, WalletName};

/// Hard overlay width cap, in terminal columns.
pub const MAX_WIDTH: u16 = 64;

/// Hard overlay height cap, as a percentage of the host area height.
pub const MAX_HEIGHT_PCT: u16 = 80;

/// Presentation configuration forwarded to the dialog service.
///
/// `panel_class` carries the host's style tokens verbatim; the size caps
/// are fixed by the trigger and not host-configurable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogConfig {
    pub panel_class: Vec<String>,
    pub max_width: u16,
    pub max_height_pct: u16,
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            panel_class: Vec::new(),
            max_width: MAX_WIDTH,
            max_height_pct: MAX_HEIGHT_PCT,
        }
    }
}

/// One open request: the wallet list to present plus presentation config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogRequest {
    pub wallets: Vec<Wallet>,
    pub config: DialogConfig,
}

/// Outcome of polling a [`DialogHandle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogPoll {
    /// Overlay still open.
    Open,
    /// Overlay closed with the user's choice, or `None` on dismissal.
    Closed(Option<WalletName>),
}

/// Receiving side of the one-shot close notification.
#[derive(Debug)]
pub struct DialogHandle {
    closed: oneshot::Receiver<Option<WalletName>>,
}

impl DialogHandle {
    /// Creates a linked closer/handle pair.
    pub fn channel() -> (DialogCloser, DialogHandle) {
        let (tx, rx) = oneshot::channel();
        (DialogCloser { tx }, DialogHandle { closed: rx })
    }

    /// Drains the close notification without blocking.
    ///
    /// A dropped closer counts as a dismissal: the overlay went away
    /// without reporting a choice.
    pub fn poll(&mut self) -> DialogPoll {
        match self.closed.try_recv() {
            Ok(result) => DialogPoll::Closed(result),
            Err(TryRecvError::Empty) => DialogPoll::Open,
            Err(TryRecvError::Closed) => DialogPoll::Closed(None),
        }
    }
}

/// Sending side of the close notification. Consumed on close, so the
/// notification cannot fire twice.
#[derive(Debug)]
pub struct DialogCloser {
    tx: oneshot::Sender<Option<WalletName>>,
}

impl DialogCloser {
    /// Closes the overlay with the user's choice, or `None` on dismissal.
    /// A missing receiver means the trigger went away; nothing to do then.
    pub fn close(self, result: Option<WalletName>) {
        let _ = self.tx.send(result);
    }
}

/// Capability to display the selection overlay.
///
/// Implementations own the windowing primitive (a TUI layer, a test fake).
/// Opening must not block: the returned handle resolves later, through the
/// overlay's close event.
pub trait DialogService {
    fn open_overlay(&mut self, request: DialogRequest) -> DialogHandle;
}
