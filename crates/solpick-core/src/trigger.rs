//! Picker trigger: the entry point hosts use to request the overlay.
//!
//! Concurrency policy is switch/exhaust: while an accepted open request is
//! unresolved, further `open` calls are dropped — not queued, not
//! cancelled, not an error. Eligibility returns once the close
//! notification has been observed by [`PickerTrigger::poll_closed`].

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::dialog::{DialogConfig, DialogHandle, DialogPoll, DialogRequest, DialogService};
use crate::wallet::{Wallet, WalletName};

/// Style-class token always forwarded to the dialog service, ahead of any
/// host-supplied tokens.
pub const BASE_PANEL_CLASS: &str = "wallet-picker";

/// Opens the selection overlay and routes its result to the host.
///
/// Owns the `is_open` flag exclusively; the overlay never touches trigger
/// state and reports back only through its dialog handle.
#[derive(Debug)]
pub struct PickerTrigger<S> {
    service: S,
    selections: mpsc::UnboundedSender<WalletName>,
    panel_class: Vec<String>,
    is_open: bool,
    pending: Option<DialogHandle>,
}

impl<S: DialogService> PickerTrigger<S> {
    pub fn new(service: S, selections: mpsc::UnboundedSender<WalletName>) -> Self {
        Self::with_panel_class(service, selections, Vec::new())
    }

    /// `panel_class` tokens are forwarded verbatim after [`BASE_PANEL_CLASS`].
    pub fn with_panel_class(
        service: S,
        selections: mpsc::UnboundedSender<WalletName>,
        panel_class: Vec<String>,
    ) -> Self {
        Self {
            service,
            selections,
            panel_class,
            is_open: false,
            pending: None,
        }
    }

    /// Asks the dialog service to display the picker for `wallets`.
    ///
    /// Dropped while a previous request is still open.
    pub fn open(&mut self, wallets: Vec<Wallet>) {
        if self.is_open {
            debug!("picker already open, dropping open request");
            return;
        }

        self.is_open = true;
        let request = DialogRequest {
            wallets,
            config: DialogConfig {
                panel_class: self.full_panel_class(),
                ..DialogConfig::default()
            },
        };
        self.pending = Some(self.service.open_overlay(request));
    }

    /// Drains the close notification, if any. Call once per event-loop tick.
    ///
    /// On a present result the selection is forwarded to the host channel,
    /// then `is_open` resets; a dismissal only resets `is_open`.
    pub fn poll_closed(&mut self) {
        let Some(handle) = self.pending.as_mut() else {
            return;
        };

        match handle.poll() {
            DialogPoll::Open => {}
            DialogPoll::Closed(result) => {
                self.pending = None;
                if let Some(name) = result
                    && self.selections.send(name).is_err()
                {
                    warn!("selection receiver dropped, discarding pick");
                }
                self.is_open = false;
            }
        }
    }

    /// Whether an accepted open request is still unresolved.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    fn full_panel_class(&self) -> Vec<String> {
        let mut class = Vec::with_capacity(self.panel_class.len() + 1);
        class.push(BASE_PANEL_CLASS.to_string());
        class.extend(self.panel_class.iter().cloned());
        class
    }
}
