//! TUI implementation of the dialog service boundary.
//!
//! `open_overlay` never constructs widgets directly: it enqueues the
//! accepted request on an inbox the runtime drains each frame, so overlay
//! creation stays inside the single-threaded event loop.

use solpick_core::dialog::{DialogCloser, DialogHandle, DialogRequest, DialogService};
use tokio::sync::mpsc;
use tracing::warn;

/// An accepted open request, queued for the runtime.
#[derive(Debug)]
pub struct OpenedDialog {
    pub request: DialogRequest,
    pub closer: DialogCloser,
}

/// Channel-backed dialog service handed to the trigger.
#[derive(Debug)]
pub struct TuiDialogService {
    tx: mpsc::UnboundedSender<OpenedDialog>,
}

impl TuiDialogService {
    /// Creates the service plus the inbox the runtime drains.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<OpenedDialog>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl DialogService for TuiDialogService {
    fn open_overlay(&mut self, request: DialogRequest) -> DialogHandle {
        let (closer, handle) = DialogHandle::channel();
        if self.tx.send(OpenedDialog { request, closer }).is_err() {
            // Runtime gone; the dropped closer resolves the handle as dismissed.
            warn!("dialog inbox closed, open request resolves as dismissed");
        }
        handle
    }
}
