//! Events consumed by the reducer. The runtime collects these each frame.

use crossterm::event::KeyEvent;
use solpick_core::WalletName;

use crate::dialog::OpenedDialog;

#[derive(Debug)]
pub enum UiEvent {
    /// Poll tick; nothing happened.
    Tick,
    /// Key press from the terminal.
    Key(KeyEvent),
    /// Terminal resize; forces a redraw.
    Resize,
    /// The dialog service accepted an open request.
    DialogOpened(OpenedDialog),
    /// The trigger forwarded a selection through the host output channel.
    WalletSelected(WalletName),
}
