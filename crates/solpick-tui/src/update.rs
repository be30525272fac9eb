//! Reducer for the demo host.
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects; the reducer itself never touches the
//! trigger or the terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::overlays::{OverlayTransition, WalletPickerState};
use crate::state::AppState;

pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick | UiEvent::Resize => vec![],
        UiEvent::Key(key) => handle_key(app, key),
        UiEvent::DialogOpened(opened) => {
            app.overlay = Some(WalletPickerState::open(&opened.request, opened.closer));
            vec![]
        }
        UiEvent::WalletSelected(name) => {
            app.tui.connected = Some(name);
            vec![]
        }
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    // An active overlay takes over keyboard input.
    if app.overlay.is_some() {
        let transition = app.overlay.as_mut().map(|overlay| overlay.handle_key(key));
        if let Some(OverlayTransition::Close(result)) = transition
            && let Some(picker) = app.overlay.take()
        {
            picker.resolve(result);
        }
        return vec![];
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => vec![UiEffect::Quit],
        KeyCode::Char('c') if ctrl => vec![UiEffect::Quit],
        KeyCode::Char('w') | KeyCode::Enter => vec![UiEffect::OpenPicker],
        _ => vec![],
    }
}

#[cfg(test)]
mod tests {
    use solpick_core::dialog::{DialogConfig, DialogHandle, DialogPoll, DialogRequest};
    use solpick_core::{ReadyState, Wallet, WalletName};

    use super::*;
    use crate::dialog::OpenedDialog;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn opened_dialog(wallets: Vec<Wallet>) -> (OpenedDialog, DialogHandle) {
        let (closer, handle) = DialogHandle::channel();
        let request = DialogRequest {
            wallets,
            config: DialogConfig::default(),
        };
        (OpenedDialog { request, closer }, handle)
    }

    #[test]
    fn test_dialog_opened_installs_the_overlay() {
        let mut app = AppState::new(Vec::new());
        let (opened, _handle) =
            opened_dialog(vec![Wallet::new("Phantom", ReadyState::Installed)]);

        let effects = update(&mut app, UiEvent::DialogOpened(opened));
        assert!(effects.is_empty());
        assert!(app.overlay.is_some());
    }

    #[test]
    fn test_overlay_close_resolves_the_notification_once() {
        let mut app = AppState::new(Vec::new());
        let (opened, mut handle) =
            opened_dialog(vec![Wallet::new("Phantom", ReadyState::Installed)]);
        update(&mut app, UiEvent::DialogOpened(opened));

        let effects = update(&mut app, UiEvent::Key(key(KeyCode::Enter)));
        assert!(effects.is_empty());
        assert!(app.overlay.is_none());
        assert_eq!(
            handle.poll(),
            DialogPoll::Closed(Some(WalletName::from("Phantom")))
        );
    }

    #[test]
    fn test_overlay_swallows_host_keys_while_open() {
        let mut app = AppState::new(Vec::new());
        let (opened, _handle) =
            opened_dialog(vec![Wallet::new("Phantom", ReadyState::Installed)]);
        update(&mut app, UiEvent::DialogOpened(opened));

        // 'q' navigates nothing in the overlay and must not quit the host.
        let effects = update(&mut app, UiEvent::Key(key(KeyCode::Char('q'))));
        assert!(effects.is_empty());
        assert!(app.overlay.is_some());
    }

    #[test]
    fn test_host_keys_map_to_effects() {
        let mut app = AppState::new(Vec::new());
        assert_eq!(
            update(&mut app, UiEvent::Key(key(KeyCode::Char('w')))),
            [UiEffect::OpenPicker]
        );
        assert_eq!(
            update(&mut app, UiEvent::Key(key(KeyCode::Char('q')))),
            [UiEffect::Quit]
        );
    }

    #[test]
    fn test_selection_event_updates_host_state() {
        let mut app = AppState::new(Vec::new());
        update(
            &mut app,
            UiEvent::WalletSelected(WalletName::from("Solflare")),
        );
        assert_eq!(app.tui.connected, Some(WalletName::from("Solflare")));
    }
}
