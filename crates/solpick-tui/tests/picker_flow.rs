//! End-to-end coordination flow, without a terminal: trigger → dialog
//! service inbox → reducer/overlay → close notification → selection
//! channel. This is the same wiring the runtime drives each frame.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use solpick_core::{PickerTrigger, ReadyState, Wallet, WalletName};
use solpick_tui::dialog::TuiDialogService;
use solpick_tui::events::UiEvent;
use solpick_tui::state::AppState;
use solpick_tui::update::update;
use tokio::sync::mpsc;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn wallets() -> Vec<Wallet> {
    vec![
        Wallet::new("Phantom", ReadyState::Installed),
        Wallet::new("Solflare", ReadyState::Loadable),
    ]
}

#[test]
fn test_selection_round_trip_through_all_components() {
    let (service, mut dialog_rx) = TuiDialogService::new();
    let (selection_tx, mut selection_rx) = mpsc::unbounded_channel();
    let mut trigger = PickerTrigger::new(service, selection_tx);
    let mut app = AppState::new(wallets());

    // Host asks for the picker; the service queues exactly one overlay.
    trigger.open(wallets());
    trigger.open(wallets());
    let opened = dialog_rx.try_recv().expect("one overlay request");
    assert!(dialog_rx.try_recv().is_err());
    assert!(trigger.is_open());

    update(&mut app, UiEvent::DialogOpened(opened));

    // Expand the panel, walk to Solflare, select it.
    update(&mut app, UiEvent::Key(key(KeyCode::Tab)));
    update(&mut app, UiEvent::Key(key(KeyCode::Down)));
    update(&mut app, UiEvent::Key(key(KeyCode::Down)));
    update(&mut app, UiEvent::Key(key(KeyCode::Enter)));
    assert!(app.overlay.is_none());

    // The trigger observes the close notification and forwards the pick.
    trigger.poll_closed();
    assert!(!trigger.is_open());
    assert_eq!(
        selection_rx.try_recv().unwrap(),
        WalletName::from("Solflare")
    );
    assert!(selection_rx.try_recv().is_err());

    update(
        &mut app,
        UiEvent::WalletSelected(WalletName::from("Solflare")),
    );
    assert_eq!(app.tui.connected, Some(WalletName::from("Solflare")));
}

#[test]
fn test_dismissal_round_trip_emits_nothing() {
    let (service, mut dialog_rx) = TuiDialogService::new();
    let (selection_tx, mut selection_rx) = mpsc::unbounded_channel();
    let mut trigger = PickerTrigger::new(service, selection_tx);
    let mut app = AppState::new(wallets());

    trigger.open(wallets());
    let opened = dialog_rx.try_recv().expect("one overlay request");
    update(&mut app, UiEvent::DialogOpened(opened));

    update(&mut app, UiEvent::Key(key(KeyCode::Esc)));
    assert!(app.overlay.is_none());

    trigger.poll_closed();
    assert!(!trigger.is_open());
    assert!(selection_rx.try_recv().is_err());

    // Closed means eligible again: the next open request is accepted.
    trigger.open(wallets());
    assert!(dialog_rx.try_recv().is_ok());
}
