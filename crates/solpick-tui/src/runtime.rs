//! TUI runtime: owns the terminal, runs the event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here. The
//! reducer stays pure and produces effects; this module executes them.
//!
//! The dialog service and the trigger's output channel both feed inboxes
//! the runtime drains each frame, so everything runs on one thread in
//! reaction to discrete events.

use std::io::Stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use solpick_core::{PickerTrigger, Wallet, WalletName};
use tokio::sync::mpsc;

use crate::dialog::{OpenedDialog, TuiDialogService};
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Poll cadence while the user is interacting.
const FRAME_DURATION: Duration = Duration::from_millis(16);

/// Poll cadence when idle; longer timeout reduces CPU usage.
const IDLE_POLL_DURATION: Duration = Duration::from_millis(100);

/// Full-screen demo host runtime.
///
/// Terminal state is restored on drop, so panics and errors unwind
/// cleanly back to a usable shell.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    trigger: PickerTrigger<TuiDialogService>,
    dialog_rx: mpsc::UnboundedReceiver<OpenedDialog>,
    selection_rx: mpsc::UnboundedReceiver<WalletName>,
    last_input: Instant,
}

impl TuiRuntime {
    pub fn new(wallets: Vec<Wallet>, panel_class: Vec<String>) -> Result<Self> {
        // Panic hook BEFORE entering the alternate screen.
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        let (service, dialog_rx) = TuiDialogService::new();
        let (selection_tx, selection_rx) = mpsc::unbounded_channel();
        let trigger = PickerTrigger::with_panel_class(service, selection_tx, panel_class);

        Ok(Self {
            terminal,
            state: AppState::new(wallets),
            trigger,
            dialog_rx,
            selection_rx,
            last_input: Instant::now(),
        })
    }

    /// Runs the event loop until quit; returns the last selection, if any.
    pub fn run(&mut self) -> Result<Option<WalletName>> {
        self.event_loop()?;
        Ok(self.state.tui.connected.clone())
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true; // Start dirty to ensure initial render

        while !self.state.tui.should_quit {
            let events = self.collect_events()?;

            for event in events {
                if !matches!(event, UiEvent::Tick) {
                    dirty = true;
                }
                if matches!(event, UiEvent::Key(_)) {
                    self.last_input = Instant::now();
                }

                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
            }

            if dirty {
                self.terminal
                    .draw(|frame| render::render(&self.state, frame))?;
                dirty = false;
            }
        }

        Ok(())
    }

    /// Collects events from all sources: terminal input, the dialog-service
    /// inbox, and the trigger's selection channel.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        // Close notifications first, so selections forwarded by the trigger
        // are visible in the same frame.
        self.trigger.poll_closed();
        self.state.tui.picker_open = self.trigger.is_open();

        while let Ok(opened) = self.dialog_rx.try_recv() {
            events.push(UiEvent::DialogOpened(opened));
        }
        while let Ok(name) = self.selection_rx.try_recv() {
            events.push(UiEvent::WalletSelected(name));
        }

        // Fast cadence right after input keeps navigation snappy; otherwise
        // poll slowly. Skip the wait entirely when events are queued.
        let recently_active = self.last_input.elapsed() < IDLE_POLL_DURATION;
        let poll_duration = if !events.is_empty() {
            Duration::ZERO
        } else if recently_active {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        if event::poll(poll_duration)? {
            while event::poll(Duration::ZERO)? {
                match event::read()? {
                    Event::Key(key) if key.kind != KeyEventKind::Release => {
                        events.push(UiEvent::Key(key));
                    }
                    Event::Resize(_, _) => events.push(UiEvent::Resize),
                    _ => {}
                }
            }
        }

        events.push(UiEvent::Tick);
        Ok(events)
    }

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => self.state.tui.should_quit = true,
            UiEffect::OpenPicker => {
                self.trigger.open(self.state.tui.wallets.clone());
                self.state.tui.picker_open = self.trigger.is_open();
            }
        }
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
