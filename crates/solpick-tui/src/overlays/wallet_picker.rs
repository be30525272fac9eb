//! Wallet picker overlay.
//!
//! One instance per open request: the partition and the recommendation are
//! computed at construction and never recomputed on interaction. The
//! overlay owns only its cursor and expand/collapse flag, and reports back
//! to the trigger exclusively through the dialog closer it was handed.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState};
use solpick_core::dialog::{DialogCloser, DialogConfig, DialogRequest};
use solpick_core::{WalletName, WalletPartition};

use super::OverlayTransition;
use super::render_utils::{InputHint, OverlayConfig, render_overlay};
use super::wallet_row;

/// One interactive row of the picker surface.
///
/// The call-to-action row is only ever constructed while a recommendation
/// exists, so activating it with an undefined recommendation is
/// unreachable by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PickerRow {
    /// Selectable installed wallet, by partition index.
    Installed(usize),
    /// Selectable wallet from the collapsible panel, by partition index.
    Other(usize),
    /// Call-to-action bound to the default recommendation.
    GetStarted,
    /// Expands or collapses the secondary panel.
    Toggle,
}

#[derive(Debug)]
pub struct WalletPickerState {
    partition: WalletPartition,
    config: DialogConfig,
    expanded: bool,
    cursor: usize,
    closer: DialogCloser,
}

impl WalletPickerState {
    /// Builds the overlay for one open request. Re-opening means a fresh
    /// instance; nothing here is recomputed later.
    pub fn open(request: &DialogRequest, closer: DialogCloser) -> Self {
        Self {
            partition: WalletPartition::new(&request.wallets),
            config: request.config.clone(),
            expanded: false,
            cursor: 0,
            closer,
        }
    }

    /// Fires the close notification. Consumes the overlay, so the
    /// notification goes out exactly once.
    pub fn resolve(self, result: Option<WalletName>) {
        self.closer.close(result);
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayTransition {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => OverlayTransition::Close(None),
            KeyCode::Char('c') if ctrl => OverlayTransition::Close(None),
            KeyCode::Up => {
                self.cursor = self.cursor.saturating_sub(1);
                OverlayTransition::Stay
            }
            KeyCode::Down => {
                let count = self.rows().len();
                if count > 0 && self.cursor < count - 1 {
                    self.cursor += 1;
                }
                OverlayTransition::Stay
            }
            KeyCode::Tab => {
                self.toggle_expanded();
                OverlayTransition::Stay
            }
            KeyCode::Enter => self.activate(),
            _ => OverlayTransition::Stay,
        }
    }

    /// The interaction surface, rebuilt from immutable partition data plus
    /// the local expand flag.
    ///
    /// Mode A (anything installed): installed rows, then the collapsible
    /// panel. Mode B: the call-to-action, then the collapsible panel. The
    /// toggle row is omitted entirely when the panel would be empty.
    fn rows(&self) -> Vec<PickerRow> {
        let mut rows = Vec::new();

        if self.partition.has_installed() {
            rows.extend((0..self.partition.installed.len()).map(PickerRow::Installed));
        } else if self.partition.recommended.is_some() {
            rows.push(PickerRow::GetStarted);
        }

        if !self.partition.other.is_empty() {
            rows.push(PickerRow::Toggle);
            if self.expanded {
                rows.extend((0..self.partition.other.len()).map(PickerRow::Other));
            }
        }

        rows
    }

    fn activate(&mut self) -> OverlayTransition {
        match self.rows().get(self.cursor) {
            Some(PickerRow::Installed(i)) => {
                OverlayTransition::Close(Some(self.partition.installed[*i].name.clone()))
            }
            Some(PickerRow::Other(i)) => {
                OverlayTransition::Close(Some(self.partition.other[*i].name.clone()))
            }
            Some(PickerRow::GetStarted) => match self.partition.recommended.as_ref() {
                Some(wallet) => OverlayTransition::Close(Some(wallet.name.clone())),
                None => OverlayTransition::Stay,
            },
            Some(PickerRow::Toggle) => {
                self.toggle_expanded();
                OverlayTransition::Stay
            }
            // Empty surface (no eligible wallets): nothing to activate.
            None => OverlayTransition::Stay,
        }
    }

    fn toggle_expanded(&mut self) {
        if self.partition.other.is_empty() {
            return;
        }
        self.expanded = !self.expanded;
        let count = self.rows().len();
        if self.cursor >= count {
            self.cursor = count.saturating_sub(1);
        }
    }

    fn title(&self) -> &'static str {
        if self.partition.has_installed() {
            "Connect a wallet to continue"
        } else {
            "You'll need a wallet to continue"
        }
    }

    fn toggle_label(&self) -> &'static str {
        match (self.partition.has_installed(), self.expanded) {
            (true, false) => "More options",
            (true, true) => "Less options",
            (false, false) => "Already have a wallet? View options",
            (false, true) => "Hide options",
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let rows = self.rows();

        let max_height = area.height.saturating_mul(self.config.max_height_pct) / 100;
        let height = (rows.len() as u16 + 3).max(5).min(max_height.max(5));

        let hints = [
            InputHint::new("↑↓", "navigate"),
            InputHint::new("Enter", "select"),
            InputHint::new("Tab", "options"),
            InputHint::new("Esc", "close"),
        ];
        let layout = render_overlay(
            frame,
            area,
            &OverlayConfig {
                title: self.title(),
                border_color: Color::Magenta,
                width: self.config.max_width,
                height,
                hints: &hints,
            },
        );

        let items: Vec<ListItem> = rows
            .iter()
            .map(|row| ListItem::new(self.row_line(*row, layout.body.width)))
            .collect();

        let list = List::new(items)
            .highlight_style(
                Style::default()
                    .bg(Color::Magenta)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        let mut list_state = ListState::default();
        list_state.select(Some(self.cursor));
        frame.render_stateful_widget(list, layout.body, &mut list_state);
    }

    fn row_line(&self, row: PickerRow, width: u16) -> Line<'static> {
        match row {
            PickerRow::Installed(i) => wallet_row::line(&self.partition.installed[i], width),
            PickerRow::Other(i) => wallet_row::line(&self.partition.other[i], width),
            PickerRow::GetStarted => {
                // rows() never emits this without a recommendation.
                let name = self
                    .partition
                    .recommended
                    .as_ref()
                    .map(|wallet| wallet.name.to_string())
                    .unwrap_or_default();
                Line::from(Span::styled(
                    format!("Get started with {name}"),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ))
            }
            PickerRow::Toggle => Line::from(vec![
                Span::styled(self.toggle_label(), Style::default().fg(Color::Cyan)),
                Span::styled(
                    if self.expanded { " ▲" } else { " ▼" },
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
        }
    }
}
