//! Stateless per-wallet row renderer.
//!
//! The picker hands each wallet to this module and embeds the returned
//! line; it knows nothing about how a wallet is drawn. The icon payload is
//! taken verbatim (hosts typically supply a short glyph).

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use solpick_core::{ReadyState, Wallet};
use unicode_width::UnicodeWidthStr;

/// Placeholder glyph for wallets without an icon payload.
const FALLBACK_GLYPH: &str = "▢";

/// Renders one wallet as a single list line: icon, name, readiness tag
/// right-aligned within `width` columns.
pub fn line(wallet: &Wallet, width: u16) -> Line<'static> {
    let glyph = wallet.icon.as_deref().unwrap_or(FALLBACK_GLYPH);
    let name = wallet.name.to_string();
    let tag = readiness_tag(wallet.ready_state);

    let left = format!("{glyph} {name}");
    // 2 columns for the highlight symbol, 1 of right padding.
    let budget = width.saturating_sub(3) as usize;
    let pad = budget
        .saturating_sub(left.width())
        .saturating_sub(tag.width())
        .max(1);

    Line::from(vec![
        Span::raw(left),
        Span::styled(
            format!("{}{tag}", " ".repeat(pad)),
            Style::default().fg(tag_color(wallet.ready_state)),
        ),
    ])
}

fn readiness_tag(state: ReadyState) -> &'static str {
    match state {
        ReadyState::Installed => "detected",
        ReadyState::Loadable | ReadyState::NotDetected | ReadyState::Unsupported => state.label(),
    }
}

fn tag_color(state: ReadyState) -> Color {
    match state {
        ReadyState::Installed => Color::Green,
        ReadyState::Loadable => Color::Cyan,
        ReadyState::NotDetected | ReadyState::Unsupported => Color::DarkGray,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_carries_name_and_tag() {
        let wallet = Wallet::new("Phantom", ReadyState::Installed).with_icon("👻");
        let rendered = line(&wallet, 40);
        let text: String = rendered.spans.iter().map(|s| s.content.clone()).collect();
        assert!(text.starts_with("👻 Phantom"));
        assert!(text.ends_with("detected"));
    }

    #[test]
    fn test_missing_icon_uses_fallback_glyph() {
        let wallet = Wallet::new("Sollet", ReadyState::NotDetected);
        let rendered = line(&wallet, 40);
        let text: String = rendered.spans.iter().map(|s| s.content.clone()).collect();
        assert!(text.starts_with("▢ Sollet"));
        assert!(text.ends_with("not detected"));
    }
}
