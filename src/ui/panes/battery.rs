//! Battery pane rendering with the canned self-test table
//!
//! The table is a plain value returned by [`Machine::battery`]; rendering it
//! holds no machine state, so re-running it is always safe.
//!
//! [`Machine::battery`]: crate::automata::Machine::battery

use crate::automata::{BatteryEntry, Verdict};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

/// Scroll state for the battery pane
#[derive(Default)]
pub struct BatteryScrollState {
    pub offset: usize,
}

/// Render the battery pane
pub fn render_battery_pane(
    frame: &mut Frame,
    area: Rect,
    entries: Option<&[BatteryEntry]>,
    is_focused: bool,
    scroll_state: &mut BatteryScrollState,
) {
    let border = if is_focused {
        DEFAULT_THEME.border_focused
    } else {
        DEFAULT_THEME.border_normal
    };
    let block = Block::default()
        .title(" Self-test (Ctrl+B) ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    let items: Vec<ListItem> = match entries {
        Some(entries) => {
            let visible = area.height.saturating_sub(2) as usize;
            let max_offset = entries.len().saturating_sub(visible);
            if scroll_state.offset > max_offset {
                scroll_state.offset = max_offset;
            }
            entries
                .iter()
                .enumerate()
                .skip(scroll_state.offset)
                .take(visible)
                .map(|(i, entry)| {
                    let input = if entry.input.is_empty() {
                        "(empty)"
                    } else {
                        entry.input
                    };
                    let verdict_color = match entry.verdict {
                        Verdict::Accepted => DEFAULT_THEME.success,
                        Verdict::Rejected => DEFAULT_THEME.error,
                        Verdict::Invalid => DEFAULT_THEME.secondary,
                    };
                    ListItem::new(Line::from(vec![
                        Span::styled(
                            format!("{:>2}. ", i + 1),
                            Style::default().fg(DEFAULT_THEME.comment),
                        ),
                        Span::styled(
                            format!("{:<12}", input),
                            Style::default().fg(DEFAULT_THEME.fg),
                        ),
                        Span::styled(
                            entry.verdict.to_string(),
                            Style::default()
                                .fg(verdict_color)
                                .add_modifier(Modifier::BOLD),
                        ),
                    ]))
                })
                .collect()
        }
        None => vec![ListItem::new(Span::styled(
            "Ctrl+B runs the canned test battery",
            Style::default().fg(DEFAULT_THEME.comment),
        ))],
    };

    frame.render_widget(List::new(items).block(block), area);
}
