//! Input pane rendering with the candidate string and last verdict
//!
//! The buffer accepts any printable character so that the `Invalid` verdict
//! can be demonstrated, not just `Accepted`/`Rejected`.

use crate::automata::Verdict;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the input pane
pub fn render_input_pane(
    frame: &mut Frame,
    area: Rect,
    input: &str,
    verdict: Option<Verdict>,
    is_focused: bool,
) {
    let shown = if input.is_empty() {
        Span::styled("(empty)", Style::default().fg(DEFAULT_THEME.comment))
    } else {
        Span::styled(input, Style::default().fg(DEFAULT_THEME.fg))
    };
    let cursor = Span::styled("█", Style::default().fg(DEFAULT_THEME.primary));

    let verdict_line = match verdict {
        Some(v) => {
            let color = match v {
                Verdict::Accepted => DEFAULT_THEME.success,
                Verdict::Rejected => DEFAULT_THEME.error,
                Verdict::Invalid => DEFAULT_THEME.secondary,
            };
            Line::from(vec![
                Span::styled("Verdict: ", Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(
                    format!(" {} ", v),
                    Style::default()
                        .bg(color)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD),
                ),
            ])
        }
        None => Line::from(Span::styled(
            "Verdict: press Enter to run",
            Style::default().fg(DEFAULT_THEME.comment),
        )),
    };

    let lines = vec![Line::from(vec![shown, cursor]), verdict_line];

    let border = if is_focused {
        DEFAULT_THEME.border_focused
    } else {
        DEFAULT_THEME.border_normal
    };
    let block = Block::default()
        .title(" Input (type 0/1, Enter runs) ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
