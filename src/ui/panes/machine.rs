//! Machine pane rendering with language and transition summary
//!
//! Shows which of the three machines is selected, the language it
//! recognizes, and a short plain-text sketch of how it works.

use crate::automata::Machine;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the machine pane
pub fn render_machine_pane(frame: &mut Frame, area: Rect, machine: Machine) {
    let mut lines = Vec::new();

    let mut tabs: Vec<Span> = Vec::new();
    for m in Machine::ALL {
        let style = if m == machine {
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(DEFAULT_THEME.comment)
        };
        tabs.push(Span::styled(format!(" {} ", m.name()), style));
        tabs.push(Span::raw(" "));
    }
    lines.push(Line::from(tabs));
    lines.push(Line::from(""));

    lines.push(Line::from(vec![
        Span::styled("Language: ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(
            machine.language(),
            Style::default()
                .fg(DEFAULT_THEME.secondary)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(""));

    for text_line in machine.description().lines() {
        lines.push(Line::from(Span::styled(
            text_line,
            Style::default().fg(DEFAULT_THEME.fg),
        )));
    }

    let block = Block::default()
        .title(" Machine (Tab to switch) ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
