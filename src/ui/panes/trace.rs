//! Trace pane rendering with one line per recorded step
//!
//! Deterministic machines show one line per consumed symbol. The NPDA shows
//! one line per live configuration per generation, so the branching of the
//! search is visible directly: generations widen while branches multiply
//! and narrow as they die off.

use crate::automata::{RunReport, TraceStep};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

/// Scroll state for the trace pane
#[derive(Default)]
pub struct TraceScrollState {
    pub offset: usize,
}

fn step_line(step: &TraceStep) -> Line<'static> {
    let read = match step.read {
        Some(symbol) => format!("read {}", symbol),
        None => "read ε".to_string(),
    };

    let mut spans = vec![
        Span::styled(
            format!("g{:<3}", step.generation),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {:<7}", read),
            Style::default().fg(DEFAULT_THEME.secondary),
        ),
        Span::styled(
            format!(" {:<9}", step.state),
            Style::default()
                .fg(DEFAULT_THEME.state_name)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" cursor {:<4}", step.cursor),
            Style::default().fg(DEFAULT_THEME.fg),
        ),
    ];
    if let Some(stack) = &step.stack {
        spans.push(Span::styled(
            format!(" stack {}", stack),
            Style::default().fg(DEFAULT_THEME.stack_text),
        ));
    }
    Line::from(spans)
}

/// Render the trace pane
pub fn render_trace_pane(
    frame: &mut Frame,
    area: Rect,
    report: Option<&RunReport>,
    is_focused: bool,
    scroll_state: &mut TraceScrollState,
) {
    let border = if is_focused {
        DEFAULT_THEME.border_focused
    } else {
        DEFAULT_THEME.border_normal
    };

    let title = match report {
        Some(r) => format!(" Trace ({} steps) ", r.steps.len()),
        None => " Trace ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    let items: Vec<ListItem> = match report {
        Some(r) if !r.steps.is_empty() => {
            let visible = area.height.saturating_sub(2) as usize;
            // Clamp the scroll so the last page stays reachable.
            let max_offset = r.steps.len().saturating_sub(visible);
            if scroll_state.offset > max_offset {
                scroll_state.offset = max_offset;
            }
            r.steps
                .iter()
                .skip(scroll_state.offset)
                .take(visible)
                .map(|step| ListItem::new(step_line(step)))
                .collect()
        }
        Some(_) => vec![ListItem::new(Span::styled(
            "no steps recorded (invalid or empty input)",
            Style::default().fg(DEFAULT_THEME.comment),
        ))],
        None => vec![ListItem::new(Span::styled(
            "run an input to see the step trace",
            Style::default().fg(DEFAULT_THEME.comment),
        ))],
    };

    frame.render_widget(List::new(items).block(block), area);
}
