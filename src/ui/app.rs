//! Main TUI application state and logic

use crate::automata::{BatteryEntry, Machine, RunReport};
use crate::ui::panes::{BatteryScrollState, TraceScrollState};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout},
};
use std::io;
use std::time::Duration;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Input,
    Trace,
    Battery,
}

impl FocusedPane {
    /// Move focus to the next pane
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Input => FocusedPane::Trace,
            FocusedPane::Trace => FocusedPane::Battery,
            FocusedPane::Battery => FocusedPane::Input,
        }
    }

    /// Move focus to the previous pane
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Input => FocusedPane::Battery,
            FocusedPane::Trace => FocusedPane::Input,
            FocusedPane::Battery => FocusedPane::Trace,
        }
    }
}

/// The main application state
pub struct App {
    /// Currently selected machine
    pub machine: Machine,

    /// Candidate string being edited
    pub input: String,

    /// Report of the last run, if any
    pub report: Option<RunReport>,

    /// Battery results for the current machine, if computed
    pub battery: Option<Vec<BatteryEntry>>,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll state
    pub trace_scroll: TraceScrollState,
    pub battery_scroll: BatteryScrollState,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    pub fn new() -> Self {
        App {
            machine: Machine::Dfa,
            input: String::new(),
            report: None,
            battery: None,
            focused_pane: FocusedPane::Input,
            trace_scroll: TraceScrollState::default(),
            battery_scroll: BatteryScrollState::default(),
            should_quit: false,
            status_message: String::from("Ready!"),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Main area plus a one-line status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        // Left column: machine | input | trace. Right column: battery.
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
            .split(pane_area);

        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(11),
                Constraint::Length(4),
                Constraint::Min(0),
            ])
            .split(columns[0]);

        super::panes::render_machine_pane(frame, left_rows[0], self.machine);

        super::panes::render_input_pane(
            frame,
            left_rows[1],
            &self.input,
            self.report.as_ref().map(|r| r.verdict),
            self.focused_pane == FocusedPane::Input,
        );

        super::panes::render_trace_pane(
            frame,
            left_rows[2],
            self.report.as_ref(),
            self.focused_pane == FocusedPane::Trace,
            &mut self.trace_scroll,
        );

        super::panes::render_battery_pane(
            frame,
            columns[1],
            self.battery.as_deref(),
            self.focused_pane == FocusedPane::Battery,
            &mut self.battery_scroll,
        );

        super::panes::render_status_bar(frame, status_area, &self.status_message, self.machine);
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.select_machine(self.machine.next());
            }
            KeyCode::BackTab => {
                self.select_machine(self.machine.prev());
            }
            KeyCode::Left => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Right => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Trace => {
                    self.trace_scroll.offset = self.trace_scroll.offset.saturating_sub(1);
                }
                FocusedPane::Battery => {
                    self.battery_scroll.offset = self.battery_scroll.offset.saturating_sub(1);
                }
                FocusedPane::Input => {}
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Trace => {
                    self.trace_scroll.offset = self.trace_scroll.offset.saturating_add(1);
                }
                FocusedPane::Battery => {
                    self.battery_scroll.offset = self.battery_scroll.offset.saturating_add(1);
                }
                FocusedPane::Input => {}
            },
            KeyCode::Enter => {
                self.run_input();
            }
            KeyCode::Backspace => {
                self.input.pop();
                self.report = None;
            }
            KeyCode::Char('b') | KeyCode::Char('B')
                if key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                self.toggle_battery();
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.clear();
                self.report = None;
                self.status_message = "Input cleared".to_string();
            }
            // Everything else printable goes into the buffer, including
            // characters outside the alphabet: running those shows the
            // INVALID verdict instead of being impossible to type.
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.push(c);
                self.report = None;
            }
            _ => {}
        }
    }

    /// Switch machines; verdicts and batteries belong to one machine, so
    /// both are dropped.
    fn select_machine(&mut self, machine: Machine) {
        self.machine = machine;
        self.report = None;
        self.battery = None;
        self.trace_scroll = TraceScrollState::default();
        self.battery_scroll = BatteryScrollState::default();
        self.status_message = format!("Selected {}", machine.name());
    }

    /// Run the current input through the selected machine
    fn run_input(&mut self) {
        self.trace_scroll = TraceScrollState::default();
        match self.machine.run(&self.input) {
            Ok(report) => {
                self.status_message = format!(
                    "{} on {:?}: {}",
                    self.machine.name(),
                    self.input,
                    report.verdict
                );
                self.report = Some(report);
            }
            Err(e) => {
                self.report = None;
                self.status_message = format!("Error: {}", e);
            }
        }
    }

    /// Compute or hide the self-test battery for the current machine
    fn toggle_battery(&mut self) {
        if self.battery.is_some() {
            self.battery = None;
            self.status_message = "Self-test hidden".to_string();
            return;
        }
        self.battery_scroll = BatteryScrollState::default();
        match self.machine.battery() {
            Ok(entries) => {
                self.status_message = format!(
                    "{} self-test: {} cases",
                    self.machine.name(),
                    entries.len()
                );
                self.battery = Some(entries);
            }
            Err(e) => {
                self.status_message = format!("Error: {}", e);
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
