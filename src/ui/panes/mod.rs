//! Stateless render functions for each visible pane
//!
//! - [`machine`] — selected machine, language, transition summary
//! - [`input`] — candidate string buffer and last verdict
//! - [`trace`] — one line per recorded step
//! - [`battery`] — canned self-test table
//! - [`status`] — status bar with keybindings

pub mod battery;
pub mod input;
pub mod machine;
pub mod status;
pub mod trace;

pub use battery::{BatteryScrollState, render_battery_pane};
pub use input::render_input_pane;
pub use machine::render_machine_pane;
pub use status::render_status_bar;
pub use trace::{TraceScrollState, render_trace_pane};
