//! # Introduction
//!
//! automatty recognizes membership of binary strings in three classical
//! formal languages, one automaton model each, and renders the verdicts and
//! step traces in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Recognition pipeline
//!
//! ```text
//! Input string → validate → Machine (DFA | PDA | NPDA) → RunReport → TUI
//! ```
//!
//! 1. [`automata`] — the pure engines. Each machine turns a candidate string
//!    into a [`automata::RunReport`]: a [`automata::Verdict`] plus an
//!    ordered trace of (state, stack snapshot, cursor) steps.
//! 2. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## The three machines
//!
//! - **DFA** — "exactly one '1'": table-driven, no storage.
//! - **PDA** — `{0^n 1^(n+1)}`: one state machine consulting one stack.
//! - **NPDA** — binary palindromes: a breadth-first search over branching
//!   configurations, each owning a private stack, taking every legal move
//!   (push, odd middle, epsilon) at every step.

pub mod automata;
pub mod ui;
