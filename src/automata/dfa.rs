//! Deterministic finite automaton for "exactly one '1'"
//!
//! The simplest of the three machines: a table-driven state transition with
//! no auxiliary storage. Three states are enough because the only thing
//! worth remembering about a prefix is how many '1's it held: none, one, or
//! too many.

use super::constants::DEFAULT_MAX_INPUT_LEN;
use super::errors::AutomatonError;
use super::symbol::Symbol;
use super::{RunReport, TraceStep, Verdict};

/// DFA states, one per count of '1's seen so far
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DfaState {
    /// No '1' seen yet
    Initial,
    /// Exactly one '1' seen; the accept state
    Counting,
    /// More than one '1' seen; absorbing
    Reject,
}

impl DfaState {
    pub fn label(self) -> &'static str {
        match self {
            DfaState::Initial => "Initial",
            DfaState::Counting => "Counting",
            DfaState::Reject => "Reject",
        }
    }
}

/// The "exactly one '1'" recognizer
#[derive(Debug, Clone)]
pub struct Dfa {
    max_input_len: usize,
}

impl Dfa {
    pub fn new() -> Self {
        Dfa {
            max_input_len: DEFAULT_MAX_INPUT_LEN,
        }
    }

    /// Override the input length limit
    pub fn with_input_limit(max_input_len: usize) -> Self {
        Dfa { max_input_len }
    }

    /// Run the machine on `input`
    ///
    /// The empty string ends in [`DfaState::Initial`] and rejects.
    pub fn run(&self, input: &str) -> Result<RunReport, AutomatonError> {
        let symbols = match super::check_input(input, self.max_input_len)? {
            Ok(symbols) => symbols,
            Err(invalid) => return Ok(invalid),
        };

        let mut state = DfaState::Initial;
        let mut steps = Vec::with_capacity(symbols.len());

        for (position, &symbol) in symbols.iter().enumerate() {
            state = Self::transition(state, symbol);
            steps.push(TraceStep {
                generation: position + 1,
                state: state.label(),
                read: Some(symbol),
                stack: None,
                cursor: position + 1,
            });
        }

        let verdict = if state == DfaState::Counting {
            Verdict::Accepted
        } else {
            Verdict::Rejected
        };
        Ok(RunReport { verdict, steps })
    }

    fn transition(state: DfaState, symbol: Symbol) -> DfaState {
        match (state, symbol) {
            (DfaState::Initial, Symbol::Zero) => DfaState::Initial,
            (DfaState::Initial, Symbol::One) => DfaState::Counting,
            (DfaState::Counting, Symbol::Zero) => DfaState::Counting,
            (DfaState::Counting, Symbol::One) => DfaState::Reject,
            (DfaState::Reject, _) => DfaState::Reject,
        }
    }
}

impl Default for Dfa {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_follows_the_state_table() {
        let report = Dfa::new().run("011").unwrap();
        assert_eq!(report.verdict, Verdict::Rejected);
        let labels: Vec<&str> = report.steps.iter().map(|s| s.state).collect();
        assert_eq!(labels, ["Initial", "Counting", "Reject"]);
        assert!(report.steps.iter().all(|s| s.stack.is_none()));
    }

    #[test]
    fn empty_string_has_no_steps_and_rejects() {
        let report = Dfa::new().run("").unwrap();
        assert_eq!(report.verdict, Verdict::Rejected);
        assert!(report.steps.is_empty());
    }

    #[test]
    fn length_limit_is_fatal_not_rejected() {
        let dfa = Dfa::with_input_limit(4);
        assert_eq!(
            dfa.run("00000").unwrap_err(),
            AutomatonError::InputTooLong {
                length: 5,
                limit: 4
            }
        );
        // At the limit it still runs normally.
        assert_eq!(dfa.run("0001").unwrap().verdict, Verdict::Accepted);
    }
}
