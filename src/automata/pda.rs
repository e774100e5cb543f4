//! Deterministic pushdown automaton for `{0^n 1^(n+1)}`
//!
//! One state machine, one stack. The run pushes a marker for every leading
//! '0', pops one for every matching '1', and accepts on the single extra
//! '1' that arrives with an empty stack. Everything after the accepting
//! symbol forces rejection: a string must end exactly when the machine
//! reaches [`PdaState::Accept`].

use super::constants::DEFAULT_MAX_INPUT_LEN;
use super::errors::AutomatonError;
use super::stack::Stack;
use super::symbol::Symbol;
use super::{RunReport, TraceStep, Verdict};

/// PDA states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PdaState {
    /// Pushing a marker per leading '0'
    Push,
    /// Popping a marker per matching '1'
    Pop,
    /// Saw the extra '1' with an empty stack
    Accept,
    /// Absorbing failure state
    Reject,
}

impl PdaState {
    pub fn label(self) -> &'static str {
        match self {
            PdaState::Push => "Push",
            PdaState::Pop => "Pop",
            PdaState::Accept => "Accept",
            PdaState::Reject => "Reject",
        }
    }
}

/// The `{0^n 1^(n+1)}` recognizer
#[derive(Debug, Clone)]
pub struct Pda {
    max_input_len: usize,
}

impl Pda {
    pub fn new() -> Self {
        Pda {
            max_input_len: DEFAULT_MAX_INPUT_LEN,
        }
    }

    /// Override the input length limit
    pub fn with_input_limit(max_input_len: usize) -> Self {
        Pda { max_input_len }
    }

    /// Run the machine on `input`
    pub fn run(&self, input: &str) -> Result<RunReport, AutomatonError> {
        let symbols = match super::check_input(input, self.max_input_len)? {
            Ok(symbols) => symbols,
            Err(invalid) => return Ok(invalid),
        };

        let mut state = PdaState::Push;
        let mut stack = Stack::new();
        let mut steps = Vec::with_capacity(symbols.len());

        for (position, &symbol) in symbols.iter().enumerate() {
            state = Self::transition(state, &mut stack, symbol);
            steps.push(TraceStep {
                generation: position + 1,
                state: state.label(),
                read: Some(symbol),
                stack: Some(stack.clone()),
                cursor: position + 1,
            });
        }

        // The acceptance guard checks both the state and stack balance. As
        // the rules stand, Accept is only reachable with an empty stack; the
        // stack check stays as an explicit guard, symmetric with the NPDA's
        // acceptance condition.
        let verdict = if state == PdaState::Accept && stack.is_empty() {
            Verdict::Accepted
        } else {
            Verdict::Rejected
        };
        Ok(RunReport { verdict, steps })
    }

    fn transition(state: PdaState, stack: &mut Stack, symbol: Symbol) -> PdaState {
        match (state, symbol) {
            (PdaState::Push, Symbol::Zero) => {
                stack.push(Symbol::Zero);
                PdaState::Push
            }
            (PdaState::Push, Symbol::One) => match stack.pop() {
                // A marker to cancel: enter the pop phase.
                Some(_) => PdaState::Pop,
                // Empty stack means n = 0 and this '1' is the extra one.
                None => PdaState::Accept,
            },
            (PdaState::Pop, Symbol::One) => match stack.pop() {
                Some(_) => PdaState::Pop,
                None => PdaState::Accept,
            },
            // A '0' after the first '1' can never balance out.
            (PdaState::Pop, Symbol::Zero) => PdaState::Reject,
            // Any symbol past the accepting one is too many.
            (PdaState::Accept, _) => PdaState::Reject,
            (PdaState::Reject, _) => PdaState::Reject,
        }
    }
}

impl Default for Pda {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_records_stack_snapshots() {
        let report = Pda::new().run("0011").unwrap();
        let rendered: Vec<String> = report
            .steps
            .iter()
            .map(|s| format!("{} {}", s.state, s.stack.as_ref().unwrap()))
            .collect();
        assert_eq!(rendered, ["Push $0", "Push $00", "Pop $0", "Pop $"]);
        // 0011 is 0^2 1^2, one '1' short of the language.
        assert_eq!(report.verdict, Verdict::Rejected);
    }

    #[test]
    fn accept_state_absorbs_trailing_symbols() {
        // 011 is in the language, 0110 and 0111 are not.
        assert_eq!(Pda::new().run("011").unwrap().verdict, Verdict::Accepted);
        assert_eq!(Pda::new().run("0110").unwrap().verdict, Verdict::Rejected);
        assert_eq!(Pda::new().run("0111").unwrap().verdict, Verdict::Rejected);
    }

    #[test]
    fn pop_phase_rejects_a_zero() {
        assert_eq!(Pda::new().run("0101").unwrap().verdict, Verdict::Rejected);
    }
}
