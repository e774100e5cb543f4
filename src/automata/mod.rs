//! Automata engines for the three binary languages
//!
//! This module provides the recognition logic:
//! - [`dfa`]: deterministic finite automaton for "exactly one '1'"
//! - [`pda`]: deterministic pushdown automaton for `{0^n 1^(n+1)}`
//! - [`npda`]: nondeterministic pushdown automaton for binary palindromes
//! - [`stack`] / [`symbol`]: the stack value type and the input alphabet
//!
//! # Execution Model
//!
//! Every machine is a pure function of its input: construct it, call
//! [`Machine::run`], get back a [`RunReport`] holding the [`Verdict`] and an
//! ordered step trace for display. Nothing is retained between calls, so
//! repeated runs of the same string always agree.
//!
//! # Verdicts vs. errors
//!
//! Strings containing characters outside `{'0','1'}` produce
//! [`Verdict::Invalid`] without running any machine. Only real resource
//! exhaustion (an input past the configured length limit) is an
//! [`errors::AutomatonError`].

pub mod constants;
pub mod dfa;
pub mod errors;
pub mod npda;
pub mod pda;
pub mod stack;
pub mod symbol;

use dfa::Dfa;
use errors::AutomatonError;
use npda::Npda;
use pda::Pda;
use stack::Stack;
use std::fmt;
use symbol::Symbol;

/// Outcome of running a machine on one input string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The string is in the machine's language
    Accepted,
    /// The string is over the alphabet but not in the language
    Rejected,
    /// The string contains a character outside {'0','1'}
    Invalid,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Accepted => write!(f, "ACCEPTED"),
            Verdict::Rejected => write!(f, "REJECTED"),
            Verdict::Invalid => write!(f, "INVALID"),
        }
    }
}

/// One line of a run's step trace
///
/// Deterministic machines emit one step per consumed symbol, so `generation`
/// equals `cursor`. The NPDA emits one step per live configuration per
/// generation; several steps can share a `generation`.
#[derive(Debug, Clone)]
pub struct TraceStep {
    /// Which generation of the search this step belongs to
    pub generation: usize,
    /// Display label of the state ("Initial", "Push", "Match", ...)
    pub state: &'static str,
    /// The symbol consumed to reach this step, `None` for seeds and
    /// epsilon moves
    pub read: Option<Symbol>,
    /// Snapshot of the branch's stack, `None` for the stackless DFA
    pub stack: Option<Stack>,
    /// Input cursor after the move, in `[0, input.len()]`
    pub cursor: usize,
}

/// Verdict plus the ordered trace that produced it
#[derive(Debug, Clone)]
pub struct RunReport {
    pub verdict: Verdict,
    pub steps: Vec<TraceStep>,
}

impl RunReport {
    fn without_trace(verdict: Verdict) -> Self {
        RunReport {
            verdict,
            steps: Vec::new(),
        }
    }
}

/// One row of a machine's canned self-test table
#[derive(Debug, Clone)]
pub struct BatteryEntry {
    pub input: &'static str,
    pub verdict: Verdict,
}

// Canned battery inputs, one set per machine. These are display fodder for
// the battery pane, not the crate's test suite.
const DFA_BATTERY: &[&str] = &[
    "1", "01", "10", "01000", "001000", "", "0", "0000000000", "11", "0110", "110",
];
const PDA_BATTERY: &[&str] = &[
    "1", "011", "00111", "0001111", "000011111", "", "0", "01", "11", "10", "0101",
];
const NPDA_BATTERY: &[&str] = &[
    "1", "0", "11", "00", "101", "010", "1001", "10", "01", "100", "",
];

/// The three machines, as a closed dispatch enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Machine {
    Dfa,
    Pda,
    Npda,
}

impl Machine {
    /// All machines, in the order the UI cycles through them
    pub const ALL: [Machine; 3] = [Machine::Dfa, Machine::Pda, Machine::Npda];

    pub fn name(self) -> &'static str {
        match self {
            Machine::Dfa => "DFA",
            Machine::Pda => "PDA",
            Machine::Npda => "NPDA",
        }
    }

    /// The language this machine recognizes, as UI text
    pub fn language(self) -> &'static str {
        match self {
            Machine::Dfa => "exactly one '1' in {0,1}*",
            Machine::Pda => "{0^n 1^(n+1)}",
            Machine::Npda => "binary palindromes in {0,1}*",
        }
    }

    /// Short description of how the machine works, as UI text
    pub fn description(self) -> &'static str {
        match self {
            Machine::Dfa => {
                "Table-driven state machine, no storage.\n\
                 States: Initial, Counting, Reject.\n\
                 Accepts when the whole string ends in Counting."
            }
            Machine::Pda => {
                "One state, one stack.\n\
                 States: Push, Pop, Accept, Reject.\n\
                 Pushes a marker per '0', pops one per '1',\n\
                 and accepts on the single extra '1'."
            }
            Machine::Npda => {
                "Breadth-first search over branching configurations.\n\
                 States: Push, Match.\n\
                 Every step branches: keep pushing, treat the symbol\n\
                 as an odd middle, or epsilon-jump to matching.\n\
                 Accepts as soon as any branch empties its stack\n\
                 at end of input."
            }
        }
    }

    /// Next machine in display order (wraps around)
    pub fn next(self) -> Self {
        match self {
            Machine::Dfa => Machine::Pda,
            Machine::Pda => Machine::Npda,
            Machine::Npda => Machine::Dfa,
        }
    }

    /// Previous machine in display order (wraps around)
    pub fn prev(self) -> Self {
        match self {
            Machine::Dfa => Machine::Npda,
            Machine::Pda => Machine::Dfa,
            Machine::Npda => Machine::Pda,
        }
    }

    /// True iff every character of `input` is in the alphabet
    pub fn validate(input: &str) -> bool {
        symbol::validate(input)
    }

    /// Run this machine on `input` with default capacity limits
    pub fn run(self, input: &str) -> Result<RunReport, AutomatonError> {
        match self {
            Machine::Dfa => Dfa::new().run(input),
            Machine::Pda => Pda::new().run(input),
            Machine::Npda => Npda::new().run(input),
        }
    }

    /// The machine's canned battery inputs
    pub fn battery_inputs(self) -> &'static [&'static str] {
        match self {
            Machine::Dfa => DFA_BATTERY,
            Machine::Pda => PDA_BATTERY,
            Machine::Npda => NPDA_BATTERY,
        }
    }

    /// Run the canned self-test battery
    ///
    /// Purely repeated [`Machine::run`] calls; the table is returned as a
    /// value and nothing is cached between invocations.
    pub fn battery(self) -> Result<Vec<BatteryEntry>, AutomatonError> {
        self.battery_inputs()
            .iter()
            .map(|&input| {
                let report = self.run(input)?;
                Ok(BatteryEntry {
                    input,
                    verdict: report.verdict,
                })
            })
            .collect()
    }
}

/// Shared guard clauses run before any machine logic: length limit first
/// (fatal), then the alphabet gate (an `Invalid` verdict, not an error).
fn check_input(
    input: &str,
    max_len: usize,
) -> Result<Result<Vec<Symbol>, RunReport>, AutomatonError> {
    let length = input.chars().count();
    if length > max_len {
        return Err(AutomatonError::InputTooLong {
            length,
            limit: max_len,
        });
    }
    match symbol::parse_input(input) {
        Ok(symbols) => Ok(Ok(symbols)),
        Err(_) => Ok(Err(RunReport::without_trace(Verdict::Invalid))),
    }
}
