//! Fatal engine errors
//!
//! This module defines [`AutomatonError`], the errors a machine can return
//! instead of a verdict. These cover genuine resource exhaustion only;
//! ordinary rejection and invalid characters are verdicts
//! ([`Verdict::Rejected`] / [`Verdict::Invalid`]), never errors, so callers
//! can't confuse "not in the language" with "the engine gave up".
//!
//! [`Verdict::Rejected`]: super::Verdict::Rejected
//! [`Verdict::Invalid`]: super::Verdict::Invalid

use std::fmt;

/// Errors that abort a run before a verdict is produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AutomatonError {
    /// Input exceeds the configured length limit
    InputTooLong { length: usize, limit: usize },
}

impl fmt::Display for AutomatonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AutomatonError::InputTooLong { length, limit } => {
                write!(
                    f,
                    "input of {} symbols exceeds the {}-symbol limit",
                    length, limit
                )
            }
        }
    }
}

impl std::error::Error for AutomatonError {}
