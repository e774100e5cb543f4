// Capacity limits for the automata engines

/// Default cap on live NPDA configurations per generation
/// Candidates generated beyond this cap are dropped, which is a documented
/// soundness caveat: a pathological input could have its only accepting
/// branch fall past the cap. Override with [`Npda::with_limits`].
///
/// [`Npda::with_limits`]: super::npda::Npda::with_limits
pub const DEFAULT_MAX_CONFIGURATIONS: usize = 100;

/// Default cap on input length, in symbols, for every machine
/// Longer inputs are a fatal [`AutomatonError::InputTooLong`], not a rejection.
///
/// [`AutomatonError::InputTooLong`]: super::errors::AutomatonError::InputTooLong
pub const DEFAULT_MAX_INPUT_LEN: usize = 1000;
