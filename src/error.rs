//! Error types for routing and solver configuration.

use thiserror::Error;

/// Errors reported by instance validation, decoding, and the solver.
///
/// All checks run before any random draw, so a failed [`solve`](crate::solve)
/// never leaves a partially evolved population behind.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VrpError {
    /// A configuration or input value is out of its allowed range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The instance has no locations to route.
    #[error("instance has no locations")]
    EmptyInstance,

    /// A run ended without an evaluated individual to report.
    ///
    /// Validated configurations always evaluate at least one individual,
    /// so this signals a broken engine invariant rather than bad input.
    #[error("run produced no evaluated individual")]
    NoSolution,
}

/// Convenience alias for results carrying a [`VrpError`].
pub type Result<T> = std::result::Result<T, VrpError>;

pub(crate) fn check_probability(name: &str, value: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(VrpError::InvalidConfig(format!(
            "{name} must be within [0, 1], got {value}"
        )));
    }
    Ok(())
}
