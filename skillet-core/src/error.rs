use thiserror::Error;

/// Errors from preference configuration.
///
/// The measurement functions themselves are total and never fail; only
/// loading a preference record can.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PreferenceError {
    #[error("Unknown unit system: {0}")]
    UnknownSystem(String),

    #[error("Unknown unit token: {0}")]
    UnknownUnit(String),
}
