//! exprv-specific errors
use thiserror::Error;

/// An error that exprv could end up producing.
///
/// The only family of errors is related to _command-line arguments_: a value
/// is present but cannot be used to drive the generator.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ExpRvError {
    /// `name` is the argument, `value` is what was given on the command line.
    #[error("invalid value {value:?} for `{name}`: {reason}")]
    InvalidArgument {
        name: &'static str,
        value: String,
        reason: String,
    },
}
