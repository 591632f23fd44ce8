use crate::prelude::*;
use std::{error, fmt};
use thiserror::Error;

/// The different error types that can be thrown by the Rook runtime
#[derive(Error, Clone)]
#[allow(missing_docs)]
pub enum ErrorKind {
    #[error("{0}")]
    StringError(String),
    /// An error raised by a running program, e.g. via the `raise` kernel function
    ///
    /// Displayed as the raised message, without any decoration.
    #[error("{0}")]
    UserRaised(RString),
    #[error("undefined method '{method}' for {type_name}")]
    NoMethod { type_name: RString, method: RString },
    #[error("uninitialized constant {0}")]
    NoSuchClass(RString),
    #[error("key not found: {0}")]
    KeyNotFound(String),
    #[error("uninitialized shared slot '{slot}' in {class}")]
    UninitializedSharedSlot { class: RString, slot: RString },
    #[error("superclass mismatch for class {0}")]
    SuperclassMismatch(RString),
    #[error("Expected {expected}, but found {}", get_value_types(unexpected))]
    UnexpectedType {
        expected: String,
        unexpected: Vec<RValue>,
    },
    #[error("Stack overflow")]
    StackOverflow,
}

impl fmt::Debug for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// An error thrown by the Rook runtime
#[derive(Clone, Debug)]
pub struct Error {
    kind: ErrorKind,
    trace: Vec<RString>,
}

impl Error {
    /// Initializes an error with the given error kind
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            trace: Vec::new(),
        }
    }

    /// Returns the kind of error that was thrown
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Returns the call frames that the error propagated through, innermost first
    ///
    /// Frames are named `Class#method` for method calls, and by name for free functions.
    pub fn trace(&self) -> &[RString] {
        &self.trace
    }

    /// Extends the error's trace with the given frame name
    pub(crate) fn extend_trace(&mut self, frame: RString) {
        self.trace.push(frame);
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl error::Error for Error {}

impl From<String> for Error {
    fn from(error: String) -> Self {
        Self::new(ErrorKind::StringError(error))
    }
}

impl From<&str> for Error {
    fn from(error: &str) -> Self {
        Self::new(ErrorKind::StringError(error.into()))
    }
}

impl From<ErrorKind> for Error {
    fn from(error: ErrorKind) -> Self {
        Self::new(error)
    }
}

/// The Result type used by the Rook runtime
pub type Result<T> = std::result::Result<T, Error>;

/// Creates a [crate::Error] from a message (with format-like behaviour), wrapped in `Err`
///
/// Wrapping the result in `Err` is a convenience for functions that need to return immediately when
/// an error has occurred.
#[macro_export]
macro_rules! runtime_error {
    ($error:literal) => {
        Err($crate::Error::from(format!($error)))
    };
    ($error:expr) => {
        Err($crate::Error::from($error))
    };
    ($error:literal, $($y:expr),+ $(,)?) => {
        Err($crate::Error::from(format!($error, $($y),+)))
    };
}

/// Aborts the current call chain with a user-raised error carrying the given message
///
/// The error propagates via `?` until it reaches the top level, which renders the message.
pub fn raise<T>(message: impl Into<RString>) -> Result<T> {
    Err(ErrorKind::UserRaised(message.into()).into())
}

/// Creates an error that describes a type mismatch
pub fn unexpected_type<T>(expected: &str, unexpected: &RValue) -> Result<T> {
    Err(ErrorKind::UnexpectedType {
        expected: expected.into(),
        unexpected: vec![unexpected.clone()],
    }
    .into())
}

/// Creates an error that describes unexpected arguments
pub fn unexpected_args<T>(expected: &str, unexpected: &[RValue]) -> Result<T> {
    Err(ErrorKind::UnexpectedType {
        expected: format!("|{expected}|"),
        unexpected: unexpected.to_vec(),
    }
    .into())
}

/// Creates an error that describes unexpected arguments for a method
///
/// The instance is reported as the first of the unexpected values.
pub fn unexpected_args_after_instance<T>(
    expected: &str,
    instance: &RValue,
    args: &[RValue],
) -> Result<T> {
    let mut unexpected = Vec::with_capacity(args.len() + 1);
    unexpected.push(instance.clone());
    unexpected.extend_from_slice(args);
    unexpected_args(expected, &unexpected)
}

fn get_value_types(values: &[RValue]) -> String {
    match values {
        [] => "no args".to_string(),
        [single_value] => single_value.type_name().to_string(),
        _ => {
            let mut types = String::from('(');
            let mut first = true;
            for value in values {
                if !first {
                    types.push_str(", ");
                }
                first = false;
                types.push_str(&value.type_name());
            }
            types.push(')');
            types
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raised_errors_display_only_their_message() {
        let mut error = raise::<()>("This is not so exceptional").unwrap_err();
        error.extend_trace("Poop#smell".into());

        assert_eq!(error.to_string(), "This is not so exceptional");
        assert_eq!(error.trace().len(), 1);
    }

    #[test]
    fn unexpected_args_lists_argument_types() {
        let error = unexpected_args::<()>("String", &[1.into(), true.into()]).unwrap_err();

        assert_eq!(
            error.to_string(),
            "Expected |String|, but found (Integer, Boolean)"
        );
    }
}
