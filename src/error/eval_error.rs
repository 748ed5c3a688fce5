use crate::error::{FormatError, SyntaxError};

/// Represents every failure an evaluation can end with.
///
/// Grammar rules return this type so that both syntax and conversion
/// failures propagate through `?` and unwind the whole call chain at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The input does not match the grammar.
    Syntax(SyntaxError),
    /// A numeric literal could not be converted.
    Format(FormatError),
}

impl EvalError {
    /// Returns the 0-based position at which the error was detected.
    ///
    /// For format errors this is the start of the offending literal.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Syntax(e) => e.position(),
            Self::Format(e) => e.position,
        }
    }
}

impl From<SyntaxError> for EvalError {
    fn from(value: SyntaxError) -> Self {
        Self::Syntax(value)
    }
}

impl From<FormatError> for EvalError {
    fn from(value: FormatError) -> Self {
        Self::Format(value)
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax(e) => write!(f, "{e}"),
            Self::Format(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Syntax(e) => Some(e),
            Self::Format(e) => Some(e),
        }
    }
}
