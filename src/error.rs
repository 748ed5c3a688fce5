/// Syntax errors.
///
/// Defines every way the grammar rules can reject their input: an
/// unexpected character, a premature end of input, a missing closing
/// parenthesis, or a missing number. Each carries the 0-based character
/// position at which the cursor stood when the problem was detected.
pub mod syntax_error;
/// Numeric literal conversion errors.
///
/// Raised when the scanner has accumulated a literal whose text is not a
/// valid floating-point number, such as `1.2.3` or a lone `.`.
pub mod format_error;
/// The umbrella error returned by evaluation.
pub mod eval_error;

pub use eval_error::EvalError;
pub use format_error::FormatError;
pub use syntax_error::SyntaxError;
