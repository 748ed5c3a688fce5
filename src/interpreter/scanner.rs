use tracing::trace;

use crate::{
    error::{FormatError, SyntaxError},
    interpreter::evaluator::core::EvalResult,
};

/// Returns `true` for characters the scanner accumulates into a literal.
const fn is_literal_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Scans a numeric literal starting at `*cursor` and converts it to `f64`.
///
/// The scanner works in two phases. It first accumulates every consecutive
/// digit or `.` without checking where the dots are, then converts the whole
/// text at once. A malformed literal such as `1.2.3` is therefore consumed
/// entirely and rejected only at conversion.
///
/// On success the cursor is left on the first character after the literal.
///
/// # Errors
/// - `SyntaxError::ExpectedNumber` if no literal character is under the
///   cursor.
/// - `FormatError` if the accumulated text is not a valid number.
///
/// # Example
/// ```
/// use exprfuse::{error::EvalError, interpreter::scanner::scan_number};
///
/// let input: Vec<char> = "12.5+1".chars().collect();
/// let mut cursor = 0;
/// assert_eq!(scan_number(&input, &mut cursor).unwrap(), 12.5);
/// assert_eq!(cursor, 4);
///
/// let input: Vec<char> = "1.2.3".chars().collect();
/// let mut cursor = 0;
/// assert!(matches!(scan_number(&input, &mut cursor), Err(EvalError::Format(_))));
/// assert_eq!(cursor, 5);
/// ```
pub fn scan_number(input: &[char], cursor: &mut usize) -> EvalResult<f64> {
    let start = *cursor;
    let literal: String = input[start..].iter()
                                         .copied()
                                         .take_while(|&c| is_literal_char(c))
                                         .collect();
    *cursor += literal.len();

    if literal.is_empty() {
        return Err(SyntaxError::ExpectedNumber { found:    input.get(start).copied(),
                                                 position: start, }.into());
    }

    trace!(literal = %literal, start, "scanned literal");

    literal.parse::<f64>()
           .map_err(|source| FormatError { literal,
                                           position: start,
                                           source }.into())
}
