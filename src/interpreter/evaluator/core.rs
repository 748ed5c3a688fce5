use tracing::{debug, trace};

use crate::error::{EvalError, SyntaxError};

/// Result type used by the grammar rules.
///
/// Every rule returns either the value it computed or the [`EvalError`]
/// that stopped the parse.
pub type EvalResult<T> = Result<T, EvalError>;

/// A single-use, fused parser and evaluator over one input string.
///
/// The evaluator owns a copy of the input as characters together with the
/// cursor shared by all grammar rules. Rules read the character under the
/// cursor with [`Evaluator::peek`] and move it forward with
/// [`Evaluator::advance`]; the cursor never moves backwards.
///
/// Because each instance owns its own input and cursor, separate instances
/// can be used from separate threads without any coordination.
///
/// ## Usage
///
/// Construct one evaluator per input and call [`Evaluator::evaluate`] once.
///
/// ```
/// use exprfuse::interpreter::evaluator::core::Evaluator;
///
/// let value = Evaluator::new("2 * (3 + 4) * (5 + 6)").evaluate().unwrap();
/// assert_eq!(value, 154.0);
/// ```
#[derive(Debug, Clone)]
pub struct Evaluator {
    pub(in crate::interpreter) input:  Vec<char>,
    pub(in crate::interpreter) cursor: usize,
}

impl Evaluator {
    /// Creates an evaluator for `input` with the cursor at position zero.
    ///
    /// Whitespace is kept as-is; the grammar rules skip it between tokens.
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self { input:  input.chars().collect(),
               cursor: 0, }
    }

    /// Evaluates the whole input and returns its value.
    ///
    /// Runs [`Evaluator::parse_expression`] and then requires that the entire
    /// input was consumed. Consuming `self` makes each instance single-use.
    ///
    /// # Errors
    /// - `SyntaxError::ExpectedNumber` for empty or whitespace-only input.
    /// - `SyntaxError::UnexpectedCharacter` for a stray `)` left over after the
    ///   expression.
    /// - Any error raised by the grammar rules.
    pub fn evaluate(mut self) -> EvalResult<f64> {
        debug!(input = %self.input.iter().collect::<String>(), "evaluating");

        if self.input.iter().all(|c| c.is_whitespace()) {
            let err = SyntaxError::ExpectedNumber { found:    None,
                                                    position: self.input.len(), };
            debug!(error = %err, "rejected blank input");
            return Err(err.into());
        }

        let result = self.parse_expression().and_then(|value| self.expect_end(value));

        match &result {
            Ok(value) => debug!(value, "evaluation finished"),
            Err(e) => debug!(error = %e, "evaluation failed"),
        }
        result
    }

    /// Returns the character under the cursor, or `None` at end of input.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.input.get(self.cursor).copied()
    }

    /// Moves the cursor one character forward, never past the end of input.
    pub fn advance(&mut self) {
        if self.cursor < self.input.len() {
            self.cursor += 1;
        }
        trace!(cursor = self.cursor, "advance");
    }

    /// Advances past any whitespace under the cursor.
    pub fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    /// Returns the current 0-based cursor position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.cursor
    }

    /// Fails unless the cursor has reached the end of input.
    fn expect_end(&self, value: f64) -> EvalResult<f64> {
        match self.peek() {
            None => Ok(value),
            Some(c) => Err(SyntaxError::UnexpectedCharacter { character: c,
                                                              position:  self.cursor, }.into()),
        }
    }
}
