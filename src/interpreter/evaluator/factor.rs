use tracing::trace;

use crate::{
    error::SyntaxError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        scanner::scan_number,
    },
};

impl Evaluator {
    /// Parses and evaluates a single factor.
    ///
    /// Leading whitespace is skipped, then the rule dispatches on the current
    /// character: `(` opens a parenthesized sub-expression, anything else is
    /// handed to the numeric literal scanner.
    ///
    /// Grammar:
    /// ```text
    ///     factor := "(" expression ")"
    ///             | number
    /// ```
    ///
    /// # Errors
    /// - `SyntaxError::ExpectedClosingParen` if a sub-expression is not
    ///   followed by `)`.
    /// - `SyntaxError::UnexpectedEndOfInput` if the input ends where a factor
    ///   should start.
    /// - Propagates errors from the sub-expression and from
    ///   [`scan_number`].
    pub fn parse_factor(&mut self) -> EvalResult<f64> {
        self.skip_whitespace();
        trace!(cursor = self.cursor, "factor");

        match self.peek() {
            Some('(') => {
                self.advance();
                let result = self.parse_expression()?;
                match self.peek() {
                    Some(')') => {
                        self.advance();
                        Ok(result)
                    },
                    found => Err(SyntaxError::ExpectedClosingParen { found,
                                                                     position: self.cursor, }.into()),
                }
            },
            Some(_) => scan_number(&self.input, &mut self.cursor),
            None => Err(SyntaxError::UnexpectedEndOfInput { position: self.cursor }.into()),
        }
    }
}
