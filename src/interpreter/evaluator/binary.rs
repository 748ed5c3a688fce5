use tracing::trace;

use crate::{
    error::SyntaxError,
    interpreter::evaluator::core::{EvalResult, Evaluator},
};

impl Evaluator {
    /// Parses and evaluates a sum of terms.
    ///
    /// This is the entry rule and the lowest precedence level. Terms are
    /// added left to right as they are parsed.
    ///
    /// The rule is: `expression := term ("+" term)*`
    ///
    /// The loop stops without consuming anything on `*` or `)`, which belong
    /// to an enclosing rule, and at end of input. Whitespace between terms is
    /// skipped.
    ///
    /// # Returns
    /// The accumulated sum.
    ///
    /// # Errors
    /// - `SyntaxError::UnexpectedCharacter` for any other character after a
    ///   term.
    /// - Propagates any errors from [`Evaluator::parse_term`].
    ///
    /// # Example
    /// ```
    /// use exprfuse::interpreter::evaluator::core::Evaluator;
    ///
    /// let mut evaluator = Evaluator::new("2+3+4)");
    /// assert_eq!(evaluator.parse_expression().unwrap(), 9.0);
    /// // The closing parenthesis is left for the caller.
    /// assert_eq!(evaluator.peek(), Some(')'));
    /// ```
    pub fn parse_expression(&mut self) -> EvalResult<f64> {
        trace!(cursor = self.cursor, "expression");
        let mut result = self.parse_term()?;
        while let Some(c) = self.peek() {
            match c {
                '+' => {
                    self.advance();
                    result += self.parse_term()?;
                },
                '*' | ')' => break,
                c if c.is_whitespace() => self.advance(),
                c => {
                    return Err(SyntaxError::UnexpectedCharacter { character: c,
                                                                  position:  self.cursor, }.into());
                },
            }
        }
        Ok(result)
    }

    /// Parses and evaluates a product of factors.
    ///
    /// Factors are multiplied left to right as they are parsed, so
    /// multiplication binds tighter than the addition handled by
    /// [`Evaluator::parse_expression`].
    ///
    /// The rule is: `term := factor ("*" factor)*`
    ///
    /// The loop stops on `+` or `)` and at end of input.
    ///
    /// # Errors
    /// - `SyntaxError::UnexpectedCharacter` for any other character after a
    ///   factor.
    /// - Propagates any errors from [`Evaluator::parse_factor`].
    pub fn parse_term(&mut self) -> EvalResult<f64> {
        trace!(cursor = self.cursor, "term");
        let mut result = self.parse_factor()?;
        while let Some(c) = self.peek() {
            match c {
                '*' => {
                    self.advance();
                    result *= self.parse_factor()?;
                },
                '+' | ')' => break,
                c if c.is_whitespace() => self.advance(),
                c => {
                    return Err(SyntaxError::UnexpectedCharacter { character: c,
                                                                  position:  self.cursor, }.into());
                },
            }
        }
        Ok(result)
    }
}
