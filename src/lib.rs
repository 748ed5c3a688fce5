//! # exprfuse
//!
//! exprfuse evaluates arithmetic expressions built from decimal literals,
//! `+`, `*`, and parentheses. Parsing and evaluation are fused into a single
//! recursive-descent pass: every grammar rule returns the value it computed,
//! and no syntax tree is ever built.
//!
//! ```text
//! expression := term ("+" term)*
//! term       := factor ("*" factor)*
//! factor     := "(" expression ")" | number
//! number     := (digit | ".")+
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{error::EvalError, interpreter::evaluator::core::Evaluator};

/// Provides the error types returned by evaluation.
///
/// This module defines every error the evaluator can raise. Syntax errors
/// describe input that does not match the grammar; format errors describe
/// numeric literals that were scanned but could not be converted. Both carry
/// the 0-based character position at which they were detected.
///
/// # Responsibilities
/// - Defines `SyntaxError`, `FormatError`, and the umbrella `EvalError`.
/// - Attaches positions and offending characters for error reporting.
/// - Integrates with `std::error::Error` and `Display`.
pub mod error;
/// Implements the grammar rules and the literal scanner.
///
/// This module ties the cursor, the three grammar rules, and the numeric
/// scanner together into a complete evaluator.
///
/// # Responsibilities
/// - Provides [`interpreter::evaluator::core::Evaluator`], the single-use
///   evaluator.
/// - Implements expression, term, and factor rules.
/// - Scans and converts numeric literals.
pub mod interpreter;

/// Evaluates `source` and returns its value.
///
/// This is a shorthand for constructing a fresh [`Evaluator`] and calling
/// [`Evaluator::evaluate`] on it. Each call is fully independent: no state is
/// shared between calls.
///
/// # Errors
/// Returns an [`EvalError`] if the input does not match the grammar or a
/// numeric literal cannot be converted.
///
/// # Examples
/// ```
/// use exprfuse::evaluate;
///
/// // Multiplication binds tighter than addition.
/// assert_eq!(evaluate("2 + 3 * 4").unwrap(), 14.0);
///
/// // Parentheses override precedence.
/// assert_eq!(evaluate("(2 + 3) * 4").unwrap(), 20.0);
///
/// // A missing closing parenthesis is an error.
/// assert!(evaluate("(2 + 3").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<f64, EvalError> {
    Evaluator::new(source).evaluate()
}
