/// The evaluator state and entry point.
///
/// Declares the [`core::Evaluator`] struct holding the input and the shared
/// cursor, the single-use [`core::Evaluator::evaluate`] entry point, and the
/// cursor primitives the grammar rules are written in terms of.
pub mod core;

/// Binary operator rules.
///
/// Implements the two left-associative precedence levels: sums of terms and
/// products of factors.
pub mod binary;

/// Factor rule.
///
/// Handles parenthesized sub-expressions and hands literals to the scanner.
pub mod factor;
