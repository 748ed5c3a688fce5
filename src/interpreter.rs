/// The fused recursive-descent evaluator.
///
/// Each grammar rule is a method on [`evaluator::core::Evaluator`] that reads
/// characters through the shared cursor and returns the value it computed.
/// No token stream or syntax tree is built: parsing and evaluation happen in
/// one pass.
///
/// # Responsibilities
/// - Owns the input characters and the cursor for one evaluation.
/// - Encodes precedence through call nesting: expression, term, factor.
/// - Reports syntax errors at the position where they are detected.
pub mod evaluator;
/// The numeric literal scanner.
///
/// Accumulates digits and dots under the cursor and converts the result to
/// a floating-point value, reporting malformed literals as format errors.
pub mod scanner;
