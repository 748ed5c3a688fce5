use std::num::ParseFloatError;

/// A scanned literal that could not be converted to a number.
///
/// The scanner accepts any run of digits and dots, so text such as `1.2.3`
/// reaches conversion and fails there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatError {
    /// The literal text exactly as it was scanned.
    pub literal:  String,
    /// The 0-based position of the first character of the literal.
    pub position: usize,
    /// The conversion failure reported by the standard library.
    pub source:   ParseFloatError,
}

impl std::fmt::Display for FormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "Invalid number '{}' at position {}: {}",
               self.literal, self.position, self.source)
    }
}

impl std::error::Error for FormatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}
