#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while matching the grammar.
pub enum SyntaxError {
    /// Found a character no grammar rule accepts at this point.
    UnexpectedCharacter {
        /// The character encountered.
        character: char,
        /// The 0-based position of the character.
        position:  usize,
    },
    /// Reached the end of input where a factor was required.
    UnexpectedEndOfInput {
        /// The 0-based cursor position, equal to the input length.
        position: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The character found instead, or `None` at end of input.
        found:    Option<char>,
        /// The 0-based cursor position where `)` was expected.
        position: usize,
    },
    /// A numeric literal was expected but no digit or `.` was found.
    ExpectedNumber {
        /// The character found instead, or `None` at end of input.
        found:    Option<char>,
        /// The 0-based cursor position where the literal should start.
        position: usize,
    },
}

impl SyntaxError {
    /// Returns the 0-based cursor position at which the error was detected.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { position, .. }
            | Self::UnexpectedEndOfInput { position }
            | Self::ExpectedClosingParen { position, .. }
            | Self::ExpectedNumber { position, .. } => *position,
        }
    }

    /// Returns the offending character, if there was one.
    #[must_use]
    pub const fn character(&self) -> Option<char> {
        match self {
            Self::UnexpectedCharacter { character, .. } => Some(*character),
            Self::UnexpectedEndOfInput { .. } => None,
            Self::ExpectedClosingParen { found, .. } | Self::ExpectedNumber { found, .. } => *found,
        }
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character, position } => {
                write!(f, "Unexpected character: {character} at position {position}")
            },

            Self::UnexpectedEndOfInput { position } => {
                write!(f, "Unexpected end of input at position {position}")
            },

            Self::ExpectedClosingParen { found: Some(c), position } => write!(f,
                                                                              "Expected closing parenthesis at position {position}, found {c}"),

            Self::ExpectedClosingParen { found: None, position } => {
                write!(f, "Expected closing parenthesis at position {position}")
            },

            Self::ExpectedNumber { found: Some(c), position } => {
                write!(f, "Expected number at position {position}, found {c}")
            },

            Self::ExpectedNumber { found: None, position } => {
                write!(f, "Expected number at position {position}")
            },
        }
    }
}

impl std::error::Error for SyntaxError {}
