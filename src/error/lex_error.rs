#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while splitting source text into
/// tokens.
pub enum LexError {
    /// A character that does not begin any token.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the source.
        offset:    usize,
    },
    /// A run of digits that does not fit in a 64-bit signed integer.
    LiteralTooLarge {
        /// The digits as written in the source.
        literal: String,
        /// Byte offset of the first digit.
        offset:  usize,
    },
}

impl LexError {
    /// Byte offset in the source where the error was detected.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::InvalidCharacter { offset, .. } | Self::LiteralTooLarge { offset, .. } => *offset,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { character, offset } => {
                write!(f, "Error at offset {offset}: Invalid character {character:?}.")
            },
            Self::LiteralTooLarge { literal, offset } => write!(f,
                                                                "Error at offset {offset}: Integer literal {literal} is too large."),
        }
    }
}

impl std::error::Error for LexError {}
