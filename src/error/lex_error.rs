#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing source text.
pub enum LexError {
    /// A character that does not begin any token.
    UnrecognizedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the source.
        position:  usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedCharacter { character, position } => write!(f,
                                                                          "Error at position {position}: Unrecognized character '{character}'."),
        }
    }
}

impl std::error::Error for LexError {}
