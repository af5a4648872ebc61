#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors about symbols the interpreter does not know.
///
/// Either the lexer met text that belongs to no token class, or a
/// variable was read before any assignment bound it.
pub enum UnrecognizedSymbolError {
    /// A piece of input text matched no recognized token.
    UnknownToken {
        /// The offending text.
        token: String,
    },
    /// A variable was used before it was assigned.
    UnboundVariable {
        /// The name of the variable.
        name: String,
    },
}

impl std::fmt::Display for UnrecognizedSymbolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownToken { token } => write!(f, "'{token}' is not a valid token."),

            Self::UnboundVariable { name } => write!(f,
                                                     "Variable '{name}' is used before it is assigned."),
        }
    }
}

impl std::error::Error for UnrecognizedSymbolError {}
