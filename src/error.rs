/// Unknown-symbol errors.
///
/// Defines the error type for text the lexer does not recognize and for
/// variables read before assignment.
pub mod symbol_error;
/// Structural expression errors.
///
/// Defines the error type for malformed expression structure: misplaced
/// assignment, unmatched parentheses, and operators with too few
/// operands.
pub mod syntax_error;

pub use symbol_error::UnrecognizedSymbolError;
pub use syntax_error::SyntaxError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Any error an [`evaluate`](crate::Interpreter::evaluate) call can
/// produce.
///
/// All errors are terminal for the failing call and leave the symbol
/// table unchanged; the caller decides whether to retry with corrected
/// input.
pub enum EvalError {
    /// The expression is structurally invalid.
    Syntax(SyntaxError),
    /// The expression refers to a symbol the interpreter does not know.
    Symbol(UnrecognizedSymbolError),
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax(e) => write!(f, "{e}"),
            Self::Symbol(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Syntax(e) => Some(e),
            Self::Symbol(e) => Some(e),
        }
    }
}

impl From<SyntaxError> for EvalError {
    fn from(error: SyntaxError) -> Self {
        Self::Syntax(error)
    }
}

impl From<UnrecognizedSymbolError> for EvalError {
    fn from(error: UnrecognizedSymbolError) -> Self {
        Self::Symbol(error)
    }
}
