#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all structural errors in an expression.
///
/// Syntax errors are detected during the shunting-yard conversion
/// (misplaced `=`, unmatched parentheses) or during postfix evaluation
/// (operators that find too few operands).
pub enum SyntaxError {
    /// An `=` appeared where its left-hand side is not a plain variable
    /// name.
    InvalidAssignment {
        /// The text of the rejected left-hand side.
        target: String,
    },
    /// A `)` was found with no `(` to match it.
    UnmatchedCloseParen,
    /// A `(` was still open when the expression ended.
    UnmatchedOpenParen,
    /// A unary operator found no operand to apply to.
    MissingOperand {
        /// The operator's source spelling.
        operator: &'static str,
    },
    /// A binary operator found fewer than two operands.
    MissingOperands {
        /// The operator's source spelling.
        operator: &'static str,
    },
    /// The expression contained no tokens at all.
    EmptyExpression,
    /// More than one operand was left over after evaluation, e.g. `2 3`.
    DanglingOperands {
        /// How many operands remained on the evaluation stack.
        count: usize,
    },
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidAssignment { target } => {
                write!(f, "Cannot assign to the expression '{target}'.")
            },

            Self::UnmatchedCloseParen => write!(f, "Unmatched ')'."),

            Self::UnmatchedOpenParen => write!(f, "Unmatched '('."),

            Self::MissingOperand { operator } => {
                write!(f, "Expected an operand for operator '{operator}'.")
            },

            Self::MissingOperands { operator } => {
                write!(f, "Expected two operands for operator '{operator}'.")
            },

            Self::EmptyExpression => write!(f, "The expression is empty."),

            Self::DanglingOperands { count } => write!(f,
                                                       "Expected a single result, but {count} operands remain."),
        }
    }
}

impl std::error::Error for SyntaxError {}
