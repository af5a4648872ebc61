/// A unary operator: negation or one of the built-in functions.
///
/// The catalog is closed, so operator dispatch is an exhaustive match
/// rather than a runtime lookup that could come back empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// Numeric negation, written `-`.
    Negate,
    /// `sin`, on a radian argument.
    Sin,
    /// `cos`, on a radian argument.
    Cos,
    /// `tan`, on a radian argument.
    Tan,
    /// `cot`, computed as `1 / tan`.
    Cot,
    /// `sec`, computed as `1 / cos`.
    Sec,
    /// `csc`, computed as `1 / sin`.
    Csc,
    /// `abs`, the absolute value.
    Abs,
    /// `sqrt`, the square root. Negative input yields NaN.
    Sqrt,
}

impl UnaryOp {
    /// Applies the operator to one operand.
    ///
    /// The reciprocal functions (`cot`, `sec`, `csc`) carry no
    /// divide-by-zero guard; IEEE-754 infinities and NaNs propagate
    /// through to the caller.
    ///
    /// # Example
    /// ```
    /// use shunt::interpreter::token::UnaryOp;
    ///
    /// assert_eq!(UnaryOp::Negate.apply(5.0), -5.0);
    /// assert_eq!(UnaryOp::Abs.apply(-3.0), 3.0);
    /// assert_eq!(UnaryOp::Sqrt.apply(9.0), 3.0);
    /// ```
    #[must_use]
    pub fn apply(self, operand: f64) -> f64 {
        match self {
            Self::Negate => -operand,
            Self::Sin => operand.sin(),
            Self::Cos => operand.cos(),
            Self::Tan => operand.tan(),
            Self::Cot => 1.0 / operand.tan(),
            Self::Sec => 1.0 / operand.cos(),
            Self::Csc => 1.0 / operand.sin(),
            Self::Abs => operand.abs(),
            Self::Sqrt => operand.sqrt(),
        }
    }

    /// The source-level spelling of the operator, used in error messages.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Negate => "-",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Cot => "cot",
            Self::Sec => "sec",
            Self::Csc => "csc",
            Self::Abs => "abs",
            Self::Sqrt => "sqrt",
        }
    }
}

/// A binary operator.
///
/// Subtraction is deliberately absent: the tokenizer rewrites `x - y` as
/// `x + -y`, so `-` only ever reaches the parser as [`UnaryOp::Negate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// Addition, written `+`.
    Add,
    /// Multiplication, written `*`.
    Mul,
    /// Division, written `/`. Division by zero follows IEEE-754.
    Div,
    /// Assignment, written `=`. Writes to the symbol table and yields the
    /// assigned value.
    Assign,
}

impl BinaryOp {
    /// The source-level spelling of the operator, used in error messages.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Assign => "=",
        }
    }
}

/// One element of a postfix (reverse-Polish) token stream.
///
/// Produced by the shunting-yard conversion and consumed front-to-back by
/// the evaluator. Operands precede their operators, so evaluation needs a
/// single stack and no lookahead.
#[derive(Debug, Clone, PartialEq)]
pub enum PostfixToken {
    /// A numeric literal, already parsed to its value.
    Number(f64),
    /// A variable reference, still unresolved. Resolution happens during
    /// evaluation, where the assignment target must stay a name.
    Variable(String),
    /// A unary operator, consuming one operand.
    Unary(UnaryOp),
    /// A binary operator, consuming two operands.
    Binary(BinaryOp),
}
