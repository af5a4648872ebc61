use std::collections::{HashMap, VecDeque};

use crate::{
    error::{EvalError, SyntaxError, UnrecognizedSymbolError},
    interpreter::{
        lexer,
        parser,
        token::{BinaryOp, PostfixToken, UnaryOp},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// An operand on the evaluation stack.
///
/// Variables enter the stack as names and are resolved against the symbol
/// table as late as possible, because the left-hand side of an assignment
/// must still be a name when `=` is applied.
#[derive(Debug, Clone, PartialEq)]
enum Operand {
    /// A computed or literal value.
    Value(f64),
    /// A variable reference that has not been resolved yet.
    Name(String),
}

/// Evaluates expressions against a persistent symbol table.
///
/// The interpreter owns one variable-to-value mapping for its lifetime:
/// assignments made by one [`evaluate`] call are visible to every later
/// call on the same instance. Separate instances do not share state, so a
/// fresh `Interpreter::new()` always starts with an empty table.
///
/// The interpreter is single-threaded; callers that share one instance
/// across threads must serialize access themselves.
///
/// ## Usage
/// ```
/// use shunt::Interpreter;
///
/// let mut interpreter = Interpreter::new();
/// assert_eq!(interpreter.evaluate("a = 5").unwrap(), 5.0);
/// assert_eq!(interpreter.evaluate("a * a + 2").unwrap(), 27.0);
/// ```
///
/// [`evaluate`]: Interpreter::evaluate
#[derive(Debug, Default)]
pub struct Interpreter {
    /// Maps variable names to their last-assigned values. Grows by
    /// insertion or overwrite on assignment; never shrinks.
    symbols: HashMap<String, f64>,
}

impl Interpreter {
    /// Creates an interpreter with an empty symbol table.
    #[must_use]
    pub fn new() -> Self {
        Self { symbols: HashMap::new() }
    }

    /// Evaluates one expression and returns its numeric result.
    ///
    /// Runs the full pipeline: tokenization, shunting-yard conversion to
    /// postfix, and postfix evaluation against this interpreter's symbol
    /// table. An assignment (`name = expr`) stores the right-hand value
    /// under `name` and returns it; all other expressions are read-only
    /// with respect to the table.
    ///
    /// # Parameters
    /// - `expression`: One expression, e.g. `"x = 2 * (3 + 4)"`.
    ///
    /// # Returns
    /// The value of the expression.
    ///
    /// # Errors
    /// - [`EvalError::Syntax`] for structural problems: misplaced `=`,
    ///   unmatched parentheses, missing operands, empty input.
    /// - [`EvalError::Symbol`] for text that is no known token, or for a
    ///   variable read before any assignment bound it.
    ///
    /// A failed call leaves the symbol table untouched: the one write an
    /// assignment performs happens only after its right-hand side has
    /// fully evaluated.
    ///
    /// # Example
    /// ```
    /// use shunt::Interpreter;
    ///
    /// let mut interpreter = Interpreter::new();
    /// assert_eq!(interpreter.evaluate("5 * 3 + 2 * 8").unwrap(), 31.0);
    /// assert!(interpreter.evaluate("2 * 3 *").is_err());
    /// ```
    pub fn evaluate(&mut self, expression: &str) -> EvalResult<f64> {
        let tokens = lexer::tokenize(expression)?;
        let postfix = parser::to_postfix(&tokens, expression)?;
        self.eval_postfix(postfix)
    }

    /// Looks up the current value of a variable without evaluating
    /// anything.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<f64> {
        self.symbols.get(name).copied()
    }

    /// Evaluates a postfix token queue front-to-back.
    ///
    /// Operands are pushed onto an evaluation stack; operators pop their
    /// operands and push the result. A variable pushed onto a stack that
    /// already holds an operand is resolved immediately. The sole
    /// exception, a name alone on the stack, is the potential assignment
    /// target; it stays a name until `=` consumes it or the queue ends.
    fn eval_postfix(&mut self, mut postfix: VecDeque<PostfixToken>) -> EvalResult<f64> {
        let mut eval: Vec<Operand> = Vec::new();

        while let Some(token) = postfix.pop_front() {
            match token {
                PostfixToken::Number(value) => eval.push(Operand::Value(value)),
                PostfixToken::Variable(name) => {
                    eval.push(Operand::Name(name));
                    if eval.len() > 1 {
                        self.resolve_top(&mut eval)?;
                    }
                },
                PostfixToken::Unary(op) => self.apply_unary(op, &mut eval)?,
                PostfixToken::Binary(op) => self.apply_binary(op, &mut eval)?,
            }
        }

        let result = eval.pop().ok_or(SyntaxError::EmptyExpression)?;
        if !eval.is_empty() {
            return Err(SyntaxError::DanglingOperands { count: eval.len() + 1 }.into());
        }

        // A lone name means the whole expression was a bare variable
        // reference.
        self.resolve(result)
    }

    /// Applies a unary operator to the top of the evaluation stack.
    fn apply_unary(&self, op: UnaryOp, eval: &mut Vec<Operand>) -> EvalResult<()> {
        let operand = eval.pop()
                          .ok_or(SyntaxError::MissingOperand { operator: op.symbol() })?;
        let value = self.resolve(operand)?;
        eval.push(Operand::Value(op.apply(value)));
        Ok(())
    }

    /// Applies a binary operator to the top two entries of the evaluation
    /// stack. The right operand was pushed later, so it is popped first.
    fn apply_binary(&mut self, op: BinaryOp, eval: &mut Vec<Operand>) -> EvalResult<()> {
        if eval.len() < 2 {
            return Err(SyntaxError::MissingOperands { operator: op.symbol() }.into());
        }
        let right = eval.pop()
                        .ok_or(SyntaxError::MissingOperands { operator: op.symbol() })?;
        let left = eval.pop()
                       .ok_or(SyntaxError::MissingOperands { operator: op.symbol() })?;

        let result = match op {
            BinaryOp::Assign => {
                // The target must still be an unresolved name; the table
                // is written only now, after the right-hand side has
                // evaluated successfully.
                let name = match left {
                    Operand::Name(name) => name,
                    Operand::Value(value) => {
                        return Err(SyntaxError::InvalidAssignment { target: value.to_string(), }.into());
                    },
                };
                let value = self.resolve(right)?;
                self.symbols.insert(name, value);
                value
            },
            BinaryOp::Add => self.resolve(left)? + self.resolve(right)?,
            BinaryOp::Mul => self.resolve(left)? * self.resolve(right)?,
            BinaryOp::Div => self.resolve(left)? / self.resolve(right)?,
        };

        eval.push(Operand::Value(result));
        Ok(())
    }

    /// Replaces a name on top of the evaluation stack with its value.
    fn resolve_top(&self, eval: &mut Vec<Operand>) -> EvalResult<()> {
        if matches!(eval.last(), Some(Operand::Name(_))) {
            if let Some(operand) = eval.pop() {
                let value = self.resolve(operand)?;
                eval.push(Operand::Value(value));
            }
        }
        Ok(())
    }

    /// Resolves an operand to its numeric value, looking names up in the
    /// symbol table.
    fn resolve(&self, operand: Operand) -> EvalResult<f64> {
        match operand {
            Operand::Value(value) => Ok(value),
            Operand::Name(name) => {
                self.symbols
                    .get(&name)
                    .copied()
                    .ok_or_else(|| UnrecognizedSymbolError::UnboundVariable { name }.into())
            },
        }
    }
}
