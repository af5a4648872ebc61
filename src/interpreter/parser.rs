use std::collections::VecDeque;

use crate::{
    error::SyntaxError,
    interpreter::{
        lexer::Token,
        token::{BinaryOp, PostfixToken, UnaryOp},
    },
};

/// Result type used by the shunting-yard conversion.
pub type ParseResult<T> = Result<T, SyntaxError>;

/// An entry on the operator stack during conversion.
///
/// `(` is not an operator, but it lives on the same stack as a barrier:
/// nothing below it is popped until the matching `)` arrives.
#[derive(Debug, Clone, Copy, PartialEq)]
enum StackEntry {
    Unary(UnaryOp),
    Binary(BinaryOp),
    LParen,
}

/// Converts a normalized infix token sequence into a postfix token queue.
///
/// This is the shunting-yard algorithm over the expression grammar:
/// operands go straight to the output queue, operators wait on a stack
/// until an operator of lower or equal binding arrives, a `)` unwinds the
/// stack to the matching `(`, and the stack is drained once the input is
/// exhausted.
///
/// Precedence, low to high: `=` (must be the first operator in the whole
/// expression), `+`, `* /`, unary operators. Unary operators are pushed
/// unconditionally and never cause a pop; `-` (negation) is popped by a
/// following `+`, `*` or `/`, while function names are only unwound by a
/// `)` or the final drain.
///
/// # Parameters
/// - `tokens`: The token sequence produced by [`tokenize`].
/// - `expression`: The original source text, used to name the left-hand
///   side in assignment-position errors.
///
/// # Returns
/// The postfix token queue, ready for evaluation.
///
/// # Errors
/// - [`SyntaxError::InvalidAssignment`] if `=` appears when the operator
///   stack is not empty, i.e. anything other than a bare name precedes it.
/// - [`SyntaxError::UnmatchedCloseParen`] if a `)` finds no `(` to match.
/// - [`SyntaxError::UnmatchedOpenParen`] if a `(` is still on the stack
///   when the input ends.
///
/// [`tokenize`]: crate::interpreter::lexer::tokenize
pub fn to_postfix(tokens: &[Token], expression: &str) -> ParseResult<VecDeque<PostfixToken>> {
    let mut operators: Vec<StackEntry> = Vec::new();
    let mut output: VecDeque<PostfixToken> = VecDeque::new();

    for token in tokens {
        match token {
            Token::Number(value) => output.push_back(PostfixToken::Number(*value)),
            Token::Identifier(name) => output.push_back(PostfixToken::Variable(name.clone())),

            // Unary operators always outrank whatever is pending.
            Token::Minus => operators.push(StackEntry::Unary(UnaryOp::Negate)),
            Token::Function(op) => operators.push(StackEntry::Unary(*op)),

            Token::Equals => {
                // `=` is only valid as the first operator of the whole
                // expression; an operator on the stack means the left-hand
                // side is not a plain name.
                if !operators.is_empty() {
                    return Err(SyntaxError::InvalidAssignment { target: assignment_target(expression), });
                }
                operators.push(StackEntry::Binary(BinaryOp::Assign));
            },

            Token::Plus => {
                pop_while(&mut operators, &mut output, |entry| {
                    matches!(entry,
                             StackEntry::Unary(UnaryOp::Negate)
                             | StackEntry::Binary(BinaryOp::Add | BinaryOp::Mul | BinaryOp::Div))
                });
                operators.push(StackEntry::Binary(BinaryOp::Add));
            },

            Token::Star | Token::Slash => {
                // `+` stays parked: it binds looser than `*` and `/`.
                pop_while(&mut operators, &mut output, |entry| {
                    matches!(entry,
                             StackEntry::Unary(UnaryOp::Negate)
                             | StackEntry::Binary(BinaryOp::Mul | BinaryOp::Div))
                });
                let op = if matches!(token, Token::Star) { BinaryOp::Mul } else { BinaryOp::Div };
                operators.push(StackEntry::Binary(op));
            },

            Token::LParen => operators.push(StackEntry::LParen),

            Token::RParen => {
                if matches!(operators.last(), None | Some(StackEntry::Binary(BinaryOp::Assign))) {
                    return Err(SyntaxError::UnmatchedCloseParen);
                }
                loop {
                    match operators.pop() {
                        Some(StackEntry::LParen) => break,
                        Some(entry) => output.push_back(entry.into_postfix()),
                        None => return Err(SyntaxError::UnmatchedCloseParen),
                    }
                }
            },
        }
    }

    // Drain whatever is still parked. A leftover `(` means its `)` never
    // arrived.
    while let Some(entry) = operators.pop() {
        if matches!(entry, StackEntry::LParen) {
            return Err(SyntaxError::UnmatchedOpenParen);
        }
        output.push_back(entry.into_postfix());
    }

    Ok(output)
}

/// Pops and emits stack entries from the top for as long as `should_pop`
/// accepts them.
fn pop_while(operators: &mut Vec<StackEntry>,
             output: &mut VecDeque<PostfixToken>,
             should_pop: impl Fn(&StackEntry) -> bool) {
    while let Some(top) = operators.last() {
        if !should_pop(top) {
            break;
        }
        if let Some(entry) = operators.pop() {
            output.push_back(entry.into_postfix());
        }
    }
}

/// Extracts the text left of the first `=` for the invalid-assignment
/// error message.
fn assignment_target(expression: &str) -> String {
    expression.split('=')
              .next()
              .unwrap_or("")
              .trim()
              .to_string()
}

impl StackEntry {
    /// Converts a popped stack entry into its postfix token. `(` never
    /// reaches the output queue; both drain sites handle it before
    /// calling this.
    fn into_postfix(self) -> PostfixToken {
        match self {
            Self::Unary(op) => PostfixToken::Unary(op),
            Self::Binary(op) => PostfixToken::Binary(op),
            Self::LParen => unreachable!("'(' is never emitted to the postfix queue"),
        }
    }
}
