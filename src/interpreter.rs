/// The evaluator module computes results from postfix token streams.
///
/// The evaluator walks the postfix queue produced by the parser,
/// maintains the evaluation stack, resolves variables against the symbol
/// table, and applies operators. It owns the interpreter's only piece of
/// persistent state: the variable-to-value mapping.
///
/// # Responsibilities
/// - Evaluates postfix token queues against the symbol table.
/// - Performs assignments, writing the table only after the right-hand
///   side has evaluated.
/// - Reports missing operands and unbound variables.
pub mod evaluator;
/// The lexer module tokenizes source expressions for further parsing.
///
/// The lexer reads the raw expression text and produces a flat sequence
/// of tokens: numbers, identifiers, function names, operators, and
/// parentheses. It also rewrites binary subtraction into addition of a
/// negated term, so every `-` downstream is unary negation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens, discarding
///   whitespace.
/// - Normalizes `-` to pure unary negation.
/// - Reports text that matches no token class.
pub mod lexer;
/// The parser module converts infix token sequences to postfix.
///
/// The parser runs the shunting-yard algorithm: an operator stack and an
/// output queue resolve precedence and parenthesis nesting in one
/// left-to-right pass, and operator placement (assignment position,
/// parenthesis matching) is validated along the way.
///
/// # Responsibilities
/// - Produces the postfix token queue consumed by the evaluator.
/// - Enforces that `=` is the structurally first operator.
/// - Reports unmatched parentheses.
pub mod parser;
/// The token module defines the shared token and operator model.
///
/// This module declares the closed unary and binary operator catalogs,
/// their semantics, and the postfix token type that flows from the parser
/// to the evaluator.
///
/// # Responsibilities
/// - Defines the operator catalogs with one arity class per symbol.
/// - Implements the numeric semantics of each unary operator.
/// - Defines the postfix token model.
pub mod token;
