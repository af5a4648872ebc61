use logos::Logos;

use crate::{error::UnrecognizedSymbolError, interpreter::token::UnaryOp};

/// Represents a lexical token in a source expression.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the expression language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Integer literal tokens, such as `42`. There is no decimal point or
    /// exponent syntax; literals are digit runs, carried as `f64` because
    /// all arithmetic is IEEE-754 double precision.
    #[regex(r"[0-9]+", parse_number)]
    Number(f64),
    /// Built-in unary function names, such as `sin` or `sqrt`.
    #[token("sin", |_| UnaryOp::Sin)]
    #[token("cos", |_| UnaryOp::Cos)]
    #[token("tan", |_| UnaryOp::Tan)]
    #[token("cot", |_| UnaryOp::Cot)]
    #[token("sec", |_| UnaryOp::Sec)]
    #[token("csc", |_| UnaryOp::Csc)]
    #[token("abs", |_| UnaryOp::Abs)]
    #[token("sqrt", |_| UnaryOp::Sqrt)]
    Function(UnaryOp),
    /// Identifier tokens; variable names such as `x` or `total_1`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `=`
    #[token("=")]
    Equals,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// Tokenizes one expression, normalizing `-` to pure unary negation.
///
/// Whitespace is discarded by the lexer. After lexing, every `-` that
/// follows a value-like token (a number, an identifier, or `)`) is a
/// binary subtraction in the source; a synthetic `+` is inserted in front
/// of it so that `x - y` becomes `x + -y`. Downstream stages can then
/// treat `-` as a unary operator unconditionally.
///
/// A `-` at the start of the expression, or after another operator, `=`,
/// `(` or a function name, is already in unary position and gets no
/// insertion, so `--5` and `- - 5` both negate twice.
///
/// # Parameters
/// - `expression`: The raw expression text.
///
/// # Returns
/// The normalized token sequence.
///
/// # Errors
/// [`UnrecognizedSymbolError::UnknownToken`] if the input contains text
/// that matches no token class, carrying the offending slice.
pub fn tokenize(expression: &str) -> Result<Vec<Token>, UnrecognizedSymbolError> {
    let mut lexer = Token::lexer(expression);
    let mut tokens = Vec::new();
    let mut previous = None;

    while let Some(token) = lexer.next() {
        let Ok(token) = token else {
            return Err(UnrecognizedSymbolError::UnknownToken { token: lexer.slice()
                                                                           .to_string(), });
        };

        if matches!(token, Token::Minus) && follows_value(previous.as_ref()) {
            tokens.push(Token::Plus);
        }

        previous = Some(token.clone());
        tokens.push(token);
    }

    Ok(tokens)
}

/// Whether the previous token produces a value, making a `-` after it a
/// binary subtraction rather than a unary negation.
fn follows_value(previous: Option<&Token>) -> bool {
    matches!(previous,
             Some(Token::Number(_) | Token::Identifier(_) | Token::RParen))
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the token slice is not a valid number.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
