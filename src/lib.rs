//! # shunt
//!
//! shunt is a small arithmetic interpreter written in Rust.
//! It tokenizes, parses, and evaluates single-line expressions with
//! support for variables, assignment, unary negation, and a fixed set of
//! transcendental functions, using the shunting-yard algorithm to turn
//! infix input into postfix form.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing,
/// parsing, or evaluating an expression. It standardizes error reporting
/// and carries detailed information about failures, including the
/// offending token text or operator.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches the offending substring or operator for user feedback.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together the lexer, the shunting-yard parser, the
/// postfix evaluator, and the shared token model to provide a complete
/// pipeline from expression text to numeric result. It exposes the public
/// API for evaluating expressions against a persistent symbol table.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, and evaluator.
/// - Provides the entry point for evaluating user expressions.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

pub use crate::{error::EvalError, interpreter::evaluator::Interpreter};

/// Evaluates a script of one expression per line, returning the value of
/// the last one.
///
/// All lines run against a single [`Interpreter`], so variables assigned
/// on one line are visible to the lines after it. Blank lines are
/// skipped. The first failing line aborts the script with its error.
///
/// # Errors
/// Returns an error if any line fails to tokenize, parse, or evaluate.
///
/// # Examples
/// ```
/// use shunt::run_script;
///
/// // Variables persist from line to line.
/// let result = run_script("x = 2 + 2\nx * x").unwrap();
/// assert_eq!(result, Some(16.0));
///
/// // An empty script has no result.
/// assert_eq!(run_script("").unwrap(), None);
///
/// // Example with an intentional error (unknown variable).
/// assert!(run_script("y = x + 1").is_err());
/// ```
pub fn run_script(source: &str) -> Result<Option<f64>, EvalError> {
    let mut interpreter = Interpreter::new();
    let mut result = None;

    for line in source.lines() {
        if line.trim().is_empty() {
            continue;
        }
        result = Some(interpreter.evaluate(line)?);
    }

    Ok(result)
}
