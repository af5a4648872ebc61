use shunt::{
    EvalError, Interpreter,
    error::{SyntaxError, UnrecognizedSymbolError},
    run_script,
};

const TOLERANCE: f64 = 1e-12;

fn eval_one(expression: &str) -> Result<f64, EvalError> {
    Interpreter::new().evaluate(expression)
}

fn assert_evaluates(expression: &str, expected: f64) {
    match eval_one(expression) {
        Ok(value) => {
            assert!((value - expected).abs() < TOLERANCE,
                    "'{expression}' evaluated to {value}, expected {expected}");
        },
        Err(e) => panic!("'{expression}' failed: {e}"),
    }
}

fn assert_syntax_error(expression: &str) -> SyntaxError {
    match eval_one(expression) {
        Ok(value) => panic!("'{expression}' evaluated to {value} but was expected to fail"),
        Err(EvalError::Syntax(e)) => e,
        Err(e) => panic!("'{expression}' failed with {e:?}, expected a syntax error"),
    }
}

fn assert_symbol_error(expression: &str) -> UnrecognizedSymbolError {
    match eval_one(expression) {
        Ok(value) => panic!("'{expression}' evaluated to {value} but was expected to fail"),
        Err(EvalError::Symbol(e)) => e,
        Err(e) => panic!("'{expression}' failed with {e:?}, expected a symbol error"),
    }
}

#[test]
fn literals_and_basic_arithmetic() {
    assert_evaluates("42", 42.0);
    assert_evaluates("2 + 3", 5.0);
    assert_evaluates("2+3", 5.0);
    assert_evaluates("4 * 5", 20.0);
    assert_evaluates("9 / 2", 4.5);
    assert_evaluates("2 +\t3", 5.0);
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_evaluates("5 * 3 + 2 * 8", 31.0);
    assert_evaluates("2 + 3 * 4", 14.0);
    assert_evaluates("3 * 4 + 2", 14.0);
    assert_evaluates("8 / 2 + 2 * 3", 10.0);
}

#[test]
fn parentheses_override_precedence() {
    assert_evaluates("(2 + 3) * 4", 20.0);
    assert_evaluates("2 * (3 + 4)", 14.0);
    assert_evaluates("((((5))))", 5.0);
    assert_evaluates("(1 + 2) * (3 + 4)", 21.0);
}

#[test]
fn subtraction_rewrites_to_negated_addition() {
    assert_evaluates("10 - 3", 7.0);
    assert_evaluates("10 - 3 - 2", 5.0);
    assert_evaluates("2 - -3", 5.0);
    assert_evaluates("(2) - 3", -1.0);
    assert_evaluates("10 - 2 * 3", 4.0);
}

#[test]
fn unary_negation_stacks() {
    assert_evaluates("-5", -5.0);
    assert_evaluates("- - 5", 5.0);
    assert_evaluates("--5", 5.0);
    assert_evaluates("---5", -5.0);
    assert_evaluates("-(2 + 3)", -5.0);
}

#[test]
fn trigonometric_and_numeric_functions() {
    assert_evaluates("sin 0", 0.0);
    assert_evaluates("cos 0", 1.0);
    assert_evaluates("tan 0", 0.0);
    assert_evaluates("sec 0", 1.0);
    assert_evaluates("abs(0 - 7)", 7.0);
    assert_evaluates("sqrt 16", 4.0);
    assert_evaluates("sqrt sqrt 16", 2.0);
}

#[test]
fn ieee_754_propagation_instead_of_errors() {
    assert_eq!(eval_one("2 / 0").unwrap(), f64::INFINITY);
    assert!(eval_one("cot 0").unwrap().is_infinite());
    assert!(eval_one("sqrt(0 - 4)").unwrap().is_nan());
}

// A function pushed before `(` is only unwound by the final drain, so it
// ends up applying to everything after it: `sqrt(x) + 5` is `sqrt(x + 5)`.
// Parenthesizing the application itself gives the conventional reading.
#[test]
fn function_application_binds_loosely() {
    let mut interpreter = Interpreter::new();
    interpreter.evaluate("x = 4").unwrap();
    assert_eq!(interpreter.evaluate("sqrt(x) + 5").unwrap(), 3.0);
    assert_eq!(interpreter.evaluate("(sqrt x) + 5").unwrap(), 7.0);
    assert_eq!(interpreter.evaluate("sin 0 * 10 + 1").unwrap(), f64::sin(1.0));
}

#[test]
fn assignment_returns_the_value_and_persists() {
    let mut interpreter = Interpreter::new();
    assert_eq!(interpreter.evaluate("a = 5").unwrap(), 5.0);
    assert_eq!(interpreter.evaluate("a").unwrap(), 5.0);
    assert_eq!(interpreter.lookup("a"), Some(5.0));

    assert_eq!(interpreter.evaluate("b = a * a + 2").unwrap(), 27.0);
    assert_eq!(interpreter.evaluate("b / a").unwrap(), 5.4);
}

#[test]
fn assignment_overwrites_previous_value() {
    let mut interpreter = Interpreter::new();
    interpreter.evaluate("a = 5").unwrap();
    interpreter.evaluate("a = a + 1").unwrap();
    assert_eq!(interpreter.lookup("a"), Some(6.0));
}

#[test]
fn assignment_of_negative_value() {
    let mut interpreter = Interpreter::new();
    assert_eq!(interpreter.evaluate("a = -5").unwrap(), -5.0);
    assert_eq!(interpreter.evaluate("- a").unwrap(), 5.0);
    assert_eq!(interpreter.evaluate("sqrt abs a").unwrap(), f64::sqrt(5.0));
}

#[test]
fn read_only_evaluation_is_idempotent() {
    let mut interpreter = Interpreter::new();
    interpreter.evaluate("a = 5").unwrap();

    let first = interpreter.evaluate("a * 2 + 1").unwrap();
    let second = interpreter.evaluate("a * 2 + 1").unwrap();
    assert_eq!(first, second);
    assert_eq!(interpreter.lookup("a"), Some(5.0));
    assert_eq!(interpreter.lookup("b"), None);
}

#[test]
fn interpreters_do_not_share_state() {
    let mut one = Interpreter::new();
    let mut two = Interpreter::new();

    one.evaluate("a = 1").unwrap();
    assert!(matches!(two.evaluate("a"),
                     Err(EvalError::Symbol(UnrecognizedSymbolError::UnboundVariable { .. }))));
}

#[test]
fn missing_operands_are_syntax_errors() {
    assert!(matches!(assert_syntax_error("+"),
                     SyntaxError::MissingOperands { operator: "+" }));
    assert!(matches!(assert_syntax_error("2 * 3 *"),
                     SyntaxError::MissingOperands { operator: "*" }));
    assert!(matches!(assert_syntax_error("= 2"),
                     SyntaxError::MissingOperands { operator: "=" }));
    assert!(matches!(assert_syntax_error("sin"),
                     SyntaxError::MissingOperand { operator: "sin" }));
}

#[test]
fn misplaced_assignment_is_a_syntax_error() {
    assert!(matches!(assert_syntax_error("= = 2"), SyntaxError::InvalidAssignment { .. }));
    assert!(matches!(assert_syntax_error("== 2"), SyntaxError::InvalidAssignment { .. }));

    match assert_syntax_error("a + b = 2") {
        SyntaxError::InvalidAssignment { target } => assert_eq!(target, "a + b"),
        e => panic!("expected an invalid assignment, got {e:?}"),
    }

    match assert_syntax_error("a = b = 2") {
        SyntaxError::InvalidAssignment { target } => assert_eq!(target, "a"),
        e => panic!("expected an invalid assignment, got {e:?}"),
    }
}

#[test]
fn assignment_to_a_value_is_a_syntax_error() {
    assert!(matches!(assert_syntax_error("2 = 3"),
                     SyntaxError::InvalidAssignment { target } if target == "2"));
    assert!(matches!(assert_syntax_error("a = )"), SyntaxError::UnmatchedCloseParen));
}

// The parentheses close before `=` arrives, leaving the operator stack
// empty, so a parenthesized name on the left-hand side still assigns.
#[test]
fn parenthesized_assignment_target_still_assigns() {
    let mut interpreter = Interpreter::new();
    assert_eq!(interpreter.evaluate("(a) = 3").unwrap(), 3.0);
    assert_eq!(interpreter.lookup("a"), Some(3.0));
}

#[test]
fn unmatched_parentheses_are_syntax_errors() {
    assert!(matches!(assert_syntax_error("2 + 3)"), SyntaxError::UnmatchedCloseParen));
    assert!(matches!(assert_syntax_error(") 2"), SyntaxError::UnmatchedCloseParen));
    assert!(matches!(assert_syntax_error("(2 + 3"), SyntaxError::UnmatchedOpenParen));
    assert!(matches!(assert_syntax_error("((2)"), SyntaxError::UnmatchedOpenParen));
}

#[test]
fn empty_and_overfull_expressions_are_syntax_errors() {
    assert!(matches!(assert_syntax_error(""), SyntaxError::EmptyExpression));
    assert!(matches!(assert_syntax_error("   "), SyntaxError::EmptyExpression));
    assert!(matches!(assert_syntax_error("2 3"), SyntaxError::DanglingOperands { count: 2 }));
}

#[test]
fn unknown_tokens_are_named() {
    assert!(matches!(assert_symbol_error("2 * 3#"),
                     UnrecognizedSymbolError::UnknownToken { token } if token == "#"));
    assert!(matches!(assert_symbol_error("2 $ 3"),
                     UnrecognizedSymbolError::UnknownToken { token } if token == "$"));
    // No decimal literals: the dot itself is the unknown token.
    assert!(matches!(assert_symbol_error("3.5"),
                     UnrecognizedSymbolError::UnknownToken { token } if token == "."));
}

#[test]
fn unbound_variables_are_named() {
    assert!(matches!(assert_symbol_error("nope + 1"),
                     UnrecognizedSymbolError::UnboundVariable { name } if name == "nope"));
    assert!(matches!(assert_symbol_error("sqrt nope"),
                     UnrecognizedSymbolError::UnboundVariable { name } if name == "nope"));
    assert!(matches!(assert_symbol_error("nope"),
                     UnrecognizedSymbolError::UnboundVariable { name } if name == "nope"));
}

#[test]
fn failed_assignment_leaves_no_binding() {
    let mut interpreter = Interpreter::new();
    assert!(interpreter.evaluate("z = q").is_err());
    assert_eq!(interpreter.lookup("z"), None);
}

#[test]
fn scripts_share_one_symbol_table() {
    let result = run_script("x = 3\ny = x * x\ny + x").unwrap();
    assert_eq!(result, Some(12.0));

    assert_eq!(run_script("\n   \n").unwrap(), None);
    assert!(run_script("x = 1\nx + q").is_err());
}
