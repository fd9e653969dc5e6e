use calcdescent::{error::EvalError, evaluate, interpreter::parser::group::MAX_NESTING_DEPTH};

fn assert_error(src: &str, expected: &EvalError) {
    match evaluate(src) {
        Ok(value) => panic!("{src} evaluated to {value} but was expected to fail"),
        Err(e) => assert_eq!(&e, expected, "{src} failed with the wrong error"),
    }
}

fn unknown(text: &str) -> EvalError {
    EvalError::UnknownOperator { text: text.to_string() }
}

fn unexpected(text: &str) -> EvalError {
    EvalError::UnexpectedToken { text: text.to_string() }
}

#[test]
fn unclosed_parenthesis() {
    assert_error("(2+3", &EvalError::UnclosedParenthesis);
    assert_error("((1)", &EvalError::UnclosedParenthesis);
    assert_error("sqrt(4", &EvalError::UnclosedParenthesis);
    assert_error("pow(2,3", &EvalError::UnclosedParenthesis);
    assert_error("(1,2)", &EvalError::UnclosedParenthesis);
}

#[test]
fn number_expected() {
    assert_error("", &EvalError::NumberExpected);
    assert_error("2+", &EvalError::NumberExpected);
    assert_error("--1", &EvalError::NumberExpected);
    assert_error("()", &EvalError::NumberExpected);
    assert_error("*3", &EvalError::NumberExpected);
    assert_error("pow(,2)", &EvalError::NumberExpected);
}

#[test]
fn second_parameter_expected() {
    assert_error("pow(2)", &EvalError::SecondParameterExpected);
    assert_error("log(10)", &EvalError::SecondParameterExpected);
}

#[test]
fn parenthesized_equation_expected() {
    assert_error("sqrt4", &EvalError::ParenthesizedEquationExpected);
    assert_error("fact", &EvalError::ParenthesizedEquationExpected);
    assert_error("pow 2", &EvalError::ParenthesizedEquationExpected);
    assert_error("lg+1", &EvalError::ParenthesizedEquationExpected);
}

#[test]
fn integer_expected() {
    assert_error("fact(2.5)", &EvalError::IntegerExpected);
    assert_error("fact(1/3)", &EvalError::IntegerExpected);
    assert_error("fact(1/0)", &EvalError::IntegerExpected);
}

#[test]
fn unknown_operator() {
    assert_error("2@3", &unknown("@"));
    assert_error("x", &unknown("x"));
    assert_error("abc+1", &unknown("abc"));
    assert_error("1.2.3", &unknown("1.2.3"));
    assert_error(".", &unknown("."));
    assert_error("SQRT(4)", &unknown("SQRT"));
    assert_error("2^3", &unknown("^"));
}

#[test]
fn unknown_symbol_is_found_lazily() {
    // '@' is scanned before the parser notices the missing ')'.
    assert_error("(2+3@", &unknown("@"));
    // Parsing stops at the stray ')' before '@' is ever scanned.
    assert_error("1)@", &unexpected(")"));
}

#[test]
fn trailing_input_is_rejected() {
    assert_error("2)", &unexpected(")"));
    assert_error("(1)(2)", &unexpected("("));
    assert_error("(1)2", &unexpected("2"));
    assert_error("1,2", &unexpected(","));
}

#[test]
fn trailing_input_is_reported_as_written() {
    assert_error("(1)2.50", &unexpected("2.50"));
    assert_error("(1)007", &unexpected("007"));
}

#[test]
fn deep_nesting_is_an_error() {
    let too_deep = EvalError::NestingTooDeep { limit: MAX_NESTING_DEPTH };
    let depth = MAX_NESTING_DEPTH + 1;
    assert_error(&format!("{}1{}", "(".repeat(depth), ")".repeat(depth)), &too_deep);
    assert_error(&format!("{}1{}", "(".repeat(100_000), ")".repeat(100_000)), &too_deep);
    assert_error(&format!("{}1{}", "sqrt(".repeat(depth), ")".repeat(depth)), &too_deep);
    assert_error(&format!("{}1", "-(".repeat(100_000)), &too_deep);
}

#[test]
fn messages_name_the_phase() {
    assert_eq!(evaluate("(2+3").unwrap_err().to_string(),
               "Syntax error: unclosed parenthesis.");
    assert_eq!(evaluate("2@3").unwrap_err().to_string(),
               "Semantic error: unknown operator \"@\".");
    assert_eq!(evaluate("2)").unwrap_err().to_string(),
               "Syntax error: unexpected token \")\".");
    assert_eq!(evaluate(&"(".repeat(1_000)).unwrap_err().to_string(),
               format!("Syntax error: parentheses nested too deeply (limit {MAX_NESTING_DEPTH})."));
    assert!(evaluate("2@3").unwrap_err().is_tokenization_error());
    assert!(!evaluate("pow(2)").unwrap_err().is_tokenization_error());
}
