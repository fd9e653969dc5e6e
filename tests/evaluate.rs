use calcdescent::evaluate;

fn assert_value(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(value) => assert_eq!(value, expected, "{src} evaluated to {value}, expected {expected}"),
        Err(e) => panic!("{src} failed: {e}"),
    }
}

fn assert_close(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(value) => assert!((value - expected).abs() < 1e-9,
                             "{src} evaluated to {value}, expected about {expected}"),
        Err(e) => panic!("{src} failed: {e}"),
    }
}

#[test]
fn numerals_evaluate_to_themselves() {
    for n in [0.0, 1.0, 7.0, 42.0, 2.5, 0.125, 1234.5678, 1e15, 98_765.432_1] {
        assert_value(&n.to_string(), n);
    }
    assert_value(".5", 0.5);
    assert_value("3.", 3.0);
}

#[test]
fn basic_arithmetic() {
    assert_value("1+2", 3.0);
    assert_value("7*9", 63.0);
    assert_value("8-5", 3.0);
    assert_value("10/4", 2.5);
    assert_value("2.5*2", 5.0);
    assert_value(".5+.5", 1.0);
}

#[test]
fn same_level_operators_are_left_associative() {
    assert_value("8-3-2", 3.0);
    assert_value("8/4/2", 1.0);
    assert_value("100/10*2", 20.0);
    assert_value("2*3%4", 2.0);
    assert_value("1-2+3", 2.0);
}

#[test]
fn multiplicative_operators_bind_tighter() {
    assert_value("2+3*4", 14.0);
    assert_value("(2+3)*4", 20.0);
    assert_value("10-2*3", 4.0);
    assert_value("1+10%4", 3.0);
    assert_value("((((1))))+((2))", 3.0);
}

#[test]
fn unary_signs() {
    assert_value("-3+5", 2.0);
    assert_value("5*-2", -10.0);
    assert_value("+4", 4.0);
    assert_value("2--1", 3.0);
    assert_value("-(2+3)", -5.0);
    assert_value("-sqrt(9)", -3.0);
}

#[test]
fn remainder_keeps_sign_of_dividend() {
    assert_value("7%3", 1.0);
    assert_value("-7%3", -1.0);
    assert_value("7%-3", 1.0);
    assert_value("5.5%2", 1.5);
}

#[test]
fn builtin_functions() {
    assert_value("sqrt(16)", 4.0);
    assert_value("fact(5)", 120.0);
    assert_value("pow(2,10)", 1024.0);
    assert_close("log(2,8)", 3.0);
    assert_close("lg(1000)", 3.0);
    assert_close("log(10,100)", 2.0);
    assert_value("pow(4,0.5)", 2.0);
}

#[test]
fn nested_function_calls() {
    assert_value("sqrt(pow(3,2)+pow(4,2))", 5.0);
    assert_value("pow(2,3)*2", 16.0);
    assert_value("fact(fact(3))", 720.0);
    assert_close("log(2,pow(2,10))", 10.0);
    assert_value("(sqrt(4))", 2.0);
}

#[test]
fn factorial_edge_cases() {
    assert_value("fact(0)", 1.0);
    assert_value("fact(1)", 1.0);
    assert_value("fact(-3)", 1.0);
    assert_value("fact(4.0)", 24.0);
    assert!(evaluate("fact(170)").unwrap().is_finite());
    assert_eq!(evaluate("fact(171)").unwrap(), f64::INFINITY);
}

#[test]
fn floating_point_anomalies_are_not_errors() {
    assert_eq!(evaluate("1/0").unwrap(), f64::INFINITY);
    assert_eq!(evaluate("-1/0").unwrap(), f64::NEG_INFINITY);
    assert!(evaluate("0/0").unwrap().is_nan());
    assert!(evaluate("sqrt(-1)").unwrap().is_nan());
    assert_eq!(evaluate("lg(0)").unwrap(), f64::NEG_INFINITY);
    assert!(evaluate("5%0").unwrap().is_nan());
}

#[test]
fn whitespace_is_ignored() {
    assert_value(" 2 +\t3 ", 5.0);
    assert_value("pow( 2 , 10 )", 1024.0);
    assert_value("1 2", 12.0);
}

#[test]
fn repeated_evaluation_is_deterministic() {
    for src in ["2+3*4", "fact(6)/pow(2,3)", "-7%3"] {
        let first = evaluate(src);
        for _ in 0..5 {
            assert_eq!(evaluate(src), first);
        }
    }
    let error = evaluate("(1+");
    assert_eq!(evaluate("(1+"), error);
}

#[test]
fn long_operator_chains_evaluate_iteratively() {
    assert_value(&vec!["1"; 100_000].join("+"), 100_000.0);
    assert_value(&vec!["1"; 100_000].join("*"), 1.0);
    assert_value(&format!("100000{}", "-1".repeat(100_000)), 0.0);
}

#[test]
fn nesting_up_to_the_limit_is_accepted() {
    let depth = calcdescent::interpreter::parser::group::MAX_NESTING_DEPTH;
    assert_value(&format!("{}1{}", "(".repeat(depth), ")".repeat(depth)), 1.0);
    assert_value(&format!("{}16{}", "sqrt(".repeat(2), ")".repeat(2)), 2.0);
    assert_value(&vec!["(1)"; 1_000].join("+"), 1_000.0);
}
