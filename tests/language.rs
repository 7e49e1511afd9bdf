use parith::{
    ast::Expr,
    evaluate_line,
    interpreter::{
        evaluator::core::VariableStore,
        lexer::{tokenize, Token},
        parser::core::Parser,
        registry::{Builtin, Registries},
    },
};

/// Evaluates one line in a fresh session and returns its value.
fn eval(src: &str) -> f64 {
    let registries = Registries::new();
    let mut store = VariableStore::new();
    match evaluate_line(src, &registries, &mut store) {
        Ok(result) => result.value,
        Err(e) => panic!("Line '{src}' failed: {e}"),
    }
}

/// Evaluates one line in a fresh session and returns its rendered tree.
fn render(src: &str) -> String {
    let registries = Registries::new();
    let mut store = VariableStore::new();
    match evaluate_line(src, &registries, &mut store) {
        Ok(result) => result.rendered,
        Err(e) => panic!("Line '{src}' failed: {e}"),
    }
}

fn assert_failure(src: &str) {
    let registries = Registries::new();
    let mut store = VariableStore::new();
    if evaluate_line(src, &registries, &mut store).is_ok() {
        panic!("Line '{src}' succeeded but was expected to fail")
    }
}

#[test]
fn literals_evaluate_to_themselves() {
    assert_eq!(eval("42"), 42.0);
    assert_eq!(eval("3.25"), 3.25);
    assert_eq!(eval(".5"), 0.5);
}

#[test]
fn same_precedence_groups_left_to_right() {
    assert_eq!(eval("1 - 2 - 3"), -4.0);
    assert_eq!(eval("1 + 1 * 2 - 3"), 0.0);
}

#[test]
fn power_groups_right_to_left() {
    assert_eq!(eval("2 ^ 3 ^ 2"), 512.0);
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(eval("1 + 2 * 3"), 7.0);
}

#[test]
fn brackets_override_precedence() {
    assert_eq!(eval("(1 + 2) * 3"), 9.0);
    assert_eq!(eval("2 * (1 + 2) - 2"), 4.0);
}

#[test]
fn unary_operators_take_only_the_next_prefix() {
    assert_eq!(eval("--1"), 1.0);
    assert_eq!(eval("-1 + 2"), 1.0);
    assert_eq!(eval("+5"), 5.0);
    // The negation binds to the literal `2`, not to `2 ^ 2`.
    assert_eq!(eval("-2 ^ 2"), 4.0);
}

#[test]
fn division_follows_ieee_semantics() {
    assert!(eval("1 / 0").is_infinite());
    assert!(eval("0 / 0").is_nan());
}

#[test]
fn builtin_functions_evaluate() {
    assert_eq!(eval("sin(0)"), 0.0);
    assert_eq!(eval("sqrt(9)"), 3.0);
    assert!((eval("log(e)") - 1.0).abs() < 1e-12);
    assert_eq!(eval("min(3, 2)"), 2.0);
    assert_eq!(eval("max(3, 2)"), 3.0);
}

#[test]
fn builtin_constants_need_no_brackets() {
    assert_eq!(eval("pi"), std::f64::consts::PI);
    assert_eq!(eval("2 * e"), 2.0 * std::f64::consts::E);
}

#[test]
fn mean_accepts_any_number_of_arguments() {
    assert_eq!(eval("mean(1, 2, 3, 4)"), 2.5);
    assert_eq!(eval("mean(7)"), 7.0);
}

#[test]
fn trees_render_fully_parenthesized() {
    assert_eq!(render("1 + 2 * 3"), "(1 + (2 * 3))");
    assert_eq!(render("--1"), "(-(-1))");
    assert_eq!(render("sin(0)"), "sin(0)");
    assert_eq!(render("pi"), "pi");
}

#[test]
fn assignment_renders_as_its_target() {
    assert_eq!(render("x = 5"), "x");
}

#[test]
fn rendered_trees_reparse_to_the_same_value() {
    for src in ["1 + 2 * 3", "2 ^ 3 ^ 2", "-2 ^ 2", "mean(1, 2, 3, 4)"] {
        let value = eval(src);
        assert_eq!(eval(&render(src)), value, "round-trip of '{src}'");
    }
}

#[test]
fn variables_persist_across_lines() {
    let registries = Registries::new();
    let mut store = VariableStore::new();

    let result = evaluate_line("x = 5", &registries, &mut store).unwrap();
    assert_eq!(result.value, 5.0);

    let result = evaluate_line("x + 1", &registries, &mut store).unwrap();
    assert_eq!(result.value, 6.0);
}

#[test]
fn assignment_chains_right_to_left() {
    let registries = Registries::new();
    let mut store = VariableStore::new();

    evaluate_line("x = y = 5", &registries, &mut store).unwrap();

    assert_eq!(evaluate_line("x", &registries, &mut store).unwrap().value, 5.0);
    assert_eq!(evaluate_line("y", &registries, &mut store).unwrap().value, 5.0);
}

#[test]
fn assignment_reads_the_old_value_of_its_target() {
    let registries = Registries::new();
    let mut store = VariableStore::new();

    evaluate_line("x = 5", &registries, &mut store).unwrap();
    let result = evaluate_line("x = x + 1", &registries, &mut store).unwrap();

    assert_eq!(result.value, 6.0);
}

#[test]
fn assignment_requires_a_bare_variable_target() {
    assert_failure("1 + x = 2");
    assert_failure("sin(0) = 2");
    assert_failure("2 = 2");
}

#[test]
fn unbound_variables_are_an_error() {
    assert_failure("y + 1");
}

#[test]
fn wrong_argument_counts_are_rejected() {
    assert_failure("sin(1, 2)");
    assert_failure("min(1)");
    assert_failure("sin()");
    assert_failure("mean()");
}

#[test]
fn constants_reject_argument_lists() {
    assert_failure("pi(3)");
}

#[test]
fn malformed_input_is_rejected() {
    assert_failure("1 $ 2");
    assert_failure("(1 + 2");
    assert_failure("sin(1");
    assert_failure("sin 3");
    assert_failure("1 2");
    assert_failure("");
}

#[test]
fn arity_is_also_checked_at_evaluation_time() {
    let registries = Registries::new();
    let store = VariableStore::new();

    // A hand-built tree bypasses the parser's argument-list checks.
    let expr = Expr::Call { id:   Builtin::Sin,
                            args: vec![Expr::Number(1.0), Expr::Number(2.0)], };

    assert!(expr.eval(&registries, &store).is_err());
}

#[test]
fn words_classify_against_the_registries() {
    let registries = Registries::new();
    let tokens = tokenize("sin x", &registries).unwrap();

    assert_eq!(tokens,
               vec![Token::Keyword("sin".to_string()),
                    Token::Identifier("x".to_string()),
                    Token::EndOfFile]);
}

#[test]
fn parser_dump_marks_the_cursor_position() {
    let registries = Registries::new();
    let mut store = VariableStore::new();

    let tokens = tokenize("1 + 2", &registries).unwrap();
    let parser = Parser::new(tokens, &registries, &mut store);

    assert!(parser.to_string().starts_with("pos > "));
}
