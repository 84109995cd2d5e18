use symtree::{Expr, differentiate, render, simplify_fully};

fn x() -> Expr {
    Expr::symbol("x")
}

fn assert_diff_renders(var: &str, expr: &Expr, expected: &str) {
    let got = differentiate(var, expr);
    assert_eq!(render(&got), expected, "d/d{var} {expr}");
}

#[test]
fn basic_vars_and_constants() {
    assert_diff_renders("x", &x(), "1");
    assert_diff_renders("x", &Expr::symbol("y"), "0");
    assert_diff_renders("x", &Expr::number(5), "0");
    assert_diff_renders("x", &Expr::number(-12), "0");
}

#[test]
fn sums_and_differences_stay_unsimplified() {
    let e = Expr::sum(x(), Expr::number(3));
    assert_diff_renders("x", &e, "(1 + 0)");
    let e = Expr::difference(Expr::symbol("y"), x());
    assert_diff_renders("x", &e, "(0 - 1)");
}

#[test]
fn product_rule() {
    let square = (x() * x()).expect("no literals to fold");
    assert_diff_renders("x", &square, "((1 * x) + (x * 1))");
}

#[test]
fn quotient_rule() {
    let e = Expr::quotient(Expr::number(1), x());
    assert_diff_renders("x", &e, "(((0 * x) - (1 * 1)) / (x * x))");
}

#[test]
fn absent_variable_yields_zero_terms() {
    let e = Expr::product(Expr::symbol("a"), Expr::symbol("b"));
    let d = differentiate("x", &e);
    assert_eq!(render(&d), "((0 * b) + (a * 0))");
    let expected = Expr::sum(
        Expr::product(Expr::number(0), Expr::symbol("b")),
        Expr::product(Expr::symbol("a"), Expr::number(0)),
    );
    assert_eq!(simplify_fully(d).expect("fold"), expected);
}

#[test]
fn method_form_matches_free_function() {
    let e = Expr::product(Expr::number(3), x());
    assert_eq!(e.differentiate("x"), differentiate("x", &e));
}

#[test]
fn derivative_folds_when_simplified() {
    let e = Expr::product(Expr::number(3), Expr::number(4));
    let d = differentiate("x", &e);
    assert_eq!(render(&d), "((0 * 4) + (3 * 0))");
    assert_eq!(simplify_fully(d).expect("fold"), Expr::number(0));
}
