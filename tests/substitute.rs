use symtree::{CasError, Expr, render, substitute};

#[test]
fn substitution_folds_rebuilt_nodes() {
    let e = Expr::sum(Expr::symbol("x"), Expr::number(2));
    let got = substitute(&e, "x", &Expr::number(5)).expect("no overflow");
    assert_eq!(got, Expr::number(7));
    assert_eq!(render(&got), "7");
}

#[test]
fn every_occurrence_is_replaced() {
    let x = || Expr::symbol("x");
    let e = Expr::product(
        Expr::sum(x(), Expr::symbol("y")),
        Expr::difference(x(), Expr::number(1)),
    );
    let got = e.substitute("x", &Expr::number(4)).expect("no overflow");
    assert_eq!(render(&got), "((4 + y) * 3)");
}

#[test]
fn replacement_may_be_a_subtree() {
    let e = Expr::quotient(Expr::symbol("x"), Expr::symbol("z"));
    let replacement = Expr::product(Expr::symbol("a"), Expr::symbol("b"));
    let got = substitute(&e, "x", &replacement).expect("no overflow");
    assert_eq!(render(&got), "((a * b) / z)");
}

#[test]
fn quotients_stay_unfolded() {
    let e = Expr::quotient(Expr::symbol("x"), Expr::number(2));
    let got = substitute(&e, "x", &Expr::number(8)).expect("no overflow");
    assert_eq!(render(&got), "(8 / 2)");
}

#[test]
fn unrelated_symbols_and_numbers_are_untouched() {
    let e = Expr::difference(Expr::symbol("y"), Expr::number(3));
    assert_eq!(substitute(&e, "x", &Expr::number(1)), Ok(e.clone()));
    assert_eq!(substitute(&Expr::number(9), "x", &Expr::number(1)), Ok(Expr::number(9)));
}

#[test]
fn overflow_during_substitution_propagates() {
    let e = Expr::product(Expr::symbol("x"), Expr::symbol("x"));
    let err = substitute(&e, "x", &Expr::number(i64::MAX)).unwrap_err();
    assert!(matches!(err, CasError::Overflow { .. }));
}
