use tracing::{debug, trace};

use crate::error::{CasError, Result};
use crate::expr::{BinaryOp, Expr};

/// Fold a binary node whose two children are both integer literals.
///
/// Only the node itself is inspected: children are not simplified first, and
/// quotients are always kept as written. Folding uses checked arithmetic.
pub fn simplify(expr: Expr) -> Result<Expr> {
    match expr {
        Expr::Sum(a, b) => simplify_sum(*a, *b),
        Expr::Difference(a, b) => simplify_difference(*a, *b),
        Expr::Product(a, b) => simplify_product(*a, *b),
        Expr::Quotient(a, b) => simplify_quotient(*a, *b),
        e @ (Expr::Number(_) | Expr::Symbol(_)) => Ok(e),
    }
}

pub fn simplify_sum(a: Expr, b: Expr) -> Result<Expr> {
    fold_literals(BinaryOp::Add, a, b, i64::checked_add)
}

pub fn simplify_difference(a: Expr, b: Expr) -> Result<Expr> {
    fold_literals(BinaryOp::Sub, a, b, i64::checked_sub)
}

pub fn simplify_product(a: Expr, b: Expr) -> Result<Expr> {
    fold_literals(BinaryOp::Mul, a, b, i64::checked_mul)
}

/// Quotients are never folded, not even `6 / 3`.
pub fn simplify_quotient(a: Expr, b: Expr) -> Result<Expr> {
    Ok(Expr::quotient(a, b))
}

/// Apply [`simplify`] bottom-up, children before their parent.
pub fn simplify_fully(expr: Expr) -> Result<Expr> {
    match expr {
        Expr::Sum(a, b) => simplify_sum(simplify_fully(*a)?, simplify_fully(*b)?),
        Expr::Difference(a, b) => simplify_difference(simplify_fully(*a)?, simplify_fully(*b)?),
        Expr::Product(a, b) => simplify_product(simplify_fully(*a)?, simplify_fully(*b)?),
        Expr::Quotient(a, b) => simplify_quotient(simplify_fully(*a)?, simplify_fully(*b)?),
        e @ (Expr::Number(_) | Expr::Symbol(_)) => Ok(e),
    }
}

fn fold_literals(
    op: BinaryOp,
    a: Expr,
    b: Expr,
    apply: fn(i64, i64) -> Option<i64>,
) -> Result<Expr> {
    match (a, b) {
        (Expr::Number(lhs), Expr::Number(rhs)) => match apply(lhs, rhs) {
            Some(value) => {
                trace!(%op, lhs, rhs, value, "folded literal operands");
                Ok(Expr::Number(value))
            }
            None => {
                debug!(%op, lhs, rhs, "literal fold overflowed");
                Err(CasError::Overflow { op, lhs, rhs })
            }
        },
        (a, b) => Ok(Expr::binary(op, a, b)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_keeps_non_literal_nodes() {
        let node = fold_literals(BinaryOp::Mul, Expr::from("x"), Expr::from(2), i64::checked_mul)
            .expect("no overflow possible");
        assert_eq!(node, Expr::product(Expr::from("x"), Expr::from(2)));
    }

    #[test]
    fn fold_reports_operands_on_overflow() {
        let err = fold_literals(BinaryOp::Sub, Expr::from(i64::MIN), Expr::from(1), i64::checked_sub)
            .unwrap_err();
        assert_eq!(
            err,
            CasError::Overflow {
                op: BinaryOp::Sub,
                lhs: i64::MIN,
                rhs: 1
            }
        );
    }
}
