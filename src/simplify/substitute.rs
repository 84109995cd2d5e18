use tracing::trace;

use crate::error::Result;
use crate::expr::Expr;
use crate::simplify::rules::{
    simplify_difference, simplify_product, simplify_quotient, simplify_sum,
};

/// Substitute variable `var` with `replacement` throughout `expr`.
///
/// Every rebuilt binary node gets one shallow simplification pass.
pub fn substitute(expr: &Expr, var: &str, replacement: &Expr) -> Result<Expr> {
    match expr {
        Expr::Symbol(name) if name == var => {
            trace!(var, "replaced symbol");
            Ok(replacement.clone())
        }
        Expr::Sum(a, b) => simplify_sum(
            substitute(a, var, replacement)?,
            substitute(b, var, replacement)?,
        ),
        Expr::Difference(a, b) => simplify_difference(
            substitute(a, var, replacement)?,
            substitute(b, var, replacement)?,
        ),
        Expr::Product(a, b) => simplify_product(
            substitute(a, var, replacement)?,
            substitute(b, var, replacement)?,
        ),
        Expr::Quotient(a, b) => simplify_quotient(
            substitute(a, var, replacement)?,
            substitute(b, var, replacement)?,
        ),
        Expr::Symbol(_) | Expr::Number(_) => Ok(expr.clone()),
    }
}
