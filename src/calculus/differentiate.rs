use crate::expr::Expr;

/// Differentiate `expr` with respect to the symbol `var`.
///
/// The result is a pure structural rewrite and is left unsimplified; pass it
/// through [`crate::simplify_fully`] for a folded form.
pub fn differentiate(var: &str, expr: &Expr) -> Expr {
    Differentiator { var }.derive(expr)
}

struct Differentiator<'a> {
    var: &'a str,
}

impl<'a> Differentiator<'a> {
    fn derive(&self, expr: &Expr) -> Expr {
        match expr {
            Expr::Symbol(name) if name == self.var => Expr::Number(1),
            Expr::Symbol(_) => Expr::Number(0),
            Expr::Number(_) => Expr::Number(0),

            Expr::Sum(a, b) => Expr::sum(self.derive(a), self.derive(b)),
            Expr::Difference(a, b) => Expr::difference(self.derive(a), self.derive(b)),
            Expr::Product(a, b) => self.product_rule(a, b),
            Expr::Quotient(a, b) => self.quotient_rule(a, b),
        }
    }

    // (a*b)' = a'*b + a*b'
    fn product_rule(&self, a: &Expr, b: &Expr) -> Expr {
        Expr::sum(
            Expr::product(self.derive(a), b.clone()),
            Expr::product(a.clone(), self.derive(b)),
        )
    }

    // (a/b)' = (a'*b - a*b') / (b*b)
    fn quotient_rule(&self, a: &Expr, b: &Expr) -> Expr {
        Expr::quotient(
            Expr::difference(
                Expr::product(self.derive(a), b.clone()),
                Expr::product(a.clone(), self.derive(b)),
            ),
            Expr::product(b.clone(), b.clone()),
        )
    }
}
