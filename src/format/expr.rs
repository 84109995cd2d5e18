use crate::expr::{BinaryOp, Expr};

/// Render `expr` with every binary node wrapped in parentheses.
pub fn render(expr: &Expr) -> String {
    let mut out = String::new();
    write_expr(&mut out, expr);
    out
}

fn write_expr(out: &mut String, expr: &Expr) {
    match expr {
        Expr::Number(n) => out.push_str(&n.to_string()),
        Expr::Symbol(s) => out.push_str(s),
        Expr::Sum(a, b) => write_binary(out, BinaryOp::Add, a, b),
        Expr::Difference(a, b) => write_binary(out, BinaryOp::Sub, a, b),
        Expr::Product(a, b) => write_binary(out, BinaryOp::Mul, a, b),
        Expr::Quotient(a, b) => write_binary(out, BinaryOp::Div, a, b),
    }
}

fn write_binary(out: &mut String, op: BinaryOp, a: &Expr, b: &Expr) {
    out.push('(');
    write_expr(out, a);
    out.push(' ');
    out.push(op.symbol());
    out.push(' ');
    write_expr(out, b);
    out.push(')');
}
