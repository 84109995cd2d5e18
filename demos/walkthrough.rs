use symtree::{Complex, Expr, Result, simplify};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let a = Expr::from(10);
    let b = Expr::from("b");
    let sum = (a.clone() + b)?;
    println!("symbolic sum: {sum}");
    println!("literal sum: {}", (a + Expr::from(50))?);

    let c1 = Complex::new(1.0, 2.0);
    let c2 = Complex::new(3.0, 4.0);
    println!("complex sum: {}", c1 + c2);
    println!("complex difference: {}", c1 - c2);
    println!("complex product: {}", c1 * c2);
    println!("complex quotient: {}", (c1 / c2)?);

    let expr = Expr::sum(Expr::symbol("x"), Expr::number(2));
    println!("after substitution: {}", expr.substitute("x", &Expr::number(5))?);

    let folded = simplify(Expr::sum(Expr::number(2), Expr::number(3)))?;
    println!("simplified: {folded}");

    let x = Expr::symbol("x");
    let square = (x.clone() * x)?;
    println!("d/dx {square} = {}", square.differentiate("x"));
    Ok(())
}
