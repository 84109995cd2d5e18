//! Expression tree definitions and helpers.

use std::fmt;
use std::ops;

use crate::error::Result;
use crate::simplify::simplify;

/// An immutable symbolic expression. Each binary node owns both children.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Expr {
    Number(i64),
    Symbol(String),
    Sum(Box<Expr>, Box<Expr>),
    Difference(Box<Expr>, Box<Expr>),
    Product(Box<Expr>, Box<Expr>),
    Quotient(Box<Expr>, Box<Expr>),
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    pub fn symbol(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Sub => '-',
            BinaryOp::Mul => '*',
            BinaryOp::Div => '/',
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Expr {
    pub fn number(value: i64) -> Self {
        Expr::Number(value)
    }

    pub fn symbol(name: impl Into<String>) -> Self {
        Expr::Symbol(name.into())
    }

    /// Build a raw `a + b` node without simplifying it.
    pub fn sum(a: Expr, b: Expr) -> Self {
        Expr::Sum(a.boxed(), b.boxed())
    }

    pub fn difference(a: Expr, b: Expr) -> Self {
        Expr::Difference(a.boxed(), b.boxed())
    }

    pub fn product(a: Expr, b: Expr) -> Self {
        Expr::Product(a.boxed(), b.boxed())
    }

    pub fn quotient(a: Expr, b: Expr) -> Self {
        Expr::Quotient(a.boxed(), b.boxed())
    }

    pub fn binary(op: BinaryOp, a: Expr, b: Expr) -> Self {
        match op {
            BinaryOp::Add => Expr::sum(a, b),
            BinaryOp::Sub => Expr::difference(a, b),
            BinaryOp::Mul => Expr::product(a, b),
            BinaryOp::Div => Expr::quotient(a, b),
        }
    }

    pub fn as_number(&self) -> Option<i64> {
        if let Expr::Number(value) = self {
            Some(*value)
        } else {
            None
        }
    }

    pub fn as_symbol(&self) -> Option<&str> {
        if let Expr::Symbol(name) = self {
            Some(name)
        } else {
            None
        }
    }

    /// Split a binary node into its operator and children.
    pub fn as_binary(&self) -> Option<(BinaryOp, &Expr, &Expr)> {
        match self {
            Expr::Sum(a, b) => Some((BinaryOp::Add, a, b)),
            Expr::Difference(a, b) => Some((BinaryOp::Sub, a, b)),
            Expr::Product(a, b) => Some((BinaryOp::Mul, a, b)),
            Expr::Quotient(a, b) => Some((BinaryOp::Div, a, b)),
            Expr::Number(_) | Expr::Symbol(_) => None,
        }
    }

    pub fn contains_symbol(&self, name: &str) -> bool {
        match self {
            Expr::Number(_) => false,
            Expr::Symbol(s) => s == name,
            Expr::Sum(a, b)
            | Expr::Difference(a, b)
            | Expr::Product(a, b)
            | Expr::Quotient(a, b) => a.contains_symbol(name) || b.contains_symbol(name),
        }
    }

    pub fn differentiate(&self, var: &str) -> Expr {
        crate::calculus::differentiate(var, self)
    }

    pub fn simplify(self) -> Result<Expr> {
        simplify(self)
    }

    pub fn substitute(&self, var: &str, replacement: &Expr) -> Result<Expr> {
        crate::simplify::substitute(self, var, replacement)
    }

    pub fn boxed(self) -> Box<Self> {
        Box::new(self)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::format::render(self))
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Expr::Number(value)
    }
}

impl From<i32> for Expr {
    fn from(value: i32) -> Self {
        Expr::Number(value.into())
    }
}

impl From<&str> for Expr {
    fn from(name: &str) -> Self {
        Expr::symbol(name)
    }
}

impl From<String> for Expr {
    fn from(name: String) -> Self {
        Expr::Symbol(name)
    }
}

/// Build `a + b` and simplify the new node once.
pub fn add(a: Expr, b: Expr) -> Result<Expr> {
    simplify(Expr::sum(a, b))
}

pub fn sub(a: Expr, b: Expr) -> Result<Expr> {
    simplify(Expr::difference(a, b))
}

pub fn mul(a: Expr, b: Expr) -> Result<Expr> {
    simplify(Expr::product(a, b))
}

/// Build `a / b`. Quotients are kept as written, so this never fails today.
pub fn div(a: Expr, b: Expr) -> Result<Expr> {
    simplify(Expr::quotient(a, b))
}

impl ops::Add for Expr {
    type Output = Result<Expr>;

    fn add(self, rhs: Expr) -> Result<Expr> {
        add(self, rhs)
    }
}

impl ops::Sub for Expr {
    type Output = Result<Expr>;

    fn sub(self, rhs: Expr) -> Result<Expr> {
        sub(self, rhs)
    }
}

impl ops::Mul for Expr {
    type Output = Result<Expr>;

    fn mul(self, rhs: Expr) -> Result<Expr> {
        mul(self, rhs)
    }
}

impl ops::Div for Expr {
    type Output = Result<Expr>;

    fn div(self, rhs: Expr) -> Result<Expr> {
        div(self, rhs)
    }
}
