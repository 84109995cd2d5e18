//! Immutable symbolic expression trees with differentiation, literal folding,
//! and substitution, plus a standalone complex number type.

pub mod calculus;
pub mod complex;
pub mod error;
pub mod expr;
pub mod format;
pub mod simplify;

pub use calculus::differentiate;
pub use complex::Complex;
pub use error::{CasError, Result};
pub use expr::{BinaryOp, Expr, add, div, mul, sub};
pub use format::render;
pub use simplify::{
    simplify, simplify_difference, simplify_fully, simplify_product, simplify_quotient,
    simplify_sum, substitute,
};
