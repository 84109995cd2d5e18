//! Literal folding and substitution.

mod rules;
mod substitute;

pub use rules::{
    simplify, simplify_difference, simplify_fully, simplify_product, simplify_quotient,
    simplify_sum,
};
pub use substitute::substitute;
