use thiserror::Error;

use crate::expr::BinaryOp;

pub type Result<T> = std::result::Result<T, CasError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CasError {
    #[error("integer overflow folding {lhs} {op} {rhs}")]
    Overflow { op: BinaryOp, lhs: i64, rhs: i64 },
    #[error("division by zero")]
    DivisionByZero,
}
