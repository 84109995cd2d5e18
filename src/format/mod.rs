//! Text rendering for expressions.

pub mod expr;

pub use expr::render;
