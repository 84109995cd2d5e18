//! Complex number arithmetic, independent of the expression tree.

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use num_traits::{One, Zero};
use tracing::debug;

use crate::error::{CasError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Complex {
    pub real: f64,
    pub imaginary: f64,
}

impl Complex {
    pub fn new(real: f64, imaginary: f64) -> Self {
        Complex { real, imaginary }
    }

    /// `real² + imaginary²`
    pub fn norm_sqr(self) -> f64 {
        self.real * self.real + self.imaginary * self.imaginary
    }

    pub fn conj(self) -> Self {
        Complex::new(self.real, -self.imaginary)
    }
}

impl Add for Complex {
    type Output = Complex;

    fn add(self, rhs: Complex) -> Complex {
        Complex::new(self.real + rhs.real, self.imaginary + rhs.imaginary)
    }
}

impl Sub for Complex {
    type Output = Complex;

    fn sub(self, rhs: Complex) -> Complex {
        Complex::new(self.real - rhs.real, self.imaginary - rhs.imaginary)
    }
}

impl Mul for Complex {
    type Output = Complex;

    fn mul(self, rhs: Complex) -> Complex {
        Complex::new(
            self.real * rhs.real - self.imaginary * rhs.imaginary,
            self.real * rhs.imaginary + self.imaginary * rhs.real,
        )
    }
}

/// Division is guarded: a divisor with zero magnitude is an error rather than NaN.
impl Div for Complex {
    type Output = Result<Complex>;

    fn div(self, rhs: Complex) -> Result<Complex> {
        let denom = rhs.norm_sqr();
        if denom == 0.0 {
            debug!(dividend = %self, "complex division by zero");
            return Err(CasError::DivisionByZero);
        }
        Ok(Complex::new(
            (self.real * rhs.real + self.imaginary * rhs.imaginary) / denom,
            (self.imaginary * rhs.real - self.real * rhs.imaginary) / denom,
        ))
    }
}

impl Zero for Complex {
    fn zero() -> Self {
        Complex::new(0.0, 0.0)
    }

    fn is_zero(&self) -> bool {
        self.real == 0.0 && self.imaginary == 0.0
    }
}

impl One for Complex {
    fn one() -> Self {
        Complex::new(1.0, 0.0)
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}i", self.real, self.imaginary)
    }
}
