use crate::error::{AlgebraicDegreeOverflow, QuadraticError, MAX_ALGEBRAIC_DEGREE};

/// Common queries on algebraic integers of bounded degree.
///
/// Trace and norm are taken over the quadratic field the value lives in, so a
/// rational integer `n` has trace `2n` and norm `n²` regardless of degree.
pub trait AlgebraicInteger {
    /// Degree of the minimal polynomial over Q, 0 for zero
    fn algebraic_degree(&self) -> u32;

    fn trace(&self) -> i128;

    /// The norm, or `None` if it does not fit in `i128`
    fn checked_norm(&self) -> Option<i128>;

    /// # Panics
    /// If the norm does not fit in `i128`
    fn norm(&self) -> i128 {
        match self.checked_norm() {
            Some(n) => n,
            None => panic!("norm overflows i128"),
        }
    }

    /// Coefficients `[c₀, c₁, c₂]` of the monic minimal polynomial `c₀ + c₁x + c₂x²`.
    ///
    /// Zero is given the polynomial `x`, a nonzero rational `n` gets `x - n`.
    fn min_polynomial_coeffs(&self) -> Result<[i128; 3], QuadraticError> {
        match self.algebraic_degree() {
            0 => Ok([0, 1, 0]),
            1 => Ok([-(self.trace() / 2), 1, 0]),
            2 => {
                let norm = self.checked_norm().ok_or(QuadraticError::Overflow("norm"))?;
                Ok([norm, -self.trace(), 1])
            }
            degree => {
                debug_assert!(degree > MAX_ALGEBRAIC_DEGREE);
                Err(AlgebraicDegreeOverflow::new(degree, Vec::new()).into())
            }
        }
    }
}
