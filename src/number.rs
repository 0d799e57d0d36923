//! Integers of algebraic degree at most two, with rational integers collapsed
//! out of their quadratic rings.
//!
//! A [QuadraticInteger] whose surd part is zero is really a rational integer
//! that happens to be tagged with some ring. [Number] drops that tag, so a
//! rational value produced in one ring can be combined with integers of any
//! other ring.

use crate::error::{AlgebraicDegreeOverflow, NotDivisible, QuadraticError};
use crate::quadratic::{QuadraticInteger, QuadraticRing};
use crate::traits::AlgebraicInteger;
use core::convert::TryFrom;
use num_rational::Ratio;
use num_traits::Zero;

#[derive(Hash, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Number {
    /// A rational integer, algebraic degree 0 or 1
    Unary(i64),
    /// An integer with nonzero surd part, algebraic degree 2
    Quadratic(QuadraticInteger),
}

impl From<i64> for Number {
    #[inline]
    fn from(n: i64) -> Self {
        Number::Unary(n)
    }
}

impl From<QuadraticInteger> for Number {
    /// Collapse `q` to [Number::Unary] if it is rational
    #[inline]
    fn from(q: QuadraticInteger) -> Self {
        match q.rational_value() {
            Some(n) => Number::Unary(n),
            None => Number::Quadratic(q),
        }
    }
}

fn collapse(result: Result<QuadraticInteger, QuadraticError>) -> Result<Number, QuadraticError> {
    result.map(Number::from)
}

impl Number {
    /// The ring of an irrational value, `None` for rational integers
    #[inline]
    pub fn ring(&self) -> Option<QuadraticRing> {
        match self {
            Number::Unary(_) => None,
            Number::Quadratic(q) => Some(q.ring()),
        }
    }

    /// Represent the value as an integer of `ring`. Rational integers fit in
    /// any ring, an irrational value only in its own.
    pub fn in_ring(&self, ring: QuadraticRing) -> Result<QuadraticInteger, QuadraticError> {
        match self {
            Number::Unary(n) => QuadraticInteger::from_int(*n, ring),
            Number::Quadratic(q) if q.ring() == ring => Ok(*q),
            Number::Quadratic(q) => {
                Err(AlgebraicDegreeOverflow::new(4, vec![*q, ring.generator()?]).into())
            }
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        matches!(self, Number::Unary(0))
    }

    #[inline]
    pub fn is_purely_real(&self) -> bool {
        match self {
            Number::Unary(_) => true,
            Number::Quadratic(q) => q.is_purely_real(),
        }
    }

    #[inline]
    pub fn conj(&self) -> Self {
        match self {
            Number::Unary(_) => *self,
            Number::Quadratic(q) => Number::Quadratic(q.conj()),
        }
    }

    /// Additive inverse, failing only for `Unary(i64::MIN)`
    #[inline]
    pub fn negate(&self) -> Result<Self, QuadraticError> {
        match self {
            Number::Unary(n) => n
                .checked_neg()
                .map(Number::Unary)
                .ok_or(QuadraticError::Overflow("negation")),
            Number::Quadratic(q) => Ok(Number::Quadratic(-*q)),
        }
    }

    pub fn plus(&self, rhs: &Self) -> Result<Self, QuadraticError> {
        match (self, rhs) {
            (Number::Unary(x), Number::Unary(y)) => x
                .checked_add(*y)
                .map(Number::Unary)
                .ok_or(QuadraticError::Overflow("sum")),
            (Number::Unary(x), Number::Quadratic(q)) | (Number::Quadratic(q), Number::Unary(x)) => {
                collapse(q.plus_int(*x))
            }
            (Number::Quadratic(x), Number::Quadratic(y)) => collapse(x.plus(y)),
        }
    }

    pub fn minus(&self, rhs: &Self) -> Result<Self, QuadraticError> {
        match (self, rhs) {
            (Number::Unary(x), Number::Unary(y)) => x
                .checked_sub(*y)
                .map(Number::Unary)
                .ok_or(QuadraticError::Overflow("difference")),
            (Number::Unary(x), Number::Quadratic(q)) => collapse((-*q).plus_int(*x)),
            (Number::Quadratic(q), Number::Unary(y)) => collapse(q.minus_int(*y)),
            (Number::Quadratic(x), Number::Quadratic(y)) => collapse(x.minus(y)),
        }
    }

    pub fn times(&self, rhs: &Self) -> Result<Self, QuadraticError> {
        match (self, rhs) {
            (Number::Unary(x), Number::Unary(y)) => x
                .checked_mul(*y)
                .map(Number::Unary)
                .ok_or(QuadraticError::Overflow("product")),
            (Number::Unary(x), Number::Quadratic(q)) | (Number::Quadratic(q), Number::Unary(x)) => {
                collapse(q.times_int(*x))
            }
            (Number::Quadratic(x), Number::Quadratic(y)) => collapse(x.times(y)),
        }
    }

    pub fn divides(&self, rhs: &Self) -> Result<Self, QuadraticError> {
        match (self, rhs) {
            (_, Number::Unary(0)) => Err(QuadraticError::DivisionByZero),
            (Number::Unary(x), Number::Unary(y)) => {
                if x.checked_rem(*y).ok_or(QuadraticError::Overflow("quotient"))? == 0 {
                    x.checked_div(*y)
                        .map(Number::Unary)
                        .ok_or(QuadraticError::Overflow("quotient"))
                } else {
                    Err(NotDivisible::new(
                        *self,
                        *rhs,
                        Ratio::new(i128::from(*x), i128::from(*y)),
                        Ratio::zero(),
                        None,
                    )
                    .into())
                }
            }
            (Number::Unary(x), Number::Quadratic(q)) => {
                collapse(QuadraticInteger::from_int(*x, q.ring())?.divides(q))
            }
            (Number::Quadratic(q), Number::Unary(y)) => collapse(q.divides_int(*y)),
            (Number::Quadratic(x), Number::Quadratic(y)) => collapse(x.divides(y)),
        }
    }

    /// Remainder after subtracting the nearest multiple of `rhs`, see [QuadraticInteger::modulo]
    pub fn modulo(&self, rhs: &Self) -> Result<Self, QuadraticError> {
        match (self, rhs) {
            (_, Number::Unary(0)) => Err(QuadraticError::DivisionByZero),
            (Number::Unary(x), Number::Unary(y)) => {
                let (x, y) = (i128::from(*x), i128::from(*y));
                let q = Ratio::new(x, y).round().to_integer();
                i64::try_from(x - q * y)
                    .map(Number::Unary)
                    .map_err(|_| QuadraticError::Overflow("remainder"))
            }
            (Number::Unary(x), Number::Quadratic(q)) => {
                collapse(QuadraticInteger::from_int(*x, q.ring())?.modulo(q))
            }
            (Number::Quadratic(q), Number::Unary(y)) => collapse(q.modulo_int(*y)),
            (Number::Quadratic(x), Number::Quadratic(y)) => collapse(x.modulo(y)),
        }
    }
}

impl AlgebraicInteger for Number {
    #[inline]
    fn algebraic_degree(&self) -> u32 {
        match self {
            Number::Unary(0) => 0,
            Number::Unary(_) => 1,
            Number::Quadratic(q) => q.algebraic_degree(),
        }
    }

    /// For a rational integer `n` this is `2n`, its trace in any quadratic field
    #[inline]
    fn trace(&self) -> i128 {
        match self {
            Number::Unary(n) => 2 * i128::from(*n),
            Number::Quadratic(q) => q.trace(),
        }
    }

    #[inline]
    fn checked_norm(&self) -> Option<i128> {
        match self {
            Number::Unary(n) => Some(i128::from(*n) * i128::from(*n)),
            Number::Quadratic(q) => q.checked_norm(),
        }
    }
}
