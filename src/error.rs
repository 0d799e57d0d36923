//! Failures raised by quadratic integer operations.
//!
//! The payload carrying variants ([AlgebraicDegreeOverflow], [NotDivisible] and
//! [UnsupportedNumberDomain]) are expected outcomes that callers may inspect,
//! e.g. a failed division still exposes its exact fractional quotient.

use crate::number::Number;
use crate::quadratic::{QuadraticInteger, QuadraticRing};
use core::convert::TryFrom;
use num_bigint::BigInt;
use num_rational::{BigRational, Ratio};
use num_traits::{One, Signed, ToPrimitive, Zero};
use thiserror::Error;

/// The highest algebraic degree a [QuadraticInteger] can represent
pub const MAX_ALGEBRAIC_DEGREE: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuadraticError {
    /// The radicand is zero, one, or has a repeated prime factor
    #[error("{0} is not a valid radicand for a quadratic field")]
    InvalidRadicand(i64),

    #[error("({a} + {b}√{radicand})/{denominator} is not an algebraic integer of the ring")]
    InvalidDenominator {
        a: i64,
        b: i64,
        denominator: i64,
        radicand: i64,
    },

    #[error(transparent)]
    DegreeOverflow(#[from] AlgebraicDegreeOverflow),

    #[error(transparent)]
    NotDivisible(#[from] NotDivisible),

    #[error(transparent)]
    UnsupportedDomain(#[from] UnsupportedNumberDomain),

    #[error("division by zero")]
    DivisionByZero,

    /// The exact result does not fit in the component type
    #[error("arithmetic overflow in {0}")]
    Overflow(&'static str),

    #[error("internal arithmetic invariant violated: {0}")]
    Internal(&'static str),
}

/// The result of an operation needs an algebraic degree above [MAX_ALGEBRAIC_DEGREE].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("result requires algebraic degree {required}, at most {} is supported", MAX_ALGEBRAIC_DEGREE)]
pub struct AlgebraicDegreeOverflow {
    required: u32,
    operands: Vec<QuadraticInteger>,
}

impl AlgebraicDegreeOverflow {
    pub(crate) fn new(required: u32, operands: Vec<QuadraticInteger>) -> Self {
        AlgebraicDegreeOverflow { required, operands }
    }

    /// The minimal algebraic degree the result actually needs
    #[inline]
    pub fn required_degree(&self) -> u32 {
        self.required
    }

    #[inline]
    pub fn max_degree(&self) -> u32 {
        MAX_ALGEBRAIC_DEGREE
    }

    /// Operands of the refused operation, empty when the overflow was not
    /// caused by a binary operation
    #[inline]
    pub fn operands(&self) -> &[QuadraticInteger] {
        &self.operands
    }
}

/// A division whose quotient is not an algebraic integer.
///
/// The exact quotient is `regular + surd·√d` where `d` is the radicand of
/// [NotDivisible::ring]. The ring is `None` when both operands are rational
/// integers, in which case the surd part is zero.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{dividend:?} is not divisible by {divisor:?}, the exact quotient is {regular} + ({surd})√{}", radicand_of(.ring))]
pub struct NotDivisible {
    dividend: Number,
    divisor: Number,
    regular: Ratio<i128>,
    surd: Ratio<i128>,
    ring: Option<QuadraticRing>,
}

impl NotDivisible {
    pub(crate) fn new(
        dividend: Number,
        divisor: Number,
        regular: Ratio<i128>,
        surd: Ratio<i128>,
        ring: Option<QuadraticRing>,
    ) -> Self {
        NotDivisible {
            dividend,
            divisor,
            regular,
            surd,
            ring,
        }
    }

    #[inline]
    pub fn dividend(&self) -> &Number {
        &self.dividend
    }

    #[inline]
    pub fn divisor(&self) -> &Number {
        &self.divisor
    }

    /// Rational coefficient of `1` in the exact quotient
    #[inline]
    pub fn regular_part(&self) -> &Ratio<i128> {
        &self.regular
    }

    /// Rational coefficient of `√d` in the exact quotient
    #[inline]
    pub fn surd_part(&self) -> &Ratio<i128> {
        &self.surd
    }

    #[inline]
    pub fn ring(&self) -> Option<QuadraticRing> {
        self.ring
    }

    /// Truncate both coefficients of the exact quotient towards zero
    pub fn round_towards_zero(&self) -> Result<Number, QuadraticError> {
        let a = self.regular.trunc().to_integer();
        let b = self.surd.trunc().to_integer();
        self.build(a, b, 1)
    }

    /// The algebraic integer nearest to the exact quotient.
    ///
    /// Both coefficients are rounded to the nearest integer; in rings with
    /// half-integers the nearest point `(odd + odd·√d)/2` is considered too
    /// and whichever candidate leaves the smaller absolute norm wins.
    pub fn round(&self) -> Result<Number, QuadraticError> {
        let (a, b, denom) = self.nearest()?;
        self.build(a, b, denom)
    }

    /// Components `(a, b, denominator)` of the nearest algebraic integer.
    ///
    /// The candidates are compared with arbitrary precision, since the squared
    /// distances carry the square of the divisor norm in their denominators.
    pub(crate) fn nearest(&self) -> Result<(i128, i128, i128), QuadraticError> {
        let regular = big_ratio(&self.regular);
        let surd = big_ratio(&self.surd);
        let whole = (
            regular.round().to_integer(),
            surd.round().to_integer(),
            BigInt::one(),
        );

        let best = match self.ring {
            Some(ring) if ring.has_half_integers() => {
                let two = BigRational::from_integer(BigInt::from(2));
                let half = (
                    nearest_odd(&(&regular * &two)),
                    nearest_odd(&(&surd * &two)),
                    BigInt::from(2),
                );

                let d = BigRational::from_integer(BigInt::from(ring.radicand()));
                let distance = |(a, b, denom): &(BigInt, BigInt, BigInt)| {
                    let da = &regular - BigRational::new(a.clone(), denom.clone());
                    let db = &surd - BigRational::new(b.clone(), denom.clone());
                    (&da * &da - &db * &db * &d).abs()
                };
                if distance(&half) < distance(&whole) {
                    half
                } else {
                    whole
                }
            }
            _ => whole,
        };

        let narrow = |x: BigInt| x.to_i128().ok_or(QuadraticError::Overflow("rounding"));
        Ok((narrow(best.0)?, narrow(best.1)?, narrow(best.2)?))
    }

    fn build(&self, a: i128, b: i128, denom: i128) -> Result<Number, QuadraticError> {
        match self.ring {
            Some(ring) => Ok(Number::from(QuadraticInteger::from_wide(a, b, denom, ring)?)),
            None => {
                debug_assert!(b.is_zero());
                let a = i64::try_from(a).map_err(|_| QuadraticError::Overflow("rounding"))?;
                Ok(Number::Unary(a))
            }
        }
    }
}

fn radicand_of(ring: &Option<QuadraticRing>) -> i64 {
    ring.map_or(0, |r| r.radicand())
}

#[inline]
fn big_ratio(x: &Ratio<i128>) -> BigRational {
    BigRational::new_raw(BigInt::from(*x.numer()), BigInt::from(*x.denom()))
}

// the odd integer closest to x
fn nearest_odd(x: &BigRational) -> BigInt {
    let shifted = (x - BigRational::one()) / BigRational::from_integer(BigInt::from(2));
    shifted.round().to_integer() * 2 + 1
}

/// An operation was attempted on a ring value that does not describe a valid
/// quadratic field, such as `QuadraticRing::Real(-5)` or `QuadraticRing::Imaginary(-4)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{ring:?} is not a supported number domain")]
pub struct UnsupportedNumberDomain {
    ring: QuadraticRing,
}

impl UnsupportedNumberDomain {
    pub(crate) fn new(ring: QuadraticRing) -> Self {
        UnsupportedNumberDomain { ring }
    }

    #[inline]
    pub fn ring(&self) -> QuadraticRing {
        self.ring
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearest_odd_test() {
        let odd = |n: i128, d: i128| nearest_odd(&big_ratio(&Ratio::new(n, d)));
        assert_eq!(odd(1, 3), BigInt::from(1));
        assert_eq!(odd(2, 1), BigInt::from(3));
        assert_eq!(odd(-5, 2), BigInt::from(-3));
        assert_eq!(odd(-7, 1), BigInt::from(-7));
        assert_eq!(odd(9, 10), BigInt::from(1));
    }

    #[test]
    fn rounding_test() {
        let gaussian = QuadraticRing::new(-1).unwrap();
        let dividend = QuadraticInteger::new(7, 2, gaussian).unwrap();
        let divisor = QuadraticInteger::new(3, 0, gaussian).unwrap();
        let err = NotDivisible::new(
            dividend.into(),
            divisor.into(),
            Ratio::new(7, 3),
            Ratio::new(2, 3),
            Some(gaussian),
        );
        assert_eq!(
            err.round(),
            Ok(Number::from(QuadraticInteger::new(2, 1, gaussian).unwrap()))
        );
        assert_eq!(err.round_towards_zero(), Ok(Number::Unary(2)));

        // (1 + √-3)/2 is closer to 3/4 + √-3/2 than any point of Z[√-3]
        let eisenstein = QuadraticRing::new(-3).unwrap();
        let err = NotDivisible::new(
            Number::Unary(0),
            Number::Unary(1),
            Ratio::new(3, 4),
            Ratio::new(1, 2),
            Some(eisenstein),
        );
        assert_eq!(err.nearest(), Ok((1, 1, 2)));

        // same point with denominators whose squares do not fit in i128
        let err = NotDivisible::new(
            Number::Unary(0),
            Number::Unary(1),
            Ratio::new((3 << 99) + 1, 1 << 101),
            Ratio::new((1 << 100) + 1, 1 << 101),
            Some(eisenstein),
        );
        assert_eq!(err.nearest(), Ok((1, 1, 2)));
        assert_eq!(
            err.round(),
            Ok(Number::from(
                QuadraticInteger::with_denominator(1, 1, eisenstein, 2).unwrap()
            ))
        );

        let err = NotDivisible::new(
            Number::Unary(7),
            Number::Unary(2),
            Ratio::new(7, 2),
            Ratio::zero(),
            None,
        );
        assert_eq!(err.round(), Ok(Number::Unary(4)));
        assert_eq!(err.round_towards_zero(), Ok(Number::Unary(3)));
    }

    #[test]
    fn message_test() {
        let overflow = AlgebraicDegreeOverflow::new(4, Vec::new());
        assert_eq!(
            overflow.to_string(),
            "result requires algebraic degree 4, at most 2 is supported"
        );
        assert_eq!(overflow.max_degree(), 2);
        assert_eq!(
            QuadraticError::InvalidRadicand(4).to_string(),
            "4 is not a valid radicand for a quadratic field"
        );
    }
}
