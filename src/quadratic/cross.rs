//! Arithmetic between integers of different quadratic rings.
//!
//! A rational operand (surd part zero) is treated as a plain integer scalar, so
//! the result stays in the ring of the other operand. Two irrational operands
//! from different fields generate a field of degree 4, which is refused with
//! [AlgebraicDegreeOverflow], except for products and quotients of two pure
//! surds: `√d₁·√d₂ = ±g√(d₁d₂/g²)` with `g = gcd(d₁, d₂)` always lands back in
//! a quadratic ring. The sign is negative exactly when both radicands are
//! negative, as `i√|d₁|·i√|d₂| = -√(d₁d₂)`.

use super::integer::{integral_parts, QuadraticInteger};
use super::ring::QuadraticRing;
use crate::error::{AlgebraicDegreeOverflow, NotDivisible, QuadraticError};
use crate::number::Number;
use core::convert::TryFrom;
use num_integer::Integer;
use num_rational::Ratio;
use num_traits::Zero;
use tracing::{debug, instrument, trace};

/// Algebraic degree of the compositum of two distinct quadratic fields
const COMPOSITUM_DEGREE: u32 = 4;

fn degree_overflow(lhs: &QuadraticInteger, rhs: &QuadraticInteger) -> QuadraticError {
    debug!(
        lhs_radicand = lhs.ring().radicand(),
        rhs_radicand = rhs.ring().radicand(),
        "operands generate a field of degree {}",
        COMPOSITUM_DEGREE
    );
    AlgebraicDegreeOverflow::new(COMPOSITUM_DEGREE, vec![*lhs, *rhs]).into()
}

/// The ring of the squarefree kernel `D = d₁d₂/g²` and the factor `c` with `√d₁·√d₂ = c√D`
fn ramified(lhs: &QuadraticRing, rhs: &QuadraticRing) -> Result<(QuadraticRing, i128), QuadraticError> {
    let (d1, d2) = (lhs.radicand(), rhs.radicand());
    let g = i128::from(d1).gcd(&i128::from(d2));
    let factor = if d1 < 0 && d2 < 0 { -g } else { g };
    let kernel = (i128::from(d1) / g) * (i128::from(d2) / g);
    let kernel = i64::try_from(kernel).map_err(|_| QuadraticError::Overflow("radicand"))?;
    trace!(d1, d2, kernel, "pure surds ramify into a new ring");

    // d₁/g and d₂/g are coprime and squarefree, so is their product
    Ok((QuadraticRing::new_unchecked(kernel), factor))
}

// b/denom for a pure surd, exact since a = 0 forces b to be even when denom = 2
#[inline]
fn surd_coefficient(x: &QuadraticInteger) -> i128 {
    i128::from(x.surd_part() / x.denominator())
}

pub(super) fn plus(lhs: &QuadraticInteger, rhs: &QuadraticInteger) -> Result<QuadraticInteger, QuadraticError> {
    if let Some(n) = rhs.rational_value() {
        return lhs.plus_int(n);
    }
    if let Some(n) = lhs.rational_value() {
        return rhs.plus_int(n);
    }
    Err(degree_overflow(lhs, rhs))
}

pub(super) fn minus(lhs: &QuadraticInteger, rhs: &QuadraticInteger) -> Result<QuadraticInteger, QuadraticError> {
    if let Some(n) = rhs.rational_value() {
        return lhs.minus_int(n);
    }
    if let Some(n) = lhs.rational_value() {
        return (-*rhs).plus_int(n);
    }
    Err(degree_overflow(lhs, rhs))
}

#[instrument(skip_all, level = "trace")]
pub(super) fn times(lhs: &QuadraticInteger, rhs: &QuadraticInteger) -> Result<QuadraticInteger, QuadraticError> {
    if let Some(n) = rhs.rational_value() {
        return lhs.times_int(n);
    }
    if let Some(n) = lhs.rational_value() {
        return rhs.times_int(n);
    }
    if !(lhs.is_pure() && rhs.is_pure()) {
        return Err(degree_overflow(lhs, rhs));
    }

    let (ring, factor) = ramified(&lhs.ring(), &rhs.ring())?;
    let b = surd_coefficient(lhs)
        .checked_mul(surd_coefficient(rhs))
        .and_then(|b| b.checked_mul(factor))
        .ok_or(QuadraticError::Overflow("product"))?;
    QuadraticInteger::from_wide(0, b, 1, ring)
}

#[instrument(skip_all, level = "trace")]
pub(super) fn divides(lhs: &QuadraticInteger, rhs: &QuadraticInteger) -> Result<QuadraticInteger, QuadraticError> {
    if let Some(n) = rhs.rational_value() {
        return lhs.divides_int(n);
    }
    if let Some(n) = lhs.rational_value() {
        return QuadraticInteger::from_int(n, rhs.ring())?.divides(rhs);
    }
    if !(lhs.is_pure() && rhs.is_pure()) {
        return Err(degree_overflow(lhs, rhs));
    }

    // b₁√d₁ / (b₂√d₂) = b₁√d₁·√d₂ / (b₂d₂) = b₁c√D / (b₂d₂)
    let (ring, factor) = ramified(&lhs.ring(), &rhs.ring())?;
    let numer = surd_coefficient(lhs)
        .checked_mul(factor)
        .ok_or(QuadraticError::Overflow("quotient"))?;
    let denom = surd_coefficient(rhs)
        .checked_mul(i128::from(rhs.ring().radicand()))
        .ok_or(QuadraticError::Overflow("quotient"))?;

    let regular = Ratio::zero();
    let surd = Ratio::new(numer, denom);
    match integral_parts(&regular, &surd, &ring) {
        Some((a, b, denom)) => QuadraticInteger::from_wide(a, b, denom, ring),
        None => Err(NotDivisible::new(
            Number::from(*lhs),
            Number::from(*rhs),
            regular,
            surd,
            Some(ring),
        )
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(d: i64) -> QuadraticRing {
        QuadraticRing::new(d).unwrap()
    }

    fn int(a: i64, b: i64, d: i64) -> QuadraticInteger {
        QuadraticInteger::new(a, b, ring(d)).unwrap()
    }

    #[test]
    fn ramification_test() {
        // √-2 · √5 = √-10
        assert_eq!(int(0, 1, -2).times(&int(0, 1, 5)), Ok(int(0, 1, -10)));
        // √-2 · √2 = √-4 = 2i
        assert_eq!(int(0, 1, -2).times(&int(0, 1, 2)), Ok(int(0, 2, -1)));
        // 3√6 · 2√10 = 6·2·√15
        assert_eq!(int(0, 3, 6).times(&int(0, 2, 10)), Ok(int(0, 12, 15)));
        // -√-3 · √-7 = -(i√3)(i√7) = √21
        assert_eq!(int(0, -1, -3).times(&int(0, 1, -7)), Ok(int(0, 1, 21)));
        // √-6 · √-15 = -3√10
        assert_eq!(int(0, 1, -6).times(&int(0, 1, -15)), Ok(int(0, -3, 10)));

        let unreduced = QuadraticInteger::with_denominator(0, 2, ring(5), 2).unwrap();
        assert_eq!(unreduced.times(&int(0, 1, 3)), Ok(int(0, 1, 15)));
    }

    #[test]
    fn scalar_test() {
        let x = int(2, 3, -1);
        let seven = int(7, 0, -7);
        assert_eq!(x.plus(&seven), Ok(int(9, 3, -1)));
        assert_eq!(seven.plus(&x), Ok(int(9, 3, -1)));
        assert_eq!(x.minus(&seven), Ok(int(-5, 3, -1)));
        assert_eq!(seven.minus(&x), Ok(int(5, -3, -1)));
        assert_eq!(x.times(&seven), Ok(int(14, 21, -1)));
        assert_eq!(seven.times(&x), Ok(int(14, 21, -1)));
        assert_eq!(x.times_int(7).unwrap().divides(&seven), Ok(x));
        assert_eq!(int(13, 0, 2).divides(&x), Ok(x.conj()));

        // both rational: the result stays in the ring of the left operand
        assert_eq!(int(3, 0, 2).plus(&int(4, 0, 3)), Ok(int(7, 0, 2)));
        assert_eq!(int(0, 0, 2).times(&int(4, 0, 3)), Ok(int(0, 0, 2)));
    }

    #[test]
    fn overflow_test() {
        let x = int(1, 1, -1);
        let y = int(0, 1, -7);
        match x.plus(&y) {
            Err(QuadraticError::DegreeOverflow(e)) => {
                assert_eq!(e.required_degree(), 4);
                assert_eq!(e.operands(), &[x, y]);
            }
            other => panic!("unexpected result {:?}", other),
        }
        assert!(matches!(x.minus(&y), Err(QuadraticError::DegreeOverflow(_))));
        assert!(matches!(x.times(&y), Err(QuadraticError::DegreeOverflow(_))));
        assert!(matches!(x.divides(&y), Err(QuadraticError::DegreeOverflow(_))));
        // pure surds still cannot be added
        assert!(matches!(
            int(0, 1, 2).plus(&int(0, 1, 3)),
            Err(QuadraticError::DegreeOverflow(_))
        ));
    }

    #[test]
    fn pure_division_test() {
        // √-10 / √5 = √-2
        assert_eq!(int(0, 1, -10).divides(&int(0, 1, 5)), Ok(int(0, 1, -2)));
        // 2i / √-2 = √2
        assert_eq!(int(0, 2, -1).divides(&int(0, 1, -2)), Ok(int(0, 1, 2)));

        // √2 / √3 = √6 / 3
        match int(0, 1, 2).divides(&int(0, 1, 3)) {
            Err(QuadraticError::NotDivisible(e)) => {
                assert_eq!(e.ring(), Some(ring(6)));
                assert!(e.regular_part().is_zero());
                assert_eq!(e.surd_part(), &Ratio::new(1, 3));
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn ramified_ring_test() {
        assert_eq!(ramified(&ring(6), &ring(10)), Ok((ring(15), 2)));
        assert_eq!(ramified(&ring(-1), &ring(-5)), Ok((ring(5), -1)));
        assert_eq!(ramified(&ring(-6), &ring(-15)), Ok((ring(10), -3)));
        assert_eq!(ramified(&ring(2), &ring(-2)), Ok((ring(-1), 2)));
    }
}
