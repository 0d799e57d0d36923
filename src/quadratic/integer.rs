//! Algebraic integers of quadratic fields and their same-ring arithmetic

use super::cross;
use super::ring::QuadraticRing;
use crate::error::{NotDivisible, QuadraticError};
use crate::number::Number;
use crate::traits::AlgebraicInteger;
use core::convert::TryFrom;
use core::ops::Neg;
use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::Ratio;
use tracing::instrument;

/// An algebraic integer `(a + b√d) / denom` of a quadratic ring.
///
/// The denominator is either 1 or 2. It can only be 2 in rings with
/// half-integers, and then `a` and `b` must share the same parity.
///
/// Components lie in `-i64::MAX..=i64::MAX`, so negation and conjugation
/// never overflow. `i64::MIN` is rejected on construction and any result
/// reaching it fails with [QuadraticError::Overflow].
///
/// The denominator is part of the declared representation: a value created
/// as `(4 + 2√5)/2` is kept as is and is not equal to `2 + √5`. Results of
/// arithmetic are always returned in lowest terms.
#[derive(Hash, Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuadraticInteger {
    a: i64,
    b: i64, // zero if the integer is rational
    ring: QuadraticRing,
    denom: i64,
}

#[inline]
fn wide(x: i64) -> i128 {
    i128::from(x)
}

fn narrow(x: i128, context: &'static str) -> Result<i64, QuadraticError> {
    match i64::try_from(x) {
        Ok(v) if v != i64::MIN => Ok(v),
        _ => Err(QuadraticError::Overflow(context)),
    }
}

// i128::MIN has no negation, which Ratio needs to normalize signs
#[inline]
fn symmetric(x: Option<i128>) -> Option<i128> {
    x.filter(|v| *v != i128::MIN)
}

// Components (a, b, denom) of regular + surd·√d if it is an algebraic integer
pub(crate) fn integral_parts(
    regular: &Ratio<i128>,
    surd: &Ratio<i128>,
    ring: &QuadraticRing,
) -> Option<(i128, i128, i128)> {
    if regular.is_integer() && surd.is_integer() {
        return Some((regular.to_integer(), surd.to_integer(), 1));
    }

    let two = 2i128;
    if ring.has_half_integers() && regular.denom() == &two && surd.denom() == &two {
        return Some((*regular.numer(), *surd.numer(), 2));
    }
    None
}

impl QuadraticInteger {
    #[inline]
    pub(crate) const fn new_raw(a: i64, b: i64, ring: QuadraticRing, denom: i64) -> Self {
        QuadraticInteger { a, b, ring, denom }
    }

    /// Create the integer `a + b√d` of the given ring.
    #[inline]
    pub fn new(a: i64, b: i64, ring: QuadraticRing) -> Result<Self, QuadraticError> {
        Self::with_denominator(a, b, ring, 1)
    }

    /// Create the integer `(a + b√d) / denom`.
    ///
    /// `denom` must be 1, or 2 in a ring with half-integers where `a` and `b`
    /// have the same parity. The given representation is stored unreduced.
    pub fn with_denominator(
        a: i64,
        b: i64,
        ring: QuadraticRing,
        denom: i64,
    ) -> Result<Self, QuadraticError> {
        ring.ensure_well_defined()?;
        if a == i64::MIN || b == i64::MIN {
            return Err(QuadraticError::Overflow("component"));
        }

        let valid = match denom {
            1 => true,
            2 => ring.has_half_integers() && a.is_even() == b.is_even(),
            _ => false,
        };
        if !valid {
            return Err(QuadraticError::InvalidDenominator {
                a,
                b,
                denominator: denom,
                radicand: ring.radicand(),
            });
        }

        Ok(QuadraticInteger::new_raw(a, b, ring, denom))
    }

    /// Embed the rational integer `n` in the ring
    #[inline]
    pub fn from_int(n: i64, ring: QuadraticRing) -> Result<Self, QuadraticError> {
        Self::new(n, 0, ring)
    }

    #[inline]
    pub fn zero(ring: QuadraticRing) -> Result<Self, QuadraticError> {
        Self::from_int(0, ring)
    }

    #[inline]
    pub fn one(ring: QuadraticRing) -> Result<Self, QuadraticError> {
        Self::from_int(1, ring)
    }

    /// Build a result in lowest terms from wide components over `denom`.
    pub(crate) fn from_wide(
        a: i128,
        b: i128,
        denom: i128,
        ring: QuadraticRing,
    ) -> Result<Self, QuadraticError> {
        let regular = Ratio::new(a, denom);
        let surd = Ratio::new(b, denom);
        let (a, b, denom) = integral_parts(&regular, &surd, &ring)
            .ok_or(QuadraticError::Internal("result left the ring of integers"))?;
        Ok(QuadraticInteger::new_raw(
            narrow(a, "regular part")?,
            narrow(b, "surd part")?,
            ring,
            denom as i64,
        ))
    }

    /// Get the components `(a, b, denom)`
    #[inline]
    pub const fn parts(&self) -> (i64, i64, i64) {
        (self.a, self.b, self.denom)
    }

    #[inline]
    pub const fn reg_part(&self) -> i64 {
        self.a
    }

    #[inline]
    pub const fn surd_part(&self) -> i64 {
        self.b
    }

    #[inline]
    pub const fn ring(&self) -> QuadraticRing {
        self.ring
    }

    #[inline]
    pub const fn denominator(&self) -> i64 {
        self.denom
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.a == 0 && self.b == 0
    }

    /// Determine if the integer is rational (algebraic degree at most 1)
    #[inline]
    pub fn is_rational(&self) -> bool {
        self.b == 0
    }

    /// Determine if the integer has no regular part (i.e. a = 0, b != 0)
    #[inline]
    pub fn is_pure(&self) -> bool {
        self.a == 0 && self.b != 0
    }

    /// Whether the integer is invertible in its ring, i.e. its norm is ±1
    #[inline]
    pub fn is_unit(&self) -> bool {
        matches!(self.checked_norm(), Some(1) | Some(-1))
    }

    /// The value as a rational integer if the surd part vanishes
    #[inline]
    pub(crate) fn rational_value(&self) -> Option<i64> {
        if self.b == 0 {
            // a is even whenever denom is 2 and b is 0
            Some(self.a / self.denom)
        } else {
            None
        }
    }

    pub fn algebraic_degree(&self) -> u32 {
        if self.b != 0 {
            2
        } else if self.a != 0 {
            1
        } else {
            0
        }
    }

    #[inline]
    pub fn is_purely_real(&self) -> bool {
        self.b == 0 || self.ring.is_purely_real()
    }

    /// Return the conjugate `(a - b√d) / denom`
    #[inline]
    pub fn conj(&self) -> Self {
        QuadraticInteger::new_raw(self.a, -self.b, self.ring, self.denom)
    }

    /// The trace `2a / denom`, i.e. the sum of the integer and its conjugate
    #[inline]
    pub fn trace(&self) -> i128 {
        if self.denom == 2 {
            wide(self.a)
        } else {
            2 * wide(self.a)
        }
    }

    #[inline]
    pub fn full_trace(&self) -> BigInt {
        BigInt::from(self.trace())
    }

    /// The norm `(a² - b²d) / denom²`, or `None` if it does not fit in `i128`
    pub fn checked_norm(&self) -> Option<i128> {
        let aa = wide(self.a) * wide(self.a);
        let bbd = (wide(self.b) * wide(self.b)).checked_mul(wide(self.ring.radicand()))?;
        let numer = aa.checked_sub(bbd)?;
        Some(numer / (wide(self.denom) * wide(self.denom)))
    }

    /// The norm `(a² - b²d) / denom²`, i.e. the product of the integer and its conjugate
    ///
    /// # Panics
    /// If the norm does not fit in `i128`. Use [QuadraticInteger::full_norm]
    /// for components of arbitrary size.
    #[inline]
    pub fn norm(&self) -> i128 {
        match self.checked_norm() {
            Some(n) => n,
            None => panic!("norm of {:?} overflows i128, use full_norm instead", self),
        }
    }

    /// The norm computed with arbitrary precision
    pub fn full_norm(&self) -> BigInt {
        let a = BigInt::from(self.a);
        let b = BigInt::from(self.b);
        let denom = BigInt::from(self.denom);
        (&a * &a - &b * &b * BigInt::from(self.ring.radicand())) / (&denom * &denom)
    }

    // Abstracts (a1 + b1√d)/e1 ± (a2 + b2√d)/e2 over the common denominator
    fn add_sub(&self, rhs: &Self, negate: bool) -> Result<Self, QuadraticError> {
        let denom = self.denom.max(rhs.denom);
        let lhs_r = wide(denom / self.denom);
        let rhs_r = wide(denom / rhs.denom);
        let (ra, rb) = if negate {
            (-wide(rhs.a), -wide(rhs.b))
        } else {
            (wide(rhs.a), wide(rhs.b))
        };

        QuadraticInteger::from_wide(
            wide(self.a) * lhs_r + ra * rhs_r,
            wide(self.b) * lhs_r + rb * rhs_r,
            wide(denom),
            self.ring,
        )
    }

    /// Add two integers of the same ring. If the rings differ, one operand
    /// has to be rational, otherwise the sum has algebraic degree 4.
    ///
    /// A rational operand is added as a scalar and the result lives in the
    /// ring of the other operand. When both operands are rational but tagged
    /// with different rings, the result keeps the ring of `self`; use
    /// [crate::Number] to drop the ring of rational values.
    pub fn plus(&self, rhs: &Self) -> Result<Self, QuadraticError> {
        if self.ring != rhs.ring {
            return cross::plus(self, rhs);
        }
        self.add_sub(rhs, false)
    }

    /// Subtract two integers, following the same ring rules as [QuadraticInteger::plus]
    pub fn minus(&self, rhs: &Self) -> Result<Self, QuadraticError> {
        if self.ring != rhs.ring {
            return cross::minus(self, rhs);
        }
        self.add_sub(rhs, true)
    }

    pub fn plus_int(&self, rhs: i64) -> Result<Self, QuadraticError> {
        let a = wide(self.a) + wide(rhs) * wide(self.denom);
        QuadraticInteger::from_wide(a, wide(self.b), wide(self.denom), self.ring)
    }

    pub fn minus_int(&self, rhs: i64) -> Result<Self, QuadraticError> {
        let a = wide(self.a) - wide(rhs) * wide(self.denom);
        QuadraticInteger::from_wide(a, wide(self.b), wide(self.denom), self.ring)
    }

    /// Multiply two integers. Across different rings the product is only
    /// representable when one factor is rational or both are pure surds.
    ///
    /// As with [QuadraticInteger::plus], a product of two rational operands
    /// from different rings keeps the ring of `self`.
    pub fn times(&self, rhs: &Self) -> Result<Self, QuadraticError> {
        if self.ring != rhs.ring {
            return cross::times(self, rhs);
        }

        let d = wide(self.ring.radicand());
        let (a1, b1, a2, b2) = (wide(self.a), wide(self.b), wide(rhs.a), wide(rhs.b));
        let bbd = (b1 * b2)
            .checked_mul(d)
            .ok_or(QuadraticError::Overflow("product"))?;
        let regular = (a1 * a2)
            .checked_add(bbd)
            .ok_or(QuadraticError::Overflow("product"))?;
        let surd = (a1 * b2)
            .checked_add(a2 * b1)
            .ok_or(QuadraticError::Overflow("product"))?;

        QuadraticInteger::from_wide(regular, surd, wide(self.denom * rhs.denom), self.ring)
    }

    pub fn times_int(&self, rhs: i64) -> Result<Self, QuadraticError> {
        QuadraticInteger::from_wide(
            wide(self.a) * wide(rhs),
            wide(self.b) * wide(rhs),
            wide(self.denom),
            self.ring,
        )
    }

    /// Exact quotient `self / rhs`, rationalized through the conjugate of the divisor.
    ///
    /// Fails with [QuadraticError::NotDivisible] carrying the fractional
    /// quotient when it is not an algebraic integer, and with
    /// [QuadraticError::DivisionByZero] when `rhs` is zero.
    #[instrument(skip_all, level = "trace")]
    pub fn divides(&self, rhs: &Self) -> Result<Self, QuadraticError> {
        if rhs.is_zero() {
            return Err(QuadraticError::DivisionByZero);
        }
        if self.ring != rhs.ring {
            return cross::divides(self, rhs);
        }

        let (regular, surd) = self.exact_quotient(rhs)?;
        self.quotient_or_remainder(rhs, regular, surd)
    }

    // x/y = x·conj(y) / N(y), as fractions over the basis {1, √d}
    fn exact_quotient(&self, rhs: &Self) -> Result<(Ratio<i128>, Ratio<i128>), QuadraticError> {
        let overflow = || QuadraticError::Overflow("quotient");
        let d = wide(self.ring.radicand());
        let (a1, b1, a2, b2) = (wide(self.a), wide(self.b), wide(rhs.a), wide(rhs.b));

        // N(y)·e2², nonzero since d is not a square
        let norm = (b2 * b2)
            .checked_mul(d)
            .and_then(|bbd| (a2 * a2).checked_sub(bbd))
            .ok_or_else(overflow)?;
        let regular = (b1 * b2)
            .checked_mul(d)
            .and_then(|bbd| (a1 * a2).checked_sub(bbd))
            .and_then(|n| n.checked_mul(wide(rhs.denom)));
        let surd = (a2 * b1)
            .checked_sub(a1 * b2)
            .and_then(|n| n.checked_mul(wide(rhs.denom)));
        let denom = norm.checked_mul(wide(self.denom));

        let regular = symmetric(regular).ok_or_else(overflow)?;
        let surd = symmetric(surd).ok_or_else(overflow)?;
        let denom = symmetric(denom).ok_or_else(overflow)?;

        Ok((Ratio::new(regular, denom), Ratio::new(surd, denom)))
    }

    fn quotient_or_remainder(
        &self,
        divisor: &Self,
        regular: Ratio<i128>,
        surd: Ratio<i128>,
    ) -> Result<Self, QuadraticError> {
        match integral_parts(&regular, &surd, &self.ring) {
            Some((a, b, denom)) => QuadraticInteger::from_wide(a, b, denom, self.ring),
            None => Err(NotDivisible::new(
                Number::from(*self),
                Number::from(*divisor),
                regular,
                surd,
                Some(self.ring),
            )
            .into()),
        }
    }

    /// Exact quotient by a rational integer
    pub fn divides_int(&self, rhs: i64) -> Result<Self, QuadraticError> {
        if rhs == 0 {
            return Err(QuadraticError::DivisionByZero);
        }

        let denom = wide(self.denom) * wide(rhs);
        let regular = Ratio::new(wide(self.a), denom);
        let surd = Ratio::new(wide(self.b), denom);
        match integral_parts(&regular, &surd, &self.ring) {
            Some((a, b, denom)) => QuadraticInteger::from_wide(a, b, denom, self.ring),
            None => Err(NotDivisible::new(
                Number::from(*self),
                Number::Unary(rhs),
                regular,
                surd,
                Some(self.ring),
            )
            .into()),
        }
    }

    /// Remainder `self - rhs·q` where `q` is the algebraic integer nearest to
    /// the exact quotient `self / rhs`.
    ///
    /// In norm-Euclidean rings (e.g. `d = -1, -2, -3, 2, 3, 5`) the remainder
    /// has a smaller absolute norm than `rhs`.
    #[instrument(skip_all, level = "trace")]
    pub fn modulo(&self, rhs: &Self) -> Result<Self, QuadraticError> {
        match self.divides(rhs) {
            Ok(_) => QuadraticInteger::zero(self.ring),
            Err(QuadraticError::NotDivisible(err)) => {
                let ring = err.ring().unwrap_or(self.ring);
                let (a, b, denom) = err.nearest()?;
                let quotient = QuadraticInteger::from_wide(a, b, denom, ring)?;
                self.minus(&rhs.times(&quotient)?)
            }
            Err(err) => Err(err),
        }
    }

    /// Remainder modulo a rational integer, see [QuadraticInteger::modulo]
    pub fn modulo_int(&self, rhs: i64) -> Result<Self, QuadraticError> {
        match self.divides_int(rhs) {
            Ok(_) => QuadraticInteger::zero(self.ring),
            Err(QuadraticError::NotDivisible(err)) => {
                let (a, b, denom) = err.nearest()?;
                let quotient = QuadraticInteger::from_wide(a, b, denom, self.ring)?;
                self.minus(&quotient.times_int(rhs)?)
            }
            Err(err) => Err(err),
        }
    }
}

impl Neg for QuadraticInteger {
    type Output = QuadraticInteger;
    #[inline]
    fn neg(self) -> QuadraticInteger {
        QuadraticInteger::new_raw(-self.a, -self.b, self.ring, self.denom)
    }
}

impl AlgebraicInteger for QuadraticInteger {
    #[inline]
    fn algebraic_degree(&self) -> u32 {
        QuadraticInteger::algebraic_degree(self)
    }

    #[inline]
    fn trace(&self) -> i128 {
        QuadraticInteger::trace(self)
    }

    #[inline]
    fn checked_norm(&self) -> Option<i128> {
        QuadraticInteger::checked_norm(self)
    }

    #[inline]
    fn norm(&self) -> i128 {
        QuadraticInteger::norm(self)
    }
}
