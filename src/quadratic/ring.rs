//! Rings of integers of quadratic fields

use super::integer::QuadraticInteger;
use crate::error::{QuadraticError, UnsupportedNumberDomain};
use crate::util::is_squarefree;
use std::fmt;

/// The ring of algebraic integers of the quadratic field `Q(√d)`.
///
/// `d` is squarefree and not 0 or 1. The variant records whether the field is
/// real (`d > 1`) or imaginary (`d < 0`); the payload is always the signed
/// radicand, so `Real(5)` and `Imaginary(-5)` are different rings.
///
/// Use [QuadraticRing::new] to get a validated ring. A value assembled from the
/// variants directly with an inconsistent radicand (e.g. `Real(-2)` or
/// `Imaginary(-4)`) is ill-defined, and constructing integers over it fails with
/// [UnsupportedNumberDomain].
#[derive(Hash, Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuadraticRing {
    Real(i64),
    Imaginary(i64),
}

impl QuadraticRing {
    /// Create the ring of integers of `Q(√d)`.
    pub fn new(d: i64) -> Result<Self, QuadraticError> {
        if d == 0 || d == 1 || !is_squarefree(d) {
            return Err(QuadraticError::InvalidRadicand(d));
        }

        if d > 0 {
            Ok(QuadraticRing::Real(d))
        } else {
            Ok(QuadraticRing::Imaginary(d))
        }
    }

    /// Build a ring from a radicand already known to be squarefree
    #[inline]
    pub(crate) fn new_unchecked(d: i64) -> Self {
        debug_assert!(d != 0 && d != 1);
        if d > 0 {
            QuadraticRing::Real(d)
        } else {
            QuadraticRing::Imaginary(d)
        }
    }

    #[inline]
    pub const fn radicand(&self) -> i64 {
        match self {
            QuadraticRing::Real(d) | QuadraticRing::Imaginary(d) => *d,
        }
    }

    #[inline]
    pub fn abs_radicand(&self) -> u64 {
        self.radicand().unsigned_abs()
    }

    /// `√|d|` as a float. Only meant for numeric approximations.
    #[inline]
    pub fn sqrt_abs_radicand(&self) -> f64 {
        (self.abs_radicand() as f64).sqrt()
    }

    /// Whether `(odd + odd·√d)/2` are integers of the ring, i.e. `d ≡ 1 (mod 4)`
    #[inline]
    pub fn has_half_integers(&self) -> bool {
        self.radicand().rem_euclid(4) == 1
    }

    /// The field discriminant: `d` when `d ≡ 1 (mod 4)`, otherwise `4d`
    #[inline]
    pub fn discriminant(&self) -> i128 {
        let d = i128::from(self.radicand());
        if self.has_half_integers() {
            d
        } else {
            4 * d
        }
    }

    #[inline]
    pub fn is_purely_real(&self) -> bool {
        matches!(self, QuadraticRing::Real(_))
    }

    /// Test if the radicand is squarefree, not 0 or 1, and carries the sign
    /// its variant claims.
    pub fn is_well_defined(&self) -> bool {
        match *self {
            QuadraticRing::Real(d) => d > 1 && is_squarefree(d),
            QuadraticRing::Imaginary(d) => d < 0 && is_squarefree(d),
        }
    }

    pub(crate) fn ensure_well_defined(&self) -> Result<(), UnsupportedNumberDomain> {
        if self.is_well_defined() {
            Ok(())
        } else {
            Err(UnsupportedNumberDomain::new(*self))
        }
    }

    /// The generator `θ` of the ring as a `Z`-module with basis `{1, θ}`.
    ///
    /// `θ = (1 + √d)/2` when the ring has half-integers, `θ = √d` otherwise.
    pub fn generator(&self) -> Result<QuadraticInteger, QuadraticError> {
        if self.has_half_integers() {
            QuadraticInteger::with_denominator(1, 1, *self, 2)
        } else {
            QuadraticInteger::new(0, 1, *self)
        }
    }
}

impl fmt::Display for QuadraticRing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q(√{})", self.radicand())
    }
}
