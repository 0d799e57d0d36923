//! Floating point views of quadratic integers.
//!
//! Everything here is an approximation for display and plotting purposes,
//! none of it takes part in the exact arithmetic.

use super::integer::QuadraticInteger;
use super::ring::QuadraticRing;
use num_traits::ToPrimitive;

impl QuadraticInteger {
    #[inline]
    fn scaled(&self, x: f64) -> f64 {
        x / self.denominator() as f64
    }

    /// Approximate real part
    pub fn real_part_numeric(&self) -> f64 {
        let (a, b, _) = self.parts();
        match self.ring() {
            QuadraticRing::Real(_) => {
                self.scaled(a as f64 + b as f64 * self.ring().sqrt_abs_radicand())
            }
            QuadraticRing::Imaginary(_) => self.scaled(a as f64),
        }
    }

    /// Approximate imaginary part, always zero in a real ring
    pub fn imag_part_numeric(&self) -> f64 {
        match self.ring() {
            QuadraticRing::Real(_) => 0.0,
            QuadraticRing::Imaginary(_) => {
                self.scaled(self.surd_part() as f64 * self.ring().sqrt_abs_radicand())
            }
        }
    }

    /// Approximate absolute value in the embedding given by the principal square root
    pub fn abs_numeric(&self) -> f64 {
        match self.ring() {
            QuadraticRing::Real(_) => self.real_part_numeric().abs(),
            QuadraticRing::Imaginary(_) => self.real_part_numeric().hypot(self.imag_part_numeric()),
        }
    }

    /// Argument in `(-π, π]`; `0` or `π` for real values
    pub fn angle(&self) -> f64 {
        match self.ring() {
            QuadraticRing::Real(_) => {
                if self.real_part_numeric() < 0.0 {
                    core::f64::consts::PI
                } else {
                    0.0
                }
            }
            QuadraticRing::Imaginary(_) => self.imag_part_numeric().atan2(self.real_part_numeric()),
        }
    }
}

impl ToPrimitive for QuadraticInteger {
    #[inline]
    fn to_i64(&self) -> Option<i64> {
        self.rational_value()
    }

    #[inline]
    fn to_u64(&self) -> Option<u64> {
        self.rational_value()?.to_u64()
    }

    #[inline]
    fn to_f64(&self) -> Option<f64> {
        if self.is_purely_real() {
            Some(self.real_part_numeric())
        } else {
            None
        }
    }
}

#[cfg(feature = "num-complex")]
mod complex {
    use super::*;
    use num_complex::{Complex32, Complex64};

    impl QuadraticInteger {
        pub fn to_complex64(&self) -> Complex64 {
            Complex64::new(self.real_part_numeric(), self.imag_part_numeric())
        }

        pub fn to_complex32(&self) -> Complex32 {
            let complex = self.to_complex64();
            Complex32::new(complex.re as f32, complex.im as f32)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    const EPS: f64 = 1e-10;

    fn int(a: i64, b: i64, d: i64) -> QuadraticInteger {
        QuadraticInteger::new(a, b, QuadraticRing::new(d).unwrap()).unwrap()
    }

    #[test]
    fn real_ring_test() {
        let phi = QuadraticInteger::with_denominator(1, 1, QuadraticRing::new(5).unwrap(), 2).unwrap();
        assert!((phi.real_part_numeric() - 1.61803398874989).abs() < EPS);
        assert_eq!(phi.imag_part_numeric(), 0.0);
        assert!((phi.abs_numeric() - 1.61803398874989).abs() < EPS);
        assert_eq!(phi.angle(), 0.0);

        let neg = int(1, -1, 2);
        assert!((neg.real_part_numeric() + 0.41421356237309).abs() < EPS);
        assert!((neg.abs_numeric() - 0.41421356237309).abs() < EPS);
        assert_eq!(neg.angle(), PI);
    }

    #[test]
    fn imaginary_ring_test() {
        let x = int(1, 1, -1);
        assert_eq!(x.real_part_numeric(), 1.0);
        assert_eq!(x.imag_part_numeric(), 1.0);
        assert!((x.abs_numeric() - 2f64.sqrt()).abs() < EPS);
        assert!((x.angle() - FRAC_PI_4).abs() < EPS);

        let omega = QuadraticInteger::with_denominator(-1, 1, QuadraticRing::new(-3).unwrap(), 2).unwrap();
        assert!((omega.real_part_numeric() + 0.5).abs() < EPS);
        assert!((omega.imag_part_numeric() - 0.86602540378443).abs() < EPS);
        assert!((omega.abs_numeric() - 1.0).abs() < EPS);
        assert!((omega.angle() - 2.0 * PI / 3.0).abs() < EPS);

        assert!((int(0, 3, -2).angle() - FRAC_PI_2).abs() < EPS);
    }

    #[test]
    fn conversion_test() {
        assert_eq!(int(7, 0, -1).to_i64(), Some(7));
        assert_eq!(int(-7, 0, -1).to_u64(), None);
        assert_eq!(int(7, 1, 2).to_i64(), None);
        assert_eq!(int(-7, 0, -1).to_f64(), Some(-7.0));
        assert_eq!(int(0, 1, -1).to_f64(), None);
        assert!(matches!(int(0, 1, 2).to_f64(), Some(v) if (v - 2f64.sqrt()).abs() < EPS));
    }

    #[cfg(feature = "num-complex")]
    #[test]
    fn complex_test() {
        let z = int(2, -3, -1).to_complex64();
        assert_eq!(z.re, 2.0);
        assert_eq!(z.im, -3.0);
        assert_eq!(int(2, 1, 3).to_complex32().im, 0.0);
    }
}
