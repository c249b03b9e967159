// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains ComplexNumber, the two-component value every iterated
//! formula in this crate is built from.  Most operations hand back a
//! fresh value and leave the receiver alone; the two `_in_place`
//! operations are the exception, and they need a `&mut` borrow to be
//! called at all.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub};

use num::traits::{One, Zero};
use num::Complex;

use error::{ComplexError, Result};

/// A complex number with double precision real and imaginary parts.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ComplexNumber {
    re: f64,
    im: f64,
}

impl ComplexNumber {
    /// Constructor.  Any pair of doubles is accepted.
    pub fn new(real: f64, imag: f64) -> ComplexNumber {
        ComplexNumber { re: real, im: imag }
    }

    /// The real part.
    pub fn re(&self) -> f64 {
        self.re
    }

    /// The imaginary part.
    pub fn im(&self) -> f64 {
        self.im
    }

    /// Adds `b` into this number and returns it, so calls can be
    /// chained: `z.add_in_place(a).add_in_place(b)`.
    pub fn add_in_place(&mut self, b: ComplexNumber) -> &mut ComplexNumber {
        self.re += b.re;
        self.im += b.im;
        self
    }

    /// Multiplies this number by `b` in place and returns it.
    pub fn multiply_in_place(&mut self, b: ComplexNumber) -> &mut ComplexNumber {
        let real = self.re * b.re - self.im * b.im;
        let imag = self.re * b.im + self.im * b.re;
        self.re = real;
        self.im = imag;
        self
    }

    /// The square of the modulus.  Escape-radius checks compare this
    /// against the squared radius and never pay for the square root.
    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// True when neither component is infinite or NaN.
    pub fn is_finite(&self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }

    /// `self - b`
    pub fn subtract(&self, b: ComplexNumber) -> ComplexNumber {
        ComplexNumber::new(self.re - b.re, self.im - b.im)
    }

    /// Both components multiplied by the real scalar `k`.
    pub fn scale(&self, k: f64) -> ComplexNumber {
        ComplexNumber::new(self.re * k, self.im * k)
    }

    /// The complex conjugate, `(re, -im)`.
    pub fn conjugate(&self) -> ComplexNumber {
        ComplexNumber::new(self.re, -self.im)
    }

    /// The modulus.  Uses `hypot`, which doesn't overflow or underflow
    /// on the intermediate squares the way `length_squared().sqrt()`
    /// can for very large or very small components.
    pub fn modulus(&self) -> f64 {
        self.re.hypot(self.im)
    }

    /// `self / b`.  Fails only when `b` is exactly zero; a divisor that
    /// is merely very close to zero still divides.
    pub fn divide(&self, b: ComplexNumber) -> Result<ComplexNumber> {
        let denom = b.re * b.re + b.im * b.im;
        if denom == 0.0 {
            debug!(dividend = %self, "refusing complex division by zero");
            return Err(ComplexError::DivisionByZero);
        }
        Ok(ComplexNumber::new(
            (self.re * b.re + self.im * b.im) / denom,
            (self.im * b.re - self.re * b.im) / denom,
        ))
    }

    /// A new number with the same components.
    pub fn copy(&self) -> ComplexNumber {
        ComplexNumber::new(self.re, self.im)
    }

    /// `self * b`, leaving `self` untouched.
    pub fn multiply(&self, b: ComplexNumber) -> ComplexNumber {
        ComplexNumber::new(
            self.re * b.re - self.im * b.im,
            self.re * b.im + self.im * b.re,
        )
    }

    /// Raises this number to the integer power `n`.  Negative exponents
    /// are rejected rather than inverted.  `power(0)` is one for every
    /// receiver, zero included.
    pub fn power(&self, n: i32) -> Result<ComplexNumber> {
        if n < 0 {
            debug!(exponent = n, "refusing negative complex exponent");
            return Err(ComplexError::InvalidExponent { exponent: n });
        }
        Ok(self.power_unsigned(n as u32))
    }

    /// Exponentiation by squaring: walk the bits of `n` from the low
    /// end, folding the current square of the base into the result
    /// whenever the bit is set.  Takes O(log n) multiplications.
    pub fn power_unsigned(&self, n: u32) -> ComplexNumber {
        let mut result = ComplexNumber::one();
        let mut base = self.copy();
        let mut e = n;
        while e > 0 {
            if e & 1 == 1 {
                result = result.multiply(base);
            }
            base = base.multiply(base);
            e >>= 1;
        }
        result
    }

    /// True when both components are within `epsilon` of `other`'s.
    pub fn approx_eq(&self, other: ComplexNumber, epsilon: f64) -> bool {
        (self.re - other.re).abs() <= epsilon && (self.im - other.im).abs() <= epsilon
    }
}

/// Prints as `(re±imi)` with six decimal places, the sign of the
/// imaginary part always shown: `(1.000000-0.500000i)`.
impl fmt::Display for ComplexNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:.6}{:+.6}i)", self.re, self.im)
    }
}

impl Add for ComplexNumber {
    type Output = ComplexNumber;

    fn add(self, rhs: ComplexNumber) -> ComplexNumber {
        ComplexNumber::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Sub for ComplexNumber {
    type Output = ComplexNumber;

    fn sub(self, rhs: ComplexNumber) -> ComplexNumber {
        self.subtract(rhs)
    }
}

impl Mul for ComplexNumber {
    type Output = ComplexNumber;

    fn mul(self, rhs: ComplexNumber) -> ComplexNumber {
        self.multiply(rhs)
    }
}

impl Neg for ComplexNumber {
    type Output = ComplexNumber;

    fn neg(self) -> ComplexNumber {
        ComplexNumber::new(-self.re, -self.im)
    }
}

impl AddAssign for ComplexNumber {
    fn add_assign(&mut self, rhs: ComplexNumber) {
        self.add_in_place(rhs);
    }
}

impl MulAssign for ComplexNumber {
    fn mul_assign(&mut self, rhs: ComplexNumber) {
        self.multiply_in_place(rhs);
    }
}

impl Zero for ComplexNumber {
    fn zero() -> ComplexNumber {
        ComplexNumber::new(0.0, 0.0)
    }

    fn is_zero(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }
}

impl One for ComplexNumber {
    fn one() -> ComplexNumber {
        ComplexNumber::new(1.0, 0.0)
    }
}

impl From<Complex<f64>> for ComplexNumber {
    fn from(c: Complex<f64>) -> ComplexNumber {
        ComplexNumber::new(c.re, c.im)
    }
}

impl From<ComplexNumber> for Complex<f64> {
    fn from(c: ComplexNumber) -> Complex<f64> {
        Complex::new(c.re, c.im)
    }
}

impl From<(f64, f64)> for ComplexNumber {
    fn from((re, im): (f64, f64)) -> ComplexNumber {
        ComplexNumber::new(re, im)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_close(actual: ComplexNumber, re: f64, im: f64) {
        assert!(
            actual.approx_eq(ComplexNumber::new(re, im), EPS),
            "expected ({}, {}), got {:?}",
            re,
            im,
            actual
        );
    }

    #[test]
    fn cube_of_one_plus_i() {
        let z = ComplexNumber::new(1.0, 1.0);
        assert_close(z.power(3).unwrap(), -2.0, 2.0);
    }

    #[test]
    fn zeroth_power_is_one() {
        assert_close(ComplexNumber::new(0.7, -0.3).power(0).unwrap(), 1.0, 0.0);
        assert_close(ComplexNumber::zero().power(0).unwrap(), 1.0, 0.0);
    }

    #[test]
    fn first_iteration_from_origin_is_the_constant() {
        let comp = ComplexNumber::new(0.3, -0.5);
        let mut z = ComplexNumber::new(0.0, 0.0).power(3).unwrap();
        z.add_in_place(comp);
        assert_close(z, comp.re(), comp.im());
    }

    #[test]
    fn negative_exponents_are_rejected() {
        let z = ComplexNumber::new(1.0, 1.0);
        for n in &[-1, -2, -17, i32::min_value()] {
            assert_eq!(
                z.power(*n),
                Err(ComplexError::InvalidExponent { exponent: *n })
            );
        }
    }

    #[test]
    fn modulus_of_pythagorean_triple() {
        assert!((ComplexNumber::new(3.0, 4.0).modulus() - 5.0).abs() < EPS);
        assert_eq!(ComplexNumber::new(3.0, 4.0).length_squared(), 25.0);
    }

    #[test]
    fn modulus_survives_huge_components() {
        let z = ComplexNumber::new(3.0e200, 4.0e200);
        assert!(z.length_squared().is_infinite());
        assert!((z.modulus() / 5.0e200 - 1.0).abs() < EPS);
    }

    #[test]
    fn divide_by_zero_fails() {
        let one = ComplexNumber::new(1.0, 0.0);
        assert_eq!(
            one.divide(ComplexNumber::new(0.0, 0.0)),
            Err(ComplexError::DivisionByZero)
        );
    }

    #[test]
    fn divide_by_tiny_divisor_succeeds() {
        let one = ComplexNumber::new(1.0, 0.0);
        assert!(one.divide(ComplexNumber::new(1.0e-150, 0.0)).is_ok());
    }

    #[test]
    fn divide_matches_known_quotient() {
        // (1+2i)/(3+4i) = (11+2i)/25
        let q = ComplexNumber::new(1.0, 2.0)
            .divide(ComplexNumber::new(3.0, 4.0))
            .unwrap();
        assert_close(q, 0.44, 0.08);
    }

    #[test]
    fn multiplicative_identity() {
        let z = ComplexNumber::new(2.0, 3.0);
        assert_eq!(z.multiply(ComplexNumber::new(1.0, 0.0)), z);
    }

    #[test]
    fn in_place_operations_chain() {
        let mut z = ComplexNumber::new(1.0, 2.0);
        z.add_in_place(ComplexNumber::new(1.0, 1.0))
            .multiply_in_place(ComplexNumber::new(0.0, 1.0));
        // (2+3i) * i = -3+2i
        assert_close(z, -3.0, 2.0);
    }

    #[test]
    fn finiteness() {
        assert!(ComplexNumber::new(1.0e300, -1.0e300).is_finite());
        assert!(!ComplexNumber::new(::std::f64::INFINITY, 0.0).is_finite());
        assert!(!ComplexNumber::new(0.0, ::std::f64::NAN).is_finite());
    }

    #[test]
    fn subtract_scale_and_conjugate() {
        let z = ComplexNumber::new(1.5, -2.5);
        assert_close(z.subtract(ComplexNumber::new(0.5, 0.5)), 1.0, -3.0);
        assert_close(z.scale(-2.0), -3.0, 5.0);
        assert_close(z.conjugate(), 1.5, 2.5);
        assert_eq!(z.conjugate().conjugate(), z);
    }

    #[test]
    fn copy_is_equal_and_independent() {
        let z = ComplexNumber::new(0.1, 0.2);
        let mut c = z.copy();
        assert_eq!(c, z);
        c.add_in_place(ComplexNumber::one());
        assert_eq!(z, ComplexNumber::new(0.1, 0.2));
    }

    #[test]
    fn display_uses_fixed_point_and_signed_imaginary() {
        assert_eq!(ComplexNumber::new(1.0, 1.0).to_string(), "(1.000000+1.000000i)");
        assert_eq!(ComplexNumber::new(1.0, -0.5).to_string(), "(1.000000-0.500000i)");
        assert_eq!(
            ComplexNumber::new(-2.25, 0.125).to_string(),
            "(-2.250000+0.125000i)"
        );
    }

    #[test]
    fn operators_agree_with_named_methods() {
        let a = ComplexNumber::new(0.3, -1.2);
        let b = ComplexNumber::new(-0.7, 0.4);
        assert_eq!(a - b, a.subtract(b));
        assert_eq!(a * b, a.multiply(b));
        assert_eq!(-a, a.scale(-1.0));

        let mut sum = a;
        sum.add_in_place(b);
        assert_eq!(a + b, sum);

        let mut acc = a;
        acc += b;
        acc *= b;
        let mut expected = a;
        expected.add_in_place(b).multiply_in_place(b);
        assert_eq!(acc, expected);
    }

    #[test]
    fn converts_to_and_from_num_complex() {
        let z = ComplexNumber::new(0.25, -4.0);
        let c: Complex<f64> = z.into();
        assert_eq!(c, Complex::new(0.25, -4.0));
        assert_eq!(ComplexNumber::from(c), z);
        assert_eq!(ComplexNumber::from((0.25, -4.0)), z);
    }

    #[test]
    fn zero_and_one() {
        assert!(ComplexNumber::zero().is_zero());
        assert!(!ComplexNumber::one().is_zero());
        assert_eq!(ComplexNumber::default(), ComplexNumber::zero());
        assert_eq!(ComplexNumber::one(), ComplexNumber::new(1.0, 0.0));
    }

    #[test]
    fn power_matches_repeated_num_complex_products() {
        let z = ComplexNumber::new(0.9, -0.4);
        let c: Complex<f64> = z.into();
        let mut expected = Complex::new(1.0, 0.0);
        for n in 0..12 {
            assert!(z.power(n).unwrap().approx_eq(expected.into(), 1e-12));
            expected = expected * c;
        }
    }
}
