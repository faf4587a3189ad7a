// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

//! Arithmetic modulo a fixed polynomial, using a precomputed inverse of the
//! reversed modulus so each reduction is two multiplications instead of a
//! long division.

use crate::polynomial::Polynomial;
use num_bigint::BigUint;
use num_traits::Zero;

/// A polynomial modulus `f` together with `rev(f)^-1 mod x^len(f)`.
#[derive(Clone, Debug)]
pub struct PreinvModulus {
    modulus: Polynomial,
    reversed_inverse: Polynomial,
}

impl PreinvModulus {
    /// `modulus` must have degree at least 1
    pub fn new(modulus: &Polynomial) -> Self {
        let degree = modulus
            .degree()
            .expect("polynomial modulus must be nonzero");
        assert!(degree >= 1, "polynomial modulus must not be constant");
        let reversed = modulus.reverse(modulus.len());
        let reversed_inverse = reversed.inv_series_newton(modulus.len());
        Self {
            modulus: modulus.clone(),
            reversed_inverse,
        }
    }
    pub fn modulus(&self) -> &Polynomial {
        &self.modulus
    }
    fn degree(&self) -> usize {
        self.modulus.len() - 1
    }
    /// `value mod f`
    pub fn reduce(&self, value: &Polynomial) -> Polynomial {
        let degree = self.degree();
        let value_degree = match value.degree() {
            Some(v) if v >= degree => v,
            _ => return value.clone(),
        };
        let quotient_len = value_degree - degree + 1;
        if quotient_len > self.modulus.len() {
            return value.div_rem(&self.modulus).1;
        }
        // rev(value) = rev(quotient) * rev(f) mod x^quotient_len
        let reversed_quotient = value
            .reverse(value.len())
            .truncate(quotient_len)
            .mul_low(&self.reversed_inverse, quotient_len);
        let quotient = reversed_quotient.reverse(quotient_len);
        let remainder = value - &quotient * &self.modulus;
        debug_assert!(remainder.len() <= degree);
        remainder
    }
    pub fn mul_mod(&self, lhs: &Polynomial, rhs: &Polynomial) -> Polynomial {
        self.reduce(&(lhs * rhs))
    }
    /// `base^exponent mod f` by left-to-right binary exponentiation
    pub fn pow(&self, base: &Polynomial, exponent: &BigUint) -> Polynomial {
        if exponent.is_zero() {
            return Polynomial::one(self.modulus.modulus.clone());
        }
        let base = self.reduce(base);
        let mut retval = base.clone();
        for bit in (0..exponent.bits() - 1).rev() {
            retval = self.mul_mod(&retval, &retval);
            if exponent.bit(bit) {
                retval = self.mul_mod(&retval, &base);
            }
        }
        retval
    }
}

impl Polynomial {
    /// `self^exponent mod modulus`
    pub fn powmod(&self, exponent: &BigUint, modulus: &Polynomial) -> Polynomial {
        PreinvModulus::new(modulus).pow(self, exponent)
    }
}
