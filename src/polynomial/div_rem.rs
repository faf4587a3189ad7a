// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

use crate::polynomial::Polynomial;
use num_bigint::BigUint;
use num_traits::Zero;
use std::ops::{Div, Rem};

impl Polynomial {
    /// long division; panics when `divisor` is zero
    pub fn div_rem(&self, divisor: &Polynomial) -> (Polynomial, Polynomial) {
        self.require_matching_moduli(divisor);
        let divisor_degree = divisor.degree().expect("division by zero polynomial");
        let modulus = &self.modulus;
        if self.len() <= divisor_degree {
            return (Polynomial::zero(modulus.clone()), self.clone());
        }
        let leading_inverse = modulus
            .inverse_mod(&divisor.coefficients[divisor_degree])
            .expect("leading coefficient is known to be nonzero");
        let quotient_len = self.len() - divisor_degree;
        let mut quotient = vec![BigUint::zero(); quotient_len];
        let mut remainder = self.coefficients.clone();
        for quotient_index in (0..quotient_len).rev() {
            let top = &remainder[quotient_index + divisor_degree];
            if top.is_zero() {
                continue;
            }
            let factor = modulus.mul_mod(top, &leading_inverse);
            for (divisor_index, divisor_coefficient) in divisor.coefficients.iter().enumerate() {
                let index = quotient_index + divisor_index;
                let product = modulus.mul_mod(&factor, divisor_coefficient);
                remainder[index] = modulus.sub_mod(&remainder[index], &product);
            }
            quotient[quotient_index] = factor;
        }
        remainder.truncate(divisor_degree);
        (
            Polynomial::from_raw_parts(modulus.clone(), quotient),
            Polynomial::from_raw_parts(modulus.clone(), remainder),
        )
    }
    /// division known to leave no remainder
    pub fn exact_div(&self, divisor: &Polynomial) -> Polynomial {
        let (quotient, remainder) = self.div_rem(divisor);
        debug_assert!(
            remainder.is_zero(),
            "inexact division: ({}) / ({})",
            self,
            divisor
        );
        quotient
    }
    /// power series inverse of `self` modulo `x^length` by Newton iteration.
    ///
    /// The constant term must be nonzero.
    pub fn inv_series_newton(&self, length: usize) -> Polynomial {
        let modulus = &self.modulus;
        if length == 0 {
            return Polynomial::zero(modulus.clone());
        }
        let constant_inverse = self
            .coefficients
            .first()
            .and_then(|constant| modulus.inverse_mod(constant))
            .expect("power series inverse needs a nonzero constant term");
        let two = Polynomial::make_monomial(2u32, 0, modulus.clone());
        let mut inverse = Polynomial::from_raw_parts(modulus.clone(), vec![constant_inverse]);
        let mut precision = 1;
        while precision < length {
            precision = (2 * precision).min(length);
            // g <- g * (2 - f * g) doubles the number of correct terms
            let error = self.truncate(precision).mul_low(&inverse, precision);
            inverse = inverse.mul_low(&(&two - error), precision);
        }
        inverse
    }
}

impl<'a, 'b> Div<&'a Polynomial> for &'b Polynomial {
    type Output = Polynomial;
    fn div(self, rhs: &Polynomial) -> Polynomial {
        self.div_rem(rhs).0
    }
}

impl<'a> Div<&'a Polynomial> for Polynomial {
    type Output = Polynomial;
    fn div(self, rhs: &Polynomial) -> Polynomial {
        self.div_rem(rhs).0
    }
}

impl<'a, 'b> Rem<&'a Polynomial> for &'b Polynomial {
    type Output = Polynomial;
    fn rem(self, rhs: &Polynomial) -> Polynomial {
        self.div_rem(rhs).1
    }
}

impl<'a> Rem<&'a Polynomial> for Polynomial {
    type Output = Polynomial;
    fn rem(self, rhs: &Polynomial) -> Polynomial {
        self.div_rem(rhs).1
    }
}
