// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

use crate::polynomial::Polynomial;
use num_bigint::BigUint;
use num_traits::Zero;
use std::ops::{Mul, MulAssign};

impl Polynomial {
    /// `self * rhs` reduced modulo `x^length`
    pub fn mul_low(&self, rhs: &Polynomial, length: usize) -> Polynomial {
        self.require_matching_moduli(rhs);
        if self.is_zero() || rhs.is_zero() || length == 0 {
            return Polynomial::zero(self.modulus.clone());
        }
        let length = length.min(self.len() + rhs.len() - 1);
        // accumulate unreduced products, reduce each coefficient once at the end
        let mut coefficients = vec![BigUint::zero(); length];
        for (l_index, l) in self.coefficients.iter().enumerate().take(length) {
            if l.is_zero() {
                continue;
            }
            for (r_index, r) in rhs.coefficients.iter().enumerate().take(length - l_index) {
                coefficients[l_index + r_index] += l * r;
            }
        }
        let modulus = self.modulus.to_modulus();
        for coefficient in coefficients.iter_mut() {
            *coefficient %= modulus;
        }
        Polynomial::from_raw_parts(self.modulus.clone(), coefficients)
    }
}

impl<'a, 'b> Mul<&'a Polynomial> for &'b Polynomial {
    type Output = Polynomial;
    fn mul(self, rhs: &Polynomial) -> Polynomial {
        self.mul_low(rhs, self.len() + rhs.len())
    }
}

impl<'a> Mul<Polynomial> for &'a Polynomial {
    type Output = Polynomial;
    fn mul(self, rhs: Polynomial) -> Polynomial {
        self * &rhs
    }
}

impl<'a> Mul<&'a Polynomial> for Polynomial {
    type Output = Polynomial;
    fn mul(self, rhs: &Polynomial) -> Polynomial {
        &self * rhs
    }
}

impl Mul for Polynomial {
    type Output = Polynomial;
    fn mul(self, rhs: Polynomial) -> Polynomial {
        &self * &rhs
    }
}

impl MulAssign for Polynomial {
    fn mul_assign(&mut self, rhs: Polynomial) {
        *self = &*self * rhs;
    }
}

impl<'a> MulAssign<&'a Polynomial> for Polynomial {
    fn mul_assign(&mut self, rhs: &Polynomial) {
        *self = &*self * rhs;
    }
}
