// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use crate::{polynomial::Polynomial, traits::GCD};
use std::mem;

impl GCD for Polynomial {
    type Output = Self;
    /// the monic greatest common divisor; `gcd(0, 0) == 0`
    fn gcd(&self, rhs: &Self) -> Self {
        self.require_matching_moduli(rhs);
        let mut lhs = self.clone();
        let mut rhs = rhs.clone();
        if lhs.len() < rhs.len() {
            mem::swap(&mut lhs, &mut rhs);
        }
        while !rhs.is_zero() {
            let remainder = lhs.div_rem(&rhs).1;
            lhs = mem::replace(&mut rhs, remainder);
        }
        lhs.into_monic()
    }
}
