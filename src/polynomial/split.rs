// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

use crate::{
    polynomial::{Polynomial, PreinvModulus},
    traits::GCD,
};
use log::trace;
use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::One;
use rand::Rng;

impl Polynomial {
    /// One step of Rabin's root splitting.
    ///
    /// `self` must be monic with degree at least 2 and a product of distinct linear
    /// factors over an odd prime field; `half_exponent` is `(p - 1) / 2`.
    ///
    /// Returns two coprime nontrivial factors with the larger degree first. Shifts are
    /// redrawn from `rng` until one separates the roots, which takes two tries on average.
    pub fn split_rabin<R: Rng + ?Sized>(
        &self,
        half_exponent: &BigUint,
        rng: &mut R,
    ) -> (Polynomial, Polynomial) {
        assert!(
            self.degree().unwrap_or(0) >= 2,
            "nothing to split: {}",
            self
        );
        debug_assert!(self.is_monic());
        let modulus = &self.modulus;
        // over F_2 the exponent is 0 and no shift ever separates the roots
        debug_assert!(
            modulus.to_modulus().is_odd(),
            "splitting needs an odd characteristic"
        );
        let preinv = PreinvModulus::new(self);
        let one = Polynomial::one(modulus.clone());
        let mut attempt = 0usize;
        loop {
            attempt += 1;
            let delta = rng.gen_biguint_below(modulus.to_modulus());
            // (x + delta)^((p - 1) / 2) is 1 exactly at the roots r where r + delta is a
            // nonzero square
            let shifted = Polynomial::from_raw_parts(modulus.clone(), vec![delta, BigUint::one()]);
            let power = preinv.pow(&shifted, half_exponent);
            let factor = (&power - &one).gcd(self);
            let factor_degree = factor.degree().unwrap_or(0);
            if factor_degree > 0 && factor.len() < self.len() {
                let cofactor = self.exact_div(&factor);
                trace!(
                    "split degree {} into {} + {} after {} attempt(s)",
                    self.len() - 1,
                    factor_degree,
                    cofactor.len() - 1,
                    attempt
                );
                return if factor.len() >= cofactor.len() {
                    (factor, cofactor)
                } else {
                    (cofactor, factor)
                };
            }
            trace!("shift gave a trivial split of ({}), retrying", self);
        }
    }
}
