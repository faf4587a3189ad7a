// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

use crate::{mod_int::KnownPrime, polynomial::Polynomial};
use num_bigint::BigUint;
use num_traits::Zero;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

fn add_sub_assign(
    lhs: &mut Polynomial,
    rhs: &Polynomial,
    add_sub_mod: fn(&KnownPrime, &BigUint, &BigUint) -> BigUint,
) {
    lhs.require_matching_moduli(rhs);
    let Polynomial {
        modulus,
        coefficients,
    } = &mut *lhs;
    if coefficients.len() < rhs.coefficients.len() {
        coefficients.resize(rhs.coefficients.len(), BigUint::zero());
    }
    for (lhs_coefficient, rhs_coefficient) in coefficients.iter_mut().zip(&rhs.coefficients) {
        *lhs_coefficient = add_sub_mod(modulus, lhs_coefficient, rhs_coefficient);
    }
    lhs.remove_extra_zeros();
}

impl<'a> AddAssign<&'a Polynomial> for Polynomial {
    fn add_assign(&mut self, rhs: &Polynomial) {
        add_sub_assign(self, rhs, KnownPrime::add_mod);
    }
}

impl AddAssign for Polynomial {
    fn add_assign(&mut self, rhs: Polynomial) {
        *self += &rhs;
    }
}

impl<'a> SubAssign<&'a Polynomial> for Polynomial {
    fn sub_assign(&mut self, rhs: &Polynomial) {
        add_sub_assign(self, rhs, KnownPrime::sub_mod);
    }
}

impl SubAssign for Polynomial {
    fn sub_assign(&mut self, rhs: Polynomial) {
        *self -= &rhs;
    }
}

impl Add for Polynomial {
    type Output = Polynomial;
    fn add(mut self, rhs: Polynomial) -> Polynomial {
        self += &rhs;
        self
    }
}

impl<'a> Add<&'a Polynomial> for Polynomial {
    type Output = Polynomial;
    fn add(mut self, rhs: &Polynomial) -> Polynomial {
        self += rhs;
        self
    }
}

impl<'a> Add<Polynomial> for &'a Polynomial {
    type Output = Polynomial;
    fn add(self, mut rhs: Polynomial) -> Polynomial {
        rhs += self;
        rhs
    }
}

impl<'a, 'b> Add<&'a Polynomial> for &'b Polynomial {
    type Output = Polynomial;
    fn add(self, rhs: &Polynomial) -> Polynomial {
        let mut retval = self.clone();
        retval += rhs;
        retval
    }
}

impl Sub for Polynomial {
    type Output = Polynomial;
    fn sub(mut self, rhs: Polynomial) -> Polynomial {
        self -= &rhs;
        self
    }
}

impl<'a> Sub<&'a Polynomial> for Polynomial {
    type Output = Polynomial;
    fn sub(mut self, rhs: &Polynomial) -> Polynomial {
        self -= rhs;
        self
    }
}

impl<'a> Sub<Polynomial> for &'a Polynomial {
    type Output = Polynomial;
    fn sub(self, rhs: Polynomial) -> Polynomial {
        -rhs + self
    }
}

impl<'a, 'b> Sub<&'a Polynomial> for &'b Polynomial {
    type Output = Polynomial;
    fn sub(self, rhs: &Polynomial) -> Polynomial {
        let mut retval = self.clone();
        retval -= rhs;
        retval
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;
    fn neg(mut self) -> Polynomial {
        let Polynomial {
            modulus,
            coefficients,
        } = &mut self;
        for coefficient in coefficients.iter_mut() {
            *coefficient = modulus.neg_mod(coefficient);
        }
        self
    }
}

impl<'a> Neg for &'a Polynomial {
    type Output = Polynomial;
    fn neg(self) -> Polynomial {
        -self.clone()
    }
}
