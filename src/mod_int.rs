// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

use crate::error::Error;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::One;
use num_traits::Zero;
use std::fmt;
use std::ops::Add;
use std::ops::AddAssign;
use std::ops::Mul;
use std::ops::MulAssign;
use std::ops::Neg;
use std::ops::Sub;
use std::ops::SubAssign;
use std::sync::Arc;

const MILLER_RABIN_BASES: [u32; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// Miller-Rabin test using the first twelve primes as witnesses.
///
/// The answer is exact for `n < 3.1 * 10^23`; above that a `true` result means `n` is a
/// probable prime.
pub fn is_probable_prime(n: &BigUint) -> bool {
    if *n < BigUint::from(2u32) {
        return false;
    }
    for &base in MILLER_RABIN_BASES.iter() {
        let base = BigUint::from(base);
        if *n == base {
            return true;
        }
        if (n % &base).is_zero() {
            return false;
        }
    }
    let n_minus_one = n - 1u32;
    let mut odd_part = n_minus_one.clone();
    let mut two_power = 0u32;
    while odd_part.is_even() {
        odd_part >>= 1u32;
        two_power += 1;
    }
    'witness: for &base in MILLER_RABIN_BASES.iter() {
        let mut x = BigUint::from(base).modpow(&odd_part, n);
        if x.is_one() || x == n_minus_one {
            continue;
        }
        for _ in 1..two_power {
            x = &x * &x % n;
            if x == n_minus_one {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

/// A prime modulus `p`, the order of the field `F_p`.
///
/// Cloning is cheap: the value is shared.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct KnownPrime {
    value: Arc<BigUint>,
}

impl KnownPrime {
    pub fn new<T: Into<BigUint>>(value: T) -> Result<Self, Error> {
        let value = value.into();
        if is_probable_prime(&value) {
            Ok(Self {
                value: Arc::new(value),
            })
        } else {
            Err(Error::NotPrime(value))
        }
    }
    /// primality of `value` is not checked in release builds
    pub fn new_unsafe<T: Into<BigUint>>(value: T) -> Self {
        let value = value.into();
        debug_assert!(is_probable_prime(&value), "{} is not prime", value);
        Self {
            value: Arc::new(value),
        }
    }
    pub fn to_modulus(&self) -> &BigUint {
        &self.value
    }
    pub fn into_modulus(self) -> BigUint {
        Arc::try_unwrap(self.value).unwrap_or_else(|value| (*value).clone())
    }
    /// `(p - 1) / 2`, the exponent of Euler's criterion
    pub fn half_exponent(&self) -> BigUint {
        (&*self.value - 1u32).div_floor(&BigUint::from(2u32))
    }
    pub fn reduce(&self, value: BigUint) -> BigUint {
        value % &*self.value
    }
    pub fn add_mod(&self, lhs: &BigUint, rhs: &BigUint) -> BigUint {
        let sum = lhs + rhs;
        if sum >= *self.value {
            sum - &*self.value
        } else {
            sum
        }
    }
    pub fn sub_mod(&self, lhs: &BigUint, rhs: &BigUint) -> BigUint {
        if lhs >= rhs {
            lhs - rhs
        } else {
            lhs + &*self.value - rhs
        }
    }
    pub fn neg_mod(&self, value: &BigUint) -> BigUint {
        if value.is_zero() {
            BigUint::zero()
        } else {
            &*self.value - value
        }
    }
    pub fn mul_mod(&self, lhs: &BigUint, rhs: &BigUint) -> BigUint {
        lhs * rhs % &*self.value
    }
    pub fn pow_mod(&self, base: &BigUint, exponent: &BigUint) -> BigUint {
        base.modpow(exponent, &self.value)
    }
    /// multiplicative inverse by Fermat's little theorem; `None` for zero
    pub fn inverse_mod(&self, value: &BigUint) -> Option<BigUint> {
        if value.is_zero() {
            return None;
        }
        let exponent = &*self.value - 2u32;
        Some(value.modpow(&exponent, &self.value))
    }
}

impl fmt::Display for KnownPrime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.value.fmt(f)
    }
}

/// An element of `F_p`, carrying its modulus.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct ModularInteger {
    value: BigUint,
    modulus: KnownPrime,
}

impl ModularInteger {
    pub fn new<T: Into<BigUint>>(value: T, modulus: KnownPrime) -> Self {
        let value = modulus.reduce(value.into());
        Self { value, modulus }
    }
    pub(crate) fn from_reduced(value: BigUint, modulus: KnownPrime) -> Self {
        debug_assert!(value < *modulus.to_modulus());
        Self { value, modulus }
    }
    pub fn value(&self) -> &BigUint {
        &self.value
    }
    pub fn modulus(&self) -> &KnownPrime {
        &self.modulus
    }
    pub fn into_value(self) -> BigUint {
        self.value
    }
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }
    pub fn is_one(&self) -> bool {
        self.value.is_one()
    }
    pub fn has_matching_moduli(&self, rhs: &Self) -> bool {
        self.modulus == rhs.modulus
    }
    fn require_matching_moduli(&self, rhs: &Self) {
        assert!(self.has_matching_moduli(rhs), "moduli don't match");
    }
    pub fn pow(&self, exponent: &BigUint) -> Self {
        Self {
            value: self.modulus.pow_mod(&self.value, exponent),
            modulus: self.modulus.clone(),
        }
    }
    pub fn inverse(&self) -> Option<Self> {
        Some(Self {
            value: self.modulus.inverse_mod(&self.value)?,
            modulus: self.modulus.clone(),
        })
    }
}

impl From<ModularInteger> for (BigUint, KnownPrime) {
    fn from(value: ModularInteger) -> Self {
        (value.value, value.modulus)
    }
}

impl fmt::Display for ModularInteger {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.value.fmt(f)
    }
}

macro_rules! impl_binary_op {
    ($op_trait:ident, $op_fn:ident, $assign_trait:ident, $assign_fn:ident, $field_fn:ident) => {
        impl<'l, 'r> $op_trait<&'r ModularInteger> for &'l ModularInteger {
            type Output = ModularInteger;
            fn $op_fn(self, rhs: &ModularInteger) -> ModularInteger {
                self.require_matching_moduli(rhs);
                ModularInteger {
                    value: self.modulus.$field_fn(&self.value, &rhs.value),
                    modulus: self.modulus.clone(),
                }
            }
        }

        impl<'r> $op_trait<&'r ModularInteger> for ModularInteger {
            type Output = ModularInteger;
            fn $op_fn(self, rhs: &ModularInteger) -> ModularInteger {
                (&self).$op_fn(rhs)
            }
        }

        impl<'l> $op_trait<ModularInteger> for &'l ModularInteger {
            type Output = ModularInteger;
            fn $op_fn(self, rhs: ModularInteger) -> ModularInteger {
                self.$op_fn(&rhs)
            }
        }

        impl $op_trait for ModularInteger {
            type Output = ModularInteger;
            fn $op_fn(self, rhs: ModularInteger) -> ModularInteger {
                (&self).$op_fn(&rhs)
            }
        }

        impl<'r> $assign_trait<&'r ModularInteger> for ModularInteger {
            fn $assign_fn(&mut self, rhs: &ModularInteger) {
                self.require_matching_moduli(rhs);
                self.value = self.modulus.$field_fn(&self.value, &rhs.value);
            }
        }

        impl $assign_trait for ModularInteger {
            fn $assign_fn(&mut self, rhs: ModularInteger) {
                self.$assign_fn(&rhs);
            }
        }
    };
}

impl_binary_op!(Add, add, AddAssign, add_assign, add_mod);
impl_binary_op!(Sub, sub, SubAssign, sub_assign, sub_mod);
impl_binary_op!(Mul, mul, MulAssign, mul_assign, mul_mod);

impl<'a> Neg for &'a ModularInteger {
    type Output = ModularInteger;
    fn neg(self) -> ModularInteger {
        ModularInteger {
            value: self.modulus.neg_mod(&self.value),
            modulus: self.modulus.clone(),
        }
    }
}

impl Neg for ModularInteger {
    type Output = ModularInteger;
    fn neg(mut self) -> ModularInteger {
        self.value = self.modulus.neg_mod(&self.value);
        self
    }
}
