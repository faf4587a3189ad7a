// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use crate::{
    mod_int::{KnownPrime, ModularInteger},
    traits::{Derivative, PolynomialEval},
};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use std::{fmt, slice};

mod add_sub;
mod div_rem;
mod gcd;
mod mul;
pub mod powmod;
pub mod roots;
mod split;
mod squarefree;

pub use self::{
    powmod::PreinvModulus,
    roots::{RootMultiset, TINY_FIELD_BOUND, WORKSPACE_CAPACITY},
};

/// A single-variable polynomial over the prime field `F_p`.
///
/// the term at index `n` is `self.coefficients()[n] * pow(x, n)`
///
/// # Invariants
///
/// every coefficient is less than `self.modulus()`, and
/// `self.coefficients().last()` is either `None` or `Some(v)` where `!v.is_zero()`
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct Polynomial {
    modulus: KnownPrime,
    coefficients: Vec<BigUint>,
}

impl Polynomial {
    pub fn zero(modulus: KnownPrime) -> Self {
        Self {
            modulus,
            coefficients: Vec::new(),
        }
    }
    pub fn one(modulus: KnownPrime) -> Self {
        Self::make_monomial(BigUint::one(), 0, modulus)
    }
    /// the polynomial `x`
    pub fn x(modulus: KnownPrime) -> Self {
        Self::make_monomial(BigUint::one(), 1, modulus)
    }
    pub fn make_monomial<T: Into<BigUint>>(
        coefficient: T,
        power: usize,
        modulus: KnownPrime,
    ) -> Self {
        let coefficient = modulus.reduce(coefficient.into());
        if coefficient.is_zero() {
            return Self::zero(modulus);
        }
        let mut coefficients = vec![BigUint::zero(); power + 1];
        coefficients[power] = coefficient;
        Self {
            modulus,
            coefficients,
        }
    }
    /// coefficients are given lowest power first and reduced mod `p`
    pub fn from_coefficients<I, V>(coefficients: I, modulus: KnownPrime) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<BigUint>,
    {
        let coefficients = coefficients
            .into_iter()
            .map(|coefficient| modulus.reduce(coefficient.into()))
            .collect();
        Self::from_raw_parts(modulus, coefficients)
    }
    /// the monic polynomial whose roots are `roots`, repeated entries giving multiplicities
    pub fn from_roots<I, V>(roots: I, modulus: KnownPrime) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<BigUint>,
    {
        let mut retval = Self::one(modulus.clone());
        for root in roots {
            let root = modulus.reduce(root.into());
            let linear_factor = Self::from_raw_parts(
                modulus.clone(),
                vec![modulus.neg_mod(&root), BigUint::one()],
            );
            retval *= &linear_factor;
        }
        retval
    }
    /// `coefficients` must already be reduced; trailing zeros are removed
    pub(crate) fn from_raw_parts(modulus: KnownPrime, coefficients: Vec<BigUint>) -> Self {
        debug_assert!(coefficients
            .iter()
            .all(|coefficient| coefficient < modulus.to_modulus()));
        let mut retval = Self {
            modulus,
            coefficients,
        };
        retval.remove_extra_zeros();
        retval
    }
    fn remove_extra_zeros(&mut self) {
        while let Some(tail) = self.coefficients.last() {
            if tail.is_zero() {
                self.coefficients.pop();
            } else {
                break;
            }
        }
    }
    pub(crate) fn require_matching_moduli(&self, rhs: &Self) {
        assert!(self.modulus == rhs.modulus, "moduli don't match");
    }
    pub fn modulus(&self) -> &KnownPrime {
        &self.modulus
    }
    pub fn coefficients(&self) -> &[BigUint] {
        &self.coefficients
    }
    pub fn into_coefficients(self) -> Vec<BigUint> {
        self.coefficients
    }
    /// the coefficient of `x^power`, zero past the end
    pub fn coefficient(&self, power: usize) -> ModularInteger {
        let value = self
            .coefficients
            .get(power)
            .cloned()
            .unwrap_or_else(BigUint::zero);
        ModularInteger::from_reduced(value, self.modulus.clone())
    }
    pub fn iter(&self) -> slice::Iter<BigUint> {
        self.coefficients.iter()
    }
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }
    pub fn is_zero(&self) -> bool {
        self.coefficients.is_empty()
    }
    pub fn is_one(&self) -> bool {
        self.coefficients.len() == 1 && self.coefficients[0].is_one()
    }
    /// `None` for the zero polynomial
    pub fn degree(&self) -> Option<usize> {
        self.coefficients.len().checked_sub(1)
    }
    pub fn nonzero_highest_power_coefficient(&self) -> Option<ModularInteger> {
        let value = self.coefficients.last()?.clone();
        Some(ModularInteger::from_reduced(value, self.modulus.clone()))
    }
    pub fn is_monic(&self) -> bool {
        self.coefficients.last().map_or(false, One::is_one)
    }
    /// divide by the leading coefficient; the zero polynomial is left as is
    pub fn make_monic(&mut self) {
        let leading = match self.coefficients.last() {
            Some(v) if !v.is_one() => v.clone(),
            _ => return,
        };
        let inverse = self
            .modulus
            .inverse_mod(&leading)
            .expect("leading coefficient is known to be nonzero");
        self.mul_scalar_assign(&inverse);
    }
    pub fn to_monic(&self) -> Self {
        self.clone().into_monic()
    }
    pub fn into_monic(mut self) -> Self {
        self.make_monic();
        self
    }
    pub fn mul_scalar_assign(&mut self, scalar: &BigUint) {
        let Polynomial {
            modulus,
            coefficients,
        } = &mut *self;
        for coefficient in coefficients.iter_mut() {
            *coefficient = modulus.mul_mod(coefficient, scalar);
        }
        self.remove_extra_zeros();
    }
    pub fn mul_scalar(&self, scalar: &BigUint) -> Self {
        let mut retval = self.clone();
        retval.mul_scalar_assign(&self.modulus.reduce(scalar.clone()));
        retval
    }
    /// the first `length` coefficients in reverse order: `x^(length - 1) * self(1 / x)`
    /// when `self.len() <= length`
    pub fn reverse(&self, length: usize) -> Self {
        let coefficients = (0..length)
            .rev()
            .map(|power| {
                self.coefficients
                    .get(power)
                    .cloned()
                    .unwrap_or_else(BigUint::zero)
            })
            .collect();
        Self::from_raw_parts(self.modulus.clone(), coefficients)
    }
    /// multiply by `x^count`
    pub fn shift_left(&self, count: usize) -> Self {
        if self.is_zero() {
            return self.clone();
        }
        let mut coefficients = vec![BigUint::zero(); count];
        coefficients.extend_from_slice(&self.coefficients);
        Self {
            modulus: self.modulus.clone(),
            coefficients,
        }
    }
    /// drop the `count` lowest coefficients, dividing by `x^count` when they are zero
    pub fn shift_right_assign(&mut self, count: usize) {
        let count = count.min(self.coefficients.len());
        self.coefficients.drain(..count);
    }
    pub fn shift_right(&self, count: usize) -> Self {
        let mut retval = self.clone();
        retval.shift_right_assign(count);
        retval
    }
    /// reduce modulo `x^length`
    pub fn truncate(&self, length: usize) -> Self {
        let length = length.min(self.coefficients.len());
        Self::from_raw_parts(self.modulus.clone(), self.coefficients[..length].to_vec())
    }
    /// the number of times `x` divides `self`; `None` for the zero polynomial
    pub fn lowest_nonzero_power(&self) -> Option<usize> {
        self.coefficients.iter().position(|v| !v.is_zero())
    }
    /// Horner evaluation at `x`
    pub fn evaluate(&self, x: &BigUint) -> BigUint {
        let x = self.modulus.reduce(x.clone());
        let mut retval = BigUint::zero();
        for coefficient in self.coefficients.iter().rev() {
            retval = self.modulus.mul_mod(&retval, &x);
            retval = self.modulus.add_mod(&retval, coefficient);
        }
        retval
    }
}

impl<'a> PolynomialEval<ModularInteger> for &'a Polynomial {
    fn eval(self, x: &ModularInteger) -> ModularInteger {
        assert!(self.modulus == *x.modulus(), "moduli don't match");
        ModularInteger::from_reduced(self.evaluate(x.value()), self.modulus.clone())
    }
}

impl PolynomialEval<ModularInteger> for Polynomial {
    fn eval(self, x: &ModularInteger) -> ModularInteger {
        (&self).eval(x)
    }
}

impl<'a> Derivative for &'a Polynomial {
    type Output = Polynomial;
    fn derivative(self) -> Polynomial {
        let modulus = &self.modulus;
        let coefficients = self
            .coefficients
            .iter()
            .enumerate()
            .skip(1)
            .map(|(power, coefficient)| modulus.mul_mod(coefficient, &modulus.reduce(power.into())))
            .collect();
        Polynomial::from_raw_parts(modulus.clone(), coefficients)
    }
}

impl Derivative for Polynomial {
    type Output = Polynomial;
    fn derivative(self) -> Polynomial {
        (&self).derivative()
    }
}

impl<'a> IntoIterator for &'a Polynomial {
    type Item = &'a BigUint;
    type IntoIter = slice::Iter<'a, BigUint>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.coefficients.is_empty() {
            write!(f, "0")
        } else {
            for (power, coefficient) in self.coefficients.iter().enumerate() {
                match power {
                    0 => write!(f, "{}", coefficient)?,
                    1 => write!(f, " + {}*x", coefficient)?,
                    _ => write!(f, " + {}*x^{}", coefficient, power)?,
                }
            }
            Ok(())
        }
    }
}
