// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

//! Finding every root of a polynomial over `F_p`.
//!
//! [`Polynomial::roots`] strips the degenerate cases, optionally splits the input into
//! squarefree parts to recover multiplicities, and hands each part to `push_roots`, which
//! separates the roots with Rabin's algorithm using an explicit stack of pending factors.

use crate::{
    error::Error,
    mod_int::{KnownPrime, ModularInteger},
    polynomial::{Polynomial, PreinvModulus},
    traits::GCD,
    util::bit_count,
};
use log::{debug, trace};
use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;
use std::{fmt, mem, slice, vec};

/// Fields with fewer elements than this are searched exhaustively.
pub const TINY_FIELD_BOUND: u32 = 10;

const WORD_BITS: usize = usize::BITS as usize;

/// Number of polynomials the splitting stack can hold.
///
/// Slot `i` only ever holds a polynomial whose degree fits in `WORD_BITS - i` bits, since
/// the smaller half of a split lands one slot higher than what was split.
pub const WORKSPACE_CAPACITY: usize = WORD_BITS + 3;

/// Seed of the generator used by [`Polynomial::roots`].
pub const DEFAULT_SEED: u64 = 0;

/// The roots of a polynomial as monic linear factors `x - r`, each with a positive multiplicity.
#[derive(Clone, PartialEq, Eq, Debug, Default, Hash)]
pub struct RootMultiset {
    factors: Vec<(Polynomial, usize)>,
}

impl RootMultiset {
    pub fn new() -> Self {
        Self::default()
    }
    /// `factor` must be monic with degree 1 and `multiplicity` must be nonzero
    pub fn push(&mut self, factor: Polynomial, multiplicity: usize) {
        debug_assert!(factor.degree() == Some(1) && factor.is_monic());
        debug_assert!(multiplicity > 0);
        self.factors.push((factor, multiplicity));
    }
    /// push the factor `x - root`
    pub(crate) fn push_root(&mut self, root: &BigUint, modulus: &KnownPrime, multiplicity: usize) {
        let factor = Polynomial::from_raw_parts(
            modulus.clone(),
            vec![modulus.neg_mod(root), BigUint::one()],
        );
        self.push(factor, multiplicity);
    }
    /// the number of distinct roots
    pub fn len(&self) -> usize {
        self.factors.len()
    }
    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }
    pub fn iter(&self) -> slice::Iter<(Polynomial, usize)> {
        self.factors.iter()
    }
    pub fn factors(&self) -> &[(Polynomial, usize)] {
        &self.factors
    }
    pub fn into_factors(self) -> Vec<(Polynomial, usize)> {
        self.factors
    }
    /// the roots `r` of the factors `x - r`, with their multiplicities
    pub fn roots(&self) -> Vec<(ModularInteger, usize)> {
        self.factors
            .iter()
            .map(|(factor, multiplicity)| (-factor.coefficient(0), *multiplicity))
            .collect()
    }
    /// the sum of all multiplicities, at most the degree of the polynomial the roots came from
    pub fn total_multiplicity(&self) -> usize {
        self.factors
            .iter()
            .map(|(_, multiplicity)| multiplicity)
            .sum()
    }
}

impl<'a> IntoIterator for &'a RootMultiset {
    type Item = &'a (Polynomial, usize);
    type IntoIter = slice::Iter<'a, (Polynomial, usize)>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for RootMultiset {
    type Item = (Polynomial, usize);
    type IntoIter = vec::IntoIter<(Polynomial, usize)>;
    fn into_iter(self) -> Self::IntoIter {
        self.factors.into_iter()
    }
}

impl fmt::Display for RootMultiset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.factors.is_empty() {
            return write!(f, "1");
        }
        for (index, (factor, multiplicity)) in self.factors.iter().enumerate() {
            if index != 0 {
                write!(f, " * ")?;
            }
            write!(f, "({})", factor)?;
            if *multiplicity != 1 {
                write!(f, "^{}", multiplicity)?;
            }
        }
        Ok(())
    }
}

/// The explicit stack of factors still waiting to be split.
#[derive(Debug)]
pub(crate) struct Workspace {
    slots: Vec<Polynomial>,
}

impl Workspace {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::with_capacity(WORKSPACE_CAPACITY),
        }
    }
    fn fits_slot(slot: usize, poly: &Polynomial) -> bool {
        WORD_BITS
            .checked_sub(slot)
            .map_or(false, |bits| bit_count(poly.degree().unwrap_or(0)) <= bits)
    }
    pub(crate) fn push(&mut self, poly: Polynomial) {
        let slot = self.slots.len();
        debug_assert!(slot < WORKSPACE_CAPACITY, "workspace overflow");
        debug_assert!(
            Self::fits_slot(slot, &poly),
            "degree {:?} too big for workspace slot {}",
            poly.degree(),
            slot
        );
        self.slots.push(poly);
    }
    pub(crate) fn pop(&mut self) -> Option<Polynomial> {
        self.slots.pop()
    }
    pub(crate) fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// append the root of `f`, which has degree at most 1, if it has one
fn push_linear_root(output: &mut RootMultiset, f: Polynomial, multiplicity: usize) {
    match f.degree() {
        Some(1) => output.push(f.into_monic(), multiplicity),
        Some(0) => {}
        _ => unreachable!("expected degree at most 1, got ({})", f),
    }
}

/// Appends every root of `f` to `output` with `multiplicity`.
///
/// `f` must be monic with degree at least 1; `workspace` must be empty and is left empty.
fn push_roots<R: Rng + ?Sized>(
    output: &mut RootMultiset,
    mut f: Polynomial,
    multiplicity: usize,
    half_exponent: &BigUint,
    workspace: &mut Workspace,
    rng: &mut R,
) {
    debug_assert!(f.is_monic() && f.degree().unwrap_or(0) >= 1);
    debug_assert!(workspace.is_empty());
    let modulus = f.modulus().clone();
    let small_modulus = modulus
        .to_modulus()
        .to_u32()
        .filter(|&p| p < TINY_FIELD_BOUND);
    if let Some(p) = small_modulus {
        trace!("searching all of F_{} for roots of ({})", p, f);
        for root in (0..p).map(BigUint::from) {
            if f.evaluate(&root).is_zero() {
                output.push_root(&root, &modulus, multiplicity);
            }
        }
        return;
    }
    if let Some(zero_multiplicity) = f.lowest_nonzero_power().filter(|&power| power > 0) {
        trace!("stripping x^{} from ({})", zero_multiplicity, f);
        output.push_root(&BigUint::zero(), &modulus, multiplicity);
        f.shift_right_assign(zero_multiplicity);
    }
    if f.degree().unwrap_or(0) <= 1 {
        push_linear_root(output, f, multiplicity);
        return;
    }

    // every nonzero r has r^((p - 1) / 2) == 1 or -1, so the roots of f split between a and b
    let preinv = PreinvModulus::new(&f);
    let power = preinv.pow(&Polynomial::x(modulus.clone()), half_exponent);
    let one = Polynomial::one(modulus);
    let mut a = (&power - &one).gcd(&f);
    let mut b = (&power + &one).gcd(&f);
    drop(f);
    if a.len() < b.len() {
        mem::swap(&mut a, &mut b);
    }
    trace!("initial split: ({}) and ({})", a, b);
    workspace.push(a);
    if b.degree().unwrap_or(0) > 0 {
        workspace.push(b);
    }
    while let Some(f) = workspace.pop() {
        if f.degree().unwrap_or(0) <= 1 {
            push_linear_root(output, f, multiplicity);
            continue;
        }
        let (c, d) = f.split_rabin(half_exponent, rng);
        workspace.push(c);
        workspace.push(d);
    }
}

impl Polynomial {
    /// All roots of `self` in `F_p`, found with a generator seeded with [`DEFAULT_SEED`],
    /// so the order of the result is reproducible.
    ///
    /// The generator is reseeded on every call, so all calls replay the same random
    /// sequence. Pass your own generator to [`roots_with_rng`](Self::roots_with_rng) when
    /// calls need independent randomness.
    pub fn roots(&self, with_multiplicity: bool) -> Result<RootMultiset, Error> {
        let mut rng = Pcg64Mcg::seed_from_u64(DEFAULT_SEED);
        self.roots_with_rng(with_multiplicity, &mut rng)
    }

    /// All roots of `self` in `F_p`, as monic linear factors.
    ///
    /// When `with_multiplicity` is set each root carries its exact multiplicity, otherwise
    /// every multiplicity is 1. The modulus must be prime, which is only checked in debug
    /// builds.
    ///
    /// # Errors
    ///
    /// [`Error::ZeroPolynomial`] if `self` is zero, since every element is a root of it.
    pub fn roots_with_rng<R: Rng + ?Sized>(
        &self,
        with_multiplicity: bool,
        rng: &mut R,
    ) -> Result<RootMultiset, Error> {
        debug_assert!(
            crate::mod_int::is_probable_prime(self.modulus.to_modulus()),
            "modulus {} is not prime",
            self.modulus
        );
        let mut output = RootMultiset::new();
        match self.degree() {
            None => return Err(Error::ZeroPolynomial),
            Some(0) => return Ok(output),
            Some(1) => {
                output.push(self.to_monic(), 1);
                return Ok(output);
            }
            Some(_) => {}
        }
        debug!(
            "finding roots of degree {} polynomial over F_{}, with_multiplicity={}",
            self.len() - 1,
            self.modulus,
            with_multiplicity
        );
        let half_exponent = self.modulus.half_exponent();
        let mut workspace = Workspace::new();
        if with_multiplicity {
            for (factor, multiplicity) in self.squarefree_decomposition() {
                debug!(
                    "squarefree factor ({}) with multiplicity {}",
                    factor, multiplicity
                );
                push_roots(
                    &mut output,
                    factor,
                    multiplicity,
                    &half_exponent,
                    &mut workspace,
                    rng,
                );
            }
        } else {
            push_roots(
                &mut output,
                self.to_monic(),
                1,
                &half_exponent,
                &mut workspace,
                rng,
            );
        }
        debug!("found {} distinct root(s)", output.len());
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polynomial::tests::make_poly;
    use std::collections::HashMap;

    fn root_map(roots: &RootMultiset) -> HashMap<BigUint, usize> {
        let mut retval = HashMap::new();
        for (root, multiplicity) in roots.roots() {
            let old = retval.insert(root.into_value(), multiplicity);
            assert!(old.is_none(), "duplicate root in {}", roots);
        }
        retval
    }

    fn expected_map(expected: &[(u32, usize)]) -> HashMap<BigUint, usize> {
        expected
            .iter()
            .map(|&(root, multiplicity)| (BigUint::from(root), multiplicity))
            .collect()
    }

    fn check_roots(poly: &Polynomial, with_multiplicity: bool, expected: &[(u32, usize)]) {
        println!("poly=({})  with_multiplicity={}", poly, with_multiplicity);
        let roots = poly.roots(with_multiplicity).unwrap();
        println!("roots: {}", roots);
        for (factor, multiplicity) in &roots {
            assert!(factor.is_monic());
            assert_eq!(factor.degree(), Some(1));
            assert!(*multiplicity > 0);
        }
        assert_eq!(root_map(&roots), expected_map(expected));
    }

    #[test]
    fn test_zero_polynomial() {
        assert_eq!(make_poly(&[], 11).roots(true), Err(Error::ZeroPolynomial));
        assert_eq!(make_poly(&[], 11).roots(false), Err(Error::ZeroPolynomial));
        assert_eq!(
            make_poly(&[0, 0], 3).roots(false),
            Err(Error::ZeroPolynomial)
        );
    }

    #[test]
    fn test_constant() {
        check_roots(&make_poly(&[5], 11), true, &[]);
        check_roots(&make_poly(&[5], 11), false, &[]);
        check_roots(&make_poly(&[1], 2), false, &[]);
    }

    #[test]
    fn test_linear() {
        // 3x + 4 == 3(x - 6) over F_11
        check_roots(&make_poly(&[4, 3], 11), true, &[(6, 1)]);
        check_roots(&make_poly(&[4, 3], 11), false, &[(6, 1)]);
        let roots = make_poly(&[4, 3], 11).roots(false).unwrap();
        assert_eq!(roots.factors(), &[(make_poly(&[5, 1], 11), 1)]);
    }

    #[test]
    fn test_difference_of_squares() {
        let poly = make_poly(&[10, 0, 1], 11);
        check_roots(&poly, true, &[(1, 1), (10, 1)]);
        check_roots(&poly, false, &[(1, 1), (10, 1)]);
    }

    #[test]
    fn test_repeated_root() {
        // (x - 1)^3
        let poly = make_poly(&[10, 3, 8, 1], 11);
        check_roots(&poly, true, &[(1, 3)]);
        check_roots(&poly, false, &[(1, 1)]);
    }

    #[test]
    fn test_x() {
        let poly = make_poly(&[0, 1], 13);
        check_roots(&poly, true, &[(0, 1)]);
        check_roots(&poly, false, &[(0, 1)]);
    }

    #[test]
    fn test_no_roots() {
        check_roots(&make_poly(&[1, 0, 1], 7), true, &[]);
        check_roots(&make_poly(&[1, 0, 1], 7), false, &[]);
        // x^2 + 1 has no roots over F_19 either, and 19 is past the exhaustive search
        check_roots(&make_poly(&[1, 0, 1], 19), true, &[]);
        check_roots(&make_poly(&[1, 0, 1], 19), false, &[]);
    }

    #[test]
    fn test_zero_root_stripping() {
        let modulus = KnownPrime::new_unsafe(101u32);
        let poly = Polynomial::from_roots(vec![0u32, 0, 0, 0, 5, 17, 17], modulus)
            * make_poly(&[2, 0, 1], 101);
        check_roots(&poly, true, &[(0, 4), (5, 1), (17, 2)]);
        check_roots(&poly, false, &[(0, 1), (5, 1), (17, 1)]);
        // all roots zero
        check_roots(&make_poly(&[0, 0, 0, 7], 101), true, &[(0, 3)]);
        check_roots(&make_poly(&[0, 0, 0, 7], 101), false, &[(0, 1)]);
        // only the zero root is left after stripping
        check_roots(&make_poly(&[0, 0, 1, 0, 1], 19), false, &[(0, 1)]);
    }

    #[test]
    fn test_tiny_fields() {
        for &p in [2u32, 3, 5, 7].iter() {
            let modulus = KnownPrime::new_unsafe(p);
            let mut rng = Pcg64Mcg::seed_from_u64(0);
            for _ in 0..50 {
                let degree = rng.gen_range(1..9usize);
                let coefficients: Vec<u32> = (0..=degree).map(|_| rng.gen_range(0..p)).collect();
                let poly = Polynomial::from_coefficients(coefficients, modulus.clone());
                if poly.is_zero() {
                    continue;
                }
                let expected: Vec<(u32, usize)> = (0..p)
                    .filter(|&r| poly.evaluate(&r.into()).is_zero())
                    .map(|r| (r, 1))
                    .collect();
                check_roots(&poly, false, &expected);
                let roots = poly.roots(true).unwrap();
                assert_eq!(roots.len(), expected.len());
                assert!(roots.total_multiplicity() <= poly.len() - 1);
            }
        }
    }

    #[test]
    fn test_tiny_field_multiplicity() {
        let modulus = KnownPrime::new_unsafe(7u32);
        let poly = Polynomial::from_roots(vec![1u32, 1, 1, 1, 1, 1, 1, 1, 1, 3, 3, 6], modulus);
        check_roots(&poly, true, &[(1, 9), (3, 2), (6, 1)]);
        check_roots(&poly, false, &[(1, 1), (3, 1), (6, 1)]);
    }

    #[test]
    fn test_multiplicity_at_least_characteristic() {
        let modulus = KnownPrime::new_unsafe(11u32);
        let mut roots = vec![2u32; 11];
        roots.extend(vec![9u32; 25]);
        roots.push(4);
        let poly = Polynomial::from_roots(roots, modulus);
        check_roots(&poly, true, &[(2, 11), (9, 25), (4, 1)]);
        check_roots(&poly, false, &[(2, 1), (9, 1), (4, 1)]);
    }

    #[test]
    fn test_all_elements() {
        // x^p - x has every element of F_p as a root
        let p = 31u32;
        let mut coefficients = vec![0u32; p as usize + 1];
        coefficients[1] = p - 1;
        coefficients[p as usize] = 1;
        let poly = make_poly(&coefficients, p);
        let expected: Vec<(u32, usize)> = (0..p).map(|r| (r, 1)).collect();
        check_roots(&poly, true, &expected);
        check_roots(&poly, false, &expected);
    }

    #[test]
    fn test_large_prime() {
        // 2^127 - 1
        let modulus = KnownPrime::new_unsafe((BigUint::one() << 127usize) - 1u32);
        let roots: Vec<BigUint> = vec![
            BigUint::from(3u32),
            BigUint::one() << 100usize,
            BigUint::one() << 100usize,
            (BigUint::one() << 126usize) + 1u32,
        ];
        let poly = Polynomial::from_roots(roots.clone(), modulus.clone())
            * Polynomial::from_coefficients(vec![1u32, 0, 1], modulus.clone());
        let found = poly.roots(true).unwrap();
        println!("roots: {}", found);
        let found: HashMap<BigUint, usize> = found
            .roots()
            .into_iter()
            .map(|(root, multiplicity)| (root.into_value(), multiplicity))
            .collect();
        let mut expected = HashMap::new();
        for root in roots {
            *expected.entry(root).or_insert(0) += 1;
        }
        // -1 is not a square mod 2^127 - 1, so x^2 + 1 contributes nothing
        assert_eq!(found, expected);
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let modulus = KnownPrime::new_unsafe(1009u32);
        let poly = Polynomial::from_roots((1..40u32).map(|r| r * r), modulus);
        let first = poly.roots(false).unwrap();
        assert_eq!(first, poly.roots(false).unwrap());
        let mut rng = Pcg64Mcg::seed_from_u64(12345);
        let other = poly.roots_with_rng(false, &mut rng).unwrap();
        assert_eq!(root_map(&first), root_map(&other));
    }

    #[test]
    fn test_workspace_slots() {
        let modulus = KnownPrime::new_unsafe(11u32);
        let poly = Polynomial::from_roots(vec![1u32, 2, 3], modulus);
        assert!(Workspace::fits_slot(0, &poly));
        assert!(Workspace::fits_slot(WORD_BITS - 2, &poly));
        assert!(!Workspace::fits_slot(WORD_BITS - 1, &poly));
        assert!(!Workspace::fits_slot(WORKSPACE_CAPACITY, &poly));
        let mut workspace = Workspace::new();
        assert!(workspace.is_empty());
        workspace.push(poly.clone());
        assert_eq!(workspace.pop(), Some(poly));
        assert!(workspace.pop().is_none());
    }

    #[test]
    fn test_display() {
        let roots = make_poly(&[10, 3, 8, 1], 11).roots(true).unwrap();
        assert_eq!(roots.to_string(), "(10 + 1*x)^3");
        assert_eq!(RootMultiset::new().to_string(), "1");
        let roots = make_poly(&[0, 4, 1], 11).roots(false).unwrap();
        assert_eq!(roots.len(), 2);
        assert_eq!(roots.total_multiplicity(), 2);
        assert!(roots.to_string().contains(" * "));
    }
}
