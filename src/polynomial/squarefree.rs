// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

use crate::{
    polynomial::Polynomial,
    traits::{Derivative, GCD},
};
use log::trace;
use num_traits::{ToPrimitive, Zero};

impl Polynomial {
    /// Decompose the monic part of `self` into pairs `(g, e)` of monic, squarefree,
    /// pairwise coprime, non-constant polynomials with `product(g^e) == self.to_monic()`.
    ///
    /// Every irreducible factor of `self` appears in exactly one `g`, paired with its exact
    /// multiplicity, including multiplicities that are a multiple of or larger than the
    /// characteristic. Constants give an empty decomposition.
    pub fn squarefree_decomposition(&self) -> Vec<(Polynomial, usize)> {
        let mut retval = Vec::new();
        if self.degree().unwrap_or(0) == 0 {
            return retval;
        }
        push_squarefree_factors(&mut retval, self.to_monic(), 1);
        retval
    }
    /// `g` with `g^p == self`, where all exponents of `self` are multiples of `p`
    fn pth_root(&self, characteristic: usize) -> Polynomial {
        debug_assert!(self
            .iter()
            .enumerate()
            .all(|(power, coefficient)| power % characteristic == 0 || coefficient.is_zero()));
        // a^p == a for every a in F_p, so only the exponents change
        let coefficients = self.iter().step_by(characteristic).cloned().collect();
        Polynomial::from_raw_parts(self.modulus.clone(), coefficients)
    }
}

/// Yun's algorithm adapted to characteristic `p`: the factors whose multiplicity is not
/// caught by the derivative are left behind as a `p`-th power, whose root is decomposed
/// recursively with every multiplicity scaled by `p`.
fn push_squarefree_factors(retval: &mut Vec<(Polynomial, usize)>, f: Polynomial, scale: usize) {
    debug_assert!(f.is_monic());
    let mut rest = f.gcd(&(&f).derivative());
    let mut squarefree_part = f.exact_div(&rest);
    let mut multiplicity = 1;
    while !squarefree_part.is_one() {
        let next_squarefree_part = squarefree_part.gcd(&rest);
        let factor = squarefree_part.exact_div(&next_squarefree_part);
        if !factor.is_one() {
            trace!(
                "squarefree factor ({}) with multiplicity {}",
                factor,
                multiplicity * scale
            );
            retval.push((factor, multiplicity * scale));
        }
        squarefree_part = next_squarefree_part;
        rest = rest.exact_div(&squarefree_part);
        multiplicity += 1;
    }
    if !rest.is_one() {
        let characteristic = rest
            .modulus
            .to_modulus()
            .to_usize()
            .expect("a p-th power has degree at least p, so p fits in usize");
        let root = rest.pth_root(characteristic);
        push_squarefree_factors(retval, root, scale * characteristic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{mod_int::KnownPrime, polynomial::tests::make_poly};

    fn reconstruct(factors: &[(Polynomial, usize)], modulus: &KnownPrime) -> Polynomial {
        let mut retval = Polynomial::one(modulus.clone());
        for (factor, multiplicity) in factors {
            for _ in 0..*multiplicity {
                retval *= factor;
            }
        }
        retval
    }

    fn check_decomposition(poly: &Polynomial) -> Vec<(Polynomial, usize)> {
        let factors = poly.squarefree_decomposition();
        println!("poly=({})", poly);
        for (factor, multiplicity) in &factors {
            println!("    ({})^{}", factor, multiplicity);
            assert!(factor.is_monic());
            assert!(factor.degree().unwrap_or(0) >= 1);
            assert!(factor.gcd(&factor.derivative()).is_one(), "not squarefree");
        }
        for (index, (a, _)) in factors.iter().enumerate() {
            for (b, _) in &factors[index + 1..] {
                assert!(a.gcd(b).is_one(), "not coprime");
            }
        }
        assert_eq!(reconstruct(&factors, poly.modulus()), poly.to_monic());
        factors
    }

    #[test]
    fn test_constant() {
        assert!(make_poly(&[], 11).squarefree_decomposition().is_empty());
        assert!(make_poly(&[3], 11).squarefree_decomposition().is_empty());
    }

    #[test]
    fn test_cube() {
        let factors = check_decomposition(&make_poly(&[10, 3, 8, 1], 11));
        assert_eq!(factors, vec![(make_poly(&[10, 1], 11), 3)]);
    }

    #[test]
    fn test_mixed() {
        let modulus = KnownPrime::new_unsafe(13u32);
        // 3 (x - 1) (x - 2)^2 (x - 3)^2 (x^2 + 2)^4
        let mut poly = Polynomial::from_roots(vec![1u32, 2, 2, 3, 3], modulus.clone());
        for _ in 0..4 {
            poly *= make_poly(&[2, 0, 1], 13);
        }
        let poly = poly.mul_scalar(&3u32.into());
        let factors = check_decomposition(&poly);
        assert_eq!(
            factors,
            vec![
                (make_poly(&[12, 1], 13), 1),
                (Polynomial::from_roots(vec![2u32, 3], modulus), 2),
                (make_poly(&[2, 0, 1], 13), 4),
            ]
        );
    }

    #[test]
    fn test_multiplicity_at_least_characteristic() {
        let modulus = KnownPrime::new_unsafe(3u32);
        // x^3 (x + 1)^4 (x + 2)^7 over F_3
        let mut roots = vec![0u32; 3];
        roots.extend(vec![2u32; 4]);
        roots.extend(vec![1u32; 7]);
        let poly = Polynomial::from_roots(roots, modulus);
        let mut factors = check_decomposition(&poly);
        factors.sort_by_key(|(_, multiplicity)| *multiplicity);
        assert_eq!(
            factors,
            vec![
                (make_poly(&[0, 1], 3), 3),
                (make_poly(&[1, 1], 3), 4),
                (make_poly(&[2, 1], 3), 7),
            ]
        );
    }

    #[test]
    fn test_pth_power() {
        // (x^2 + 1)^5 = x^10 + 1 over F_5
        let poly = make_poly(&[1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1], 5);
        assert!((&poly).derivative().is_zero());
        let factors = check_decomposition(&poly);
        assert_eq!(factors, vec![(make_poly(&[1, 0, 1], 5), 5)]);
    }

    #[test]
    fn test_characteristic_two() {
        let modulus = KnownPrime::new_unsafe(2u32);
        let poly = Polynomial::from_roots(vec![0u32, 0, 1, 1, 1], modulus);
        let mut factors = check_decomposition(&poly);
        factors.sort_by_key(|(_, multiplicity)| *multiplicity);
        assert_eq!(
            factors,
            vec![(make_poly(&[0, 1], 2), 2), (make_poly(&[1, 1], 2), 3)]
        );
    }
}
