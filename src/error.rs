// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use num_bigint::BigUint;
use std::io;
use thiserror::Error;

#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum Error {
    /// root finding was asked for the roots of the zero polynomial,
    /// which has every field element as a root
    #[error("input polynomial is zero")]
    ZeroPolynomial,
    #[error("modulus {0} is not prime")]
    NotPrime(BigUint),
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        Self::new(io::ErrorKind::InvalidInput, err)
    }
}
