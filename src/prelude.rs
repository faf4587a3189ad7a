// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
pub use crate::{
    error::Error,
    mod_int::{KnownPrime, ModularInteger},
    polynomial::{Polynomial, RootMultiset},
    traits::{Derivative as _, PolynomialEval as _, GCD as _},
};
pub use num_traits::{One as _, Zero as _};
