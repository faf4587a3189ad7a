// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

//! Roots of polynomials over prime fields.
//!
//! ```
//! use modular_roots::prelude::*;
//!
//! let modulus = KnownPrime::new(11u32)?;
//! // x^2 - 1
//! let f = Polynomial::from_coefficients(vec![10u32, 0, 1], modulus);
//! let roots = f.roots(true)?;
//! assert_eq!(roots.len(), 2);
//! assert!(roots.roots().iter().all(|(root, _)| f.evaluate(root.value()).is_zero()));
//! # Ok::<(), modular_roots::Error>(())
//! ```

pub mod error;
pub mod mod_int;
pub mod polynomial;
pub mod prelude;
pub mod traits;
mod util;

pub use error::Error;
pub use mod_int::{KnownPrime, ModularInteger};
pub use polynomial::{Polynomial, RootMultiset};
