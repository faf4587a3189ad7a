// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

/// number of bits needed to write `value` in binary; `bit_count(0) == 0`
pub(crate) fn bit_count(value: usize) -> usize {
    (usize::BITS - value.leading_zeros()) as usize
}
