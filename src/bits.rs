// SPDX-License-Identifier: MPL-2.0

//! Bit-reversal permutation of power-of-two length slices.
//!
//! The in-place butterfly network consumes its input in bit-reversed index
//! order, so the permutation is applied once up front by
//! [`crate::fft::fft_inplace`].

/// Reverse the `bit_width` low bits of `i`.
///
/// `reverse_index(0b0011, 4) == 0b1100`. The operation is an involution:
/// applying it twice with the same width returns the original index.
///
/// `i` must fit in `bit_width` bits; with `bit_width == 0` the only valid
/// index is 0, which maps to itself.
pub fn reverse_index(i: usize, bit_width: u32) -> usize {
    debug_assert!(bit_width == 0 || i < (1 << bit_width));
    if bit_width == 0 {
        return 0;
    }
    i.reverse_bits() >> (usize::BITS - bit_width)
}

/// Reorder a slice so that element `i` ends up at the bit-reversal of `i`.
///
/// Each pair `(i, reverse_index(i))` is swapped exactly once: iterating over
/// the full range and swapping only when `i < j` visits every pair from its
/// smaller end. Fixed points are left untouched, and a single-element slice
/// is a no-op.
///
/// # Panics
///
/// Panics if the length is not a power of two.
pub fn permute_in_place<T>(data: &mut [T]) {
    let n = data.len();
    assert!(
        n.is_power_of_two(),
        "bit-reversal permutation requires a power-of-two length, got {}",
        n
    );
    let bit_width = n.trailing_zeros();
    for i in 0..n {
        let j = reverse_index(i, bit_width);
        if i < j {
            data.swap(i, j);
        }
    }
}
