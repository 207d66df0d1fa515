//! Row-parallel iteration helper.
//!
//! The `parallel` feature swaps the sequential row loop for a rayon
//! parallel one. Callers must produce identical results regardless of
//! row visitation order.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Runs `f(row_index, row_bytes)` over every row of an output buffer.
#[cfg(feature = "parallel")]
pub(crate) fn for_each_row(data: &mut [u8], row_bytes: usize, f: impl Fn(usize, &mut [u8]) + Send + Sync) {
    data.par_chunks_mut(row_bytes)
        .enumerate()
        .for_each(|(y, row)| f(y, row));
}

/// Runs `f(row_index, row_bytes)` over every row of an output buffer.
#[cfg(not(feature = "parallel"))]
pub(crate) fn for_each_row(data: &mut [u8], row_bytes: usize, f: impl Fn(usize, &mut [u8]) + Send + Sync) {
    data.chunks_mut(row_bytes)
        .enumerate()
        .for_each(|(y, row)| f(y, row));
}
