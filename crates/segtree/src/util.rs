#[inline(always)]
pub(crate) fn floor_log2_nonzero(x: usize) -> u32 {
    debug_assert!(x > 0);
    usize::BITS - 1 - x.leading_zeros()
}

/// Number of positions in `[start, start + width)` that lie below `len`.
#[inline(always)]
pub(crate) fn clipped_width(start: usize, width: usize, len: usize) -> usize {
    (start + width).min(len).saturating_sub(start)
}
