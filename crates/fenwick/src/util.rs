#[inline(always)]
pub(crate) fn lowbit(i: usize) -> usize {
    i & i.wrapping_neg()
}
