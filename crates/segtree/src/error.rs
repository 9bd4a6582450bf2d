use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SegTreeError {
    #[error("segment tree must cover at least one position")]
    InvalidSize,
    #[error("range [{l}, {r}] is out of bounds for length {len}")]
    InvalidRange { l: usize, r: usize, len: usize },
    #[error("index {index} is out of bounds for length {len}")]
    InvalidIndex { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, SegTreeError>;

#[inline]
pub(crate) fn check_range(l: usize, r: usize, len: usize) -> Result<()> {
    if l >= len || r >= len {
        return Err(SegTreeError::InvalidRange { l, r, len });
    }
    Ok(())
}

#[inline]
pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index >= len {
        return Err(SegTreeError::InvalidIndex { index, len });
    }
    Ok(())
}
