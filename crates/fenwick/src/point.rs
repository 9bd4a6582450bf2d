use log::debug;

use crate::error::{Result, check_index};
use crate::util::lowbit;

/// Binary indexed tree: point add, prefix and range sums.
///
/// Positions are 0-based, ranges closed. `tree` is 1-based internally, so
/// `tree[0]` is unused.
#[derive(Clone, Debug)]
pub struct FenwickTree {
    tree: Vec<i64>,
}

impl FenwickTree {
    pub fn new(len: usize) -> Self {
        debug!("fenwick tree: len={len}");
        Self {
            tree: vec![0; len + 1],
        }
    }

    pub fn from_values(values: &[i64]) -> Self {
        let n = values.len();
        let mut tree = vec![0_i64; n + 1];
        tree[1..].copy_from_slice(values);
        for i in 1..=n {
            let parent = i + lowbit(i);
            if parent <= n {
                tree[parent] = tree[parent].wrapping_add(tree[i]);
            }
        }
        debug!("fenwick tree: len={n} (built from values)");
        Self { tree }
    }

    pub fn len(&self) -> usize {
        self.tree.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub(crate) fn add_raw(&mut self, mut i: usize, delta: i64) {
        let n = self.len();
        while i <= n {
            self.tree[i] = self.tree[i].wrapping_add(delta);
            i += lowbit(i);
        }
    }

    /// Sum of the first `i` positions.
    #[inline]
    pub(crate) fn sum_raw(&self, mut i: usize) -> i64 {
        let mut acc = 0_i64;
        while i > 0 {
            acc = acc.wrapping_add(self.tree[i]);
            i -= lowbit(i);
        }
        acc
    }

    pub fn add(&mut self, index: usize, delta: i64) -> Result<()> {
        check_index(index, self.len())?;
        self.add_raw(index + 1, delta);
        Ok(())
    }

    pub fn set(&mut self, index: usize, value: i64) -> Result<()> {
        let current = self.get(index)?;
        self.add_raw(index + 1, value.wrapping_sub(current));
        Ok(())
    }

    pub fn get(&self, index: usize) -> Result<i64> {
        self.range_sum(index, index)
    }

    /// Sum of `[0, index]`.
    pub fn prefix_sum(&self, index: usize) -> Result<i64> {
        check_index(index, self.len())?;
        Ok(self.sum_raw(index + 1))
    }

    /// Sum of `[l, r]`; `0` when `l > r`.
    pub fn range_sum(&self, l: usize, r: usize) -> Result<i64> {
        check_index(l, self.len())?;
        check_index(r, self.len())?;
        if l > r {
            return Ok(0);
        }
        Ok(self.sum_raw(r + 1).wrapping_sub(self.sum_raw(l)))
    }
}
