use crate::FenwickTree;
use crate::error::{Result, check_index};

/// Range add, point get, over a difference array.
#[derive(Clone, Debug)]
pub struct RangeAddFenwick {
    diff: FenwickTree,
}

impl RangeAddFenwick {
    pub fn new(len: usize) -> Self {
        Self {
            diff: FenwickTree::new(len),
        }
    }

    pub fn from_values(values: &[i64]) -> Self {
        Self {
            diff: FenwickTree::from_values(&differences(values)),
        }
    }

    pub fn len(&self) -> usize {
        self.diff.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diff.is_empty()
    }

    pub fn add(&mut self, index: usize, delta: i64) -> Result<()> {
        self.range_add(index, index, delta)
    }

    /// Adds `delta` to every position in `[l, r]`; no-op when `l > r`.
    pub fn range_add(&mut self, l: usize, r: usize, delta: i64) -> Result<()> {
        check_index(l, self.len())?;
        check_index(r, self.len())?;
        if l > r {
            return Ok(());
        }
        self.diff.add_raw(l + 1, delta);
        self.diff.add_raw(r + 2, delta.wrapping_neg());
        Ok(())
    }

    pub fn get(&self, index: usize) -> Result<i64> {
        self.diff.prefix_sum(index)
    }

    pub fn set(&mut self, index: usize, value: i64) -> Result<()> {
        let current = self.get(index)?;
        self.add(index, value.wrapping_sub(current))
    }
}

/// Range add, range sum, over two difference arrays.
///
/// With `d` the difference array, the prefix sum of `[0, i]` is
/// `(i + 1) * Σ d[j] - Σ j * d[j]` over `j <= i`.
#[derive(Clone, Debug)]
pub struct RangeAddSumFenwick {
    diff: FenwickTree,
    weighted: FenwickTree,
}

impl RangeAddSumFenwick {
    pub fn new(len: usize) -> Self {
        Self {
            diff: FenwickTree::new(len),
            weighted: FenwickTree::new(len),
        }
    }

    pub fn from_values(values: &[i64]) -> Self {
        let diff = differences(values);
        let weighted = diff
            .iter()
            .enumerate()
            .map(|(j, &d)| d.wrapping_mul(j as i64))
            .collect::<Vec<_>>();
        Self {
            diff: FenwickTree::from_values(&diff),
            weighted: FenwickTree::from_values(&weighted),
        }
    }

    pub fn len(&self) -> usize {
        self.diff.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diff.is_empty()
    }

    #[inline]
    fn add_diff(&mut self, j: usize, delta: i64) {
        self.diff.add_raw(j + 1, delta);
        self.weighted.add_raw(j + 1, delta.wrapping_mul(j as i64));
    }

    /// Sum of the first `i` positions.
    #[inline]
    fn sum_raw(&self, i: usize) -> i64 {
        (i as i64)
            .wrapping_mul(self.diff.sum_raw(i))
            .wrapping_sub(self.weighted.sum_raw(i))
    }

    pub fn add(&mut self, index: usize, delta: i64) -> Result<()> {
        self.range_add(index, index, delta)
    }

    /// Adds `delta` to every position in `[l, r]`; no-op when `l > r`.
    pub fn range_add(&mut self, l: usize, r: usize, delta: i64) -> Result<()> {
        check_index(l, self.len())?;
        check_index(r, self.len())?;
        if l > r {
            return Ok(());
        }
        self.add_diff(l, delta);
        if r + 1 < self.len() {
            self.add_diff(r + 1, delta.wrapping_neg());
        }
        Ok(())
    }

    pub fn get(&self, index: usize) -> Result<i64> {
        self.range_sum(index, index)
    }

    pub fn set(&mut self, index: usize, value: i64) -> Result<()> {
        let current = self.get(index)?;
        self.add(index, value.wrapping_sub(current))
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

fn differences(values: &[i64]) -> Vec<i64> {
    let mut diff = Vec::with_capacity(values.len());
    let mut prev = 0_i64;
    for &v in values {
        diff.push(v.wrapping_sub(prev));
        prev = v;
    }
    diff
}
