use log::debug;

use crate::error::{FenwickError, Result};
use crate::util::lowbit;

/// Two-dimensional binary indexed tree: point add, rectangle sum.
///
/// Flat 1-based storage with stride `cols + 1`.
#[derive(Clone, Debug)]
pub struct Fenwick2d {
    rows: usize,
    cols: usize,
    tree: Vec<i64>,
}

impl Fenwick2d {
    pub fn new(rows: usize, cols: usize) -> Self {
        debug!("fenwick 2d: rows={rows} cols={cols}");
        Self {
            rows,
            cols,
            tree: vec![0; (rows + 1) * (cols + 1)],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn check_cell(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(FenwickError::OutOfBounds2d {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// Sum of the first `i` rows by the first `j` columns.
    fn sum_raw(&self, i: usize, j: usize) -> i64 {
        let stride = self.cols + 1;
        let mut acc = 0_i64;
        let mut x = i;
        while x > 0 {
            let mut y = j;
            while y > 0 {
                acc = acc.wrapping_add(self.tree[x * stride + y]);
                y -= lowbit(y);
            }
            x -= lowbit(x);
        }
        acc
    }

    pub fn add(&mut self, row: usize, col: usize, delta: i64) -> Result<()> {
        self.check_cell(row, col)?;
        let stride = self.cols + 1;
        let mut x = row + 1;
        while x <= self.rows {
            let mut y = col + 1;
            while y <= self.cols {
                let slot = &mut self.tree[x * stride + y];
                *slot = slot.wrapping_add(delta);
                y += lowbit(y);
            }
            x += lowbit(x);
        }
        Ok(())
    }

    pub fn get(&self, row: usize, col: usize) -> Result<i64> {
        self.rect_sum(row, col, row, col)
    }

    pub fn set(&mut self, row: usize, col: usize, value: i64) -> Result<()> {
        let current = self.get(row, col)?;
        self.add(row, col, value.wrapping_sub(current))
    }

    /// Sum of the rectangle `[0, row] x [0, col]`.
    pub fn prefix_sum(&self, row: usize, col: usize) -> Result<i64> {
        self.check_cell(row, col)?;
        Ok(self.sum_raw(row + 1, col + 1))
    }

    /// Sum of the rectangle `[r1, r2] x [c1, c2]`; `0` when it is empty.
    pub fn rect_sum(&self, r1: usize, c1: usize, r2: usize, c2: usize) -> Result<i64> {
        self.check_cell(r1, c1)?;
        self.check_cell(r2, c2)?;
        if r1 > r2 || c1 > c2 {
            return Ok(0);
        }
        Ok(self
            .sum_raw(r2 + 1, c2 + 1)
            .wrapping_sub(self.sum_raw(r1, c2 + 1))
            .wrapping_sub(self.sum_raw(r2 + 1, c1))
            .wrapping_add(self.sum_raw(r1, c1)))
    }
}
