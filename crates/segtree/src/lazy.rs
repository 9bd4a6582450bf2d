use std::fmt;

use log::{debug, trace};

use crate::LazyMapMonoid;
use crate::error::{Result, SegTreeError, check_index, check_range};
use crate::util::{clipped_width, floor_log2_nonzero};

/// Segment tree with lazy propagation over a flat power-of-two layout.
///
/// - Ranges are closed: `[l, r]`.
/// - `tree[1]` is the root, node `k` has children `2k` and `2k + 1`, leaf of
///   position `i` is `size + i`. Leaves past `len` are padding and always
///   hold `agg_unit()`.
/// - `lazy[k]` is the action pending on the children of internal node `k`;
///   `tree[k]` already reflects it.
pub struct LazySegmentTree<P: LazyMapMonoid> {
    len: usize,
    size: usize,
    height: u32,
    tree: Vec<P::Agg>,
    lazy: Vec<P::Act>,
}

impl<P: LazyMapMonoid> LazySegmentTree<P> {
    /// Builds a tree of `len` positions, each holding `Agg::default()`.
    pub fn new(len: usize) -> Result<Self>
    where
        P::Agg: Default,
    {
        Self::from_values(&vec![P::Agg::default(); len])
    }

    pub fn from_values(values: &[P::Agg]) -> Result<Self> {
        let len = values.len();
        if len == 0 {
            return Err(SegTreeError::InvalidSize);
        }

        let size = len.next_power_of_two();
        let height = size.trailing_zeros();
        let mut tree = vec![P::agg_unit(); 2 * size];
        tree[size..size + len].clone_from_slice(values);
        for k in (1..size).rev() {
            tree[k] = P::agg_merge(&tree[2 * k], &tree[2 * k + 1]);
        }
        let lazy = vec![P::act_unit(); size];

        debug!(
            "lazy segment tree: len={len} size={size} height={height} nodes={}",
            tree.len() - 1
        );

        Ok(Self {
            len,
            size,
            height,
            tree,
            lazy,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`: construction rejects zero-length trees.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of real positions covered by node `k`.
    #[inline(always)]
    fn node_len(&self, k: usize) -> usize {
        let shift = self.height - floor_log2_nonzero(k);
        let start = (k << shift) - self.size;
        clipped_width(start, 1 << shift, self.len)
    }

    #[inline(always)]
    fn apply(&mut self, k: usize, act: &P::Act) {
        let len = self.node_len(k);
        if len == 0 {
            return;
        }
        self.tree[k] = P::act_apply_agg(&self.tree[k], act, len);
        if k < self.size {
            self.lazy[k] = P::act_compose(act, &self.lazy[k]);
        }
    }

    /// Recomputes every ancestor of leaf `k`, bottom-up.
    fn pull(&mut self, mut k: usize) {
        while k > 1 {
            k >>= 1;
            let merged = P::agg_merge(&self.tree[2 * k], &self.tree[2 * k + 1]);
            self.tree[k] = P::act_apply_agg(&merged, &self.lazy[k], self.node_len(k));
        }
    }

    /// Flushes pending actions on the root-to-leaf path of `k`, top-down.
    fn push(&mut self, k: usize) {
        for h in (1..=self.height).rev() {
            let y = k >> h;
            if P::act_is_unit(&self.lazy[y]) {
                continue;
            }
            let act = std::mem::replace(&mut self.lazy[y], P::act_unit());
            self.apply(2 * y, &act);
            self.apply(2 * y + 1, &act);
        }
    }

    /// Applies `act` to every position in `[l, r]`. `l > r` is a no-op.
    pub fn update(&mut self, l: usize, r: usize, act: P::Act) -> Result<()> {
        check_range(l, r, self.len)?;
        if l > r {
            return Ok(());
        }

        let l0 = l + self.size;
        let r0 = r + self.size;
        self.push(l0);
        self.push(r0);

        let mut l = l0;
        let mut r = r0;
        while l <= r {
            if (l & 1) == 1 {
                trace!("update: apply node {l} ({} positions)", self.node_len(l));
                self.apply(l, &act);
                l += 1;
            }
            if (r & 1) == 0 {
                trace!("update: apply node {r} ({} positions)", self.node_len(r));
                self.apply(r, &act);
                r -= 1;
            }
            l >>= 1;
            r >>= 1;
        }

        self.pull(l0);
        self.pull(r0);
        Ok(())
    }

    /// Folds `[l, r]`. `l > r` yields `agg_unit()`.
    pub fn query(&mut self, l: usize, r: usize) -> Result<P::Agg> {
        check_range(l, r, self.len)?;
        if l > r {
            return Ok(P::agg_unit());
        }

        let mut l = l + self.size;
        let mut r = r + self.size;
        self.push(l);
        self.push(r);

        let mut left = P::agg_unit();
        let mut right = P::agg_unit();
        while l <= r {
            if (l & 1) == 1 {
                left = P::agg_merge(&left, &self.tree[l]);
                l += 1;
            }
            if (r & 1) == 0 {
                right = P::agg_merge(&self.tree[r], &right);
                r -= 1;
            }
            l >>= 1;
            r >>= 1;
        }

        Ok(P::agg_merge(&left, &right))
    }

    pub fn get(&mut self, index: usize) -> Result<P::Agg> {
        check_index(index, self.len)?;
        let k = index + self.size;
        self.push(k);
        Ok(self.tree[k].clone())
    }

    /// Overwrites a single position, discarding any action pending on it.
    pub fn set(&mut self, index: usize, value: P::Agg) -> Result<()> {
        check_index(index, self.len)?;
        let k = index + self.size;
        self.push(k);
        self.tree[k] = value;
        self.pull(k);
        Ok(())
    }

    pub fn all_fold(&self) -> P::Agg {
        self.tree[1].clone()
    }

    /// Flushes every pending action and returns the leaf values.
    pub fn to_vec(&mut self) -> Vec<P::Agg> {
        for k in 1..self.size {
            if P::act_is_unit(&self.lazy[k]) {
                continue;
            }
            let act = std::mem::replace(&mut self.lazy[k], P::act_unit());
            self.apply(2 * k, &act);
            self.apply(2 * k + 1, &act);
        }
        self.tree[self.size..self.size + self.len].to_vec()
    }
}

impl<P: LazyMapMonoid> Clone for LazySegmentTree<P> {
    fn clone(&self) -> Self {
        Self {
            len: self.len,
            size: self.size,
            height: self.height,
            tree: self.tree.clone(),
            lazy: self.lazy.clone(),
        }
    }
}

impl<P: LazyMapMonoid> fmt::Debug for LazySegmentTree<P>
where
    P::Agg: fmt::Debug,
    P::Act: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazySegmentTree")
            .field("len", &self.len)
            .field("size", &self.size)
            .field("tree", &self.tree)
            .field("lazy", &self.lazy)
            .finish()
    }
}
