use log::debug;

use crate::LazyMapMonoid;
use crate::error::{Result, SegTreeError, check_index, check_range};

const NONE: usize = usize::MAX;

#[derive(Clone, Debug)]
struct Node<A, F> {
    left: usize,
    right: usize,
    agg: A,
    lazy: F,
}

/// Lazy segment tree whose nodes are created the first time a range
/// operation splits them, so `len` may be far larger than memory allows.
///
/// - Ranges are closed: `[l, r]`.
/// - Untouched positions read as `Agg::default()`. A node that was never
///   split stands for a run of such positions, so `Agg::default()` must be a
///   fixed point of `agg_merge` (true for sum, min and max over zeros).
pub struct DynamicSegmentTree<P: LazyMapMonoid> {
    len: usize,
    nodes: Vec<Node<P::Agg, P::Act>>,
}

impl<P> DynamicSegmentTree<P>
where
    P: LazyMapMonoid,
    P::Agg: Default,
{
    pub fn new(len: usize) -> Result<Self> {
        if len == 0 {
            return Err(SegTreeError::InvalidSize);
        }
        debug!("dynamic segment tree: len={len}");
        Ok(Self {
            len,
            nodes: vec![Self::fresh()],
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes allocated so far, the root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn fresh() -> Node<P::Agg, P::Act> {
        Node {
            left: NONE,
            right: NONE,
            agg: P::Agg::default(),
            lazy: P::act_unit(),
        }
    }

    #[inline(always)]
    fn apply(&mut self, k: usize, act: &P::Act, width: usize) {
        let node = &mut self.nodes[k];
        node.agg = P::act_apply_agg(&node.agg, act, width);
        if width > 1 {
            node.lazy = P::act_compose(act, &node.lazy);
        }
    }

    fn push_down(&mut self, k: usize, lo: usize, mid: usize, hi: usize) -> (usize, usize) {
        if self.nodes[k].left == NONE {
            self.nodes[k].left = self.nodes.len();
            self.nodes.push(Self::fresh());
        }
        if self.nodes[k].right == NONE {
            self.nodes[k].right = self.nodes.len();
            self.nodes.push(Self::fresh());
        }
        let (left, right) = (self.nodes[k].left, self.nodes[k].right);

        if !P::act_is_unit(&self.nodes[k].lazy) {
            let act = std::mem::replace(&mut self.nodes[k].lazy, P::act_unit());
            self.apply(left, &act, mid - lo + 1);
            self.apply(right, &act, hi - mid);
        }
        (left, right)
    }

    fn update_rec(&mut self, k: usize, lo: usize, hi: usize, l: usize, r: usize, act: &P::Act) {
        if l <= lo && hi <= r {
            self.apply(k, act, hi - lo + 1);
            return;
        }
        let mid = lo + (hi - lo) / 2;
        let (left, right) = self.push_down(k, lo, mid, hi);
        if l <= mid {
            self.update_rec(left, lo, mid, l, r, act);
        }
        if r > mid {
            self.update_rec(right, mid + 1, hi, l, r, act);
        }
        self.nodes[k].agg = P::agg_merge(&self.nodes[left].agg, &self.nodes[right].agg);
    }

    fn query_rec(&mut self, k: usize, lo: usize, hi: usize, l: usize, r: usize) -> P::Agg {
        if l <= lo && hi <= r {
            return self.nodes[k].agg.clone();
        }
        let mid = lo + (hi - lo) / 2;
        let (left, right) = self.push_down(k, lo, mid, hi);
        let mut acc = P::agg_unit();
        if l <= mid {
            acc = self.query_rec(left, lo, mid, l, r);
        }
        if r > mid {
            let rhs = self.query_rec(right, mid + 1, hi, l, r);
            acc = P::agg_merge(&acc, &rhs);
        }
        acc
    }

    /// Applies `act` to every position in `[l, r]`. `l > r` is a no-op.
    pub fn update(&mut self, l: usize, r: usize, act: P::Act) -> Result<()> {
        check_range(l, r, self.len)?;
        if l > r {
            return Ok(());
        }
        self.update_rec(0, 0, self.len - 1, l, r, &act);
        Ok(())
    }

    /// Folds `[l, r]`. `l > r` yields `agg_unit()`.
    pub fn query(&mut self, l: usize, r: usize) -> Result<P::Agg> {
        check_range(l, r, self.len)?;
        if l > r {
            return Ok(P::agg_unit());
        }
        Ok(self.query_rec(0, 0, self.len - 1, l, r))
    }

    pub fn get(&mut self, index: usize) -> Result<P::Agg> {
        check_index(index, self.len)?;
        Ok(self.query_rec(0, 0, self.len - 1, index, index))
    }

    pub fn all_fold(&self) -> P::Agg {
        self.nodes[0].agg.clone()
    }
}
