//! Policies (aggregate monoid + lazy action) for the segment trees.
//!
//! A policy is an uninhabited type; every range-update/range-query flavour is
//! a separate instantiation of the same tree.

/// A monoid over `Agg` with a lazy action `Act`.
///
/// Implementations must ensure:
/// - `agg_unit()` is neutral for `agg_merge`, and `agg_merge` is associative.
/// - `act_unit()` is neutral for `act_compose` and `act_apply_agg`.
/// - `act_apply_agg(merge(a, b), f, la + lb) == merge(act_apply_agg(a, f, la), act_apply_agg(b, f, lb))`.
pub trait LazyMapMonoid {
    type Agg: Clone;
    type Act: Clone + PartialEq;

    fn agg_unit() -> Self::Agg;

    /// Merge aggregates of two adjacent ranges, `left` first.
    fn agg_merge(left: &Self::Agg, right: &Self::Agg) -> Self::Agg;

    fn act_unit() -> Self::Act;

    /// Compose actions as `new ∘ old` (apply `old` first, then `new`).
    fn act_compose(new: &Self::Act, old: &Self::Act) -> Self::Act;

    /// Apply `act` to an aggregate of length `len` (number of affected positions).
    fn act_apply_agg(agg: &Self::Agg, act: &Self::Act, len: usize) -> Self::Agg;

    #[inline(always)]
    fn act_is_unit(act: &Self::Act) -> bool {
        *act == Self::act_unit()
    }
}

#[derive(Clone, Copy, Debug)]
pub enum RangeSumRangeAdd {}

impl LazyMapMonoid for RangeSumRangeAdd {
    type Agg = i64;
    type Act = i64;

    #[inline(always)]
    fn agg_unit() -> Self::Agg {
        0
    }

    #[inline(always)]
    fn agg_merge(left: &Self::Agg, right: &Self::Agg) -> Self::Agg {
        left.wrapping_add(*right)
    }

    #[inline(always)]
    fn act_unit() -> Self::Act {
        0
    }

    #[inline(always)]
    fn act_compose(new: &Self::Act, old: &Self::Act) -> Self::Act {
        new.wrapping_add(*old)
    }

    #[inline(always)]
    fn act_apply_agg(agg: &Self::Agg, act: &Self::Act, len: usize) -> Self::Agg {
        let len = len as i64;
        agg.wrapping_add(act.wrapping_mul(len))
    }
}

/// Range add, range min.
///
/// Adds wrap, so composition stays exact; answers are meaningful while no
/// position's true value leaves the `i64` range.
#[derive(Clone, Copy, Debug)]
pub enum RangeMinRangeAdd {}

impl LazyMapMonoid for RangeMinRangeAdd {
    type Agg = i64;
    type Act = i64;

    #[inline(always)]
    fn agg_unit() -> Self::Agg {
        i64::MAX
    }

    #[inline(always)]
    fn agg_merge(left: &Self::Agg, right: &Self::Agg) -> Self::Agg {
        *left.min(right)
    }

    #[inline(always)]
    fn act_unit() -> Self::Act {
        0
    }

    #[inline(always)]
    fn act_compose(new: &Self::Act, old: &Self::Act) -> Self::Act {
        new.wrapping_add(*old)
    }

    #[inline(always)]
    fn act_apply_agg(agg: &Self::Agg, act: &Self::Act, _len: usize) -> Self::Agg {
        agg.wrapping_add(*act)
    }
}

/// Range add, range max. Same overflow contract as [`RangeMinRangeAdd`].
#[derive(Clone, Copy, Debug)]
pub enum RangeMaxRangeAdd {}

impl LazyMapMonoid for RangeMaxRangeAdd {
    type Agg = i64;
    type Act = i64;

    #[inline(always)]
    fn agg_unit() -> Self::Agg {
        i64::MIN
    }

    #[inline(always)]
    fn agg_merge(left: &Self::Agg, right: &Self::Agg) -> Self::Agg {
        *left.max(right)
    }

    #[inline(always)]
    fn act_unit() -> Self::Act {
        0
    }

    #[inline(always)]
    fn act_compose(new: &Self::Act, old: &Self::Act) -> Self::Act {
        new.wrapping_add(*old)
    }

    #[inline(always)]
    fn act_apply_agg(agg: &Self::Agg, act: &Self::Act, _len: usize) -> Self::Agg {
        agg.wrapping_add(*act)
    }
}

/// Range assignment; `None` is the unit action.
#[derive(Clone, Copy, Debug)]
pub enum RangeSumRangeAssign {}

impl LazyMapMonoid for RangeSumRangeAssign {
    type Agg = i64;
    type Act = Option<i64>;

    #[inline(always)]
    fn agg_unit() -> Self::Agg {
        0
    }

    #[inline(always)]
    fn agg_merge(left: &Self::Agg, right: &Self::Agg) -> Self::Agg {
        left.wrapping_add(*right)
    }

    #[inline(always)]
    fn act_unit() -> Self::Act {
        None
    }

    #[inline(always)]
    fn act_compose(new: &Self::Act, old: &Self::Act) -> Self::Act {
        new.or(*old)
    }

    #[inline(always)]
    fn act_apply_agg(agg: &Self::Agg, act: &Self::Act, len: usize) -> Self::Agg {
        match act {
            Some(value) => value.wrapping_mul(len as i64),
            None => *agg,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub enum RangeMaxRangeAssign {}

impl LazyMapMonoid for RangeMaxRangeAssign {
    type Agg = i64;
    type Act = Option<i64>;

    #[inline(always)]
    fn agg_unit() -> Self::Agg {
        i64::MIN
    }

    #[inline(always)]
    fn agg_merge(left: &Self::Agg, right: &Self::Agg) -> Self::Agg {
        *left.max(right)
    }

    #[inline(always)]
    fn act_unit() -> Self::Act {
        None
    }

    #[inline(always)]
    fn act_compose(new: &Self::Act, old: &Self::Act) -> Self::Act {
        new.or(*old)
    }

    #[inline(always)]
    fn act_apply_agg(agg: &Self::Agg, act: &Self::Act, len: usize) -> Self::Agg {
        match act {
            Some(value) if len > 0 => *value,
            _ => *agg,
        }
    }
}

/// `x -> max(x, v)` on every position, range max aggregate.
///
/// `i64::MIN` doubles as the unit action.
#[derive(Clone, Copy, Debug)]
pub enum RangeMaxRangeChmax {}

impl LazyMapMonoid for RangeMaxRangeChmax {
    type Agg = i64;
    type Act = i64;

    #[inline(always)]
    fn agg_unit() -> Self::Agg {
        i64::MIN
    }

    #[inline(always)]
    fn agg_merge(left: &Self::Agg, right: &Self::Agg) -> Self::Agg {
        *left.max(right)
    }

    #[inline(always)]
    fn act_unit() -> Self::Act {
        i64::MIN
    }

    #[inline(always)]
    fn act_compose(new: &Self::Act, old: &Self::Act) -> Self::Act {
        *new.max(old)
    }

    #[inline(always)]
    fn act_apply_agg(agg: &Self::Agg, act: &Self::Act, len: usize) -> Self::Agg {
        if len == 0 {
            return *agg;
        }
        *agg.max(act)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Affine {
    pub a: i64,
    pub b: i64,
}

/// `x -> a * x + b` on every position, range sum aggregate.
#[derive(Clone, Copy, Debug)]
pub enum RangeAffineRangeSum {}

impl LazyMapMonoid for RangeAffineRangeSum {
    type Agg = i64;
    type Act = Affine;

    #[inline(always)]
    fn agg_unit() -> Self::Agg {
        0
    }

    #[inline(always)]
    fn agg_merge(left: &Self::Agg, right: &Self::Agg) -> Self::Agg {
        left.wrapping_add(*right)
    }

    #[inline(always)]
    fn act_unit() -> Self::Act {
        Affine { a: 1, b: 0 }
    }

    #[inline(always)]
    fn act_compose(new: &Self::Act, old: &Self::Act) -> Self::Act {
        // new ∘ old
        // a = a_new * a_old
        // b = a_new * b_old + b_new
        Affine {
            a: new.a.wrapping_mul(old.a),
            b: new.a.wrapping_mul(old.b).wrapping_add(new.b),
        }
    }

    #[inline(always)]
    fn act_apply_agg(agg: &Self::Agg, act: &Self::Act, len: usize) -> Self::Agg {
        let len = len as i64;
        act.a
            .wrapping_mul(*agg)
            .wrapping_add(act.b.wrapping_mul(len))
    }
}
