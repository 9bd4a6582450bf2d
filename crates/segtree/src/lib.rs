mod dynamic;
mod error;
mod lazy;
mod policy;
mod util;

pub use dynamic::DynamicSegmentTree;
pub use error::{Result, SegTreeError};
pub use lazy::LazySegmentTree;
pub use policy::{
    Affine, LazyMapMonoid, RangeAffineRangeSum, RangeMaxRangeAdd, RangeMaxRangeAssign,
    RangeMaxRangeChmax, RangeMinRangeAdd, RangeSumRangeAdd, RangeSumRangeAssign,
};
