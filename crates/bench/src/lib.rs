use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const MEDIUM_RUNTIME_SAMPLE_SIZE: usize = 15;
const MEDIUM_RUNTIME_WARM_UP_MS: u64 = 500;
const MEDIUM_RUNTIME_MEASURE_MS: u64 = 1000;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 800;
const LARGE_RUNTIME_MEASURE_MS: u64 = 1500;
const RNG_SEED: u64 = 0x5EED_2026;
const DELTA_RANGE: std::ops::RangeInclusive<i64> = -1_000..=1_000;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_medium_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(MEDIUM_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(MEDIUM_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(MEDIUM_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// One step of a mixed range workload; bounds are closed and `l <= r`.
#[derive(Clone, Copy, Debug)]
pub enum RangeOp {
    Update { l: usize, r: usize, delta: i64 },
    Query { l: usize, r: usize },
}

pub fn generate_range_ops<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    count: usize,
    update_ratio: f64,
) -> Vec<RangeOp> {
    let mut ops = Vec::with_capacity(count);
    for _ in 0..count {
        let l = rng.random_range(0..n);
        let r = rng.random_range(l..n);
        if rng.random_bool(update_ratio) {
            let delta = rng.random_range(DELTA_RANGE);
            ops.push(RangeOp::Update { l, r, delta });
        } else {
            ops.push(RangeOp::Query { l, r });
        }
    }
    ops
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_ops_stay_in_bounds() {
        let mut rng = default_rng();
        for n in [1_usize, 2, 17, 100] {
            let ops = generate_range_ops(&mut rng, n, 200, 0.5);
            assert_eq!(ops.len(), 200);
            for op in ops {
                let (l, r) = match op {
                    RangeOp::Update { l, r, delta } => {
                        assert!(DELTA_RANGE.contains(&delta));
                        (l, r)
                    }
                    RangeOp::Query { l, r } => (l, r),
                };
                assert!(l <= r && r < n, "n={n} l={l} r={r}");
            }
        }
    }
}
