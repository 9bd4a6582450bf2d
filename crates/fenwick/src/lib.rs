mod error;
mod fenwick_2d;
mod point;
mod range_add;
mod util;

pub use error::{FenwickError, Result};
pub use fenwick_2d::Fenwick2d;
pub use point::FenwickTree;
pub use range_add::{RangeAddFenwick, RangeAddSumFenwick};

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn brute_sum(values: &[i64], l: usize, r: usize) -> i64 {
        if l > r {
            return 0;
        }
        values[l..=r].iter().sum()
    }

    #[test]
    fn point_update_range_sum_known_case() {
        init_logger();
        let mut bit = FenwickTree::from_values(&[1, 3, 5]);
        assert_eq!(bit.range_sum(0, 2), Ok(9));
        bit.set(1, 2).unwrap();
        assert_eq!(bit.range_sum(0, 2), Ok(8));
        assert_eq!(bit.get(1), Ok(2));
        assert_eq!(bit.prefix_sum(0), Ok(1));
    }

    #[test]
    fn grid_known_case() {
        let matrix = [
            [3, 0, 1, 4, 2],
            [5, 6, 3, 2, 1],
            [1, 2, 0, 1, 5],
            [4, 1, 0, 1, 7],
            [1, 0, 3, 0, 5],
        ];
        let mut bit = Fenwick2d::new(5, 5);
        for (i, row) in matrix.iter().enumerate() {
            for (j, &x) in row.iter().enumerate() {
                bit.set(i, j, x).unwrap();
            }
        }
        assert_eq!(bit.rect_sum(2, 1, 4, 3), Ok(8));
        bit.set(3, 2, 2).unwrap();
        assert_eq!(bit.rect_sum(2, 1, 4, 3), Ok(10));
        assert_eq!(bit.get(3, 2), Ok(2));
        assert_eq!(bit.prefix_sum(0, 4), Ok(10));
    }

    #[test]
    fn out_of_bounds_and_empty_ranges() {
        let mut bit = FenwickTree::new(4);
        assert_eq!(
            bit.add(4, 1),
            Err(FenwickError::OutOfBounds { index: 4, len: 4 })
        );
        assert_eq!(
            bit.range_sum(1, 9),
            Err(FenwickError::OutOfBounds { index: 9, len: 4 })
        );
        assert_eq!(bit.range_sum(3, 1), Ok(0));

        let mut range = RangeAddSumFenwick::new(4);
        assert_eq!(range.range_add(3, 1, 10), Ok(()));
        assert_eq!(range.range_sum(0, 3), Ok(0));

        let mut diff = RangeAddFenwick::new(4);
        assert_eq!(diff.range_add(2, 1, 10), Ok(()));
        assert_eq!(diff.get(2), Ok(0));
        assert_eq!(
            diff.get(4),
            Err(FenwickError::OutOfBounds { index: 4, len: 4 })
        );

        let grid = Fenwick2d::new(2, 3);
        assert_eq!(
            grid.get(1, 3),
            Err(FenwickError::OutOfBounds2d {
                row: 1,
                col: 3,
                rows: 2,
                cols: 3
            })
        );
        assert_eq!(grid.rect_sum(1, 2, 0, 2), Ok(0));

        let empty = FenwickTree::new(0);
        assert!(empty.is_empty());
        assert_eq!(
            empty.prefix_sum(0),
            Err(FenwickError::OutOfBounds { index: 0, len: 0 })
        );
    }

    #[test]
    fn random_point_update_matches_naive() {
        let mut rng = StdRng::seed_from_u64(0xF3_2026);
        for n in 1..=40 {
            let mut values = (0..n)
                .map(|_| rng.random_range(-100_i64..=100))
                .collect::<Vec<_>>();
            let mut bit = FenwickTree::from_values(&values);
            for it in 0..300 {
                let i = rng.random_range(0..n);
                match rng.random_range(0..3) {
                    0 => {
                        let d = rng.random_range(-10_i64..=10);
                        bit.add(i, d).unwrap();
                        values[i] += d;
                    }
                    1 => {
                        let x = rng.random_range(-100_i64..=100);
                        bit.set(i, x).unwrap();
                        values[i] = x;
                    }
                    _ => {
                        let r = rng.random_range(i..n);
                        assert_eq!(bit.range_sum(i, r), Ok(brute_sum(&values, i, r)), "n={n} it={it}");
                    }
                }
            }
        }
    }

    #[test]
    fn random_range_add_point_get_matches_naive() {
        let mut rng = StdRng::seed_from_u64(0xD1FF);
        for n in 1..=40 {
            let mut values = (0..n)
                .map(|_| rng.random_range(-100_i64..=100))
                .collect::<Vec<_>>();
            let mut bit = RangeAddFenwick::from_values(&values);
            for it in 0..300 {
                let l = rng.random_range(0..n);
                let r = rng.random_range(l..n);
                match rng.random_range(0..3) {
                    0 => {
                        let d = rng.random_range(-10_i64..=10);
                        bit.range_add(l, r, d).unwrap();
                        for x in &mut values[l..=r] {
                            *x += d;
                        }
                    }
                    1 => {
                        let x = rng.random_range(-100_i64..=100);
                        bit.set(l, x).unwrap();
                        values[l] = x;
                    }
                    _ => {
                        assert_eq!(bit.get(l), Ok(values[l]), "n={n} it={it}");
                        assert_eq!(bit.get(r), Ok(values[r]), "n={n} it={it}");
                    }
                }
            }
        }
    }

    #[test]
    fn random_range_add_range_sum_matches_naive() {
        let mut rng = StdRng::seed_from_u64(0x5_0BAD);
        for n in 1..=40 {
            let mut values = (0..n)
                .map(|_| rng.random_range(-100_i64..=100))
                .collect::<Vec<_>>();
            let mut bit = RangeAddSumFenwick::from_values(&values);
            for it in 0..300 {
                let l = rng.random_range(0..n);
                let r = rng.random_range(l..n);
                match rng.random_range(0..4) {
                    0 => {
                        let d = rng.random_range(-10_i64..=10);
                        bit.range_add(l, r, d).unwrap();
                        for x in &mut values[l..=r] {
                            *x += d;
                        }
                    }
                    1 => {
                        let x = rng.random_range(-100_i64..=100);
                        bit.set(r, x).unwrap();
                        values[r] = x;
                    }
                    2 => {
                        assert_eq!(bit.prefix_sum(r), Ok(brute_sum(&values, 0, r)), "n={n} it={it}");
                    }
                    _ => {
                        assert_eq!(bit.range_sum(l, r), Ok(brute_sum(&values, l, r)), "n={n} it={it}");
                    }
                }
            }
        }
    }

    #[test]
    fn random_grid_matches_naive() {
        let mut rng = StdRng::seed_from_u64(0x2D);
        for (rows, cols) in [(1, 1), (1, 7), (5, 1), (6, 9), (13, 8)] {
            let mut grid = vec![vec![0_i64; cols]; rows];
            let mut bit = Fenwick2d::new(rows, cols);
            for it in 0..400 {
                let r1 = rng.random_range(0..rows);
                let c1 = rng.random_range(0..cols);
                if rng.random_bool(0.5) {
                    let d = rng.random_range(-10_i64..=10);
                    bit.add(r1, c1, d).unwrap();
                    grid[r1][c1] += d;
                } else {
                    let r2 = rng.random_range(r1..rows);
                    let c2 = rng.random_range(c1..cols);
                    let expected = grid[r1..=r2]
                        .iter()
                        .map(|row| row[c1..=c2].iter().sum::<i64>())
                        .sum::<i64>();
                    assert_eq!(bit.rect_sum(r1, c1, r2, c2), Ok(expected), "it={it}");
                }
            }
        }
    }
}
