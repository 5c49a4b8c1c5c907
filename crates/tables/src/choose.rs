// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Binomial coefficient table over a jagged shape.
//!
//! The evaluator only needs `C(n, r)` for a handful of cells, row `n` stops
//! at the largest `r` the hand hashing can ask for, so the shape is jagged
//! and fixed by the consumer rather than a full rectangle.
use serde::{Deserialize, Serialize};

/// Per-row lengths of a jagged binomial table.
///
/// Row `n` of the table holds the coefficients `C(n, 0..row_len(n))`. Row
/// `n - 1` must hold every cell row `n` depends on: its length must cover
/// row `n` up to the diagonal (columns past `n` are zero and depend on
/// nothing).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinomialShape {
    rows: Vec<usize>,
}

impl BinomialShape {
    /// Creates a shape from per-row lengths.
    pub fn new(rows: Vec<usize>) -> Self {
        Self { rows }
    }

    /// Number of rows.
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Length of row `n`.
    pub fn row_len(&self, n: usize) -> usize {
        self.rows[n]
    }
}

impl Default for BinomialShape {
    /// The evaluator shape, rows 0 to 12 with up to ten columns per row.
    fn default() -> Self {
        Self {
            rows: (0..13).map(|n| n.min(9) + 1).collect(),
        }
    }
}

/// Binomial coefficients over a [BinomialShape].
///
/// The cells live in a flat arena with one offset per row, so a lookup is a
/// bounds checked add and the jagged rows stay contiguous in memory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChooseTable {
    offsets: Vec<usize>,
    cells: Vec<u32>,
}

impl ChooseTable {
    /// Builds the table for the given shape.
    ///
    /// Bottom-up Pascal fill: `C(n, 0) = 1`, `C(n, r) = 0` for `n < r`, and
    /// `C(n, r) = C(n-1, r) + C(n-1, r-1)` otherwise. Rows are filled in
    /// order so every cell is computed exactly once from cells that already
    /// exist.
    pub fn build(shape: &BinomialShape) -> Self {
        let mut offsets = Vec::with_capacity(shape.num_rows() + 1);
        offsets.push(0);
        for n in 0..shape.num_rows() {
            assert!(shape.row_len(n) > 0, "row {n} must hold column 0");
            if n > 0 {
                // Row n - 1 must hold every cell row n reads, up to the
                // diagonal; cells above it are zero and read nothing.
                assert!(
                    shape.row_len(n).min(n) <= shape.row_len(n - 1),
                    "row {} is too short for the cells of row {n}",
                    n - 1
                );
            }
            offsets.push(offsets[n] + shape.row_len(n));
        }

        let mut cells = vec![0u32; *offsets.last().unwrap()];
        for n in 0..shape.num_rows() {
            for r in 0..shape.row_len(n) {
                cells[offsets[n] + r] = if r == 0 {
                    1
                } else if n < r {
                    0
                } else {
                    let above = |r: usize| if n - 1 < r { 0 } else { cells[offsets[n - 1] + r] };
                    above(r) + above(r - 1)
                };
            }
        }

        Self { offsets, cells }
    }

    /// Returns `C(n, r)`, the cell must be within the shape.
    #[inline]
    pub fn get(&self, n: usize, r: usize) -> u32 {
        debug_assert!(r < self.offsets[n + 1] - self.offsets[n]);
        self.cells[self.offsets[n] + r]
    }

    /// Number of rows.
    pub fn num_rows(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Row `n` as a slice.
    pub fn row(&self, n: usize) -> &[u32] {
        &self.cells[self.offsets[n]..self.offsets[n + 1]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference;
    use rand::prelude::*;

    #[test]
    fn pascal_rows() {
        let choose = ChooseTable::build(&BinomialShape::default());

        assert_eq!(choose.row(0), [1]);
        assert_eq!(choose.row(1), [1, 1]);
        assert_eq!(choose.row(4), [1, 4, 6, 4, 1]);
        assert_eq!(choose.row(5), [1, 5, 10, 10, 5, 1]);
        assert_eq!(choose.row(12), [1, 12, 66, 220, 495, 792, 924, 792, 495, 220]);

        assert_eq!(choose.get(0, 0), 1);
        assert_eq!(choose.get(5, 2), 10);
        assert_eq!(choose.get(12, 9), 220);
    }

    #[test]
    fn jagged_shape_is_honored() {
        let choose = ChooseTable::build(&BinomialShape::default());
        assert_eq!(choose.num_rows(), 13);
        for n in 0..choose.num_rows() {
            assert_eq!(choose.row(n).len(), n.min(9) + 1);
        }

        // A custom truncated shape only fills the cells it names.
        let shape = BinomialShape::new(vec![1, 2, 3, 3, 3]);
        let choose = ChooseTable::build(&shape);
        assert_eq!(choose.row(3), [1, 3, 3]);
        assert_eq!(choose.row(4), [1, 4, 6]);
    }

    #[test]
    fn wider_tail_rows_fill_zeros() {
        // A row may extend past the diagonal of its predecessor, the
        // extra cells are all above the diagonal and hold zero.
        let choose = ChooseTable::build(&BinomialShape::new(vec![1, 2, 3, 10]));
        assert_eq!(choose.row(3), [1, 3, 3, 1, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    #[should_panic(expected = "too short")]
    fn rejects_shapes_with_uncovered_cells() {
        // Row 2 stops at column 0, so it does not hold the C(2, 1) cell
        // that C(3, 1) reads.
        ChooseTable::build(&BinomialShape::new(vec![1, 1, 1, 2]));
    }

    #[test]
    fn zero_above_the_diagonal() {
        // C(n, r) = 0 for n < r, reachable in the first nine rows.
        let shape = BinomialShape::new((0..10).map(|_| 10).collect());
        let choose = ChooseTable::build(&shape);
        for n in 0..10 {
            for r in (n + 1)..10 {
                assert_eq!(choose.get(n, r), 0, "C({n}, {r})");
            }
            assert_eq!(choose.get(n, 0), 1, "C({n}, 0)");
        }
    }

    #[test]
    fn random_cells_match_closed_form() {
        fn ncr(n: u64, r: u64) -> u64 {
            (0..r).fold(1, |acc, i| acc * (n - i) / (i + 1))
        }

        let choose = ChooseTable::build(&BinomialShape::default());
        let mut rng = rand::rng();
        for _ in 0..100 {
            let n = rng.random_range(0..13usize);
            let r = rng.random_range(0..n.min(9) + 1);
            let expected = if n < r { 0 } else { ncr(n as u64, r as u64) };
            assert_eq!(choose.get(n, r) as u64, expected, "C({n}, {r})");
        }
    }

    #[test]
    fn matches_reference() {
        let choose = ChooseTable::build(&BinomialShape::default());
        assert_eq!(choose.num_rows(), reference::CHOOSE.len());
        for (n, &row) in reference::CHOOSE.iter().enumerate() {
            assert_eq!(choose.row(n), row, "choose row {n}");
        }
    }

    #[test]
    fn build_is_deterministic() {
        let shape = BinomialShape::default();
        assert_eq!(ChooseTable::build(&shape), ChooseTable::build(&shape));
    }
}
