// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Rank distribution table.
//!
//! `dp[l][i][j]` counts the ways to spread `j` cards over `i` ranks with at
//! most four cards per rank, where layer `l > 1` additionally counts the
//! configurations that reserve one run of length `l` from a single rank.
//! The evaluator reads these counts to tell apart pair, trips and quads
//! patterns without enumerating the hand.
use serde::{Deserialize, Serialize};

/// Cards of one rank in the deck, the per-rank capacity.
const RANK_CAPACITY: usize = 4;

/// Rank distribution counts indexed by `[block][ranks][cards]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankDistTable {
    dp: [[[u32; 10]; 14]; 5],
}

impl RankDistTable {
    /// Block length axis size, lengths 1 to 4 with index 0 unused.
    pub const BLOCKS: usize = 5;

    /// Bag axis size, up to the thirteen ranks of the deck.
    pub const BAGS: usize = 14;

    /// Slot axis size, up to the nine cards of a hand.
    pub const SLOTS: usize = 10;

    /// Builds the table.
    ///
    /// The base layer must be complete before the block layers since layer
    /// `l` reads both layer `l - 1` and the whole of layer 1.
    pub fn build() -> Self {
        let mut dp = [[[0u32; Self::SLOTS]; Self::BAGS]; Self::BLOCKS];

        // Base layer: one rank holds 0 to 4 cards, then fix the cards `q`
        // taken by the first rank and recurse on the remaining ranks. Zero
        // ranks place zero cards, those cells stay zero.
        for j in 0..=RANK_CAPACITY {
            dp[1][1][j] = 1;
        }
        for i in 2..Self::BAGS {
            for j in 0..Self::SLOTS {
                for q in 0..=RANK_CAPACITY.min(j) {
                    dp[1][i][j] += dp[1][i - 1][j - q];
                }
            }
        }

        // Block layers: either no rank contributes a run of exactly length
        // l, or one block of length l is reserved and the remaining cards
        // are spread freely by the base layer.
        for l in 2..Self::BLOCKS {
            for i in 0..Self::BAGS {
                for j in 0..Self::SLOTS {
                    dp[l][i][j] = dp[l - 1][i][j];
                    if j + 1 >= l {
                        dp[l][i][j] += dp[1][i][j + 1 - l];
                    }
                }
            }
        }

        Self { dp }
    }

    /// Returns the count for block length `l`, `i` ranks and `j` cards.
    #[inline]
    pub fn get(&self, l: usize, i: usize, j: usize) -> u32 {
        self.dp[l][i][j]
    }

    /// The table as a fixed shape array.
    pub fn as_array(&self) -> &[[[u32; Self::SLOTS]; Self::BAGS]; Self::BLOCKS] {
        &self.dp
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference;

    #[test]
    fn base_layer_single_rank() {
        let dp = RankDistTable::build();

        // One rank holds up to four cards, never more.
        for j in 0..RankDistTable::SLOTS {
            let expected = if j <= RANK_CAPACITY { 1 } else { 0 };
            assert_eq!(dp.get(1, 1, j), expected, "dp[1][1][{j}]");
        }

        // No ranks cannot place any card.
        for j in 1..RankDistTable::SLOTS {
            assert_eq!(dp.get(1, 0, j), 0, "dp[1][0][{j}]");
        }
    }

    #[test]
    fn base_layer_counts() {
        let dp = RankDistTable::build();

        // Two ranks: nine cards do not fit in 4 + 4, eight fit one way.
        assert_eq!(dp.get(1, 2, 9), 0);
        assert_eq!(dp.get(1, 2, 8), 1);

        // Two ranks, four cards: 0+4, 1+3, 2+2, 3+1, 4+0.
        assert_eq!(dp.get(1, 2, 4), 5);

        // Three ranks, nine cards: by inclusion-exclusion on the capacity.
        assert_eq!(dp.get(1, 3, 9), 10);
    }

    #[test]
    fn block_layers_monotonic() {
        let dp = RankDistTable::build();
        for l in 2..RankDistTable::BLOCKS {
            for i in 0..RankDistTable::BAGS {
                for j in 0..RankDistTable::SLOTS {
                    assert!(
                        dp.get(l, i, j) >= dp.get(l - 1, i, j),
                        "dp[{l}][{i}][{j}] decreased"
                    );
                }
            }
        }
    }

    #[test]
    fn block_layer_recurrence() {
        let dp = RankDistTable::build();

        // dp[2][5][4] = dp[1][5][4] + dp[1][5][3].
        assert_eq!(dp.get(1, 5, 4), 70);
        assert_eq!(dp.get(1, 5, 3), 35);
        assert_eq!(dp.get(2, 5, 4), 105);

        // j - l + 1 < 0 inherits the previous layer unchanged.
        assert_eq!(dp.get(4, 7, 2), dp.get(3, 7, 2));
    }

    #[test]
    fn block_layer_shift_boundary() {
        // The smallest j the shifted base layer reaches is j = l - 1,
        // where the shift lands on the zero-cards column.
        let dp = RankDistTable::build();

        assert_eq!(dp.get(2, 3, 1), dp.get(1, 3, 1) + dp.get(1, 3, 0));
        assert_eq!(dp.get(2, 3, 1), 4);

        assert_eq!(dp.get(3, 1, 2), dp.get(2, 1, 2) + dp.get(1, 1, 0));
        assert_eq!(dp.get(3, 1, 2), 3);

        for i in 0..RankDistTable::BAGS {
            for l in 2..RankDistTable::BLOCKS {
                assert_eq!(
                    dp.get(l, i, l - 1),
                    dp.get(l - 1, i, l - 1) + dp.get(1, i, 0),
                    "dp[{l}][{i}][{}]",
                    l - 1
                );
            }
        }
    }

    #[test]
    fn unused_layer_is_zero() {
        let dp = RankDistTable::build();
        for i in 0..RankDistTable::BAGS {
            for j in 0..RankDistTable::SLOTS {
                assert_eq!(dp.get(0, i, j), 0);
            }
        }
    }

    #[test]
    fn matches_reference() {
        let dp = RankDistTable::build();
        assert_eq!(dp.as_array(), &reference::RANK_DP);
    }

    #[test]
    fn build_is_deterministic() {
        assert_eq!(RankDistTable::build(), RankDistTable::build());
    }
}
