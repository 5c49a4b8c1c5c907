// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Suit distribution table for flush detection.
//!
//! The evaluator packs the four suit counts of a hand into a single index,
//! one base-8 digit per suit, and looks it up here to find which suit, if
//! any, holds five or more cards.
use serde::{Deserialize, Serialize};

use crate::reference;

/// Number of same suit cards needed for a made flush.
pub const MADE_HAND_CARD_COUNT: usize = 5;

/// Packed indices hit by two distinct 9 cards suit splits.
///
/// With nine cards a single suit count can reach 9 and overflow its base-8
/// digit, so each of these indices is produced by two count tuples that
/// disagree on the flush suit. The shipped table is authoritative there and
/// a disagreeing write is dropped, the ambiguity is inherited from the
/// reference table and must be preserved as is.
pub const COLLISION_INDICES: [usize; 3] = [72, 520, 576];

/// Flush lookup table indexed by packed suit counts.
///
/// An entry is the 1-based position of the suit with five or more cards, or
/// 0 when the counts hold no flush.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuitTable {
    table: Vec<u8>,
}

impl SuitTable {
    /// Number of entries, one past the largest packed index `9 * 0x200`.
    pub const SIZE: usize = 9 * 0x200 + 1;

    /// Builds the table for all hand sizes from 5 to 9 cards.
    pub fn build() -> Self {
        let mut table = vec![0u8; Self::SIZE];
        for k in 5..=9 {
            Self::fill_k(&mut table, k);
        }

        Self { table }
    }

    /// Records every way to split k cards among the four suits.
    ///
    /// The split points 0 <= s0 <= s1 <= s2 <= k enumerate the count tuples
    /// `(s0, s1 - s0, s2 - s1, k - s2)` in lexicographic order.
    fn fill_k(table: &mut [u8], k: usize) {
        for s0 in 0..=k {
            for s1 in s0..=k {
                for s2 in s1..=k {
                    let cnts = [s0, s1 - s0, s2 - s1, k - s2];
                    for (suit, &cnt) in cnts.iter().enumerate() {
                        if cnt < MADE_HAND_CARD_COUNT {
                            continue;
                        }

                        let idx = pack_index(&cnts);
                        let label = suit as u8 + 1;

                        // Inherited quirk: at the three colliding indices
                        // the shipped value wins over enumeration order.
                        if COLLISION_INDICES.contains(&idx) && reference::SUITS[idx] != label {
                            continue;
                        }

                        table[idx] = label;
                    }
                }
            }
        }
    }

    /// Returns the 1-based flush suit at `idx`, 0 when there is no flush.
    #[inline]
    pub fn get(&self, idx: usize) -> u8 {
        self.table[idx]
    }

    /// The table entries as a flat slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.table
    }
}

/// Packs four suit counts into a table index, one base-8 digit per suit.
#[inline]
pub fn pack_index(cnts: &[usize; 4]) -> usize {
    cnts[0] + 0x8 * cnts[1] + 0x40 * cnts[2] + 0x200 * cnts[3]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashMap;

    #[test]
    fn pack_index_weights() {
        assert_eq!(pack_index(&[5, 0, 0, 0]), 5);
        assert_eq!(pack_index(&[0, 5, 0, 0]), 0x28);
        assert_eq!(pack_index(&[0, 0, 5, 0]), 0x140);
        assert_eq!(pack_index(&[0, 0, 0, 5]), 0xA00);
        assert_eq!(pack_index(&[1, 2, 3, 3]), 1 + 0x10 + 0xC0 + 0x600);
    }

    #[test]
    fn five_card_flushes() {
        let suits = SuitTable::build();

        // All five cards in one suit.
        assert_eq!(suits.get(pack_index(&[5, 0, 0, 0])), 1);
        assert_eq!(suits.get(pack_index(&[0, 5, 0, 0])), 2);
        assert_eq!(suits.get(pack_index(&[0, 0, 5, 0])), 3);
        assert_eq!(suits.get(pack_index(&[0, 0, 0, 5])), 4);

        // No suit reaches five cards.
        assert_eq!(suits.get(pack_index(&[2, 1, 1, 1])), 0);
        assert_eq!(suits.get(pack_index(&[4, 4, 1, 0])), 0);
        assert_eq!(suits.get(pack_index(&[3, 2, 2, 2])), 0);

        // Seven and nine cards hands with a flush.
        assert_eq!(suits.get(pack_index(&[1, 5, 1, 0])), 2);
        assert_eq!(suits.get(pack_index(&[0, 2, 6, 1])), 3);
        assert_eq!(suits.get(pack_index(&[1, 1, 1, 6])), 4);
    }

    #[test]
    fn matches_reference() {
        let suits = SuitTable::build();
        assert_eq!(suits.as_slice().len(), reference::SUITS.len());

        for (idx, (&b, &r)) in suits
            .as_slice()
            .iter()
            .zip(reference::SUITS.iter())
            .enumerate()
        {
            assert_eq!(b, r, "suits table differs at index {idx}");
        }
    }

    #[test]
    fn collision_indices_are_exactly_the_known_three() {
        // Collect every qualifying write across all hand sizes and check
        // that only the three documented indices see two different suits.
        let mut writers: HashMap<usize, Vec<u8>> = HashMap::default();

        for k in 5..=9usize {
            for s0 in 0..=k {
                for s1 in s0..=k {
                    for s2 in s1..=k {
                        let cnts = [s0, s1 - s0, s2 - s1, k - s2];
                        for (suit, &cnt) in cnts.iter().enumerate() {
                            if cnt >= MADE_HAND_CARD_COUNT {
                                let labels = writers.entry(pack_index(&cnts)).or_default();
                                let label = suit as u8 + 1;
                                if !labels.contains(&label) {
                                    labels.push(label);
                                }
                            }
                        }
                    }
                }
            }
        }

        let mut colliding = writers
            .iter()
            .filter(|(_, labels)| labels.len() > 1)
            .map(|(&idx, _)| idx)
            .collect::<Vec<_>>();
        colliding.sort_unstable();

        assert_eq!(colliding, COLLISION_INDICES);

        // The shipped table keeps the first writer at each of them.
        for idx in COLLISION_INDICES {
            assert_eq!(reference::SUITS[idx], writers[&idx][0]);
        }
    }

    #[test]
    fn build_is_deterministic() {
        assert_eq!(SuitTable::build(), SuitTable::build());
    }
}
