// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cross verification of the generated tables.
//!
//! Every table is rebuilt from first principles and compared cell by cell
//! against the reference tables shipped with the evaluator. A mismatch is a
//! correctness defect, there is no recovery path and a table that fails
//! verification must not be used.
use anyhow::{Result, bail};
use log::{error, info};
use std::fmt;

use crate::choose::{BinomialShape, ChooseTable};
use crate::rank_dp::RankDistTable;
use crate::reference;
use crate::suits::SuitTable;

/// The table a mismatch was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableId {
    /// The suit distribution table.
    Suits,
    /// The binomial coefficient table.
    Choose,
    /// The rank distribution table.
    RankDist,
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TableId::Suits => "suits",
            TableId::Choose => "choose",
            TableId::RankDist => "rank_dp",
        };

        write!(f, "{name}")
    }
}

/// A cell where a generated table disagrees with its reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    /// The table the cell belongs to.
    pub table: TableId,
    /// Cell coordinates, unused trailing axes are zero.
    pub coords: [usize; 3],
    /// The value produced by the builder.
    pub built: u32,
    /// The value in the reference table.
    pub reference: u32,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.coords;
        match self.table {
            TableId::Suits => write!(f, "suits[{x}]")?,
            TableId::Choose => write!(f, "choose[{x}][{y}]")?,
            TableId::RankDist => write!(f, "rank_dp[{x}][{y}][{z}]")?,
        }

        write!(f, ": built {}, reference {}", self.built, self.reference)
    }
}

/// Diffs a generated suit table against a reference table.
///
/// Both tables must have the same length, the reference is never mutated.
pub fn diff_suits(built: &SuitTable, reference: &[u8]) -> Vec<Mismatch> {
    assert_eq!(built.as_slice().len(), reference.len());

    built
        .as_slice()
        .iter()
        .zip(reference)
        .enumerate()
        .filter(|(_, (b, r))| b != r)
        .map(|(idx, (&b, &r))| Mismatch {
            table: TableId::Suits,
            coords: [idx, 0, 0],
            built: b as u32,
            reference: r as u32,
        })
        .collect()
}

/// Diffs a generated binomial table against a reference of the same shape.
pub fn diff_choose(built: &ChooseTable, reference: &[&[u32]]) -> Vec<Mismatch> {
    assert_eq!(built.num_rows(), reference.len());

    let mut mismatches = Vec::new();
    for (n, &row) in reference.iter().enumerate() {
        assert_eq!(built.row(n).len(), row.len(), "row {n} length");
        for (r, (&b, &v)) in built.row(n).iter().zip(row).enumerate() {
            if b != v {
                mismatches.push(Mismatch {
                    table: TableId::Choose,
                    coords: [n, r, 0],
                    built: b,
                    reference: v,
                });
            }
        }
    }

    mismatches
}

/// Diffs a generated rank distribution table against a reference table.
pub fn diff_rank_dist(
    built: &RankDistTable,
    reference: &[[[u32; RankDistTable::SLOTS]; RankDistTable::BAGS]; RankDistTable::BLOCKS],
) -> Vec<Mismatch> {
    let mut mismatches = Vec::new();
    for l in 0..RankDistTable::BLOCKS {
        for i in 0..RankDistTable::BAGS {
            for j in 0..RankDistTable::SLOTS {
                let (b, r) = (built.get(l, i, j), reference[l][i][j]);
                if b != r {
                    mismatches.push(Mismatch {
                        table: TableId::RankDist,
                        coords: [l, i, j],
                        built: b,
                        reference: r,
                    });
                }
            }
        }
    }

    mismatches
}

/// Regenerates one table and diffs it against its shipped reference.
pub fn verify(table: TableId) -> Vec<Mismatch> {
    match table {
        TableId::Suits => diff_suits(&SuitTable::build(), &reference::SUITS),
        TableId::Choose => diff_choose(
            &ChooseTable::build(&BinomialShape::default()),
            &reference::CHOOSE,
        ),
        TableId::RankDist => diff_rank_dist(&RankDistTable::build(), &reference::RANK_DP),
    }
}

/// Regenerates all three tables and checks them against the shipped
/// reference tables, logging every differing cell.
pub fn verify_all() -> Result<()> {
    let mut mismatches = Vec::new();
    for id in [TableId::Suits, TableId::Choose, TableId::RankDist] {
        mismatches.extend(verify(id));
    }

    for m in &mismatches {
        error!("{m}");
    }

    if !mismatches.is_empty() {
        bail!("{} table cells disagree with the reference", mismatches.len());
    }

    info!("all tables match the reference");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_tables_match() {
        for id in [TableId::Suits, TableId::Choose, TableId::RankDist] {
            let mismatches = verify(id);
            assert!(mismatches.is_empty(), "{id}: {:?}", mismatches);
        }

        assert!(verify_all().is_ok());
    }

    #[test]
    fn suits_mismatch_is_reported() {
        let built = SuitTable::build();
        let mut corrupted = reference::SUITS.to_vec();
        corrupted[5] = 3;

        let mismatches = diff_suits(&built, &corrupted);
        assert_eq!(mismatches.len(), 1);
        assert_eq!(mismatches[0].coords, [5, 0, 0]);
        assert_eq!(mismatches[0].built, 1);
        assert_eq!(mismatches[0].reference, 3);
        assert_eq!(mismatches[0].to_string(), "suits[5]: built 1, reference 3");
    }

    #[test]
    fn choose_mismatch_is_reported() {
        let built = ChooseTable::build(&BinomialShape::default());
        let mut corrupted = reference::CHOOSE.map(|row| row.to_vec());
        corrupted[5][2] = 11;

        let corrupted = corrupted.iter().map(|row| row.as_slice()).collect::<Vec<_>>();
        let mismatches = diff_choose(&built, &corrupted);
        assert_eq!(mismatches.len(), 1);
        assert_eq!(mismatches[0].coords, [5, 2, 0]);
        assert_eq!(mismatches[0].built, 10);
        assert_eq!(mismatches[0].reference, 11);
    }

    #[test]
    fn rank_dist_mismatch_is_reported() {
        let built = RankDistTable::build();
        let mut corrupted = reference::RANK_DP;
        corrupted[2][5][4] += 1;

        let mismatches = diff_rank_dist(&built, &corrupted);
        assert_eq!(mismatches.len(), 1);
        assert_eq!(mismatches[0].coords, [2, 5, 4]);
        assert_eq!(mismatches[0].reference, mismatches[0].built + 1);
    }
}
