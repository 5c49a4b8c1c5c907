// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Quinary Poker evaluator lookup tables.
//!
//! This crate builds the three combinatorial tables the Quinary hand
//! evaluator uses to rank a 5 to 9 cards hand in constant time:
//!
//! - [SuitTable] maps packed suit counts to the suit holding a flush.
//! - [ChooseTable] holds binomial coefficients over a jagged shape.
//! - [RankDistTable] counts capacity limited rank distributions used to
//!   tell apart pair, trips and quads patterns.
//!
//! Each table is generated once by a pure builder and is immutable after
//! that. The [verify] module regenerates every table from first principles
//! and checks it cell by cell against the [reference] tables shipped with
//! the evaluator, a single wrong cell silently misranks a hand:
//!
//! ```
//! use quinary_tables::{BinomialShape, ChooseTable};
//!
//! let choose = ChooseTable::build(&BinomialShape::default());
//! assert_eq!(choose.get(5, 2), 10);
//! assert!(quinary_tables::verify::verify_all().is_ok());
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod choose;
pub mod rank_dp;
pub mod reference;
pub mod suits;
pub mod verify;

pub use choose::{BinomialShape, ChooseTable};
pub use rank_dp::RankDistTable;
pub use suits::SuitTable;
pub use verify::{Mismatch, TableId};
