//! # An MPS reader
//!
//! Reading and validation of linear programs described in the MPS file format: a fixed-section,
//! line-oriented text layout listing the rows, columns, nonzero coefficients, right-hand sides,
//! ranges and variable bounds of a problem.
//!
//! The crate parses a document in one sequential pass and either produces a single immutable
//! [`Mps`](io::mps::Mps) snapshot or fails with one specific error; no partially built problem is
//! ever observable. Solving the problem, or judging its mathematical feasibility, is out of scope.
#![warn(missing_docs)]

pub mod io;
