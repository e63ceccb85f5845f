//! # Assembling the problem snapshot
//!
//! Final stage of parsing. Combines the processor outputs into one read-only [`Mps`] value. The
//! snapshot is built exactly once per parse call and exposes its tables through borrowing
//! accessors only; nothing can be mutated after `assemble` returns.
use std::collections::HashMap;

use crate::io::mps::{BoundEntry, Row};

/// How much of a vector section (RHS, RANGES or BOUNDS) was actually consumed.
///
/// Consumption of a vector section stops, without error, at the first line whose vector name
/// differs from the one established by the section's first named line. This record makes that
/// truncation visible to the caller instead of discarding the remainder invisibly.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SectionCoverage {
    /// Number of data lines consumed into the model.
    pub consumed: usize,
    /// Number of data lines the section held in the file.
    pub total: usize,
}

impl SectionCoverage {
    /// Whether every data line of the section made it into the model.
    pub fn is_complete(&self) -> bool {
        self.consumed == self.total
    }
}

/// An MPS problem as one immutable snapshot.
///
/// Row and column ids are dense, zero-based and assigned in first-seen order, and the element map
/// holds nonzero coefficients only. Values of this type are produced by
/// [`parse`](crate::io::mps::parse) or [`import`](crate::io::import) and cannot be modified
/// afterwards.
#[derive(Debug, PartialEq)]
pub struct Mps {
    name: String,
    rows: HashMap<String, Row>,
    columns: HashMap<String, usize>,
    elements: HashMap<(usize, usize), f64>,
    rhs: HashMap<String, f64>,
    ranges: HashMap<String, f64>,
    bounds: HashMap<String, Vec<BoundEntry>>,
    rhs_coverage: SectionCoverage,
    ranges_coverage: SectionCoverage,
    bounds_coverage: SectionCoverage,
}

impl Mps {
    /// Combine the processor outputs into the final snapshot.
    ///
    /// All validation has happened by the time this is called; any earlier failure aborts the
    /// parse before a partial snapshot can be observed.
    #[allow(clippy::too_many_arguments)]
    pub(super) fn assemble(
        name: String,
        rows: HashMap<String, Row>,
        columns: HashMap<String, usize>,
        elements: HashMap<(usize, usize), f64>,
        rhs: HashMap<String, f64>,
        ranges: HashMap<String, f64>,
        bounds: HashMap<String, Vec<BoundEntry>>,
        (rhs_coverage, ranges_coverage, bounds_coverage): (
            SectionCoverage,
            SectionCoverage,
            SectionCoverage,
        ),
    ) -> Self {
        Self {
            name,
            rows,
            columns,
            elements,
            rhs,
            ranges,
            bounds,
            rhs_coverage,
            ranges_coverage,
            bounds_coverage,
        }
    }

    /// The problem name, as read from the NAME line.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The rows by name.
    pub fn rows(&self) -> &HashMap<String, Row> {
        &self.rows
    }

    /// The column ids by name.
    pub fn columns(&self) -> &HashMap<String, usize> {
        &self.columns
    }

    /// The nonzero coefficients, keyed by `(row id, column id)`.
    pub fn elements(&self) -> &HashMap<(usize, usize), f64> {
        &self.elements
    }

    /// The right-hand side values by row name.
    pub fn rhs(&self) -> &HashMap<String, f64> {
        &self.rhs
    }

    /// The range values by row name; interpretation is left to the consumer.
    pub fn ranges(&self) -> &HashMap<String, f64> {
        &self.ranges
    }

    /// The bounds by column name, in file order.
    pub fn bounds(&self) -> &HashMap<String, Vec<BoundEntry>> {
        &self.bounds
    }

    /// How much of the RHS section was consumed.
    pub fn rhs_coverage(&self) -> SectionCoverage {
        self.rhs_coverage
    }

    /// How much of the RANGES section was consumed.
    pub fn ranges_coverage(&self) -> SectionCoverage {
        self.ranges_coverage
    }

    /// How much of the BOUNDS section was consumed.
    pub fn bounds_coverage(&self) -> SectionCoverage {
        self.bounds_coverage
    }
}
