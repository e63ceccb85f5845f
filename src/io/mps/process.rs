//! # Processing section data
//!
//! Second stage of parsing. Converts the classified lines of each section into validated,
//! cross-referenced records: rows, columns with their nonzero elements, right-hand sides, ranges
//! and bounds. Cross-references only look backwards; rows must exist before COLUMNS, RHS or
//! RANGES mention them, and columns before BOUNDS mentions them.
use std::collections::HashMap;

use log::warn;

use crate::io::error::Parse;
use crate::io::mps::classify;
use crate::io::mps::structuring::SectionCoverage;
use crate::io::mps::{BoundEntry, BoundKind, Row, RowKind, Section};

/// Process the ROWS section, assigning dense zero-based ids in first-seen order.
///
/// # Errors
///
/// `Parse::MalformedRowsLine` for an unclassifiable line, `Parse::UnknownRowType` for a type code
/// other than `N`, `L`, `G`, `E`, and `Parse::DuplicateRowName` for a repeated name.
pub(super) fn rows(lines: &[&str]) -> Result<HashMap<String, Row>, Parse> {
    let mut rows = HashMap::with_capacity(lines.len());

    for &line in lines {
        let classified = classify::rows_line(line)
            .ok_or_else(|| Parse::MalformedRowsLine { line: line.to_string() })?;
        let kind = RowKind::from_code(classified.code)
            .ok_or_else(|| Parse::UnknownRowType { code: classified.code, line: line.to_string() })?;

        let id = rows.len();
        if rows.insert(classified.name.to_string(), Row { id, kind }).is_some() {
            return Err(Parse::DuplicateRowName { name: classified.name.to_string() });
        }
    }

    Ok(rows)
}

/// Process the COLUMNS section, assigning column ids on first reference and collecting the
/// nonzero elements keyed by `(row id, column id)`.
///
/// An explicitly stated zero coefficient is recognized, logged as advisory and never stored;
/// sparsity of the element map is a model invariant.
///
/// # Errors
///
/// `Parse::MalformedColumnsLine` when neither layout matches and `Parse::UnknownRowReference` for
/// a row that was never declared.
pub(super) fn columns(
    lines: &[&str],
    rows: &HashMap<String, Row>,
) -> Result<(HashMap<String, usize>, HashMap<(usize, usize), f64>), Parse> {
    let mut columns = HashMap::new();
    let mut elements = HashMap::new();

    for &line in lines {
        let classified = classify::columns_line(line)
            .ok_or_else(|| Parse::MalformedColumnsLine { line: line.to_string() })?;
        let (column, pairs) = match classified {
            classify::ColumnsLine::TwoPairs { column, first, second } => {
                (column, [Some(first), Some(second)])
            }
            classify::ColumnsLine::OnePair { column, pair } => (column, [Some(pair), None]),
        };

        let next_id = columns.len();
        let column_id = *columns.entry(column.to_string()).or_insert(next_id);

        for (row_name, value) in pairs.into_iter().flatten() {
            let row = resolve_row(rows, row_name, Section::Columns)?;
            if value == 0_f64 {
                warn!("dropping explicit zero coefficient in COLUMNS line \"{line}\"");
            } else {
                elements.insert((row.id, column_id), value);
            }
        }
    }

    Ok((columns, elements))
}

/// Process the RHS or RANGES section; both relate row names to a scalar through the same layouts.
///
/// The first line carrying a vector name establishes the section's vector name; a later line with
/// a different one stops consumption at that line. This is boundary detection, not an error, but
/// it is surfaced to the caller through the returned [`SectionCoverage`].
///
/// # Errors
///
/// The section-specific `Parse::Malformed*Line` when no layout matches and
/// `Parse::UnknownRowReference` for a row that was never declared.
pub(super) fn vector_section(
    lines: &[&str],
    rows: &HashMap<String, Row>,
    section: Section,
) -> Result<(HashMap<String, f64>, SectionCoverage), Parse> {
    debug_assert!(matches!(section, Section::Rhs | Section::Ranges));

    let mut values = HashMap::new();
    let mut vector_name = None;
    let mut consumed = 0;

    for &line in lines {
        let classified = classify::vector_line(line).ok_or_else(|| match section {
            Section::Ranges => Parse::MalformedRangesLine { line: line.to_string() },
            _ => Parse::MalformedRhsLine { line: line.to_string() },
        })?;

        if crosses_boundary(&mut vector_name, classified.vector()) {
            break;
        }

        for (row_name, value) in classified.pairs().into_iter().flatten() {
            resolve_row(rows, row_name, section)?;
            values.insert(row_name.to_string(), value);
        }
        consumed += 1;
    }

    Ok((values, coverage(section, consumed, lines.len())))
}

/// Process the BOUNDS section, appending entries per column in file order.
///
/// A column may legitimately accumulate multiple entries, e.g. a lower and then an upper bound;
/// entries are never replaced. The bound type is validated before the vector-name boundary check,
/// so an unknown type past the boundary still fails the parse.
///
/// # Errors
///
/// `Parse::MalformedBoundsLine` when the layout does not match, `Parse::UnknownBoundType` for a
/// type code outside the six recognized ones and `Parse::UnknownColumnReference` for a column
/// that was never declared.
pub(super) fn bounds(
    lines: &[&str],
    columns: &HashMap<String, usize>,
) -> Result<(HashMap<String, Vec<BoundEntry>>, SectionCoverage), Parse> {
    let mut bounds: HashMap<String, Vec<BoundEntry>> = HashMap::new();
    let mut vector_name = None;
    let mut consumed = 0;

    for &line in lines {
        let classified = classify::bounds_line(line)
            .ok_or_else(|| Parse::MalformedBoundsLine { line: line.to_string() })?;
        let kind = BoundKind::from_code(classified.code).ok_or_else(|| Parse::UnknownBoundType {
            code: classified.code.to_string(),
            line: line.to_string(),
        })?;

        if crosses_boundary(&mut vector_name, Some(classified.vector)) {
            break;
        }

        if !columns.contains_key(classified.column) {
            return Err(Parse::UnknownColumnReference { name: classified.column.to_string() });
        }

        bounds
            .entry(classified.column.to_string())
            .or_default()
            .push(BoundEntry { kind, value: classified.value });
        consumed += 1;
    }

    Ok((bounds, coverage(Section::Bounds, consumed, lines.len())))
}

/// Establish the section's vector name on first sight, and detect a change afterwards.
///
/// Lines without a vector name never establish nor cross a boundary.
fn crosses_boundary<'a>(vector_name: &mut Option<&'a str>, vector: Option<&'a str>) -> bool {
    let Some(vector) = vector else {
        return false;
    };

    match *vector_name {
        None => {
            *vector_name = Some(vector);
            false
        }
        Some(established) => established != vector,
    }
}

/// Look up a referenced row, which must have been declared in the ROWS section.
fn resolve_row<'r>(
    rows: &'r HashMap<String, Row>,
    name: &str,
    section: Section,
) -> Result<&'r Row, Parse> {
    rows.get(name)
        .ok_or_else(|| Parse::UnknownRowReference { name: name.to_string(), section })
}

/// Build the coverage record for a vector section, warning when lines were left unconsumed.
fn coverage(section: Section, consumed: usize, total: usize) -> SectionCoverage {
    if consumed < total {
        warn!(
            "{section} stopped at a vector name change; {} of {total} lines left unconsumed",
            total - consumed,
        );
    }

    SectionCoverage { consumed, total }
}
