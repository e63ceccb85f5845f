//! # Classifying data lines
//!
//! Each section recognizes one or two physical line layouts: a "2-pair" layout packing two data
//! tuples on one line, and a "1-pair" layout carrying one tuple. RHS and RANGES additionally
//! accept layouts omitting the leading vector name token.
//!
//! The matchers of a section are tried in a fixed specificity order: the 2-pair layout before the
//! 1-pair layout, because the 1-pair layout can spuriously match a prefix of a 2-pair line, and
//! the vector-name-omitted layouts as a final fallback. This order is part of the tested contract.
//!
//! All matchers return `None` for a line that fits no layout; relating that to a section-specific
//! error is left to the caller.
use itertools::Itertools;

/// A classified ROWS line: a single-character type code and a row name.
#[derive(Debug, Eq, PartialEq)]
pub(super) struct RowLine<'a> {
    /// The type code; validity is checked by the processor, not here.
    pub code: char,
    /// The declared row name.
    pub name: &'a str,
}

/// A classified COLUMNS line in one of its two layouts.
#[derive(Debug, PartialEq)]
pub(super) enum ColumnsLine<'a> {
    /// `<column> <row> <value> <row> <value>`
    TwoPairs {
        /// The column the coefficients belong to.
        column: &'a str,
        /// First row name and coefficient.
        first: (&'a str, f64),
        /// Second row name and coefficient.
        second: (&'a str, f64),
    },
    /// `<column> <row> <value>`
    OnePair {
        /// The column the coefficient belongs to.
        column: &'a str,
        /// Row name and coefficient.
        pair: (&'a str, f64),
    },
}

/// A classified RHS or RANGES line in one of its four layouts.
#[derive(Debug, PartialEq)]
pub(super) enum VectorLine<'a> {
    /// `<vector> <row> <value> <row> <value>`
    TwoPairs {
        /// The free vector name label; no meaning to the model.
        vector: &'a str,
        /// First row name and value.
        first: (&'a str, f64),
        /// Second row name and value.
        second: (&'a str, f64),
    },
    /// `<vector> <row> <value>`
    OnePair {
        /// The free vector name label; no meaning to the model.
        vector: &'a str,
        /// Row name and value.
        pair: (&'a str, f64),
    },
    /// `<row> <value> <row> <value>`, the vector name omitted.
    AnonymousTwoPairs {
        /// First row name and value.
        first: (&'a str, f64),
        /// Second row name and value.
        second: (&'a str, f64),
    },
    /// `<row> <value>`, the vector name omitted.
    AnonymousOnePair {
        /// Row name and value.
        pair: (&'a str, f64),
    },
}

impl<'a> VectorLine<'a> {
    /// The vector name label, if this layout carries one.
    ///
    /// Anonymous layouts never participate in vector-name boundary detection.
    pub fn vector(&self) -> Option<&'a str> {
        match *self {
            VectorLine::TwoPairs { vector, .. } | VectorLine::OnePair { vector, .. } => Some(vector),
            VectorLine::AnonymousTwoPairs { .. } | VectorLine::AnonymousOnePair { .. } => None,
        }
    }

    /// The row name and value tuples on this line, in line order.
    pub fn pairs(&self) -> [Option<(&'a str, f64)>; 2] {
        match *self {
            VectorLine::TwoPairs { first, second, .. }
            | VectorLine::AnonymousTwoPairs { first, second } => [Some(first), Some(second)],
            VectorLine::OnePair { pair, .. } | VectorLine::AnonymousOnePair { pair } => {
                [Some(pair), None]
            }
        }
    }
}

/// A classified BOUNDS line; the section has a single layout.
#[derive(Debug, PartialEq)]
pub(super) struct BoundsLine<'a> {
    /// The bound type code token; validity is checked by the processor, not here.
    pub code: &'a str,
    /// The free vector name label; no meaning to the model.
    pub vector: &'a str,
    /// The column the bound applies to.
    pub column: &'a str,
    /// The bound value.
    pub value: f64,
}

/// Classify a ROWS data line: `<code> <name>`, the code exactly one character.
pub(super) fn rows_line(line: &str) -> Option<RowLine<'_>> {
    let (code, name) = line.split_whitespace().collect_tuple()?;
    let code = code.chars().exactly_one().ok()?;

    Some(RowLine { code, name })
}

/// Classify a COLUMNS data line, trying the 2-pair layout before the 1-pair layout.
pub(super) fn columns_line(line: &str) -> Option<ColumnsLine<'_>> {
    columns_two_pairs(line).or_else(|| columns_one_pair(line))
}

fn columns_two_pairs(line: &str) -> Option<ColumnsLine<'_>> {
    let (column, row_1, value_1, row_2, value_2) = line.split_whitespace().collect_tuple()?;

    Some(ColumnsLine::TwoPairs {
        column,
        first: (row_1, number(value_1)?),
        second: (row_2, number(value_2)?),
    })
}

fn columns_one_pair(line: &str) -> Option<ColumnsLine<'_>> {
    let (column, row, value) = line.split_whitespace().collect_tuple()?;

    Some(ColumnsLine::OnePair { column, pair: (row, number(value)?) })
}

/// Classify an RHS or RANGES data line.
///
/// Layouts are tried in order: 2-pair, 1-pair, then the vector-name-omitted variants of both.
pub(super) fn vector_line(line: &str) -> Option<VectorLine<'_>> {
    vector_two_pairs(line)
        .or_else(|| vector_one_pair(line))
        .or_else(|| vector_anonymous_two_pairs(line))
        .or_else(|| vector_anonymous_one_pair(line))
}

fn vector_two_pairs(line: &str) -> Option<VectorLine<'_>> {
    let (vector, row_1, value_1, row_2, value_2) = line.split_whitespace().collect_tuple()?;

    Some(VectorLine::TwoPairs {
        vector,
        first: (row_1, number(value_1)?),
        second: (row_2, number(value_2)?),
    })
}

fn vector_one_pair(line: &str) -> Option<VectorLine<'_>> {
    let (vector, row, value) = line.split_whitespace().collect_tuple()?;

    Some(VectorLine::OnePair { vector, pair: (row, number(value)?) })
}

fn vector_anonymous_two_pairs(line: &str) -> Option<VectorLine<'_>> {
    let (row_1, value_1, row_2, value_2) = line.split_whitespace().collect_tuple()?;

    Some(VectorLine::AnonymousTwoPairs {
        first: (row_1, number(value_1)?),
        second: (row_2, number(value_2)?),
    })
}

fn vector_anonymous_one_pair(line: &str) -> Option<VectorLine<'_>> {
    let (row, value) = line.split_whitespace().collect_tuple()?;

    Some(VectorLine::AnonymousOnePair { pair: (row, number(value)?) })
}

/// Classify a BOUNDS data line: `<code> <vector> <column> <value>`, all four tokens required.
pub(super) fn bounds_line(line: &str) -> Option<BoundsLine<'_>> {
    let (code, vector, column, value) = line.split_whitespace().collect_tuple()?;

    Some(BoundsLine { code, vector, column, value: number(value)? })
}

/// A numeric field must parse as a floating point number.
fn number(token: &str) -> Option<f64> {
    token.parse().ok()
}
