//! # Reading MPS files
//!
//! Reading of `.mps` files, or files of the Mathematical Programming System format.
//!
//! Parsing is a single sequential pass in three stages: the scanner splits the input into
//! per-section line buffers, the per-section processors classify and validate those buffers, and
//! the results are assembled into one immutable [`Mps`] snapshot. Any failure in any stage aborts
//! the whole call; a partially built problem is never observable.
use core::fmt;

use enum_map::Enum;

use crate::io::error::Parse;

mod classify;
mod process;
mod scan;
mod structuring;
pub(crate) mod token;

pub use structuring::{Mps, SectionCoverage};

/// Parse an MPS program, in string form, to an [`Mps`] snapshot.
///
/// # Arguments
///
/// * `program`: The input in [MPS format](https://en.wikipedia.org/wiki/MPS_(format)).
///
/// # Errors
///
/// One specific [`Parse`] variant per structural violation; see the [`crate::io::error`] module.
pub fn parse(program: &str) -> Result<Mps, Parse> {
    let scanned = scan::into_sections(program)?;

    let rows = process::rows(&scanned.buffers[Section::Rows])?;
    let (columns, elements) = process::columns(&scanned.buffers[Section::Columns], &rows)?;
    let (rhs, rhs_coverage) =
        process::vector_section(&scanned.buffers[Section::Rhs], &rows, Section::Rhs)?;
    let (ranges, ranges_coverage) =
        process::vector_section(&scanned.buffers[Section::Ranges], &rows, Section::Ranges)?;
    let (bounds, bounds_coverage) = process::bounds(&scanned.buffers[Section::Bounds], &columns)?;

    log::debug!(
        "parsed MPS problem \"{}\": {} rows, {} columns, {} nonzeros",
        scanned.name, rows.len(), columns.len(), elements.len(),
    );

    Ok(Mps::assemble(
        scanned.name.to_string(),
        rows,
        columns,
        elements,
        rhs,
        ranges,
        bounds,
        (rhs_coverage, ranges_coverage, bounds_coverage),
    ))
}

/// The data-carrying sections of an MPS file.
///
/// The NAME line and the ENDATA marker carry no data lines and are handled by the scanner alone.
#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
pub enum Section {
    /// Declares the constraint rows and the objective.
    Rows,
    /// Declares the variables and their nonzero coefficients.
    Columns,
    /// Right-hand side values per row.
    Rhs,
    /// Range values per row.
    Ranges,
    /// Bounds per variable.
    Bounds,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Section::Rows => token::ROWS,
            Section::Columns => token::COLUMNS,
            Section::Rhs => token::RHS,
            Section::Ranges => token::RANGES,
            Section::Bounds => token::BOUNDS,
        })
    }
}

/// Every row is either the objective or a constraint with a direction.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RowKind {
    /// The objective function, type code `N`.
    Objective,
    /// A `<=` constraint, type code `L`.
    LessOrEqual,
    /// A `>=` constraint, type code `G`.
    GreaterOrEqual,
    /// A `=` constraint, type code `E`.
    Equality,
}

impl RowKind {
    /// Relate a single-character ROWS type code to a row kind.
    pub(crate) fn from_code(code: char) -> Option<Self> {
        match code {
            'N' => Some(Self::Objective),
            'L' => Some(Self::LessOrEqual),
            'G' => Some(Self::GreaterOrEqual),
            'E' => Some(Self::Equality),
            _ => None,
        }
    }
}

/// A row as declared in the ROWS section.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Row {
    /// Dense zero-based id, assigned in first-seen order.
    pub id: usize,
    /// Whether this row is the objective or a constraint, and in which direction.
    pub kind: RowKind,
}

/// The bound types the BOUNDS section can declare for a variable.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BoundKind {
    /// `b <= x`, type code `LO`.
    Lower,
    /// `x <= b`, type code `UP`.
    Upper,
    /// `x = b`, type code `FX`.
    Fixed,
    /// `-inf < x < +inf`, type code `FR`.
    Free,
    /// `-inf < x`, type code `MI`.
    MinusInfinity,
    /// `x < +inf`, type code `PL`.
    PlusInfinity,
}

impl BoundKind {
    /// Relate a BOUNDS type code token to a bound kind.
    pub(crate) fn from_code(code: &str) -> Option<Self> {
        match code {
            "LO" => Some(Self::Lower),
            "UP" => Some(Self::Upper),
            "FX" => Some(Self::Fixed),
            "FR" => Some(Self::Free),
            "MI" => Some(Self::MinusInfinity),
            "PL" => Some(Self::PlusInfinity),
            _ => None,
        }
    }
}

/// One bound declared for a variable.
///
/// A variable accumulates its bounds in file order and commonly carries two entries, e.g. a lower
/// and then an upper bound.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundEntry {
    /// The declared bound type.
    pub kind: BoundKind,
    /// The accompanying value, also read for the types that ignore it (`FR`, `MI`, `PL`).
    pub value: f64,
}

/// Integration testing the `io::mps` module.
#[cfg(test)]
mod test {
    use crate::io::error::Parse;
    use crate::io::mps::{BoundEntry, BoundKind, RowKind, parse};

    /// A complete MPS file, in a static &str.
    pub(super) const MPS_STRING: &str = "\
NAME          TESTPROB
ROWS
 N  COST
 L  LIM1
 G  LIM2
 E  MYEQN
COLUMNS
    XONE      COST                 1   LIM1                 1
    XONE      LIM2                 1
    YTWO      COST                 4   LIM1                 1
    YTWO      MYEQN               -1
    ZTHREE    COST                 9   LIM2                 1
    ZTHREE    MYEQN                1
RHS
    RHS1      LIM1                 5   LIM2                10
    RHS1      MYEQN                7
RANGES
    RNG1      LIM1                 6   LIM2                 5
BOUNDS
 UP BND1      XONE                 4
 LO BND1      YTWO                -1
 UP BND1      YTWO                 1
ENDATA";

    /// The canonical document parses to exactly the expected names, ids, counts and values.
    #[test]
    fn parse_canonical_document() {
        let result = parse(MPS_STRING).unwrap();

        assert_eq!(result.name(), "TESTPROB");

        assert_eq!(result.rows().len(), 4);
        for (name, id, kind) in [
            ("COST", 0, RowKind::Objective),
            ("LIM1", 1, RowKind::LessOrEqual),
            ("LIM2", 2, RowKind::GreaterOrEqual),
            ("MYEQN", 3, RowKind::Equality),
        ] {
            let row = result.rows()[name];
            assert_eq!(row.id, id);
            assert_eq!(row.kind, kind);
        }

        assert_eq!(result.columns().len(), 3);
        assert_eq!(result.columns()["XONE"], 0);
        assert_eq!(result.columns()["YTWO"], 1);
        assert_eq!(result.columns()["ZTHREE"], 2);

        assert_eq!(result.elements().len(), 9);
        for (key, value) in [
            ((0, 0), 1_f64), ((1, 0), 1_f64), ((2, 0), 1_f64),
            ((0, 1), 4_f64), ((1, 1), 1_f64), ((3, 1), -1_f64),
            ((0, 2), 9_f64), ((2, 2), 1_f64), ((3, 2), 1_f64),
        ] {
            assert_eq!(result.elements()[&key], value);
        }

        assert_eq!(result.rhs().len(), 3);
        assert_eq!(result.rhs()["LIM1"], 5_f64);
        assert_eq!(result.rhs()["LIM2"], 10_f64);
        assert_eq!(result.rhs()["MYEQN"], 7_f64);

        assert_eq!(result.ranges().len(), 2);
        assert_eq!(result.ranges()["LIM1"], 6_f64);
        assert_eq!(result.ranges()["LIM2"], 5_f64);

        assert_eq!(result.bounds().len(), 2);
        assert_eq!(
            result.bounds()["XONE"],
            vec![BoundEntry { kind: BoundKind::Upper, value: 4_f64 }],
        );
        assert_eq!(
            result.bounds()["YTWO"],
            vec![
                BoundEntry { kind: BoundKind::Lower, value: -1_f64 },
                BoundEntry { kind: BoundKind::Upper, value: 1_f64 },
            ],
        );

        assert!(result.rhs_coverage().is_complete());
        assert!(result.ranges_coverage().is_complete());
        assert!(result.bounds_coverage().is_complete());
    }

    /// Ids are assigned in first-seen order; parsing the same text twice yields identical ids.
    #[test]
    fn reparse_yields_identical_ids() {
        let first = parse(MPS_STRING).unwrap();
        let second = parse(MPS_STRING).unwrap();

        assert_eq!(first.rows(), second.rows());
        assert_eq!(first.columns(), second.columns());
        assert_eq!(first, second);
    }

    /// Identifiers may collide with section markers; only line position decides their meaning.
    #[test]
    fn column_called_name_stays_a_column() {
        let program = "\
NAME          PROB
ROWS
 N  COST
COLUMNS
    NAME      COST             2
    XTWO      COST             3
RHS
ENDATA";
        let result = parse(program).unwrap();

        assert_eq!(result.name(), "PROB");
        assert_eq!(result.columns().len(), 2);
        assert_eq!(result.columns()["NAME"], 0);
        assert_eq!(result.columns()["XTWO"], 1);
        assert_eq!(result.elements()[&(0, 0)], 2_f64);
        assert_eq!(result.elements()[&(0, 1)], 3_f64);
    }

    /// A document cut off before its ENDATA marker fails with the ENDATA-specific error.
    #[test]
    fn truncated_document_misses_endata() {
        let truncated = &MPS_STRING[..MPS_STRING.len() - "ENDATA".len()];

        assert_eq!(parse(truncated), Err(Parse::MissingEndata));
    }

    /// Input without a single section header is not an MPS document.
    #[test]
    fn arbitrary_text_is_not_mps() {
        let result = parse("once upon a time\nthere was no linear program\n");

        assert_eq!(
            result,
            Err(Parse::NotMpsDocument { line: "once upon a time".to_string() }),
        );
    }
}
