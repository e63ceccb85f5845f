//! # Splitting a document into sections
//!
//! First stage of parsing. Splits the raw input lines into per-section line buffers and enforces
//! the section ordering and the presence of the mandatory markers. The contents of the buffered
//! lines are not interpreted here; that is the job of the `process` module.
use enum_map::EnumMap;

use crate::io::error::Parse;
use crate::io::mps::Section;
use crate::io::mps::token::{
    BOUNDS, COLUMNS, COMMENT_INDICATOR, ENDATA, NAME, RANGES, RHS, ROWS, SKIP_INDICATOR,
};

/// A document split into its problem name and per-section data line buffers.
///
/// Lines are borrowed from the input text; nothing is copied at this stage.
#[derive(Debug, Eq, PartialEq)]
pub(super) struct Scanned<'a> {
    /// The problem name, as read from the NAME line.
    pub name: &'a str,
    /// The data lines of each section, in file order, whitespace-trimmed.
    pub buffers: EnumMap<Section, Vec<&'a str>>,
}

/// Split a program into per-section line buffers.
///
/// Comment lines (`*`), no-op lines (`&`) and blank lines are skipped. Scanning stops at the
/// `ENDATA` marker; anything after it is never read.
///
/// # Arguments
///
/// * `program`: The entire document text.
///
/// # Errors
///
/// `Parse::NotMpsDocument` for a data line outside any section, a `Parse::Missing*` variant for
/// an absent or out-of-order mandatory marker, and `Parse::Empty*Section` when ROWS or COLUMNS
/// carries no data.
pub(super) fn into_sections(program: &str) -> Result<Scanned<'_>, Parse> {
    let mut name = None;
    let mut buffers: EnumMap<Section, Vec<&str>> = EnumMap::default();
    let mut seen: EnumMap<Section, bool> = EnumMap::default();
    let mut open = None;
    let mut seen_endata = false;

    for raw_line in program.lines() {
        let line = raw_line.trim();
        if line.is_empty()
            || line.starts_with(COMMENT_INDICATOR)
            || line.starts_with(SKIP_INDICATOR)
        {
            continue;
        }

        // Headers and the name line are line-initial: leading whitespace disqualifies them,
        // trailing whitespace is irrelevant.
        let heading = raw_line.trim_end();

        // The name line carries its value on the same line, unlike the section headers. It is
        // only recognized while no section is open; inside a section, a line whose first token
        // happens to be "NAME" is a data line like any other.
        if open.is_none()
            && let Some(rest) = heading.strip_prefix(NAME)
            && rest.starts_with(char::is_whitespace)
            && !rest.trim().is_empty()
        {
            name = Some(rest.trim());
            continue;
        }

        if heading == ENDATA {
            seen_endata = true;
            break;
        }

        if let Some(section) = header(heading) {
            if name.is_none() {
                return Err(Parse::MissingName);
            }
            for &required in required_before(section) {
                if !seen[required] {
                    return Err(missing(required));
                }
            }

            seen[section] = true;
            open = Some(section);
            continue;
        }

        match open {
            Some(section) => buffers[section].push(line),
            None => return Err(Parse::NotMpsDocument { line: line.to_string() }),
        }
    }

    // Presence checks in fixed precedence order, matching the order the sections must appear in.
    if name.is_none() {
        return Err(Parse::MissingName);
    }
    for section in [Section::Rows, Section::Columns, Section::Rhs] {
        if !seen[section] {
            return Err(missing(section));
        }
    }
    if !seen_endata {
        return Err(Parse::MissingEndata);
    }
    if buffers[Section::Rows].is_empty() {
        return Err(Parse::EmptyRowsSection);
    }
    if buffers[Section::Columns].is_empty() {
        return Err(Parse::EmptyColumnsSection);
    }

    Ok(Scanned { name: name.unwrap(), buffers })
}

/// Determine whether the line is one of the data section headers.
///
/// Headers are the exact token at the start of the line; the input keeps its leading
/// whitespace, so an indented token does not qualify.
fn header(line: &str) -> Option<Section> {
    match line {
        ROWS => Some(Section::Rows),
        COLUMNS => Some(Section::Columns),
        RHS => Some(Section::Rhs),
        RANGES => Some(Section::Ranges),
        BOUNDS => Some(Section::Bounds),
        _ => None,
    }
}

/// The sections that must already have been opened when the given section opens.
///
/// This encodes the mandatory ordering NAME < ROWS < COLUMNS < RHS < ENDATA, with RANGES and
/// BOUNDS falling between RHS and ENDATA in either relative order.
fn required_before(section: Section) -> &'static [Section] {
    match section {
        Section::Rows => &[],
        Section::Columns => &[Section::Rows],
        Section::Rhs => &[Section::Rows, Section::Columns],
        Section::Ranges | Section::Bounds => &[Section::Rows, Section::Columns, Section::Rhs],
    }
}

/// The error raised when the given mandatory section is absent where it is required.
fn missing(section: Section) -> Parse {
    match section {
        Section::Rows => Parse::MissingRows,
        Section::Columns => Parse::MissingColumns,
        Section::Rhs => Parse::MissingRhs,
        // RANGES and BOUNDS are optional; their absence is never an error.
        Section::Ranges | Section::Bounds => unreachable!("optional section cannot be missing"),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn splits_into_buffers() {
        let program = "\
* a comment
NAME          TESTPROB
& a no-op line

ROWS
 N  COST
 L  LIM1
COLUMNS
    XONE      COST                 1   LIM1                 1
RHS
    RHS1      LIM1                 5
RANGES
    RNG1      LIM1                 6
BOUNDS
 UP BND1      XONE                 4
ENDATA";
        let result = into_sections(program).unwrap();

        assert_eq!(result.name, "TESTPROB");
        assert_eq!(result.buffers[Section::Rows], vec!["N  COST", "L  LIM1"]);
        assert_eq!(
            result.buffers[Section::Columns],
            vec!["XONE      COST                 1   LIM1                 1"],
        );
        assert_eq!(result.buffers[Section::Rhs], vec!["RHS1      LIM1                 5"]);
        assert_eq!(result.buffers[Section::Ranges], vec!["RNG1      LIM1                 6"]);
        assert_eq!(result.buffers[Section::Bounds], vec!["UP BND1      XONE                 4"]);
    }

    #[test]
    fn name_keeps_internal_whitespace() {
        let program = "NAME  A PROBLEM  \nROWS\n N  COST\nCOLUMNS\n X C 1\nRHS\nENDATA";

        assert_eq!(into_sections(program).unwrap().name, "A PROBLEM");
    }

    #[test]
    fn data_before_any_header() {
        let program = " N  COST\nROWS";
        let result = into_sections(program);

        assert_eq!(result, Err(Parse::NotMpsDocument { line: "N  COST".to_string() }));

        // Also after the name line: the name line does not open a buffer.
        let program = "NAME  X\n N  COST\nROWS";
        let result = into_sections(program);

        assert_eq!(result, Err(Parse::NotMpsDocument { line: "N  COST".to_string() }));
    }

    #[test]
    fn each_mandatory_marker_is_its_own_failure() {
        assert_eq!(into_sections("ROWS\n N  R"), Err(Parse::MissingName));
        assert_eq!(into_sections("NAME X\nCOLUMNS\n C R 1"), Err(Parse::MissingRows));
        assert_eq!(into_sections("NAME X\nROWS\n N  R\nRHS"), Err(Parse::MissingColumns));
        assert_eq!(
            into_sections("NAME X\nROWS\n N  R\nCOLUMNS\n C R 1\nENDATA"),
            Err(Parse::MissingRhs),
        );
        assert_eq!(
            into_sections("NAME X\nROWS\n N  R\nCOLUMNS\n C R 1\nRHS"),
            Err(Parse::MissingEndata),
        );
    }

    #[test]
    fn optional_sections_must_follow_rhs() {
        let program = "NAME X\nROWS\n N  R\nCOLUMNS\n C R 1\nRANGES\nRHS\nENDATA";
        assert_eq!(into_sections(program), Err(Parse::MissingRhs));

        let program = "NAME X\nROWS\n N  R\nCOLUMNS\n C R 1\nBOUNDS\nRHS\nENDATA";
        assert_eq!(into_sections(program), Err(Parse::MissingRhs));

        // Either relative order of RANGES and BOUNDS is allowed after RHS.
        let program = "NAME X\nROWS\n N  R\nCOLUMNS\n C R 1\nRHS\nBOUNDS\nRANGES\nENDATA";
        assert!(into_sections(program).is_ok());
    }

    #[test]
    fn degenerate_sections() {
        let program = "NAME X\nROWS\nCOLUMNS\n C R 1\nRHS\nENDATA";
        assert_eq!(into_sections(program), Err(Parse::EmptyRowsSection));

        let program = "NAME X\nROWS\n N  R\nCOLUMNS\nRHS\nENDATA";
        assert_eq!(into_sections(program), Err(Parse::EmptyColumnsSection));

        // An empty RHS buffer is allowed; only the marker is mandatory.
        let program = "NAME X\nROWS\n N  R\nCOLUMNS\n C R 1\nRHS\nENDATA";
        assert!(into_sections(program).is_ok());
    }

    #[test]
    fn name_token_inside_a_section_is_data() {
        // A column or vector literally called NAME must not be mistaken for the name line.
        let program = "\
NAME  PROB
ROWS
 N  COST
COLUMNS
    NAME      COST             2
RHS
    NAME      COST             5
ENDATA";
        let result = into_sections(program).unwrap();

        assert_eq!(result.name, "PROB");
        assert_eq!(result.buffers[Section::Columns], vec!["NAME      COST             2"]);
        assert_eq!(result.buffers[Section::Rhs], vec!["NAME      COST             5"]);
    }

    #[test]
    fn headers_must_be_line_initial() {
        // An indented ROWS token is an ordinary data line.
        let program = "NAME X\n  ROWS";
        assert_eq!(into_sections(program), Err(Parse::NotMpsDocument { line: "ROWS".to_string() }));

        // An indented ENDATA token does not close the document.
        let program = "NAME X\nROWS\n N  R\nCOLUMNS\n C R 1\nRHS\n   ENDATA";
        assert_eq!(into_sections(program), Err(Parse::MissingEndata));
    }

    #[test]
    fn nothing_after_endata_is_read() {
        let program = "NAME X\nROWS\n N  R\nCOLUMNS\n C R 1\nRHS\nENDATA\nnot mps at all";

        assert!(into_sections(program).is_ok());
    }
}
