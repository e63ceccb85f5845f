//! # Error reporting for reading of linear program files
//!
//! Every structural violation an MPS document can exhibit maps to its own [`Parse`] variant, so
//! callers dispatch on the variant rather than on message text. All variants are immediately fatal
//! to the call that produced them; nothing is retried internally, and the caller decides whether
//! to skip, log or abort a batch.
use std::io;

use thiserror::Error;

use crate::io::mps::Section;

/// An `Import` error is created when an error was encountered during IO or parsing.
///
/// It is the highest error in the io error hierarchy.
#[derive(Debug, Error)]
pub enum Import {
    /// The file extension of the provided file path is not known or supported.
    ///
    /// The contained `String` is a message for the end user.
    #[error("{0}")]
    FileExtension(String),
    /// The file to read isn't found, or the reading of the file couldn't start or was interrupted.
    #[error("could not read the file")]
    Io(#[source] io::Error),
    /// Contents of the file could not be parsed into an MPS problem.
    #[error("could not parse the file contents")]
    Parse(#[from] Parse),
}

/// A `Parse` error describes exactly one way in which a document fails to be a valid MPS problem.
///
/// The enumeration is closed: every failure mode the parser can detect has its own variant, each
/// carrying the context needed to locate the problem (offending line text, section, name).
#[derive(Debug, Error, PartialEq)]
pub enum Parse {
    /// A data line was encountered while no section was open.
    ///
    /// Distinct from all other variants: the input is not recognizable as an MPS document at all.
    #[error("not an MPS document: data line \"{line}\" before any section header")]
    NotMpsDocument {
        /// The offending line, as read from the input.
        line: String,
    },
    /// The document has no NAME section.
    #[error("no NAME section")]
    MissingName,
    /// The document has no ROWS section, or opens a later section before ROWS.
    #[error("no ROWS section")]
    MissingRows,
    /// The document has no COLUMNS section, or opens a later section before COLUMNS.
    #[error("no COLUMNS section")]
    MissingColumns,
    /// The document has no RHS section, or opens RANGES or BOUNDS before RHS.
    #[error("no RHS section")]
    MissingRhs,
    /// The document has no ENDATA marker.
    #[error("no ENDATA marker")]
    MissingEndata,
    /// The ROWS section carries no data lines; a problem without rows is meaningless.
    #[error("ROWS section contains no data")]
    EmptyRowsSection,
    /// The COLUMNS section carries no data lines; a problem without variables is meaningless.
    #[error("COLUMNS section contains no data")]
    EmptyColumnsSection,
    /// The same row name was declared twice in the ROWS section.
    #[error("duplicate row name \"{name}\" in ROWS")]
    DuplicateRowName {
        /// The row name that was declared more than once.
        name: String,
    },
    /// The row type code is none of `N`, `L`, `G`, `E`.
    #[error("unknown row type \"{code}\" in ROWS line \"{line}\"")]
    UnknownRowType {
        /// The unrecognized single-character type code.
        code: char,
        /// The offending line, as read from the input.
        line: String,
    },
    /// A line in the ROWS section matches no recognized layout.
    #[error("cannot parse ROWS line \"{line}\"")]
    MalformedRowsLine {
        /// The offending line, as read from the input.
        line: String,
    },
    /// A row was referenced before being declared in the ROWS section.
    #[error("unknown row \"{name}\" referenced in {section}")]
    UnknownRowReference {
        /// The name of the row that was never declared.
        name: String,
        /// The section in which the dangling reference appeared.
        section: Section,
    },
    /// A line in the COLUMNS section matches neither the 2-pair nor the 1-pair layout.
    #[error("cannot parse COLUMNS line \"{line}\"")]
    MalformedColumnsLine {
        /// The offending line, as read from the input.
        line: String,
    },
    /// A column was referenced in BOUNDS before being declared in the COLUMNS section.
    #[error("unknown column \"{name}\" referenced in BOUNDS")]
    UnknownColumnReference {
        /// The name of the column that was never declared.
        name: String,
    },
    /// A line in the RHS section matches none of the recognized layouts.
    #[error("cannot parse RHS line \"{line}\"")]
    MalformedRhsLine {
        /// The offending line, as read from the input.
        line: String,
    },
    /// A line in the RANGES section matches none of the recognized layouts.
    #[error("cannot parse RANGES line \"{line}\"")]
    MalformedRangesLine {
        /// The offending line, as read from the input.
        line: String,
    },
    /// The bound type code is none of `LO`, `UP`, `FX`, `FR`, `MI`, `PL`.
    #[error("unknown bound type \"{code}\" in BOUNDS line \"{line}\"")]
    UnknownBoundType {
        /// The unrecognized type code token.
        code: String,
        /// The offending line, as read from the input.
        line: String,
    },
    /// A line in the BOUNDS section matches no recognized layout.
    #[error("cannot parse BOUNDS line \"{line}\"")]
    MalformedBoundsLine {
        /// The offending line, as read from the input.
        line: String,
    },
}
