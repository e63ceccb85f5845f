//! # Tokens used in MPS files

/// Indicates the start of a comment line.
pub const COMMENT_INDICATOR: &str = "*";

/// Indicates a no-op line; read and discarded without meaning.
pub const SKIP_INDICATOR: &str = "&";

/// Starts the line carrying the problem name.
///
/// Should be the first non-comment line of the document.
pub const NAME: &str = "NAME";

/// Header of the section declaring the constraint rows and the objective.
pub const ROWS: &str = "ROWS";

/// Header of the section declaring the variables and their coefficients.
pub const COLUMNS: &str = "COLUMNS";

/// Header of the section carrying right-hand side values.
pub const RHS: &str = "RHS";

/// Header of the optional section carrying range values.
pub const RANGES: &str = "RANGES";

/// Header of the optional section carrying variable bounds.
pub const BOUNDS: &str = "BOUNDS";

/// Marks the end of the document; nothing after it is read.
///
/// # Note
///
/// Notice the odd spelling.
pub const ENDATA: &str = "ENDATA";
