//! # Reading of linear programs
//!
//! This module provides read functionality for linear program formats.
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::io::error::Import;
use crate::io::mps::Mps;

pub mod error;
pub mod mps;

/// Import a problem from a file.
///
/// Currently only supports the MPS filetype.
///
/// The file handle is scoped to this call; it is released before parsing starts, on both the
/// success and the failure path.
///
/// # Arguments
///
/// * `file_path`: Path of the problem file to read.
///
/// # Errors
///
/// When a file extension is unknown or a file cannot be found or read, an `Import::FileExtension`
/// or `Import::Io` error is returned. Problems with the contents of the file are returned as an
/// `Import::Parse` error.
pub fn import(file_path: &Path) -> Result<Mps, Import> {
    // Open and read the file
    let mut program = String::new();
    File::open(file_path)
        .map_err(Import::Io)?
        .read_to_string(&mut program)
        .map_err(Import::Io)?;

    // Choose the right parser
    match file_path.extension() {
        Some(extension) => match extension.to_str() {
            Some("mps" | "SIF") => mps::parse(&program).map_err(Import::Parse),
            Some(extension_string) => Err(Import::FileExtension(format!(
                "Could not recognise file extension \"{}\" of file: {:?}",
                extension_string, file_path
            ))),
            None => Err(Import::FileExtension(format!(
                "Could not convert OsStr to &str, probably invalid unicode: {:?}",
                extension
            ))),
        },
        None => Err(Import::FileExtension(format!(
            "Could not read extension from file path: {:?}",
            file_path
        ))),
    }
}
