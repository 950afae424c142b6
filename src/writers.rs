//! Writers for persisting a quadrature set
//!
//! The [Quadrature] itself knows nothing about files. These are thin
//! convenience functions for anyone that wants the directions and weights on
//! disk, whether for inspection or for feeding into another code.
//!
//! | Format                  | Extension | Description                          |
//! | ----------------------- | --------- | ------------------------------------ |
//! | [OutputFormat::Ascii]   | `.txt`    | Column data, one direction per line  |
//! | [OutputFormat::Json]    | `.json`   | Pretty JSON of the parallel arrays   |
//! | [OutputFormat::Binary]  | `.bin`    | bincode serialisation of the set     |
//!
//! ```rust, no_run
//! # use snquad::Quadrature;
//! # use snquad::writers::{write, OutputFormat};
//! let quadrature = Quadrature::new(8).unwrap();
//! // writes "s8.txt" and returns the full path
//! let path = write(&quadrature, "s8", OutputFormat::Ascii).unwrap();
//! ```

// standard library
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

// internal modules
use crate::quadrature::Quadrature;
use crate::utils::*;

// external crates
use anyhow::{Context, Result};
use log::debug;

/// Supported file formats for quadrature output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable column data
    Ascii,
    /// Pretty-printed JSON
    Json,
    /// bincode binary
    Binary,
}

impl OutputFormat {
    /// File extension used for the format, excluding the '.'
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Ascii => "txt",
            Self::Json => "json",
            Self::Binary => "bin",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            Self::Ascii => "ASCII",
            Self::Json => "JSON",
            Self::Binary => "binary",
        };
        write!(f, "{name}")
    }
}

/// Write a quadrature set to `<stem>.<ext>` in the chosen format
///
/// The extension is always appended to the full stem, so any dots already in
/// the stem are kept. Returns the full path of the file that was written.
pub fn write<P: AsRef<Path>>(
    quadrature: &Quadrature,
    stem: P,
    format: OutputFormat,
) -> Result<PathBuf> {
    // append rather than replace, stems like "s8.v2" keep their suffix
    let mut name = stem.as_ref().as_os_str().to_owned();
    name.push(".");
    name.push(format.extension());
    let path = PathBuf::from(name);
    debug!("Writing {format} format to {}", path.display());

    match format {
        OutputFormat::Ascii => write_ascii(quadrature, &path)?,
        OutputFormat::Json => write_json(quadrature, &path)?,
        OutputFormat::Binary => write_binary(quadrature, &path)?,
    }
    Ok(path)
}

/// Write the directions and weights as column data
///
/// A short `#` comment header is followed by one row per angle in index
/// order: `index xi eta mu w`.
pub fn write_ascii<P: AsRef<Path>>(quadrature: &Quadrature, path: P) -> Result<()> {
    let mut writer = get_writer(path.as_ref())?;

    let description = f!(
        "S{} product quadrature: {} Gauss-Legendre polar levels by {} midpoint \
        azimuthal sectors, {} angles in total, indexed as level * {} + sector.",
        quadrature.order(),
        quadrature.order(),
        2 * quadrature.order(),
        quadrature.num_angles(),
        2 * quadrature.order()
    );
    for line in textwrap::wrap(&description, 78) {
        writeln!(writer, "# {line}")?;
    }
    writeln!(
        writer,
        "# {:<7}{:>19}{:>19}{:>19}{:>19}",
        "index", "xi", "eta", "mu", "w"
    )?;

    for direction in quadrature.directions() {
        writeln!(writer, "  {direction}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the quadrature set to pretty JSON
pub fn write_json<P: AsRef<Path>>(quadrature: &Quadrature, path: P) -> Result<()> {
    let mut writer = get_writer(path.as_ref())?;
    serde_json::to_writer_pretty(&mut writer, quadrature)?;
    writer.flush()?;
    Ok(())
}

/// Write the quadrature set as a bincode binary
pub fn write_binary<P: AsRef<Path>>(quadrature: &Quadrature, path: P) -> Result<()> {
    let mut writer = get_writer(path.as_ref())?;
    bincode::serialize_into(&mut writer, quadrature)?;
    writer.flush()?;
    Ok(())
}

/// Helper function for cleaning up file IO boilerplate
fn get_writer(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path).with_context(|| f!("Could not create {}", path.display()))?;
    debug!("New bufwriter for {}", path.display());
    Ok(BufWriter::new(file))
}
