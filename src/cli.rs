use std::path::PathBuf;

use aerotools::{SectionColumns, SliceFormat};
use clap::{Args, Parser, Subcommand};

/// Integrate pressure distributions into aerodynamic coefficients.
#[derive(Parser, Debug)]
#[command(name = "aerotools", version)]
#[command(about = "Integrate pressure distributions into aerodynamic coefficients")]
pub struct Cli {
    /// Operation to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Operations offered by the command line.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Integrate one section file into lift, drag and moment coefficients
    Section(SectionArgs),
    /// Accumulate directories of sections into wing coefficients
    Wing(WingArgs),
    /// Compose the figures described by a study configuration
    Figures(FiguresArgs),
}

/// Arguments of the `section` command.
#[derive(Args, Debug, Clone)]
pub struct SectionArgs {
    /// Sample file holding one row per point along the section
    pub file: PathBuf,

    /// Angle of attack in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub alpha: f64,

    /// Column layout of the sample file
    #[command(flatten)]
    pub columns: ColumnArgs,

    /// Parsing options of the sample file
    #[command(flatten)]
    pub format: FormatArgs,
}

/// Arguments of the `wing` command.
#[derive(Args, Debug, Clone)]
pub struct WingArgs {
    /// Angle of attack in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub alpha: f64,

    /// Spanwise station of each section, comma separated
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    pub stations: Vec<f64>,

    /// Directory of pressure sections (`slice_<i>.<extension>`)
    #[arg(long)]
    pub cp: PathBuf,

    /// Directory of friction sections, integrated on the same stations
    #[arg(long)]
    pub cf: Option<PathBuf>,

    /// Column layout of the section files
    #[command(flatten)]
    pub columns: ColumnArgs,

    /// Parsing options of the section files
    #[command(flatten)]
    pub format: FormatArgs,
}

/// Arguments of the `figures` command.
#[derive(Args, Debug, Clone)]
pub struct FiguresArgs {
    /// Study configuration in JSON
    pub config: PathBuf,
}

/// Which columns of a sample file are integrated.
#[derive(Args, Debug, Clone, Copy)]
pub struct ColumnArgs {
    /// Column holding the chordwise position
    #[arg(long, default_value_t = 0)]
    pub x_column: usize,

    /// Column holding the pressure coefficient
    #[arg(long, default_value_t = 1)]
    pub cp_column: usize,

    /// Integrate the chordwise force from the section's vertical coordinate
    #[arg(long)]
    pub with_ordinate: bool,

    /// Column holding the vertical coordinate, read with `--with-ordinate`
    #[arg(long, default_value_t = 2)]
    pub y_column: usize,
}

impl ColumnArgs {
    /// Column mapping handed to the library.
    pub fn columns(&self) -> SectionColumns {
        SectionColumns {
            x: self.x_column,
            cp: self.cp_column,
            y: self.with_ordinate.then_some(self.y_column),
        }
    }
}

/// How sample files are parsed.
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Extension of the slice files
    #[arg(long, default_value = "dat")]
    pub extension: String,

    /// Header lines skipped at the top of each file
    #[arg(long, default_value_t = 1)]
    pub skip_rows: usize,

    /// Field delimiter: a single character, `tab` or `space`
    #[arg(long, default_value = ",", value_parser = parse_delimiter)]
    pub delimiter: u8,

    /// Keep rows holding a NaN instead of dropping them
    #[arg(long)]
    pub keep_nan_rows: bool,
}

impl FormatArgs {
    /// Parsing options handed to the library.
    pub fn slice_format(&self) -> SliceFormat {
        SliceFormat {
            extension: self.extension.clone(),
            skip_rows: self.skip_rows,
            delimiter: self.delimiter,
            drop_nan_rows: !self.keep_nan_rows,
        }
    }
}

/// Parse a delimiter name or single-byte character.
fn parse_delimiter(value: &str) -> Result<u8, String> {
    match value {
        "tab" | "\\t" => Ok(b'\t'),
        "space" => Ok(b' '),
        _ => match value.as_bytes() {
            [byte] => Ok(*byte),
            _ => Err(format!("`{value}` is not a single-byte delimiter")),
        },
    }
}
