//! Discovery and parsing of `slice_<i>.<ext>` sample files.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::errors::LoadError;
use crate::table::SectionTable;

/// File naming and parsing options for a directory of slices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SliceFormat {
    /// File extension without the leading dot.
    pub extension: String,
    /// Number of header lines skipped at the top of each file.
    pub skip_rows: usize,
    /// Field delimiter. A space splits on runs of whitespace.
    pub delimiter: u8,
    /// Whether rows containing a NaN are dropped after parsing.
    pub drop_nan_rows: bool,
}

impl Default for SliceFormat {
    fn default() -> Self {
        Self {
            extension: "dat".to_string(),
            skip_rows: 1,
            delimiter: b',',
            drop_nan_rows: true,
        }
    }
}

impl SliceFormat {
    /// Extension with any leading dot removed.
    fn bare_extension(&self) -> &str {
        self.extension.trim_start_matches('.')
    }
}

/// Directory name used in diagnostics.
fn directory_label(directory: &Path) -> String {
    directory
        .file_name()
        .map_or_else(|| directory.display().to_string(), |name| name.to_string_lossy().into_owned())
}

/// Parse the numeric suffix of a `slice_<i>.<extension>` file name.
fn slice_index(file_name: &str, extension: &str) -> Option<usize> {
    let stem = file_name
        .strip_prefix("slice_")?
        .strip_suffix(extension)?
        .strip_suffix('.')?;
    if stem.is_empty() || !stem.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    stem.parse().ok()
}

/// List the slice files of a directory in index order.
///
/// The sequence starts at `slice_0` and stops at the first missing index; files
/// past a gap are reported and ignored.
///
/// # Errors
///
/// Returns [`LoadError::Io`] when the directory cannot be listed and
/// [`LoadError::NoSections`] when it holds no `slice_0` file.
pub fn discover_slices(directory: &Path, format: &SliceFormat) -> Result<Vec<PathBuf>, LoadError> {
    let io_error = |source| LoadError::Io {
        path: directory.to_path_buf(),
        source,
    };
    let mut found = BTreeMap::new();
    for entry in fs::read_dir(directory).map_err(io_error)? {
        let entry = entry.map_err(io_error)?;
        let name = entry.file_name();
        let Some(index) = name
            .to_str()
            .and_then(|name| slice_index(name, format.bare_extension()))
        else {
            continue;
        };
        found.insert(index, entry.path());
    }

    let total = found.len();
    let slices: Vec<PathBuf> = (0..).map_while(|index| found.remove(&index)).collect();
    if slices.is_empty() {
        return Err(LoadError::NoSections {
            directory: directory_label(directory),
        });
    }
    if slices.len() < total {
        warn!(
            directory = %directory.display(),
            contiguous = slices.len(),
            ignored = total - slices.len(),
            "slice numbering has a gap; later slices ignored"
        );
    }
    Ok(slices)
}

/// Parse a single slice file into a table.
///
/// # Errors
///
/// Returns [`LoadError`] when the file cannot be read, a field is not numeric or
/// a row is wider or narrower than the first one.
pub fn read_slice(path: &Path, format: &SliceFormat) -> Result<SectionTable, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let body: String = text
        .lines()
        .skip(format.skip_rows)
        .collect::<Vec<_>>()
        .join("\n");

    let whitespace = format.delimiter == b' ';
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(format.delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(body.as_bytes());

    let mut rows: Vec<Vec<f64>> = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record.map_err(|source| LoadError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        let values = record
            .iter()
            .filter(|field| !(whitespace && field.is_empty()))
            .enumerate()
            .map(|(column, field)| {
                field.parse::<f64>().map_err(|source| LoadError::Parse {
                    path: path.to_path_buf(),
                    row,
                    column,
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        if let Some(first) = rows.first() {
            if first.len() != values.len() {
                return Err(LoadError::Ragged {
                    path: path.to_path_buf(),
                    row,
                    expected: first.len(),
                    found: values.len(),
                });
            }
        }
        rows.push(values);
    }

    let width = rows.first().map_or(0, Vec::len);
    let table = SectionTable::from_uniform_rows(&rows, width);
    debug!(path = %path.display(), rows = table.len(), width, "slice parsed");
    Ok(if format.drop_nan_rows {
        table.without_nan_rows()
    } else {
        table
    })
}

/// Load every slice of a directory in index order.
///
/// # Errors
///
/// Returns [`LoadError`] when no slice is found or any slice fails to parse.
///
/// # Examples
/// ```no_run
/// use std::path::Path;
/// use aerotools::{load_sections, SliceFormat};
///
/// let sections = load_sections(Path::new("results/cp"), &SliceFormat::default())?;
/// println!("{} sections", sections.len());
/// # Ok::<(), aerotools::LoadError>(())
/// ```
pub fn load_sections(directory: &Path, format: &SliceFormat) -> Result<Vec<SectionTable>, LoadError> {
    let sections = discover_slices(directory, format)?
        .iter()
        .map(|path| read_slice(path, format))
        .collect::<Result<Vec<_>, _>>()?;
    info!(
        "Loaded {} sections in {}/",
        sections.len(),
        directory_label(directory)
    );
    Ok(sections)
}
