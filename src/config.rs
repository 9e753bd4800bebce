//! Study configuration: which curve sets to load and how to lay out the figures.
//!
//! A study is a JSON document with a `graph` object (see [`PlotOverrides`]) and a
//! `curves` array (see [`CurveSpec`]):
//!
//! ```json
//! {
//!   "graph": { "xlim": [0, 1], "ylabel": "Cp", "inverse_y": true, "save": true },
//!   "curves": [
//!     { "name": "Experimental", "type": "experimental", "path": "data/exp",
//!       "scaleData": [0.01, 1] },
//!     { "name": "RANS", "type": "rans", "path": "data/rans", "dataColumn": [3, 4] }
//!   ]
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::info;

use crate::curve::{Curve, CurveKind, CurveSelection, CurveStyle, CurveStyleOverrides};
use crate::errors::ConfigError;
use crate::loader::{load_sections, SliceFormat};
use crate::plot::{compose_figures, Figure, PlotOverrides, PlotSettings};
use crate::table::SectionTable;

/// Default legend label.
fn default_name() -> String {
    "Data".to_string()
}

/// Default plotted columns.
fn default_data_column() -> [usize; 2] {
    CurveSelection::default().data_column
}

/// Default scale factors.
fn default_scale_data() -> [f64; 2] {
    CurveSelection::default().scale_data
}

/// Default slice file extension.
fn default_extension() -> String {
    SliceFormat::default().extension
}

/// Default number of header lines.
fn default_skip_rows() -> usize {
    SliceFormat::default().skip_rows
}

/// Default field delimiter.
fn default_delimiter() -> char {
    ','
}

/// One curve set: a slice directory or inline tables, plus its styling.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurveSpec {
    /// Legend label.
    #[serde(default = "default_name")]
    pub name: String,
    /// Kind selecting the default styling.
    #[serde(default, rename = "type")]
    pub kind: CurveKind,
    /// Directory of `slice_<i>` files, one per figure.
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Inline tables, one per figure, each a list of rows.
    #[serde(default)]
    pub data: Option<Vec<Vec<Vec<f64>>>>,
    /// Columns used for the horizontal and vertical axes.
    #[serde(default = "default_data_column")]
    pub data_column: [usize; 2],
    /// Factors applied to the horizontal and vertical values.
    #[serde(default = "default_scale_data")]
    pub scale_data: [f64; 2],
    /// Slice file extension.
    #[serde(default = "default_extension", alias = "extention")]
    pub extension: String,
    /// Header lines skipped in each slice file.
    #[serde(default = "default_skip_rows", rename = "skiprows")]
    pub skip_rows: usize,
    /// Field delimiter of the slice files.
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    /// Whether rows holding a NaN are dropped.
    #[serde(default)]
    pub check_curve: bool,
    /// Style fields overriding the kind's defaults.
    #[serde(flatten)]
    pub style: CurveStyleOverrides,
}

impl CurveSpec {
    /// Parsing options for the slice directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Delimiter`] when the delimiter is not a single-byte character.
    pub fn slice_format(&self) -> Result<SliceFormat, ConfigError> {
        let delimiter = u8::try_from(self.delimiter).map_err(|_| ConfigError::Delimiter {
            curve: self.name.clone(),
            delimiter: self.delimiter,
        })?;
        Ok(SliceFormat {
            extension: self.extension.clone(),
            skip_rows: self.skip_rows,
            delimiter,
            drop_nan_rows: self.check_curve,
        })
    }

    /// Resolved styling: the kind's defaults with the overrides applied.
    #[must_use]
    pub fn resolved_style(&self) -> CurveStyle {
        CurveStyle::for_kind(self.kind).with_overrides(&self.style)
    }

    /// Load the tables of this set, from disk or from the inline data.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when neither source is present, the directory cannot
    /// be loaded or inline rows are ragged.
    pub fn tables(&self) -> Result<Vec<SectionTable>, ConfigError> {
        if let Some(path) = &self.path {
            return Ok(load_sections(path, &self.slice_format()?)?);
        }
        let data = self.data.as_ref().ok_or_else(|| ConfigError::MissingData {
            curve: self.name.clone(),
        })?;
        data.iter()
            .map(|rows| {
                SectionTable::from_rows(rows).ok_or_else(|| ConfigError::RaggedData {
                    curve: self.name.clone(),
                })
            })
            .collect()
    }

    /// Build one curve per table of this set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the tables cannot be loaded or lack a selected column.
    pub fn curves(&self) -> Result<Vec<Curve>, ConfigError> {
        let style = self.resolved_style();
        let selection = CurveSelection {
            data_column: self.data_column,
            scale_data: self.scale_data,
        };
        self.tables()?
            .iter()
            .map(|table| Curve::from_table(&self.name, self.kind, style.clone(), table, selection))
            .collect()
    }
}

/// Raw study document.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct StudyConfig {
    /// Plot settings overriding the defaults.
    #[serde(default)]
    pub graph: PlotOverrides,
    /// Curve sets; every set contributes one curve to each figure.
    #[serde(default)]
    pub curves: Vec<CurveSpec>,
}

/// A validated study ready to produce figures.
#[derive(Clone, Debug, PartialEq)]
pub struct Study {
    /// Resolved plot settings.
    settings: PlotSettings,
    /// Curve sets in drawing order.
    curves: Vec<CurveSpec>,
}

impl Study {
    /// Validate a configuration and resolve its plot settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoCurves`] when no curve set is listed.
    pub fn new(config: StudyConfig) -> Result<Self, ConfigError> {
        if config.curves.is_empty() {
            return Err(ConfigError::NoCurves);
        }
        Ok(Self {
            settings: PlotSettings::default().with_overrides(&config.graph),
            curves: config.curves,
        })
    }

    /// Parse a study from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed documents and
    /// [`ConfigError::NoCurves`] when no curve set is listed.
    ///
    /// # Examples
    /// ```
    /// use aerotools::Study;
    ///
    /// let study = Study::from_json(
    ///     r#"{"graph": {"legendOn": true},
    ///         "curves": [{"name": "Base", "data": [[[0, 0], [1, 1]]]}]}"#,
    /// )?;
    /// let figures = study.figures()?;
    /// assert_eq!(figures.len(), 1);
    /// assert!(figures[0].settings.legend);
    /// # Ok::<(), aerotools::ConfigError>(())
    /// ```
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Self::new(serde_json::from_str(text)?)
    }

    /// Read a study from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read, otherwise as
    /// [`Study::from_json`].
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Resolved plot settings.
    #[must_use]
    pub fn settings(&self) -> &PlotSettings {
        &self.settings
    }

    /// Curve sets in drawing order.
    #[must_use]
    pub fn curve_specs(&self) -> &[CurveSpec] {
        &self.curves
    }

    /// Load every curve set and compose the figures.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a set cannot be loaded or the sets differ in length.
    pub fn figures(&self) -> Result<Vec<Figure>, ConfigError> {
        let curve_sets = self
            .curves
            .iter()
            .map(CurveSpec::curves)
            .collect::<Result<Vec<_>, _>>()?;
        compose_figures(curve_sets, &self.settings)
    }

    /// Write one description per figure when saving is enabled. Returns the paths
    /// written.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a description cannot be written.
    pub fn write_descriptions(&self, figures: &[Figure]) -> Result<Vec<PathBuf>, ConfigError> {
        if !self.settings.save {
            return Ok(Vec::new());
        }
        let mut written = Vec::with_capacity(figures.len());
        for (index, figure) in figures.iter().enumerate() {
            let path = figure.description_path(index);
            info!("Saving figure {}", path.display());
            figure.write_description(&path)?;
            written.push(path);
        }
        Ok(written)
    }

    /// Compose the figures and write their descriptions.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the figures cannot be composed or written.
    pub fn run(&self) -> Result<Vec<PathBuf>, ConfigError> {
        let figures = self.figures()?;
        self.write_descriptions(&figures)
    }
}
