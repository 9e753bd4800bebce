//! Plot settings layered over defaults, and figures composed from curve sets.
//!
//! Rendering is left to an external tool: a [`Figure`] is written out as a JSON
//! description holding its settings and clipped curves.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::curve::Curve;
use crate::errors::ConfigError;

/// Axis, legend and output settings shared by every figure of a study.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlotSettings {
    /// Horizontal limits; points outside are dropped before output.
    pub xlim: Option<[f64; 2]>,
    /// Vertical limits; points outside are dropped before output.
    pub ylim: Option<[f64; 2]>,
    /// Whether the grid is drawn.
    pub grid: bool,
    /// Horizontal axis label.
    pub xlabel: String,
    /// Vertical axis label.
    pub ylabel: String,
    /// Whether the legend is drawn.
    pub legend: bool,
    /// Legend placement.
    pub legend_location: String,
    /// Whether the horizontal axis is inverted.
    pub invert_x: bool,
    /// Whether the vertical axis is inverted, as usual for pressure coefficients.
    pub invert_y: bool,
    /// Whether the top and right spines are hidden.
    pub hide_top_right_axes: bool,
    /// Whether figures are written to disk rather than only composed.
    pub save: bool,
    /// Output format extension.
    pub format: String,
    /// Directory receiving the output files.
    pub save_directory: PathBuf,
    /// Stem of the output file names.
    pub save_file_name: String,
}

impl Default for PlotSettings {
    fn default() -> Self {
        Self {
            xlim: None,
            ylim: None,
            grid: false,
            xlabel: String::new(),
            ylabel: String::new(),
            legend: false,
            legend_location: "best".to_string(),
            invert_x: false,
            invert_y: false,
            hide_top_right_axes: false,
            save: false,
            format: "png".to_string(),
            save_directory: PathBuf::new(),
            save_file_name: "figure".to_string(),
        }
    }
}

/// User-supplied plot settings; unset fields keep the defaults.
///
/// Field names follow the keys of the study configuration file.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct PlotOverrides {
    /// Horizontal limits.
    #[serde(default)]
    pub xlim: Option<[f64; 2]>,
    /// Vertical limits.
    #[serde(default)]
    pub ylim: Option<[f64; 2]>,
    /// Grid toggle.
    #[serde(default, rename = "gridOn")]
    pub grid: Option<bool>,
    /// Horizontal axis label.
    #[serde(default)]
    pub xlabel: Option<String>,
    /// Vertical axis label.
    #[serde(default)]
    pub ylabel: Option<String>,
    /// Legend toggle.
    #[serde(default, rename = "legendOn")]
    pub legend: Option<bool>,
    /// Legend placement.
    #[serde(default, rename = "legendLoc")]
    pub legend_location: Option<String>,
    /// Horizontal axis inversion.
    #[serde(default, rename = "inverse_x")]
    pub invert_x: Option<bool>,
    /// Vertical axis inversion.
    #[serde(default, rename = "inverse_y")]
    pub invert_y: Option<bool>,
    /// Top and right spine removal.
    #[serde(default, rename = "removeTRaxis")]
    pub hide_top_right_axes: Option<bool>,
    /// Output toggle.
    #[serde(default)]
    pub save: Option<bool>,
    /// Output format.
    #[serde(default)]
    pub format: Option<String>,
    /// Output directory.
    #[serde(default, rename = "savedirectory")]
    pub save_directory: Option<PathBuf>,
    /// Output file stem.
    #[serde(default, rename = "savefilename")]
    pub save_file_name: Option<String>,
}

impl PlotSettings {
    /// Layer user overrides on top of these settings.
    #[must_use]
    pub fn with_overrides(self, overrides: &PlotOverrides) -> Self {
        let o = overrides.clone();
        Self {
            xlim: o.xlim.or(self.xlim),
            ylim: o.ylim.or(self.ylim),
            grid: o.grid.unwrap_or(self.grid),
            xlabel: o.xlabel.unwrap_or(self.xlabel),
            ylabel: o.ylabel.unwrap_or(self.ylabel),
            legend: o.legend.unwrap_or(self.legend),
            legend_location: o.legend_location.unwrap_or(self.legend_location),
            invert_x: o.invert_x.unwrap_or(self.invert_x),
            invert_y: o.invert_y.unwrap_or(self.invert_y),
            hide_top_right_axes: o.hide_top_right_axes.unwrap_or(self.hide_top_right_axes),
            save: o.save.unwrap_or(self.save),
            format: o.format.unwrap_or(self.format),
            save_directory: o.save_directory.unwrap_or(self.save_directory),
            save_file_name: o.save_file_name.unwrap_or(self.save_file_name),
        }
    }

    /// Whether any axis limit is set.
    #[must_use]
    pub fn has_limits(&self) -> bool {
        self.xlim.is_some() || self.ylim.is_some()
    }
}

/// One figure: the settings and the curves drawn together.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    /// Settings applied to the figure.
    pub settings: PlotSettings,
    /// Curves in drawing order.
    pub curves: Vec<Curve>,
}

impl Figure {
    /// Output file of the figure at `index`: `<directory>/<stem>_<index>.<format>`.
    #[must_use]
    pub fn output_path(&self, index: usize) -> PathBuf {
        self.settings.save_directory.join(format!(
            "{}_{index}.{}",
            self.settings.save_file_name, self.settings.format
        ))
    }

    /// Description file of the figure at `index`, next to its output file.
    #[must_use]
    pub fn description_path(&self, index: usize) -> PathBuf {
        self.output_path(index).with_extension("json")
    }

    /// Curves as they will be drawn, clipped to the axis limits.
    #[must_use]
    pub fn displayed_curves(&self) -> Vec<Curve> {
        if !self.settings.has_limits() {
            return self.curves.clone();
        }
        self.curves
            .iter()
            .map(|curve| curve.clip(self.settings.xlim, self.settings.ylim))
            .collect()
    }

    /// The figure as handed to a renderer.
    #[must_use]
    pub fn description(&self) -> Figure {
        Figure {
            settings: self.settings.clone(),
            curves: self.displayed_curves(),
        }
    }

    /// Write the description of this figure as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] when serialization fails and
    /// [`ConfigError::Io`] when the file cannot be written.
    pub fn write_description(&self, path: &Path) -> Result<(), ConfigError> {
        let text = serde_json::to_string_pretty(&self.description())?;
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, text).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Compose figures from curve sets: figure `i` holds curve `i` of every set.
///
/// # Errors
///
/// Returns [`ConfigError::NoCurves`] when no set is supplied and
/// [`ConfigError::MismatchedFigureCounts`] when the sets differ in length.
pub fn compose_figures(
    curve_sets: Vec<Vec<Curve>>,
    settings: &PlotSettings,
) -> Result<Vec<Figure>, ConfigError> {
    let figure_count = curve_sets.first().ok_or(ConfigError::NoCurves)?.len();
    for (index, set) in curve_sets.iter().enumerate() {
        if set.len() != figure_count {
            return Err(ConfigError::MismatchedFigureCounts {
                curve: set
                    .first()
                    .map_or_else(|| format!("#{index}"), |curve| curve.name.clone()),
                expected: figure_count,
                found: set.len(),
            });
        }
    }

    let curves_per_figure = curve_sets.len();
    let mut figures: Vec<Figure> = (0..figure_count)
        .map(|_| Figure {
            settings: settings.clone(),
            curves: Vec::with_capacity(curves_per_figure),
        })
        .collect();
    for set in curve_sets {
        for (figure, curve) in figures.iter_mut().zip(set) {
            figure.curves.push(curve);
        }
    }
    info!(
        "Generated {} figures with {} curves each.",
        figures.len(),
        curves_per_figure
    );
    Ok(figures)
}
