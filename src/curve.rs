//! Curves extracted from sample tables and their per-kind styling.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::table::SectionTable;

/// Origin of a curve, which selects its default styling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveKind {
    /// Wind tunnel or flight measurements.
    Experimental,
    /// Viscous-inviscid interaction results.
    DartVii,
    /// Inviscid full-potential results.
    DartInviscid,
    /// Reynolds-averaged Navier-Stokes results.
    Rans,
    /// Anything not covered by a dedicated kind.
    #[default]
    #[serde(other)]
    Default,
}

/// Line and marker styling of a curve.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurveStyle {
    /// Line style, empty for markers only.
    pub line_style: String,
    /// Marker symbol, `None` for a plain line.
    pub marker: Option<String>,
    /// Line width in points.
    pub line_width: f64,
    /// Named colour.
    pub color: String,
    /// Marker size in points.
    pub marker_size: f64,
}

impl CurveStyle {
    /// Default styling for a kind of curve.
    ///
    /// # Examples
    /// ```
    /// use aerotools::{CurveKind, CurveStyle};
    ///
    /// let style = CurveStyle::for_kind(CurveKind::Experimental);
    /// assert_eq!(style.marker.as_deref(), Some("x"));
    /// assert!(style.line_style.is_empty());
    /// ```
    #[must_use]
    pub fn for_kind(kind: CurveKind) -> Self {
        let (line_style, marker, color, marker_size) = match kind {
            CurveKind::Experimental => ("", Some("x"), "black", 6.0),
            CurveKind::DartVii => ("-", None, "darkblue", 4.0),
            CurveKind::DartInviscid => ("--", None, "darkblue", 4.0),
            CurveKind::Rans => ("-", None, "firebrick", 4.0),
            CurveKind::Default => ("-", Some("3"), "black", 4.0),
        };
        Self {
            line_style: line_style.to_string(),
            marker: marker.map(str::to_string),
            line_width: 3.0,
            color: color.to_string(),
            marker_size,
        }
    }

    /// Layer user overrides on top of this style.
    #[must_use]
    pub fn with_overrides(mut self, overrides: &CurveStyleOverrides) -> Self {
        if let Some(line_style) = &overrides.line_style {
            self.line_style.clone_from(line_style);
        }
        if let Some(marker) = &overrides.marker {
            // An empty marker clears the kind's default.
            self.marker = (!marker.is_empty()).then(|| marker.clone());
        }
        if let Some(line_width) = overrides.line_width {
            self.line_width = line_width;
        }
        if let Some(color) = &overrides.color {
            self.color.clone_from(color);
        }
        if let Some(marker_size) = overrides.marker_size {
            self.marker_size = marker_size;
        }
        self
    }
}

impl Default for CurveStyle {
    fn default() -> Self {
        Self::for_kind(CurveKind::Default)
    }
}

/// User-supplied style fields; unset fields keep the kind's defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CurveStyleOverrides {
    /// Line style.
    #[serde(default, rename = "ls", skip_serializing_if = "Option::is_none")]
    pub line_style: Option<String>,
    /// Marker symbol; an empty string removes the marker.
    #[serde(default, rename = "mt", skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    /// Line width.
    #[serde(default, rename = "lw", skip_serializing_if = "Option::is_none")]
    pub line_width: Option<f64>,
    /// Colour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Marker size.
    #[serde(default, rename = "ms", skip_serializing_if = "Option::is_none")]
    pub marker_size: Option<f64>,
}

/// Columns plotted from a table and the factors applied to them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveSelection {
    /// Columns used for the horizontal and vertical axes.
    pub data_column: [usize; 2],
    /// Factors applied to the horizontal and vertical values.
    pub scale_data: [f64; 2],
}

impl Default for CurveSelection {
    fn default() -> Self {
        Self {
            data_column: [0, 1],
            scale_data: [1.0, 1.0],
        }
    }
}

/// A named, styled series of points.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    /// Legend label.
    pub name: String,
    /// Kind the styling was derived from.
    pub kind: CurveKind,
    /// Resolved styling.
    pub style: CurveStyle,
    /// Horizontal values.
    pub x: Vec<f64>,
    /// Vertical values.
    pub y: Vec<f64>,
}

impl Curve {
    /// Extract and scale two columns of a table.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Column`] when a selected column is not present.
    pub fn from_table(
        name: &str,
        kind: CurveKind,
        style: CurveStyle,
        table: &SectionTable,
        selection: CurveSelection,
    ) -> Result<Self, ConfigError> {
        let scaled = |axis: usize| {
            let column = selection.data_column[axis];
            table
                .column(column)
                .map(|values| {
                    values
                        .iter()
                        .map(|value| value * selection.scale_data[axis])
                        .collect::<Vec<f64>>()
                })
                .ok_or_else(|| ConfigError::Column {
                    curve: name.to_string(),
                    column,
                    width: table.width(),
                })
        };
        Ok(Self {
            name: name.to_string(),
            kind,
            style,
            x: scaled(0)?,
            y: scaled(1)?,
        })
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the curve has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Keep only the points inside the given inclusive limits.
    #[must_use]
    pub fn clip(&self, xlim: Option<[f64; 2]>, ylim: Option<[f64; 2]>) -> Self {
        let inside = |value: f64, limits: Option<[f64; 2]>| {
            limits.map_or(true, |[low, high]| value >= low && value <= high)
        };
        let (x, y) = self
            .x
            .iter()
            .zip(&self.y)
            .filter(|&(&x, &y)| inside(x, xlim) && inside(y, ylim))
            .map(|(&x, &y)| (x, y))
            .unzip();
        Self {
            x,
            y,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_kinds_fall_back_to_default() {
        let kind: CurveKind = serde_json::from_str("\"panel\"").expect("valid JSON");
        assert_eq!(kind, CurveKind::Default);
        let kind: CurveKind = serde_json::from_str("\"dartinviscid\"").expect("valid JSON");
        assert_eq!(kind, CurveKind::DartInviscid);
    }

    #[test]
    fn overrides_replace_only_supplied_fields() {
        let overrides: CurveStyleOverrides =
            serde_json::from_str(r#"{"color": "red", "mt": "", "lw": 6}"#).expect("valid JSON");
        let style = CurveStyle::for_kind(CurveKind::Default).with_overrides(&overrides);
        assert_eq!(style.color, "red");
        assert_eq!(style.marker, None);
        assert!((style.line_width - 6.0).abs() < f64::EPSILON);
        assert_eq!(style.line_style, "-");
        assert!((style.marker_size - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rans_curves_are_solid_firebrick() {
        let style = CurveStyle::for_kind(CurveKind::Rans);
        assert_eq!(style.line_style, "-");
        assert_eq!(style.color, "firebrick");
        assert_eq!(style.marker, None);
    }

    #[test]
    fn columns_are_selected_and_scaled() {
        let table = SectionTable::from_rows(&[[50.0, -0.2, 7.0], [100.0, 0.4, 8.0]])
            .expect("uniform rows");
        let selection = CurveSelection {
            data_column: [0, 1],
            scale_data: [0.01, 1.0],
        };
        let curve = Curve::from_table(
            "Experimental",
            CurveKind::Experimental,
            CurveStyle::for_kind(CurveKind::Experimental),
            &table,
            selection,
        )
        .expect("columns present");
        assert_eq!(curve.x, vec![0.5, 1.0]);
        assert_eq!(curve.y, vec![-0.2, 0.4]);

        let error = Curve::from_table(
            "RANS",
            CurveKind::Rans,
            CurveStyle::default(),
            &table,
            CurveSelection {
                data_column: [3, 4],
                ..selection
            },
        )
        .expect_err("column missing");
        assert!(matches!(error, ConfigError::Column { column: 3, width: 3, .. }));
    }

    #[test]
    fn clipping_keeps_points_inside_limits() {
        let curve = Curve {
            name: "Data".to_string(),
            kind: CurveKind::Default,
            style: CurveStyle::default(),
            x: vec![-0.1, 0.0, 0.5, 1.0, 1.1],
            y: vec![0.0, 2.0, -0.5, 0.1, 0.0],
        };
        let clipped = curve.clip(Some([0.0, 1.0]), Some([-1.0, 1.0]));
        assert_eq!(clipped.x, vec![0.5, 1.0]);
        assert_eq!(clipped.y, vec![-0.5, 0.1]);
        assert_eq!(curve.clip(None, None), curve);
    }
}
