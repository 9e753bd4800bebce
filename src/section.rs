//! Integration of a single section's pressure distribution into force coefficients.
//!
//! The distribution is integrated segment by segment with the trapezoidal rule.
//! Every segment contributes `dx = -(x[i+1] - x[i])`, so a path traversed towards
//! decreasing `x` counts as positive. Reversing the sample order therefore negates
//! every coefficient.

use crate::coefficients::{BodyForce, SectionCoefficients};
use crate::errors::SectionError;
use crate::table::SectionTable;

/// Chordwise position of the moment reference point.
pub const QUARTER_CHORD: f64 = 0.25;

/// Which table columns hold the section coordinates and pressure coefficients.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionColumns {
    /// Column holding the chordwise position.
    pub x: usize,
    /// Column holding the pressure coefficient.
    pub cp: usize,
    /// Column holding the section's vertical coordinate, if the tangential
    /// contribution should be integrated.
    pub y: Option<usize>,
}

impl Default for SectionColumns {
    fn default() -> Self {
        Self {
            x: 0,
            cp: 1,
            y: None,
        }
    }
}

/// Samples of one section along its integration path.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionSamples {
    /// Chordwise positions.
    x: Vec<f64>,
    /// Pressure coefficients.
    cp: Vec<f64>,
    /// Optional vertical coordinates.
    y: Option<Vec<f64>>,
}

impl SectionSamples {
    /// Samples integrated in pressure-only mode.
    #[must_use]
    pub fn pressure(x: Vec<f64>, cp: Vec<f64>) -> Self {
        Self { x, cp, y: None }
    }

    /// Samples integrated in pressure+friction mode.
    #[must_use]
    pub fn with_ordinate(x: Vec<f64>, cp: Vec<f64>, y: Vec<f64>) -> Self {
        Self { x, cp, y: Some(y) }
    }

    /// Extract the samples from a table using a column mapping.
    ///
    /// # Errors
    ///
    /// Returns [`SectionError::MissingColumn`] when a mapped column is not present.
    pub fn from_table(table: &SectionTable, columns: SectionColumns) -> Result<Self, SectionError> {
        let extract = |role: &'static str, column: usize| {
            table
                .column_vec(column)
                .ok_or(SectionError::MissingColumn {
                    role,
                    column,
                    width: table.width(),
                })
        };
        let x = extract("x", columns.x)?;
        let cp = extract("cp", columns.cp)?;
        let y = columns.y.map(|column| extract("y", column)).transpose()?;
        Ok(Self { x, cp, y })
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cp.len()
    }

    /// Whether the section holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cp.is_empty()
    }

    /// Whether the tangential contribution is integrated.
    #[must_use]
    pub fn has_ordinate(&self) -> bool {
        self.y.is_some()
    }

    /// Return the samples traversed in the opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let flip = |values: &[f64]| values.iter().rev().copied().collect::<Vec<_>>();
        Self {
            x: flip(&self.x),
            cp: flip(&self.cp),
            y: self.y.as_deref().map(flip),
        }
    }

    /// Integrate the samples at an angle of attack in radians.
    ///
    /// # Errors
    ///
    /// Returns [`SectionError`] when the section has fewer than two samples or its
    /// arrays differ in length.
    pub fn integrate(&self, alpha: f64) -> Result<SectionCoefficients, SectionError> {
        match &self.y {
            None => integrate_pressure(alpha, &self.cp, &self.x),
            Some(y) => integrate_pressure_friction(alpha, &self.cp, &self.x, y),
        }
    }
}

/// Validate the sample count and the length of each coordinate array.
fn check_samples(cp: &[f64], coordinates: &[(&'static str, &[f64])]) -> Result<(), SectionError> {
    for &(array, values) in coordinates {
        if values.len() != cp.len() {
            return Err(SectionError::LengthMismatch {
                array,
                expected: cp.len(),
                found: values.len(),
            });
        }
    }
    if cp.len() < 2 {
        return Err(SectionError::TooFewSamples { len: cp.len() });
    }
    Ok(())
}

/// Integrate a pressure distribution into lift, drag and quarter-chord moment.
///
/// Only the normal force is integrated; it is resolved into lift and drag by the
/// angle of attack `alpha`, given in radians.
///
/// # Errors
///
/// Returns [`SectionError::LengthMismatch`] when `x` and `cp` differ in length and
/// [`SectionError::TooFewSamples`] when fewer than two samples are supplied.
///
/// # Examples
/// ```
/// use aerotools::integrate_pressure;
///
/// // Lower surface traversed forward, upper surface back to the trailing edge.
/// let x = [1.0, 0.0, 0.0, 1.0];
/// let cp = [0.2, 0.2, -0.6, -0.6];
/// let coefficients = integrate_pressure(0.0, &cp, &x).expect("valid section");
/// assert!((coefficients.cl - 0.8).abs() < 1.0e-12);
/// ```
pub fn integrate_pressure(
    alpha: f64,
    cp: &[f64],
    x: &[f64],
) -> Result<SectionCoefficients, SectionError> {
    check_samples(cp, &[("x", x)])?;

    let mut normal = 0.0;
    let mut moment = 0.0;
    for i in 0..cp.len() - 1 {
        let dx = -(x[i + 1] - x[i]);
        normal += 0.5 * dx * (cp[i + 1] + cp[i]);
        moment -= 0.5 * (cp[i + 1] * (x[i + 1] - QUARTER_CHORD) + cp[i] * (x[i] - QUARTER_CHORD)) * dx;
    }

    Ok(SectionCoefficients::from_body(
        BodyForce::new(0.0, normal),
        moment,
        alpha,
    ))
}

/// Integrate a pressure distribution including the tangential contribution.
///
/// `y` is the vertical coordinate of each sample; the pressure acting on the
/// projected thickness produces the chordwise force, which is rotated together
/// with the normal force into wind axes.
///
/// # Errors
///
/// Returns [`SectionError::LengthMismatch`] when `x` or `y` differ in length from
/// `cp` and [`SectionError::TooFewSamples`] when fewer than two samples are supplied.
pub fn integrate_pressure_friction(
    alpha: f64,
    cp: &[f64],
    x: &[f64],
    y: &[f64],
) -> Result<SectionCoefficients, SectionError> {
    check_samples(cp, &[("x", x), ("y", y)])?;

    let mut force = BodyForce::default();
    let mut moment = 0.0;
    for i in 0..cp.len() - 1 {
        let dx = -(x[i + 1] - x[i]);
        let dy = -(y[i + 1] - y[i]);
        force.normal += 0.5 * dx * (cp[i + 1] + cp[i]);
        force.tangential -= 0.5 * dy * (cp[i + 1] + cp[i]);
        moment -= 0.5 * (cp[i + 1] * (x[i + 1] - QUARTER_CHORD) + cp[i] * (x[i] - QUARTER_CHORD)) * dx
            + 0.5 * (cp[i + 1] * y[i + 1] + cp[i] * y[i]) * dy;
    }

    Ok(SectionCoefficients::from_body(force, moment, alpha))
}
