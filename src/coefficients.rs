//! Fundamental coefficient types and the rotation from body to wind axes.

use nalgebra::{Rotation2, Vector2};
use serde::{Deserialize, Serialize};

/// Section-local force coefficients resolved along the chord and normal to it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyForce {
    /// Force coefficient along the chord line (`Cx`).
    pub tangential: f64,
    /// Force coefficient normal to the chord line (`Cy`).
    pub normal: f64,
}

impl BodyForce {
    /// Create a [`BodyForce`] with explicit components.
    #[must_use]
    pub const fn new(tangential: f64, normal: f64) -> Self {
        Self { tangential, normal }
    }

    /// Convert the force into an algebraic vector ordered `(Cx, Cy)`.
    #[must_use]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.tangential, self.normal)
    }

    /// Resolve the force into wind axes for an angle of attack in radians.
    ///
    /// The returned vector is ordered `(Cd, Cl)`, i.e. the body components rotated
    /// by `-alpha`: `Cd = Cy sin(a) + Cx cos(a)` and `Cl = Cy cos(a) - Cx sin(a)`.
    #[must_use]
    pub fn to_wind(self, alpha: f64) -> Vector2<f64> {
        Rotation2::new(-alpha) * self.to_vector()
    }
}

impl Default for BodyForce {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl From<Vector2<f64>> for BodyForce {
    fn from(value: Vector2<f64>) -> Self {
        Self::new(value.x, value.y)
    }
}

impl From<BodyForce> for Vector2<f64> {
    fn from(value: BodyForce) -> Self {
        value.to_vector()
    }
}

/// Lift, drag and quarter-chord pitching moment coefficients of one section.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SectionCoefficients {
    /// Lift coefficient.
    pub cl: f64,
    /// Drag coefficient.
    pub cd: f64,
    /// Pitching moment coefficient about the quarter chord.
    pub cm: f64,
}

impl SectionCoefficients {
    /// Create a [`SectionCoefficients`] with explicit values.
    #[must_use]
    pub const fn new(cl: f64, cd: f64, cm: f64) -> Self {
        Self { cl, cd, cm }
    }

    /// Rotate a body-axis force into lift and drag and pair it with the moment.
    #[must_use]
    pub fn from_body(force: BodyForce, cm: f64, alpha: f64) -> Self {
        let wind = force.to_wind(alpha);
        Self::new(wind.y, wind.x, cm)
    }
}

impl Default for SectionCoefficients {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

/// Wing-level coefficients accumulated over the span.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WingCoefficients {
    /// Lift coefficient.
    pub cl: f64,
    /// Drag coefficient.
    pub cd: f64,
    /// Pitching moment coefficient.
    pub cm: f64,
}

impl WingCoefficients {
    /// Create a [`WingCoefficients`] with explicit values.
    #[must_use]
    pub const fn new(cl: f64, cd: f64, cm: f64) -> Self {
        Self { cl, cd, cm }
    }

    /// Add a section's coefficients weighted by its spanwise width.
    pub fn add_weighted(&mut self, section: SectionCoefficients, width: f64) {
        self.cl += section.cl * width;
        self.cd += section.cd * width;
        self.cm += section.cm * width;
    }
}

impl Default for WingCoefficients {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

/// Convenience helper for creating [`SectionCoefficients`] instances.
///
/// # Examples
/// ```
/// use aerotools::section_coefficients;
///
/// let flat = section_coefficients(0.5, 0.01, -0.05);
/// assert_eq!(flat.cl, 0.5);
/// ```
#[must_use]
pub const fn section_coefficients(cl: f64, cd: f64, cm: f64) -> SectionCoefficients {
    SectionCoefficients::new(cl, cd, cm)
}
