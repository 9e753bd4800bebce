//! Spanwise accumulation of section coefficients into wing coefficients.
//!
//! Each section is weighted by the distance between its own spanwise station and
//! the previous one. The first section measures from `0` and any section past the
//! last station measures to `1`, which assumes stations normalized to a half span
//! of unit length. Stations are used as given and never renormalized.

use std::path::Path;

use tracing::debug;

use crate::coefficients::WingCoefficients;
use crate::errors::{AccumulationError, Contribution, WingError};
use crate::loader::{load_sections, SliceFormat};
use crate::section::{SectionColumns, SectionSamples};

/// Spanwise width assigned to the section at `index`.
///
/// # Errors
///
/// Returns [`AccumulationError::MissingStation`] when `index - 1` is past the last
/// station.
///
/// # Examples
/// ```
/// use aerotools::span_width;
///
/// let stations = [0.25, 0.5, 0.75];
/// assert_eq!(span_width(&stations, 0).unwrap(), 0.25);
/// assert_eq!(span_width(&stations, 2).unwrap(), 0.25);
/// assert_eq!(span_width(&stations, 3).unwrap(), 0.25);
/// assert!(span_width(&stations, 4).is_err());
/// ```
pub fn span_width(stations: &[f64], index: usize) -> Result<f64, AccumulationError> {
    let next = stations.get(index).copied().unwrap_or(1.0);
    let previous = match index.checked_sub(1) {
        None => 0.0,
        Some(previous) => *stations
            .get(previous)
            .ok_or(AccumulationError::MissingStation {
                index,
                stations: stations.len(),
            })?,
    };
    Ok(next - previous)
}

/// Trapezoidal spanwise integration at a fixed angle of attack.
#[derive(Clone, Copy, Debug)]
pub struct SpanwiseAccumulator<'a> {
    /// Spanwise station of each section.
    stations: &'a [f64],
    /// Angle of attack in radians, shared by every section.
    alpha: f64,
}

impl<'a> SpanwiseAccumulator<'a> {
    /// Create an accumulator over `stations` at `alpha` radians.
    #[must_use]
    pub fn new(stations: &'a [f64], alpha: f64) -> Self {
        Self { stations, alpha }
    }

    /// Integrate the pressure sections and, when supplied, the friction sections
    /// into a single set of wing coefficients.
    ///
    /// Both sets are weighted against the same stations and summed into the same
    /// totals.
    ///
    /// # Errors
    ///
    /// Returns [`AccumulationError`] when a section fails its preconditions or has
    /// no preceding station.
    pub fn accumulate(
        &self,
        cp_sections: &[SectionSamples],
        cf_sections: Option<&[SectionSamples]>,
    ) -> Result<WingCoefficients, AccumulationError> {
        let mut totals = WingCoefficients::default();
        self.add_contribution(&mut totals, Contribution::Pressure, cp_sections)?;
        if let Some(cf_sections) = cf_sections {
            self.add_contribution(&mut totals, Contribution::Friction, cf_sections)?;
        }
        Ok(totals)
    }

    /// Weight every section of one contribution set into the running totals.
    fn add_contribution(
        &self,
        totals: &mut WingCoefficients,
        set: Contribution,
        sections: &[SectionSamples],
    ) -> Result<(), AccumulationError> {
        for (index, section) in sections.iter().enumerate() {
            let width = span_width(self.stations, index)?;
            let coefficients = section
                .integrate(self.alpha)
                .map_err(|source| AccumulationError::Section { set, index, source })?;
            debug!(
                %set,
                index,
                width,
                cl = coefficients.cl,
                cd = coefficients.cd,
                cm = coefficients.cm,
                "section integrated"
            );
            totals.add_weighted(coefficients, width);
        }
        Ok(())
    }
}

/// Accumulate wing coefficients from in-memory sections.
///
/// Shorthand for [`SpanwiseAccumulator::accumulate`].
///
/// # Errors
///
/// Returns [`AccumulationError`] when a section fails its preconditions or has no
/// preceding station.
pub fn accumulate(
    stations: &[f64],
    alpha: f64,
    cp_sections: &[SectionSamples],
    cf_sections: Option<&[SectionSamples]>,
) -> Result<WingCoefficients, AccumulationError> {
    SpanwiseAccumulator::new(stations, alpha).accumulate(cp_sections, cf_sections)
}

/// Pressure and friction sections loaded from disk.
#[derive(Clone, Debug, PartialEq)]
pub struct WingSections {
    /// Sections carrying the pressure distribution.
    pub pressure: Vec<SectionSamples>,
    /// Sections carrying the friction distribution, if a directory was given.
    pub friction: Option<Vec<SectionSamples>>,
}

impl WingSections {
    /// Load the pressure directory and, when given, the friction directory.
    ///
    /// Both directories are read with the same `format` and `columns`.
    ///
    /// # Errors
    ///
    /// Returns [`WingError::Load`] when a directory cannot be loaded and
    /// [`WingError::Accumulation`] when a table lacks a mapped column.
    pub fn load(
        cp_directory: &Path,
        cf_directory: Option<&Path>,
        format: &SliceFormat,
        columns: SectionColumns,
    ) -> Result<Self, WingError> {
        let pressure = load_samples(cp_directory, format, columns, Contribution::Pressure)?;
        let friction = cf_directory
            .map(|directory| load_samples(directory, format, columns, Contribution::Friction))
            .transpose()?;
        Ok(Self { pressure, friction })
    }

    /// Number of pressure sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pressure.len()
    }

    /// Whether no pressure section was loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pressure.is_empty()
    }

    /// Accumulate the loaded sections at `alpha` radians.
    ///
    /// # Errors
    ///
    /// Returns [`AccumulationError`] when a section fails its preconditions or has
    /// no preceding station.
    pub fn accumulate(
        &self,
        stations: &[f64],
        alpha: f64,
    ) -> Result<WingCoefficients, AccumulationError> {
        accumulate(stations, alpha, &self.pressure, self.friction.as_deref())
    }
}

/// Load section directories and accumulate their wing coefficients.
///
/// `alpha_degrees` is converted to radians once. Both directories are read with the
/// same `format` and `columns`.
///
/// # Errors
///
/// Returns [`WingError::Load`] when a directory cannot be loaded and
/// [`WingError::Accumulation`] when the loaded sections cannot be integrated.
pub fn wing_coefficients_from_files(
    stations: &[f64],
    alpha_degrees: f64,
    cp_directory: &Path,
    cf_directory: Option<&Path>,
    format: &SliceFormat,
    columns: SectionColumns,
) -> Result<WingCoefficients, WingError> {
    let sections = WingSections::load(cp_directory, cf_directory, format, columns)?;
    Ok(sections.accumulate(stations, alpha_degrees.to_radians())?)
}

/// Load a directory and map every table onto its samples.
fn load_samples(
    directory: &Path,
    format: &SliceFormat,
    columns: SectionColumns,
    set: Contribution,
) -> Result<Vec<SectionSamples>, WingError> {
    let samples = load_sections(directory, format)?
        .iter()
        .enumerate()
        .map(|(index, table)| {
            SectionSamples::from_table(table, columns)
                .map_err(|source| AccumulationError::Section { set, index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::errors::SectionError;

    fn lifting_plate(load: f64) -> SectionSamples {
        SectionSamples::pressure(vec![1.0, 0.0, 0.0, 1.0], vec![load, load, -load, -load])
    }

    #[test]
    fn boundary_widths_clamp_to_unit_span() {
        let stations = [0.2, 0.5, 0.9];
        let widths: Vec<f64> = (0..4)
            .map(|index| span_width(&stations, index).expect("station exists"))
            .collect();
        assert_relative_eq!(widths[0], 0.2);
        assert_relative_eq!(widths[1], 0.3, epsilon = 1.0e-12);
        assert_relative_eq!(widths[2], 0.4, epsilon = 1.0e-12);
        assert_relative_eq!(widths[3], 0.1, epsilon = 1.0e-12);
        assert_eq!(
            span_width(&stations, 5),
            Err(AccumulationError::MissingStation {
                index: 5,
                stations: 3
            })
        );
    }

    #[test]
    fn single_section_without_stations_spans_unit_width() {
        let section = lifting_plate(0.3);
        let bare = section.integrate(0.05).expect("valid section");
        for stations in [&[][..], &[1.0][..]] {
            let wing = accumulate(stations, 0.05, std::slice::from_ref(&section), None)
                .expect("accumulates");
            assert_relative_eq!(wing.cl, bare.cl, epsilon = 1.0e-12);
            assert_relative_eq!(wing.cd, bare.cd, epsilon = 1.0e-12);
            assert_relative_eq!(wing.cm, bare.cm, epsilon = 1.0e-12);
        }
    }

    #[test]
    fn stations_are_not_renormalized() {
        let section = lifting_plate(0.5);
        let bare = section.integrate(0.0).expect("valid section");
        let wing = accumulate(&[2.0], 0.0, &[section], None).expect("accumulates");
        assert_relative_eq!(wing.cl, 2.0 * bare.cl, epsilon = 1.0e-12);
    }

    #[test]
    fn identical_friction_set_doubles_totals() {
        let sections = vec![lifting_plate(0.5), lifting_plate(0.4), lifting_plate(0.2)];
        let stations = [0.3, 0.6, 0.9];
        let alpha = 3.0_f64.to_radians();
        let single = accumulate(&stations, alpha, &sections, None).expect("accumulates");
        let doubled =
            accumulate(&stations, alpha, &sections, Some(&sections)).expect("accumulates");
        assert_relative_eq!(doubled.cl, 2.0 * single.cl, epsilon = 1.0e-12);
        assert_relative_eq!(doubled.cd, 2.0 * single.cd, epsilon = 1.0e-12);
        assert_relative_eq!(doubled.cm, 2.0 * single.cm, epsilon = 1.0e-12);
    }

    #[test]
    fn trapezoidal_weights_match_hand_calculation() {
        let sections = vec![lifting_plate(0.5), lifting_plate(0.25)];
        let wing = accumulate(&[0.5, 1.0], 0.0, &sections, None).expect("accumulates");
        // Each plate carries cl = 2 * load; widths are 0.5 and 0.5.
        assert_relative_eq!(wing.cl, 0.5 * 1.0 + 0.5 * 0.5, epsilon = 1.0e-12);
        assert_relative_eq!(wing.cd, 0.0, epsilon = 1.0e-12);
    }

    #[test]
    fn failing_section_is_identified() {
        let sections = vec![
            lifting_plate(0.5),
            SectionSamples::pressure(vec![1.0], vec![0.0]),
        ];
        let error = accumulate(&[0.5, 1.0], 0.0, &[lifting_plate(0.1)], Some(&sections))
            .expect_err("short section rejected");
        assert_eq!(
            error,
            AccumulationError::Section {
                set: Contribution::Friction,
                index: 1,
                source: SectionError::TooFewSamples { len: 1 },
            }
        );
    }

    #[test]
    fn sections_beyond_the_last_station_need_a_predecessor() {
        let sections = vec![lifting_plate(0.1); 3];
        let error = accumulate(&[0.5], 0.0, &sections, None).expect_err("missing station");
        assert_eq!(
            error,
            AccumulationError::MissingStation {
                index: 2,
                stations: 1
            }
        );
    }
}
