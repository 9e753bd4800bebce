#![warn(clippy::all)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_doc_code_examples)]
#![warn(clippy::missing_docs_in_private_items)]
#![doc = include_str!("../README.md")]

mod coefficients;
mod config;
mod curve;
mod errors;
mod loader;
mod plot;
mod section;
mod span;
mod table;

pub use coefficients::{section_coefficients, BodyForce, SectionCoefficients, WingCoefficients};
pub use config::{CurveSpec, Study, StudyConfig};
pub use curve::{Curve, CurveKind, CurveSelection, CurveStyle, CurveStyleOverrides};
pub use errors::{
    AccumulationError, ConfigError, Contribution, LoadError, SectionError, WingError,
};
pub use loader::{discover_slices, load_sections, read_slice, SliceFormat};
pub use plot::{compose_figures, Figure, PlotOverrides, PlotSettings};
pub use section::{
    integrate_pressure, integrate_pressure_friction, SectionColumns, SectionSamples,
    QUARTER_CHORD,
};
pub use span::{
    accumulate, span_width, wing_coefficients_from_files, SpanwiseAccumulator, WingSections,
};
pub use table::SectionTable;
