use std::path::PathBuf;

use aerotools::{
    read_slice, ConfigError, LoadError, SectionCoefficients, SectionError, SectionSamples, Study,
    WingCoefficients, WingError, WingSections,
};
use thiserror::Error;
use tracing::info;

use crate::cli::{Command, FiguresArgs, SectionArgs, WingArgs};

/// Failure of one command line operation.
#[derive(Debug, Error)]
pub enum RunError {
    /// A sample file could not be read.
    #[error(transparent)]
    Load(#[from] LoadError),
    /// A sample file could not be integrated.
    #[error(transparent)]
    Section(#[from] SectionError),
    /// The wing coefficients could not be computed.
    #[error(transparent)]
    Wing(#[from] WingError),
    /// The study could not be composed or written.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Coefficients of a single section file.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSummary {
    /// File that was integrated.
    pub file: PathBuf,
    /// Angle of attack in degrees.
    pub alpha_degrees: f64,
    /// Number of samples along the section.
    pub samples: usize,
    /// Whether the chordwise force was integrated.
    pub with_ordinate: bool,
    /// Resulting coefficients.
    pub coefficients: SectionCoefficients,
}

/// Coefficients accumulated over a wing.
#[derive(Debug, Clone, PartialEq)]
pub struct WingSummary {
    /// Directory of pressure sections.
    pub cp_directory: PathBuf,
    /// Directory of friction sections, if any.
    pub cf_directory: Option<PathBuf>,
    /// Angle of attack in degrees.
    pub alpha_degrees: f64,
    /// Spanwise stations.
    pub stations: Vec<f64>,
    /// Number of pressure sections found.
    pub sections: usize,
    /// Resulting coefficients.
    pub coefficients: WingCoefficients,
}

/// Figures composed from a study.
#[derive(Debug, Clone, PartialEq)]
pub struct FiguresSummary {
    /// Study configuration that was read.
    pub config: PathBuf,
    /// Number of figures composed.
    pub figures: usize,
    /// Number of curves drawn in each figure.
    pub curves_per_figure: usize,
    /// Description files written, empty unless saving is enabled.
    pub written: Vec<PathBuf>,
}

/// Outcome of one command.
#[derive(Debug, Clone, PartialEq)]
pub enum Summary {
    /// Outcome of `section`.
    Section(SectionSummary),
    /// Outcome of `wing`.
    Wing(WingSummary),
    /// Outcome of `figures`.
    Figures(FiguresSummary),
}

/// Run the selected command.
pub fn run_command(command: &Command) -> Result<Summary, RunError> {
    match command {
        Command::Section(args) => run_section(args).map(Summary::Section),
        Command::Wing(args) => run_wing(args).map(Summary::Wing),
        Command::Figures(args) => run_figures(args).map(Summary::Figures),
    }
}

/// Integrate a single section file.
pub fn run_section(args: &SectionArgs) -> Result<SectionSummary, RunError> {
    let table = read_slice(&args.file, &args.format.slice_format())?;
    let samples = SectionSamples::from_table(&table, args.columns.columns())?;
    let coefficients = samples.integrate(args.alpha.to_radians())?;
    info!(
        "Integrated {} samples of {}",
        samples.len(),
        args.file.display()
    );

    Ok(SectionSummary {
        file: args.file.clone(),
        alpha_degrees: args.alpha,
        samples: samples.len(),
        with_ordinate: samples.has_ordinate(),
        coefficients,
    })
}

/// Accumulate the wing coefficients of a set of section directories.
pub fn run_wing(args: &WingArgs) -> Result<WingSummary, RunError> {
    // Load once so the reported count is the set that was integrated.
    let sections = WingSections::load(
        &args.cp,
        args.cf.as_deref(),
        &args.format.slice_format(),
        args.columns.columns(),
    )?;
    let coefficients = sections
        .accumulate(&args.stations, args.alpha.to_radians())
        .map_err(WingError::from)?;

    Ok(WingSummary {
        cp_directory: args.cp.clone(),
        cf_directory: args.cf.clone(),
        alpha_degrees: args.alpha,
        stations: args.stations.clone(),
        sections: sections.len(),
        coefficients,
    })
}

/// Compose the figures of a study and write their descriptions.
pub fn run_figures(args: &FiguresArgs) -> Result<FiguresSummary, RunError> {
    let study = Study::from_path(&args.config)?;
    let figures = study.figures()?;
    let written = study.write_descriptions(&figures)?;

    Ok(FiguresSummary {
        config: args.config.clone(),
        figures: figures.len(),
        curves_per_figure: study.curve_specs().len(),
        written,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use approx::assert_relative_eq;
    use clap::Parser;

    use super::*;
    use crate::cli::Cli;

    const PLATE: &str = "x,cp,y\n1.0,0.25,0.0\n0.0,0.25,0.0\n0.0,-0.25,0.0\n1.0,-0.25,0.0\n";

    fn parse(arguments: &[&str]) -> Command {
        Cli::try_parse_from(std::iter::once("aerotools").chain(arguments.iter().copied()))
            .expect("valid arguments")
            .command
    }

    #[test]
    fn section_command_integrates_the_file() {
        let dir = tempfile::tempdir().expect("temporary directory");
        let file = dir.path().join("slice_0.dat");
        fs::write(&file, PLATE).expect("fixture written");
        let file_argument = file.to_string_lossy().into_owned();

        let summary = run_command(&parse(&["section", &file_argument, "--alpha", "0"]))
            .expect("section integrates");
        let Summary::Section(summary) = summary else {
            panic!("expected a section summary");
        };
        assert_eq!(summary.samples, 4);
        assert!(!summary.with_ordinate);
        assert_relative_eq!(summary.coefficients.cl, 0.5, epsilon = 1.0e-12);
        assert_relative_eq!(summary.coefficients.cd, 0.0, epsilon = 1.0e-12);
    }

    #[test]
    fn wing_command_accumulates_directories() {
        let dir = tempfile::tempdir().expect("temporary directory");
        for index in 0..2 {
            fs::write(dir.path().join(format!("slice_{index}.dat")), PLATE)
                .expect("fixture written");
        }
        let directory = dir.path().to_string_lossy().into_owned();

        let summary = run_command(&parse(&[
            "wing", "--alpha", "0", "--stations", "0.5,1.0", "--cp", &directory, "--cf",
            &directory,
        ]))
        .expect("wing accumulates");
        let Summary::Wing(summary) = summary else {
            panic!("expected a wing summary");
        };
        assert_eq!(summary.sections, 2);
        // Two half-span plates with cl = 0.5, counted once per contribution set.
        assert_relative_eq!(summary.coefficients.cl, 1.0, epsilon = 1.0e-12);
    }

    #[test]
    fn wing_count_matches_the_integrated_sections() {
        let dir = tempfile::tempdir().expect("temporary directory");
        for index in [0, 1, 3] {
            fs::write(dir.path().join(format!("slice_{index}.dat")), PLATE)
                .expect("fixture written");
        }
        let directory = dir.path().to_string_lossy().into_owned();

        let summary = run_command(&parse(&[
            "wing", "--alpha", "0", "--stations", "0.25,0.5", "--cp", &directory,
        ]))
        .expect("wing accumulates");
        let Summary::Wing(summary) = summary else {
            panic!("expected a wing summary");
        };
        // slice_3 lies past the gap and is not integrated.
        assert_eq!(summary.sections, 2);
        assert_relative_eq!(summary.coefficients.cl, 0.5 * 0.5, epsilon = 1.0e-12);
    }

    #[test]
    fn figures_command_reports_written_descriptions() {
        let dir = tempfile::tempdir().expect("temporary directory");
        let output = dir.path().join("out");
        let config = dir.path().join("study.json");
        let document = serde_json::json!({
            "graph": { "save": true, "savedirectory": output, "savefilename": "cp" },
            "curves": [
                { "name": "A", "data": [[[0.0, 1.0]], [[0.0, 2.0]]] },
                { "name": "B", "data": [[[0.0, 3.0]], [[0.0, 4.0]]] }
            ]
        });
        fs::write(&config, document.to_string()).expect("config written");

        let summary = run_figures(&FiguresArgs { config }).expect("figures composed");
        assert_eq!(summary.figures, 2);
        assert_eq!(summary.curves_per_figure, 2);
        assert_eq!(
            summary.written,
            vec![output.join("cp_0.json"), output.join("cp_1.json")]
        );
        assert!(summary.written.iter().all(|path| path.exists()));
    }

    #[test]
    fn missing_sections_are_reported() {
        let dir = tempfile::tempdir().expect("temporary directory");
        let directory = dir.path().to_string_lossy().into_owned();
        let error = run_command(&parse(&["wing", "--alpha", "1", "--cp", &directory]))
            .expect_err("empty directory");
        assert!(matches!(error, RunError::Load(LoadError::NoSections { .. })));
    }
}
