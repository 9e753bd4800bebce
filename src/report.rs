use crate::analysis::{FiguresSummary, SectionSummary, Summary, WingSummary};
use std::fmt::Write;

/// Render a textual report of a command's outcome.
///
/// Coefficients are printed with six decimals and an explicit sign so lift,
/// drag and moment can be compared against tabulated airfoil data such as
/// <https://en.wikipedia.org/wiki/NACA_airfoil>.
#[must_use]
pub fn render_summary(summary: &Summary) -> String {
    let mut output = String::new();
    match summary {
        Summary::Section(section) => render_section(&mut output, section),
        Summary::Wing(wing) => render_wing(&mut output, wing),
        Summary::Figures(figures) => render_figures(&mut output, figures),
    }
    output
}

/// Report the coefficients of one section.
fn render_section(output: &mut String, summary: &SectionSummary) {
    // Name the input first so the numbers below can be traced to a file.
    writeln!(
        output,
        "Section {} (alpha = {:+.2} deg, {} samples)",
        summary.file.display(),
        summary.alpha_degrees,
        summary.samples
    )
    .expect("writing to string cannot fail");
    // State whether the chordwise force from the section thickness was
    // included, since it changes the drag but not the lift at zero incidence.
    let mode = if summary.with_ordinate {
        "pressure + chordwise"
    } else {
        "pressure only"
    };
    writeln!(output, "Integration: {mode}").expect("writing to string cannot fail");

    // Section coefficients in wind axes, moment about the quarter chord (see
    // https://en.wikipedia.org/wiki/Pitching_moment).
    writeln!(
        output,
        "Cl = {:+.6}, Cd = {:+.6}, Cm = {:+.6}",
        summary.coefficients.cl, summary.coefficients.cd, summary.coefficients.cm
    )
    .expect("writing to string cannot fail");
}

/// Report the coefficients accumulated over the span.
fn render_wing(output: &mut String, summary: &WingSummary) {
    // Show both the section and station counts so a missing slice is easy to
    // spot.
    writeln!(
        output,
        "Wing (alpha = {:+.2} deg, {} sections, {} stations)",
        summary.alpha_degrees,
        summary.sections,
        summary.stations.len()
    )
    .expect("writing to string cannot fail");
    writeln!(output, "Pressure sections: {}", summary.cp_directory.display())
        .expect("writing to string cannot fail");
    // Friction sections are weighted on the same stations and summed into the
    // same totals as the pressure sections.
    match &summary.cf_directory {
        Some(directory) => writeln!(output, "Friction sections: {}", directory.display())
            .expect("writing to string cannot fail"),
        None => output.push_str("Friction sections: none\n"),
    }

    // Trapezoidal sum over the span, see
    // https://en.wikipedia.org/wiki/Lift_coefficient.
    writeln!(
        output,
        "CL = {:+.6}, CD = {:+.6}, CM = {:+.6}",
        summary.coefficients.cl, summary.coefficients.cd, summary.coefficients.cm
    )
    .expect("writing to string cannot fail");
}

/// Report the figures composed from a study.
fn render_figures(output: &mut String, summary: &FiguresSummary) {
    writeln!(
        output,
        "Study {}: {} figures with {} curves each",
        summary.config.display(),
        summary.figures,
        summary.curves_per_figure
    )
    .expect("writing to string cannot fail");
    // Descriptions are only written when the study enables saving.
    if summary.written.is_empty() {
        output.push_str("Saving disabled; no descriptions written\n");
    }
    for path in &summary.written {
        writeln!(output, "Wrote {}", path.display()).expect("writing to string cannot fail");
    }
}
