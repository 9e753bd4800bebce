#![warn(clippy::pedantic)]

use std::fs;
use std::path::Path;

use aerotools::{
    accumulate, integrate_pressure, integrate_pressure_friction, load_sections,
    wing_coefficients_from_files, SectionColumns, SectionSamples, SliceFormat, Study,
};
use approx::assert_relative_eq;

/// Points along an elliptic contour, trailing edge to leading edge on the lower
/// surface and back on the upper surface.
fn contour(points: usize, thickness: f64) -> (Vec<f64>, Vec<f64>) {
    let angles = (0..=points).map(|i| std::f64::consts::TAU * i as f64 / points as f64);
    angles
        .map(|theta| (0.5 + 0.5 * theta.cos(), -0.5 * thickness * theta.sin()))
        .unzip()
}

/// Suction on the upper surface, overpressure on the lower surface.
fn loading(x: &[f64], y: &[f64], scale: f64) -> Vec<f64> {
    x.iter()
        .zip(y)
        .map(|(&x, &y)| {
            let shape = 1.0 - x;
            if y > 0.0 {
                -scale * shape
            } else {
                0.5 * scale * shape
            }
        })
        .collect()
}

fn write_section(path: &Path, x: &[f64], cp: &[f64], y: &[f64]) {
    let mut text = String::from("x,cp,y\n");
    for ((x, cp), y) in x.iter().zip(cp).zip(y) {
        text.push_str(&format!("{x},{cp},{y}\n"));
    }
    fs::write(path, text).expect("section written");
}

fn write_wing(directory: &Path, scales: &[f64]) -> Vec<SectionSamples> {
    let (x, y) = contour(64, 0.12);
    scales
        .iter()
        .enumerate()
        .map(|(index, &scale)| {
            let cp = loading(&x, &y, scale);
            write_section(&directory.join(format!("slice_{index}.dat")), &x, &cp, &y);
            SectionSamples::with_ordinate(x.clone(), cp, y.clone())
        })
        .collect()
}

#[test]
fn loaded_sections_reproduce_in_memory_accumulation() {
    let dir = tempfile::tempdir().expect("temporary directory");
    let sections = write_wing(dir.path(), &[1.0, 0.8, 0.5]);
    let stations = [0.3, 0.6, 0.9];
    let columns = SectionColumns {
        y: Some(2),
        ..SectionColumns::default()
    };

    let from_files = wing_coefficients_from_files(
        &stations,
        4.0,
        dir.path(),
        None,
        &SliceFormat::default(),
        columns,
    )
    .expect("wing computed");
    let in_memory =
        accumulate(&stations, 4.0_f64.to_radians(), &sections, None).expect("accumulates");

    assert_relative_eq!(from_files.cl, in_memory.cl, epsilon = 1.0e-9);
    assert_relative_eq!(from_files.cd, in_memory.cd, epsilon = 1.0e-9);
    assert_relative_eq!(from_files.cm, in_memory.cm, epsilon = 1.0e-9);
    assert!(from_files.cl > 0.0);
}

#[test]
fn friction_directory_is_weighted_on_the_same_stations() {
    let cp_dir = tempfile::tempdir().expect("temporary directory");
    let cf_dir = tempfile::tempdir().expect("temporary directory");
    write_wing(cp_dir.path(), &[1.0, 0.6]);
    write_wing(cf_dir.path(), &[1.0, 0.6]);
    let stations = [0.5, 1.0];
    let format = SliceFormat::default();

    let single = wing_coefficients_from_files(
        &stations,
        2.0,
        cp_dir.path(),
        None,
        &format,
        SectionColumns::default(),
    )
    .expect("wing computed");
    let doubled = wing_coefficients_from_files(
        &stations,
        2.0,
        cp_dir.path(),
        Some(cf_dir.path()),
        &format,
        SectionColumns::default(),
    )
    .expect("wing computed");

    assert_relative_eq!(doubled.cl, 2.0 * single.cl, epsilon = 1.0e-9);
    assert_relative_eq!(doubled.cd, 2.0 * single.cd, epsilon = 1.0e-9);
    assert_relative_eq!(doubled.cm, 2.0 * single.cm, epsilon = 1.0e-9);
}

#[test]
fn coefficients_are_linear_in_pressure() {
    let (x, y) = contour(48, 0.1);
    let alpha = 3.0_f64.to_radians();
    let base = integrate_pressure_friction(alpha, &loading(&x, &y, 1.0), &x, &y)
        .expect("valid section");
    let scaled = integrate_pressure_friction(alpha, &loading(&x, &y, 2.5), &x, &y)
        .expect("valid section");
    assert_relative_eq!(scaled.cl, 2.5 * base.cl, epsilon = 1.0e-12);
    assert_relative_eq!(scaled.cd, 2.5 * base.cd, epsilon = 1.0e-12);
    assert_relative_eq!(scaled.cm, 2.5 * base.cm, epsilon = 1.0e-12);
}

#[test]
fn reversing_the_path_negates_every_coefficient() {
    let (x, y) = contour(40, 0.15);
    let cp = loading(&x, &y, 1.0);
    let section = SectionSamples::with_ordinate(x, cp, y);
    let alpha = 5.0_f64.to_radians();

    let forward = section.integrate(alpha).expect("valid section");
    let backward = section.reversed().integrate(alpha).expect("valid section");
    assert_relative_eq!(forward.cl, -backward.cl, epsilon = 1.0e-12);
    assert_relative_eq!(forward.cd, -backward.cd, epsilon = 1.0e-12);
    assert_relative_eq!(forward.cm, -backward.cm, epsilon = 1.0e-12);
}

#[test]
fn incidence_only_rotates_the_resultant() {
    let (x, y) = contour(40, 0.15);
    let cp = loading(&x, &y, 1.0);
    let magnitude = |alpha: f64| {
        let coefficients =
            integrate_pressure_friction(alpha, &cp, &x, &y).expect("valid section");
        coefficients.cl.hypot(coefficients.cd)
    };
    assert_relative_eq!(magnitude(0.0), magnitude(0.1), epsilon = 1.0e-12);
    assert_relative_eq!(magnitude(0.0), magnitude(-0.3), epsilon = 1.0e-12);

    let flat = integrate_pressure(0.0, &cp, &x).expect("valid section");
    let thick = integrate_pressure_friction(0.0, &cp, &x, &y).expect("valid section");
    assert_relative_eq!(flat.cl, thick.cl, epsilon = 1.0e-12);
}

#[test]
fn studies_compose_figures_from_slice_directories() {
    let dir = tempfile::tempdir().expect("temporary directory");
    let cp_dir = dir.path().join("cp");
    fs::create_dir(&cp_dir).expect("directory created");
    write_wing(&cp_dir, &[1.0, 0.5]);
    let output = dir.path().join("figures");

    let document = serde_json::json!({
        "graph": { "xlim": [0.0, 0.5], "save": true, "savedirectory": output },
        "curves": [
            { "name": "Computed", "type": "rans", "path": cp_dir },
            { "name": "Reference", "type": "experimental",
              "data": [[[0.25, -0.5]], [[0.25, -0.25]]] }
        ]
    });
    let study = Study::from_json(&document.to_string()).expect("valid study");
    let figures = study.figures().expect("figures composed");
    assert_eq!(figures.len(), 2);
    assert!(figures[0]
        .displayed_curves()
        .iter()
        .all(|curve| curve.x.iter().all(|&x| (0.0..=0.5).contains(&x))));

    let written = study.run().expect("descriptions written");
    assert_eq!(written.len(), 2);
    assert!(written[1].ends_with("figure_1.json"));

    let tables = load_sections(&cp_dir, &SliceFormat::default()).expect("sections load");
    assert_eq!(tables.len(), 2);
    assert_eq!(tables[0].width(), 3);
}
