use aerotools::{accumulate, SectionSamples};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Flat plates loaded less towards the tip.
    let sections: Vec<SectionSamples> = [0.5, 0.4, 0.2]
        .iter()
        .map(|&load| {
            SectionSamples::pressure(vec![1.0, 0.0, 0.0, 1.0], vec![load, load, -load, -load])
        })
        .collect();
    let stations = [0.3, 0.6, 0.9];

    for alpha in [0.0_f64, 2.0, 4.0] {
        let wing = accumulate(&stations, alpha.to_radians(), &sections, None)?;
        println!(
            "alpha = {alpha:.1} deg: CL = {:.4}, CD = {:.4}, CM = {:.4}",
            wing.cl, wing.cd, wing.cm
        );
    }

    Ok(())
}
