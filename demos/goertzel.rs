//! Goertzel algorithm example.
//!
//! Measures the level of a target frequency in a test tone.

use goertzel::{dbm, GoertzelFilter};

fn main() {
    println!("=== Goertzel example ===\n");

    let sample_rate = 8000.0;
    let target_freq = 1000.0;
    let signal: Vec<f64> = (0..205)
        .map(|i| 0.5 * (2.0 * std::f64::consts::PI * target_freq * i as f64 / sample_rate).sin())
        .collect();

    let mut filter = match GoertzelFilter::new(target_freq, sample_rate) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("cannot build filter: {e}");
            return;
        }
    };

    match filter.process(&signal) {
        Ok(power) => {
            println!("Coefficient: {:.6}", filter.coefficient());
            println!("Power at {target_freq} Hz: {power:.6}");
            println!("Level: {:.2} dBm", dbm(power));
        }
        Err(e) => eprintln!("no reading: {e}"),
    }

    filter.reset();
    let silence = [0.0; 205];
    if let Ok(power) = filter.process(&silence) {
        println!("Silence: {:.2} dBm", dbm(power));
    }
}
