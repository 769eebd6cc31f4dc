//! Demonstrates enabling verbose logging for goertzel.
use goertzel::{BlockDetector, GoertzelFilter};

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Trace)
        .init();

    let _ = GoertzelFilter::new(5000.0f64, 8000.0);

    let mut filter = GoertzelFilter::new(1000.0f64, 8000.0).unwrap();
    filter.feed(&[0.0, 1.0, 0.0, -1.0]);
    filter.reset();

    let mut det = BlockDetector::new(1000.0f64, 8000.0, 4).unwrap();
    det.push_slice(&[0.0, 1.0, 0.0, -1.0]);
}
