//! Sample-by-sample DTMF row detection in 25 ms blocks.

use goertzel::BlockDetector;

const ROWS: [f32; 4] = [697.0, 770.0, 852.0, 941.0];

fn main() {
    let sample_rate = 8000.0f32;
    let block = 200;
    let mut detectors: Vec<BlockDetector<f32>> = ROWS
        .iter()
        .filter_map(|&f| BlockDetector::new(f, sample_rate, block).ok())
        .collect();

    // 50 ms of the '5' row tone, then 50 ms of silence
    for i in 0..800 {
        let x = if i < 400 {
            (2.0 * std::f32::consts::PI * 770.0 * i as f32 / sample_rate).sin()
        } else {
            0.0
        };
        for det in detectors.iter_mut() {
            if let Some(r) = det.push(x) {
                println!(
                    "t={:>3} ms  {:>4} Hz  {:>8.2} dBm",
                    (i + 1) / 8,
                    det.filter().frequency(),
                    r.dbm
                );
            }
        }
    }
}
