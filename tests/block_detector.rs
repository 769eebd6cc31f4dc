// Test intent: verifies block detection cadence and tone on/off tracking.
use goertzel::{BlockDetector, EPSILON};

/// 100 ms of tone followed by 100 ms of silence, in 20 ms blocks.
#[test]
fn tracks_tone_on_then_off() {
    let sample_rate = 8000.0f32;
    let block = 160;
    let mut det = BlockDetector::new(1000.0f32, sample_rate, block).unwrap();

    let mut levels = Vec::new();
    for i in 0..1600 {
        let x = if i < 800 {
            (2.0 * std::f32::consts::PI * 1000.0 * i as f32 / sample_rate).sin()
        } else {
            0.0
        };
        if let Some(r) = det.push(x) {
            levels.push(r);
        }
    }

    assert_eq!(levels.len(), 10);
    for r in &levels[..5] {
        assert!((r.power - 0.25).abs() < 1e-3, "tone block power = {}", r.power);
    }
    for r in &levels[5..] {
        let floor = EPSILON as f32 / (block * block) as f32;
        assert!((r.power - floor).abs() <= floor * 1e-5, "silent block power = {}", r.power);
        assert!(r.dbm < -100.0);
    }
}

#[test]
fn push_slice_reports_last_completed_block() {
    let mut det = BlockDetector::new(500.0f64, 8000.0, 16).unwrap();
    let loud: Vec<f64> = (0..16)
        .map(|i| 2.0 * (2.0 * std::f64::consts::PI * 500.0 * i as f64 / 8000.0).sin())
        .collect();
    let mut input = vec![0.0; 16];
    input.extend_from_slice(&loud);
    input.extend_from_slice(&[0.0; 3]);

    let r = det.push_slice(&input).unwrap();
    assert!((r.power - 1.0).abs() < 1e-9);
    assert_eq!(det.pending(), 3);
    assert!(det.push_slice(&[0.0; 12]).is_none());
}
