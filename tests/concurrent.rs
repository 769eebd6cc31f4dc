// Test intent: independent filters over one shared buffer agree with sequential runs.
use goertzel::GoertzelFilter;
use rayon::prelude::*;

const DTMF_FREQS: [f64; 8] = [697.0, 770.0, 852.0, 941.0, 1209.0, 1336.0, 1477.0, 1633.0];

fn dual_tone(low: f64, high: f64, n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let t = i as f64 / 8000.0;
            (2.0 * std::f64::consts::PI * low * t).sin() + (2.0 * std::f64::consts::PI * high * t).sin()
        })
        .collect()
}

fn bank() -> Vec<GoertzelFilter<f64>> {
    DTMF_FREQS
        .iter()
        .map(|&f| GoertzelFilter::new(f, 8000.0).expect("DTMF frequencies are below Nyquist"))
        .collect()
}

#[test]
fn parallel_filters_match_sequential() {
    let input = dual_tone(852.0, 1336.0, 410);

    let sequential: Vec<f64> = bank()
        .iter_mut()
        .map(|f| f.process(&input).unwrap())
        .collect();

    let mut filters = bank();
    let parallel: Vec<f64> = filters
        .par_iter_mut()
        .map(|f| f.process(&input).unwrap())
        .collect();

    assert_eq!(sequential, parallel);
}

#[test]
fn parallel_bank_finds_both_tones() {
    let input = dual_tone(941.0, 1477.0, 205);
    let mut filters = bank();
    let powers: Vec<(f64, f64)> = filters
        .par_iter_mut()
        .map(|f| (f.frequency(), f.process(&input).unwrap()))
        .collect();

    let mut ranked = powers.clone();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    let mut top: Vec<f64> = ranked.iter().take(2).map(|p| p.0).collect();
    top.sort_by(f64::total_cmp);
    assert_eq!(top, vec![941.0, 1477.0]);
}

#[test]
fn filters_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GoertzelFilter<f32>>();
    assert_send_sync::<GoertzelFilter<f64>>();
}
