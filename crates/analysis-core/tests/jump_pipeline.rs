//! End-to-end measurement over synthetic COM trajectories.

use jumpgauge_analysis_core::flight::{compute_height, FlightAnalyzer, GRAVITY_MPS2};
use jumpgauge_pose_model::{ComSample, ComSeries, GapStrategy};

/// 200 samples at 60 fps: linear descent y=300→340 over 30 samples (squat),
/// rise to y=200 over 10 samples (drive and takeoff), hold near y=200 for
/// 40 samples (flight), then settle at y=320 for the remainder (landing).
fn jump_trajectory() -> Vec<f64> {
    let mut s = Vec::with_capacity(200);
    for i in 0..30 {
        s.push(300.0 + 40.0 * i as f64 / 29.0);
    }
    for i in 0..10 {
        s.push(340.0 - 140.0 * (i + 1) as f64 / 10.0);
    }
    s.extend(std::iter::repeat(200.0).take(40));
    while s.len() < 200 {
        s.push(320.0);
    }
    s
}

/// Squat to a known depth, then an ideal ballistic arc of duration `t_secs`
/// leaving from and returning to the standing baseline.
fn parabolic_flight(t_secs: f64, fps: f64) -> Vec<f64> {
    let baseline = 330.0;
    let squat = 342.0;
    let px_per_m = 500.0;

    let mut s = vec![baseline; 10];
    for i in 0..20 {
        s.push(baseline + (squat - baseline) * (i + 1) as f64 / 20.0);
    }
    s.extend(std::iter::repeat(squat).take(5));
    for i in 0..6 {
        s.push(squat + (baseline - squat) * (i + 1) as f64 / 6.0);
    }

    let airborne = (t_secs * fps) as usize;
    for i in 1..airborne {
        let t = i as f64 / fps;
        let rise_m = (GRAVITY_MPS2 / 2.0) * t * (t_secs - t);
        s.push(baseline - rise_m * px_per_m);
    }

    s.extend(std::iter::repeat(baseline).take(30));
    s
}

#[test]
fn jump_trajectory_measures_expected_height() {
    let outcome = compute_height(&jump_trajectory(), 60.0);

    // The threshold crossings bracket the drive and the sink as well as the
    // ballistic hold, so the detected flight spans 52 smoothed samples.
    let height = outcome.height_m().expect("trajectory should measure");
    assert!((height - 0.92105).abs() < 1e-6, "height was {height}");
}

#[test]
fn parabolic_flight_recovers_kinematic_height() {
    let (t_secs, fps) = (0.5, 100.0);
    let expected = GRAVITY_MPS2 * t_secs * t_secs / 8.0;

    let outcome = compute_height(&parabolic_flight(t_secs, fps), fps);
    let height = outcome.height_m().expect("parabola should measure");

    let rel_err = (height - expected).abs() / expected;
    assert!(
        rel_err < 0.10,
        "height {height} deviates {:.1}% from {expected}",
        rel_err * 100.0
    );
}

#[test]
fn diagnostics_expose_phase_indices() {
    let (outcome, phases) =
        FlightAnalyzer::with_defaults().measure_with_phases(&jump_trajectory(), 60.0);

    assert!(outcome.is_measured());
    let phases = phases.unwrap();
    assert_eq!(phases.takeoff_idx, 28);
    assert_eq!(phases.landing_idx, 80);
    assert!(phases.takeoff_idx > phases.lowest_idx);
    assert!(phases.threshold_y_px < phases.lowest_y_px);
}

#[test]
fn time_fill_restores_timing_after_dropped_frames() {
    let full = jump_trajectory();
    let reference = compute_height(&full, 60.0).height_m().unwrap();

    // Drop every third frame, as a detector losing confidence would.
    let series: ComSeries = full
        .iter()
        .enumerate()
        .filter(|(i, _)| i % 3 != 2)
        .map(|(i, &y)| ComSample::new(i as u64, y))
        .collect();
    assert!(series.dropped_frames() > 0);

    let contiguous = compute_height(&series.resampled(GapStrategy::Contiguous), 60.0)
        .height_m()
        .unwrap();
    let time_filled = compute_height(&series.resampled(GapStrategy::TimeFill), 60.0)
        .height_m()
        .unwrap();

    // Contiguous indexing compresses the flight by the drop rate and the
    // height by its square; time-filling recovers most of it.
    assert!(contiguous < reference * 0.6);
    assert!((time_filled - reference).abs() / reference < 0.10);

    assert!((contiguous - 0.46632).abs() < 1e-4);
    assert!((time_filled - 0.95682).abs() < 1e-4);
}
