use chart_geom::core::{
    Canvas, ChartGeometry, DataPoint, FALLBACK_NICE_MAX, LARGEST_NICE_MAX, TICK_INTERVALS,
    ValueScale, layout_columns, nice_max, y_ticks,
};

#[test]
fn nice_max_rounds_up_to_one_two_five_ten() {
    assert!((nice_max(0.8) - 1.0).abs() <= 1e-12);
    assert_eq!(nice_max(12.0), 20.0);
    assert_eq!(nice_max(20.0), 20.0);
    assert_eq!(nice_max(21.0), 50.0);
    assert_eq!(nice_max(65.0), 100.0);
    assert_eq!(nice_max(95.0), 100.0);
    assert_eq!(nice_max(2_500_000.0), 5_000_000.0);
}

#[test]
fn nice_max_falls_back_for_zero_and_negative_maximum() {
    assert_eq!(nice_max(0.0), 10.0);
    assert_eq!(nice_max(-0.5), 10.0);
    assert_eq!(nice_max(-1_000.0), FALLBACK_NICE_MAX);
}

#[test]
fn nice_max_handles_tiny_and_huge_magnitudes() {
    let tiny = nice_max(3.2e-7);
    assert!(tiny >= 3.2e-7);
    assert!((tiny / 5e-7 - 1.0).abs() <= 1e-12);

    let huge = nice_max(7.3e15);
    assert!(huge >= 7.3e15);
    assert!((huge / 1e16 - 1.0).abs() <= 1e-12);
}

#[test]
fn ticks_span_zero_to_niced_max_on_default_canvas() {
    let inner = Canvas::default().inner();
    let scale = ValueScale::new(65.0, inner);
    assert_eq!(scale.niced_max(), 100.0);

    let ticks = y_ticks(scale);
    assert_eq!(ticks.len(), TICK_INTERVALS + 1);

    let expected = [
        (0.0, 280.0, "0"),
        (20.0, 228.0, "20"),
        (40.0, 176.0, "40"),
        (60.0, 124.0, "60"),
        (80.0, 72.0, "80"),
        (100.0, 20.0, "100"),
    ];
    for (tick, (value, y, label)) in ticks.iter().zip(expected) {
        assert!((tick.value - value).abs() <= 1e-9);
        assert!((tick.y - y).abs() <= 1e-9);
        assert_eq!(tick.label, label);
    }
}

#[test]
fn ticks_move_upward_as_values_grow() {
    let inner = Canvas::default().inner();
    let ticks = ValueScale::new(0.0, inner).ticks();
    assert_eq!(ticks.len(), 6);
    assert_eq!(ticks[0].y, inner.baseline_y());
    assert!((ticks[5].y - inner.y).abs() <= 1e-9);
    assert_eq!(ticks[5].label, "10");
    for pair in ticks.windows(2) {
        assert!(pair[1].value > pair[0].value);
        assert!(pair[1].y < pair[0].y);
    }
}

#[test]
fn thousand_scale_ticks_use_suffix_labels() {
    let inner = Canvas::default().inner();
    let labels: Vec<String> = ValueScale::new(4_200.0, inner)
        .ticks()
        .into_iter()
        .map(|tick| tick.label)
        .collect();
    assert_eq!(labels, vec!["0", "1.0K", "2.0K", "3.0K", "4.0K", "5.0K"]);
}

#[test]
fn nice_max_stays_finite_at_top_of_f64_range() {
    assert_eq!(nice_max(LARGEST_NICE_MAX), LARGEST_NICE_MAX);
    assert_eq!(nice_max(1.5e308), f64::MAX);
    assert_eq!(nice_max(f64::MAX), f64::MAX);

    let below = nice_max(9.1e307);
    assert!(below.is_finite());
    assert!(below >= 9.1e307);
}

#[test]
fn ticks_stay_finite_for_saturated_maximum() {
    let inner = Canvas::default().inner();
    let ticks = ValueScale::new(1.5e308, inner).ticks();
    assert_eq!(ticks.len(), TICK_INTERVALS + 1);
    assert_eq!(ticks[0].value, 0.0);
    assert_eq!(ticks[0].y, inner.baseline_y());
    assert_eq!(ticks[TICK_INTERVALS].value, f64::MAX);
    assert!((ticks[TICK_INTERVALS].y - inner.y).abs() <= 1e-9);
    for tick in &ticks {
        assert!(tick.value.is_finite());
        assert!(tick.y.is_finite());
    }
}

#[test]
fn huge_column_series_produces_valid_geometry() {
    let series = vec![DataPoint::new("big", 1.5e308, "#2563eb")];
    let geometry = layout_columns(&series, Canvas::default());
    let bar = &geometry.bars[0];
    assert!(bar.height > 0.0);
    assert!(bar.height.is_finite());
    assert!(ChartGeometry::Column(geometry).validate().is_ok());
}
