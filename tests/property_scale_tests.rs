use chart_geom::core::{Canvas, ValueScale, nice_max};
use proptest::prelude::*;

fn is_one_two_five_decade(value: f64) -> bool {
    let exponent = value.log10().floor();
    [exponent - 1.0, exponent, exponent + 1.0].iter().any(|exp| {
        let magnitude = 10f64.powf(*exp);
        [1.0, 2.0, 5.0, 10.0]
            .iter()
            .any(|step| ((value / magnitude) - step).abs() <= 1e-9 * step)
    })
}

proptest! {
    #[test]
    fn nice_max_is_an_upper_bound(exponent in -12i32..15, mantissa in 1.0f64..10.0) {
        let value = mantissa * 10f64.powi(exponent);
        let nice = nice_max(value);
        prop_assert!(nice >= value);
        prop_assert!(nice <= value * 2.5 * (1.0 + 1e-9));
        prop_assert!(is_one_two_five_decade(nice));
    }

    #[test]
    fn nice_max_is_finite_near_f64_max(value in 1.0e300f64..=f64::MAX) {
        let nice = nice_max(value);
        prop_assert!(nice.is_finite());
        prop_assert!(nice >= value);

        let ticks = ValueScale::new(value, Canvas::default().inner()).ticks();
        prop_assert!(ticks.iter().all(|tick| tick.value.is_finite() && tick.y.is_finite()));
    }

    #[test]
    fn nice_max_falls_back_for_non_positive(value in -1.0e12f64..=0.0) {
        prop_assert_eq!(nice_max(value), 10.0);
    }

    #[test]
    fn ticks_are_six_and_strictly_rising(max_value in -1.0e9f64..1.0e9) {
        let inner = Canvas::default().inner();
        let ticks = ValueScale::new(max_value, inner).ticks();
        prop_assert_eq!(ticks.len(), 6);
        prop_assert_eq!(ticks[0].value, 0.0);
        prop_assert!((ticks[0].y - inner.baseline_y()).abs() <= 1e-9);
        prop_assert!((ticks[5].y - inner.y).abs() <= 1e-9);
        for pair in ticks.windows(2) {
            prop_assert!(pair[1].y < pair[0].y);
        }
    }
}
