//! Tests for filter parameter validation and switching


use hand_pointer::{
    filter_selector::FilterSelector,
    filters::{
        create_filter, double_exponential::DoubleExponentialFilter, exponential::ExponentialFilter,
        moving_average::MovingAverageFilter, FilterKind,
    },
    sample::Point3D,
    Error,
};
use test_helpers::uniform;

#[test]
fn test_zero_window_rejected() {
    assert!(matches!(MovingAverageFilter::new(0), Err(Error::InvalidFilterParameter(_))));
    for kind in [
        FilterKind::SimpleMovingAverage(0),
        FilterKind::DoubleMovingAverage(0),
        FilterKind::ModifiedDoubleMovingAverage(0),
    ] {
        assert!(kind.validate().is_err(), "{kind:?} should be rejected");
        assert!(create_filter(kind).is_err());
        assert!(FilterSelector::new(kind).is_err());
    }
}

#[test]
fn test_smoothing_factor_bounds() {
    for alpha in [0.0, -0.1, 1.0001, f64::NAN, f64::INFINITY] {
        assert!(ExponentialFilter::new(alpha).is_err(), "alpha {alpha} should be rejected");
        assert!(DoubleExponentialFilter::new(alpha, 0.5).is_err());
        assert!(DoubleExponentialFilter::new(0.5, alpha).is_err());
    }
    assert!(ExponentialFilter::new(1.0).is_ok());
    assert!(ExponentialFilter::new(f64::MIN_POSITIVE).is_ok());
}

#[test]
fn test_create_filter_validation() {
    assert!("sma:0".parse::<FilterKind>().is_err());
    assert!("dma:0".parse::<FilterKind>().is_err());
    assert!("exp:0".parse::<FilterKind>().is_err());
    assert!("exp:1.5".parse::<FilterKind>().is_err());
    assert!("dexp:0.4:0".parse::<FilterKind>().is_err());
    assert!("median".parse::<FilterKind>().is_err());

    // Valid parameters should work
    assert!("sma:5".parse::<FilterKind>().is_ok());
    assert!("mdma:2".parse::<FilterKind>().is_ok());
    assert!("exp:0.5".parse::<FilterKind>().is_ok());
    assert!("dexp:0.4:0.5".parse::<FilterKind>().is_ok());
    assert!(" None ".parse::<FilterKind>().is_ok());
}

/// After a switch, the very next point passes through unchanged for every
/// windowed or recursive filter.
#[test]
fn test_switch_then_first_point_passes_through() {
    let kinds = [
        FilterKind::SimpleMovingAverage(3),
        FilterKind::DoubleMovingAverage(3),
        FilterKind::ModifiedDoubleMovingAverage(3),
        FilterKind::ExponentialSmoothing(0.5),
        FilterKind::DoubleExponentialSmoothing(0.4, 0.5),
    ];

    for from in kinds {
        for to in kinds {
            let mut selector = FilterSelector::new(from).unwrap();
            for i in 0..10 {
                selector.apply(uniform(f64::from(i)));
            }
            selector.set_kind(to).unwrap();
            let p = Point3D::new(-3.0, 7.0, 0.25);
            assert_eq!(selector.apply(p), p, "{from} -> {to}");
        }
    }
}

#[test]
fn test_filter_handles_edge_values() {
    let test_cases = vec![
        ("sma:3", vec![f64::NAN, 0.0, f64::INFINITY]),
        ("mdma:2", vec![f64::INFINITY, 1.0, -1.0]),
        ("exp:0.5", vec![f64::NAN, f64::INFINITY, -f64::INFINITY]),
        ("dexp", vec![1e300, -1e300, 0.0]),
    ];

    for (filter_type, values) in test_cases {
        let mut filter = create_filter(filter_type.parse().unwrap()).unwrap();

        // Apply edge values and ensure no panic
        for &val in &values {
            let _ = filter.apply(uniform(val));
        }
    }
}

#[test]
fn test_from_index_matches_fixed_parameters() {
    assert_eq!(FilterKind::from_index(0).unwrap(), FilterKind::None);
    assert_eq!(FilterKind::from_index(1).unwrap(), FilterKind::SimpleMovingAverage(5));
    assert_eq!(FilterKind::from_index(3).unwrap(), FilterKind::ModifiedDoubleMovingAverage(5));
    assert_eq!(FilterKind::from_index(4).unwrap(), FilterKind::ExponentialSmoothing(0.5));
    assert_eq!(
        FilterKind::from_index(5).unwrap(),
        FilterKind::DoubleExponentialSmoothing(0.4, 0.5)
    );
    assert!(FilterKind::from_index(42).is_err());
}
