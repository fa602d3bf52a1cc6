use approx::assert_relative_eq;
use sparkline_rs::core::LinearScale;

#[test]
fn boundary_mapping_is_exact() {
    let scale = LinearScale::new((0.0, 4.0), (2.0, 98.0)).expect("valid scale");

    assert_eq!(scale.apply(0.0), 2.0);
    assert_eq!(scale.apply(4.0), 98.0);
}

#[test]
fn interior_values_interpolate_linearly() {
    let scale = LinearScale::new((0.0, 4.0), (2.0, 98.0)).expect("valid scale");

    assert_relative_eq!(scale.apply(1.0), 26.0, max_relative = 1e-12);
    assert_relative_eq!(scale.apply(3.0), 74.0, max_relative = 1e-12);
}

#[test]
fn inverted_range_maps_larger_values_lower() {
    let scale = LinearScale::new((1.0, 5.0), (18.0, 2.0)).expect("valid scale");

    assert_eq!(scale.apply(1.0), 18.0);
    assert_eq!(scale.apply(5.0), 2.0);
    assert!((scale.apply(3.0) - 10.0).abs() <= 1e-9);
}

#[test]
fn degenerate_domain_maps_to_range_start() {
    let scale = LinearScale::new((7.0, 7.0), (18.0, 2.0)).expect("valid scale");

    assert_eq!(scale.apply(7.0), 18.0);
    assert_eq!(scale.apply(-100.0), 18.0);
    assert_eq!(scale.apply(f64::NAN), 18.0);
}

#[test]
fn clamp_clips_input_to_domain() {
    let scale = LinearScale::new((0.0, 10.0), (0.0, 100.0))
        .expect("valid scale")
        .with_clamp(true);

    assert_eq!(scale.apply(-5.0), 0.0);
    assert_eq!(scale.apply(15.0), 100.0);
    assert_eq!(scale.apply(5.0), 50.0);
}

#[test]
fn clamp_tolerates_descending_domain() {
    let scale = LinearScale::new((10.0, 0.0), (0.0, 100.0))
        .expect("valid scale")
        .with_clamp(true);

    // Input above the upper bound clips to 10, which maps to the range start.
    assert_eq!(scale.apply(25.0), 0.0);
    assert_eq!(scale.apply(-25.0), 100.0);
}

#[test]
fn bounds_are_mutable_and_requeryable() {
    let mut scale = LinearScale::new((0.0, 1.0), (0.0, 10.0)).expect("valid scale");
    assert_eq!(scale.domain(), (0.0, 1.0));
    assert_eq!(scale.range(), (0.0, 10.0));

    scale.set_domain((0.0, 4.0)).expect("set domain");
    scale.set_range((2.0, 98.0)).expect("set range");

    assert_eq!(scale.domain(), (0.0, 4.0));
    assert_eq!(scale.range(), (2.0, 98.0));
    assert_eq!(scale.apply(4.0), 98.0);
}

#[test]
fn non_finite_bounds_are_rejected() {
    assert!(LinearScale::new((f64::NAN, 1.0), (0.0, 1.0)).is_err());
    assert!(LinearScale::new((0.0, f64::INFINITY), (0.0, 1.0)).is_err());
    assert!(LinearScale::new((0.0, 1.0), (f64::NEG_INFINITY, 1.0)).is_err());

    let mut scale = LinearScale::new((0.0, 1.0), (0.0, 1.0)).expect("valid scale");
    assert!(scale.set_domain((f64::NAN, 1.0)).is_err());
    assert!(scale.set_range((0.0, f64::NAN)).is_err());
}
