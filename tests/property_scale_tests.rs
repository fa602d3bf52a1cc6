use proptest::prelude::*;
use sparkline_rs::core::LinearScale;

proptest! {
    #[test]
    fn boundaries_map_exactly(
        domain_start in -1_000_000.0f64..1_000_000.0,
        domain_span in 0.001f64..1_000_000.0,
        range_start in -10_000.0f64..10_000.0,
        range_span in -10_000.0f64..10_000.0,
    ) {
        let domain_end = domain_start + domain_span;
        let range_end = range_start + range_span;
        let scale = LinearScale::new((domain_start, domain_end), (range_start, range_end))
            .expect("valid scale");

        prop_assert_eq!(scale.apply(domain_start), range_start);
        prop_assert_eq!(scale.apply(domain_end), range_end);
    }

    #[test]
    fn clamped_output_never_leaves_the_range(
        domain_start in -1_000.0f64..1_000.0,
        domain_span in -1_000.0f64..1_000.0,
        range_start in -1_000.0f64..1_000.0,
        range_span in -1_000.0f64..1_000.0,
        value in -1.0e9f64..1.0e9,
    ) {
        let scale = LinearScale::new(
            (domain_start, domain_start + domain_span),
            (range_start, range_start + range_span),
        )
        .expect("valid scale")
        .with_clamp(true);

        let mapped = scale.apply(value);
        let (r0, r1) = scale.range();
        prop_assert!(mapped >= r0.min(r1) - 1e-9);
        prop_assert!(mapped <= r0.max(r1) + 1e-9);
    }

    #[test]
    fn unclamped_round_trip_recovers_the_value(
        domain_start in -1_000.0f64..1_000.0,
        domain_span in 0.001f64..1_000.0,
        factor in 0.0f64..1.0,
    ) {
        let domain_end = domain_start + domain_span;
        let value = domain_start + factor * domain_span;
        let scale = LinearScale::new((domain_start, domain_end), (0.0, 2048.0))
            .expect("valid scale");

        let px = scale.apply(value);
        // Invert through a mirrored scale.
        let inverse = LinearScale::new((0.0, 2048.0), (domain_start, domain_end))
            .expect("valid inverse");
        prop_assert!((inverse.apply(px) - value).abs() <= 1e-6);
    }
}
