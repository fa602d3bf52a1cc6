use sparkline_rs::config::{ConfigFragment, SparklineConfig};
use sparkline_rs::core::{SparklineMapper, Viewport};
use sparkline_rs::render::{PLAN_JSON_SCHEMA_V1, RenderPlan};

fn sample_plan() -> RenderPlan {
    SparklineMapper::new(SparklineConfig::from_fragment(
        &ConfigFragment::default()
            .with_area_fill("#def")
            .with_range_min(2.0)
            .with_range_max(4.0)
            .with_range_fill("#eef"),
    ))
    .map(&[1.0, 3.0, 2.0, 5.0, 4.0], Viewport::new(100, 20))
    .expect("map")
}

#[test]
fn contract_round_trip_preserves_the_plan() {
    let plan = sample_plan();
    let json = plan.to_json_contract_v1_pretty().expect("serialize");
    let restored = RenderPlan::from_json_compat_str(&json).expect("parse");

    assert_eq!(plan, restored);
}

#[test]
fn contract_payload_carries_the_schema_version() {
    let json = sample_plan().to_json_contract_v1_pretty().expect("serialize");
    let value: serde_json::Value = serde_json::from_str(&json).expect("json");

    assert_eq!(
        value.get("schema_version").and_then(serde_json::Value::as_u64),
        Some(u64::from(PLAN_JSON_SCHEMA_V1))
    );
}

#[test]
fn bare_plan_json_still_parses() {
    let plan = sample_plan();
    let bare = serde_json::to_string(&plan).expect("serialize bare");
    let restored = RenderPlan::from_json_compat_str(&bare).expect("parse bare");

    assert_eq!(plan, restored);
}

#[test]
fn unsupported_schema_version_is_rejected() {
    let plan = sample_plan();
    let payload = serde_json::json!({
        "schema_version": 99,
        "plan": plan,
    });
    let result = RenderPlan::from_json_compat_str(&payload.to_string());

    assert!(result.is_err());
}
