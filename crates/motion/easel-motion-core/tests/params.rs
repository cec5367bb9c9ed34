use easel_motion_core::{
    bezier_preset, sample_motion, AccuracyTier, BezierCurve, BezierStyle, EasingType,
    MotionError, MotionParams, OvershootStyle, SpringParams, ValidationCode,
};
use serde_json::json;

#[test]
fn out_of_range_fields_are_all_reported() {
    let params = MotionParams::Spring(SpringParams {
        stiffness: 150.0,
        damping: 50.0,
        mass: f64::NAN,
    });
    let errors = params.validate().expect_err("two bad fields");
    assert_eq!(errors.len(), 2);
    let stiffness = errors.iter().find(|e| e.path == "stiffness").unwrap();
    assert_eq!(stiffness.code, ValidationCode::OutOfRange);
    let mass = errors.iter().find(|e| e.path == "mass").unwrap();
    assert_eq!(mass.code, ValidationCode::NotFinite);

    match sample_motion(&params, AccuracyTier::Low) {
        Err(MotionError::Validation(errs)) => assert_eq!(errs.len(), 2),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn validation_errors_serialise_for_api_responses() {
    let params = MotionParams::Spring(SpringParams {
        stiffness: -1.0,
        damping: 0.0,
        mass: 1.0,
    });
    let errors = params.validate().unwrap_err();
    let json = serde_json::to_value(&errors).unwrap();
    assert_eq!(json[0]["code"], "OUT_OF_RANGE");
    assert_eq!(json[0]["path"], "stiffness");
}

#[test]
fn params_are_tagged_by_kind() {
    let params: MotionParams = serde_json::from_value(json!({
        "kind": "overshoot",
        "style": "IN_OUT",
        "mass": 5,
        "damping": 0
    }))
    .unwrap();
    assert_eq!(params.easing_type(), EasingType::Overshoot);
    assert_eq!(
        serde_json::to_value(params).unwrap()["style"],
        json!("IN_OUT")
    );
}

#[test]
fn unknown_overshoot_style_is_rejected() {
    let parsed: Result<MotionParams, _> = serde_json::from_value(json!({
        "kind": "overshoot",
        "style": "SIDEWAYS",
        "mass": 5,
        "damping": 0
    }));
    assert!(parsed.is_err());

    match "SIDEWAYS".parse::<OvershootStyle>() {
        Err(MotionError::UnknownName { kind, value }) => {
            assert_eq!(kind, "overshoot style");
            assert_eq!(value, "SIDEWAYS");
        }
        other => panic!("expected UnknownName, got {other:?}"),
    }
    assert_eq!("IN_OUT".parse::<OvershootStyle>().unwrap(), OvershootStyle::InOut);
}

#[test]
fn every_bezier_preset_is_valid() {
    for style in BezierStyle::ALL {
        for curve in BezierCurve::ALL {
            let params = MotionParams::Bezier(bezier_preset(*style, *curve));
            assert!(params.validate().is_ok(), "{style} {curve}");
        }
    }
}

#[test]
fn named_enum_indices_follow_declaration_order() {
    for (i, t) in EasingType::ALL.iter().enumerate() {
        assert_eq!(t.index(), i);
        assert_eq!(EasingType::from_index(i), Some(*t));
    }
    assert_eq!(EasingType::from_index(EasingType::ALL.len()), None);
    assert_eq!(EasingType::Spring.to_string(), "SPRING");
}
