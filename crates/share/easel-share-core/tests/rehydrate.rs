use easel_motion_core::{
    sample_motion, AccuracyTier, BounceCurve, EasingType, MotionParams, OvershootCurve,
    OvershootStyle,
};
use easel_share_core::codec::{base62_char, crc8};
use easel_share_core::{
    reduce, rehydrate, share_string_from_state, state_from_share_string, Defaults, EasingState,
    PreviewAnimationType, ShareError, ShareKey, ShareState,
};
use easel_test_fixtures::share;

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn frame(payload: &str) -> String {
    let crc = crc8(payload.as_bytes());
    let mut out = String::from("0");
    out.push_str(payload);
    out.push(base62_char(crc / 62).unwrap());
    out.push(base62_char(crc % 62).unwrap());
    out
}

fn fixture_state(name: &str) -> ShareState {
    let fixture = share::load(name).expect("load share fixture");
    serde_json::from_value(fixture.state).expect("share state json")
}

fn defaults() -> &'static Defaults {
    Defaults::current()
}

#[test]
fn defaults_carry_derived_curves_for_every_kind() {
    let state = defaults().state();
    assert_eq!(state.easing_type, EasingType::Bezier);
    assert_eq!(state.editor_accuracy, AccuracyTier::High);
    assert!(state.bezier_value.starts_with("cubic-bezier("));
    for value in [
        &state.spring_value,
        &state.bounce_value,
        &state.wiggle_value,
        &state.overshoot_value,
    ] {
        assert!(value.starts_with("linear(0, "), "{value}");
    }
    assert!(state.spring_time >= 0.1);
    assert_eq!(state.css_value(), state.bezier_value);
}

#[test]
fn reduced_fixtures_survive_rehydration_and_reduction() {
    init_logs();
    for name in share::keys() {
        let fixture = share::load(&name).unwrap();
        if !fixture.reduced {
            continue;
        }
        let partial = fixture_state(&name);
        let state = rehydrate(&partial, defaults()).expect("rehydrate fixture");
        assert_eq!(reduce(&state, defaults()), partial, "{name}");
        assert_eq!(
            share_string_from_state(&state, defaults()).unwrap(),
            fixture.encoded,
            "{name}"
        );
    }
}

#[test]
fn custom_bezier_rehydrates_to_its_control_points() {
    let state = rehydrate(&fixture_state("bezier-custom"), defaults()).unwrap();
    assert!(state.bezier_is_custom);
    assert_eq!(state.bezier_value, "cubic-bezier(0.25, 0.1, 0.75, 0.9)");
    assert_eq!(state.bezier_points.first().unwrap().x, 0.0);
    assert_eq!(state.bezier_points.last().unwrap().x, 100.0);
}

#[test]
fn custom_spring_recomputes_every_kind_at_the_new_accuracy() {
    let state = rehydrate(&fixture_state("spring-custom"), defaults()).unwrap();
    assert_eq!(state.easing_type, EasingType::Spring);
    assert_eq!(state.preview_animation_type, PreviewAnimationType::Scale);
    assert_eq!(state.editor_accuracy, AccuracyTier::Low);
    assert!(state.spring_is_custom);
    assert_eq!(
        (state.spring_stiffness, state.spring_damping, state.spring_mass),
        (70.0, 12.0, 1.5)
    );

    let spring = sample_motion(&state.params(EasingType::Spring), AccuracyTier::Low).unwrap();
    assert_eq!(state.spring_value, spring.css_value);
    assert_eq!(Some(state.spring_time), spring.total_time_seconds);

    let bounce = sample_motion(
        &MotionParams::Bounce(BounceCurve::Firm.params()),
        AccuracyTier::Low,
    )
    .unwrap();
    assert_eq!(state.bounce_points, bounce.points);
}

#[test]
fn named_overshoot_takes_preset_parameters() {
    let state = rehydrate(&fixture_state("overshoot-named"), defaults()).unwrap();
    assert!(!state.overshoot_is_custom);
    assert_eq!(state.overshoot_style, OvershootStyle::InOut);
    assert_eq!(state.overshoot_curve, OvershootCurve::Dramatic);
    let preset = OvershootCurve::Dramatic.params(OvershootStyle::InOut);
    assert_eq!(state.overshoot_mass, preset.mass);
    assert_eq!(state.overshoot_damping, preset.damping);
    assert!(state.overshoot_points.iter().any(|p| p.y > 1.0));
    assert_eq!(state.css_value(), state.overshoot_value);
}

#[test]
fn untouched_kinds_keep_their_defaults() {
    let state = rehydrate(&fixture_state("wiggle-named"), defaults()).unwrap();
    let base = defaults().state();
    assert_eq!(state.spring_value, base.spring_value);
    assert_eq!(state.bezier_points, base.bezier_points);
    assert_ne!(state.wiggle_value, base.wiggle_value);
}

#[test]
fn edited_state_survives_a_link() {
    let mut state: EasingState = defaults().state().clone();
    state.easing_type = EasingType::Spring;
    state.spring_is_custom = true;
    state.spring_stiffness = 55.0;
    state.preview_duration = 3.0;
    state.recompute(EasingType::Spring).unwrap();

    let link = share_string_from_state(&state, defaults()).unwrap();
    assert!(!link.is_empty());
    assert_eq!(state_from_share_string(&link, defaults()), state);
}

#[test]
fn bezier_accuracy_survives_a_link() {
    let mut state: EasingState = defaults().state().clone();
    state.bezier_is_custom = true;
    state.bezier_x1 = 0.3;
    state.editor_accuracy = AccuracyTier::Low;
    for kind in EasingType::ALL.iter().copied() {
        state.recompute(kind).unwrap();
    }

    let link = share_string_from_state(&state, defaults()).unwrap();
    let back = state_from_share_string(&link, defaults());
    assert_eq!(back.editor_accuracy, AccuracyTier::Low);
    assert_eq!(back.bezier_points, state.bezier_points);
    assert_eq!(back, state);
}

#[test]
fn custom_kind_at_preset_values_stays_custom_through_a_link() {
    let mut state: EasingState = defaults().state().clone();
    state.easing_type = EasingType::Spring;
    state.spring_is_custom = true;
    state.recompute(EasingType::Spring).unwrap();

    let link = share_string_from_state(&state, defaults()).unwrap();
    let back = state_from_share_string(&link, defaults());
    assert!(back.spring_is_custom);
    assert_eq!(back, state);
}

#[test]
fn unchanged_editor_shares_an_empty_link() {
    assert_eq!(share_string_from_state(defaults().state(), defaults()).unwrap(), "");
    assert_eq!(&state_from_share_string("", defaults()), defaults().state());
}

#[test]
fn bad_links_fall_back_to_defaults() {
    init_logs();
    let good = share::load("spring-custom").unwrap().encoded;
    let mut corrupted = good.clone();
    corrupted.pop();
    corrupted.push('Z');
    for link in [corrupted.as_str(), "x", "0a1", "zzzz"] {
        assert_eq!(&state_from_share_string(link, defaults()), defaults().state(), "{link}");
    }
    assert_eq!(
        state_from_share_string(&good, defaults()).easing_type,
        EasingType::Spring
    );
}

#[test]
fn out_of_range_values_are_rejected_on_rehydration() {
    let partial = easel_share_core::decode_share_state(&frame("a1l150")).unwrap();
    assert!(matches!(
        rehydrate(&partial, defaults()),
        Err(ShareError::Motion(_))
    ));
    assert_eq!(
        &state_from_share_string(&frame("a1l150"), defaults()),
        defaults().state()
    );
}

#[test]
fn values_are_rounded_to_field_precision() {
    let mut partial = ShareState::new();
    partial.insert(ShareKey::EasingType, "SPRING");
    partial.insert(ShareKey::SpringMass, 2.04);
    let state = rehydrate(&partial, defaults()).unwrap();
    assert_eq!(state.spring_mass, 2.0);
}

#[test]
fn easing_state_json_is_camel_case() {
    let json = serde_json::to_value(defaults().state()).unwrap();
    assert_eq!(json["easingType"], "BEZIER");
    assert_eq!(json["editorAccuracy"], "HIGH");
    assert!(json["bezierX1"].is_number());
    assert!(json["springPoints"].is_array());
    assert!(json["overshootIsCustom"].is_boolean());
}
