use easel_share_core::codec::{base62_char, crc8, BASE62_ALPHABET};
use easel_share_core::{
    decode_share_state, encode_share_state, ShareError, ShareKey, ShareState, ShareValue,
};
use easel_test_fixtures::share;

fn frame(version: char, payload: &str) -> String {
    let crc = crc8(payload.as_bytes());
    let mut out = String::new();
    out.push(version);
    out.push_str(payload);
    out.push(base62_char(crc / 62).unwrap());
    out.push(base62_char(crc % 62).unwrap());
    out
}

fn fixture_state(name: &str) -> (ShareState, String) {
    let fixture = share::load(name).expect("load share fixture");
    let state: ShareState = serde_json::from_value(fixture.state).expect("share state json");
    (state, fixture.encoded)
}

#[test]
fn bezier_control_points_round_trip() {
    let mut state = ShareState::new();
    state.insert(ShareKey::EasingType, "BEZIER");
    state.insert(ShareKey::BezierX1, 0.25);
    state.insert(ShareKey::BezierY1, 0.1);
    state.insert(ShareKey::BezierX2, 0.75);
    state.insert(ShareKey::BezierY2, 0.9);

    let encoded = encode_share_state(&state).unwrap();
    assert_eq!(&encoded[..1], "0");
    assert!(encoded.contains("g.25"), "{encoded}");
    let decoded = decode_share_state(&encoded).unwrap();
    assert_eq!(decoded, state);
    assert_eq!(
        decoded.get(ShareKey::EasingType),
        Some(&ShareValue::Choice("BEZIER".into()))
    );
}

#[test]
fn fixtures_match_their_golden_strings() {
    for name in share::keys() {
        let (state, encoded) = fixture_state(&name);
        assert_eq!(encode_share_state(&state).unwrap(), encoded, "{name}");
        assert_eq!(decode_share_state(&encoded).unwrap(), state, "{name}");
    }
}

#[test]
fn encoding_ignores_insertion_order() {
    let mut a = ShareState::new();
    a.insert(ShareKey::SpringMass, 2.0);
    a.insert(ShareKey::EasingType, "SPRING");
    let mut b = ShareState::new();
    b.insert(ShareKey::EasingType, "SPRING");
    b.insert(ShareKey::SpringMass, 2.0);
    assert_eq!(encode_share_state(&a).unwrap(), encode_share_state(&b).unwrap());
}

#[test]
fn numbers_lose_their_leading_zero() {
    let mut state = ShareState::new();
    state.insert(ShareKey::BezierY1, -0.5);
    state.insert(ShareKey::BezierX2, 0.4);
    let encoded = encode_share_state(&state).unwrap();
    assert!(encoded.starts_with("0h-.5i.4"), "{encoded}");
    assert_eq!(decode_share_state(&encoded).unwrap(), state);
}

#[test]
fn empty_state_encodes_to_empty_string() {
    assert_eq!(encode_share_state(&ShareState::new()).unwrap(), "");
    // an empty payload still frames and decodes
    assert!(decode_share_state(&frame('0', "")).unwrap().is_empty());
}

#[test]
fn altered_last_character_is_rejected() {
    let (_, encoded) = fixture_state("spring-custom");
    let mut chars: Vec<char> = encoded.chars().collect();
    let last = chars.len() - 1;
    chars[last] = if chars[last] == 'Z' { 'Y' } else { 'Z' };
    let altered: String = chars.into_iter().collect();
    assert!(matches!(
        decode_share_state(&altered),
        Err(ShareError::Corrupted { .. })
    ));
}

#[test]
fn every_single_character_substitution_is_rejected() {
    let replacements: Vec<char> = BASE62_ALPHABET
        .iter()
        .map(|b| *b as char)
        .chain(['.', '-'])
        .collect();
    for name in share::keys() {
        let (_, encoded) = fixture_state(&name);
        let chars: Vec<char> = encoded.chars().collect();
        for i in 0..chars.len() {
            for &c in &replacements {
                if c == chars[i] {
                    continue;
                }
                let mut altered = chars.clone();
                altered[i] = c;
                let altered: String = altered.into_iter().collect();
                assert!(
                    decode_share_state(&altered).is_err(),
                    "{name}: {altered} decoded"
                );
            }
        }
    }
}

#[test]
fn framing_errors_are_reported() {
    assert!(matches!(decode_share_state(""), Err(ShareError::TooShort(0))));
    assert!(matches!(decode_share_state("0a"), Err(ShareError::TooShort(2))));
    assert!(matches!(
        decode_share_state("-a000"),
        Err(ShareError::InvalidVersion('-'))
    ));
    assert!(matches!(
        decode_share_state(&frame('1', "a1")),
        Err(ShareError::UnsupportedVersion(1))
    ));
    assert!(matches!(
        decode_share_state("0a1.."),
        Err(ShareError::MalformedPayload(_))
    ));
}

#[test]
fn payload_errors_surface_after_the_checksum() {
    assert!(matches!(
        decode_share_state(&frame('0', "a1z3")),
        Err(ShareError::UnknownKey('z'))
    ));
    assert!(matches!(
        decode_share_state(&frame('0', "a7")),
        Err(ShareError::InvalidValue {
            key: ShareKey::EasingType,
            ..
        })
    ));
    assert!(matches!(
        decode_share_state(&frame('0', "l5.")),
        Err(ShareError::InvalidValue {
            key: ShareKey::SpringStiffness,
            ..
        })
    ));
}

#[test]
fn unknown_choice_text_cannot_be_encoded() {
    let mut state = ShareState::new();
    state.insert(ShareKey::EasingType, "SIDEWAYS");
    assert!(matches!(
        encode_share_state(&state),
        Err(ShareError::InvalidValue { .. })
    ));

    let mut state = ShareState::new();
    state.insert(ShareKey::SpringMass, "HEAVY");
    assert!(encode_share_state(&state).is_err());
}

#[test]
fn share_state_json_uses_long_keys() {
    let mut state = ShareState::new();
    state.insert(ShareKey::EasingType, "SPRING");
    state.insert(ShareKey::SpringStiffness, 70.0);
    let json = serde_json::to_value(&state).unwrap();
    assert_eq!(json["easingType"], "SPRING");
    assert_eq!(json["springStiffness"], 70.0);
}
