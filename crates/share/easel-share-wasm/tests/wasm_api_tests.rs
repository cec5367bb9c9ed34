#![cfg(target_arch = "wasm32")]
use easel_share_wasm::{
    abi_version, decode_share_state, default_state, encode_share_state, init, migrate_legacy,
    share_string_from_state, state_from_share_string,
};
use serde_json::{json, Value};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn parse(s: &str) -> Value {
    serde_json::from_str(s).unwrap()
}

#[wasm_bindgen_test]
fn abi_is_1() {
    assert_eq!(abi_version(), 1);
}

#[wasm_bindgen_test]
fn init_can_run_before_any_entry_point() {
    init();
    init();
    let state = parse(&migrate_legacy("?easingType=spring&springDamping=15").unwrap());
    assert_eq!(state["easingType"], "SPRING");
    assert_eq!(state["springDamping"], 50.0);
}

#[wasm_bindgen_test]
fn share_state_round_trips_through_strings() {
    let state = json!({
        "easingType": "BEZIER",
        "bezierX1": 0.25,
        "bezierY1": 0.1,
        "bezierX2": 0.75,
        "bezierY2": 0.9
    });
    let encoded = encode_share_state(&state.to_string()).expect("encode");
    assert_eq!(encoded, "0a0g.25h.1i.75j.928");
    assert_eq!(parse(&decode_share_state(&encoded).expect("decode")), state);
}

#[wasm_bindgen_test]
fn corrupted_links_are_errors_or_defaults() {
    assert!(decode_share_state("0a0g.25h.1i.75j.929").is_err());
    let fallback = parse(&state_from_share_string("0a0g.25h.1i.75j.929").unwrap());
    assert_eq!(fallback, parse(&default_state().unwrap()));
}

#[wasm_bindgen_test]
fn default_state_shares_an_empty_link() {
    assert_eq!(share_string_from_state(&default_state().unwrap()).unwrap(), "");
}

#[wasm_bindgen_test]
fn legacy_links_migrate() {
    let state = parse(&migrate_legacy("?easingType=spring&springDamping=15").unwrap());
    assert_eq!(state["easingType"], "SPRING");
    assert_eq!(state["springDamping"], 50.0);
}
