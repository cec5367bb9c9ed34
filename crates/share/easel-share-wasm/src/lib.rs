//! JSON-string surface over `easel-share-core` for the editor.
//!
//! States cross the boundary as JSON text (`EasingState` or the sparse
//! `ShareState` with long keys). Every call uses the current defaults.

use wasm_bindgen::prelude::*;

use easel_share_core::{self as share, Defaults, EasingState, ShareError, ShareState};
use serde::de::DeserializeOwned;
use serde::Serialize;

fn share_err(err: ShareError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn parse_json<T: DeserializeOwned>(what: &str, json: &str) -> Result<T, JsValue> {
    serde_json::from_str(json).map_err(|e| JsValue::from_str(&format!("{what} error: {e}")))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn defaults() -> &'static Defaults {
    Defaults::current()
}

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Full default editor state as JSON.
#[wasm_bindgen]
pub fn default_state() -> Result<String, JsValue> {
    to_json(defaults().state())
}

/// Encode a sparse state (`{ "easingType": "SPRING", ... }`) into a share string.
#[wasm_bindgen]
pub fn encode_share_state(state_json: &str) -> Result<String, JsValue> {
    let state: ShareState = parse_json("share state", state_json)?;
    share::encode_share_state(&state).map_err(share_err)
}

/// Decode a share string into the sparse state it carries (JSON).
#[wasm_bindgen]
pub fn decode_share_state(encoded: &str) -> Result<String, JsValue> {
    let state = share::decode_share_state(encoded).map_err(share_err)?;
    to_json(&state)
}

/// Sparse state JSON → full `EasingState` JSON with recomputed curves.
#[wasm_bindgen]
pub fn rehydrate(partial_json: &str) -> Result<String, JsValue> {
    let partial: ShareState = parse_json("share state", partial_json)?;
    let state = share::rehydrate(&partial, defaults()).map_err(share_err)?;
    to_json(&state)
}

/// Full `EasingState` JSON → sparse state JSON.
#[wasm_bindgen]
pub fn reduce_state(state_json: &str) -> Result<String, JsValue> {
    let state: EasingState = parse_json("easing state", state_json)?;
    to_json(&share::reduce(&state, defaults()))
}

/// Full `EasingState` JSON → share string (empty when nothing differs from defaults).
#[wasm_bindgen]
pub fn share_string_from_state(state_json: &str) -> Result<String, JsValue> {
    let state: EasingState = parse_json("easing state", state_json)?;
    share::share_string_from_state(&state, defaults()).map_err(share_err)
}

/// Share string → full `EasingState` JSON. Invalid links give the defaults.
#[wasm_bindgen]
pub fn state_from_share_string(encoded: &str) -> Result<String, JsValue> {
    to_json(&share::state_from_share_string(encoded, defaults()))
}

/// Old query string (`?easingType=spring&springDamping=15...`) → full `EasingState` JSON.
#[wasm_bindgen]
pub fn migrate_legacy(query: &str) -> Result<String, JsValue> {
    let params = share::parse_query(query);
    let state = share::migrate_legacy(&params, defaults()).map_err(share_err)?;
    to_json(&state)
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
