use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use easel_motion_core::{
    css, svg, AccuracyTier, BezierParams, CurvePoint, MotionError, MotionParams,
};

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

/// Validation failures become the structured `[{ code, message, path }]` list;
/// anything else is a plain `Error`.
fn motion_error_to_js(err: MotionError) -> JsValue {
    match err {
        MotionError::Validation(errors) => swb::to_value(&errors)
            .unwrap_or_else(|e| JsError::new(&format!("validation error: {e}")).into()),
        other => JsError::new(&other.to_string()).into(),
    }
}

fn parse_accuracy(accuracy: JsValue) -> Result<AccuracyTier, JsValue> {
    if jsvalue_is_undefined_or_null(&accuracy) {
        return Ok(AccuracyTier::default());
    }
    swb::from_value(accuracy).map_err(|e| JsError::new(&format!("accuracy error: {e}")).into())
}

/// Compile motion params into `{ cssValue, points, totalTimeSeconds? }`.
/// Example:
///   sample_motion({ kind: "spring", stiffness: 20, damping: 26, mass: 3.5 }, "HIGH")
#[wasm_bindgen]
pub fn sample_motion(params: JsValue, accuracy: JsValue) -> Result<JsValue, JsValue> {

    let params: MotionParams = swb::from_value(params)
        .map_err(|e| JsValue::from(JsError::new(&format!("params error: {e}"))))?;
    let tier = parse_accuracy(accuracy)?;
    let curve = easel_motion_core::sample_motion(&params, tier).map_err(motion_error_to_js)?;
    swb::to_value(&curve).map_err(|e| JsError::new(&format!("output error: {e}")).into())
}

/// `cubic-bezier(...)` for raw control points (rounded to 2 decimals).
#[wasm_bindgen(js_name = cubic_bezier_css)]
pub fn cubic_bezier_css(x1: f64, y1: f64, x2: f64, y2: f64) -> Result<String, JsValue> {
    let params = MotionParams::Bezier(BezierParams { x1, y1, x2, y2 })
        .validated()
        .map_err(motion_error_to_js)?;
    match params {
        MotionParams::Bezier(p) => Ok(css::cubic_bezier(&p)),
        _ => Err(JsError::new("cubic_bezier_css: unexpected params").into()),
    }
}

/// SVG path `d` for sampled points within a `width × height` viewport.
#[wasm_bindgen(js_name = svg_path)]
pub fn svg_path(points: JsValue, width: f64, height: f64) -> Result<String, JsError> {
    let points: Vec<CurvePoint> =
        swb::from_value(points).map_err(|e| JsError::new(&format!("points error: {e}")))?;
    Ok(svg::path_data(&points, svg::Viewport::new(width, height)))
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
