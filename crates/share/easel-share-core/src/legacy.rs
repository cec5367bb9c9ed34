//! Migration of old query-string links.
//!
//! Old links carried the editor state as plain `key=value` pairs with full
//! enum names, some different key names, physical (not slider) damping
//! ranges, a combined `bezierRawValue` and explicit `<kind>IsCustom` flags.
//! They are translated into a current [`ShareState`] and rehydrated; any
//! derived curve data in the old link is ignored.

use easel_motion_core::math::map_range;
use easel_motion_core::models::{bounce, spring, wiggle};
use easel_motion_core::EasingType;
use indexmap::IndexMap;
use log::debug;

use crate::defaults::Defaults;
use crate::error::ShareError;
use crate::keys::{FieldCodec, ShareKey};
use crate::rehydrate::rehydrate;
use crate::share_state::{ShareState, ShareValue};
use crate::state::EasingState;

/// Decoded query parameters in link order.
pub type LegacyParams = IndexMap<String, String>;

const RENAMES: &[(&str, ShareKey)] = &[
    ("duration", ShareKey::PreviewDuration),
    ("animationType", ShareKey::PreviewAnimationType),
    ("accuracy", ShareKey::EditorAccuracy),
    ("springPreset", ShareKey::SpringCurve),
    ("bouncePreset", ShareKey::BounceCurve),
    ("wigglePreset", ShareKey::WiggleCurve),
    ("overshootPreset", ShareKey::OvershootCurve),
];

/// Old physical ranges of fields now expressed on a `[0, 100]` slider.
fn legacy_range(key: ShareKey) -> Option<(f64, f64)> {
    match key {
        ShareKey::SpringDamping => Some(spring::DAMPING_RANGE),
        ShareKey::BounceDamping => Some(bounce::DAMPING_RANGE),
        ShareKey::WiggleDamping => Some(wiggle::DAMPING_RANGE),
        _ => None,
    }
}

const RAW_BEZIER: &str = "bezierRawValue";
const BEZIER_KEYS: [ShareKey; 4] = [
    ShareKey::BezierX1,
    ShareKey::BezierY1,
    ShareKey::BezierX2,
    ShareKey::BezierY2,
];

/// Split `a=b&c=d` into ordered pairs. A leading `?` is skipped, `+` means a
/// space and `%XX` escapes are decoded; a later duplicate key wins.
pub fn parse_query(query: &str) -> LegacyParams {
    let query = query.strip_prefix('?').unwrap_or(query);
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((k, v)) => (percent_decode(k), percent_decode(v)),
            None => (percent_decode(pair), String::new()),
        })
        .collect()
}

fn percent_decode(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => out.push(b' '),
            b'%' if i + 2 < bytes.len() => {
                match (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                    (Some(hi), Some(lo)) => {
                        out.push(hi << 4 | lo);
                        i += 2;
                    }
                    _ => out.push(b'%'),
                }
            }
            b => out.push(b),
        }
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_value(b: u8) -> Option<u8> {
    (b as char).to_digit(16).map(|d| d as u8)
}

/// `inOut`, `in-out`, `in out` and `IN_OUT` all become `IN_OUT`.
fn normalize_name(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 2);
    let mut prev_lower = false;
    for c in raw.trim().chars() {
        match c {
            '-' | ' ' | '_' => {
                out.push('_');
                prev_lower = false;
            }
            c if c.is_ascii_uppercase() && prev_lower => {
                out.push('_');
                out.push(c);
                prev_lower = false;
            }
            c => {
                out.push(c.to_ascii_uppercase());
                prev_lower = c.is_ascii_lowercase() || c.is_ascii_digit();
            }
        }
    }
    out
}

fn legacy_error(key: &str, value: &str) -> ShareError {
    ShareError::Legacy {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn parse_number(key: &str, value: &str) -> Result<f64, ShareError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| legacy_error(key, value))
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ShareError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(legacy_error(key, value)),
    }
}

fn custom_flag_kind(key: &str) -> Option<EasingType> {
    let prefix = key.strip_suffix("IsCustom")?;
    EasingType::ALL
        .iter()
        .copied()
        .find(|kind| kind.as_str().eq_ignore_ascii_case(prefix))
}

/// `[0.25,0.1,0.75,0.9]` or `0.25,0.1,0.75,0.9`.
fn split_raw_bezier(value: &str) -> Result<[f64; 4], ShareError> {
    let inner = value.trim().trim_start_matches('[').trim_end_matches(']');
    let parts: Vec<f64> = inner
        .split(',')
        .map(|p| parse_number(RAW_BEZIER, p))
        .collect::<Result<_, _>>()?;
    parts
        .try_into()
        .map_err(|_| legacy_error(RAW_BEZIER, value))
}

fn convert_value(raw_key: &str, key: ShareKey, raw: &str) -> Result<ShareValue, ShareError> {
    match key.codec() {
        FieldCodec::Choice(names) => {
            let name = normalize_name(raw);
            names
                .iter()
                .find(|n| **n == name)
                .map(|n| ShareValue::Choice(n.to_string()))
                .ok_or_else(|| legacy_error(raw_key, raw))
        }
        FieldCodec::Number(_) => {
            let v = parse_number(raw_key, raw)?;
            Ok(ShareValue::Number(match legacy_range(key) {
                Some((lo, hi)) => map_range(v, lo, hi, 0.0, 100.0).round().clamp(0.0, 100.0),
                None => v,
            }))
        }
    }
}

/// Translate old parameters into a current partial state.
pub fn legacy_to_share_state(params: &LegacyParams) -> Result<ShareState, ShareError> {
    let mut state = ShareState::new();
    let mut flags: Vec<(EasingType, bool)> = Vec::new();

    for (raw_key, raw_value) in params {
        if raw_key == RAW_BEZIER {
            let values = split_raw_bezier(raw_value)?;
            for (key, v) in BEZIER_KEYS.iter().zip(values) {
                state.insert(*key, v);
            }
            continue;
        }
        if let Some(kind) = custom_flag_kind(raw_key) {
            flags.push((kind, parse_flag(raw_key, raw_value)?));
            continue;
        }
        let key = RENAMES
            .iter()
            .find(|(old, _)| *old == raw_key.as_str())
            .map(|(_, key)| *key)
            .or_else(|| raw_key.parse::<ShareKey>().ok());
        let Some(key) = key else {
            debug!("ignoring legacy parameter {raw_key}");
            continue;
        };
        state.insert(key, convert_value(raw_key, key, raw_value)?);
    }

    // a kind flagged as named shares its preset, not its raw values
    for (kind, custom) in flags {
        if !custom {
            for key in ShareKey::custom_keys(kind) {
                state.remove(key);
            }
        }
    }
    Ok(state)
}

/// Translate and rehydrate an old link.
pub fn migrate_legacy(
    params: &LegacyParams,
    defaults: &Defaults,
) -> Result<EasingState, ShareError> {
    let partial = legacy_to_share_state(params)?;
    debug!("migrated {} legacy parameters", partial.len());
    rehydrate(&partial, defaults)
}
