//! Share string wire format.
//!
//! ```text
//! <version><key><value><key><value>...<crc hi><crc lo>
//! ```
//!
//! - `version` is one base-62 digit ([`ShareVersion`] index).
//! - Every key is one lowercase letter ([`ShareKey::short_key`]) and values
//!   never contain letters, so the next letter ends the previous value.
//! - Choice values are written as their index in the key's table; numbers
//!   are rounded to the field precision with trailing zeros and a leading
//!   `0` before the point removed (`0.40 -> .4`, `-0.5 -> -.5`).
//! - The checksum is CRC-8 (poly 0x07, init 0, no reflection, no final xor)
//!   over the payload bytes, written as two base-62 digits `crc / 62`, `crc % 62`.
//!
//! The empty state encodes to the empty string.

use easel_motion_core::math::format_number;
use log::debug;

use crate::defaults::ShareVersion;
use crate::error::ShareError;
use crate::keys::{FieldCodec, ShareKey};
use crate::share_state::{ShareState, ShareValue};

pub const BASE62_ALPHABET: &[u8; 62] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Version character plus two checksum characters.
const FRAME_LEN: usize = 3;

pub fn base62_char(digit: u8) -> Option<char> {
    BASE62_ALPHABET.get(digit as usize).map(|b| *b as char)
}

pub fn base62_digit(c: char) -> Option<u8> {
    if !c.is_ascii() {
        return None;
    }
    BASE62_ALPHABET
        .iter()
        .position(|b| *b == c as u8)
        .map(|i| i as u8)
}

pub fn crc8(bytes: &[u8]) -> u8 {
    let mut crc = 0u8;
    for &byte in bytes {
        crc ^= byte;
        for _ in 0..8 {
            crc = if crc & 0x80 != 0 {
                (crc << 1) ^ 0x07
            } else {
                crc << 1
            };
        }
    }
    crc
}

fn checksum_chars(payload: &str) -> [char; 2] {
    let crc = crc8(payload.as_bytes());
    let hi = BASE62_ALPHABET[(crc / 62) as usize] as char;
    let lo = BASE62_ALPHABET[(crc % 62) as usize] as char;
    [hi, lo]
}

/// Parse a bare decimal: `-?\d*\.?\d+`.
///
/// Accepts `12`, `0.5`, `.5`, `-.5`; rejects empty input, a lone sign or
/// point, a trailing point (`5.`), exponents, and anything else.
pub fn parse_decimal(token: &str) -> Option<f64> {
    let (negative, body) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token),
    };
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    let (int, frac) = match body.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (body, None),
    };
    let valid = match frac {
        Some(frac) => all_digits(int) && !frac.is_empty() && all_digits(frac),
        None => !int.is_empty() && all_digits(int),
    };
    if !valid {
        return None;
    }
    let int = if int.is_empty() { "0" } else { int };
    let canonical = match frac {
        Some(frac) => format!("{int}.{frac}"),
        None => int.to_string(),
    };
    let value: f64 = canonical.parse().ok()?;
    Some(if negative { -value } else { value })
}

/// `0.42 -> .42`, `-0.42 -> -.42`; anything else is returned unchanged.
fn strip_leading_zero(text: String) -> String {
    if let Some(rest) = text.strip_prefix("0.") {
        format!(".{rest}")
    } else if let Some(rest) = text.strip_prefix("-0.") {
        format!("-.{rest}")
    } else {
        text
    }
}

fn encode_value(key: ShareKey, value: &ShareValue) -> Result<String, ShareError> {
    let invalid = || ShareError::InvalidValue {
        key,
        token: value.to_string(),
    };
    match (key.codec(), value) {
        (FieldCodec::Choice(names), ShareValue::Choice(name)) => names
            .iter()
            .position(|n| n == name)
            .map(|i| i.to_string())
            .ok_or_else(invalid),
        (FieldCodec::Number(bounds), ShareValue::Number(v)) if v.is_finite() => {
            Ok(strip_leading_zero(format_number(*v, bounds.decimals)))
        }
        _ => Err(invalid()),
    }
}

fn decode_value(key: ShareKey, token: &str) -> Result<ShareValue, ShareError> {
    let invalid = || ShareError::InvalidValue {
        key,
        token: token.to_string(),
    };
    match key.codec() {
        FieldCodec::Choice(names) => {
            if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            let index: usize = token.parse().map_err(|_| invalid())?;
            names
                .get(index)
                .map(|name| ShareValue::Choice(name.to_string()))
                .ok_or_else(invalid)
        }
        FieldCodec::Number(_) => parse_decimal(token)
            .map(ShareValue::Number)
            .ok_or_else(invalid),
    }
}

/// Encode a partial state with the current version. Keys are written in
/// [`ShareKey::ALL`] order, so equal states give equal strings.
pub fn encode_share_state(state: &ShareState) -> Result<String, ShareError> {
    if state.is_empty() {
        return Ok(String::new());
    }
    let mut payload = String::new();
    for key in ShareKey::ALL {
        if let Some(value) = state.get(*key) {
            payload.push(key.short_key());
            payload.push_str(&encode_value(*key, value)?);
        }
    }

    let version = ShareVersion::CURRENT.index() as u8;
    let mut out = String::with_capacity(payload.len() + FRAME_LEN);
    out.push(base62_char(version).ok_or(ShareError::UnsupportedVersion(version))?);
    out.push_str(&payload);
    out.extend(checksum_chars(&payload));
    Ok(out)
}

/// Decode a share string into the partial state it carries.
///
/// Rejects short input, unknown versions and checksum mismatches before
/// looking at the payload.
pub fn decode_share_state(encoded: &str) -> Result<ShareState, ShareError> {
    let chars: Vec<char> = encoded.chars().collect();
    if chars.len() < FRAME_LEN {
        return Err(ShareError::TooShort(chars.len()));
    }

    let version_char = chars[0];
    let digit = base62_digit(version_char).ok_or(ShareError::InvalidVersion(version_char))?;
    let version =
        ShareVersion::from_index(digit as usize).ok_or(ShareError::UnsupportedVersion(digit))?;

    let (hi, lo) = (chars[chars.len() - 2], chars[chars.len() - 1]);
    let actual = match (base62_digit(hi), base62_digit(lo)) {
        (Some(h), Some(l)) => u16::from(h) * 62 + u16::from(l),
        _ => {
            return Err(ShareError::MalformedPayload(format!(
                "checksum '{hi}{lo}' is not base-62"
            )))
        }
    };
    let payload: String = chars[1..chars.len() - 2].iter().collect();
    let expected = u16::from(crc8(payload.as_bytes()));
    if actual != expected {
        return Err(ShareError::Corrupted { expected, actual });
    }

    let state = parse_payload(&payload)?;
    debug!("decoded share string v{version} with {} fields", state.len());
    Ok(state)
}

fn parse_payload(payload: &str) -> Result<ShareState, ShareError> {
    let mut state = ShareState::new();
    let mut rest = payload;
    while let Some(c) = rest.chars().next() {
        if !c.is_ascii_alphabetic() {
            return Err(ShareError::MalformedPayload(format!(
                "expected a key at '{rest}'"
            )));
        }
        let key = ShareKey::from_short_key(c).ok_or(ShareError::UnknownKey(c))?;
        let body = &rest[c.len_utf8()..];
        let end = body
            .find(|ch: char| ch.is_ascii_alphabetic())
            .unwrap_or(body.len());
        let value = decode_value(key, &body[..end])?;
        if state.insert(key, value).is_some() {
            return Err(ShareError::MalformedPayload(format!("duplicate key '{c}'")));
        }
        rest = &body[end..];
    }
    Ok(state)
}
