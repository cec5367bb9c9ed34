//! Partial state → full [`EasingState`], plus the link boundary helpers.

use easel_motion_core::EasingType;
use log::{debug, warn};

use crate::codec::{decode_share_state, encode_share_state};
use crate::defaults::Defaults;
use crate::error::ShareError;
use crate::keys::ShareKey;
use crate::reduce::reduce;
use crate::share_state::ShareState;
use crate::state::EasingState;

/// Merge `partial` over `defaults` and recompute derived curves.
///
/// A kind is custom exactly when one of its raw parameters is present;
/// otherwise its parameters come from the selected preset. The active kind
/// and every kind the partial state touches are resampled (all kinds when the
/// accuracy changes). Derived fields are never read from the input.
pub fn rehydrate(partial: &ShareState, defaults: &Defaults) -> Result<EasingState, ShareError> {
    let mut state = defaults.state().clone();
    for (key, value) in partial.iter() {
        state.set(key, value)?;
    }

    let accuracy_changed = state.editor_accuracy != defaults.state().editor_accuracy;
    for kind in EasingType::ALL.iter().copied() {
        let touched = partial.keys().any(|k| k.group() == Some(kind));
        if kind != state.easing_type && !touched && !accuracy_changed {
            continue;
        }
        let custom = ShareKey::custom_keys(kind).any(|k| partial.contains_key(k));
        state.set_custom(kind, custom);
        state.recompute(kind)?;
    }
    Ok(state)
}

/// Decode and rehydrate a link, falling back to the defaults on any error.
///
/// The empty string is the encoding of an unchanged editor and yields the
/// defaults without a warning.
pub fn state_from_share_string(encoded: &str, defaults: &Defaults) -> EasingState {
    if encoded.is_empty() {
        return defaults.state().clone();
    }
    match decode_share_state(encoded).and_then(|partial| rehydrate(&partial, defaults)) {
        Ok(state) => {
            debug!("restored {} state from share string", state.easing_type);
            state
        }
        Err(err) => {
            warn!("ignoring share string {encoded:?}: {err}");
            defaults.state().clone()
        }
    }
}

/// Reduce and encode `state` for a link.
pub fn share_string_from_state(
    state: &EasingState,
    defaults: &Defaults,
) -> Result<String, ShareError> {
    encode_share_state(&reduce(state, defaults))
}
