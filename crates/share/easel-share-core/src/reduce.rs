//! Reduction: the smallest [`ShareState`] that rehydrates to the same editor state.

use easel_motion_core::math::round_to;

use crate::defaults::Defaults;
use crate::keys::{FieldCodec, Role, ShareKey};
use crate::share_state::{ShareState, ShareValue};
use crate::state::EasingState;

/// Whether `key` matters for `state` at all, before comparing with defaults.
///
/// Editor-wide keys always matter; the accuracy also sets the density of the
/// Bezier preview points. Curve keys matter for the active kind only, with
/// preset selectors and raw parameters mutually exclusive on `is_custom`.
pub fn is_relevant(state: &EasingState, key: ShareKey) -> bool {
    match key.group() {
        None => true,
        Some(kind) if kind != state.easing_type => false,
        Some(kind) => match key.role() {
            Role::Shared | Role::Variant => true,
            Role::Named => !state.is_custom(kind),
            Role::Custom => state.is_custom(kind),
        },
    }
}

fn same_value(key: ShareKey, a: &ShareValue, b: &ShareValue) -> bool {
    match (key.codec(), a, b) {
        (FieldCodec::Number(bounds), ShareValue::Number(x), ShareValue::Number(y)) => {
            round_to(*x, bounds.decimals) == round_to(*y, bounds.decimals)
        }
        _ => a == b,
    }
}

/// Keep the relevant fields of `state` that differ from `defaults`.
///
/// A custom active kind whose raw parameters all equal the defaults keeps
/// its first raw parameter, since rehydration reads a kind as custom only
/// when one of them is present.
pub fn reduce(state: &EasingState, defaults: &Defaults) -> ShareState {
    let base = defaults.state();
    let kind = state.easing_type;
    let custom_marker = if state.is_custom(kind)
        && ShareKey::custom_keys(kind).all(|key| same_value(key, &state.get(key), &base.get(key)))
    {
        ShareKey::custom_keys(kind).next()
    } else {
        None
    };
    ShareKey::ALL
        .iter()
        .copied()
        .filter(|key| is_relevant(state, *key))
        .map(|key| (key, state.get(key)))
        .filter(|(key, value)| {
            custom_marker == Some(*key) || !same_value(*key, value, &base.get(*key))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use easel_motion_core::{AccuracyTier, EasingType};

    #[test]
    fn defaults_reduce_to_nothing() {
        let defaults = Defaults::current();
        assert!(reduce(defaults.state(), defaults).is_empty());
    }

    #[test]
    fn accuracy_is_kept_for_every_kind() {
        let mut state = Defaults::current().state().clone();
        state.editor_accuracy = AccuracyTier::Low;
        for kind in EasingType::ALL.iter().copied() {
            state.easing_type = kind;
            assert!(is_relevant(&state, ShareKey::EditorAccuracy), "{kind}");
            let reduced = reduce(&state, Defaults::current());
            assert_eq!(
                reduced.get(ShareKey::EditorAccuracy),
                Some(&ShareValue::Choice("LOW".to_string())),
                "{kind}"
            );
        }
    }

    #[test]
    fn custom_kind_at_default_values_keeps_one_raw_parameter() {
        let mut state = Defaults::current().state().clone();
        state.easing_type = EasingType::Spring;
        state.spring_is_custom = true;
        let reduced = reduce(&state, Defaults::current());
        let keys: Vec<ShareKey> = reduced.keys().collect();
        assert_eq!(keys, vec![ShareKey::EasingType, ShareKey::SpringStiffness]);

        state.spring_mass = 2.0;
        let reduced = reduce(&state, Defaults::current());
        assert!(!reduced.contains_key(ShareKey::SpringStiffness));
        assert!(reduced.contains_key(ShareKey::SpringMass));
    }

    #[test]
    fn named_and_custom_fields_are_exclusive() {
        let mut state = Defaults::current().state().clone();
        state.easing_type = EasingType::Spring;
        assert!(is_relevant(&state, ShareKey::SpringCurve));
        assert!(!is_relevant(&state, ShareKey::SpringStiffness));
        assert!(!is_relevant(&state, ShareKey::BounceCurve));

        state.spring_is_custom = true;
        assert!(!is_relevant(&state, ShareKey::SpringCurve));
        assert!(is_relevant(&state, ShareKey::SpringStiffness));
    }

    #[test]
    fn overshoot_style_travels_with_custom_curves() {
        let mut state = Defaults::current().state().clone();
        state.easing_type = EasingType::Overshoot;
        state.overshoot_is_custom = true;
        assert!(is_relevant(&state, ShareKey::OvershootStyle));
        assert!(is_relevant(&state, ShareKey::OvershootMass));
        assert!(!is_relevant(&state, ShareKey::OvershootCurve));
    }

    #[test]
    fn numbers_compare_at_field_precision() {
        let mut state = Defaults::current().state().clone();
        state.preview_duration = 1.04;
        assert!(reduce(&state, Defaults::current()).is_empty());
        state.preview_duration = 1.5;
        let reduced = reduce(&state, Defaults::current());
        assert_eq!(
            reduced.get(ShareKey::PreviewDuration),
            Some(&ShareValue::Number(1.5))
        );
    }
}
