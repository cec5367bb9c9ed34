//! easel-share-core: editor state and compact share links.
//!
//! Flow for a link:
//! [`EasingState`] → [`reduce`] → [`ShareState`] → [`encode_share_state`] → string,
//! and back with [`decode_share_state`] → [`rehydrate`]. Old query-string
//! links go through [`legacy`]. Every step that depends on defaults takes a
//! [`Defaults`] explicitly.

pub mod codec;
pub mod defaults;
pub mod error;
pub mod keys;
pub mod legacy;
pub mod reduce;
pub mod rehydrate;
pub mod share_state;
pub mod state;

pub use codec::{decode_share_state, encode_share_state, parse_decimal};
pub use defaults::{Defaults, ShareVersion};
pub use error::ShareError;
pub use keys::{FieldCodec, Role, ShareKey};
pub use legacy::{legacy_to_share_state, migrate_legacy, parse_query, LegacyParams};
pub use reduce::reduce;
pub use rehydrate::{rehydrate, share_string_from_state, state_from_share_string};
pub use share_state::{ShareState, ShareValue};
pub use state::{EasingState, PreviewAnimationType, PREVIEW_DURATION};
