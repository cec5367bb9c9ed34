//! `named_enum!`: closed sets of names with a stable text form and index.
//!
//! Every generated enum gets `ALL` and `NAMES` (declaration order, which is also the
//! index order used by the share codec), `as_str`, `index`, `from_index`,
//! `Display` and a `FromStr` that rejects unknown text with
//! [`MotionError::UnknownName`](crate::MotionError::UnknownName).

#[macro_export]
macro_rules! named_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($kind:literal) {
            $($variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        $vis enum $name {
            $(
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant in declaration (index) order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Text form of every variant, index-aligned with `ALL`.
            pub const NAMES: &'static [&'static str] = &[$($text),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }

            pub fn index(self) -> usize {
                self as usize
            }

            pub fn from_index(index: usize) -> Option<Self> {
                Self::ALL.get(index).copied()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::MotionError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| $crate::MotionError::UnknownName {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }
    };
}
