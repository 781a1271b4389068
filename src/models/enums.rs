use serde::{Deserialize, Serialize};

/// A code string that does not name any registered variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown value for {field}: {value}")]
pub struct UnknownCode {
    pub field: &'static str,
    pub value: String,
}

/// Macro to generate a coded enum with as_str + label + std::str::FromStr.
macro_rules! coded_enum {
    ($name:ident { $($variant:ident => $code:literal, $label:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $code)] $variant),+
        }

        impl $name {
            /// Every variant, in display order.
            pub const ALL: &'static [$name] = &[$(Self::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $code),+
                }
            }

            pub fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = UnknownCode;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($code => Ok(Self::$variant)),+,
                    _ => Err(UnknownCode {
                        field: stringify!($name),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

coded_enum!(FrequencyCode {
    OnceDaily => "once-daily", "Once Daily",
    TwiceDaily => "twice-daily", "Twice Daily",
    ThreeTimesDaily => "three-times-daily", "Three Times Daily",
    FourTimesDaily => "four-times-daily", "Four Times Daily",
    AsNeeded => "as-needed", "As Needed",
    Weekly => "weekly", "Weekly",
});

/// Human label for a frequency code.
///
/// Unrecognized codes are returned unchanged rather than rejected.
pub fn label_for(code: &str) -> &str {
    match code.parse::<FrequencyCode>() {
        Ok(freq) => freq.label(),
        Err(_) => code,
    }
}

/// Whether `code` names a registered frequency.
pub fn is_known_frequency(code: &str) -> bool {
    code.parse::<FrequencyCode>().is_ok()
}
