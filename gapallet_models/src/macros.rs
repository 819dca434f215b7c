macro_rules! nutype_string {
    ($(#[$meta:meta])* $ident:ident($($args:tt)*)) => {
        $(#[$meta])*
        #[::nutype::nutype(
            sanitize(trim),
            $($args)*,
            derive(Debug, Clone, PartialEq, Eq, Display, TryFrom, Deref, Serialize, Deserialize)
        )]
        pub struct $ident(String);

        impl $ident {
            pub fn as_str(&self) -> &str {
                self
            }
        }
    };
}

/// Declares the field enum of a form draft together with its wire names.
macro_rules! lead_fields {
    ($(#[$meta:meta])* $ident:ident { $($variant:ident => $name:literal),* $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $ident {
            $($variant),*
        }

        impl $crate::lead::LeadField for $ident {
            const ALL: &'static [Self] = &[$(Self::$variant),*];

            fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $name),*
                }
            }
        }

        impl ::std::str::FromStr for $ident {
            type Err = $crate::lead::UnknownFieldError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(Self::$variant),)*
                    _ => Err($crate::lead::UnknownFieldError(s.into())),
                }
            }
        }

        impl ::std::fmt::Display for $ident {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::lead::LeadField::as_str(*self))
            }
        }
    };
}

pub(crate) use lead_fields;
pub(crate) use nutype_string;
