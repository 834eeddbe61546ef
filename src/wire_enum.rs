//! String-backed wire enumerations.
//!
//! API vocabularies (access levels, record statuses, ...) travel as plain
//! string tokens. [`wire_enum!`] declares one vocabulary as a Rust enum with
//! an exact-case token table, an always-present empty member, and serde
//! implementations that read and write the underlying token.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// A closed vocabulary of string tokens, declared with [`wire_enum!`].
///
/// Every type carries an empty member ([`WireEnum::NONE`], token `""`) for
/// values the API reports as explicitly empty. Lookup failure is `None`,
/// which is distinct from `Some(NONE)`.
pub trait WireEnum: Copy + Eq + Hash + fmt::Debug + 'static {
    /// The empty member, backed by the `""` token.
    const NONE: Self;

    /// Every defined member, `NONE` included.
    fn members() -> &'static [Self];

    /// Wire representation of this member.
    fn as_str(self) -> &'static str;

    /// Exact-case lookup of a defined member.
    fn find(token: &str) -> Option<Self>;

    /// Returns true for the empty member.
    fn is_none(self) -> bool {
        self == Self::NONE
    }
}

/// Builds the token lookup table for one vocabulary.
///
/// Two members sharing a token is a definition error in the vocabulary
/// itself, reported the first time the type is used. The table lives behind
/// a `LazyLock`, so a failed build is re-raised on every later access.
#[doc(hidden)]
pub fn build_token_table<E: WireEnum>() -> HashMap<&'static str, E> {
    let mut table = HashMap::with_capacity(E::members().len());
    for &member in E::members() {
        assert!(
            table.insert(member.as_str(), member).is_none(),
            "duplicate wire token '{}' on {}",
            member.as_str(),
            std::any::type_name::<E>(),
        );
    }
    table
}

/// Declares a string-backed wire enumeration.
///
/// ```
/// mailwire::wire_enum! {
///     /// Delivery channel of an inbox.
///     pub enum Channel {
///         Smtp => "smtp",
///         Http => "http",
///     }
/// }
/// ```
///
/// The generated enum always includes a `None` member backed by the empty
/// token. Serialization writes the token; deserialization accepts exactly
/// the defined tokens and rejects `null` — optional fields should be
/// declared as `Option<Enum>` instead.
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$member_meta:meta])*
                $member:ident => $token:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis enum $name {
            /// Explicitly empty token.
            #[default]
            None,
            $(
                $(#[$member_meta])*
                $member,
            )+
        }

        impl $name {
            fn token_table() -> &'static ::std::collections::HashMap<&'static str, $name> {
                static TABLE: ::std::sync::LazyLock<
                    ::std::collections::HashMap<&'static str, $name>,
                > = ::std::sync::LazyLock::new($crate::wire_enum::build_token_table::<$name>);
                &TABLE
            }
        }

        impl $crate::wire_enum::WireEnum for $name {
            const NONE: Self = $name::None;

            fn members() -> &'static [Self] {
                &[$name::None, $($name::$member),+]
            }

            fn as_str(self) -> &'static str {
                match self {
                    $name::None => "",
                    $($name::$member => $token,)+
                }
            }

            fn find(token: &str) -> Option<Self> {
                Self::token_table().get(token).copied()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::wire_enum::WireEnum::as_str(*self))
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str($crate::wire_enum::WireEnum::as_str(*self))
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                struct TokenVisitor;

                impl<'de> ::serde::de::Visitor<'de> for TokenVisitor {
                    type Value = $name;

                    fn expecting(
                        &self,
                        f: &mut ::std::fmt::Formatter<'_>,
                    ) -> ::std::fmt::Result {
                        write!(f, concat!("a ", stringify!($name), " token"))
                    }

                    fn visit_str<E>(self, token: &str) -> Result<$name, E>
                    where
                        E: ::serde::de::Error,
                    {
                        <$name as $crate::wire_enum::WireEnum>::find(token).ok_or_else(|| {
                            E::custom(format_args!(
                                concat!("unknown ", stringify!($name), " token '{}'"),
                                token
                            ))
                        })
                    }
                }

                deserializer.deserialize_str(TokenVisitor)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::WireEnum;

    crate::wire_enum! {
        enum Fruit {
            Apple => "apple",
            BloodOrange => "blood orange",
        }
    }

    crate::wire_enum! {
        enum Clashing {
            First => "same",
            Second => "same",
        }
    }

    #[test]
    fn distinct_tokens_map_to_distinct_members() {
        assert_ne!(Fruit::find("apple"), Fruit::find("blood orange"));
        assert_eq!(Fruit::find("apple"), Some(Fruit::Apple));
    }

    #[test]
    fn lookup_is_exact_case() {
        assert_eq!(Fruit::find("Apple"), None);
    }

    #[test]
    fn empty_token_is_the_none_member_not_a_miss() {
        assert_eq!(Fruit::find(""), Some(Fruit::None));
        assert!(Fruit::None.is_none());
        assert_eq!(Fruit::find("pear"), None);
    }

    #[test]
    fn members_round_trip_through_json() {
        for &member in Fruit::members() {
            let encoded = serde_json::to_string(&member).expect("encodes");
            let decoded: Fruit = serde_json::from_str(&encoded).expect("decodes");
            assert_eq!(decoded, member);
        }
    }

    #[test]
    fn unknown_token_is_rejected_on_decode() {
        let result: Result<Fruit, _> = serde_json::from_str(r#""pear""#);
        assert!(result.is_err());
    }

    #[test]
    fn null_is_rejected_for_a_required_field() {
        let result: Result<Fruit, _> = serde_json::from_str("null");
        assert!(result.is_err());
    }

    #[test]
    fn null_maps_to_absent_for_an_optional_field() {
        let decoded: Option<Fruit> = serde_json::from_str("null").expect("decodes");
        assert_eq!(decoded, None);
    }

    #[test]
    #[should_panic(expected = "duplicate wire token 'same'")]
    fn duplicate_token_fails_on_first_use() {
        let _ = Clashing::find("same");
    }
}
