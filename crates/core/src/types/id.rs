//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types. IDs are strings so
//! seeded records can keep short readable ids (`a1`, `c1`) while generated
//! ones carry a prefix (`ORD-3F9A2C1B`).

/// Macro to define a type-safe string ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - `new()`, `generate()`, `as_str()`
/// - `Display`, `From<&str>` and `AsRef<str>`
///
/// # Example
///
/// ```rust
/// # use tribal_hub_core::define_id;
/// define_id!(ShopId, "shop-");
///
/// let fixed = ShopId::new("shop-1");
/// let fresh = ShopId::generate();
///
/// assert_eq!(fixed.as_str(), "shop-1");
/// assert!(fresh.as_str().starts_with("shop-"));
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Prefix used by [`Self::generate`].
            pub const PREFIX: &'static str = $prefix;

            /// Wrap an existing id value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Generate a fresh id: the prefix followed by 8 random hex digits.
            #[must_use]
            pub fn generate() -> Self {
                let suffix = ::uuid::Uuid::new_v4().simple().to_string();
                Self(format!(
                    "{}{}",
                    $prefix,
                    suffix.get(..8).unwrap_or(&suffix).to_uppercase()
                ))
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// Define standard entity IDs
define_id!(UserId, "u-");
define_id!(ProductId, "p-");
define_id!(OrderId, "ORD-");
define_id!(ReviewId, "r-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_uses_prefix() {
        let id = OrderId::generate();
        assert!(id.as_str().starts_with("ORD-"));
        assert_eq!(id.as_str().len(), "ORD-".len() + 8);
    }

    #[test]
    fn test_generated_ids_differ() {
        assert_ne!(ProductId::generate(), ProductId::generate());
    }

    #[test]
    fn test_display_is_raw_value() {
        assert_eq!(UserId::new("a1").to_string(), "a1");
    }

    #[test]
    fn test_serializes_transparently() {
        let json = serde_json::to_string(&ReviewId::new("r-1")).unwrap_or_default();
        assert_eq!(json, "\"r-1\"");
    }
}
