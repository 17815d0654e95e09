//! Query-option plumbing shared by every endpoint family.
//!
//! Endpoint modules declare one options struct per list/get operation with
//! [`query_options!`](crate::query_options). Only the options a caller sets
//! are sent, in declaration order.

use std::fmt;

/// Anything that can contribute query-string pairs to a request.
pub trait QueryOptions {
  /// Key/value pairs to append to the URL, in order.
  fn query_pairs(&self) -> Vec<(String, String)>;
}

/// Field projection for the `fields` query parameter (`fields=id,name`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields(Vec<String>);

impl Fields {
  pub fn new() -> Self {
    Self::default()
  }

  /// Add one field name; nested fields use dotted paths (`availability.available`).
  pub fn with(mut self, field: impl Into<String>) -> Self {
    self.0.push(field.into());
    self
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }
}

impl fmt::Display for Fields {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0.join(","))
  }
}

impl From<&str> for Fields {
  fn from(value: &str) -> Self {
    Fields(value.split(',').map(|s| s.trim().to_string()).filter(|s| !s.is_empty()).collect())
  }
}

impl From<Vec<String>> for Fields {
  fn from(value: Vec<String>) -> Self {
    Fields(value)
  }
}

impl From<&[&str]> for Fields {
  fn from(value: &[&str]) -> Self {
    Fields(value.iter().map(|s| s.to_string()).collect())
  }
}

impl<const N: usize> From<[&str; N]> for Fields {
  fn from(value: [&str; N]) -> Self {
    Fields(value.iter().map(|s| s.to_string()).collect())
  }
}

/// Declare an options struct whose fields map one-to-one onto query keys.
///
/// Every field is optional. `String` and `Fields` setters accept anything
/// convertible; other types are taken by value and rendered with `Display`.
///
/// ```ignore
/// learn_core::query_options! {
///   /// Options for listing terms.
///   pub struct GetTermsOptions {
///     offset: u32 => "offset",
///     limit: u32 => "limit",
///     external_id: String => "externalId",
///     fields: Fields => "fields",
///   }
/// }
///
/// let opts = GetTermsOptions::new().limit(10).external_id("FALL-2025");
/// ```
#[macro_export]
macro_rules! query_options {
  (@setter $key:literal, $field:ident, String) => {
    #[doc = concat!("Sets the `", $key, "` query parameter.")]
    pub fn $field(mut self, value: impl Into<String>) -> Self {
      self.$field = Some(value.into());
      self
    }
  };
  (@setter $key:literal, $field:ident, Fields) => {
    #[doc = concat!("Sets the `", $key, "` query parameter.")]
    pub fn $field(mut self, value: impl Into<$crate::Fields>) -> Self {
      self.$field = Some(value.into());
      self
    }
  };
  (@setter $key:literal, $field:ident, $ty:ident) => {
    #[doc = concat!("Sets the `", $key, "` query parameter.")]
    pub fn $field(mut self, value: $ty) -> Self {
      self.$field = Some(value);
      self
    }
  };
  (
    $(#[$meta:meta])*
    $vis:vis struct $name:ident {
      $( $field:ident : $ty:ident => $key:literal ),* $(,)?
    }
  ) => {
    $(#[$meta])*
    #[derive(Debug, Clone, Default, PartialEq)]
    $vis struct $name {
      $(
        #[doc = concat!("Value sent as `", $key, "`.")]
        pub $field: Option<$ty>,
      )*
    }

    impl $name {
      /// Options with nothing set.
      pub fn new() -> Self {
        Self::default()
      }

      $( $crate::query_options!(@setter $key, $field, $ty); )*
    }

    impl $crate::QueryOptions for $name {
      fn query_pairs(&self) -> Vec<(String, String)> {
        #[allow(unused_mut)]
        let mut pairs = Vec::new();
        $(
          if let Some(value) = &self.$field {
            pairs.push(($key.to_string(), value.to_string()));
          }
        )*
        pairs
      }
    }
  };
}
