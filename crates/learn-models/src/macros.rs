//! Declaration helper for request bodies.

/// Declare a request body: every field optional, omitted from the JSON when
/// unset, camelCase on the wire, one fluent setter per field.
macro_rules! request_body {
  (@setter $field:ident, String) => {
    #[doc = concat!("Sets `", stringify!($field), "`.")]
    pub fn $field(mut self, value: impl Into<String>) -> Self {
      self.$field = Some(value.into());
      self
    }
  };
  (@setter $field:ident, $($ty:tt)+) => {
    #[doc = concat!("Sets `", stringify!($field), "`.")]
    pub fn $field(mut self, value: $($ty)+) -> Self {
      self.$field = Some(value);
      self
    }
  };
  (
    $(#[$meta:meta])*
    pub struct $name:ident {
      $( $(#[$fmeta:meta])* $field:ident : $ty:ident $(< $inner:ident >)? ),* $(,)?
    }
  ) => {
    $(#[$meta])*
    #[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct $name {
      $(
        $(#[$fmeta])*
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub $field: Option<$ty $(<$inner>)?>,
      )*
    }

    impl $name {
      /// Empty body; only fields set afterwards are sent.
      pub fn new() -> Self {
        Self::default()
      }

      $( request_body!(@setter $field, $ty $(<$inner>)?); )*
    }
  };
}
