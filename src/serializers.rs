//! Schemas, transform resolution and the document builder.

#[cfg(feature = "serializers")]
pub use sheaf_serializers::*;
