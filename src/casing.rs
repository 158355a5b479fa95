//! Attribute key casing.

#[cfg(feature = "casing")]
pub use sheaf_casing::*;
