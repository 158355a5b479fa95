//! Readable objects, the JSON:API document model and configuration errors.
//!
//! # Examples
//!
//! ```rust
//! # #[cfg(feature = "core")]
//! use sheaf::core::{Document, FieldValue, Readable};
//! ```

#[cfg(feature = "core")]
pub use sheaf_core::*;
