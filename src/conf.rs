//! Serializer settings loaded from TOML or JSON strings.
//!
//! # Examples
//!
//! ```rust
//! # #[cfg(feature = "conf")]
//! # {
//! use sheaf::conf::SerializerSettings;
//!
//! let settings = SerializerSettings::from_toml_str("max_depth = 4").unwrap();
//! assert_eq!(settings.max_depth, 4);
//! # }
//! ```

#[cfg(feature = "conf")]
pub use sheaf_conf::*;
