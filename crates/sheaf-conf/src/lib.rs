//! # sheaf-conf
//!
//! Settings consumed by sheaf serializers.
//!
//! Settings are plain serde values. They can be built in code or parsed from a
//! TOML or JSON string the application already holds; this crate never reads
//! files or the environment itself.
//!
//! ```
//! use sheaf_conf::SerializerSettings;
//! use sheaf_core::RelationshipMode;
//!
//! let settings = SerializerSettings::from_toml_str(r#"
//!     max_depth = 3
//!     relationship_mode = "partial"
//! "#).unwrap();
//!
//! assert_eq!(settings.max_depth, 3);
//! assert_eq!(settings.relationship_mode, RelationshipMode::Partial);
//! assert_eq!(settings.key_casing, None);
//! ```

pub mod settings;

pub use settings::{DEFAULT_MAX_DEPTH, SerializerSettings, SettingsError};
