//! # Sheaf
//!
//! A declarative JSON:API document serializer.
//!
//! A serializer is declared once as a schema of attributes and relationships.
//! Serializing one or more objects through it produces a compound JSON:API
//! document: primary `data`, identifier-only `relationships` and a flattened,
//! deduplicated `included` list.
//!
//! ## Feature Flags
//!
//! ### Presets
//!
//! - `minimal` - Schemas, transform resolution and the document builder
//! - `standard` - `minimal` plus include parsing and key casing
//! - `full` (default) - Everything, including settings
//!
//! ### Fine-grained Control
//!
//! - `core` - Readable objects, document model, configuration errors
//! - `include` - Include path parsing
//! - `casing` - Attribute key casing
//! - `serializers` - Schemas and the document builder
//! - `conf` - Settings loaded from TOML or JSON strings
//!
//! ## Quick Example
//!
//! ```rust
//! # #[cfg(feature = "full")]
//! # {
//! use sheaf::prelude::*;
//! use std::sync::LazyLock;
//!
//! struct AttackSerializer;
//!
//! impl ResourceSerializer for AttackSerializer {
//!     fn schema() -> &'static Schema {
//!         static SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
//!             Schema::builder()
//!                 .type_name("attacks")
//!                 .attributes(["name", "damage"], TransformOptions::new())
//!                 .and_then(|b| b.build())
//!                 .expect("attack schema")
//!         });
//!         &SCHEMA
//!     }
//! }
//!
//! let animals = Schema::builder()
//!     .type_name("animals")
//!     .key_transform(KeyCasing::Dasherize)
//!     .attribute("opposable_thumb", TransformOptions::new())
//!     .and_then(|b| {
//!         b.belongs_to(
//!             "main_attack",
//!             TransformOptions::new().serializer(SchemaRef::of::<AttackSerializer>()),
//!         )
//!     })
//!     .and_then(|b| b.build())
//!     .unwrap();
//!
//! let penguin = json!({
//!     "id": 1,
//!     "opposable_thumb": false,
//!     "main_attack": {"id": 1, "name": "peck", "damage": "piercing"}
//! });
//!
//! let document = Serializer::new(&animals, [penguin], SerializeOptions::new())
//!     .serializable_document()
//!     .unwrap();
//!
//! assert_eq!(
//!     document.to_value(),
//!     json!({
//!         "data": {
//!             "id": 1,
//!             "type": "animals",
//!             "attributes": {"opposable-thumb": false},
//!             "relationships": {"main_attack": {"data": {"type": "attacks", "id": 1}}}
//!         },
//!         "included": [
//!             {"id": 1, "type": "attacks", "attributes": {"name": "peck", "damage": "piercing"}}
//!         ]
//!     })
//! );
//! # }
//! ```

#[cfg(feature = "casing")]
pub mod casing;
#[cfg(feature = "conf")]
pub mod conf;
#[cfg(feature = "core")]
pub mod core;
#[cfg(feature = "include")]
pub mod include;
#[cfg(feature = "serializers")]
pub mod serializers;

// Re-export commonly used types
#[cfg(feature = "core")]
pub use sheaf_core::{
	ConfigurationError, Document, FieldValue, ObjectRef, PrimaryData, Readable, Relationship,
	RelationshipMode, ResourceIdentifier, ResourceObject, TransformKind,
};

#[cfg(feature = "include")]
pub use sheaf_include::InclusionTree;

#[cfg(feature = "casing")]
pub use sheaf_casing::KeyCasing;

#[cfg(feature = "conf")]
pub use sheaf_conf::{SerializerSettings, SettingsError};

#[cfg(feature = "serializers")]
pub use sheaf_serializers::{
	CallShape, ResourceSerializer, Schema, SchemaBuilder, SchemaRef, SerializeOptions, Serializer,
	SerializerContext, Transform, TransformOptions,
};

/// Prelude module for convenient imports
///
/// ```rust
/// use sheaf::prelude::*;
/// ```
pub mod prelude {
	pub use serde_json::json;

	#[cfg(feature = "core")]
	pub use crate::{
		ConfigurationError, Document, FieldValue, Readable, RelationshipMode, ResourceObject,
	};

	#[cfg(feature = "include")]
	pub use crate::InclusionTree;

	#[cfg(feature = "casing")]
	pub use crate::KeyCasing;

	#[cfg(feature = "conf")]
	pub use crate::SerializerSettings;

	#[cfg(feature = "serializers")]
	pub use crate::{
		ResourceSerializer, Schema, SchemaRef, SerializeOptions, Serializer, SerializerContext,
		Transform, TransformOptions,
	};
}
