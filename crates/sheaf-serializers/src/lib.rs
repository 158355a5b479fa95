//! # sheaf-serializers
//!
//! Schema-driven JSON:API serializers.
//!
//! ## Pieces
//!
//! - [`Schema`] / [`SchemaBuilder`]: the declared type, id, key casing,
//!   relationship mode, attributes and relationships of one serializer
//! - [`Transform`] / [`TransformOptions`]: how a declared field is computed
//! - [`resolve`]: accessor, then inline function, then property read
//! - [`Serializer`]: builds a compound [`Document`](sheaf_core::Document)
//!   from one or many objects
//! - [`SerializeOptions`]: includes, pass-through context and defaults of one
//!   call
//!
//! ## Example
//!
//! ```
//! use serde_json::json;
//! use sheaf_core::RelationshipMode;
//! use sheaf_serializers::{Schema, SchemaRef, SerializeOptions, Serializer, TransformOptions};
//! use std::sync::LazyLock;
//!
//! static ITEMS: LazyLock<Schema> = LazyLock::new(|| {
//!     Schema::builder()
//!         .type_name("items")
//!         .attribute("item", TransformOptions::new())
//!         .and_then(|b| b.build())
//!         .expect("item schema")
//! });
//!
//! let animals = Schema::builder()
//!     .type_name("animals")
//!     .render_relationships(RelationshipMode::Partial)
//!     .attribute("name", TransformOptions::new())?
//!     .has_many(
//!         "inventory_items",
//!         TransformOptions::new()
//!             .key("inventory")
//!             .serializer(SchemaRef::new(|| &*ITEMS)),
//!     )?
//!     .build()?;
//!
//! let penguin = json!({
//!     "id": 1,
//!     "name": "penguin",
//!     "inventory": [{"id": 1, "item": "pebble"}, {"id": 2, "item": "fish"}]
//! });
//!
//! let options = SerializeOptions::new().with_includes("inventory_items");
//! let document = Serializer::new(&animals, [penguin], options)
//!     .serializable_document()
//!     .unwrap();
//!
//! assert_eq!(document.included.len(), 2);
//! assert_eq!(
//!     document.to_value()["data"]["relationships"]["inventory_items"],
//!     json!({"data": [{"type": "items", "id": 1}, {"type": "items", "id": 2}]})
//! );
//! # Ok::<(), sheaf_core::ConfigurationError>(())
//! ```

mod included;
pub mod options;
pub mod recursive;
pub mod resolver;
pub mod schema;
pub mod serializer;
pub mod transform;

pub use included::dedupe;
pub use options::SerializeOptions;
pub use recursive::{DEFAULT_MAX_DEPTH, SerializationContext};
pub use resolver::resolve;
pub use schema::{DEFAULT_ID_FIELD, ResourceSerializer, Schema, SchemaBuilder, SchemaRef};
pub use serializer::{Serializer, SerializerContext};
pub use transform::{CallShape, Transform, TransformDecl, TransformOptions};
