//! # sheaf-core
//!
//! Foundational types shared by the sheaf crates.
//!
//! ## Contents
//!
//! - **Readable objects**: [`Readable`] and [`FieldValue`], the typed view a
//!   serializer has of a domain object
//! - **Document model**: [`Document`], [`ResourceObject`], [`ResourceIdentifier`]
//!   and [`Relationship`], serializable with serde into JSON:API shape
//! - **Relationship modes**: [`RelationshipMode`] and [`TransformKind`]
//! - **Errors**: [`ConfigurationError`], raised while declaring schemas
//!
//! ## Examples
//!
//! ```rust
//! use sheaf_core::{Readable, FieldValue};
//! use serde_json::json;
//!
//! let penguin = json!({ "id": 1, "name": "penguin" });
//! assert_eq!(Readable::get(&penguin, "name").into_value(), json!("penguin"));
//! assert!(matches!(Readable::get(&penguin, "eyes"), FieldValue::Absent));
//! ```

pub mod document;
pub mod error;
pub mod mode;
pub mod value;

pub use document::{
	Document, PrimaryData, Relationship, RelationshipData, ResourceIdentifier, ResourceObject,
};
pub use error::{ConfigurationError, ConfigurationResult};
pub use mode::{RelationshipMode, TransformKind};
pub use value::{FieldValue, ObjectRef, Readable};
