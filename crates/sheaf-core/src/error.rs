//! Configuration errors
//!
//! Raised while a schema is being declared. A bad declaration fails where it
//! is written instead of corrupting later serialize calls, so these errors are
//! returned from the declaration methods and from `SchemaBuilder::build`.

use sheaf_casing::UnknownCasing;

/// Errors raised while declaring a serializer schema
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
	/// Relationship mode name outside `none`, `included`, `partial`, `full`
	#[error("Unknown relationship mode '{0}': expected one of none, included, partial, full")]
	UnknownRelationshipMode(String),

	/// Key casing name that no casing answers to
	#[error("Unknown key casing '{0}'")]
	UnknownKeyCasing(String),

	/// Relationship declared without a nested serializer
	#[error("Relationship '{param}' ({kind}) was declared without a serializer")]
	MissingSerializer { param: String, kind: String },

	/// Schema built without a type name
	#[error("Serializer schema has no type name")]
	MissingTypeName,

	/// Two transforms declared under the same name
	#[error("Transform '{0}' is declared more than once")]
	DuplicateTransform(String),

	/// Transform referencing a method the schema does not register
	#[error("Transform '{param}' uses method '{method}', which is not registered")]
	UnknownMethod { param: String, method: String },
}

impl From<UnknownCasing> for ConfigurationError {
	fn from(err: UnknownCasing) -> Self {
		ConfigurationError::UnknownKeyCasing(err.0)
	}
}

/// Result type for schema declarations
pub type ConfigurationResult<T> = Result<T, ConfigurationError>;
