//! Serializer schemas
//!
//! A [`Schema`] is the immutable configuration of one serializer type: its
//! JSON:API type, id field, key casing, relationship mode and the ordered
//! list of declared transforms. Schemas are declared once through a
//! [`SchemaBuilder`], usually inside a `static LazyLock`, and read by every
//! serialize call afterwards.
//!
//! ```
//! use sheaf_core::RelationshipMode;
//! use sheaf_serializers::{Schema, SchemaRef, TransformOptions};
//! use std::sync::LazyLock;
//!
//! static ATTACKS: LazyLock<Schema> = LazyLock::new(|| {
//!     Schema::builder()
//!         .type_name("attacks")
//!         .attributes(["name", "damage"], TransformOptions::new())
//!         .and_then(|b| b.build())
//!         .expect("attack schema")
//! });
//!
//! let animals = Schema::builder()
//!     .type_name("animals")
//!     .render_relationships(RelationshipMode::Partial)
//!     .attribute("name", TransformOptions::new())?
//!     .belongs_to(
//!         "main_attack",
//!         TransformOptions::new().serializer(SchemaRef::new(|| &*ATTACKS)),
//!     )?
//!     .build()?;
//!
//! assert_eq!(animals.type_name(), "animals");
//! assert_eq!(animals.relationships().count(), 1);
//! # Ok::<(), sheaf_core::ConfigurationError>(())
//! ```

use crate::options::SerializeOptions;
use crate::serializer::Serializer;
use crate::transform::{Transform, TransformDecl, TransformOptions};
use sheaf_casing::{KeyCasing, apply_casing};
use sheaf_core::{ConfigurationError, ConfigurationResult, Readable, RelationshipMode, TransformKind};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Property read for the resource id unless a schema says otherwise
pub const DEFAULT_ID_FIELD: &str = "id";

/// Lazy reference to a schema with static lifetime
///
/// Relationships point at their nested schema through a `SchemaRef` so that
/// two schemas can reference each other: the reference is only followed when
/// a relationship is serialized.
#[derive(Clone, Copy)]
pub struct SchemaRef(fn() -> &'static Schema);

impl SchemaRef {
	pub fn new(schema: fn() -> &'static Schema) -> Self {
		Self(schema)
	}

	/// Reference the schema owned by a [`ResourceSerializer`]
	pub fn of<S: ResourceSerializer>() -> Self {
		Self(S::schema)
	}

	pub fn get(&self) -> &'static Schema {
		(self.0)()
	}
}

impl fmt::Debug for SchemaRef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("SchemaRef(..)")
	}
}

/// A type owning a static schema
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use sheaf_serializers::{ResourceSerializer, Schema, SerializeOptions, TransformOptions};
/// use std::sync::LazyLock;
///
/// struct AnimalSerializer;
///
/// impl ResourceSerializer for AnimalSerializer {
///     fn schema() -> &'static Schema {
///         static SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
///             Schema::builder()
///                 .type_name("animals")
///                 .attribute("name", TransformOptions::new())
///                 .and_then(|b| b.build())
///                 .expect("animal schema")
///         });
///         &SCHEMA
///     }
/// }
///
/// let document = AnimalSerializer::serializer(
///     vec![json!({"id": 1, "name": "penguin"})],
///     SerializeOptions::new(),
/// )
/// .serializable_document()
/// .unwrap();
/// assert_eq!(document.resources()[0].resource_type, "animals");
/// ```
pub trait ResourceSerializer {
	fn schema() -> &'static Schema;

	/// Serializer for `objects` using this type's schema
	fn serializer<I, R>(objects: I, options: SerializeOptions) -> Serializer<'static>
	where
		I: IntoIterator<Item = R>,
		R: Readable + 'static,
	{
		Serializer::new(Self::schema(), objects, options)
	}
}

/// Immutable configuration of one serializer type
#[derive(Debug, Clone)]
pub struct Schema {
	type_name: String,
	id_field: String,
	key_casing: Option<KeyCasing>,
	relationship_mode: Option<RelationshipMode>,
	transforms: Vec<TransformDecl>,
	methods: HashMap<String, Transform>,
}

impl Schema {
	pub fn builder() -> SchemaBuilder {
		SchemaBuilder::new()
	}

	/// The JSON:API `type` of every resource this schema renders
	pub fn type_name(&self) -> &str {
		&self.type_name
	}

	pub fn id_field(&self) -> &str {
		&self.id_field
	}

	pub fn key_casing(&self) -> Option<KeyCasing> {
		self.key_casing
	}

	/// Declared relationship mode, `None` when the call's default applies
	pub fn relationship_mode(&self) -> Option<RelationshipMode> {
		self.relationship_mode
	}

	/// Every declaration, in declaration order
	pub fn transforms(&self) -> &[TransformDecl] {
		&self.transforms
	}

	pub fn attributes(&self) -> impl Iterator<Item = &TransformDecl> {
		self.transforms.iter().filter(|t| !t.is_relationship())
	}

	pub fn relationships(&self) -> impl Iterator<Item = &TransformDecl> {
		self.transforms.iter().filter(|t| t.is_relationship())
	}

	pub fn transform(&self, param: &str) -> Option<&TransformDecl> {
		self.transforms.iter().find(|t| t.param() == param)
	}

	/// Named accessor registered with [`SchemaBuilder::method`]
	pub fn method(&self, name: &str) -> Option<&Transform> {
		self.methods.get(name)
	}

	/// Output key of `param` under this schema's declared casing
	///
	/// A call-level fallback casing is not applied here; documents use
	/// [`SerializerContext::output_key`](crate::SerializerContext::output_key),
	/// which does apply it.
	pub fn output_key(&self, param: &str) -> String {
		apply_casing(self.key_casing, param).into_owned()
	}
}

/// Declares a [`Schema`]
///
/// Declarations that can be wrong on their own fail immediately, the rest
/// is checked by [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct SchemaBuilder {
	type_name: Option<String>,
	id_field: Option<String>,
	key_casing: Option<KeyCasing>,
	relationship_mode: Option<RelationshipMode>,
	transforms: Vec<TransformDecl>,
	methods: HashMap<String, Transform>,
}

impl SchemaBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Set the JSON:API type
	pub fn type_name(mut self, name: impl Into<String>) -> Self {
		self.type_name = Some(name.into());
		self
	}

	/// Read the id from `field` instead of `id`
	pub fn id(mut self, field: impl Into<String>) -> Self {
		self.id_field = Some(field.into());
		self
	}

	/// Case every attribute key with `casing`
	pub fn key_transform(mut self, casing: KeyCasing) -> Self {
		self.key_casing = Some(casing);
		self
	}

	/// Case every attribute key with the casing called `name`
	pub fn key_transform_named(self, name: &str) -> ConfigurationResult<Self> {
		let casing: KeyCasing = name.parse()?;
		Ok(self.key_transform(casing))
	}

	pub fn render_relationships(mut self, mode: RelationshipMode) -> Self {
		self.relationship_mode = Some(mode);
		self
	}

	/// Render relationships with the mode called `name`
	///
	/// # Examples
	///
	/// ```
	/// use sheaf_core::ConfigurationError;
	/// use sheaf_serializers::Schema;
	///
	/// assert!(Schema::builder().render_relationships_named("partial").is_ok());
	/// assert!(matches!(
	///     Schema::builder().render_relationships_named("some"),
	///     Err(ConfigurationError::UnknownRelationshipMode(_))
	/// ));
	/// ```
	pub fn render_relationships_named(self, name: &str) -> ConfigurationResult<Self> {
		let mode: RelationshipMode = name.parse()?;
		Ok(self.render_relationships(mode))
	}

	/// Register a named accessor that declarations can use
	pub fn method(mut self, name: impl Into<String>, transform: Transform) -> Self {
		self.methods.insert(name.into(), transform);
		self
	}

	pub fn attribute(
		self,
		param: impl Into<String>,
		options: TransformOptions,
	) -> ConfigurationResult<Self> {
		self.declare(TransformKind::Attribute, param.into(), options)
	}

	/// Declare several attributes sharing the same options
	pub fn attributes<I, P>(mut self, params: I, options: TransformOptions) -> ConfigurationResult<Self>
	where
		I: IntoIterator<Item = P>,
		P: Into<String>,
	{
		for param in params {
			self = self.attribute(param, options.clone())?;
		}
		Ok(self)
	}

	pub fn belongs_to(
		self,
		param: impl Into<String>,
		options: TransformOptions,
	) -> ConfigurationResult<Self> {
		self.declare(TransformKind::BelongsTo, param.into(), options)
	}

	pub fn has_one(
		self,
		param: impl Into<String>,
		options: TransformOptions,
	) -> ConfigurationResult<Self> {
		self.declare(TransformKind::HasOne, param.into(), options)
	}

	pub fn has_many(
		self,
		param: impl Into<String>,
		options: TransformOptions,
	) -> ConfigurationResult<Self> {
		self.declare(TransformKind::HasMany, param.into(), options)
	}

	fn declare(
		mut self,
		kind: TransformKind,
		param: String,
		options: TransformOptions,
	) -> ConfigurationResult<Self> {
		if kind.is_relationship() && options.get_serializer().is_none() {
			return Err(ConfigurationError::MissingSerializer {
				param,
				kind: kind.to_string(),
			});
		}
		if self.transforms.iter().any(|t| t.param() == param) {
			return Err(ConfigurationError::DuplicateTransform(param));
		}
		self.transforms.push(TransformDecl::new(kind, param, options));
		Ok(self)
	}

	/// Validate and freeze the schema
	pub fn build(self) -> ConfigurationResult<Schema> {
		let type_name = self
			.type_name
			.filter(|name| !name.is_empty())
			.ok_or(ConfigurationError::MissingTypeName)?;

		if let Some(casing) = self.key_casing {
			let mut keys = HashSet::new();
			for decl in self.transforms.iter().filter(|t| !t.is_relationship()) {
				if !keys.insert(casing.apply(decl.param())) {
					return Err(ConfigurationError::DuplicateTransform(decl.param().to_string()));
				}
			}
		}

		for decl in &self.transforms {
			if let Some(method) = decl.accessor() {
				if !self.methods.contains_key(method) {
					return Err(ConfigurationError::UnknownMethod {
						param: decl.param().to_string(),
						method: method.to_string(),
					});
				}
			}
		}

		tracing::debug!(
			type_name = %type_name,
			transforms = self.transforms.len(),
			"serializer schema declared"
		);

		Ok(Schema {
			type_name,
			id_field: self
				.id_field
				.unwrap_or_else(|| DEFAULT_ID_FIELD.to_string()),
			key_casing: self.key_casing,
			relationship_mode: self.relationship_mode,
			transforms: self.transforms,
			methods: self.methods,
		})
	}
}
