//! Document builder
//!
//! A [`Serializer`] binds a schema to the objects of one call and turns them
//! into a JSON:API [`Document`]. Relationships are serialized recursively by
//! nested serializers running one level deeper, then flattened into the
//! top-level `included` list. A resource met again on its own nesting path is
//! rendered without following its relationships a second time.

use crate::included::{BuiltResource, RelationshipDocument, collect_included};
use crate::options::SerializeOptions;
use crate::recursive::SerializationContext;
use crate::resolver::resolve;
use crate::schema::Schema;
use crate::transform::TransformDecl;
use indexmap::IndexMap;
use serde_json::{Map, Value};
use sheaf_casing::{KeyCasing, apply_casing};
use sheaf_core::{
	Document, ObjectRef, PrimaryData, Readable, RelationshipMode, ResourceObject,
};
use sheaf_include::InclusionTree;
use std::fmt;
use std::sync::Arc;

/// What accessors and inline functions see of the running serializer
#[derive(Debug, Clone, Copy)]
pub struct SerializerContext<'a> {
	schema: &'a Schema,
	options: &'a SerializeOptions,
	depth: &'a SerializationContext,
}

impl<'a> SerializerContext<'a> {
	pub fn new(
		schema: &'a Schema,
		options: &'a SerializeOptions,
		depth: &'a SerializationContext,
	) -> Self {
		Self {
			schema,
			options,
			depth,
		}
	}

	pub fn schema(&self) -> &'a Schema {
		self.schema
	}

	pub fn options(&self) -> &'a SerializeOptions {
		self.options
	}

	/// Pass-through context of the call
	pub fn context(&self) -> &'a Map<String, Value> {
		self.options.context()
	}

	/// Includes requested at this level
	pub fn includes(&self) -> Option<&'a InclusionTree> {
		self.options.includes()
	}

	pub fn depth(&self) -> &'a SerializationContext {
		self.depth
	}

	/// The schema's mode, or the call default when the schema has none
	pub fn relationship_mode(&self) -> RelationshipMode {
		self.schema
			.relationship_mode()
			.unwrap_or_else(|| self.options.relationship_mode())
	}

	/// The schema's casing, or the call default when the schema has none
	pub fn key_casing(&self) -> Option<KeyCasing> {
		self.schema.key_casing().or(self.options.key_casing())
	}

	/// Attribute key `param` renders under, with the effective casing
	pub fn output_key(&self, param: &str) -> String {
		apply_casing(self.key_casing(), param).into_owned()
	}
}

/// Serializer bound to one schema, a set of objects and call options
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use sheaf_serializers::{Schema, SerializeOptions, Serializer, TransformOptions};
///
/// let schema = Schema::builder()
///     .type_name("animals")
///     .attribute("name", TransformOptions::new())?
///     .build()?;
/// let penguin = json!({"id": 1, "name": "penguin"});
///
/// let document = Serializer::new(&schema, [penguin], SerializeOptions::new())
///     .serializable_document()
///     .unwrap();
///
/// assert_eq!(
///     document.to_value(),
///     json!({
///         "data": {"id": 1, "type": "animals", "attributes": {"name": "penguin"}},
///         "included": []
///     })
/// );
/// # Ok::<(), sheaf_core::ConfigurationError>(())
/// ```
pub struct Serializer<'a> {
	schema: &'a Schema,
	objects: Vec<ObjectRef>,
	options: SerializeOptions,
	depth: SerializationContext,
}

impl<'a> Serializer<'a> {
	/// Serializer for any readable objects
	pub fn new<I, R>(schema: &'a Schema, objects: I, options: SerializeOptions) -> Self
	where
		I: IntoIterator<Item = R>,
		R: Readable + 'static,
	{
		let objects = objects
			.into_iter()
			.map(|object| Arc::new(object) as ObjectRef)
			.collect();
		Self::from_objects(schema, objects, options)
	}

	/// Serializer for objects that are already shared handles
	pub fn from_objects(
		schema: &'a Schema,
		objects: Vec<ObjectRef>,
		options: SerializeOptions,
	) -> Self {
		let depth = SerializationContext::new(options.max_depth());
		Self {
			schema,
			objects,
			options,
			depth,
		}
	}

	fn nested(
		schema: &'a Schema,
		objects: Vec<ObjectRef>,
		options: SerializeOptions,
		depth: SerializationContext,
	) -> Self {
		Self {
			schema,
			objects,
			options,
			depth,
		}
	}

	pub fn schema(&self) -> &'a Schema {
		self.schema
	}

	pub fn objects(&self) -> &[ObjectRef] {
		&self.objects
	}

	pub fn options(&self) -> &SerializeOptions {
		&self.options
	}

	pub fn context(&self) -> SerializerContext<'_> {
		SerializerContext::new(self.schema, &self.options, &self.depth)
	}

	/// Build the document, or `None` when there are no objects
	pub fn serializable_document(&self) -> Option<Document> {
		if self.objects.is_empty() {
			tracing::trace!(
				resource_type = self.schema.type_name(),
				"no objects to serialize"
			);
			return None;
		}

		tracing::debug!(
			resource_type = self.schema.type_name(),
			objects = self.objects.len(),
			depth = self.depth.current_depth(),
			"building document"
		);

		let ctx = self.context();
		let built: Vec<BuiltResource> = self
			.objects
			.iter()
			.map(|object| self.build_resource(&ctx, object.as_ref()))
			.collect();

		let included = collect_included(&built);
		let resources = built.into_iter().map(BuiltResource::simplify).collect();

		Some(Document {
			data: PrimaryData::from_resources(resources),
			included,
		})
	}

	/// Build one resource object with identifier-only relationships
	///
	/// The related resources themselves are dropped; use
	/// [`serializable_document`](Self::serializable_document) to collect them.
	pub fn parse_object(&self, object: &dyn Readable) -> ResourceObject {
		self.build_resource(&self.context(), object).simplify()
	}

	fn build_resource(&self, ctx: &SerializerContext<'_>, object: &dyn Readable) -> BuiltResource {
		let mut resource = ResourceObject::new(
			self.schema.type_name(),
			object.get(self.schema.id_field()).into_value(),
		);

		let attributes: Map<String, Value> = self
			.schema
			.attributes()
			.map(|decl| {
				(
					ctx.output_key(decl.param()),
					resolve(ctx, object, decl).into_value(),
				)
			})
			.collect();
		resource.attributes = (!attributes.is_empty()).then_some(attributes);

		let relationships = self.build_relationships(ctx, object, &resource);
		BuiltResource {
			resource,
			relationships,
		}
	}

	fn build_relationships(
		&self,
		ctx: &SerializerContext<'_>,
		object: &dyn Readable,
		resource: &ResourceObject,
	) -> Option<IndexMap<String, RelationshipDocument>> {
		let mut declared = self.schema.relationships().peekable();
		declared.peek()?;

		let mut relationships = IndexMap::new();
		if !ctx.depth().can_go_deeper() {
			tracing::debug!(
				resource_type = self.schema.type_name(),
				depth = ctx.depth().current_depth(),
				"relationship depth limit reached, skipping relationships"
			);
			return Some(relationships);
		}

		let (resource_type, id) = resource.identity();
		if ctx.depth().is_visited(&resource_type, &id) {
			tracing::debug!(
				resource_type = %resource_type,
				id = %id,
				"resource already on the nesting path, skipping relationships"
			);
			return Some(relationships);
		}
		let mut path = ctx.depth().child();
		if !resource.id.is_null() {
			path.visit(&resource_type, &id);
		}

		let mode = ctx.relationship_mode();
		for decl in declared {
			if !mode.selects(decl.kind(), decl.param(), ctx.includes()) {
				continue;
			}
			tracing::trace!(
				resource_type = self.schema.type_name(),
				param = decl.param(),
				kind = %decl.kind(),
				"evaluating relationship"
			);
			relationships.insert(
				decl.param().to_string(),
				self.build_relationship(ctx, object, decl, &path),
			);
		}
		Some(relationships)
	}

	fn build_relationship(
		&self,
		ctx: &SerializerContext<'_>,
		object: &dyn Readable,
		decl: &TransformDecl,
		path: &SerializationContext,
	) -> RelationshipDocument {
		let nested_schema = match decl.serializer() {
			Some(serializer) => serializer.get(),
			None => {
				tracing::warn!(param = decl.param(), "relationship has no serializer");
				return RelationshipDocument::empty(decl.kind());
			}
		};

		let mut related = resolve(ctx, object, decl).into_objects();
		if !decl.kind().is_to_many() && related.len() > 1 {
			tracing::warn!(
				param = decl.param(),
				count = related.len(),
				"to-one relationship resolved to several objects, keeping the first"
			);
			related.truncate(1);
		}

		let nested = Serializer::nested(
			nested_schema,
			related,
			ctx.options().for_relationship(decl.param()),
			path.clone(),
		);
		RelationshipDocument::new(decl.kind(), nested.serializable_document())
	}
}

impl fmt::Debug for Serializer<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Serializer")
			.field("type_name", &self.schema.type_name())
			.field("objects", &self.objects.len())
			.field("options", &self.options)
			.field("depth", &self.depth)
			.finish()
	}
}
