//! Transform callables and declarations
//!
//! A declared field is computed in one of three ways: read straight off the
//! object, through a named method registered on the schema, or through an
//! inline function attached to the declaration. Methods and inline functions
//! are both [`Transform`] values whose argument shape is fixed when they are
//! created.

use crate::schema::SchemaRef;
use crate::serializer::SerializerContext;
use serde_json::{Map, Value};
use sheaf_core::{FieldValue, Readable, TransformKind};
use std::fmt;
use std::sync::Arc;

type NoArgsFn = dyn Fn(&SerializerContext<'_>) -> FieldValue + Send + Sync;
type ObjectFn = dyn Fn(&SerializerContext<'_>, &dyn Readable) -> FieldValue + Send + Sync;
type ObjectWithOptionsFn =
	dyn Fn(&SerializerContext<'_>, &dyn Readable, &Map<String, Value>) -> FieldValue + Send + Sync;

/// Arguments a [`Transform`] is called with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallShape {
	/// The serializer context only
	NoArgs,
	/// The serializer context and the object
	ObjectOnly,
	/// The serializer context, the object and the declaration's options
	ObjectPlusOptions,
}

/// A callable computing one field
///
/// # Examples
///
/// ```
/// use sheaf_core::{FieldValue, Readable};
/// use sheaf_serializers::{CallShape, Transform};
///
/// let shout = Transform::object(|_ctx, object| {
///     match object.get("name").into_value() {
///         serde_json::Value::String(name) => FieldValue::value(name.to_uppercase()),
///         _ => FieldValue::Absent,
///     }
/// });
/// assert_eq!(shout.shape(), CallShape::ObjectOnly);
/// ```
#[derive(Clone)]
pub enum Transform {
	NoArgs(Arc<NoArgsFn>),
	ObjectOnly(Arc<ObjectFn>),
	ObjectPlusOptions(Arc<ObjectWithOptionsFn>),
}

impl Transform {
	/// Callable that ignores the object, typically reading the call context
	pub fn no_args<F>(f: F) -> Self
	where
		F: Fn(&SerializerContext<'_>) -> FieldValue + Send + Sync + 'static,
	{
		Transform::NoArgs(Arc::new(f))
	}

	/// Callable receiving the object being serialized
	pub fn object<F>(f: F) -> Self
	where
		F: Fn(&SerializerContext<'_>, &dyn Readable) -> FieldValue + Send + Sync + 'static,
	{
		Transform::ObjectOnly(Arc::new(f))
	}

	/// Callable receiving the object and the declaration's pass-through options
	pub fn with_options<F>(f: F) -> Self
	where
		F: Fn(&SerializerContext<'_>, &dyn Readable, &Map<String, Value>) -> FieldValue
			+ Send
			+ Sync
			+ 'static,
	{
		Transform::ObjectPlusOptions(Arc::new(f))
	}

	pub fn shape(&self) -> CallShape {
		match self {
			Transform::NoArgs(_) => CallShape::NoArgs,
			Transform::ObjectOnly(_) => CallShape::ObjectOnly,
			Transform::ObjectPlusOptions(_) => CallShape::ObjectPlusOptions,
		}
	}

	/// Invoke with the arguments the call shape asks for
	pub fn call(
		&self,
		ctx: &SerializerContext<'_>,
		object: &dyn Readable,
		options: &Map<String, Value>,
	) -> FieldValue {
		match self {
			Transform::NoArgs(f) => f(ctx),
			Transform::ObjectOnly(f) => f(ctx, object),
			Transform::ObjectPlusOptions(f) => f(ctx, object, options),
		}
	}
}

impl fmt::Debug for Transform {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Transform").field(&self.shape()).finish()
	}
}

/// Options attached to one declaration
///
/// `key` names an alternate property to read, `serializer` is the nested
/// schema of a relationship, `accessor` names a method registered on the
/// schema and `inline` carries a function. Anything set with
/// [`option`](Self::option) is passed through to accessors and inline
/// functions declared with [`Transform::with_options`].
#[derive(Debug, Clone, Default)]
pub struct TransformOptions {
	key: Option<String>,
	serializer: Option<SchemaRef>,
	accessor: Option<String>,
	inline: Option<Transform>,
	extra: Map<String, Value>,
}

impl TransformOptions {
	pub fn new() -> Self {
		Self::default()
	}

	/// Read this property instead of the declared name
	pub fn key(mut self, key: impl Into<String>) -> Self {
		self.key = Some(key.into());
		self
	}

	/// Nested schema for a relationship
	pub fn serializer(mut self, serializer: SchemaRef) -> Self {
		self.serializer = Some(serializer);
		self
	}

	/// Compute the value with a method registered on the schema
	pub fn accessor(mut self, method: impl Into<String>) -> Self {
		self.accessor = Some(method.into());
		self
	}

	/// Compute the value with an inline function
	pub fn inline(mut self, transform: Transform) -> Self {
		self.inline = Some(transform);
		self
	}

	/// Add a pass-through option
	pub fn option(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
		self.extra.insert(name.into(), value.into());
		self
	}

	pub fn get_key(&self) -> Option<&str> {
		self.key.as_deref()
	}

	pub fn get_serializer(&self) -> Option<SchemaRef> {
		self.serializer
	}

	pub fn get_accessor(&self) -> Option<&str> {
		self.accessor.as_deref()
	}

	pub fn get_inline(&self) -> Option<&Transform> {
		self.inline.as_ref()
	}

	/// Pass-through options
	pub fn extra(&self) -> &Map<String, Value> {
		&self.extra
	}
}

/// One declared attribute or relationship
#[derive(Debug, Clone)]
pub struct TransformDecl {
	kind: TransformKind,
	param: String,
	options: TransformOptions,
}

impl TransformDecl {
	pub(crate) fn new(kind: TransformKind, param: String, options: TransformOptions) -> Self {
		Self {
			kind,
			param,
			options,
		}
	}

	pub fn kind(&self) -> TransformKind {
		self.kind
	}

	pub fn param(&self) -> &str {
		&self.param
	}

	pub fn options(&self) -> &TransformOptions {
		&self.options
	}

	pub fn accessor(&self) -> Option<&str> {
		self.options.get_accessor()
	}

	pub fn inline(&self) -> Option<&Transform> {
		self.options.get_inline()
	}

	/// Property read when neither an accessor nor an inline function is set
	pub fn source_key(&self) -> &str {
		self.options.get_key().unwrap_or(&self.param)
	}

	pub fn serializer(&self) -> Option<SchemaRef> {
		self.options.get_serializer()
	}

	pub fn is_relationship(&self) -> bool {
		self.kind.is_relationship()
	}
}
