//! Readable objects and resolved field values
//!
//! Every object handed to a serializer implements [`Readable`], which turns
//! "read the property called `name`" into a typed lookup. A lookup for a
//! property the object does not have yields [`FieldValue::Absent`] rather than
//! an error, since JSON:API documents routinely carry optional attributes.

use serde_json::{Map, Value};
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// Shared handle to a readable domain object
pub type ObjectRef = Arc<dyn Readable>;

/// Capability of exposing named properties to a serializer
///
/// # Examples
///
/// ```
/// use sheaf_core::{FieldValue, Readable};
///
/// struct Penguin {
///     id: i64,
///     name: String,
/// }
///
/// impl Readable for Penguin {
///     fn get(&self, field: &str) -> FieldValue {
///         match field {
///             "id" => FieldValue::value(self.id),
///             "name" => FieldValue::value(self.name.clone()),
///             _ => FieldValue::Absent,
///         }
///     }
/// }
///
/// let penguin = Penguin { id: 1, name: "penguin".into() };
/// assert_eq!(penguin.get("name").into_value(), serde_json::json!("penguin"));
/// assert!(penguin.get("wings").is_absent());
/// ```
pub trait Readable {
	/// Read the property called `field`
	fn get(&self, field: &str) -> FieldValue;
}

/// Result of reading or computing one field
#[derive(Clone, Default)]
pub enum FieldValue {
	/// The object has no such property
	#[default]
	Absent,
	/// A plain JSON value
	Value(Value),
	/// A single related object
	One(ObjectRef),
	/// A collection of related objects
	Many(Vec<ObjectRef>),
}

impl FieldValue {
	/// Wrap anything convertible into a JSON value
	pub fn value(value: impl Into<Value>) -> Self {
		FieldValue::Value(value.into())
	}

	/// Wrap a single related object
	pub fn one<R: Readable + 'static>(object: R) -> Self {
		FieldValue::One(Arc::new(object))
	}

	/// Wrap a collection of related objects
	pub fn many<I, R>(objects: I) -> Self
	where
		I: IntoIterator<Item = R>,
		R: Readable + 'static,
	{
		FieldValue::Many(
			objects
				.into_iter()
				.map(|o| Arc::new(o) as ObjectRef)
				.collect(),
		)
	}

	pub fn is_absent(&self) -> bool {
		matches!(self, FieldValue::Absent)
	}

	/// Convert into an attribute value
	///
	/// Absent fields become `null`. Related objects have no attribute
	/// representation and also become `null`.
	pub fn into_value(self) -> Value {
		match self {
			FieldValue::Absent => Value::Null,
			FieldValue::Value(value) => value,
			FieldValue::One(_) | FieldValue::Many(_) => {
				tracing::warn!("related object resolved in attribute position, rendering null");
				Value::Null
			}
		}
	}

	/// Convert into the related objects of a relationship
	///
	/// JSON objects are readable themselves, so a JSON object value becomes a
	/// single related object and a JSON array becomes one object per element.
	/// `null`, absent fields and `null` array elements contribute nothing.
	pub fn into_objects(self) -> Vec<ObjectRef> {
		match self {
			FieldValue::Absent => Vec::new(),
			FieldValue::One(object) => vec![object],
			FieldValue::Many(objects) => objects,
			FieldValue::Value(value) => value_into_objects(value),
		}
	}
}

fn value_into_objects(value: Value) -> Vec<ObjectRef> {
	match value {
		Value::Null => Vec::new(),
		Value::Object(map) => vec![Arc::new(Value::Object(map)) as ObjectRef],
		Value::Array(items) => items.into_iter().flat_map(value_into_objects).collect(),
		scalar => {
			tracing::warn!(value = %scalar, "scalar resolved in relationship position, skipping");
			Vec::new()
		}
	}
}

impl fmt::Debug for FieldValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			FieldValue::Absent => f.write_str("Absent"),
			FieldValue::Value(value) => f.debug_tuple("Value").field(value).finish(),
			FieldValue::One(_) => f.write_str("One(<object>)"),
			FieldValue::Many(objects) => write!(f, "Many(<{} objects>)", objects.len()),
		}
	}
}

impl From<Value> for FieldValue {
	fn from(value: Value) -> Self {
		FieldValue::Value(value)
	}
}

impl<T: Into<Value>> From<Option<T>> for FieldValue {
	fn from(value: Option<T>) -> Self {
		match value {
			Some(value) => FieldValue::Value(value.into()),
			None => FieldValue::Absent,
		}
	}
}

impl From<ObjectRef> for FieldValue {
	fn from(object: ObjectRef) -> Self {
		FieldValue::One(object)
	}
}

impl From<Vec<ObjectRef>> for FieldValue {
	fn from(objects: Vec<ObjectRef>) -> Self {
		FieldValue::Many(objects)
	}
}

impl Readable for Map<String, Value> {
	fn get(&self, field: &str) -> FieldValue {
		Map::get(self, field)
			.cloned()
			.map(FieldValue::Value)
			.unwrap_or_default()
	}
}

/// Only JSON objects have properties; every other value reads as absent
impl Readable for Value {
	fn get(&self, field: &str) -> FieldValue {
		match self {
			Value::Object(map) => Readable::get(map, field),
			_ => FieldValue::Absent,
		}
	}
}

impl<T: Readable + ?Sized> Readable for &T {
	fn get(&self, field: &str) -> FieldValue {
		(**self).get(field)
	}
}

impl<T: Readable + ?Sized> Readable for Box<T> {
	fn get(&self, field: &str) -> FieldValue {
		(**self).get(field)
	}
}

impl<T: Readable + ?Sized> Readable for Arc<T> {
	fn get(&self, field: &str) -> FieldValue {
		(**self).get(field)
	}
}

impl<T: Readable + ?Sized> Readable for Rc<T> {
	fn get(&self, field: &str) -> FieldValue {
		(**self).get(field)
	}
}
