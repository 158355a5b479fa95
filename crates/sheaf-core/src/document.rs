//! JSON:API document model
//!
//! These are the values a serializer produces. They serialize with serde into
//! the JSON:API top-level shape:
//!
//! ```json
//! {
//!   "data": { "id": 1, "type": "animals", "attributes": { "name": "penguin" } },
//!   "included": []
//! }
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Minimal `{type, id}` reference to a resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceIdentifier {
	#[serde(rename = "type")]
	pub resource_type: String,
	pub id: Value,
}

impl ResourceIdentifier {
	pub fn new(resource_type: impl Into<String>, id: impl Into<Value>) -> Self {
		Self {
			resource_type: resource_type.into(),
			id: id.into(),
		}
	}

	/// Hashable identity used for deduplication
	///
	/// Ids are compared by their JSON rendering, so `1` and `"1"` are distinct.
	pub fn identity(&self) -> (String, String) {
		(self.resource_type.clone(), self.id.to_string())
	}
}

/// Linkage of one relationship after simplification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RelationshipData {
	/// To-many linkage
	Many(Vec<ResourceIdentifier>),
	/// To-one linkage, `null` when the relation is empty
	One(Option<ResourceIdentifier>),
}

impl RelationshipData {
	/// Identifiers referenced by this linkage
	pub fn identifiers(&self) -> Vec<&ResourceIdentifier> {
		match self {
			RelationshipData::Many(ids) => ids.iter().collect(),
			RelationshipData::One(id) => id.iter().collect(),
		}
	}
}

/// Relationship entry of a resource object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
	pub data: RelationshipData,
}

impl Relationship {
	pub fn to_one(identifier: Option<ResourceIdentifier>) -> Self {
		Self {
			data: RelationshipData::One(identifier),
		}
	}

	pub fn to_many(identifiers: Vec<ResourceIdentifier>) -> Self {
		Self {
			data: RelationshipData::Many(identifiers),
		}
	}
}

/// A JSON:API resource object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceObject {
	pub id: Value,
	#[serde(rename = "type")]
	pub resource_type: String,
	/// Omitted when the schema declares no attributes
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub attributes: Option<Map<String, Value>>,
	/// Omitted when the schema declares no relationships, `{}` when declared
	/// relationships were all left out by the relationship mode
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub relationships: Option<IndexMap<String, Relationship>>,
}

impl ResourceObject {
	pub fn new(resource_type: impl Into<String>, id: impl Into<Value>) -> Self {
		Self {
			id: id.into(),
			resource_type: resource_type.into(),
			attributes: None,
			relationships: None,
		}
	}

	/// The `{type, id}` reference to this resource
	pub fn identifier(&self) -> ResourceIdentifier {
		ResourceIdentifier::new(self.resource_type.clone(), self.id.clone())
	}

	/// Hashable identity used for deduplication
	pub fn identity(&self) -> (String, String) {
		(self.resource_type.clone(), self.id.to_string())
	}

	/// Look up one attribute value
	pub fn attribute(&self, key: &str) -> Option<&Value> {
		self.attributes.as_ref().and_then(|attrs| attrs.get(key))
	}

	/// Look up one relationship
	pub fn relationship(&self, key: &str) -> Option<&Relationship> {
		self.relationships.as_ref().and_then(|rels| rels.get(key))
	}
}

/// Primary data of a document: a single resource or a collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrimaryData {
	Many(Vec<ResourceObject>),
	Single(Box<ResourceObject>),
}

impl PrimaryData {
	/// Single resource for one object, collection otherwise
	pub fn from_resources(mut resources: Vec<ResourceObject>) -> Self {
		if resources.len() == 1 {
			if let Some(resource) = resources.pop() {
				return PrimaryData::Single(Box::new(resource));
			}
		}
		PrimaryData::Many(resources)
	}

	pub fn is_single(&self) -> bool {
		matches!(self, PrimaryData::Single(_))
	}

	pub fn as_single(&self) -> Option<&ResourceObject> {
		match self {
			PrimaryData::Single(resource) => Some(resource),
			PrimaryData::Many(_) => None,
		}
	}

	pub fn as_many(&self) -> Option<&[ResourceObject]> {
		match self {
			PrimaryData::Many(resources) => Some(resources),
			PrimaryData::Single(_) => None,
		}
	}

	/// All primary resources, whatever the shape
	pub fn resources(&self) -> &[ResourceObject] {
		match self {
			PrimaryData::Single(resource) => std::slice::from_ref(resource.as_ref()),
			PrimaryData::Many(resources) => resources,
		}
	}

	pub fn into_resources(self) -> Vec<ResourceObject> {
		match self {
			PrimaryData::Single(resource) => vec![*resource],
			PrimaryData::Many(resources) => resources,
		}
	}
}

/// A JSON:API top-level document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
	pub data: PrimaryData,
	#[serde(default)]
	pub included: Vec<ResourceObject>,
}

impl Document {
	/// All primary resources, whatever the shape
	pub fn resources(&self) -> &[ResourceObject] {
		self.data.resources()
	}

	/// Find an included resource by type and id
	pub fn find_included(&self, resource_type: &str, id: &Value) -> Option<&ResourceObject> {
		self.included
			.iter()
			.find(|r| r.resource_type == resource_type && &r.id == id)
	}

	/// Render as a JSON value
	pub fn to_value(&self) -> Value {
		// Every field is a JSON value, a string or a map with string keys.
		serde_json::to_value(self).unwrap_or(Value::Null)
	}

	pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
		serde_json::to_string(self)
	}

	pub fn to_json_string_pretty(&self) -> Result<String, serde_json::Error> {
		serde_json::to_string_pretty(self)
	}
}
