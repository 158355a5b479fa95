//! Compound document assembly
//!
//! Relationships are first built as full nested documents. Once every
//! primary resource is built, their nested data and included resources are
//! flattened into one deduplicated `included` list and each relationship is
//! reduced to resource identifiers.

use indexmap::IndexMap;
use sheaf_core::{Document, Relationship, ResourceObject, TransformKind};

/// A relationship as its nested serializer produced it
#[derive(Debug, Clone)]
pub(crate) struct RelationshipDocument {
	to_many: bool,
	data: Vec<ResourceObject>,
	included: Vec<ResourceObject>,
}

impl RelationshipDocument {
	pub(crate) fn new(kind: TransformKind, document: Option<Document>) -> Self {
		match document {
			Some(document) => Self {
				to_many: kind.is_to_many(),
				data: document.data.into_resources(),
				included: document.included,
			},
			None => Self::empty(kind),
		}
	}

	pub(crate) fn empty(kind: TransformKind) -> Self {
		Self {
			to_many: kind.is_to_many(),
			data: Vec::new(),
			included: Vec::new(),
		}
	}

	/// Own data followed by the nested included resources
	fn resources(&self) -> impl Iterator<Item = &ResourceObject> {
		self.data.iter().chain(self.included.iter())
	}

	fn simplify(&self) -> Relationship {
		if self.to_many {
			Relationship::to_many(self.data.iter().map(ResourceObject::identifier).collect())
		} else {
			Relationship::to_one(self.data.first().map(ResourceObject::identifier))
		}
	}
}

/// A primary resource whose relationships are still full documents
#[derive(Debug, Clone)]
pub(crate) struct BuiltResource {
	pub(crate) resource: ResourceObject,
	pub(crate) relationships: Option<IndexMap<String, RelationshipDocument>>,
}

impl BuiltResource {
	/// Resource object with identifier-only relationships
	pub(crate) fn simplify(self) -> ResourceObject {
		let BuiltResource {
			mut resource,
			relationships,
		} = self;
		resource.relationships = relationships.map(|relationships| {
			relationships
				.iter()
				.map(|(key, document)| (key.clone(), document.simplify()))
				.collect()
		});
		resource
	}
}

/// Flatten every relationship of `resources` into a deduplicated list
pub(crate) fn collect_included(resources: &[BuiltResource]) -> Vec<ResourceObject> {
	dedupe(
		resources
			.iter()
			.filter_map(|built| built.relationships.as_ref())
			.flat_map(|relationships| relationships.values())
			.flat_map(|document| document.resources())
			.cloned(),
	)
}

/// Drop resources whose `(type, id)` was already seen, keeping the first
pub fn dedupe<I>(resources: I) -> Vec<ResourceObject>
where
	I: IntoIterator<Item = ResourceObject>,
{
	let mut seen: IndexMap<(String, String), ResourceObject> = IndexMap::new();
	for resource in resources {
		seen.entry(resource.identity()).or_insert(resource);
	}
	seen.into_values().collect()
}
