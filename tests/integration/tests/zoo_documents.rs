//! Compound documents for the zoo domain, built through the facade crate.

use assert_json_diff::{assert_json_eq, assert_json_include};
use rstest::{fixture, rstest};
use sheaf::prelude::*;
use sheaf::{ObjectRef, ResourceIdentifier};
use sheaf_integration_tests::*;
use std::sync::Arc;

#[fixture]
fn options() -> SerializeOptions {
	SerializeOptions::new().with_context_value("zoo", "Sheaf Zoo")
}

#[rstest]
fn test_penguin_without_includes(options: SerializeOptions) {
	let document = AnimalSerializer::serializer([penguin()], options)
		.serializable_document()
		.unwrap();

	assert_json_eq!(
		document.to_value(),
		json!({
			"data": {
				"id": 1,
				"type": "animals",
				"attributes": {
					"name": "Pingu",
					"species": "penguin",
					"legCount": 2,
					"displayName": "Pingu the penguin",
					"zooName": "Sheaf Zoo"
				},
				"relationships": {
					"habitat": {"data": null}
				}
			},
			"included": []
		})
	);
}

#[rstest]
fn test_requested_diet_is_included(options: SerializeOptions) {
	let document = AnimalSerializer::serializer([penguin()], options.with_includes("diet"))
		.serializable_document()
		.unwrap();

	assert_json_include!(
		actual: document.to_value(),
		expected: json!({
			"data": {
				"relationships": {
					"habitat": {"data": null},
					"diet": {"data": [{"type": "foods", "id": 1}, {"type": "foods", "id": 2}]}
				}
			},
			"included": [
				{"id": 1, "type": "foods", "attributes": {"name": "fish"}},
				{"id": 2, "type": "foods", "attributes": {"name": "krill"}}
			]
		})
	);
}

#[rstest]
fn test_shared_food_is_included_once(options: SerializeOptions) {
	let document = AnimalSerializer::serializer(
		[penguin(), puffin(), orangutan()],
		options.with_includes("diet"),
	)
	.serializable_document()
	.unwrap();

	assert_eq!(document.data.as_many().map(<[_]>::len), Some(3));
	let foods: Vec<ResourceIdentifier> = document.included.iter().map(|r| r.identifier()).collect();
	assert_eq!(
		foods,
		vec![
			ResourceIdentifier::new("foods", 1),
			ResourceIdentifier::new("foods", 2),
			ResourceIdentifier::new("foods", 3),
		]
	);
}

#[rstest]
fn test_belongs_to_renders_without_includes(options: SerializeOptions) {
	let document = AnimalSerializer::serializer([housed(penguin())], options)
		.serializable_document()
		.unwrap();

	assert_json_eq!(
		document.to_value()["included"],
		json!([{
			"id": "polar",
			"type": "enclosures",
			"attributes": {"name": "Polar Point", "climate": "arctic"},
			"relationships": {}
		}])
	);
}

#[rstest]
fn test_nested_include_path(options: SerializeOptions) {
	let document = AnimalSerializer::serializer(
		[housed(penguin())],
		options.with_includes("habitat.residents"),
	)
	.serializable_document()
	.unwrap();

	let enclosure = document
		.find_included("enclosures", &json!("polar"))
		.unwrap();
	assert_eq!(
		enclosure.relationship("residents").unwrap().data.identifiers(),
		vec![
			&ResourceIdentifier::new("animals", 1),
			&ResourceIdentifier::new("animals", 2),
		]
	);

	let puffin = document.find_included("animals", &json!(2)).unwrap();
	assert_eq!(puffin.attribute("displayName"), Some(&json!("Puff the puffin")));
	assert_eq!(puffin.attribute("zooName"), Some(&json!("Sheaf Zoo")));
	// diet was not requested beneath residents
	assert!(puffin.relationship("diet").is_none());
	assert!(document.find_included("foods", &json!(1)).is_none());

	// the primary penguin also appears as a resident
	assert!(document.find_included("animals", &json!(1)).is_some());
	assert_eq!(document.included.len(), 3);
}

#[rstest]
fn test_include_tree_built_in_code(options: SerializeOptions) {
	let mut includes = InclusionTree::parse("diet");
	includes.merge(&InclusionTree::parse("habitat.residents.diet"));
	let document = AnimalSerializer::serializer([housed(orangutan())], options.with_includes(includes))
		.serializable_document()
		.unwrap();

	// bananas from the orangutan, fish and krill from the residents
	for id in 1..=3 {
		assert!(document.find_included("foods", &json!(id)).is_some());
	}
}

#[rstest]
fn test_shared_object_handles(options: SerializeOptions) {
	let objects: Vec<ObjectRef> = vec![Arc::new(penguin()), Arc::new(puffin())];
	let schema = AnimalSerializer::schema();
	let serializer = Serializer::from_objects(schema, objects, options);

	assert_eq!(serializer.objects().len(), 2);
	let document = serializer.serializable_document().unwrap();
	assert_eq!(document.resources()[1].id, json!(2));
}

#[rstest]
fn test_empty_zoo_has_no_document(options: SerializeOptions) {
	assert!(
		AnimalSerializer::serializer(Vec::<Animal>::new(), options)
			.serializable_document()
			.is_none()
	);
}
