//! Integration test utilities for Sheaf
//!
//! A small zoo domain (animals, their enclosures and their diet) declared
//! through the facade crate the way an application would.

use sheaf::prelude::*;
use serde_json::Value;
use std::sync::LazyLock;

#[derive(Debug, Clone)]
pub struct Food {
	pub id: i64,
	pub name: &'static str,
}

impl Readable for Food {
	fn get(&self, field: &str) -> FieldValue {
		match field {
			"id" => FieldValue::value(self.id),
			"name" => FieldValue::value(self.name),
			_ => FieldValue::Absent,
		}
	}
}

#[derive(Debug, Clone)]
pub struct Enclosure {
	pub id: &'static str,
	pub name: &'static str,
	pub climate: &'static str,
	pub residents: Vec<Animal>,
}

impl Readable for Enclosure {
	fn get(&self, field: &str) -> FieldValue {
		match field {
			"id" => FieldValue::value(self.id),
			"name" => FieldValue::value(self.name),
			"climate" => FieldValue::value(self.climate),
			"residents" => FieldValue::many(self.residents.clone()),
			_ => FieldValue::Absent,
		}
	}
}

#[derive(Debug, Clone)]
pub struct Animal {
	pub id: i64,
	pub name: &'static str,
	pub species: &'static str,
	pub legs: u8,
	pub diet: Vec<Food>,
	pub habitat: Option<Enclosure>,
}

impl Readable for Animal {
	fn get(&self, field: &str) -> FieldValue {
		match field {
			"id" => FieldValue::value(self.id),
			"name" => FieldValue::value(self.name),
			"species" => FieldValue::value(self.species),
			"legs" => FieldValue::value(self.legs),
			"diet" => FieldValue::many(self.diet.clone()),
			"habitat" => self.habitat.clone().map(FieldValue::one).unwrap_or_default(),
			_ => FieldValue::Absent,
		}
	}
}

pub struct FoodSerializer;

impl ResourceSerializer for FoodSerializer {
	fn schema() -> &'static Schema {
		static SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
			Schema::builder()
				.type_name("foods")
				.attribute("name", TransformOptions::new())
				.and_then(|b| b.build())
				.expect("food schema")
		});
		&SCHEMA
	}
}

pub struct EnclosureSerializer;

impl ResourceSerializer for EnclosureSerializer {
	fn schema() -> &'static Schema {
		static SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
			Schema::builder()
				.type_name("enclosures")
				.render_relationships(RelationshipMode::Included)
				.attributes(["name", "climate"], TransformOptions::new())
				.and_then(|b| {
					b.has_many(
						"residents",
						TransformOptions::new().serializer(SchemaRef::of::<AnimalSerializer>()),
					)
				})
				.and_then(|b| b.build())
				.expect("enclosure schema")
		});
		&SCHEMA
	}
}

fn display_name(
	_ctx: &SerializerContext<'_>,
	animal: &dyn Readable,
	options: &serde_json::Map<String, Value>,
) -> FieldValue {
	let separator = options
		.get("separator")
		.and_then(Value::as_str)
		.unwrap_or(" ");
	match (animal.get("name").into_value(), animal.get("species").into_value()) {
		(Value::String(name), Value::String(species)) => {
			FieldValue::value(format!("{name}{separator}{species}"))
		}
		_ => FieldValue::Absent,
	}
}

pub struct AnimalSerializer;

impl ResourceSerializer for AnimalSerializer {
	fn schema() -> &'static Schema {
		static SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
			Schema::builder()
				.type_name("animals")
				.key_transform(KeyCasing::Camel)
				.render_relationships(RelationshipMode::Partial)
				.method("display_name", Transform::with_options(display_name))
				.attributes(["name", "species"], TransformOptions::new())
				.and_then(|b| b.attribute("leg_count", TransformOptions::new().key("legs")))
				.and_then(|b| {
					b.attribute(
						"display_name",
						TransformOptions::new()
							.accessor("display_name")
							.option("separator", " the "),
					)
				})
				.and_then(|b| {
					b.attribute(
						"zoo_name",
						TransformOptions::new().inline(Transform::no_args(|ctx| {
							ctx.context()
								.get("zoo")
								.cloned()
								.map(FieldValue::Value)
								.unwrap_or_default()
						})),
					)
				})
				.and_then(|b| {
					b.belongs_to(
						"habitat",
						TransformOptions::new().serializer(SchemaRef::of::<EnclosureSerializer>()),
					)
				})
				.and_then(|b| {
					b.has_many(
						"diet",
						TransformOptions::new().serializer(SchemaRef::of::<FoodSerializer>()),
					)
				})
				.and_then(|b| b.build())
				.expect("animal schema")
		});
		&SCHEMA
	}
}

pub fn fish() -> Food {
	Food { id: 1, name: "fish" }
}

pub fn krill() -> Food {
	Food { id: 2, name: "krill" }
}

pub fn bananas() -> Food {
	Food {
		id: 3,
		name: "bananas",
	}
}

pub fn penguin() -> Animal {
	Animal {
		id: 1,
		name: "Pingu",
		species: "penguin",
		legs: 2,
		diet: vec![fish(), krill()],
		habitat: None,
	}
}

pub fn puffin() -> Animal {
	Animal {
		id: 2,
		name: "Puff",
		species: "puffin",
		legs: 2,
		diet: vec![fish()],
		habitat: None,
	}
}

pub fn orangutan() -> Animal {
	Animal {
		id: 3,
		name: "Ken",
		species: "orangutan",
		legs: 2,
		diet: vec![bananas()],
		habitat: None,
	}
}

/// The polar enclosure housing the penguin and the puffin
pub fn polar_enclosure() -> Enclosure {
	Enclosure {
		id: "polar",
		name: "Polar Point",
		climate: "arctic",
		residents: vec![penguin(), puffin()],
	}
}

/// An animal living in the polar enclosure
pub fn housed(mut animal: Animal) -> Animal {
	animal.habitat = Some(polar_enclosure());
	animal
}
