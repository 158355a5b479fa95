//! Shared domain objects and schemas for serializer tests

use serde_json::Value;
use sheaf_core::{FieldValue, Readable, RelationshipMode};
use sheaf_serializers::{ResourceSerializer, Schema, SchemaBuilder, SchemaRef, TransformOptions};
use std::sync::LazyLock;

#[derive(Debug, Clone)]
pub struct Attack {
	pub id: i64,
	pub name: &'static str,
	pub damage: &'static str,
}

impl Readable for Attack {
	fn get(&self, field: &str) -> FieldValue {
		match field {
			"id" => FieldValue::value(self.id),
			"name" => FieldValue::value(self.name),
			"damage" => FieldValue::value(self.damage),
			_ => FieldValue::Absent,
		}
	}
}

#[derive(Debug, Clone)]
pub struct Item {
	pub id: i64,
	pub item: &'static str,
}

impl Readable for Item {
	fn get(&self, field: &str) -> FieldValue {
		match field {
			"id" => FieldValue::value(self.id),
			"item" => FieldValue::value(self.item),
			_ => FieldValue::Absent,
		}
	}
}

#[derive(Debug, Clone)]
pub struct Animal {
	pub id: i64,
	pub alt_id: &'static str,
	pub name: &'static str,
	pub tail: bool,
	pub claws: bool,
	pub opposable_thumb: bool,
	pub main_attack: Option<Attack>,
	pub inventory: Vec<Item>,
}

impl Readable for Animal {
	fn get(&self, field: &str) -> FieldValue {
		match field {
			"id" => FieldValue::value(self.id),
			"alt_id" => FieldValue::value(self.alt_id),
			"name" => FieldValue::value(self.name),
			"tail" => FieldValue::value(self.tail),
			"claws" => FieldValue::value(self.claws),
			"opposable_thumb" => FieldValue::value(self.opposable_thumb),
			"main_attack" => match &self.main_attack {
				Some(attack) => FieldValue::one(attack.clone()),
				None => FieldValue::Value(Value::Null),
			},
			"inventory" => FieldValue::many(self.inventory.clone()),
			_ => FieldValue::Absent,
		}
	}
}

pub fn peck() -> Attack {
	Attack {
		id: 1,
		name: "peck",
		damage: "piercing",
	}
}

pub fn penguin() -> Animal {
	Animal {
		id: 1,
		alt_id: "boogins",
		name: "penguin",
		tail: true,
		claws: true,
		opposable_thumb: false,
		main_attack: Some(peck()),
		inventory: vec![
			Item {
				id: 1,
				item: "pebble",
			},
			Item { id: 2, item: "fish" },
			Item {
				id: 3,
				item: "necronomicon",
			},
		],
	}
}

pub fn trout() -> Animal {
	Animal {
		id: 2,
		alt_id: "gills",
		name: "trout",
		tail: true,
		claws: false,
		opposable_thumb: false,
		main_attack: Some(peck()),
		inventory: vec![Item { id: 2, item: "fish" }],
	}
}

pub fn orangutan() -> Animal {
	Animal {
		id: 3,
		alt_id: "red",
		name: "orangutan",
		tail: false,
		claws: false,
		opposable_thumb: true,
		main_attack: None,
		inventory: Vec::new(),
	}
}

pub struct AttackSerializer;

impl ResourceSerializer for AttackSerializer {
	fn schema() -> &'static Schema {
		static SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
			Schema::builder()
				.type_name("attacks")
				.attributes(["name", "damage"], TransformOptions::new())
				.and_then(|b| b.build())
				.expect("attack schema")
		});
		&SCHEMA
	}
}

pub struct ItemSerializer;

impl ResourceSerializer for ItemSerializer {
	fn schema() -> &'static Schema {
		static SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
			Schema::builder()
				.type_name("items")
				.attribute("item", TransformOptions::new())
				.and_then(|b| b.build())
				.expect("item schema")
		});
		&SCHEMA
	}
}

/// Animal declarations, open for a per-test relationship mode or casing
pub fn animal_builder() -> SchemaBuilder {
	Schema::builder()
		.type_name("animals")
		.attribute("name", TransformOptions::new())
		.and_then(|b| b.attributes(["tail", "claws"], TransformOptions::new()))
		.and_then(|b| b.attribute("cola", TransformOptions::new().key("tail")))
		.and_then(|b| b.attribute("eyes", TransformOptions::new()))
		.and_then(|b| b.attribute("opposable_thumb", TransformOptions::new()))
		.and_then(|b| {
			b.belongs_to(
				"main_attack",
				TransformOptions::new().serializer(SchemaRef::of::<AttackSerializer>()),
			)
		})
		.and_then(|b| {
			b.has_many(
				"inventory_items",
				TransformOptions::new()
					.key("inventory")
					.serializer(SchemaRef::of::<ItemSerializer>()),
			)
		})
		.expect("animal declarations")
}

pub fn animal_schema(mode: RelationshipMode) -> Schema {
	animal_builder()
		.render_relationships(mode)
		.build()
		.expect("animal schema")
}

pub struct AnimalSerializer;

impl ResourceSerializer for AnimalSerializer {
	fn schema() -> &'static Schema {
		static SCHEMA: LazyLock<Schema> =
			LazyLock::new(|| animal_builder().build().expect("animal schema"));
		&SCHEMA
	}
}
