//! Settings-driven serialize options.

use rstest::rstest;
use sheaf::prelude::*;
use sheaf::{SettingsError, TransformKind};

fn tag_schema() -> Schema {
	// no declared mode or casing, so the call's defaults apply
	Schema::builder()
		.type_name("tags")
		.attribute("display_label", TransformOptions::new())
		.and_then(|b| {
			b.has_many(
				"related_tags",
				TransformOptions::new().serializer(SchemaRef::new(|| tags())),
			)
		})
		.and_then(|b| b.build())
		.unwrap()
}

fn tags() -> &'static Schema {
	static SCHEMA: std::sync::LazyLock<Schema> = std::sync::LazyLock::new(tag_schema);
	&SCHEMA
}

fn tag_tree() -> serde_json::Value {
	json!({
		"id": "a",
		"display_label": "A",
		"related_tags": [{
			"id": "b",
			"display_label": "B",
			"related_tags": [{"id": "c", "display_label": "C"}]
		}]
	})
}

fn options_from(toml: &str) -> SerializeOptions {
	let settings = SerializerSettings::from_toml_str(toml).unwrap();
	SerializeOptions::from_settings(&settings)
}

#[rstest]
fn test_default_settings_render_everything() {
	let document = Serializer::new(tags(), [tag_tree()], options_from(""))
		.serializable_document()
		.unwrap();
	assert_eq!(document.included.len(), 2);
	assert!(document.resources()[0].attribute("display_label").is_some());
}

#[rstest]
fn test_settings_casing_applies_to_undeclared_schemas() {
	let options = options_from(r#"key_casing = "camel""#);
	let resource = Serializer::new(tags(), Vec::<serde_json::Value>::new(), options)
		.parse_object(&tag_tree());
	assert_eq!(resource.attribute("displayLabel"), Some(&json!("A")));
}

#[rstest]
fn test_output_key_follows_effective_casing() {
	let serializer = Serializer::new(
		tags(),
		Vec::<serde_json::Value>::new(),
		options_from(r#"key_casing = "camel""#),
	);
	assert_eq!(serializer.context().output_key("display_label"), "displayLabel");
	// the schema itself declares no casing
	assert_eq!(tags().output_key("display_label"), "display_label");
}

#[rstest]
#[case("none", 0)]
#[case("included", 0)]
#[case("partial", 0)]
#[case("full", 2)]
fn test_settings_mode(#[case] mode: &str, #[case] included: usize) {
	let options = options_from(&format!("relationship_mode = \"{mode}\""));
	let document = Serializer::new(tags(), [tag_tree()], options)
		.serializable_document()
		.unwrap();
	assert_eq!(document.included.len(), included);
	assert_eq!(
		tags().transform("related_tags").map(|t| t.kind()),
		Some(TransformKind::HasMany)
	);
}

#[rstest]
fn test_settings_depth_limit() {
	let document = Serializer::new(tags(), [tag_tree()], options_from("max_depth = 1"))
		.serializable_document()
		.unwrap();
	// b is included but its own relationships are not followed
	assert_eq!(document.included.len(), 1);
	assert_eq!(
		document.included[0].relationships.as_ref().map(|r| r.len()),
		Some(0)
	);
}

#[rstest]
fn test_json_settings() {
	let settings = SerializerSettings::from_json_str(r#"{"relationship_mode": "none"}"#).unwrap();
	let document = Serializer::new(
		tags(),
		[tag_tree()],
		SerializeOptions::from_settings(&settings),
	)
	.serializable_document()
	.unwrap();
	assert!(document.included.is_empty());
}

#[rstest]
fn test_zero_depth_settings_match_options() {
	let from_settings = Serializer::new(tags(), [tag_tree()], options_from("max_depth = 0"))
		.serializable_document()
		.unwrap();
	let from_options = Serializer::new(
		tags(),
		[tag_tree()],
		SerializeOptions::new().with_max_depth(0),
	)
	.serializable_document()
	.unwrap();
	assert_eq!(from_settings, from_options);
	assert!(from_settings.included.is_empty());
}

#[rstest]
#[case("max_depth = -1")]
#[case(r#"relationship_mode = "sometimes""#)]
fn test_invalid_settings_are_rejected(#[case] toml: &str) {
	let err: SettingsError = SerializerSettings::from_toml_str(toml).unwrap_err();
	assert!(!err.to_string().is_empty());
}
