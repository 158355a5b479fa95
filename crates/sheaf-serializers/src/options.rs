//! Per-call serialize options

use crate::recursive::DEFAULT_MAX_DEPTH;
use serde_json::{Map, Value};
use sheaf_casing::KeyCasing;
use sheaf_core::RelationshipMode;
use sheaf_include::InclusionTree;

/// Options of one serialize call
///
/// Carries the requested includes, a pass-through context map readable by
/// accessors and inline functions, and the defaults used by schemas that
/// do not declare a relationship mode or a key casing. Nested serializers
/// receive the same options with the includes narrowed to their branch.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use sheaf_serializers::SerializeOptions;
///
/// let options = SerializeOptions::new()
///     .with_includes("inventory_items.owner,main_attack")
///     .with_context_value("locale", "en");
///
/// assert!(options.includes().unwrap().contains("main_attack"));
/// assert_eq!(options.context().get("locale"), Some(&json!("en")));
///
/// let nested = options.for_relationship("inventory_items");
/// assert!(nested.includes().unwrap().contains("owner"));
/// assert_eq!(nested.context().get("locale"), Some(&json!("en")));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SerializeOptions {
	includes: Option<InclusionTree>,
	context: Map<String, Value>,
	max_depth: usize,
	relationship_mode: RelationshipMode,
	key_casing: Option<KeyCasing>,
}

impl Default for SerializeOptions {
	fn default() -> Self {
		Self {
			includes: None,
			context: Map::new(),
			max_depth: DEFAULT_MAX_DEPTH,
			relationship_mode: RelationshipMode::default(),
			key_casing: None,
		}
	}
}

impl SerializeOptions {
	pub fn new() -> Self {
		Self::default()
	}

	/// Options seeded with settings defaults
	#[cfg(feature = "conf")]
	pub fn from_settings(settings: &sheaf_conf::SerializerSettings) -> Self {
		Self {
			max_depth: settings.max_depth,
			relationship_mode: settings.relationship_mode,
			key_casing: settings.key_casing,
			..Self::default()
		}
	}

	/// Request relationships, as a raw path (`"a.b,c"`) or a built tree
	pub fn with_includes(mut self, includes: impl Into<InclusionTree>) -> Self {
		self.includes = Some(includes.into());
		self
	}

	/// Add one pass-through context value
	pub fn with_context_value(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.context.insert(key.into(), value.into());
		self
	}

	/// Replace the pass-through context
	pub fn with_context(mut self, context: Map<String, Value>) -> Self {
		self.context = context;
		self
	}

	/// Nesting level at which relationships stop being evaluated
	///
	/// `0` evaluates none, as does `max_depth = 0` in settings.
	pub fn with_max_depth(mut self, max_depth: usize) -> Self {
		self.max_depth = max_depth;
		self
	}

	/// Mode for schemas that do not declare one
	pub fn with_relationship_mode(mut self, mode: RelationshipMode) -> Self {
		self.relationship_mode = mode;
		self
	}

	/// Casing for schemas that do not declare one
	pub fn with_key_casing(mut self, casing: KeyCasing) -> Self {
		self.key_casing = Some(casing);
		self
	}

	pub fn includes(&self) -> Option<&InclusionTree> {
		self.includes.as_ref()
	}

	pub fn context(&self) -> &Map<String, Value> {
		&self.context
	}

	pub fn max_depth(&self) -> usize {
		self.max_depth
	}

	pub fn relationship_mode(&self) -> RelationshipMode {
		self.relationship_mode
	}

	pub fn key_casing(&self) -> Option<KeyCasing> {
		self.key_casing
	}

	/// Options handed to the nested serializer of relationship `param`
	pub fn for_relationship(&self, param: &str) -> Self {
		Self {
			includes: self
				.includes
				.as_ref()
				.and_then(|tree| tree.get(param))
				.cloned(),
			..self.clone()
		}
	}
}
