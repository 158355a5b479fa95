//! Serializer settings
//!
//! Defaults applied to every serialize call that does not override them.

use serde::{Deserialize, Serialize};
use sheaf_casing::KeyCasing;
use sheaf_core::RelationshipMode;

/// Relationship nesting depth allowed when nothing else is configured
pub const DEFAULT_MAX_DEPTH: usize = 8;

/// Serializer-wide settings
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializerSettings {
	/// Deepest relationship nesting level that still evaluates relationships
	///
	/// `0` renders primary resources without evaluating any relationship.
	#[serde(default = "default_max_depth")]
	pub max_depth: usize,

	/// Mode used by schemas that do not declare one
	#[serde(default)]
	pub relationship_mode: RelationshipMode,

	/// Casing used by schemas that do not declare one
	#[serde(default)]
	pub key_casing: Option<KeyCasing>,
}

fn default_max_depth() -> usize {
	DEFAULT_MAX_DEPTH
}

impl Default for SerializerSettings {
	fn default() -> Self {
		Self {
			max_depth: DEFAULT_MAX_DEPTH,
			relationship_mode: RelationshipMode::Full,
			key_casing: None,
		}
	}
}

impl SerializerSettings {
	/// Create new settings with defaults
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_max_depth(mut self, max_depth: usize) -> Self {
		self.max_depth = max_depth;
		self
	}

	pub fn with_relationship_mode(mut self, mode: RelationshipMode) -> Self {
		self.relationship_mode = mode;
		self
	}

	pub fn with_key_casing(mut self, casing: KeyCasing) -> Self {
		self.key_casing = Some(casing);
		self
	}

	/// Parse settings from TOML
	///
	pub fn from_toml_str(contents: &str) -> Result<Self, SettingsError> {
		toml::from_str(contents)
			.map_err(|e| SettingsError::ParseError(format!("TOML parse error: {}", e)))
	}

	/// Parse settings from JSON
	///
	pub fn from_json_str(contents: &str) -> Result<Self, SettingsError> {
		serde_json::from_str(contents)
			.map_err(|e| SettingsError::ParseError(format!("JSON parse error: {}", e)))
	}

	/// Render as TOML
	pub fn to_toml_string(&self) -> Result<String, SettingsError> {
		toml::to_string(self).map_err(|e| SettingsError::SerializationError(e.to_string()))
	}
}

/// Settings errors
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
	#[error("Parse error: {0}")]
	ParseError(String),

	#[error("Serialization error: {0}")]
	SerializationError(String),
}
