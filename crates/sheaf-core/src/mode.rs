//! Transform kinds and relationship rendering modes

use crate::error::ConfigurationError;
use serde::{Deserialize, Serialize};
use sheaf_include::InclusionTree;
use std::fmt;
use std::str::FromStr;

/// Kind of a declared transform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformKind {
	Attribute,
	BelongsTo,
	HasOne,
	HasMany,
}

impl TransformKind {
	pub fn is_relationship(&self) -> bool {
		!matches!(self, TransformKind::Attribute)
	}

	pub fn is_to_many(&self) -> bool {
		matches!(self, TransformKind::HasMany)
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			TransformKind::Attribute => "attribute",
			TransformKind::BelongsTo => "belongs_to",
			TransformKind::HasOne => "has_one",
			TransformKind::HasMany => "has_many",
		}
	}
}

impl fmt::Display for TransformKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Policy selecting which relationship transforms are evaluated
///
/// | mode       | `belongs_to`         | `has_one` / `has_many` |
/// |------------|----------------------|------------------------|
/// | `None`     | never                | never                  |
/// | `Included` | when included        | when included          |
/// | `Partial`  | always               | when included          |
/// | `Full`     | always               | always                 |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RelationshipMode {
	None,
	Included,
	Partial,
	#[default]
	Full,
}

impl RelationshipMode {
	/// Whether a relationship transform of `kind` named `param` is evaluated
	///
	/// # Examples
	///
	/// ```
	/// use sheaf_core::{RelationshipMode, TransformKind};
	/// use sheaf_include::InclusionTree;
	///
	/// let includes = InclusionTree::parse("inventory_items");
	/// let partial = RelationshipMode::Partial;
	///
	/// assert!(partial.selects(TransformKind::BelongsTo, "main_attack", None));
	/// assert!(!partial.selects(TransformKind::HasMany, "inventory_items", None));
	/// assert!(partial.selects(TransformKind::HasMany, "inventory_items", Some(&includes)));
	/// ```
	pub fn selects(
		&self,
		kind: TransformKind,
		param: &str,
		includes: Option<&InclusionTree>,
	) -> bool {
		if !kind.is_relationship() {
			return false;
		}
		let included = includes.is_some_and(|tree| tree.contains(param));
		match self {
			RelationshipMode::None => false,
			RelationshipMode::Included => included,
			RelationshipMode::Partial => kind == TransformKind::BelongsTo || included,
			RelationshipMode::Full => true,
		}
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			RelationshipMode::None => "none",
			RelationshipMode::Included => "included",
			RelationshipMode::Partial => "partial",
			RelationshipMode::Full => "full",
		}
	}
}

impl FromStr for RelationshipMode {
	type Err = ConfigurationError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"none" => Ok(RelationshipMode::None),
			"included" => Ok(RelationshipMode::Included),
			"partial" => Ok(RelationshipMode::Partial),
			"full" => Ok(RelationshipMode::Full),
			other => Err(ConfigurationError::UnknownRelationshipMode(
				other.to_string(),
			)),
		}
	}
}

impl TryFrom<String> for RelationshipMode {
	type Error = ConfigurationError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		value.parse()
	}
}

impl From<RelationshipMode> for String {
	fn from(mode: RelationshipMode) -> Self {
		mode.as_str().to_string()
	}
}

impl fmt::Display for RelationshipMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
