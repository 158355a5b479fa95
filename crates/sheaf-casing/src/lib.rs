//! # sheaf-casing
//!
//! Key casing for serialized attribute names.
//!
//! A schema may declare a [`KeyCasing`] that is applied to every attribute's
//! output key. Declared names are usually `snake_case`, so the casings split a
//! name into words on `_`, `-`, spaces and lower-to-upper boundaries before
//! joining them in the target style.
//!
//! ```
//! use sheaf_casing::KeyCasing;
//!
//! assert_eq!(KeyCasing::Dasherize.apply("opposable_thumb"), "opposable-thumb");
//! assert_eq!(KeyCasing::Camel.apply("opposable_thumb"), "opposableThumb");
//! assert_eq!("dasherize".parse::<KeyCasing>().unwrap(), KeyCasing::Dasherize);
//! ```

use serde::{Deserialize, Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Casing applied to attribute output keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum KeyCasing {
	/// lowercase
	Lower,
	/// UPPERCASE
	Upper,
	/// PascalCase
	Pascal,
	/// camelCase
	Camel,
	/// snake_case
	Snake,
	/// SCREAMING_SNAKE_CASE
	ScreamingSnake,
	/// kebab-case
	Dasherize,
	/// SCREAMING-KEBAB-CASE
	ScreamingKebab,
}

/// A casing name that matches none of the known casings
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown key casing '{0}'")]
pub struct UnknownCasing(pub String);

impl KeyCasing {
	/// Every casing, in declaration order
	pub const ALL: [KeyCasing; 8] = [
		KeyCasing::Lower,
		KeyCasing::Upper,
		KeyCasing::Pascal,
		KeyCasing::Camel,
		KeyCasing::Snake,
		KeyCasing::ScreamingSnake,
		KeyCasing::Dasherize,
		KeyCasing::ScreamingKebab,
	];

	/// Transform a raw key into this casing
	///
	/// # Examples
	///
	/// ```
	/// use sheaf_casing::KeyCasing;
	///
	/// assert_eq!(KeyCasing::Pascal.apply("user_id"), "UserId");
	/// assert_eq!(KeyCasing::Snake.apply("userId"), "user_id");
	/// assert_eq!(KeyCasing::ScreamingKebab.apply("user_id"), "USER-ID");
	/// ```
	pub fn apply(&self, input: &str) -> String {
		let words = split_words(input);
		match self {
			KeyCasing::Lower => input.to_lowercase(),
			KeyCasing::Upper => input.to_uppercase(),
			KeyCasing::Pascal => words.iter().map(|w| capitalize(w)).collect(),
			KeyCasing::Camel => words
				.iter()
				.enumerate()
				.map(|(i, w)| {
					if i == 0 {
						w.to_lowercase()
					} else {
						capitalize(w)
					}
				})
				.collect(),
			KeyCasing::Snake => join_lower(&words, "_"),
			KeyCasing::ScreamingSnake => join_lower(&words, "_").to_uppercase(),
			KeyCasing::Dasherize => join_lower(&words, "-"),
			KeyCasing::ScreamingKebab => join_lower(&words, "-").to_uppercase(),
		}
	}

	/// Canonical name of this casing
	pub fn as_str(&self) -> &'static str {
		match self {
			KeyCasing::Lower => "lower",
			KeyCasing::Upper => "upper",
			KeyCasing::Pascal => "pascal",
			KeyCasing::Camel => "camel",
			KeyCasing::Snake => "snake",
			KeyCasing::ScreamingSnake => "screaming_snake",
			KeyCasing::Dasherize => "dasherize",
			KeyCasing::ScreamingKebab => "screaming_kebab",
		}
	}
}

/// Apply an optional casing, borrowing the raw key when none is set
///
/// # Examples
///
/// ```
/// use sheaf_casing::{KeyCasing, apply_casing};
///
/// assert_eq!(apply_casing(None, "opposable_thumb"), "opposable_thumb");
/// assert_eq!(apply_casing(Some(KeyCasing::Dasherize), "opposable_thumb"), "opposable-thumb");
/// ```
pub fn apply_casing(casing: Option<KeyCasing>, raw: &str) -> Cow<'_, str> {
	match casing {
		Some(casing) => Cow::Owned(casing.apply(raw)),
		None => Cow::Borrowed(raw),
	}
}

fn split_words(input: &str) -> Vec<String> {
	let mut words = Vec::new();
	let mut current = String::new();
	let mut prev_lower = false;

	for c in input.chars() {
		if c == '_' || c == '-' || c.is_whitespace() {
			if !current.is_empty() {
				words.push(std::mem::take(&mut current));
			}
			prev_lower = false;
			continue;
		}
		if c.is_uppercase() && prev_lower && !current.is_empty() {
			words.push(std::mem::take(&mut current));
		}
		prev_lower = c.is_lowercase() || c.is_ascii_digit();
		current.push(c);
	}
	if !current.is_empty() {
		words.push(current);
	}
	words
}

fn capitalize(word: &str) -> String {
	let mut chars = word.chars();
	match chars.next() {
		None => String::new(),
		Some(first) => first
			.to_uppercase()
			.chain(chars.flat_map(char::to_lowercase))
			.collect(),
	}
}

fn join_lower(words: &[String], separator: &str) -> String {
	words
		.iter()
		.map(|w| w.to_lowercase())
		.collect::<Vec<_>>()
		.join(separator)
}

impl FromStr for KeyCasing {
	type Err = UnknownCasing;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"lower" | "lowercase" => Ok(KeyCasing::Lower),
			"upper" | "uppercase" => Ok(KeyCasing::Upper),
			"pascal" | "camel_upper" | "PascalCase" => Ok(KeyCasing::Pascal),
			"camel" | "camel_lower" | "camelCase" => Ok(KeyCasing::Camel),
			"snake" | "underscore" | "snake_case" => Ok(KeyCasing::Snake),
			"screaming_snake" | "SCREAMING_SNAKE_CASE" => Ok(KeyCasing::ScreamingSnake),
			"dasherize" | "dash" | "kebab" | "kebab-case" => Ok(KeyCasing::Dasherize),
			"screaming_kebab" | "SCREAMING-KEBAB-CASE" => Ok(KeyCasing::ScreamingKebab),
			other => Err(UnknownCasing(other.to_string())),
		}
	}
}

impl TryFrom<String> for KeyCasing {
	type Error = UnknownCasing;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		value.parse()
	}
}

impl fmt::Display for KeyCasing {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl Serialize for KeyCasing {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(self.as_str())
	}
}
