//! # sheaf-include
//!
//! Parsing of JSON:API `include` paths into an [`InclusionTree`].
//!
//! An include path is a comma separated list of dotted relationship chains,
//! such as `author,comments.author`. Each chain becomes a branch of the tree,
//! and chains sharing a prefix are merged into the same subtree.
//!
//! ## Examples
//!
//! ```
//! use sheaf_include::InclusionTree;
//!
//! let tree = InclusionTree::parse("comments.author,comments.likes,author");
//!
//! assert!(tree.contains("author"));
//! let comments = tree.get("comments").unwrap();
//! assert_eq!(comments.keys().collect::<Vec<_>>(), vec!["author", "likes"]);
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Separator between independent include chains
pub const SEGMENT_SEPARATOR: char = ',';

/// Separator between the links of one chain
pub const CHAIN_SEPARATOR: char = '.';

/// Nested, insertion-ordered mapping of relationship names to the
/// relationships requested beneath them.
///
/// Empty segments (`"a,,b"`) and empty chain links (`"a..b"`, `"a."`) are
/// ignored, so the tree never holds an empty key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InclusionTree {
	children: IndexMap<String, InclusionTree>,
}

impl InclusionTree {
	/// Create an empty tree
	pub fn new() -> Self {
		Self::default()
	}

	/// Parse an include path into a new tree
	///
	/// # Examples
	///
	/// ```
	/// use sheaf_include::InclusionTree;
	///
	/// let tree = InclusionTree::parse("a.b,a.c");
	/// let a = tree.get("a").unwrap();
	/// assert!(a.contains("b"));
	/// assert!(a.contains("c"));
	/// assert!(a.get("b").unwrap().is_empty());
	/// ```
	pub fn parse(path: &str) -> Self {
		let mut tree = Self::new();
		tree.merge_path(path);
		tree
	}

	/// Parse an include path into this tree, keeping every branch already present
	///
	/// # Examples
	///
	/// ```
	/// use sheaf_include::InclusionTree;
	///
	/// let mut tree = InclusionTree::parse("author");
	/// tree.merge_path("author.avatar,tags");
	/// assert_eq!(tree.to_string(), "author.avatar,tags");
	/// ```
	pub fn merge_path(&mut self, path: &str) -> &mut Self {
		for segment in path.split(SEGMENT_SEPARATOR) {
			self.insert_chain(segment.split(CHAIN_SEPARATOR));
		}
		self
	}

	/// Insert one chain of relationship names, creating missing nodes
	pub fn insert_chain<I, S>(&mut self, chain: I) -> &mut Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut node = &mut *self;
		for link in chain {
			let link = link.as_ref();
			if link.is_empty() {
				continue;
			}
			node = node.children.entry(link.to_string()).or_default();
		}
		self
	}

	/// Deep union of `other` into this tree
	///
	/// Existing subtrees are augmented, never replaced, so merging a tree with
	/// itself leaves it unchanged.
	pub fn merge(&mut self, other: &InclusionTree) -> &mut Self {
		for (key, subtree) in &other.children {
			self.children.entry(key.clone()).or_default().merge(subtree);
		}
		self
	}

	/// Whether `key` is requested at this level
	pub fn contains(&self, key: &str) -> bool {
		self.children.contains_key(key)
	}

	/// The subtree requested beneath `key`
	pub fn get(&self, key: &str) -> Option<&InclusionTree> {
		self.children.get(key)
	}

	/// Relationship names at this level, in insertion order
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.children.keys().map(String::as_str)
	}

	/// Iterate over `(name, subtree)` pairs at this level
	pub fn iter(&self) -> impl Iterator<Item = (&str, &InclusionTree)> {
		self.children.iter().map(|(k, v)| (k.as_str(), v))
	}

	pub fn len(&self) -> usize {
		self.children.len()
	}

	pub fn is_empty(&self) -> bool {
		self.children.is_empty()
	}

	fn write_paths(&self, prefix: &str, out: &mut Vec<String>) {
		for (key, subtree) in &self.children {
			let path = if prefix.is_empty() {
				key.clone()
			} else {
				format!("{}{}{}", prefix, CHAIN_SEPARATOR, key)
			};
			if subtree.is_empty() {
				out.push(path);
			} else {
				subtree.write_paths(&path, out);
			}
		}
	}
}

/// Renders the canonical include path, one chain per leaf
impl fmt::Display for InclusionTree {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut paths = Vec::new();
		self.write_paths("", &mut paths);
		let separator = SEGMENT_SEPARATOR.to_string();
		write!(f, "{}", paths.join(separator.as_str()))
	}
}

impl FromStr for InclusionTree {
	type Err = Infallible;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(Self::parse(s))
	}
}

impl From<&str> for InclusionTree {
	fn from(path: &str) -> Self {
		Self::parse(path)
	}
}

impl From<String> for InclusionTree {
	fn from(path: String) -> Self {
		Self::parse(&path)
	}
}

impl From<&String> for InclusionTree {
	fn from(path: &String) -> Self {
		Self::parse(path)
	}
}
