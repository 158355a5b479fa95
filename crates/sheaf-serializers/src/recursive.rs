//! Relationship nesting depth and cycle detection
//!
//! Each relationship is serialized by a nested serializer one level deeper
//! than its parent. A resource that is already on the current nesting path
//! renders without evaluating its relationships again, and relationships stop
//! being evaluated altogether once the depth limit is reached.

use std::collections::HashSet;

/// Depth limit used when a call does not configure one
pub const DEFAULT_MAX_DEPTH: usize = 8;

/// Tracks how deep a serializer sits in the relationship tree and which
/// resources it is nested under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializationContext {
	/// Current depth level (0 = primary data)
	current_depth: usize,
	/// Deepest level whose relationships are still evaluated, exclusive
	max_depth: usize,
	/// `(type, id)` of every resource on the path from the primary data
	visited: HashSet<(String, String)>,
}

impl SerializationContext {
	/// Create a root context
	///
	/// # Examples
	///
	/// ```
	/// use sheaf_serializers::recursive::SerializationContext;
	///
	/// let context = SerializationContext::new(3);
	/// assert_eq!(context.current_depth(), 0);
	/// assert_eq!(context.max_depth(), 3);
	/// ```
	pub fn new(max_depth: usize) -> Self {
		Self {
			current_depth: 0,
			max_depth,
			visited: HashSet::new(),
		}
	}

	pub fn current_depth(&self) -> usize {
		self.current_depth
	}

	pub fn max_depth(&self) -> usize {
		self.max_depth
	}

	/// Whether resources at this level may evaluate relationships
	///
	/// # Examples
	///
	/// ```
	/// use sheaf_serializers::recursive::SerializationContext;
	///
	/// let context = SerializationContext::new(1);
	/// assert!(context.can_go_deeper());
	/// assert!(!context.child().can_go_deeper());
	/// ```
	pub fn can_go_deeper(&self) -> bool {
		self.current_depth < self.max_depth
	}

	/// Mark a resource as being on the current nesting path
	///
	/// Returns `false` when it already was.
	///
	/// # Examples
	///
	/// ```
	/// use sheaf_serializers::recursive::SerializationContext;
	///
	/// let mut context = SerializationContext::new(5);
	/// assert!(context.visit("people", "1"));
	/// assert!(!context.visit("people", "1"));
	/// assert!(context.child().is_visited("people", "1"));
	/// ```
	pub fn visit(&mut self, resource_type: &str, id: &str) -> bool {
		self.visited
			.insert((resource_type.to_string(), id.to_string()))
	}

	/// Unmark a resource, for backtracking
	pub fn leave(&mut self, resource_type: &str, id: &str) {
		self.visited
			.remove(&(resource_type.to_string(), id.to_string()));
	}

	pub fn is_visited(&self, resource_type: &str, id: &str) -> bool {
		self.visited
			.contains(&(resource_type.to_string(), id.to_string()))
	}

	/// Context of a nested serializer
	///
	/// The child sees every resource visited on the path so far. Visits made
	/// on the child do not leak back into its parent or its siblings.
	pub fn child(&self) -> Self {
		Self {
			current_depth: self.current_depth + 1,
			max_depth: self.max_depth,
			visited: self.visited.clone(),
		}
	}

	/// Levels left before relationships stop being evaluated
	pub fn remaining_depth(&self) -> usize {
		self.max_depth.saturating_sub(self.current_depth)
	}
}

impl Default for SerializationContext {
	fn default() -> Self {
		Self::new(DEFAULT_MAX_DEPTH)
	}
}
