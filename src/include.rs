//! Include path parsing.
//!
//! # Examples
//!
//! ```rust
//! # #[cfg(feature = "include")]
//! # {
//! use sheaf::include::InclusionTree;
//!
//! let tree = InclusionTree::parse("author.avatar,tags");
//! assert!(tree.contains("tags"));
//! # }
//! ```

#[cfg(feature = "include")]
pub use sheaf_include::*;
