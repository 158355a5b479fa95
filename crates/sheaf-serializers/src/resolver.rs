//! Transform resolution
//!
//! Computes the value of one declared field for one object. The first
//! source that applies wins:
//!
//! 1. the named accessor registered on the schema,
//! 2. the declaration's inline function,
//! 3. the object's property under `key`, or under the declared name.
//!
//! Reading a property the object does not have yields
//! [`FieldValue::Absent`]. Resolution never fails.

use crate::serializer::SerializerContext;
use crate::transform::TransformDecl;
use sheaf_core::{FieldValue, Readable};

/// Resolve `decl` against `object`
pub fn resolve(ctx: &SerializerContext<'_>, object: &dyn Readable, decl: &TransformDecl) -> FieldValue {
	let options = decl.options().extra();

	if let Some(name) = decl.accessor() {
		match ctx.schema().method(name) {
			Some(method) => return method.call(ctx, object, options),
			None => tracing::warn!(
				param = decl.param(),
				method = name,
				"accessor is not registered on the schema, falling back"
			),
		}
	}

	if let Some(inline) = decl.inline() {
		return inline.call(ctx, object, options);
	}

	object.get(decl.source_key())
}
