//! Integration with type-directed structure decoders.
//!
//! Decoders that map loosely-typed input (environment maps, config trees)
//! onto struct fields work over [`std::any`] type information. Such a decoder
//! accepts hook functions in its configuration and calls them for every field
//! it fills, letting a hook intercept one source/target type pair and leave
//! everything else to the decoder's defaults. [`decode_secret_hook`] is the
//! hook that seals plain `T` values into [`Secret<T>`] fields.

use std::any::{type_name, Any, TypeId};

use tracing::trace;

use crate::error::Error;
use crate::secret::Secret;

/// A value moving through a structure decoder.
pub type DynValue = Box<dyn Any>;

/// The hook contract a structure decoder calls for every field it fills:
/// the source value's type, the target field's type, and the source value
/// itself. Returning the value unchanged defers to the decoder's default
/// handling for the pair.
///
/// Hooks are plain values handed to a decoder's configuration by the caller;
/// there is no global registry.
pub type DecodeHookFn = Box<dyn Fn(TypeId, TypeId, DynValue) -> Result<DynValue, Error> + Send + Sync>;

/// Builds a hook that recognizes a plain `T` headed for a [`Secret<T>`]
/// target and seals it, so decoded structs come out with their secret fields
/// initialized.
///
/// Any other source/target pair passes through untouched. A source that is
/// not a `T` is also passed through, so the decoder's own type-mismatch path
/// reports it rather than the hook masking it.
pub fn decode_secret_hook<T: Any>() -> DecodeHookFn {
    Box::new(|source, target, value| {
        if source != TypeId::of::<T>() || target != TypeId::of::<Secret<T>>() {
            return Ok(value);
        }

        match value.downcast::<T>() {
            Ok(value) => {
                trace!("sealing a decoded {} into a secret", type_name::<T>());
                Ok(Box::new(Secret::new(*value)))
            }
            // the type ids already matched, so this arm is unreachable; hand
            // the value back to the decoder's mismatch handling regardless
            Err(value) => Ok(value),
        }
    })
}
