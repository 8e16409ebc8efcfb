use std::sync::Arc;

use super::object::ObjectRef;
use crate::error::CapabilityError;

/// Measures the shallow size of an object.
///
/// Implementations are shared across threads once installed, so they must be
/// `Send + Sync` and must not rely on `&mut self`.
pub trait SizeCapability: Send + Sync {
    /// Size in bytes of the object's own representation. `None` is the null
    /// reference; whether it is measurable is up to the capability.
    fn object_size(&self, object: Option<ObjectRef<'_>>) -> Result<u64, CapabilityError>;
}

impl<C: SizeCapability + ?Sized> SizeCapability for Arc<C> {
    fn object_size(&self, object: Option<ObjectRef<'_>>) -> Result<u64, CapabilityError> {
        (**self).object_size(object)
    }
}

impl<C: SizeCapability + ?Sized> SizeCapability for Box<C> {
    fn object_size(&self, object: Option<ObjectRef<'_>>) -> Result<u64, CapabilityError> {
        (**self).object_size(object)
    }
}
