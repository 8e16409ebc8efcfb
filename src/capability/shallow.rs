use super::object::ObjectRef;
use super::traits::SizeCapability;
use crate::error::CapabilityError;

/// Host capability backed by `std::mem::size_of_val`.
///
/// Reports the bytes occupied by the value itself. Heap memory reachable
/// through pointers (a `Vec`'s buffer, a `Box`'s pointee) is not counted.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShallowSizer;

impl ShallowSizer {
    pub fn new() -> Self {
        Self
    }
}

impl SizeCapability for ShallowSizer {
    fn object_size(&self, object: Option<ObjectRef<'_>>) -> Result<u64, CapabilityError> {
        // size_of_val already ran in ObjectRef::new, against the concrete type
        let object = object.ok_or(CapabilityError::NullReference)?;
        Ok(object.size() as u64)
    }
}
