use std::any::{type_name, Any};
use std::fmt;
use std::mem;

/// A borrowed reference to any in-process object.
///
/// Built from any `&T`, sized or not, borrowed data included. The value's
/// shallow size and type name are captured at construction, while the
/// concrete type is still known. Downcasting is only available when the
/// reference came from an `Any` value.
#[derive(Clone, Copy)]
pub struct ObjectRef<'a> {
    addr: *const (),
    size: usize,
    type_name: &'static str,
    any: Option<&'a dyn Any>,
}

impl<'a> ObjectRef<'a> {
    pub fn new<T: ?Sized>(value: &'a T) -> Self {
        Self {
            addr: value as *const T as *const (),
            size: mem::size_of_val(value),
            type_name: type_name::<T>(),
            any: None,
        }
    }

    /// Like [`new`](Self::new), keeping a `dyn Any` view for downcasts.
    pub fn from_any<T: Any>(value: &'a T) -> Self {
        Self {
            any: Some(value),
            ..Self::new(value)
        }
    }

    /// Bytes occupied by the value itself.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Address of the referenced value, for identity only.
    pub fn addr(&self) -> *const () {
        self.addr
    }

    pub fn as_any(&self) -> Option<&'a dyn Any> {
        self.any
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&'a T> {
        self.any.and_then(|any| any.downcast_ref::<T>())
    }
}

impl<'a> From<&'a dyn Any> for ObjectRef<'a> {
    fn from(value: &'a dyn Any) -> Self {
        Self {
            any: Some(value),
            ..Self::new(value)
        }
    }
}

impl fmt::Debug for ObjectRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectRef")
            .field("type_name", &self.type_name)
            .field("size", &self.size)
            .field("addr", &self.addr)
            .finish()
    }
}
