/// A wrapper for comparing pointer addresses
///
/// Used to detect when two handles refer to the same allocation, e.g. when rendering a container
/// that contains itself.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Address(*const u8);

impl<T: ?Sized> From<*const T> for Address {
    fn from(pointer: *const T) -> Self {
        Self(pointer as *const u8)
    }
}
