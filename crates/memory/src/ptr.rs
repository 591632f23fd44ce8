use std::{
    fmt,
    hash::{Hash, Hasher},
    ops::Deref,
    rc::Rc,
};

use crate::Address;

/// Provides access to a shared value that is initialized on first use
///
/// This macro will return a value of type `$ty`.
/// On the first use, the value is initialized using `$expr.into()` and stored in a `thread_local`.
/// Subsequent accesses return a clone of the stored value.
///
/// # Examples
///
/// ```
/// use rook_memory::{Ptr, lazy};
///
/// fn my_string_constant() -> Ptr<str> {
///     lazy!(Ptr<str>; "foo")
/// }
///
/// let s0 = my_string_constant();
/// let s1 = my_string_constant();
///
/// assert!(Ptr::ptr_eq(&s0, &s1));
/// ```
#[macro_export]
macro_rules! lazy {
    ($ty:ty; $expr:expr) => {{
        thread_local! {
            static VALUE: $ty = $expr.into();
        }
        VALUE.with(Clone::clone)
    }};
}

/// Makes a Ptr, with support for casting to trait objects
///
/// Casting from a concrete type to `dyn Trait` needs to be performed on the inner pointer until
/// `CoerceUnsized` is stabilized, this macro takes care of the cast at the call site.
///
/// ```
/// use rook_memory::{Ptr, make_ptr};
/// use std::fmt::Display;
///
/// let p: Ptr<dyn Display> = make_ptr!(42);
/// assert_eq!(p.to_string(), "42");
/// ```
#[macro_export]
macro_rules! make_ptr {
    ($value:expr) => {
        $crate::Ptr::from(::std::rc::Rc::new($value) as ::std::rc::Rc<_>)
    };
}

/// An immutable pointer to a value in allocated memory
#[derive(Default)]
pub struct Ptr<T: ?Sized>(Rc<T>);

impl<T> From<T> for Ptr<T> {
    fn from(value: T) -> Self {
        Self(Rc::new(value))
    }
}

impl<T: ?Sized> From<Box<T>> for Ptr<T> {
    fn from(boxed: Box<T>) -> Self {
        Self(boxed.into())
    }
}

impl<T: ?Sized> From<Rc<T>> for Ptr<T> {
    fn from(inner: Rc<T>) -> Self {
        Self(inner)
    }
}

impl<T: ?Sized> Ptr<T> {
    /// Returns true if the two `Ptr`s point to the same allocation
    ///
    /// See also: [`Rc::ptr_eq`]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Rc::ptr_eq(&this.0, &other.0)
    }

    /// Returns the address of the allocated memory
    pub fn address(this: &Self) -> Address {
        Rc::as_ptr(&this.0).into()
    }

    /// Returns the number of strong references to the allocated memory
    pub fn ref_count(this: &Self) -> usize {
        Rc::strong_count(&this.0)
    }
}

impl<T: Clone> Ptr<T> {
    /// Makes a mutable reference into the owned `T`, cloning the value if it's shared
    ///
    /// See also: [`Rc::make_mut`]
    pub fn make_mut(this: &mut Self) -> &mut T {
        Rc::make_mut(&mut this.0)
    }
}

impl<T: ?Sized> Deref for Ptr<T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.0.deref()
    }
}

impl<T: ?Sized> Clone for Ptr<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl From<&str> for Ptr<str> {
    fn from(value: &str) -> Self {
        Self(Rc::from(value))
    }
}

impl From<String> for Ptr<str> {
    fn from(value: String) -> Self {
        Self(Rc::from(value))
    }
}

impl<T: ?Sized + PartialEq> PartialEq for Ptr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: ?Sized + Eq> Eq for Ptr<T> {}

impl<T: ?Sized + Hash> Hash for Ptr<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state)
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Ptr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: ?Sized + fmt::Display> fmt::Display for Ptr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
