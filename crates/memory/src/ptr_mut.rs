use std::{
    cell::{Ref, RefCell, RefMut},
    fmt,
    ops::{Deref, DerefMut},
};

use crate::Ptr;

/// Makes a PtrMut, with support for casting to trait objects
///
/// See [make_ptr](crate::make_ptr).
#[macro_export]
macro_rules! make_ptr_mut {
    ($value:expr) => {
        $crate::make_ptr!($crate::RCell::from($value))
    };
}

/// A mutable pointer to a value in allocated memory
///
/// Clones of a `PtrMut` share the same value, writes made through one handle are visible through
/// all of the others.
pub type PtrMut<T> = Ptr<RCell<T>>;

impl<T> From<T> for PtrMut<T> {
    fn from(value: T) -> Self {
        Ptr::from(RCell::from(value))
    }
}

/// A mutable value with borrowing checked at runtime
#[derive(Debug, Default)]
pub struct RCell<T: ?Sized>(RefCell<T>);

impl<T> From<T> for RCell<T> {
    fn from(value: T) -> Self {
        Self(RefCell::new(value))
    }
}

impl<T: ?Sized> RCell<T> {
    /// Immutably borrows the wrapped value
    ///
    /// Multiple immutable borrows can be made at the same time.
    ///
    /// # Panics
    ///
    /// Panics if the value is currently mutably borrowed, see `try_borrow` for a non-panicking
    /// version.
    pub fn borrow(&self) -> Borrow<'_, T> {
        Borrow(self.0.borrow())
    }

    /// Attempts to immutably borrow the wrapped value
    ///
    /// Returns `None` if the value is currently mutably borrowed.
    pub fn try_borrow(&self) -> Option<Borrow<'_, T>> {
        self.0.try_borrow().ok().map(Borrow)
    }

    /// Mutably borrows the wrapped value
    ///
    /// # Panics
    ///
    /// Panics if the value is currently borrowed, see `try_borrow_mut` for a non-panicking
    /// version.
    pub fn borrow_mut(&self) -> BorrowMut<'_, T> {
        BorrowMut(self.0.borrow_mut())
    }

    /// Attempts to mutably borrow the wrapped value
    ///
    /// Returns `None` if the value is currently borrowed.
    pub fn try_borrow_mut(&self) -> Option<BorrowMut<'_, T>> {
        self.0.try_borrow_mut().ok().map(BorrowMut)
    }
}

/// An immutably borrowed reference to a value borrowed from a [PtrMut]
pub struct Borrow<'a, T: ?Sized>(Ref<'a, T>);

impl<'a, T: ?Sized> Borrow<'a, T> {
    /// Makes a new Borrow for a component of the borrowed data
    pub fn map<U, F>(borrowed: Self, f: F) -> Borrow<'a, U>
    where
        F: FnOnce(&T) -> &U,
        U: ?Sized,
    {
        Borrow(Ref::map(borrowed.0, f))
    }
}

impl<T: ?Sized> Deref for Borrow<'_, T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        self.0.deref()
    }
}

impl<T: ?Sized + fmt::Display> fmt::Display for Borrow<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A mutably borrowed reference to a value borrowed from a [PtrMut]
pub struct BorrowMut<'a, T: ?Sized>(RefMut<'a, T>);

impl<T: ?Sized> Deref for BorrowMut<'_, T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        self.0.deref()
    }
}

impl<T: ?Sized> DerefMut for BorrowMut<'_, T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        self.0.deref_mut()
    }
}

impl<T: ?Sized + fmt::Display> fmt::Display for BorrowMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
