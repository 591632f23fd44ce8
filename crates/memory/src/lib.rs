//! Memory management utilities for Rook
//!
//! The runtime is single threaded, so pointers are reference counted with [`std::rc::Rc`] and
//! mutable values are wrapped in a runtime-checked [`RCell`]. Cycles aren't detected, values that
//! reference each other will be leaked.

#![warn(missing_docs)]

mod address;
mod ptr;
mod ptr_mut;

pub use crate::{
    address::Address,
    ptr::Ptr,
    ptr_mut::{Borrow, BorrowMut, PtrMut, RCell},
};
