//! Contains the object runtime and core library used by Rook
//!
//! Every value dispatches its methods through a class. The built-in classes are registered in each
//! [RookVm] by the [core_lib], and further classes are defined at runtime with [ClassBuilder].
//!
//! ```
//! use rook_runtime::prelude::*;
//!
//! let mut vm = RookVm::default();
//! let greeting = vm.dispatch(&"ohaie".into(), "[]", &[0.into(), 2.into()]).unwrap();
//! assert_eq!(greeting, RValue::from("oh"));
//! ```

#![warn(missing_docs)]

mod display_context;
mod error;
mod io;
mod registry;
mod types;
mod vm;

pub mod core_lib;
pub mod prelude;

pub use crate::{
    display_context::DisplayContext,
    error::{
        Error, ErrorKind, Result, raise, unexpected_args, unexpected_args_after_instance,
        unexpected_type,
    },
    io::{
        RookFile, RookRead, RookWrite, SystemStderr, SystemStdin, SystemStdout, Unavailable,
        map_io_err,
    },
    registry::{ClassRegistry, FunctionRegistry},
    types::{
        Allocator, CallContext, ClassBuilder, ClassKind, KeyedCollection, MethodMap, RClass,
        RFunction, RList, RMap, RObject, RString, RValue, RookFunction, RookHasher, RookIndexMap,
        SlotMap, ValueKey, ValueMap, ValueVec, key_not_found,
    },
    vm::{RookVm, RookVmSettings},
};
pub use rook_memory::{Borrow, BorrowMut, Ptr, PtrMut, RCell, lazy, make_ptr, make_ptr_mut};
