//! A collection of useful items to make it easier to work with `rook_runtime`

#[doc(inline)]
pub use crate::{
    CallContext, ClassBuilder, ClassKind, DisplayContext, KeyedCollection, MethodMap, RCell,
    RClass, RFunction, RList, RMap, RObject, RString, RValue, RookFile, RookFunction,
    RookIndexMap, RookRead, RookVm, RookVmSettings, RookWrite, SlotMap, SystemStderr,
    SystemStdin, SystemStdout, ValueKey, ValueMap, ValueVec, make_ptr, make_ptr_mut, raise,
    runtime_error, unexpected_args, unexpected_args_after_instance, unexpected_type,
};
