//! The core types used in the Rook runtime

mod class;
mod function;
mod keyed;
mod list;
mod map;
mod object;
mod string;
pub mod value;
mod value_key;

pub use self::{
    class::{Allocator, ClassBuilder, ClassKind, MethodMap, RClass, SlotMap},
    function::{CallContext, RFunction, RookFunction},
    keyed::{KeyedCollection, key_not_found},
    list::{RList, ValueVec},
    map::{RMap, RookHasher, RookIndexMap, ValueMap},
    object::RObject,
    string::RString,
    value::RValue,
    value_key::ValueKey,
};
