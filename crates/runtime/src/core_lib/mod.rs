//! The core library for the Rook runtime
//!
//! The core library defines the built-in classes that every value dispatches through, along with
//! the kernel's free functions.

pub mod class;
pub mod integer;
pub mod kernel;
pub mod list;
pub mod map;
pub mod object;
pub mod string;

use crate::{
    prelude::*,
    registry::{ClassRegistry, FunctionRegistry},
};

/// The built-in classes that are registered in each [RookVm]
#[derive(Clone)]
#[allow(missing_docs)]
pub struct CoreLib {
    pub object: RClass,
    pub nil: RClass,
    pub boolean: RClass,
    pub integer: RClass,
    pub string: RClass,
    pub list: RClass,
    pub map: RClass,
    pub class: RClass,
}

impl CoreLib {
    /// Registers the built-in classes and the kernel functions
    pub(crate) fn register(classes: &mut ClassRegistry, functions: &mut FunctionRegistry) -> Self {
        let object = object::make_object_class().build(None);
        classes.insert(object.clone());

        let mut add = |builder: ClassBuilder| {
            let class = builder.build(Some(object.clone()));
            classes.insert(class.clone());
            class
        };

        let nil = add(object::make_nil_class());
        let boolean = add(object::make_boolean_class());
        let integer = add(integer::make_class());
        let string = add(string::make_class());
        let list = add(list::make_class());
        let map = add(map::make_class());
        let class = add(class::make_class());

        kernel::register(functions);

        Self {
            object,
            nil,
            boolean,
            integer,
            string,
            list,
            map,
            class,
        }
    }
}
