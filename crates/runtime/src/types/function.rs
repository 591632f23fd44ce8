use crate::{ErrorKind, Ptr, Result, make_ptr, prelude::*};
use std::fmt;

/// A trait for callable bodies used by the Rook runtime
///
/// Implemented for all matching closures, so methods and free functions are usually defined
/// inline, e.g. `|ctx| Ok(ctx.args()[0].clone())`.
pub trait RookFunction: Fn(&mut CallContext) -> Result<RValue> + 'static {}

impl<T> RookFunction for T where T: Fn(&mut CallContext) -> Result<RValue> + 'static {}

/// A callable body, used for both methods and free functions
#[derive(Clone)]
pub struct RFunction {
    function: Ptr<dyn RookFunction>,
}

impl RFunction {
    /// Creates a new function from the given body
    pub fn new(function: impl RookFunction) -> Self {
        Self {
            function: make_ptr!(function),
        }
    }

    /// Calls the function with the given context
    pub fn call(&self, ctx: &mut CallContext) -> Result<RValue> {
        (self.function)(ctx)
    }
}

impl fmt::Debug for RFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "function: {:?}", Ptr::address(&self.function))
    }
}

/// The context provided when a method or free function is called
///
/// `self` is available via [CallContext::instance], for free functions it's `nil`.
pub struct CallContext<'a> {
    /// The VM making the call
    ///
    /// The VM can be used for nested calls like [RookVm::dispatch], and for access to the
    /// runtime's I/O handles.
    pub vm: &'a mut RookVm,
    instance: RValue,
    args: &'a [RValue],
}

impl<'a> CallContext<'a> {
    /// Returns a new context for calling a function
    pub fn new(vm: &'a mut RookVm, instance: RValue, args: &'a [RValue]) -> Self {
        Self { vm, instance, args }
    }

    /// Returns the `self` instance with which the function was called
    pub fn instance(&self) -> &RValue {
        &self.instance
    }

    /// Returns the function call's arguments
    pub fn args(&self) -> &'a [RValue] {
        self.args
    }

    /// Returns the instance and args with which the function was called
    ///
    /// If the instance fails the provided check then an 'unexpected args' error is returned with
    /// the `expected_args_message`, listing the instance followed by the args.
    pub fn instance_and_args(
        &self,
        instance_check: impl Fn(&RValue) -> bool,
        expected_args_message: &str,
    ) -> Result<(&RValue, &'a [RValue])> {
        if instance_check(&self.instance) {
            Ok((&self.instance, self.args))
        } else {
            unexpected_args_after_instance(expected_args_message, &self.instance, self.args)
        }
    }

    /// Returns the value of one of `self`'s instance fields
    ///
    /// Fields that haven't been written yet are `nil`.
    pub fn field(&self, name: &str) -> Result<RValue> {
        match &self.instance {
            RValue::Object(o) => Ok(o.field(name)),
            unexpected => unexpected_type("an object instance as self", unexpected),
        }
    }

    /// Writes one of `self`'s instance fields
    pub fn set_field(&self, name: &str, value: impl Into<RValue>) -> Result<()> {
        match &self.instance {
            RValue::Object(o) => {
                o.set_field(name, value);
                Ok(())
            }
            unexpected => unexpected_type("an object instance as self", unexpected),
        }
    }

    /// Reads a shared slot from the class of `self`
    ///
    /// When `self` is a class, then the class's own shared slots are used.
    pub fn shared(&self, name: &str) -> Result<RValue> {
        let class = self.shared_class();
        class.shared_slot(name).ok_or_else(|| {
            ErrorKind::UninitializedSharedSlot {
                class: class.name().clone(),
                slot: name.into(),
            }
            .into()
        })
    }

    /// Writes a shared slot in the class of `self`, making the value visible to all instances
    pub fn set_shared(&self, name: &str, value: impl Into<RValue>) -> Result<()> {
        self.shared_class().set_shared_slot(name, value);
        Ok(())
    }

    fn shared_class(&self) -> RClass {
        match &self.instance {
            RValue::Class(c) => c.clone(),
            other => self.vm.class_of(other),
        }
    }
}
