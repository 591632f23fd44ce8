//! The `Object` core class, along with `Nil` and `Boolean`
//!
//! `Object` is the root of the class hierarchy, so its methods are available on every value.

use crate::prelude::*;

fn any(_: &RValue) -> bool {
    true
}

/// Makes the `Object` class
pub fn make_object_class() -> ClassBuilder {
    ClassBuilder::new("Object")
        .builtin(None)
        .method("class", |ctx| {
            let expected_error = "|Object|";

            match ctx.instance_and_args(any, expected_error)? {
                (instance, []) => Ok(ctx.vm.class_of(instance).into()),
                (instance, args) => unexpected_args_after_instance(expected_error, instance, args),
            }
        })
        .method("to_s", |ctx| {
            let expected_error = "|Object|";

            match ctx.instance_and_args(any, expected_error)? {
                (instance, []) => Ok(instance.to_display().into()),
                (instance, args) => unexpected_args_after_instance(expected_error, instance, args),
            }
        })
        .method("inspect", |ctx| {
            let expected_error = "|Object|";

            match ctx.instance_and_args(any, expected_error)? {
                (instance, []) => Ok(instance.inspect().into()),
                (instance, args) => unexpected_args_after_instance(expected_error, instance, args),
            }
        })
        .method("==", |ctx| {
            let expected_error = "|Object, Object|";

            match ctx.instance_and_args(any, expected_error)? {
                (instance, [other]) => Ok((instance == other).into()),
                (instance, args) => unexpected_args_after_instance(expected_error, instance, args),
            }
        })
        .method("nil?", |ctx| {
            let expected_error = "|Object|";

            match ctx.instance_and_args(any, expected_error)? {
                (instance, []) => Ok(matches!(instance, RValue::Nil).into()),
                (instance, args) => unexpected_args_after_instance(expected_error, instance, args),
            }
        })
}

/// Makes the `Nil` class
pub fn make_nil_class() -> ClassBuilder {
    ClassBuilder::new("Nil").builtin(None)
}

/// Makes the `Boolean` class
pub fn make_boolean_class() -> ClassBuilder {
    ClassBuilder::new("Boolean").builtin(None).method("!", |ctx| {
        let expected_error = "|Boolean|";

        match ctx.instance_and_args(|instance| matches!(instance, RValue::Bool(_)), expected_error)? {
            (RValue::Bool(b), []) => Ok((!b).into()),
            (instance, args) => unexpected_args_after_instance(expected_error, instance, args),
        }
    })
}
