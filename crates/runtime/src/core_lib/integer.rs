//! The `Integer` core class

use crate::prelude::*;

fn is_integer(value: &RValue) -> bool {
    matches!(value, RValue::Int(_))
}

/// Makes the `Integer` class
pub fn make_class() -> ClassBuilder {
    ClassBuilder::new("Integer")
        .builtin(None)
        .method("+", |ctx| {
            let expected_error = "|Integer, Integer|";

            match ctx.instance_and_args(is_integer, expected_error)? {
                (RValue::Int(a), [RValue::Int(b)]) => match a.checked_add(*b) {
                    Some(result) => Ok(result.into()),
                    None => runtime_error!("integer overflow in {a} + {b}"),
                },
                (instance, args) => unexpected_args_after_instance(expected_error, instance, args),
            }
        })
        .method("-", |ctx| {
            let expected_error = "|Integer, Integer|";

            match ctx.instance_and_args(is_integer, expected_error)? {
                (RValue::Int(a), [RValue::Int(b)]) => match a.checked_sub(*b) {
                    Some(result) => Ok(result.into()),
                    None => runtime_error!("integer overflow in {a} - {b}"),
                },
                (instance, args) => unexpected_args_after_instance(expected_error, instance, args),
            }
        })
}
