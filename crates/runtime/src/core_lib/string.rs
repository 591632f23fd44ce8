//! The `String` core class

use crate::prelude::*;

fn is_string(value: &RValue) -> bool {
    matches!(value, RValue::Str(_))
}

fn allocate() -> RValue {
    RString::empty().into()
}

/// Makes the `String` class
pub fn make_class() -> ClassBuilder {
    ClassBuilder::new("String")
        .builtin(Some(allocate))
        .method("[]", |ctx| {
            let expected_error = "|String, Integer|, or |String, Integer, Integer|";

            match ctx.instance_and_args(is_string, expected_error)? {
                (RValue::Str(s), [RValue::Int(start), RValue::Int(length)]) => {
                    Ok(s.slice(*start, *length).into())
                }
                (RValue::Str(s), [RValue::Int(index)]) => Ok(s.slice(*index, 1).into()),
                (instance, args) => unexpected_args_after_instance(expected_error, instance, args),
            }
        })
        .method("+", |ctx| {
            let expected_error = "|String, String|";

            // No implicit conversion, non-strings need to be converted with `to_s` first
            match ctx.instance_and_args(is_string, expected_error)? {
                (RValue::Str(a), [RValue::Str(b)]) => Ok(a.concat(b).into()),
                (instance, args) => unexpected_args_after_instance(expected_error, instance, args),
            }
        })
        .method("size", |ctx| {
            let expected_error = "|String|";

            match ctx.instance_and_args(is_string, expected_error)? {
                (RValue::Str(s), []) => Ok(s.grapheme_count().into()),
                (instance, args) => unexpected_args_after_instance(expected_error, instance, args),
            }
        })
        .method("to_s", |ctx| {
            let expected_error = "|String|";

            match ctx.instance_and_args(is_string, expected_error)? {
                (RValue::Str(s), []) => Ok(s.clone().into()),
                (instance, args) => unexpected_args_after_instance(expected_error, instance, args),
            }
        })
}
