//! The `List` core class

use crate::prelude::*;

fn is_list(value: &RValue) -> bool {
    matches!(value, RValue::List(_))
}

fn allocate() -> RValue {
    RList::default().into()
}

/// Makes the `List` class
pub fn make_class() -> ClassBuilder {
    ClassBuilder::new("List")
        .builtin(Some(allocate))
        .method("first", |ctx| {
            let expected_error = "|List|";

            match ctx.instance_and_args(is_list, expected_error)? {
                (RValue::List(l), []) => Ok(l.get(0).unwrap_or_default()),
                (instance, args) => unexpected_args_after_instance(expected_error, instance, args),
            }
        })
        .method("last", |ctx| {
            let expected_error = "|List|";

            match ctx.instance_and_args(is_list, expected_error)? {
                (RValue::List(l), []) => Ok(l.data().last().cloned().unwrap_or_default()),
                (instance, args) => unexpected_args_after_instance(expected_error, instance, args),
            }
        })
        .method("size", |ctx| {
            let expected_error = "|List|";

            match ctx.instance_and_args(is_list, expected_error)? {
                (RValue::List(l), []) => Ok(l.len().into()),
                (instance, args) => unexpected_args_after_instance(expected_error, instance, args),
            }
        })
        .method("[]", |ctx| {
            let expected_error = "|List, Integer|";

            match ctx.instance_and_args(is_list, expected_error)? {
                (RValue::List(l), [RValue::Int(index)]) => {
                    // Negative indices count back from the end of the list
                    let index = if *index < 0 {
                        i64::try_from(l.len()).ok().map(|len| len + index)
                    } else {
                        Some(*index)
                    };
                    let value = index
                        .and_then(|index| usize::try_from(index).ok())
                        .and_then(|index| l.get(index));
                    Ok(value.unwrap_or_default())
                }
                (instance, args) => unexpected_args_after_instance(expected_error, instance, args),
            }
        })
        .method("<<", |ctx| {
            let expected_error = "|List, Object|";

            match ctx.instance_and_args(is_list, expected_error)? {
                (RValue::List(l), [value]) => {
                    l.push(value.clone());
                    Ok(RValue::List(l.clone()))
                }
                (instance, args) => unexpected_args_after_instance(expected_error, instance, args),
            }
        })
}
