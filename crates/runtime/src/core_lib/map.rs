//! The `Map` core class
//!
//! `keys`, `[]`, and `delete` are the map's primitive operations, `values`, `empty?`, and `clear`
//! are derived from them via [KeyedCollection].

use crate::{CallContext, Result, prelude::*};

fn allocate() -> RValue {
    RMap::default().into()
}

/// Makes the `Map` class
pub fn make_class() -> ClassBuilder {
    ClassBuilder::new("Map")
        .builtin(Some(allocate))
        .method("keys", |ctx| {
            let expected_error = "|Map|";

            match map_instance_and_args(ctx, expected_error)? {
                (RValue::Map(m), []) => {
                    let keys = KeyedCollection::keys(m)
                        .into_iter()
                        .map(|key| key.value().clone())
                        .collect::<ValueVec>();
                    Ok(RList::with_data(keys).into())
                }
                (instance, args) => unexpected_args_after_instance(expected_error, instance, args),
            }
        })
        .method("[]", |ctx| {
            let expected_error = "|Map, Object|";

            match map_instance_and_args(ctx, expected_error)? {
                (RValue::Map(m), [key]) => {
                    KeyedCollection::get(m, &ValueKey::try_from(key.clone())?)
                }
                (instance, args) => unexpected_args_after_instance(expected_error, instance, args),
            }
        })
        .method("delete", |ctx| {
            let expected_error = "|Map, Object|";

            match map_instance_and_args(ctx, expected_error)? {
                (RValue::Map(m), [key]) => {
                    let key = ValueKey::try_from(key.clone())?;
                    Ok(m.clone().delete(&key).unwrap_or_default())
                }
                (instance, args) => unexpected_args_after_instance(expected_error, instance, args),
            }
        })
        .method("[]=", |ctx| {
            let expected_error = "|Map, Object, Object|";

            match map_instance_and_args(ctx, expected_error)? {
                (RValue::Map(m), [key, value]) => {
                    m.insert(ValueKey::try_from(key.clone())?, value.clone());
                    Ok(value.clone())
                }
                (instance, args) => unexpected_args_after_instance(expected_error, instance, args),
            }
        })
        .method("size", |ctx| {
            let expected_error = "|Map|";

            match map_instance_and_args(ctx, expected_error)? {
                (RValue::Map(m), []) => Ok(m.len().into()),
                (instance, args) => unexpected_args_after_instance(expected_error, instance, args),
            }
        })
        .method("key?", |ctx| {
            let expected_error = "|Map, Object|";

            match map_instance_and_args(ctx, expected_error)? {
                (RValue::Map(m), [key]) => {
                    Ok(m.contains_key(&ValueKey::try_from(key.clone())?).into())
                }
                (instance, args) => unexpected_args_after_instance(expected_error, instance, args),
            }
        })
        .method("values", |ctx| {
            let expected_error = "|Map|";

            match map_instance_and_args(ctx, expected_error)? {
                (RValue::Map(m), []) => Ok(RList::with_data(m.values()?).into()),
                (instance, args) => unexpected_args_after_instance(expected_error, instance, args),
            }
        })
        .method("empty?", |ctx| {
            let expected_error = "|Map|";

            match map_instance_and_args(ctx, expected_error)? {
                (RValue::Map(m), []) => Ok(KeyedCollection::is_empty(m).into()),
                (instance, args) => unexpected_args_after_instance(expected_error, instance, args),
            }
        })
        .method("clear", |ctx| {
            let expected_error = "|Map|";

            match map_instance_and_args(ctx, expected_error)? {
                (RValue::Map(m), []) => {
                    let mut m = m.clone();
                    m.clear();
                    Ok(m.into())
                }
                (instance, args) => unexpected_args_after_instance(expected_error, instance, args),
            }
        })
}

fn map_instance_and_args<'a>(
    ctx: &'a CallContext,
    expected_error: &str,
) -> Result<(&'a RValue, &'a [RValue])> {
    ctx.instance_and_args(|value| matches!(value, RValue::Map(_)), expected_error)
}
