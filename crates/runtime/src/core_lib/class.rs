//! The `Class` core class, used when calling methods on class values

use crate::prelude::*;

fn is_class(value: &RValue) -> bool {
    matches!(value, RValue::Class(_))
}

/// Makes the `Class` class
pub fn make_class() -> ClassBuilder {
    ClassBuilder::new("Class")
        .builtin(None)
        .method("new", |ctx| {
            let expected_error = "|Class, ...|";

            let class = match ctx.instance_and_args(is_class, expected_error)? {
                (RValue::Class(class), _) => class.clone(),
                (instance, args) => {
                    return unexpected_args_after_instance(expected_error, instance, args);
                }
            };

            let args = ctx.args();
            ctx.vm.instantiate(&class, args)
        })
        .method("name", |ctx| {
            let expected_error = "|Class|";

            match ctx.instance_and_args(is_class, expected_error)? {
                (RValue::Class(class), []) => Ok(class.name().clone().into()),
                (instance, args) => unexpected_args_after_instance(expected_error, instance, args),
            }
        })
        .method("superclass", |ctx| {
            let expected_error = "|Class|";

            match ctx.instance_and_args(is_class, expected_error)? {
                (RValue::Class(class), []) => Ok(class
                    .superclass()
                    .map_or(RValue::Nil, |superclass| superclass.clone().into())),
                (instance, args) => unexpected_args_after_instance(expected_error, instance, args),
            }
        })
        .method("instance_methods", |ctx| {
            let expected_error = "|Class|";

            match ctx.instance_and_args(is_class, expected_error)? {
                (RValue::Class(class), []) => {
                    let names = class.method_names().into_iter().map(RValue::from).collect();
                    Ok(RList::with_data(names).into())
                }
                (instance, args) => unexpected_args_after_instance(expected_error, instance, args),
            }
        })
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn class_values_respond_to_new_and_name() {
        let mut vm = RookVm::default();
        let class = RValue::from(
            vm.define_class(ClassBuilder::new("Poop").method("smell", |_| Ok("smell".into())))
                .unwrap(),
        );

        let instance = vm.dispatch(&class, "new", &[]).unwrap();
        assert_eq!(instance.type_name(), "Poop");
        assert_eq!(vm.dispatch(&class, "name", &[]).unwrap(), RValue::from("Poop"));
        assert_eq!(
            vm.dispatch(&class, "instance_methods", &[]).unwrap(),
            RValue::from(RList::with_data(vec!["smell".into()]))
        );

        let superclass = vm.dispatch(&class, "superclass", &[]).unwrap();
        assert_eq!(vm.dispatch(&superclass, "name", &[]).unwrap(), RValue::from("Object"));
    }

    #[test]
    fn builtin_classes_without_allocators_cant_be_constructed() {
        let mut vm = RookVm::default();

        let error = vm.construct("Integer", &[]).unwrap_err();
        assert_eq!(error.to_string(), "allocator undefined for Integer");
    }
}
