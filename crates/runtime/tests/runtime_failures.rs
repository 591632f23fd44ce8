use rook_runtime::{ErrorKind, prelude::*};

#[test]
fn missing_methods() {
    let mut vm = RookVm::default();

    let error = vm.dispatch(&42.into(), "frobnicate", &[]).unwrap_err();
    assert!(matches!(
        error.kind(),
        ErrorKind::NoMethod { type_name, method } if *type_name == "Integer" && *method == "frobnicate"
    ));
    assert_eq!(error.to_string(), "undefined method 'frobnicate' for Integer");
}

#[test]
fn missing_methods_on_instances_name_the_class() {
    let mut vm = RookVm::default();
    vm.define_class(ClassBuilder::new("Poop")).unwrap();
    let poop = vm.construct("Poop", &[]).unwrap();

    let error = vm.dispatch(&poop, "fly", &[]).unwrap_err();
    assert_eq!(error.to_string(), "undefined method 'fly' for Poop");
}

#[test]
fn missing_classes() {
    let mut vm = RookVm::default();

    let error = vm.construct("Nope", &[]).unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::NoSuchClass(_)));
    assert_eq!(error.to_string(), "uninitialized constant Nope");
}

#[test]
fn missing_functions() {
    let mut vm = RookVm::default();

    let error = vm.call_function("nope", &[]).unwrap_err();
    assert_eq!(error.to_string(), "undefined method 'nope' for Kernel");
}

#[test]
fn raised_errors_propagate_with_a_trace() {
    let mut vm = RookVm::default();
    vm.define_class(
        ClassBuilder::new("Poop").method("explode", |_| raise("This is not so exceptional")),
    )
    .unwrap();
    vm.define_function("detonate", |ctx| {
        let poop = ctx.vm.construct("Poop", &[])?;
        ctx.vm.dispatch(&poop, "explode", &[])
    });

    let error = vm.call_function("detonate", &[]).unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::UserRaised(_)));
    assert_eq!(error.to_string(), "This is not so exceptional");
    assert_eq!(error.trace(), &["Poop#explode", "detonate"]);
}

#[test]
fn unbounded_recursion_overflows_the_stack() {
    let mut vm = RookVm::with_settings(RookVmSettings {
        max_call_depth: 16,
        ..Default::default()
    });
    vm.define_function("recurse", |ctx| ctx.vm.call_function("recurse", &[]));

    let error = vm.call_function("recurse", &[]).unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::StackOverflow));
    assert_eq!(error.to_string(), "Stack overflow");
    assert_eq!(error.trace().len(), 16);

    // The VM is still usable after the overflow
    vm.define_function("fine", |_| Ok(RValue::Nil));
    assert!(vm.call_function("fine", &[]).is_ok());
}

#[test]
fn superclass_mismatch() {
    let mut vm = RookVm::default();
    let base = vm.define_class(ClassBuilder::new("Base")).unwrap();
    vm.define_class(ClassBuilder::new("Derived")).unwrap();

    let error = vm
        .define_class(ClassBuilder::new("Derived").superclass(base))
        .unwrap_err();
    assert_eq!(error.to_string(), "superclass mismatch for class Derived");
}
