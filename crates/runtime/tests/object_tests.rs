use rook_runtime::{ErrorKind, Result, prelude::*};

fn poop_class() -> ClassBuilder {
    ClassBuilder::new("Poop")
        .initializer(|ctx| {
            ctx.set_field("smell", "smell")?;
            ctx.set_shared("answer", "yes")?;
            Ok(RValue::Nil)
        })
        .method("do_you_smell?", |ctx| {
            let smell = ctx.field("smell")?.to_display();
            Ok(RString::from("do you ")
                .concat(&smell)
                .concat(&"? ".into())
                .into())
        })
        .method("answer", |ctx| ctx.shared("answer"))
}

fn counter_class() -> ClassBuilder {
    ClassBuilder::new("Counter")
        .shared_slot("x", 0)
        .method("set_x", |ctx| {
            let value = ctx.args()[0].clone();
            ctx.set_shared("x", value)?;
            Ok(RValue::Nil)
        })
        .method("x", |ctx| ctx.shared("x"))
        .method("set_f", |ctx| {
            ctx.set_field("f", ctx.args()[0].clone())?;
            Ok(RValue::Nil)
        })
        .method("f", |ctx| ctx.field("f"))
}

#[test]
fn poop_instances_share_their_answer() -> Result<()> {
    let mut vm = RookVm::default();
    vm.define_class(poop_class())?;

    let p1 = vm.construct("Poop", &[])?;
    let p2 = vm.construct("Poop", &[])?;

    for p in [&p1, &p2] {
        assert_eq!(vm.dispatch(p, "answer", &[])?, RValue::from("yes"));
        assert_eq!(vm.dispatch(p, "do_you_smell?", &[])?, RValue::from("do you smell? "));
    }

    assert_eq!(p1.type_name(), "Poop");
    assert_ne!(p1, p2);
    Ok(())
}

#[test]
fn shared_slots_are_visible_to_every_instance() -> Result<()> {
    let mut vm = RookVm::default();
    vm.define_class(counter_class())?;

    let i1 = vm.construct("Counter", &[])?;
    let i2 = vm.construct("Counter", &[])?;

    vm.dispatch(&i1, "set_x", &[42.into()])?;
    assert_eq!(vm.dispatch(&i2, "x", &[])?, RValue::from(42));
    Ok(())
}

#[test]
fn instance_fields_are_private_to_their_instance() -> Result<()> {
    let mut vm = RookVm::default();
    vm.define_class(counter_class())?;

    let i1 = vm.construct("Counter", &[])?;
    let i2 = vm.construct("Counter", &[])?;

    vm.dispatch(&i1, "set_f", &["mine".into()])?;
    assert_eq!(vm.dispatch(&i1, "f", &[])?, RValue::from("mine"));
    assert_eq!(vm.dispatch(&i2, "f", &[])?, RValue::Nil);
    Ok(())
}

#[test]
fn independent_vms_dont_share_classes() -> Result<()> {
    let mut vm_a = RookVm::default();
    let mut vm_b = RookVm::default();
    vm_a.define_class(counter_class())?;
    vm_b.define_class(counter_class())?;

    let a = vm_a.construct("Counter", &[])?;
    let b = vm_b.construct("Counter", &[])?;
    vm_a.dispatch(&a, "set_x", &[1.into()])?;

    assert_eq!(vm_b.dispatch(&b, "x", &[])?, RValue::from(0));
    Ok(())
}

#[test]
fn initializers_receive_construction_args() -> Result<()> {
    let mut vm = RookVm::default();
    vm.define_class(
        ClassBuilder::new("Point")
            .initializer(|ctx| match ctx.args() {
                [x, y] => {
                    ctx.set_field("x", x.clone())?;
                    ctx.set_field("y", y.clone())?;
                    Ok(RValue::Nil)
                }
                unexpected => unexpected_args("|Integer, Integer|", unexpected),
            })
            .method("x", |ctx| ctx.field("x")),
    )?;

    let point = vm.construct("Point", &[1.into(), 2.into()])?;
    assert_eq!(vm.dispatch(&point, "x", &[])?, RValue::from(1));
    assert!(vm.construct("Point", &[]).is_err());
    Ok(())
}

#[test]
fn classes_without_initializers_reject_args() {
    let mut vm = RookVm::default();
    vm.define_class(ClassBuilder::new("Empty")).unwrap();

    assert!(vm.construct("Empty", &[]).is_ok());
    let error = vm.construct("Empty", &[1.into()]).unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::UnexpectedType { .. }));
    assert_eq!(
        error.to_string(),
        "Expected |no arguments|, but found Integer"
    );
}

#[test]
fn methods_are_inherited() -> Result<()> {
    let mut vm = RookVm::default();
    let poop = vm.define_class(poop_class())?;
    vm.define_class(
        ClassBuilder::new("BigPoop")
            .superclass(poop)
            .method("size", |_| Ok("big".into())),
    )?;

    let big = vm.construct("BigPoop", &[])?;
    assert_eq!(vm.dispatch(&big, "size", &[])?, RValue::from("big"));
    assert_eq!(vm.dispatch(&big, "answer", &[])?, RValue::from("yes"));
    assert_eq!(vm.dispatch(&big, "to_s", &[])?, RValue::from("#<BigPoop>"));
    Ok(())
}

#[test]
fn reopening_a_class_adds_methods_and_keeps_state() -> Result<()> {
    let mut vm = RookVm::default();
    vm.define_class(counter_class())?;

    let counter = vm.construct("Counter", &[])?;
    vm.dispatch(&counter, "set_x", &[7.into()])?;

    vm.define_class(
        ClassBuilder::new("Counter")
            .shared_slot("x", 100)
            .method("double_x", |ctx| {
                let x = ctx.shared("x")?;
                ctx.vm.dispatch(&x, "+", &[x.clone()])
            }),
    )?;

    assert_eq!(vm.dispatch(&counter, "double_x", &[])?, RValue::from(14));
    Ok(())
}

#[test]
fn builtin_classes_can_be_reopened() -> Result<()> {
    let mut vm = RookVm::default();
    vm.define_class(ClassBuilder::new("Map").method("first_key", |ctx| {
        let instance = ctx.instance().clone();
        let keys = ctx.vm.dispatch(&instance, "keys", &[])?;
        ctx.vm.dispatch(&keys, "first", &[])
    }))?;

    let map = vm.construct("Map", &[])?;
    vm.dispatch(&map, "[]=", &["k".into(), "v".into()])?;
    assert_eq!(vm.dispatch(&map, "first_key", &[])?, RValue::from("k"));
    Ok(())
}

#[test]
fn reading_an_undeclared_shared_slot_fails() {
    let mut vm = RookVm::default();
    vm.define_class(ClassBuilder::new("Quiet").method("answer", |ctx| ctx.shared("answer")))
        .unwrap();

    let quiet = vm.construct("Quiet", &[]).unwrap();
    let error = vm.dispatch(&quiet, "answer", &[]).unwrap_err();
    assert!(matches!(
        error.kind(),
        ErrorKind::UninitializedSharedSlot { class, slot } if *class == "Quiet" && *slot == "answer"
    ));
}

#[test]
fn functions_are_called_by_name() -> Result<()> {
    let mut vm = RookVm::default();
    vm.define_function("method!", |ctx| match ctx.args() {
        [x] => Ok(x.clone()),
        unexpected => unexpected_args("|Object|", unexpected),
    });

    assert_eq!(vm.call_function("method!", &["var".into()])?, RValue::from("var"));
    assert!(vm.has_function("method!"));
    Ok(())
}
