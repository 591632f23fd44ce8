//! The boot program, a smoke test that drives the runtime from end to end
//!
//! The program slices and concatenates strings, reads from stdin, calls a free function, defines
//! a class with instance and shared state, and then finishes by raising an error.

use rook_runtime::{Result, prelude::*};

/// Runs the boot program
///
/// The program always ends by raising an error, which is returned to the caller.
pub fn run(vm: &mut RookVm) -> Result<()> {
    // a = "ohaie"[0, 2] + "aie".to_s + 1.to_s + true.to_s
    let mut a = vm.dispatch(&"ohaie".into(), "[]", &[0.into(), 2.into()])?;
    for value in [RValue::from("aie"), 1.into(), true.into()] {
        let s = vm.dispatch(&value, "to_s", &[])?;
        a = vm.dispatch(&a, "+", &[s])?;
    }

    if a.is_truthy() {
        let class = vm.dispatch(&a, "class", &[])?;
        let class_name = vm.dispatch(&class, "name", &[])?;
        puts(vm, "a is a ", &class_name)?;
        puts(vm, "a = ", &a)?;
    }

    let args = vm.call_function("args", &[])?;
    let program_name = vm.dispatch(&args, "last", &[])?;
    puts(vm, "prog name: ", &program_name)?;

    vm.call_function("puts", &["type a key:".into()])?;
    let typed = vm.call_function("read", &[1.into()])?;
    puts(vm, "you typed: ", &typed)?;

    vm.define_function("method!", |ctx| match ctx.args() {
        [x] => Ok(x.clone()),
        unexpected => unexpected_args("|Object|", unexpected),
    });
    let returned = vm.call_function("method!", &["var".into()])?;
    puts(vm, "method! returned: ", &returned)?;

    let poop = RValue::from(vm.define_class(poop_class())?);
    let p = vm.dispatch(&poop, "new", &[])?;
    let smell = vm.dispatch(&p, "do_you_smell?", &[])?;
    let answer = vm.dispatch(&p, "answer", &[])?;
    let line = vm.dispatch(&smell, "+", &[answer])?;
    vm.call_function("puts", &[line])?;

    vm.call_function("raise", &["This is not so exceptional".into()])?;
    Ok(())
}

fn poop_class() -> ClassBuilder {
    ClassBuilder::new("Poop")
        .initializer(|ctx| {
            ctx.set_field("smell", "smell")?;
            ctx.set_shared("answer", "yes")?;
            Ok(RValue::Nil)
        })
        .method("do_you_smell?", |ctx| {
            let smell = ctx.field("smell")?;
            let question = ctx.vm.dispatch(&"do you ".into(), "+", &[smell])?;
            ctx.vm.dispatch(&question, "+", &["? ".into()])
        })
        .method("answer", |ctx| ctx.shared("answer"))
}

// Prints the prefix followed by the value, which must already be a String
fn puts(vm: &mut RookVm, prefix: &str, value: &RValue) -> Result<()> {
    let line = vm.dispatch(&prefix.into(), "+", &[value.clone()])?;
    vm.call_function("puts", &[line])?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rook_runtime::ErrorKind;
    use rook_test_utils::make_vm_with_io;

    #[test]
    fn boot_program_output() {
        let (mut vm, stdout, _) = make_vm_with_io("x", &["rook", "foo"]);

        let error = run(&mut vm).unwrap_err();

        assert!(matches!(error.kind(), ErrorKind::UserRaised(_)));
        assert_eq!(error.to_string(), "This is not so exceptional");
        assert_eq!(
            stdout.captured_output().as_str(),
            "\
a is a String
a = ohaie1true
prog name: foo
type a key:
you typed: x
method! returned: var
do you smell? yes
"
        );
    }

    #[test]
    fn the_program_name_is_used_without_extra_args() {
        let (mut vm, stdout, _) = make_vm_with_io("", &["rook"]);

        assert!(run(&mut vm).is_err());
        let output = stdout.captured_output();
        assert!(output.contains("prog name: rook\n"));
        assert!(output.contains("you typed: \n"));
    }
}
