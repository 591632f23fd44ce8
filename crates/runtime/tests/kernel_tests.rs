use rook_runtime::{ErrorKind, Result, Unavailable, prelude::*};
use rook_test_utils::{OutputCapture, make_vm_with_io, string_list};

#[test]
fn puts_writes_display_forms_as_lines() -> Result<()> {
    let (mut vm, output) = OutputCapture::make_vm_with_output_capture();

    vm.call_function("puts", &["a = ".into()])?;
    vm.call_function("puts", &[1.into(), true.into(), RValue::Nil])?;
    vm.call_function("puts", &[])?;

    assert_eq!(output.captured_output().as_str(), "a = \n1\ntrue\n\n\n");
    Ok(())
}

#[test]
fn read_returns_the_requested_number_of_bytes() -> Result<()> {
    let (mut vm, _, _) = make_vm_with_io("xyz", &[]);

    assert_eq!(vm.call_function("read", &[1.into()])?, RValue::from("x"));
    assert_eq!(vm.call_function("read", &[10.into()])?, RValue::from("yz"));
    assert_eq!(vm.call_function("read", &[1.into()])?, RValue::from(""));
    assert!(vm.call_function("read", &[(-1).into()]).is_err());
    Ok(())
}

#[test]
fn huge_reads_at_the_end_of_stdin_return_an_empty_string() -> Result<()> {
    let (mut vm, _, _) = make_vm_with_io("", &[]);

    let result = vm.call_function("read", &[RValue::Int(i64::MAX)])?;
    assert_eq!(result, RValue::from(""));
    Ok(())
}

#[test]
fn args_are_available_as_a_list() -> Result<()> {
    let (mut vm, _, _) = make_vm_with_io("", &["rook", "foo"]);

    let args = vm.call_function("args", &[])?;
    assert_eq!(args, string_list(&["rook", "foo"]));
    assert_eq!(vm.dispatch(&args, "last", &[])?, RValue::from("foo"));
    Ok(())
}

#[test]
fn raise_produces_a_user_raised_error() {
    let mut vm = RookVm::default();

    let error = vm
        .call_function("raise", &["This is not so exceptional".into()])
        .unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::UserRaised(_)));
    assert_eq!(error.to_string(), "This is not so exceptional");
}

#[test]
fn unavailable_streams_fail() {
    let mut vm = RookVm::with_settings(RookVmSettings {
        stdout: make_ptr!(Unavailable::stdout()),
        ..Default::default()
    });

    let error = vm.call_function("puts", &["x".into()]).unwrap_err();
    assert_eq!(error.to_string(), "stdout is unavailable");
}
