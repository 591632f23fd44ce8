//! The kernel's free functions, available to every program

use crate::{registry::FunctionRegistry, prelude::*};

/// Registers the kernel functions
///
/// - `puts(values...)`: writes each value's display form to stdout, followed by a newline.
/// - `raise(message)`: aborts the current call chain with a user-raised error.
/// - `read(count)`: reads up to `count` bytes from stdin, returning them as a String.
/// - `args()`: returns the process arguments as a List of Strings.
pub fn register(functions: &mut FunctionRegistry) {
    functions.define("puts", |ctx| {
        let stdout = ctx.vm.stdout().clone();
        match ctx.args() {
            [] => stdout.write_line("")?,
            args => {
                for arg in args {
                    stdout.write_line(&arg.to_display())?;
                }
            }
        }
        Ok(RValue::Nil)
    });

    functions.define("raise", |ctx| match ctx.args() {
        [message] => raise(message.to_display()),
        unexpected => unexpected_args("|String|", unexpected),
    });

    functions.define("read", |ctx| match ctx.args() {
        [RValue::Int(count)] => match usize::try_from(*count) {
            Ok(count) => {
                let bytes = ctx.vm.stdin().read_bytes(count)?;
                Ok(String::from_utf8_lossy(&bytes).into_owned().into())
            }
            Err(_) => runtime_error!("read: expected a non-negative count, found {count}"),
        },
        unexpected => unexpected_args("|Integer|", unexpected),
    });

    functions.define("args", |ctx| match ctx.args() {
        [] => {
            let args = ctx
                .vm
                .args()
                .iter()
                .map(|arg| RValue::from(arg.as_str()))
                .collect();
            Ok(RList::with_data(args).into())
        }
        unexpected => unexpected_args("||", unexpected),
    });
}
