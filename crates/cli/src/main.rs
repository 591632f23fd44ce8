mod boot;

use anyhow::{Result, bail};
use rook_runtime::{Error, prelude::*};
use std::{env, iter, process::ExitCode};

#[global_allocator]
static ALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn help_string() -> String {
    format!(
        "{version}

USAGE:
    rook [FLAGS] [<args>...]

FLAGS:
    -B, --backtrace   Print the error trace after an unhandled error
    -v, --version     Prints version information
    -h, --help        Prints help information

ARGS:
    <args>...    Arguments to pass into the boot program
",
        version = version_string()
    )
}

fn version_string() -> String {
    format!("Rook {}", env!("CARGO_PKG_VERSION"))
}

#[derive(Debug, Default)]
struct RookArgs {
    help: bool,
    version: bool,
    backtrace: bool,
    program_args: Vec<String>,
}

fn parse_arguments() -> Result<RookArgs> {
    let mut args = pico_args::Arguments::from_env();

    let help = args.contains(["-h", "--help"]);
    let version = args.contains(["-v", "--version"]);
    let backtrace = args.contains(["-B", "--backtrace"]);

    let mut program_args = Vec::new();
    for arg in args.finish() {
        let Ok(arg) = arg.into_string() else {
            bail!("Arguments must be valid UTF-8");
        };
        if arg.starts_with('-') {
            bail!("Unsupported argument: {arg}");
        }
        program_args.push(arg);
    }

    Ok(RookArgs {
        help,
        version,
        backtrace,
        program_args,
    })
}

// Writes an unhandled error to the VM's stderr
fn report_error(vm: &RookVm, error: &Error, backtrace: bool) -> rook_runtime::Result<()> {
    // Anything the program printed should appear before the error
    vm.stdout().flush()?;

    let stderr = vm.stderr();
    stderr.write_line(&error.to_string())?;
    if backtrace {
        for frame in error.trace() {
            stderr.write_line(&format!("    from {frame}"))?;
        }
    }
    stderr.flush()
}

fn main() -> Result<ExitCode> {
    let args = match parse_arguments() {
        Ok(args) => args,
        Err(error) => {
            bail!("{}\n\n{}", help_string(), error);
        }
    };

    if args.help {
        println!("{}", help_string());
        return Ok(ExitCode::SUCCESS);
    }

    if args.version {
        println!("{}", version_string());
        return Ok(ExitCode::SUCCESS);
    }

    let program_name = env::args().next().unwrap_or_else(|| "rook".into());
    let mut vm = RookVm::with_settings(RookVmSettings {
        args: iter::once(program_name).chain(args.program_args).collect(),
        ..Default::default()
    });

    match boot::run(&mut vm) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(error) => {
            if let Err(report_failure) = report_error(&vm, &error, args.backtrace) {
                bail!("{error} (failed to write to stderr: {report_failure})");
            }
            Ok(ExitCode::FAILURE)
        }
    }
}
