use super::map_io_err;
use crate::{Result, RookRead, RookWrite, runtime_error};
use std::io::{self, Read, Write};

/// The process's stdin
#[derive(Default)]
pub struct SystemStdin;

/// The process's stdout
#[derive(Default)]
pub struct SystemStdout;

/// The process's stderr
#[derive(Default)]
pub struct SystemStderr;

impl RookWrite for SystemStdin {}
impl RookRead for SystemStdin {
    fn read_bytes(&self, count: usize) -> Result<Vec<u8>> {
        read_up_to(io::stdin().lock(), count)
    }
}

impl RookRead for SystemStdout {}
impl RookWrite for SystemStdout {
    fn write_line(&self, text: &str) -> Result<()> {
        write_line(io::stdout().lock(), text)
    }

    fn flush(&self) -> Result<()> {
        io::stdout().flush().map_err(map_io_err)
    }
}

impl RookRead for SystemStderr {}
impl RookWrite for SystemStderr {
    fn write_line(&self, text: &str) -> Result<()> {
        write_line(io::stderr().lock(), text)
    }

    fn flush(&self) -> Result<()> {
        io::stderr().flush().map_err(map_io_err)
    }
}

/// A standard stream that has been withheld from the runtime
///
/// Every read or write fails with `<stream> is unavailable`.
pub struct Unavailable {
    stream: &'static str,
}

impl Unavailable {
    /// An unavailable stdin
    pub fn stdin() -> Self {
        Self { stream: "stdin" }
    }

    /// An unavailable stdout
    pub fn stdout() -> Self {
        Self { stream: "stdout" }
    }

    /// An unavailable stderr
    pub fn stderr() -> Self {
        Self { stream: "stderr" }
    }

    fn fail<T>(&self) -> Result<T> {
        runtime_error!("{} is unavailable", self.stream)
    }
}

impl RookRead for Unavailable {
    fn read_bytes(&self, _count: usize) -> Result<Vec<u8>> {
        self.fail()
    }
}

impl RookWrite for Unavailable {
    fn write_line(&self, _text: &str) -> Result<()> {
        self.fail()
    }

    fn flush(&self) -> Result<()> {
        self.fail()
    }
}

// The buffer grows with the input, so a huge count on a short stream stays cheap
fn read_up_to(reader: impl Read, count: usize) -> Result<Vec<u8>> {
    let mut result = Vec::new();
    let limit = u64::try_from(count).unwrap_or(u64::MAX);
    reader
        .take(limit)
        .read_to_end(&mut result)
        .map_err(map_io_err)?;
    Ok(result)
}

fn write_line(mut handle: impl Write, text: &str) -> Result<()> {
    writeln!(handle, "{text}").map_err(map_io_err)
}
