use crate::{Result, runtime_error};

/// A stream that the runtime can read from and write to
///
/// The runtime's standard streams are provided as `RookFile`s via [RookVmSettings], which allows
/// them to be replaced, e.g. when capturing output in tests. Anything implementing both
/// [RookRead] and [RookWrite] is a `RookFile`.
///
/// [RookVmSettings]: crate::RookVmSettings
pub trait RookFile: RookRead + RookWrite {}

impl<T: RookRead + RookWrite + ?Sized> RookFile for T {}

/// The read operations of a [RookFile]
pub trait RookRead {
    /// Reads up to `count` bytes
    ///
    /// Fewer than `count` bytes are only returned when the end of the stream has been reached.
    fn read_bytes(&self, _count: usize) -> Result<Vec<u8>> {
        runtime_error!("unsupported for this file type")
    }
}

/// The write operations of a [RookFile]
pub trait RookWrite {
    /// Writes text to the file, and appends a newline
    fn write_line(&self, _text: &str) -> Result<()> {
        runtime_error!("unsupported for this file type")
    }

    /// Flushes any remaining buffered output
    fn flush(&self) -> Result<()> {
        runtime_error!("unsupported for this file type")
    }
}
