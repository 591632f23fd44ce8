mod file;
mod stdio;

pub use self::{
    file::{RookFile, RookRead, RookWrite},
    stdio::{SystemStderr, SystemStdin, SystemStdout, Unavailable},
};

use crate::Error;

/// Converts an I/O error into a runtime error
pub fn map_io_err(e: std::io::Error) -> Error {
    e.to_string().into()
}
