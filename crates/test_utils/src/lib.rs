//! Testing utilities for Rook crates

#![warn(missing_docs)]

mod input_feed;
mod output_capture;
mod type_helpers;

pub use input_feed::InputFeed;
pub use output_capture::{OutputCapture, make_vm_with_io};
pub use type_helpers::*;
